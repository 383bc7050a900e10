//! Voice event registry.
//!
//! The voice SDK seam is an explicit observer list: components register
//! typed callbacks for named events and unregister them on teardown. The
//! wake-word event is part of the public surface like every other event;
//! there is no privileged back channel to it.

use crate::voice::VoiceResponse;

type TextHandler = Box<dyn Fn(&str) + Send + Sync>;
type ResponseHandler = Box<dyn Fn(&VoiceResponse) + Send + Sync>;

/// Token returned by a registration, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

#[derive(Default)]
pub struct VoiceEvents {
    next_id: u64,
    partial: Vec<(u64, TextHandler)>,
    full: Vec<(u64, TextHandler)>,
    response: Vec<(u64, ResponseHandler)>,
    wake: Vec<(u64, Box<dyn Fn() + Send + Sync>)>,
}

impl VoiceEvents {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn on_partial_transcription<F>(&mut self, f: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.partial.push((id, Box::new(f)));
        Subscription(id)
    }

    pub fn on_full_transcription<F>(&mut self, f: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.full.push((id, Box::new(f)));
        Subscription(id)
    }

    pub fn on_response<F>(&mut self, f: F) -> Subscription
    where
        F: Fn(&VoiceResponse) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.response.push((id, Box::new(f)));
        Subscription(id)
    }

    pub fn on_wake_word<F>(&mut self, f: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.wake.push((id, Box::new(f)));
        Subscription(id)
    }

    /// Remove a previously registered callback. Unknown tokens are a no-op.
    pub fn unsubscribe(&mut self, sub: Subscription) {
        self.partial.retain(|(id, _)| *id != sub.0);
        self.full.retain(|(id, _)| *id != sub.0);
        self.response.retain(|(id, _)| *id != sub.0);
        self.wake.retain(|(id, _)| *id != sub.0);
    }

    pub fn emit_partial_transcription(&self, text: &str) {
        for (_, f) in &self.partial {
            f(text);
        }
    }

    pub fn emit_full_transcription(&self, text: &str) {
        for (_, f) in &self.full {
            f(text);
        }
    }

    pub fn emit_response(&self, response: &VoiceResponse) {
        for (_, f) in &self.response {
            f(response);
        }
    }

    pub fn emit_wake_word(&self) {
        for (_, f) in &self.wake {
            f();
        }
    }
}
