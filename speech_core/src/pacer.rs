//! Paced dispatch of speech chunks to a synthesis sink.
//!
//! The pacer estimates how long a chunk takes to play from its length and
//! an assumed reading rate, then sleeps that long before the next
//! dispatch. This is an open-loop heuristic so consecutive utterances do
//! not overlap; it is not a real audio-completion signal and gives no
//! timing guarantee.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{chunk_sentences, split_sentences};

/// Assumed reading rate used to estimate chunk playback time.
pub const DEFAULT_CHARS_PER_SEC: f32 = 12.5;

/// Default upper bound on chunk length, in characters.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 200;

/// A speech synthesis sink. Dispatch is fire-and-forget: `speak` returns
/// once the chunk has been handed off, not when playback finishes.
#[async_trait]
pub trait SpeechSink: Send + Sync {
    async fn speak(&self, text: &str) -> anyhow::Result<()>;
}

/// Splits reply text into sentence-bounded chunks and feeds them to a
/// [`SpeechSink`] with an estimated playback delay after each dispatch.
pub struct SpeechPacer<S> {
    sink: S,
    max_chunk_chars: usize,
    chars_per_sec: f32,
}

impl<S: SpeechSink> SpeechPacer<S> {
    pub fn new(sink: S) -> Self {
        Self::with_limits(sink, DEFAULT_MAX_CHUNK_CHARS, DEFAULT_CHARS_PER_SEC)
    }

    pub fn with_limits(sink: S, max_chunk_chars: usize, chars_per_sec: f32) -> Self {
        Self {
            sink,
            max_chunk_chars,
            chars_per_sec,
        }
    }

    /// Estimated playback time for one chunk at the assumed reading rate.
    pub fn estimated_delay(&self, chunk: &str) -> Duration {
        Duration::from_secs_f32(chunk.len() as f32 / self.chars_per_sec)
    }

    /// Segment `text` into sentences, regroup them into bounded chunks and
    /// dispatch each chunk in order, sleeping the estimated playback time
    /// after every dispatch.
    pub async fn speak_by_sentence(&self, text: &str) -> anyhow::Result<()> {
        let sentences = split_sentences(text);
        let chunks = chunk_sentences(&sentences, self.max_chunk_chars);

        for chunk in &chunks {
            debug!(len = chunk.len(), "dispatching speech chunk");
            self.sink.speak(chunk).await?;
            tokio::time::sleep(self.estimated_delay(chunk)).await;
        }
        Ok(())
    }
}
