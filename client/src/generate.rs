//! Skybox generation control.
//!
//! One generation request may be in flight at a time. The in-flight flag
//! has exactly one writer, this controller; the update listener reports
//! marker sightings over a channel and never touches the flag itself.

use gateway_core::GatewayClient;
use speech_core::truncate_to_last_sentence;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::ClientError;

pub struct GenerateController {
    gateway: GatewayClient,
    max_prompt_chars: usize,
    in_flight: bool,
    updates: mpsc::Receiver<()>,
}

impl GenerateController {
    /// `updates` carries one unit per update-marker sighting on the
    /// skybox stream.
    pub fn new(
        gateway: GatewayClient,
        max_prompt_chars: usize,
        updates: mpsc::Receiver<()>,
    ) -> Self {
        Self {
            gateway,
            max_prompt_chars,
            in_flight: false,
            updates,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Submit a generation request with the prompt clamped to the last
    /// complete sentence. Returns `Ok(false)` without submitting when a
    /// request is already pending. A failed submission clears the flag so
    /// the next attempt is not locked out.
    pub async fn request(&mut self, raw_prompt: &str) -> Result<bool, ClientError> {
        self.drain_updates();
        if self.in_flight {
            debug!("skybox generation already in flight, request ignored");
            return Ok(false);
        }

        let prompt = truncate_to_last_sentence(raw_prompt, self.max_prompt_chars);
        self.in_flight = true;
        if let Err(e) = self.gateway.generate_skybox(&prompt).await {
            self.in_flight = false;
            return Err(ClientError::Backend(e));
        }

        info!("skybox generation requested, waiting for update notification");
        Ok(true)
    }

    /// Suspend until the listener reports the update marker, then clear
    /// the in-flight flag. Returns `false` if the listener side is gone.
    pub async fn wait_for_update(&mut self) -> bool {
        match self.updates.recv().await {
            Some(()) => {
                self.in_flight = false;
                info!("skybox update observed, generation complete");
                true
            }
            None => false,
        }
    }

    fn drain_updates(&mut self) {
        while self.updates.try_recv().is_ok() {
            self.in_flight = false;
        }
    }
}
