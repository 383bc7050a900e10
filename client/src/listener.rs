//! Skybox update listener.
//!
//! Holds one long-lived WebSocket connection to the backend's update
//! stream and watches incoming text frames for the update marker. The
//! listener is deliberately minimal: no reconnect, no backoff, no
//! heartbeat. When the stream closes or fails, it stops.

use futures_util::StreamExt;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::error::ClientError;

/// Literal substring whose presence in a streamed message signals that a
/// new skybox is ready on disk.
pub const UPDATE_MARKER: &str = "Skybox updated";

pub struct UpdateListener {
    url: String,
}

impl UpdateListener {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Connect and run the receive loop until the stream closes or fails.
    ///
    /// `on_update` is invoked once per text frame containing
    /// [`UPDATE_MARKER`]; other frames are ignored. A connection failure
    /// means the listener never starts; a mid-stream failure ends it.
    pub async fn run<F>(self, mut on_update: F) -> Result<(), ClientError>
    where
        F: FnMut(),
    {
        let (mut stream, _) = connect_async(&self.url)
            .await
            .map_err(ClientError::Connect)?;
        info!(url = %self.url, "skybox update stream connected");

        while let Some(frame) = stream.next().await {
            match frame {
                Ok(Message::Text(text)) => {
                    debug!(%text, "update stream message");
                    if text.contains(UPDATE_MARKER) {
                        on_update();
                    }
                }
                Ok(Message::Close(_)) => {
                    info!("update stream closed by server");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("update stream failed: {e}");
                    return Err(ClientError::Stream(e));
                }
            }
        }

        Ok(())
    }
}
