//! Speech sinks.

use async_trait::async_trait;
use speech_core::SpeechSink;
use tracing::info;

/// Sink that logs each chunk instead of synthesizing audio. Stands in for
/// the headset TTS speaker when running headless.
pub struct LogSpeechSink;

#[async_trait]
impl SpeechSink for LogSpeechSink {
    async fn speak(&self, text: &str) -> anyhow::Result<()> {
        info!(target: "speech", "{text}");
        Ok(())
    }
}
