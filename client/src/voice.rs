//! Voice command handling.
//!
//! The manager consumes voice events in SDK order: a wake word arms it,
//! transcriptions update the pending command while armed, and the parsed
//! response decides where the command goes. Replies come back as text and
//! are read out through the chunked speech pacer.

use std::path::PathBuf;

use gateway_core::GatewayClient;
use speech_core::{SpeechPacer, SpeechSink};
use tracing::{debug, error, warn};

use crate::textures::{
    compress_jpeg, INPUT_PANORAMA_FILE, NEW_PANORAMA_FILE, OLD_PANORAMA_FILE,
};

/// Parsed voice-recognition result: the top intent plus the optional
/// panorama `version` entity. Producing this from the recognizer's wire
/// format is the voice SDK's contract, not ours.
#[derive(Debug, Clone, Default)]
pub struct VoiceResponse {
    pub intent: Option<String>,
    pub version: Option<String>,
}

/// Where a recognized command is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// The wake-word intent itself carries no command.
    Ignore,
    /// Scene analysis of a specific panorama version.
    AnalyseScene {
        version: String,
        image_file: &'static str,
    },
    /// Everything else is a plain chat prompt.
    Chat,
}

/// Decide how to route a parsed voice response. Pure, no side effects.
pub fn route_response(response: &VoiceResponse) -> RouteAction {
    match response.intent.as_deref() {
        Some("wake_word") => RouteAction::Ignore,
        Some("analyse_scene") => match response.version.as_deref() {
            Some(v) if !v.is_empty() => {
                let version = v.to_lowercase();
                let image_file = match version.as_str() {
                    "new" | "current" => NEW_PANORAMA_FILE,
                    "old" | "last" => OLD_PANORAMA_FILE,
                    "original" => INPUT_PANORAMA_FILE,
                    _ => INPUT_PANORAMA_FILE,
                };
                RouteAction::AnalyseScene {
                    version,
                    image_file,
                }
            }
            _ => RouteAction::Chat,
        },
        _ => RouteAction::Chat,
    }
}

pub struct VoiceManager<S> {
    gateway: GatewayClient,
    pacer: SpeechPacer<S>,
    assets_dir: PathBuf,
    jpeg_quality: u8,
    // Set by the wake word, consumed by the next routed response.
    // Only this manager writes it.
    command_ready: bool,
    transcription: String,
    reply_text: String,
}

impl<S: SpeechSink> VoiceManager<S> {
    pub fn new(
        gateway: GatewayClient,
        pacer: SpeechPacer<S>,
        assets_dir: impl Into<PathBuf>,
        jpeg_quality: u8,
    ) -> Self {
        Self {
            gateway,
            pacer,
            assets_dir: assets_dir.into(),
            jpeg_quality,
            command_ready: false,
            transcription: String::new(),
            reply_text: String::new(),
        }
    }

    /// Most recent reply text, or the last error message.
    pub fn reply_text(&self) -> &str {
        &self.reply_text
    }

    pub fn handle_wake_word(&mut self) {
        self.command_ready = true;
    }

    pub fn handle_partial_transcription(&mut self, text: &str) {
        if !self.command_ready {
            return;
        }
        self.transcription = text.to_string();
    }

    pub fn handle_full_transcription(&mut self, text: &str) {
        if !self.command_ready {
            return;
        }
        self.transcription = text.to_string();
    }

    /// Route a parsed voice response and run the resulting backend flow.
    /// On success the reply is stored and spoken; on failure the reply
    /// text becomes an error message and nothing is spoken.
    pub async fn handle_response(&mut self, response: &VoiceResponse) {
        if !self.command_ready {
            debug!("voice response ignored, wake word not seen");
            return;
        }

        let action = route_response(response);
        if action == RouteAction::Ignore {
            // The wake-word response itself; stay armed for the command.
            return;
        }
        self.command_ready = false;

        let prompt = self.transcription.clone();
        let result = match action {
            RouteAction::AnalyseScene {
                version,
                image_file,
            } => {
                self.reply_text = format!("Analysing {} scene...", version.to_uppercase());
                self.analyse_scene(&prompt, &version, image_file).await
            }
            _ => self.gateway.chat(&prompt).await.map(|r| r.reply),
        };

        match result {
            Ok(reply) => {
                self.reply_text = reply.clone();
                if let Err(e) = self.pacer.speak_by_sentence(&reply).await {
                    warn!("speech dispatch failed: {e:#}");
                }
            }
            Err(e) => {
                error!("backend request failed: {e:#}");
                self.reply_text = format!("Error: {e}");
            }
        }
    }

    async fn analyse_scene(
        &self,
        prompt: &str,
        version: &str,
        image_file: &str,
    ) -> anyhow::Result<String> {
        let path = self.assets_dir.join(image_file);
        let jpeg = compress_jpeg(&path, self.jpeg_quality)?;
        let reply = self
            .gateway
            .analyse_with_image(prompt, version, image_file, jpeg)
            .await?;
        Ok(reply.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NullSink;

    #[async_trait]
    impl SpeechSink for NullSink {
        async fn speak(&self, _text: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn manager() -> VoiceManager<NullSink> {
        VoiceManager::new(
            GatewayClient::new("http://localhost:8000"),
            SpeechPacer::new(NullSink),
            "assets",
            50,
        )
    }

    fn response(intent: Option<&str>, version: Option<&str>) -> VoiceResponse {
        VoiceResponse {
            intent: intent.map(str::to_string),
            version: version.map(str::to_string),
        }
    }

    #[test]
    fn wake_word_intent_is_ignored() {
        let r = response(Some("wake_word"), None);
        assert_eq!(route_response(&r), RouteAction::Ignore);
    }

    #[test]
    fn analyse_scene_versions_map_to_image_files() {
        for (version, file) in [
            ("new", NEW_PANORAMA_FILE),
            ("Current", NEW_PANORAMA_FILE),
            ("old", OLD_PANORAMA_FILE),
            ("last", OLD_PANORAMA_FILE),
            ("original", INPUT_PANORAMA_FILE),
            ("something-else", INPUT_PANORAMA_FILE),
        ] {
            let r = response(Some("analyse_scene"), Some(version));
            assert_eq!(
                route_response(&r),
                RouteAction::AnalyseScene {
                    version: version.to_lowercase(),
                    image_file: file,
                },
                "version={version}"
            );
        }
    }

    #[test]
    fn analyse_scene_without_version_falls_back_to_chat() {
        assert_eq!(
            route_response(&response(Some("analyse_scene"), None)),
            RouteAction::Chat
        );
        assert_eq!(
            route_response(&response(Some("analyse_scene"), Some(""))),
            RouteAction::Chat
        );
    }

    #[test]
    fn unknown_or_missing_intent_routes_to_chat() {
        assert_eq!(
            route_response(&response(Some("small_talk"), None)),
            RouteAction::Chat
        );
        assert_eq!(route_response(&response(None, None)), RouteAction::Chat);
    }

    #[test]
    fn transcriptions_are_ignored_until_wake_word() {
        let mut m = manager();
        m.handle_partial_transcription("too early");
        m.handle_full_transcription("still too early");
        assert!(m.transcription.is_empty());

        m.handle_wake_word();
        m.handle_partial_transcription("descr");
        m.handle_full_transcription("describe the scene");
        assert_eq!(m.transcription, "describe the scene");
    }

    #[tokio::test]
    async fn response_without_wake_word_is_dropped() {
        let mut m = manager();
        m.handle_response(&response(None, None)).await;
        // Never armed, so the backend was never called and no reply set.
        assert!(m.reply_text().is_empty());
    }

    #[tokio::test]
    async fn wake_word_response_keeps_the_manager_armed() {
        let mut m = manager();
        m.handle_wake_word();
        m.handle_response(&response(Some("wake_word"), None)).await;
        assert!(m.command_ready);
    }
}
