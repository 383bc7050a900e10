// Configuration constants for the client

use std::path::PathBuf;

use speech_core::{DEFAULT_CHARS_PER_SEC, DEFAULT_MAX_CHUNK_CHARS};

/// Maximum prompt length forwarded to skybox generation, in characters.
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 500;

/// JPEG quality used when re-encoding panorama snapshots for upload.
pub const DEFAULT_JPEG_QUALITY: u8 = 50;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub gateway_url: String,
    pub stream_url: String,
    pub assets_dir: PathBuf,
    pub max_chunk_chars: usize,
    pub chars_per_sec: f32,
    pub max_prompt_chars: usize,
    pub jpeg_quality: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://localhost:8000".to_string(),
            stream_url: "ws://localhost:8000/ws/skybox-updates/".to_string(),
            assets_dir: PathBuf::from("assets"),
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
            chars_per_sec: DEFAULT_CHARS_PER_SEC,
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let gateway_url = std::env::var("GATEWAY_URL").unwrap_or(defaults.gateway_url);

        let stream_url = std::env::var("SKYBOX_STREAM_URL").unwrap_or(defaults.stream_url);

        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let max_chunk_chars = std::env::var("MAX_CHUNK_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_chunk_chars);

        let chars_per_sec = std::env::var("CHARS_PER_SEC")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.chars_per_sec);

        let max_prompt_chars = std::env::var("MAX_PROMPT_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_prompt_chars);

        let jpeg_quality = std::env::var("JPEG_QUALITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.jpeg_quality);

        Self {
            gateway_url,
            stream_url,
            assets_dir,
            max_chunk_chars,
            chars_per_sec,
            max_prompt_chars,
            jpeg_quality,
        }
    }
}
