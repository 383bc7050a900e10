//! Headless panorama voice client.
//!
//! Wires the skybox update listener, the llama gateway client, and the
//! chunked speech pacer together. Without a headset attached, stdin
//! stands in for the voice pipeline: each line is treated as a completed
//! transcription, `/analyse <version>` as the analyse-scene intent, and
//! `/generate` as the generate button.

use gateway_core::GatewayClient;
use speech_core::SpeechPacer;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use client::config::ClientConfig;
use client::generate::GenerateController;
use client::listener::UpdateListener;
use client::sink::LogSpeechSink;
use client::textures::TextureStore;
use client::voice::{VoiceManager, VoiceResponse};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let _ = dotenv::dotenv();

    let config = ClientConfig::from_env();
    info!(
        gateway = %config.gateway_url,
        stream = %config.stream_url,
        assets = %config.assets_dir.display(),
        "starting panorama client"
    );

    let gateway = GatewayClient::new(&config.gateway_url);

    let mut textures = TextureStore::new(&config.assets_dir);
    if let Err(e) = textures.refresh() {
        // The backend may simply not have generated anything yet.
        warn!("initial texture load failed: {e}");
    }

    // The listener owns the texture store; the generation controller only
    // hears about updates through this channel.
    let (update_tx, update_rx) = mpsc::channel(8);
    let listener = UpdateListener::new(&config.stream_url);
    tokio::spawn(async move {
        let result = listener
            .run(|| {
                if let Err(e) = textures.refresh() {
                    error!("texture refresh failed: {e}");
                }
                if update_tx.try_send(()).is_err() {
                    warn!("update notification dropped");
                }
            })
            .await;
        match result {
            Ok(()) => info!("skybox update listener finished"),
            Err(e) => error!("skybox update listener stopped: {e}"),
        }
    });

    let pacer = SpeechPacer::with_limits(
        LogSpeechSink,
        config.max_chunk_chars,
        config.chars_per_sec,
    );
    let mut manager = VoiceManager::new(
        gateway.clone(),
        pacer,
        &config.assets_dir,
        config.jpeg_quality,
    );
    let mut generator = GenerateController::new(gateway, config.max_prompt_chars, update_rx);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!("ready; type a prompt, '/analyse <version>' or '/generate'");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("/analyse") {
            let version = rest.trim();
            let response = VoiceResponse {
                intent: Some("analyse_scene".to_string()),
                version: (!version.is_empty()).then(|| version.to_string()),
            };
            manager.handle_wake_word();
            manager.handle_full_transcription(line);
            manager.handle_response(&response).await;
            info!("reply: {}", manager.reply_text());
        } else if line == "/generate" {
            // The last reply text doubles as the generation prompt.
            match generator.request(manager.reply_text()).await {
                Ok(true) => info!("generation request sent"),
                Ok(false) => info!("a generation is already in flight"),
                Err(e) => error!("generation request failed: {e}"),
            }
        } else {
            manager.handle_wake_word();
            manager.handle_full_transcription(line);
            manager.handle_response(&VoiceResponse::default()).await;
            info!("reply: {}", manager.reply_text());
        }
    }

    Ok(())
}
