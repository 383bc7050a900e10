//! HTTP client for the panorama backend.
//!
//! Two collaborators live behind one base URL: the llama gateway, which
//! answers chat and scene-analysis prompts, and the pano-gen service,
//! which renders a new skybox panorama. Completion of a generation is
//! signalled out-of-band over the skybox update stream, so
//! [`GatewayClient::generate_skybox`] only submits the request.

use anyhow::{Context, Result};
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Chat / scene-analysis endpoint of the llama gateway.
pub const CHAT_PATH: &str = "/api/llama_gateway/chat/";

/// Skybox generation endpoint of the pano-gen service.
pub const GENERATE_PATH: &str = "/api/pano-gen/generate_with_image/";

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

/// Reply body of the llama gateway chat endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub session_id: Option<String>,
    pub reply: String,
}

#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: String,
    http: reqwest::Client,
}

impl GatewayClient {
    /// Create a client for the backend at `base_url`
    /// (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Send a chat prompt and return the gateway's reply.
    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        let url = format!("{}{}", self.base_url, CHAT_PATH);
        debug!(len = message.len(), "sending chat request");

        let reply = self
            .http
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .with_context(|| format!("failed to reach llama gateway at {url}"))?
            .error_for_status()
            .context("llama gateway returned an error status")?
            .json::<ChatReply>()
            .await
            .context("invalid chat reply body")?;

        Ok(reply)
    }

    /// Send a scene-analysis prompt together with a JPEG snapshot of the
    /// named panorama version. The gateway keeps per-version descriptions,
    /// so the message is annotated with which version the image shows.
    pub async fn analyse_with_image(
        &self,
        message: &str,
        version: &str,
        file_name: &str,
        jpeg: Vec<u8>,
    ) -> Result<ChatReply> {
        let url = format!("{}{}", self.base_url, CHAT_PATH);
        debug!(version, file_name, bytes = jpeg.len(), "sending analyse request");

        let message = format!(
            "{message} you will give response based on the content of the image \
             attached in my current command and mark your response as the \
             description for {version} version, if in our earlier conversation \
             we have discussed about the same version, please overwrite the \
             previous description with this new description."
        );

        let image = multipart::Part::bytes(jpeg)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")
            .context("invalid image mime type")?;
        let form = multipart::Form::new()
            .text("message", message)
            .part("image", image);

        let reply = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("failed to reach llama gateway at {url}"))?
            .error_for_status()
            .context("llama gateway returned an error status")?
            .json::<ChatReply>()
            .await
            .context("invalid analyse reply body")?;

        Ok(reply)
    }

    /// Submit a skybox generation request. The response body carries no
    /// useful payload; the finished panorama is announced on the update
    /// stream instead.
    pub async fn generate_skybox(&self, prompt: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        debug!(len = prompt.len(), "sending skybox generation request");

        self.http
            .post(&url)
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .with_context(|| format!("failed to reach pano-gen at {url}"))?
            .error_for_status()
            .context("pano-gen returned an error status")?;

        Ok(())
    }
}
