use std::path::PathBuf;

use thiserror::Error;

/// Client error taxonomy. Every variant is terminal for the operation
/// that produced it; nothing is retried automatically.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("update stream connection failed: {0}")]
    Connect(#[source] tokio_tungstenite::tungstenite::Error),

    #[error("update stream failed mid-receive: {0}")]
    Stream(#[source] tokio_tungstenite::tungstenite::Error),

    #[error("backend request failed: {0}")]
    Backend(#[from] anyhow::Error),

    #[error("failed to load image {}", path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
