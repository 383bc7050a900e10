pub mod config;
pub mod error;
pub mod events;
pub mod generate;
pub mod listener;
pub mod sink;
pub mod textures;
pub mod voice;

pub use config::ClientConfig;
pub use error::ClientError;
