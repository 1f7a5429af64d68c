#![allow(clippy::must_use_candidate)]

pub mod cleanup;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod transcription;

use serde::Deserialize;

pub use cleanup::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use transcription::*;

/// Top-level Cleanvoice configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Transcription upstream configuration
    #[serde(default)]
    pub transcription: TranscriptionConfig,
    /// Cleanup upstream configuration
    #[serde(default)]
    pub cleanup: CleanupConfig,
}
