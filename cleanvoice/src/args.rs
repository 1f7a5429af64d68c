use std::path::PathBuf;

use clap::Parser;

/// Cleanvoice dictation relay
#[derive(Debug, Parser)]
#[command(name = "cleanvoice", about = "Relay dictated audio through transcription and grammatical cleanup")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "cleanvoice.toml", env = "CLEANVOICE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CLEANVOICE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter (tracing `EnvFilter` syntax)
    #[arg(long, default_value = "info", env = "CLEANVOICE_LOG")]
    pub log: String,
}
