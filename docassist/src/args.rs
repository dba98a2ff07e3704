use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Default configuration file, used only when it exists
pub const DEFAULT_CONFIG_PATH: &str = "docassist.toml";

/// Doctor assistant backend
#[derive(Debug, Parser)]
#[command(
    name = "docassist",
    about = "Consultation transcription, clinical analysis and report summarization"
)]
pub struct Args {
    /// Path to configuration file
    ///
    /// Without one, `docassist.toml` is read if present, otherwise the
    /// built-in configuration is used.
    #[arg(short, long, env = "DOCASSIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "DOCASSIST_LISTEN")]
    pub listen: Option<SocketAddr>,
}
