//! Server configuration from command-line flags and environment

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve a directory of EPUB books over HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "shelf-server", version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "SHELF_ADDR", default_value = "0.0.0.0:10005")]
    pub addr: SocketAddr,

    /// Directory holding the .epub files
    #[arg(long, env = "SHELF_DIR", default_value = "./")]
    pub dir: PathBuf,

    /// Allowed CORS origins: comma-separated list, or "*" for any
    #[arg(long, env = "SHELF_CORS_ORIGINS")]
    pub cors_origins: Option<String>,
}

impl Config {
    /// Configuration serving `dir` with every other setting at its default
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 10005)),
            dir: dir.into(),
            cors_origins: None,
        }
    }
}
