use std::path::PathBuf;

use clap::Parser;

/// Tool-calling wire-shape probe service
#[derive(Debug, Parser)]
#[command(name = "toolprobe", about = "Compare tool-calling wire shapes across LLM backends")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "toolprobe.toml", env = "TOOLPROBE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "TOOLPROBE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
