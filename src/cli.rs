use std::path::PathBuf;

use clap::Parser;

/// EduClipsAI sign-in screen for the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "educlips-auth")]
#[command(author = "EduClipsAI")]
#[command(version)]
#[command(about = "Terminal sign-in screen with a live clock and testimonial carousel", long_about = None)]
pub struct Cli {
    /// Language tag used for the date readout (e.g. en-GB, de-DE).
    /// Overrides the LC_ALL / LC_TIME / LANG probe.
    #[arg(long, value_name = "TAG", env = "EDUCLIPS_LOCALE")]
    pub locale: Option<String>,

    /// Freeze the clock at an RFC 3339 instant (e.g. 2024-06-03T09:05:07+01:00).
    /// A value that does not parse shows "Invalid Date".
    #[arg(long, value_name = "RFC3339")]
    pub frozen_at: Option<String>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read config.toml and theme.toml from this directory
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Write default config.toml and theme.toml if they are missing, then exit
    #[arg(long, default_value_t = false)]
    pub write_default_config: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
