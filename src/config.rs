use std::time::Duration;

use clap::Parser;

use crate::app::RenderOptions;
use crate::client::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(name = "gh-activity", about = "Print a GitHub user's recent public activity")]
pub struct Cli {
    /// GitHub username whose public events to show
    pub username: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GH_ACTIVITY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds (client default when unset)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Prefix each line with the event's creation time (UTC)
    #[arg(long)]
    pub timestamps: bool,

    /// Log file path
    #[arg(long, env = "GH_ACTIVITY_LOG_FILE")]
    pub log_file: Option<String>,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            timestamps: self.timestamps,
        }
    }
}
