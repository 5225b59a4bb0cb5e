use clap::Args;
use std::path::PathBuf;

#[derive(Clone, Debug, Args)]
pub struct Config {
    #[command(flatten)]
    pub api: ApiConfig,

    #[command(flatten)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ApiConfig {
    /// Base URL of the MediaDesk backend API
    #[arg(long, env = "MEDIADESK_API_BASE", default_value = "http://localhost:5058/api")]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "MEDIADESK_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct SessionConfig {
    /// Path to the persisted session file
    #[arg(long, env = "MEDIADESK_SESSION_FILE", default_value = ".mediadesk-session.json")]
    pub session_file: PathBuf,
}
