//! CLI arguments

use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "lyricsd")]
#[command(about = "Lyrics fetch service: song page URL in, lyrics JSON out")]
#[command(version)]
pub struct Opts {
    /// Listening address for the HTTP API.
    #[clap(long, default_value = "0.0.0.0", env = "LYRICSD_HOST")]
    pub host: String,

    /// Listening port for the HTTP API.
    #[clap(short, long, default_value = "3000", env = "LYRICSD_PORT")]
    pub port: u16,

    /// Timeout in seconds for the outbound song page request. 0 disables it.
    #[clap(long, default_value = "30", env = "LYRICSD_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: u64,

    /// Log level: error, warn, info, debug, trace
    #[clap(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[clap(long)]
    pub utc: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Opts {
    /// Outbound request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
