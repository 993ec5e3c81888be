use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tagstore_gateway::telemetry::LogFormat;
use tagstore_storage::DuplicatePolicy;

pub const LISTEN_ADDR_ENV: &str = "TAGSTORE_LISTEN_ADDR";
pub const DATA_PATH_ENV: &str = "TAGSTORE_DATA_PATH";
pub const SAVE_INTERVAL_ENV: &str = "TAGSTORE_SAVE_INTERVAL_SECS";
pub const REJECT_DUPLICATE_IDS_ENV: &str = "TAGSTORE_REJECT_DUPLICATE_IDS";
pub const LOG_FORMAT_ENV: &str = "TAGSTORE_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tagstore")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Snapshot file loaded at startup and written at shutdown.
    #[arg(long, env = DATA_PATH_ENV)]
    pub data_path: Option<PathBuf>,

    /// Also write the snapshot every N seconds while running.
    #[arg(long, env = SAVE_INTERVAL_ENV, requires = "data_path")]
    pub save_interval_secs: Option<u64>,

    #[arg(long, env = REJECT_DUPLICATE_IDS_ENV, default_value_t = false)]
    pub reject_duplicate_ids: bool,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

impl CLI {
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.reject_duplicate_ids {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Allow
        }
    }

    pub fn save_interval(&self) -> Option<Duration> {
        self.save_interval_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
