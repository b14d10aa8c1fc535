use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use crate::config::{LogConfig, LogFormat};

pub(super) struct LoggerConfig {
    pub format: LoggerFormat,
}

pub(super) enum LoggerFormat {
    Json,
    Text,
}

impl From<&LogConfig> for LoggerConfig {
    fn from(value: &LogConfig) -> Self {
        match value.format {
            LogFormat::Json => Self { format: LoggerFormat::Json },
            LogFormat::Text => Self { format: LoggerFormat::Text },
        }
    }
}

pub(super) fn init_logger(config: LoggerConfig) {
    let builder = SubscriberBuilder::default()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    match config.format {
        LoggerFormat::Json => builder.json().init(),
        LoggerFormat::Text => builder.init(),
    }
}
