// ----------------------------------------------------------------------------
// Copyright (c) 2025 LeoxTec https://leoxtec.com.
// Licensed under the MIT License.
// ----------------------------------------------------------------------------

//!
//! Datapath log severities and logger setup
//!
//! Severities are ordinal, 1 is the most severe. A configured level admits
//! every message at that level or below it.
//!
use log::LevelFilter;

pub const LOG_TIME_FMT: &str = "%H:%M:%S.%3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Emergency = 1,
    Alert = 2,
    Critical = 3,
    Error = 4,
    Warning = 5,
    Notice = 6,
    Information = 7,
    Debug = 8,
}

pub const LOG_SEVERITIES: [LogSeverity; 8] = [
    LogSeverity::Emergency,
    LogSeverity::Alert,
    LogSeverity::Critical,
    LogSeverity::Error,
    LogSeverity::Warning,
    LogSeverity::Notice,
    LogSeverity::Information,
    LogSeverity::Debug,
];

/// Default level used when `-v` is not given
pub const LOG_LEVEL_DEFAULT: u32 = LogSeverity::Error as u32;
/// Highest defined level
pub const LOG_LEVEL_MAX: u32 = LogSeverity::Debug as u32;

impl LogSeverity {
    pub fn from_level(level: u32) -> Option<Self> {
        LOG_SEVERITIES.iter().copied().find(|s| *s as u32 == level)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LogSeverity::Emergency => "EMERGENCY",
            LogSeverity::Alert => "ALERT",
            LogSeverity::Critical => "CRITICAL",
            LogSeverity::Error => "ERROR",
            LogSeverity::Warning => "WARNING",
            LogSeverity::Notice => "NOTICE",
            LogSeverity::Information => "INFORMATION",
            LogSeverity::Debug => "DEBUG",
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogSeverity::Emergency
            | LogSeverity::Alert
            | LogSeverity::Critical
            | LogSeverity::Error => LevelFilter::Error,
            LogSeverity::Warning => LevelFilter::Warn,
            LogSeverity::Notice | LogSeverity::Information => LevelFilter::Info,
            LogSeverity::Debug => LevelFilter::Debug,
        }
    }
}

/// Install the console logger filtered by the given datapath log level.
/// Levels outside the table fall back to the default level.
pub fn log_init(level: u32) -> anyhow::Result<()> {
    let severity = LogSeverity::from_level(level).unwrap_or(LogSeverity::Error);
    pretty_env_logger::formatted_builder()
        .filter_level(severity.level_filter())
        .format_timestamp_secs()
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install logger: {}", err))?;
    Ok(())
}
