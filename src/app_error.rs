// ----------------------------------------------------------------------------
// Copyright (c) 2025 LeoxTec https://leoxtec.com.
// Licensed under the MIT License.
// ----------------------------------------------------------------------------

//!
//! Errors raised while parsing application arguments
//!
//!
use std::fmt;
use thiserror::Error;

/// Application options recognized on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgOption {
    PortMask,
    LogLevel,
    MaxFrameSize,
    StatsInterval,
    StatsCore,
}

impl ArgOption {
    pub fn flag(&self) -> &'static str {
        match self {
            ArgOption::PortMask => "-p",
            ArgOption::LogLevel => "-v",
            ArgOption::MaxFrameSize => "-J",
            ArgOption::StatsInterval => "--stats_int",
            ArgOption::StatsCore => "--stats_core",
        }
    }
}

impl fmt::Display for ArgOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Why a single option value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("value is empty")]
    Empty,

    #[error("'{value}' is not a base {radix} number")]
    Malformed { value: String, radix: u32 },

    #[error("{value} is outside of {min}..={max}")]
    OutOfRange { value: String, min: u64, max: u64 },
}

/// Coarse classification of argument failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgErrorKind {
    MissingRequiredArgument,
    MalformedNumeric,
    OutOfRange,
    UnknownOption,
    // Not a failure, usage was asked for explicitly
    HelpRequested,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("Option '{0}' requires an argument")]
    MissingRequiredArgument(String),

    #[error("Invalid option '{0}'")]
    UnknownOption(String),

    // malformed option string other than an unknown flag
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid value '{value}' specified for '{option}'")]
    InvalidValue {
        option: ArgOption,
        value: String,
        #[source]
        cause: ValueError,
    },

    #[error("Usage requested")]
    HelpRequested,
}

impl ArgError {
    pub fn invalid_value(option: ArgOption, value: &str, cause: ValueError) -> Self {
        ArgError::InvalidValue {
            option,
            value: value.to_string(),
            cause,
        }
    }

    pub fn kind(&self) -> ArgErrorKind {
        match self {
            ArgError::MissingRequiredArgument(_) => ArgErrorKind::MissingRequiredArgument,
            ArgError::UnknownOption(_) | ArgError::InvalidArguments(_) => {
                ArgErrorKind::UnknownOption
            }
            ArgError::InvalidValue { cause, .. } => match cause {
                ValueError::OutOfRange { .. } => ArgErrorKind::OutOfRange,
                ValueError::Empty | ValueError::Malformed { .. } => {
                    ArgErrorKind::MalformedNumeric
                }
            },
            ArgError::HelpRequested => ArgErrorKind::HelpRequested,
        }
    }

    /// Option the error relates to, if it was a recognized one
    pub fn option(&self) -> Option<ArgOption> {
        match self {
            ArgError::InvalidValue { option, .. } => Some(*option),
            _ => None,
        }
    }

    /// Fatal errors stop the process under the legacy policy. Only a bad
    /// frame size is handed back to the caller.
    pub fn is_fatal(&self) -> bool {
        match self {
            ArgError::InvalidValue { option, .. } => *option != ArgOption::MaxFrameSize,
            ArgError::HelpRequested => false,
            ArgError::MissingRequiredArgument(_)
            | ArgError::UnknownOption(_)
            | ArgError::InvalidArguments(_) => true,
        }
    }

    /// Message with the value-level cause appended
    pub fn describe(&self) -> String {
        match self {
            ArgError::InvalidValue { cause, .. } => format!("{self}: {cause}"),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_value_cause() {
        let err = ArgError::invalid_value(
            ArgOption::LogLevel,
            "9",
            ValueError::OutOfRange { value: "9".into(), min: 1, max: 8 },
        );
        assert_eq!(err.kind(), ArgErrorKind::OutOfRange);
        assert_eq!(err.option(), Some(ArgOption::LogLevel));

        let err = ArgError::invalid_value(
            ArgOption::PortMask,
            "zz",
            ValueError::Malformed { value: "zz".into(), radix: 16 },
        );
        assert_eq!(err.kind(), ArgErrorKind::MalformedNumeric);
        assert_eq!(
            ArgError::invalid_value(ArgOption::PortMask, "", ValueError::Empty).kind(),
            ArgErrorKind::MalformedNumeric
        );
    }

    #[test]
    fn only_frame_size_is_recoverable() {
        let frame = ArgError::invalid_value(ArgOption::MaxFrameSize, "0", ValueError::Empty);
        assert!(!frame.is_fatal());
        assert!(ArgError::invalid_value(ArgOption::PortMask, "", ValueError::Empty).is_fatal());
        assert!(ArgError::invalid_value(ArgOption::LogLevel, "", ValueError::Empty).is_fatal());
        assert!(ArgError::UnknownOption("--bogus".into()).is_fatal());
        assert!(ArgError::MissingRequiredArgument("-v".into()).is_fatal());
        assert!(ArgError::InvalidArguments("-h".into()).is_fatal());
        assert!(!ArgError::HelpRequested.is_fatal());
    }

    #[test]
    fn describe_includes_cause() {
        let err = ArgError::invalid_value(
            ArgOption::MaxFrameSize,
            "0",
            ValueError::OutOfRange { value: "0".into(), min: 1, max: u32::MAX as u64 },
        );
        assert_eq!(
            err.describe(),
            "Invalid value '0' specified for '-J': 0 is outside of 1..=4294967295"
        );
        assert_eq!(
            ArgError::UnknownOption("--bogus".into()).describe(),
            "Invalid option '--bogus'"
        );
    }
}
