// ----------------------------------------------------------------------------
// Copyright (c) 2025 LeoxTec https://leoxtec.com.
// Licensed under the MIT License.
// ----------------------------------------------------------------------------

//!
//! Datapath application arguments
//!
//! Parses and validates the application options and keeps the resolved
//! configuration. Once parsed, the configuration is only read through its
//! accessors.
//!
//! A malformed port mask, log level or an unknown option stops the process
//! under the legacy policy. A malformed frame size is returned to the caller.
//!
use std::fmt::Write as _;
use std::process::exit;

use serde::{Deserialize, Serialize};

use crate::app_cli::{cli_leading_occurrences, cli_parse, ArgOccurrence, EAL_SEPARATOR};
use crate::app_error::{ArgError, ArgErrorKind, ArgOption, ValueError};
use crate::app_log::{LogSeverity, LOG_LEVEL_DEFAULT, LOG_LEVEL_MAX};
use crate::app_utils::str_skip_leading_ws;

pub const PORTMASK_BASE: u32 = 16;
pub const DECIMAL_BASE: u32 = 10;

/// Ethernet maximum frame length
pub const MAX_FRAME_SIZE_DEFAULT: u32 = 1518;
pub const STATS_INTERVAL_DEFAULT: i32 = 0;
pub const STATS_CORE_DEFAULT: i32 = -1;

pub const EXIT_FAILURE: i32 = 1;

/// Values a configuration starts from before any option is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArgDefaults {
    pub port_mask: u64,
    pub log_level: u32,
    pub max_log_level: u32,
    pub stats_interval: i32,
    pub stats_core: i32,
    pub max_frame_size: u32,
}

impl Default for ArgDefaults {
    fn default() -> Self {
        Self {
            port_mask: 0,
            log_level: LOG_LEVEL_DEFAULT,
            max_log_level: LOG_LEVEL_MAX,
            stats_interval: STATS_INTERVAL_DEFAULT,
            stats_core: STATS_CORE_DEFAULT,
            max_frame_size: MAX_FRAME_SIZE_DEFAULT,
        }
    }
}

/// What happens to errors once usage was printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgFailurePolicy {
    /// Exit on fatal errors and on explicit help, return the rest
    #[default]
    Legacy,
    /// Return every error to the caller
    Recoverable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgConfig {
    port_mask: u64,
    log_level: u32,
    stats_interval: i32,
    stats_core: i32,
    max_frame_size: u32,
    #[serde(skip)]
    max_log_level: u32,
    #[serde(skip)]
    ignored_args: Vec<String>,
}

// Consume digits of the given radix, the whole string must be used
fn parse_unsigned(token: &str, digits: &str, radix: u32) -> Result<u64, ValueError> {
    if token.is_empty() {
        return Err(ValueError::Empty);
    }
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ValueError::Malformed {
            value: token.to_string(),
            radix,
        });
    }
    // only overflow is left at this point
    u64::from_str_radix(digits, radix).map_err(|_| ValueError::OutOfRange {
        value: token.to_string(),
        min: 0,
        max: u64::MAX,
    })
}

// Report values too large for u64 against the caller's range
fn out_of_range_within(err: ValueError, min: u64, max: u64) -> ValueError {
    match err {
        ValueError::OutOfRange { value, .. } => ValueError::OutOfRange { value, min, max },
        other => other,
    }
}

fn parse_decimal(token: &str) -> Result<u64, ValueError> {
    let s = str_skip_leading_ws(token);
    let digits = s.strip_prefix('+').unwrap_or(s);
    parse_unsigned(token, digits, DECIMAL_BASE)
}

/// Parse a hex port mask, `0x` prefix optional.
///
/// Bits are not checked against existing ports, that is left to whoever
/// sets the ports up.
pub fn parse_port_mask(token: &str) -> Result<u64, ValueError> {
    let s = str_skip_leading_ws(token);
    let digits = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(v) => v,
        None => s,
    };
    parse_unsigned(token, digits, PORTMASK_BASE)
}

/// Parse a decimal log level in `1..=max_level`
pub fn parse_log_level(token: &str, max_level: u32) -> Result<u32, ValueError> {
    let level = parse_decimal(token)
        .map_err(|err| out_of_range_within(err, 1, max_level as u64))?;
    if level == 0 || level > max_level as u64 {
        return Err(ValueError::OutOfRange {
            value: level.to_string(),
            min: 1,
            max: max_level as u64,
        });
    }
    Ok(level as u32)
}

/// Parse a nonzero decimal u32. Absent and empty input are both rejected.
pub fn parse_decimal_u32(token: Option<&str>) -> Result<u32, ValueError> {
    let token = match token {
        Some(v) => v,
        None => return Err(ValueError::Empty),
    };
    let num = parse_decimal(token)
        .map_err(|err| out_of_range_within(err, 1, u32::MAX as u64))?;
    if num == 0 || num > u32::MAX as u64 {
        return Err(ValueError::OutOfRange {
            value: num.to_string(),
            min: 1,
            max: u32::MAX as u64,
        });
    }
    Ok(num as u32)
}

/// Permissive integer parse for the stats options.
///
/// Leading whitespace and an optional sign, then as many digits as found.
/// Anything else is ignored and no digits at all yields 0, so `abc` is 0 and
/// `12abc` is 12. Saturates instead of overflowing. Never fails.
pub fn parse_int_permissive(token: &str) -> i32 {
    let s = str_skip_leading_ws(token);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut num: i64 = 0;
    for b in s.bytes().take_while(|b| b.is_ascii_digit()) {
        num = num * 10 + (b - b'0') as i64;
        if num > i32::MAX as i64 + 1 {
            break;
        }
    }
    let num = if negative { -num } else { num };
    num.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl Default for ArgConfig {
    fn default() -> Self {
        Self::new(&ArgDefaults::default())
    }
}

impl ArgConfig {
    pub fn new(defaults: &ArgDefaults) -> Self {
        Self {
            port_mask: defaults.port_mask,
            log_level: defaults.log_level,
            stats_interval: defaults.stats_interval,
            stats_core: defaults.stats_core,
            max_frame_size: defaults.max_frame_size,
            max_log_level: defaults.max_log_level,
            ignored_args: Vec::new(),
        }
    }

    /// Parse application arguments (program name excluded) without printing
    /// or exiting. Options are applied left to right, a repeated option
    /// replaces the earlier value. Nothing is returned on failure.
    ///
    /// When a token cannot be tokenized, the values in front of it are still
    /// checked first and the earliest failure is reported.
    pub fn try_parse_from(
        progname: &str,
        args: &[String],
        defaults: &ArgDefaults,
    ) -> Result<Self, ArgError> {
        let (params, occurrences) = match cli_parse(progname, args) {
            Ok(v) => v,
            Err(err) => {
                let mut config = Self::new(defaults);
                for occurrence in &cli_leading_occurrences(progname, args) {
                    config.apply(occurrence)?;
                }
                return Err(err);
            }
        };
        if params.help {
            return Err(ArgError::HelpRequested);
        }

        let mut config = Self::new(defaults);
        for occurrence in &occurrences {
            config.apply(occurrence)?;
        }
        config.ignored_args = params.extra;
        Ok(config)
    }

    /// Parse application arguments, printing usage on any failure.
    ///
    /// With `ArgFailurePolicy::Legacy` fatal errors print their message and
    /// exit with `EXIT_FAILURE`, and explicit help exits with 0. Whatever is
    /// not handled that way is returned.
    pub fn parse_app_args(
        progname: &str,
        args: &[String],
        defaults: &ArgDefaults,
        policy: ArgFailurePolicy,
    ) -> Result<Self, ArgError> {
        let err = match Self::try_parse_from(progname, args, defaults) {
            Ok(config) => return Ok(config),
            Err(err) => err,
        };

        args_usage_print(progname, defaults);
        if policy == ArgFailurePolicy::Legacy {
            if err.kind() == ArgErrorKind::HelpRequested {
                exit(0);
            }
            if err.is_fatal() {
                eprintln!("{}", err.describe());
                exit(EXIT_FAILURE);
            }
        }
        Err(err)
    }

    fn apply(&mut self, occurrence: &ArgOccurrence) -> Result<(), ArgError> {
        let value = occurrence.value.as_str();
        match occurrence.option {
            ArgOption::PortMask => self.set_port_mask(value),
            ArgOption::LogLevel => self.set_log_level(value),
            ArgOption::MaxFrameSize => self.set_max_frame_size(value),
            ArgOption::StatsInterval => {
                self.stats_interval = parse_int_permissive(value);
                Ok(())
            }
            ArgOption::StatsCore => {
                self.stats_core = parse_int_permissive(value);
                Ok(())
            }
        }
    }

    // Setters leave the field untouched on failure

    fn set_port_mask(&mut self, token: &str) -> Result<(), ArgError> {
        self.port_mask = parse_port_mask(token)
            .map_err(|cause| ArgError::invalid_value(ArgOption::PortMask, token, cause))?;
        Ok(())
    }

    fn set_log_level(&mut self, token: &str) -> Result<(), ArgError> {
        self.log_level = parse_log_level(token, self.max_log_level)
            .map_err(|cause| ArgError::invalid_value(ArgOption::LogLevel, token, cause))?;
        Ok(())
    }

    fn set_max_frame_size(&mut self, token: &str) -> Result<(), ArgError> {
        self.max_frame_size = parse_decimal_u32(Some(token))
            .map_err(|cause| ArgError::invalid_value(ArgOption::MaxFrameSize, token, cause))?;
        Ok(())
    }

    pub fn port_mask(&self) -> u64 {
        self.port_mask
    }

    pub fn log_level(&self) -> u32 {
        self.log_level
    }

    pub fn stats_interval(&self) -> i32 {
        self.stats_interval
    }

    pub fn stats_core(&self) -> i32 {
        self.stats_core
    }

    pub fn max_frame_size(&self) -> u32 {
        self.max_frame_size
    }

    /// Non-option arguments that were skipped
    pub fn ignored_args(&self) -> &[String] {
        &self.ignored_args
    }
}

/// Usage banner for the application arguments
pub fn args_usage(name: &str, defaults: &ArgDefaults) -> String {
    let mut out = String::new();
    let pad = "                              ";
    let _ = writeln!(out, "{name}: DPDK vSwitch datapath application");
    let _ = writeln!(out, "usage: {name} [EAL] {EAL_SEPARATOR} [ARG...]");
    let _ = writeln!(out);
    let _ = writeln!(out, "Required Arguments:");
    let _ = writeln!(out, "  -p PORTMASK                 hex bitmask of phy ports to use");
    let _ = writeln!(out);
    let _ = writeln!(out, "Optional Arguments:");
    let _ = writeln!(
        out,
        "  -v LOG_LEVEL                verbosity of datapath logging (default: {})",
        defaults.log_level
    );
    let levels: Vec<String> = (1..=defaults.max_log_level)
        .filter_map(LogSeverity::from_level)
        .map(|s| format!("{}={}", s as u32, s.name()))
        .collect();
    for row in levels.chunks(3) {
        let _ = writeln!(out, "{pad}{}", row.join(", "));
    }
    let _ = writeln!(out, "{pad}** Higher log levels print all lower level logs **");
    let _ = writeln!(
        out,
        "  --stats_int INT             print stats every INT (default: {})",
        defaults.stats_interval
    );
    let _ = writeln!(out, "  --stats_core CORE           id of core used to print stats");
    let _ = writeln!(
        out,
        "  -J FRAME_SIZE               maximum frame size (default: {})",
        defaults.max_frame_size
    );
    let _ = writeln!(out, "  -h, --help                  print this usage");
    out
}

pub fn args_usage_print(name: &str, defaults: &ArgDefaults) {
    print!("{}", args_usage(name, defaults));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn parse(args: &[&str]) -> Result<ArgConfig, ArgError> {
        ArgConfig::try_parse_from("ovdk", &argv(args), &ArgDefaults::default())
    }

    #[test]
    fn port_mask_hex() {
        assert_eq!(parse_port_mask("1"), Ok(1));
        assert_eq!(parse_port_mask("ff"), Ok(0xff));
        assert_eq!(parse_port_mask("0x1F"), Ok(0x1f));
        assert_eq!(parse_port_mask("0XdeadBEEF"), Ok(0xdead_beef));
        assert_eq!(parse_port_mask("ffffffffffffffff"), Ok(u64::MAX));
        assert_eq!(parse_port_mask(" 3"), Ok(3));
    }

    #[test]
    fn port_mask_rejects_garbage() {
        assert_eq!(parse_port_mask(""), Err(ValueError::Empty));
        for token in ["1g", "ff ", "0x", "-1", "+1", "x1", " "] {
            assert!(
                matches!(parse_port_mask(token), Err(ValueError::Malformed { radix: 16, .. })),
                "{token:?} should be malformed"
            );
        }
        assert!(matches!(
            parse_port_mask("10000000000000000"),
            Err(ValueError::OutOfRange { .. })
        ));
    }

    #[test]
    fn log_level_bounds() {
        for level in 1..=LOG_LEVEL_MAX {
            assert_eq!(parse_log_level(&level.to_string(), LOG_LEVEL_MAX), Ok(level));
        }
        assert!(matches!(
            parse_log_level("0", LOG_LEVEL_MAX),
            Err(ValueError::OutOfRange { min: 1, max: 8, .. })
        ));
        assert!(matches!(
            parse_log_level("9", LOG_LEVEL_MAX),
            Err(ValueError::OutOfRange { .. })
        ));
        assert_eq!(parse_log_level("", LOG_LEVEL_MAX), Err(ValueError::Empty));
        assert!(matches!(
            parse_log_level("4x", LOG_LEVEL_MAX),
            Err(ValueError::Malformed { radix: 10, .. })
        ));
        assert!(matches!(
            parse_log_level("-3", LOG_LEVEL_MAX),
            Err(ValueError::Malformed { .. })
        ));
        // bound comes from the caller
        assert!(parse_log_level("6", 5).is_err());
    }

    #[test]
    fn decimal_u32() {
        assert_eq!(parse_decimal_u32(Some("1")), Ok(1));
        assert_eq!(parse_decimal_u32(Some("1518")), Ok(1518));
        assert_eq!(parse_decimal_u32(Some("4294967295")), Ok(u32::MAX));
        assert_eq!(parse_decimal_u32(None), Err(ValueError::Empty));
        assert_eq!(parse_decimal_u32(Some("")), Err(ValueError::Empty));
        assert!(matches!(
            parse_decimal_u32(Some("0")),
            Err(ValueError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_decimal_u32(Some("12a")),
            Err(ValueError::Malformed { .. })
        ));
        assert!(matches!(
            parse_decimal_u32(Some("4294967296")),
            Err(ValueError::OutOfRange { .. })
        ));
    }

    #[test]
    fn permissive_int() {
        assert_eq!(parse_int_permissive("5"), 5);
        assert_eq!(parse_int_permissive("-1"), -1);
        assert_eq!(parse_int_permissive("  +42"), 42);
        assert_eq!(parse_int_permissive("12abc"), 12);
        assert_eq!(parse_int_permissive("abc"), 0);
        assert_eq!(parse_int_permissive(""), 0);
        assert_eq!(parse_int_permissive("-"), 0);
        assert_eq!(parse_int_permissive("99999999999"), i32::MAX);
        assert_eq!(parse_int_permissive("-99999999999"), i32::MIN);
    }

    #[test]
    fn defaults_before_parse() {
        let config = ArgConfig::default();
        assert_eq!(config.port_mask(), 0);
        assert_eq!(config.log_level(), 4);
        assert_eq!(config.stats_interval(), 0);
        assert_eq!(config.stats_core(), -1);
        assert_eq!(config.max_frame_size(), MAX_FRAME_SIZE_DEFAULT);
    }

    #[test]
    fn port_mask_only() {
        let config = parse(&["-p", "1"]).unwrap();
        assert_eq!(config.port_mask(), 1);
        assert_eq!(config.log_level(), LOG_LEVEL_DEFAULT);
        assert_eq!(config.stats_interval(), 0);
        assert_eq!(config.stats_core(), -1);
        assert_eq!(config.max_frame_size(), MAX_FRAME_SIZE_DEFAULT);
        assert_eq!(config, {
            let mut expected = ArgConfig::default();
            expected.port_mask = 1;
            expected
        });
    }

    #[test]
    fn all_options() {
        let config = parse(&[
            "-p", "0x3", "-v", "8", "-J", "9000", "--stats_int", "10", "--stats_core=2",
        ])
        .unwrap();
        assert_eq!(config.port_mask(), 3);
        assert_eq!(config.log_level(), 8);
        assert_eq!(config.max_frame_size(), 9000);
        assert_eq!(config.stats_interval(), 10);
        assert_eq!(config.stats_core(), 2);
    }

    #[test]
    fn last_write_wins() {
        let config = parse(&["-p", "1", "-v", "3", "-v", "5"]).unwrap();
        assert_eq!(config.log_level(), 5);
        let config = parse(&["-p", "1", "-p", "f0", "-J", "64", "-J", "128"]).unwrap();
        assert_eq!(config.port_mask(), 0xf0);
        assert_eq!(config.max_frame_size(), 128);
    }

    #[test]
    fn scan_stops_at_first_bad_value() {
        // a later valid value does not rescue an earlier bad one
        let err = parse(&["-v", "9", "-v", "3"]).unwrap_err();
        assert_eq!(err.option(), Some(ArgOption::LogLevel));
        assert_eq!(err.kind(), ArgErrorKind::OutOfRange);

        let err = parse(&["-J", "0", "-p", "zz"]).unwrap_err();
        assert_eq!(err.option(), Some(ArgOption::MaxFrameSize));
    }

    #[test]
    fn frame_size_error_before_bad_token_stays_recoverable() {
        let err = parse(&["-p", "1", "-J", "0", "--bogus"]).unwrap_err();
        assert_eq!(err.option(), Some(ArgOption::MaxFrameSize));
        assert!(!err.is_fatal());

        let err = parse(&["-p", "1", "-J", "0", "-v"]).unwrap_err();
        assert_eq!(err.option(), Some(ArgOption::MaxFrameSize));
        assert!(!err.is_fatal());

        // the bad token comes first, so it decides
        let err = parse(&["-p", "1", "--bogus", "-J", "0"]).unwrap_err();
        assert_eq!(err, ArgError::UnknownOption("--bogus".into()));
        let err = parse(&["-p", "1", "-J", "64", "--bogus"]).unwrap_err();
        assert_eq!(err, ArgError::UnknownOption("--bogus".into()));
    }

    #[test]
    fn abbreviated_stats_options() {
        let config = parse(&["-p", "1", "--stats_i", "5", "--stats_c", "2"]).unwrap();
        assert_eq!(config.stats_interval(), 5);
        assert_eq!(config.stats_core(), 2);
    }

    #[test]
    fn overflow_reports_option_bounds() {
        assert_eq!(
            parse_log_level("99999999999999999999", LOG_LEVEL_MAX),
            Err(ValueError::OutOfRange {
                value: "99999999999999999999".into(),
                min: 1,
                max: LOG_LEVEL_MAX as u64,
            })
        );
        assert!(matches!(
            parse_decimal_u32(Some("99999999999999999999")),
            Err(ValueError::OutOfRange { min: 1, max: 4294967295, .. })
        ));
    }

    #[test]
    fn reparse_is_identical() {
        let args = ["-p", "ff", "-v", "6", "--stats_int", "3", "-J", "2048"];
        assert_eq!(parse(&args).unwrap(), parse(&args).unwrap());
    }

    #[test]
    fn log_level_above_max_is_fatal() {
        let err = parse(&["-p", "1", "-v", "9"]).unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::OutOfRange);
        assert!(err.is_fatal());
    }

    #[test]
    fn zero_frame_size_is_recoverable() {
        let err = parse(&["-p", "1", "-J", "0"]).unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::OutOfRange);
        assert!(!err.is_fatal());

        // legacy policy hands it back instead of exiting
        let err = ArgConfig::parse_app_args(
            "ovdk",
            &argv(&["-p", "1", "-J", "0"]),
            &ArgDefaults::default(),
            ArgFailurePolicy::Legacy,
        )
        .unwrap_err();
        assert_eq!(err.option(), Some(ArgOption::MaxFrameSize));
    }

    #[test]
    fn recoverable_policy_returns_fatal_errors() {
        let err = ArgConfig::parse_app_args(
            "ovdk",
            &argv(&["-p", "xyz"]),
            &ArgDefaults::default(),
            ArgFailurePolicy::Recoverable,
        )
        .unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.kind(), ArgErrorKind::MalformedNumeric);

        let err = ArgConfig::parse_app_args(
            "ovdk",
            &argv(&["-h"]),
            &ArgDefaults::default(),
            ArgFailurePolicy::Recoverable,
        )
        .unwrap_err();
        assert_eq!(err, ArgError::HelpRequested);
    }

    #[test]
    fn stats_are_permissive() {
        let config = parse(&["-p", "1", "--stats_int", "abc"]).unwrap();
        assert_eq!(config.stats_interval(), 0);
        let config = parse(&["-p", "1", "--stats_core", "-1", "--stats_int", "-5"]).unwrap();
        assert_eq!(config.stats_core(), -1);
        assert_eq!(config.stats_interval(), -5);
    }

    #[test]
    fn failed_setter_keeps_previous_value() {
        let mut config = ArgConfig::default();
        config.set_log_level("6").unwrap();
        for bad in ["0", "9", "abc", ""] {
            assert!(config.set_log_level(bad).is_err());
            assert_eq!(config.log_level(), 6);
        }
        config.set_port_mask("a").unwrap();
        assert!(config.set_port_mask("a!").is_err());
        assert_eq!(config.port_mask(), 0xa);
        assert!(config.set_max_frame_size("0").is_err());
        assert_eq!(config.max_frame_size(), MAX_FRAME_SIZE_DEFAULT);
    }

    #[test]
    fn injected_defaults() {
        let defaults = ArgDefaults {
            log_level: 2,
            max_log_level: 5,
            max_frame_size: 9000,
            ..ArgDefaults::default()
        };
        let config = ArgConfig::try_parse_from("ovdk", &argv(&["-p", "1"]), &defaults).unwrap();
        assert_eq!(config.log_level(), 2);
        assert_eq!(config.max_frame_size(), 9000);

        let err = ArgConfig::try_parse_from("ovdk", &argv(&["-v", "6"]), &defaults).unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::OutOfRange);
    }

    #[test]
    fn unknown_and_missing_options() {
        assert_eq!(
            parse(&["-p", "1", "--bogus"]).unwrap_err(),
            ArgError::UnknownOption("--bogus".into())
        );
        let err = parse(&["-p"]).unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::MissingRequiredArgument);
        assert!(err.is_fatal());
    }

    #[test]
    fn ignored_arguments_are_kept() {
        let config = parse(&["-p", "1", "leftover"]).unwrap();
        assert_eq!(config.ignored_args(), &["leftover".to_string()]);
    }

    #[test]
    fn usage_lists_options_and_defaults() {
        let defaults = ArgDefaults {
            max_frame_size: 9000,
            ..ArgDefaults::default()
        };
        let usage = args_usage("./ovdk", &defaults);
        assert!(usage.starts_with("./ovdk: DPDK vSwitch datapath application\n"));
        assert!(usage.contains("usage: ./ovdk [EAL] -- [ARG...]"));
        assert!(usage.contains("-p PORTMASK"));
        assert!(usage.contains("(default: 4)"));
        assert!(usage.contains("1=EMERGENCY, 2=ALERT, 3=CRITICAL"));
        assert!(usage.contains("7=INFORMATION, 8=DEBUG"));
        assert!(usage.contains("--stats_int INT"));
        assert!(usage.contains("--stats_core CORE"));
        assert!(usage.contains("maximum frame size (default: 9000)"));
    }
}
