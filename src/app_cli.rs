// ----------------------------------------------------------------------------
// Copyright (c) 2025 LeoxTec https://leoxtec.com.
// Licensed under the MIT License.
// ----------------------------------------------------------------------------

//!
//! Handle application command line parameters
//!
//! Arguments in front of the first `--` belong to the environment
//! abstraction layer and never reach this module.
//!
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

use crate::app_error::{ArgError, ArgOption};

pub const APP_NAME: &str = "ovdk";
pub const EAL_SEPARATOR: &str = "--";

// Option values are kept raw, validation happens in app_args in command line order.
// Hyphen values are allowed so that `-v -3` reaches validation like getopt does,
// and long options may be abbreviated as long as they stay unambiguous.
#[derive(Parser, Debug, Default)]
#[command(name = APP_NAME, about = "DPDK vSwitch datapath application", long_about = None)]
#[command(disable_help_flag = true, infer_long_args = true)]
pub struct CliParams {
    /// Hex bitmask of phy ports to use
    #[arg(short = 'p', value_name = "PORTMASK", allow_hyphen_values = true)]
    pub port_mask: Vec<String>,

    /// Verbosity of datapath logging
    #[arg(short = 'v', value_name = "LOG_LEVEL", allow_hyphen_values = true)]
    pub log_level: Vec<String>,

    /// Maximum frame size
    #[arg(short = 'J', value_name = "FRAME_SIZE", allow_hyphen_values = true)]
    pub max_frame_size: Vec<String>,

    /// Print stats every INT
    #[arg(long = "stats_int", value_name = "INT", allow_hyphen_values = true)]
    pub stats_interval: Vec<String>,

    /// Id of core used to print stats
    #[arg(long = "stats_core", value_name = "CORE", allow_hyphen_values = true)]
    pub stats_core: Vec<String>,

    /// Print usage
    #[arg(short = 'h', long = "help", overrides_with = "help")]
    pub help: bool,

    // non-option arguments, left unprocessed
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

impl CliParams {
    // values per option with the clap id their positions are kept under
    fn option_values(&self) -> [(&'static str, ArgOption, &[String]); 5] {
        [
            ("port_mask", ArgOption::PortMask, self.port_mask.as_slice()),
            ("log_level", ArgOption::LogLevel, self.log_level.as_slice()),
            ("max_frame_size", ArgOption::MaxFrameSize, self.max_frame_size.as_slice()),
            ("stats_interval", ArgOption::StatsInterval, self.stats_interval.as_slice()),
            ("stats_core", ArgOption::StatsCore, self.stats_core.as_slice()),
        ]
    }
}

/// Single option as it appeared on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgOccurrence {
    pub index: usize,
    pub option: ArgOption,
    pub value: String,
}

/// Returns program name and the application arguments following the EAL separator.
/// Without a separator everything after the program name is an application argument.
pub fn cli_split_app_args(argv: &[String]) -> (String, Vec<String>) {
    let progname = match argv.first() {
        Some(v) => v.clone(),
        None => APP_NAME.to_string(),
    };
    let rest = argv.get(1..).unwrap_or(&[]);
    let app_args = match rest.iter().position(|a| a == EAL_SEPARATOR) {
        Some(pos) => rest[pos + 1..].to_vec(),
        None => rest.to_vec(),
    };
    (progname, app_args)
}

fn cli_error_arg(err: &clap::Error) -> Option<String> {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(v)) => {
            // clap renders "-v <LOG_LEVEL>", keep the flag only
            v.split_whitespace().next().map(|s| s.to_string())
        }
        _ => None,
    }
}

fn cli_error_to_arg_error(err: clap::Error) -> ArgError {
    let arg = cli_error_arg(&err);
    match err.kind() {
        ErrorKind::UnknownArgument => {
            ArgError::UnknownOption(arg.unwrap_or_default())
        }
        ErrorKind::InvalidValue | ErrorKind::WrongNumberOfValues => {
            ArgError::MissingRequiredArgument(arg.unwrap_or_default())
        }
        kind => {
            let reason = kind.to_string();
            match arg {
                Some(v) => ArgError::InvalidArguments(format!("{v}: {reason}")),
                None => ArgError::InvalidArguments(reason),
            }
        }
    }
}

/// Collect option occurrences, ordered as given on the command line
pub fn cli_collect_occurrences(params: &CliParams, matches: &ArgMatches) -> Vec<ArgOccurrence> {
    let mut occurrences = Vec::new();
    for (id, option, values) in params.option_values() {
        if let Some(indices) = matches.indices_of(id) {
            for (value, index) in values.iter().zip(indices) {
                occurrences.push(ArgOccurrence {
                    index,
                    option,
                    value: value.clone(),
                });
            }
        }
    }
    occurrences.sort_by_key(|o| o.index);
    occurrences
}

/// Tokenize application arguments. Fails on unknown options and on options missing
/// their value; values themselves are not validated here.
pub fn cli_parse(
    progname: &str,
    args: &[String],
) -> Result<(CliParams, Vec<ArgOccurrence>), ArgError> {
    let argv = std::iter::once(progname.to_string()).chain(args.iter().cloned());
    let matches = CliParams::command()
        .try_get_matches_from(argv)
        .map_err(cli_error_to_arg_error)?;
    let params = CliParams::from_arg_matches(&matches).map_err(cli_error_to_arg_error)?;
    let occurrences = cli_collect_occurrences(&params, &matches);
    Ok((params, occurrences))
}

/// Occurrences of the longest leading run of arguments that tokenizes cleanly.
/// Used after `cli_parse` failed, so that options in front of the offending
/// token are still scanned before it.
pub fn cli_leading_occurrences(progname: &str, args: &[String]) -> Vec<ArgOccurrence> {
    for len in (0..args.len()).rev() {
        if let Ok((_, occurrences)) = cli_parse(progname, &args[..len]) {
            return occurrences;
        }
    }
    Vec::new()
}
