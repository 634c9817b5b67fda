// ----------------------------------------------------------------------------
// Copyright (c) 2025 LeoxTec https://leoxtec.com.
// Licensed under the MIT License.
// ----------------------------------------------------------------------------

//!
//! OVDK - DPDK vSwitch datapath front-end
//!
//! Resolves the datapath application arguments that follow the EAL
//! arguments and reports the configuration the datapath would run with.
//!
//! usage: ovdk [EAL] -- -p PORTMASK [-v LOG_LEVEL] [-J FRAME_SIZE]
//!                      [--stats_int INT] [--stats_core CORE]
//!
//! Defaults can be overridden by a JSON file named by OVDK_ARGS_CONFIG,
//! which may also be set from a `.env` file.
//!

use std::process::exit;

use log::{debug, info, warn};

mod app_utils;
use app_utils::*;

mod app_error;
use app_error::{ArgError, ArgErrorKind};

mod app_log;
use app_log::*;

mod app_cli;
use app_cli::*;

mod app_args;
use app_args::*;

mod app_config;
use app_config::*;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status when the caller gives up on a recoverable argument error
const EXIT_ARGS_REJECTED: i32 = 2;

fn arg_settings_load() -> anyhow::Result<CnfArgSettings> {
    match std::env::var(CNF_FILE_ENV) {
        Ok(cnf_file) => {
            println!("Using argument defaults file: {cnf_file}");
            config_load_arg_settings(&cnf_file)
        }
        Err(_) => Ok(CnfArgSettings::default()),
    }
}

// Exit status for an argument error the parser handed back
fn arg_error_exit_code(err: &ArgError) -> i32 {
    if err.kind() == ArgErrorKind::HelpRequested {
        0
    } else if err.is_fatal() {
        EXIT_FAILURE
    } else {
        EXIT_ARGS_REJECTED
    }
}

fn arg_config_report(config: &ArgConfig) {
    let severity = match LogSeverity::from_level(config.log_level()) {
        Some(s) => s.name(),
        None => "?",
    };
    info!("port mask: {:#x}", config.port_mask());
    info!("log level: {} ({})", config.log_level(), severity);
    info!("max frame size: {}", config.max_frame_size());
    info!(
        "stats interval: {}, stats core: {}",
        config.stats_interval(),
        config.stats_core()
    );
    if config.port_mask() == 0 {
        warn!("port mask enables no ports");
    }
    if !config.ignored_args().is_empty() {
        debug!("ignored arguments: {:?}", config.ignored_args());
    }

    match serde_json::to_string(config) {
        Ok(v) => println!("{}: Resolved configuration: {v}", get_time_fmt(LOG_TIME_FMT)),
        Err(err) => eprintln!("Failed to serialize configuration: {err}"),
    }
}

fn main() {
    println!("OVDK - DPDK vSwitch datapath v{APP_VERSION}\n");
    // .env is optional
    let _ = dotenv::dotenv();

    let argv: Vec<String> = std::env::args().collect();
    let (progname, app_args) = cli_split_app_args(&argv);

    let settings = match arg_settings_load() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{:#}", err);
            exit(EXIT_FAILURE);
        }
    };

    // with the legacy policy fatal argument errors do not return from here
    let config = match ArgConfig::parse_app_args(
        &progname,
        &app_args,
        &settings.defaults,
        settings.failure_policy,
    ) {
        Ok(v) => v,
        Err(err) => {
            let code = arg_error_exit_code(&err);
            if code != 0 {
                eprintln!("{}", err.describe());
                if let Some(option) = err.option() {
                    eprintln!("Not starting with an invalid {option} value");
                }
            }
            exit(code);
        }
    };

    if let Err(err) = log_init(config.log_level()) {
        eprintln!("{:#}", err);
    }
    arg_config_report(&config);
}
