// ----------------------------------------------------------------------------
// Copyright (c) 2025 LeoxTec https://leoxtec.com.
// Licensed under the MIT License.
// ----------------------------------------------------------------------------

//!
//! Handles overrides of the argument defaults as read from file.
//!
//! The file is JSON, the `arg_defaults` section may hold any subset of the
//! default values:
//!
//! ```json
//! { "arg_defaults": { "log_level": 5, "max_frame_size": 9000 } }
//! ```
//!
//! `failure_policy` selects whether argument errors stop the process
//! (`"legacy"`, default) or are all handed back (`"recoverable"`).
//!
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use anyhow::{anyhow, Context};
use serde_json;

use crate::app_args::{ArgDefaults, ArgFailurePolicy};
use crate::app_log::LOG_LEVEL_MAX;
use crate::app_utils::file_check_exists;

pub const CNF_ARG_DEFAULTS_SECTION: &str = "arg_defaults";
pub const CNF_FAILURE_POLICY_SECTION: &str = "failure_policy";
/// Environment variable naming the defaults file
pub const CNF_FILE_ENV: &str = "OVDK_ARGS_CONFIG";

pub type CnfSectionsDict = HashMap<String, serde_json::Value>;

/// Argument handling settings read from the defaults file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CnfArgSettings {
    pub defaults: ArgDefaults,
    pub failure_policy: ArgFailurePolicy,
}

pub fn config_parse_arg_defaults_section(
    sections: &CnfSectionsDict,
    section_name: &str,
) -> anyhow::Result<ArgDefaults> {
    return match sections.get(section_name) {
        Some(v) => {
            let section: ArgDefaults = match serde_json::from_value(v.to_owned()) {
                Ok(v) => v,
                Err(err) => return Err(anyhow!("Error parsing section: {}", err)),
            };
            Ok(section)
        }
        None => Err(anyhow!("No {section_name} found in provided sections list")),
    };
}

pub fn config_parse_failure_policy_section(
    sections: &CnfSectionsDict,
    section_name: &str,
) -> anyhow::Result<ArgFailurePolicy> {
    return match sections.get(section_name) {
        Some(v) => match serde_json::from_value(v.to_owned()) {
            Ok(v) => Ok(v),
            Err(err) => Err(anyhow!("Error parsing {section_name}: {}", err)),
        },
        None => Ok(ArgFailurePolicy::default()),
    };
}

// Defaults must satisfy the same bounds the options are checked against
pub fn config_check_arg_defaults(defaults: &ArgDefaults) -> anyhow::Result<()> {
    if defaults.max_log_level == 0 || defaults.max_log_level > LOG_LEVEL_MAX {
        return Err(anyhow!(
            "max_log_level {} is outside of 1..={}",
            defaults.max_log_level,
            LOG_LEVEL_MAX
        ));
    }
    if defaults.log_level == 0 || defaults.log_level > defaults.max_log_level {
        return Err(anyhow!(
            "log_level {} is outside of 1..={}",
            defaults.log_level,
            defaults.max_log_level
        ));
    }
    if defaults.max_frame_size == 0 {
        return Err(anyhow!("max_frame_size must not be 0"));
    }
    Ok(())
}

pub fn conf_json_load(cnf_file_path: &str) -> anyhow::Result<CnfSectionsDict> {
    let cnf_file = File::open(cnf_file_path)
        .with_context(|| format!("Failed to open configuration file {cnf_file_path}"))?;
    let json_rdr = BufReader::new(cnf_file);
    let sections: CnfSectionsDict = match serde_json::from_reader(json_rdr) {
        Ok(prm_sections) => prm_sections,
        Err(err) => return Err(anyhow!("Error parsing configuration file: {}", err)),
    };
    Ok(sections)
}

// Load argument settings from JSON file, missing entries keep the
// built-in values
pub fn config_load_arg_settings(cnf_file_path: &str) -> anyhow::Result<CnfArgSettings> {
    file_check_exists(cnf_file_path)?;
    let sections = conf_json_load(cnf_file_path)?;
    let defaults = if sections.contains_key(CNF_ARG_DEFAULTS_SECTION) {
        config_parse_arg_defaults_section(&sections, CNF_ARG_DEFAULTS_SECTION)?
    } else {
        ArgDefaults::default()
    };
    config_check_arg_defaults(&defaults)
        .with_context(|| format!("Invalid {CNF_ARG_DEFAULTS_SECTION} in {cnf_file_path}"))?;
    let failure_policy = config_parse_failure_policy_section(&sections, CNF_FAILURE_POLICY_SECTION)?;
    Ok(CnfArgSettings {
        defaults,
        failure_policy,
    })
}
