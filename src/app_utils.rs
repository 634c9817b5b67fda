// ----------------------------------------------------------------------------
// Copyright (c) 2025 LeoxTec https://leoxtec.com.
// Licensed under the MIT License.
// ----------------------------------------------------------------------------

//!
//! application utils
//!
//! contains various utility functions
//!
//!
use chrono;
use std::fs;
use anyhow::anyhow;

// get time function
pub fn get_time_fmt(time_fmt: &str) -> String {
    let now_ts = chrono::Local::now();
    return now_ts.format(time_fmt).to_string();
}

// Wrapper around checking existence of a file
pub fn file_check_exists(file_path: &str) -> anyhow::Result<bool> {
    match fs::exists(file_path) {
       Ok(true) => return Ok(true),
       Ok(false) => return Err(anyhow!("File was not found: {}", file_path)),
       Err(err) => return Err(anyhow!("Failed to verify existence of file: {}", err))
   };
}

/// Split off leading whitespace the way C numeric conversions skip it
pub fn str_skip_leading_ws(val_str: &str) -> &str {
    val_str.trim_start_matches(|c: char| c.is_ascii_whitespace())
}
