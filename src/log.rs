// src/log.rs
//
// File-backed logging for both front-ends.
// Everything goes through the `log` facade; `init()` wires env_logger to
// `.store/debug.log` and falls back to stderr if the file can't be opened.
// Level defaults to info, RUST_LOG overrides.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Once;

use env_logger::{Builder, Env, Target};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: Once = Once::new();

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global logger. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
        builder.format_timestamp_millis();

        let path = log_path();
        let file = fs::create_dir_all(STORE_DIR)
            .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

        match file {
            Ok(f) => { builder.target(Target::Pipe(Box::new(f))); }
            Err(_) => { builder.target(Target::Stderr); }
        }

        // Another logger may already be installed (tests, embedding).
        let _ = builder.try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
