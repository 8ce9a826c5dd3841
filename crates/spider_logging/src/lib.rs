#![deny(missing_docs)]
//! Shared logging utilities for the spider workspace.
//!
//! This crate provides the `spider_*` logging macros used across the codebase,
//! the terminal logger used by the `gameyaml` binary and a minimal test
//! initializer for the global logger.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Environment variable that overrides the level passed to [`initialize`].
pub const LOG_LEVEL_ENV: &str = "GAMEYAML_LOG";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! spider_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! spider_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! spider_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! spider_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! spider_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Installs a terminal logger that writes to stderr.
///
/// Standard output is reserved for the rendered record, so every level goes to
/// stderr. `GAMEYAML_LOG` (e.g. `debug`) overrides `default_level`.
pub fn initialize(default_level: LevelFilter) {
    let level = level_from_env().unwrap_or(default_level);
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn level_from_env() -> Option<LevelFilter> {
    let raw = std::env::var(LOG_LEVEL_ENV).ok()?;
    parse_level(&raw)
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse::<LevelFilter>().ok()
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Debug builds get debug output; release test runs stay at info.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
