#![deny(missing_docs)]
//! Shared logging utilities for the landing workspace.
//!
//! This crate provides the `landing_*` logging macros used by the engine and
//! the app, plus a minimal test initializer for the global logger. The core
//! crate stays free of logging so that `update` remains a pure function.

/// Log target used for search lifecycle events.
pub const SEARCH_TARGET: &str = "landing::search";

/// Log target used for location (address bar) synchronization.
pub const LOCATION_TARGET: &str = "landing::location";

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! landing_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! landing_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! landing_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Picks the default level filter for the current build profile.
///
/// Debug builds log at `Debug`, release builds at `Info`.
pub fn default_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
