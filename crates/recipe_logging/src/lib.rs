#![deny(missing_docs)]
//! Shared logging utilities for the recipe browser workspace.
//!
//! This crate provides the `recipe_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. The macros forward to
//! the `log` facade re-exported here, so callers do not need their own `log`
//! dependency.

use std::borrow::Cow;
use std::sync::Once;

#[doc(hidden)]
pub use log;

/// Default character budget for [`clip`] when logging response bodies.
pub const LOG_CLIP_CHARS: usize = 200;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! recipe_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! recipe_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! recipe_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! recipe_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! recipe_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test; only the first call installs the logger, and
/// a logger installed elsewhere is left alone.
pub fn initialize_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
    });
}

/// Shortens `text` to at most `max_chars` characters for a log line.
///
/// Clipped text ends with `...`; short text is borrowed unchanged. Newlines are
/// flattened so a server body never spans several log records.
pub fn clip(text: &str, max_chars: usize) -> Cow<'_, str> {
    let single_line = !text.contains(['\n', '\r']);
    if single_line && text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let mut out: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(max_chars)
        .collect();
    if text.chars().count() > max_chars {
        out.push_str("...");
    }
    Cow::Owned(out)
}
