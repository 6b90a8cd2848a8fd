//! Lightweight diagnostics for the menufs workspace.
//!
//! Logging is off by default so the virtual tree stays quiet under a
//! filesystem driver that may issue many small queries.
//!
//! Usage:
//! - Set MENUFS_LOG=off (default) - no logs
//! - Set MENUFS_LOG=info - per-operation logs
//! - Set MENUFS_LOG=debug - detailed resolution/adapter logs

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

static INIT: Once = Once::new();

/// Initialize diagnostics based on the MENUFS_LOG environment variable.
///
/// Safe to call more than once; only the first call does any setup.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let log_level = std::env::var("MENUFS_LOG").unwrap_or_else(|_| "off".to_string());

        let rt = match log_level.as_str() {
            "off" => return,
            "debug" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Debug))
                .init(),
            "info" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Info))
                .init(),
            "warn" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Warn))
                .init(),
            "error" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Error))
                .init(),
            _ => {
                let rt = emit::setup()
                    .emit_to(emit_term::stderr())
                    .emit_when(emit::level::min_filter(emit::Level::Info))
                    .init();
                eprintln!(
                    "Warning: Unknown MENUFS_LOG value '{}', using 'info'",
                    log_level
                );
                rt
            }
        };

        // The emit runtime must outlive every query the driver dispatches.
        std::mem::forget(rt);
    });
}

/// Log basic operations (attribute queries, listings, reads).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (path resolution steps, adapter internals).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable problems (unreadable backing files, skipped entries).
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log serious failures that abort an operation.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;
