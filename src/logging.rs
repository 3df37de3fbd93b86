//! Terminal logging setup: the terminal leg of a larger drain topology,
//! trimmed down to just that leg (the ring buffer and request-fairing legs
//! serve an HTTP server this crate does not have).
//!
//! ```text
//!     ┌─────┐
//!     │  T  │
//!     │  E  │
//!     │  R  │  ← ← ←  [filter > info]     ┌───────────────────┐
//!     │  M  │                ↑            │                   │
//!     │  I  │              [dup]        ← │ log compatibility │
//!     │  N  │                             │                   │
//!     │  A  │        ┌───────────────┐    └───────────────────┘
//!     │  L  │  ← ← ← │ terminal_logger│
//!     └─────┘        └───────────────┘
//! ```

use slog::{Drain, Logger};

/// Builds a root [Logger] that writes compact, human-readable output to the
/// terminal. The `slog_term::term_compact` drain is wrapped in a `Mutex` to
/// make it `Sync`.
pub fn terminal_logger() -> Logger {
	let term = slog_term::term_compact();
	let term = std::sync::Mutex::new(term);
	Logger::root(term.fuse(), slog::o!())
}

/// Routes the `log` crate's global logging macros through `log`, filtering
/// out anything below `Info` to keep third-party library chatter quiet.
/// Holds the returned guard for as long as the bridge should remain
/// installed; dropping it restores the previous `log` logger.
pub fn init_stdlog_bridge(log: &Logger) -> slog_scope::GlobalLoggerGuard {
	let filter = slog::LevelFilter::new(log.clone(), slog::Level::Info);
	let compat_log = Logger::root(filter.fuse(), slog::o!("library" => true));
	let guard = slog_scope::set_global_logger(compat_log);
	slog_stdlog::init().ok();
	guard
}
