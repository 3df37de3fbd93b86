//! Runtime configuration: where the dictionary archives live and whether
//! debug tracing is enabled.
//!
//! Generalizes `data_directory`'s upward directory search into an
//! environment-variable resolution, and `dbg_flag!`/`dbg_print!`'s
//! compile-time toggle into a runtime struct, since a library embedded in a
//! host application cannot rely on a compile-time constant or a fixed
//! directory layout.

use std::env;
use std::path::PathBuf;

/// Environment variable consulted for the dictionary archive directory
/// before falling back to the packaged default.
pub const SYSTEM_DIC_ENV: &str = "JP_SEGMENT_SYSTEM_DIC";

/// Resolved configuration for a [Segmenter](crate::Segmenter).
#[derive(Clone, Debug, Default)]
pub struct Config {
	/// Directory to load dictionary archives from. `None` means the caller
	/// did not request a specific path and the default resolution (the
	/// [SYSTEM_DIC_ENV] environment variable, if set) applies.
	pub dictionary_path: Option<PathBuf>,

	pub debug: DebugConfig,
}

/// Runtime debug-tracing toggles, generalizing `base::dbg_flag!` from a
/// compile-time constant to values a host application can set at startup.
#[derive(Clone, Debug, Default)]
pub struct DebugConfig {
	/// Enables verbose tracing of the merge/anchor pipeline.
	pub enabled: bool,

	/// When set, only trace morphemes whose surface text equals this value.
	pub filter_eq: Option<String>,

	/// When set, only trace morphemes whose surface text contains this value.
	pub filter_contains: Option<String>,
}

impl Config {
	pub fn new() -> Config {
		Config::default()
	}

	/// Sets an explicit dictionary directory, overriding environment
	/// resolution.
	pub fn with_dictionary_path<P: Into<PathBuf>>(mut self, path: P) -> Config {
		self.dictionary_path = Some(path.into());
		self
	}

	pub fn with_debug(mut self, debug: DebugConfig) -> Config {
		self.debug = debug;
		self
	}

	/// Resolves the dictionary directory to use: the explicit
	/// [Config::dictionary_path] if set, else [SYSTEM_DIC_ENV], else `None`
	/// (the caller has no dictionary directory to load).
	///
	/// Generalizes an upward filesystem search (appropriate for a monorepo
	/// checkout) into an environment-variable lookup (appropriate for an
	/// embedded library with no fixed working directory).
	pub fn resolve_dictionary_path(&self) -> Option<PathBuf> {
		self.dictionary_path.clone().or_else(|| env::var_os(SYSTEM_DIC_ENV).map(PathBuf::from))
	}
}

/// Whether a morpheme with the given surface text should be traced under
/// `debug`, matching `base::dbg_print!`'s gated `eprintln!` idiom but with
/// the filters applied at runtime instead of compiled in.
pub fn should_trace(debug: &DebugConfig, surface: &str) -> bool {
	if !debug.enabled {
		return false;
	}
	if let Some(eq) = &debug.filter_eq {
		if surface != eq {
			return false;
		}
	}
	if let Some(contains) = &debug.filter_contains {
		if !surface.contains(contains.as_str()) {
			return false;
		}
	}
	true
}

#[cfg(test)]
mod tests {
	use super::*;

	// Both env-dependent cases live in one test: the other tests in this
	// crate never touch SYSTEM_DIC_ENV, but sibling tests *within* this
	// module would race on the process-global environment if split apart.
	#[test]
	fn dictionary_path_resolution() {
		env::remove_var(SYSTEM_DIC_ENV);
		assert_eq!(Config::new().resolve_dictionary_path(), None);

		env::set_var(SYSTEM_DIC_ENV, "/from/env");
		assert_eq!(Config::new().resolve_dictionary_path(), Some(PathBuf::from("/from/env")));

		let config = Config::new().with_dictionary_path("/explicit");
		assert_eq!(config.resolve_dictionary_path(), Some(PathBuf::from("/explicit")));
		env::remove_var(SYSTEM_DIC_ENV);
	}

	#[test]
	fn trace_filter_eq_rejects_non_matching_surface() {
		let debug = DebugConfig { enabled: true, filter_eq: Some("本".to_string()), filter_contains: None };
		assert!(should_trace(&debug, "本"));
		assert!(!should_trace(&debug, "木"));
	}

	#[test]
	fn disabled_debug_never_traces() {
		let debug = DebugConfig { enabled: false, filter_eq: None, filter_contains: None };
		assert!(!should_trace(&debug, "anything"));
	}
}
