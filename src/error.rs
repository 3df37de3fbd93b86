//! Error types raised by dictionary and rule construction.
//!
//! Everything in this crate that can fail does so only while building a
//! [Segmenter](crate::Segmenter): the hot path (`segment`, `collect_matches`)
//! never returns an error, it degrades gracefully instead (see the
//! module docs on `anchor` and `tokenizer`).

use std::fmt;
use std::io;

/// Construction-time failure.
#[derive(Debug)]
pub enum Error {
	/// The host platform is missing a resource the loader needs (e.g. no
	/// package resource directory could be located).
	UnsupportedPlatform(String),

	/// A dictionary archive or rule file was requested but could not be
	/// found on disk.
	ResourceMissing(String),

	/// The deconjugation rule file could not be parsed.
	MalformedRule(String),

	/// A dictionary archive could not be parsed into a [Lexicon](crate::lexicon::Lexicon).
	MalformedLexicon(String),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::UnsupportedPlatform(s) => write!(f, "unsupported platform: {}", s),
			Error::ResourceMissing(s) => write!(f, "resource missing: {}", s),
			Error::MalformedRule(s) => write!(f, "malformed rule file: {}", s),
			Error::MalformedLexicon(s) => write!(f, "malformed lexicon: {}", s),
		}
	}
}

impl std::error::Error for Error {}

/// Result alias using the crate [Error].
pub type Result<T> = std::result::Result<T, Error>;

macro_rules! error_from {
	($from:ty, $variant:ident) => {
		impl From<$from> for Error {
			fn from(v: $from) -> Self {
				Error::$variant(format!("{}", v))
			}
		}
	};
}

error_from!(io::Error, ResourceMissing);
error_from!(serde_json::Error, MalformedLexicon);
error_from!(zip::result::ZipError, MalformedLexicon);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_includes_detail() {
		let err = Error::MalformedRule("unexpected token".into());
		assert_eq!(format!("{}", err), "malformed rule file: unexpected token");
	}

	#[test]
	fn io_error_converts_to_resource_missing() {
		let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
		let err: Error = io_err.into();
		assert!(matches!(err, Error::ResourceMissing(_)));
	}
}
