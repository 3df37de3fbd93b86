use std::io;

use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};

mod file;
pub use self::file::*;

/// Computes the SHA-256 hash of the input, as a lowercase hex string.
///
/// Used to derive content-addressed cache keys for loaded [Lexicon](crate::lexicon::Lexicon)
/// instances (see `loader::cache`).
pub fn sha256<T: io::Read>(mut input: T) -> io::Result<String> {
	let mut context = Context::new(&SHA256);
	let mut buffer = [0; 1024];

	let digest = loop {
		let size = input.read(&mut buffer)?;
		if size == 0 {
			break context.finish();
		} else {
			context.update(&buffer[..size]);
		}
	};

	Ok(HEXLOWER.encode(digest.as_ref()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sha256() {
		assert_eq!(
			"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
			sha256("".as_bytes()).unwrap()
		);
		assert_eq!(
			"b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
			sha256("hello world".as_bytes()).unwrap()
		);
	}
}
