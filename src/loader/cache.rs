//! Content-addressed on-disk cache for built [Lexicon](crate::lexicon::Lexicon) instances.
//!
//! Loading and indexing a full JMdict archive set is the most expensive
//! part of starting a [Segmenter](crate::Segmenter). [LexiconCache] lets a
//! caller opt into caching the result, keyed by a hash of the archive paths
//! that went into it, so repeated starts against the same dictionary set
//! skip re-parsing the zip files.
//!
//! This is deliberately not a global: a caller owns an instance and decides
//! when to read from or write to it.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::util::sha256;

/// An explicit, opt-in cache directory for serialized [Lexicon] snapshots.
pub struct LexiconCache {
	dir: PathBuf,
}

impl LexiconCache {
	/// Opens (without creating) a cache rooted at `dir`.
	pub fn new<P: AsRef<Path>>(dir: P) -> LexiconCache {
		LexiconCache { dir: dir.as_ref().to_path_buf() }
	}

	/// Computes the content-addressed cache key for a set of dictionary
	/// archive paths: the sha256 of their sorted, newline-joined paths.
	pub fn key_for(paths: &[PathBuf]) -> Result<String> {
		let mut sorted: Vec<String> = paths.iter().map(|p| p.to_string_lossy().into_owned()).collect();
		sorted.sort();
		let joined = sorted.join("\n");
		Ok(sha256(joined.as_bytes())?)
	}

	/// Returns the cached [Lexicon] for `key`, if present on disk.
	pub fn get(&self, key: &str) -> Result<Option<Lexicon>> {
		let path = self.entry_path(key);
		if !path.exists() {
			return Ok(None);
		}
		let file = File::open(&path)?;
		let reader = BufReader::new(file);
		let lexicon: Lexicon = bincode::deserialize_from(reader)
			.map_err(|e| crate::error::Error::MalformedLexicon(format!("cache entry {}: {}", key, e)))?;
		Ok(Some(lexicon))
	}

	/// Writes `lexicon` under `key`. Cache entries are append-only and
	/// reference-stable for the lifetime of the process: once written, a
	/// key's file is never rewritten in place.
	pub fn put(&self, key: &str, lexicon: &Lexicon) -> Result<()> {
		fs::create_dir_all(&self.dir)?;
		let path = self.entry_path(key);
		if path.exists() {
			return Ok(());
		}
		let file = File::create(&path)?;
		let writer = BufWriter::new(file);
		bincode::serialize_into(writer, lexicon)
			.map_err(|e| crate::error::Error::MalformedLexicon(format!("cache entry {}: {}", key, e)))?;
		Ok(())
	}

	fn entry_path(&self, key: &str) -> PathBuf {
		let mut path = self.dir.clone();
		path.push(format!("{}.bin", key));
		path
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexicon::JmWord;

	#[test]
	fn key_for_is_order_independent() {
		let a = vec![PathBuf::from("b.zip"), PathBuf::from("a.zip")];
		let b = vec![PathBuf::from("a.zip"), PathBuf::from("b.zip")];
		assert_eq!(LexiconCache::key_for(&a).unwrap(), LexiconCache::key_for(&b).unwrap());
	}

	#[test]
	fn round_trips_through_disk() {
		let dir = tempfile::tempdir().unwrap();
		let cache = LexiconCache::new(dir.path());

		let mut lexicon = Lexicon::new();
		lexicon.insert_word(JmWord {
			word_id: 1,
			readings: vec!["たべる".to_string()],
			spellings: vec!["食べる".to_string()],
			pos: vec![],
			priority: vec![],
			definitions: vec![],
		});

		let key = "test-key";
		assert!(cache.get(key).unwrap().is_none());
		cache.put(key, &lexicon).unwrap();

		let loaded = cache.get(key).unwrap().unwrap();
		assert_eq!(loaded.get(1).unwrap().spellings, vec!["食べる".to_string()]);
	}
}
