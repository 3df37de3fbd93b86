//! The dictionary lexicon: word entries, reading/spelling indexing and
//! priority scoring.
//!
//! [Lexicon] is built once at startup (typically by `loader::yomitan`) and
//! is read-only and shareable across threads from then on, mirroring how
//! `db::tables::Root` is treated in the rest of the crate.

use std::collections::HashMap;

/// A single dictionary entry (a JMdict-style word sense group).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JmWord {
	pub word_id: u64,

	/// Kana readings, in source (insertion) order, deduplicated.
	pub readings: Vec<String>,

	/// Surface spellings, in source order, deduplicated.
	pub spellings: Vec<String>,

	/// Raw part-of-speech tags, in source order, no duplicates.
	pub pos: Vec<String>,

	/// Raw priority tags (`ichi1`, `news2`, `nf12`, ...), in source order.
	pub priority: Vec<String>,

	/// English definition glosses, in source order, deduplicated.
	pub definitions: Vec<String>,
}

impl JmWord {
	/// Appends `value` to `readings` if it is not already present.
	pub fn push_reading(&mut self, value: String) {
		push_unique(&mut self.readings, value);
	}

	/// Appends `value` to `spellings` if it is not already present.
	pub fn push_spelling(&mut self, value: String) {
		push_unique(&mut self.spellings, value);
	}
}

fn push_unique(list: &mut Vec<String>, value: String) {
	if !list.contains(&value) {
		list.push(value);
	}
}

/// Read-only, immutable dictionary lookup table.
///
/// `lookups` maps a normalized surface/reading key to the word IDs that can
/// be reached through it; `words` holds the actual entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Lexicon {
	lookups: HashMap<String, Vec<u64>>,
	words: HashMap<u64, JmWord>,
}

impl Lexicon {
	pub fn new() -> Lexicon {
		Lexicon {
			lookups: HashMap::new(),
			words: HashMap::new(),
		}
	}

	/// Inserts or replaces a word entry.
	pub fn insert_word(&mut self, word: JmWord) {
		self.words.insert(word.word_id, word);
	}

	/// Indexes `word_id` under `key`, appending it only if it is not
	/// already the last entry for that key (so repeated indexing under the
	/// same key from multiple forms does not produce runs of duplicates).
	pub fn index(&mut self, key: &str, word_id: u64) {
		let entry = self.lookups.entry(key.to_string()).or_insert_with(Vec::new);
		if entry.last() != Some(&word_id) {
			entry.push(word_id);
		}
	}

	/// Returns the word IDs indexed under `key`, or an empty slice.
	pub fn lookup(&self, key: &str) -> &[u64] {
		self.lookups.get(key).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Returns the entry for `word_id`, if any.
	pub fn get(&self, word_id: u64) -> Option<&JmWord> {
		self.words.get(&word_id)
	}

	/// Returns a mutable reference to the entry for `word_id`, if any.
	pub fn word_mut(&mut self, word_id: u64) -> Option<&mut JmWord> {
		self.words.get_mut(&word_id)
	}

	/// Iterates over every word in the lexicon, in arbitrary order.
	pub fn words_iter(&self) -> impl Iterator<Item = &JmWord> {
		self.words.values()
	}

	pub fn word_count(&self) -> usize {
		self.words.len()
	}
}

/// Computes the display-priority score for a word's tag set.
///
/// Higher scores are preferred by the anchoring stage when more than one
/// dictionary entry matches a morpheme.
pub fn priority_score(word: &JmWord, is_kana: bool) -> i32 {
	let tags = &word.priority;
	let mut score = 0;

	if tags.iter().any(|t| t == "jiten") {
		score += 100;
	}

	if tags.iter().any(|t| t == "ichi1" || t == "ichi") {
		score += 20;
	} else if tags.iter().any(|t| t == "ichi2") {
		score += 10;
	}

	if tags.iter().any(|t| t.starts_with("news1")) {
		score += 15;
	}
	if tags.iter().any(|t| t.starts_with("news2")) {
		score += 10;
	}

	if tags.iter().any(|t| t == "gai1" || t == "gai2") {
		score += 5;
	}

	if let Some(nf) = tags.iter().find_map(|t| parse_nf(t)) {
		score += (5 - round_half_to_even(nf as f64 / 10.0)).max(0);
	}

	if score == 0 {
		if tags.iter().any(|t| t == "spec1") {
			score += 15;
		} else if tags.iter().any(|t| t == "spec2") {
			score += 5;
		}
	}

	if word.pos.iter().any(|p| p == "uk") {
		score += if is_kana { 10 } else { -10 };
	}

	score
}

/// Rounds a non-negative value to the nearest integer, ties to even -
/// matching Python's `round()` rather than `f64::round`'s ties-away-from-zero,
/// since the nf-rank score this feeds is ported from `jmdict_loader.py`'s
/// `round(nf_rank / 10.0)`.
fn round_half_to_even(x: f64) -> i32 {
	let floor = x.floor();
	let diff = x - floor;
	let floor_i = floor as i32;
	if diff < 0.5 {
		floor_i
	} else if diff > 0.5 {
		floor_i + 1
	} else if floor_i % 2 == 0 {
		floor_i
	} else {
		floor_i + 1
	}
}

fn parse_nf(tag: &str) -> Option<u32> {
	let rest = tag.strip_prefix("nf")?;
	if rest.len() == 2 && rest.bytes().all(|b| b.is_ascii_digit()) {
		rest.parse().ok()
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn word(priority: &[&str], pos: &[&str]) -> JmWord {
		JmWord {
			word_id: 1,
			readings: vec![],
			spellings: vec![],
			pos: pos.iter().map(|s| s.to_string()).collect(),
			priority: priority.iter().map(|s| s.to_string()).collect(),
			definitions: vec![],
		}
	}

	#[test]
	fn ichi1_outranks_ichi2() {
		assert!(priority_score(&word(&["ichi1"], &[]), false) > priority_score(&word(&["ichi2"], &[]), false));
	}

	#[test]
	fn uk_boosts_kana_candidates_and_penalizes_others() {
		let w = word(&[], &["uk"]);
		assert!(priority_score(&w, true) > priority_score(&w, false));
	}

	#[test]
	fn nf_rank_tie_rounds_to_even_like_python() {
		// nf25 -> 25/10 = 2.5, ties-to-even rounds to 2, contribution 5-2=3.
		assert_eq!(priority_score(&word(&["nf25"], &[]), false), 3);
		// nf45 -> 45/10 = 4.5, ties-to-even rounds to 4, contribution 5-4=1.
		assert_eq!(priority_score(&word(&["nf45"], &[]), false), 1);
	}

	#[test]
	fn index_append_dedupes_adjacent_entries() {
		let mut lex = Lexicon::new();
		lex.index("本", 1);
		lex.index("本", 1);
		lex.index("本", 2);
		assert_eq!(lex.lookup("本"), &[1, 2]);
	}

	#[test]
	fn lookup_returns_empty_for_unknown_key() {
		let lex = Lexicon::new();
		assert!(lex.lookup("nope").is_empty());
	}
}
