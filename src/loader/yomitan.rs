//! Ingestion of JMdict/JMnedict dictionary archives in Yomitan layout.
//!
//! Archives are zip files whose `term_bank_*.json` entries hold arrays of
//! term rows: `[term, reading, pos tags, ?, ?, definitions, sequence,
//! priority tags?]`. This mirrors the tuple-row term bank format used by
//! the rest of the crate's ingestion code, generalized to tolerate the
//! newer structured-content definition format.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use regex::Regex;
use serde_json::Value;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::kana;
use crate::lexicon::{JmWord, Lexicon};

/// Word IDs reserved for the three dictionary entries this loader injects
/// before indexing, to plug well-known gaps in public JMdict releases.
const CUSTOM_DESHITA: u64 = 8_000_000;
const CUSTOM_IKUSHIOTOKISHIN: u64 = 8_000_001;
const CUSTOM_OUMAGATOKI: u64 = 8_000_002;

/// Builds a [Lexicon] from every `.zip` archive directly inside `dir`.
pub fn load_directory(dir: &Path) -> Result<Lexicon> {
	let mut lexicon = Lexicon::new();
	inject_custom_words(&mut lexicon);

	if !dir.exists() {
		return Err(Error::ResourceMissing(format!("dictionary directory not found: {}", dir.display())));
	}

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();
		if path.extension().map(|e| e == "zip").unwrap_or(false) {
			load_archive(&mut lexicon, &path)?;
		}
	}

	reindex(&mut lexicon);
	Ok(lexicon)
}

fn load_archive(lexicon: &mut Lexicon, path: &Path) -> Result<()> {
	let file = File::open(path)?;
	let mut archive = ZipArchive::new(file)?;

	for i in 0..archive.len() {
		let entry = archive.by_index(i)?;
		let name = entry.name().to_string();
		if is_term_bank(&name) {
			let rows: Vec<Value> = serde_json::from_reader(BufReader::new(entry))
				.map_err(|e| Error::MalformedLexicon(format!("{}: {}", name, e)))?;
			for row in rows {
				ingest_row(lexicon, &row);
			}
		}
	}

	Ok(())
}

fn is_term_bank(name: &str) -> bool {
	lazy_static! {
		static ref RE: Regex = Regex::new(r"term_bank_\d+\.json$").unwrap();
	}
	RE.is_match(name)
}

fn ingest_row(lexicon: &mut Lexicon, row: &Value) {
	let row = match row.as_array() {
		Some(r) if r.len() >= 7 => r,
		_ => return,
	};

	let term = match row[0].as_str() {
		Some(s) => s.to_string(),
		None => return,
	};
	let reading = row[1].as_str().unwrap_or("").to_string();
	let pos_tags: Vec<String> = row[2]
		.as_str()
		.unwrap_or("")
		.split_whitespace()
		.map(|s| s.to_string())
		.collect();

	let sequence = match row[6].as_i64() {
		Some(n) if n >= 0 => n as u64,
		_ => return,
	};

	let priority = row
		.get(7)
		.and_then(Value::as_str)
		.map(parse_priority_tags)
		.unwrap_or_default();

	let mut definitions = Vec::new();
	extract_definitions(&row[5], &mut definitions);

	let word = lexicon_entry(lexicon, sequence);
	if !reading.is_empty() {
		word.push_reading(reading);
	}
	if !term.is_empty() {
		word.push_spelling(term.clone());
		// Spellings double as readings too: the anchoring stage resolves a
		// morpheme's reading index by looking its surface text up in
		// `readings`, and a kanji surface only ever matches there if its
		// own spelling was indexed alongside the kana readings.
		word.push_reading(term);
	}
	for tag in pos_tags {
		if !word.pos.contains(&tag) {
			word.pos.push(tag);
		}
	}
	for tag in priority {
		if !word.priority.contains(&tag) {
			word.priority.push(tag);
		}
	}
	for def in definitions {
		if !word.definitions.contains(&def) {
			word.definitions.push(def);
		}
	}
}

fn lexicon_entry(lexicon: &mut Lexicon, word_id: u64) -> &mut JmWord {
	if lexicon.get(word_id).is_none() {
		lexicon.insert_word(JmWord {
			word_id,
			readings: Vec::new(),
			spellings: Vec::new(),
			pos: Vec::new(),
			priority: Vec::new(),
			definitions: Vec::new(),
		});
	}
	lexicon.word_mut(word_id).expect("just inserted")
}

fn parse_priority_tags(s: &str) -> Vec<String> {
	s.split_whitespace()
		.map(|tag| tag.trim_matches('⭐'))
		.filter(|tag| !tag.is_empty())
		.map(|tag| if tag == "ichi" { "ichi1".to_string() } else { tag.to_string() })
		.collect()
}

/// Walks a structured-content definition tree, collecting leaf text.
///
/// Skips any subtree whose `data.content` is `"formsTable"` (conjugation
/// tables are not definitions). A leaf string is kept when it carries an
/// English-language annotation inherited from an enclosing node, or -
/// absent any annotation - when it contains at least one ASCII letter (a
/// crude filter for example sentences written in other scripts).
fn extract_definitions(value: &Value, out: &mut Vec<String>) {
	extract_definitions_in_lang(value, out, false)
}

fn extract_definitions_in_lang(value: &Value, out: &mut Vec<String>, node_is_english: bool) {
	match value {
		Value::String(s) => {
			if node_is_english || has_ascii_letter(s) {
				push_unique(out, s.trim().to_string());
			}
		}
		Value::Array(items) => {
			for item in items {
				extract_definitions_in_lang(item, out, node_is_english);
			}
		}
		Value::Object(map) => {
			if let Some(content_kind) = map.get("data").and_then(|d| d.get("content")).and_then(Value::as_str) {
				if content_kind == "formsTable" {
					return;
				}
			}
			let node_lang = match map.get("lang").and_then(Value::as_str) {
				Some("en") => true,
				Some(_) => false,
				None => node_is_english,
			};
			if let Some(text) = map.get("text") {
				extract_definitions_in_lang(text, out, node_lang);
				return;
			}
			if let Some(content) = map.get("content") {
				extract_definitions_in_lang(content, out, node_lang);
			}
		}
		_ => {}
	}
}

fn has_ascii_letter(s: &str) -> bool {
	s.chars().any(|c| c.is_ascii_alphabetic())
}

fn push_unique(list: &mut Vec<String>, value: String) {
	if !value.is_empty() && !list.contains(&value) {
		list.push(value);
	}
}

fn inject_custom_words(lexicon: &mut Lexicon) {
	lexicon.insert_word(JmWord {
		word_id: CUSTOM_DESHITA,
		readings: vec!["でした".to_string()],
		spellings: vec!["でした".to_string()],
		pos: vec!["exp".to_string()],
		priority: vec![],
		definitions: vec!["(polite past copula) was".to_string()],
	});
	lexicon.insert_word(JmWord {
		word_id: CUSTOM_IKUSHIOTOKISHIN,
		readings: vec!["イクシオトキシン".to_string()],
		spellings: vec!["イクシオトキシン".to_string()],
		pos: vec!["n".to_string()],
		priority: vec![],
		definitions: vec!["ichthyotoxin".to_string()],
	});
	lexicon.insert_word(JmWord {
		word_id: CUSTOM_OUMAGATOKI,
		readings: vec!["逢魔".to_string(), "おうま".to_string()],
		spellings: vec!["逢魔".to_string()],
		pos: vec!["exp".to_string()],
		priority: vec![],
		definitions: vec!["the twilight hour when spirits are said to appear".to_string()],
	});
}

/// Rebuilds the `lookups` index from scratch for every word in `lexicon`.
///
/// Each spelling is indexed under itself plus its half/full-width ASCII
/// forms (when distinct); each reading is indexed under its long-vowel
/// preserved and expanded hiragana folds, under itself when it is already
/// pure katakana, and under its half/full-width ASCII forms.
fn reindex(lexicon: &mut Lexicon) {
	let entries: Vec<(u64, Vec<String>, Vec<String>)> = lexicon
		.words_iter()
		.map(|w| (w.word_id, w.spellings.clone(), w.readings.clone()))
		.collect();

	for (word_id, spellings, readings) in entries {
		let mut keys: Vec<String> = Vec::new();

		for spelling in &spellings {
			push_unique(&mut keys, spelling.clone());
			push_unique(&mut keys, kana::to_halfwidth_ascii(spelling));
			push_unique(&mut keys, kana::to_fullwidth_ascii(spelling));
		}

		for reading in &readings {
			push_unique(&mut keys, kana::to_hiragana_preserve_long(reading));
			push_unique(&mut keys, kana::to_hiragana_expand_long(reading));
			if is_all_katakana(reading) {
				push_unique(&mut keys, reading.clone());
			}
			push_unique(&mut keys, kana::to_halfwidth_ascii(reading));
			push_unique(&mut keys, kana::to_fullwidth_ascii(reading));
		}

		for key in keys {
			lexicon.index(&key, word_id);
		}
	}
}

fn is_all_katakana(s: &str) -> bool {
	!s.is_empty() && s.chars().all(kana::is_katakana)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn ingest_row_builds_word_entry() {
		let mut lexicon = Lexicon::new();
		let row = json!(["食べる", "たべる", "v1", "", 0, ["to eat"], 1234, "ichi1"]);
		ingest_row(&mut lexicon, &row);

		let word = lexicon.get(1234).unwrap();
		assert_eq!(word.spellings, vec!["食べる".to_string()]);
		assert_eq!(word.readings, vec!["たべる".to_string(), "食べる".to_string()]);
		assert_eq!(word.pos, vec!["v1".to_string()]);
		assert_eq!(word.priority, vec!["ichi1".to_string()]);
		assert_eq!(word.definitions, vec!["to eat".to_string()]);
	}

	#[test]
	fn spelling_is_also_indexed_as_a_reading() {
		let mut lexicon = Lexicon::new();
		let row = json!(["食べる", "たべる", "v1", "", 0, ["to eat"], 1234, ""]);
		ingest_row(&mut lexicon, &row);
		let word = lexicon.get(1234).unwrap();
		assert!(word.readings.contains(&"食べる".to_string()));
	}

	#[test]
	fn skips_rows_with_non_integer_sequence() {
		let mut lexicon = Lexicon::new();
		let row = json!(["x", "x", "", "", 0, [], "not-a-number", ""]);
		ingest_row(&mut lexicon, &row);
		assert_eq!(lexicon.word_count(), 0);
	}

	#[test]
	fn forms_table_subtree_is_skipped() {
		let mut out = Vec::new();
		let value = json!([
			{"data": {"content": "formsTable"}, "content": "eats, ate, eating"},
			"to eat"
		]);
		extract_definitions(&value, &mut out);
		assert_eq!(out, vec!["to eat".to_string()]);
	}

	#[test]
	fn text_key_is_read_as_an_alternative_to_content() {
		let mut out = Vec::new();
		let value = json!({"lang": "en", "text": "to eat"});
		extract_definitions(&value, &mut out);
		assert_eq!(out, vec!["to eat".to_string()]);
	}

	#[test]
	fn english_lang_context_propagates_into_nested_arrays() {
		let mut out = Vec::new();
		let value = json!({"lang": "en", "content": ["to eat", {"content": "to consume"}]});
		extract_definitions(&value, &mut out);
		assert_eq!(out, vec!["to eat".to_string(), "to consume".to_string()]);
	}

	#[test]
	fn custom_oumagatoki_indexes_its_kanji_spelling_as_a_reading() {
		let mut lexicon = Lexicon::new();
		inject_custom_words(&mut lexicon);
		reindex(&mut lexicon);
		assert!(lexicon.lookup("逢魔").contains(&CUSTOM_OUMAGATOKI));
	}

	#[test]
	fn decorative_star_is_stripped_from_priority_tags() {
		assert_eq!(parse_priority_tags("ichi1⭐ news2"), vec!["ichi1", "news2"]);
		assert_eq!(parse_priority_tags("ichi"), vec!["ichi1"]);
	}

	#[test]
	fn reindex_covers_spellings_and_readings() {
		let mut lexicon = Lexicon::new();
		let row = json!(["食べる", "たべる", "v1", "", 0, ["to eat"], 1234, ""]);
		ingest_row(&mut lexicon, &row);
		reindex(&mut lexicon);
		assert_eq!(lexicon.lookup("食べる"), &[1234]);
		assert_eq!(lexicon.lookup("たべる"), &[1234]);
	}
}
