//! Anchoring: resolving a single merged morpheme to a dictionary entry.
//!
//! This is the part of the pipeline that decides *which* word in the
//! [Lexicon](crate::lexicon::Lexicon) a morpheme actually is. It never
//! errors - an unanchored morpheme just means the tokenizer emits its
//! surface text as a plain gap instead of a matched word.

use crate::deconjugate::Deconjugator;
use crate::kana;
use crate::lexicon::{priority_score, JmWord, Lexicon};
use crate::morpheme::Morpheme;
use crate::pos::{self, POSSection, POS};

const MAX_DECONJ_ATTEMPTS: usize = 3;
const MIN_TRIM_LENGTH: usize = 2;

/// A morpheme resolved against the lexicon: the dictionary entry it
/// anchors to, the reading it matched under, and the surface text it
/// covers in the original input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckWord {
	pub word_id: u64,
	pub original_text: String,
	pub reading_index: usize,
	pub parts_of_speech: Vec<POS>,
}

/// Attempts to anchor `morph` against `lexicon`, retrying with a bounded
/// set of surface-text simplifications when the first attempt fails.
///
/// Mirrors the `_process_word` retry loop: up to [MAX_DECONJ_ATTEMPTS]
/// attempts, each one simplifying the working surface text a little more
/// (trim a trailing sokuon/long-vowel/doubled character, drop a leading
/// `お` honorific, strip long-vowel marks) before giving up. The returned
/// [DeckWord], if any, always reports the *original* surface text,
/// regardless of which simplified form actually matched.
pub fn anchor_word(morph: &Morpheme, lexicon: &Lexicon, deconjugator: &Deconjugator) -> Option<DeckWord> {
	let mut cur = morph.clone();
	let original_surface = morph.surface.clone();

	let mut attempts = 0;
	while attempts < MAX_DECONJ_ATTEMPTS {
		attempts += 1;
		if let Some(mut dw) = try_process(&cur, lexicon, deconjugator) {
			dw.original_text = original_surface;
			return Some(dw);
		}
		match next_fallback(&cur.surface) {
			Some(text) => cur.surface = text,
			None => break,
		}
	}
	None
}

/// Chooses the noun or verb/adjective anchoring strategy based on the
/// morpheme's part of speech, falling back to the other strategy (with
/// the part of speech temporarily substituted) if the primary one fails.
fn try_process(w: &Morpheme, lexicon: &Lexicon, deconjugator: &Deconjugator) -> Option<DeckWord> {
	let looks_conjugatable = matches!(w.pos, POS::Verb | POS::IAdjective | POS::Auxiliary | POS::NaAdjective)
		|| pos::decode_section(&w.pos1) == POSSection::Adjectival;

	if looks_conjugatable {
		if let Some(dw) = deconjugate_verb_or_adjective(w, lexicon, deconjugator) {
			return Some(dw);
		}
		return deconjugate_word(w, lexicon);
	}

	if let Some(dw) = deconjugate_word(w, lexicon) {
		return Some(dw);
	}

	for alt in [POS::Verb, POS::IAdjective, POS::NaAdjective] {
		let mut alt_w = w.clone();
		alt_w.pos = alt;
		if let Some(mut dw) = deconjugate_verb_or_adjective(&alt_w, lexicon, deconjugator) {
			dw.parts_of_speech = vec![w.pos];
			return Some(dw);
		}
	}
	None
}

/// Noun anchoring strategy: look the surface (and its hiragana fold) up
/// directly in the lexicon, then rank candidates by part-of-speech match
/// and display priority.
fn deconjugate_word(w: &Morpheme, lexicon: &Lexicon) -> Option<DeckWord> {
	let text = w.surface.as_str();
	if is_digit_str(text) || (text.chars().count() == 1 && is_ascii_or_fullwidth_letter(text)) {
		return None;
	}

	let mut cand_ids: Vec<u64> = lexicon.lookup(text).to_vec();
	let hira = kana::to_hiragana_preserve_long(text);
	let hira_ids = lexicon.lookup(&hira);
	if !hira_ids.is_empty() {
		for id in hira_ids {
			if !cand_ids.contains(id) {
				cand_ids.push(*id);
			}
		}
		cand_ids.sort_unstable();
	}
	if cand_ids.is_empty() {
		return None;
	}
	if !cand_ids.iter().any(|id| lexicon.get(*id).is_some()) {
		return None;
	}

	let is_kana = kana::is_kana(text);
	let mut matches: Vec<&JmWord> = Vec::new();
	for id in &cand_ids {
		if let Some(jw) = lexicon.get(*id) {
			if pos::decode_pos_list(jw.pos.iter().map(String::as_str)).contains(&w.pos) {
				matches.push(jw);
			}
		}
	}

	let jm = if !matches.is_empty() {
		matches.sort_by(|a, b| priority_score(b, is_kana).cmp(&priority_score(a, is_kana)));
		matches[0]
	} else {
		lexicon.get(cand_ids[0])?
	};

	let idx = compute_reading_index(jm, text)?;
	Some(DeckWord {
		word_id: jm.word_id,
		original_text: w.surface.clone(),
		reading_index: idx,
		parts_of_speech: vec![w.pos],
	})
}

/// Verb/adjective anchoring strategy: run the deconjugator over the
/// hiragana-folded surface, then rank the resulting forms by length
/// (longest first) and by how closely they match the morpheme's
/// dictionary form or surface text before checking part-of-speech
/// agreement against the lexicon.
fn deconjugate_verb_or_adjective(w: &Morpheme, lexicon: &Lexicon, deconjugator: &Deconjugator) -> Option<DeckWord> {
	let hira = kana::to_hiragana_expand_long(&w.surface);
	let mut forms = deconjugator.deconjugate(&hira);
	forms.sort_by(|a, b| b.text.chars().count().cmp(&a.text.chars().count()));

	let mut candidates: Vec<(String, Vec<u64>)> = Vec::new();
	for f in &forms {
		let ids = lexicon.lookup(&f.text);
		if !ids.is_empty() {
			candidates.push((f.text.clone(), ids.to_vec()));
		}
	}
	if candidates.is_empty() {
		return None;
	}

	let base_dict_source = if !w.dictionary_form.is_empty() { w.dictionary_form.as_str() } else { w.surface.as_str() };
	let base_dict = kana::to_hiragana_preserve_long(base_dict_source);
	let base_word = kana::to_hiragana_preserve_long(&w.surface);
	let lift = |key: &str| -> u8 {
		if key == base_dict {
			0
		} else if key == base_word {
			1
		} else {
			2
		}
	};
	candidates.sort_by_key(|(key, _)| lift(key));

	let mut best: Option<(&JmWord, &str)> = None;
	'outer: for (key, ids) in &candidates {
		for id in ids {
			if let Some(jw) = lexicon.get(*id) {
				if pos::decode_pos_list(jw.pos.iter().map(String::as_str)).contains(&w.pos) {
					best = Some((jw, key.as_str()));
					break 'outer;
				}
			}
		}
	}

	let (jm, key) = best?;
	let idx = compute_reading_index(jm, key).unwrap_or(0);
	Some(DeckWord {
		word_id: jm.word_id,
		original_text: w.surface.clone(),
		reading_index: idx,
		parts_of_speech: vec![w.pos],
	})
}

/// Finds the index of `surface_or_reading` within `jm`'s readings list,
/// trying an exact match, then a hiragana-preserve-long fold, then a
/// hiragana-expand-long fold.
fn compute_reading_index(jm: &JmWord, surface_or_reading: &str) -> Option<usize> {
	if let Some(i) = jm.readings.iter().position(|r| r == surface_or_reading) {
		return Some(i);
	}
	let hira_key = kana::to_hiragana_preserve_long(surface_or_reading);
	if let Some(i) = jm.readings.iter().position(|r| kana::to_hiragana_preserve_long(r) == hira_key) {
		return Some(i);
	}
	let hira_key = kana::to_hiragana_expand_long(surface_or_reading);
	jm.readings.iter().position(|r| kana::to_hiragana_expand_long(r) == hira_key)
}

/// The next surface-text simplification to try after an anchoring
/// attempt fails, or `None` once no more fallbacks apply.
///
/// Tries, in order: trimming a trailing sokuon/long-vowel-mark/doubled
/// character (only once the text is longer than [MIN_TRIM_LENGTH]),
/// dropping a leading `お` honorific, and stripping every long-vowel
/// mark from the text.
fn next_fallback(text: &str) -> Option<String> {
	let chars: Vec<char> = text.chars().collect();
	let n = chars.len();
	if n > MIN_TRIM_LENGTH && (matches!(chars[n - 1], 'っ' | 'ー') || chars[n - 1] == chars[n - 2]) {
		return Some(chars[..n - 1].iter().collect());
	}
	if chars.first() == Some(&'お') {
		return Some(chars[1..].iter().collect());
	}
	if text.contains('ー') {
		return Some(text.replace('ー', ""));
	}
	None
}

fn is_digit_str(s: &str) -> bool {
	!s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || (0xFF10..=0xFF19).contains(&(c as u32)))
}

fn is_ascii_or_fullwidth_letter(s: &str) -> bool {
	match s.chars().next() {
		Some(c) => {
			c.is_ascii_alphabetic() || ('\u{FF41}'..='\u{FF5A}').contains(&c) || ('\u{FF21}'..='\u{FF3A}').contains(&c)
		}
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexicon::JmWord;

	fn lexicon_with(word: JmWord, keys: &[&str]) -> Lexicon {
		let mut lex = Lexicon::new();
		let id = word.word_id;
		lex.insert_word(word);
		for key in keys {
			lex.index(key, id);
		}
		lex
	}

	#[test]
	fn noun_anchors_directly_by_surface() {
		let word = JmWord {
			word_id: 1,
			readings: vec!["ほん".to_string(), "本".to_string()],
			spellings: vec!["本".to_string()],
			pos: vec!["n".to_string()],
			priority: vec![],
			definitions: vec![],
		};
		let lex = lexicon_with(word, &["本"]);
		let deconjugator = Deconjugator::new(vec![]);
		let morph = Morpheme::plain("本", POS::Noun);
		let dw = anchor_word(&morph, &lex, &deconjugator).expect("should anchor");
		assert_eq!(dw.word_id, 1);
		assert_eq!(dw.original_text, "本");
	}

	#[test]
	fn single_ascii_letter_never_anchors_as_noun() {
		let lex = Lexicon::new();
		let deconjugator = Deconjugator::new(vec![]);
		let morph = Morpheme::plain("A", POS::Noun);
		assert!(anchor_word(&morph, &lex, &deconjugator).is_none());
	}

	#[test]
	fn fallback_trims_trailing_long_vowel_mark() {
		assert_eq!(next_fallback("すごーい"), Some("すごー".to_string()));
	}

	#[test]
	fn fallback_drops_leading_honorific() {
		assert_eq!(next_fallback("お水"), Some("水".to_string()));
	}

	#[test]
	fn fallback_gives_up_when_nothing_applies() {
		assert_eq!(next_fallback("水"), None);
	}

	#[test]
	fn verb_anchors_via_deconjugation() {
		use crate::deconjugate::{Rule, RuleKind};

		let word = JmWord {
			word_id: 7,
			readings: vec!["たべる".to_string(), "食べる".to_string()],
			spellings: vec!["食べる".to_string()],
			pos: vec!["v1".to_string()],
			priority: vec![],
			definitions: vec![],
		};
		let lex = lexicon_with(word, &["たべる", "食べる"]);
		let past_tense = Rule {
			kind: RuleKind::Standard,
			context: None,
			dec_end: vec!["る".to_string()],
			con_end: vec!["た".to_string()],
			dec_tag: None,
			con_tag: Some(vec!["past".to_string()]),
			detail: Some("past-tense".to_string()),
		};
		let deconjugator = Deconjugator::new(vec![past_tense]);

		let mut morph = Morpheme::plain("食べた", POS::Verb);
		morph.dictionary_form = "食べる".to_string();
		let dw = deconjugate_verb_or_adjective(&morph, &lex, &deconjugator).expect("should anchor");
		assert_eq!(dw.word_id, 7);
	}
}
