//! Tokenizer: the crate's two public segmentation entry points.
//!
//! `segment` and `collect_matches` both run the same pipeline (clean ->
//! analyze -> merge -> clean-per-word -> anchor) and differ only in what
//! they hand back: a flat list of text spans, or the full match detail
//! including which dictionary entry each anchored word resolved to.

use regex::Regex;
use slog::Logger;

use crate::anchor::{self, DeckWord};
use crate::deconjugate::Deconjugator;
use crate::filter;
use crate::lexicon::Lexicon;
use crate::merge::MergePipeline;
use crate::morpheme::{AnalysisMode, Analyzer};
use crate::pos::POS;

lazy_static! {
	/// Everything outside this class is stripped from an anchored
	/// morpheme's surface text before lookup: plain ASCII letters/digits,
	/// kana, kanji, fullwidth alphanumerics, `々` and the fullwidth period.
	static ref CLEAN_RE: Regex = Regex::new(concat!(
		"[^a-zA-Z0-9\u{3040}-\u{309F}\u{30A0}-\u{30FF}\u{4E00}-\u{9FAF}\u{FF21}-\u{FF3A}\u{FF41}-\u{FF5A}",
		"\u{FF10}-\u{FF19}\u{3005}\u{FF0E}]",
	)).unwrap();
}

/// One anchored word: the dictionary entry it resolved to, where it sits
/// in the original text, and which reading it matched under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
	pub word_id: u64,
	pub surface: String,
	pub position: usize,
	pub reading_index: usize,
	pub parts_of_speech: Vec<POS>,
}

/// Splits `text` into a sequence of spans: anchored dictionary words
/// interleaved with the unmatched text between them.
///
/// Concatenating the returned strings always reproduces `text` exactly.
pub fn segment(log: &Logger, text: &str, analyzer: &dyn Analyzer, lexicon: &Lexicon, deconjugator: &Deconjugator) -> Vec<String> {
	time!(t_segment);
	let matches = run_pipeline(text, analyzer, lexicon, deconjugator);

	let mut tokens = Vec::new();
	let mut current = 0;
	for m in &matches {
		if m.position > current {
			tokens.push(text[current..m.position].to_string());
		}
		tokens.push(m.surface.clone());
		current = m.position + m.surface.len();
	}
	if current < text.len() {
		tokens.push(text[current..].to_string());
	}

	slog::info!(log, "segment complete"; t_segment);
	tokens
}

/// Runs the same pipeline as [segment], returning full match detail
/// (dictionary entry, position, reading index) instead of plain spans.
pub fn collect_matches(
	log: &Logger,
	text: &str,
	analyzer: &dyn Analyzer,
	lexicon: &Lexicon,
	deconjugator: &Deconjugator,
) -> Vec<MatchResult> {
	time!(t_collect);
	let matches = run_pipeline(text, analyzer, lexicon, deconjugator);
	slog::info!(log, "collect_matches complete"; t_collect);
	matches
}

fn run_pipeline(text: &str, analyzer: &dyn Analyzer, lexicon: &Lexicon, deconjugator: &Deconjugator) -> Vec<MatchResult> {
	let preprocessed = filter::clean_for_analysis(text);
	let morphemes = analyzer.analyze(&preprocessed, AnalysisMode::Normal);
	let morphemes = MergePipeline::run(morphemes);

	let mut cleaned = Vec::new();
	for mut w in morphemes {
		let t = CLEAN_RE.replace_all(&w.surface, "").into_owned();
		if t.is_empty() {
			continue;
		}
		let t = t.replace("ッー", "");
		if t.is_empty() {
			continue;
		}
		w.surface = t;
		cleaned.push(w);
	}

	let anchored: Vec<DeckWord> = cleaned.iter().filter_map(|w| anchor::anchor_word(w, lexicon, deconjugator)).collect();

	words_with_positions(&anchored, text)
}

/// Locates each anchored word's original surface text in `text`, walking
/// forward so repeated surfaces are matched left to right instead of all
/// collapsing onto the first occurrence. A word whose surface cannot be
/// found past the current cursor is silently dropped.
fn words_with_positions(words: &[DeckWord], text: &str) -> Vec<MatchResult> {
	let mut out = Vec::new();
	let mut current = 0;
	for w in words {
		if let Some(offset) = text[current..].find(&w.original_text) {
			let position = current + offset;
			out.push(MatchResult {
				word_id: w.word_id,
				surface: w.original_text.clone(),
				position,
				reading_index: w.reading_index,
				parts_of_speech: w.parts_of_speech.clone(),
			});
			current = position + w.original_text.len();
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexicon::JmWord;
	use crate::morpheme::{Morpheme, StubAnalyzer};

	fn test_logger() -> Logger {
		Logger::root(slog::Discard, slog::o!())
	}

	fn lexicon_with_word(word_id: u64, spelling: &str, reading: &str, pos: &str) -> Lexicon {
		let mut lex = Lexicon::new();
		lex.insert_word(JmWord {
			word_id,
			readings: vec![reading.to_string(), spelling.to_string()],
			spellings: vec![spelling.to_string()],
			pos: vec![pos.to_string()],
			priority: vec![],
			definitions: vec![],
		});
		lex.index(spelling, word_id);
		lex.index(reading, word_id);
		lex
	}

	#[test]
	fn segment_reproduces_text_when_concatenated() {
		let lex = lexicon_with_word(1, "本", "ほん", "n");
		let deconjugator = Deconjugator::new(vec![]);
		let analyzer = StubAnalyzer::new(vec![Morpheme::plain("本", POS::Noun), Morpheme::plain("を", POS::Particle)]);
		let log = test_logger();

		let tokens = segment(&log, "本を", &analyzer, &lex, &deconjugator);
		assert_eq!(tokens.concat(), "本を");
	}

	#[test]
	fn empty_text_segments_to_nothing() {
		let lex = Lexicon::new();
		let deconjugator = Deconjugator::new(vec![]);
		let analyzer = StubAnalyzer::new(vec![]);
		let log = test_logger();
		assert_eq!(segment(&log, "", &analyzer, &lex, &deconjugator), Vec::<String>::new());
	}

	#[test]
	fn collect_matches_anchors_a_known_word_at_its_position() {
		let lex = lexicon_with_word(1, "本", "ほん", "n");
		let deconjugator = Deconjugator::new(vec![]);
		let analyzer = StubAnalyzer::new(vec![Morpheme::plain("本", POS::Noun), Morpheme::plain("を", POS::Particle)]);
		let log = test_logger();

		let matches = collect_matches(&log, "本を", &analyzer, &lex, &deconjugator);
		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].word_id, 1);
		assert_eq!(matches[0].position, 0);
	}

	#[test]
	fn unanchored_text_falls_back_to_a_plain_token() {
		let lex = Lexicon::new();
		let deconjugator = Deconjugator::new(vec![]);
		let analyzer = StubAnalyzer::new(vec![Morpheme::plain("ABC", POS::Unknown)]);
		let log = test_logger();

		let tokens = segment(&log, "ABC", &analyzer, &lex, &deconjugator);
		assert_eq!(tokens, vec!["ABC".to_string()]);
	}
}
