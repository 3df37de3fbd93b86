//! Dictionary-anchored Japanese text segmentation.
//!
//! Given raw Japanese text and a morphological analyzer to drive it
//! ([Analyzer]), a [Segmenter] splits the text into dictionary-anchored
//! words (via [MergePipeline](merge::MergePipeline), [Deconjugator] and
//! [Lexicon]) and reports either plain spans ([Segmenter::segment]) or
//! full match detail including which dictionary entry each word resolved
//! to ([Segmenter::collect_matches]).

#[macro_use]
extern crate serde;
extern crate serde_json;

extern crate bincode;
extern crate data_encoding;
extern crate regex;
extern crate ring;
extern crate slog;
extern crate slog_scope;
extern crate slog_stdlog;
extern crate slog_term;
extern crate zip;

#[macro_use]
extern crate lazy_static;

#[macro_use]
mod base;

pub mod anchor;
pub mod config;
pub mod deconjugate;
pub mod error;
pub mod filter;
pub mod kana;
pub mod lexicon;
pub mod loader;
pub mod logging;
pub mod merge;
pub mod morpheme;
pub mod pos;
pub mod tokenizer;
pub mod util;

use slog::Logger;

use config::Config;
use deconjugate::Deconjugator;
use error::Result;
use lexicon::Lexicon;
use morpheme::Analyzer;
use tokenizer::MatchResult;

/// Owns the lexicon and deconjugation rule table a segmentation run needs,
/// and threads a `&dyn Analyzer` through [tokenizer::segment]/
/// [tokenizer::collect_matches] on every call instead of storing it, since
/// the analyzer is the caller's external collaborator, not crate state.
pub struct Segmenter {
	lexicon: Lexicon,
	deconjugator: Deconjugator,
	log: Logger,
}

impl Segmenter {
	/// Builds a [Segmenter] from an already-loaded [Lexicon], using the
	/// compiled-in [Deconjugator::default_rules] and a discarding logger.
	pub fn new(lexicon: Lexicon) -> Segmenter {
		Segmenter { lexicon, deconjugator: Deconjugator::default_rules(), log: Logger::root(slog::Discard, slog::o!()) }
	}

	/// Loads the dictionary directory resolved by `config`
	/// ([Config::resolve_dictionary_path]) into a fresh [Segmenter], using
	/// the compiled-in default deconjugation rule table and a terminal
	/// logger ([logging::terminal_logger]) in place of [Segmenter::new]'s
	/// discarding one.
	///
	/// Returns [error::Error::ResourceMissing] if `config` resolves no
	/// directory, or propagates an ingestion error.
	pub fn load(config: &Config) -> Result<Segmenter> {
		let dir = config
			.resolve_dictionary_path()
			.ok_or_else(|| error::Error::ResourceMissing("no dictionary directory configured".to_string()))?;
		let lexicon = loader::yomitan::load_directory(&dir)?;
		Ok(Segmenter::new(lexicon).with_logger(logging::terminal_logger()))
	}

	/// Overrides the deconjugation rule table, e.g. with one loaded through
	/// [Deconjugator::load_rules_json].
	pub fn with_deconjugator(mut self, deconjugator: Deconjugator) -> Segmenter {
		self.deconjugator = deconjugator;
		self
	}

	/// Attaches a [Logger] that query timing and completion are reported
	/// through, replacing the default discarding logger.
	pub fn with_logger(mut self, log: Logger) -> Segmenter {
		self.log = log;
		self
	}

	pub fn lexicon(&self) -> &Lexicon {
		&self.lexicon
	}

	/// Splits `text` into a sequence of spans: anchored dictionary words
	/// interleaved with the unmatched text between them. See
	/// [tokenizer::segment].
	pub fn segment(&self, text: &str, analyzer: &dyn Analyzer) -> Vec<String> {
		tokenizer::segment(&self.log, text, analyzer, &self.lexicon, &self.deconjugator)
	}

	/// Runs the same pipeline as [Segmenter::segment], returning full match
	/// detail instead of plain spans. See [tokenizer::collect_matches].
	pub fn collect_matches(&self, text: &str, analyzer: &dyn Analyzer) -> Vec<MatchResult> {
		tokenizer::collect_matches(&self.log, text, analyzer, &self.lexicon, &self.deconjugator)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexicon::JmWord;
	use crate::morpheme::{Morpheme, StubAnalyzer};
	use crate::pos::POS;

	#[test]
	fn segmenter_anchors_a_known_word() {
		let mut lexicon = Lexicon::new();
		lexicon.insert_word(JmWord {
			word_id: 1,
			readings: vec!["ほん".to_string(), "本".to_string()],
			spellings: vec!["本".to_string()],
			pos: vec!["n".to_string()],
			priority: vec![],
			definitions: vec![],
		});
		lexicon.index("本", 1);
		lexicon.index("ほん", 1);

		let segmenter = Segmenter::new(lexicon);
		let analyzer = StubAnalyzer::new(vec![Morpheme::plain("本", POS::Noun), Morpheme::plain("を", POS::Particle)]);

		let matches = segmenter.collect_matches("本を", &analyzer);
		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].word_id, 1);

		let tokens = segmenter.segment("本を", &analyzer);
		assert_eq!(tokens.concat(), "本を");
	}

	#[test]
	fn load_without_configured_path_errors() {
		let config = Config::new();
		assert!(Segmenter::load(&config).is_err());
	}
}
