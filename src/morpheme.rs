//! Morphemes and the external morphological analyzer contract.

use crate::pos::POS;

/// A single morpheme as produced by the upstream morphological analyzer,
/// after decoding its raw tags into a [POS].
///
/// Immutable: every pipeline stage builds new values rather than mutating
/// one in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
	/// The exact substring of the input text this morpheme covers.
	pub surface: String,

	/// Decoded coarse part-of-speech.
	pub pos: POS,

	/// First POS subsection raw tag (conjugation class, etc).
	pub pos1: String,

	/// Second POS subsection raw tag.
	pub pos2: String,

	/// Third POS subsection raw tag.
	pub pos3: String,

	/// Normalized form (e.g. katakana-folded) of the surface text.
	pub normalized_form: String,

	/// Dictionary (citation) form of the morpheme.
	pub dictionary_form: String,

	/// Reading of the surface text, in kana.
	pub reading: String,
}

impl Morpheme {
	/// Builds a morpheme whose surface, normalized, dictionary and reading
	/// forms are all the given text. Convenient for tests and for
	/// synthesizing morphemes inside merge-pipeline passes.
	pub fn plain(surface: &str, pos: POS) -> Morpheme {
		Morpheme {
			surface: surface.to_string(),
			pos,
			pos1: String::new(),
			pos2: String::new(),
			pos3: String::new(),
			normalized_form: surface.to_string(),
			dictionary_form: surface.to_string(),
			reading: surface.to_string(),
		}
	}
}

/// Analysis granularity requested from an [Analyzer].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AnalysisMode {
	/// Normal tokenization.
	Normal,
	/// Search-oriented tokenization, favoring shorter units.
	Search,
	/// Extract the smallest possible morpheme units.
	Extended,
}

/// External morphological analyzer contract.
///
/// The real backend (e.g. a MeCab/Sudachi/Kuromoji-style tagger) lives
/// outside this crate; [Analyzer] is the seam a caller plugs it in through.
pub trait Analyzer {
	/// Splits `text` into a sequence of morphemes.
	fn analyze(&self, text: &str, mode: AnalysisMode) -> Vec<Morpheme>;
}

/// Test double for [Analyzer] that returns a fixed, pre-computed morpheme
/// sequence regardless of the input text.
#[cfg(test)]
pub struct StubAnalyzer {
	morphemes: Vec<Morpheme>,
}

#[cfg(test)]
impl StubAnalyzer {
	pub fn new(morphemes: Vec<Morpheme>) -> StubAnalyzer {
		StubAnalyzer { morphemes }
	}
}

#[cfg(test)]
impl Analyzer for StubAnalyzer {
	fn analyze(&self, _text: &str, _mode: AnalysisMode) -> Vec<Morpheme> {
		self.morphemes.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stub_analyzer_returns_fixed_morphemes() {
		let morphs = vec![Morpheme::plain("本", POS::Noun)];
		let analyzer = StubAnalyzer::new(morphs.clone());
		assert_eq!(analyzer.analyze("anything", AnalysisMode::Normal), morphs);
	}
}
