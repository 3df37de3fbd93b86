//! Text preprocessing run before a morphological analyzer ever sees the
//! input.
//!
//! Strips everything the analyzer and the rest of the pipeline have no use
//! for (Latin punctuation noise, control characters, most symbol blocks)
//! and inserts newline/space padding around quotation and bracket pairs so
//! the analyzer tokenizes them as separate words instead of fusing them
//! onto the text they wrap.

use regex::Regex;

lazy_static! {
	/// Everything outside this character-class survives; everything inside
	/// one of its ranges is dropped. Kana, CJK ideographs, fullwidth
	/// alphanumerics, `々`, common CJK punctuation and a handful of
	/// fullwidth/ASCII punctuation marks used by `preprocess_text` below.
	static ref RE_CLEAN: Regex = Regex::new(concat!(
		"[^\u{3040}-\u{309F}\u{30A0}-\u{30FF}\u{4E00}-\u{9FAF}\u{FF21}-\u{FF3A}\u{FF41}-\u{FF5A}\u{FF10}-\u{FF19}",
		"\u{3005}\u{3001}-\u{3003}\u{3008}-\u{3011}\u{3014}-\u{301F}\u{FF01}-\u{FF0F}\u{FF1A}-\u{FF1F}\u{FF3B}-\u{FF3F}",
		"\u{FF5B}-\u{FF60}\u{FF62}-\u{FF65}\u{FF0E}\n\u{2026}\u{3000}\u{2015}\u{2500}()\u{3002}\u{FF01}\u{FF1F}\u{300C}\u{300D}\u{FF09}]",
	)).unwrap();
}

/// Cleans raw input text before it is handed to an [Analyzer](crate::morpheme::Analyzer).
///
/// Removes everything [RE_CLEAN] rejects, then pads quotation and bracket
/// pairs with line breaks so a downstream analyzer splits them off as their
/// own tokens rather than gluing them to neighboring words. Finally folds
/// an ellipsis immediately followed by a line break into a full stop, so
/// the merge pipeline's sentence-boundary passes see a consistent marker.
pub fn clean_for_analysis(text: &str) -> String {
	let text = text.replace('<', " ").replace('>', " ");
	let text = RE_CLEAN.replace_all(&text, "").into_owned();

	let text = text.replace('「', "\n「 ");
	let text = text.replace('」', " 」\n");
	let text = text.replace('〈', " \n〈 ");
	let text = text.replace('〉', " 〉\n");
	let text = text.replace('《', " \n《 ");
	let text = text.replace('》', " 》\n");
	let text = text.replace('“', " \n“ ");
	let text = text.replace('”', " ”\n");
	let text = text.replace('―', " ― ");
	let text = text.replace('。', " 。\n");
	let text = text.replace('\u{FF01}', " \u{FF01}\n");
	let text = text.replace('\u{FF1F}', " \u{FF1F}\n");

	text.replace("\u{2026}\r", "。\r").replace("\u{2026}\n", "。\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_latin_punctuation_noise() {
		let cleaned = clean_for_analysis("Hello, world!");
		assert!(!cleaned.contains(','));
		assert!(!cleaned.contains('H'));
	}

	#[test]
	fn keeps_kana_and_kanji() {
		let cleaned = clean_for_analysis("図書館で本を借りました。");
		assert!(cleaned.contains("図書館"));
		assert!(cleaned.contains("借りました"));
	}

	#[test]
	fn pads_opening_and_closing_quotes() {
		let cleaned = clean_for_analysis("「本」");
		assert!(cleaned.contains("\n「 "));
		assert!(cleaned.contains(" 」\n"));
	}

	#[test]
	fn folds_ellipsis_before_newline_into_full_stop() {
		let cleaned = clean_for_analysis("待って\u{2026}\n");
		assert!(cleaned.contains("。\n"));
	}

	#[test]
	fn empty_input_stays_empty() {
		assert_eq!(clean_for_analysis(""), "");
	}
}
