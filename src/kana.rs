//! Kana folding and normalization.
//!
//! Mirrors the character-range arithmetic used throughout the rest of the
//! crate for kana classification, but adds the folding operations the
//! dictionary index and the anchoring stage need: katakana/hiragana
//! normalization, long-vowel (`ー`) expansion and ASCII width folding.

use std::collections::HashMap;

const HIRAGANA_START: u32 = 0x3041;
const HIRAGANA_END: u32 = 0x3096;
const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30FA;
/// Upper bound of the katakana range that maps 1:1 onto hiragana by
/// subtracting `0x60` (katakana ｦ-ヶ).
const KATAKANA_FOLD_END: u32 = 0x30F6;
const KATAKANA_TO_HIRAGANA_OFFSET: u32 = 0x60;

#[inline]
fn char_in_range(c: char, start: u32, end: u32) -> bool {
	let c = c as u32;
	c >= start && c <= end
}

/// Returns true if `c` lies in the hiragana block (U+3041-U+3096).
pub fn is_hiragana(c: char) -> bool {
	char_in_range(c, HIRAGANA_START, HIRAGANA_END)
}

/// Returns true if `c` lies in the katakana block (U+30A1-U+30FA).
pub fn is_katakana(c: char) -> bool {
	char_in_range(c, KATAKANA_START, KATAKANA_END)
}

/// Returns true if every character in `s` is hiragana, katakana or the long
/// vowel mark `ー`.
pub fn is_kana(s: &str) -> bool {
	s.chars().all(|c| is_hiragana(c) || is_katakana(c) || c == 'ー')
}

/// Converts katakana to hiragana, leaving all other characters untouched.
///
/// `ゎ`/`ヮ` are normalized to `わ` before the main fold, since they fall
/// outside the simple code-point-subtraction range.
pub fn katakana_to_hiragana(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		let c = match c {
			'ゎ' | 'ヮ' => 'わ',
			c => c,
		};
		if char_in_range(c, KATAKANA_START, KATAKANA_FOLD_END) {
			let code = (c as u32) - KATAKANA_TO_HIRAGANA_OFFSET;
			out.push(unsafe { std::char::from_u32_unchecked(code) });
		} else {
			out.push(c);
		}
	}
	out
}

lazy_static! {
	/// Maps a hiragana mora to the vowel it ends on, for `ー` expansion.
	static ref MORA_VOWEL: HashMap<char, char> = {
		let mut m = HashMap::new();
		let rows: &[(&str, char)] = &[
			("あかさたなはまやらわがざだばぱゃゎ", 'あ'),
			("いきしちにひみりぎじぢびぴ", 'い'),
			("うくすつぬふむゆるぐずづぶぷゅゔぅ", 'う'),
			("えけせてねへめれげぜでべぺぇ", 'え'),
			("おこそとのほもよろをごぞどぼぽょぉ", 'お'),
		];
		for (chars, vowel) in rows {
			for c in chars.chars() {
				m.insert(c, *vowel);
			}
		}
		m
	};
}

/// Expands `ー` into an explicit vowel based on the preceding hiragana
/// mora, e.g. `らーめん` -> `らあめん`.
///
/// A `ー` with no preceding recognized mora is dropped.
pub fn expand_long_vowels(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	let mut last_vowel: Option<char> = None;
	for c in s.chars() {
		if c == 'ー' {
			if let Some(v) = last_vowel {
				out.push(v);
			}
			continue;
		}
		if let Some(&v) = MORA_VOWEL.get(&c) {
			last_vowel = Some(v);
		} else {
			last_vowel = None;
		}
		out.push(c);
	}
	out
}

/// Folds katakana to hiragana, keeping `ー` marks as-is.
pub fn to_hiragana_preserve_long(s: &str) -> String {
	katakana_to_hiragana(s)
}

/// Folds katakana to hiragana and expands any `ー` long-vowel marks.
pub fn to_hiragana_expand_long(s: &str) -> String {
	expand_long_vowels(&to_hiragana_preserve_long(s))
}

const ASCII_FOLD_OFFSET: u32 = 0xFEE0;

/// Converts plain ASCII letters and digits to their fullwidth forms.
/// Other characters pass through unchanged.
pub fn to_fullwidth_ascii(s: &str) -> String {
	s.chars()
		.map(|c| {
			if c.is_ascii_alphanumeric() {
				unsafe { std::char::from_u32_unchecked((c as u32) + ASCII_FOLD_OFFSET) }
			} else {
				c
			}
		})
		.collect()
}

/// Converts fullwidth ASCII letters and digits to their halfwidth (plain
/// ASCII) forms. Other characters pass through unchanged.
pub fn to_halfwidth_ascii(s: &str) -> String {
	s.chars()
		.map(|c| {
			let code = c as u32;
			if code > ASCII_FOLD_OFFSET {
				let folded = code - ASCII_FOLD_OFFSET;
				if let Some(folded) = std::char::from_u32(folded) {
					if folded.is_ascii_alphanumeric() {
						return folded;
					}
				}
			}
			c
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn katakana_folds_to_hiragana() {
		assert_eq!(katakana_to_hiragana("カタカナ"), "かたかな");
		assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
		assert_eq!(katakana_to_hiragana("ヮ"), "わ");
	}

	#[test]
	fn long_vowel_expands_from_prior_mora() {
		assert_eq!(expand_long_vowels("らーめん"), "らあめん");
		assert_eq!(expand_long_vowels("けーき"), "けえき");
		assert_eq!(expand_long_vowels("ーらめん"), "らめん");
	}

	#[test]
	fn hiragana_expand_long_composes_fold_and_expand() {
		assert_eq!(to_hiragana_expand_long("ラーメン"), "らあめん");
	}

	#[test]
	fn width_folding_is_involution_on_ascii() {
		let s = "Hello123";
		let full = to_fullwidth_ascii(s);
		assert_ne!(full, s);
		assert_eq!(to_halfwidth_ascii(&full), s);
	}

	#[test]
	fn preserve_long_is_idempotent() {
		let once = to_hiragana_preserve_long("ラーメン");
		let twice = to_hiragana_preserve_long(&once);
		assert_eq!(once, twice);
	}
}
