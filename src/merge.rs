//! The merge pipeline: a fixed sequence of passes that turn a raw
//! analyzer morpheme stream into the word boundaries the rest of the
//! crate anchors against.
//!
//! Each pass is a plain `fn(Vec<Morpheme>) -> Vec<Morpheme>`; [MergePipeline::run]
//! threads the stream through all of them in a fixed order. None of them
//! can fail - a pass that finds nothing to do returns its input unchanged.

use std::collections::HashSet;

use crate::morpheme::Morpheme;
use crate::pos::{self, POSSection, POS};

const MIN_PAIR_LENGTH: usize = 2;
const MIN_TRIPLE_LENGTH: usize = 3;
const HONORIFIC_SUFFIXES: [&str; 3] = ["さん", "ちゃん", "くん"];

/// Runs the full ordered sequence of merge passes over an analyzer's raw
/// morpheme stream.
pub struct MergePipeline;

impl MergePipeline {
	/// Applies every pass in the fixed order the rest of the crate relies
	/// on (special cases first, loose-parse cleanup last).
	pub fn run(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
		let w = process_special_cases(morphemes);
		let w = combine_prefixes(w);
		let w = combine_amounts(w);
		let w = combine_tte(w);
		let w = combine_auxiliary_verb_stem(w);
		let w = combine_adverbial_particle(w);
		let w = combine_suffix(w);
		let w = combine_auxiliary(w);
		let w = combine_verb_dependants(w);
		let w = combine_verb_possible_dependants(w);
		let w = combine_verb_dependants_suru(w);
		let w = combine_verb_dependants_teiru(w);
		let w = combine_conjunctive_particle(w);
		let w = combine_particles(w);
		let w = combine_final(w);
		let w = separate_suffix_honorifics(w);
		filter_misparse(w)
	}
}

/// A handful of closed-set rewrites and merges that are easier to special-case
/// than to express as a general combine rule: sentence-final expressions,
/// three- and two-word idioms, and a few single-word POS corrections.
fn process_special_cases(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.is_empty() {
		return morphemes;
	}

	lazy_static! {
		static ref SPECIAL3: HashSet<(&'static str, &'static str, &'static str, POS)> = {
			let mut s = HashSet::new();
			s.insert(("な", "の", "で", POS::Expression));
			s.insert(("で", "は", "ない", POS::Expression));
			s.insert(("それ", "で", "も", POS::Conjunction));
			s.insert(("なく", "なっ", "た", POS::Verb));
			s
		};
		static ref SPECIAL2: HashSet<(&'static str, &'static str, POS)> = {
			let mut s = HashSet::new();
			s.insert(("じゃ", "ない", POS::Expression));
			s.insert(("ええ", "と", POS::Interjection));
			s.insert(("どっち", "も", POS::Expression));
			s.insert(("そう", "かもしれない", POS::Expression));
			s.insert(("ファイル", "名", POS::Noun));
			s.insert(("に", "しろ", POS::Expression));
			s.insert(("だ", "けど", POS::Conjunction));
			s.insert(("だ", "が", POS::Conjunction));
			s.insert(("で", "さえ", POS::Expression));
			s.insert(("で", "すら", POS::Expression));
			s.insert(("と", "いう", POS::Expression));
			s.insert(("と", "か", POS::Conjunction));
			s.insert(("だ", "から", POS::Conjunction));
			s.insert(("これ", "まで", POS::Expression));
			s.insert(("それ", "も", POS::Conjunction));
			s.insert(("それ", "だけ", POS::Noun));
			s.insert(("くせ", "に", POS::Conjunction));
			s.insert(("の", "で", POS::Particle));
			s.insert(("誰", "も", POS::Expression));
			s.insert(("誰", "か", POS::Expression));
			s.insert(("すぐ", "に", POS::Adverb));
			s.insert(("なん", "か", POS::Particle));
			s.insert(("だっ", "た", POS::Expression));
			s.insert(("だっ", "たら", POS::Conjunction));
			s.insert(("よう", "に", POS::Expression));
			s.insert(("ん", "です", POS::Expression));
			s.insert(("ん", "だ", POS::Expression));
			s.insert(("です", "か", POS::Expression));
			s
		};
	}

	let mut out = Vec::with_capacity(morphemes.len());
	let mut i = 0;
	while i < morphemes.len() {
		let w1 = morphemes[i].clone();

		if w1.pos == POS::Conjunction && w1.surface == "で" {
			let mut rewritten = w1;
			rewritten.pos = POS::Particle;
			out.push(rewritten);
			i += 1;
			continue;
		}

		if i + 2 < morphemes.len() {
			let w2 = &morphemes[i + 1];
			let w3 = &morphemes[i + 2];
			if w1.dictionary_form == "する" && w2.surface == "て" && w3.dictionary_form == "くださる" {
				let mut combined = w1.clone();
				combined.surface = format!("{}{}{}", w1.surface, w2.surface, w3.surface);
				out.push(combined);
				i += 3;
				continue;
			}

			let found = SPECIAL3
				.iter()
				.find(|(a, b, c, _)| w1.surface == *a && w2.surface == *b && w3.surface == *c);
			if let Some((_, _, _, pos)) = found {
				let mut combined = w1.clone();
				combined.surface = format!("{}{}{}", w1.surface, w2.surface, w3.surface);
				combined.pos = *pos;
				out.push(combined);
				i += 3;
				continue;
			}
		}

		if i + 1 < morphemes.len() {
			let w2 = &morphemes[i + 1];
			let found = SPECIAL2.iter().find(|(a, b, _)| w1.surface == *a && w2.surface == *b);
			if let Some((_, _, pos)) = found {
				let mut combined = w1.clone();
				combined.surface = format!("{}{}", w1.surface, w2.surface);
				combined.pos = *pos;
				out.push(combined);
				i += 2;
				continue;
			}
		}

		if w1.surface == "でしょう" {
			let mut rewritten = w1;
			rewritten.pos = POS::Expression;
			rewritten.pos1.clear();
			rewritten.pos2.clear();
			rewritten.pos3.clear();
			out.push(rewritten);
			i += 1;
			continue;
		}

		if w1.surface == "だし" {
			out.push(Morpheme {
				surface: "だ".to_string(),
				pos: POS::Auxiliary,
				pos1: String::new(),
				pos2: String::new(),
				pos3: String::new(),
				normalized_form: "だ".to_string(),
				dictionary_form: "だ".to_string(),
				reading: "だ".to_string(),
			});
			out.push(Morpheme {
				surface: "し".to_string(),
				pos: POS::Conjunction,
				pos1: String::new(),
				pos2: String::new(),
				pos3: String::new(),
				normalized_form: "し".to_string(),
				dictionary_form: "し".to_string(),
				reading: "し".to_string(),
			});
			i += 1;
			continue;
		}

		let mut w1 = w1;
		if w1.surface == "な" || w1.surface == "に" {
			w1.pos = POS::Particle;
		}
		if w1.surface == "よう" {
			w1.pos = POS::Noun;
		}
		if w1.surface == "十五" {
			w1.pos = POS::Numeral;
		}
		out.push(w1);
		i += 1;
	}
	out
}

/// Folds a prefix morpheme (anything but the honorific 御 itself) onto the
/// word that immediately follows it.
fn combine_prefixes(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut current = morphemes[0].clone();
	for next in &morphemes[1..] {
		if current.pos == POS::Prefix && current.normalized_form != "御" {
			let text = format!("{}{}", current.surface, next.surface);
			current = next.clone();
			current.surface = text;
		} else {
			out.push(current);
			current = next.clone();
		}
	}
	out.push(current);
	out
}

lazy_static! {
	/// Common numeral continuations folded into a single compound-number
	/// word by [combine_amounts]. JMdict does not ship a ready-made table
	/// of these pairs, so this is a deliberately small approximation
	/// covering the everyday tens/hundreds/thousands/ten-thousands
	/// compounding patterns rather than an exhaustive list.
	static ref AMOUNT_COMBINATIONS: HashSet<(&'static str, &'static str)> = {
		let mut s = HashSet::new();
		let digits = ["一", "二", "三", "四", "五", "六", "七", "八", "九"];
		for unit in ["十", "百", "千", "万"] {
			for d in &digits {
				s.insert((*d, unit));
				s.insert((unit, *d));
			}
		}
		s.insert(("十", "十"));
		s
	};
}

/// Folds a numeral/amount morpheme onto a following morpheme that a compound
/// number is known to continue into (e.g. 二 + 十 -> 二十).
fn combine_amounts(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut current = morphemes[0].clone();
	for next in &morphemes[1..] {
		let is_amount = pos::has_section(&current, POSSection::Amount) || pos::has_section(&current, POSSection::Numeral);
		if is_amount && AMOUNT_COMBINATIONS.contains(&(current.surface.as_str(), next.surface.as_str())) {
			let text = format!("{}{}", current.surface, next.surface);
			current = next.clone();
			current.surface = text;
			current.pos = POS::Noun;
		} else {
			out.push(current);
			current = next.clone();
		}
	}
	out.push(current);
	out
}

/// Folds a trailing っ onto a following て, undoing the sokuon split an
/// analyzer often introduces across a gemination boundary.
fn combine_tte(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut current = morphemes[0].clone();
	for next in &morphemes[1..] {
		if current.surface.ends_with('っ') && next.surface.starts_with('て') {
			current.surface.push_str(&next.surface);
		} else {
			out.push(current);
			current = next.clone();
		}
	}
	out.push(current);
	out
}

/// Folds a dependent morpheme (非自立) onto a preceding verb.
fn combine_verb_dependants(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut current = morphemes[0].clone();
	for next in &morphemes[1..] {
		if pos::has_section(next, POSSection::Dependant) && current.pos == POS::Verb {
			current.surface.push_str(&next.surface);
		} else {
			out.push(current);
			current = next.clone();
		}
	}
	out.push(current);
	out
}

lazy_static! {
	static ref POSSIBLE_DEPENDANT_VERBS: HashSet<&'static str> =
		["得る", "する", "しまう", "おる", "きる", "こなす", "いく", "貰う", "いる", "ない"]
			.iter()
			.copied()
			.collect();
}

/// Folds a possible-dependent auxiliary verb (得る/しまう/...) onto a
/// preceding verb.
fn combine_verb_possible_dependants(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut current = morphemes[0].clone();
	for next in &morphemes[1..] {
		if pos::has_section(next, POSSection::PossibleDependant)
			&& current.pos == POS::Verb
			&& POSSIBLE_DEPENDANT_VERBS.contains(next.dictionary_form.as_str())
		{
			current.surface.push_str(&next.surface);
		} else {
			out.push(current);
			current = next.clone();
		}
	}
	out.push(current);
	out
}

/// Folds a suru-verb onto a preceding noun that can take it (サ変可能),
/// except for bare する/しない which stay their own word.
fn combine_verb_dependants_suru(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut i = 0;
	while i < morphemes.len() {
		let cur = &morphemes[i];
		if i + 1 < morphemes.len() {
			let next = &morphemes[i + 1];
			if pos::has_section(cur, POSSection::PossibleSuru)
				&& next.dictionary_form == "する"
				&& next.surface != "する"
				&& next.surface != "しない"
			{
				let mut combined = cur.clone();
				combined.surface.push_str(&next.surface);
				combined.pos = POS::Verb;
				out.push(combined);
				i += 2;
				continue;
			}
		}
		out.push(cur.clone());
		i += 1;
	}
	out
}

/// Folds a て + いる continuation onto a preceding verb (the progressive
/// aspect), leaving the verb as a single word instead of three.
fn combine_verb_dependants_teiru(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_TRIPLE_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut i = 0;
	while i < morphemes.len() {
		let cur = &morphemes[i];
		if i + 2 < morphemes.len() {
			let n1 = &morphemes[i + 1];
			let n2 = &morphemes[i + 2];
			if cur.pos == POS::Verb && n1.dictionary_form == "て" && n2.dictionary_form == "いる" {
				let mut combined = cur.clone();
				combined.surface.push_str(&n1.surface);
				combined.surface.push_str(&n2.surface);
				out.push(combined);
				i += 3;
				continue;
			}
		}
		out.push(cur.clone());
		i += 1;
	}
	out
}

/// Folds だり/たり onto a preceding verb.
fn combine_adverbial_particle(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut current = morphemes[0].clone();
	for next in &morphemes[1..] {
		if pos::has_section(next, POSSection::AdverbialParticle)
			&& (next.dictionary_form == "だり" || next.dictionary_form == "たり")
			&& current.pos == POS::Verb
		{
			current.surface.push_str(&next.surface);
		} else {
			out.push(current);
			current = next.clone();
		}
	}
	out.push(current);
	out
}

/// Folds a conjunctive particle (て/で/ちゃ/ば) onto the preceding word if
/// it is a verb, i-adjective or auxiliary.
fn combine_conjunctive_particle(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out: Vec<Morpheme> = vec![morphemes[0].clone()];
	for current in &morphemes[1..] {
		let combined = {
			let prev = out.last().expect("seeded with first morpheme");
			pos::has_section(current, POSSection::ConjunctionParticle)
				&& matches!(current.surface.as_str(), "て" | "で" | "ちゃ" | "ば")
				&& matches!(prev.pos, POS::Verb | POS::IAdjective | POS::Auxiliary)
		};
		if combined {
			out.last_mut().expect("seeded with first morpheme").surface.push_str(&current.surface);
		} else {
			out.push(current.clone());
		}
	}
	out
}

lazy_static! {
	static ref AUXILIARY_EXCLUDED_FORMS: HashSet<&'static str> = ["らしい", "べし", "ようだ", "やがる"].iter().copied().collect();
}

/// Folds an auxiliary onto a preceding conjugatable word, honoring a
/// handful of exclusions (な/に particles, the でし/でした です-chain, and a
/// short list of auxiliaries that never fuse).
fn combine_auxiliary(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out: Vec<Morpheme> = vec![morphemes[0].clone()];
	for cur in &morphemes[1..] {
		if cur.pos != POS::Auxiliary {
			out.push(cur.clone());
			continue;
		}
		let fold = {
			let prev = out.last().expect("seeded with first morpheme");
			let prev_conjugatable = matches!(prev.pos, POS::Verb | POS::IAdjective | POS::NaAdjective | POS::Auxiliary)
				|| pos::has_section(prev, POSSection::Adjectival);
			let cur_not_na_or_ni = cur.surface != "な" && cur.surface != "に";
			let desu_sequence_allowed = cur.dictionary_form != "です"
				|| (prev.pos == POS::Verb && cur.dictionary_form == "です" && (cur.surface == "でし" || cur.surface == "でした"));
			let cur_not_aux_form = !AUXILIARY_EXCLUDED_FORMS.contains(cur.dictionary_form.as_str());
			let cur_not_disallowed = cur.surface != "なら" && cur.surface != "だろう";
			prev_conjugatable && cur_not_na_or_ni && desu_sequence_allowed && cur_not_aux_form && cur_not_disallowed
		};
		if fold {
			out.last_mut().expect("seeded with first morpheme").surface.push_str(&cur.surface);
		} else {
			out.push(cur.clone());
		}
	}
	out
}

lazy_static! {
	static ref AUXILIARY_STEM_EXCLUDED: HashSet<&'static str> = ["ように", "よう", "みたい"].iter().copied().collect();
}

/// Folds an auxiliary-verb stem (形容動詞語幹) onto a preceding verb or
/// i-adjective, except for a few forms that stay separate words.
fn combine_auxiliary_verb_stem(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut current = morphemes[0].clone();
	for i in 1..morphemes.len() {
		let next = &morphemes[i];
		let prev = &morphemes[i - 1];
		if pos::has_section(next, POSSection::AuxiliaryVerbStem)
			&& !AUXILIARY_STEM_EXCLUDED.contains(next.surface.as_str())
			&& matches!(prev.pos, POS::Verb | POS::IAdjective)
		{
			current.surface.push_str(&next.surface);
		} else {
			out.push(current);
			current = next.clone();
		}
	}
	out.push(current);
	out
}

lazy_static! {
	static ref SUFFIX_FORMS: HashSet<&'static str> = ["っこ", "さ", "がる"].iter().copied().collect();
}

/// Folds a small closed set of productive suffixes (っこ/さ/がる, and ら
/// after a pronoun) onto the preceding word.
fn combine_suffix(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut current = morphemes[0].clone();
	for i in 1..morphemes.len() {
		let next = &morphemes[i];
		let prev = &morphemes[i - 1];
		let takes = (next.pos == POS::Suffix || pos::has_section(next, POSSection::Suffix))
			&& (SUFFIX_FORMS.contains(next.dictionary_form.as_str()) || (next.dictionary_form == "ら" && prev.pos == POS::Pronoun));
		if takes {
			current.surface.push_str(&next.surface);
		} else {
			out.push(current);
			current = next.clone();
		}
	}
	out.push(current);
	out
}

/// Fuses a handful of fixed particle pairs (には/とは/では/のに) into a
/// single surface word.
fn combine_particles(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut i = 0;
	while i < morphemes.len() {
		let cur = &morphemes[i];
		if i + 1 < morphemes.len() {
			let next = &morphemes[i + 1];
			let combined = match (cur.surface.as_str(), next.surface.as_str()) {
				("に", "は") => Some("には"),
				("と", "は") => Some("とは"),
				("で", "は") => Some("では"),
				("の", "に") => Some("のに"),
				_ => None,
			};
			if let Some(text) = combined {
				let mut merged = cur.clone();
				merged.surface = text.to_string();
				out.push(merged);
				i += 2;
				continue;
			}
		}
		out.push(cur.clone());
		i += 1;
	}
	out
}

/// Folds a trailing ば onto a preceding verb.
fn combine_final(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	let mut current = morphemes[0].clone();
	for i in 1..morphemes.len() {
		let next = &morphemes[i];
		let prev = &morphemes[i - 1];
		if next.surface == "ば" && prev.pos == POS::Verb {
			current.surface.push_str(&next.surface);
		} else {
			out.push(current);
			current = next.clone();
		}
	}
	out.push(current);
	out
}

/// Splits an honorific suffix (さん/ちゃん/くん) off a name word, so it
/// anchors separately from the name it attaches to.
fn separate_suffix_honorifics(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	if morphemes.len() < MIN_PAIR_LENGTH {
		return morphemes;
	}
	let mut out = Vec::new();
	for w in morphemes {
		let mut current = w.clone();
		let mut separated = false;
		for honorific in HONORIFIC_SUFFIXES {
			let is_name = pos::has_section(&current, POSSection::PersonName) || pos::has_section(&current, POSSection::ProperNoun);
			if current.surface.ends_with(honorific) && current.surface.chars().count() > honorific.chars().count() && is_name {
				let cut = current.surface.len() - honorific.len();
				current.surface.truncate(cut);
				if current.dictionary_form.ends_with(honorific) {
					let dcut = current.dictionary_form.len() - honorific.len();
					current.dictionary_form.truncate(dcut);
				}
				out.push(current);
				out.push(Morpheme {
					surface: honorific.to_string(),
					pos: POS::Suffix,
					pos1: String::new(),
					pos2: String::new(),
					pos3: String::new(),
					normalized_form: honorific.to_string(),
					dictionary_form: honorific.to_string(),
					reading: honorific.to_string(),
				});
				separated = true;
				break;
			}
		}
		if !separated {
			out.push(current);
		}
	}
	out
}

lazy_static! {
	static ref NOISE_WORDS: HashSet<&'static str> = ["そ", "ー", "る", "ま", "ふ", "ち", "ほ", "す", "じ", "なさ"].iter().copied().collect();
}

/// Final cleanup pass: a handful of single-word POS corrections the
/// analyzer is known to get wrong, plus removal of one- and two-character
/// noise words a loose kana parse tends to produce.
fn filter_misparse(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
	let mut out = Vec::with_capacity(morphemes.len());
	for w in morphemes {
		let mut w = w;
		if matches!(w.surface.as_str(), "なん" | "フン" | "ふん") {
			w.pos = POS::Prefix;
		}
		if w.surface == "そう" {
			w.pos = POS::Adverb;
		}
		if w.surface == "おい" {
			w.pos = POS::Interjection;
		}
		if w.surface == "つ" && w.pos == POS::Suffix {
			w.pos = POS::Counter;
		}

		let chars: Vec<char> = w.surface.chars().collect();
		let is_loose_kana = (chars.len() == 1 && is_kana_str(&w.surface))
			|| (chars.len() == 2 && is_kana_str(&chars[0].to_string()) && chars[1] == 'ー')
			|| w.surface == "エナ"
			|| w.surface == "えな";

		if NOISE_WORDS.contains(w.surface.as_str()) || (w.pos == POS::Noun && is_loose_kana) {
			continue;
		}
		out.push(w);
	}
	out
}

/// Hiragana, katakana (full or half width) only, the exact range the
/// original loose-kana cleanup pass checks against.
fn is_kana_str(s: &str) -> bool {
	s.chars().all(|c| {
		let code = c as u32;
		(0x3040..=0x30FF).contains(&code) || (0xFF66..=0xFF9D).contains(&code)
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn m(surface: &str, pos: POS) -> Morpheme {
		Morpheme::plain(surface, pos)
	}

	fn m_with_dict(surface: &str, pos: POS, dict: &str) -> Morpheme {
		let mut w = Morpheme::plain(surface, pos);
		w.dictionary_form = dict.to_string();
		w
	}

	#[test]
	fn combine_prefixes_folds_御_exception_correctly() {
		let mut gyo = m("御", POS::Prefix);
		gyo.normalized_form = "御".to_string();
		let words = vec![gyo, m("飯", POS::Noun)];
		let out = combine_prefixes(words);
		assert_eq!(out.len(), 2, "御 itself must not fold onto the next word");
	}

	#[test]
	fn combine_prefixes_folds_other_prefixes() {
		let mut pre = m("非", POS::Prefix);
		pre.normalized_form = "非".to_string();
		let words = vec![pre, m("常識", POS::Noun)];
		let out = combine_prefixes(words);
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].surface, "非常識");
	}

	#[test]
	fn combine_tte_merges_sokuon_with_te() {
		let words = vec![m("行っ", POS::Verb), m("て", POS::Particle)];
		let out = combine_tte(words);
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].surface, "行って");
	}

	#[test]
	fn combine_verb_dependants_suru_leaves_bare_suru_alone() {
		let mut noun = m("勉強", POS::Noun);
		noun.pos2 = "サ変可能".to_string();
		let words = vec![noun, m_with_dict("する", POS::Verb, "する")];
		let out = combine_verb_dependants_suru(words);
		assert_eq!(out.len(), 2, "bare する must stay its own word");
	}

	#[test]
	fn combine_verb_dependants_suru_folds_conjugated_suru() {
		let mut noun = m("勉強", POS::Noun);
		noun.pos2 = "サ変可能".to_string();
		let words = vec![noun, m_with_dict("します", POS::Verb, "する")];
		let out = combine_verb_dependants_suru(words);
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].surface, "勉強します");
	}

	#[test]
	fn combine_particles_fuses_niwa() {
		let words = vec![m("に", POS::Particle), m("は", POS::Particle)];
		let out = combine_particles(words);
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].surface, "には");
	}

	#[test]
	fn filter_misparse_drops_single_char_noise() {
		let words = vec![m("そ", POS::Noun), m("本", POS::Noun)];
		let out = filter_misparse(words);
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].surface, "本");
	}

	#[test]
	fn filter_misparse_recovers_counter_tsu() {
		let words = vec![m("つ", POS::Suffix)];
		let out = filter_misparse(words);
		assert_eq!(out[0].pos, POS::Counter);
	}

	#[test]
	fn deshou_becomes_expression_with_cleared_sections() {
		let mut w = m("でしょう", POS::Auxiliary);
		w.pos1 = "非自立".to_string();
		let out = process_special_cases(vec![w]);
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].pos, POS::Expression);
		assert!(out[0].pos1.is_empty());
	}

	#[test]
	fn dashi_splits_into_da_and_shi() {
		let out = process_special_cases(vec![m("だし", POS::Auxiliary)]);
		assert_eq!(out.len(), 2);
		assert_eq!(out[0].surface, "だ");
		assert_eq!(out[1].surface, "し");
	}

	#[test]
	fn empty_input_runs_cleanly_through_the_whole_pipeline() {
		assert_eq!(MergePipeline::run(vec![]), vec![]);
	}
}
