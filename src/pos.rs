//! Part-of-speech taxonomy shared by the merge pipeline, the deconjugator
//! and the anchoring stage.
//!
//! The tables here translate the raw tags produced by the upstream
//! morphological analyzer (a mix of Japanese grammar terms, e.g. `名詞`,
//! `動詞`) and the short English abbreviations used by JMdict/Yomitan
//! (`n`, `v5k`, `adj-i`, ...) into the small closed [POS] and [POSSection]
//! enums the rest of the crate switches on. Decoding is total: anything not
//! found in the table maps to `Unknown` / `None_` rather than failing.

use crate::morpheme::Morpheme;

/// Coarse part-of-speech classification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum POS {
	Noun,
	Verb,
	IAdjective,
	NaAdjective,
	Adverb,
	Particle,
	Conjunction,
	Auxiliary,
	Adnominal,
	Interjection,
	Symbol,
	Prefix,
	Filler,
	Name,
	Pronoun,
	Suffix,
	CommonNoun,
	SupplementarySymbol,
	BlankSpace,
	Expression,
	NominalAdjective,
	Numeral,
	PrenounAdjectival,
	Counter,
	AdverbTo,
	NounSuffix,
	Unknown,
}

/// Finer-grained classification, corresponding to the second-through-fourth
/// sub-classification the analyzer reports for a [Morpheme] (conjugation
/// class, grammatical role, named-entity kind, ...).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum POSSection {
	None_,
	Amount,
	Alphabet,
	FullStop,
	BlankSpace,
	Suffix,
	Pronoun,
	Independant,
	Dependant,
	Filler,
	Common,
	SentenceEndingParticle,
	Counter,
	ParallelMarker,
	BindingParticle,
	PotentialAdverb,
	CaseMarkingParticle,
	IrregularConjunction,
	ConjunctionParticle,
	AuxiliaryVerbStem,
	AdjectivalStem,
	CompoundWord,
	Quotation,
	NounConjunction,
	AdverbialParticle,
	ConjunctiveParticleClass,
	Adverbialization,
	AdverbialParticleOrParallelMarkerOrSentenceEndingParticle,
	AdnominalAdjective,
	ProperNoun,
	Special,
	VerbConjunction,
	PersonName,
	FamilyName,
	Organization,
	NotAdjectiveStem,
	Comma,
	OpeningBracket,
	ClosingBracket,
	Region,
	Country,
	Numeral,
	PossibleDependant,
	CommonNoun,
	SubstantiveAdjective,
	PossibleCounterWord,
	PossibleSuru,
	Juntaijoushi,
	PossibleNaAdjective,
	VerbLike,
	PossibleVerbSuruNoun,
	Adjectival,
	NaAdjectiveLike,
	Name,
	Letter,
	PlaceName,
	TaruAdjective,
}

/// Decodes a raw analyzer/dictionary tag into a [POS].
///
/// Total: unrecognized tags decode to `POS::Unknown`. Mirrors the JMdict
/// `name`-family tags (`person`, `surname`, `place`, ...) by collapsing them
/// all onto `POS::Name`, the way named-entity dictionaries typically do.
pub fn decode_pos(tag: &str) -> POS {
	match tag {
		"名詞" | "n" => POS::Noun,
		"動詞" => POS::Verb,
		t if t.starts_with('v') => POS::Verb,
		"形容詞" | "adj-i" | "adj-ix" => POS::IAdjective,
		"形状詞" | "形容動詞" | "adj-na" => POS::NaAdjective,
		"副詞" | "adv" => POS::Adverb,
		"助詞" | "prt" => POS::Particle,
		"接続詞" | "conj" => POS::Conjunction,
		"助動詞" | "aux" | "aux-v" => POS::Auxiliary,
		"感動詞" | "int" => POS::Interjection,
		"記号" => POS::Symbol,
		"接頭詞" | "接頭辞" | "pref" => POS::Prefix,
		"フィラー" => POS::Filler,
		"名" | "company" | "given" | "place" | "person" | "product" | "ship" | "surname" | "unclass" | "name-fem"
		| "name-masc" | "station" | "group" | "char" | "creat" | "dei" | "doc" | "ev" | "fem" | "fict" | "leg"
		| "masc" | "myth" | "obj" | "organization" | "oth" | "relig" | "serv" | "work" | "unc" => POS::Name,
		"代名詞" | "pn" => POS::Pronoun,
		"接尾辞" | "suf" => POS::Suffix,
		"普通名詞" => POS::CommonNoun,
		"補助記号" => POS::SupplementarySymbol,
		"空白" => POS::BlankSpace,
		"表現" | "exp" => POS::Expression,
		"形動" | "adj-no" | "adj-t" | "adj-f" => POS::NominalAdjective,
		"連体詞" | "adj-pn" => POS::PrenounAdjectival,
		"数詞" | "num" => POS::Numeral,
		"助数詞" | "ctr" => POS::Counter,
		"副詞的と" | "adv-to" => POS::AdverbTo,
		"名詞接尾辞" | "n-suf" => POS::NounSuffix,
		_ => POS::Unknown,
	}
}

/// Decodes a raw analyzer subsection tag into a [POSSection].
///
/// Total: unrecognized tags decode to `POSSection::None_`.
pub fn decode_section(tag: &str) -> POSSection {
	match tag {
		"*" => POSSection::None_,
		"数" => POSSection::Amount,
		"アルファベット" => POSSection::Alphabet,
		"句点" => POSSection::FullStop,
		"空白" => POSSection::BlankSpace,
		"接尾" | "suf" => POSSection::Suffix,
		"代名詞" | "pn" => POSSection::Pronoun,
		"自立" => POSSection::Independant,
		"フィラー" => POSSection::Filler,
		"一般" => POSSection::Common,
		"非自立" => POSSection::Dependant,
		"終助詞" => POSSection::SentenceEndingParticle,
		"助数詞" | "ctr" => POSSection::Counter,
		"並立助詞" => POSSection::ParallelMarker,
		"係助詞" => POSSection::BindingParticle,
		"副詞可能" => POSSection::PotentialAdverb,
		"格助詞" => POSSection::CaseMarkingParticle,
		"サ変接続" => POSSection::IrregularConjunction,
		"接続助詞" => POSSection::ConjunctionParticle,
		"助動詞語幹" => POSSection::AuxiliaryVerbStem,
		"形容動詞語幹" => POSSection::AdjectivalStem,
		"連語" => POSSection::CompoundWord,
		"引用" => POSSection::Quotation,
		"名詞接続" => POSSection::NounConjunction,
		"副助詞" => POSSection::AdverbialParticle,
		"助詞類接続" => POSSection::ConjunctiveParticleClass,
		"副詞化" => POSSection::Adverbialization,
		"副助詞／並立助詞／終助詞" => POSSection::AdverbialParticleOrParallelMarkerOrSentenceEndingParticle,
		"連体化" => POSSection::AdnominalAdjective,
		"固有名詞" => POSSection::ProperNoun,
		"特殊" => POSSection::Special,
		"動詞接続" => POSSection::VerbConjunction,
		"人名" => POSSection::PersonName,
		"姓" => POSSection::FamilyName,
		"組織" => POSSection::Organization,
		"ナイ形容詞語幹" => POSSection::NotAdjectiveStem,
		"読点" => POSSection::Comma,
		"括弧開" => POSSection::OpeningBracket,
		"括弧閉" => POSSection::ClosingBracket,
		"地域" => POSSection::Region,
		"国" => POSSection::Country,
		"数詞" | "num" => POSSection::Numeral,
		"非自立可能" => POSSection::PossibleDependant,
		"普通名詞" => POSSection::CommonNoun,
		"名詞的" => POSSection::SubstantiveAdjective,
		"助数詞可能" => POSSection::PossibleCounterWord,
		"サ変可能" => POSSection::PossibleSuru,
		"準体助詞" => POSSection::Juntaijoushi,
		"形状詞可能" => POSSection::PossibleNaAdjective,
		"動詞的" => POSSection::VerbLike,
		"サ変形状詞可能" => POSSection::PossibleVerbSuruNoun,
		"形容詞的" => POSSection::Adjectival,
		"名" => POSSection::Name,
		"文字" => POSSection::Letter,
		"形状詞的" => POSSection::NaAdjectiveLike,
		"地名" => POSSection::PlaceName,
		"タリ" => POSSection::TaruAdjective,
		_ => POSSection::None_,
	}
}

/// Returns true if any of `morph`'s pos1/pos2/pos3 sub-tags decode to
/// `section`.
pub fn has_section(morph: &Morpheme, section: POSSection) -> bool {
	for tag in &[morph.pos1.as_str(), morph.pos2.as_str(), morph.pos3.as_str()] {
		if !tag.is_empty() && decode_section(tag) == section {
			return true;
		}
	}
	false
}

/// Decodes every space-separated tag in `tags` to a [POS], in order,
/// deduplicating by decoded value. Used by the anchoring stage to turn a
/// [JmWord](crate::lexicon::JmWord)'s raw POS tag list into a set it can
/// test a morpheme's decoded [POS] against.
pub fn decode_pos_list<'a, I: IntoIterator<Item = &'a str>>(tags: I) -> Vec<POS> {
	let mut out = Vec::new();
	for tag in tags {
		let p = decode_pos(tag);
		if !out.contains(&p) {
			out.push(p);
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_known_tags() {
		assert_eq!(decode_pos("動詞"), POS::Verb);
		assert_eq!(decode_pos("v5k"), POS::Verb);
		assert_eq!(decode_pos("接頭詞"), POS::Prefix);
		assert_eq!(decode_pos("接頭辞"), POS::Prefix);
		assert_eq!(decode_pos("pref"), POS::Prefix);
		assert_eq!(decode_pos("n"), POS::Noun);
		assert_eq!(decode_pos("adj-i"), POS::IAdjective);
	}

	#[test]
	fn name_family_tags_collapse_to_name() {
		assert_eq!(decode_pos("surname"), POS::Name);
		assert_eq!(decode_pos("place"), POS::Name);
	}

	#[test]
	fn unknown_tag_decodes_to_unknown() {
		assert_eq!(decode_pos("xyz-not-a-tag"), POS::Unknown);
		assert_eq!(decode_section("xyz-not-a-tag"), POSSection::None_);
	}

	#[test]
	fn has_section_checks_all_subtags() {
		let m = Morpheme {
			surface: "食べる".into(),
			pos: POS::Verb,
			pos1: "自立".into(),
			pos2: String::new(),
			pos3: String::new(),
			normalized_form: "食べる".into(),
			dictionary_form: "食べる".into(),
			reading: "たべる".into(),
		};
		assert!(has_section(&m, POSSection::Independant));
		assert!(!has_section(&m, POSSection::Amount));
	}

	#[test]
	fn decode_pos_list_dedupes_in_order() {
		let decoded = decode_pos_list(vec!["n", "n", "v1"]);
		assert_eq!(decoded, vec![POS::Noun, POS::Verb]);
	}
}
