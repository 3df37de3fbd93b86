//! Rule-driven deconjugation.
//!
//! Explores every way a surface text could have been inflected from a
//! dictionary form by repeatedly applying a table of reversible rewrite
//! rules, breadth-first. This is the same shape as a classic Yomichan-style
//! deinflector, generalized with typed, tagged rules and an explicit
//! skip/cycle guard instead of a flat suffix table.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// One step of the deconjugation search.
///
/// `original` is never mutated after construction: it anchors the cycle
/// guard (a derived form's `text` must never again equal it).
#[derive(Clone, Debug)]
pub struct DeconjugationForm {
	pub text: String,
	pub original: String,
	pub tags: Vec<String>,
	pub seen: HashSet<String>,
	pub process: Vec<String>,
}

impl Hash for DeconjugationForm {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.text.hash(state);
		self.original.hash(state);
		self.tags.hash(state);
		self.process.hash(state);
		let mut seen: Vec<&String> = self.seen.iter().collect();
		seen.sort();
		seen.hash(state);
	}
}

impl DeconjugationForm {
	fn initial(text: &str) -> DeconjugationForm {
		DeconjugationForm {
			text: text.to_string(),
			original: text.to_string(),
			tags: Vec::new(),
			seen: HashSet::new(),
			process: Vec::new(),
		}
	}

	/// Whether this form should not be expanded further: empty text, or
	/// grown implausibly far past the original query.
	fn should_skip(&self) -> bool {
		self.text.is_empty()
			|| self.text.chars().count() > self.original.chars().count() + 10
			|| self.tags.len() > self.original.chars().count() + 6
	}
}

impl PartialEq for DeconjugationForm {
	fn eq(&self, other: &Self) -> bool {
		self.text == other.text
			&& self.original == other.original
			&& self.tags == other.tags
			&& self.process == other.process
			&& self.seen == other.seen
	}
}

impl Eq for DeconjugationForm {}

/// Named special-case contexts for [RuleKind::Context] rules.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextKind {
	/// Blocks the い-stem trap on ichidan verbs already marked `stem-ren`.
	V1InfTrap,
	/// Never refuses; always falls through to the standard rule.
	SaSpecial,
}

/// How a [Rule] is applied during the search.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
	Standard,
	Rewrite,
	OnlyFinal,
	NeverFinal,
	Context,
	Substitution,
}

/// A single reversible rewrite rule.
///
/// `dec_end`/`con_end` (and the optional `dec_tag`/`con_tag`) are parallel
/// arrays: a rule with more `con_end` entries than `dec_end` entries (or
/// vice versa) broadcasts the shorter array by repeating its single element,
/// or by repeating index `0` once the longer array overflows it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rule {
	#[serde(rename = "type")]
	pub kind: RuleKind,

	#[serde(rename = "contextrule")]
	pub context: Option<ContextKind>,

	pub dec_end: Vec<String>,
	pub con_end: Vec<String>,

	#[serde(default)]
	pub dec_tag: Option<Vec<String>>,
	#[serde(default)]
	pub con_tag: Option<Vec<String>>,

	#[serde(default)]
	pub detail: Option<String>,
}

#[inline]
fn broadcast<'a>(list: &'a [String], i: usize) -> Option<&'a str> {
	if list.is_empty() {
		None
	} else if i < list.len() {
		Some(list[i].as_str())
	} else {
		Some(list[0].as_str())
	}
}

impl Rule {
	/// Applies this rule to `form`, returning every new form it produces.
	fn apply(&self, form: &DeconjugationForm) -> Vec<DeconjugationForm> {
		match self.kind {
			RuleKind::Standard => self.apply_standard(form),
			RuleKind::Rewrite => {
				if form.text != self.con_end.get(0).map(String::as_str).unwrap_or("") {
					Vec::new()
				} else {
					self.apply_standard(form)
				}
			}
			RuleKind::OnlyFinal => {
				if form.tags.is_empty() {
					self.apply_standard(form)
				} else {
					Vec::new()
				}
			}
			RuleKind::NeverFinal => {
				if !form.tags.is_empty() {
					self.apply_standard(form)
				} else {
					Vec::new()
				}
			}
			RuleKind::Context => {
				// `SaSpecial` never actually refuses: its ground-truth check compares
				// against a literal that can never match a real さ-suffix, so every
				// candidate falls through to the standard rule unfiltered.
				let refused = match self.context {
					Some(ContextKind::V1InfTrap) => form.tags == ["stem-ren"],
					Some(ContextKind::SaSpecial) => false,
					None => false,
				};
				if refused {
					Vec::new()
				} else {
					self.apply_standard(form)
				}
			}
			RuleKind::Substitution => self.apply_substitution(form),
		}
	}

	fn apply_standard(&self, form: &DeconjugationForm) -> Vec<DeconjugationForm> {
		let has_detail = self.detail.as_deref().map(|d| !d.is_empty()).unwrap_or(false);
		if !has_detail && form.tags.is_empty() {
			return Vec::new();
		}

		let mut out = Vec::new();
		for i in 0..self.dec_end.len() {
			let con_end = match broadcast(&self.con_end, i) {
				Some(s) => s,
				None => continue,
			};
			let dec_end = match broadcast(&self.dec_end, i) {
				Some(s) => s,
				None => continue,
			};
			let con_tag = self.con_tag.as_ref().and_then(|v| broadcast(v, i));
			let dec_tag = self.dec_tag.as_ref().and_then(|v| broadcast(v, i));

			if !form.text.ends_with(con_end) {
				continue;
			}
			let tag_matches = form.tags.is_empty() || form.tags.last().map(String::as_str) == con_tag;
			if !tag_matches {
				continue;
			}

			let stem = &form.text[..form.text.len() - con_end.len()];
			let new_text = format!("{}{}", stem, dec_end);
			if new_text == form.original {
				continue;
			}

			let mut tags = form.tags.clone();
			if tags.is_empty() {
				if let Some(t) = con_tag {
					tags.push(t.to_string());
				}
			}
			if let Some(t) = dec_tag {
				tags.push(t.to_string());
			}

			let mut seen = form.seen.clone();
			if seen.is_empty() {
				seen.insert(form.text.clone());
			}
			seen.insert(new_text.clone());

			let mut process = form.process.clone();
			if let Some(detail) = &self.detail {
				process.push(detail.clone());
			}

			out.push(DeconjugationForm {
				text: new_text,
				original: form.original.clone(),
				tags,
				seen,
				process,
			});
		}
		out
	}

	fn apply_substitution(&self, form: &DeconjugationForm) -> Vec<DeconjugationForm> {
		if !form.process.is_empty() || form.text.is_empty() {
			return Vec::new();
		}

		let mut text = form.text.clone();
		let mut changed = false;
		for i in 0..self.dec_end.len() {
			if let (Some(con_end), Some(dec_end)) = (broadcast(&self.con_end, i), broadcast(&self.dec_end, i)) {
				if text.contains(con_end) {
					text = text.replace(con_end, dec_end);
					changed = true;
				}
			}
		}
		if !changed || text == form.original {
			return Vec::new();
		}

		let mut seen = form.seen.clone();
		if seen.is_empty() {
			seen.insert(form.text.clone());
		}
		seen.insert(text.clone());

		let mut process = form.process.clone();
		if let Some(detail) = &self.detail {
			process.push(detail.clone());
		}

		vec![DeconjugationForm {
			text,
			original: form.original.clone(),
			tags: form.tags.clone(),
			seen,
			process,
		}]
	}
}

/// Builds one [RuleKind::Standard] rule with a single dec/con pair, the
/// common case in [built_in_rules].
fn rule(con_end: &str, dec_end: &str, con_tag: Option<&str>, dec_tag: Option<&str>, detail: &str) -> Rule {
	Rule {
		kind: RuleKind::Standard,
		context: None,
		dec_end: vec![dec_end.to_string()],
		con_end: vec![con_end.to_string()],
		dec_tag: dec_tag.map(|t| vec![t.to_string()]),
		con_tag: con_tag.map(|t| vec![t.to_string()]),
		detail: Some(detail.to_string()),
	}
}

/// The rule table compiled into the crate as the zero-configuration
/// default deconjugation rule set.
///
/// Ported from `japanese::deinflect::get_rules`'s suffix table (itself
/// translated from Yomichan's `deinflect.json`) into the richer tagged
/// [Rule] shape: each `inflect!`/`r!` suffix pair becomes one
/// [RuleKind::Standard] rule carrying its rule name as [Rule::detail].
/// Covers the common verb/i-adjective inflections; an application that
/// needs full Yomichan-scale coverage supplies its own table through
/// [Deconjugator::load_rules_json].
fn built_in_rules() -> &'static Vec<Rule> {
	lazy_static! {
		static ref RULES: Vec<Rule> = vec![
			// -masu stem and polite forms
			rule("ます", "る", None, Some("masu"), "masu-ichidan"),
			rule("います", "う", None, Some("masu"), "masu-u"),
			rule("きます", "く", None, Some("masu"), "masu-ku"),
			rule("ぎます", "ぐ", None, Some("masu"), "masu-gu"),
			rule("します", "す", None, Some("masu"), "masu-su"),
			rule("ちます", "つ", None, Some("masu"), "masu-tsu"),
			rule("にます", "ぬ", None, Some("masu"), "masu-nu"),
			rule("びます", "ぶ", None, Some("masu"), "masu-bu"),
			rule("みます", "む", None, Some("masu"), "masu-mu"),
			rule("ります", "る", None, Some("masu"), "masu-ru"),
			rule("きます", "くる", None, Some("masu"), "masu-kuru"),
			rule("します", "する", None, Some("masu"), "masu-suru"),
			rule("ません", "る", None, Some("masu-nai"), "masen-ichidan"),
			rule("ませんでした", "る", None, Some("masu-nai-past"), "masen-deshita"),
			// plain negative
			rule("ない", "る", None, Some("nai"), "nai-ichidan"),
			rule("わない", "う", None, Some("nai"), "nai-u"),
			rule("かない", "く", None, Some("nai"), "nai-ku"),
			rule("がない", "ぐ", None, Some("nai"), "nai-gu"),
			rule("さない", "す", None, Some("nai"), "nai-su"),
			rule("たない", "つ", None, Some("nai"), "nai-tsu"),
			rule("なない", "ぬ", None, Some("nai"), "nai-nu"),
			rule("ばない", "ぶ", None, Some("nai"), "nai-bu"),
			rule("まない", "む", None, Some("nai"), "nai-mu"),
			rule("らない", "る", None, Some("nai"), "nai-ru"),
			rule("こない", "くる", None, Some("nai"), "nai-kuru"),
			rule("しない", "する", None, Some("nai"), "nai-suru"),
			rule("くない", "い", None, Some("nai"), "nai-iadj"),
			// polite past
			rule("ました", "る", None, Some("masu-past"), "masu-past-ichidan"),
			rule("いました", "う", None, Some("masu-past"), "masu-past-u"),
			rule("きました", "く", None, Some("masu-past"), "masu-past-ku"),
			rule("ぎました", "ぐ", None, Some("masu-past"), "masu-past-gu"),
			rule("しました", "す", None, Some("masu-past"), "masu-past-su"),
			rule("ちました", "つ", None, Some("masu-past"), "masu-past-tsu"),
			rule("にました", "ぬ", None, Some("masu-past"), "masu-past-nu"),
			rule("びました", "ぶ", None, Some("masu-past"), "masu-past-bu"),
			rule("みました", "む", None, Some("masu-past"), "masu-past-mu"),
			rule("りました", "る", None, Some("masu-past"), "masu-past-ru"),
			rule("きました", "くる", None, Some("masu-past"), "masu-past-kuru"),
			rule("しました", "する", None, Some("masu-past"), "masu-past-suru"),
			// past tense
			rule("た", "る", None, Some("past"), "past-ichidan"),
			rule("った", "う", None, Some("past"), "past-u"),
			rule("いた", "く", None, Some("past"), "past-ku"),
			rule("いだ", "ぐ", None, Some("past"), "past-gu"),
			rule("した", "す", None, Some("past"), "past-su"),
			rule("った", "つ", None, Some("past"), "past-tsu"),
			rule("んだ", "ぬ", None, Some("past"), "past-nu"),
			rule("んだ", "ぶ", None, Some("past"), "past-bu"),
			rule("んだ", "む", None, Some("past"), "past-mu"),
			rule("った", "る", None, Some("past"), "past-ru"),
			rule("きた", "くる", None, Some("past"), "past-kuru"),
			rule("した", "する", None, Some("past"), "past-suru"),
			rule("かった", "い", None, Some("past"), "past-iadj"),
			// te-form
			rule("て", "る", None, Some("te"), "te-ichidan"),
			rule("って", "う", None, Some("te"), "te-u"),
			rule("いて", "く", None, Some("te"), "te-ku"),
			rule("いで", "ぐ", None, Some("te"), "te-gu"),
			rule("して", "す", None, Some("te"), "te-su"),
			rule("って", "つ", None, Some("te"), "te-tsu"),
			rule("んで", "ぬ", None, Some("te"), "te-nu"),
			rule("んで", "ぶ", None, Some("te"), "te-bu"),
			rule("んで", "む", None, Some("te"), "te-mu"),
			rule("って", "る", None, Some("te"), "te-ru"),
			rule("きて", "くる", None, Some("te"), "te-kuru"),
			rule("して", "する", None, Some("te"), "te-suru"),
			rule("くて", "い", None, Some("te"), "te-iadj"),
			// te-iru / progressive, direct suffix form per verb class
			rule("っている", "う", None, Some("teiru"), "teiru-u"),
			rule("いている", "く", None, Some("teiru"), "teiru-ku"),
			rule("いでいる", "ぐ", None, Some("teiru"), "teiru-gu"),
			rule("している", "す", None, Some("teiru"), "teiru-su"),
			rule("っている", "つ", None, Some("teiru"), "teiru-tsu"),
			rule("んでいる", "ぬ", None, Some("teiru"), "teiru-nu"),
			rule("んでいる", "ぶ", None, Some("teiru"), "teiru-bu"),
			rule("んでいる", "む", None, Some("teiru"), "teiru-mu"),
			rule("っている", "る", None, Some("teiru"), "teiru-ru"),
			rule("ている", "る", None, Some("teiru"), "teiru-ichidan"),
			rule("きている", "くる", None, Some("teiru"), "teiru-kuru"),
			rule("している", "する", None, Some("teiru"), "teiru-suru"),
			rule("てる", "る", None, Some("teiru"), "teiru-colloquial"),
			// potential
			rule("える", "う", None, Some("potential"), "potential-u"),
			rule("ける", "く", None, Some("potential"), "potential-ku"),
			rule("げる", "ぐ", None, Some("potential"), "potential-gu"),
			rule("せる", "す", None, Some("potential"), "potential-su"),
			rule("てる", "つ", None, Some("potential"), "potential-tsu"),
			rule("ねる", "ぬ", None, Some("potential"), "potential-nu"),
			rule("べる", "ぶ", None, Some("potential"), "potential-bu"),
			rule("める", "む", None, Some("potential"), "potential-mu"),
			rule("れる", "る", None, Some("potential"), "potential-ru"),
			rule("られる", "る", None, Some("potential"), "potential-rareru"),
			rule("こられる", "くる", None, Some("potential"), "potential-kuru"),
			rule("できる", "する", None, Some("potential"), "potential-suru"),
			// passive
			rule("われる", "う", None, Some("passive"), "passive-u"),
			rule("かれる", "く", None, Some("passive"), "passive-ku"),
			rule("がれる", "ぐ", None, Some("passive"), "passive-gu"),
			rule("される", "す", None, Some("passive"), "passive-su"),
			rule("たれる", "つ", None, Some("passive"), "passive-tsu"),
			rule("なれる", "ぬ", None, Some("passive"), "passive-nu"),
			rule("ばれる", "ぶ", None, Some("passive"), "passive-bu"),
			rule("まれる", "む", None, Some("passive"), "passive-mu"),
			rule("られる", "る", None, Some("passive"), "passive-ru"),
			rule("こられる", "くる", None, Some("passive"), "passive-kuru"),
			rule("される", "する", None, Some("passive"), "passive-suru"),
			// causative
			rule("わせる", "う", None, Some("causative"), "causative-u"),
			rule("かせる", "く", None, Some("causative"), "causative-ku"),
			rule("がせる", "ぐ", None, Some("causative"), "causative-gu"),
			rule("させる", "す", None, Some("causative"), "causative-su"),
			rule("たせる", "つ", None, Some("causative"), "causative-tsu"),
			rule("なせる", "ぬ", None, Some("causative"), "causative-nu"),
			rule("ばせる", "ぶ", None, Some("causative"), "causative-bu"),
			rule("ませる", "む", None, Some("causative"), "causative-mu"),
			rule("らせる", "る", None, Some("causative"), "causative-ru"),
			rule("こさせる", "くる", None, Some("causative"), "causative-kuru"),
			rule("させる", "する", None, Some("causative"), "causative-suru"),
			// conditional (-eba / -tara)
			rule("えば", "う", None, Some("ba"), "ba-u"),
			rule("けば", "く", None, Some("ba"), "ba-ku"),
			rule("げば", "ぐ", None, Some("ba"), "ba-gu"),
			rule("せば", "す", None, Some("ba"), "ba-su"),
			rule("てば", "つ", None, Some("ba"), "ba-tsu"),
			rule("ねば", "ぬ", None, Some("ba"), "ba-nu"),
			rule("べば", "ぶ", None, Some("ba"), "ba-bu"),
			rule("めば", "む", None, Some("ba"), "ba-mu"),
			rule("れば", "る", None, Some("ba"), "ba-ru"),
			rule("ければ", "い", None, Some("ba"), "ba-iadj"),
			// volitional
			rule("よう", "る", None, Some("volitional"), "volitional-ichidan"),
			rule("おう", "う", None, Some("volitional"), "volitional-u"),
			rule("こう", "く", None, Some("volitional"), "volitional-ku"),
			rule("ごう", "ぐ", None, Some("volitional"), "volitional-gu"),
			rule("そう", "す", None, Some("volitional"), "volitional-su"),
			rule("とう", "つ", None, Some("volitional"), "volitional-tsu"),
			rule("のう", "ぬ", None, Some("volitional"), "volitional-nu"),
			rule("ぼう", "ぶ", None, Some("volitional"), "volitional-bu"),
			rule("もう", "む", None, Some("volitional"), "volitional-mu"),
			rule("ろう", "る", None, Some("volitional"), "volitional-ru"),
			rule("こよう", "くる", None, Some("volitional"), "volitional-kuru"),
			rule("しよう", "する", None, Some("volitional"), "volitional-suru"),
			// imperative
			rule("ろ", "る", None, Some("imperative"), "imperative-ichidan"),
			rule("え", "う", None, Some("imperative"), "imperative-u"),
			rule("け", "く", None, Some("imperative"), "imperative-ku"),
			rule("げ", "ぐ", None, Some("imperative"), "imperative-gu"),
			rule("せ", "す", None, Some("imperative"), "imperative-su"),
			rule("て", "つ", None, Some("imperative"), "imperative-tsu"),
			rule("ね", "ぬ", None, Some("imperative"), "imperative-nu"),
			rule("べ", "ぶ", None, Some("imperative"), "imperative-bu"),
			rule("め", "む", None, Some("imperative"), "imperative-mu"),
			rule("れ", "る", None, Some("imperative"), "imperative-ru"),
			rule("こい", "くる", None, Some("imperative"), "imperative-kuru"),
			rule("しろ", "する", None, Some("imperative"), "imperative-suru"),
			// tai (want-to) form
			rule("たい", "る", None, Some("tai"), "tai-ichidan"),
			rule("いたい", "う", None, Some("tai"), "tai-u"),
			rule("きたい", "く", None, Some("tai"), "tai-ku"),
			rule("ぎたい", "ぐ", None, Some("tai"), "tai-gu"),
			rule("したい", "す", None, Some("tai"), "tai-su"),
			rule("ちたい", "つ", None, Some("tai"), "tai-tsu"),
			rule("にたい", "ぬ", None, Some("tai"), "tai-nu"),
			rule("びたい", "ぶ", None, Some("tai"), "tai-bu"),
			rule("みたい", "む", None, Some("tai"), "tai-mu"),
			rule("りたい", "る", None, Some("tai"), "tai-ru"),
			rule("きたい", "くる", None, Some("tai"), "tai-kuru"),
			rule("したい", "する", None, Some("tai"), "tai-suru"),
		];
	}
	&RULES
}

/// Owns the compiled rule table and runs the breadth-first search.
pub struct Deconjugator {
	rules: Vec<Rule>,
}

impl Deconjugator {
	pub fn new(rules: Vec<Rule>) -> Deconjugator {
		Deconjugator { rules }
	}

	/// Builds a [Deconjugator] from the compiled-in fallback rule table
	/// ([built_in_rules]), so the crate deconjugates verbs and adjectives
	/// with zero configuration.
	pub fn default_rules() -> Deconjugator {
		Deconjugator::new(built_in_rules().clone())
	}

	/// Loads a rule table from a JSON array, tolerating `//`-prefixed
	/// comment lines (the file is not strict JSON). This is the override
	/// path for a caller that wants a rule set other than [Deconjugator::default_rules].
	pub fn load_rules_json(source: &str) -> Result<Deconjugator> {
		let stripped: String = source
			.lines()
			.filter(|line| !line.trim_start().starts_with("//"))
			.collect::<Vec<_>>()
			.join("\n");
		let rules: Vec<Rule> =
			serde_json::from_str(&stripped).map_err(|e| Error::MalformedRule(format!("{}", e)))?;
		Ok(Deconjugator::new(rules))
	}

	/// Runs the breadth-first search from `text`, returning every form
	/// reached (including the unmodified initial form).
	///
	/// Explores the search frontier breadth-first: a form is only ever
	/// explored once, and a form reachable two different ways is kept only
	/// once in the result.
	pub fn deconjugate(&self, text: &str) -> Vec<DeconjugationForm> {
		let mut processed: HashSet<DeconjugationForm> = HashSet::new();
		let mut frontier: Vec<DeconjugationForm> = vec![DeconjugationForm::initial(text)];

		while !frontier.is_empty() {
			let mut next: Vec<DeconjugationForm> = Vec::new();
			for form in &frontier {
				if form.should_skip() {
					continue;
				}
				for rule in &self.rules {
					for candidate in rule.apply(form) {
						if !processed.contains(&candidate)
							&& !frontier.contains(&candidate)
							&& !next.contains(&candidate)
						{
							next.push(candidate);
						}
					}
				}
			}
			for form in frontier.drain(..) {
				processed.insert(form);
			}
			frontier = next;
		}
		processed.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn past_tense_rule() -> Rule {
		Rule {
			kind: RuleKind::Standard,
			context: None,
			dec_end: vec!["る".to_string()],
			con_end: vec!["た".to_string()],
			dec_tag: None,
			con_tag: Some(vec!["past".to_string()]),
			detail: Some("past-tense".to_string()),
		}
	}

	#[test]
	fn past_tense_deconjugates_to_dictionary_form() {
		let deconjugator = Deconjugator::new(vec![past_tense_rule()]);
		let forms = deconjugator.deconjugate("食べた");
		assert!(forms.iter().any(|f| f.text == "食べる" && f.tags.last().map(String::as_str) == Some("past")));
	}

	#[test]
	fn self_anchoring_is_rejected() {
		let rule = Rule {
			kind: RuleKind::Standard,
			context: None,
			dec_end: vec!["た".to_string()],
			con_end: vec!["た".to_string()],
			dec_tag: Some(vec!["noop".to_string()]),
			con_tag: None,
			detail: Some("noop".to_string()),
		};
		let deconjugator = Deconjugator::new(vec![rule]);
		let forms = deconjugator.deconjugate("た");
		assert_eq!(forms.len(), 1); // only the initial form, no self-loop
	}

	#[test]
	fn bounded_growth_stops_runaway_forms() {
		let rule = Rule {
			kind: RuleKind::Standard,
			context: None,
			dec_end: vec!["aa".to_string()],
			con_end: vec!["a".to_string()],
			dec_tag: None,
			con_tag: None,
			detail: Some("grow".to_string()),
		};
		let deconjugator = Deconjugator::new(vec![rule]);
		let forms = deconjugator.deconjugate("a");
		for f in &forms {
			assert!(f.text.chars().count() <= f.original.chars().count() + 10);
			assert!(f.tags.len() <= f.original.chars().count() + 6);
		}
	}

	#[test]
	fn comment_lines_are_stripped_before_parsing() {
		let json = r#"[
			// a leading comment
			{"type": "standard", "contextrule": null, "dec_end": ["る"], "con_end": ["た"], "con_tag": ["past"], "detail": "past"}
		]"#;
		let deconjugator = Deconjugator::load_rules_json(json).unwrap();
		assert_eq!(deconjugator.rules.len(), 1);
	}

	#[test]
	fn default_rules_deconjugate_common_forms() {
		let deconjugator = Deconjugator::default_rules();
		let forms = deconjugator.deconjugate("食べました");
		assert!(forms.iter().any(|f| f.text == "食べる"));

		let forms = deconjugator.deconjugate("読んでいる");
		assert!(forms.iter().any(|f| f.text == "読む"));
	}
}
