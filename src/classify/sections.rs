use regex::Regex;
use tracing::trace;

use super::aliases::{VocabularySpec, KANDA, PARVA, SKANDHA};
use crate::catalog::Category;
use crate::error::RuleError;
use crate::rules;

/// Aliases shorter than this are only trusted next to a section keyword or marker.
pub const MIN_STANDALONE_ALIAS: usize = 7;

const GITA_CHAPTERS: u32 = 18;

/// A compiled sectioning vocabulary with its resolution cascade.
#[derive(Debug)]
pub struct Vocabulary {
    table: &'static str,
    canonical: &'static [&'static str],
    /// Longest first; equal lengths keep table order.
    aliases: Vec<(&'static str, &'static str)>,
    compounds: Vec<(Regex, &'static str)>,
    keyword: Regex,
    marker: Option<&'static str>,
    native: Vec<(&'static str, &'static str)>,
    native_keyword: Option<Regex>,
}

impl Vocabulary {
    pub fn build(spec: &VocabularySpec) -> Result<Self, RuleError> {
        if spec.aliases.is_empty() {
            return Err(RuleError::EmptyTable { table: spec.table });
        }
        for (alias, label) in spec.aliases.iter().chain(spec.native) {
            if alias.is_empty() {
                return Err(RuleError::EmptyAlias { table: spec.table });
            }
            if !spec.canonical.contains(label) {
                return Err(RuleError::UnknownLabel {
                    table: spec.table,
                    alias: alias.to_string(),
                    label: label.to_string(),
                });
            }
        }

        let aliases = longest_first(spec.aliases);
        let compounds = aliases
            .iter()
            .map(|(alias, label)| {
                let pattern = format!(r"{}\s*(?:{})", regex::escape(alias), spec.compound_root);
                Ok((rules::compile(spec.table, &pattern)?, *label))
            })
            .collect::<Result<Vec<_>, RuleError>>()?;
        let native_keyword = spec
            .native_keyword
            .map(|p| rules::compile(spec.table, p))
            .transpose()?;

        Ok(Vocabulary {
            table: spec.table,
            canonical: spec.canonical,
            aliases,
            compounds,
            keyword: rules::compile(spec.table, spec.keyword)?,
            marker: spec.marker,
            native: longest_first(spec.native),
            native_keyword,
        })
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn canonical(&self) -> &'static [&'static str] {
        self.canonical
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len() + self.native.len()
    }

    /// Latin-script cascade over an already lower-cased title.
    pub fn resolve_latin(&self, lower: &str) -> Option<&'static str> {
        let contained = || self.aliases.iter().find(|(alias, _)| lower.contains(alias));

        if self.keyword.is_match(lower) {
            if let Some((alias, label)) = contained() {
                trace!(table = self.table, alias, "keyword hit");
                return Some(*label);
            }
        }

        if let Some((_, label)) = self.compounds.iter().find(|(re, _)| re.is_match(lower)) {
            trace!(table = self.table, "compound hit");
            return Some(*label);
        }

        if let Some(marker) = self.marker {
            if lower.contains(marker) {
                if let Some((alias, label)) = contained() {
                    trace!(table = self.table, alias, "marker hit");
                    return Some(*label);
                }
            }
        }

        self.aliases
            .iter()
            .find(|(alias, _)| alias.chars().count() >= MIN_STANDALONE_ALIAS && lower.contains(alias))
            .map(|(_, label)| *label)
    }

    /// Telugu-script lookup over the untransformed title.
    pub fn resolve_native(&self, title: &str) -> Option<&'static str> {
        if let Some(keyword) = &self.native_keyword {
            if !keyword.is_match(title) {
                return None;
            }
        }
        self.native
            .iter()
            .find(|(alias, _)| title.contains(alias))
            .map(|(_, label)| *label)
    }
}

fn longest_first(table: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
    let mut sorted = table.to_vec();
    sorted.sort_by_key(|(alias, _)| std::cmp::Reverse(alias.chars().count()));
    sorted
}

/// Category-level alternatives: any alias of the vocabulary directly followed by
/// its section root, e.g. "sundara kanda", "shanti parva" or "సుందరకాండ". Returns
/// the Latin pattern, then the Telugu one.
pub fn adjacency_patterns(spec: &VocabularySpec) -> [String; 2] {
    let latin = format!(r"\b(?:{})\s*(?:{})", alternation(spec.aliases), spec.compound_root);
    // no \b: Telugu vowel signs are not word characters
    let native = format!(r"(?:{})\s*(?:{})", alternation(spec.native), spec.native_root);
    [latin, native]
}

fn alternation(table: &[(&str, &str)]) -> String {
    let mut aliases: Vec<&str> = table.iter().map(|(alias, _)| *alias).collect();
    aliases.sort_by_key(|a| std::cmp::Reverse(a.len()));
    aliases.dedup();
    aliases
        .iter()
        .map(|a| regex::escape(a))
        .collect::<Vec<_>>()
        .join("|")
}

/// "Chapter N" extraction for the Gita.
#[derive(Debug)]
pub struct ChapterResolver {
    marker_number: Regex,
    number_marker: Regex,
}

impl ChapterResolver {
    pub fn build() -> Result<Self, RuleError> {
        Ok(ChapterResolver {
            marker_number: rules::compile("gita", r"(?:chapter|adhyaa?yam?|అధ్యాయం?)\s*([0-9౦-౯]+)")?,
            number_marker: rules::compile(
                "gita",
                r"([0-9౦-౯]+)\s*(?:va|th|st|nd|rd)\s*(?:chapter|adhyaa?ya|అధ్యాయ)",
            )?,
        })
    }

    pub fn resolve(&self, title: &str) -> Option<u32> {
        [&self.marker_number, &self.number_marker]
            .into_iter()
            .filter_map(|re| re.captures(title))
            .filter_map(|caps| parse_number(&caps[1]))
            .find(|n| (1..=GITA_CHAPTERS).contains(n))
    }
}

/// ASCII or Telugu digits.
fn parse_number(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |acc, c| {
        let d = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '౦'..='౯' => c as u32 - '౦' as u32,
            _ => return None,
        };
        acc.checked_mul(10)?.checked_add(d)
    })
}

pub fn chapter_label(n: u32) -> String {
    format!("Chapter {}", n)
}

/// Subcategory resolution for the four structured categories.
#[derive(Debug)]
pub struct SectionResolver {
    pub skandha: Vocabulary,
    pub kanda: Vocabulary,
    pub parva: Vocabulary,
    pub chapters: ChapterResolver,
}

impl SectionResolver {
    pub fn build() -> Result<Self, RuleError> {
        Ok(SectionResolver {
            skandha: Vocabulary::build(&SKANDHA)?,
            kanda: Vocabulary::build(&KANDA)?,
            parva: Vocabulary::build(&PARVA)?,
            chapters: ChapterResolver::build()?,
        })
    }

    /// Canonical label for `title`, or `None` when the category's default applies.
    /// Returns `None` for the catch-all category, which has no sections.
    pub fn resolve(&self, category: Category, title: &str) -> Option<String> {
        let lower = title.to_lowercase();
        let hit = match category {
            Category::Bhagavatam => self
                .skandha
                .resolve_latin(&lower)
                .or_else(|| self.skandha.resolve_native(title)),
            // Titles sometimes borrow the other epic's sectioning words, so each
            // epic falls back to the other's vocabulary before the native tables.
            Category::Ramayana => self
                .kanda
                .resolve_latin(&lower)
                .or_else(|| self.parva.resolve_latin(&lower))
                .or_else(|| self.kanda.resolve_native(title))
                .or_else(|| self.parva.resolve_native(title)),
            Category::Mahabharata => self
                .parva
                .resolve_latin(&lower)
                .or_else(|| self.kanda.resolve_latin(&lower))
                .or_else(|| self.parva.resolve_native(title))
                .or_else(|| self.kanda.resolve_native(title)),
            Category::Gita => return self.chapters.resolve(title).map(chapter_label),
            Category::Discourses => None,
        };
        hit.map(str::to_string)
    }

    pub fn canonical(&self, category: Category) -> Vec<String> {
        match category {
            Category::Bhagavatam => self.skandha.canonical().iter().map(|s| s.to_string()).collect(),
            Category::Ramayana => self.kanda.canonical().iter().map(|s| s.to_string()).collect(),
            Category::Mahabharata => self.parva.canonical().iter().map(|s| s.to_string()).collect(),
            Category::Gita => (1..=GITA_CHAPTERS).map(chapter_label).collect(),
            Category::Discourses => Vec::new(),
        }
    }
}
