use super::aliases::{KANDA, PARVA, SKANDHA};
use super::sections::adjacency_patterns;
use crate::catalog::Category;
use crate::error::RuleError;
use crate::rules::PatternSet;

// "bhagavad" shares its root with "bhagavatam", so the Gita is tested first.
const GITA: &[&str] = &[
    r"bh[aā]*g[aā]*v[aā]*d\s*g[eiē]+th?[aā]",
    r"bh[aā]*g[aā]*v[aā]*d\s*g[eiē]+t[aā]",
    r"g[eiē]+th?[aā]\s*(?:chapter|adhyaya|slok)",
    r"భగవద్గీత",
    r"గీతా",
];

const BHAGAVATAM: &[&str] = &[
    r"bh[aā]+g[aā]*v[aā]*th",
    r"bh[aā]+g[aā]*v[aā]*t[aā]*m",
    r"srimad\s*bh[aā]*g",
    r"శ్రీమద్భాగవత",
    r"భాగవత",
    r"భాగవతం",
];

const RAMAYANA: &[&str] = &[
    r"r[aā]+m[aā]*y[aā]*n",
    r"valmiki\s*r[aā]+m",
    r"రామాయణ",
    r"రామాయనం",
    r"వాల్మీకి",
];

const MAHABHARATA: &[&str] = &[
    r"m[aā]*h[aā]+bh[aā]*r[aā]*t",
    r"m[aā]*h[aā]+bh[aā]*r[aā]+[mn]",
    r"andhra\s*m[aā]*h[aā]+bh",
    r"bh[aā]+r[aā]*th[aā]*mlo",
    r"bh[aā]+r[aā]+rh[aā]*mlo",
    r"మహాభారత",
    r"మహాభరత",
    r"మహాభాత",
    r"భారతం",
    r"భారత",
];

/// Precedence chain over the four structured texts; anything else falls through
/// to the catch-all. Section names standing alone ("Shanti Parva") are only
/// consulted once no text is named outright, so "Mahabharatam Uttara Kanda" stays
/// with the Mahabharata.
#[derive(Debug)]
pub struct CategoryClassifier {
    named: Vec<(Category, PatternSet)>,
    by_section: Vec<(Category, PatternSet)>,
}

impl CategoryClassifier {
    pub fn build() -> Result<Self, RuleError> {
        Ok(CategoryClassifier {
            named: vec![
                (Category::Gita, PatternSet::compile("gita", GITA)?),
                (Category::Bhagavatam, PatternSet::compile("bhagavatam", BHAGAVATAM)?),
                (Category::Ramayana, PatternSet::compile("ramayana", RAMAYANA)?),
                (Category::Mahabharata, PatternSet::compile("mahabharata", MAHABHARATA)?),
            ],
            by_section: vec![
                (
                    Category::Bhagavatam,
                    PatternSet::compile("skandha sections", &adjacency_patterns(&SKANDHA))?,
                ),
                (
                    Category::Ramayana,
                    PatternSet::compile("kanda sections", &adjacency_patterns(&KANDA))?,
                ),
                (
                    Category::Mahabharata,
                    PatternSet::compile("parva sections", &adjacency_patterns(&PARVA))?,
                ),
            ],
        })
    }

    /// The title decides; the description is only consulted when the title names
    /// no structured text.
    pub fn classify(&self, title: &str, description: &str) -> Category {
        self.first_structured(title)
            .or_else(|| self.first_structured(description))
            .unwrap_or(Category::Discourses)
    }

    fn first_structured(&self, text: &str) -> Option<Category> {
        if text.is_empty() {
            return None;
        }
        let hit = |chain: &[(Category, PatternSet)]| {
            chain
                .iter()
                .find(|(_, patterns)| patterns.is_match(text))
                .map(|(category, _)| *category)
        };
        hit(&self.named).or_else(|| hit(&self.by_section))
    }

    pub fn pattern_counts(&self) -> Vec<(Category, usize)> {
        self.named
            .iter()
            .map(|(category, patterns)| {
                let sections: usize = self
                    .by_section
                    .iter()
                    .filter(|(c, _)| c == category)
                    .map(|(_, p)| p.len())
                    .sum();
                (*category, patterns.len() + sections)
            })
            .collect()
    }
}
