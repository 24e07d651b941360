use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A video as delivered by the catalog fetcher. Everything except the title and
/// description is opaque and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "srimadbhagavatam")]
    Bhagavatam,
    #[serde(rename = "ramayanam")]
    Ramayana,
    #[serde(rename = "mahabharatam")]
    Mahabharata,
    #[serde(rename = "bhagavadgeetha")]
    Gita,
    #[serde(rename = "spiritual-discourses")]
    Discourses,
}

impl Category {
    /// Display order used for grouping and reports.
    pub const ALL: [Category; 5] = [
        Category::Bhagavatam,
        Category::Ramayana,
        Category::Mahabharata,
        Category::Gita,
        Category::Discourses,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Bhagavatam => "srimadbhagavatam",
            Category::Ramayana => "ramayanam",
            Category::Mahabharata => "mahabharatam",
            Category::Gita => "bhagavadgeetha",
            Category::Discourses => "spiritual-discourses",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Bhagavatam => "Srimadbhagavatam",
            Category::Ramayana => "Ramayanam",
            Category::Mahabharata => "Mahabharatam",
            Category::Gita => "Bhagavadgeetha",
            Category::Discourses => "Spiritual Discourses",
        }
    }

    /// Label for records the category could not place more precisely.
    pub fn default_label(self) -> &'static str {
        match self {
            Category::Discourses => "Other Discourses",
            _ => "General",
        }
    }

    pub fn is_structured(self) -> bool {
        self != Category::Discourses
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Telugu,
    Mixed,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "english",
            Language::Telugu => "telugu",
            Language::Mixed => "mixed",
        })
    }
}

/// A record after enrichment. The derived fields are computed once by the
/// classifier; only the consolidator may relabel `subcategory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedVideo {
    #[serde(flatten)]
    pub record: VideoRecord,
    pub category: Category,
    pub category_name: String,
    pub subcategory: String,
    pub language: Language,
}

pub fn load_records(path: &Path) -> Result<Vec<VideoRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<VideoRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(records)
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
