use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{Category, ClassifiedVideo, Language};
use crate::classify::aliases::{KANDAS, PARVAS, SKANDHAS};
use crate::classify::sections::chapter_label;

/// Catch-all topics with fewer records than this fold into "Other Discourses".
pub const MIN_DISCOURSE_BUCKET: usize = 3;

static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

pub fn slugify(name: &str) -> String {
    NON_SLUG_RE
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// One subcategory: a label and the indices of its records, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub members: Vec<usize>,
}

/// Classified records grouped category → subcategory. Buckets keep first-seen
/// order; the records themselves stay in input order.
#[derive(Debug)]
pub struct Taxonomy {
    videos: Vec<ClassifiedVideo>,
    groups: BTreeMap<Category, Vec<Bucket>>,
}

impl Taxonomy {
    pub fn group(videos: Vec<ClassifiedVideo>) -> Self {
        let mut groups: BTreeMap<Category, Vec<Bucket>> = BTreeMap::new();
        for (i, v) in videos.iter().enumerate() {
            let buckets = groups.entry(v.category).or_default();
            push_into(buckets, &v.subcategory, std::iter::once(i));
        }
        Taxonomy { videos, groups }
    }

    /// Closure pass: every bucket that is not a valid home for its category is
    /// folded into the category's default bucket. Merged records are relabelled.
    pub fn consolidate(&mut self) {
        let kandas = slug_set(KANDAS);
        let parvas = slug_set(PARVAS);

        for (category, buckets) in self.groups.iter_mut() {
            let mut kept: Vec<Bucket> = Vec::with_capacity(buckets.len());
            for bucket in buckets.drain(..) {
                let slug = slugify(&bucket.label);
                let valid = match category {
                    Category::Ramayana => is_home(&slug, &kandas),
                    Category::Mahabharata => is_home(&slug, &parvas),
                    Category::Discourses => {
                        !slug.is_empty() && bucket.members.len() >= MIN_DISCOURSE_BUCKET
                    }
                    Category::Bhagavatam | Category::Gita => !slug.is_empty(),
                };
                let target = if valid {
                    bucket.label
                } else {
                    let target = category.default_label();
                    debug!(
                        category = %category,
                        from = %bucket.label,
                        to = target,
                        records = bucket.members.len(),
                        "merging bucket"
                    );
                    for &i in &bucket.members {
                        self.videos[i].subcategory = target.to_string();
                    }
                    target.to_string()
                };
                push_into(&mut kept, &target, bucket.members.into_iter());
            }
            *buckets = kept;
        }
    }

    pub fn videos(&self) -> &[ClassifiedVideo] {
        &self.videos
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.keys().copied()
    }

    /// Buckets in first-seen order.
    pub fn buckets(&self, category: Category) -> &[Bucket] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Buckets in display order: canonical sections first, unknown labels next,
    /// "General" last. The catch-all goes by size, then name.
    pub fn display_buckets(&self, category: Category) -> Vec<&Bucket> {
        let mut buckets: Vec<&Bucket> = self.buckets(category).iter().collect();
        if category == Category::Discourses {
            buckets.sort_by(|a, b| {
                b.members
                    .len()
                    .cmp(&a.members.len())
                    .then_with(|| a.label.cmp(&b.label))
            });
            return buckets;
        }
        let order = canonical_order(category);
        buckets.sort_by_key(|b| {
            if b.label == "General" {
                (2, 0, b.label.clone())
            } else if let Some(idx) = order.iter().position(|l| *l == b.label) {
                (0, idx, b.label.clone())
            } else {
                (1, 0, b.label.clone())
            }
        });
        buckets
    }

    pub fn records<'a>(&'a self, bucket: &'a Bucket) -> impl Iterator<Item = &'a ClassifiedVideo> + 'a {
        bucket.members.iter().map(move |&i| &self.videos[i])
    }

    pub fn language_counts(&self) -> LanguageCounts {
        let mut counts = LanguageCounts::default();
        for v in &self.videos {
            counts.add(v.language);
        }
        counts
    }

    pub fn document(&self, generated_on: NaiveDate) -> TaxonomyDocument<'_> {
        let categories: Vec<CategoryEntry<'_>> = self
            .categories()
            .map(|category| {
                let subcategories: Vec<SubcategoryEntry<'_>> = self
                    .display_buckets(category)
                    .into_iter()
                    .map(|b| SubcategoryEntry {
                        id: slugify(&b.label),
                        name: &b.label,
                        video_count: b.members.len(),
                        videos: self.records(b).collect(),
                    })
                    .collect();
                CategoryEntry {
                    id: category.id(),
                    name: category.name(),
                    video_count: subcategories.iter().map(|s| s.video_count).sum(),
                    subcategories,
                }
            })
            .collect();
        TaxonomyDocument {
            total_videos: self.videos.len(),
            total_categories: categories.len(),
            total_subcategories: categories.iter().map(|c| c.subcategories.len()).sum(),
            language_counts: self.language_counts(),
            generated_on: generated_on.to_string(),
            categories,
        }
    }
}

fn push_into(buckets: &mut Vec<Bucket>, label: &str, members: impl Iterator<Item = usize>) {
    match buckets.iter_mut().find(|b| b.label == label) {
        Some(bucket) => bucket.members.extend(members),
        None => buckets.push(Bucket {
            label: label.to_string(),
            members: members.collect(),
        }),
    }
}

fn slug_set(labels: &[&str]) -> HashSet<String> {
    labels
        .iter()
        .map(|l| slugify(l))
        .chain(std::iter::once("general".to_string()))
        .collect()
}

fn is_home(slug: &str, valid: &HashSet<String>) -> bool {
    !slug.is_empty() && valid.contains(slug)
}

fn canonical_order(category: Category) -> Vec<String> {
    match category {
        Category::Bhagavatam => SKANDHAS.iter().map(|s| s.to_string()).collect(),
        Category::Ramayana => KANDAS.iter().map(|s| s.to_string()).collect(),
        Category::Mahabharata => PARVAS.iter().map(|s| s.to_string()).collect(),
        Category::Gita => (1..=18).map(chapter_label).collect(),
        Category::Discourses => Vec::new(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageCounts {
    pub english: usize,
    pub telugu: usize,
    pub mixed: usize,
}

impl LanguageCounts {
    pub fn add(&mut self, language: Language) {
        match language {
            Language::English => self.english += 1,
            Language::Telugu => self.telugu += 1,
            Language::Mixed => self.mixed += 1,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyDocument<'a> {
    pub total_videos: usize,
    pub total_categories: usize,
    pub total_subcategories: usize,
    pub language_counts: LanguageCounts,
    pub generated_on: String,
    pub categories: Vec<CategoryEntry<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry<'a> {
    pub id: &'static str,
    pub name: &'static str,
    pub video_count: usize,
    pub subcategories: Vec<SubcategoryEntry<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryEntry<'a> {
    pub id: String,
    pub name: &'a str,
    pub video_count: usize,
    pub videos: Vec<&'a ClassifiedVideo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoRecord;

    fn classified(id: &str, category: Category, subcategory: &str) -> ClassifiedVideo {
        ClassifiedVideo {
            record: VideoRecord {
                id: id.to_string(),
                title: id.to_string(),
                ..Default::default()
            },
            category,
            category_name: category.name().to_string(),
            subcategory: subcategory.to_string(),
            language: Language::English,
        }
    }

    fn labels(t: &Taxonomy, category: Category) -> Vec<&str> {
        t.buckets(category).iter().map(|b| b.label.as_str()).collect()
    }

    fn ids<'a>(t: &'a Taxonomy, category: Category, label: &str) -> Vec<&'a str> {
        let bucket = t
            .buckets(category)
            .iter()
            .find(|b| b.label == label)
            .unwrap();
        t.records(bucket).map(|v| v.record.id.as_str()).collect()
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("Sundara Kanda"), "sundara-kanda");
        assert_eq!(slugify("  Chapter 5!! "), "chapter-5");
        assert_eq!(slugify("శ్రీ"), "");
        assert_eq!(slugify("Sri Rama---Navami"), "sri-rama-navami");
    }

    #[test]
    fn small_discourse_bucket_folds_into_other() {
        let mut t = Taxonomy::group(vec![
            classified("a", Category::Discourses, "Ugadi"),
            classified("b", Category::Discourses, "Ugadi"),
            classified("c", Category::Discourses, "Thiruppavai"),
            classified("d", Category::Discourses, "Thiruppavai"),
            classified("e", Category::Discourses, "Thiruppavai"),
        ]);
        t.consolidate();
        assert_eq!(labels(&t, Category::Discourses), vec!["Other Discourses", "Thiruppavai"]);
        assert_eq!(ids(&t, Category::Discourses, "Other Discourses"), vec!["a", "b"]);
        assert_eq!(t.videos()[0].subcategory, "Other Discourses");
        assert_eq!(t.videos()[2].subcategory, "Thiruppavai");
    }

    #[test]
    fn untitled_follows_the_same_floor() {
        let mut t = Taxonomy::group(vec![classified("a", Category::Discourses, "Untitled Discourses")]);
        t.consolidate();
        assert_eq!(labels(&t, Category::Discourses), vec!["Other Discourses"]);
    }

    #[test]
    fn non_latin_topic_folds() {
        let mut t = Taxonomy::group(vec![
            classified("a", Category::Discourses, "శ్రీ"),
            classified("b", Category::Discourses, "శ్రీ"),
            classified("c", Category::Discourses, "శ్రీ"),
        ]);
        t.consolidate();
        assert_eq!(labels(&t, Category::Discourses), vec!["Other Discourses"]);
    }

    #[test]
    fn ramayana_keeps_only_kandas() {
        let mut t = Taxonomy::group(vec![
            classified("a", Category::Ramayana, "Udyoga Parva"),
            classified("b", Category::Ramayana, "Sundara Kanda"),
            classified("c", Category::Ramayana, "General"),
            classified("d", Category::Ramayana, "Udyoga Parva"),
        ]);
        t.consolidate();
        assert_eq!(labels(&t, Category::Ramayana), vec!["General", "Sundara Kanda"]);
        // merged records first (first-seen), then the existing General record
        assert_eq!(ids(&t, Category::Ramayana, "General"), vec!["a", "d", "c"]);
        assert_eq!(t.videos()[3].subcategory, "General");
    }

    #[test]
    fn mahabharata_keeps_only_parvas() {
        let mut t = Taxonomy::group(vec![
            classified("a", Category::Mahabharata, "Shanti Parva"),
            classified("b", Category::Mahabharata, "Uttara Kanda"),
        ]);
        t.consolidate();
        assert_eq!(labels(&t, Category::Mahabharata), vec!["Shanti Parva", "General"]);
    }

    #[test]
    fn bhagavatam_and_gita_untouched() {
        let mut t = Taxonomy::group(vec![
            classified("a", Category::Bhagavatam, "Navama Skandha"),
            classified("b", Category::Gita, "Chapter 5"),
        ]);
        t.consolidate();
        assert_eq!(labels(&t, Category::Bhagavatam), vec!["Navama Skandha"]);
        assert_eq!(labels(&t, Category::Gita), vec!["Chapter 5"]);
    }

    #[test]
    fn consolidation_is_idempotent() {
        let mut t = Taxonomy::group(vec![
            classified("a", Category::Discourses, "Ugadi"),
            classified("b", Category::Ramayana, "Vana Parva"),
        ]);
        t.consolidate();
        let once: Vec<_> = t.videos().to_vec();
        let mut again = Taxonomy::group(once.clone());
        again.consolidate();
        assert_eq!(again.videos(), once.as_slice());
    }

    #[test]
    fn display_order() {
        let t = Taxonomy::group(vec![
            classified("a", Category::Bhagavatam, "General"),
            classified("b", Category::Bhagavatam, "Mystery"),
            classified("c", Category::Bhagavatam, "Navama Skandha"),
            classified("d", Category::Bhagavatam, "Prathama Skandha"),
            classified("e", Category::Discourses, "Ugadi"),
            classified("f", Category::Discourses, "Bhajans"),
            classified("g", Category::Discourses, "Bhajans"),
            classified("h", Category::Discourses, "Abc"),
        ]);
        let order: Vec<_> = t
            .display_buckets(Category::Bhagavatam)
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(order, vec!["Prathama Skandha", "Navama Skandha", "Mystery", "General"]);
        let order: Vec<_> = t
            .display_buckets(Category::Discourses)
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(order, vec!["Bhajans", "Abc", "Ugadi"]);
    }

    #[test]
    fn fixture_pipeline() {
        let records = crate::catalog::load_records(std::path::Path::new("tests/fixtures/videos.json")).unwrap();
        let book = crate::classify::RuleBook::build().unwrap();
        let mut t = Taxonomy::group(book.classify_all(records));
        t.consolidate();

        let by_id = |id: &str| {
            let v = t.videos().iter().find(|v| v.record.id == id).unwrap();
            (v.category, v.subcategory.as_str())
        };
        assert_eq!(by_id("v01"), (Category::Bhagavatam, "Navama Skandha"));
        assert_eq!(by_id("v02"), (Category::Gita, "Chapter 5"));
        assert_eq!(by_id("v04"), (Category::Ramayana, "Sundara Kanda"));
        assert_eq!(by_id("v05"), (Category::Mahabharata, "Shanti Parva"));
        assert_eq!(by_id("v07"), (Category::Ramayana, "General"));
        assert_eq!(by_id("v08"), (Category::Mahabharata, "General"));
        assert_eq!(by_id("v09"), (Category::Discourses, "Thiruppavai"));
        assert_eq!(by_id("v12"), (Category::Discourses, "Other Discourses"));
        assert_eq!(by_id("v15"), (Category::Mahabharata, "General"));
        assert_eq!(by_id("v17"), (Category::Gita, "Chapter 12"));
        assert_eq!(by_id("v20"), (Category::Discourses, "Karthika Puranam"));
        assert_eq!(by_id("v23"), (Category::Mahabharata, "Shanti Parva"));
        // two untitled records are below the floor
        assert_eq!(by_id("v03"), (Category::Discourses, "Other Discourses"));

        for category in Category::ALL.into_iter().filter(|c| c.is_structured()) {
            let canonical = canonical_order(category);
            for b in t.buckets(category) {
                assert!(
                    b.label == "General" || canonical.contains(&b.label),
                    "{category}: {}",
                    b.label
                );
            }
        }
        for b in t.buckets(Category::Discourses) {
            if b.label != "Other Discourses" && b.label != "Untitled Discourses" {
                assert!(b.members.len() >= MIN_DISCOURSE_BUCKET, "{}", b.label);
            }
        }

        // input order survives grouping
        let ids: Vec<_> = t.videos().iter().map(|v| v.record.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"v01"));
        assert_eq!(ids.last(), Some(&"v24"));
        assert_eq!(ids.len(), 24);
    }

    #[test]
    fn pipeline_is_idempotent_on_its_output() {
        let book = crate::classify::RuleBook::build().unwrap();
        let run = |records: Vec<VideoRecord>| {
            let mut t = Taxonomy::group(book.classify_all(records));
            t.consolidate();
            t
        };

        let records = crate::catalog::load_records(std::path::Path::new("tests/fixtures/videos.json")).unwrap();
        let first = run(records);

        // the flat output, read back as plain records
        let json = serde_json::to_string(first.videos()).unwrap();
        let reloaded: Vec<VideoRecord> = serde_json::from_str(&json).unwrap();
        let second = run(reloaded);

        assert_eq!(first.videos().len(), second.videos().len());
        for (a, b) in first.videos().iter().zip(second.videos()) {
            assert_eq!(a.record.id, b.record.id);
            assert_eq!(
                (a.category, a.subcategory.as_str()),
                (b.category, b.subcategory.as_str()),
                "{}",
                a.record.id
            );
        }
    }

    #[test]
    fn document_shape() {
        let mut t = Taxonomy::group(vec![
            classified("a", Category::Gita, "Chapter 2"),
            classified("b", Category::Gita, "Chapter 1"),
        ]);
        t.consolidate();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let json = serde_json::to_value(t.document(date)).unwrap();
        assert_eq!(json["totalVideos"], 2);
        assert_eq!(json["generatedOn"], "2024-03-09");
        assert_eq!(json["languageCounts"]["english"], 2);
        assert_eq!(json["categories"][0]["id"], "bhagavadgeetha");
        assert_eq!(json["categories"][0]["subcategories"][0]["id"], "chapter-1");
        assert_eq!(json["categories"][0]["subcategories"][1]["videos"][0]["id"], "a");
        assert_eq!(json["categories"][0]["subcategories"][1]["videos"][0]["categoryName"], "Bhagavadgeetha");
    }
}
