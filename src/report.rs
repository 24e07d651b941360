use std::fmt::{self, Write};

use crate::catalog::Category;
use crate::consolidate::Taxonomy;

const GENERAL_SAMPLES: usize = 5;

/// Category / subcategory count grid, language totals and the General-bucket
/// breakdown, as printed by `taxonomy grid`.
pub fn render_grid(taxonomy: &Taxonomy) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let total = taxonomy.videos().len();

    writeln!(out, "{:<24} | {:<40} | {:>6}", "Category", "Subcategory", "Videos")?;
    writeln!(out, "{}", "-".repeat(76))?;
    for category in taxonomy.categories() {
        let buckets = taxonomy.display_buckets(category);
        let count: usize = buckets.iter().map(|b| b.members.len()).sum();
        writeln!(
            out,
            "{:<24} | {:<40} | {:>6}",
            category.name(),
            format!("({} subcategories)", buckets.len()),
            count
        )?;
        for b in buckets {
            writeln!(out, "{:<24} | {:<40} | {:>6}", "", truncate(&b.label, 40), b.members.len())?;
        }
    }
    writeln!(out, "{}", "-".repeat(76))?;
    writeln!(out, "{:<24} | {:<40} | {:>6}", "Total", "", total)?;

    let langs = taxonomy.language_counts();
    writeln!(out, "\n--- Languages ---")?;
    writeln!(out, "English: {}", langs.english)?;
    writeln!(out, "Telugu:  {}", langs.telugu)?;
    writeln!(out, "Mixed:   {}", langs.mixed)?;

    writeln!(out, "\n--- General bucket analysis ---")?;
    for category in taxonomy.categories().filter(|c| c.is_structured()) {
        let buckets = taxonomy.buckets(category);
        let in_category: usize = buckets.iter().map(|b| b.members.len()).sum();
        let Some(general) = buckets.iter().find(|b| b.label == "General") else {
            writeln!(out, "{}: 0 of {} in General", category.name(), in_category)?;
            continue;
        };
        writeln!(
            out,
            "{}: {} of {} in General ({:.1}%)",
            category.name(),
            general.members.len(),
            in_category,
            share(general.members.len(), in_category)
        )?;
        for v in taxonomy.records(general).take(GENERAL_SAMPLES) {
            writeln!(out, "    {}", truncate(&v.record.title, 70))?;
        }
    }
    Ok(out)
}

/// One-record summary for `taxonomy title`.
pub fn render_single(category: Category, subcategory: &str, language: impl fmt::Display) -> String {
    format!(
        "category:    {} ({})\nsubcategory: {}\nlanguage:    {}",
        category.id(),
        category.name(),
        subcategory,
        language
    )
}

fn share(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
