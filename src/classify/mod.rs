pub mod aliases;
pub mod category;
pub mod language;
pub mod sections;
pub mod topics;

use rayon::prelude::*;

use crate::catalog::{Category, ClassifiedVideo, VideoRecord};
use crate::error::RuleError;

pub use category::CategoryClassifier;
pub use sections::SectionResolver;
pub use topics::TopicExtractor;

/// Every compiled table the classifier needs. Built once, then shared by reference
/// across worker threads.
#[derive(Debug)]
pub struct RuleBook {
    pub categories: CategoryClassifier,
    pub sections: SectionResolver,
    pub topics: TopicExtractor,
}

impl RuleBook {
    pub fn build() -> Result<Self, RuleError> {
        Ok(RuleBook {
            categories: CategoryClassifier::build()?,
            sections: SectionResolver::build()?,
            topics: TopicExtractor::build()?,
        })
    }

    /// Subcategory for a title already placed in `category`. Never empty.
    pub fn subcategory(&self, category: Category, title: &str) -> String {
        match category {
            Category::Discourses => self.topics.extract(title),
            _ => self
                .sections
                .resolve(category, title)
                .unwrap_or_else(|| category.default_label().to_string()),
        }
    }

    pub fn classify(&self, record: VideoRecord) -> ClassifiedVideo {
        let category = self.categories.classify(&record.title, &record.description);
        let subcategory = self.subcategory(category, &record.title);
        let language = language::tag(&format!("{} {}", record.title, record.description));
        ClassifiedVideo {
            record,
            category,
            category_name: category.name().to_string(),
            subcategory,
            language,
        }
    }

    /// Classifies in parallel; output order matches input order.
    pub fn classify_all(&self, records: Vec<VideoRecord>) -> Vec<ClassifiedVideo> {
        records.into_par_iter().map(|r| self.classify(r)).collect()
    }
}
