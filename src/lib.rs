pub mod catalog;
pub mod classify;
pub mod consolidate;
pub mod error;
pub mod report;
pub mod rules;
pub mod settings;

pub use catalog::{Category, ClassifiedVideo, Language, VideoRecord};
pub use classify::RuleBook;
pub use consolidate::Taxonomy;
pub use error::RuleError;
