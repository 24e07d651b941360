use thiserror::Error;

/// Rejections raised while compiling the rule book. None of these can happen at
/// classification time: a rule book either builds completely or not at all.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern in {table}: {pattern:?}: {source}")]
    InvalidPattern {
        table: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{table} has no patterns")]
    EmptyTable { table: &'static str },

    #[error("{table}: alias {alias:?} maps to {label:?}, which is not a canonical label")]
    UnknownLabel {
        table: &'static str,
        alias: String,
        label: String,
    },

    #[error("{table} contains an empty alias")]
    EmptyAlias { table: &'static str },
}
