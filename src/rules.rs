//! Ordered "first match wins" evaluation shared by the category matchers, the
//! section cascades and the topic table.

use regex::{Regex, RegexBuilder};

use crate::error::RuleError;

/// Compile one case-insensitive pattern, tagging failures with the table name.
pub fn compile(table: &'static str, pattern: &str) -> Result<Regex, RuleError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| RuleError::InvalidPattern {
            table,
            pattern: pattern.to_string(),
            source,
        })
}

#[derive(Debug, Clone)]
struct Rule<T> {
    pattern: Regex,
    label: T,
}

/// Ordered list of (pattern, label). Order is significant: earlier rules pre-empt
/// later ones.
#[derive(Debug, Clone)]
pub struct RuleList<T> {
    rules: Vec<Rule<T>>,
}

impl<T: Clone> RuleList<T> {
    pub fn compile<P: AsRef<str>>(
        table: &'static str,
        specs: &[(P, T)],
    ) -> Result<Self, RuleError> {
        if specs.is_empty() {
            return Err(RuleError::EmptyTable { table });
        }
        let rules = specs
            .iter()
            .map(|(pattern, label)| {
                Ok(Rule {
                    pattern: compile(table, pattern.as_ref())?,
                    label: label.clone(),
                })
            })
            .collect::<Result<Vec<_>, RuleError>>()?;
        Ok(RuleList { rules })
    }
}

impl<T> RuleList<T> {
    pub fn first_match(&self, text: &str) -> Option<&T> {
        self.rules
            .iter()
            .find(|r| r.pattern.is_match(text))
            .map(|r| &r.label)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A set of alternatives that matches when any one of them does.
#[derive(Debug, Clone)]
pub struct PatternSet {
    inner: RuleList<()>,
}

impl PatternSet {
    pub fn compile<P: AsRef<str>>(table: &'static str, patterns: &[P]) -> Result<Self, RuleError> {
        let specs: Vec<(&str, ())> = patterns.iter().map(|p| (p.as_ref(), ())).collect();
        Ok(PatternSet {
            inner: RuleList::compile(table, &specs)?,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.inner.first_match(text).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_respects_order() {
        let rules = RuleList::compile("t", &[("kalyanam", "Temple"), ("goda\\s*kalyanam", "Goda")]).unwrap();
        assert_eq!(rules.first_match("Goda Kalyanam"), Some(&"Temple"));

        let rules = RuleList::compile("t", &[("goda\\s*kalyanam", "Goda"), ("kalyanam", "Temple")]).unwrap();
        assert_eq!(rules.first_match("Goda Kalyanam"), Some(&"Goda"));
        assert_eq!(rules.first_match("Sita Kalyanam"), Some(&"Temple"));
    }

    #[test]
    fn case_insensitive() {
        let set = PatternSet::compile("t", &["ugadi"]).unwrap();
        assert!(set.is_match("UGADI Special"));
    }

    #[test]
    fn empty_table_rejected() {
        let err = PatternSet::compile::<&str>("gita", &[]).unwrap_err();
        assert!(matches!(err, RuleError::EmptyTable { table: "gita" }));
    }

    #[test]
    fn invalid_pattern_rejected() {
        let err = PatternSet::compile("gita", &["(unclosed"]).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { table: "gita", .. }));
    }

    #[test]
    fn no_match() {
        let rules = RuleList::compile("t", &[("ugadi", 1)]).unwrap();
        assert_eq!(rules.first_match(""), None);
    }
}
