//! Glossary search.
//!
//! A plain case-insensitive substring filter over the term list. The query
//! is matched against both the term and its definition; nothing is trimmed,
//! ranked or paginated.

use crate::content::{GlossaryTerm, GLOSSARY_TERMS};

/// Filter `terms` down to the entries whose term or definition contains
/// `query`, ignoring case.
///
/// An empty query keeps every entry. Matches keep their original order.
pub fn filter_terms<'a>(terms: &'a [GlossaryTerm], query: &str) -> Vec<&'a GlossaryTerm> {
    if query.is_empty() {
        return terms.iter().collect();
    }

    let needle = query.to_lowercase();
    terms
        .iter()
        .filter(|entry| {
            entry.term.to_lowercase().contains(&needle)
                || entry.definition.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Result of searching the built-in glossary
#[derive(Debug, Clone, PartialEq)]
pub struct GlossarySearch {
    query: String,
    matches: Vec<&'static GlossaryTerm>,
}

impl GlossarySearch {
    /// Search the built-in glossary table
    pub fn run(query: impl Into<String>) -> Self {
        let query = query.into();
        let matches = filter_terms(GLOSSARY_TERMS, &query);
        tracing::trace!(query = %query, matches = matches.len(), "glossary search");
        Self { query, matches }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[&'static GlossaryTerm] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Message shown in place of the list when nothing matched
    pub fn empty_message(&self) -> String {
        format!("No terms found matching \"{}\"", self.query)
    }
}
