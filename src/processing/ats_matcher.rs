//! Substring keyword matching over the reference tables

use crate::error::Result;
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::{BTreeMap, BTreeSet};

/// Reports which terms of a fixed vocabulary occur anywhere in a text.
///
/// A term counts as present when it is a substring of the text, including
/// occurrences inside longer words ("go" is found in "good").
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    automaton: AhoCorasick,
    terms: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<'a, I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let terms: Vec<String> = terms.into_iter().cloned().collect();

        // Standard match kind is required for overlapping iteration
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&terms)?;

        Ok(Self { automaton, terms })
    }

    /// Terms present in `text`, in vocabulary order. `text` must already be lowercased.
    pub fn find_present(&self, text: &str) -> Vec<String> {
        let mut seen = vec![false; self.terms.len()];
        for mat in self.automaton.find_overlapping_iter(text) {
            seen[mat.pattern().as_usize()] = true;
        }

        self.terms
            .iter()
            .zip(seen)
            .filter(|(_, present)| *present)
            .map(|(term, _)| term.clone())
            .collect()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

/// Industry vocabulary matcher. A term listed under several industries is
/// reported once for each of them.
#[derive(Debug, Clone)]
pub struct IndustryMatcher {
    matcher: KeywordMatcher,
    industries_by_term: BTreeMap<String, Vec<String>>,
}

impl IndustryMatcher {
    pub fn new(industry_keywords: &BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        let mut industries_by_term: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (industry, terms) in industry_keywords {
            for term in terms {
                industries_by_term
                    .entry(term.clone())
                    .or_default()
                    .push(industry.clone());
            }
        }

        let matcher = KeywordMatcher::new(industries_by_term.keys())?;
        Ok(Self {
            matcher,
            industries_by_term,
        })
    }

    /// Matched terms grouped by industry.
    pub fn find_present(&self, text: &str) -> BTreeMap<String, Vec<String>> {
        let mut by_industry: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for term in self.matcher.find_present(text) {
            if let Some(industries) = self.industries_by_term.get(&term) {
                for industry in industries {
                    by_industry
                        .entry(industry.clone())
                        .or_default()
                        .push(term.clone());
                }
            }
        }
        for terms in by_industry.values_mut() {
            terms.sort();
        }
        by_industry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_finds_each_present_term_once() {
        let terms = set(&["python", "react", "sql"]);
        let matcher = KeywordMatcher::new(&terms).unwrap();

        let found = matcher.find_present("python, python and react");
        assert_eq!(found, vec!["python".to_string(), "react".to_string()]);
        assert_eq!(matcher.term_count(), 3);
    }

    #[test]
    fn test_overlapping_terms_are_all_reported() {
        let terms = set(&["java", "javascript", "sql", "mysql", "postgresql"]);
        let matcher = KeywordMatcher::new(&terms).unwrap();

        let found = matcher.find_present("javascript and postgresql");
        assert_eq!(found, vec!["java", "javascript", "postgresql", "sql"]);
    }

    #[test]
    fn test_substring_inside_word_counts() {
        let terms = set(&["go"]);
        let matcher = KeywordMatcher::new(&terms).unwrap();
        assert_eq!(matcher.find_present("a good team"), vec!["go"]);
    }

    #[test]
    fn test_empty_vocabulary_matches_nothing() {
        let terms = BTreeSet::new();
        let matcher = KeywordMatcher::new(&terms).unwrap();
        assert!(matcher.find_present("anything at all").is_empty());
    }

    #[test]
    fn test_shared_industry_term_counts_per_industry() {
        let mut industries = BTreeMap::new();
        industries.insert("software".to_string(), set(&["testing", "debugging"]));
        industries.insert("engineering".to_string(), set(&["testing", "cad"]));
        let matcher = IndustryMatcher::new(&industries).unwrap();

        let found = matcher.find_present("unit testing and debugging");
        assert_eq!(found["software"], vec!["debugging", "testing"]);
        assert_eq!(found["engineering"], vec!["testing"]);
        assert_eq!(found.values().map(Vec::len).sum::<usize>(), 3);
    }
}
