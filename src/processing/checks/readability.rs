//! Readability check. Records suggestions only, never strengths.

use super::ResumeText;
use crate::processing::patterns::{CompiledPatterns, PARAGRAPH_SEPARATOR};
use crate::processing::result::{Category, CategoryReport};

const LONG_SENTENCE_WORDS: usize = 25;
const MAX_LONG_SENTENCES: usize = 5;
const LONG_PARAGRAPH_WORDS: usize = 100;
const MAX_LONG_PARAGRAPHS: usize = 2;
const MAX_MIXED_CASE_WORDS: usize = 5;

pub fn analyze(text: &ResumeText<'_>, patterns: &CompiledPatterns) -> CategoryReport {
    let raw = text.raw;
    let mut report = CategoryReport::new(Category::Readability, 100.0);

    let long_sentences = patterns
        .sentence_terminator
        .split(raw)
        .filter(|s| s.split_whitespace().count() > LONG_SENTENCE_WORDS)
        .count();
    if long_sentences > MAX_LONG_SENTENCES {
        report.deduct(20.0);
        report.suggest("Break down long sentences for better readability");
    }

    let long_paragraphs = raw
        .split(PARAGRAPH_SEPARATOR)
        .filter(|p| p.split_whitespace().count() > LONG_PARAGRAPH_WORDS)
        .count();
    if long_paragraphs > MAX_LONG_PARAGRAPHS {
        report.deduct(15.0);
        report.suggest("Break down large text blocks into smaller, more digestible sections");
    }

    let mixed_case = patterns.mixed_case_word.find_iter(raw).count();
    if mixed_case > MAX_MIXED_CASE_WORDS {
        report.deduct(10.0);
        report.suggest("Ensure consistent capitalization throughout your CV");
    }

    report.finish()
}
