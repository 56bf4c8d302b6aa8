//! Layout and contact-detail checks

use super::ResumeText;
use crate::processing::patterns::{CompiledPatterns, PhoneFormat, TABLE_CHARS};
use crate::processing::result::{Category, CategoryReport};

const MAX_BULLET_GLYPHS: usize = 15;
const MAX_TAB_RUNS: usize = 5;
const MAX_SPACE_RUNS: usize = 10;

pub fn analyze(text: &ResumeText<'_>, patterns: &CompiledPatterns) -> (CategoryReport, Option<PhoneFormat>) {
    let raw = text.raw;
    let mut report = CategoryReport::new(Category::Format, 100.0);

    let glyphs = patterns.bullet_glyphs.find_iter(raw).count();
    if glyphs > MAX_BULLET_GLYPHS {
        report.deduct(15.0);
        report.issue("Too many special bullet characters detected");
        report.suggest(
            "Use simple hyphens (-) or asterisks (*) for bullet points instead of special symbols",
        );
    } else if glyphs > 0 {
        report.strength("Moderate use of formatting symbols");
    }

    match patterns.email.find_iter(raw).count() {
        0 => {
            report.deduct(20.0);
            report.issue("No email address found");
            report.suggest("Add a clear, professional email address in a standard format");
        }
        1 => report.strength("Professional email format detected"),
        _ => {
            report.deduct(5.0);
            report.issue("Multiple email addresses found");
            report.suggest("Use only one professional email address");
        }
    }

    let phone = patterns.detect_phone(raw);
    match phone {
        Some(_) => report.strength("Contact phone number is present"),
        None => {
            report.deduct(15.0);
            report.issue("No phone number found");
            report.suggest("Add a clear phone number in standard format");
        }
    }

    let tab_runs = patterns.tab_run.find_iter(raw).count();
    let space_runs = patterns.space_run.find_iter(raw).count();
    if tab_runs > MAX_TAB_RUNS || space_runs > MAX_SPACE_RUNS {
        report.deduct(10.0);
        report.issue("Excessive use of tabs or spaces for formatting");
        report.suggest("Use consistent, simple formatting without excessive tabs or spaces");
    }

    if raw.contains(TABLE_CHARS) {
        report.deduct(20.0);
        report.issue("Table formatting detected");
        report.suggest("Avoid tables and complex formatting - use simple text layout");
    }

    (report.finish(), phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(raw: &str) -> (CategoryReport, Option<PhoneFormat>) {
        let patterns = CompiledPatterns::compile().unwrap();
        analyze(&ResumeText::new(raw), &patterns)
    }

    #[test]
    fn test_clean_contact_block_scores_full() {
        let (report, phone) = run("Jane Doe\njane.doe@example.com\n+1 555-123-4567\nSoftware engineer");
        assert_eq!(report.score, 100.0);
        assert_eq!(phone, Some(PhoneFormat::InternationalSeparated));
        assert!(report.suggestions.is_empty());
        assert!(report.formatting_issues.is_empty());
        assert_eq!(
            report.strengths,
            vec!["Professional email format detected", "Contact phone number is present"]
        );
    }

    #[test]
    fn test_missing_contact_details() {
        let (report, phone) = run("Just a paragraph of text.");
        assert_eq!(report.score, 65.0);
        assert_eq!(phone, None);
        assert_eq!(report.formatting_issues, vec!["No email address found", "No phone number found"]);
    }

    #[test]
    fn test_multiple_emails_small_penalty() {
        let (report, _) = run("a@example.com b@example.org 5551234567");
        assert_eq!(report.score, 95.0);
        assert_eq!(report.suggestions, vec!["Use only one professional email address"]);
    }

    #[test]
    fn test_bullet_glyph_thresholds() {
        let few = format!("a@example.com 5551234567 {}", "• item ".repeat(15));
        let (report, _) = run(&few);
        assert_eq!(report.score, 100.0);
        assert_eq!(report.strengths[0], "Moderate use of formatting symbols");

        let many = format!("a@example.com 5551234567 {}", "★ item ".repeat(16));
        let (report, _) = run(&many);
        assert_eq!(report.score, 85.0);
    }

    #[test]
    fn test_tables_and_whitespace_penalised() {
        let text = format!(
            "a@example.com 5551234567\n| Skill | Level |\n{}",
            "x    ".repeat(11)
        );
        let (report, _) = run(&text);
        assert_eq!(report.score, 70.0);
        assert!(report
            .formatting_issues
            .contains(&"Table formatting detected".to_string()));
        assert!(report
            .formatting_issues
            .contains(&"Excessive use of tabs or spaces for formatting".to_string()));
    }

    #[test]
    fn test_score_never_negative() {
        let text = format!("┌─┐ {} {}", "♦".repeat(20), "\t\t x ".repeat(6));
        let (report, _) = run(&text);
        assert_eq!(report.score, 20.0);
        let (report, _) = run("");
        assert!(report.score >= 0.0);
    }
}
