//! Content quality check: metrics, dates, summary and bullets

use super::ResumeText;
use crate::processing::patterns::{CompiledPatterns, SUMMARY_KEYWORDS};
use crate::processing::result::{Category, CategoryReport};

const MIN_NUMERIC_TOKENS: usize = 3;
const MIN_QUANTIFIED_ACHIEVEMENTS: usize = 3;
const MIN_DATES: usize = 2;

pub fn analyze(text: &ResumeText<'_>, patterns: &CompiledPatterns) -> CategoryReport {
    let raw = text.raw;
    let mut report = CategoryReport::new(Category::Content, 100.0);

    let numbers = patterns.numeric_token.find_iter(raw).count();
    if numbers < MIN_NUMERIC_TOKENS {
        report.deduct(25.0);
        report.suggest(
            "Include more quantifiable achievements with specific numbers, percentages, or metrics",
        );
        report.flag_area("Quantifiable Results");
    } else {
        let achievements = count_quantified_achievements(raw, patterns);
        if achievements >= MIN_QUANTIFIED_ACHIEVEMENTS {
            report.strength(format!(
                "Excellent use of quantifiable achievements ({} found)",
                achievements
            ));
        } else {
            report.strength(format!("Good use of metrics and numbers ({} found)", numbers));
        }
    }

    // Overlapping date formats are each counted
    let dates: usize = patterns.dates.iter().map(|re| re.find_iter(raw).count()).sum();
    if dates < MIN_DATES {
        report.deduct(15.0);
        report.suggest("Include clear dates for education and work experience (MM/YYYY format)");
        report.flag_area("Date Formatting");
    } else {
        report.strength("Clear timeline with proper date formatting");
    }

    if SUMMARY_KEYWORDS.iter().any(|k| text.lower.contains(k)) {
        report.strength("Professional summary or objective present");
    } else {
        report.deduct(10.0);
        report.suggest("Add a professional summary or objective statement at the beginning");
    }

    if patterns.bullet_line.is_match(raw) {
        report.strength("Good use of bullet points for readability");
    } else {
        report.deduct(5.0);
        report.suggest("Use bullet points to make your experience more readable");
    }

    report.finish()
}

/// Achievement verbs followed later on the same line by a number.
fn count_quantified_achievements(raw: &str, patterns: &CompiledPatterns) -> usize {
    patterns
        .quantifiable
        .iter()
        .map(|re| re.find_iter(raw).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(raw: &str) -> CategoryReport {
        let patterns = CompiledPatterns::compile().unwrap();
        analyze(&ResumeText::new(raw), &patterns)
    }

    #[test]
    fn test_bare_text_loses_all_points_available() {
        let report = run("plain words only");
        assert_eq!(report.score, 45.0);
        assert_eq!(
            report.improvement_areas,
            vec!["Quantifiable Results", "Date Formatting"]
        );
        assert!(report.strengths.is_empty());
    }

    #[test]
    fn test_quantified_achievements_strength() {
        let text = "SUMMARY\n\
                    - Increased revenue by 30% in 2021\n\
                    - Reduced costs by 15%\n\
                    - Improved latency 40 ms since Jan 2020";
        let report = run(text);
        assert_eq!(report.score, 100.0);
        assert_eq!(
            report.strengths[0],
            "Excellent use of quantifiable achievements (3 found)"
        );
    }

    #[test]
    fn test_numbers_without_achievement_verbs() {
        let text = "Profile\n* Worked 2019 to 2023 on 12 projects";
        let report = run(text);
        assert_eq!(report.score, 100.0);
        assert_eq!(report.strengths[0], "Good use of metrics and numbers (3 found)");
    }

    #[test]
    fn test_overlapping_date_patterns_double_count() {
        let patterns = CompiledPatterns::compile().unwrap();
        // "May 2020" matches the year, abbreviated and full month patterns
        let dates: usize = patterns
            .dates
            .iter()
            .map(|re| re.find_iter("May 2020").count())
            .sum();
        assert_eq!(dates, 3);

        let report = run("about me 1 2 3\n- since May 2020");
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn test_bullet_needs_trailing_whitespace() {
        let report = run("summary 1 2 3 2020 2021\n-no space");
        assert_eq!(report.score, 95.0);
        let report = run("summary 1 2 3 2020 2021\n   • spaced");
        assert_eq!(report.score, 100.0);
    }
}
