//! Word-count check

use super::ResumeText;
use crate::processing::result::{Category, CategoryReport};

const MIN_WORDS: usize = 150;
const CONDENSE_ABOVE: usize = 800;
const MAX_WORDS: usize = 1200;

pub fn analyze(text: &ResumeText<'_>) -> CategoryReport {
    let words = text.word_count();
    let mut report = CategoryReport::new(Category::Length, 100.0);

    if words < MIN_WORDS {
        report.deduct(40.0);
        report.suggest(
            "CV is too short. Add more details about your experience, skills, and achievements",
        );
        report.flag_area("Content Length");
    } else if words > MAX_WORDS {
        report.deduct(25.0);
        report.suggest(
            "CV might be too long. Consider condensing to 1-2 pages for better readability",
        );
        report.flag_area("Content Length");
    } else if words > CONDENSE_ABOVE {
        report.deduct(10.0);
        report.suggest("Consider condensing some sections to ensure your CV stays concise");
    } else {
        report.strength(format!("Appropriate length ({} words)", words));
    }

    report.finish()
}
