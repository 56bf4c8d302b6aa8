//! Section presence and ordering check

use super::ResumeText;
use crate::processing::patterns::{CompiledPatterns, PROFESSIONAL_HEADERS};
use crate::processing::reference::{RequiredSections, Section};
use crate::processing::result::{Category, CategoryReport};

const MIN_PROFESSIONAL_HEADERS: usize = 3;
const CONTACT_WINDOW_LINES: usize = 10;

pub fn analyze(
    text: &ResumeText<'_>,
    sections: &RequiredSections,
    patterns: &CompiledPatterns,
) -> CategoryReport {
    let mut report = CategoryReport::new(Category::Structure, 100.0);

    let missing: Vec<String> = Section::ALL
        .iter()
        .filter(|section| {
            !sections
                .synonyms(**section)
                .iter()
                .any(|synonym| text.lower.contains(synonym.as_str()))
        })
        .map(|section| section.to_string())
        .collect();

    if missing.is_empty() {
        report.strength("All essential CV sections are present");
    } else {
        report.deduct(20.0 * missing.len() as f64);
        report.suggest(format!("Add missing essential sections: {}", missing.join(", ")));
        for section in missing {
            report.flag_area(section);
        }
    }

    let headers = count_professional_headers(text.raw, patterns);
    if headers < MIN_PROFESSIONAL_HEADERS {
        report.deduct(15.0);
        report.suggest("Use clear, consistent section headers (e.g., EXPERIENCE, EDUCATION, SKILLS)");
    } else {
        report.strength(format!(
            "Clear section organization with {} professional headers",
            headers
        ));
    }

    let early_contact = text
        .raw
        .split('\n')
        .take(CONTACT_WINDOW_LINES)
        .any(|line| patterns.contact_marker.is_match(&line.to_lowercase()));

    if early_contact {
        report.strength("Contact information is properly positioned");
    } else {
        report.deduct(10.0);
        report.suggest("Place contact information at the top of your CV");
    }

    report.finish()
}

/// All-caps header lines that contain one of the professional header words.
fn count_professional_headers(raw: &str, patterns: &CompiledPatterns) -> usize {
    raw.lines()
        .filter(|line| patterns.caps_header.is_match(line))
        .filter(|line| {
            let upper = line.to_uppercase();
            PROFESSIONAL_HEADERS.iter().any(|h| upper.contains(h))
        })
        .count()
}
