//! Pattern tables for the ATS checks
//!
//! Every regular expression the checks rely on is declared here as a named
//! source constant and compiled once into [`CompiledPatterns`].

use crate::error::Result;
use regex::Regex;

/// Decorative bullet glyphs that many ATS parsers mangle.
pub const BULLET_GLYPHS: &str = r"[•●▪▫◦‣⁃★☆♦♥♠♣]";

pub const EMAIL: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Tried in order; the first match wins.
pub const PHONE_PATTERNS: [&str; 3] = [
    // International with separators, e.g. +1 (555) 123-4567
    r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
    // International compact, e.g. +447911123456
    r"\+\d{1,3}[-.\s]?\d{8,12}",
    // Bare digit run
    r"\d{10,12}",
];

pub const TAB_RUN: &str = r"\t{2,}";
pub const SPACE_RUN: &str = r" {4,}";

/// Pipe and box-drawing characters that indicate table layouts.
pub const TABLE_CHARS: &[char] = &['|', '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼'];

/// Matched against a single line.
pub const CAPS_HEADER: &str = r"^[A-Z][A-Z \t&]{2,}$";

pub const PROFESSIONAL_HEADERS: [&str; 8] = [
    "EXPERIENCE",
    "EDUCATION",
    "SKILLS",
    "CONTACT",
    "SUMMARY",
    "OBJECTIVE",
    "PROJECTS",
    "CERTIFICATIONS",
];

/// Matched against a lowercased line.
pub const CONTACT_MARKER: &str = r"@|phone|\+\d|email";

pub const NUMERIC_TOKEN: &str = r"\b\d+(?:\.\d+)?%?\b";

pub const QUANTIFIABLE_VERBS: [&str; 7] = [
    "increased",
    "decreased",
    "improved",
    "reduced",
    "grew",
    "achieved",
    "exceeded",
];

pub const DATE_PATTERNS: [&str; 5] = [
    r"\b\d{4}\b",
    r"\b\d{1,2}/\d{4}\b",
    r"\b\d{1,2}/\d{1,2}/\d{4}\b",
    r"(?i)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}\b",
    r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}\b",
];

pub const SUMMARY_KEYWORDS: [&str; 4] = ["summary", "objective", "profile", "about"];

pub const BULLET_LINE: &str = r"(?m)^\s*[-•*]\s";

pub const SENTENCE_TERMINATOR: &str = r"[.!?]+";

/// Paragraphs are separated by a blank line.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Lowercase run, capital, lowercase run inside one word.
pub const MIXED_CASE_WORD: &str = r"\b[a-z]+[A-Z][a-z]*\b";

/// Which of [`PHONE_PATTERNS`] recognised the phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PhoneFormat {
    InternationalSeparated,
    InternationalCompact,
    DigitRun,
}

impl PhoneFormat {
    const ORDER: [PhoneFormat; 3] = [
        PhoneFormat::InternationalSeparated,
        PhoneFormat::InternationalCompact,
        PhoneFormat::DigitRun,
    ];
}

/// Compiled form of the pattern table. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    pub bullet_glyphs: Regex,
    pub email: Regex,
    pub phones: Vec<Regex>,
    pub tab_run: Regex,
    pub space_run: Regex,
    pub caps_header: Regex,
    pub contact_marker: Regex,
    pub numeric_token: Regex,
    pub quantifiable: Vec<Regex>,
    pub dates: Vec<Regex>,
    pub bullet_line: Regex,
    pub sentence_terminator: Regex,
    pub mixed_case_word: Regex,
}

impl CompiledPatterns {
    pub fn compile() -> Result<Self> {
        let phones = PHONE_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let quantifiable = QUANTIFIABLE_VERBS
            .iter()
            .map(|verb| Regex::new(&format!(r"(?i){}.*?\d+", regex::escape(verb))))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let dates = DATE_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            bullet_glyphs: Regex::new(BULLET_GLYPHS)?,
            email: Regex::new(EMAIL)?,
            phones,
            tab_run: Regex::new(TAB_RUN)?,
            space_run: Regex::new(SPACE_RUN)?,
            caps_header: Regex::new(CAPS_HEADER)?,
            contact_marker: Regex::new(CONTACT_MARKER)?,
            numeric_token: Regex::new(NUMERIC_TOKEN)?,
            quantifiable,
            dates,
            bullet_line: Regex::new(BULLET_LINE)?,
            sentence_terminator: Regex::new(SENTENCE_TERMINATOR)?,
            mixed_case_word: Regex::new(MIXED_CASE_WORD)?,
        })
    }

    pub fn detect_phone(&self, text: &str) -> Option<PhoneFormat> {
        self.phones
            .iter()
            .zip(PhoneFormat::ORDER)
            .find(|(re, _)| re.is_match(text))
            .map(|(_, format)| format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> CompiledPatterns {
        CompiledPatterns::compile().unwrap()
    }

    #[test]
    fn test_all_patterns_compile() {
        let p = patterns();
        assert_eq!(p.phones.len(), 3);
        assert_eq!(p.quantifiable.len(), 7);
        assert_eq!(p.dates.len(), 5);
    }

    #[test]
    fn test_email_requires_two_letter_tld() {
        let p = patterns();
        assert!(p.email.is_match("jane.doe@example.com"));
        assert!(p.email.is_match("x+tag@mail.co"));
        assert!(!p.email.is_match("jane@localhost"));
        assert!(!p.email.is_match("jane@example.c"));
    }

    #[test]
    fn test_phone_formats_in_order() {
        let p = patterns();
        assert_eq!(p.detect_phone("+1 (555) 123-4567"), Some(PhoneFormat::InternationalSeparated));
        assert_eq!(p.detect_phone("call 555.123.4567"), Some(PhoneFormat::InternationalSeparated));
        assert_eq!(p.detect_phone("+44 79111234"), Some(PhoneFormat::InternationalCompact));
        assert_eq!(p.detect_phone("no phone here"), None);
        assert_eq!(p.detect_phone("12-34"), None);
    }

    #[test]
    fn test_caps_header_is_single_line() {
        let p = patterns();
        assert!(p.caps_header.is_match("WORK EXPERIENCE"));
        assert!(p.caps_header.is_match("SKILLS & TOOLS"));
        assert!(!p.caps_header.is_match("Experience"));
        assert!(!p.caps_header.is_match("AB"));
        assert!(!p.caps_header.is_match("EXPERIENCE\nEDUCATION"));
    }

    #[test]
    fn test_numeric_token_drops_percent_sign() {
        let p = patterns();
        let found: Vec<&str> = p
            .numeric_token
            .find_iter("grew 40% in 2.5 years, 3 teams")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["40", "2.5", "3"]);
    }

    #[test]
    fn test_quantifiable_is_case_insensitive_and_line_bound() {
        let p = patterns();
        let increased = &p.quantifiable[0];
        assert_eq!(increased.find_iter("Increased sales by 20%").count(), 1);
        assert_eq!(increased.find_iter("increased sales\nby 20%").count(), 0);
    }

    #[test]
    fn test_mixed_case_word() {
        let p = patterns();
        assert_eq!(p.mixed_case_word.find_iter("javaScript and iPhone").count(), 2);
        assert_eq!(p.mixed_case_word.find_iter("JavaScript Python").count(), 0);
    }
}
