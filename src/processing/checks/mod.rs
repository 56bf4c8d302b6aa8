//! The six independent ATS checks
//!
//! Each check reads the same [`ResumeText`] and returns its own
//! [`CategoryReport`](crate::processing::result::CategoryReport); none of
//! them sees another's output.

pub mod content;
pub mod format;
pub mod keywords;
pub mod length;
pub mod readability;
pub mod structure;

/// Raw input text alongside its lowercased form.
#[derive(Debug, Clone)]
pub struct ResumeText<'a> {
    pub raw: &'a str,
    pub lower: String,
}

impl<'a> ResumeText<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.raw.split_whitespace().count()
    }
}
