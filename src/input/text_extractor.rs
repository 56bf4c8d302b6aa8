//! Text extraction from various file formats

use crate::error::{AtsError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            AtsError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        String::from_utf8(bytes).map_err(|e| {
            AtsError::InvalidInput(format!("'{}' is not valid UTF-8: {}", path.display(), e))
        })
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        markdown_to_text(&markdown_content)
    }
}

/// Flattens markdown to plain text. List items keep a `- ` marker and blocks
/// stay separated by a blank line.
pub fn markdown_to_text(markdown: &str) -> Result<String> {
    let mut text = String::new();
    let mut list_depth = 0usize;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::List(_)) => {
                end_line(&mut text);
                list_depth += 1;
            }
            Event::End(Tag::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    end_block(&mut text);
                }
            }
            Event::Start(Tag::Item) => {
                end_line(&mut text);
                text.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
                text.push_str("- ");
            }
            Event::End(Tag::Item) => end_line(&mut text),
            Event::End(Tag::Paragraph) if list_depth > 0 => end_line(&mut text),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::CodeBlock(_))
            | Event::End(Tag::BlockQuote)
            | Event::Rule => end_block(&mut text),
            Event::End(Tag::TableCell) => text.push(' '),
            Event::End(Tag::TableRow) | Event::End(Tag::TableHead) => end_line(&mut text),
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            _ => {}
        }
    }

    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let mut clean_text = lines.join("\n");
    while clean_text.contains("\n\n\n") {
        clean_text = clean_text.replace("\n\n\n", "\n\n");
    }

    Ok(clean_text.trim().to_string())
}

fn end_line(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}

fn end_block(text: &mut String) {
    end_line(text);
    if !text.is_empty() && !text.ends_with("\n\n") {
        text.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_markup_is_removed() {
        let text = markdown_to_text("## EXPERIENCE\n\n**Acme** &amp; Co\n\n- Led a team of 5\n").unwrap();
        assert_eq!(text, "EXPERIENCE\n\nAcme & Co\n\n- Led a team of 5");
    }

    #[test]
    fn test_list_items_keep_bullet_markers() {
        let text = markdown_to_text("* first\n* second\n    * nested\n\nAfter the list").unwrap();
        assert_eq!(text, "- first\n- second\n  - nested\n\nAfter the list");
    }

    #[test]
    fn test_paragraphs_stay_separated() {
        let text = markdown_to_text("One line\nwrapped\n\nSecond paragraph").unwrap();
        assert_eq!(text, "One line\nwrapped\n\nSecond paragraph");
    }
}
