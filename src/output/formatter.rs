//! Output formatters for ATS reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{AtsError, Result};
use crate::output::report::AtsReport;
use crate::processing::plan::ImprovementPlan;
use crate::processing::result::{AnalysisResult, Category, ScoreTier};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a finished report
pub trait OutputFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal formatter with optional colours
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    include_plan: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    detailed: bool,
    include_plan: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
    detailed: bool,
    include_plan: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Compatibility Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid {{ tier_color }}; padding-bottom: 20px; }
        .score-badge { display: inline-block; padding: 8px 16px; border-radius: 20px; font-weight: bold; color: white; background: {{ tier_color }}; }
        table { border-collapse: collapse; width: 100%; }
        td, th { border-bottom: 1px solid #e9ecef; padding: 8px; text-align: left; }
        .strengths li { color: #1e7e34; }
        .suggestions li { color: #a15c00; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ATS Compatibility Report</h1>
            <p>Generated: {{ generated_at }} | Target: {{ target_job }}</p>
            <h2>{{ overall_score }} / 100 <span class="score-badge"><i class="{{ tier_icon }}"></i> {{ tier_label }}</span></h2>
            <p>{{ tier_description }}</p>
        </div>

        <div class="section">
            <h2>Category Scores</h2>
            <table>
                <tr><th>Category</th><th>Score</th><th>Weight</th></tr>
                {% for row in categories %}
                <tr><td>{{ row.name }}</td><td>{{ row.score }}</td><td>{{ row.weight }}</td></tr>
                {% endfor %}
            </table>
        </div>

        {% if has_strengths %}
        <div class="section strengths">
            <h2>Strengths</h2>
            <ul>{% for item in strengths %}<li>{{ item }}</li>{% endfor %}</ul>
        </div>
        {% endif %}

        {% if has_suggestions %}
        <div class="section suggestions">
            <h2>Suggestions</h2>
            <ul>{% for item in suggestions %}<li>{{ item }}</li>{% endfor %}</ul>
        </div>
        {% endif %}

        {% for section in detail_sections %}
        <div class="section detail">
            <h3>{{ section.title }}</h3>
            <ul>{% for item in section.items %}<li>{{ item }}</li>{% endfor %}</ul>
        </div>
        {% endfor %}

        {% for section in plan_sections %}
        <div class="section">
            <h3>{{ section.title }}</h3>
            <ul>{% for item in section.items %}<li>{{ item }}</li>{% endfor %}</ul>
        </div>
        {% endfor %}
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    target_job: String,
    overall_score: String,
    tier_label: String,
    tier_description: String,
    tier_color: String,
    tier_icon: String,
    categories: Vec<HtmlCategoryRow>,
    strengths: Vec<String>,
    has_strengths: bool,
    suggestions: Vec<String>,
    has_suggestions: bool,
    detail_sections: Vec<ReportSection>,
    plan_sections: Vec<ReportSection>,
}

struct HtmlCategoryRow {
    name: String,
    score: String,
    weight: String,
}

/// A titled, non-empty list rendered as one report section
struct ReportSection {
    title: &'static str,
    items: Vec<String>,
}

fn plan_sections(plan: &ImprovementPlan) -> Vec<ReportSection> {
    [
        ("Priority Actions", &plan.priority_actions),
        ("Quick Fixes", &plan.quick_fixes),
        ("Long-term Improvements", &plan.long_term_improvements),
        ("Keyword Suggestions", &plan.keyword_suggestions),
        ("ATS Optimization Tips", &plan.ats_optimization_tips),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(title, items)| ReportSection {
        title,
        items: items.clone(),
    })
    .collect()
}

/// Improvement areas, formatting issues and keyword matches for detailed output.
fn detail_sections(analysis: &AnalysisResult) -> Vec<ReportSection> {
    let keywords = &analysis.keyword_analysis;
    let industry_terms = keywords
        .industry_terms
        .iter()
        .map(|(industry, terms)| format!("{}: {}", industry, terms.join(", ")))
        .collect::<Vec<_>>()
        .join("; ");

    let mut matches = vec![
        format!(
            "Technical skills ({}): {}",
            keywords.technical_skills_count,
            keywords.technical_skills.join(", ")
        ),
        format!(
            "Soft skills ({}): {}",
            keywords.soft_skills_count,
            keywords.soft_skills.join(", ")
        ),
        format!(
            "Action verbs ({}): {}",
            keywords.action_verbs_count,
            keywords.action_verbs.join(", ")
        ),
        format!("Industry terms ({}): {}", keywords.industry_terms_count, industry_terms),
    ];
    if let Some(phone) = analysis.phone_format {
        matches.push(format!("Phone format: {:?}", phone));
    }

    [
        ("Improvement Areas", analysis.improvement_areas.clone()),
        ("Formatting Issues", analysis.formatting_issues.clone()),
        ("Keyword Matches", matches),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(title, items)| ReportSection { title, items })
    .collect()
}

fn tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::Excellent => Color::Green,
        ScoreTier::Good => Color::Blue,
        ScoreTier::Fair => Color::Yellow,
        ScoreTier::Poor => Color::Red,
    }
}

fn title_case(category: Category) -> String {
    let name = category.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_timestamp(report: &AtsReport) -> String {
    report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, include_plan: bool) -> Self {
        Self {
            use_colors,
            detailed,
            include_plan,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, tier: ScoreTier) -> String {
        let badge = tier.label().to_uppercase();
        if self.use_colors {
            format!("[{}]", badge.color(tier_color(tier)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn push_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        if items.is_empty() {
            return;
        }
        output.push_str(&self.format_header(title, 3));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let analysis = &report.analysis;
        let tier = analysis.score_interpretation.level;
        let mut output = String::new();

        output.push_str(&self.format_header("ATS COMPATIBILITY ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Target: {}\n",
            format_timestamp(report),
            report.target_job
        ));

        output.push_str(&self.format_header("Overall", 2));
        output.push_str(&format!(
            "ATS Score: {:.1}/100 {}\n",
            analysis.overall_score,
            self.format_score_badge(tier)
        ));
        output.push_str(&format!(
            "{}\n",
            self.colorize(&analysis.score_interpretation.description, Color::Cyan)
        ));

        output.push_str(&self.format_header("Category Scores", 3));
        for (category, score) in analysis.category_scores.iter() {
            output.push_str(&format!(
                "  {:<12} {:>5.1}  (weight: {:.0}%)\n",
                title_case(category),
                score,
                category.weight() * 100.0
            ));
        }

        self.push_list(&mut output, "Strengths", &analysis.strengths, Color::Green);
        self.push_list(&mut output, "Suggestions", &analysis.suggestions, Color::Yellow);

        if self.detailed {
            self.push_list(
                &mut output,
                "Improvement Areas",
                &analysis.improvement_areas,
                Color::Red,
            );
            self.push_list(
                &mut output,
                "Formatting Issues",
                &analysis.formatting_issues,
                Color::Red,
            );

            let keywords = &analysis.keyword_analysis;
            output.push_str(&self.format_header("Keyword Matches", 3));
            output.push_str(&format!(
                "  Technical skills ({}): {}\n",
                keywords.technical_skills_count,
                keywords.technical_skills.join(", ")
            ));
            output.push_str(&format!(
                "  Soft skills ({}): {}\n",
                keywords.soft_skills_count,
                keywords.soft_skills.join(", ")
            ));
            output.push_str(&format!(
                "  Action verbs ({}): {}\n",
                keywords.action_verbs_count,
                keywords.action_verbs.join(", ")
            ));
            output.push_str(&format!("  Industry terms ({}):\n", keywords.industry_terms_count));
            for (industry, terms) in &keywords.industry_terms {
                output.push_str(&format!("    {}: {}\n", industry, terms.join(", ")));
            }
            if let Some(phone) = analysis.phone_format {
                output.push_str(&format!("  Phone format: {:?}\n", phone));
            }
        }

        if self.include_plan {
            output.push_str(&self.format_header("Improvement Plan", 2));
            for section in plan_sections(&report.improvement_plan) {
                self.push_list(&mut output, section.title, &section.items, Color::White);
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(detailed: bool, include_plan: bool) -> Self {
        Self {
            detailed,
            include_plan,
        }
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# ATS Compatibility Report\n\n");
        output.push_str(&format!(
            "**Generated:** {} | **Target:** {}\n\n",
            format_timestamp(report),
            report.target_job
        ));

        output.push_str("## Overall\n\n");
        output.push_str(&format!(
            "**ATS Score:** {:.1}/100 ({})\n\n",
            analysis.overall_score, analysis.score_interpretation.level
        ));
        output.push_str(&format!("{}\n\n", analysis.score_interpretation.description));

        output.push_str("### Category Scores\n\n");
        output.push_str("| Category | Score | Weight |\n");
        output.push_str("|----------|-------|--------|\n");
        for (category, score) in analysis.category_scores.iter() {
            output.push_str(&format!(
                "| {} | {:.1} | {:.0}% |\n",
                title_case(category),
                score,
                category.weight() * 100.0
            ));
        }
        output.push('\n');

        Self::push_list(&mut output, "Strengths", &analysis.strengths);
        Self::push_list(&mut output, "Suggestions", &analysis.suggestions);

        if self.detailed {
            output.push_str("## Detailed Analysis\n\n");
            for section in detail_sections(analysis) {
                Self::push_list(&mut output, section.title, &section.items);
            }
        }

        if self.include_plan {
            output.push_str("## Improvement Plan\n\n");
            for section in plan_sections(&report.improvement_plan) {
                Self::push_list(&mut output, section.title, &section.items);
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, detailed: bool, include_plan: bool) -> Self {
        Self {
            include_styles,
            detailed,
            include_plan,
        }
    }

    fn create_template_data(&self, report: &AtsReport) -> HtmlTemplate {
        let analysis = &report.analysis;
        let interpretation = &analysis.score_interpretation;

        let categories = analysis
            .category_scores
            .iter()
            .map(|(category, score)| HtmlCategoryRow {
                name: title_case(category),
                score: format!("{:.1}", score),
                weight: format!("{:.0}%", category.weight() * 100.0),
            })
            .collect();

        let detail_sections = if self.detailed {
            detail_sections(analysis)
        } else {
            Vec::new()
        };

        let plan_sections = if self.include_plan {
            plan_sections(&report.improvement_plan)
        } else {
            Vec::new()
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: format_timestamp(report),
            target_job: report.target_job.clone(),
            overall_score: format!("{:.1}", analysis.overall_score),
            tier_label: interpretation.level.label().to_string(),
            tier_description: interpretation.description.clone(),
            tier_color: interpretation.color.clone(),
            tier_icon: interpretation.icon.clone(),
            categories,
            has_strengths: !analysis.strengths.is_empty(),
            strengths: analysis.strengths.clone(),
            has_suggestions: !analysis.suggestions.is_empty(),
            suggestions: analysis.suggestions.clone(),
            detail_sections,
            plan_sections,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| AtsError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_plan: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed, include_plan),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(detailed, include_plan),
            html_formatter: HtmlFormatter::new(true, detailed, include_plan),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::with_options(output.color_output, output.detailed, true, output.include_plan)
    }

    pub fn generate_report(&self, report: &AtsReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_ats{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::AtsAnalyzer;

    fn sample_report() -> AtsReport {
        let analyzer = AtsAnalyzer::new().unwrap();
        analyzer
            .report(
                "Jane Doe\njane@example.com | 555-123-4567\nSUMMARY\n- Built python APIs in 2021",
                Some("Backend Engineer"),
            )
            .unwrap()
    }

    #[test]
    fn test_json_contains_all_top_level_fields() {
        let json = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("analysis").is_some());
        assert!(value.get("improvement_plan").is_some());
        assert!(value.get("generated_at").is_some());
        assert_eq!(value["target_job"], "Backend Engineer");
        assert!(value["analysis"]["category_scores"]["readability"].is_number());
    }

    #[test]
    fn test_console_without_colors_is_plain() {
        let output = ConsoleFormatter::new(false, true, true)
            .format_report(&sample_report())
            .unwrap();
        assert!(output.contains("ATS COMPATIBILITY ANALYSIS"));
        assert!(output.contains("Keyword Matches"));
        assert!(output.contains("Priority Actions"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_markdown_respects_include_plan() {
        let report = sample_report();
        let with_plan = MarkdownFormatter::new(false, true).format_report(&report).unwrap();
        let without_plan = MarkdownFormatter::new(false, false).format_report(&report).unwrap();
        assert!(with_plan.contains("## Improvement Plan"));
        assert!(!without_plan.contains("## Improvement Plan"));
        assert!(with_plan.contains("| Format |"));
    }

    #[test]
    fn test_html_uses_tier_tokens() {
        let report = sample_report();
        let html = HtmlFormatter::new(true, false, true).format_report(&report).unwrap();
        assert!(html.contains(&report.analysis.score_interpretation.color));
        assert!(html.contains(&report.analysis.score_interpretation.icon));
        assert!(html.contains("Backend Engineer"));
    }

    #[test]
    fn test_detailed_markdown_and_html_show_findings() {
        let report = sample_report();
        let area = &report.analysis.improvement_areas[0];

        let brief = MarkdownFormatter::new(false, false).format_report(&report).unwrap();
        let detailed = MarkdownFormatter::new(true, false).format_report(&report).unwrap();
        assert!(!brief.contains("### Keyword Matches"));
        assert!(detailed.contains("### Improvement Areas"));
        assert!(detailed.contains(&format!("- {}", area)));
        assert!(detailed.contains("- Technical skills (2): api, python"));

        let brief = HtmlFormatter::new(false, false, false).format_report(&report).unwrap();
        let detailed = HtmlFormatter::new(false, true, false).format_report(&report).unwrap();
        assert!(!brief.contains("Keyword Matches"));
        assert!(detailed.contains("<h3>Keyword Matches</h3>"));
        assert!(detailed.contains(&format!("<li>{}</li>", area)));
    }

    #[test]
    fn test_formatters_report_their_format() {
        assert_eq!(ConsoleFormatter::new(false, false, false).supports_format(), OutputFormat::Console);
        assert_eq!(JsonFormatter::new(true).supports_format(), OutputFormat::Json);
        assert_eq!(MarkdownFormatter::new(false, true).supports_format(), OutputFormat::Markdown);
        assert_eq!(HtmlFormatter::new(true, false, true).supports_format(), OutputFormat::Html);
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "cvs/jane_doe.pdf", false),
            "jane_doe_ats.md"
        );
    }
}
