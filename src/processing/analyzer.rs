//! ATS analysis pipeline
//!
//! Runs the six checks against one input, merges their reports in check
//! order (format, keywords, structure, content, length, readability),
//! computes the weighted overall score and attaches the tier interpretation.

use crate::config::Config;
use crate::error::{AtsError, Result};
use crate::output::report::AtsReport;
use crate::processing::ats_matcher::{IndustryMatcher, KeywordMatcher};
use crate::processing::checks::keywords::KeywordMatchers;
use crate::processing::checks::{self, ResumeText};
use crate::processing::patterns::{CompiledPatterns, PhoneFormat};
use crate::processing::plan::{self, ImprovementPlan};
use crate::processing::reference::ReferenceData;
use crate::processing::result::{
    AnalysisResult, CategoryReport, CategoryScores, KeywordAnalysis, ScoreInterpretation,
    ScoreTier,
};
use log::{debug, info, warn};

/// Rule-based ATS scorer. Immutable after construction and safe to share
/// between threads.
#[derive(Debug, Clone)]
pub struct AtsAnalyzer {
    reference: ReferenceData,
    patterns: CompiledPatterns,
    keywords: KeywordMatchers,
    max_input_chars: Option<usize>,
}

impl AtsAnalyzer {
    /// Analyzer over the built-in keyword tables.
    pub fn new() -> Result<Self> {
        Self::with_reference(ReferenceData::default())
    }

    pub fn with_reference(reference: ReferenceData) -> Result<Self> {
        let reference = reference.normalized();
        let keywords = KeywordMatchers {
            technical: KeywordMatcher::new(&reference.technical_skills)?,
            soft: KeywordMatcher::new(&reference.soft_skills)?,
            verbs: KeywordMatcher::new(&reference.action_verbs)?,
            industry: IndustryMatcher::new(&reference.industry_keywords)?,
        };
        debug!(
            "Keyword tables: {} technical, {} soft, {} verbs, {} industry terms",
            keywords.technical.term_count(),
            keywords.soft.term_count(),
            keywords.verbs.term_count(),
            reference.industry_term_count()
        );

        Ok(Self {
            patterns: CompiledPatterns::compile()?,
            keywords,
            reference,
            max_input_chars: None,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let reference = match config.reference_data_path() {
            Some(path) => {
                info!("Loading reference data from {}", path.display());
                ReferenceData::from_toml_file(path)?
            }
            None => ReferenceData::default(),
        };

        Ok(Self::with_reference(reference)?.with_max_input_chars(config.analysis.max_input_chars))
    }

    pub fn with_max_input_chars(mut self, max_input_chars: Option<usize>) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Scores `text`. Total over any string; empty input simply scores low.
    ///
    /// `target_job_title` is accepted for callers that track it but does not
    /// change the score.
    pub fn analyze(&self, text: &str, target_job_title: &str) -> AnalysisResult {
        let text = ResumeText::new(text);
        if !target_job_title.is_empty() {
            debug!("Target job title '{}' does not affect scoring", target_job_title);
        }

        let (format, phone_format) = checks::format::analyze(&text, &self.patterns);
        let (keywords, keyword_analysis) =
            checks::keywords::analyze(&text, target_job_title, &self.keywords);
        let structure =
            checks::structure::analyze(&text, &self.reference.required_sections, &self.patterns);
        let content = checks::content::analyze(&text, &self.patterns);
        let length = checks::length::analyze(&text);
        let readability = checks::readability::analyze(&text, &self.patterns);

        aggregate(
            [format, keywords, structure, content, length, readability],
            keyword_analysis,
            phone_format,
        )
    }

    pub fn generate_plan(&self, result: &AnalysisResult) -> ImprovementPlan {
        plan::generate_plan(result)
    }

    /// Validated analysis plus improvement plan, stamped with the generation time.
    pub fn report(&self, text: &str, target_job_title: Option<&str>) -> Result<AtsReport> {
        self.validate_input(text)?;

        let analysis = self.analyze(text, target_job_title.unwrap_or_default());
        let improvement_plan = self.generate_plan(&analysis);
        info!(
            "ATS analysis complete: {:.1} ({})",
            analysis.overall_score, analysis.score_interpretation.level
        );

        Ok(AtsReport::new(analysis, improvement_plan, target_job_title))
    }

    /// Like [`report`](Self::report) for raw extracted bytes, which must be UTF-8.
    pub fn report_from_bytes(&self, bytes: &[u8], target_job_title: Option<&str>) -> Result<AtsReport> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            AtsError::InvalidInput(format!("Document text is not valid UTF-8: {}", e))
        })?;
        self.report(text, target_job_title)
    }

    fn validate_input(&self, text: &str) -> Result<()> {
        if let Some(limit) = self.max_input_chars {
            let chars = text.chars().count();
            if chars > limit {
                warn!("Rejecting input of {} characters (limit {})", chars, limit);
                return Err(AtsError::InvalidInput(format!(
                    "Document text has {} characters, limit is {}",
                    chars, limit
                )));
            }
        }
        Ok(())
    }
}

/// Weighted sum of the category scores, rounded to one decimal place.
pub fn weighted_score(scores: &CategoryScores) -> f64 {
    let total: f64 = scores
        .iter()
        .map(|(category, score)| score * category.weight())
        .sum();
    round_one_decimal(total)
}

/// Rounds the exact decimal value of `value`, ties to even (35.25 gives 35.2).
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Merges check reports in the order given.
fn aggregate(
    reports: [CategoryReport; 6],
    keyword_analysis: KeywordAnalysis,
    phone_format: Option<PhoneFormat>,
) -> AnalysisResult {
    let mut category_scores = CategoryScores::default();
    let mut suggestions = Vec::new();
    let mut strengths = Vec::new();
    let mut improvement_areas = Vec::new();
    let mut formatting_issues = Vec::new();

    for report in reports {
        debug!("{} score: {:.1}", report.category, report.score);
        category_scores.set(report.category, report.score);
        suggestions.extend(report.suggestions);
        strengths.extend(report.strengths);
        improvement_areas.extend(report.improvement_areas);
        formatting_issues.extend(report.formatting_issues);
    }

    let overall_score = weighted_score(&category_scores);
    let tier = ScoreTier::from_score(overall_score);

    AnalysisResult {
        overall_score,
        category_scores,
        suggestions,
        strengths,
        improvement_areas,
        keyword_analysis,
        formatting_issues,
        phone_format,
        score_interpretation: ScoreInterpretation::from(tier),
    }
}
