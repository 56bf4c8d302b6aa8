//! Analysis result records

use crate::processing::patterns::PhoneFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The six scored categories, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Format,
    Keywords,
    Structure,
    Content,
    Length,
    Readability,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Format,
        Category::Keywords,
        Category::Structure,
        Category::Content,
        Category::Length,
        Category::Readability,
    ];

    /// Contribution to the overall score. The six weights sum to 1.0.
    pub fn weight(self) -> f64 {
        match self {
            Category::Format => 0.20,
            Category::Keywords => 0.30,
            Category::Structure => 0.20,
            Category::Content => 0.15,
            Category::Length => 0.10,
            Category::Readability => 0.05,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Format => "format",
            Category::Keywords => "keywords",
            Category::Structure => "structure",
            Category::Content => "content",
            Category::Length => "length",
            Category::Readability => "readability",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of a single check: its score and the findings it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: Category,
    pub score: f64,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub formatting_issues: Vec<String>,
}

impl CategoryReport {
    pub fn new(category: Category, starting_score: f64) -> Self {
        Self {
            category,
            score: starting_score,
            suggestions: Vec::new(),
            strengths: Vec::new(),
            improvement_areas: Vec::new(),
            formatting_issues: Vec::new(),
        }
    }

    pub fn deduct(&mut self, points: f64) {
        self.score -= points;
    }

    pub fn suggest(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }

    pub fn strength(&mut self, strength: impl Into<String>) {
        self.strengths.push(strength.into());
    }

    pub fn flag_area(&mut self, area: impl Into<String>) {
        self.improvement_areas.push(area.into());
    }

    pub fn issue(&mut self, issue: impl Into<String>) {
        self.formatting_issues.push(issue.into());
    }

    /// Clamps the score into [0, 100].
    pub fn finish(mut self) -> Self {
        self.score = self.score.clamp(0.0, 100.0);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub format: f64,
    pub keywords: f64,
    pub structure: f64,
    pub content: f64,
    pub length: f64,
    pub readability: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Format => self.format,
            Category::Keywords => self.keywords,
            Category::Structure => self.structure,
            Category::Content => self.content,
            Category::Length => self.length,
            Category::Readability => self.readability,
        }
    }

    pub fn set(&mut self, category: Category, score: f64) {
        match category {
            Category::Format => self.format = score,
            Category::Keywords => self.keywords = score,
            Category::Structure => self.structure = score,
            Category::Content => self.content = score,
            Category::Length => self.length = score,
            Category::Readability => self.readability = score,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Keyword matches found by the keyword check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub action_verbs: Vec<String>,
    /// Matched terms keyed by the industry they were matched under.
    pub industry_terms: BTreeMap<String, Vec<String>>,
    pub technical_skills_count: usize,
    pub soft_skills_count: usize,
    pub action_verbs_count: usize,
    pub industry_terms_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    /// Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ScoreTier::Excellent
        } else if score >= 70.0 {
            ScoreTier::Good
        } else if score >= 55.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent",
            ScoreTier::Good => "Good",
            ScoreTier::Fair => "Fair",
            ScoreTier::Poor => "Poor",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoreTier::Excellent => {
                "Your CV is highly ATS-friendly and likely to pass automated screening systems"
            }
            ScoreTier::Good => "Your CV has good ATS compatibility with room for minor improvements",
            ScoreTier::Fair => "Your CV needs some improvements to be more ATS-friendly",
            ScoreTier::Poor => "Your CV needs significant improvements for ATS compatibility",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "#22c55e",
            ScoreTier::Good => "#3b82f6",
            ScoreTier::Fair => "#f59e0b",
            ScoreTier::Poor => "#ef4444",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "fas fa-check-circle",
            ScoreTier::Good => "fas fa-thumbs-up",
            ScoreTier::Fair => "fas fa-exclamation-triangle",
            ScoreTier::Poor => "fas fa-times-circle",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInterpretation {
    pub level: ScoreTier,
    pub description: String,
    pub color: String,
    pub icon: String,
}

impl From<ScoreTier> for ScoreInterpretation {
    fn from(tier: ScoreTier) -> Self {
        Self {
            level: tier,
            description: tier.description().to_string(),
            color: tier.color().to_string(),
            icon: tier.icon().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub keyword_analysis: KeywordAnalysis,
    pub formatting_issues: Vec<String>,
    pub phone_format: Option<PhoneFormat>,
    pub score_interpretation: ScoreInterpretation,
}
