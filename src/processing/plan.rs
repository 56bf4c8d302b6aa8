//! Improvement plan derived from a finished analysis

use crate::processing::result::AnalysisResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImprovementPlan {
    pub priority_actions: Vec<String>,
    pub quick_fixes: Vec<String>,
    pub long_term_improvements: Vec<String>,
    pub keyword_suggestions: Vec<String>,
    pub ats_optimization_tips: Vec<String>,
}

const PRIORITY_POOR: &[&str] = &[
    "Restructure CV with clear section headers (EXPERIENCE, EDUCATION, SKILLS)",
    "Add contact information in standard format (email, phone)",
    "Include more relevant keywords from your industry",
    "Add quantifiable achievements with specific numbers and metrics",
    "Ensure proper CV length (300-800 words)",
];

const PRIORITY_FAIR: &[&str] = &[
    "Enhance keyword density with more technical and soft skills",
    "Add more action verbs to describe your accomplishments",
    "Include industry-specific terminology",
    "Improve quantifiable achievements",
];

const PRIORITY_GOOD: &[&str] = &[
    "Fine-tune keyword placement for specific job applications",
    "Optimize content for target roles",
    "Add industry certifications if applicable",
];

const QUICK_FIXES: &[&str] = &[
    "Replace special bullet symbols with simple hyphens (-) or asterisks (*)",
    "Ensure consistent date formatting (MM/YYYY)",
    "Add missing contact information (email, phone, LinkedIn)",
    "Use standard section headers in ALL CAPS",
    "Remove tables, graphics, or complex formatting",
    "Spell-check and proofread for errors",
];

const LONG_TERM_IMPROVEMENTS: &[&str] = &[
    "Develop and highlight more technical skills relevant to your field",
    "Gain quantifiable achievements in your current or future roles",
    "Obtain industry certifications and add them to your CV",
    "Build a portfolio of projects to showcase your skills",
    "Keep your CV updated with latest achievements and skills",
];

const TECHNICAL_KEYWORD_SUGGESTIONS: &[&str] = &[
    "Add programming languages you know (Python, Java, JavaScript, etc.)",
    "Include software tools and platforms you've used",
    "Mention relevant technologies and frameworks",
];

const SOFT_KEYWORD_SUGGESTIONS: &[&str] = &[
    "Highlight leadership and management experience",
    "Emphasize communication and presentation skills",
    "Mention teamwork and collaboration achievements",
];

const ATS_OPTIMIZATION_TIPS: &[&str] = &[
    "Use keywords from the job description in your CV",
    "Save your CV as both PDF and Word format",
    "Use standard fonts like Arial, Times New Roman, or Calibri",
    "Avoid headers, footers, and text boxes",
    "Use simple formatting with clear section breaks",
    "Include both acronyms and full forms (e.g., 'AI' and 'Artificial Intelligence')",
    "Tailor your CV for each job application",
];

const TECHNICAL_SKILLS_TARGET: usize = 5;
const SOFT_SKILLS_TARGET: usize = 3;

/// Builds the plan from the overall score and keyword counts of `result`.
pub fn generate_plan(result: &AnalysisResult) -> ImprovementPlan {
    let priority = if result.overall_score < 55.0 {
        PRIORITY_POOR
    } else if result.overall_score < 70.0 {
        PRIORITY_FAIR
    } else {
        PRIORITY_GOOD
    };

    let keywords = &result.keyword_analysis;
    let mut keyword_suggestions = Vec::new();
    if keywords.technical_skills_count < TECHNICAL_SKILLS_TARGET {
        keyword_suggestions.extend(to_strings(TECHNICAL_KEYWORD_SUGGESTIONS));
    }
    if keywords.soft_skills_count < SOFT_SKILLS_TARGET {
        keyword_suggestions.extend(to_strings(SOFT_KEYWORD_SUGGESTIONS));
    }

    ImprovementPlan {
        priority_actions: to_strings(priority),
        quick_fixes: to_strings(QUICK_FIXES),
        long_term_improvements: to_strings(LONG_TERM_IMPROVEMENTS),
        keyword_suggestions,
        ats_optimization_tips: to_strings(ATS_OPTIMIZATION_TIPS),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::result::{
        CategoryScores, KeywordAnalysis, ScoreInterpretation, ScoreTier,
    };

    fn result_with(score: f64, technical: usize, soft: usize) -> AnalysisResult {
        AnalysisResult {
            overall_score: score,
            category_scores: CategoryScores::default(),
            suggestions: Vec::new(),
            strengths: Vec::new(),
            improvement_areas: Vec::new(),
            keyword_analysis: KeywordAnalysis {
                technical_skills_count: technical,
                soft_skills_count: soft,
                ..KeywordAnalysis::default()
            },
            formatting_issues: Vec::new(),
            phone_format: None,
            score_interpretation: ScoreInterpretation::from(ScoreTier::from_score(score)),
        }
    }

    #[test]
    fn test_priority_actions_follow_score_band() {
        assert_eq!(generate_plan(&result_with(54.9, 9, 9)).priority_actions.len(), 5);
        assert_eq!(generate_plan(&result_with(55.0, 9, 9)).priority_actions.len(), 4);
        assert_eq!(generate_plan(&result_with(69.9, 9, 9)).priority_actions.len(), 4);
        let good = generate_plan(&result_with(70.0, 9, 9));
        assert_eq!(
            good.priority_actions[0],
            "Fine-tune keyword placement for specific job applications"
        );
    }

    #[test]
    fn test_constant_sections_ignore_input() {
        let low = generate_plan(&result_with(10.0, 0, 0));
        let high = generate_plan(&result_with(99.0, 20, 20));
        assert_eq!(low.quick_fixes, high.quick_fixes);
        assert_eq!(low.long_term_improvements, high.long_term_improvements);
        assert_eq!(low.ats_optimization_tips, high.ats_optimization_tips);
        assert_eq!(low.quick_fixes.len(), 6);
        assert_eq!(low.ats_optimization_tips.len(), 7);
    }

    #[test]
    fn test_keyword_suggestion_blocks() {
        assert_eq!(generate_plan(&result_with(80.0, 4, 2)).keyword_suggestions.len(), 6);
        assert_eq!(generate_plan(&result_with(80.0, 5, 2)).keyword_suggestions.len(), 3);
        assert_eq!(
            generate_plan(&result_with(80.0, 4, 3)).keyword_suggestions[0],
            "Add programming languages you know (Python, Java, JavaScript, etc.)"
        );
        assert!(generate_plan(&result_with(80.0, 5, 3)).keyword_suggestions.is_empty());
    }
}
