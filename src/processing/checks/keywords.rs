//! Keyword coverage check

use super::ResumeText;
use crate::processing::ats_matcher::{IndustryMatcher, KeywordMatcher};
use crate::processing::result::{Category, CategoryReport, KeywordAnalysis};

/// Matchers for the four keyword vocabularies.
#[derive(Debug, Clone)]
pub struct KeywordMatchers {
    pub technical: KeywordMatcher,
    pub soft: KeywordMatcher,
    pub verbs: KeywordMatcher,
    pub industry: IndustryMatcher,
}

const TECH_POINTS: f64 = 6.0;
const TECH_CAP: f64 = 35.0;
const SOFT_POINTS: f64 = 4.0;
const SOFT_CAP: f64 = 25.0;
const VERB_POINTS: f64 = 2.0;
const VERB_CAP: f64 = 25.0;
const INDUSTRY_POINTS: f64 = 1.5;
const INDUSTRY_CAP: f64 = 15.0;

/// Scores keyword coverage. `_target_job_title` is accepted but does not
/// influence scoring.
pub fn analyze(
    text: &ResumeText<'_>,
    _target_job_title: &str,
    matchers: &KeywordMatchers,
) -> (CategoryReport, KeywordAnalysis) {
    let lower = text.lower.as_str();

    let technical_skills = matchers.technical.find_present(lower);
    let soft_skills = matchers.soft.find_present(lower);
    let action_verbs = matchers.verbs.find_present(lower);
    let industry_terms = matchers.industry.find_present(lower);

    let keywords = KeywordAnalysis {
        technical_skills_count: technical_skills.len(),
        soft_skills_count: soft_skills.len(),
        action_verbs_count: action_verbs.len(),
        industry_terms_count: industry_terms.values().map(Vec::len).sum(),
        technical_skills,
        soft_skills,
        action_verbs,
        industry_terms,
    };

    let score = (keywords.technical_skills_count as f64 * TECH_POINTS).min(TECH_CAP)
        + (keywords.soft_skills_count as f64 * SOFT_POINTS).min(SOFT_CAP)
        + (keywords.action_verbs_count as f64 * VERB_POINTS).min(VERB_CAP)
        + (keywords.industry_terms_count as f64 * INDUSTRY_POINTS).min(INDUSTRY_CAP);

    let mut report = CategoryReport::new(Category::Keywords, score);

    let tech = keywords.technical_skills_count;
    if tech < 3 {
        report.suggest(
            "Add more technical skills relevant to your field (programming languages, tools, technologies)",
        );
        report.flag_area("Technical Skills");
    } else if tech >= 8 {
        report.strength(format!("Excellent technical skills coverage ({} skills found)", tech));
    } else {
        report.strength(format!("Good technical skills representation ({} skills found)", tech));
    }

    let soft = keywords.soft_skills_count;
    if soft < 2 {
        report.suggest(
            "Include more soft skills like 'leadership', 'communication', 'teamwork', 'problem solving'",
        );
        report.flag_area("Soft Skills");
    } else {
        report.strength(format!("Good soft skills representation ({} skills found)", soft));
    }

    let verbs = keywords.action_verbs_count;
    if verbs < 5 {
        report.suggest(
            "Use more strong action verbs to describe your accomplishments (achieved, developed, led, improved)",
        );
        report.flag_area("Action Verbs");
    } else {
        report.strength(format!("Strong use of action verbs ({} found)", verbs));
    }

    let industry = keywords.industry_terms_count;
    if industry < 3 {
        report.suggest("Include more industry-specific keywords and terminology relevant to your field");
        report.flag_area("Industry Keywords");
    } else {
        report.strength(format!("Good use of industry-specific terminology ({} terms)", industry));
    }

    (report.finish(), keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::reference::ReferenceData;
    use std::collections::{BTreeMap, BTreeSet};

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn matchers_for(data: &ReferenceData) -> KeywordMatchers {
        KeywordMatchers {
            technical: KeywordMatcher::new(&data.technical_skills).unwrap(),
            soft: KeywordMatcher::new(&data.soft_skills).unwrap(),
            verbs: KeywordMatcher::new(&data.action_verbs).unwrap(),
            industry: IndustryMatcher::new(&data.industry_keywords).unwrap(),
        }
    }

    fn fixture_data() -> ReferenceData {
        let mut industry_keywords = BTreeMap::new();
        industry_keywords.insert("software".to_string(), set(&["debugging", "deployment", "firmware"]));
        industry_keywords.insert("data".to_string(), set(&["analytics", "visualization", "etl"]));
        ReferenceData {
            technical_skills: set(&[
                "python", "docker", "kubernetes", "terraform", "postgres", "redis", "kafka",
                "graphql", "linux", "jenkins", "haskell", "erlang",
            ]),
            soft_skills: set(&[
                "leadership", "communication", "teamwork", "mentoring", "negotiation", "empathy",
            ]),
            action_verbs: set(&[
                "architected", "streamlined", "launched", "shipped", "automated", "migrated",
                "refactored",
            ]),
            industry_keywords,
            ..ReferenceData::default()
        }
    }

    fn run(raw: &str, data: &ReferenceData) -> (CategoryReport, KeywordAnalysis) {
        analyze(&ResumeText::new(raw), "", &matchers_for(data))
    }

    #[test]
    fn test_documented_keyword_mix_scores_73() {
        let text = "Python Docker Kubernetes Terraform Postgres Redis Kafka GraphQL Linux Jenkins. \
                    Leadership, communication, teamwork, mentoring and negotiation. \
                    Architected, streamlined, launched, shipped, automated and migrated systems. \
                    Debugging, deployment, analytics and visualization.";
        let (report, keywords) = run(text, &fixture_data());

        assert_eq!(keywords.technical_skills_count, 10);
        assert_eq!(keywords.soft_skills_count, 5);
        assert_eq!(keywords.action_verbs_count, 6);
        assert_eq!(keywords.industry_terms_count, 4);
        assert_eq!(report.score, 73.0);
        assert!(report.improvement_areas.is_empty());
        assert_eq!(report.strengths[0], "Excellent technical skills coverage (10 skills found)");
    }

    #[test]
    fn test_empty_text_scores_zero_and_flags_all_areas() {
        let (report, keywords) = run("", &ReferenceData::default());
        assert_eq!(report.score, 0.0);
        assert_eq!(keywords, KeywordAnalysis::default());
        assert_eq!(
            report.improvement_areas,
            vec!["Technical Skills", "Soft Skills", "Action Verbs", "Industry Keywords"]
        );
        assert_eq!(report.suggestions.len(), 4);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let (_, keywords) = run("PYTHON and Haskell", &fixture_data());
        assert_eq!(keywords.technical_skills, vec!["haskell", "python"]);
    }

    #[test]
    fn test_shared_industry_term_counts_twice() {
        let mut data = fixture_data();
        data.industry_keywords
            .insert("engineering".to_string(), set(&["debugging", "cad"]));
        let (report, keywords) = run("debugging", &data);
        assert_eq!(keywords.industry_terms_count, 2);
        assert_eq!(report.score, 3.0);
    }

    #[test]
    fn test_maxima_saturate_at_100() {
        let data = ReferenceData::default();
        let text = "python java javascript react node.js sql html leadership communication \
                    teamwork analytical creative adaptable collaborative achieved administered \
                    analyzed built created developed designed enhanced established executed \
                    generated implemented improved programming coding software debugging \
                    analytics statistics visualization reporting insights budget";
        let (report, keywords) = run(text, &data);
        assert!(keywords.technical_skills_count >= 6);
        assert!(keywords.soft_skills_count >= 7);
        assert!(keywords.action_verbs_count >= 13);
        assert!(keywords.industry_terms_count >= 10);
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn test_adding_technical_skill_never_lowers_score() {
        let data = fixture_data();
        let base = "python docker kubernetes leadership";
        let (before, _) = run(base, &data);
        let (after, _) = run(&format!("{} terraform", base), &data);
        assert!(after.score >= before.score);
        assert_eq!(after.score - before.score, 6.0);
    }
}
