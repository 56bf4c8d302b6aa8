//! Reference keyword tables used by the ATS checks

use crate::error::{AtsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

/// The four sections every resume is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Contact,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Contact,
        Section::Experience,
        Section::Education,
        Section::Skills,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Contact => write!(f, "Contact"),
            Section::Experience => write!(f, "Experience"),
            Section::Education => write!(f, "Education"),
            Section::Skills => write!(f, "Skills"),
        }
    }
}

/// Header synonyms for each required section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredSections {
    pub contact: BTreeSet<String>,
    pub experience: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub skills: BTreeSet<String>,
}

impl RequiredSections {
    pub fn synonyms(&self, section: Section) -> &BTreeSet<String> {
        match section {
            Section::Contact => &self.contact,
            Section::Experience => &self.experience,
            Section::Education => &self.education,
            Section::Skills => &self.skills,
        }
    }

    fn normalized(self) -> Self {
        Self {
            contact: lowercase_set(self.contact),
            experience: lowercase_set(self.experience),
            education: lowercase_set(self.education),
            skills: lowercase_set(self.skills),
        }
    }
}

impl Default for RequiredSections {
    fn default() -> Self {
        Self {
            contact: string_set(&["contact", "phone", "email", "address", "linkedin"]),
            experience: string_set(&[
                "experience", "work", "employment", "career", "professional", "history",
            ]),
            education: string_set(&[
                "education", "degree", "university", "college", "school", "qualification",
            ]),
            skills: string_set(&["skills", "competencies", "technologies", "technical", "expertise"]),
        }
    }
}

/// Immutable keyword tables. Built once and shared read-only by every analysis.
///
/// Any key missing from a custom TOML file falls back to the built-in table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub technical_skills: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
    pub action_verbs: BTreeSet<String>,
    pub industry_keywords: BTreeMap<String, BTreeSet<String>>,
    pub required_sections: RequiredSections,
}

impl ReferenceData {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let data: ReferenceData = toml::from_str(content)
            .map_err(|e| AtsError::Configuration(format!("Failed to parse reference data: {}", e)))?;
        Ok(data.normalized())
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Lowercases every entry. Matching always runs against lowercased text.
    pub fn normalized(self) -> Self {
        Self {
            technical_skills: lowercase_set(self.technical_skills),
            soft_skills: lowercase_set(self.soft_skills),
            action_verbs: lowercase_set(self.action_verbs),
            industry_keywords: self
                .industry_keywords
                .into_iter()
                .map(|(industry, terms)| (industry, lowercase_set(terms)))
                .collect(),
            required_sections: self.required_sections.normalized(),
        }
    }

    pub fn industry_term_count(&self) -> usize {
        self.industry_keywords.values().map(BTreeSet::len).sum()
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        let technical_skills = string_set(&[
            "python", "java", "javascript", "react", "node.js", "sql", "html", "css",
            "machine learning", "data science", "artificial intelligence", "aws", "azure",
            "docker", "kubernetes", "git", "agile", "scrum", "devops", "ci/cd",
            "tensorflow", "pytorch", "pandas", "numpy", "api", "rest", "microservices",
            "mongodb", "postgresql", "mysql", "redis", "elasticsearch", "spring boot",
            "angular", "vue.js", "typescript", "c++", "c#", "php", "ruby", "go",
            "kotlin", "swift", "flutter", "django", "flask", "express.js",
        ]);

        let soft_skills = string_set(&[
            "leadership", "communication", "teamwork", "problem solving", "analytical",
            "creative", "adaptable", "collaborative", "organized", "detail-oriented",
            "time management", "project management", "critical thinking", "innovative",
            "strategic planning", "decision making", "interpersonal", "multitasking",
            "negotiation", "presentation", "mentoring", "coaching", "conflict resolution",
        ]);

        let action_verbs = string_set(&[
            "achieved", "administered", "analyzed", "built", "created", "developed",
            "designed", "enhanced", "established", "executed", "generated", "implemented",
            "improved", "increased", "led", "managed", "optimized", "organized",
            "planned", "reduced", "resolved", "streamlined", "supervised", "transformed",
            "delivered", "collaborated", "coordinated", "facilitated", "initiated",
            "launched", "maintained", "monitored", "negotiated", "operated", "performed",
        ]);

        let industries: [(&str, &[&str]); 8] = [
            ("software", &[
                "programming", "coding", "development", "software", "algorithms",
                "debugging", "testing", "deployment",
            ]),
            ("data", &[
                "analytics", "statistics", "visualization", "modeling", "database",
                "big data", "reporting", "insights",
            ]),
            ("marketing", &[
                "campaigns", "branding", "seo", "social media", "content", "roi",
                "advertising", "digital marketing",
            ]),
            ("finance", &[
                "financial", "accounting", "budget", "forecasting", "analysis",
                "investment", "audit", "compliance",
            ]),
            ("hr", &[
                "recruitment", "talent", "employee", "performance", "training",
                "benefits", "onboarding", "culture",
            ]),
            ("sales", &[
                "revenue", "targets", "conversion", "pipeline", "prospecting", "closing",
                "customer relationship",
            ]),
            ("healthcare", &[
                "patient care", "medical", "clinical", "diagnosis", "treatment",
                "healthcare", "medical records",
            ]),
            ("engineering", &[
                "design", "manufacturing", "quality", "testing", "cad", "specifications",
                "technical documentation",
            ]),
        ];

        let industry_keywords = industries
            .iter()
            .map(|(industry, terms)| (industry.to_string(), string_set(terms)))
            .collect();

        Self {
            technical_skills,
            soft_skills,
            action_verbs,
            industry_keywords,
            required_sections: RequiredSections::default(),
        }
    }
}

fn string_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn lowercase_set(items: BTreeSet<String>) -> BTreeSet<String> {
    items.into_iter().map(|s| s.to_lowercase()).collect()
}
