//! Combined report returned to callers

use crate::processing::plan::ImprovementPlan;
use crate::processing::result::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label used when no target job title is supplied.
pub const GENERAL_ANALYSIS: &str = "General Analysis";

/// Analysis, improvement plan and generation metadata for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub analysis: AnalysisResult,
    pub improvement_plan: ImprovementPlan,
    pub generated_at: DateTime<Utc>,
    pub target_job: String,
}

impl AtsReport {
    pub fn new(
        analysis: AnalysisResult,
        improvement_plan: ImprovementPlan,
        target_job_title: Option<&str>,
    ) -> Self {
        let target_job = match target_job_title {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => GENERAL_ANALYSIS.to_string(),
        };

        Self {
            analysis,
            improvement_plan,
            generated_at: Utc::now(),
            target_job,
        }
    }

    pub fn is_general(&self) -> bool {
        self.target_job == GENERAL_ANALYSIS
    }
}
