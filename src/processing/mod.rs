//! ATS scoring core

pub mod analyzer;
pub mod ats_matcher;
pub mod checks;
pub mod patterns;
pub mod plan;
pub mod reference;
pub mod result;
