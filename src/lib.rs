//! ATS analyzer library
//!
//! Rule-based scoring of resume text against applicant tracking system
//! heuristics. The scoring core lives in [`processing`]; [`input`] and
//! [`output`] are the file and report glue used by the binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AtsError, Result};
pub use output::report::AtsReport;
pub use processing::analyzer::AtsAnalyzer;
