//! Input processing module
//! Turns resume files into the plain text the analyzer consumes

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
