mod service;
mod types;
mod validation;


pub use service::{AnalysisService, AnalysisServiceImpl};
pub use types::{AnalysisOutcome, AnalysisReport, AnalysisRequest, Treatment};
