mod mode;
mod report;

pub use mode::Mode;
pub use report::{AnalysisReport, AnalysisRequest, ScoredText};
