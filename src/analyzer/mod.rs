// Analyzer module: the four series scans and the report that bundles them.

pub mod report;
pub mod series_scan;

// Re-export the main Analyzer implementation for ease of use.
pub use report::{AnalysisReport, Analyzer, AnalyzerImpl};
