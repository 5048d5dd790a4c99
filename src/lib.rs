pub mod analyzer;
pub mod app;
pub mod config;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalizer;
pub mod presenter;
pub mod prompt;
pub mod utils;

pub use analyzer::{AnalysisReport, Analyzer, AnalyzerImpl};
pub use config::{AppConfig, OutputFormat, load_config};
pub use filter::{DateRange, filter_by_range};
pub use loader::{CsvLoader, Loader};
pub use model::PricePoint;
