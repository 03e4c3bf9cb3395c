pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod report;
pub mod tree;
pub mod view;

// Re-export core types
pub use report::AnalysisReport;
pub use view::Explorer;
