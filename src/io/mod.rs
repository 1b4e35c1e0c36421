/// Command-line parsing and run orchestration
pub mod cli;
/// Puzzle constants and runtime defaults
pub mod configuration;
/// Error types for configuration and output failures
pub mod error;
/// Terminal progress display
pub mod progress;
/// Text rendering of solutions and sweep tables
pub mod report;
