//! Configuration module for the bank analyzer
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AnalyzerPaths;
pub use settings::Settings;
