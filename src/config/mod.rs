//! Configuration module for the finance tracker
//!
//! This module provides configuration management including:
//! - Platform-specific data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
