//! Configuration module for ttm-finance
//!
//! - XDG-style path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
