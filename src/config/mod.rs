//! Configuration module for transcript-analyzer
//!
//! Handles loading application settings from a TOML file, with credentials
//! and deployment details optionally supplied by the environment.

mod settings;

pub use settings::{GeneralSettings, LlmSettings, Settings};
