//! Configuration handling for the TUI

use crate::client::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "CV_INTAKE_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the CV parsing service
    pub endpoint: Option<String>,
    /// Keep typed values and the attached CV when a submission fails
    pub preserve_input_on_failure: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "cv-intake", "cv-intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory log files are written to
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("io", "cv-intake", "cv-intake-tui")
            .map(|dirs| dirs.data_dir().join("logs"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint to submit to: environment, then config file, then default
    pub fn endpoint(&self) -> String {
        self.endpoint_with_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn preserve_input_on_failure(&self) -> bool {
        self.preserve_input_on_failure.unwrap_or(false)
    }
}
