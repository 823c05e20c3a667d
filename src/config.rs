//! Configuration of the demo wizard
//!
//! The configuration is a JSON document. Every field is optional:
//!
//! ```json
//! {
//!     "title": "Sign Up",
//!     "labels": ["Account", "Profile", "Done"],
//!     "next_label": "Continue",
//!     "start_step": 1
//! }
//! ```

use crate::components::footer::{DEFAULT_BACK_LABEL, DEFAULT_NEXT_LABEL};
use crate::state::{Step, DEFAULT_STEP_LABELS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Registration";
pub const DEFAULT_FINISH_LABEL: &str = "Finish";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration")]
    Parse(#[from] serde_json::Error),
    #[error("at least one step is required")]
    NoSteps,
    #[error("step {0} has an empty label")]
    EmptyLabel(usize),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings for the wizard rendered by the demo binary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WizardConfig {
    pub title: String,
    pub labels: Vec<String>,
    /// Fixed step list shown instead of the derived one
    pub steps: Option<Vec<Step>>,
    pub next_label: String,
    pub back_label: String,
    /// Label of the next action on the last step
    pub finish_label: String,
    pub start_step: i32,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            labels: DEFAULT_STEP_LABELS.iter().map(|l| l.to_string()).collect(),
            steps: None,
            next_label: DEFAULT_NEXT_LABEL.to_string(),
            back_label: DEFAULT_BACK_LABEL.to_string(),
            finish_label: DEFAULT_FINISH_LABEL.to_string(),
            start_step: 0,
        }
    }
}

impl WizardConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: WizardConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Checks that there is at least one step and that no label is empty
    pub fn validate(&self) -> Result<()> {
        let labels: Vec<&str> = match &self.steps {
            Some(steps) => steps.iter().map(|s| s.label.as_str()).collect(),
            None => self.labels.iter().map(String::as_str).collect(),
        };

        if labels.is_empty() {
            return Err(ConfigError::NoSteps);
        }

        if let Some(index) = labels.iter().position(|l| l.trim().is_empty()) {
            return Err(ConfigError::EmptyLabel(index));
        }

        Ok(())
    }

    /// Number of steps in the flow
    pub fn step_count(&self) -> usize {
        match &self.steps {
            Some(steps) => steps.len(),
            None => self.labels.len(),
        }
    }

    /// Label of the step at `step`, if it is in range
    pub fn label_at(&self, step: i32) -> Option<&str> {
        let index = usize::try_from(step).ok()?;
        match &self.steps {
            Some(steps) => steps.get(index).map(|s| s.label.as_str()),
            None => self.labels.get(index).map(String::as_str),
        }
    }
}
