//! Stepper and footer components for multi-step form flows

pub mod components;
pub mod config;
pub mod state;

pub use components::{Footer, Stepper, WizardLayout};
pub use config::{ConfigError, WizardConfig};
pub use state::{default_steps, derive_steps, Step, StepStatus, DEFAULT_STEP_LABELS};
