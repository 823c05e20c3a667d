//! Step data structures for multi-step form flows
//!
//! This module contains the step model shared by the stepper and the demo
//! wizard, and the derivation of each step's status from the current step.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Labels used when the caller does not supply any
pub const DEFAULT_STEP_LABELS: [&str; 5] = [
    "Personal Info",
    "Contact Details",
    "Preferences",
    "Review",
    "Confirmation",
];

/// Progress of a single step relative to the current one
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Incomplete,
}

/// One stage of a multi-step flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub status: StepStatus,
}

impl StepStatus {
    /// Returns a human-readable status string
    pub fn display_label(&self) -> &'static str {
        match self {
            StepStatus::Completed => "Completed",
            StepStatus::Current => "In Progress",
            StepStatus::Incomplete => "Incomplete",
        }
    }

    /// Returns CSS class for status styling
    pub fn css_class(&self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Incomplete => "incomplete",
        }
    }

    /// Returns true if a step with this status can be navigated back to
    pub fn is_navigable(&self) -> bool {
        matches!(self, StepStatus::Completed)
    }
}

impl Step {
    pub fn new(label: impl Into<String>, status: StepStatus) -> Self {
        Self {
            label: label.into(),
            status,
        }
    }
}

/// Status of the step at `index` when `current_step` is the active one.
///
/// A negative `current_step` puts every index after it.
pub fn status_for(index: usize, current_step: i32) -> StepStatus {
    let Ok(current) = usize::try_from(current_step) else {
        return StepStatus::Incomplete;
    };

    match index.cmp(&current) {
        Ordering::Less => StepStatus::Completed,
        Ordering::Equal => StepStatus::Current,
        Ordering::Greater => StepStatus::Incomplete,
    }
}

/// Builds the ordered step list for `labels` with `current_step` active.
///
/// No clamping is done: a `current_step` outside the label range yields a
/// list without any current step.
pub fn derive_steps<S: AsRef<str>>(current_step: i32, labels: &[S]) -> Vec<Step> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| Step::new(label.as_ref(), status_for(index, current_step)))
        .collect()
}

/// Same as [`derive_steps`] over [`DEFAULT_STEP_LABELS`]
pub fn default_steps(current_step: i32) -> Vec<Step> {
    derive_steps(current_step, &DEFAULT_STEP_LABELS)
}

/// Index to report for a click on a step with `status`, if any
pub fn step_click_target(status: StepStatus, index: usize) -> Option<usize> {
    status.is_navigable().then_some(index)
}
