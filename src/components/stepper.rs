//! Progress stepper for multi-step flows
//!
//! Renders every step as a status label, a circular indicator and the step
//! label, joined left to right by connector lines. Completed steps can be
//! clicked to navigate back to them.

use crate::state::{derive_steps, step_click_target, Step, StepStatus, DEFAULT_STEP_LABELS};
use dioxus::prelude::*;
use tracing::trace;

/// Horizontal progress stepper
///
/// `steps` replaces the derived step list entirely and is rendered as given.
/// Otherwise the list is derived from `current_step` over `labels`, or over
/// [`DEFAULT_STEP_LABELS`] when no labels are supplied.
#[component]
pub fn Stepper(
    current_step: i32,
    steps: Option<Vec<Step>>,
    labels: Option<Vec<String>>,
    on_step_click: Option<EventHandler<usize>>,
) -> Element {
    let steps = match (steps, labels) {
        (Some(steps), _) => steps,
        (None, Some(labels)) => derive_steps(current_step, labels.as_slice()),
        (None, None) => derive_steps(current_step, DEFAULT_STEP_LABELS.as_slice()),
    };
    let statuses: Vec<StepStatus> = steps.iter().map(|step| step.status).collect();

    rsx! {
        div { class: "stepper",
            for (index, step) in steps.into_iter().enumerate() {
                if index > 0 {
                    StepConnector {
                        index: index,
                        completed: statuses[index - 1] == StepStatus::Completed
                    }
                }
                div {
                    class: step_group_class(step.status),
                    "data-index": "{index}",
                    "data-status": step.status.css_class(),
                    onclick: move |_| dispatch_step_click(step.status, index, on_step_click),
                    span { class: "stepper-status-label", "{step.status.display_label()}" }
                    StepIndicator { status: step.status, index: index }
                    span { class: "stepper-label", "{step.label}" }
                }
            }
        }
    }
}

/// Line joining the step before `index` to the step at `index`
#[component]
fn StepConnector(index: usize, completed: bool) -> Element {
    let class = if completed {
        "stepper-connector completed"
    } else {
        "stepper-connector"
    };

    rsx! {
        div { class: class, "data-before": "{index}" }
    }
}

/// Circular indicator showing a check for completed steps and the step number otherwise
#[component]
fn StepIndicator(status: StepStatus, index: usize) -> Element {
    let number = index + 1;

    rsx! {
        div { class: "stepper-indicator {status.css_class()}",
            {match status {
                StepStatus::Completed => rsx! { i { class: "fas fa-check" } },
                StepStatus::Current | StepStatus::Incomplete => rsx! { "{number}" },
            }}
        }
    }
}

fn step_group_class(status: StepStatus) -> String {
    if status.is_navigable() {
        format!("stepper-step {} clickable", status.css_class())
    } else {
        format!("stepper-step {}", status.css_class())
    }
}

fn dispatch_step_click(status: StepStatus, index: usize, handler: Option<EventHandler<usize>>) {
    match (step_click_target(status, index), handler) {
        (Some(target), Some(handler)) => handler.call(target),
        (Some(_), None) => trace!(index, "step clicked without a click handler"),
        (None, _) => trace!(index, status = status.css_class(), "ignoring click on step"),
    }
}
