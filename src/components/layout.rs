//! Layout of the demo wizard
//!
//! Owns the current step and wires the stepper and the footer together,
//! the way a form flow embedding these components would.

use crate::components::{Footer, Stepper};
use crate::config::WizardConfig;
use dioxus::prelude::*;
use tracing::info;

/// Main layout component holding the wizard state
#[component]
pub fn WizardLayout() -> Element {
    let config = use_context::<WizardConfig>();
    let mut current_step = use_signal(|| config.start_step);
    let mut finished = use_signal(|| false);

    let step = current_step();
    let is_last = usize::try_from(step)
        .map(|index| index + 1 >= config.step_count())
        .unwrap_or(false);
    let step_name = config.label_at(step).unwrap_or("Done").to_string();

    let next_label = if is_last {
        config.finish_label.clone()
    } else {
        config.next_label.clone()
    };

    let go_to = move |index: usize| {
        info!(step = index, "navigating back to completed step");
        current_step.set(index as i32);
        finished.set(false);
    };

    rsx! {
        div { class: "app-container",
            header { class: "app-header",
                h1 { "{config.title}" }
                if let Some(steps) = config.steps.clone() {
                    Stepper { current_step: step, steps: steps, on_step_click: go_to }
                } else {
                    Stepper {
                        current_step: step,
                        labels: config.labels.clone(),
                        on_step_click: go_to
                    }
                }
            }

            main { class: "app-main",
                StepPage { name: step_name, finished: finished() }
            }

            footer { class: "app-footer",
                Footer {
                    on_back: move |_| {
                        current_step.set((step - 1).max(0));
                        finished.set(false);
                    },
                    on_next: move |_| {
                        if is_last {
                            info!("wizard finished");
                            finished.set(true);
                        } else {
                            current_step.set(step + 1);
                        }
                    },
                    next_label: next_label,
                    back_label: config.back_label.clone(),
                    show_back: step > 0,
                    next_disabled: finished()
                }
            }
        }
    }
}

/// Placeholder content for the active step
#[component]
fn StepPage(name: String, finished: bool) -> Element {
    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "{name}" }
                p { class: "page-description",
                    if finished {
                        "All steps have been completed."
                    } else {
                        "Fill in the fields for this step, then continue."
                    }
                }
            }
        }
    }
}
