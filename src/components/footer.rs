//! Footer bar with the back and next actions of a multi-step flow

use dioxus::prelude::*;
use tracing::debug;

pub const DEFAULT_NEXT_LABEL: &str = "Next";
pub const DEFAULT_BACK_LABEL: &str = "Go Back";

/// Navigation buttons for moving between steps
///
/// The back button is rendered left of the next button. A hidden button is
/// not rendered at all. While `next_disabled` is set the next button is
/// disabled and never calls `on_next`.
#[component]
pub fn Footer(
    on_next: EventHandler<()>,
    on_back: EventHandler<()>,
    #[props(into, default = DEFAULT_NEXT_LABEL.to_string())] next_label: String,
    #[props(into, default = DEFAULT_BACK_LABEL.to_string())] back_label: String,
    #[props(default = true)] show_back: bool,
    #[props(default = true)] show_next: bool,
    #[props(default)] next_disabled: bool,
) -> Element {
    let next_class = if next_disabled {
        "footer-button next disabled"
    } else {
        "footer-button next"
    };

    rsx! {
        div { class: "wizard-footer",
            if show_back {
                button {
                    class: "footer-button back",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    i { class: "fas fa-arrow-left" }
                    " {back_label}"
                }
            } else if show_next {
                div { class: "footer-spacer" }
            }

            if show_next {
                button {
                    class: next_class,
                    r#type: "button",
                    disabled: next_disabled,
                    onclick: move |_| {
                        press_next(next_disabled, on_next);
                    },
                    "{next_label} "
                    i { class: "fas fa-arrow-right" }
                }
            }
        }
    }
}

/// Activation of the next button; `on_next` only fires while enabled
fn press_next(disabled: bool, on_next: EventHandler<()>) -> bool {
    let fired = activate(disabled, || on_next.call(()));
    if !fired {
        debug!("next action is disabled, ignoring activation");
    }
    fired
}

/// Runs `action` unless the control is `disabled`.
///
/// Returns whether the action ran.
pub fn activate(disabled: bool, action: impl FnOnce()) -> bool {
    if disabled {
        return false;
    }
    action();
    true
}
