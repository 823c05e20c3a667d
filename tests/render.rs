use dioxus::prelude::*;
use wizard_ui::{Footer, Step, StepStatus, Stepper, WizardConfig, WizardLayout};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Opening tag of the element whose class list starts with `class`
fn opening_tag<'a>(html: &'a str, class: &str) -> &'a str {
    let at = html.find(class).unwrap();
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

#[test]
fn test_first_step_with_default_labels() {
    let html = render(|| rsx! { Stepper { current_step: 0 } });

    assert_eq!(count(&html, r#"data-status="current""#), 1);
    assert_eq!(count(&html, r#"data-status="incomplete""#), 4);
    assert_eq!(count(&html, r#"data-status="completed""#), 0);
    assert_eq!(count(&html, ">In Progress</span>"), 1);
    assert_eq!(count(&html, ">Incomplete</span>"), 4);
    assert!(html.contains("Personal Info"));
    assert!(html.contains("Confirmation"));
}

#[test]
fn test_last_step_with_default_labels() {
    let html = render(|| rsx! { Stepper { current_step: 4 } });

    assert_eq!(count(&html, ">Completed</span>"), 4);
    assert_eq!(count(&html, ">In Progress</span>"), 1);
    assert_eq!(count(&html, ">Incomplete</span>"), 0);
    assert_eq!(count(&html, "fas fa-check"), 4);
    assert_eq!(count(&html, "clickable"), 4);
}

#[test]
fn test_connectors_between_adjacent_steps() {
    let html = render(|| rsx! { Stepper { current_step: 2 } });
    assert_eq!(count(&html, "stepper-connector"), 4);
    // connectors leaving the two completed steps
    assert_eq!(count(&html, "stepper-connector completed"), 2);

    let html = render(|| {
        rsx! {
            Stepper {
                current_step: 0,
                labels: vec!["Account".to_string(), "Profile".to_string(), "Done".to_string()]
            }
        }
    });
    assert_eq!(count(&html, "stepper-connector"), 2);
    assert!(html.contains("Profile"));
    assert!(!html.contains("Personal Info"));
}

#[test]
fn test_single_and_empty_step_lists() {
    let html = render(|| {
        rsx! {
            Stepper { current_step: 0, steps: vec![Step::new("Only", StepStatus::Current)] }
        }
    });
    assert_eq!(count(&html, "stepper-connector"), 0);
    assert_eq!(count(&html, "stepper-step"), 1);

    let html = render(|| rsx! { Stepper { current_step: 0, steps: Vec::<Step>::new() } });
    assert_eq!(count(&html, "stepper-connector"), 0);
    assert_eq!(count(&html, "stepper-step"), 0);
}

#[test]
fn test_explicit_steps_bypass_derivation() {
    let html = render(|| {
        rsx! {
            Stepper {
                current_step: 0,
                steps: vec![
                    Step::new("Alpha", StepStatus::Current),
                    Step::new("Beta", StepStatus::Completed),
                    Step::new("Gamma", StepStatus::Current),
                ]
            }
        }
    });

    // two current steps are rendered as given
    assert_eq!(count(&html, r#"data-status="current""#), 2);
    assert_eq!(count(&html, r#"data-status="completed""#), 1);
    assert!(html.contains("Alpha"));
    assert!(html.contains("Gamma"));
    assert!(!html.contains("Personal Info"));

    let alpha = html.find("Alpha").unwrap();
    let beta = html.find("Beta").unwrap();
    let gamma = html.find("Gamma").unwrap();
    assert!(alpha < beta && beta < gamma);
}

#[test]
fn test_out_of_range_step_renders_without_current() {
    let html = render(|| rsx! { Stepper { current_step: -3 } });
    assert_eq!(count(&html, r#"data-status="incomplete""#), 5);

    let html = render(|| rsx! { Stepper { current_step: 12 } });
    assert_eq!(count(&html, r#"data-status="completed""#), 5);
    assert_eq!(count(&html, r#"data-status="current""#), 0);
}

#[test]
fn test_stepper_with_click_handler_renders() {
    let html = render(|| {
        rsx! {
            Stepper { current_step: 1, on_step_click: move |_index: usize| {} }
        }
    });
    assert_eq!(count(&html, r#"data-index="0""#), 1);
    assert_eq!(count(&html, "clickable"), 1);
}

#[test]
fn test_footer_defaults() {
    let html = render(|| rsx! { Footer { on_next: move |_| {}, on_back: move |_| {} } });

    assert!(html.contains("Go Back"));
    assert!(html.contains("Next"));
    assert!(!html.contains("footer-spacer"));

    let back = html.find("footer-button back").unwrap();
    let next = html.find("footer-button next").unwrap();
    assert!(back < next);
}

#[test]
fn test_footer_custom_labels() {
    let html = render(|| {
        rsx! {
            Footer {
                on_next: move |_| {},
                on_back: move |_| {},
                next_label: "Submit",
                back_label: "Previous"
            }
        }
    });

    assert!(html.contains("Submit"));
    assert!(html.contains("Previous"));
    assert!(!html.contains("Go Back"));
}

#[test]
fn test_footer_hidden_buttons_are_not_rendered() {
    let html = render(|| {
        rsx! {
            Footer { on_next: move |_| {}, on_back: move |_| {}, show_back: false }
        }
    });
    assert!(!html.contains("footer-button back"));
    assert!(html.contains("footer-button next"));
    assert!(html.contains("footer-spacer"));

    let html = render(|| {
        rsx! {
            Footer { on_next: move |_| {}, on_back: move |_| {}, show_next: false }
        }
    });
    assert!(html.contains("footer-button back"));
    assert!(!html.contains("footer-button next"));

    let html = render(|| {
        rsx! {
            Footer {
                on_next: move |_| {},
                on_back: move |_| {},
                show_back: false,
                show_next: false
            }
        }
    });
    assert!(!html.contains("footer-button"));
    assert!(!html.contains("footer-spacer"));
}

#[test]
fn test_footer_disabled_next() {
    let html = render(|| {
        rsx! {
            Footer { on_next: move |_| {}, on_back: move |_| {}, next_disabled: true }
        }
    });
    assert!(html.contains("footer-button next disabled"));
    // the disabled class plus the disabled attribute
    let tag = opening_tag(&html, "footer-button next");
    assert!(tag.starts_with("<button"));
    assert!(count(tag, "disabled") >= 2, "missing disabled attribute: {tag}");

    let html = render(|| rsx! { Footer { on_next: move |_| {}, on_back: move |_| {} } });
    assert!(!html.contains("footer-button next disabled"));
    assert!(count(opening_tag(&html, "footer-button next"), "disabled") <= 1);
}

#[test]
fn test_layout_starts_on_configured_step() {
    let html = render(|| {
        use_context_provider(WizardConfig::default);
        rsx! { WizardLayout {} }
    });
    assert!(html.contains("Registration"));
    assert_eq!(count(&html, r#"data-status="current""#), 1);
    assert!(!html.contains("footer-button back"));
    assert!(html.contains("Next"));

    let html = render(|| {
        use_context_provider(|| WizardConfig {
            start_step: 4,
            ..WizardConfig::default()
        });
        rsx! { WizardLayout {} }
    });
    assert!(html.contains("footer-button back"));
    assert!(html.contains("Finish"));
    assert_eq!(count(&html, r#"data-status="completed""#), 4);
}

#[test]
fn test_layout_with_out_of_range_start_step() {
    let html = render(|| {
        use_context_provider(|| WizardConfig {
            start_step: -1,
            ..WizardConfig::default()
        });
        rsx! { WizardLayout {} }
    });
    assert_eq!(count(&html, r#"data-status="incomplete""#), 5);
    assert!(!html.contains("footer-button back"));
    assert!(html.contains("Next"));
    assert!(!html.contains("Finish"));
}
