//! UI Components for multi-step form flows
//!
//! This module contains the progress stepper, the footer bar, and the
//! layout the demo wizard assembles them into.

pub mod footer;
pub mod layout;
pub mod stepper;

// Re-export commonly used components
pub use footer::Footer;
pub use layout::WizardLayout;
pub use stepper::Stepper;
