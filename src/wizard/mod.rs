//! Step-gated wizard controller: an ordered, auth-parameterized plan of
//! steps and the guard logic deciding when forward navigation is allowed.

pub mod controller;
pub mod steps;

pub use controller::WizardController;
pub use steps::{step_plan, StepId, WizardStep};
