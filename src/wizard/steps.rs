//! Wizard step identities and the auth-dependent step plan.

use serde::{Deserialize, Serialize};

/// The wizard's screens. Anonymous users collect identity on the timeline
/// step and get a trailing billing step; authenticated users skip both
/// concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepId {
    PrivacyAndCategory,
    ProjectDetails,
    ExpertiseAndBudget,
    Timeline,
    Billing,
}

impl StepId {
    pub fn title(&self) -> &'static str {
        match self {
            StepId::PrivacyAndCategory => "Privacy & Category",
            StepId::ProjectDetails => "Project Details",
            StepId::ExpertiseAndBudget => "Expertise & Budget",
            StepId::Timeline => "Timeline",
            StepId::Billing => "Billing",
        }
    }
}

/// Ordered steps for one wizard run. The plan is fixed at construction;
/// authentication decides whether the billing step exists at all.
pub fn step_plan(authenticated: bool) -> Vec<StepId> {
    let mut plan = vec![
        StepId::PrivacyAndCategory,
        StepId::ProjectDetails,
        StepId::ExpertiseAndBudget,
        StepId::Timeline,
    ];
    if !authenticated {
        plan.push(StepId::Billing);
    }
    plan
}

/// Snapshot of one step's position and readiness, as shown to drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStep {
    /// 1-based position in the active plan.
    pub number: usize,
    pub required_fields_satisfied: bool,
}
