//! The wizard state machine. Forward movement is gated per step; backward
//! movement is unconditional and never clears entered data. A blocked
//! advance is a pure no-op, never an error.

use crate::auth::AuthContext;
use crate::catalog::Category;
use crate::draft::{field, DraftStore};

use super::steps::{step_plan, StepId, WizardStep};

/// Finite state machine over the ordered wizard steps.
pub struct WizardController {
    plan: Vec<StepId>,
    cursor: usize,
    authenticated: bool,
}

impl WizardController {
    /// Builds the controller for one wizard run. Authentication is read
    /// once here; a login mid-flow does not re-shape a running wizard.
    pub fn new(auth: &AuthContext) -> Self {
        Self {
            plan: step_plan(auth.is_authenticated()),
            cursor: 0,
            authenticated: auth.is_authenticated(),
        }
    }

    pub fn current_step(&self) -> StepId {
        self.plan[self.cursor]
    }

    /// 1-based number of the current step.
    pub fn step_number(&self) -> usize {
        self.cursor + 1
    }

    pub fn step_count(&self) -> usize {
        self.plan.len()
    }

    pub fn is_final_step(&self) -> bool {
        self.cursor + 1 == self.plan.len()
    }

    /// Whether the current step's guard holds against the store.
    pub fn can_advance(&self, store: &DraftStore) -> bool {
        match self.current_step() {
            StepId::PrivacyAndCategory => privacy_and_category_ok(store),
            StepId::ProjectDetails => project_details_ok(store),
            StepId::ExpertiseAndBudget => expertise_and_budget_ok(store),
            StepId::Timeline => timeline_ok(store, self.authenticated),
            StepId::Billing => billing_ok(store),
        }
    }

    /// Moves forward one step when the guard holds and this is not the
    /// final step. Returns whether the cursor moved.
    pub fn advance(&mut self, store: &DraftStore) -> bool {
        if self.is_final_step() || !self.can_advance(store) {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Moves back one step. Always permitted and never touches the store:
    /// users must not lose entered data by navigating backward.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// True on the final step once its guard holds; the draft may then be
    /// handed to the submission adapter.
    pub fn ready_to_submit(&self, store: &DraftStore) -> bool {
        self.is_final_step() && self.can_advance(store)
    }

    pub fn snapshot(&self, store: &DraftStore) -> WizardStep {
        WizardStep {
            number: self.step_number(),
            required_fields_satisfied: self.can_advance(store),
        }
    }
}

fn privacy_and_category_ok(store: &DraftStore) -> bool {
    let draft = store.draft();
    draft.privacy.is_some() && draft.category.is_some() && draft.agreed_to_terms
}

fn project_details_ok(store: &DraftStore) -> bool {
    let draft = store.draft();
    let errors = store.errors();
    let type_ok = draft.selected_type.is_some() && errors.is_clear(field::PROJECT_TYPE);
    let deliverable_ok =
        draft.selected_deliverable.is_some() && errors.is_clear(field::DELIVERABLE);
    let title_ok = present(&draft.title) && errors.is_clear(field::TITLE);
    let description_ok = present(&draft.description) && errors.is_clear(field::DESCRIPTION);
    let length_ok = draft.category != Some(Category::Writing)
        || (draft.writing_length.is_some() && errors.is_clear(field::WRITING_LENGTH));
    type_ok && deliverable_ok && title_ok && description_ok && length_ok
}

fn expertise_and_budget_ok(store: &DraftStore) -> bool {
    let draft = store.draft();
    let errors = store.errors();
    let tags_ok = !draft.expertise_tags.is_empty();
    let industry_ok = present(&draft.industry) && errors.is_clear(field::INDUSTRY);
    let budget_ok = draft.min_budget.is_some()
        && draft.max_budget.is_some()
        && errors.is_clear(field::BUDGET);
    tags_ok && industry_ok && budget_ok
}

fn timeline_ok(store: &DraftStore, authenticated: bool) -> bool {
    let draft = store.draft();
    if draft.hiring_timeline.is_none() {
        return false;
    }
    authenticated || identity_complete(store)
}

fn identity_complete(store: &DraftStore) -> bool {
    let identity = &store.draft().identity;
    let errors = store.errors();
    present(&identity.first_name)
        && errors.is_clear(field::FIRST_NAME)
        && present(&identity.last_name)
        && errors.is_clear(field::LAST_NAME)
        && present(&identity.email)
        && errors.is_clear(field::EMAIL)
        && present(&identity.password)
        && errors.is_clear(field::PASSWORD)
        && present(&identity.phone_number)
        && errors.is_clear(field::PHONE_NUMBER)
        && present(&identity.zip_code)
        && errors.is_clear(field::ZIP_CODE)
}

fn billing_ok(store: &DraftStore) -> bool {
    let billing = &store.draft().billing;
    let errors = store.errors();
    present(&billing.address_line1)
        && errors.is_clear(field::ADDRESS_LINE1)
        && present(&billing.city)
        && errors.is_clear(field::BILLING_CITY)
        && present(&billing.zip_code)
        && errors.is_clear(field::BILLING_ZIP)
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.is_empty()).unwrap_or(false)
}
