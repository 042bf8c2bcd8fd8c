//! Interactive driver for the project-intake wizard.
//!
//! Walks the step-gated flow in the terminal, echoes inline validation
//! errors, and submits the completed draft to the configured backend. Set
//! `INTAKE_USER_EMAIL` to run the shorter authenticated flow and
//! `INTAKE_API_URL` to point at a backend other than localhost.

use std::error::Error;
use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use intake_core::auth::AuthContext;
use intake_core::catalog::{
    BillingType, Category, FeeType, HiringTimeline, InvitationPreference, LengthUnit,
    PrivacyScope, IMPORTANT_FACTORS,
};
use intake_core::config::ApiConfig;
use intake_core::draft::DraftStore;
use intake_core::submission::SubmissionAdapter;
use intake_core::wizard::{StepId, WizardController};

enum StepOutcome {
    Next,
    Back,
    Stay,
    Quit,
}

fn main() -> Result<(), Box<dyn Error>> {
    intake_core::init();

    let auth = match std::env::var("INTAKE_USER_EMAIL") {
        Ok(email) if !email.trim().is_empty() => AuthContext::signed_in(email.trim()),
        _ => AuthContext::anonymous(),
    };
    let config = ApiConfig::from_env();

    println!("{}", "Post a Project".bold());
    if let Some(user) = auth.user() {
        println!("Signed in as {}.", user.email.green());
    } else {
        println!("Posting as a new client; an account is created on submit.");
    }
    println!();

    let mut controller = WizardController::new(&auth);
    let mut store = DraftStore::new();

    loop {
        println!(
            "{}",
            format!(
                "Step {} of {} - {}",
                controller.step_number(),
                controller.step_count(),
                controller.current_step().title()
            )
            .bold()
        );

        run_step(controller.current_step(), &mut store, &auth)?;
        print_errors(&store);

        match step_menu(&controller, &store)? {
            StepOutcome::Quit => {
                println!("Draft discarded.");
                return Ok(());
            }
            StepOutcome::Back => {
                controller.back();
                continue;
            }
            StepOutcome::Stay => continue,
            StepOutcome::Next => {
                if controller.ready_to_submit(&store) {
                    break;
                }
                controller.advance(&store);
            }
        }
    }

    let adapter = SubmissionAdapter::new(config);
    let runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(adapter.submit(store.draft(), &auth)) {
        Ok(receipt) => {
            println!("{}", "Your project has been posted.".green().bold());
            if receipt.logged_in {
                println!("You are now signed in.");
            }
        }
        Err(error) => {
            println!("{}", error.to_string().red());
            println!("Your entries are preserved; run again to retry.");
        }
    }
    Ok(())
}

fn run_step(
    step: StepId,
    store: &mut DraftStore,
    auth: &AuthContext,
) -> Result<(), Box<dyn Error>> {
    match step {
        StepId::PrivacyAndCategory => prompt_privacy_and_category(store),
        StepId::ProjectDetails => prompt_project_details(store),
        StepId::ExpertiseAndBudget => prompt_expertise_and_budget(store),
        StepId::Timeline => prompt_timeline(store, auth),
        StepId::Billing => prompt_billing(store),
    }
}

fn step_menu(
    controller: &WizardController,
    store: &DraftStore,
) -> Result<StepOutcome, Box<dyn Error>> {
    let forward_label = if controller.is_final_step() {
        "Submit"
    } else {
        "Next"
    };
    let mut items: Vec<&str> = Vec::new();
    if controller.can_advance(store) {
        items.push(forward_label);
    }
    items.push("Edit this step again");
    if controller.step_number() > 1 {
        items.push("Back");
    }
    items.push("Quit");

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match items[choice] {
        "Next" | "Submit" => StepOutcome::Next,
        "Back" => StepOutcome::Back,
        "Quit" => StepOutcome::Quit,
        _ => StepOutcome::Stay,
    })
}

fn prompt_privacy_and_category(store: &mut DraftStore) -> Result<(), Box<dyn Error>> {
    let privacy_labels: Vec<&str> = PrivacyScope::ALL.iter().map(|scope| scope.label()).collect();
    let privacy = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Who should see this project?")
        .items(&privacy_labels)
        .default(0)
        .interact()?;
    store.set_privacy(PrivacyScope::ALL[privacy]);

    let category_labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let category = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Project category")
        .items(&category_labels)
        .default(0)
        .interact()?;
    store.set_category(Category::ALL[category]);

    let agreed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you agree to the terms of service?")
        .default(false)
        .interact()?;
    store.set_agreed_to_terms(agreed);
    Ok(())
}

fn prompt_project_details(store: &mut DraftStore) -> Result<(), Box<dyn Error>> {
    let types = store.type_options();
    if !types.is_empty() {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Project type")
            .items(types)
            .default(0)
            .interact()?;
        store.set_project_type(types[choice]);
    }

    let activities = store.activity_options();
    if !activities.is_empty() {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Activity")
            .items(activities)
            .default(0)
            .interact()?;
        store.set_activity(activities[choice]);
    }

    let deliverables = store.deliverable_options();
    if !deliverables.is_empty() {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Deliverable")
            .items(deliverables)
            .default(0)
            .interact()?;
        store.set_deliverable(deliverables[choice]);
    }

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Project title")
        .interact_text()?;
    store.set_title(&title);

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Describe the project")
        .interact_text()?;
    store.set_description(&description);

    if store.draft().category == Some(Category::Writing) {
        let units = ["words", "pages"];
        let unit_choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Length unit")
            .items(&units)
            .default(0)
            .interact()?;
        let unit = if unit_choice == 0 {
            LengthUnit::Words
        } else {
            LengthUnit::Pages
        };
        let length: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Expected length")
            .interact_text()?;
        store.set_writing_length(&length, unit);
    }

    let attachment: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Attach a PDF brief (path, empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    if attachment.trim().is_empty() {
        store.clear_attachment();
    } else {
        store.set_attachment(PathBuf::from(attachment.trim()));
    }
    Ok(())
}

fn prompt_expertise_and_budget(store: &mut DraftStore) -> Result<(), Box<dyn Error>> {
    let options = store.expertise_options();
    if !options.is_empty() {
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Pick the expertise you need (space to toggle)")
            .items(options)
            .interact()?;
        for index in selected {
            store.add_expertise_tag(options[index]);
        }
    }
    loop {
        let custom: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Add a custom tag (empty to finish)")
            .allow_empty(true)
            .interact_text()?;
        if custom.trim().is_empty() {
            break;
        }
        if !store.add_custom_expertise_tag(&custom) {
            print_errors(store);
        }
    }

    let industry: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Which industry is this for?")
        .interact_text()?;
    store.set_industry(&industry);

    let fee = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Fee structure")
        .items(&["Fixed price", "Hourly"])
        .default(0)
        .interact()?;
    store.set_fee_type(if fee == 0 { FeeType::Fixed } else { FeeType::Hourly });

    let min: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Minimum budget (USD)")
        .interact_text()?;
    let max: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Maximum budget (USD)")
        .interact_text()?;
    store.set_budget(&min, &max);
    Ok(())
}

fn prompt_timeline(store: &mut DraftStore, auth: &AuthContext) -> Result<(), Box<dyn Error>> {
    let labels: Vec<&str> = HiringTimeline::ALL.iter().map(|t| t.label()).collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("When do you want to hire?")
        .items(&labels)
        .default(0)
        .interact()?;
    store.set_hiring_timeline(HiringTimeline::ALL[choice]);

    let factor_indices = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("What matters most? (space to toggle)")
        .items(IMPORTANT_FACTORS)
        .interact()?;
    let factors: Vec<String> = factor_indices
        .into_iter()
        .map(|index| IMPORTANT_FACTORS[index].to_string())
        .collect();
    store.set_important_factors(factors);

    if auth.is_authenticated() {
        return Ok(());
    }

    let first: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("First name")
        .interact_text()?;
    store.set_first_name(&first);
    let last: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Last name")
        .interact_text()?;
    store.set_last_name(&last);
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Email")
        .interact_text()?;
    store.set_email(&email);
    let password: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a password")
        .interact_text()?;
    store.set_password(&password);
    let country: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Country code (e.g. us, in, gb)")
        .default("us".into())
        .interact_text()?;
    store.set_country_code(&country);
    let phone: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Phone number")
        .interact_text()?;
    store.set_phone_number(&phone);
    let zip: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Zip / postal code")
        .interact_text()?;
    store.set_identity_zip(&zip);
    Ok(())
}

fn prompt_billing(store: &mut DraftStore) -> Result<(), Box<dyn Error>> {
    let billing = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Bill as")
        .items(&["Individual", "Business"])
        .default(0)
        .interact()?;
    let billing_type = if billing == 0 {
        BillingType::Individual
    } else {
        BillingType::Business
    };
    store.set_billing_type(billing_type);

    if billing_type == BillingType::Business {
        let company: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Company name")
            .interact_text()?;
        store.set_company_name(&company);
        let registration: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Company registration (empty to skip)")
            .allow_empty(true)
            .interact_text()?;
        if !registration.trim().is_empty() {
            store.set_company_registration(&registration);
        }
    }

    let line1: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Address line 1")
        .interact_text()?;
    store.set_address_line1(&line1);
    let line2: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Address line 2 (empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    if !line2.trim().is_empty() {
        store.set_address_line2(&line2);
    }
    let city: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("City")
        .interact_text()?;
    store.set_billing_city(&city);
    let state: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("State / region (empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    if !state.trim().is_empty() {
        store.set_billing_state(&state);
    }
    let country: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Billing country code")
        .default("us".into())
        .interact_text()?;
    store.set_billing_country(&country);
    let zip: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Billing zip / postal code")
        .interact_text()?;
    store.set_billing_zip(&zip);
    let vat: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("VAT number (empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    store.set_vat_number(&vat);

    let invitations = [
        ("Let your team invite experts", InvitationPreference::TeamInvites),
        ("Invite experts yourself", InvitationPreference::SelfInvite),
        ("Keep it internal", InvitationPreference::InternalInvite),
    ];
    let labels: Vec<&str> = invitations.iter().map(|(label, _)| *label).collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("After posting")
        .items(&labels)
        .default(0)
        .interact()?;
    store.set_invitation(invitations[choice].1);
    Ok(())
}

fn print_errors(store: &DraftStore) {
    for (field, message) in store.errors().fields_with_errors() {
        println!("  {} {}", format!("{field}:").red().bold(), message.red());
    }
}
