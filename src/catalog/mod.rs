//! Category catalogs and fixed option sets for the intake wizard.
//!
//! Every option set the wizard offers is a pure function of the selected
//! category (and, where noted, the selected type). The tables below are the
//! single source of legal values; the draft store and controller consult
//! them instead of branching inline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level project category. Fixing a category constrains the legal
/// value-sets for type, activity, and deliverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Writing,
    Research,
    Consulting,
    DataAi,
    ProductDev,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Writing,
        Category::Research,
        Category::Consulting,
        Category::DataAi,
        Category::ProductDev,
    ];

    /// Value sent over the wire and accepted by [`Category::parse`].
    pub fn wire_name(&self) -> &'static str {
        match self {
            Category::Writing => "writing",
            Category::Research => "research",
            Category::Consulting => "consulting",
            Category::DataAi => "data_ai",
            Category::ProductDev => "product_dev",
        }
    }

    /// Human-facing label used by interactive drivers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Writing => "Writing",
            Category::Research => "Research",
            Category::Consulting => "Consulting",
            Category::DataAi => "Data & AI",
            Category::ProductDev => "Product Development",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|candidate| candidate.wire_name() == value.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Option sets owned by a single category.
#[derive(Debug)]
pub struct CategoryCatalog {
    pub types: &'static [&'static str],
    pub deliverables: &'static [&'static str],
    pub expertise: &'static [&'static str],
}

const WRITING_CATALOG: CategoryCatalog = CategoryCatalog {
    types: &[
        "Article Writing",
        "Copywriting",
        "Technical Writing",
        "Editing & Proofreading",
    ],
    deliverables: &["Outline", "Draft", "Final Copy", "Style Guide"],
    expertise: &[
        "SEO",
        "Storytelling",
        "Technical Documentation",
        "Content Strategy",
        "Editing",
    ],
};

const RESEARCH_CATALOG: CategoryCatalog = CategoryCatalog {
    types: &[
        "Market Research",
        "Academic Research",
        "Competitive Analysis",
        "Literature Review",
    ],
    // Research deliverables are keyed by type; see `deliverable_options`.
    deliverables: &[],
    expertise: &[
        "Survey Design",
        "Statistics",
        "Qualitative Methods",
        "Consumer Insights",
        "Academic Writing",
    ],
};

const CONSULTING_CATALOG: CategoryCatalog = CategoryCatalog {
    types: &[
        "Strategy Consulting",
        "Management Consulting",
        "Financial Advisory",
        "Marketing Consulting",
    ],
    deliverables: &["Recommendations Report", "Workshop", "Roadmap", "Audit"],
    expertise: &[
        "Go-to-Market",
        "Operations",
        "Corporate Finance",
        "Growth Marketing",
        "Change Management",
    ],
};

const DATA_AI_CATALOG: CategoryCatalog = CategoryCatalog {
    types: &[
        "Data Analysis",
        "Machine Learning",
        "Data Engineering",
        "AI Integration",
    ],
    deliverables: &[
        "Technical Report",
        "Notebook",
        "Trained Model",
        "Dashboard",
        "Data Pipeline",
    ],
    expertise: &[
        "Python",
        "SQL",
        "Deep Learning",
        "Data Visualization",
        "MLOps",
    ],
};

const PRODUCT_DEV_CATALOG: CategoryCatalog = CategoryCatalog {
    types: &[
        "Web Development",
        "Mobile Development",
        "Prototype & MVP",
        "QA & Testing",
    ],
    deliverables: &["Source Code", "Deployed Application", "Prototype", "Test Report"],
    expertise: &[
        "Frontend",
        "Backend",
        "iOS",
        "Android",
        "DevOps",
    ],
};

/// Activities offered for every writing type.
const WRITING_ACTIVITIES: &[&str] = &[
    "Blog Posts",
    "Website Content",
    "White Papers",
    "Product Documentation",
    "User Guides",
];

const MARKET_RESEARCH_ACTIVITIES: &[&str] =
    &["Surveys", "Interviews", "Focus Groups", "Desk Research"];

const DATA_ANALYSIS_ACTIVITIES: &[&str] = &[
    "Exploratory Analysis",
    "Dashboarding",
    "Statistical Modeling",
];

const MACHINE_LEARNING_ACTIVITIES: &[&str] =
    &["Model Training", "Model Evaluation", "Fine Tuning"];

const MARKET_RESEARCH_DELIVERABLES: &[&str] =
    &["Research Report", "Survey Results", "Presentation Deck"];
const ACADEMIC_RESEARCH_DELIVERABLES: &[&str] =
    &["Research Paper", "Annotated Bibliography", "Data Set"];
const COMPETITIVE_ANALYSIS_DELIVERABLES: &[&str] =
    &["Comparison Matrix", "Analysis Report"];
const LITERATURE_REVIEW_DELIVERABLES: &[&str] = &["Review Document", "Summary Brief"];

pub fn catalog_for(category: Category) -> &'static CategoryCatalog {
    match category {
        Category::Writing => &WRITING_CATALOG,
        Category::Research => &RESEARCH_CATALOG,
        Category::Consulting => &CONSULTING_CATALOG,
        Category::DataAi => &DATA_AI_CATALOG,
        Category::ProductDev => &PRODUCT_DEV_CATALOG,
    }
}

/// Legal type values for a category.
pub fn type_options(category: Category) -> &'static [&'static str] {
    catalog_for(category).types
}

/// Activity choices for a `(category, type)` pair. Empty when the pair has
/// no activity dimension.
pub fn activity_options(category: Category, selected_type: &str) -> &'static [&'static str] {
    match category {
        Category::Writing => WRITING_ACTIVITIES,
        Category::Research if selected_type == "Market Research" => MARKET_RESEARCH_ACTIVITIES,
        Category::DataAi if selected_type == "Data Analysis" => DATA_ANALYSIS_ACTIVITIES,
        Category::DataAi if selected_type == "Machine Learning" => MACHINE_LEARNING_ACTIVITIES,
        _ => &[],
    }
}

/// Whether the `(category, type)` pair requires an activity selection.
pub fn activity_required(category: Category, selected_type: &str) -> bool {
    !activity_options(category, selected_type).is_empty()
}

/// Deliverable choices for a `(category, type)` pair. Research deliverables
/// are keyed by type; every other category keys by category alone.
pub fn deliverable_options(category: Category, selected_type: &str) -> &'static [&'static str] {
    match category {
        Category::Research => match selected_type {
            "Market Research" => MARKET_RESEARCH_DELIVERABLES,
            "Academic Research" => ACADEMIC_RESEARCH_DELIVERABLES,
            "Competitive Analysis" => COMPETITIVE_ANALYSIS_DELIVERABLES,
            "Literature Review" => LITERATURE_REVIEW_DELIVERABLES,
            _ => &[],
        },
        other => catalog_for(other).deliverables,
    }
}

/// Category-specific expertise tag suggestions.
pub fn expertise_options(category: Category) -> &'static [&'static str] {
    catalog_for(category).expertise
}

pub fn is_legal_type(category: Category, value: &str) -> bool {
    type_options(category).iter().any(|option| *option == value)
}

pub fn is_legal_activity(category: Category, selected_type: &str, value: &str) -> bool {
    activity_options(category, selected_type)
        .iter()
        .any(|option| *option == value)
}

pub fn is_legal_deliverable(category: Category, selected_type: &str, value: &str) -> bool {
    deliverable_options(category, selected_type)
        .iter()
        .any(|option| *option == value)
}

/// Who can see and respond to the posted project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyScope {
    AllExperts,
    InvitationOnly,
    InternalTeam,
}

impl PrivacyScope {
    pub const ALL: [PrivacyScope; 3] = [
        PrivacyScope::AllExperts,
        PrivacyScope::InvitationOnly,
        PrivacyScope::InternalTeam,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            PrivacyScope::AllExperts => "all_experts",
            PrivacyScope::InvitationOnly => "invitation_only",
            PrivacyScope::InternalTeam => "internal_team",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrivacyScope::AllExperts => "Visible to all experts",
            PrivacyScope::InvitationOnly => "Invitation only",
            PrivacyScope::InternalTeam => "Internal team",
        }
    }
}

/// How the engagement is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeType {
    Fixed,
    Hourly,
}

impl FeeType {
    pub fn wire_name(&self) -> &'static str {
        match self {
            FeeType::Fixed => "fixed",
            FeeType::Hourly => "hourly",
        }
    }
}

/// Whether the submitting party is invoiced as an individual or a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingType {
    Individual,
    Business,
}

impl BillingType {
    pub fn wire_name(&self) -> &'static str {
        match self {
            BillingType::Individual => "individual",
            BillingType::Business => "business",
        }
    }
}

impl Default for BillingType {
    fn default() -> Self {
        BillingType::Individual
    }
}

/// Unit for the writing-length requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Words,
    Pages,
}

impl LengthUnit {
    pub fn wire_name(&self) -> &'static str {
        match self {
            LengthUnit::Words => "words",
            LengthUnit::Pages => "pages",
        }
    }
}

/// When the client wants to start hiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiringTimeline {
    Immediately,
    WithinOneWeek,
    WithinTwoWeeks,
    WithinOneMonth,
    NotSureYet,
}

impl HiringTimeline {
    pub const ALL: [HiringTimeline; 5] = [
        HiringTimeline::Immediately,
        HiringTimeline::WithinOneWeek,
        HiringTimeline::WithinTwoWeeks,
        HiringTimeline::WithinOneMonth,
        HiringTimeline::NotSureYet,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            HiringTimeline::Immediately => "immediately",
            HiringTimeline::WithinOneWeek => "within_one_week",
            HiringTimeline::WithinTwoWeeks => "within_two_weeks",
            HiringTimeline::WithinOneMonth => "within_one_month",
            HiringTimeline::NotSureYet => "not_sure_yet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HiringTimeline::Immediately => "Immediately",
            HiringTimeline::WithinOneWeek => "Within one week",
            HiringTimeline::WithinTwoWeeks => "Within two weeks",
            HiringTimeline::WithinOneMonth => "Within a month",
            HiringTimeline::NotSureYet => "Not sure yet",
        }
    }
}

/// How the poster wants experts invited after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationPreference {
    TeamInvites,
    SelfInvite,
    InternalInvite,
}

impl InvitationPreference {
    pub fn wire_name(&self) -> &'static str {
        match self {
            InvitationPreference::TeamInvites => "team_invites",
            InvitationPreference::SelfInvite => "self_invite",
            InvitationPreference::InternalInvite => "internal_invite",
        }
    }
}

/// Selectable answers for the "what matters most" question. The final entry
/// is exclusive: choosing it alongside any other factor is rejected by
/// [`crate::validators::validate_important_factors`].
pub const IMPORTANT_FACTORS: &[&str] = &[
    "Proven track record",
    "Industry expertise",
    "Fast turnaround",
    "Budget fit",
    FACTOR_NONE_APPLY,
];

/// The exclusive "none" answer for important factors.
pub const FACTOR_NONE_APPLY: &str = "None of these apply";
