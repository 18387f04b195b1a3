//! "Start a project" wizard: lead info, project details, confirmation.
//!
//! Each forward transition is gated. Step 1 needs name, email and company
//! with a well-formed email; step 2 needs a project type, budget and
//! timeline, then awaits the submitter before landing on the confirmation
//! step. Entered values survive `back` and closing the dialog midway; only
//! closing from the confirmation step clears them, after a short delay that
//! lets the closing animation finish.

use crate::config::Config;
use crate::contact::is_valid_email;
use crate::i18n::Catalog;
use crate::notify::{Notice, Notifier};
use crate::submission::{InFlight, SubmissionError, Submitter};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Delay between closing the confirmation step and clearing the form.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option '{value}' for {field}")]
pub struct UnknownOptionError {
    pub field: &'static str,
    pub value: String,
}

// ==================== Select Options ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Web,
    Mobile,
    Software,
    Ai,
    Cloud,
    Consulting,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Web,
        ProjectType::Mobile,
        ProjectType::Software,
        ProjectType::Ai,
        ProjectType::Cloud,
        ProjectType::Consulting,
    ];

    /// Form value of the option.
    pub fn value(&self) -> &'static str {
        match self {
            ProjectType::Web => "web",
            ProjectType::Mobile => "mobile",
            ProjectType::Software => "software",
            ProjectType::Ai => "ai",
            ProjectType::Cloud => "cloud",
            ProjectType::Consulting => "consulting",
        }
    }

    pub fn label(&self, catalog: &Catalog) -> &'static str {
        let labels = &catalog.start_project.step2.project_types;
        match self {
            ProjectType::Web => labels.web,
            ProjectType::Mobile => labels.mobile,
            ProjectType::Software => labels.software,
            ProjectType::Ai => labels.ai,
            ProjectType::Cloud => labels.cloud,
            ProjectType::Consulting => labels.consulting,
        }
    }
}

impl FromStr for ProjectType {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|option| option.value() == s)
            .ok_or_else(|| UnknownOptionError {
                field: "projectType",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl Budget {
    pub const ALL: [Budget; 4] = [Budget::Small, Budget::Medium, Budget::Large, Budget::Enterprise];

    pub fn value(&self) -> &'static str {
        match self {
            Budget::Small => "small",
            Budget::Medium => "medium",
            Budget::Large => "large",
            Budget::Enterprise => "enterprise",
        }
    }

    pub fn label(&self, catalog: &Catalog) -> &'static str {
        let labels = &catalog.start_project.step2.budgets;
        match self {
            Budget::Small => labels.small,
            Budget::Medium => labels.medium,
            Budget::Large => labels.large,
            Budget::Enterprise => labels.enterprise,
        }
    }
}

impl FromStr for Budget {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Budget::ALL
            .into_iter()
            .find(|option| option.value() == s)
            .ok_or_else(|| UnknownOptionError {
                field: "budget",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Urgent,
    Short,
    Medium,
    Long,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::Urgent,
        Timeline::Short,
        Timeline::Medium,
        Timeline::Long,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Timeline::Urgent => "urgent",
            Timeline::Short => "short",
            Timeline::Medium => "medium",
            Timeline::Long => "long",
        }
    }

    pub fn label(&self, catalog: &Catalog) -> &'static str {
        let labels = &catalog.start_project.step2.timelines;
        match self {
            Timeline::Urgent => labels.urgent,
            Timeline::Short => labels.short,
            Timeline::Medium => labels.medium,
            Timeline::Long => labels.long,
        }
    }
}

impl FromStr for Timeline {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeline::ALL
            .into_iter()
            .find(|option| option.value() == s)
            .ok_or_else(|| UnknownOptionError {
                field: "timeline",
                value: s.to_string(),
            })
    }
}

/// Parse a select value; the empty option means "nothing selected".
fn parse_select<T: FromStr<Err = UnknownOptionError>>(
    value: &str,
) -> Result<Option<T>, UnknownOptionError> {
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}

// ==================== Wizard State ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    #[default]
    LeadInfo,
    ProjectDetails,
    Confirmation,
}

impl WizardStep {
    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::LeadInfo => 1,
            WizardStep::ProjectDetails => 2,
            WizardStep::Confirmation => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardField {
    Name,
    Email,
    Company,
    ProjectType,
    Budget,
    Timeline,
}

impl FromStr for WizardField {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(WizardField::Name),
            "email" => Ok(WizardField::Email),
            "company" => Ok(WizardField::Company),
            "projectType" => Ok(WizardField::ProjectType),
            "budget" => Ok(WizardField::Budget),
            "timeline" => Ok(WizardField::Timeline),
            other => Err(UnknownOptionError {
                field: "field",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project_type: Option<ProjectType>,
    pub budget: Option<Budget>,
    pub timeline: Option<Timeline>,
}

/// A complete project request, as handed to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project_type: ProjectType,
    pub budget: Budget,
    pub timeline: Timeline,
}

/// Why a gate refused to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardGate {
    #[error("all fields of the step are required")]
    RequiredFields,
    #[error("email is not valid")]
    InvalidEmail,
}

impl WizardGate {
    pub fn message(&self, catalog: &Catalog) -> &'static str {
        let text = &catalog.start_project.validation;
        match self {
            WizardGate::RequiredFields => text.required_fields,
            WizardGate::InvalidEmail => text.invalid_email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Gate(#[from] WizardGate),

    #[error("transition not available from step {}", .0.number())]
    WrongStep(WizardStep),

    #[error("a submission is already in flight")]
    Busy,

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// State of the wizard dialog.
#[derive(Debug, Clone)]
pub struct ProjectWizard {
    step: WizardStep,
    fields: WizardFields,
    submitting: bool,
    open: bool,
    reset_delay: Duration,
    pending_reset: Option<Instant>,
}

impl Default for ProjectWizard {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

impl ProjectWizard {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            step: WizardStep::LeadInfo,
            fields: WizardFields::default(),
            submitting: false,
            open: false,
            reset_delay,
            pending_reset: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Duration::from_millis(config.wizard_reset_delay_ms))
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn fields(&self) -> &WizardFields {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dialog. A reset scheduled by a previous close is applied
    /// first, so the dialog never shows the stale confirmation step.
    pub fn open(&mut self) {
        if self.pending_reset.take().is_some() {
            self.reset();
        }
        self.open = true;
    }

    /// Close the dialog. Only the confirmation step schedules a reset.
    pub fn close(&mut self, now: Instant) {
        self.open = false;
        if self.step == WizardStep::Confirmation {
            debug!("Wizard reset scheduled in {:?}", self.reset_delay);
            self.pending_reset = Some(now + self.reset_delay);
        }
    }

    /// Apply a scheduled reset once it is due. Returns true if it ran.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.pending_reset {
            Some(due) if now >= due => {
                self.pending_reset = None;
                self.reset();
                true
            }
            _ => false,
        }
    }

    fn reset(&mut self) {
        self.step = WizardStep::LeadInfo;
        self.fields = WizardFields::default();
    }

    /// Record an edit from a text input or select. Select fields take the
    /// option value, with "" meaning no selection.
    pub fn set_field(&mut self, field: WizardField, value: &str) -> Result<(), UnknownOptionError> {
        match field {
            WizardField::Name => self.fields.name = value.to_string(),
            WizardField::Email => self.fields.email = value.to_string(),
            WizardField::Company => self.fields.company = value.to_string(),
            WizardField::ProjectType => self.fields.project_type = parse_select(value)?,
            WizardField::Budget => self.fields.budget = parse_select(value)?,
            WizardField::Timeline => self.fields.timeline = parse_select(value)?,
        }
        Ok(())
    }

    pub fn select_project_type(&mut self, option: Option<ProjectType>) {
        self.fields.project_type = option;
    }

    pub fn select_budget(&mut self, option: Option<Budget>) {
        self.fields.budget = option;
    }

    pub fn select_timeline(&mut self, option: Option<Timeline>) {
        self.fields.timeline = option;
    }

    /// Leave the lead info step once its gate passes.
    pub fn next(
        &mut self,
        notifier: &dyn Notifier,
        catalog: &Catalog,
    ) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::LeadInfo {
            return Err(WizardError::WrongStep(self.step));
        }

        if let Err(gate) = self.lead_gate() {
            debug!("Wizard step 1 gate failed: {}", gate);
            notify_gate(notifier, catalog, gate);
            return Err(gate.into());
        }

        self.step = WizardStep::ProjectDetails;
        Ok(self.step)
    }

    /// Return from project details to lead info, keeping every value.
    pub fn back(&mut self) -> WizardStep {
        if self.step == WizardStep::ProjectDetails && !self.submitting {
            self.step = WizardStep::LeadInfo;
        }
        self.step
    }

    /// Submit from the project details step once its gate passes.
    pub async fn submit(
        &mut self,
        submitter: &dyn Submitter,
        notifier: &dyn Notifier,
        catalog: &Catalog,
    ) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::ProjectDetails {
            return Err(WizardError::WrongStep(self.step));
        }
        if self.submitting {
            return Err(WizardError::Busy);
        }

        let request = match self.details_gate() {
            Ok(request) => request,
            Err(gate) => {
                debug!("Wizard step 2 gate failed: {}", gate);
                notify_gate(notifier, catalog, gate);
                return Err(gate.into());
            }
        };

        let result = {
            let _in_flight = InFlight::start(&mut self.submitting);
            submitter.submit_project(&request).await
        };

        let text = &catalog.start_project;
        match result {
            Ok(()) => {
                info!(
                    "Project request submitted ({}, {}, {})",
                    request.project_type.value(),
                    request.budget.value(),
                    request.timeline.value()
                );
                self.step = WizardStep::Confirmation;
                notifier.notify(Notice::info(text.success.title, text.success.message));
                Ok(self.step)
            }
            Err(e) => {
                warn!("Project request failed: {}", e);
                notifier.notify(Notice::destructive(
                    text.validation.submit_failed,
                    text.validation.submit_failed,
                ));
                Err(e.into())
            }
        }
    }

    fn lead_gate(&self) -> Result<(), WizardGate> {
        let fields = &self.fields;
        if fields.name.is_empty() || fields.email.is_empty() || fields.company.is_empty() {
            return Err(WizardGate::RequiredFields);
        }
        if !is_valid_email(&fields.email) {
            return Err(WizardGate::InvalidEmail);
        }
        Ok(())
    }

    fn details_gate(&self) -> Result<ProjectRequest, WizardGate> {
        let fields = &self.fields;
        match (fields.project_type, fields.budget, fields.timeline) {
            (Some(project_type), Some(budget), Some(timeline)) => Ok(ProjectRequest {
                name: fields.name.clone(),
                email: fields.email.clone(),
                company: fields.company.clone(),
                project_type,
                budget,
                timeline,
            }),
            _ => Err(WizardGate::RequiredFields),
        }
    }
}

fn notify_gate(notifier: &dyn Notifier, catalog: &Catalog, gate: WizardGate) {
    let message = gate.message(catalog);
    notifier.notify(Notice::destructive(message, message));
}
