//! Catalog types: the shape of all user-facing copy on the landing page.
//!
//! Each language fills in the same `Catalog` struct, so a language with a
//! missing entry does not compile. Catalogs serialize to JSON with the
//! camelCase key tree the front end reads (`header.services`,
//! `startProject.step2.projectTypes.web`, ...).

use crate::i18n::strings::{ENGLISH, SPANISH};
use crate::i18n::LanguageCode;
use serde::Serialize;

/// All UI text for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Language this catalog is written in; not part of the JSON tree
    #[serde(skip)]
    pub language: LanguageCode,
    pub header: HeaderText,
    pub hero: HeroText,
    pub services: ServicesText,
    pub about: AboutText,
    pub projects: ProjectsText,
    pub contact: ContactText,
    pub footer: FooterText,
    pub start_project: StartProjectText,
}

/// Resolve the catalog for a language. Total over `LanguageCode`.
pub fn lookup(code: LanguageCode) -> &'static Catalog {
    match code {
        LanguageCode::Es => &SPANISH,
        LanguageCode::En => &ENGLISH,
    }
}

// ==================== Page Sections ====================

/// Navigation bar labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderText {
    pub services: &'static str,
    pub projects: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
    pub start: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroText {
    pub tagline: &'static str,
    pub title: HeroTitle,
    pub description: &'static str,
    pub services: &'static str,
    pub contact_us: &'static str,
}

/// Hero headline, split so the highlighted phrase can be styled on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroTitle {
    pub part1: &'static str,
    pub highlight: &'static str,
    pub part2: &'static str,
}

/// Title and blurb of a service or project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardText {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub learn_more: &'static str,
    pub items: ServiceItems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItems {
    pub web_dev: CardText,
    pub mobile_dev: CardText,
    pub software_dev: CardText,
    pub ai_ml: CardText,
    pub cloud_services: CardText,
    pub consulting: CardText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutText {
    pub tagline: &'static str,
    pub title: &'static str,
    pub description1: &'static str,
    pub description2: &'static str,
    /// Bullet points, rendered in order
    pub points: &'static [&'static str],
    pub learn_more: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsText {
    pub tagline: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub view_project: &'static str,
    pub items: ProjectItems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItems {
    pub ecommerce: CardText,
    pub health_app: CardText,
    pub finance_dashboard: CardText,
    pub ai_generator: CardText,
}

// ==================== Contact Section ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactText {
    pub tagline: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub form: ContactFormText,
    pub validation: ContactValidationText,
    pub notices: ContactNoticeText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormText {
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub message_placeholder: &'static str,
}

/// Messages shown under individual contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactValidationText {
    pub name_required: &'static str,
    pub name_too_short: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub message_required: &'static str,
    pub message_too_short: &'static str,
}

/// Notices raised by the contact form submit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactNoticeText {
    pub invalid_title: &'static str,
    pub invalid_description: &'static str,
    pub sent_title: &'static str,
    pub sent_description: &'static str,
    pub failed_title: &'static str,
    pub failed_description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterText {
    pub description: &'static str,
    pub company: &'static str,
    pub services: &'static str,
    pub legal: &'static str,
    pub about: &'static str,
    pub careers: &'static str,
    pub blog: &'static str,
    pub web_dev: &'static str,
    pub mobile_dev: &'static str,
    pub ai_ml: &'static str,
    pub terms: &'static str,
    pub privacy: &'static str,
    pub cookies: &'static str,
    pub rights: &'static str,
}

// ==================== Start Project Wizard ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartProjectText {
    pub step1: LeadStepText,
    pub step2: DetailsStepText,
    pub step3: ConfirmationStepText,
    pub buttons: WizardButtonText,
    pub validation: WizardValidationText,
    pub success: WizardSuccessText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStepText {
    pub title: &'static str,
    pub description: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub company: &'static str,
    pub company_placeholder: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsStepText {
    pub title: &'static str,
    pub description: &'static str,
    pub project_type: &'static str,
    pub budget: &'static str,
    pub timeline: &'static str,
    pub project_types: ProjectTypeText,
    pub budgets: BudgetText,
    pub timelines: TimelineText,
}

/// Labels for the project type select; `select` is the empty option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypeText {
    pub select: &'static str,
    pub web: &'static str,
    pub mobile: &'static str,
    pub software: &'static str,
    pub ai: &'static str,
    pub cloud: &'static str,
    pub consulting: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetText {
    pub select: &'static str,
    pub small: &'static str,
    pub medium: &'static str,
    pub large: &'static str,
    pub enterprise: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineText {
    pub select: &'static str,
    pub urgent: &'static str,
    pub short: &'static str,
    pub medium: &'static str,
    pub long: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationStepText {
    pub title: &'static str,
    pub description: &'static str,
    pub thank_you: &'static str,
    pub message: &'static str,
    pub close: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardButtonText {
    pub next: &'static str,
    pub back: &'static str,
    pub submit: &'static str,
    pub processing: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardValidationText {
    pub required_fields: &'static str,
    pub invalid_email: &'static str,
    pub submit_failed: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSuccessText {
    pub title: &'static str,
    pub message: &'static str,
}
