//! Contact form: field validation and the submit flow.
//!
//! `validate` is pure and independent of any catalog; it reports which rule
//! each field failed. `ContactForm` owns the form state for one rendered
//! form and drives submission through the injected collaborators, localizing
//! messages with the catalog it is given.

use crate::i18n::Catalog;
use crate::notify::{Notice, Notifier};
use crate::submission::{InFlight, Submitter};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Minimum trimmed length of a contact message, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Loose email check: something@something.something with no whitespace,
/// and no `@` in the local part or domain. Not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    });
    regex.is_match(email)
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl FromStr for ContactField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "message" => Ok(ContactField::Message),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: '{0}'")]
pub struct UnknownFieldError(pub String);

/// The first rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
pub enum ContactFieldError {
    #[error("field is required")]
    Required,
    #[error("email format is invalid")]
    InvalidFormat,
    #[error("message is too short")]
    TooShort,
}

impl ContactFieldError {
    /// Localized message for this error on `field`.
    pub fn message(&self, field: ContactField, catalog: &Catalog) -> &'static str {
        let text = &catalog.contact.validation;
        match (field, self) {
            (ContactField::Name, _) => text.name_required,
            (ContactField::Email, ContactFieldError::InvalidFormat) => text.email_invalid,
            (ContactField::Email, _) => text.email_required,
            (ContactField::Message, ContactFieldError::TooShort) => text.message_too_short,
            (ContactField::Message, _) => text.message_required,
        }
    }
}

/// Per-field validation result. Absent entries are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContactErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ContactFieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<ContactFieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ContactFieldError>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<ContactFieldError> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
        }
    }

    fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Message => self.message = None,
        }
    }

    /// Failed fields with their localized messages, in form order.
    pub fn messages(&self, catalog: &Catalog) -> Vec<(ContactField, &'static str)> {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .filter_map(|field| {
                self.get(field)
                    .map(|error| (field, error.message(field, catalog)))
            })
            .collect()
    }
}

/// Validate the contact form. Each field stops at its first failing rule.
pub fn validate(fields: &ContactFields) -> ContactErrors {
    ContactErrors {
        name: validate_name(&fields.name),
        email: validate_email(&fields.email),
        message: validate_message(&fields.message),
    }
}

fn validate_name(name: &str) -> Option<ContactFieldError> {
    if name.trim().is_empty() {
        return Some(ContactFieldError::Required);
    }
    None
}

fn validate_email(email: &str) -> Option<ContactFieldError> {
    if email.trim().is_empty() {
        return Some(ContactFieldError::Required);
    }
    if !is_valid_email(email) {
        return Some(ContactFieldError::InvalidFormat);
    }
    None
}

fn validate_message(message: &str) -> Option<ContactFieldError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Some(ContactFieldError::Required);
    }
    if trimmed.chars().count() < MIN_MESSAGE_CHARS {
        return Some(ContactFieldError::TooShort);
    }
    None
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// A submission was already in flight
    Busy,
    /// Client-side validation failed; see `ContactForm::errors`
    Invalid(ContactErrors),
    /// Delivered; the form has been reset
    Sent,
    /// The submitter rejected or failed; field values are kept
    Failed,
}

/// State of one rendered contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: ContactErrors,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &ContactErrors {
        &self.errors
    }

    /// True while a submission is awaiting the submitter; the send button
    /// is disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Record an edit. Clears the error shown for that field.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
        self.errors.clear(field);
    }

    /// Validate and, when valid, hand the fields to `submitter`.
    pub async fn submit(
        &mut self,
        submitter: &dyn Submitter,
        notifier: &dyn Notifier,
        catalog: &Catalog,
    ) -> ContactOutcome {
        if self.submitting {
            debug!("Contact submission already in flight");
            return ContactOutcome::Busy;
        }

        let notices = &catalog.contact.notices;

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            notifier.notify(Notice::destructive(
                notices.invalid_title,
                notices.invalid_description,
            ));
            return ContactOutcome::Invalid(self.errors);
        }

        let result = {
            let _in_flight = InFlight::start(&mut self.submitting);
            submitter
                .submit_contact(&self.fields, catalog.language)
                .await
        };

        match result {
            Ok(response) if response.is_success() => {
                info!("Contact form submitted");
                notifier.notify(Notice::info(notices.sent_title, notices.sent_description));
                self.fields = ContactFields::default();
                self.errors = ContactErrors::default();
                ContactOutcome::Sent
            }
            Ok(response) => {
                warn!(
                    "Contact submission rejected: {}",
                    response.errors.as_ref().map(|e| e.joined()).unwrap_or_default()
                );
                self.fail(notifier, catalog)
            }
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                self.fail(notifier, catalog)
            }
        }
    }

    fn fail(&self, notifier: &dyn Notifier, catalog: &Catalog) -> ContactOutcome {
        let notices = &catalog.contact.notices;
        notifier.notify(Notice::destructive(
            notices.failed_title,
            notices.failed_description,
        ));
        ContactOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{lookup, LanguageCode};
    use crate::notify::RecordingNotifier;
    use crate::submission::{SubmissionError, SubmissionErrors, SubmissionResponse};
    use crate::wizard::ProjectRequest;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::Mutex;

    /// Submitter answering every contact submission with a fixed result.
    struct FixedSubmitter {
        result: Result<SubmissionResponse, SubmissionError>,
        received: Mutex<Vec<ContactFields>>,
    }

    impl FixedSubmitter {
        fn new(result: Result<SubmissionResponse, SubmissionError>) -> Self {
            Self {
                result,
                received: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Submitter for FixedSubmitter {
        async fn submit_contact(
            &self,
            fields: &ContactFields,
            _language: LanguageCode,
        ) -> Result<SubmissionResponse, SubmissionError> {
            self.received.lock().unwrap().push(fields.clone());
            self.result.clone()
        }

        async fn submit_project(&self, _request: &ProjectRequest) -> Result<(), SubmissionError> {
            Ok(())
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Ana");
        form.set_field(ContactField::Email, "ana@example.com");
        form.set_field(ContactField::Message, "Necesito una aplicación web");
        form
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_validate_only_name_missing() {
        let errors = validate(&ContactFields::new("", "a@b.com", "1234567890"));

        assert_eq!(errors.name, Some(ContactFieldError::Required));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, None);
    }

    #[test]
    fn test_validate_bad_email_and_short_message() {
        let errors = validate(&ContactFields::new("Jo", "not-an-email", "short"));

        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some(ContactFieldError::InvalidFormat));
        assert_eq!(errors.message, Some(ContactFieldError::TooShort));
    }

    #[test]
    fn test_validate_whitespace_is_required() {
        let errors = validate(&ContactFields::new("   ", "\t", "  \n "));

        assert_eq!(errors.name, Some(ContactFieldError::Required));
        assert_eq!(errors.email, Some(ContactFieldError::Required));
        assert_eq!(errors.message, Some(ContactFieldError::Required));
    }

    #[test]
    fn test_validate_message_length_uses_trimmed_chars() {
        // 10 characters once trimmed, multibyte included
        let ok = validate(&ContactFields::new("Ana", "a@b.co", "  añoñoñoñoñ  "));
        assert_eq!(ok.message, None);

        let short = validate(&ContactFields::new("Ana", "a@b.co", "  123456789   "));
        assert_eq!(short.message, Some(ContactFieldError::TooShort));
    }

    #[test]
    fn test_validate_all_valid() {
        let errors = validate(&ContactFields::new("Ana", "ana@example.com", "Hola, quiero un sitio"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("x@y.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("x@y"));
        assert!(!is_valid_email("x@@y.com"));
        assert!(!is_valid_email("x y@z.com"));
        assert!(!is_valid_email("@y.com"));
        assert!(!is_valid_email("x@.com"));
    }

    #[test]
    fn test_error_messages_are_localized() {
        let errors = validate(&ContactFields::new("", "bad", "short"));

        let spanish = errors.messages(lookup(LanguageCode::Es));
        assert_eq!(spanish[0], (ContactField::Name, "El nombre es requerido"));
        assert_eq!(spanish[1], (ContactField::Email, "Email inválido"));

        let english = errors.messages(lookup(LanguageCode::En));
        assert_eq!(
            english[2],
            (ContactField::Message, "Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("email".parse::<ContactField>().unwrap(), ContactField::Email);
        assert!("phone".parse::<ContactField>().is_err());
    }

    proptest! {
        #[test]
        fn prop_fields_are_validated_independently(name in ".{0,20}", message in ".{0,30}") {
            let with_good_email = validate(&ContactFields::new(name.clone(), "a@b.com", message.clone()));
            let with_bad_email = validate(&ContactFields::new(name, "nope", message));

            prop_assert_eq!(with_good_email.name, with_bad_email.name);
            prop_assert_eq!(with_good_email.message, with_bad_email.message);
            prop_assert_eq!(with_good_email.email, None);
        }

        #[test]
        fn prop_long_messages_pass(message in "[a-z]{10,80}") {
            prop_assert_eq!(validate_message(&message), None);
        }

        #[test]
        fn prop_emails_with_whitespace_fail(local in "[a-z]{1,8}", domain in "[a-z]{1,8}") {
            let email = format!("{} {}@{}.com", local, local, domain);
            prop_assert!(!is_valid_email(&email));
        }
    }

    // ==================== ContactForm Tests ====================

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = ContactForm::new();
        form.errors = validate(form.fields());
        assert!(form.errors().name.is_some());

        form.set_field(ContactField::Name, "A");

        assert_eq!(form.errors().name, None);
        assert!(form.errors().email.is_some());
        assert!(form.errors().message.is_some());
    }

    #[tokio::test]
    async fn test_submit_invalid_does_not_call_submitter() {
        let submitter = FixedSubmitter::new(Ok(SubmissionResponse::accepted()));
        let notifier = RecordingNotifier::new();
        let mut form = ContactForm::new();
        form.set_field(ContactField::Email, "broken");

        let outcome = form
            .submit(&submitter, &notifier, lookup(LanguageCode::Es))
            .await;

        assert!(matches!(outcome, ContactOutcome::Invalid(_)));
        assert!(submitter.received.lock().unwrap().is_empty());
        assert_eq!(form.errors().email, Some(ContactFieldError::InvalidFormat));
        let notice = notifier.last().unwrap();
        assert!(notice.is_destructive());
        assert_eq!(notice.title, "Error en el formulario");
    }

    #[tokio::test]
    async fn test_submit_success_resets_form() {
        let submitter = FixedSubmitter::new(Ok(SubmissionResponse::accepted()));
        let notifier = RecordingNotifier::new();
        let mut form = filled_form();

        let outcome = form
            .submit(&submitter, &notifier, lookup(LanguageCode::En))
            .await;

        assert_eq!(outcome, ContactOutcome::Sent);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(submitter.received.lock().unwrap()[0].name, "Ana");

        let notice = notifier.last().unwrap();
        assert!(!notice.is_destructive());
        assert_eq!(notice.title, "Message sent!");
    }

    #[tokio::test]
    async fn test_submit_rejection_keeps_fields() {
        let errors = SubmissionErrors {
            name: vec!["too short".to_string()],
            ..Default::default()
        };
        let submitter = FixedSubmitter::new(Ok(SubmissionResponse::rejected(errors)));
        let notifier = RecordingNotifier::new();
        let mut form = filled_form();

        let outcome = form
            .submit(&submitter, &notifier, lookup(LanguageCode::Es))
            .await;

        assert_eq!(outcome, ContactOutcome::Failed);
        assert_eq!(form.fields().name, "Ana");
        assert!(form.errors().is_empty());
        assert_eq!(notifier.len(), 1);
        assert!(notifier.last().unwrap().is_destructive());
    }

    #[tokio::test]
    async fn test_submit_error_keeps_fields() {
        let submitter = FixedSubmitter::new(Err(SubmissionError::Unavailable(
            "offline".to_string(),
        )));
        let notifier = RecordingNotifier::new();
        let mut form = filled_form();

        let outcome = form
            .submit(&submitter, &notifier, lookup(LanguageCode::En))
            .await;

        assert_eq!(outcome, ContactOutcome::Failed);
        assert_eq!(form.fields().email, "ana@example.com");
        assert!(!form.is_submitting());
        assert_eq!(
            notifier.last().unwrap().description,
            "There was a problem sending the form. Please try again."
        );
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_busy() {
        let submitter = FixedSubmitter::new(Ok(SubmissionResponse::accepted()));
        let notifier = RecordingNotifier::new();
        let mut form = filled_form();
        form.submitting = true;

        let outcome = form
            .submit(&submitter, &notifier, lookup(LanguageCode::Es))
            .await;

        assert_eq!(outcome, ContactOutcome::Busy);
        assert!(submitter.received.lock().unwrap().is_empty());
        assert!(notifier.is_empty());
    }

    /// Submitter that never answers within a test's patience.
    struct StalledSubmitter;

    #[async_trait]
    impl Submitter for StalledSubmitter {
        async fn submit_contact(
            &self,
            _fields: &ContactFields,
            _language: LanguageCode,
        ) -> Result<SubmissionResponse, SubmissionError> {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            Ok(SubmissionResponse::accepted())
        }

        async fn submit_project(&self, _request: &ProjectRequest) -> Result<(), SubmissionError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_cancelled_submit_releases_form() {
        let notifier = RecordingNotifier::new();
        let mut form = filled_form();

        let cancelled = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            form.submit(&StalledSubmitter, &notifier, lookup(LanguageCode::Es)),
        )
        .await;
        assert!(cancelled.is_err());
        assert!(!form.is_submitting());

        let submitter = FixedSubmitter::new(Ok(SubmissionResponse::accepted()));
        let outcome = form
            .submit(&submitter, &notifier, lookup(LanguageCode::Es))
            .await;
        assert_eq!(outcome, ContactOutcome::Sent);
    }

    #[tokio::test]
    async fn test_submit_passes_catalog_language() {
        struct LanguageRecorder(Mutex<Option<LanguageCode>>);

        #[async_trait]
        impl Submitter for LanguageRecorder {
            async fn submit_contact(
                &self,
                _fields: &ContactFields,
                language: LanguageCode,
            ) -> Result<SubmissionResponse, SubmissionError> {
                *self.0.lock().unwrap() = Some(language);
                Ok(SubmissionResponse::accepted())
            }

            async fn submit_project(
                &self,
                _request: &ProjectRequest,
            ) -> Result<(), SubmissionError> {
                Ok(())
            }
        }

        let submitter = LanguageRecorder(Mutex::new(None));
        let mut form = filled_form();
        form.submit(&submitter, &RecordingNotifier::new(), lookup(LanguageCode::En))
            .await;

        assert_eq!(*submitter.0.lock().unwrap(), Some(LanguageCode::En));
    }
}
