//! Submission collaborator for the contact form and the project wizard.
//!
//! The forms only see the `Submitter` trait. `SimulatedSubmitter` stands in
//! for a delivery backend: it applies the server-side contact schema, waits
//! a fixed delay, and accepts. Failure injection can be switched on to
//! exercise the error paths end to end.

use crate::config::Config;
use crate::contact::{is_valid_email, ContactFields, MIN_MESSAGE_CHARS};
use crate::i18n::{lookup, LanguageCode};
use crate::wizard::ProjectRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

/// Minimum name length enforced by the server-side schema, in characters.
pub const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

/// Field and form-level messages returned with a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionErrors {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub message: Vec<String>,
    #[serde(rename = "_form", default, skip_serializing_if = "Vec::is_empty")]
    pub form: Vec<String>,
}

impl SubmissionErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty() && self.form.is_empty()
    }

    /// Every message, comma separated.
    pub fn joined(&self) -> String {
        self.name
            .iter()
            .chain(&self.email)
            .chain(&self.message)
            .chain(&self.form)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result of a contact submission: `{"success": true}` or `{"errors": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<SubmissionErrors>,
}

impl SubmissionResponse {
    pub fn accepted() -> Self {
        Self {
            success: Some(true),
            errors: None,
        }
    }

    pub fn rejected(errors: SubmissionErrors) -> Self {
        Self {
            success: None,
            errors: Some(errors),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }
}

#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver a contact message. Validation problems come back as a
    /// rejected response with messages in `language`; transport problems
    /// as `Err`.
    async fn submit_contact(
        &self,
        fields: &ContactFields,
        language: LanguageCode,
    ) -> Result<SubmissionResponse, SubmissionError>;

    /// Deliver a project request from the wizard.
    async fn submit_project(&self, request: &ProjectRequest) -> Result<(), SubmissionError>;
}

/// Marks a form as submitting for as long as it lives. Dropping it, which
/// also happens when the submit future is cancelled, clears the flag.
pub(crate) struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    pub(crate) fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Delay-only stand-in for a delivery backend.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Duration::from_millis(config.submit_delay_ms))
            .with_failure(config.simulate_submit_failure)
    }

    /// Make every submission fail after the delay.
    pub fn with_failure(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    /// Server-side contact schema: name of at least two characters, a valid
    /// email, and a message of at least ten characters.
    pub fn check_contact(&self, fields: &ContactFields, language: LanguageCode) -> SubmissionErrors {
        let text = &lookup(language).contact.validation;
        let mut errors = SubmissionErrors::default();

        if fields.name.chars().count() < MIN_NAME_CHARS {
            errors.name.push(text.name_too_short.to_string());
        }
        if !is_valid_email(&fields.email) {
            errors.email.push(text.email_invalid.to_string());
        }
        if fields.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.message.push(text.message_too_short.to_string());
        }
        errors
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit_contact(
        &self,
        fields: &ContactFields,
        language: LanguageCode,
    ) -> Result<SubmissionResponse, SubmissionError> {
        let errors = self.check_contact(fields, language);
        if !errors.is_empty() {
            debug!("Contact submission failed schema: {}", errors.joined());
            return Ok(SubmissionResponse::rejected(errors));
        }

        sleep(self.delay).await;

        if self.fail {
            let form = lookup(language).contact.notices.failed_description;
            return Ok(SubmissionResponse::rejected(SubmissionErrors {
                form: vec![form.to_string()],
                ..Default::default()
            }));
        }

        info!("Simulated contact delivery for {}", fields.email);
        Ok(SubmissionResponse::accepted())
    }

    async fn submit_project(&self, request: &ProjectRequest) -> Result<(), SubmissionError> {
        sleep(self.delay).await;

        if self.fail {
            return Err(SubmissionError::Unavailable(
                "simulated failure".to_string(),
            ));
        }

        info!(
            "Simulated project request delivery for {} ({})",
            request.email, request.company
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Budget, ProjectType, Timeline};

    fn instant() -> SimulatedSubmitter {
        SimulatedSubmitter::new(Duration::ZERO)
    }

    fn project() -> ProjectRequest {
        ProjectRequest {
            name: "Ana".to_string(),
            email: "ana@acme.com".to_string(),
            company: "Acme".to_string(),
            project_type: ProjectType::Mobile,
            budget: Budget::Large,
            timeline: Timeline::Urgent,
        }
    }

    // ==================== Response Format Tests ====================

    #[test]
    fn test_accepted_serialization() {
        let json = serde_json::to_value(SubmissionResponse::accepted()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn test_rejected_serialization_uses_form_key() {
        let response = SubmissionResponse::rejected(SubmissionErrors {
            form: vec!["boom".to_string()],
            ..Default::default()
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "errors": { "_form": ["boom"] } }));
        assert!(!response.is_success());
    }

    #[test]
    fn test_joined_messages() {
        let errors = SubmissionErrors {
            name: vec!["a".to_string()],
            message: vec!["b".to_string()],
            ..Default::default()
        };
        assert_eq!(errors.joined(), "a, b");
    }

    // ==================== Schema Tests ====================

    #[test]
    fn test_schema_rejects_one_letter_name() {
        let errors = instant().check_contact(
            &ContactFields::new("J", "j@x.io", "1234567890"),
            LanguageCode::Es,
        );

        assert_eq!(errors.name, vec!["El nombre debe tener al menos 2 caracteres"]);
        assert!(errors.email.is_empty());
        assert!(errors.message.is_empty());
    }

    #[test]
    fn test_schema_messages_follow_language() {
        let errors = instant().check_contact(
            &ContactFields::new("Jo", "nope", "short"),
            LanguageCode::En,
        );

        assert_eq!(errors.email, vec!["Invalid email"]);
        assert_eq!(errors.message, vec!["Message must be at least 10 characters"]);
    }

    // ==================== Simulated Delivery Tests ====================

    #[tokio::test]
    async fn test_contact_accepted() {
        let response = instant()
            .submit_contact(
                &ContactFields::new("Jo", "jo@x.io", "Quiero una app móvil"),
                LanguageCode::Es,
            )
            .await
            .unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_contact_schema_rejection() {
        let response = instant()
            .submit_contact(
                &ContactFields::new("J", "jo@x.io", "Quiero una app móvil"),
                LanguageCode::Es,
            )
            .await
            .unwrap();

        assert!(!response.is_success());
        assert_eq!(response.errors.unwrap().name.len(), 1);
    }

    #[tokio::test]
    async fn test_contact_failure_injection() {
        let response = instant()
            .with_failure(true)
            .submit_contact(
                &ContactFields::new("Jo", "jo@x.io", "Quiero una app móvil"),
                LanguageCode::Es,
            )
            .await
            .unwrap();

        let errors = response.errors.expect("rejected");
        assert_eq!(errors.form.len(), 1);
        assert!(errors.name.is_empty());
    }

    #[tokio::test]
    async fn test_rejection_messages_follow_requested_language() {
        let submitter = instant();
        let fields = ContactFields::new("J", "jo@x.io", "We need a mobile app");

        let english = submitter
            .submit_contact(&fields, LanguageCode::En)
            .await
            .unwrap();
        let spanish = submitter
            .submit_contact(&fields, LanguageCode::Es)
            .await
            .unwrap();

        assert_eq!(
            english.errors.unwrap().name,
            vec!["Name must be at least 2 characters"]
        );
        assert_eq!(
            spanish.errors.unwrap().name,
            vec!["El nombre debe tener al menos 2 caracteres"]
        );
    }

    #[tokio::test]
    async fn test_project_accepted() {
        assert_eq!(instant().submit_project(&project()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_project_failure_injection() {
        let result = instant().with_failure(true).submit_project(&project()).await;
        assert!(matches!(result, Err(SubmissionError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_delay_is_awaited() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(30));
        let started = std::time::Instant::now();

        submitter.submit_project(&project()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
