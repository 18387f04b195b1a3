//! HTTP surface for the static front end.
//!
//! Serves the translation catalogs and language metadata, keeps the
//! site-wide language preference, accepts contact and project submissions,
//! and publishes the web app manifest. Every route lives under the
//! configured base path. Submission outcomes are reported to the notifier
//! with the same notices the interactive forms show.

use crate::config::Config;
use crate::contact::{self, ContactField, ContactFields};
use crate::i18n::{lookup, LanguageCode, LanguageContext, LanguageRegistry};
use crate::manifest;
use crate::notify::{Notice, Notifier};
use crate::submission::{SubmissionErrors, SubmissionResponse, Submitter};
use crate::wizard::ProjectRequest;
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub language: LanguageContext,
    pub submitter: Arc<dyn Submitter>,
    pub notifier: Arc<dyn Notifier>,
}

#[derive(Debug, Deserialize)]
struct LanguageQuery {
    lang: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LanguageBody {
    code: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

pub fn router(state: AppState) -> Router {
    let base_path = state.config.base_path.clone();

    let routes = Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(languages))
        .route("/api/language", get(current_language).put(set_language))
        .route("/api/i18n/:code", get(catalog))
        .route("/api/contact", post(submit_contact))
        .route("/api/project", post(submit_project))
        .route("/manifest.webmanifest", get(web_manifest))
        .with_state(state);

    let app = if base_path.is_empty() {
        routes
    } else {
        Router::new().nest(&base_path, routes)
    };

    app.layer(TraceLayer::new_for_http())
}

/// Bind the configured port and serve until the process exits.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    info!("Listening on {}{}", addr, state.config.base_path);
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn languages() -> impl IntoResponse {
    Json(LanguageRegistry::get().list_all())
}

async fn current_language(State(state): State<AppState>) -> impl IntoResponse {
    Json(LanguageBody {
        code: state.language.code().to_string(),
    })
}

/// Unknown codes leave the preference untouched; the response always
/// carries the language now in effect.
async fn set_language(
    State(state): State<AppState>,
    Json(body): Json<LanguageBody>,
) -> impl IntoResponse {
    state.language.set_language(&body.code);
    Json(LanguageBody {
        code: state.language.code().to_string(),
    })
}

async fn catalog(Path(code): Path<String>) -> Response {
    match LanguageCode::from_code(&code) {
        Ok(code) => Json(lookup(code)).into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn submit_contact(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    Json(fields): Json<ContactFields>,
) -> Response {
    let language = resolve_language(&state, query.lang.as_deref());
    let catalog = lookup(language);
    let notices = &catalog.contact.notices;

    let errors = contact::validate(&fields);
    if !errors.is_empty() {
        state.notifier.notify(Notice::destructive(
            notices.invalid_title,
            notices.invalid_description,
        ));
        let mut rejected = SubmissionErrors::default();
        for (field, message) in errors.messages(catalog) {
            let target = match field {
                ContactField::Name => &mut rejected.name,
                ContactField::Email => &mut rejected.email,
                ContactField::Message => &mut rejected.message,
            };
            target.push(message.to_string());
        }
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmissionResponse::rejected(rejected)),
        )
            .into_response();
    }

    let result = state.submitter.submit_contact(&fields, language).await;
    let failed = Notice::destructive(notices.failed_title, notices.failed_description);
    match result {
        Ok(response) if response.is_success() => {
            state
                .notifier
                .notify(Notice::info(notices.sent_title, notices.sent_description));
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(response) => {
            state.notifier.notify(failed);
            (StatusCode::UNPROCESSABLE_ENTITY, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Contact submission failed: {}", e);
            state.notifier.notify(failed);
            form_error(notices.failed_description)
        }
    }
}

async fn submit_project(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    Json(request): Json<ProjectRequest>,
) -> Response {
    let language = resolve_language(&state, query.lang.as_deref());
    let text = &lookup(language).start_project;
    let validation = &text.validation;

    let gate = if request.name.is_empty() || request.email.is_empty() || request.company.is_empty()
    {
        Some(validation.required_fields)
    } else if !contact::is_valid_email(&request.email) {
        Some(validation.invalid_email)
    } else {
        None
    };
    if let Some(message) = gate {
        state.notifier.notify(Notice::destructive(message, message));
        return form_error_with_status(StatusCode::UNPROCESSABLE_ENTITY, message);
    }

    match state.submitter.submit_project(&request).await {
        Ok(()) => {
            state
                .notifier
                .notify(Notice::info(text.success.title, text.success.message));
            (StatusCode::OK, Json(SubmissionResponse::accepted())).into_response()
        }
        Err(e) => {
            warn!("Project submission failed: {}", e);
            state.notifier.notify(Notice::destructive(
                validation.submit_failed,
                validation.submit_failed,
            ));
            form_error(validation.submit_failed)
        }
    }
}

async fn web_manifest(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(axum::http::header::CONTENT_TYPE, "application/manifest+json")],
        Json(manifest::build(&state.config.base_path)),
    )
}

/// Explicit `?lang=` wins; otherwise the site-wide preference.
fn resolve_language(state: &AppState, requested: Option<&str>) -> LanguageCode {
    requested
        .and_then(|code| LanguageCode::from_code(code).ok())
        .unwrap_or_else(|| state.language.code())
}

fn form_error(message: &str) -> Response {
    form_error_with_status(StatusCode::SERVICE_UNAVAILABLE, message)
}

fn form_error_with_status(status: StatusCode, message: &str) -> Response {
    let response = SubmissionResponse::rejected(SubmissionErrors {
        form: vec![message.to_string()],
        ..Default::default()
    });
    (status, Json(response)).into_response()
}
