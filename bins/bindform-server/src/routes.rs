use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use bindform::{bind, DynamicForm, Form, FormSchema};
use bindform_axum::{BindPostForm, BindRejection, FormInput};

use crate::config::SourceKind;

/// A config-declared form, resolved once at startup.
#[derive(Debug)]
pub struct FormEntry {
    pub schema: Arc<FormSchema>,
    pub source: SourceKind,
}

#[derive(Clone)]
pub struct AppState {
    pub forms: Arc<HashMap<String, FormEntry>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/forms/{name}", get(handle_bind_form).post(handle_bind_form))
        .route("/contact", post(handle_contact))
        .with_state(state)
}

// ═══════════════════════════════════════════════════════════════
//  GET|POST /forms/{name}
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_bind_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
    FormInput(values): FormInput,
) -> Response {
    let Some(entry) = state.forms.get(&name) else {
        return (StatusCode::NOT_FOUND, format!("form '{name}' not found")).into_response();
    };

    let mut form = DynamicForm::new(entry.schema.clone());
    let result = match entry.source {
        SourceKind::Combined => bind(&values.combined(), &mut form),
        SourceKind::Body => bind(&values.body_only(), &mut form),
    };

    match result {
        Ok(()) => {
            tracing::debug!(form = %name, "bound form");
            Json(form).into_response()
        }
        Err(e) => BindRejection::from(e).into_response(),
    }
}

// ═══════════════════════════════════════════════════════════════
//  POST /contact
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Form, serde::Serialize)]
pub(crate) struct ContactForm {
    #[form("name")]
    name: String,
    #[form("email")]
    email: String,
    #[form("message")]
    message: String,
}

pub(crate) async fn handle_contact(BindPostForm(form): BindPostForm<ContactForm>) -> Json<ContactForm> {
    tracing::info!(name = %form.name, email = %form.email, "contact form received");
    Json(form)
}
