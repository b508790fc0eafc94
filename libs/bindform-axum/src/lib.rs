//! axum glue: decode the query string and urlencoded body of a request into
//! [`RequestValues`], then bind them into a record.

mod rejection;

pub use rejection::BindRejection;

use axum::extract::{FromRequest, Query, Request};
use axum::http::{header, HeaderValue, Method};
use axum::Form;

use bindform::{bind_form, bind_post_form, FormValues, RequestValues};

const URLENCODED: &str = "application/x-www-form-urlencoded";

/// Decode query string and, for POST / PUT / PATCH with an urlencoded
/// content type, the body. Any other body is ignored and the body source
/// stays empty.
pub async fn parse_request<S>(mut req: Request, state: &S) -> Result<RequestValues, BindRejection>
where
    S: Send + Sync,
{
    let query = match req.uri().query() {
        Some(_) => {
            let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
                .map_err(|e| BindRejection::Query(e.body_text()))?;
            pairs.into_iter().collect()
        }
        None => FormValues::new(),
    };

    let body = if has_form_body(&req) {
        // Media types are case-insensitive; hand axum the canonical spelling.
        req.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(URLENCODED));
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|e| BindRejection::Body(e.body_text()))?;
        pairs.into_iter().collect()
    } else {
        FormValues::new()
    };

    tracing::trace!(query = query.len(), body = body.len(), "parsed form request");
    Ok(RequestValues::new(query, body))
}

fn has_form_body(req: &Request) -> bool {
    if ![Method::POST, Method::PUT, Method::PATCH].contains(req.method()) {
        return false;
    }
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(URLENCODED))
}

// ═══════════════════════════════════════════════════════════════
//  Extractors
// ═══════════════════════════════════════════════════════════════

/// Raw decoded values of the request, for handlers that bind themselves
/// (e.g. into a [`bindform::DynamicForm`]).
#[derive(Debug, Clone)]
pub struct FormInput(pub RequestValues);

impl<S> FromRequest<S> for FormInput
where
    S: Send + Sync,
{
    type Rejection = BindRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        parse_request(req, state).await.map(FormInput)
    }
}

/// `T` bound from body values, falling back to the query string per key.
#[derive(Debug, Clone)]
pub struct BindForm<T>(pub T);

impl<S, T> FromRequest<S> for BindForm<T>
where
    S: Send + Sync,
    T: bindform::Form + Default,
{
    type Rejection = BindRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let values = parse_request(req, state).await?;
        let mut record = T::default();
        bind_form(&values, &mut record)?;
        Ok(BindForm(record))
    }
}

/// `T` bound from submitted body values only.
#[derive(Debug, Clone)]
pub struct BindPostForm<T>(pub T);

impl<S, T> FromRequest<S> for BindPostForm<T>
where
    S: Send + Sync,
    T: bindform::Form + Default,
{
    type Rejection = BindRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let values = parse_request(req, state).await?;
        let mut record = T::default();
        bind_post_form(&values, &mut record)?;
        Ok(BindPostForm(record))
    }
}
