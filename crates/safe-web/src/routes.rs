//! Request handlers: listing, submission, and deletion.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Form, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use safe_core::i18n::Lang;
use safe_core::listing::{ListQuery, Page};
use safe_core::status::parse_record_id;
use safe_core::submission::Submission;
use serde::Deserialize;

use crate::client_addr::ClientAddr;
use crate::error::AppError;
use crate::render::{PageView, render_page};
use crate::state::AppState;

/// Query parameters of the listing page. All optional, all untrusted.
#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    pub lang: Option<String>,
    pub admin: Option<String>,
    pub q: Option<String>,
    pub p: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LangParam {
    pub lang: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    pub name: Option<String>,
    pub id_number: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub form_lang: Option<String>,
}

impl SubmitForm {
    fn into_submission(self) -> Submission {
        Submission {
            name: self.name,
            id_number: self.id_number,
            location: self.location,
            status: self.status,
            message: self.message,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    pub id: Option<String>,
    pub admin_token: Option<String>,
    pub form_lang: Option<String>,
}

/// Listing and presentation. Serves every request not routed elsewhere.
///
/// A store failure still yields a 200 page with the `err_db` banner.
pub async fn index_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<IndexParams>, QueryRejection>,
) -> Html<String> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let lang = Lang::resolve([params.lang.as_deref()], state.board.default_lang);
    let t = lang.strings();
    let query = ListQuery::from_params(params.q.as_deref(), params.p.as_deref());

    let admin_token = params
        .admin
        .as_deref()
        .filter(|&token| state.guard.is_admin_view(Some(token)));

    let (page, error) = match state.service.list_statuses(&query).await {
        Ok(page) => (page, None),
        Err(error) => {
            tracing::error!(%error, page = query.page(), "failed to list status records");
            (Page::empty(query.page()), Some(t.err_db))
        }
    };

    Html(render_page(&PageView {
        lang,
        event: &state.board.event,
        page: &page,
        search: query.search().unwrap_or_default(),
        error,
        admin_token,
        utc_offset: state.board.utc_offset,
    }))
}

/// `POST /update`: validate and store one check-in, then redirect to the listing.
///
/// # Errors
///
/// `400` with `err_req` when a required field is blank; `500` when the insert fails.
pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangParam>,
    ClientAddr(ip): ClientAddr,
    Form(form): Form<SubmitForm>,
) -> Result<Response, AppError> {
    let lang = Lang::resolve(
        [form.form_lang.as_deref(), query.lang.as_deref()],
        state.board.default_lang,
    );
    let t = lang.strings();

    let new = form.into_submission().validate(ip).map_err(|error| {
        tracing::debug!(%error, "submission rejected");
        AppError::from_core(&error, t)
    })?;

    state
        .service
        .submit_status(&new)
        .await
        .map_err(|source| {
            tracing::error!(error = %source, "failed to save status record");
            AppError::Store {
                context: t.err_save,
                source,
            }
        })?;

    Ok(redirect(&format!("/?lang={}", lang.code())))
}

/// `POST /delete`: authorize, then delete one record and return to the admin view.
///
/// The token comes from the `admin_token` form field, or failing that from an
/// `Authorization: Bearer` header. Authorization is checked before the id.
///
/// # Errors
///
/// `403` with `err_auth` on a bad or absent token; `400` with `err_id` on a
/// missing or malformed id; `500` when the delete fails.
pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangParam>,
    headers: HeaderMap,
    Form(form): Form<DeleteForm>,
) -> Result<Response, AppError> {
    let lang = Lang::resolve(
        [form.form_lang.as_deref(), query.lang.as_deref()],
        state.board.default_lang,
    );
    let t = lang.strings();

    let submitted = form
        .admin_token
        .as_deref()
        .filter(|token| !token.is_empty())
        .or_else(|| bearer_token(&headers));

    tracing::info!(
        submitted = if submitted.is_some() { "provided" } else { "missing" },
        configured = if state.guard.is_configured() { "set" } else { "MISSING" },
        "delete requested"
    );

    let grant = state.guard.authorize(submitted).map_err(|error| {
        tracing::warn!("delete rejected: admin token did not match");
        AppError::from_core(&error, t)
    })?;

    let id = parse_record_id(form.id.as_deref()).map_err(|error| {
        tracing::debug!(%error, "delete rejected");
        AppError::from_core(&error, t)
    })?;

    state
        .service
        .delete_status(&grant, id)
        .await
        .map_err(|source| {
            tracing::error!(id, error = %source, "failed to delete status record");
            AppError::Store {
                context: t.err_delete,
                source,
            }
        })?;

    Ok(redirect(&format!(
        "/?lang={}&admin={}",
        lang.code(),
        urlencoding::encode(grant.token())
    )))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_requires_scheme_and_value() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer s3cret"));
        assert_eq!(bearer_token(&headers), Some("s3cret"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic s3cret"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn redirect_is_302_with_location() {
        let response = redirect("/?lang=en");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/?lang=en"
        );
    }
}
