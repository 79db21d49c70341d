//! REST API helpers for the portfolio backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning the generic error, since the portfolio API is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses are logged with distinguishing
//! detail, then collapsed into the opaque [`ApiError`]. Callers observe only
//! success vs failure and render the one generic message; they never retry
//! automatically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Project, Rating};

// TODO: Replace READONLY with the key issued for your deployment.
const API_KEY: &str = "READONLY";
const API_KEY_HEADER: &str = "x-api-key";
const BASE_URL: &str = "https://caswell.dev/api";

/// Opaque user-facing API error. All failure causes collapse into this one
/// value; the distinction between them is diagnostic-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Something bad happened; please try again later.")]
pub struct ApiError;

/// Internal failure taxonomy, used only for logging before the cause is
/// collapsed into [`ApiError`].
#[derive(Debug, thiserror::Error)]
enum ApiFailure {
    #[error("{0}")]
    Network(String),
    #[error("backend returned code {status}, body was: {body}")]
    Status { status: u16, body: String },
}

/// Log the underlying failure, then hand back the generic error.
fn normalize(cause: &ApiFailure) -> ApiError {
    match cause {
        ApiFailure::Network(_) => leptos::logging::error!("An error occurred: {cause}"),
        ApiFailure::Status { .. } => leptos::logging::error!("{cause}"),
    }
    ApiError
}

fn projects_url() -> String {
    format!("{BASE_URL}/projects")
}

fn rating_url(project_id: i64) -> String {
    format!("{BASE_URL}/projects/{project_id}/rating")
}

/// Fetch the current project list from `GET {base}/projects`.
///
/// Single-shot: no retry, no caching, no timeout. A hung request simply
/// never resolves.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx response.
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&projects_url())
            .header(API_KEY_HEADER, API_KEY)
            .send()
            .await
            .map_err(|e| normalize(&ApiFailure::Network(e.to_string())))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(normalize(&ApiFailure::Status {
                status: resp.status(),
                body,
            }));
        }
        resp.json::<Vec<Project>>()
            .await
            .map_err(|e| normalize(&ApiFailure::Network(e.to_string())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError)
    }
}

/// Submit a rating for a project via `POST {base}/projects/{id}/rating`.
///
/// Success carries no payload beyond success; the response body is not
/// consumed.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx response.
pub async fn submit_rating(project_id: i64, rating: &Rating) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&rating_url(project_id))
            .header(API_KEY_HEADER, API_KEY)
            .json(rating)
            .map_err(|e| normalize(&ApiFailure::Network(e.to_string())))?
            .send()
            .await
            .map_err(|e| normalize(&ApiFailure::Network(e.to_string())))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(normalize(&ApiFailure::Status {
                status: resp.status(),
                body,
            }));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, rating);
        Err(ApiError)
    }
}
