//! Handlers for visitor redirection.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::api::dto::redirect::{TestRedirectRequest, TestRedirectResponse};
use crate::application::services::RedirectDecision;
use crate::error::AppError;
use crate::state::AppState;

/// Routes a visitor from a transit url+path to a healthy landing domain.
///
/// # Endpoint
///
/// `GET /{any-path}` - everything not claimed by the management API.
///
/// # Request Flow
///
/// 1. Reject management paths and blocklisted User-Agents
/// 2. Match `(host without port, path)` against safe transit domains
/// 3. Pick one safe landing domain of the group uniformly at random
/// 4. Serve a client-side navigation page carrying the target URL
///
/// The page navigates via meta refresh and JS rather than an HTTP Location
/// header; the target URL is present in the body as a literal string, so a
/// plain HTTP client can still extract it.
pub async fn redirect_handler(
    Path(path): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let host = header_str(&headers, header::HOST);
    let user_agent = header_str(&headers, header::USER_AGENT);

    let decision = state
        .resolver_service
        .resolve(host, &path, user_agent)
        .await?;

    match decision {
        RedirectDecision::Redirect { target } => Ok(Html(navigation_page(&target)).into_response()),
        RedirectDecision::Reject(reason) => {
            debug!(host, path, reason = reason.code(), "redirect rejected");
            Ok((StatusCode::NOT_FOUND, reason.message()).into_response())
        }
    }
}

/// Dry-run resolution for the admin UI.
///
/// # Endpoint
///
/// `POST /api/test_redirect`
///
/// Matches the transit row regardless of its health and skips the bot/admin
/// filters, then selects among safe landing domains like the live path.
pub async fn test_redirect_handler(
    State(state): State<AppState>,
    Json(payload): Json<TestRedirectRequest>,
) -> Result<Json<TestRedirectResponse>, AppError> {
    let preview = state
        .resolver_service
        .preview(&payload.url, &payload.path)
        .await?;

    Ok(Json(TestRedirectResponse {
        status: "success",
        landing_url: preview.landing_url,
        group_name: preview.group_name,
    }))
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Interstitial page delivering the destination client-side.
fn navigation_page(target: &str) -> String {
    format!(
        r#"<html>
    <head>
        <title>Loading...</title>
        <meta http-equiv="refresh" content="0;url={target}" />
    </head>
    <body>
        <p>Loading, please wait...</p>
        <script type="text/javascript">
            window.location.href = "{target}";
        </script>
    </body>
</html>
"#
    )
}
