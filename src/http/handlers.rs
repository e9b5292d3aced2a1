//! Request handlers for the diagnostic endpoints.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::http::server::AppState;
use crate::inspect::{env, secrets};
use crate::render::Table;

/// Catch-all handler. Anything that is not `/env` or `/secrets` lands here.
///
/// Always answers `200 OK`, which doubles as the health endpoint.
pub async fn default_handler(uri: Uri) -> impl IntoResponse {
    tracing::info!(path = %uri, "Received request");
    (StatusCode::OK, "OK")
}

/// Render the process environment as an HTML table.
pub async fn env_handler(uri: Uri) -> Html<String> {
    tracing::info!(path = %uri, "Received request");

    let mut table = Table::titled("Environment");
    for entry in env::snapshot() {
        table.row(entry.key, entry.value);
    }

    Html(table.to_html())
}

/// Render mounted secrets as an HTML table.
///
/// An unlistable secrets root is degraded mode, not a failure: the mount may
/// legitimately be absent, so the raw error text becomes the body and the
/// request still completes. The table is rendered exactly once, after the
/// full secret list is assembled.
pub async fn secrets_handler(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::info!(path = %uri, "Received request");

    match secrets::read_all(&state.config.secrets_root) {
        Ok(list) => {
            let mut table = Table::titled("Secrets");
            for secret in list {
                table.row(secret.name, secret.value);
            }
            Html(table.to_html()).into_response()
        }
        Err(err) => {
            tracing::warn!(
                root = %state.config.secrets_root.display(),
                error = %err,
                "Secrets root not listable"
            );
            err.to_string().into_response()
        }
    }
}
