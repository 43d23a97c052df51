use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// A failure the dashboard cannot turn into a flash message.
///
/// Expected problems (bad uploads, unreachable collaborators) are reported on
/// the page instead; this only covers broken sessions and request plumbing.
#[derive(Debug, thiserror::Error)]
#[error("Unexpected failure while handling the request")]
pub struct UnexpectedError(#[from] anyhow::Error);

impl IntoResponse for UnexpectedError {
    fn into_response(self) -> Response {
        tracing::error!(error.cause_chain = ?self.0, error.message = %self.0, "{self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
