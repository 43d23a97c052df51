use super::TypedSession;
use crate::utils::UnexpectedError;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Lets the request through only when the session finished voice onboarding;
/// everyone else is sent back to the dashboard.
#[tracing::instrument(name = "Check onboarding", skip_all)]
pub async fn require_onboarded(
    session: TypedSession,
    request: Request,
    next: Next,
) -> Result<Response, UnexpectedError> {
    let context = session.context().await?;

    let Some(name) = context.onboarding.user_name() else {
        tracing::info!(path = request.uri().path(), "Session has not been onboarded");
        return Ok(Redirect::to("/").into_response());
    };
    tracing::debug!(user_id = %name.user_id(), "Session is onboarded");

    Ok(next.run(request).await)
}
