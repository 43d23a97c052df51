mod context;
mod middleware;

pub use context::{Answer, SessionContext};
pub use middleware::require_onboarded;

use anyhow::{Context, Error};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use tower_sessions::Session;

/// Browser session holding a [`SessionContext`].
pub struct TypedSession(Session);

impl TypedSession {
    const CONTEXT_KEY: &'static str = "context";

    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// The stored context, or a fresh one for a new session.
    pub async fn context(&self) -> Result<SessionContext, Error> {
        let context = self
            .0
            .get(Self::CONTEXT_KEY)
            .await
            .context("Failed to retrieve context from session")?;

        Ok(context.unwrap_or_default())
    }

    pub async fn save_context(&self, context: &SessionContext) -> Result<(), Error> {
        self.0
            .insert(Self::CONTEXT_KEY, context)
            .await
            .context("Failed to insert context into session")
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TypedSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(req: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(req, state).await?;
        Ok(TypedSession(session))
    }
}
