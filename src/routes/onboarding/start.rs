use crate::{
    session::TypedSession,
    utils::UnexpectedError,
};
use axum::response::Redirect;

#[tracing::instrument(name = "Start onboarding", skip(session))]
pub(super) async fn start_onboarding(
    session: TypedSession,
) -> Result<Redirect, UnexpectedError> {
    let mut context = session.context().await?;
    context.onboarding = context.onboarding.start();
    session.save_context(&context).await?;

    Ok(Redirect::to("/"))
}
