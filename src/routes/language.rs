use crate::{
    app_state::AppState,
    domain::Language,
    session::TypedSession,
    utils::UnexpectedError,
};
use axum::{response::Redirect, routing::post, Form, Router};
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    Router::new().route("/language", post(change_language))
}

#[tracing::instrument(name = "Change language", skip(session))]
async fn change_language(
    session: TypedSession,
    Form(form): Form<FormData>,
) -> Result<Redirect, UnexpectedError> {
    let mut context = session.context().await?;
    context.language = form.language;
    session.save_context(&context).await?;

    Ok(Redirect::to("/"))
}

#[derive(Debug, Deserialize)]
struct FormData {
    language: Language,
}
