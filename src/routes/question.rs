use crate::{
    app_state::AppState,
    question::{answer_question, QuestionError},
    session::{Answer, TypedSession},
    translations::Translations,
    utils::UnexpectedError,
};
use axum::{extract::State, response::Redirect, routing::post, Form, Router};
use axum_messages::Messages;
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    Router::new().route("/question", post(ask_question))
}

#[tracing::instrument(name = "Ask question", skip(app_state, session, messages))]
async fn ask_question(
    State(app_state): State<AppState>,
    session: TypedSession,
    messages: Messages,
    Form(form): Form<FormData>,
) -> Result<Redirect, UnexpectedError> {
    let mut context = session.context().await?;
    let t = context.translations();

    let question = form.question.trim();
    if question.is_empty() {
        return Ok(Redirect::to("/"));
    }

    let Some(dataset) = &context.dataset else {
        messages.warning(t.no_dataset);
        return Ok(Redirect::to("/"));
    };

    let messages = match context.onboarding.user_name() {
        Some(name) if name.is_mentioned_in(question) => {
            app_state
                .speaker
                .say_or_log(&Translations::with_name(t.spoken_attentive, name.as_ref()))
                .await;
            messages.info(Translations::with_name(t.attentive, name.as_ref()))
        }
        _ => messages,
    };

    match answer_question(
        app_state.completion_client.as_ref(),
        dataset,
        question,
        context.language,
    )
    .await
    {
        Ok(text) => {
            app_state.speaker.say_or_log(&text).await;
            context.answer = Some(Answer {
                question: question.to_string(),
                text,
            });
            session.save_context(&context).await?;
        }
        Err(QuestionError::MissingApiKey) => {
            tracing::warn!("Question rejected, no completion API key configured");
            messages.error(t.missing_api_key);
        }
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, error.message = %e, "Failed to answer question");
            messages.error(format!("{} {}", t.completion_error, t.completion_failed));
        }
    }

    Ok(Redirect::to("/"))
}

#[derive(Debug, Deserialize)]
struct FormData {
    question: String,
}
