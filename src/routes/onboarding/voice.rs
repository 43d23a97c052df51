use crate::{
    app_state::AppState,
    domain::{NewUser, UserName},
    session::{SessionContext, TypedSession},
    translations::Translations,
    user_registry::register_user,
    utils::UnexpectedError,
};
use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    response::Redirect,
};
use axum_messages::Messages;

const DEFAULT_AUDIO_TYPE: &str = "application/octet-stream";

#[tracing::instrument(
    name = "Submit voice",
    skip_all,
    fields(user_id = tracing::field::Empty)
)]
pub(super) async fn submit_voice(
    State(app_state): State<AppState>,
    session: TypedSession,
    messages: Messages,
    mut multipart: Multipart,
) -> Result<Redirect, UnexpectedError> {
    let mut context = session.context().await?;
    if !context.onboarding.is_listening() {
        tracing::info!("Voice submitted while not listening");
        return Ok(Redirect::to("/"));
    }
    let t = context.translations();

    let mut audio = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .context("Failed to read multipart field")?
    {
        if field.name() == Some("audio") {
            let content_type = field.content_type().unwrap_or(DEFAULT_AUDIO_TYPE).to_string();
            let bytes = field
                .bytes()
                .await
                .context("Failed to read uploaded audio")?;
            audio = Some((bytes, content_type));
            break;
        }
    }

    let recognized = match audio {
        Some((bytes, content_type)) if !bytes.is_empty() => {
            recognize_name(&app_state, bytes.to_vec(), &content_type, &context).await
        }
        _ => None,
    };

    context.onboarding = context.onboarding.recognized(recognized);
    session.save_context(&context).await?;

    let Some(name) = context.onboarding.user_name() else {
        messages.warning(t.name_not_understood);
        return Ok(Redirect::to("/"));
    };
    tracing::Span::current().record("user_id", &tracing::field::display(name.user_id()));

    let greeting = Translations::with_name(t.greeting, name.as_ref());
    let messages = messages.success(greeting.clone());
    app_state.speaker.say_or_log(&greeting).await;
    app_state
        .speaker
        .say_or_log(&Translations::with_name(t.welcome, name.as_ref()))
        .await;

    // The session stays onboarded even when the registry is unreachable.
    if let Err(e) = register_user(&app_state.db_pool, &NewUser::from(name.clone())).await {
        tracing::error!(error.cause_chain = ?e, error.message = %e, "Failed to register user");
        messages.error(format!("{} {}", t.db_error, t.registration_skipped));
    }

    Ok(Redirect::to("/"))
}

async fn recognize_name(
    app_state: &AppState,
    audio: Vec<u8>,
    content_type: &str,
    context: &SessionContext,
) -> Option<UserName> {
    let transcript = match app_state
        .speech_client
        .recognize(audio, content_type, context.language.speech_locale())
        .await
    {
        Ok(transcript) => transcript?,
        Err(e) => {
            tracing::warn!(error.cause_chain = ?e, error.message = %e, "Speech recognition failed");
            return None;
        }
    };

    match UserName::parse(transcript) {
        Ok(name) => Some(name),
        Err(e) => {
            tracing::warn!("Recognized text is not a usable name: {e}");
            None
        }
    }
}
