use crate::{
    app_state::AppState,
    dataset::Dataset,
    session::TypedSession,
    utils::UnexpectedError,
};
use anyhow::Context;
use axum::{
    extract::{DefaultBodyLimit, Multipart},
    response::Redirect,
    routing::post,
    Router,
};
use axum_messages::Messages;

const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dataset", post(upload_dataset))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

#[tracing::instrument(name = "Upload dataset", skip_all)]
async fn upload_dataset(
    session: TypedSession,
    messages: Messages,
    mut multipart: Multipart,
) -> Result<Redirect, UnexpectedError> {
    let mut context = session.context().await?;
    let t = context.translations();

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .context("Failed to read multipart field")?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .context("Failed to read uploaded file")?;
            upload = Some(bytes);
            break;
        }
    }

    let Some(bytes) = upload.filter(|bytes| !bytes.is_empty()) else {
        messages.warning(t.no_dataset);
        return Ok(Redirect::to("/"));
    };

    match Dataset::from_xlsx(&bytes) {
        Ok(dataset) => {
            context.replace_dataset(dataset);
            session.save_context(&context).await?;
        }
        Err(e) => {
            tracing::warn!(error.cause_chain = ?e, error.message = %e, "Rejected upload");
            messages.error(format!("{} {}", t.load_error, t.describe_load_error(&e)));
        }
    }

    Ok(Redirect::to("/"))
}
