use crate::app_state::AppState;
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use start::start_onboarding;
use voice::submit_voice;

mod start;
mod voice;

const MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/onboarding/start", post(start_onboarding))
        .route("/onboarding/voice", post(submit_voice))
        .layer(DefaultBodyLimit::max(MAX_AUDIO_BYTES))
}
