use crate::{
    completion_client::CompletionClient, speaker::Speaker, speech_client::SpeechClient,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    /// `None` disables question answering.
    pub completion_client: Option<CompletionClient>,
    pub speech_client: SpeechClient,
    pub speaker: Speaker,
    pub require_onboarding: bool,
}
