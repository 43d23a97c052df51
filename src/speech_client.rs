use reqwest::{header::CONTENT_TYPE, Client};
use serde::Deserialize;
use std::time::Duration;

/// Client of the speech-to-text service used during onboarding.
#[derive(Clone)]
pub struct SpeechClient {
    http_client: Client,
    base_url: String,
}

impl SpeechClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Returns `None` when the service could not make out any words.
    #[tracing::instrument(name = "Recognize speech", skip(self, audio), fields(size = audio.len()))]
    pub async fn recognize(
        &self,
        audio: Vec<u8>,
        content_type: &str,
        locale: &str,
    ) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}/recognize", &self.base_url);

        let response: RecognitionResponse = self
            .http_client
            .post(&url)
            .query(&[("language", locale)])
            .header(CONTENT_TYPE, content_type)
            .body(audio)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .transcript
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }
}

#[derive(Deserialize)]
struct RecognitionResponse {
    transcript: Option<String>,
}
