use crate::{
    completion_client::{CompletionClient, CompletionError},
    dataset::Dataset,
    domain::{Language, QuestionPrompt},
};

#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("The completion service API key is not configured")]
    MissingApiKey,
    #[error("Failed to serialize the dataset sample")]
    Context(#[from] csv::Error),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Asks the completion service about the first rows of `dataset`.
///
/// Nothing is sent when no client is configured.
#[tracing::instrument(name = "Answer question", skip(client, dataset))]
pub async fn answer_question(
    client: Option<&CompletionClient>,
    dataset: &Dataset,
    question: &str,
    language: Language,
) -> Result<String, QuestionError> {
    let client = client.ok_or(QuestionError::MissingApiKey)?;
    let prompt = QuestionPrompt::build(dataset, question, language)?;

    Ok(client.complete(prompt.system(), prompt.user()).await?)
}
