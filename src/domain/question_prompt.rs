use super::Language;
use crate::{dataset::Dataset, translations::Translations};

/// Rows of the dataset included in every prompt.
pub const CONTEXT_ROWS: usize = 20;

#[derive(Debug, PartialEq)]
pub struct QuestionPrompt {
    system: &'static str,
    user: String,
}

impl QuestionPrompt {
    pub fn build(dataset: &Dataset, question: &str, language: Language) -> Result<Self, csv::Error> {
        let t = Translations::for_language(language);
        let context = dataset.to_csv(CONTEXT_ROWS)?;

        Ok(Self {
            system: t.system_prompt,
            user: format!(
                "{}\n{context}\n{}{question}",
                t.prompt_preamble, t.prompt_question
            ),
        })
    }

    pub fn system(&self) -> &'static str {
        self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}
