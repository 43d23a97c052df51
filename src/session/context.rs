use crate::{
    dataset::Dataset,
    domain::{Language, OnboardingState},
    translations::Translations,
};
use serde::{Deserialize, Serialize};

/// Everything one browser session knows. Nothing here is shared between
/// sessions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionContext {
    pub language: Language,
    pub onboarding: OnboardingState,
    pub dataset: Option<Dataset>,
    pub answer: Option<Answer>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub text: String,
}

impl SessionContext {
    pub fn translations(&self) -> &'static Translations {
        Translations::for_language(self.language)
    }

    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.answer = None;
    }
}
