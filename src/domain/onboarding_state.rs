use super::UserName;
use serde::{Deserialize, Serialize};

/// Voice onboarding of a session.
///
/// `Onboarded` is terminal: neither `start` nor `recognized` leave it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "name", rename_all = "snake_case")]
pub enum OnboardingState {
    #[default]
    NoUser,
    Listening,
    Onboarded(UserName),
}

impl OnboardingState {
    pub fn start(self) -> Self {
        match self {
            OnboardingState::NoUser => OnboardingState::Listening,
            other => other,
        }
    }

    /// Outcome of a recognition attempt. Only meaningful while listening.
    pub fn recognized(self, name: Option<UserName>) -> Self {
        match (self, name) {
            (OnboardingState::Listening, Some(name)) => OnboardingState::Onboarded(name),
            (OnboardingState::Listening, None) => OnboardingState::NoUser,
            (other, _) => other,
        }
    }

    pub fn is_listening(&self) -> bool {
        matches!(self, OnboardingState::Listening)
    }

    pub fn user_name(&self) -> Option<&UserName> {
        match self {
            OnboardingState::Onboarded(name) => Some(name),
            _ => None,
        }
    }
}
