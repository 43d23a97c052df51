use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn parse(s: String) -> Result<UserName, String> {
        let trimmed = s.trim();
        match trimmed {
            _ if trimmed.is_empty() => Err(format!(
                "User name is empty or contains whitespace only: `{s}`"
            )),
            _ if trimmed.graphemes(true).count() > 256 => {
                Err(format!("`{s}` is longer than 256 graphemes"))
            }
            _ => Ok(Self(trimmed.to_string())),
        }
    }

    /// Registry key of the user: the lowercased name.
    pub fn user_id(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn is_mentioned_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.user_id())
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}
