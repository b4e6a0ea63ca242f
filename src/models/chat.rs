use serde::{ Serialize, Deserialize };
use std::fmt;
use std::str::FromStr;

/// One message exchanged in a conversation, tagged with a role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseChatRoleError {
    message: String,
}

impl fmt::Display for ParseChatRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseChatRoleError {}

impl FromStr for ChatRole {
    type Err = ParseChatRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(ChatRole::System),
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ =>
                Err(ParseChatRoleError {
                    message: format!("Invalid chat role: '{}'", s),
                }),
        }
    }
}
