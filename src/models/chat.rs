use serde::{Deserialize, Serialize};

use super::alert::Severity;
use super::de;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Transcript header label shown above the message.
    pub fn label(self) -> &'static str {
        match self {
            ChatRole::User => "You",
            ChatRole::Assistant => "AI Assistant",
        }
    }

    /// CSS class suffix on the message container.
    pub fn class_suffix(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "ai",
        }
    }
}

/// An assistant response from `/api/chatbot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub related_cves: Vec<RelatedCve>,
}

/// A database record the assistant found relevant to the question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCve {
    pub cve_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default, deserialize_with = "de::severity_opt")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub summary: Option<String>,
}
