//! One entry of the conversation log.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Prefix used when the turn is rendered into a prompt.
    pub fn prefix(self) -> &'static str {
        match self {
            Speaker::User => "Human",
            Speaker::Assistant => "AI",
        }
    }
}

/// A `(speaker, text)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, text)
    }

    pub(crate) fn render_line(&self) -> String {
        format!("{}: {}", self.speaker.prefix(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_serializes_lowercase() {
        let json = serde_json::to_string(&Turn::user("hi")).unwrap();
        assert_eq!(json, r#"{"speaker":"user","text":"hi"}"#);
    }

    #[test]
    fn render_line_uses_speaker_prefix() {
        assert_eq!(Turn::assistant("ok").render_line(), "AI: ok");
        assert_eq!(Turn::user("topic").render_line(), "Human: topic");
    }
}
