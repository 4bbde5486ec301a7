//! User message validation.
//!
//! The chatbot accepts any non-empty `message` string. Whitespace-only and
//! punctuation-only input is deliberately valid: it tokenizes to an empty
//! keyword list and gets the generic "cannot understand" reply, while a
//! missing or empty field is the one client error the endpoint reports.

/// Rejection for an unusable chatbot message.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The `message` field was missing or empty
    #[error("message is required")]
    Missing,
}

/// The raw text of a chatbot question, as typed by the user.
///
/// The text is kept verbatim (no trimming or normalization) because the
/// category branch re-reads the raw message to extract the category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage(String);

impl UserMessage {
    /// Wraps a raw message, rejecting only the empty string.
    ///
    /// A missing `message` field coalesces to the empty string at the HTTP
    /// layer, so `MessageError::Missing` covers both cases.
    pub fn new(input: impl Into<String>) -> Result<Self, MessageError> {
        let input = input.into();
        if input.is_empty() {
            return Err(MessageError::Missing);
        }
        Ok(Self(input))
    }

    /// Returns the message text as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_only_the_empty_string() {
        assert!(matches!(UserMessage::new(""), Err(MessageError::Missing)));
        assert!(UserMessage::new(" ").is_ok());
        assert!(UserMessage::new("¿?").is_ok());
    }

    #[test]
    fn keeps_the_text_verbatim() {
        let msg = UserMessage::new("  categoria Bebidas  ").unwrap();
        assert_eq!(msg.as_str(), "  categoria Bebidas  ");
    }
}
