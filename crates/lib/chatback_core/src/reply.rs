//! Bot reply generation.
//!
//! The bot has no conversation state: every reply is derived from the
//! incoming message alone.

use thiserror::Error;

/// Text prepended to every echoed message.
pub const REPLY_PREFIX: &str = "You said: ";

/// Reply errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplyError {
    #[error("No message provided")]
    NoMessage,
}

/// Builds the bot's reply for a message.
pub fn bot_reply(message: &str) -> String {
    format!("{REPLY_PREFIX}{message}")
}

/// Replies to an optional message.
///
/// An absent or empty message is rejected. Anything else, including
/// whitespace-only text, is echoed verbatim.
pub fn respond_to(message: Option<&str>) -> Result<String, ReplyError> {
    match message {
        None | Some("") => Err(ReplyError::NoMessage),
        Some(m) => Ok(bot_reply(m)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_reply_prefixes_message() {
        assert_eq!(bot_reply("hello"), "You said: hello");
    }

    #[test]
    fn respond_to_rejects_missing_message() {
        assert_eq!(respond_to(None), Err(ReplyError::NoMessage));
    }

    #[test]
    fn respond_to_rejects_empty_message() {
        assert_eq!(respond_to(Some("")), Err(ReplyError::NoMessage));
    }

    #[test]
    fn respond_to_keeps_whitespace_and_unicode() {
        assert_eq!(respond_to(Some("  ")).unwrap(), "You said:   ");
        assert_eq!(respond_to(Some("héllo 👋")).unwrap(), "You said: héllo 👋");
    }

    #[test]
    fn respond_to_is_deterministic() {
        let first = respond_to(Some("again")).unwrap();
        let second = respond_to(Some("again")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_message_error_text() {
        assert_eq!(ReplyError::NoMessage.to_string(), "No message provided");
    }
}
