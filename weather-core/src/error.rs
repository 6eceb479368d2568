use thiserror::Error;

/// Message used when the provider reports a failure without saying why.
pub const FALLBACK_PROVIDER_MESSAGE: &str = "Error fetching weather";

/// Failure of a single weather lookup.
///
/// `Display` renders only the message, which is what ends up in front of the
/// user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Network failure, unreadable body or malformed JSON.
    #[error("{0}")]
    Transport(String),

    /// The provider answered but reported a non-success status code.
    #[error("{0}")]
    Provider(String),
}

impl LookupError {
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Provider failure; falls back to a generic message when the provider
    /// supplied none (or an empty one).
    pub fn provider(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.is_empty() => Self::Provider(m),
            _ => Self::Provider(FALLBACK_PROVIDER_MESSAGE.to_string()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Transport(m) | Self::Provider(m) => m,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("Failed to parse weather response: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_keeps_supplied_message() {
        let err = LookupError::provider(Some("city not found".into()));
        assert_eq!(err, LookupError::Provider("city not found".into()));
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn provider_error_falls_back_when_message_missing_or_empty() {
        assert_eq!(LookupError::provider(None).message(), FALLBACK_PROVIDER_MESSAGE);
        assert_eq!(
            LookupError::provider(Some(String::new())).message(),
            FALLBACK_PROVIDER_MESSAGE
        );
    }

    #[test]
    fn json_errors_become_transport_errors() {
        let err: LookupError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, LookupError::Transport(_)));
        assert!(err.message().starts_with("Failed to parse weather response"));
    }
}
