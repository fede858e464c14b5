use thiserror::Error;

use crate::features::sign_up::SIGN_UP_FALLBACK_MESSAGE;

/// Failures reported by the auth collaborator during account creation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("{message}")]
    Rejected { message: String },

    #[error("Network error: {message}")]
    Network { message: String },
}

impl AuthError {
    pub fn rejected(message: impl Into<String>) -> Self {
        AuthError::Rejected {
            message: message.into(),
        }
    }

    /// Text shown in the form-wide error banner
    pub fn user_message(&self) -> String {
        let message = match self {
            AuthError::Rejected { message } => message.clone(),
            other => other.to_string(),
        };

        if message.trim().is_empty() {
            SIGN_UP_FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Network {
            message: err.to_string(),
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_passed_through() {
        let err = AuthError::rejected("Email already in use");
        assert_eq!(err.user_message(), "Email already in use");
        assert_eq!(err.to_string(), "Email already in use");
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(
            AuthError::rejected("").user_message(),
            "An error occurred during sign up"
        );
        assert_eq!(
            AuthError::rejected("   ").user_message(),
            "An error occurred during sign up"
        );
    }

    #[test]
    fn test_network_errors_keep_prefix() {
        let err = AuthError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.user_message(), "Network error: connection refused");
    }
}
