//! Setup-time errors reported by platform adapters.
//!
//! The steady-state event path has no recoverable errors, but wiring an
//! Area into a native toolkit can fail before the first event arrives:
//! registering the custom view class, or overriding one of its methods
//! (draw, flipped-coordinates, responder, mouse callbacks). Adapters
//! return [`SetupError`] from their init path so the embedding
//! application can abort startup instead of running with a half-wired
//! view.

use thiserror::Error;

/// Fatal platform-integration failures during Area setup.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The native toolkit refused to register the custom view class.
    #[error("failed to register native Area view class `{name}`")]
    ClassRegistration { name: String },

    /// Overriding a method on the registered class failed.
    #[error("failed to override Area method `{selector}`: {reason}")]
    MethodOverride { selector: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = SetupError::ClassRegistration {
            name: "DrawArea".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to register native Area view class `DrawArea`"
        );

        let err = SetupError::MethodOverride {
            selector: "drawRect:".into(),
            reason: "selector already defined".into(),
        };
        assert!(err.to_string().contains("drawRect:"));
        assert!(err.to_string().contains("selector already defined"));
    }
}
