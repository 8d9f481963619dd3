//! Error types used when building a publisher.
//!
//! The attach/detach/notify protocol itself never fails: a duplicate attach or
//! a detach of an unknown observer is logged and ignored. The only fallible
//! step is turning a [`PublisherConfig`](crate::PublisherConfig) into a
//! [`Publisher`](crate::Publisher), which reports a [`ConfigError`].

use thiserror::Error;

/// # Errors produced while validating a publisher configuration.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured state range contains no values (`min_state > max_state`).
    #[error("state range {min}..={max} is empty")]
    EmptyStateRange {
        /// Configured lower bound.
        min: u8,
        /// Configured upper bound.
        max: u8,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use observa::ConfigError;
    ///
    /// let err = ConfigError::EmptyStateRange { min: 7, max: 3 };
    /// assert_eq!(err.as_label(), "config_empty_state_range");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::EmptyStateRange { .. } => "config_empty_state_range",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ConfigError::EmptyStateRange { min, max } => {
                format!("min_state={min} is greater than max_state={max}")
            }
        }
    }
}
