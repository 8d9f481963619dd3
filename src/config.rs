//! # Publisher configuration.
//!
//! [`PublisherConfig`] fixes the inclusive range a business event draws the
//! new state from. The default range is `0..=10`.
//!
//! # Example
//! ```
//! use observa::PublisherConfig;
//!
//! let mut cfg = PublisherConfig::default();
//! cfg.max_state = 5;
//!
//! assert_eq!(cfg.state_range(), 0..=5);
//! assert!(cfg.validate().is_ok());
//! ```

use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Configuration for a [`Publisher`](crate::Publisher).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublisherConfig {
    /// Lowest state a business event may produce. Also the initial state.
    pub min_state: u8,
    /// Highest state a business event may produce.
    pub max_state: u8,
}

impl Default for PublisherConfig {
    /// Provides a default configuration:
    /// - `min_state = 0`
    /// - `max_state = 10`
    fn default() -> Self {
        Self {
            min_state: 0,
            max_state: 10,
        }
    }
}

impl PublisherConfig {
    /// Returns the inclusive range of states.
    #[must_use]
    pub fn state_range(&self) -> RangeInclusive<u8> {
        self.min_state..=self.max_state
    }

    /// Checks that the state range is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_state > self.max_state {
            return Err(ConfigError::EmptyStateRange {
                min: self.min_state,
                max: self.max_state,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_is_zero_to_ten() {
        let cfg = PublisherConfig::default();
        assert_eq!(cfg.state_range(), 0..=10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_single_value_range_is_valid() {
        let cfg = PublisherConfig {
            min_state: 4,
            max_state: 4,
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let cfg = PublisherConfig {
            min_state: 8,
            max_state: 3,
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err, ConfigError::EmptyStateRange { min: 8, max: 3 });
        assert_eq!(err.as_label(), "config_empty_state_range");
    }
}
