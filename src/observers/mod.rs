//! # Observers reacting to publisher state changes.
//!
//! This module provides the [`Observer`] trait and the two built-in variants.
//! They differ only in the predicate they apply to the publisher's state:
//!
//! | state              | 0 | 1 | 2 | 3..=10 |
//! |--------------------|---|---|---|--------|
//! | [`LowStateObserver`]   | ✓ | ✓ | ✓ |        |
//! | [`ZeroOrHighObserver`] | ✓ |   | ✓ | ✓      |
//!
//! Both are stateless and read-only with respect to the publisher.

mod low_state;
mod observer;
mod zero_or_high;

pub use low_state::LowStateObserver;
pub use observer::Observer;
pub use zero_or_high::ZeroOrHighObserver;
