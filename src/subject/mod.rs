//! # Publisher side of the pattern.
//!
//! ## Contents
//! - [`Publisher`]     holds the state and the ordered subscriber list
//! - [`ObservedState`] read-only view observers receive on `update`
//! - [`StateSource`]   injectable generator of new states
//!   ([`RandomSource`], [`ScriptedSource`])

mod publisher;
mod source;
mod view;

pub use publisher::Publisher;
pub use source::{RandomSource, ScriptedSource, StateSource};
pub use view::ObservedState;
