//! # observa
//!
//! **Observa** is a small, single-threaded implementation of the publisher/observer pattern.
//!
//! A [`Publisher`] owns a piece of state (an integer in a configured range,
//! `0..=10` by default) and an ordered list of non-owning observer references.
//! Whenever a business event changes the state, every attached [`Observer`] is
//! called synchronously, in attach order, with a read-only view of the publisher.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Observer A  │   │  Observer B  │   │  Observer N  │
//!     │ (Rc, client) │   │ (Rc, client) │   │ (Rc, client) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ attach/detach    │                  │
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Publisher                                                        │
//! │  - state: Cell<u8>               (inside PublisherConfig range)   │
//! │  - subscribers: Vec<Weak<dyn Observer>>   (ordered, no dups)      │
//! │  - source: StateSource           (RandomSource / ScriptedSource)  │
//! └──────┬────────────────────────────────────────────────────────────┘
//!        │ trigger_business_event()
//!        ├─► state = clamp(source.next_state(range))
//!        └─► notify()
//!              ├─► snapshot live subscribers
//!              └─► for each: observer.update(&dyn ObservedState)
//! ```
//!
//! ### Lifecycle
//! ```text
//! client ──► Publisher::new() ──► attach(A) ──► attach(B)
//!        ──► trigger_business_event()   (A and B consulted)
//!        ──► detach(B)
//!        ──► trigger_business_event()   (only A consulted)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                          |
//! |-------------------|---------------------------------------------------------------|---------------------------------------------|
//! | **Publisher**     | Attach/detach/notify and the state-changing business event.   | [`Publisher`]                               |
//! | **Observers**     | React to state changes through a read-only view.              | [`Observer`], [`ObservedState`]             |
//! | **Built-ins**     | Predicate-based reactors.                                     | [`LowStateObserver`], [`ZeroOrHighObserver`]|
//! | **State sources** | Injectable generator of new states.                           | [`StateSource`], [`RandomSource`], [`ScriptedSource`] |
//! | **Configuration** | State range.                                                  | [`PublisherConfig`]                         |
//! | **Errors**        | Invalid configuration.                                        | [`ConfigError`]                             |
//!
//! ## Logging
//! The crate emits [`tracing`] events (attach, detach, notify, state changes and
//! reactions) and never installs a subscriber itself.
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use observa::{LowStateObserver, Observer, Publisher, ScriptedSource, ZeroOrHighObserver};
//!
//! let subject = Publisher::with_source(ScriptedSource::new([1, 0, 7]));
//!
//! let a: Rc<dyn Observer> = Rc::new(LowStateObserver);
//! let b: Rc<dyn Observer> = Rc::new(ZeroOrHighObserver);
//! subject.attach(&a);
//! subject.attach(&b);
//!
//! subject.trigger_business_event(); // state 1: only A reacts
//! subject.trigger_business_event(); // state 0: both react
//!
//! subject.detach(&b);
//! subject.trigger_business_event(); // state 7: nobody reacts
//! assert_eq!(subject.len(), 1);
//! ```
mod config;
mod error;
mod observers;
mod subject;

// ---- Public re-exports ----

pub use config::PublisherConfig;
pub use error::ConfigError;
pub use observers::{LowStateObserver, Observer, ZeroOrHighObserver};
pub use subject::{ObservedState, Publisher, RandomSource, ScriptedSource, StateSource};
