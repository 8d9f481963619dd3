//! # Observer: user-facing reaction handlers
//!
//! The [`Observer`] trait is the main **extension point** for end users.
//! Every state change of a [`Publisher`](crate::Publisher) is fanned out to
//! the observers attached to it at that moment.
//!
//! # High-level architecture:
//! ```text
//! Reaction flow:
//!   Publisher::trigger_business_event() ── new state ──► Publisher::notify()
//!                                                           └─► Observer::update(&dyn ObservedState)
//!
//! User-defined observers:
//!   - implement [`Observer`] trait
//!   - read the state through [`ObservedState`] (read-only)
//!   - decide on their own whether to react
//!
//!   Publisher ──► Observer::update(&dyn ObservedState)
//!                          │
//!          ┌───────────────┼────────────────┐
//!          ▼               ▼                ▼
//!   LowStateObserver  ZeroOrHighObserver  CustomObserver
//!     (state < 3)    (state == 0 || >= 2)  (user logic)
//! ```
//!
//! # Example: custom observer
//! ```
//! use std::rc::Rc;
//! use observa::{ObservedState, Observer, Publisher, ScriptedSource};
//!
//! struct EvenObserver;
//!
//! impl Observer for EvenObserver {
//!     fn update(&self, subject: &dyn ObservedState) {
//!         if subject.state() % 2 == 0 {
//!             println!("[even] state={}", subject.state());
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "even"
//!     }
//! }
//!
//! let publisher = Publisher::with_source(ScriptedSource::new([4]));
//! let even: Rc<dyn Observer> = Rc::new(EvenObserver);
//! publisher.attach(&even);
//! publisher.trigger_business_event();
//! ```

use crate::subject::ObservedState;

/// # Trait for reacting to publisher state changes.
///
/// Observers are called synchronously, one after another, in attach order.
/// They receive a read-only view of the publisher and must not assume any
/// concrete publisher type.
pub trait Observer {
    /// Called once per notification with the publisher's current state.
    fn update(&self, subject: &dyn ObservedState);

    /// Returns the observer name used in log lines.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
