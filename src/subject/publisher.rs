//! # Publisher: state holder with an ordered subscriber list
//!
//! [`Publisher`] owns a piece of state and a list of **non-owning** observer
//! references. Every business event draws a new state and fans it out to the
//! observers synchronously.
//!
//! ## What it guarantees
//! - Each observer appears at most once (reference identity).
//! - Notification order is attach order.
//! - `attach`/`detach` never fail; duplicates and unknown observers are logged.
//! - The state always stays inside [`PublisherConfig::state_range`].
//!
//! ## Reentrancy
//! All methods take `&self`. `notify()` snapshots the live subscribers before
//! calling any of them, so an observer may attach or detach (itself or others)
//! from inside `update`. Such changes apply to the **next** notification.
//!
//! ## Diagram
//! ```text
//!  trigger_business_event()
//!        │
//!        ├─► source.next_state(range) ─► clamp ─► state
//!        └─► notify()
//!              ├─► snapshot (upgrade Weak, prune dropped)
//!              ├─► observer #1 .update(&dyn ObservedState)
//!              ├─► observer #2 .update(&dyn ObservedState)
//!              └─► observer #N .update(&dyn ObservedState)
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};

use super::source::{RandomSource, StateSource};
use super::view::ObservedState;
use crate::config::PublisherConfig;
use crate::error::ConfigError;
use crate::observers::Observer;

/// Subject holding the observable state and its subscribers.
pub struct Publisher<S = RandomSource> {
    config: PublisherConfig,
    state: Cell<u8>,
    subscribers: RefCell<Vec<Weak<dyn Observer>>>,
    source: RefCell<S>,
}

impl Publisher {
    /// Creates a publisher with the default range `0..=10` and a thread-local random source.
    #[must_use]
    pub fn new() -> Self {
        Self::build(PublisherConfig::default(), RandomSource::default())
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateSource> Publisher<S> {
    /// Creates a publisher with the default range and an injected state source.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self::build(PublisherConfig::default(), source)
    }

    /// Creates a publisher from an explicit configuration.
    ///
    /// Fails if the configured state range is empty.
    pub fn from_config(config: PublisherConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, source))
    }

    fn build(config: PublisherConfig, source: S) -> Self {
        Self {
            state: Cell::new(config.min_state),
            config,
            subscribers: RefCell::new(Vec::new()),
            source: RefCell::new(source),
        }
    }

    /// Adds `observer` to the end of the subscriber list.
    ///
    /// Attaching an observer that is already present is a logged no-op.
    pub fn attach(&self, observer: &Rc<dyn Observer>) {
        let name = observer.name();
        let weak = Rc::downgrade(observer);
        let mut subs = self.subscribers.borrow_mut();

        if subs.iter().any(|s| Weak::ptr_eq(s, &weak)) {
            info!(observer = name, "observer has been attached already");
            return;
        }

        subs.push(weak);
        info!(observer = name, subscribers = subs.len(), "attached an observer");
    }

    /// Removes `observer` from the subscriber list, keeping the order of the rest.
    ///
    /// Detaching an observer that is not present is a logged no-op.
    pub fn detach(&self, observer: &Rc<dyn Observer>) {
        let name = observer.name();
        let weak = Rc::downgrade(observer);
        let mut subs = self.subscribers.borrow_mut();

        match subs.iter().position(|s| Weak::ptr_eq(s, &weak)) {
            Some(idx) => {
                subs.remove(idx);
                info!(observer = name, subscribers = subs.len(), "detached an observer");
            }
            None => {
                info!(observer = name, "nonexistent observer");
            }
        }
    }

    /// Calls [`Observer::update`] on every live subscriber, in attach order.
    ///
    /// Does not change the state. Observers dropped by their owners are
    /// skipped and removed from the list.
    pub fn notify(&self) {
        let snapshot = self.snapshot();
        info!(subscribers = snapshot.len(), "notifying observers");
        for observer in &snapshot {
            observer.update(self);
        }
    }

    /// Draws a new state from the source and notifies the observers.
    ///
    /// This is the only way the state changes.
    pub fn trigger_business_event(&self) {
        info!("doing something important");

        let range = self.config.state_range();
        let drawn = self.source.borrow_mut().next_state(&range);
        let state = drawn.clamp(*range.start(), *range.end());
        if state != drawn {
            warn!(drawn, state, "state source went out of range; clamped");
        }

        self.state.set(state);
        info!(state, "state has just changed");
        self.notify();
    }

    /// Number of attached observers, including ones dropped since the last notification.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// True if no observer is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }

    /// True if `observer` is currently attached.
    #[must_use]
    pub fn contains(&self, observer: &Rc<dyn Observer>) -> bool {
        let weak = Rc::downgrade(observer);
        self.subscribers
            .borrow()
            .iter()
            .any(|s| Weak::ptr_eq(s, &weak))
    }

    /// Configuration the publisher was built with.
    #[must_use]
    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    fn snapshot(&self) -> Vec<Rc<dyn Observer>> {
        let mut subs = self.subscribers.borrow_mut();
        let before = subs.len();
        subs.retain(|s| s.strong_count() > 0);

        let pruned = before - subs.len();
        if pruned > 0 {
            debug!(pruned, "pruned dropped observers");
        }
        subs.iter().filter_map(Weak::upgrade).collect()
    }
}

impl<S> ObservedState for Publisher<S> {
    fn state(&self) -> u8 {
        self.state.get()
    }
}

impl<S> fmt::Debug for Publisher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("config", &self.config)
            .field("state", &self.state.get())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish_non_exhaustive()
    }
}
