use tracing::info;

use super::Observer;
use crate::subject::ObservedState;

/// Reacts while the publisher's state is strictly below [`Self::THRESHOLD`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LowStateObserver;

impl LowStateObserver {
    /// Exclusive upper bound of the reacting states.
    pub const THRESHOLD: u8 = 3;

    /// True if a publisher in `state` triggers a reaction.
    #[must_use]
    pub fn reacts_to(state: u8) -> bool {
        state < Self::THRESHOLD
    }
}

impl Observer for LowStateObserver {
    fn update(&self, subject: &dyn ObservedState) {
        let state = subject.state();
        if Self::reacts_to(state) {
            info!(observer = self.name(), state, "reacted to the event");
        }
    }

    fn name(&self) -> &'static str {
        "low-state"
    }
}
