use tracing::info;

use super::Observer;
use crate::subject::ObservedState;

/// Reacts when the publisher's state is exactly zero or at least [`Self::LOW_WATERMARK`].
///
/// The only silent state is `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroOrHighObserver;

impl ZeroOrHighObserver {
    /// Inclusive lower bound of the "high" reacting states.
    pub const LOW_WATERMARK: u8 = 2;

    /// True if a publisher in `state` triggers a reaction.
    #[must_use]
    pub fn reacts_to(state: u8) -> bool {
        state == 0 || state >= Self::LOW_WATERMARK
    }
}

impl Observer for ZeroOrHighObserver {
    fn update(&self, subject: &dyn ObservedState) {
        let state = subject.state();
        if Self::reacts_to(state) {
            info!(observer = self.name(), state, "reacted to the event");
        }
    }

    fn name(&self) -> &'static str {
        "zero-or-high"
    }
}
