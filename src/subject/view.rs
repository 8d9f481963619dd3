/// Read-only view of a publisher handed to observers.
///
/// Observers only ever see this trait, so they can read the state without
/// knowing the concrete publisher type and without a way to mutate it.
pub trait ObservedState {
    /// Current state of the publisher.
    fn state(&self) -> u8;
}
