//! Reducer trait for action-driven state containers.

/// A state container that evolves only through discrete actions.
///
/// - `apply` is **total**: every action produces a new state, unknown targets
///   are no-ops rather than errors.
/// - Implementations perform no IO. Callers that mirror state elsewhere
///   (storage, presentation) do so after `apply` returns.
pub trait Reducer {
    type Action: Clone + core::fmt::Debug;

    /// Evolve in-memory state from a single action.
    fn apply(&mut self, action: Self::Action);

    /// Number of actions applied so far (+1 per `apply`, no-ops included).
    fn revision(&self) -> u64;
}
