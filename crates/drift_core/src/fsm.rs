//! State machine transition trait
//!
//! Interaction states are plain enums. Implementing [`StateTransitions`]
//! gives them a pure transition table: given the current state and an event
//! identifier, return the next state, or `None` when the event does not
//! transition out of the current state.

use std::hash::Hash;

/// Trait for state enums that react to events
///
/// Implement this on your state enum to define how events cause state
/// transitions. `on_event` must be pure: side effects (scroll mutation,
/// scheduling, visual markers) belong to the code driving the machine.
///
/// # Example
///
/// ```
/// use drift_core::events::event_types::*;
/// use drift_core::StateTransitions;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum GrabState {
///     #[default]
///     Released,
///     Held,
/// }
///
/// impl StateTransitions for GrabState {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (GrabState::Released, POINTER_DOWN) => Some(GrabState::Held),
///             (GrabState::Held, POINTER_UP) => Some(GrabState::Released),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}
