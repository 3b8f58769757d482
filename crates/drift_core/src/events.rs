//! Unified event identifiers
//!
//! Pointer interactions from both input families (mouse and touch) are
//! reduced to a small set of `u32` event identifiers before they reach a
//! state machine. Transition tables match on these constants, so a drag
//! that started from a finger and one that started from a cursor walk the
//! exact same states.

/// Event type constants consumed by [`StateTransitions`](crate::fsm::StateTransitions) impls
pub mod event_types {
    /// Press-class input began on a surface (mouse button down, first touch)
    pub const POINTER_DOWN: u32 = 1;
    /// Pointer moved while tracked
    pub const POINTER_MOVE: u32 = 2;
    /// Press-class input ended (mouse button up, touch lifted)
    pub const POINTER_UP: u32 = 3;
    /// Interaction aborted by the host (pointer left the window, touch
    /// cancelled by a system gesture). Terminates like POINTER_UP.
    pub const POINTER_CANCEL: u32 = 4;
}
