//! Drag interaction states
//!
//! State machine for one surface's drag lifecycle:
//!
//! ```text
//!                  POINTER_DOWN
//!     Idle ─────────────────────► Dragging
//!       ▲                            │
//!       │                            │ POINTER_UP / POINTER_CANCEL
//!       │ settled                    ▼
//!       └────────────────────── Coasting ◄──┐
//!                                    │      │
//!                                    └──────┘ (glide decays per tick)
//!                          POINTER_DOWN └──► Dragging (preempts the glide)
//! ```
//!
//! Up and cancel are deliberately the same row: a drag that leaves the
//! window without a release event must terminate exactly like one that
//! released in place.
//!
//! # Events
//!
//! - `POINTER_DOWN` (1): press-class input opens a session
//! - `POINTER_MOVE` (2): tracked move; stays in `Dragging`
//! - `POINTER_UP` (3) / `POINTER_CANCEL` (4): session ends, coast begins
//! - `SETTLED` (internal): coast velocity fell under the stop epsilon

use drift_core::events::event_types;
use drift_core::StateTransitions;

/// Drag lifecycle states for one surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    /// No session, no momentum; content at rest
    #[default]
    Idle,
    /// A live drag session is applying move deltas
    Dragging,
    /// Post-release momentum is scrolling the surface
    Coasting,
}

impl DragState {
    /// Returns true while the surface is being dragged or coasting
    pub fn is_active(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    /// Returns true while a drag session is live
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging)
    }
}

/// Internal events for the drag lifecycle (never host-delivered)
pub mod drag_events {
    /// Coast velocity fell under the stop epsilon
    pub const SETTLED: u32 = 10001;
}

impl StateTransitions for DragState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use drag_events::*;
        use event_types::*;

        match (self, event) {
            // Idle -> Dragging: press opens a session
            (DragState::Idle, POINTER_DOWN) => Some(DragState::Dragging),

            // Dragging -> Dragging: moves are handled by the session (no change)
            (DragState::Dragging, POINTER_MOVE) => None,

            // Dragging -> Coasting: release hands velocity to the glide.
            // The engine settles straight through to Idle when the release
            // velocity is under the stop epsilon.
            (DragState::Dragging, POINTER_UP) => Some(DragState::Coasting),
            (DragState::Dragging, POINTER_CANCEL) => Some(DragState::Coasting),

            // Coasting -> Idle: glide settled
            (DragState::Coasting, SETTLED) => Some(DragState::Idle),

            // Coasting -> Dragging: a new press preempts the glide
            (DragState::Coasting, POINTER_DOWN) => Some(DragState::Dragging),

            _ => None,
        }
    }
}
