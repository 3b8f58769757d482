//! Input event types for the mouse and touch families
//!
//! Raw events mirror what hosts actually deliver: mouse events carry a
//! button and a full position, touch events carry the current contact
//! list. Timestamps are host event times in milliseconds (monotonic per
//! surface; the engine only ever compares them, never reads the clock).

use smallvec::SmallVec;

// ============================================================================
// Normalized Pointer Events
// ============================================================================

/// One normalized pointer observation: horizontal position and event time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Horizontal coordinate in host pixels
    pub x: f32,
    /// Host event timestamp in milliseconds
    pub timestamp_ms: f64,
}

/// The single event type the drag engine consumes
///
/// Both input families normalize into this. `Release` and `Cancel` carry no
/// sample: a drag terminates the same way wherever the pointer ended up, so
/// the final coordinate is never read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Press-class input began (button down, first contact)
    Press(PointerSample),
    /// Tracked pointer moved
    Move(PointerSample),
    /// Press-class input ended normally
    Release,
    /// Interaction aborted by the host (cursor left the window while held,
    /// touch sequence cancelled by a system gesture)
    Cancel,
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Debug)]
pub enum MouseEvent {
    /// Mouse moved to position
    Moved {
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
        /// Host event timestamp in milliseconds
        timestamp_ms: f64,
    },
    /// Mouse button pressed
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// X position when pressed
        x: f32,
        /// Y position when pressed
        y: f32,
        /// Host event timestamp in milliseconds
        timestamp_ms: f64,
    },
    /// Mouse button released
    ButtonReleased {
        /// Which button was released
        button: MouseButton,
        /// X position when released
        x: f32,
        /// Y position when released
        y: f32,
        /// Host event timestamp in milliseconds
        timestamp_ms: f64,
    },
    /// Mouse entered the surface
    Entered,
    /// Mouse left the surface
    Left,
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Back button (side button)
    Back,
    /// Forward button (side button)
    Forward,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Touch Events
// ============================================================================

/// One finger contact within a touch event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Unique identifier for this contact
    pub id: u64,
    /// X position in window coordinates
    pub x: f32,
    /// Y position in window coordinates
    pub y: f32,
}

/// Touch events for touchscreens
///
/// Each event carries the full contact list at the time it fired, the way
/// browser-style hosts report touches. The drag engine only ever tracks the
/// first contact.
#[derive(Clone, Debug)]
pub enum TouchEvent {
    /// A touch sequence started
    Started {
        /// Active contacts, first contact first
        touches: SmallVec<[TouchPoint; 2]>,
        /// Host event timestamp in milliseconds
        timestamp_ms: f64,
    },
    /// One or more contacts moved
    Moved {
        /// Active contacts, first contact first
        touches: SmallVec<[TouchPoint; 2]>,
        /// Host event timestamp in milliseconds
        timestamp_ms: f64,
    },
    /// The tracked touch lifted
    Ended {
        /// Contacts still on the surface (may be empty)
        touches: SmallVec<[TouchPoint; 2]>,
        /// Host event timestamp in milliseconds
        timestamp_ms: f64,
    },
    /// The touch sequence was cancelled (e.g., by a system gesture)
    Cancelled {
        /// Host event timestamp in milliseconds
        timestamp_ms: f64,
    },
}

impl TouchEvent {
    /// The first contact point, if any contact is down
    pub fn first_contact(&self) -> Option<&TouchPoint> {
        match self {
            TouchEvent::Started { touches, .. }
            | TouchEvent::Moved { touches, .. }
            | TouchEvent::Ended { touches, .. } => touches.first(),
            TouchEvent::Cancelled { .. } => None,
        }
    }

    /// Host event timestamp in milliseconds
    pub fn timestamp_ms(&self) -> f64 {
        match self {
            TouchEvent::Started { timestamp_ms, .. }
            | TouchEvent::Moved { timestamp_ms, .. }
            | TouchEvent::Ended { timestamp_ms, .. }
            | TouchEvent::Cancelled { timestamp_ms } => *timestamp_ms,
        }
    }
}
