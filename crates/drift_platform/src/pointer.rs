//! Input normalization (raw families -> pointer events)
//!
//! Both adapters are pure: one raw event in, at most one [`PointerEvent`]
//! out, no state. An event that carries nothing usable (a hover-enter, a
//! touch frame with zero contacts) normalizes to `None` and is dropped
//! without being an error.

use crate::input::{MouseEvent, PointerEvent, PointerSample, TouchEvent};

/// Normalize a mouse-family event
///
/// The button is deliberately not inspected: any press-class mouse input
/// grabs the surface, and a release ends the grab wherever the cursor is.
/// `Left` (cursor leaving the surface while possibly held) maps to
/// `Cancel`; the state machine ignores cancels when no drag is live.
pub fn from_mouse(event: &MouseEvent) -> Option<PointerEvent> {
    match event {
        MouseEvent::ButtonPressed { x, timestamp_ms, .. } => {
            Some(PointerEvent::Press(PointerSample {
                x: *x,
                timestamp_ms: *timestamp_ms,
            }))
        }
        MouseEvent::Moved { x, timestamp_ms, .. } => Some(PointerEvent::Move(PointerSample {
            x: *x,
            timestamp_ms: *timestamp_ms,
        })),
        MouseEvent::ButtonReleased { .. } => Some(PointerEvent::Release),
        MouseEvent::Left => Some(PointerEvent::Cancel),
        MouseEvent::Entered => None,
    }
}

/// Normalize a touch-family event
///
/// Only the first contact point is tracked; extra fingers are ignored. A
/// `Started`/`Moved` frame with zero contacts produces nothing. `Ended`
/// always terminates regardless of remaining contacts, mirroring how the
/// mouse family releases.
pub fn from_touch(event: &TouchEvent) -> Option<PointerEvent> {
    match event {
        TouchEvent::Started { touches, timestamp_ms } => {
            touches.first().map(|contact| {
                PointerEvent::Press(PointerSample {
                    x: contact.x,
                    timestamp_ms: *timestamp_ms,
                })
            })
        }
        TouchEvent::Moved { touches, timestamp_ms } => touches.first().map(|contact| {
            PointerEvent::Move(PointerSample {
                x: contact.x,
                timestamp_ms: *timestamp_ms,
            })
        }),
        TouchEvent::Ended { .. } => Some(PointerEvent::Release),
        TouchEvent::Cancelled { .. } => Some(PointerEvent::Cancel),
    }
}
