//! Drift Input Abstraction Layer
//!
//! This crate owns the boundary between host-delivered input and the drag
//! engine. Two raw event families exist, [`MouseEvent`] and [`TouchEvent`],
//! and two adapters, [`pointer::from_mouse`] and [`pointer::from_touch`],
//! reduce both to the single normalized [`PointerEvent`] variant type the
//! engine consumes. Nothing downstream of the adapters ever inspects a raw
//! event shape.
//!
//! # Architecture
//!
//! ```text
//! Host input (mouse buttons / touch contacts)
//!     ↓
//! MouseEvent | TouchEvent          (raw families, per source)
//!     ↓ pointer::from_mouse / pointer::from_touch
//! PointerEvent                      (Press | Move | Release | Cancel)
//!     ↓
//! CarouselEngine                    (drift_carousel)
//! ```
//!
//! Only the horizontal coordinate survives normalization; the engine
//! scrolls a single axis.

mod input;
pub mod pointer;

pub use input::{
    MouseButton, MouseEvent, PointerEvent, PointerSample, TouchEvent, TouchPoint,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::input::{
        MouseButton, MouseEvent, PointerEvent, PointerSample, TouchEvent, TouchPoint,
    };
    pub use crate::pointer::{from_mouse, from_touch};
}
