//! Drift Carousel Engine
//!
//! Pointer-driven drag scrolling with momentum for horizontally
//! overflowing card rows. Hosts register surfaces once, forward raw input,
//! and tick the engine each display refresh; the engine owns the rest:
//! the per-surface drag state machine, the live drag session, and the
//! post-release coast.
//!
//! # Example
//!
//! ```ignore
//! use drift_carousel::prelude::*;
//!
//! let mut engine = CarouselEngine::default();
//!
//! // Bind every ".card-carousel" surface the page exposes. Calling this
//! // again after a partial content reload only binds the new surfaces.
//! engine.init(&page);
//!
//! // Forward input as the host delivers it
//! engine.handle_mouse(&row, &event);
//!
//! // One tick per display refresh while anything is moving
//! while engine.tick() {
//!     host.request_refresh();
//! }
//! ```
//!
//! # Behavior
//!
//! - **Dragging**: content follows opposite the pointer (`offset -= delta`)
//! - **Coasting**: release velocity decays 0.95× per tick until it falls
//!   under 0.1 px/tick (both tunable via [`DragConfig`])
//! - **Preemption**: a new press on a coasting surface cancels its glide
//!   synchronously, before the first move delta lands
//! - **Idempotent binding**: surfaces are keyed by handle identity; re-init
//!   never double-binds

pub mod config;
pub mod engine;
pub mod session;
pub mod state;

pub use config::DragConfig;
pub use engine::{CarouselEngine, SurfaceQuery, DEFAULT_SELECTOR};
pub use session::DragSession;
pub use state::DragState;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::DragConfig;
    pub use crate::engine::{CarouselEngine, SurfaceQuery, DEFAULT_SELECTOR};
    pub use crate::session::DragSession;
    pub use crate::state::DragState;
    pub use drift_core::{SharedSurface, Surface};
    pub use drift_platform::prelude::*;
}
