//! Momentum scheduler
//!
//! Owns every in-flight glide, keyed by a [`GlideId`] that doubles as the
//! cancellation handle. The host (or the carousel engine's own tick) calls
//! [`MomentumScheduler::tick`] once per display refresh; each live glide
//! displaces its surface and decays, and glides that settle (or whose
//! surface has been torn down) are dropped in place.
//!
//! Cancellation is a slotmap removal: calling [`MomentumScheduler::cancel`]
//! on a handle that already settled, was already cancelled, or never
//! existed is a no-op, and a cancelled glide can never run another step.

use drift_core::{SharedSurface, WeakSurface};
use slotmap::{new_key_type, SlotMap};
use std::sync::Arc;

use crate::glide::Glide;

new_key_type! {
    /// Handle to an in-flight glide; also its cancellation token
    pub struct GlideId;
}

/// One coasting surface: where to apply displacement, and the physics
struct MomentumState {
    surface: WeakSurface,
    glide: Glide,
}

/// The cooperative per-frame decay loop for all coasting surfaces
#[derive(Default)]
pub struct MomentumScheduler {
    glides: SlotMap<GlideId, MomentumState>,
}

impl MomentumScheduler {
    pub fn new() -> Self {
        Self {
            glides: SlotMap::with_key(),
        }
    }

    /// Register a glide against a surface and return its handle
    ///
    /// The caller is responsible for the one-glide-per-surface invariant:
    /// cancel the previous handle before beginning a new glide on the same
    /// surface.
    pub fn begin(&mut self, surface: &SharedSurface, glide: Glide) -> GlideId {
        tracing::debug!(velocity = glide.velocity(), "glide begins");
        self.glides.insert(MomentumState {
            surface: Arc::downgrade(surface),
            glide,
        })
    }

    /// Cancel a glide
    ///
    /// Idempotent: handles that already settled or were already cancelled
    /// are ignored. After this returns, the glide will never apply another
    /// displacement.
    pub fn cancel(&mut self, id: GlideId) {
        if self.glides.remove(id).is_some() {
            tracing::debug!(?id, "glide cancelled");
        }
    }

    /// Whether the handle still refers to an in-flight glide
    pub fn is_active(&self, id: GlideId) -> bool {
        self.glides.contains_key(id)
    }

    /// Number of in-flight glides
    pub fn active_count(&self) -> usize {
        self.glides.len()
    }

    /// Advance every in-flight glide one frame
    ///
    /// Applies `offset -= velocity` to each surface, then decays the
    /// velocity. Settled glides and glides whose surface is gone are
    /// removed. Returns true while any glide remains, so hosts know to
    /// schedule another refresh.
    pub fn tick(&mut self) -> bool {
        self.glides.retain(|id, state| {
            let Some(surface) = state.surface.upgrade() else {
                tracing::debug!(?id, "glide dropped, surface detached");
                return false;
            };

            let displacement = state.glide.step();
            let mut surface = surface.lock().unwrap();
            let offset = surface.scroll_x();
            surface.set_scroll_x(offset - displacement);

            if state.glide.is_settled() {
                tracing::debug!(?id, "glide settled");
                return false;
            }
            true
        });

        !self.glides.is_empty()
    }
}
