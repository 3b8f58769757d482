//! Host-owned scrollable surfaces
//!
//! A surface is one horizontally overflowing viewport (a card row, a media
//! strip) that the drag engine scrolls. The host implements [`Surface`] on
//! whatever backs the element and shares it as a [`SharedSurface`]; the
//! engine only ever keeps [`WeakSurface`] references, so removing the
//! element from the page is always safe: the next upgrade fails and the
//! engine forgets the surface without an error.

use std::sync::{Arc, Mutex, Weak};

/// One scrollable viewport driven by the drag engine
///
/// The scroll offset is a single horizontal scalar in pixels; the engine
/// never interprets it beyond adding and subtracting deltas, so hosts are
/// free to clamp or wrap it inside `set_scroll_x`.
pub trait Surface: Send {
    /// Current horizontal scroll offset in pixels
    fn scroll_x(&self) -> f32;

    /// Replace the horizontal scroll offset
    fn set_scroll_x(&mut self, offset: f32);

    /// Toggle the "actively grabbed" visual marker
    ///
    /// Called with `true` when a drag session opens on this surface and
    /// `false` when it ends. Purely cosmetic; the default does nothing.
    fn set_grabbed(&mut self, _grabbed: bool) {}
}

/// Shared handle to a surface, owned by the host
pub type SharedSurface = Arc<Mutex<dyn Surface>>;

/// Weak handle held by the engine; upgrade failure means the surface is gone
pub type WeakSurface = Weak<Mutex<dyn Surface>>;

/// Stable identity for a live surface handle
pub type SurfaceKey = usize;

/// Identity key for a surface, derived from its allocation address
///
/// Valid only while the `Arc` is alive; registries that key on this must
/// prune entries whose weak handles have died before trusting a lookup,
/// since a freed allocation can be reused by a later surface.
pub fn surface_key(surface: &SharedSurface) -> SurfaceKey {
    Arc::as_ptr(surface).cast::<()>() as usize
}
