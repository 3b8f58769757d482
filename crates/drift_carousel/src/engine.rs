//! Engine and binding registry
//!
//! One [`CarouselEngine`] serves every carousel on a page. It is the
//! explicit service object a host constructs at bootstrap: `init` discovers
//! surfaces through the host's [`SurfaceQuery`], binds each at most once,
//! and from then on the host forwards raw input per surface and calls
//! [`CarouselEngine::tick`] once per display refresh.
//!
//! # Architecture
//!
//! ```text
//! Host input (mouse / touch, per surface)
//!     ↓ handle_mouse / handle_touch      (normalize via drift_platform)
//! CarouselEngine                          (identity lookup, DragState FSM)
//!     ↓ while Dragging: offset -= delta
//!     ↓ on release:     velocity -> MomentumScheduler
//! drift_motion                            (per-tick glide decay)
//! ```
//!
//! Every anomaly degrades to "do nothing": selectors that match nothing,
//! events for unbound or torn-down surfaces, releases without a session.
//! A stuck carousel must never take the page down with it.

use std::sync::Arc;

use drift_core::events::event_types;
use drift_core::{surface_key, SharedSurface, StateTransitions, SurfaceKey, WeakSurface};
use drift_motion::{Glide, MomentumScheduler};
use drift_platform::{pointer, MouseEvent, PointerEvent, PointerSample, TouchEvent};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::config::DragConfig;
use crate::session::DragSession;
use crate::state::{drag_events, DragState};

/// Selector bound when [`CarouselEngine::init`] is called
pub const DEFAULT_SELECTOR: &str = ".card-carousel";

/// Host-side surface discovery (the page's selector lookup)
///
/// Implemented by whatever owns the document: given a selector, return the
/// currently matching surfaces in document order. Returning an empty list
/// is normal; many pages have no carousel.
pub trait SurfaceQuery {
    /// All surfaces currently matching `selector`
    fn select(&self, selector: &str) -> Vec<SharedSurface>;
}

new_key_type! {
    /// Internal handle for one bound surface
    struct BindingId;
}

/// Everything the engine keeps per bound surface
struct Binding {
    surface: WeakSurface,
    state: DragState,
    session: Option<DragSession>,
    glide: Option<drift_motion::GlideId>,
}

/// The drag/momentum engine for all carousels on a page
pub struct CarouselEngine {
    config: DragConfig,
    bindings: SlotMap<BindingId, Binding>,
    /// Identity map enforcing one binding per live surface handle
    bound: FxHashMap<SurfaceKey, BindingId>,
    momentum: MomentumScheduler,
}

impl Default for CarouselEngine {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl CarouselEngine {
    /// Create an engine with the given drag configuration
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            bindings: SlotMap::with_key(),
            bound: FxHashMap::default(),
            momentum: MomentumScheduler::new(),
        }
    }

    /// The active drag configuration
    pub fn config(&self) -> DragConfig {
        self.config
    }

    // =========================================================================
    // Binding
    // =========================================================================

    /// Bind every surface matching [`DEFAULT_SELECTOR`]
    pub fn init(&mut self, page: &dyn SurfaceQuery) {
        self.init_with_selector(page, DEFAULT_SELECTOR);
    }

    /// Bind every surface matching `selector`
    ///
    /// Idempotent: surfaces already bound are skipped, so hosts may call
    /// this again after dynamic content loads. Dead bindings are pruned
    /// first, which also keeps identity keys honest across allocation
    /// reuse. Zero matches is a no-op.
    pub fn init_with_selector(&mut self, page: &dyn SurfaceQuery, selector: &str) {
        self.prune_detached();

        let surfaces = page.select(selector);
        if surfaces.is_empty() {
            tracing::debug!(selector, "no surfaces matched");
            return;
        }

        for surface in surfaces {
            let key = surface_key(&surface);
            if self.bound.contains_key(&key) {
                continue;
            }
            let id = self.bindings.insert(Binding {
                surface: Arc::downgrade(&surface),
                state: DragState::default(),
                session: None,
                glide: None,
            });
            self.bound.insert(key, id);
            tracing::debug!(key, "surface bound");
        }
    }

    /// Number of live bindings
    pub fn bound_count(&self) -> usize {
        self.bindings.len()
    }

    /// Current drag state of a bound surface
    pub fn state_of(&self, surface: &SharedSurface) -> Option<DragState> {
        self.bound
            .get(&surface_key(surface))
            .and_then(|id| self.bindings.get(*id))
            .map(|binding| binding.state)
    }

    /// Drop bindings whose surface the host has torn down
    fn prune_detached(&mut self) {
        let momentum = &mut self.momentum;
        self.bindings.retain(|id, binding| {
            if binding.surface.strong_count() > 0 {
                return true;
            }
            if let Some(glide) = binding.glide.take() {
                momentum.cancel(glide);
            }
            tracing::debug!(?id, "binding pruned, surface detached");
            false
        });
        let bindings = &self.bindings;
        self.bound.retain(|_, id| bindings.contains_key(*id));
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Forward a mouse-family event delivered on `surface`
    pub fn handle_mouse(&mut self, surface: &SharedSurface, event: &MouseEvent) {
        if let Some(normalized) = pointer::from_mouse(event) {
            self.handle_pointer(surface, normalized);
        }
    }

    /// Forward a touch-family event delivered on `surface`
    pub fn handle_touch(&mut self, surface: &SharedSurface, event: &TouchEvent) {
        if let Some(normalized) = pointer::from_touch(event) {
            self.handle_pointer(surface, normalized);
        }
    }

    /// Forward an already-normalized pointer event delivered on `surface`
    ///
    /// Events for surfaces `init` never bound are dropped silently.
    pub fn handle_pointer(&mut self, surface: &SharedSurface, event: PointerEvent) {
        let Some(&id) = self.bound.get(&surface_key(surface)) else {
            tracing::trace!("event for unbound surface dropped");
            return;
        };

        match event {
            PointerEvent::Press(sample) => self.press(id, surface, sample),
            PointerEvent::Move(sample) => self.drag(id, surface, sample),
            PointerEvent::Release => self.release(id, surface, event_types::POINTER_UP),
            PointerEvent::Cancel => self.release(id, surface, event_types::POINTER_CANCEL),
        }
    }

    // =========================================================================
    // Drag lifecycle
    // =========================================================================

    fn press(&mut self, id: BindingId, surface: &SharedSurface, sample: PointerSample) {
        let Some(binding) = self.bindings.get_mut(id) else {
            return;
        };
        let Some(next) = binding.state.on_event(event_types::POINTER_DOWN) else {
            return;
        };

        // The glide must die before the session opens, so the first move
        // delta can never share a tick with a stale momentum delta.
        if let Some(glide) = binding.glide.take() {
            self.momentum.cancel(glide);
        }

        binding.state = next;
        binding.session = Some(DragSession::begin(sample));
        surface.lock().unwrap().set_grabbed(true);
        tracing::trace!(x = sample.x, "drag session opened");
    }

    fn drag(&mut self, id: BindingId, surface: &SharedSurface, sample: PointerSample) {
        let Some(binding) = self.bindings.get_mut(id) else {
            return;
        };
        // Moves without a session are hover noise
        if !binding.state.is_dragging() {
            return;
        }
        let Some(session) = binding.session.as_mut() else {
            return;
        };

        let delta = session.advance(sample);
        let mut surface = surface.lock().unwrap();
        let offset = surface.scroll_x();
        surface.set_scroll_x(offset - delta);
    }

    fn release(&mut self, id: BindingId, surface: &SharedSurface, event: u32) {
        let Some(binding) = self.bindings.get_mut(id) else {
            return;
        };
        let Some(next) = binding.state.on_event(event) else {
            return;
        };
        binding.state = next;

        let session = binding.session.take();
        surface.lock().unwrap().set_grabbed(false);

        let velocity = session.map(|s| s.velocity()).unwrap_or(0.0);
        if velocity.abs() >= self.config.stop_epsilon {
            let glide = Glide::new(velocity, self.config.decay_per_step, self.config.stop_epsilon);
            binding.glide = Some(self.momentum.begin(surface, glide));
            tracing::trace!(velocity, "coasting");
        } else if let Some(settled) = binding.state.on_event(drag_events::SETTLED) {
            // Nothing worth coasting; settle in the same callback
            binding.state = settled;
        }
    }

    // =========================================================================
    // Scheduling
    // =========================================================================

    /// Advance all coasting surfaces one frame
    ///
    /// Call once per display refresh. Returns true while any surface is
    /// still dragging or coasting, so hosts know to schedule another tick.
    pub fn tick(&mut self) -> bool {
        self.momentum.tick();

        // Return bindings whose glide finished (or lost its surface) to rest
        for (_, binding) in self.bindings.iter_mut() {
            if let Some(glide) = binding.glide {
                if !self.momentum.is_active(glide) {
                    binding.glide = None;
                    if let Some(next) = binding.state.on_event(drag_events::SETTLED) {
                        binding.state = next;
                    }
                }
            }
        }

        self.bindings.iter().any(|(_, b)| b.state.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::Surface;
    use drift_platform::{MouseButton, TouchPoint};
    use smallvec::smallvec;
    use std::sync::Mutex;

    /// Card-row fixture recording what the engine does to it
    struct CardRow {
        offset: f32,
    }

    impl Surface for CardRow {
        fn scroll_x(&self) -> f32 {
            self.offset
        }

        fn set_scroll_x(&mut self, offset: f32) {
            self.offset = offset;
        }
    }

    /// Minimal page: class-selector lookup over named rows
    struct Page {
        rows: Vec<(String, SharedSurface)>,
    }

    impl Page {
        fn new() -> Self {
            Self { rows: Vec::new() }
        }

        fn add_row(&mut self, class: &str, offset: f32) -> SharedSurface {
            let row: SharedSurface = Arc::new(Mutex::new(CardRow { offset }));
            self.push(class, Arc::clone(&row));
            row
        }

        fn push(&mut self, class: &str, row: SharedSurface) {
            self.rows.push((class.to_string(), row));
        }
    }

    impl SurfaceQuery for Page {
        fn select(&self, selector: &str) -> Vec<SharedSurface> {
            let class = selector.trim_start_matches('.');
            self.rows
                .iter()
                .filter(|(c, _)| c == class)
                .map(|(_, row)| Arc::clone(row))
                .collect()
        }
    }

    fn offset_of(surface: &SharedSurface) -> f32 {
        surface.lock().unwrap().scroll_x()
    }

    fn press(engine: &mut CarouselEngine, row: &SharedSurface, x: f32, t: f64) {
        engine.handle_mouse(
            row,
            &MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y: 50.0,
                timestamp_ms: t,
            },
        );
    }

    fn drag_to(engine: &mut CarouselEngine, row: &SharedSurface, x: f32, t: f64) {
        engine.handle_mouse(
            row,
            &MouseEvent::Moved {
                x,
                y: 50.0,
                timestamp_ms: t,
            },
        );
    }

    fn release(engine: &mut CarouselEngine, row: &SharedSurface, x: f32, t: f64) {
        engine.handle_mouse(
            row,
            &MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                x,
                y: 50.0,
                timestamp_ms: t,
            },
        );
    }

    #[test]
    fn test_init_with_zero_matches_is_a_noop() {
        let page = Page::new();
        let mut engine = CarouselEngine::default();

        engine.init(&page);
        assert_eq!(engine.bound_count(), 0);
        assert!(!engine.tick());
    }

    #[test]
    fn test_init_twice_binds_each_surface_once() {
        let mut page = Page::new();
        let row = page.add_row("card-carousel", 500.0);
        page.add_row("card-carousel", 0.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);
        engine.init(&page);
        assert_eq!(engine.bound_count(), 2);

        // One input event applies its delta exactly once
        press(&mut engine, &row, 100.0, 0.0);
        drag_to(&mut engine, &row, 120.0, 16.0);
        assert_eq!(offset_of(&row), 480.0);
    }

    #[test]
    fn test_reinit_picks_up_new_rows_only() {
        let mut page = Page::new();
        page.add_row("card-carousel", 0.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);
        assert_eq!(engine.bound_count(), 1);

        page.add_row("card-carousel", 0.0);
        engine.init(&page);
        assert_eq!(engine.bound_count(), 2);
    }

    #[test]
    fn test_unmatched_classes_stay_unbound() {
        let mut page = Page::new();
        let hero = page.add_row("hero-banner", 0.0);
        page.add_row("card-carousel", 0.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);
        assert_eq!(engine.bound_count(), 1);

        // Events on the unbound surface are dropped silently
        press(&mut engine, &hero, 100.0, 0.0);
        drag_to(&mut engine, &hero, 200.0, 16.0);
        assert_eq!(offset_of(&hero), 0.0);
        assert_eq!(engine.state_of(&hero), None);
    }

    #[test]
    fn test_drag_applies_the_sum_of_deltas() {
        let mut page = Page::new();
        let row = page.add_row("card-carousel", 1000.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        press(&mut engine, &row, 100.0, 0.0);
        drag_to(&mut engine, &row, 120.0, 16.0); // +20
        drag_to(&mut engine, &row, 150.0, 32.0); // +30
        drag_to(&mut engine, &row, 140.0, 48.0); // -10

        // offset = initial - sum(deltas)
        assert_eq!(offset_of(&row), 1000.0 - 40.0);
        assert_eq!(engine.state_of(&row), Some(DragState::Dragging));
    }

    #[test]
    fn test_moves_without_a_press_do_nothing() {
        let mut page = Page::new();
        let row = page.add_row("card-carousel", 300.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        drag_to(&mut engine, &row, 500.0, 0.0);
        assert_eq!(offset_of(&row), 300.0);
        assert_eq!(engine.state_of(&row), Some(DragState::Idle));
    }

    #[test]
    fn test_release_above_epsilon_coasts() {
        let mut page = Page::new();
        let row = page.add_row("card-carousel", 500.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        press(&mut engine, &row, 100.0, 0.0);
        drag_to(&mut engine, &row, 140.0, 16.0);
        release(&mut engine, &row, 140.0, 32.0);

        assert_eq!(engine.state_of(&row), Some(DragState::Coasting));
    }

    #[test]
    fn test_release_without_velocity_settles_immediately() {
        let mut page = Page::new();
        let row = page.add_row("card-carousel", 500.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        // Press and release without any move: no coast
        press(&mut engine, &row, 100.0, 0.0);
        release(&mut engine, &row, 100.0, 16.0);
        assert_eq!(engine.state_of(&row), Some(DragState::Idle));

        // A drag that ends on a sub-epsilon flick settles too
        press(&mut engine, &row, 100.0, 100.0);
        drag_to(&mut engine, &row, 140.0, 116.0);
        drag_to(&mut engine, &row, 140.05, 132.0);
        release(&mut engine, &row, 140.05, 148.0);
        assert_eq!(engine.state_of(&row), Some(DragState::Idle));
    }

    #[test]
    fn test_flick_scenario_coasts_to_rest() {
        let mut page = Page::new();
        let row = page.add_row("card-carousel", 500.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        press(&mut engine, &row, 100.0, 0.0);
        drag_to(&mut engine, &row, 140.0, 16.0);
        assert_eq!(offset_of(&row), 460.0);
        release(&mut engine, &row, 140.0, 32.0);

        engine.tick();
        assert_eq!(offset_of(&row), 420.0);
        engine.tick();
        assert_eq!(offset_of(&row), 382.0);

        let mut ticks = 0;
        while engine.tick() {
            ticks += 1;
            assert!(ticks < 10_000);
        }

        assert_eq!(engine.state_of(&row), Some(DragState::Idle));

        // Offset is stable once idle
        let resting = offset_of(&row);
        assert!(!engine.tick());
        assert_eq!(offset_of(&row), resting);
    }

    #[test]
    fn test_new_press_cancels_the_coast_synchronously() {
        let mut page = Page::new();
        let row = page.add_row("card-carousel", 500.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        press(&mut engine, &row, 100.0, 0.0);
        drag_to(&mut engine, &row, 140.0, 16.0);
        release(&mut engine, &row, 140.0, 32.0);
        engine.tick();
        assert_eq!(offset_of(&row), 420.0);

        // Press lands while coasting: glide dies before anything else
        press(&mut engine, &row, 200.0, 48.0);
        assert_eq!(engine.state_of(&row), Some(DragState::Dragging));

        // No stale momentum delta on later ticks
        engine.tick();
        assert_eq!(offset_of(&row), 420.0);

        // The new session's deltas are the only mutation
        drag_to(&mut engine, &row, 210.0, 64.0);
        assert_eq!(offset_of(&row), 410.0);
    }

    #[test]
    fn test_leave_while_down_matches_pointer_up() {
        let mut page = Page::new();
        let upped = page.add_row("card-carousel", 500.0);
        let left = page.add_row("card-carousel", 500.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        for row in [&upped, &left] {
            press(&mut engine, row, 100.0, 0.0);
            drag_to(&mut engine, row, 140.0, 16.0);
        }
        release(&mut engine, &upped, 140.0, 32.0);
        engine.handle_mouse(&left, &MouseEvent::Left);

        assert_eq!(engine.state_of(&upped), Some(DragState::Coasting));
        assert_eq!(engine.state_of(&left), Some(DragState::Coasting));

        while engine.tick() {}
        assert_eq!(offset_of(&upped), offset_of(&left));
        assert_eq!(engine.state_of(&left), Some(DragState::Idle));
    }

    #[test]
    fn test_touch_drag_walks_the_same_states() {
        let mut page = Page::new();
        let row = page.add_row("card-carousel", 500.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        let finger = |x: f32| TouchPoint { id: 9, x, y: 60.0 };

        engine.handle_touch(
            &row,
            &TouchEvent::Started {
                touches: smallvec![finger(100.0)],
                timestamp_ms: 0.0,
            },
        );
        // A second finger joins; only the first is tracked
        engine.handle_touch(
            &row,
            &TouchEvent::Moved {
                touches: smallvec![finger(140.0), TouchPoint { id: 10, x: 900.0, y: 60.0 }],
                timestamp_ms: 16.0,
            },
        );
        assert_eq!(offset_of(&row), 460.0);

        engine.handle_touch(
            &row,
            &TouchEvent::Ended {
                touches: smallvec![],
                timestamp_ms: 32.0,
            },
        );
        assert_eq!(engine.state_of(&row), Some(DragState::Coasting));
    }

    #[test]
    fn test_torn_down_surface_degrades_silently() {
        let mut page = Page::new();
        let row = page.add_row("card-carousel", 500.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        press(&mut engine, &row, 100.0, 0.0);
        drag_to(&mut engine, &row, 140.0, 16.0);
        release(&mut engine, &row, 140.0, 32.0);

        // Host replaces the DOM mid-coast
        page.rows.clear();
        drop(row);

        // The glide vanishes without applying anything further
        assert!(!engine.tick());

        // Re-init prunes the dead binding
        engine.init(&page);
        assert_eq!(engine.bound_count(), 0);
    }

    #[test]
    fn test_grab_marker_follows_the_session() {
        use std::sync::atomic::{AtomicBool, Ordering};

        struct MarkedRow {
            offset: f32,
            grabbed: Arc<AtomicBool>,
        }

        impl Surface for MarkedRow {
            fn scroll_x(&self) -> f32 {
                self.offset
            }

            fn set_scroll_x(&mut self, offset: f32) {
                self.offset = offset;
            }

            fn set_grabbed(&mut self, grabbed: bool) {
                self.grabbed.store(grabbed, Ordering::SeqCst);
            }
        }

        let marker = Arc::new(AtomicBool::new(false));
        let row: SharedSurface = Arc::new(Mutex::new(MarkedRow {
            offset: 0.0,
            grabbed: Arc::clone(&marker),
        }));

        let mut page = Page::new();
        page.push("card-carousel", Arc::clone(&row));

        let mut engine = CarouselEngine::default();
        engine.init(&page);

        press(&mut engine, &row, 100.0, 0.0);
        assert!(marker.load(Ordering::SeqCst));

        drag_to(&mut engine, &row, 140.0, 16.0);
        assert!(marker.load(Ordering::SeqCst));

        release(&mut engine, &row, 140.0, 32.0);
        assert!(!marker.load(Ordering::SeqCst));
    }

    #[test]
    fn test_custom_selector_binds_other_classes() {
        let mut page = Page::new();
        let strip = page.add_row("media-strip", 0.0);

        let mut engine = CarouselEngine::default();
        engine.init(&page);
        assert_eq!(engine.bound_count(), 0);

        engine.init_with_selector(&page, ".media-strip");
        assert_eq!(engine.bound_count(), 1);
        assert_eq!(engine.state_of(&strip), Some(DragState::Idle));
    }
}
