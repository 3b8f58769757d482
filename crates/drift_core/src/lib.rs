//! Drift Core Primitives
//!
//! This crate provides the foundational types shared by every Drift crate:
//!
//! - **Surfaces**: the host-owned scrollable viewports the engine drives
//! - **Event Constants**: unified pointer event identifiers for state machines
//! - **State Machines**: the transition trait interaction states implement
//!
//! The engine never owns a surface. Hosts hand out [`SharedSurface`] handles
//! and keep the `Arc` alive for as long as the element exists; the engine
//! holds weak references and degrades silently once a surface is torn down.

pub mod events;
pub mod fsm;
pub mod surface;

pub use fsm::StateTransitions;
pub use surface::{surface_key, SharedSurface, Surface, SurfaceKey, WeakSurface};
