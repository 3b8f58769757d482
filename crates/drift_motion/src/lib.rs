//! Drift Momentum System
//!
//! Post-release inertial scrolling. When a drag ends with meaningful
//! velocity, the engine registers a [`Glide`] here; every display-refresh
//! tick the scheduler displaces the surface by the current velocity and
//! decays it, until the velocity falls under the glide's stop epsilon.
//!
//! # Features
//!
//! - **Cancellable**: [`MomentumScheduler::begin`] returns a [`GlideId`]
//!   handle; [`MomentumScheduler::cancel`] is idempotent and safe on
//!   handles that already settled
//! - **Cooperative**: one [`MomentumScheduler::tick`] call per refresh,
//!   no threads, no timers
//! - **Detachment-tolerant**: glides hold weak surface handles and vanish
//!   silently when the host tears the surface down

pub mod glide;
pub mod scheduler;

pub use glide::Glide;
pub use scheduler::{GlideId, MomentumScheduler};
