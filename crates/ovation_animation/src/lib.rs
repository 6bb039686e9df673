//! Ovation animation primitives
//!
//! The animation library the clap widget's coordinator drives:
//!
//! - **Easing**: standard curves plus numerically solved cubic beziers
//! - **Tracks**: scalar tweens with offsets, optionally chained into
//!   follow-up segments (fade in, then fade out)
//! - **Bursts**: particle-emission effects sampled into drawable frames
//! - **Timeline**: tracks and bursts combined under one replayable clock
//!
//! Timelines are built once and replayed; finishing never discards them.

pub mod burst;
pub mod easing;
pub mod timeline;
pub mod track;
pub mod values;

pub use burst::{Burst, BurstConfig, BurstFrame, Particle, ParticleShape};
pub use easing::Easing;
pub use timeline::{BurstId, Timeline, TrackId};
pub use track::Track;
pub use values::Interpolate;
