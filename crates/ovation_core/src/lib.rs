//! Ovation core types
//!
//! The foundation the clap widget is built on:
//!
//! - **Node handles**: shared references to platform nodes carrying the
//!   animatable visual properties (scale, vertical offset, opacity)
//! - **Node registry**: the keyed store display elements register their
//!   nodes into, consumed by the animation coordinator once complete
//! - **Color**: plain RGBA values used for burst paint and style tokens
//!
//! Everything here is single-threaded; shared handles are `Rc`-based.

pub mod color;
pub mod node;
pub mod registry;

pub use color::Color;
pub use node::{NodeHandle, NodeProperty, NodeVisual};
pub use registry::{NodeRegistry, NodeTriple, RefKey, Registrar};
