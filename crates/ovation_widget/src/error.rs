//! Error types for ovation_widget

use thiserror::Error;

/// Lifecycle misuse errors
///
/// Everything on the animation path stays silent instead: missing node
/// registrations defer the timeline build, clamped counts are ordinary
/// state, and replaying is fire-and-forget.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClapError {
    /// Interaction arrived before `mount()`
    #[error("clap widget has not been mounted")]
    NotMounted,

    /// `mount()` called on a widget that is already mounted
    #[error("clap widget is already mounted")]
    AlreadyMounted,
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, ClapError>;
