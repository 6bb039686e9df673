//! Medium-style clap button
//!
//! A compound widget: an interactive clap surface hosting an icon, a
//! floating "+ N" count bubble, and a running total, all wired through a
//! shared context and animated by one replayable timeline.
//!
//! # Example
//!
//! ```rust
//! use ovation_widget::prelude::*;
//!
//! let mut clap = ClapButton::new()
//!     .child(clap_icon)
//!     .child(clap_count)
//!     .child(clap_total)
//!     .on_clap(|state| println!("you have clapped {} times", state.count));
//!
//! let tree = clap.mount().unwrap();
//! assert!(tree.find_by_class("count").is_some());
//!
//! clap.click().unwrap();
//! clap.tick(16.0);
//! assert_eq!(clap.state().count, 1);
//! ```

pub mod context;
pub mod coordinator;
pub mod display;
pub mod element;
pub mod error;
pub mod icon;
pub mod state;
pub mod style;
pub mod widget;


pub use context::{ClapContext, ClapView};
pub use coordinator::{AnimatorPhase, ClapAnimator, TL_DURATION};
pub use display::{clap_count, clap_icon, clap_total};
pub use element::{Element, ElementKind};
pub use error::{ClapError, Result};
pub use state::{ClapState, DEFAULT_COUNT_TOTAL, MAX_USER_CLAPS};
pub use widget::{ClapButton, ClapObserver, WidgetPhase};

pub mod prelude {
    pub use crate::context::{ClapContext, ClapView};
    // Display children
    pub use crate::display::{clap_count, clap_icon, clap_total};
    pub use crate::element::{Element, ElementKind};
    pub use crate::error::{ClapError, Result};
    pub use crate::state::{ClapState, DEFAULT_COUNT_TOTAL, MAX_USER_CLAPS};
    // Root widget and its lifecycle
    pub use crate::widget::{ClapButton, ClapObserver, WidgetPhase};
}
