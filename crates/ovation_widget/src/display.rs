//! Display elements
//!
//! The compound children of the clap button: icon, count bubble, and
//! running total. Each is a free function over the shared context, so the
//! dependency is explicit in the signature. They hold no state of their
//! own; the only side effect is the count and total exposing their node
//! through the registrar.
//!
//! # Example
//!
//! ```ignore
//! use ovation_widget::prelude::*;
//!
//! let clap = ClapButton::new()
//!     .child(clap_icon)
//!     .child(clap_count)
//!     .child(clap_total);
//! ```

use ovation_core::{NodeHandle, RefKey};

use crate::context::ClapContext;
use crate::element::Element;
use crate::icon;
use crate::style;

/// The clap glyph, reflecting the clicked flag as the `checked` class
pub fn clap_icon(ctx: &ClapContext) -> Element {
    let mut svg = Element::svg().class(style::ICON_CLASS).text(icon::CLAP);
    if ctx.view().is_clicked {
        svg = svg.class(style::CHECKED_CLASS);
    }
    Element::span().child(svg)
}

/// The "+ N" bubble; registers its node under [`RefKey::Count`]
pub fn clap_count(ctx: &ClapContext) -> Element {
    let node = ctx.registrar().register(NodeHandle::new(RefKey::Count));
    Element::span()
        .class(style::COUNT_CLASS)
        .text(format!("+ {}", ctx.view().count))
        .node(node)
}

/// The running total; registers its node under [`RefKey::Total`]
pub fn clap_total(ctx: &ClapContext) -> Element {
    let node = ctx.registrar().register(NodeHandle::new(RefKey::Total));
    Element::span()
        .class(style::TOTAL_CLASS)
        .text(ctx.view().count_total.to_string())
        .node(node)
}
