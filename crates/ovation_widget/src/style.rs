//! Style tokens
//!
//! Class names the host's stylesheet targets, plus the two burst paint
//! colors. All of these are opaque to the widget itself.

use ovation_core::Color;

pub const CLAP_CLASS: &str = "clap";
pub const ICON_CLASS: &str = "icon";
/// Added to the icon once the visitor has clapped
pub const CHECKED_CLASS: &str = "checked";
pub const COUNT_CLASS: &str = "count";
pub const TOTAL_CLASS: &str = "total";

/// Triangle particle outline, rgba(211, 54, 0, 0.5)
pub const BURST_STROKE: Color = Color::rgba(211.0 / 255.0, 54.0 / 255.0, 0.0, 0.5);

/// Dot particle fill, rgba(149, 165, 166, 0.5)
pub const BURST_FILL: Color = Color::rgba(149.0 / 255.0, 165.0 / 255.0, 166.0 / 255.0, 0.5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_paint_channels() {
        assert_eq!(BURST_STROKE, Color::rgb8(211, 54, 0).with_alpha(0.5));
        assert_eq!(BURST_FILL, Color::rgb8(149, 165, 166).with_alpha(0.5));
    }
}
