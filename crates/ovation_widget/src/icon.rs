//! The clap-hands glyph
//!
//! The icon is a `&'static str` of SVG inner elements; hosts that want a
//! standalone file can wrap it with [`to_svg`].

/// viewBox the clap glyph was drawn against
pub const VIEW_BOX: &str = "0 0 100.08 125";

/// clapping hands
pub const CLAP: &str = r#"<path d="M77.7 12.88a8.1 8.1 0 012.27 4.05c.36-.27.75-.5 1.16-.7a5.04 5.04 0 00-8.12-5.8l-.22.21c1.85.18 3.57.93 4.91 2.24zM48.9 26.91c.4.89.68 1.93.78 3.06l16.48-16.93a8.12 8.12 0 012.15-1.54c1-1.93.7-4.37-.93-5.96a5.06 5.06 0 00-7.15.1l-15.5 15.93c2.31 2.27 3.09 3.03 4.16 5.34zM10.04 66.63a32.95 32.95 0 019.4-23.59L38 23.98c.72-2.03.5-4.08-.08-5.32-.84-1.82-1.31-2.27-3.55-4.45L13.5 35.65a30.07 30.07 0 00-2.26 39.29 33.29 33.29 0 01-1.2-8.31z"/><path d="M21.68 45.2l20.87-21.43c2.23 2.18 2.7 2.63 3.55 4.45a7.5 7.5 0 01-1.61 8.05L32.64 48.51a1.2 1.2 0 001.72 1.67L68.4 15.21a5.06 5.06 0 117.25 7.05L50.98 47.58a1.2 1.2 0 00.04 1.7 1.2 1.2 0 001.69-.02l28.48-29.28a5.06 5.06 0 017.25 7.06L59.94 56.3a1.2 1.2 0 00.04 1.69 1.2 1.2 0 001.68-.02l24.66-25.33a5.06 5.06 0 117.25 7.05L68.9 65.02a1.2 1.2 0 00.03 1.69 1.2 1.2 0 001.69-.01l14.56-14.98a5.07 5.07 0 117.25 7.06L64.79 87.17a30.09 30.09 0 01-43.11-41.96"/>"#;

/// Wrap icon inner elements in a complete SVG tag
pub fn to_svg(inner: &str, view_box: &str, size: f32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{view_box}" width="{size}" height="{size}">{inner}</svg>"#
    )
}
