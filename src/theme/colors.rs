//! Palette.
//!
//! Exposed to the stylesheet as CSS custom properties by [`palette_css`].

// === INK (Backgrounds) ===
pub const INK: &str = "#0b0b0c";
pub const INK_RAISED: &str = "#141416";
pub const INK_LINE: &str = "rgba(236, 232, 225, 0.12)";

// === BONE (Text) ===
pub const BONE: &str = "#ece8e1";
pub const BONE_MUTED: &str = "rgba(236, 232, 225, 0.56)";

// === EMBER (Accent) ===
pub const EMBER: &str = "#ff5a1f";
pub const EMBER_GLOW: &str = "rgba(255, 90, 31, 0.35)";

/// `:root` block declaring every palette color.
pub fn palette_css() -> String {
    format!(
        ":root {{ --ink: {INK}; --ink-raised: {INK_RAISED}; --ink-line: {INK_LINE}; \
         --bone: {BONE}; --bone-muted: {BONE_MUTED}; --ember: {EMBER}; --ember-glow: {EMBER_GLOW}; }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_declares_every_color() {
        let css = palette_css();
        for var in ["--ink:", "--ink-raised:", "--ink-line:", "--bone:", "--bone-muted:", "--ember:", "--ember-glow:"] {
            assert!(css.contains(var), "{var}");
        }
        assert!(css.starts_with(":root {"));
    }
}
