//! Interpolatable visual properties and their CSS rendering.

use super::lerp;

/// The set of visual properties a tween can animate.
///
/// `Default` is the resting state: no offset, full scale and opacity, no blur,
/// no clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Horizontal offset in px
    pub x: f64,
    /// Vertical offset in px
    pub y: f64,
    /// Horizontal offset as a percentage of the element's own width
    pub x_percent: f64,
    /// Vertical offset as a percentage of the element's own height
    pub y_percent: f64,
    pub scale: f64,
    /// Rotation in degrees
    pub rotate: f64,
    /// Horizontal skew in degrees
    pub skew_x: f64,
    pub opacity: f64,
    /// Gaussian blur radius in px
    pub blur: f64,
    /// Percentage of the element hidden from the bottom edge (wipe reveal)
    pub clip_bottom: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            x_percent: 0.0,
            y_percent: 0.0,
            scale: 1.0,
            rotate: 0.0,
            skew_x: 0.0,
            opacity: 1.0,
            blur: 0.0,
            clip_bottom: 0.0,
        }
    }
}

impl VisualState {
    /// The resting state.
    pub fn rest() -> Self {
        Self::default()
    }

    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub fn with_y_percent(self, y_percent: f64) -> Self {
        Self { y_percent, ..self }
    }

    pub fn with_x_percent(self, x_percent: f64) -> Self {
        Self { x_percent, ..self }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn with_rotate(self, rotate: f64) -> Self {
        Self { rotate, ..self }
    }

    pub fn with_skew_x(self, skew_x: f64) -> Self {
        Self { skew_x, ..self }
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn with_blur(self, blur: f64) -> Self {
        Self { blur, ..self }
    }

    pub fn with_clip_bottom(self, clip_bottom: f64) -> Self {
        Self { clip_bottom, ..self }
    }

    /// Interpolate every property. `t` is used as-is so eased values may
    /// overshoot.
    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        VisualState {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            x_percent: lerp(self.x_percent, to.x_percent, t),
            y_percent: lerp(self.y_percent, to.y_percent, t),
            scale: lerp(self.scale, to.scale, t),
            rotate: lerp(self.rotate, to.rotate, t),
            skew_x: lerp(self.skew_x, to.skew_x, t),
            opacity: lerp(self.opacity, to.opacity, t),
            blur: lerp(self.blur, to.blur, t),
            clip_bottom: lerp(self.clip_bottom, to.clip_bottom, t),
        }
    }

    /// Value for the CSS `transform` property.
    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({:.3}px, {:.3}px, 0) translate({:.3}%, {:.3}%) rotate({:.3}deg) skewX({:.3}deg) scale({:.4})",
            self.x, self.y, self.x_percent, self.y_percent, self.rotate, self.skew_x, self.scale
        )
    }

    /// Value for the CSS `filter` property.
    pub fn filter_css(&self) -> String {
        if self.blur <= 0.0 {
            "none".to_string()
        } else {
            format!("blur({:.3}px)", self.blur)
        }
    }

    /// Value for the CSS `clip-path` property.
    pub fn clip_css(&self) -> String {
        if self.clip_bottom <= 0.0 {
            "none".to_string()
        } else {
            format!("inset(0 0 {:.3}% 0)", self.clip_bottom.min(100.0))
        }
    }

    /// Opacity clamped to what CSS accepts.
    pub fn opacity_css(&self) -> String {
        format!("{:.4}", super::clamp01(self.opacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_renders_identity() {
        let rest = VisualState::rest();
        assert_eq!(
            rest.transform_css(),
            "translate3d(0.000px, 0.000px, 0) translate(0.000%, 0.000%) rotate(0.000deg) skewX(0.000deg) scale(1.0000)"
        );
        assert_eq!(rest.filter_css(), "none");
        assert_eq!(rest.clip_css(), "none");
        assert_eq!(rest.opacity_css(), "1.0000");
    }

    #[test]
    fn lerp_midpoint() {
        let from = VisualState::rest().with_y(100.0).with_opacity(0.0).with_blur(10.0);
        let mid = from.lerp(&VisualState::rest(), 0.5);
        assert_eq!(mid.y, 50.0);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.filter_css(), "blur(5.000px)");
    }

    #[test]
    fn clip_is_capped() {
        let state = VisualState::rest().with_clip_bottom(140.0);
        assert_eq!(state.clip_css(), "inset(0 0 100.000% 0)");
    }

    #[test]
    fn opacity_css_clamps_overshoot() {
        assert_eq!(VisualState::rest().with_opacity(1.2).opacity_css(), "1.0000");
    }
}
