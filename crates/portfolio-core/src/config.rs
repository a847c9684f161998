//! Site-wide tunables.
//!
//! There is no config file: the values below are compiled in and handed to
//! components through context.

/// Width (px) below which the hero skips its scroll-linked timelines and the
/// header swaps to the hamburger control.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Per-60Hz-frame smoothing for the cursor ring.
pub const CURSOR_SMOOTHING: f64 = 0.15;

/// Fraction of the pointer's offset from a magnetic control's center that
/// the control moves by.
pub const MAGNETIC_STRENGTH: f64 = 0.3;

/// Per-60Hz-frame smoothing for magnetic controls.
pub const MAGNETIC_SMOOTHING: f64 = 0.2;

/// Tunables shared by every animated component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub mobile_breakpoint_px: f64,
    pub cursor_smoothing: f64,
    pub magnetic_strength: f64,
    pub magnetic_smoothing: f64,
    /// Magnetic buttons can be switched off globally
    pub magnetic_enabled: bool,
    /// Skip motion when the user asks the OS for reduced motion
    pub honor_reduced_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            cursor_smoothing: CURSOR_SMOOTHING,
            magnetic_strength: MAGNETIC_STRENGTH,
            magnetic_smoothing: MAGNETIC_SMOOTHING,
            magnetic_enabled: true,
            honor_reduced_motion: true,
        }
    }
}

impl SiteConfig {
    /// Media query matching viewports narrower than the mobile breakpoint.
    pub fn mobile_media_query(&self) -> String {
        format!("(max-width: {}px)", self.mobile_breakpoint_px - 1.0)
    }

    /// Whether motion should run given the user's reduced-motion preference.
    pub fn motion_allowed(&self, prefers_reduced_motion: bool) -> bool {
        !(self.honor_reduced_motion && prefers_reduced_motion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_query_is_exclusive_of_breakpoint() {
        let config = SiteConfig::default();
        assert_eq!(config.mobile_media_query(), "(max-width: 767px)");
    }

    #[test]
    fn reduced_motion_gate() {
        let config = SiteConfig::default();
        assert!(config.motion_allowed(false));
        assert!(!config.motion_allowed(true));

        let ignore = SiteConfig {
            honor_reduced_motion: false,
            ..SiteConfig::default()
        };
        assert!(ignore.motion_allowed(true));
    }
}
