//! Easing curves, named after the ones the site's motion was designed with.

/// Easing curve mapping linear progress in [0, 1] to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    Power2Out,
    Power3Out,
    Power4Out,
    Power2InOut,
    ExpoOut,
    ExpoInOut,
}

impl Ease {
    /// Apply the curve. Input is clamped; the endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = super::clamp01(t);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::ExpoOut => 1.0 - 2f64.powf(-10.0 * t),
            Ease::ExpoInOut => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }

    /// CSS `transition-timing-function` approximation for transitions driven
    /// by stylesheets instead of the frame loop.
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Ease::Power3Out => "cubic-bezier(0.25, 1, 0.5, 1)",
            Ease::Power4Out => "cubic-bezier(0.22, 1, 0.36, 1)",
            Ease::Power2InOut => "cubic-bezier(0.65, 0, 0.35, 1)",
            Ease::ExpoOut => "cubic-bezier(0.16, 1, 0.3, 1)",
            Ease::ExpoInOut => "cubic-bezier(0.87, 0, 0.13, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power4Out,
        Ease::Power2InOut,
        Ease::ExpoOut,
        Ease::ExpoInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn monotonic_on_unit_interval() {
        for ease in ALL {
            let mut last = 0.0;
            for i in 1..=100 {
                let v = ease.apply(i as f64 / 100.0);
                assert!(v >= last, "{ease:?} decreased at {i}");
                last = v;
            }
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Ease::Power3Out.apply(0.3) > 0.3);
        assert!(Ease::ExpoOut.apply(0.3) > 0.3);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-1.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(2.0), 1.0);
    }
}
