//! Easing curves applied to transition progress.

use serde::{Deserialize, Serialize};

/// Maps linear progress `t ∈ [0, 1]` to eased progress.
///
/// Every curve maps 0 to 0 and 1 to 1 exactly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Slow start and end, symmetric around the midpoint
    #[default]
    CubicInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::CubicInOut => "Cubic in/out",
        }
    }

    pub fn all() -> &'static [Easing] {
        &[Easing::Linear, Easing::CubicInOut]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in Easing::all() {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_cubic_in_out_is_symmetric() {
        let e = Easing::CubicInOut;
        assert_eq!(e.apply(0.5), 0.5);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-12);
        assert!(e.apply(0.25) < 0.25);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::CubicInOut.apply(2.0), 1.0);
    }
}
