//! Rotation interpolation between two camera states.

use serde::{Deserialize, Serialize};

/// How the longitude component travels between start and end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LongitudePath {
    /// Straight numeric interpolation; may cross more than 180°
    #[default]
    Direct,
    /// Wraps across the antimeridian when that is the shorter way round
    Shortest,
}

impl LongitudePath {
    pub fn label(&self) -> &'static str {
        match self {
            LongitudePath::Direct => "Direct",
            LongitudePath::Shortest => "Shortest arc",
        }
    }

    pub fn all() -> &'static [LongitudePath] {
        &[LongitudePath::Direct, LongitudePath::Shortest]
    }
}

/// Interpolates a projection rotation `[λ, φ]` component-wise.
///
/// `at(0)` returns `start` and `at(1)` returns `end` bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationInterpolator {
    start: [f64; 2],
    end: [f64; 2],
    /// End value actually travelled towards; differs from `end` by a multiple
    /// of 360° on the longitude when wrapping.
    path_end: [f64; 2],
}

impl RotationInterpolator {
    pub fn new(start: [f64; 2], end: [f64; 2], path: LongitudePath) -> Self {
        let path_end = match path {
            LongitudePath::Direct => end,
            LongitudePath::Shortest => [start[0] + shortest_delta(start[0], end[0]), end[1]],
        };
        Self {
            start,
            end,
            path_end,
        }
    }

    #[cfg(test)]
    pub fn start(&self) -> [f64; 2] {
        self.start
    }

    #[cfg(test)]
    pub fn end(&self) -> [f64; 2] {
        self.end
    }

    /// Samples the rotation at progress `t`.
    pub fn at(&self, t: f64) -> [f64; 2] {
        if t <= 0.0 || self.is_stationary() {
            return self.start;
        }
        if t >= 1.0 {
            return self.end;
        }
        [
            lerp(self.start[0], self.path_end[0], t),
            lerp(self.start[1], self.path_end[1], t),
        ]
    }

    /// True when start and end coincide, so every sample is the same rotation.
    pub fn is_stationary(&self) -> bool {
        self.start == self.end
    }
}

/// `a·(1−t) + b·t`, exact at both ends.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Signed difference `to − from` folded into [-180, 180].
fn shortest_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_match_start_and_end() {
        let start = [-2.2, -46.2];
        let end = [-138.252924, -36.204824];
        for path in LongitudePath::all() {
            let i = RotationInterpolator::new(start, end, *path);
            assert_eq!(i.at(0.0), start);
            assert_eq!(i.at(1.0), end);
        }
    }

    #[test]
    fn test_direct_midpoint() {
        let i = RotationInterpolator::new([0.0, 0.0], [-100.0, -40.0], LongitudePath::Direct);
        assert_eq!(i.at(0.5), [-50.0, -20.0]);
    }

    #[test]
    fn test_shortest_path_wraps_antimeridian() {
        let i = RotationInterpolator::new([170.0, 0.0], [-170.0, 0.0], LongitudePath::Shortest);
        let mid = i.at(0.5);
        assert!((mid[0] - 180.0).abs() < 1e-9, "{mid:?}");
        assert_eq!(i.at(1.0), [-170.0, 0.0]);

        let direct = RotationInterpolator::new([170.0, 0.0], [-170.0, 0.0], LongitudePath::Direct);
        assert!(direct.at(0.5)[0].abs() < 1e-9);
    }

    #[test]
    fn test_stationary_when_endpoints_equal() {
        let i = RotationInterpolator::new([-2.2, -46.2], [-2.2, -46.2], LongitudePath::Direct);
        assert!(i.is_stationary());
        assert_eq!(i.at(0.37), [-2.2, -46.2]);
    }

    #[test]
    fn test_shortest_delta_range() {
        assert_eq!(shortest_delta(0.0, 90.0), 90.0);
        assert_eq!(shortest_delta(0.0, 270.0), -90.0);
        assert_eq!(shortest_delta(170.0, -170.0), 20.0);
    }
}
