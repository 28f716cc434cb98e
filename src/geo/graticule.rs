//! Meridian and parallel lines drawn behind the land outlines.

use super::GeoFeature;
use geo_types::Coord;

/// Spacing between graticule lines, in degrees.
pub const DEFAULT_STEP_DEG: f64 = 10.0;

/// Meridians stop short of the poles except every 90°.
const MINOR_LAT_EXTENT: f64 = 80.0;
const MAJOR_LAT_EXTENT: f64 = 90.0;

/// Vertex spacing along each line, in degrees.
const PRECISION_DEG: f64 = 2.5;

/// Generates the graticule as line strings.
///
/// Meridians run from -180° (inclusive) to 180° (exclusive), parallels
/// from -80° to 80°.
pub fn graticule_lines(step_deg: f64) -> Vec<GeoFeature> {
    let step = if step_deg.is_finite() && step_deg > 0.0 {
        step_deg
    } else {
        DEFAULT_STEP_DEG
    };

    let mut lines = Vec::new();

    for lon in stepped(-180.0, 180.0, step, false) {
        let extent = if (lon % 90.0).abs() < 1e-9 {
            MAJOR_LAT_EXTENT
        } else {
            MINOR_LAT_EXTENT
        };
        let coords = stepped(-extent, extent, PRECISION_DEG, true)
            .map(|lat| Coord { x: lon, y: lat })
            .collect();
        lines.push(GeoFeature::LineString(coords));
    }

    for lat in stepped(-MINOR_LAT_EXTENT, MINOR_LAT_EXTENT, step, true) {
        let coords = stepped(-180.0, 180.0, PRECISION_DEG, true)
            .map(|lon| Coord { x: lon, y: lat })
            .collect();
        lines.push(GeoFeature::LineString(coords));
    }

    lines
}

/// Evenly spaced values from `start` to `end`, computed by index to avoid drift.
fn stepped(start: f64, end: f64, step: f64, inclusive: bool) -> impl Iterator<Item = f64> {
    let span = (end - start) / step;
    let count = if inclusive {
        span.floor() as usize + 1
    } else {
        span.ceil() as usize
    };
    (0..count).map(move |i| start + i as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(feature: &GeoFeature) -> &[Coord<f64>] {
        match feature {
            GeoFeature::LineString(coords) => coords,
            GeoFeature::Polygon { .. } => panic!("graticule only produces line strings"),
        }
    }

    #[test]
    fn test_ten_degree_graticule_line_count() {
        let lines = graticule_lines(10.0);
        // 36 meridians + 17 parallels
        assert_eq!(lines.len(), 53);
    }

    #[test]
    fn test_major_meridians_reach_the_poles() {
        let lines = graticule_lines(10.0);
        let prime = lines
            .iter()
            .map(line)
            .find(|c| c.first().is_some_and(|p| p.x == 0.0))
            .expect("prime meridian present");
        assert_eq!(prime.first().map(|p| p.y), Some(-90.0));
        assert_eq!(prime.last().map(|p| p.y), Some(90.0));

        let minor = lines
            .iter()
            .map(line)
            .find(|c| c.first().is_some_and(|p| p.x == 10.0))
            .expect("10E meridian present");
        assert_eq!(minor.last().map(|p| p.y), Some(80.0));
    }

    #[test]
    fn test_parallels_span_full_longitude() {
        let lines = graticule_lines(10.0);
        let equator = lines
            .iter()
            .map(line)
            .find(|c| c.len() > 2 && c.iter().all(|p| p.y == 0.0))
            .expect("equator present");
        assert_eq!(equator.first().map(|p| p.x), Some(-180.0));
        assert_eq!(equator.last().map(|p| p.x), Some(180.0));
    }

    #[test]
    fn test_invalid_step_falls_back_to_default() {
        assert_eq!(graticule_lines(0.0).len(), graticule_lines(10.0).len());
        assert_eq!(graticule_lines(f64::NAN).len(), 53);
    }
}
