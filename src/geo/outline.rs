//! Coarse compiled-in land outlines.
//!
//! These are hand-simplified rings, good enough to orient the viewer on a
//! 500px globe. Vertices are `(latitude, longitude)` in degrees.

use super::GeoFeature;
use geo_types::Coord;

const NORTH_AMERICA: &[(f64, f64)] = &[
    (70.0, -162.0),
    (71.3, -156.5),
    (69.8, -141.0),
    (69.5, -129.0),
    (68.0, -115.0),
    (68.5, -98.0),
    (70.0, -88.0),
    (66.5, -85.5),
    (62.5, -93.5),
    (58.8, -94.2),
    (55.0, -82.3),
    (51.3, -79.8),
    (55.5, -77.0),
    (60.0, -77.5),
    (62.4, -74.0),
    (58.6, -67.8),
    (60.3, -64.5),
    (56.0, -61.0),
    (52.3, -55.7),
    (47.5, -59.3),
    (45.3, -61.0),
    (43.6, -65.9),
    (44.8, -66.9),
    (42.0, -70.1),
    (40.6, -73.9),
    (37.0, -76.0),
    (35.2, -75.5),
    (32.0, -80.9),
    (29.0, -80.9),
    (25.2, -80.4),
    (26.7, -82.1),
    (30.0, -84.0),
    (30.3, -88.5),
    (29.2, -90.2),
    (29.7, -94.0),
    (27.8, -97.4),
    (22.3, -97.8),
    (18.9, -95.9),
    (18.5, -91.4),
    (21.5, -87.1),
    (17.0, -88.3),
    (15.7, -88.2),
    (15.3, -83.4),
    (11.0, -83.7),
    (9.0, -79.5),
    (8.3, -77.5),
    (7.2, -80.9),
    (8.5, -83.0),
    (11.0, -85.8),
    (13.3, -87.5),
    (15.7, -93.5),
    (16.0, -97.0),
    (17.7, -101.6),
    (19.3, -105.0),
    (22.9, -109.9),
    (24.5, -112.1),
    (28.0, -114.2),
    (31.3, -113.1),
    (28.0, -111.3),
    (23.2, -106.4),
    (30.5, -115.9),
    (34.0, -118.5),
    (36.6, -121.9),
    (40.4, -124.4),
    (43.4, -124.3),
    (46.2, -124.0),
    (48.4, -124.7),
    (54.2, -130.4),
    (58.3, -136.6),
    (60.0, -141.5),
    (60.9, -147.6),
    (59.2, -151.8),
    (57.0, -157.0),
    (54.8, -163.5),
    (58.6, -161.5),
    (60.7, -165.1),
    (64.4, -161.0),
    (65.6, -168.1),
    (68.9, -166.2),
    (70.0, -162.0),
];

const SOUTH_AMERICA: &[(f64, f64)] = &[
    (12.4, -71.7),
    (10.6, -66.0),
    (10.6, -61.9),
    (8.4, -60.1),
    (5.8, -55.0),
    (4.3, -51.6),
    (-0.1, -50.0),
    (-1.3, -44.9),
    (-2.9, -39.5),
    (-5.2, -35.5),
    (-8.2, -34.9),
    (-13.0, -38.5),
    (-18.0, -39.6),
    (-22.9, -42.0),
    (-23.0, -44.8),
    (-25.5, -48.3),
    (-28.6, -48.8),
    (-32.0, -52.1),
    (-34.9, -54.9),
    (-34.6, -58.4),
    (-36.4, -56.7),
    (-38.7, -62.3),
    (-41.1, -63.0),
    (-42.6, -64.3),
    (-46.0, -67.5),
    (-48.5, -67.2),
    (-50.1, -68.7),
    (-52.3, -68.4),
    (-54.9, -67.1),
    (-55.6, -69.2),
    (-52.9, -74.7),
    (-49.0, -75.5),
    (-45.8, -74.7),
    (-41.9, -73.6),
    (-37.2, -73.6),
    (-33.0, -71.6),
    (-27.1, -70.9),
    (-18.3, -70.4),
    (-14.8, -75.7),
    (-12.1, -77.1),
    (-6.9, -79.9),
    (-4.3, -81.3),
    (-2.2, -80.9),
    (1.0, -80.0),
    (3.9, -77.3),
    (7.4, -77.7),
    (8.7, -76.9),
    (11.2, -74.2),
    (12.4, -71.7),
];

const AFRICA: &[(f64, f64)] = &[
    (35.8, -5.9),
    (37.1, 10.2),
    (33.8, 11.1),
    (30.3, 19.1),
    (32.8, 22.5),
    (31.5, 29.9),
    (31.3, 32.3),
    (27.2, 33.8),
    (22.0, 36.9),
    (15.6, 39.4),
    (12.6, 43.3),
    (11.8, 51.2),
    (4.2, 48.0),
    (-1.7, 41.6),
    (-6.8, 39.3),
    (-10.7, 40.5),
    (-15.0, 40.7),
    (-20.0, 35.0),
    (-25.9, 32.9),
    (-29.9, 31.0),
    (-33.9, 25.6),
    (-34.8, 20.0),
    (-33.9, 18.4),
    (-28.6, 16.4),
    (-22.9, 14.4),
    (-17.3, 11.8),
    (-11.9, 13.7),
    (-8.8, 13.2),
    (-5.9, 12.2),
    (-0.7, 8.8),
    (4.3, 9.4),
    (4.4, 6.9),
    (6.4, 3.4),
    (5.1, -1.0),
    (4.4, -7.5),
    (7.4, -12.9),
    (10.1, -14.6),
    (14.7, -17.4),
    (20.8, -17.1),
    (27.7, -13.2),
    (31.5, -9.8),
    (35.8, -5.9),
];

const EURASIA: &[(f64, f64)] = &[
    (36.0, -5.6),
    (37.0, -8.9),
    (43.0, -9.3),
    (43.5, -1.5),
    (46.3, -1.2),
    (48.6, -4.6),
    (49.7, -1.3),
    (51.1, 2.5),
    (53.4, 6.0),
    (54.9, 8.6),
    (57.7, 10.6),
    (55.4, 10.9),
    (54.4, 12.1),
    (54.7, 18.6),
    (57.2, 21.6),
    (59.4, 24.7),
    (60.5, 28.7),
    (60.7, 22.3),
    (65.8, 24.2),
    (63.1, 20.9),
    (59.4, 18.1),
    (56.1, 16.0),
    (56.1, 12.6),
    (58.9, 11.2),
    (58.0, 7.0),
    (62.0, 5.0),
    (66.0, 12.8),
    (69.7, 18.9),
    (71.1, 25.8),
    (69.8, 32.4),
    (66.5, 40.5),
    (68.5, 44.0),
    (67.7, 53.7),
    (68.9, 60.0),
    (72.9, 69.0),
    (72.6, 80.5),
    (74.0, 86.7),
    (77.0, 104.3),
    (73.8, 112.9),
    (73.0, 128.5),
    (71.6, 139.9),
    (72.7, 150.5),
    (69.6, 161.0),
    (70.0, 176.0),
    (66.1, -169.7),
    (64.9, 176.0),
    (62.0, 164.0),
    (59.9, 163.2),
    (56.0, 162.0),
    (51.0, 156.7),
    (57.0, 156.8),
    (61.7, 159.9),
    (59.3, 143.2),
    (53.4, 141.4),
    (48.8, 140.4),
    (42.7, 133.1),
    (39.2, 127.5),
    (34.8, 126.4),
    (37.9, 124.7),
    (39.9, 121.6),
    (40.9, 121.1),
    (39.0, 117.7),
    (37.0, 119.0),
    (36.9, 122.5),
    (35.0, 119.5),
    (31.2, 121.9),
    (27.0, 120.2),
    (22.6, 114.2),
    (21.5, 109.8),
    (20.3, 110.1),
    (21.6, 106.8),
    (16.1, 108.2),
    (10.4, 107.3),
    (8.6, 104.8),
    (10.4, 104.5),
    (13.4, 100.9),
    (12.2, 99.2),
    (7.0, 100.6),
    (1.3, 103.8),
    (4.0, 100.6),
    (8.4, 98.3),
    (16.4, 97.6),
    (16.9, 94.2),
    (22.3, 91.8),
    (21.8, 89.0),
    (20.3, 86.6),
    (15.8, 80.3),
    (13.1, 80.3),
    (8.1, 77.5),
    (10.0, 76.2),
    (15.5, 73.8),
    (20.9, 72.8),
    (22.3, 69.0),
    (24.8, 66.8),
    (25.3, 61.6),
    (27.2, 56.3),
    (30.0, 50.2),
    (29.4, 47.9),
    (26.3, 50.1),
    (24.2, 51.6),
    (24.3, 54.5),
    (26.2, 56.3),
    (22.6, 59.8),
    (17.0, 54.1),
    (12.8, 45.0),
    (16.9, 42.7),
    (21.5, 39.2),
    (27.9, 35.2),
    (29.5, 34.9),
    (31.5, 34.4),
    (33.9, 35.5),
    (36.8, 36.0),
    (36.2, 30.6),
    (37.3, 27.2),
    (40.4, 26.2),
    (41.0, 29.0),
    (41.7, 41.6),
    (44.6, 37.6),
    (45.3, 36.5),
    (46.6, 30.8),
    (44.2, 28.6),
    (41.0, 28.9),
    (40.6, 22.9),
    (37.9, 23.7),
    (36.4, 22.4),
    (39.5, 20.0),
    (42.6, 18.1),
    (45.3, 13.6),
    (44.0, 12.6),
    (40.6, 18.0),
    (38.0, 15.6),
    (41.2, 13.6),
    (44.4, 8.9),
    (43.3, 5.4),
    (41.4, 2.2),
    (39.5, -0.3),
    (36.7, -2.1),
    (36.0, -5.6),
];

const AUSTRALIA: &[(f64, f64)] = &[
    (-10.7, 142.5),
    (-14.6, 144.0),
    (-19.3, 146.8),
    (-23.4, 150.9),
    (-28.2, 153.6),
    (-33.9, 151.3),
    (-37.5, 149.9),
    (-38.4, 144.8),
    (-37.8, 140.0),
    (-34.9, 138.5),
    (-32.0, 133.6),
    (-31.7, 128.9),
    (-33.9, 123.6),
    (-35.0, 117.9),
    (-34.3, 115.0),
    (-31.9, 115.8),
    (-26.0, 113.4),
    (-21.8, 114.1),
    (-19.9, 119.0),
    (-17.9, 122.2),
    (-14.3, 126.8),
    (-14.9, 129.6),
    (-12.4, 130.8),
    (-11.1, 132.6),
    (-12.1, 136.7),
    (-15.0, 135.4),
    (-17.7, 140.8),
    (-12.6, 141.7),
    (-10.7, 142.5),
];

const GREENLAND: &[(f64, f64)] = &[
    (83.6, -35.0),
    (82.0, -21.0),
    (76.0, -18.5),
    (70.4, -22.0),
    (66.0, -36.0),
    (60.0, -43.5),
    (64.2, -51.7),
    (70.6, -54.5),
    (76.5, -68.5),
    (79.5, -66.0),
    (82.0, -60.0),
    (83.6, -35.0),
];

const GREAT_BRITAIN: &[(f64, f64)] = &[
    (58.6, -3.0),
    (57.6, -1.8),
    (55.8, -2.0),
    (53.6, 0.2),
    (52.9, 1.6),
    (51.4, 1.4),
    (50.7, -1.1),
    (50.0, -5.7),
    (51.6, -5.0),
    (53.3, -4.6),
    (54.6, -3.6),
    (55.7, -4.9),
    (58.0, -5.5),
    (58.6, -3.0),
];

const JAPAN: &[(f64, f64)] = &[
    (45.5, 141.9),
    (43.3, 145.6),
    (41.8, 141.0),
    (40.5, 141.9),
    (38.3, 141.5),
    (35.7, 140.9),
    (34.6, 138.2),
    (33.5, 135.8),
    (31.0, 131.0),
    (33.6, 129.9),
    (35.5, 133.0),
    (37.3, 136.7),
    (39.9, 139.9),
    (41.4, 140.0),
    (43.2, 140.4),
    (45.5, 141.9),
];

const ANTARCTICA: &[(f64, f64)] = &[
    (-63.3, -57.0),
    (-70.0, -62.0),
    (-74.0, -78.0),
    (-73.0, -100.0),
    (-75.0, -130.0),
    (-77.5, -160.0),
    (-77.5, 170.0),
    (-71.0, 170.0),
    (-66.5, 140.0),
    (-66.2, 110.0),
    (-66.5, 90.0),
    (-67.5, 70.0),
    (-67.0, 50.0),
    (-69.5, 30.0),
    (-70.0, 10.0),
    (-71.0, -10.0),
    (-74.0, -25.0),
    (-77.5, -45.0),
    (-72.0, -60.0),
    (-63.3, -57.0),
];

const OUTLINES: &[(&str, &[(f64, f64)])] = &[
    ("North America", NORTH_AMERICA),
    ("South America", SOUTH_AMERICA),
    ("Africa", AFRICA),
    ("Eurasia", EURASIA),
    ("Australia", AUSTRALIA),
    ("Greenland", GREENLAND),
    ("Great Britain", GREAT_BRITAIN),
    ("Japan", JAPAN),
    ("Antarctica", ANTARCTICA),
];

/// Builds one polygon feature per compiled-in land mass.
pub fn land_outlines() -> Vec<GeoFeature> {
    OUTLINES
        .iter()
        .map(|(name, ring)| GeoFeature::Polygon {
            exterior: ring
                .iter()
                .map(|&(lat, lon)| Coord { x: lon, y: lat })
                .collect(),
            label: Some((*name).to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rings_are_closed_and_in_range() {
        for (name, ring) in OUTLINES {
            assert!(ring.len() >= 4, "{name} has too few vertices");
            assert_eq!(ring.first(), ring.last(), "{name} ring is not closed");
            for &(lat, lon) in ring.iter() {
                assert!((-90.0..=90.0).contains(&lat), "{name}: bad latitude {lat}");
                assert!(
                    (-180.0..=180.0).contains(&lon),
                    "{name}: bad longitude {lon}"
                );
            }
        }
    }

    #[test]
    fn test_outlines_are_labelled() {
        let features = land_outlines();
        assert_eq!(features.len(), OUTLINES.len());
        let labels: Vec<&str> = features
            .iter()
            .filter_map(GeoFeature::label_anchor)
            .map(|(text, _)| text)
            .collect();
        assert_eq!(labels.len(), OUTLINES.len());
        assert!(labels.contains(&"Greenland"));
    }
}
