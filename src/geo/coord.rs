//! Geographic coordinates in degrees.

use crate::error::{GlobeError, Result};
use geo_types::Coord;

/// A point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoCoordinate {
    /// Latitude, -90 (south) to 90 (north)
    pub latitude: f64,
    /// Longitude, -180 (west) to 180 (east)
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true when both components are finite and in range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Rejects coordinates that would animate to an undefined screen position.
    pub fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(GlobeError::MalformedCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Projection rotation `[λ, φ]` that brings this point to the center of view.
    ///
    /// The globe is rotated under a fixed camera, so the rotation is the
    /// negated coordinate.
    pub fn to_rotation(self) -> [f64; 2] {
        [-self.longitude, -self.latitude]
    }
}

impl From<GeoCoordinate> for Coord<f64> {
    fn from(c: GeoCoordinate) -> Self {
        Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<Coord<f64>> for GeoCoordinate {
    fn from(c: Coord<f64>) -> Self {
        Self::new(c.y, c.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(GeoCoordinate::new(90.0, 180.0).validate().is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).validate().is_ok());
        assert!(GeoCoordinate::new(46.2, 2.2).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_and_nan() {
        let err = GeoCoordinate::new(91.0, 0.0).validate().unwrap_err();
        assert_eq!(
            err,
            GlobeError::MalformedCoordinate {
                latitude: 91.0,
                longitude: 0.0
            }
        );
        assert!(GeoCoordinate::new(0.0, -180.5).validate().is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoCoordinate::new(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_rotation_is_negated_lon_lat() {
        let france = GeoCoordinate::new(46.2, 2.2);
        assert_eq!(france.to_rotation(), [-2.2, -46.2]);
    }

    #[test]
    fn test_coord_conversion_swaps_axes() {
        let c: Coord<f64> = GeoCoordinate::new(10.0, 20.0).into();
        assert_eq!(c.x, 20.0);
        assert_eq!(c.y, 10.0);
        assert_eq!(GeoCoordinate::from(c), GeoCoordinate::new(10.0, 20.0));
    }
}
