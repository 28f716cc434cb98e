//! Orthographic globe projection and the camera orientation it is built from.
//!
//! Handles converting between geographic coordinates (lat/lon) and
//! screen coordinates for rendering the globe on the canvas.

use super::GeoCoordinate;
use eframe::egui::{Pos2, Rect};
use glam::{DMat3, DVec3};

/// Default globe radius in pixels, before the canvas size is known.
const DEFAULT_SCALE: f64 = 249.5;

/// Default canvas size the globe is laid out in, before the first frame.
const DEFAULT_VIEWPORT: [f64; 2] = [960.0, 500.0];

/// Gap kept between the globe edge and the shorter canvas side.
const VIEWPORT_MARGIN: f64 = 8.0;

/// Owns the camera orientation and maps geographic to screen coordinates.
///
/// Two angles are tracked separately:
/// - `rotation` is the live camera rotation, rewritten every animation frame.
/// - `orientation` is the coordinate last settled at, written only when a
///   transition completes.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Coordinate currently settled at the center of view
    orientation: GeoCoordinate,
    /// Live rotation `[λ, φ]` in degrees
    rotation: [f64; 2],
    /// Rotation matrix derived from `rotation`
    matrix: DMat3,
    /// Globe radius in pixels
    scale: f64,
    /// Screen position of the globe center
    translate: [f64; 2],
}

impl Default for ProjectionState {
    fn default() -> Self {
        let mut projection = Self {
            orientation: GeoCoordinate::default(),
            rotation: [0.0, 0.0],
            matrix: rotation_matrix([0.0, 0.0]),
            scale: DEFAULT_SCALE,
            translate: [DEFAULT_VIEWPORT[0] / 2.0, DEFAULT_VIEWPORT[1] / 2.0],
        };
        // Initial orientation is whatever sits under the viewport center.
        if let Some(center) = projection.invert(projection.center()) {
            projection.orientation = center;
        }
        projection
    }
}

impl ProjectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits the globe into the given canvas rectangle.
    pub fn set_viewport(&mut self, rect: Rect) {
        let center = rect.center();
        self.translate = [center.x as f64, center.y as f64];
        let half = rect.size().min_elem() as f64 / 2.0;
        self.scale = (half - VIEWPORT_MARGIN).max(1.0);
    }

    /// Screen position of the globe center.
    pub fn center(&self) -> Pos2 {
        Pos2::new(self.translate[0] as f32, self.translate[1] as f32)
    }

    /// Globe radius in pixels.
    pub fn scale(&self) -> f32 {
        self.scale as f32
    }

    pub fn orientation(&self) -> GeoCoordinate {
        self.orientation
    }

    /// Overwrites the settled orientation and snaps the camera onto it.
    ///
    /// No range validation happens here; callers validate upstream.
    pub fn set_orientation(&mut self, coord: GeoCoordinate) {
        self.orientation = coord;
        self.set_rotation(coord.to_rotation());
    }

    pub fn rotation(&self) -> [f64; 2] {
        self.rotation
    }

    /// Sets the live camera rotation `[λ, φ]` without touching the orientation.
    pub fn set_rotation(&mut self, rotation: [f64; 2]) {
        self.rotation = rotation;
        self.matrix = rotation_matrix(rotation);
    }

    /// Projects a coordinate to screen space.
    ///
    /// Points on the far hemisphere still get a position (mirrored onto the
    /// disc); use [`Self::is_visible`] to clip them.
    pub fn project(&self, coord: GeoCoordinate) -> Pos2 {
        let v = self.rotate(coord);
        Pos2::new(
            (self.translate[0] + self.scale * v.y) as f32,
            (self.translate[1] - self.scale * v.z) as f32,
        )
    }

    /// Checks whether a coordinate faces the viewer.
    pub fn is_visible(&self, coord: GeoCoordinate) -> bool {
        self.rotate(coord).x >= 0.0
    }

    /// Converts a screen position back to a coordinate.
    ///
    /// Returns `None` for positions outside the globe disc.
    pub fn invert(&self, pos: Pos2) -> Option<GeoCoordinate> {
        let y = (pos.x as f64 - self.translate[0]) / self.scale;
        let z = -(pos.y as f64 - self.translate[1]) / self.scale;
        let rho_sq = y * y + z * z;
        if !rho_sq.is_finite() || rho_sq > 1.0 {
            return None;
        }

        let view = DVec3::new((1.0 - rho_sq).sqrt(), y, z);
        // The matrix is orthonormal, so its transpose undoes the rotation.
        let world = self.matrix.transpose() * view;
        Some(cartesian_to_geo(world))
    }

    fn rotate(&self, coord: GeoCoordinate) -> DVec3 {
        self.matrix * geo_to_cartesian(coord)
    }
}

/// Rotation by λ about the polar axis, then by φ about the resulting y axis.
fn rotation_matrix(rotation: [f64; 2]) -> DMat3 {
    let [lambda, phi] = rotation;
    DMat3::from_rotation_y(-phi.to_radians()) * DMat3::from_rotation_z(lambda.to_radians())
}

fn geo_to_cartesian(coord: GeoCoordinate) -> DVec3 {
    let lat = coord.latitude.to_radians();
    let lon = coord.longitude.to_radians();
    DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

fn cartesian_to_geo(v: DVec3) -> GeoCoordinate {
    let lat = v.z.clamp(-1.0, 1.0).asin();
    let lon = v.y.atan2(v.x);
    GeoCoordinate::new(lat.to_degrees(), lon.to_degrees())
}
