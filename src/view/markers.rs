//! Markers placed on the globe when a transition settles.

use crate::geo::{GeoCoordinate, ProjectionState};
use eframe::egui::{Color32, Painter, Pos2, Stroke};

/// A point marker pinned to a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinate: GeoCoordinate,
    /// Screen position at the moment the marker was placed
    pub placed_at: Pos2,
}

/// Markers in placement order.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coordinate: GeoCoordinate, placed_at: Pos2) {
        self.markers.push(Marker {
            coordinate,
            placed_at,
        });
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Marker> {
        self.markers.last()
    }
}

/// Draws markers that face the viewer, re-projected through the live rotation.
pub fn render_markers(
    painter: &Painter,
    markers: &MarkerLayer,
    projection: &ProjectionState,
    radius: f32,
    color: Color32,
) {
    for marker in markers.iter() {
        if !projection.is_visible(marker.coordinate) {
            continue;
        }
        let pos = projection.project(marker.coordinate);
        painter.circle_filled(pos, radius, color);
        painter.circle_stroke(
            pos,
            radius,
            Stroke::new(0.5, Color32::from_black_alpha(120)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_clear() {
        let mut layer = MarkerLayer::new();
        assert!(layer.is_empty());
        layer.push(GeoCoordinate::new(46.2, 2.2), Pos2::new(480.0, 250.0));
        layer.push(GeoCoordinate::new(36.2, 138.3), Pos2::new(480.0, 250.0));
        assert_eq!(layer.len(), 2);
        assert_eq!(
            layer.last().map(|m| m.coordinate),
            Some(GeoCoordinate::new(36.2, 138.3))
        );

        layer.clear();
        assert!(layer.is_empty());
    }
}
