//! Rendering capabilities requested by a running transition.
//!
//! The transition never touches the painter directly. It asks a
//! [`GlobeRenderer`] to redraw and to place markers, which keeps the state
//! machine testable without a rendering surface.

use super::MarkerLayer;
use crate::geo::{GeoCoordinate, ProjectionState};
use eframe::egui::Pos2;

/// Side effects a transition needs from the rendering surface.
pub trait GlobeRenderer {
    /// Requests that every known shape be redrawn through `projection`.
    fn redraw_all(&mut self, projection: &ProjectionState);

    /// Requests a point marker at `point`, the projection of `coordinate`.
    fn place_marker(&mut self, coordinate: GeoCoordinate, point: Pos2);
}

/// Collects one frame's requests for the egui shell.
///
/// egui repaints the whole canvas each frame anyway, so a redraw request only
/// needs to schedule another frame; markers go straight into the layer.
pub struct FrameRequests<'a> {
    markers: &'a mut MarkerLayer,
    redraw_requested: bool,
}

impl<'a> FrameRequests<'a> {
    pub fn new(markers: &'a mut MarkerLayer) -> Self {
        Self {
            markers,
            redraw_requested: false,
        }
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }
}

impl GlobeRenderer for FrameRequests<'_> {
    fn redraw_all(&mut self, _projection: &ProjectionState) {
        self.redraw_requested = true;
    }

    fn place_marker(&mut self, coordinate: GeoCoordinate, point: Pos2) {
        log::debug!(
            "Placing marker at ({:.3}, {:.3}) -> ({:.1}, {:.1})",
            coordinate.latitude,
            coordinate.longitude,
            point.x,
            point.y
        );
        self.markers.push(coordinate, point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_recorded() {
        let mut markers = MarkerLayer::new();
        let projection = ProjectionState::new();
        {
            let mut requests = FrameRequests::new(&mut markers);
            assert!(!requests.redraw_requested());
            requests.redraw_all(&projection);
            requests.place_marker(GeoCoordinate::new(1.0, 2.0), Pos2::new(3.0, 4.0));
            assert!(requests.redraw_requested());
        }
        assert_eq!(markers.len(), 1);
    }
}
