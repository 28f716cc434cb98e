//! Geographic layer rendering.
//!
//! Renders geographic features onto the globe through the orthographic
//! projection. Every visible layer is fully redrawn each frame.

use super::{GeoCoordinate, GeoFeature, GeoLayer, GeoLayerSet, ProjectionState};
use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};
use geo_types::Coord;

/// Sphere fill behind all layers.
const SPHERE_FILL: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
/// Sphere rim.
const SPHERE_STROKE: Color32 = Color32::from_rgb(0xb0, 0xb0, 0xb0);

/// Draws the globe disc and every visible layer, back to front.
pub fn render_geo_layers(
    painter: &Painter,
    layers: &GeoLayerSet,
    projection: &ProjectionState,
    show_labels: bool,
) {
    painter.circle_filled(projection.center(), projection.scale(), SPHERE_FILL);

    for layer in layers.iter().filter(|layer| layer.visible) {
        render_layer(painter, layer, projection);
        if show_labels {
            render_labels(painter, layer, projection);
        }
    }

    painter.circle_stroke(
        projection.center(),
        projection.scale(),
        Stroke::new(1.0, SPHERE_STROKE),
    );
}

/// Renders a single geographic layer.
fn render_layer(painter: &Painter, layer: &GeoLayer, projection: &ProjectionState) {
    let stroke = Stroke::new(layer.effective_line_width(), layer.effective_color());

    for feature in &layer.features {
        for run in visible_runs(&feature.path(), projection) {
            painter.add(Shape::line(run, stroke));
        }
    }
}

/// Draws each labelled feature's name at its anchor, front side only.
fn render_labels(painter: &Painter, layer: &GeoLayer, projection: &ProjectionState) {
    for (text, pos) in visible_labels(layer, projection) {
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(10.0),
            layer.effective_color(),
        );
    }
}

/// Screen positions of the labels whose anchor faces the viewer.
pub fn visible_labels<'a>(
    layer: &'a GeoLayer,
    projection: &ProjectionState,
) -> Vec<(&'a str, Pos2)> {
    layer
        .features
        .iter()
        .filter_map(GeoFeature::label_anchor)
        .filter(|(_, anchor)| projection.is_visible(*anchor))
        .map(|(text, anchor)| (text, projection.project(anchor)))
        .collect()
}

/// Splits a path into screen-space runs that lie on the visible hemisphere.
///
/// Runs shorter than two points are dropped; the far side of the globe is
/// never drawn.
pub fn visible_runs(coords: &[Coord<f64>], projection: &ProjectionState) -> Vec<Vec<Pos2>> {
    let mut runs = Vec::new();
    let mut current: Vec<Pos2> = Vec::new();

    for &coord in coords {
        let coord = GeoCoordinate::from(coord);
        if projection.is_visible(coord) {
            current.push(projection.project(coord));
        } else if !current.is_empty() {
            if current.len() >= 2 {
                runs.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }

    if current.len() >= 2 {
        runs.push(current);
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equator(lons: &[f64]) -> Vec<Coord<f64>> {
        lons.iter().map(|&x| Coord { x, y: 0.0 }).collect()
    }

    #[test]
    fn test_fully_visible_path_is_one_run() {
        let projection = ProjectionState::new();
        let runs = visible_runs(&equator(&[-30.0, 0.0, 30.0]), &projection);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 3);
    }

    #[test]
    fn test_far_side_splits_path() {
        let projection = ProjectionState::new();
        let path = equator(&[-60.0, -30.0, 120.0, 150.0, 170.0, 30.0, 60.0]);
        let runs = visible_runs(&path, &projection);
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|r| r.len() == 2));
    }

    #[test]
    fn test_isolated_visible_vertex_is_dropped() {
        let projection = ProjectionState::new();
        let path = equator(&[120.0, 10.0, 150.0]);
        assert!(visible_runs(&path, &projection).is_empty());
    }

    #[test]
    fn test_runs_follow_rotation() {
        let mut projection = ProjectionState::new();
        let path = equator(&[170.0, 175.0, 179.0]);
        assert!(visible_runs(&path, &projection).is_empty());

        projection.set_rotation([-175.0, 0.0]);
        assert_eq!(visible_runs(&path, &projection).len(), 1);
    }

    #[test]
    fn test_labels_follow_rotation() {
        let mut projection = ProjectionState::new();
        let layers = GeoLayerSet::builtin();
        let outlines = layers.outlines.as_ref().unwrap();
        let names = |projection: &ProjectionState| -> Vec<String> {
            visible_labels(outlines, projection)
                .into_iter()
                .map(|(text, _)| text.to_string())
                .collect()
        };

        assert!(names(&projection).iter().any(|n| n == "Africa"));
        assert!(!names(&projection).iter().any(|n| n == "Australia"));

        projection.set_rotation([-135.0, 25.0]);
        assert!(names(&projection).iter().any(|n| n == "Australia"));
        assert!(!names(&projection).iter().any(|n| n == "Africa"));
    }
}
