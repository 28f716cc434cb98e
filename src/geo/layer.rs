//! Geographic layer data structures.

use super::{graticule, outline, GeoCoordinate};
use eframe::egui::Color32;
use geo_types::Coord;

/// Type of geographic layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoLayerType {
    Graticule,
    Outlines,
}

impl GeoLayerType {
    /// Returns the default color for this layer type.
    pub fn default_color(&self) -> Color32 {
        match self {
            GeoLayerType::Graticule => Color32::from_rgb(0xe3, 0xe3, 0xe3),
            GeoLayerType::Outlines => Color32::from_rgb(0x10, 0x10, 0x10),
        }
    }

    /// Returns the default line width for this layer type.
    pub fn default_line_width(&self) -> f32 {
        match self {
            GeoLayerType::Graticule => 0.6,
            GeoLayerType::Outlines => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GeoLayerType::Graticule => "Graticule",
            GeoLayerType::Outlines => "Land outlines",
        }
    }
}

/// A geographic feature that can be rendered.
#[derive(Debug, Clone)]
pub enum GeoFeature {
    /// A series of connected line segments (graticule lines)
    LineString(Vec<Coord<f64>>),
    /// A closed ring with optional label
    Polygon {
        exterior: Vec<Coord<f64>>,
        label: Option<String>,
    },
}

impl GeoFeature {
    /// Returns the vertex sequence to stroke, closing polygon rings.
    pub fn path(&self) -> Vec<Coord<f64>> {
        match self {
            GeoFeature::LineString(coords) => coords.clone(),
            GeoFeature::Polygon { exterior, .. } => {
                let mut ring = exterior.clone();
                if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
                    if first != last {
                        ring.push(first);
                    }
                }
                ring
            }
        }
    }

    /// Label and the point to draw it at: the spherical centroid of the ring.
    pub fn label_anchor(&self) -> Option<(&str, GeoCoordinate)> {
        let GeoFeature::Polygon {
            exterior,
            label: Some(label),
        } = self
        else {
            return None;
        };

        let ring = match (exterior.first(), exterior.last()) {
            (Some(first), Some(last)) if exterior.len() > 1 && first == last => {
                &exterior[..exterior.len() - 1]
            }
            _ => &exterior[..],
        };

        let (mut x, mut y, mut z) = (0.0_f64, 0.0_f64, 0.0_f64);
        for coord in ring {
            let (lat, lon) = (coord.y.to_radians(), coord.x.to_radians());
            x += lat.cos() * lon.cos();
            y += lat.cos() * lon.sin();
            z += lat.sin();
        }

        // Empty or antipodally balanced rings have no meaningful center.
        if (x * x + y * y + z * z).sqrt() < 1e-9 {
            return None;
        }
        let latitude = z.atan2(x.hypot(y)).to_degrees();
        let longitude = y.atan2(x).to_degrees();
        Some((label.as_str(), GeoCoordinate::new(latitude, longitude)))
    }
}

/// A geographic layer containing multiple features.
#[derive(Debug, Clone)]
pub struct GeoLayer {
    /// Type of this layer
    pub layer_type: GeoLayerType,
    /// Features in this layer
    pub features: Vec<GeoFeature>,
    /// Override color (None = use default)
    pub color: Option<Color32>,
    /// Override line width (None = use default)
    pub line_width: Option<f32>,
    /// Whether this layer is visible
    pub visible: bool,
}

impl GeoLayer {
    /// Creates a new empty layer of the specified type.
    pub fn new(layer_type: GeoLayerType) -> Self {
        Self {
            layer_type,
            features: Vec::new(),
            color: None,
            line_width: None,
            visible: true,
        }
    }

    pub fn with_features(layer_type: GeoLayerType, features: Vec<GeoFeature>) -> Self {
        Self {
            features,
            ..Self::new(layer_type)
        }
    }

    /// Returns the effective color for this layer.
    pub fn effective_color(&self) -> Color32 {
        self.color
            .unwrap_or_else(|| self.layer_type.default_color())
    }

    /// Returns the effective line width for this layer.
    pub fn effective_line_width(&self) -> f32 {
        self.line_width
            .unwrap_or_else(|| self.layer_type.default_line_width())
    }
}

/// The set of shapes redrawn through the projection every frame.
#[derive(Debug, Clone, Default)]
pub struct GeoLayerSet {
    pub graticule: Option<GeoLayer>,
    pub outlines: Option<GeoLayer>,
}

impl GeoLayerSet {
    /// Creates a new empty layer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the compiled-in graticule and land outline layers.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.set_layer(GeoLayer::with_features(
            GeoLayerType::Graticule,
            graticule::graticule_lines(graticule::DEFAULT_STEP_DEG),
        ));
        set.set_layer(GeoLayer::with_features(
            GeoLayerType::Outlines,
            outline::land_outlines(),
        ));
        set
    }

    /// Returns an iterator over all loaded layers, back to front.
    pub fn iter(&self) -> impl Iterator<Item = &GeoLayer> {
        [self.graticule.as_ref(), self.outlines.as_ref()]
            .into_iter()
            .flatten()
    }

    /// Returns a mutable iterator over all loaded layers.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GeoLayer> {
        [self.graticule.as_mut(), self.outlines.as_mut()]
            .into_iter()
            .flatten()
    }

    /// Total number of features across all layers.
    pub fn feature_count(&self) -> usize {
        self.iter().map(|layer| layer.features.len()).sum()
    }

    pub fn set_visible(&mut self, layer_type: GeoLayerType, visible: bool) {
        for layer in self.iter_mut() {
            if layer.layer_type == layer_type {
                layer.visible = visible;
            }
        }
    }

    fn set_layer(&mut self, layer: GeoLayer) {
        match layer.layer_type {
            GeoLayerType::Graticule => self.graticule = Some(layer),
            GeoLayerType::Outlines => self.outlines = Some(layer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_path_is_closed() {
        let feature = GeoFeature::Polygon {
            exterior: vec![
                Coord { x: 0.0, y: 0.0 },
                Coord { x: 10.0, y: 0.0 },
                Coord { x: 10.0, y: 10.0 },
            ],
            label: None,
        };
        let path = feature.path();
        assert_eq!(path.len(), 4);
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn test_label_anchor_is_ring_center() {
        let exterior = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.0, y: 0.0 },
            Coord { x: 10.0, y: 10.0 },
            Coord { x: 0.0, y: 10.0 },
            Coord { x: 0.0, y: 0.0 },
        ];
        let labelled = GeoFeature::Polygon {
            exterior: exterior.clone(),
            label: Some("Box".to_string()),
        };
        let (text, anchor) = labelled.label_anchor().unwrap();
        assert_eq!(text, "Box");
        assert!((anchor.longitude - 5.0).abs() < 1e-9);
        assert!((anchor.latitude - 5.0).abs() < 0.2);

        let unlabelled = GeoFeature::Polygon {
            exterior: exterior.clone(),
            label: None,
        };
        assert!(unlabelled.label_anchor().is_none());
        assert!(GeoFeature::LineString(exterior).label_anchor().is_none());
    }

    #[test]
    fn test_builtin_layers_are_populated() {
        let set = GeoLayerSet::builtin();
        assert_eq!(set.iter().count(), 2);
        assert!(set.iter().all(|l| !l.features.is_empty()));
    }

    #[test]
    fn test_set_visible_toggles_only_matching_layer() {
        let mut set = GeoLayerSet::builtin();
        set.set_visible(GeoLayerType::Graticule, false);
        assert!(!set.graticule.as_ref().is_some_and(|l| l.visible));
        assert!(set.outlines.as_ref().is_some_and(|l| l.visible));
    }
}
