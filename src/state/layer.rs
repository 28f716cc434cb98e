//! Layer visibility state.

use crate::geo::{GeoLayerSet, GeoLayerType};

/// State for toggling the globe's overlay layers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerState {
    /// Show the 10° graticule
    pub graticule: bool,

    /// Show land outlines
    pub outlines: bool,

    /// Show placed markers
    pub markers: bool,

    /// Show names of labelled outlines
    pub labels: bool,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            graticule: true,
            outlines: true,
            markers: true,
            labels: false,
        }
    }
}

impl LayerState {
    /// Pushes the geographic toggles down into the layer set.
    pub fn apply_to(&self, layers: &mut GeoLayerSet) {
        layers.set_visible(GeoLayerType::Graticule, self.graticule);
        layers.set_visible(GeoLayerType::Outlines, self.outlines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_to_hides_layers() {
        let mut layers = GeoLayerSet::builtin();
        let state = LayerState {
            graticule: false,
            ..Default::default()
        };
        state.apply_to(&mut layers);

        let visible: Vec<_> = layers
            .iter()
            .filter(|l| l.visible)
            .map(|l| l.layer_type)
            .collect();
        assert_eq!(visible, vec![GeoLayerType::Outlines]);
    }
}
