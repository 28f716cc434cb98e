//! Geographic primitives and the globe projection.
//!
//! This module provides the coordinate type, the orthographic projection
//! that owns the camera orientation, and the built-in layers (graticule and
//! land outlines) that are redrawn through it every frame.

mod coord;
mod graticule;
mod layer;
mod outline;
mod projection;
mod renderer;

pub use coord::GeoCoordinate;
pub use layer::{GeoFeature, GeoLayer, GeoLayerSet, GeoLayerType};
pub use projection::ProjectionState;
pub use renderer::render_geo_layers;
