//! Error types shared across the globe navigator.

/// Errors raised while resolving a selection or preparing a transition.
///
/// Every error is terminal for the single request that produced it; later
/// selections are unaffected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GlobeError {
    /// The selected name does not match any known country.
    #[error("Country not found: {name}")]
    SelectionNotFound { name: String },

    /// A coordinate is non-finite or outside the valid latitude/longitude range.
    #[error("Malformed coordinate: latitude {latitude}, longitude {longitude}")]
    MalformedCoordinate { latitude: f64, longitude: f64 },

    /// The compiled-in country catalog could not be parsed.
    #[error("Failed to load country catalog: {0}")]
    Catalog(String),

    /// Persisted settings could not be read back.
    #[error("Failed to read settings: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, GlobeError>;
