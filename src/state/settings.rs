//! Animation and marker settings.
//!
//! Settings are persisted to localStorage so they survive page reloads.
//! Native builds always start from defaults.

use crate::error::{GlobeError, Result};
use crate::view::{Easing, LongitudePath, TransitionConfig, DEFAULT_DURATION};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// User-tunable animation and marker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeSettings {
    /// Length of a transition in milliseconds.
    pub transition_ms: u64,
    pub easing: Easing,
    pub longitude_path: LongitudePath,
    /// Marker radius in pixels.
    pub marker_radius: f32,
    /// Marker fill as RGBA.
    pub marker_color: [u8; 4],
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_DURATION.as_millis() as u64,
            easing: Easing::default(),
            longitude_path: LongitudePath::default(),
            marker_radius: 3.0,
            marker_color: [255, 0, 0, 255],
        }
    }
}

impl GlobeSettings {
    /// localStorage key for persisting settings.
    const STORAGE_KEY: &'static str = "globe_navigator_settings";

    pub const MIN_TRANSITION_MS: u64 = 0;
    pub const MAX_TRANSITION_MS: u64 = 10_000;
    pub const MIN_MARKER_RADIUS: f32 = 1.0;
    pub const MAX_MARKER_RADIUS: f32 = 20.0;

    /// Parses persisted settings and clamps them into range.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| GlobeError::Settings(e.to_string()))?;
        Ok(settings.clamped())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GlobeError::Settings(e.to_string()))
    }

    /// Returns a copy with every field forced into its valid range.
    pub fn clamped(mut self) -> Self {
        self.transition_ms = self
            .transition_ms
            .clamp(Self::MIN_TRANSITION_MS, Self::MAX_TRANSITION_MS);
        self.marker_radius = if self.marker_radius.is_finite() {
            self.marker_radius
                .clamp(Self::MIN_MARKER_RADIUS, Self::MAX_MARKER_RADIUS)
        } else {
            Self::default().marker_radius
        };
        self
    }

    pub fn transition_config(&self) -> TransitionConfig {
        TransitionConfig {
            duration: Duration::from_millis(self.transition_ms),
            easing: self.easing,
            longitude_path: self.longitude_path,
        }
    }

    /// Load settings from localStorage, falling back to defaults.
    pub fn load() -> Self {
        match read_stored(Self::STORAGE_KEY) {
            Some(json) => Self::from_stored(&json),
            None => Self::default(),
        }
    }

    /// Parses a stored value, discarding it when it no longer parses.
    fn from_stored(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded globe settings from localStorage");
                settings
            }
            Err(e) => {
                log::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Save settings to localStorage.
    pub fn save(&self) {
        match self.to_json() {
            Ok(json) => write_stored(Self::STORAGE_KEY, &json),
            Err(e) => log::warn!("{}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
fn read_stored(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn write_stored(key: &str, json: &str) {
    let Some(storage) = local_storage() else {
        return;
    };

    if let Err(e) = storage.set_item(key, json) {
        log::warn!("Failed to save globe settings: {:?}", e);
    } else {
        log::info!("Saved globe settings to localStorage");
    }
}

/// Native builds have no persistent store.
#[cfg(not(target_arch = "wasm32"))]
fn read_stored(key: &str) -> Option<String> {
    log::debug!("Using default settings ({} not persisted)", key);
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn write_stored(key: &str, json: &str) {
    log::debug!("Not persisting {} ({} bytes)", key, json.len());
}
