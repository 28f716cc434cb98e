//! Application state management.
//!
//! This module contains all state structures used throughout the application.
//! `AppState` owns the projection, the transition driving it and everything
//! the UI panels read and edit.

mod layer;
mod settings;
pub mod url_state;

pub use layer::LayerState;
pub use settings::GlobeSettings;

use crate::data::CountryCatalog;
use crate::error::{GlobeError, Result};
use crate::geo::{GeoLayerSet, ProjectionState};
use crate::view::{FrameRequests, MarkerLayer, TickOutcome, ViewTransition};

/// Result of advancing the transition by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    pub outcome: TickOutcome,
    /// The transition asked for the globe to be drawn again.
    pub redraw_requested: bool,
}

/// Root application state containing all sub-states.
pub struct AppState {
    /// Camera orientation and projection parameters
    pub projection: ProjectionState,

    /// Animation towards the selected country
    pub transition: ViewTransition,

    /// Countries offered in the selector
    pub catalog: CountryCatalog,

    /// Graticule and outline shapes
    pub geo_layers: GeoLayerSet,

    /// Markers placed by completed transitions
    pub markers: MarkerLayer,

    /// Persisted animation/marker settings
    pub settings: GlobeSettings,

    /// Layer visibility toggles
    pub layer_state: LayerState,

    /// Country picked in the selector, applied on the next frame
    pub pending_selection: Option<String>,

    /// Text typed into the selector's search box
    pub country_filter: String,

    /// Country the camera last settled on
    pub selected_country: Option<String>,

    /// Application status message displayed in top bar
    pub status_message: String,

    /// Error shown in the blocking notification, if any
    pub error_message: Option<String>,

    /// Country the running transition is heading to
    heading_to: Option<String>,
}

impl AppState {
    /// Builds the state from the compiled-in catalog and persisted settings.
    pub fn new() -> Self {
        let settings = GlobeSettings::load();
        match CountryCatalog::builtin() {
            Ok(catalog) => {
                log::info!("Loaded {} countries", catalog.len());
                Self::with_catalog(catalog, settings)
            }
            Err(e) => {
                log::error!("{}", e);
                let mut state = Self::with_catalog(CountryCatalog::default(), settings);
                state.report_error(&e);
                state
            }
        }
    }

    pub fn with_catalog(catalog: CountryCatalog, settings: GlobeSettings) -> Self {
        let layer_state = LayerState::default();
        let mut geo_layers = GeoLayerSet::builtin();
        layer_state.apply_to(&mut geo_layers);

        Self {
            projection: ProjectionState::new(),
            transition: ViewTransition::new(settings.transition_config()),
            catalog,
            geo_layers,
            markers: MarkerLayer::new(),
            settings,
            layer_state,
            pending_selection: None,
            country_filter: String::new(),
            selected_country: None,
            status_message: "Ready".to_string(),
            error_message: None,
            heading_to: None,
        }
    }

    /// Starts flying to the named country at clock time `now`.
    ///
    /// An unknown name or a malformed catalog entry leaves the camera and any
    /// running transition untouched.
    pub fn select_country(&mut self, name: &str, now: f64) -> Result<()> {
        let country = self.catalog.find(name)?;
        let target = country.coordinate();
        self.transition.run(target, &self.projection, now)?;

        log::info!("Selected {}", name);
        self.heading_to = Some(name.to_string());
        self.status_message = format!("Rotating to {}", name);
        Ok(())
    }

    /// Applies the selection queued by the UI, reporting any failure.
    pub fn apply_pending_selection(&mut self, now: f64) {
        if let Some(name) = self.pending_selection.take() {
            if let Err(e) = self.select_country(&name, now) {
                self.report_error(&e);
            }
        }
    }

    /// Advances the running transition by one frame.
    pub fn advance(&mut self, now: f64) -> FrameUpdate {
        let mut requests = FrameRequests::new(&mut self.markers);
        let outcome = self
            .transition
            .tick(now, &mut self.projection, &mut requests);
        let redraw_requested = requests.redraw_requested();

        match outcome {
            TickOutcome::Completed { .. } => {
                self.selected_country = self.heading_to.take();
                if let Some(name) = &self.selected_country {
                    self.status_message = format!("Centered on {}", name);
                }
            }
            TickOutcome::Cancelled { .. } => {
                self.heading_to = None;
                self.status_message = "Ready".to_string();
            }
            TickOutcome::Idle | TickOutcome::Frame { .. } => {}
        }

        FrameUpdate {
            outcome,
            redraw_requested,
        }
    }

    /// Stops the running transition where it is.
    pub fn cancel_transition(&mut self) {
        if self.transition.cancel() {
            self.heading_to = None;
            self.status_message = "Cancelled".to_string();
        }
    }

    pub fn clear_markers(&mut self) {
        log::debug!("Clearing {} markers", self.markers.len());
        self.markers.clear();
    }

    /// Stores edited settings and applies them to the next transition.
    pub fn apply_settings(&mut self) {
        self.settings = self.settings.clone().clamped();
        self.transition.set_config(self.settings.transition_config());
        self.settings.save();
    }

    /// Applies the layer toggles to the geographic layers.
    pub fn apply_layer_state(&mut self) {
        self.layer_state.apply_to(&mut self.geo_layers);
    }

    pub fn report_error(&mut self, error: &GlobeError) {
        log::warn!("{}", error);
        self.error_message = Some(error.to_string());
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::countries::Country;
    use crate::geo::GeoCoordinate;

    fn state() -> AppState {
        let catalog = CountryCatalog::builtin().unwrap();
        AppState::with_catalog(catalog, GlobeSettings::default())
    }

    /// Advances in 100 ms steps until the transition settles.
    fn settle(state: &mut AppState, from: f64) -> f64 {
        let mut now = from;
        while !matches!(state.advance(now).outcome, TickOutcome::Completed { .. }) {
            now += 0.1;
            assert!(now < from + 5.0, "transition never settled");
        }
        now
    }

    #[test]
    fn test_select_france_settles_with_one_marker() {
        let mut state = state();
        state.select_country("France", 0.0).unwrap();
        assert_eq!(state.status_message, "Rotating to France");
        settle(&mut state, 0.0);

        let france = GeoCoordinate::new(46.227638, 2.213749);
        assert_eq!(state.projection.orientation(), france);
        assert_eq!(state.markers.len(), 1);
        let marker = state.markers.last().unwrap();
        assert_eq!(marker.coordinate, france);
        let offset = marker.placed_at - state.projection.center();
        assert!(offset.length() < 1e-3);
        assert_eq!(state.selected_country.as_deref(), Some("France"));
        assert_eq!(state.status_message, "Centered on France");
    }

    #[test]
    fn test_unknown_country_reports_error_and_keeps_view() {
        let catalog = CountryCatalog::from_json(
            r#"[
                {"name": "France", "latitude": 46.2, "longitude": 2.2},
                {"name": "Japan", "latitude": 36.2, "longitude": 138.3}
            ]"#,
        )
        .unwrap();
        let mut state = AppState::with_catalog(catalog, GlobeSettings::default());
        state.pending_selection = Some("Atlantis".to_string());
        state.apply_pending_selection(0.0);

        assert_eq!(
            state.error_message.as_deref(),
            Some("Country not found: Atlantis")
        );
        assert!(!state.transition.is_animating());
        assert_eq!(state.advance(1.0).outcome, TickOutcome::Idle);
        assert_eq!(state.projection.orientation(), GeoCoordinate::new(0.0, 0.0));
        assert!(state.markers.is_empty());

        state.dismiss_error();
        state.pending_selection = Some("Japan".to_string());
        state.apply_pending_selection(2.0);
        assert!(state.error_message.is_none());
        assert!(state.transition.is_animating());
    }

    #[test]
    fn test_unknown_country_does_not_interrupt_running_transition() {
        let mut state = state();
        state.select_country("France", 0.0).unwrap();
        state.advance(0.2);
        assert!(state.select_country("Atlantis", 0.3).is_err());
        settle(&mut state, 0.4);
        assert_eq!(state.selected_country.as_deref(), Some("France"));
    }

    #[test]
    fn test_japan_supersedes_france() {
        let mut state = state();
        state.select_country("France", 0.0).unwrap();
        state.advance(0.0);
        state.advance(0.3);
        state.select_country("Japan", 0.4).unwrap();
        settle(&mut state, 0.4);

        let japan = GeoCoordinate::new(36.204824, 138.252924);
        assert_eq!(state.projection.orientation(), japan);
        assert_eq!(state.markers.len(), 1);
        assert_eq!(state.markers.last().map(|m| m.coordinate), Some(japan));
        assert_eq!(state.selected_country.as_deref(), Some("Japan"));
    }

    #[test]
    fn test_same_country_twice_adds_second_marker() {
        let mut state = state();
        state.select_country("Japan", 0.0).unwrap();
        let done = settle(&mut state, 0.0);
        let rotation = state.projection.rotation();

        state.select_country("Japan", done + 1.0).unwrap();
        state.advance(done + 1.5);
        assert_eq!(state.projection.rotation(), rotation);
        settle(&mut state, done + 1.5);

        assert_eq!(state.markers.len(), 2);
        assert_eq!(state.projection.rotation(), rotation);
    }

    #[test]
    fn test_malformed_catalog_entry_is_rejected() {
        let catalog = CountryCatalog::from_countries([Country {
            name: "Nowhere".into(),
            latitude: 120.0,
            longitude: 0.0,
        }]);
        let mut state = AppState::with_catalog(catalog, GlobeSettings::default());
        let err = state.select_country("Nowhere", 0.0).unwrap_err();
        assert!(matches!(err, GlobeError::MalformedCoordinate { .. }));
        assert!(!state.transition.is_animating());
    }

    #[test]
    fn test_settings_apply_to_next_transition() {
        let mut state = state();
        state.settings.transition_ms = 200;
        state.apply_settings();

        state.select_country("Brazil", 0.0).unwrap();
        assert!(matches!(
            state.advance(0.1).outcome,
            TickOutcome::Frame { .. }
        ));
        assert!(matches!(
            state.advance(0.2).outcome,
            TickOutcome::Completed { .. }
        ));
    }

    #[test]
    fn test_redraw_is_requested_only_while_animating() {
        let mut state = state();
        let idle = state.advance(0.0);
        assert_eq!(idle.outcome, TickOutcome::Idle);
        assert!(!idle.redraw_requested);

        state.select_country("Peru", 0.0).unwrap();
        let frame = state.advance(0.5);
        assert!(matches!(frame.outcome, TickOutcome::Frame { .. }));
        assert!(frame.redraw_requested);

        let last = state.advance(1.0);
        assert!(matches!(last.outcome, TickOutcome::Completed { .. }));
        assert!(last.redraw_requested);

        assert!(!state.advance(1.1).redraw_requested);

        state.select_country("Peru", 2.0).unwrap();
        state.cancel_transition();
        let cancelled = state.advance(2.5);
        assert!(!cancelled.redraw_requested);
    }

    #[test]
    fn test_cancel_and_clear() {
        let mut state = state();
        state.select_country("Chile", 0.0).unwrap();
        state.advance(0.5);
        state.cancel_transition();
        assert!(!state.transition.is_animating());
        assert_eq!(state.advance(1.0).outcome, TickOutcome::Idle);
        assert!(state.selected_country.is_none());

        state.select_country("Chile", 2.0).unwrap();
        settle(&mut state, 2.0);
        assert_eq!(state.markers.len(), 1);
        state.clear_markers();
        assert!(state.markers.is_empty());
    }
}
