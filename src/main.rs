#![warn(clippy::all)]

//! Globe Navigator - an interactive orthographic globe.
//!
//! Pick a country from the selector and the globe rotates to center it,
//! then drops a marker on it. Runs natively and in the browser.

mod data;
mod error;
mod geo;
mod state;
mod ui;
mod view;

use eframe::egui;
use state::AppState;
use view::TickOutcome;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 640.0])
            .with_title("Globe Navigator"),
        ..Default::default()
    };

    eframe::run_native(
        "Globe Navigator",
        native_options,
        Box::new(|cc| Ok(Box::new(GlobeApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(GlobeApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct GlobeApp {
    /// Application state containing all sub-states
    state: AppState,
}

impl GlobeApp {
    /// Creates a new GlobeApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut state = AppState::new();

        log::info!(
            "Loaded geo layers: {} features",
            state.geo_layers.feature_count()
        );

        // A shared link flies straight to its country on the first frame.
        let url_params = state::url_state::parse_from_url();
        if let Some(country) = url_params.country {
            log::info!("Restoring country from URL: {}", country);
            state.pending_selection = Some(country);
        }

        Self { state }
    }
}

impl eframe::App for GlobeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        self.state.apply_pending_selection(now);

        // Render UI panels in the correct order for egui layout
        // Side and top/bottom panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &self.state, now);
        ui::render_left_panel(ctx, &mut self.state);
        let update = ui::render_canvas(ctx, &mut self.state, now);
        ui::render_notification(ctx, &mut self.state);

        if update.redraw_requested {
            ctx.request_repaint();
        }

        if let TickOutcome::Completed { .. } = update.outcome {
            if let Some(country) = &self.state.selected_country {
                state::url_state::push_to_url(country);
            }
        }

        // A selection made this frame starts animating on the next one.
        if self.state.pending_selection.is_some() {
            ctx.request_repaint();
        }
    }
}
