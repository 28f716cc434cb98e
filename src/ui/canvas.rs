//! Central canvas UI: the globe.

use crate::geo::render_geo_layers;
use crate::state::{AppState, FrameUpdate};
use crate::view::{render_markers, TickOutcome};
use eframe::egui::{self, Color32, Rect, RichText, Sense, Vec2};

const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
const OVERLAY_TEXT: Color32 = Color32::from_rgb(200, 200, 220);

/// Advances the transition to `now` and draws the globe.
///
/// Returns the frame update so the caller can schedule repaints and react
/// to completion.
pub fn render_canvas(ctx: &egui::Context, state: &mut AppState, now: f64) -> FrameUpdate {
    let mut update = FrameUpdate {
        outcome: TickOutcome::Idle,
        redraw_requested: false,
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, BACKGROUND);

        // Markers must be projected with the viewport of this frame.
        state.projection.set_viewport(rect);
        update = state.advance(now);

        render_geo_layers(
            &painter,
            &state.geo_layers,
            &state.projection,
            state.layer_state.labels,
        );

        if state.layer_state.markers {
            let [r, g, b, a] = state.settings.marker_color;
            render_markers(
                &painter,
                &state.markers,
                &state.projection,
                state.settings.marker_radius,
                Color32::from_rgba_unmultiplied(r, g, b, a),
            );
        }

        draw_overlay_info(ui, &rect, state, response.hover_pos());
    });

    update
}

fn draw_overlay_info(ui: &mut egui::Ui, rect: &Rect, state: &AppState, hover: Option<egui::Pos2>) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(220.0, 70.0));

    let orientation = state.projection.orientation();
    let [lambda, phi] = state.projection.rotation();

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            overlay_line(
                ui,
                format!(
                    "Center: {:.2}, {:.2}",
                    orientation.latitude, orientation.longitude
                ),
            );
            overlay_line(ui, format!("Rotate: {:.2}, {:.2}", lambda, phi));

            if let Some(target) = state.transition.target() {
                overlay_line(
                    ui,
                    format!("Target: {:.2}, {:.2}", target.latitude, target.longitude),
                );
            } else if let Some(coord) = hover.and_then(|pos| state.projection.invert(pos)) {
                overlay_line(
                    ui,
                    format!("Cursor: {:.2}, {:.2}", coord.latitude, coord.longitude),
                );
            }
        });
    });
}

fn overlay_line(ui: &mut egui::Ui, text: String) {
    ui.label(
        RichText::new(text)
            .monospace()
            .size(12.0)
            .color(OVERLAY_TEXT),
    );
}
