//! Top bar UI: app title, current country, and status.

use crate::state::AppState;
use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular as icons;

pub fn render_top_bar(ctx: &egui::Context, state: &AppState, now: f64) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new(format!("{} Globe Navigator", icons::GLOBE))
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                let country = state.selected_country.as_deref().unwrap_or("-");
                ui.label(RichText::new("Country:").size(12.0).color(Color32::GRAY));
                ui.label(RichText::new(country).monospace().size(12.0));

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );

                if let Some(progress) = state.transition.progress(now) {
                    ui.add(
                        egui::ProgressBar::new(progress as f32)
                            .desired_width(80.0)
                            .desired_height(8.0),
                    );
                }
            });
        });
}
