//! Blocking error notification.

use crate::state::AppState;
use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular as icons;

/// Shows the pending error in a modal window until dismissed.
pub fn render_notification(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.error_message.clone() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("error_notification")).show(ctx, |ui| {
        ui.set_width(280.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(icons::WARNING)
                    .size(20.0)
                    .color(Color32::from_rgb(230, 160, 60)),
            );
            ui.heading("Error");
        });
        ui.separator();
        ui.label(message);
        ui.add_space(8.0);
        ui.button("OK").clicked()
    });

    if modal.inner || modal.should_close() {
        state.dismiss_error();
    }
}
