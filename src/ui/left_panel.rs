//! Left panel UI: country selector, layers, and animation settings.

use crate::data::CountryCatalog;
use crate::geo::GeoLayerType;
use crate::state::{AppState, GlobeSettings};
use crate::view::{Easing, LongitudePath};
use eframe::egui::{self, Color32, RichText, ScrollArea};
use egui_phosphor::regular as icons;

pub fn render_left_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("left_panel")
        .resizable(true)
        .default_width(240.0)
        .min_width(200.0)
        .max_width(360.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Navigate");
                ui.separator();

                render_country_section(ui, state);
                ui.add_space(5.0);

                render_layers_section(ui, state);
                ui.add_space(5.0);

                render_animation_section(ui, state);
            });
        });
}

fn render_country_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Country").strong())
        .default_open(true)
        .show(ui, |ui| {
            let selected = selector_text(state).to_string();
            let has_countries = !state.catalog.is_empty();

            let mut picked = None;
            ui.add_enabled_ui(has_countries, |ui| {
                egui::ComboBox::from_id_salt("country_selector")
                    .selected_text(selected)
                    .width(190.0)
                    .height(320.0)
                    .show_ui(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(icons::MAGNIFYING_GLASS);
                            ui.add(
                                egui::TextEdit::singleline(&mut state.country_filter)
                                    .hint_text("Filter")
                                    .desired_width(150.0),
                            );
                        });
                        ui.separator();

                        for name in filter_countries(&state.catalog, &state.country_filter) {
                            let is_current = state.selected_country.as_deref() == Some(name);
                            if ui.selectable_label(is_current, name).clicked() {
                                picked = Some(name.to_string());
                            }
                        }
                    });
            });

            // Re-selecting the current country replays the animation.
            if picked.is_some() {
                state.pending_selection = picked;
            }

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                let label = format!("{} Clear markers ({})", icons::TRASH, state.markers.len());
                if ui
                    .add_enabled(!state.markers.is_empty(), egui::Button::new(label))
                    .clicked()
                {
                    state.clear_markers();
                }

                if ui
                    .add_enabled(
                        state.transition.is_animating(),
                        egui::Button::new(icons::STOP),
                    )
                    .on_hover_text("Stop rotation")
                    .clicked()
                {
                    state.cancel_transition();
                }
            });
        });
}

fn render_layers_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Layers").strong())
        .default_open(true)
        .show(ui, |ui| {
            let mut changed = false;
            changed |= ui
                .checkbox(
                    &mut state.layer_state.graticule,
                    GeoLayerType::Graticule.label(),
                )
                .changed();
            changed |= ui
                .checkbox(
                    &mut state.layer_state.outlines,
                    GeoLayerType::Outlines.label(),
                )
                .changed();
            ui.checkbox(&mut state.layer_state.markers, "Markers");
            ui.checkbox(&mut state.layer_state.labels, "Labels");

            if changed {
                state.apply_layer_state();
            }
        });
}

fn render_animation_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Animation").strong())
        .default_open(false)
        .show(ui, |ui| {
            let settings = &mut state.settings;
            let mut changed = false;

            changed |= ui
                .add(
                    egui::Slider::new(
                        &mut settings.transition_ms,
                        GlobeSettings::MIN_TRANSITION_MS..=GlobeSettings::MAX_TRANSITION_MS,
                    )
                    .text("ms"),
                )
                .changed();

            ui.horizontal(|ui| {
                ui.label("Easing:");
                egui::ComboBox::from_id_salt("easing_selector")
                    .selected_text(settings.easing.label())
                    .show_ui(ui, |ui| {
                        for easing in Easing::all() {
                            changed |= ui
                                .selectable_value(&mut settings.easing, *easing, easing.label())
                                .changed();
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label("Longitude:");
                egui::ComboBox::from_id_salt("longitude_path_selector")
                    .selected_text(settings.longitude_path.label())
                    .show_ui(ui, |ui| {
                        for path in LongitudePath::all() {
                            changed |= ui
                                .selectable_value(&mut settings.longitude_path, *path, path.label())
                                .changed();
                        }
                    });
            });

            ui.separator();

            changed |= ui
                .add(
                    egui::Slider::new(
                        &mut settings.marker_radius,
                        GlobeSettings::MIN_MARKER_RADIUS..=GlobeSettings::MAX_MARKER_RADIUS,
                    )
                    .text("marker px"),
                )
                .changed();

            ui.horizontal(|ui| {
                ui.label("Marker color:");
                let [r, g, b, a] = settings.marker_color;
                let mut color = Color32::from_rgba_unmultiplied(r, g, b, a);
                if ui.color_edit_button_srgba(&mut color).changed() {
                    settings.marker_color = color.to_srgba_unmultiplied();
                    changed = true;
                }
            });

            if ui.button("Reset to defaults").clicked() {
                *settings = GlobeSettings::default();
                changed = true;
            }

            if changed {
                state.apply_settings();
            }
        });
}

/// Text shown on the closed country selector.
fn selector_text(state: &AppState) -> &str {
    if state.catalog.is_empty() {
        return "No countries loaded";
    }
    state
        .pending_selection
        .as_deref()
        .or(state.selected_country.as_deref())
        .unwrap_or("Select a country")
}

/// Country names containing `filter`, case-insensitively, in catalog order.
fn filter_countries<'a>(catalog: &'a CountryCatalog, filter: &str) -> Vec<&'a str> {
    let needle = filter.trim().to_lowercase();
    catalog
        .names()
        .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
        .collect()
}
