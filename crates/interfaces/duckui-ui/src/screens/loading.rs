use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

/// Full-screen placeholder shown while the engine starts.
pub fn draw(ui: &mut egui::Ui, message: &str) {
    tui(ui, ui.id().with("loading"))
        .reserve_available_space()
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            size: percent(1.),
            gap: length(12.0),
            justify_content: Some(taffy::JustifyContent::Center),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .show(|tui| {
            tui.ui_add(egui::Spinner::new().size(28.0));
            tui.label(egui::RichText::new(message).size(15.0));
        });
}
