use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    let color = dim_text(ui);
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(10.0)
            .color(color)
            .strong(),
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

pub fn cmd_button(
    ui: &mut egui::Ui,
    label: &str,
    variant: ButtonVariant,
    enabled: bool,
) -> egui::Response {
    let text_col = ui.visuals().text_color();
    let (fill, stroke_col, text_col) = match variant {
        ButtonVariant::Primary => (COL_ACCENT, COL_ACCENT, COL_BG),
        ButtonVariant::Outline => (Color32::TRANSPARENT, COL_ACCENT, text_col),
        ButtonVariant::Ghost => (Color32::TRANSPARENT, Color32::TRANSPARENT, text_col),
    };

    let text = egui::RichText::new(label).color(if enabled {
        text_col
    } else {
        dim_text(ui)
    });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(72.0, 26.0))
        .fill(if enabled { fill } else { Color32::TRANSPARENT })
        .stroke(egui::Stroke::new(1.0, stroke_col));

    ui.add_enabled(enabled, btn)
}
