use duckui_core::Theme;
use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, ThemePreference, Visuals};

// Dark palette
pub const COL_BG: Color32 = Color32::from_rgb(9, 9, 11);
pub const COL_BG_RAISED: Color32 = Color32::from_rgb(24, 24, 27);
pub const COL_BORDER: Color32 = Color32::from_rgb(39, 39, 42);
pub const COL_TEXT: Color32 = Color32::from_rgb(250, 250, 250);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(161, 161, 170);

// Light palette
pub const COL_BG_LIGHT: Color32 = Color32::from_rgb(255, 255, 255);
pub const COL_BG_RAISED_LIGHT: Color32 = Color32::from_rgb(244, 244, 245);
pub const COL_BORDER_LIGHT: Color32 = Color32::from_rgb(228, 228, 231);
pub const COL_TEXT_LIGHT: Color32 = Color32::from_rgb(9, 9, 11);

// Shared accents
pub const COL_ACCENT: Color32 = Color32::from_rgb(250, 204, 21); // Duck yellow
pub const COL_INFO: Color32 = Color32::from_rgb(59, 130, 246);
pub const COL_WARN: Color32 = Color32::from_rgb(249, 115, 22);
pub const COL_DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG_RAISED;
    visuals.panel_fill = COL_BG;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_BG_RAISED;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_TEXT);
    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);
    visuals
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.window_fill = COL_BG_LIGHT;
    visuals.panel_fill = COL_BG_LIGHT;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER_LIGHT);
    visuals.widgets.inactive.bg_fill = COL_BG_RAISED_LIGHT;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_TEXT_LIGHT);
    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, COL_TEXT_LIGHT);
    visuals
}

/// Install both palettes and the shared text styles.
pub fn setup(ctx: &egui::Context) {
    ctx.set_visuals_of(egui::Theme::Dark, dark_visuals());
    ctx.set_visuals_of(egui::Theme::Light, light_visuals());

    ctx.all_styles_mut(|style| {
        style.text_styles = [
            (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
            (TextStyle::Button, FontId::new(12.0, FontFamily::Proportional)),
            (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
        ]
        .into();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    });
}

/// Switch egui to the user's theme. `System` follows the OS.
pub fn apply(ctx: &egui::Context, theme: Theme) {
    ctx.set_theme(preference(theme));
}

pub fn preference(theme: Theme) -> ThemePreference {
    match theme {
        Theme::Dark => ThemePreference::Dark,
        Theme::Light => ThemePreference::Light,
        Theme::System => ThemePreference::System,
    }
}

/// Dimmed text color for whichever palette is active.
pub fn dim_text(ui: &egui::Ui) -> Color32 {
    if ui.visuals().dark_mode {
        COL_TEXT_DIM
    } else {
        COL_TEXT_DIM.gamma_multiply(0.8)
    }
}
