use crate::theme::COL_DANGER;
use crate::utils::{cmd_button, ButtonVariant};
use duckui_app_core::RenderFailure;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

/// Recovery screen for a failed render. Returns `true` when the user asks to
/// try again.
pub fn draw(ui: &mut egui::Ui, failure: &RenderFailure) -> bool {
    let mut retry = false;
    tui(ui, ui.id().with("recovery"))
        .reserve_available_space()
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            size: percent(1.),
            gap: length(10.0),
            justify_content: Some(taffy::JustifyContent::Center),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .show(|tui| {
            tui.colored_label(
                COL_DANGER,
                egui::RichText::new("Something went wrong").size(20.0).strong(),
            );
            tui.label(failure.message.as_str());
            retry = tui
                .ui(|ui| cmd_button(ui, "Try again", ButtonVariant::Primary, true))
                .clicked();
        });
    retry
}
