use crate::utils::{cmd_button, ButtonVariant};
use crate::components::header::route_command;
use duckui_app_core::{AppCommand, RenderError};
use duckui_core::View;
use eframe::egui;
use egui_taffy::taffy::prelude::length;
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    location: &str,
    commands: &mut Vec<AppCommand>,
) -> Result<(), RenderError> {
    let mut go_home = false;
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        gap: length(8.0),
        justify_content: Some(taffy::JustifyContent::Center),
        align_items: Some(taffy::AlignItems::Center),
        ..Default::default()
    })
    .add(|tui| {
        tui.label(egui::RichText::new("404").size(40.0).strong());
        tui.label("Page not found");
        tui.ui(|ui| {
            let color = crate::theme::dim_text(ui);
            ui.label(egui::RichText::new(location).monospace().color(color));
        });
        go_home = tui
            .ui(|ui| cmd_button(ui, "Go home", ButtonVariant::Outline, true))
            .clicked();
    });

    if go_home {
        commands.push(route_command(View::Home)?);
    }
    Ok(())
}
