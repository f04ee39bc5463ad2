use crate::utils::{cmd_button, section_label, ButtonVariant};
use crate::components::header::route_command;
use duckui_app_core::{AppCommand, RenderError};
use duckui_core::View;
use eframe::egui;
use egui_taffy::taffy::prelude::length;
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    commands: &mut Vec<AppCommand>,
) -> Result<(), RenderError> {
    let mut open_connections = false;
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        ..Default::default()
    })
    .add(|tui| {
        tui.label(egui::RichText::new("Duck UI").heading().strong());
        tui.ui(|ui| {
            let color = crate::theme::dim_text(ui);
            ui.label(
                egui::RichText::new(format!(
                    "Explore data with {} right where you are.",
                    duckui_config::ENGINE_NAME
                ))
                .color(color),
            );
        });

        tui.ui(|ui| section_label(ui, "About"));
        tui.label(format!("Version {}", duckui_config::version()));
        if let Some(date) = duckui_config::release_date() {
            tui.label(format!("Released {date}"));
        }

        open_connections = tui
            .ui(|ui| cmd_button(ui, "Manage connections", ButtonVariant::Primary, true))
            .clicked();
    });

    if open_connections {
        commands.push(route_command(View::Connections)?);
    }
    Ok(())
}
