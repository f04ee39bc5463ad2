use crate::theme::*;
use crate::utils::{cmd_button, ButtonVariant};
use duckui_app_core::{AppCommand, RenderError};
use duckui_core::{Theme, View};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// What the header needs to know about navigation, captured before the
/// shell renders.
#[derive(Debug, Clone)]
pub struct NavInfo {
    pub location: String,
    pub view: View,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub theme: Theme,
}

const NAV_ITEMS: [View; 2] = [View::Home, View::Connections];

/// Navigation command for a routed view. The catch-all view has no path of
/// its own and cannot be navigated to.
pub fn route_command(view: View) -> Result<AppCommand, RenderError> {
    view.path()
        .map(|path| AppCommand::Navigate(path.to_string()))
        .ok_or_else(|| RenderError::view(format!("{} has no route of its own", view.title())))
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    nav: &NavInfo,
    commands: &mut Vec<AppCommand>,
) -> Result<(), RenderError> {
    let mut selected = None;
    let version_text = format!("v{}", duckui_config::version());

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new("DUCK UI")
                    .size(13.0)
                    .extra_letter_spacing(1.5)
                    .strong()
                    .color(COL_ACCENT),
            );
            tui.ui(|ui| {
                let color = dim_text(ui);
                ui.label(egui::RichText::new(version_text).size(10.0).color(color));
            });

            for item in NAV_ITEMS {
                let variant = if item == nav.view {
                    ButtonVariant::Outline
                } else {
                    ButtonVariant::Ghost
                };
                if tui
                    .ui(|ui| cmd_button(ui, item.title(), variant, true))
                    .clicked()
                {
                    selected = Some(item);
                }
            }
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(6.0),
            ..Default::default()
        })
        .add(|tui| {
            if tui
                .ui(|ui| cmd_button(ui, "<", ButtonVariant::Ghost, nav.can_go_back))
                .clicked()
            {
                commands.push(AppCommand::Back);
            }
            if tui
                .ui(|ui| cmd_button(ui, ">", ButtonVariant::Ghost, nav.can_go_forward))
                .clicked()
            {
                commands.push(AppCommand::Forward);
            }

            let label = format!("Theme: {}", nav.theme);
            if tui
                .ui(|ui| cmd_button(ui, &label, ButtonVariant::Outline, true))
                .clicked()
            {
                commands.push(AppCommand::SetTheme(nav.theme.next()));
            }
        });
    });

    if let Some(view) = selected {
        commands.push(route_command(view)?);
    }
    Ok(())
}
