use crate::theme::dim_text;
use crate::utils::{cmd_button, section_label, ButtonVariant};
use crate::views::ConnectionsState;
use duckui_app_core::{AppCommand, RenderError, ToastLevel};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    state: &mut ConnectionsState,
    commands: &mut Vec<AppCommand>,
) -> Result<(), RenderError> {
    let mut submit = false;
    let mut remove = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(8.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.label(egui::RichText::new("Connections").heading().strong());

        tui.ui(|ui| section_label(ui, "New connection"));
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(6.0),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .add(|tui| {
            tui.ui_add(
                egui::TextEdit::singleline(&mut state.draft_name)
                    .hint_text("Name")
                    .desired_width(160.0),
            );
            tui.ui_add(
                egui::TextEdit::singleline(&mut state.draft_url)
                    .hint_text("https://host:8123")
                    .desired_width(260.0),
            );
            submit = tui
                .ui(|ui| cmd_button(ui, "Add", ButtonVariant::Primary, true))
                .clicked();
        });

        tui.ui(|ui| section_label(ui, "Saved"));
        if state.saved.is_empty() {
            tui.ui(|ui| {
                let color = dim_text(ui);
                ui.label(egui::RichText::new("No connections yet").color(color));
            });
        }
        for (index, conn) in state.saved.iter().enumerate() {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                gap: length(8.0),
                align_items: Some(taffy::AlignItems::Center),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(egui::RichText::new(&conn.name).strong());
                tui.label(egui::RichText::new(&conn.url).monospace());
                if tui
                    .ui(|ui| cmd_button(ui, "Remove", ButtonVariant::Ghost, true))
                    .clicked()
                {
                    remove = Some(index);
                }
            });
        }
    });

    if submit {
        let (level, message) = match state.submit() {
            Ok(conn) => (ToastLevel::Success, format!("Saved connection \"{}\"", conn.name)),
            Err(reason) => (ToastLevel::Error, reason),
        };
        commands.push(AppCommand::Notify { level, message });
    }
    if let Some(conn) = remove.and_then(|i| state.remove(i)) {
        commands.push(AppCommand::Notify {
            level: ToastLevel::Info,
            message: format!("Removed connection \"{}\"", conn.name),
        });
    }
    Ok(())
}
