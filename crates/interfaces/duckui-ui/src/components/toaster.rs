use crate::theme::*;
use duckui_app_core::{AppCommand, ToastLevel, Toaster};
use eframe::egui::{self, Color32};

fn level_color(level: ToastLevel, rich: bool) -> Option<Color32> {
    if !rich {
        return None;
    }
    Some(match level {
        ToastLevel::Info => COL_INFO,
        ToastLevel::Success => COL_SUCCESS,
        ToastLevel::Warning => COL_WARN,
        ToastLevel::Error => COL_DANGER,
    })
}

/// Bottom-right toast stack.
pub fn draw(ctx: &egui::Context, toaster: &Toaster, commands: &mut Vec<AppCommand>) {
    if toaster.is_empty() {
        return;
    }
    let config = toaster.config();

    egui::Area::new(egui::Id::new("toaster"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;
            for toast in toaster.visible() {
                let accent = level_color(toast.level, config.rich_colors);
                let stroke = accent.unwrap_or_else(|| ui.visuals().window_stroke.color);
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.0, stroke))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            let text = egui::RichText::new(&toast.message);
                            ui.label(match accent {
                                Some(color) => text.color(color),
                                None => text,
                            });
                            if config.close_button && ui.small_button("x").clicked() {
                                commands.push(AppCommand::DismissToast(toast.id));
                            }
                        });
                    });
            }
        });
}
