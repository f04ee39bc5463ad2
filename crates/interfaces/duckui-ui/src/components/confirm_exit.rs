use crate::utils::{cmd_button, ButtonVariant};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Pending,
    Stay,
    Leave,
}

/// The "are you sure you want to leave?" prompt shown when a close request
/// was intercepted.
pub fn draw(ctx: &egui::Context) -> ExitChoice {
    let mut choice = ExitChoice::Pending;
    let modal = egui::Modal::new(egui::Id::new("confirm_exit")).show(ctx, |ui| {
        ui.set_width(300.0);
        ui.heading("Leave Duck UI?");
        ui.label("Changes you made may not be saved.");
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if cmd_button(ui, "Stay", ButtonVariant::Outline, true).clicked() {
                choice = ExitChoice::Stay;
            }
            if cmd_button(ui, "Leave", ButtonVariant::Primary, true).clicked() {
                choice = ExitChoice::Leave;
            }
        });
    });
    if choice == ExitChoice::Pending && modal.should_close() {
        choice = ExitChoice::Stay;
    }
    choice
}
