use crate::ui::state::StatusMessage;
use eframe::egui;

pub fn show_status(ui: &mut egui::Ui, message: Option<&StatusMessage>) {
    match message {
        Some(message) if message.is_error() => {
            ui.colored_label(egui::Color32::RED, message.text());
        }
        Some(message) => {
            ui.label(message.text());
        }
        None => {}
    }
}
