use crate::scanner::ScanEvent;
use eframe::egui;

/// Single-line code field that stands in for the camera scanner.
///
/// Keyboard-wedge scanners type the code and press Enter, so Enter submits
/// just like the "Scan" button. Escape abandons the scan.
pub struct CodeEntry<'a> {
    pub label: &'a str,
    pub code: &'a mut String,
    pub hint: &'a str,
}

impl<'a> CodeEntry<'a> {
    pub fn new(label: &'a str, code: &'a mut String) -> Self {
        Self {
            label,
            code,
            hint: "Scan or type a code",
        }
    }

    /// Shows the field. Returns an event when a code was submitted or the scan abandoned.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<ScanEvent> {
        let mut event = None;
        ui.horizontal(|ui| {
            ui.label(self.label);
            let response = ui.add(
                egui::TextEdit::singleline(self.code)
                    .desired_width(220.0)
                    .hint_text(self.hint),
            );

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let escape_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape));
            let has_code = !self.code.trim().is_empty();

            if ui
                .add_enabled(has_code, egui::Button::new("Scan"))
                .clicked()
                || (enter_pressed && has_code)
            {
                event = Some(ScanEvent::Scanned(self.code.trim().to_string()));
                self.code.clear();
                // Keep focus so the next scan lands in the field
                response.request_focus();
            } else if escape_pressed {
                self.code.clear();
                event = Some(ScanEvent::Cancelled);
            }
        });
        event
    }
}
