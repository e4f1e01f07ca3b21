use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Confirm,
    Cancel,
}

/// Window asking for the title and description of a newly scanned code
pub struct EntryDialog<'a> {
    pub code: &'a str,
    pub title: &'a mut String,
    pub description: &'a mut String,
    pub error: Option<&'a str>,
}

impl<'a> EntryDialog<'a> {
    pub fn new(code: &'a str, title: &'a mut String, description: &'a mut String) -> Self {
        Self {
            code,
            title,
            description,
            error: None,
        }
    }

    pub fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<EntryAction> {
        let mut action = None;
        egui::Window::new("Enter item details")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Code: {}", self.code));
                ui.add_space(8.0);

                egui::Grid::new("entry_grid")
                    .num_columns(2)
                    .spacing([10.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Title:");
                        ui.add(egui::TextEdit::singleline(self.title).hint_text("title"));
                        ui.end_row();

                        ui.label("Description:");
                        ui.add(egui::TextEdit::singleline(self.description).hint_text("des"));
                        ui.end_row();
                    });

                if let Some(error) = self.error {
                    ui.add_space(5.0);
                    ui.colored_label(egui::Color32::RED, error);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        action = Some(EntryAction::Confirm);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(EntryAction::Cancel);
                    }
                });
            });
        action
    }
}
