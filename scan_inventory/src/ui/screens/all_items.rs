//! Item list with delete, import and export

use crate::store::InventoryStore;
use crate::ui::components::show_status;
use crate::ui::state::{ListAction, ListState, Screen, StatusMessage};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use log::error;

pub struct AllItemsScreen;

impl AllItemsScreen {
    /// Shows the list. Returns what changed so the app can update other screens.
    pub fn show(
        ctx: &egui::Context,
        current_screen: &mut Screen,
        store: &mut InventoryStore,
        state: &mut ListState,
    ) -> Option<ListAction> {
        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("← Back").clicked() {
                    *current_screen = Screen::Scan;
                }
                #[cfg(not(target_os = "android"))]
                Self::show_file_buttons(ui, store, state);
            });
            ui.add_space(10.0);

            ui.heading(format!("All Items ({})", store.len()));
            show_status(ui, state.message.as_ref());
            ui.weak(format!("Data file: {}", store.path().display()));
            ui.add_space(10.0);
            ui.separator();

            if store.is_empty() {
                ui.label("No items yet. Scan a code to add one.");
                return;
            }

            if let Some(code) = Self::show_table(ui, store) {
                action = Self::delete(store, state, code);
            }
        });
        action
    }

    /// Returns the code whose "Delete" button was clicked
    fn show_table(ui: &mut egui::Ui, store: &InventoryStore) -> Option<String> {
        let mut delete_code = None;
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(120.0))
            .column(Column::remainder())
            .column(Column::auto())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Code");
                });
                header.col(|ui| {
                    ui.strong("Item");
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                for (code, record) in store.records() {
                    body.row(24.0, |mut row| {
                        row.col(|ui| {
                            ui.monospace(code);
                        });
                        row.col(|ui| {
                            ui.label(record.summary());
                        });
                        row.col(|ui| {
                            if ui.button("Delete").clicked() {
                                delete_code = Some(code.to_string());
                            }
                        });
                    });
                }
            });
        delete_code
    }

    fn delete(store: &mut InventoryStore, state: &mut ListState, code: String) -> Option<ListAction> {
        match store.delete(&code) {
            Ok(Some(_)) => {
                state.message = Some(StatusMessage::Info(format!("Deleted {}", code)));
                Some(ListAction::Deleted(code))
            }
            Ok(None) => None,
            // Only the save can fail; the record is already gone from memory
            Err(e) => {
                error!("Failed to save inventory after delete: {}", e);
                state.message = Some(StatusMessage::Error(format!("Save failed: {}", e)));
                Some(ListAction::Deleted(code))
            }
        }
    }

    /// Import and export go through native file dialogs, which Android does not have
    #[cfg(not(target_os = "android"))]
    fn show_file_buttons(ui: &mut egui::Ui, store: &mut InventoryStore, state: &mut ListState) {
        if ui.button("Import").clicked() {
            Self::import(store, state);
        }
        if ui.button("Export").clicked() {
            Self::export(store, state);
        }
    }

    #[cfg(not(target_os = "android"))]
    fn import(store: &mut InventoryStore, state: &mut ListState) {
        use crate::error::InventoryError;

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        let result = std::fs::read(&path)
            .map_err(InventoryError::from)
            .and_then(|bytes| store.import(&bytes));

        state.message = Some(match result {
            Ok(summary) => StatusMessage::Info(format!(
                "Imported {} items ({} new, {} updated)",
                summary.total(),
                summary.added,
                summary.replaced
            )),
            Err(e @ InventoryError::Format(_)) => {
                log::warn!("Rejected import from {}: {}", path.display(), e);
                StatusMessage::Error(format!("File format error: {}", e))
            }
            Err(e) => {
                error!("Import from {} failed: {}", path.display(), e);
                StatusMessage::Error(format!("Import failed: {}", e))
            }
        });
    }

    #[cfg(not(target_os = "android"))]
    fn export(store: &InventoryStore, state: &mut ListState) {
        let bytes = match store.export() {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Failed to serialize inventory: {}", e);
                state.message = Some(StatusMessage::Error(format!("Export failed: {}", e)));
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(crate::config::export_file_name())
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        state.message = Some(match std::fs::write(&path, bytes) {
            Ok(()) => {
                log::info!("Exported {} records to {}", store.len(), path.display());
                StatusMessage::Info(format!(
                    "Exported {} items to {}",
                    store.len(),
                    path.display()
                ))
            }
            Err(e) => {
                error!("Export to {} failed: {}", path.display(), e);
                StatusMessage::Error(format!("Export failed: {}", e))
            }
        });
    }
}
