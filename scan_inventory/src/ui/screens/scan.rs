//! Main screen: the current record, the code field and the new-item dialog

use crate::error::InventoryError;
use crate::scanner::ScanEvent;
use crate::store::InventoryStore;
use crate::ui::components::{show_status, CodeEntry, EntryAction, EntryDialog};
use crate::ui::state::{ScanState, Screen, StatusMessage};
use crate::workflow::{ScanOutcome, ScanWorkflow};
use eframe::egui;
use log::error;

pub struct ScanScreen;

impl ScanScreen {
    pub fn show(
        ctx: &egui::Context,
        current_screen: &mut Screen,
        store: &mut InventoryStore,
        workflow: &mut ScanWorkflow,
        state: &mut ScanState,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                Self::show_current(ui, store, workflow);
                ui.add_space(40.0);
            });

            let event = CodeEntry::new("Code:", &mut state.code_input).show(ui);
            if let Some(event) = event {
                Self::handle_scan(workflow, store, state, event);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let has_current = workflow.current_record(store).is_some();
                if ui
                    .add_enabled(has_current, egui::Button::new("Delete"))
                    .clicked()
                {
                    Self::delete_current(workflow, store, state);
                }
                if ui.button("View All Items").clicked() {
                    *current_screen = Screen::AllItems;
                }
            });

            ui.add_space(10.0);
            show_status(ui, state.message.as_ref());
        });

        if let Some(code) = workflow.pending_code().map(str::to_string) {
            let action = EntryDialog::new(
                &code,
                &mut state.title_input,
                &mut state.description_input,
            )
            .with_error(state.entry_error.as_deref())
            .show(ctx);

            match action {
                Some(EntryAction::Confirm) => Self::confirm_entry(workflow, store, state),
                Some(EntryAction::Cancel) => {
                    workflow.cancel();
                    state.clear_entry();
                    state.message = Some(StatusMessage::Info(format!("Nothing saved for {}", code)));
                }
                None => {}
            }
        }
    }

    fn show_current(ui: &mut egui::Ui, store: &InventoryStore, workflow: &ScanWorkflow) {
        match (workflow.current_code(), workflow.current_record(store)) {
            (Some(code), Some(record)) => {
                ui.heading(&record.title);
                ui.add_space(10.0);
                ui.label(&record.description);
                ui.add_space(5.0);
                ui.weak(code);
            }
            _ => {
                ui.heading("Title");
                ui.add_space(10.0);
                ui.label("Description");
            }
        }
    }

    fn handle_scan(
        workflow: &mut ScanWorkflow,
        store: &InventoryStore,
        state: &mut ScanState,
        event: ScanEvent,
    ) {
        state.clear_entry();
        state.message = match workflow.handle_scan(event, store) {
            Ok(ScanOutcome::Found { code, .. }) => {
                Some(StatusMessage::Info(format!("Found {}", code)))
            }
            Ok(ScanOutcome::NeedsEntry { code }) => Some(StatusMessage::Info(format!(
                "{} is new, enter its details",
                code
            ))),
            Ok(ScanOutcome::Cancelled) => None,
            Err(e) => Some(StatusMessage::Error(e.to_string())),
        };
    }

    fn confirm_entry(workflow: &mut ScanWorkflow, store: &mut InventoryStore, state: &mut ScanState) {
        match workflow.confirm(&state.title_input, &state.description_input, store) {
            Ok(Some(record)) => {
                state.clear_entry();
                state.message = Some(StatusMessage::Info(format!("Saved \"{}\"", record.title)));
            }
            Ok(None) => state.clear_entry(),
            Err(InventoryError::Validation(e)) => {
                // Dialog stays open until the entry is fixed or cancelled
                state.entry_error = Some(e.to_string());
            }
            Err(e) => {
                error!("Failed to save inventory: {}", e);
                state.clear_entry();
                state.message = Some(StatusMessage::Error(format!("Save failed: {}", e)));
            }
        }
    }

    fn delete_current(workflow: &mut ScanWorkflow, store: &mut InventoryStore, state: &mut ScanState) {
        match workflow.delete_current(store) {
            Ok(Some(code)) => {
                state.message = Some(StatusMessage::Info(format!("Deleted {}", code)));
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to save inventory after delete: {}", e);
                state.message = Some(StatusMessage::Error(format!("Save failed: {}", e)));
            }
        }
    }
}
