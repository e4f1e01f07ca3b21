use eframe::{self, egui};
use egui::ViewportBuilder;

use super::{
    screens::{AllItemsScreen, ScanScreen},
    state::{ListAction, ListState, ScanState, Screen},
};
use crate::config::AppConfig;
use crate::store::InventoryStore;
use crate::workflow::ScanWorkflow;

/// Owns the inventory store and hands it to whichever screen is showing
pub struct ScanInventoryApp {
    store: InventoryStore,
    workflow: ScanWorkflow,
    current_screen: Screen,
    scan_state: ScanState,
    list_state: ListState,
}

impl ScanInventoryApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: InventoryStore::open(&config.data_file),
            workflow: ScanWorkflow::new(),
            current_screen: Screen::Scan,
            scan_state: ScanState::default(),
            list_state: ListState::default(),
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    fn handle_list_action(&mut self, action: ListAction) {
        match action {
            ListAction::Deleted(code) => self.workflow.forget(&code),
        }
    }
}

impl eframe::App for ScanInventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.current_screen {
            Screen::Scan => {
                ScanScreen::show(
                    ctx,
                    &mut self.current_screen,
                    &mut self.store,
                    &mut self.workflow,
                    &mut self.scan_state,
                );
            }
            Screen::AllItems => {
                if let Some(action) = AllItemsScreen::show(
                    ctx,
                    &mut self.current_screen,
                    &mut self.store,
                    &mut self.list_state,
                ) {
                    self.handle_list_action(action);
                }
            }
        }
    }
}

fn run(config: AppConfig, options: eframe::NativeOptions) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Scan Inventory",
        options,
        Box::new(move |_cc| Ok(Box::new(ScanInventoryApp::new(&config)))),
    )
}

pub fn launch_gui() -> Result<(), eframe::Error> {
    let config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };
    run(config, options)
}

/// Keeps the inventory in the activity's internal storage
#[cfg(target_os = "android")]
pub fn launch_gui_android(app: android_activity::AndroidApp) -> Result<(), eframe::Error> {
    let config = match app.internal_data_path() {
        Some(dir) => AppConfig::in_dir(&dir),
        None => AppConfig::default(),
    };
    let options = eframe::NativeOptions {
        android_app: Some(app),
        ..Default::default()
    };
    run(config, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::scanner::ScanEvent;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> ScanInventoryApp {
        ScanInventoryApp::new(&AppConfig::in_dir(dir.path()))
    }

    #[test]
    fn starts_on_scan_screen_with_loaded_store() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("scanData.json"),
            r#"{"123": {"title": "Stapler", "des": "Office use"}}"#,
        )
        .unwrap();

        let app = app_in(&dir);

        assert_eq!(app.current_screen, Screen::Scan);
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn list_delete_clears_displayed_record() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.store
            .insert("123", Record::new("Stapler", "Office use"))
            .unwrap();
        app.workflow
            .handle_scan(ScanEvent::Scanned("123".to_string()), &app.store)
            .unwrap();

        app.store.delete("123").unwrap();
        app.handle_list_action(ListAction::Deleted("123".to_string()));

        assert_eq!(app.workflow.current_code(), None);
    }

    #[test]
    fn list_delete_of_other_code_keeps_display() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.store
            .insert("123", Record::new("Stapler", "Office use"))
            .unwrap();
        app.store.insert("456", Record::new("Mug", "Tea")).unwrap();
        app.workflow
            .handle_scan(ScanEvent::Scanned("123".to_string()), &app.store)
            .unwrap();

        app.store.delete("456").unwrap();
        app.handle_list_action(ListAction::Deleted("456".to_string()));

        assert_eq!(app.workflow.current_code(), Some("123"));
    }
}
