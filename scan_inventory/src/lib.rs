pub mod config;
pub mod error;
pub mod models;
pub mod scanner;
pub mod store;
pub mod ui;
pub mod workflow;

// Re-export commonly used items
pub use config::AppConfig;
pub use error::{InventoryError, Result, ValidationError};
pub use models::{ImportSummary, Inventory, Record};
pub use scanner::ScanEvent;
pub use store::{load, merge, save, InventoryStore};
pub use workflow::{ScanOutcome, ScanWorkflow, WorkflowState};

/// Android entry point. Called by the NativeActivity runtime instead of main().
/// The `android-native-activity` feature in eframe wires this into the Android
/// activity lifecycle automatically.
#[cfg(target_os = "android")]
#[no_mangle]
fn android_main(app: android_activity::AndroidApp) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = ui::launch_gui_android(app) {
        log::error!("Application error: {e}");
    }
}
