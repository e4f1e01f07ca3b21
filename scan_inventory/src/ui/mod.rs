mod app;
mod components;
mod screens;
mod state;

pub use app::{launch_gui, ScanInventoryApp};

#[cfg(target_os = "android")]
pub use app::launch_gui_android;
