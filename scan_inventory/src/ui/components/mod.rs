mod code_entry;
mod entry_dialog;
mod status_line;

pub use code_entry::CodeEntry;
pub use entry_dialog::{EntryAction, EntryDialog};
pub use status_line::show_status;
