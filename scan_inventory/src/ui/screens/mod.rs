mod all_items;
mod scan;

pub use all_items::AllItemsScreen;
pub use scan::ScanScreen;
