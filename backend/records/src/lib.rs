//! Saving, loading, rendering and printing Q&A records.

pub mod print;
pub mod render;
pub mod store;

pub use print::{print_current, print_record, PrintHandler, SystemPrintHandler, PRINT_FILE_NAME};
pub use render::{display_loaded_text, display_text, print_text};
pub use store::{load, save, save_current};
