use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

// ---------------------------------------------------------------------------
// Native modal dialogs
// ---------------------------------------------------------------------------

pub fn show_error(title: &str, message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(format!("❌ {message}"))
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_info(title: &str, message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn pick_data_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select data file")
        .add_filter("Supported files", &["csv", "xlsx", "json"])
        .add_filter("CSV Files", &["csv"])
        .add_filter("Excel Files", &["xlsx"])
        .add_filter("JSON Files", &["json"])
        .pick_file()
}

/// Ask where to save an export with the given extension.
pub fn pick_save_path(title: &str, filter_name: &str, extension: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title(title)
        .add_filter(filter_name, &[extension])
        .set_file_name(format!("results.{extension}"))
        .save_file()
}
