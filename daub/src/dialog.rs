//! Native file choosers, through `rfd`.

use daub_core::dialog::{FileDialogs, FileFilter};
use std::path::PathBuf;

/// Blocking platform dialogs. Called from the UI thread, so the window is unresponsive while one
/// is open, same as any modal dialog.
#[derive(Default)]
pub struct NativeDialogs {
    /// Directory of the last chosen file, to start the next dialog in.
    last_directory: Option<PathBuf>,
}
impl NativeDialogs {
    fn dialog(&self, filters: &[FileFilter]) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new();
        for filter in filters {
            dialog = dialog.add_filter(filter.name, filter.extensions);
        }
        if let Some(dir) = &self.last_directory {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }
    fn remember(&mut self, path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(dir) = path.as_deref().and_then(std::path::Path::parent) {
            self.last_directory = Some(dir.to_owned());
        }
        path
    }
}
impl FileDialogs for NativeDialogs {
    fn choose_save_target(
        &mut self,
        default_extension: &str,
        filters: &[FileFilter],
    ) -> Option<PathBuf> {
        let path = self
            .dialog(filters)
            .set_title("Save image")
            .set_file_name(format!("untitled.{default_extension}"))
            .save_file();
        self.remember(path)
    }
    fn choose_open_target(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        let path = self.dialog(filters).set_title("Load image").pick_file();
        self.remember(path)
    }
}
