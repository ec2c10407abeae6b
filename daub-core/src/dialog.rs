//! # File dialogs
//!
//! Choosing where to save and what to load is delegated to the platform. A dialog answering
//! `None` was cancelled by the user, which is not an error.

use std::path::PathBuf;

/// A named group of file extensions offered by a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    /// Extensions without the leading dot. `"*"` matches anything.
    pub extensions: &'static [&'static str],
}

pub const DEFAULT_EXTENSION: &str = "png";

pub const SAVE_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "PNG files",
        extensions: &["png"],
    },
    FileFilter {
        name: "All files",
        extensions: &["*"],
    },
];

pub const OPEN_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Image files",
        extensions: &["png", "jpg", "jpeg", "gif", "bmp"],
    },
    FileFilter {
        name: "All files",
        extensions: &["*"],
    },
];

/// Modal, blocking file choosers. Only one is ever open at a time.
pub trait FileDialogs {
    /// Ask for a destination to write to. `default_extension` is suggested for new names.
    fn choose_save_target(
        &mut self,
        default_extension: &str,
        filters: &[FileFilter],
    ) -> Option<PathBuf>;
    /// Ask for an existing file to read.
    fn choose_open_target(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;
}
