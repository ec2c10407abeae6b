// Each test binary uses a different part of this module.
#![allow(dead_code)]

use daub_core::dialog::{FileDialogs, FileFilter};
use daub_core::scene::Scene;
use daub_core::Controller;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Answers dialogs from a queue. An empty queue, or a queued `None`, is a cancel.
#[derive(Default)]
pub struct ScriptedDialogs {
    pub answers: VecDeque<Option<PathBuf>>,
    /// Filters offered by each dialog, in order.
    pub offered: Vec<Vec<FileFilter>>,
}
impl ScriptedDialogs {
    pub fn answer(&mut self, path: Option<PathBuf>) {
        self.answers.push_back(path);
    }
}
impl FileDialogs for ScriptedDialogs {
    fn choose_save_target(
        &mut self,
        _default_extension: &str,
        filters: &[FileFilter],
    ) -> Option<PathBuf> {
        self.offered.push(filters.to_vec());
        self.answers.pop_front().flatten()
    }
    fn choose_open_target(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        self.offered.push(filters.to_vec());
        self.answers.pop_front().flatten()
    }
}

pub fn controller() -> Controller<Scene, ScriptedDialogs> {
    Controller::new(Scene::default(), ScriptedDialogs::default())
}
