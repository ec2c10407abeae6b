//! # Undo
//!
//! A single stack of whole drawn objects. Entries are handles into the rendering surface, so
//! undoing is "pop the handle, then remove that object from the surface".

use crate::shape::ShapeID;

#[derive(Default, Debug, Clone)]
pub struct UndoStack {
    // Bottom to top, in drawing order.
    entries: Vec<ShapeID>,
}
impl UndoStack {
    pub fn push(&mut self, id: ShapeID) {
        self.entries.push(id);
    }
    /// Remove and return the most recently drawn object, if any.
    pub fn pop(&mut self) -> Option<ShapeID> {
        self.entries.pop()
    }
    /// The most recently drawn object.
    #[must_use]
    pub fn top(&self) -> Option<ShapeID> {
        self.entries.last().copied()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = ShapeID> + '_ {
        self.entries.iter().copied()
    }
}
