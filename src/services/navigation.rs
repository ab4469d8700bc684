//! Drill-down category picker.
//!
//! The cascading dropdown keeps a stack of node levels: selecting a branch
//! pushes its children as the next level, selecting a leaf commits that
//! category and closes the picker, and "back" pops one level.

use crate::domain::category::CategoryTreeNode;
use crate::domain::types::CategoryId;

/// State machine behind the cascading category dropdown.
///
/// Closed when the level stack is empty; opening seeds the stack with the
/// full root forest.
#[derive(Debug, Clone, Default)]
pub struct CategoryPicker {
    levels: Vec<Vec<CategoryTreeNode>>,
    selection: Option<CategoryId>,
}

impl CategoryPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.levels.is_empty()
    }

    /// Opens the picker on the root forest, replacing any previous stack.
    pub fn open(&mut self, forest: &[CategoryTreeNode]) {
        self.levels = vec![forest.to_vec()];
    }

    /// Closes the picker without committing a selection.
    pub fn close(&mut self) {
        self.levels.clear();
    }

    /// Handles a click on one of the current options: a branch reveals its
    /// children as the next level, a leaf commits its id and closes.
    pub fn select(&mut self, node: &CategoryTreeNode) {
        if !self.is_open() {
            return;
        }
        if node.children.is_empty() {
            self.selection = Some(node.id.clone());
            self.close();
        } else {
            self.levels.push(node.children.clone());
        }
    }

    /// Returns to the previous level. The root level is never popped.
    pub fn back(&mut self) {
        if self.levels.len() > 1 {
            self.levels.pop();
        }
    }

    /// Options shown at the current level; empty while closed.
    pub fn current_options(&self) -> &[CategoryTreeNode] {
        self.levels.last().map_or(&[], |level| level.as_slice())
    }

    pub fn can_go_back(&self) -> bool {
        self.levels.len() > 1
    }

    /// The committed category, surviving close and reopen until replaced.
    pub fn selection(&self) -> Option<&CategoryId> {
        self.selection.as_ref()
    }

    /// Drops the committed category.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }
}
