//! Navigation Model
//!
//! This sub-model tracks which folder a page is showing and the history of
//! folders visited before it. `None` is the page root.

/// Current folder plus back history
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationModel {
    /// Folder being shown (None = page root)
    pub current: Option<String>,

    /// Previously shown folders, most recent last
    pub history: Vec<Option<String>>,
}

impl NavigationModel {
    /// Create initial navigation model at the page root
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `target`, pushing the current folder onto the history.
    /// Visiting the folder already shown does nothing.
    ///
    /// Returns whether the current folder changed.
    pub fn visit(&mut self, target: Option<String>) -> bool {
        if target == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, target);
        self.history.push(previous);
        true
    }

    /// Return to the previous folder. Returns false if there is no history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn at_root(&self) -> bool {
        self.current.is_none()
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
