//! Two-stack undo/redo history.
//!
//! Entries are moved into the stacks by value, so a stored snapshot can never be
//! mutated after it has been pushed. Internally the most recent entry sits at the
//! tail of each `Vec`; the public accessors expose the stacks most-recent-first.

#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    /// Past states (for undo)
    undo_stack: Vec<T>,
    /// Future states (for redo)
    redo_stack: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Store the pre-edit state. A new edit invalidates everything on the redo stack.
    pub fn save_state(&mut self, snapshot: T) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Undo: hand back the previous state, parking `current` on the redo stack.
    ///
    /// Returns `Err(current)` untouched when there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Result<T, T> {
        match self.undo_stack.pop() {
            Some(previous) => {
                self.redo_stack.push(current);
                Ok(previous)
            }
            None => Err(current),
        }
    }

    /// Redo: hand back the next state, parking `current` on the undo stack.
    ///
    /// Returns `Err(current)` untouched when there is nothing to redo.
    pub fn redo(&mut self, current: T) -> Result<T, T> {
        match self.redo_stack.pop() {
            Some(next) => {
                self.undo_stack.push(current);
                Ok(next)
            }
            None => Err(current),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Undo-reachable states, most recent first.
    pub fn previous(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator {
        self.undo_stack.iter().rev()
    }

    /// Redo-reachable states, most recent first.
    pub fn next(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator {
        self.redo_stack.iter().rev()
    }
}
