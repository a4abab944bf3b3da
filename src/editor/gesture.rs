//! Turns the end of a text-block drag into at most one gallery action.
//!
//! While a block is dragged the presentation layer reports which edges of the
//! container the block is still inside. When the drag stops, a block dropped
//! inside the container has its new position saved; a block dropped outside is
//! deleted or restored depending on the user's answer to a confirmation prompt.

use super::gallery::{Position, TextInput};
use super::reducer::Action;

pub const DELETE_PROMPT: &str = "Are you sure you want to remove this input?";

/// Containment of the dragged block against each container edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSignal {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeSignal {
    pub const INSIDE: EdgeSignal = EdgeSignal {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    pub fn is_inside(&self) -> bool {
        self.top && self.bottom && self.left && self.right
    }
}

/// Asks the user whether an out-of-bounds text block should be removed.
///
/// Implementations may block until the user answers.
pub trait DeleteConfirmation {
    fn confirm_delete(&mut self, input: &TextInput) -> bool;
}

impl<F> DeleteConfirmation for F
where
    F: FnMut(&TextInput) -> bool,
{
    fn confirm_delete(&mut self, input: &TextInput) -> bool {
        self(input)
    }
}

#[derive(Debug, Clone)]
pub struct DragCoordinator {
    in_bounds: bool,
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self { in_bounds: true }
    }

    pub fn in_bounds(&self) -> bool {
        self.in_bounds
    }

    /// Record the latest edge report for the dragged block.
    pub fn edge(&mut self, signal: EdgeSignal) {
        self.in_bounds = signal.is_inside();
    }

    /// Decide what a finished drag of `input` to `dropped` means.
    pub fn drag_stopped(
        &mut self,
        input: &TextInput,
        dropped: Position,
        confirm: &mut dyn DeleteConfirmation,
    ) -> Option<Action> {
        let in_bounds = std::mem::replace(&mut self.in_bounds, true);

        if dropped == input.position {
            return None;
        }

        if in_bounds {
            log::debug!("text block {} dropped at ({}, {})", input.id, dropped.x, dropped.y);
            return Some(Action::SavePosition {
                input: input.id,
                position: dropped,
            });
        }

        if confirm.confirm_delete(input) {
            log::debug!("text block {} dropped outside and removed", input.id);
            Some(Action::DeleteText { input: input.id })
        } else {
            log::debug!("text block {} dropped outside, removal declined", input.id);
            Some(Action::RestorePosition)
        }
    }
}
