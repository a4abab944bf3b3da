//! Gallery state transitions.
//!
//! [`reduce`] is the only way gallery state changes. It is total: every action
//! applied to any gallery yields a gallery, and actions that cannot apply
//! (empty history, unknown text block, out-of-range index) hand the state back
//! unchanged. Only the selected image is ever touched by an edit.

use super::gallery::{GalleryState, InputId, Position, TextInput};

pub const ZOOM_IN_FACTOR: f64 = 1.1;
pub const ZOOM_OUT_FACTOR: f64 = 0.9;
pub const ROTATE_STEP_DEGREES: u32 = 45;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectImage(usize),
    /// Append an image to the gallery and select it
    AddImage { src: String },
    AddTextInput,
    ZoomIn,
    ZoomOut,
    Rotate,
    UpdateContent { input: InputId, content: String },
    SavePosition { input: InputId, position: Position },
    DeleteText { input: InputId },
    /// Refresh the current inputs after a cancelled drag; not recorded in history
    RestorePosition,
    Undo,
    Redo,
}

impl Action {
    /// Whether applying this action records a history snapshot.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Action::AddTextInput
                | Action::ZoomIn
                | Action::ZoomOut
                | Action::Rotate
                | Action::UpdateContent { .. }
                | Action::SavePosition { .. }
                | Action::DeleteText { .. }
        )
    }
}

/// Compute the gallery that follows `state` once `action` is applied.
///
/// The previous gallery is consumed, so no snapshot reachable from it can be
/// mutated afterwards; callers that need the old value keep a clone.
pub fn reduce(mut state: GalleryState, action: Action) -> GalleryState {
    let targets_selected = !matches!(action, Action::SelectImage(_) | Action::AddImage { .. });
    if targets_selected && state.selected_image >= state.images.len() {
        return state;
    }

    match action {
        Action::SelectImage(index) => {
            if index < state.images.len() {
                state.selected_image = index;
            }
        }
        Action::AddImage { src } => {
            state.selected_image = state.push_image(src);
        }
        Action::AddTextInput => {
            let id = state.allocate_input_id();
            state
                .selected_mut()
                .edit(|image| image.inputs.push(TextInput::placeholder(id)));
        }
        Action::ZoomIn => state.selected_mut().edit(|image| image.zoom *= ZOOM_IN_FACTOR),
        Action::ZoomOut => state.selected_mut().edit(|image| image.zoom *= ZOOM_OUT_FACTOR),
        Action::Rotate => state
            .selected_mut()
            .edit(|image| image.rotate = (image.rotate + ROTATE_STEP_DEGREES) % 360),
        Action::UpdateContent { input, content } => {
            edit_input(&mut state, input, |text| text.content = content);
        }
        Action::SavePosition { input, position } => {
            edit_input(&mut state, input, |text| text.position = position);
        }
        Action::DeleteText { input } => {
            let selected = state.selected_mut();
            if selected.current.contains_input(input) {
                selected.edit(|image| image.inputs.retain(|text| text.id != input));
            }
        }
        Action::RestorePosition => {
            let current = &mut state.selected_mut().current;
            current.inputs = current.inputs.clone();
        }
        Action::Undo => {
            state.selected_mut().undo();
        }
        Action::Redo => {
            state.selected_mut().redo();
        }
    }
    state
}

/// Snapshot and rewrite the matching text block; no-op when `input` is unknown.
fn edit_input(state: &mut GalleryState, input: InputId, update: impl FnOnce(&mut TextInput)) {
    let selected = state.selected_mut();
    if !selected.current.contains_input(input) {
        return;
    }
    selected.edit(|image| {
        if let Some(text) = image.inputs.iter_mut().find(|text| text.id == input) {
            update(text);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let state = reduce(GalleryState::seed(), Action::SelectImage(5));
        assert_eq!(state, GalleryState::seed());
    }

    #[test]
    fn test_add_text_allocates_fresh_id() {
        let state = reduce(GalleryState::seed(), Action::AddTextInput);
        let ids: Vec<_> = state.selected().current.inputs.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![InputId(0), InputId(2)]);
        assert_eq!(state.next_input_id, 3);
    }

    #[test]
    fn test_ids_not_reused_after_undo() {
        let state = reduce(GalleryState::seed(), Action::AddTextInput);
        let state = reduce(state, Action::Undo);
        let state = reduce(state, Action::AddTextInput);
        assert_eq!(state.selected().current.inputs[1].id, InputId(3));
    }

    #[test]
    fn test_unknown_input_is_noop() {
        let seed = GalleryState::seed();
        let state = reduce(
            seed.clone(),
            Action::UpdateContent {
                input: InputId(1),
                content: "other image".to_string(),
            },
        );
        assert_eq!(state, seed);

        let state = reduce(
            state,
            Action::SavePosition {
                input: InputId(1),
                position: Position::new(50.0, 50.0),
            },
        );
        assert_eq!(state, seed);

        let state = reduce(state, Action::DeleteText { input: InputId(99) });
        assert_eq!(state, seed);
    }

    #[test]
    fn test_save_position_keeps_full_precision() {
        let id = GalleryState::seed().selected().current.inputs[0].id;
        let position = Position::new(16_777_217.0, 0.1);
        let state = reduce(
            GalleryState::seed(),
            Action::SavePosition { input: id, position },
        );
        let stored = state.selected().current.input(id).unwrap().position;
        assert_eq!(stored.x, 16_777_217.0);
        assert_eq!(stored.y, 0.1);
    }

    #[test]
    fn test_restore_position_keeps_history() {
        let state = reduce(GalleryState::seed(), Action::ZoomIn);
        let before = state.clone();
        let state = reduce(state, Action::RestorePosition);
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_image_selects_it() {
        let state = reduce(
            GalleryState::seed(),
            Action::AddImage {
                src: "local.png".to_string(),
            },
        );
        assert_eq!(state.images.len(), 3);
        assert_eq!(state.selected_image, 2);
        assert_eq!(state.selected().current.src, "local.png");
        assert_eq!(state.selected().current.inputs[0].id, InputId(2));
        assert!(!state.selected().history.can_undo());
    }

    #[test]
    fn test_empty_gallery_does_not_panic() {
        let empty = GalleryState {
            images: Vec::new(),
            selected_image: 0,
            next_input_id: 0,
        };
        let state = reduce(empty.clone(), Action::ZoomIn);
        let state = reduce(state, Action::Undo);
        let state = reduce(state, Action::SelectImage(0));
        assert_eq!(state, empty);
    }

    #[test]
    fn test_is_edit() {
        assert!(Action::ZoomIn.is_edit());
        assert!(!Action::Undo.is_edit());
        assert!(!Action::RestorePosition.is_edit());
        assert!(!Action::SelectImage(0).is_edit());
    }
}
