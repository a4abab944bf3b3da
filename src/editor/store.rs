use super::gallery::GalleryState;
use super::reducer::{Action, reduce};

/// Owns the gallery and serializes every change through [`reduce`].
#[derive(Debug, Default)]
pub struct Store {
    state: GalleryState,
}

impl Store {
    pub fn new(state: GalleryState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Apply one action and return the resulting gallery.
    pub fn apply(&mut self, action: Action) -> &GalleryState {
        log::debug!("dispatch {:?} on image {}", action, self.state.selected_image);

        let is_edit = action.is_edit();
        let depth_before = undo_depth(&self.state);
        self.state = reduce(std::mem::take(&mut self.state), action);

        if is_edit && undo_depth(&self.state) == depth_before {
            log::trace!("edit did not apply, gallery unchanged");
        }
        &self.state
    }

    /// Apply actions in order, returning the final gallery.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> &GalleryState {
        for action in actions {
            self.apply(action);
        }
        &self.state
    }
}

fn undo_depth(state: &GalleryState) -> Option<usize> {
    state
        .images
        .get(state.selected_image)
        .map(|image| image.history.undo_count())
}
