//! Gallery editing core: data model, history, reducer and the helpers the
//! presentation layer builds on.

pub mod gallery;
pub mod gesture;
pub mod history;
pub mod reducer;
pub mod source;
pub mod store;
pub mod view;

pub use gallery::{
    EditingImage, GalleryState, ImageWithHistory, InputId, PLACEHOLDER_TEXT, Position,
    SEED_SOURCES, TextInput,
};
pub use gesture::{DeleteConfirmation, DragCoordinator, EdgeSignal};
pub use history::History;
pub use reducer::{Action, reduce};
pub use store::Store;
pub use view::{GalleryView, ScreenOffset, Transform};
