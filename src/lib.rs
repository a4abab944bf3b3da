//! # overlay-editor
//!
//! A small image editor core: a gallery of images, each carrying draggable text
//! blocks, a zoom factor and a rotation, with independent undo/redo history per
//! image.
//!
//! ## Features
//!
//! - **Reducer**: every edit goes through [`editor::reduce`], a total function
//!   from gallery and action to the next gallery
//! - **History**: linear undo/redo per image; a new edit discards the redo stack
//! - **Gestures**: [`editor::DragCoordinator`] turns a finished drag into a
//!   save, delete or restore action
//! - **Scripts**: replay textual action scripts headlessly
//!
//! ## Example
//!
//! ```rust
//! use overlay_editor::editor::{Action, GalleryState, reduce};
//!
//! let state = reduce(GalleryState::seed(), Action::ZoomIn);
//! let state = reduce(state, Action::Undo);
//! assert_eq!(state.selected().current, GalleryState::seed().selected().current);
//! assert!(state.selected().history.can_redo());
//! ```

pub mod config;
pub mod editor;
pub mod script;

// Re-export commonly used items
pub use config::{ConfigError, EditorConfig};
pub use editor::{Action, GalleryState, Store, reduce};
pub use script::{ScriptError, parse_line, parse_script};
