//! Read-only data derived from the gallery for rendering.

use std::fmt;

use super::gallery::{GalleryState, ImageWithHistory, TextInput};

/// Divisor mapping logical drag coordinates to container-relative percentages.
pub const DEFAULT_POSITION_DIVISOR: f64 = 9.0;

pub fn undo_available(image: &ImageWithHistory) -> bool {
    image.history.can_undo()
}

pub fn redo_available(image: &ImageWithHistory) -> bool {
    image.history.can_redo()
}

/// Offset of a text block inside its container, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenOffset {
    pub left_percent: f64,
    pub top_percent: f64,
}

impl ScreenOffset {
    /// `(left, top)` formatted as percentages.
    pub fn css(&self) -> (String, String) {
        (
            format!("{}%", self.left_percent),
            format!("{}%", self.top_percent),
        )
    }

    /// Fractions of the container size, `1.0` being the full width/height.
    pub fn fractions(&self) -> (f64, f64) {
        (self.left_percent / 100.0, self.top_percent / 100.0)
    }
}

pub fn screen_offset(input: &TextInput, divisor: f64) -> ScreenOffset {
    ScreenOffset {
        left_percent: input.position.x / divisor,
        top_percent: input.position.y / divisor,
    }
}

/// Visual transform of the edited image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub rotate_degrees: u32,
}

impl Transform {
    pub fn of(image: &ImageWithHistory) -> Self {
        Self {
            scale: image.current.zoom,
            rotate_degrees: image.current.rotate,
        }
    }

    pub fn rotate_radians(&self) -> f32 {
        (self.rotate_degrees as f32).to_radians()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale({}) rotate({}deg)", self.scale, self.rotate_degrees)
    }
}

/// Summary of the selected image for toolbars and status lines.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub selected_image: usize,
    pub image_count: usize,
    pub zoom: f64,
    pub rotate: u32,
    pub can_undo: bool,
    pub can_redo: bool,
    pub input_count: usize,
}

impl GalleryView {
    pub fn of(state: &GalleryState) -> Self {
        let image = state.images.get(state.selected_image);
        Self {
            selected_image: state.selected_image,
            image_count: state.images.len(),
            zoom: image.map_or(1.0, |image| image.current.zoom),
            rotate: image.map_or(0, |image| image.current.rotate),
            can_undo: image.is_some_and(undo_available),
            can_redo: image.is_some_and(redo_available),
            input_count: image.map_or(0, |image| image.current.inputs.len()),
        }
    }
}

impl fmt::Display for GalleryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "image {}/{} | zoom {:.0}% | rotate {}° | {} text block(s) | undo: {} | redo: {}",
            self.selected_image + 1,
            self.image_count,
            self.zoom * 100.0,
            self.rotate,
            self.input_count,
            if self.can_undo { "yes" } else { "no" },
            if self.can_redo { "yes" } else { "no" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::gallery::{InputId, Position};

    #[test]
    fn test_screen_offset() {
        let input = TextInput {
            id: InputId(0),
            position: Position::new(90.0, 45.0),
            content: String::new(),
        };
        let offset = screen_offset(&input, DEFAULT_POSITION_DIVISOR);
        assert_eq!(offset.left_percent, 10.0);
        assert_eq!(offset.top_percent, 5.0);
        assert_eq!(offset.css(), ("10%".to_string(), "5%".to_string()));
    }

    #[test]
    fn test_transform_display() {
        let state = GalleryState::seed();
        let transform = Transform::of(state.selected());
        assert_eq!(transform.to_string(), "scale(1) rotate(0deg)");
    }

    #[test]
    fn test_gallery_view_of_seed() {
        let view = GalleryView::of(&GalleryState::seed());
        assert_eq!(view.image_count, 2);
        assert_eq!(view.input_count, 1);
        assert!(!view.can_undo);
        assert!(!view.can_redo);
    }

    #[test]
    fn test_gallery_view_display() {
        let mut state = GalleryState::seed();
        assert_eq!(
            GalleryView::of(&state).to_string(),
            "image 1/2 | zoom 100% | rotate 0° | 1 text block(s) | undo: no | redo: no"
        );

        state.selected_image = 1;
        state.selected_mut().edit(|image| {
            image.zoom = 1.1;
            image.rotate = 45;
        });
        assert_eq!(
            GalleryView::of(&state).to_string(),
            "image 2/2 | zoom 110% | rotate 45° | 1 text block(s) | undo: yes | redo: no"
        );
    }
}
