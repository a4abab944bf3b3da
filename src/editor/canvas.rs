use egui::emath::Rot2;
use egui::epaint::{Mesh, Vertex};
use egui::{Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, TextureHandle, Vec2};

use overlay_editor::editor::gallery::{EditingImage, InputId, Position, TextInput};
use overlay_editor::editor::gesture::{DragCoordinator, EdgeSignal};
use overlay_editor::editor::source::ImageSource;
use overlay_editor::editor::view::{ScreenOffset, Transform, screen_offset};

const TEXT_SIZE: f32 = 18.0;
const TEXT_PADDING: f32 = 4.0;
const PLACEHOLDER_FILL: Color32 = Color32::from_gray(70);
const BLOCK_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 120);
const BLOCK_OUT_OF_BOUNDS: Color32 = Color32::from_rgb(220, 60, 60);
const DRAGGING_STROKE: Color32 = Color32::from_rgb(0, 150, 255);

/// A text block being dragged, with the pointer travel so far in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub input: InputId,
    pub offset: Vec2,
}

#[derive(Debug, Default)]
pub struct CanvasState {
    pub drag: Option<ActiveDrag>,
}

/// A finished drag, ready for the gesture coordinator.
#[derive(Debug, Clone)]
pub struct DragStop {
    pub input: TextInput,
    pub dropped: Position,
}

impl CanvasState {
    pub fn new() -> Self {
        Self { drag: None }
    }

    fn offset_for(&self, id: InputId) -> Vec2 {
        match self.drag {
            Some(drag) if drag.input == id => drag.offset,
            _ => Vec2::ZERO,
        }
    }
}

/// Screen position of a text block's top-left corner.
fn block_origin(offset: ScreenOffset, canvas_rect: Rect) -> Pos2 {
    let (fx, fy) = offset.fractions();
    canvas_rect.min + Vec2::new(fx as f32 * canvas_rect.width(), fy as f32 * canvas_rect.height())
}

/// Convert pointer travel on screen back into logical drag units.
fn logical_delta(delta: Vec2, canvas_rect: Rect, divisor: f64) -> Position {
    Position::new(
        f64::from(delta.x) / f64::from(canvas_rect.width()) * 100.0 * divisor,
        f64::from(delta.y) / f64::from(canvas_rect.height()) * 100.0 * divisor,
    )
}

fn edge_signal(block: Rect, canvas_rect: Rect) -> EdgeSignal {
    EdgeSignal {
        top: block.top() >= canvas_rect.top(),
        bottom: block.bottom() <= canvas_rect.bottom(),
        left: block.left() >= canvas_rect.left(),
        right: block.right() <= canvas_rect.right(),
    }
}

/// Corners of the image quad after zoom and rotation about the canvas center.
fn transformed_corners(image_rect: Rect, transform: Transform) -> [Pos2; 4] {
    let center = image_rect.center();
    let half = image_rect.size() * 0.5 * transform.scale as f32;
    let rot = Rot2::from_angle(transform.rotate_radians());
    [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|corner| center + rot * corner)
}

/// Largest rect with the texture's aspect ratio that fits in `bounds`.
fn fit_rect(bounds: Rect, texture_size: Vec2) -> Rect {
    if texture_size.x <= 0.0 || texture_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / texture_size.x).min(bounds.height() / texture_size.y);
    Rect::from_center_size(bounds.center(), texture_size * scale)
}

/// Draw the image and its text blocks. Returns the drag that ended this frame, if any.
pub fn render_canvas(
    ui: &mut egui::Ui,
    image: &EditingImage,
    texture: Option<&TextureHandle>,
    state: &mut CanvasState,
    coordinator: &mut DragCoordinator,
    canvas_size: Vec2,
    divisor: f64,
) -> Option<DragStop> {
    let size = canvas_size.min(ui.available_size());
    let (canvas_rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(canvas_rect);

    painter.rect_filled(canvas_rect, 0.0, Color32::from_gray(40));

    let transform = Transform {
        scale: image.zoom,
        rotate_degrees: image.rotate,
    };
    match texture {
        Some(texture) => {
            let image_rect = fit_rect(canvas_rect, texture.size_vec2());
            let corners = transformed_corners(image_rect, transform);
            let uvs = [
                Pos2::new(0.0, 0.0),
                Pos2::new(1.0, 0.0),
                Pos2::new(1.0, 1.0),
                Pos2::new(0.0, 1.0),
            ];
            let mut mesh = Mesh::with_texture(texture.id());
            for (pos, uv) in corners.into_iter().zip(uvs) {
                mesh.vertices.push(Vertex {
                    pos,
                    uv,
                    color: Color32::WHITE,
                });
            }
            mesh.add_triangle(0, 1, 2);
            mesh.add_triangle(0, 2, 3);
            painter.add(Shape::mesh(mesh));
        }
        None => {
            let corners = transformed_corners(canvas_rect.shrink(24.0), transform);
            painter.add(Shape::convex_polygon(
                corners.to_vec(),
                PLACEHOLDER_FILL,
                Stroke::new(1.0, Color32::GRAY),
            ));
            painter.text(
                canvas_rect.center(),
                egui::Align2::CENTER_CENTER,
                ImageSource::label(&image.src),
                FontId::proportional(14.0),
                Color32::LIGHT_GRAY,
            );
        }
    }

    let mut stopped = None;

    for input in &image.inputs {
        let galley = painter.layout_no_wrap(
            input.content.clone(),
            FontId::proportional(TEXT_SIZE),
            Color32::WHITE,
        );
        let drag_offset = state.offset_for(input.id);
        let origin = block_origin(screen_offset(input, divisor), canvas_rect) + drag_offset;
        let block_rect =
            Rect::from_min_size(origin, galley.size() + Vec2::splat(TEXT_PADDING * 2.0));

        let response = ui.interact(
            block_rect,
            ui.id().with(("text-block", input.id.0)),
            Sense::drag(),
        );

        if response.drag_started() {
            state.drag = Some(ActiveDrag {
                input: input.id,
                offset: Vec2::ZERO,
            });
            coordinator.edge(EdgeSignal::INSIDE);
        }

        if response.dragged()
            && let Some(drag) = state.drag.as_mut()
            && drag.input == input.id
        {
            drag.offset += response.drag_delta();
            let moved = block_rect.translate(response.drag_delta());
            coordinator.edge(edge_signal(moved, canvas_rect));
        }

        if response.drag_stopped()
            && let Some(drag) = state.drag.take()
            && drag.input == input.id
        {
            stopped = Some(DragStop {
                input: input.clone(),
                dropped: input.position + logical_delta(drag.offset, canvas_rect, divisor),
            });
        }

        let dragging = state.drag.is_some_and(|drag| drag.input == input.id);
        let fill = if dragging && !coordinator.in_bounds() {
            BLOCK_OUT_OF_BOUNDS
        } else {
            BLOCK_FILL
        };
        // blocks may be dragged past the canvas edge, so paint them unclipped
        let overlay = ui.painter();
        overlay.rect_filled(block_rect, 2.0, fill);
        if dragging {
            overlay.rect_stroke(block_rect, 2.0, Stroke::new(1.5, DRAGGING_STROKE));
        }
        overlay.galley(
            block_rect.min + Vec2::splat(TEXT_PADDING),
            galley,
            Color32::WHITE,
        );
    }

    stopped
}
