use std::collections::HashMap;

use eframe::egui;

use overlay_editor::config::EditorConfig;
use overlay_editor::editor::gesture::{DELETE_PROMPT, DeleteConfirmation, DragCoordinator};
use overlay_editor::editor::source::{self, ImageSource, SourceError};
use overlay_editor::editor::view::{self, GalleryView};
use overlay_editor::editor::{Action, GalleryState, InputId, Store, TextInput};

use super::canvas::{CanvasState, render_canvas};

const THUMBNAIL_SIZE: egui::Vec2 = egui::Vec2::new(160.0, 100.0);

/// Blocking native yes/no prompt for removing a text block dropped outside the image.
struct DialogConfirmation;

impl DeleteConfirmation for DialogConfirmation {
    fn confirm_delete(&mut self, input: &TextInput) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Remove text block")
            .set_description(format!("{}\n\n\"{}\"", DELETE_PROMPT, input.content))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }
}

/// Decoded textures keyed by image `src`; failed loads are remembered as `None`.
#[derive(Default)]
struct TextureCache {
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl TextureCache {
    fn get(&mut self, ctx: &egui::Context, src: &str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(src) {
            return cached.clone();
        }

        let texture = match source::load_rgba(src) {
            Ok(rgba) => {
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                Some(ctx.load_texture(src, color, egui::TextureOptions::LINEAR))
            }
            Err(SourceError::Remote(url)) => {
                log::info!("showing placeholder for remote image {}", url);
                None
            }
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };
        self.textures.insert(src.to_string(), texture.clone());
        texture
    }
}

/// Text field contents for one block, remembering the stored content it started from.
#[derive(Debug, Clone, PartialEq)]
struct Draft {
    base: String,
    text: String,
}

impl Draft {
    fn new(content: &str) -> Self {
        Self {
            base: content.to_string(),
            text: content.to_string(),
        }
    }

    /// Follow the stored content when it changes underneath the field, focused or not.
    fn sync(&mut self, content: &str) {
        if self.base != content {
            self.base = content.to_string();
            self.text = content.to_string();
        }
    }

    /// The edited text, if it differs from what the store holds.
    fn commit(&self) -> Option<String> {
        (self.text != self.base).then(|| self.text.clone())
    }
}

pub struct OverlayEditorApp {
    store: Store,
    coordinator: DragCoordinator,
    canvas_state: CanvasState,
    textures: TextureCache,
    /// In-progress edits of text block content, committed when the field loses focus
    drafts: HashMap<InputId, Draft>,
    config: EditorConfig,
    status_message: String,
}

impl OverlayEditorApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: EditorConfig,
        gallery: GalleryState,
    ) -> Self {
        Self {
            store: Store::new(gallery),
            coordinator: DragCoordinator::new(),
            canvas_state: CanvasState::new(),
            textures: TextureCache::default(),
            drafts: HashMap::new(),
            config,
            status_message: String::from("Ready - drag text blocks onto the image"),
        }
    }

    fn dispatch(&mut self, action: Action) {
        let message = match &action {
            Action::Undo => Some("Undo"),
            Action::Redo => Some("Redo"),
            Action::DeleteText { .. } => Some("Text block removed"),
            _ => None,
        };
        self.store.apply(action);
        if let Some(message) = message {
            self.status_message = message.to_string();
        }
    }

    fn open_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            let src = path.to_string_lossy().into_owned();
            self.status_message = format!("Opened: {}", path.display());
            self.dispatch(Action::AddImage { src });
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        let selected = self.store.state().selected();
        let can_undo = view::undo_available(selected);
        let can_redo = view::redo_available(selected);

        ui.horizontal(|ui| {
            if ui.button("Open Image").clicked() {
                self.open_image();
            }

            ui.separator();

            if ui.button("New Text Block").clicked() {
                actions.push(Action::AddTextInput);
            }
            if ui.button("Zoom In").clicked() {
                actions.push(Action::ZoomIn);
            }
            if ui.button("Zoom Out").clicked() {
                actions.push(Action::ZoomOut);
            }
            if ui.button("Rotate").clicked() {
                actions.push(Action::Rotate);
            }

            ui.separator();

            if ui
                .add_enabled(can_undo, egui::Button::new("↶ Undo"))
                .on_hover_text("Ctrl+Z")
                .clicked()
            {
                actions.push(Action::Undo);
            }
            if ui
                .add_enabled(can_redo, egui::Button::new("↷ Redo"))
                .on_hover_text("Ctrl+Y or Ctrl+Shift+Z")
                .clicked()
            {
                actions.push(Action::Redo);
            }
        });
    }

    fn render_gallery(&mut self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.heading("Images");
        ui.separator();

        let ctx = ui.ctx().clone();
        let state = self.store.state();
        let entries: Vec<(usize, String)> = state
            .images
            .iter()
            .enumerate()
            .map(|(idx, image)| (idx, image.current.src.clone()))
            .collect();
        let selected_image = state.selected_image;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (idx, src) in entries {
                let is_selected = selected_image == idx;
                if let Some(texture) = self.textures.get(&ctx, &src) {
                    let thumbnail = egui::Image::from_texture(egui::load::SizedTexture::from_handle(
                        &texture,
                    ))
                    .max_size(THUMBNAIL_SIZE)
                    .sense(egui::Sense::click());
                    if ui.add(thumbnail).clicked() {
                        actions.push(Action::SelectImage(idx));
                    }
                }
                let label = format!("{}: {}", idx + 1, ImageSource::label(&src));
                if ui.selectable_label(is_selected, label).clicked() {
                    actions.push(Action::SelectImage(idx));
                }
            }
        });
    }

    fn render_text_blocks(&mut self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.heading("Text blocks");
        ui.separator();

        let inputs = self.store.state().selected().current.inputs.clone();
        self.drafts
            .retain(|id, _| inputs.iter().any(|input| input.id == *id));

        for input in &inputs {
            let draft = self
                .drafts
                .entry(input.id)
                .or_insert_with(|| Draft::new(&input.content));
            draft.sync(&input.content);
            let response =
                ui.add(egui::TextEdit::singleline(&mut draft.text).desired_width(f32::INFINITY));

            if response.lost_focus()
                && let Some(content) = draft.commit()
            {
                actions.push(Action::UpdateContent {
                    input: input.id,
                    content,
                });
            }
        }
    }
}

impl eframe::App for OverlayEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        // a focused text field handles its own Ctrl+Z
        let typing = ctx.wants_keyboard_input();
        ctx.input(|i| {
            if typing {
                return;
            }
            // Undo: Ctrl+Z
            if i.key_pressed(egui::Key::Z) && i.modifiers.command && !i.modifiers.shift {
                actions.push(Action::Undo);
            }
            // Redo: Ctrl+Y or Ctrl+Shift+Z
            if i.key_pressed(egui::Key::Y) && i.modifiers.command {
                actions.push(Action::Redo);
            }
            if i.key_pressed(egui::Key::Z) && i.modifiers.command && i.modifiers.shift {
                actions.push(Action::Redo);
            }
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui, &mut actions);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(GalleryView::of(self.store.state()).to_string());
                });
            });
        });

        egui::SidePanel::left("gallery_panel")
            .default_width(180.0)
            .show(ctx, |ui| {
                self.render_gallery(ui, &mut actions);
            });

        egui::SidePanel::right("text_panel")
            .default_width(220.0)
            .show(ctx, |ui| {
                self.render_text_blocks(ui, &mut actions);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let image = self.store.state().selected().current.clone();
            let texture = self.textures.get(ctx, &image.src);
            let layout = &self.config.layout;
            let stopped = render_canvas(
                ui,
                &image,
                texture.as_ref(),
                &mut self.canvas_state,
                &mut self.coordinator,
                egui::Vec2::new(layout.canvas_width, layout.canvas_height),
                layout.position_divisor,
            );

            if let Some(stop) = stopped
                && let Some(action) =
                    self.coordinator
                        .drag_stopped(&stop.input, stop.dropped, &mut DialogConfirmation)
            {
                actions.push(action);
            }
        });

        for action in actions {
            self.dispatch(action);
        }
    }
}
