use super::history::History;

/// Placeholder content for freshly created text blocks.
pub const PLACEHOLDER_TEXT: &str = "Enter Text Here";

/// Sources of the two images every gallery starts with.
pub const SEED_SOURCES: [&str; 2] = [
    "https://upload.wikimedia.org/wikipedia/commons/c/c8/Alexandre_Lacauchie_-_Gilbert_Duprez_as_Gaston_in_Verdi%27s_J%C3%A9rusalem.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/2/20/Adolphe-Joseph-Louis_Alizard_from_Le_Charivari.jpg/800px-Adolphe-Joseph-Louis_Alizard_from_Le_Charivari.jpg",
];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Position {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Stable identifier of a text block, assigned once when the block is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(pub u64);

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A draggable text overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    pub id: InputId,
    pub position: Position,
    pub content: String,
}

impl TextInput {
    /// New block at the origin carrying the placeholder text.
    pub fn placeholder(id: InputId) -> Self {
        Self {
            id,
            position: Position::ORIGIN,
            content: PLACEHOLDER_TEXT.to_string(),
        }
    }
}

/// One editable snapshot of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct EditingImage {
    pub src: String,
    pub zoom: f64,
    /// Rotation in degrees, kept in `0..360` by the reducer
    pub rotate: u32,
    pub inputs: Vec<TextInput>,
}

impl EditingImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            zoom: 1.0,
            rotate: 0,
            inputs: Vec::new(),
        }
    }

    pub fn input(&self, id: InputId) -> Option<&TextInput> {
        self.inputs.iter().find(|input| input.id == id)
    }

    pub fn contains_input(&self, id: InputId) -> bool {
        self.input(id).is_some()
    }
}

/// The live snapshot of an image plus its undo/redo stacks.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageWithHistory {
    pub current: EditingImage,
    pub history: History<EditingImage>,
}

impl ImageWithHistory {
    pub fn new(current: EditingImage) -> Self {
        Self {
            current,
            history: History::new(),
        }
    }

    /// Undo-reachable snapshots, most recent first.
    pub fn previous(&self) -> impl ExactSizeIterator<Item = &EditingImage> + DoubleEndedIterator {
        self.history.previous()
    }

    /// Redo-reachable snapshots, most recent first.
    pub fn next(&self) -> impl ExactSizeIterator<Item = &EditingImage> + DoubleEndedIterator {
        self.history.next()
    }

    /// Record an edit: the current snapshot moves onto the undo stack and `edit`
    /// is applied to a copy of it.
    pub fn edit(&mut self, edit: impl FnOnce(&mut EditingImage)) {
        let mut updated = self.current.clone();
        edit(&mut updated);
        let previous = std::mem::replace(&mut self.current, updated);
        self.history.save_state(previous);
    }

    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.step(History::undo)
    }

    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.step(History::redo)
    }

    fn step(
        &mut self,
        op: impl FnOnce(&mut History<EditingImage>, EditingImage) -> Result<EditingImage, EditingImage>,
    ) -> bool {
        let current = std::mem::replace(&mut self.current, EditingImage::new(String::new()));
        match op(&mut self.history, current) {
            Ok(restored) => {
                self.current = restored;
                true
            }
            Err(unchanged) => {
                self.current = unchanged;
                false
            }
        }
    }
}

/// Every image in the editor and which one is being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    pub images: Vec<ImageWithHistory>,
    pub selected_image: usize,
    /// Next identifier handed out to a new text block
    pub next_input_id: u64,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::seed()
    }
}

impl GalleryState {
    /// The initial gallery: the two seed images, each with one placeholder block.
    pub fn seed() -> Self {
        Self::from_sources(SEED_SOURCES)
    }

    /// Gallery built from arbitrary sources, laid out like the seed images.
    ///
    /// An empty source list falls back to the seed images so `selected_image`
    /// always points at a valid entry.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self {
            images: Vec::new(),
            selected_image: 0,
            next_input_id: 0,
        };
        for src in sources {
            state.push_image(src.into());
        }
        if state.images.is_empty() {
            return Self::seed();
        }
        state
    }

    pub fn selected(&self) -> &ImageWithHistory {
        &self.images[self.selected_image]
    }

    pub fn selected_mut(&mut self) -> &mut ImageWithHistory {
        &mut self.images[self.selected_image]
    }

    /// Hand out a fresh text block identifier.
    pub fn allocate_input_id(&mut self) -> InputId {
        let id = InputId(self.next_input_id);
        self.next_input_id += 1;
        id
    }

    /// Append an image with a single placeholder block and empty history.
    /// Returns the new image's index.
    pub fn push_image(&mut self, src: String) -> usize {
        let id = self.allocate_input_id();
        let mut image = EditingImage::new(src);
        image.inputs.push(TextInput::placeholder(id));
        self.images.push(ImageWithHistory::new(image));
        self.images.len() - 1
    }
}
