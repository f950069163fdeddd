use log::debug;

use crate::collection::StrokeCollection;
use crate::stroke::StrokeBuilder;

/// History commands issued by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the newest canvas stroke into the undo buffer.
    HistoryBack,
    /// Move the newest undone stroke back onto the canvas.
    HistoryForward,
}

/// Owns the visible canvas and the undo buffer and moves strokes between them.
#[derive(Debug, Clone, Default)]
pub struct History {
    canvas: StrokeCollection,
    undo_buffer: StrokeCollection,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn canvas(&self) -> &StrokeCollection {
        &self.canvas
    }

    pub fn undo_buffer(&self) -> &StrokeCollection {
        &self.undo_buffer
    }

    /// A new stroke invalidates everything that could be redone.
    pub fn begin_stroke(&mut self) {
        self.undo_buffer.clear_all();
    }

    /// Finalize the builder onto the canvas. Returns false for an empty builder.
    pub fn commit(&mut self, builder: &mut StrokeBuilder) -> bool {
        self.canvas.append(builder)
    }

    pub fn back(&mut self) -> bool {
        let moved = StrokeCollection::move_last(&mut self.canvas, &mut self.undo_buffer);
        if moved {
            debug!("History back: {} strokes on canvas", self.canvas.len());
        }
        moved
    }

    pub fn forward(&mut self) -> bool {
        let moved = StrokeCollection::move_last(&mut self.undo_buffer, &mut self.canvas);
        if moved {
            debug!("History forward: {} strokes on canvas", self.canvas.len());
        }
        moved
    }

    /// Apply a command. Returns false when there was nothing to move.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::HistoryBack => self.back(),
            Command::HistoryForward => self.forward(),
        }
    }

    pub fn can_back(&self) -> bool {
        !self.canvas.is_empty()
    }

    pub fn can_forward(&self) -> bool {
        !self.undo_buffer.is_empty()
    }
}
