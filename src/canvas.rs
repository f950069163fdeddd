use log::{debug, info};

use crate::config::CanvasConfig;
use crate::geometry::{Bounds, Point};
use crate::history::{Command, History};
use crate::input::{FrameInput, InputClock};
use crate::stroke::StrokeBuilder;

/// Per-frame drawing state: capture, panning and history.
#[derive(Debug, Clone)]
pub struct Canvas {
    history: History,
    builder: StrokeBuilder,
    /// Pan offset added to canvas points to get viewport points
    position: Point,
    pointer: Point,
    pointer_prev: Point,
    viewport: Bounds,
    clock: InputClock,
    frame_time: f32,
    is_drawing: bool,
    is_panning: bool,
}

impl Canvas {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            history: History::new(),
            builder: StrokeBuilder::new(),
            position: Point::ZERO,
            pointer: Point::ZERO,
            pointer_prev: Point::ZERO,
            viewport: Bounds::default(),
            clock: InputClock::new(config.input_period()),
            frame_time: 0.0,
            is_drawing: false,
            is_panning: false,
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self, input: &FrameInput) {
        self.pointer_prev = self.pointer;
        if let Some(pointer) = input.pointer {
            self.pointer = pointer;
        }
        self.viewport = input.viewport;
        self.frame_time = input.frame_time;
        let is_input_frame = self.clock.tick(input.frame_time);

        // egui can report both edges in one frame for a quick click.
        let draw_tapped = input.draw.pressed && input.draw.released;
        if input.draw.pressed && !self.is_drawing {
            self.begin_stroke();
        }

        if self.is_drawing {
            if draw_tapped || (is_input_frame && !input.draw.released) {
                self.builder.push(self.pointer - self.position);
            }
            if input.draw.released {
                self.is_drawing = false;
                self.finish_stroke();
            }
        }

        if input.pan.pressed {
            self.is_panning = true;
        } else if input.pan.released {
            self.is_panning = false;
        }

        if self.is_panning {
            self.position = self.position + (self.pointer - self.pointer_prev);
        }

        if input.pan.pressed && input.pan.released {
            self.is_panning = false;
        }

        for command in &input.commands {
            self.apply(*command);
        }
    }

    pub fn apply(&mut self, command: Command) -> bool {
        self.history.apply(command)
    }

    fn begin_stroke(&mut self) {
        self.is_drawing = true;
        self.history.begin_stroke();
    }

    fn finish_stroke(&mut self) {
        let points = self.builder.len();
        if self.history.commit(&mut self.builder) {
            let canvas = self.history.canvas();
            info!(
                "Stroke committed: {} points ({} strokes, {} points total)",
                points,
                canvas.len(),
                canvas.point_count()
            );
        } else {
            debug!("Released without capturing any points");
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Points of the stroke currently being drawn.
    pub fn builder(&self) -> &StrokeBuilder {
        &self.builder
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn viewport(&self) -> Bounds {
        self.viewport
    }

    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    pub fn is_panning(&self) -> bool {
        self.is_panning
    }
}
