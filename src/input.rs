use egui::{Context, Key, Modifiers, PointerButton, Rect};

use crate::geometry::{Bounds, Point};
use crate::history::Command;

/// Press and release edges of one button during a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    pub pressed: bool,
    pub released: bool,
}

impl ButtonEdges {
    pub const NONE: Self = Self {
        pressed: false,
        released: false,
    };
    pub const PRESSED: Self = Self {
        pressed: true,
        released: false,
    };
    pub const RELEASED: Self = Self {
        pressed: false,
        released: true,
    };
}

/// Everything the canvas reads from its host in one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position relative to the viewport, `None` when unknown.
    pub pointer: Option<Point>,
    pub viewport: Bounds,
    /// Seconds since the previous frame
    pub frame_time: f32,
    pub draw: ButtonEdges,
    pub pan: ButtonEdges,
    pub commands: Vec<Command>,
    pub toggle_debug: bool,
}

impl FrameInput {
    /// Read the current frame from egui. `canvas_rect` is the screen area of the canvas.
    ///
    /// Primary button draws, secondary pans. Ctrl/Cmd+Z goes back in history,
    /// Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y goes forward, F3 toggles the debug overlay.
    pub fn from_egui(ctx: &Context, canvas_rect: Rect) -> Self {
        let mut input = ctx.input(|i| Self {
            pointer: i
                .pointer
                .latest_pos()
                .map(|pos| Point::from_pos2(pos - canvas_rect.min.to_vec2())),
            viewport: Bounds::from_extent(canvas_rect.width() as i32, canvas_rect.height() as i32),
            frame_time: i.stable_dt,
            draw: ButtonEdges {
                pressed: i.pointer.button_pressed(PointerButton::Primary),
                released: i.pointer.button_released(PointerButton::Primary),
            },
            pan: ButtonEdges {
                pressed: i.pointer.button_pressed(PointerButton::Secondary),
                released: i.pointer.button_released(PointerButton::Secondary),
            },
            commands: Vec::new(),
            toggle_debug: false,
        });

        ctx.input_mut(|i| {
            // Shift+Z first: consume_key ignores extra shift when matching.
            if i.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)
                || i.consume_key(Modifiers::COMMAND, Key::Y)
            {
                input.commands.push(Command::HistoryForward);
            } else if i.consume_key(Modifiers::COMMAND, Key::Z) {
                input.commands.push(Command::HistoryBack);
            }
            input.toggle_debug = i.consume_key(Modifiers::NONE, Key::F3);
        });

        input
    }
}

/// Throttles pointer sampling to a fixed rate independent of the frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputClock {
    period: f32,
    elapsed: f32,
}

impl InputClock {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    /// Advance by `frame_time` seconds. True when more than one period has
    /// accumulated since the last sampled frame; the accumulator then resets.
    pub fn tick(&mut self, frame_time: f32) -> bool {
        self.elapsed += frame_time;
        if self.elapsed > self.period {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }
}
