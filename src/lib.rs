#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod collection;
pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod input;
pub mod renderer;
pub mod stroke;
pub mod surface;
pub mod tessellator;

pub use app::CanvasApp;
pub use canvas::Canvas;
pub use collection::StrokeCollection;
pub use config::{CanvasConfig, Theme};
pub use error::{CanvasError, CanvasResult};
pub use geometry::{Bounds, Point, distance, intersects};
pub use history::{Command, History};
pub use input::{ButtonEdges, FrameInput, InputClock};
pub use renderer::Renderer;
pub use stroke::{Stroke, StrokeBuilder};
pub use surface::{PainterSurface, RecordingSurface, Surface};
pub use tessellator::{Ribbon, SplineTessellator};
