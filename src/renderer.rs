use egui::{Pos2, pos2};

use crate::canvas::Canvas;
use crate::config::{CanvasConfig, Theme};
use crate::geometry::Point;
use crate::stroke::Stroke;
use crate::surface::Surface;
use crate::tessellator::SplineTessellator;

/// Draws the canvas onto a [`Surface`].
#[derive(Debug, Clone)]
pub struct Renderer {
    tessellator: SplineTessellator,
    theme: Theme,
    debug_overlay: bool,
}

impl Renderer {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            tessellator: SplineTessellator::new(config.stroke_thickness),
            theme: config.theme,
            debug_overlay: config.debug_overlay,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn toggle_debug_overlay(&mut self) {
        self.debug_overlay = !self.debug_overlay;
    }

    /// Render the finished strokes that overlap the viewport, then the
    /// stroke in progress, then diagnostics if enabled.
    pub fn render(&self, canvas: &Canvas, surface: &mut impl Surface) {
        let offset = canvas.position();

        for stroke in canvas.history().canvas().visible(offset, canvas.viewport()) {
            self.draw_stroke(stroke, offset, surface);
        }

        self.draw_in_progress(canvas.builder().points(), offset, surface);

        if self.debug_overlay {
            self.draw_diagnostics(canvas, surface);
        }
    }

    /// Draw one finished stroke. Strokes with fewer than four points draw nothing.
    pub fn draw_stroke(&self, stroke: &Stroke, offset: Point, surface: &mut impl Surface) {
        if self.debug_overlay {
            surface.outline_bounds(stroke.bounds().translate(offset), self.theme.bounds);
        }

        if let Some(ribbon) = self.tessellator.tessellate(stroke.points(), offset) {
            ribbon.submit(surface, self.theme.stroke);
        }
    }

    fn draw_in_progress(&self, points: &[Point], offset: Point, surface: &mut impl Surface) {
        let color = self.theme.stroke;
        let thickness = self.tessellator.thickness();

        match points {
            [] => {}
            [point] => {
                surface.fill_circle((*point + offset).to_pos2(), 0.5 * thickness, color);
            }
            [_, _] | [_, _, _] => {
                let line: Vec<Pos2> = points.iter().map(|p| (*p + offset).to_pos2()).collect();
                surface.polyline(&line, thickness, color);
            }
            _ => {
                if let Some(ribbon) = self.tessellator.tessellate(points, offset) {
                    ribbon.submit(surface, color);
                }
            }
        }
    }

    fn draw_diagnostics(&self, canvas: &Canvas, surface: &mut impl Surface) {
        let fps = if canvas.frame_time() > 0.0 {
            (1.0 / canvas.frame_time()).round() as u32
        } else {
            0
        };
        let strokes = canvas.history().canvas();

        surface.text(&format!("fps: {fps}"), pos2(10.0, 10.0), self.theme.text);
        surface.text(&format!("strokes: {}", strokes.len()), pos2(10.0, 30.0), self.theme.text);
        surface.text(&format!("points: {}", strokes.point_count()), pos2(10.0, 50.0), self.theme.text);
    }
}
