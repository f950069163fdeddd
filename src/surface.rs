use egui::{Align2, Color32, FontId, Mesh, Painter, Pos2, Shape, Stroke as EguiStroke, Vec2};

use crate::geometry::Bounds;

/// Drawing capabilities the canvas needs from its host.
///
/// All positions are in viewport space: canvas points already translated by
/// the pan offset.
pub trait Surface {
    /// Fill a triangle strip: every three consecutive vertices form a triangle.
    fn fill_triangle_strip(&mut self, vertices: &[Pos2], color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Thin open polyline, used for strokes too short to tessellate.
    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    fn outline_bounds(&mut self, bounds: Bounds, color: Color32);

    fn text(&mut self, text: &str, position: Pos2, color: Color32);
}

/// [`Surface`] backed by an egui [`Painter`].
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Vec2,
    font: FontId,
}

impl<'a> PainterSurface<'a> {
    /// `origin` is the screen position of the viewport's top-left corner.
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
            font: FontId::proportional(20.0),
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_triangle_strip(&mut self, vertices: &[Pos2], color: Color32) {
        if vertices.len() < 3 {
            return;
        }

        let mut mesh = Mesh::default();
        mesh.reserve_vertices(vertices.len());
        mesh.reserve_triangles(vertices.len() - 2);
        for vertex in vertices {
            mesh.colored_vertex(*vertex + self.origin, color);
        }
        for i in 0..(vertices.len() as u32 - 2) {
            mesh.add_triangle(i, i + 1, i + 2);
        }

        self.painter.add(Shape::mesh(mesh));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center + self.origin, radius, color);
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let points = points.iter().map(|p| *p + self.origin).collect();
        self.painter
            .add(Shape::line(points, EguiStroke::new(thickness, color)));
    }

    fn outline_bounds(&mut self, bounds: Bounds, color: Color32) {
        let rect = bounds.to_rect().translate(self.origin);
        self.painter
            .rect_stroke(rect, 0.0, EguiStroke::new(1.0, color));
    }

    fn text(&mut self, text: &str, position: Pos2, color: Color32) {
        self.painter.text(
            position + self.origin,
            Align2::LEFT_TOP,
            text,
            self.font.clone(),
            color,
        );
    }
}

/// Geometry captured by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    TriangleStrip { vertices: Vec<Pos2>, color: Color32 },
    Circle { center: Pos2, radius: f32, color: Color32 },
    Polyline { points: Vec<Pos2>, thickness: f32, color: Color32 },
    BoundsOutline { bounds: Bounds, color: Color32 },
    Text { text: String, position: Pos2, color: Color32 },
}

/// Headless [`Surface`] that records draw calls instead of painting them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangle_strips(&self) -> impl Iterator<Item = &[Pos2]> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::TriangleStrip { vertices, .. } => Some(vertices.as_slice()),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Pos2, f32)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_triangle_strip(&mut self, vertices: &[Pos2], color: Color32) {
        self.calls.push(DrawCall::TriangleStrip {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            thickness,
            color,
        });
    }

    fn outline_bounds(&mut self, bounds: Bounds, color: Color32) {
        self.calls.push(DrawCall::BoundsOutline { bounds, color });
    }

    fn text(&mut self, text: &str, position: Pos2, color: Color32) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            position,
            color,
        });
    }
}
