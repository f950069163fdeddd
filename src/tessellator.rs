use egui::{Color32, Pos2, pos2};

use crate::geometry::Point;
use crate::surface::Surface;

/// Samples taken along each spline segment.
pub const SPLINE_SEGMENT_DIVISIONS: usize = 16;

/// Vertices in the triangle strip of one segment.
pub const STRIP_VERTEX_COUNT: usize = 2 * SPLINE_SEGMENT_DIVISIONS + 2;

/// Cubic polynomials of one uniform B-spline segment, one per axis.
#[derive(Debug, Clone, Copy)]
struct BasisSegment {
    a: [f32; 4],
    b: [f32; 4],
}

impl BasisSegment {
    fn new(p1: Pos2, p2: Pos2, p3: Pos2, p4: Pos2) -> Self {
        let blend = |c1: f32, c2: f32, c3: f32, c4: f32| {
            [
                (-c1 + 3.0 * c2 - 3.0 * c3 + c4) / 6.0,
                (3.0 * c1 - 6.0 * c2 + 3.0 * c3) / 6.0,
                (-3.0 * c1 + 3.0 * c3) / 6.0,
                (c1 + 4.0 * c2 + c3) / 6.0,
            ]
        };

        Self {
            a: blend(p1.x, p2.x, p3.x, p4.x),
            b: blend(p1.y, p2.y, p3.y, p4.y),
        }
    }

    fn start(&self) -> Pos2 {
        pos2(self.a[3], self.b[3])
    }

    fn at(&self, t: f32) -> Pos2 {
        let [a0, a1, a2, a3] = self.a;
        let [b0, b1, b2, b3] = self.b;
        pos2(
            a3 + t * (a2 + t * (a1 + t * a0)),
            b3 + t * (b2 + t * (b1 + t * b0)),
        )
    }
}

/// Tessellated outline of a stroke: one triangle strip per spline segment,
/// plus round caps at both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Ribbon {
    strips: Vec<[Pos2; STRIP_VERTEX_COUNT]>,
    start_cap: Pos2,
    end_cap: Pos2,
    cap_radius: f32,
}

impl Ribbon {
    pub fn strips(&self) -> &[[Pos2; STRIP_VERTEX_COUNT]] {
        &self.strips
    }

    pub fn start_cap(&self) -> Pos2 {
        self.start_cap
    }

    pub fn end_cap(&self) -> Pos2 {
        self.end_cap
    }

    pub fn cap_radius(&self) -> f32 {
        self.cap_radius
    }

    /// Submit the caps and one triangle-strip draw call per segment.
    pub fn submit(&self, surface: &mut impl Surface, color: Color32) {
        surface.fill_circle(self.start_cap, self.cap_radius, color);
        for strip in &self.strips {
            surface.fill_triangle_strip(strip, color);
        }
        surface.fill_circle(self.end_cap, self.cap_radius, color);
    }
}

/// Turns control points into a constant-thickness ribbon following the
/// uniform cubic B-spline through them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineTessellator {
    thickness: f32,
}

impl SplineTessellator {
    pub fn new(thickness: f32) -> Self {
        Self { thickness }
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Tessellate `points` after translating them by `offset`.
    ///
    /// Needs at least four control points; returns `None` otherwise.
    pub fn tessellate(&self, points: &[Point], offset: Point) -> Option<Ribbon> {
        if points.len() < 4 {
            return None;
        }

        let half = 0.5 * self.thickness;
        let mut strips = Vec::with_capacity(points.len() - 3);
        let mut start_cap = Pos2::ZERO;

        // Tangent state carries over between windows so the strips join up.
        let mut current = Pos2::ZERO;
        let mut dx = 0.0_f32;
        let mut dy = 0.0_f32;
        let mut size = 0.0_f32;

        for (i, window) in points.windows(4).enumerate() {
            let [p1, p2, p3, p4] =
                [window[0], window[1], window[2], window[3]].map(|p| (p + offset).to_pos2());
            let segment = BasisSegment::new(p1, p2, p3, p4);
            let mut vertices = [Pos2::ZERO; STRIP_VERTEX_COUNT];

            current = segment.start();
            if i == 0 {
                start_cap = current;
            } else {
                vertices[0] = pos2(current.x + dy * size, current.y - dx * size);
                vertices[1] = pos2(current.x - dy * size, current.y + dx * size);
            }

            for j in 1..=SPLINE_SEGMENT_DIVISIONS {
                let t = j as f32 / SPLINE_SEGMENT_DIVISIONS as f32;
                let next = segment.at(t);

                let step_x = next.x - current.x;
                let step_y = next.y - current.y;
                let length = (step_x * step_x + step_y * step_y).sqrt();
                // A zero-length step has no direction; keep the previous normal.
                if length > f32::EPSILON {
                    dx = step_x;
                    dy = step_y;
                    size = half / length;
                }

                if i == 0 && j == 1 {
                    vertices[0] = pos2(current.x + dy * size, current.y - dx * size);
                    vertices[1] = pos2(current.x - dy * size, current.y + dx * size);
                }

                vertices[2 * j] = pos2(next.x + dy * size, next.y - dx * size);
                vertices[2 * j + 1] = pos2(next.x - dy * size, next.y + dx * size);

                current = next;
            }

            strips.push(vertices);
        }

        Some(Ribbon {
            strips,
            start_cap,
            end_cap: current,
            cap_radius: half,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_too_few_points() {
        let tessellator = SplineTessellator::new(2.0);
        let short = points(&[(0, 0), (10, 0), (20, 0)]);
        assert!(tessellator.tessellate(&short, Point::ZERO).is_none());
    }

    #[test]
    fn test_one_strip_per_window() {
        let tessellator = SplineTessellator::new(2.0);
        let line = points(&[(0, 0), (10, 0), (20, 0), (30, 0), (40, 0), (50, 0)]);
        let ribbon = tessellator.tessellate(&line, Point::ZERO).unwrap();
        assert_eq!(ribbon.strips().len(), 3);
        assert_eq!(ribbon.cap_radius(), 1.0);
    }

    #[test]
    fn test_basis_segment_endpoints() {
        let segment = BasisSegment::new(
            pos2(0.0, 0.0),
            pos2(6.0, 0.0),
            pos2(12.0, 0.0),
            pos2(18.0, 0.0),
        );
        // Evenly spaced control points: segment runs from p2 to p3.
        assert!((segment.start().x - 6.0).abs() < 1e-4);
        assert!((segment.at(1.0).x - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_segments_are_continuous() {
        let tessellator = SplineTessellator::new(3.0);
        let curve = points(&[(0, 0), (10, 5), (20, 20), (25, 40), (20, 60), (5, 70)]);
        let ribbon = tessellator.tessellate(&curve, Point::ZERO).unwrap();

        for pair in ribbon.strips().windows(2) {
            let end = &pair[0][STRIP_VERTEX_COUNT - 2..];
            let start = &pair[1][..2];
            for (a, b) in end.iter().zip(start) {
                assert!(a.distance(*b) < 1e-3, "{a:?} != {b:?}");
            }
        }
    }

    #[test]
    fn test_offset_translates_output() {
        let tessellator = SplineTessellator::new(2.0);
        let line = points(&[(0, 0), (10, 0), (20, 0), (30, 0)]);
        let base = tessellator.tessellate(&line, Point::ZERO).unwrap();
        let moved = tessellator.tessellate(&line, Point::new(5, -7)).unwrap();

        assert!((moved.start_cap().x - base.start_cap().x - 5.0).abs() < 1e-4);
        assert!((moved.start_cap().y - base.start_cap().y + 7.0).abs() < 1e-4);
        assert!((moved.end_cap().x - base.end_cap().x - 5.0).abs() < 1e-4);
    }
}
