use egui::{Pos2, Rect, pos2};
use std::ops::{Add, Sub};

/// Integer position in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates a floating point position, the way pointer positions are sampled.
    pub fn from_pos2(pos: Pos2) -> Self {
        Self::new(pos.x as i32, pos.y as i32)
    }

    pub fn to_pos2(self) -> Pos2 {
        pos2(self.x as f32, self.y as f32)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Euclidean distance truncated to an integer.
///
/// Only used as a decimation threshold, so the truncation is part of the contract:
/// a distance of 3.9 compares as 3.
pub fn distance(a: Point, b: Point) -> i32 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    (dx * dx + dy * dy).sqrt() as i32
}

/// Axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Viewport bounds anchored at the origin.
    pub const fn from_extent(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Tight bounding box of `points`, or `None` when there are no points.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(first.x, first.y, first.x, first.y);

        for point in rest {
            bounds.left = bounds.left.min(point.x);
            bounds.right = bounds.right.max(point.x);
            bounds.top = bounds.top.min(point.y);
            bounds.bottom = bounds.bottom.max(point.y);
        }

        Some(bounds)
    }

    pub fn translate(self, offset: Point) -> Self {
        Self::new(
            self.left + offset.x,
            self.top + offset.y,
            self.right + offset.x,
            self.bottom + offset.y,
        )
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn intersects(&self, other: &Self) -> bool {
        intersects(self, other)
    }

    pub fn to_rect(self) -> Rect {
        Rect::from_min_max(
            pos2(self.left as f32, self.top as f32),
            pos2(self.right as f32, self.bottom as f32),
        )
    }
}

/// Open-interval overlap test: bounds that only share an edge do not intersect.
pub fn intersects(a: &Bounds, b: &Bounds) -> bool {
    a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
}
