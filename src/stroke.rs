use crate::geometry::{Bounds, Point, distance};

/// Initial point capacity of a builder.
pub const DEFAULT_BUILDER_CAPACITY: usize = 64;

/// Number of points captured with fine spacing before decimation coarsens.
pub const FINE_SAMPLE_COUNT: usize = 5;
pub const FINE_SPACING: i32 = 1;
pub const COARSE_SPACING: i32 = 4;

/// Minimum distance a new sample must keep from the last stored one,
/// given how many points are already stored.
pub fn decimation_threshold(stored: usize) -> i32 {
    if stored < FINE_SAMPLE_COUNT {
        FINE_SPACING
    } else {
        COARSE_SPACING
    }
}

// Immutable finalized stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Box<[Point]>,
    bounds: Bounds,
}

impl Stroke {
    /// Copies `points` into an exactly sized stroke. `None` if there are no points.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let bounds = Bounds::from_points(points)?;
        Some(Self {
            points: points.into(),
            bounds,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Growable point buffer for the stroke currently being drawn.
///
/// The buffer is reused across strokes: finalizing resets the length but
/// keeps the allocation.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    points: Vec<Point>,
}

impl Default for StrokeBuilder {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_BUILDER_CAPACITY)
    }
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Add a sample, unless it is closer to the last stored point than the
    /// current decimation threshold. Returns whether the point was kept.
    pub fn push(&mut self, point: Point) -> bool {
        if let Some(&last) = self.points.last() {
            if distance(last, point) < decimation_threshold(self.points.len()) {
                return false;
            }
        }

        if self.points.len() == self.points.capacity() {
            // Double the capacity
            let additional = self.points.capacity().max(1);
            self.points.reserve_exact(additional);
        }
        self.points.push(point);
        true
    }

    /// Move the captured points into a new [`Stroke`] and reset for the next one.
    ///
    /// Returns `None` and leaves the builder untouched when nothing was captured.
    pub fn finalize(&mut self) -> Option<Stroke> {
        let stroke = Stroke::from_points(&self.points)?;
        self.points.clear();
        Some(stroke)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }
}
