use log::debug;

use crate::geometry::{Bounds, Point};
use crate::stroke::{Stroke, StrokeBuilder};

/// Initial stroke capacity of a collection.
pub const DEFAULT_COLLECTION_CAPACITY: usize = 4;

/// Ordered list of finalized strokes, oldest first.
///
/// Used for both the visible canvas and the undo buffer so that moving a
/// stroke between the two is symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCollection {
    strokes: Vec<Stroke>,
    /// Total points across all strokes, for diagnostics.
    point_count: usize,
}

impl Default for StrokeCollection {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_COLLECTION_CAPACITY)
    }
}

impl StrokeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            strokes: Vec::with_capacity(capacity.max(1)),
            point_count: 0,
        }
    }

    /// Finalize `builder` into a stroke and append it.
    ///
    /// Does nothing when the builder holds no points. Returns whether a stroke was added.
    pub fn append(&mut self, builder: &mut StrokeBuilder) -> bool {
        match builder.finalize() {
            Some(stroke) => {
                self.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Append an already finalized stroke.
    pub fn push(&mut self, stroke: Stroke) {
        if self.strokes.len() == self.strokes.capacity() {
            let additional = self.strokes.capacity().max(1);
            self.strokes.reserve_exact(additional);
        }
        self.point_count += stroke.len();
        self.strokes.push(stroke);
    }

    /// Remove and return the newest stroke.
    pub fn pop(&mut self) -> Option<Stroke> {
        let stroke = self.strokes.pop()?;
        self.point_count -= stroke.len();
        Some(stroke)
    }

    /// Drop every stroke.
    pub fn clear_all(&mut self) {
        if self.strokes.is_empty() {
            return;
        }
        debug!("Clearing {} strokes ({} points)", self.strokes.len(), self.point_count);
        self.strokes.clear();
        self.point_count = 0;
    }

    /// Transfer the newest stroke of `source` onto the end of `destination`.
    ///
    /// The stroke is moved, not copied. Returns false if `source` was empty.
    pub fn move_last(source: &mut Self, destination: &mut Self) -> bool {
        match source.pop() {
            Some(stroke) => {
                destination.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Strokes whose bounds, translated by `offset`, overlap `viewport`.
    pub fn visible(&self, offset: Point, viewport: Bounds) -> impl Iterator<Item = &Stroke> {
        self.strokes
            .iter()
            .filter(move |stroke| stroke.bounds().translate(offset).intersects(&viewport))
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }

    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }
}

impl<'a> IntoIterator for &'a StrokeCollection {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}
