//! The [`HeightMap`] type — a rectangular grid of [`Elevation`]s.
//!
//! Unlike a shared-buffer view, a `HeightMap` owns its storage outright. It is
//! read-only to the pathfinders, which borrow it immutably, so one map can back
//! any number of independent searches (including searches on other threads).

use crate::error::GridError;
use crate::geom::{Point, Range};

/// The elevation of one cell, a small non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Elevation(pub u32);

impl Elevation {
    /// Create a new elevation.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Elevation {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Elevation> for u32 {
    fn from(e: Elevation) -> Self {
        e.0
    }
}

/// A rectangular, row-major map from [`Point`] to [`Elevation`].
///
/// Every row has the same width and both dimensions are at least 1; all
/// constructors enforce this. Valid coordinates are `[0, width) x [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    cells: Vec<Elevation>,
    width: i32,
    height: i32,
}

impl HeightMap {
    /// Create a new map of the given size with every cell at elevation 0.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_| Elevation::default())
    }

    /// Create a new map by evaluating `f` at every point, in row-major order.
    pub fn from_fn(
        width: i32,
        height: i32,
        f: impl FnMut(Point) -> Elevation,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let cells = Range::new(0, 0, width, height).iter().map(f).collect();
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a map from rows of raw elevation values.
    ///
    /// The first row fixes the width; every later row must match it.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = u32>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values.into_iter().map(Elevation));
            let found = cells.len() - before;
            match width {
                None if found == 0 => return Err(GridError::Empty),
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::InconsistentWidth {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or(GridError::Empty)?;
        let (width, height) = checked_dims(width, height)?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// The bounding range `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (x = width, y = height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` is inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Elevation at `p`, or `None` if `p` is outside the map.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Elevation> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the elevation at `p`. Does nothing if `p` is outside the map.
    pub fn set(&mut self, p: Point, e: Elevation) {
        if let Some(i) = self.index(p) {
            self.cells[i] = e;
        }
    }

    /// Iterate over `(Point, Elevation)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Elevation)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Elevation]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Every point whose elevation equals `e`, in row-major order.
    pub fn points_at(&self, e: Elevation) -> Vec<Point> {
        self.iter()
            .filter_map(|(p, v)| (v == e).then_some(p))
            .collect()
    }
}

/// Coordinates are `i32`, so neither dimension may exceed `i32::MAX`.
fn checked_dims(width: usize, height: usize) -> Result<(i32, i32), GridError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(GridError::TooLarge { width, height }),
    }
}

impl<'a> IntoIterator for &'a HeightMap {
    type Item = (Point, Elevation);
    type IntoIter = std::iter::Zip<
        crate::geom::RangeIter,
        std::iter::Copied<std::slice::Iter<'a, Elevation>>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HeightMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HeightMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<Vec<u32>> as serde::Deserialize>::deserialize(deserializer)?;
        HeightMap::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
