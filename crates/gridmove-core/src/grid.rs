//! The [`Grid`] container — an owned rectangular 2D array addressed by [`Point`].
//!
//! A `Grid` owns its cells outright: cloning yields an independent copy, so
//! search results can be handed around without sharing mutable state.
//! Rectangularity is a construction invariant — every row has the same
//! length, and a grid with zero rows or zero columns is the empty grid with
//! size (0, 0).

use std::fmt;

use crate::geom::Point;

/// An owned rectangular 2D array of `T`, row-major, addressed by (x, y)
/// with y as the row index.
///
/// All accessors are bounds-checked and never panic: reads outside the grid
/// return `None`, writes return `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T> Default for Grid<T> {
    /// The empty grid, with size (0, 0).
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid of the given dimensions with every cell set to `fill`.
    ///
    /// Dimensions of zero or less produce the empty grid.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        if width <= 0 || height <= 0 {
            return Self::default();
        }
        Self {
            cells: vec![fill; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    /// Build a grid from nested rows (outer index y, inner index x).
    ///
    /// Every row must have the same length as the first; the first offending
    /// row is reported as [`GridError::Ragged`]. No rows, or rows of zero
    /// length, produce the empty grid.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut cells = Vec::with_capacity(expected * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != expected {
                return Err(GridError::Ragged {
                    row: y,
                    len: row.len(),
                    expected,
                });
            }
            cells.extend(row);
        }
        if expected == 0 {
            return Ok(Self::default());
        }
        Ok(Self {
            cells,
            width: expected as i32,
            height: height as i32,
        })
    }

    /// Size as a `Point` (width = x, height = y). (0, 0) when empty.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutably borrow the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Write the cell at `p`. Returns `false` without writing when `p` is
    /// out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter { grid: self, idx: 0 }
    }

    /// Render the grid as a fixed-width text block.
    ///
    /// Each cell is formatted by `f`, right-aligned to the widest cell in
    /// the grid. Cells are separated by one space, rows by `\n`. The empty
    /// grid renders as an empty string.
    pub fn render_with<F>(&self, mut f: F) -> String
    where
        F: FnMut(Point, &T) -> String,
    {
        if self.is_empty() {
            return String::new();
        }
        let mut rendered = Vec::with_capacity(self.cells.len());
        let mut col_width = 0;
        for (p, v) in self.iter() {
            let s = f(p, v);
            col_width = col_width.max(s.chars().count());
            rendered.push(s);
        }
        let w = self.width as usize;
        let mut out = String::new();
        for (i, s) in rendered.iter().enumerate() {
            if i % w != 0 {
                out.push(' ');
            } else if i != 0 {
                out.push('\n');
            }
            for _ in s.chars().count()..col_width {
                out.push(' ');
            }
            out.push_str(s);
        }
        out
    }
}

impl<T: fmt::Display> Grid<T> {
    /// Render the grid as a fixed-width text block using each cell's
    /// `Display` impl.
    pub fn render(&self) -> String {
        self.render_with(|_, v| v.to_string())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Row-major iterator over `(Point, &T)` pairs of a [`Grid`].
pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    idx: usize,
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (Point, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.grid.cells.get(self.idx)?;
        let p = self.grid.point(self.idx);
        self.idx += 1;
        Some((p, cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cells.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for GridIter<'_, T> {}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (Point, &'a T);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> GridIter<'a, T> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged { row, len, expected } => {
                write!(f, "grid row {row} has length {len}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}
