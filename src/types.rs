use core::ops::Range;

/// A logical cell coordinate: (row, column), both non-negative.
///
/// The derived `Ord` compares row first, then column, i.e. row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular index range of rows × columns.
///
/// Both axes are half-open (`row_start..row_end`, `col_start..col_end`); the
/// rect is empty when either axis is. Callers coming from inclusive-bound
/// conventions can use [`GridRect::from_inclusive`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRect {
    pub row_start: usize,
    pub row_end: usize, // exclusive
    pub col_start: usize,
    pub col_end: usize, // exclusive
}

impl GridRect {
    pub const fn new(row_start: usize, row_end: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// Builds a rect from inclusive stop indexes (`rows [0, 2]` ⇒ `0..3`).
    pub const fn from_inclusive(
        row_start: usize,
        row_stop: usize,
        col_start: usize,
        col_stop: usize,
    ) -> Self {
        Self {
            row_start,
            row_end: row_stop + 1,
            col_start,
            col_end: col_stop + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.row_start >= self.row_end || self.col_start >= self.col_end
    }

    /// Number of coordinates in the rect.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.row_end - self.row_start).saturating_mul(self.col_end - self.col_start)
    }

    pub fn rows(&self) -> Range<usize> {
        self.row_start..self.row_end
    }

    pub fn cols(&self) -> Range<usize> {
        self.col_start..self.col_end
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row >= self.row_start
            && coord.row < self.row_end
            && coord.col >= self.col_start
            && coord.col < self.col_end
    }

    /// Iterates every coordinate in row-major order (rows ascending, columns
    /// ascending within each row).
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> {
        let cols = self.cols();
        self.rows()
            .flat_map(move |row| cols.clone().map(move |col| GridCoord { row, col }))
    }

    pub fn intersect(&self, other: &GridRect) -> GridRect {
        GridRect {
            row_start: self.row_start.max(other.row_start),
            row_end: self.row_end.min(other.row_end),
            col_start: self.col_start.max(other.col_start),
            col_end: self.col_end.min(other.col_end),
        }
    }
}

/// The recycled identity key assigned to a coordinate for as long as it stays
/// inside the rendered rectangle. Keys start at 1 and are reused once their
/// previous owner scrolls out.
pub type SlotKey = u32;

/// One dimension of a cell's computed size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extent {
    /// Let the cell size itself (deferred measurement).
    Auto,
    Px(u32),
}

/// An absolute-position style for one cell.
///
/// Offsets are signed: axis-offset compression can push adjusted positions
/// below zero. Absolute positioning is implied; there is no `position` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStyle {
    pub top: i64,
    pub left: i64,
    pub width: Extent,
    pub height: Extent,
}

impl CellStyle {
    /// The style used for cells whose size is not yet measured: anchored at
    /// (0, 0) with auto extents, deliberately not at the cell's eventual
    /// offset so the measurement is not biased by a constrained box.
    pub const fn placeholder() -> Self {
        Self {
            top: 0,
            left: 0,
            width: Extent::Auto,
            height: Extent::Auto,
        }
    }
}

/// Offset and size of one index along one axis, as reported by an
/// [`AxisLayout`](crate::AxisLayout).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSlice {
    pub offset: u64,
    pub size: u32,
}

impl AxisSlice {
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.size as u64)
    }
}

/// A cell produced by the caller's cell factory.
///
/// `style` is `None` when the factory chose not to attach a position style
/// (e.g. a measurement wrapper); the renderer logs a one-shot diagnostic for
/// that case in debug builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCell<C> {
    pub key: SlotKey,
    pub style: Option<CellStyle>,
    pub content: C,
}

impl<C: Clone> RenderedCell<C> {
    /// Returns a copy with the identity key replaced. Cached cells are patched
    /// through this rather than mutated, so the stored value stays valid.
    pub fn with_key(&self, key: SlotKey) -> Self {
        Self {
            key,
            style: self.style,
            content: self.content.clone(),
        }
    }
}
