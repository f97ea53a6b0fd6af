#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use alloc::vec::Vec;

use crate::layout::AxisLayout;
use crate::recycler::KeyRecycler;
use crate::{CellStyle, Extent, GridCoord, GridRect, RenderedCell, SlotKey};

#[cfg(feature = "std")]
type CoordMap<V> = HashMap<GridCoord, V>;
#[cfg(not(feature = "std"))]
type CoordMap<V> = BTreeMap<GridCoord, V>;

/// What the cell factory gets to see for one coordinate of the rendered rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellContext {
    pub coord: GridCoord,
    /// Inside the visible (non-overscanned) sub-rectangle.
    pub is_visible: bool,
    pub is_scrolling: bool,
    /// The recycled identity key for this coordinate.
    pub key: SlotKey,
    /// The position style the factory is expected to attach to its cell.
    pub style: CellStyle,
}

/// Per-viewport persistent state for [`render_cell_range`].
///
/// One instance per viewport, threaded by `&mut` across render passes for the
/// life of that viewport. It owns the key recycler, the style cache, and the
/// content-instance cache; nothing here is shared between viewports.
///
/// Cache lifetime is owner-controlled: the renderer never invalidates the
/// content-instance cache itself, so the owner should call
/// [`clear_cell_cache`](Self::clear_cell_cache) between scroll sessions.
pub struct CellRangeState<C> {
    recycler: KeyRecycler,
    style_cache: CoordMap<CellStyle>,
    // `None` entries remember the factory's "render nothing" answer so it is
    // not re-asked while the cache is active.
    cell_cache: CoordMap<Option<RenderedCell<C>>>,
    warned_missing_style: bool,
}

impl<C> Default for CellRangeState<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CellRangeState<C> {
    pub fn new() -> Self {
        Self {
            recycler: KeyRecycler::new(),
            style_cache: CoordMap::new(),
            cell_cache: CoordMap::new(),
            warned_missing_style: false,
        }
    }

    /// The slot key assigned to `coord` by the most recent render pass.
    pub fn slot_key_for(&self, coord: GridCoord) -> Option<SlotKey> {
        self.recycler.key_for(coord)
    }

    /// Number of slot keys currently assigned.
    pub fn slot_key_count(&self) -> usize {
        self.recycler.len()
    }

    pub fn style_cache_len(&self) -> usize {
        self.style_cache.len()
    }

    pub fn cell_cache_len(&self) -> usize {
        self.cell_cache.len()
    }

    pub fn clear_style_cache(&mut self) {
        self.style_cache.clear();
    }

    /// Drops all cached cell instances. Call between scroll sessions: the
    /// renderer only ever adds to this cache, never expires it.
    pub fn clear_cell_cache(&mut self) {
        self.cell_cache.clear();
    }

    #[cfg(test)]
    pub(crate) fn warned_missing_style(&self) -> bool {
        self.warned_missing_style
    }
}

impl<C> core::fmt::Debug for CellRangeState<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellRangeState")
            .field("slot_keys", &self.recycler.len())
            .field("style_cache", &self.style_cache.len())
            .field("cell_cache", &self.cell_cache.len())
            .field("warned_missing_style", &self.warned_missing_style)
            .finish()
    }
}

/// Inputs for one render pass over a cell rectangle.
///
/// `overscanned` must contain `visible`; both are supplied by the viewport,
/// already clamped to the grid. Resolvers and the measurement predicate are
/// borrowed for the duration of the pass only.
pub struct CellRangeParams<'a> {
    pub visible: GridRect,
    pub overscanned: GridRect,
    pub rows: &'a dyn AxisLayout,
    pub columns: &'a dyn AxisLayout,
    /// A scroll gesture is in progress.
    pub is_scrolling: bool,
    /// Keep using the content-instance cache even while not scrolling.
    pub is_scrolling_opt_out: bool,
    /// Horizontal pixel correction applied while column offsets are
    /// compressed. Any non-zero value disables the content-instance cache.
    pub horizontal_adjustment: i64,
    /// Vertical counterpart of `horizontal_adjustment`.
    pub vertical_adjustment: i64,
    /// Deferred-measurement query: `false` means the cell has not been
    /// measured yet and gets the placeholder style.
    pub is_measured: Option<&'a dyn Fn(GridCoord) -> bool>,
}

impl<'a> CellRangeParams<'a> {
    pub fn new(
        visible: GridRect,
        overscanned: GridRect,
        rows: &'a dyn AxisLayout,
        columns: &'a dyn AxisLayout,
    ) -> Self {
        Self {
            visible,
            overscanned,
            rows,
            columns,
            is_scrolling: false,
            is_scrolling_opt_out: false,
            horizontal_adjustment: 0,
            vertical_adjustment: 0,
            is_measured: None,
        }
    }

    pub fn with_scrolling(mut self, is_scrolling: bool) -> Self {
        self.is_scrolling = is_scrolling;
        self
    }

    pub fn with_scrolling_opt_out(mut self, is_scrolling_opt_out: bool) -> Self {
        self.is_scrolling_opt_out = is_scrolling_opt_out;
        self
    }

    pub fn with_adjustments(mut self, horizontal: i64, vertical: i64) -> Self {
        self.horizontal_adjustment = horizontal;
        self.vertical_adjustment = vertical;
        self
    }

    pub fn with_is_measured(mut self, is_measured: &'a dyn Fn(GridCoord) -> bool) -> Self {
        self.is_measured = Some(is_measured);
        self
    }
}

impl core::fmt::Debug for CellRangeParams<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CellRangeParams")
            .field("visible", &self.visible)
            .field("overscanned", &self.overscanned)
            .field("is_scrolling", &self.is_scrolling)
            .field("is_scrolling_opt_out", &self.is_scrolling_opt_out)
            .field("horizontal_adjustment", &self.horizontal_adjustment)
            .field("vertical_adjustment", &self.vertical_adjustment)
            .field("has_is_measured", &self.is_measured.is_some())
            .finish_non_exhaustive()
    }
}

/// Renders the overscanned rectangle and returns the cells sorted by
/// ascending slot key.
///
/// Ascending key order keeps document order stable across passes: a cell keeps
/// its position among its siblings for as long as it keeps its slot key, which
/// is exactly as long as it stays inside the rendered rectangle.
///
/// This is the collecting wrapper around [`for_each_rendered_cell`]; prefer
/// the latter plus a reused scratch buffer if allocation matters.
pub fn render_cell_range<C: Clone>(
    state: &mut CellRangeState<C>,
    params: &CellRangeParams<'_>,
    build_cell: impl FnMut(&CellContext) -> Option<RenderedCell<C>>,
) -> Vec<RenderedCell<C>> {
    let mut cells = Vec::with_capacity(params.overscanned.len());
    for_each_rendered_cell(state, params, build_cell, |cell| cells.push(cell));
    cells.sort_unstable_by_key(|cell| cell.key);
    cells
}

/// Renders the overscanned rectangle, emitting cells in row-major coordinate
/// order (not key order — see [`render_cell_range`] for the sorted variant).
///
/// For every coordinate this resolves the recycled slot key, the position
/// style (cached, placeholder, or computed), and the cell content (cached
/// while scrolling, otherwise built fresh); coordinates for which `build_cell`
/// returns `None` are skipped.
pub fn for_each_rendered_cell<C: Clone>(
    state: &mut CellRangeState<C>,
    params: &CellRangeParams<'_>,
    mut build_cell: impl FnMut(&CellContext) -> Option<RenderedCell<C>>,
    mut emit: impl FnMut(RenderedCell<C>),
) {
    let CellRangeState {
        recycler,
        style_cache,
        cell_cache,
        warned_missing_style,
    } = state;

    // Replaces the stored assignment even for an empty rect, so keys do not
    // leak across a collapse-and-reopen of the viewport.
    let assignment = recycler.assign(params.overscanned);
    if params.overscanned.is_empty() {
        return;
    }

    let offsets_adjusted =
        params.rows.offsets_adjusted() || params.columns.offsets_adjusted();
    // Cached styles hold exact offsets; they cannot be trusted while offsets
    // are compressed, nor mid-gesture unless the owner opted out.
    let can_read_style_cache =
        (!params.is_scrolling || params.is_scrolling_opt_out) && !offsets_adjusted;
    let can_cache_cells = (params.is_scrolling_opt_out || params.is_scrolling)
        && params.horizontal_adjustment == 0
        && params.vertical_adjustment == 0;

    rtrace!(
        cells = params.overscanned.len(),
        is_scrolling = params.is_scrolling,
        offsets_adjusted,
        can_cache_cells,
        "render_cell_range"
    );

    for coord in params.overscanned.coords() {
        let is_visible = params.visible.contains(coord);
        let key = assignment[&coord];

        let cached_style = if can_read_style_cache {
            style_cache.get(&coord).copied()
        } else {
            None
        };
        let style = if let Some(style) = cached_style {
            style
        } else if !params.is_measured.is_none_or(|f| f(coord)) {
            // Unmeasured cell: a non-constraining box at the origin. Never
            // cached, so the real style is computed once the size is known.
            CellStyle::placeholder()
        } else {
            let row = params.rows.slice(coord.row);
            let col = params.columns.slice(coord.col);
            let style = CellStyle {
                top: row.offset as i64 + params.vertical_adjustment,
                left: col.offset as i64 + params.horizontal_adjustment,
                width: Extent::Px(col.size),
                height: Extent::Px(row.size),
            };
            if !offsets_adjusted {
                style_cache.insert(coord, style);
            }
            style
        };

        let ctx = CellContext {
            coord,
            is_visible,
            is_scrolling: params.is_scrolling,
            key,
            style,
        };

        let cell = if can_cache_cells {
            let entry = match cell_cache.get(&coord) {
                Some(entry) => entry.clone(),
                None => {
                    let built = build_cell(&ctx);
                    cell_cache.insert(coord, built.clone());
                    built
                }
            };
            // The clone above detached from the cache, so overwriting the key
            // never touches the stored value; the recycler may have moved this
            // coordinate to a new slot since the cell was cached.
            entry.map(|mut cell| {
                cell.key = key;
                cell
            })
        } else {
            build_cell(&ctx)
        };

        let Some(cell) = cell else {
            continue;
        };

        if cell.style.is_none() && !*warned_missing_style && cfg!(debug_assertions) {
            *warned_missing_style = true;
            rwarn!(
                row = coord.row,
                col = coord.col,
                key = cell.key,
                "rendered cell has no position style; it will not be absolutely positioned"
            );
        }

        emit(cell);
    }
}
