//! Cell-range rendering with recycled identity keys.
//!
//! This crate implements the rendering core of a grid virtualizer: given the
//! visible/overscanned rectangle of a large row × column grid, it decides
//! which cells to build versus reuse from a cache, assigns each cell a
//! stable-but-rotating integer identity key drawn from a small pool, and
//! computes (and caches) each cell's absolute-position style.
//!
//! It is UI-agnostic. A viewport/scroll layer is expected to provide:
//! - the visible and overscanned index rectangles
//! - per-axis offset/size lookups (see [`AxisLayout`])
//! - scroll state and a cell-construction callback
//!
//! The identity keys are the point: they are unique within a pass, stable for
//! a coordinate across scroll deltas, and densely packed near 1, so a
//! renderer keyed by them holds a bounded number of live elements no matter
//! how far the grid scrolls.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod layout;
mod recycler;
mod renderer;
mod types;


pub use layout::{AxisLayout, MeasuredAxis, UniformAxis};
pub use recycler::{KeyAssignment, KeyRecycler};
pub use renderer::{
    CellContext, CellRangeParams, CellRangeState, for_each_rendered_cell, render_cell_range,
};
pub use types::{AxisSlice, CellStyle, Extent, GridCoord, GridRect, RenderedCell, SlotKey};
