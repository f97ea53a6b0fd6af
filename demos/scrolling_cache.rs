// Example: the content-instance cache is only consulted while a scroll
// gesture is active; the owner clears it when the gesture ends.
use std::cell::Cell;

use cell_recycler::{
    CellRangeParams, CellRangeState, GridRect, RenderedCell, UniformAxis, render_cell_range,
};

fn main() {
    let rows = UniformAxis::new(20);
    let cols = UniformAxis::new(80);
    let mut state: CellRangeState<String> = CellRangeState::new();
    let builds = Cell::new(0usize);

    let rect = GridRect::new(0, 6, 0, 4);
    let factory = |ctx: &cell_recycler::CellContext| {
        builds.set(builds.get() + 1);
        Some(RenderedCell {
            key: ctx.key,
            style: Some(ctx.style),
            content: format!("{},{}", ctx.coord.row, ctx.coord.col),
        })
    };

    // Two passes mid-gesture: the second one is served from the cache.
    let scrolling = CellRangeParams::new(rect, rect, &rows, &cols).with_scrolling(true);
    render_cell_range(&mut state, &scrolling, factory);
    render_cell_range(&mut state, &scrolling, factory);
    println!("builds while scrolling: {}", builds.get());

    // Gesture over: drop the cached instances, idle passes build fresh.
    state.clear_cell_cache();
    let idle = CellRangeParams::new(rect, rect, &rows, &cols);
    render_cell_range(&mut state, &idle, factory);
    render_cell_range(&mut state, &idle, factory);
    println!("builds after two idle passes: {}", builds.get());
}
