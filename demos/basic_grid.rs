// Example: render a sliding window over a large grid and watch slot keys
// stay small while coordinates scroll through.
use cell_recycler::{
    CellRangeParams, CellRangeState, GridRect, RenderedCell, UniformAxis, render_cell_range,
};

fn main() {
    let rows = UniformAxis::new(24);
    let cols = UniformAxis::new(120);
    let mut state: CellRangeState<String> = CellRangeState::new();

    for scroll_row in [0usize, 1, 2, 10, 11] {
        let visible = GridRect::new(scroll_row, scroll_row + 4, 0, 3);
        let overscanned = GridRect::new(scroll_row.saturating_sub(1), scroll_row + 5, 0, 3);

        let cells = render_cell_range(
            &mut state,
            &CellRangeParams::new(visible, overscanned, &rows, &cols),
            |ctx| {
                Some(RenderedCell {
                    key: ctx.key,
                    style: Some(ctx.style),
                    content: format!("cell {},{}", ctx.coord.row, ctx.coord.col),
                })
            },
        );

        let max_key = cells.iter().map(|c| c.key).max().unwrap_or(0);
        println!(
            "scroll_row={scroll_row}: rendered={} max_key={max_key}",
            cells.len()
        );
    }
}
