// Example: cells that have not been measured yet get a non-constraining
// placeholder style anchored at the origin.
use std::collections::HashSet;

use cell_recycler::{
    CellRangeParams, CellRangeState, GridCoord, GridRect, RenderedCell, UniformAxis,
    render_cell_range,
};

fn main() {
    let rows = UniformAxis::new(30);
    let cols = UniformAxis::new(100);
    let mut state: CellRangeState<&'static str> = CellRangeState::new();

    let mut measured: HashSet<GridCoord> = HashSet::new();
    let rect = GridRect::new(0, 3, 0, 2);

    for pass in 0..2 {
        let is_measured = |coord: GridCoord| measured.contains(&coord);
        let cells = render_cell_range(
            &mut state,
            &CellRangeParams::new(rect, rect, &rows, &cols).with_is_measured(&is_measured),
            |ctx| {
                Some(RenderedCell {
                    key: ctx.key,
                    style: Some(ctx.style),
                    content: "cell",
                })
            },
        );

        println!("pass {pass}:");
        for cell in &cells {
            println!("  key={} style={:?}", cell.key, cell.style);
        }

        // Pretend the UI measured everything it just rendered.
        measured.extend(rect.coords());
    }
}
