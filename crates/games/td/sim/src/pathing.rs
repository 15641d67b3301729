use crate::world::{CellState, Grid};

/// Build the occupancy grid and the ordered route for a rows×cols map.
///
/// The route zig-zags through every other row: each traversed row is walked
/// edge to edge, alternating direction, and joined to the next traversed row
/// by a single vertical link cell at the column where the direction
/// reverses. Traversal stops once no further row pair fits, so with an even
/// row count the last grid row stays fully buildable.
///
/// The first route cell is the spawn, the last is the exit, and consecutive
/// cells always differ by exactly one step.
pub fn build_route(rows: u16, cols: u16) -> (Grid, Vec<(u16, u16)>) {
    let mut grid = Grid::new(rows, cols);
    let mut path = Vec::new();

    if rows == 0 || cols == 0 {
        return (grid, path);
    }

    let mut y: u16 = 0;
    let mut left_to_right = true;
    loop {
        for i in 0..cols {
            let x = if left_to_right { i } else { cols - 1 - i };
            grid.set(x, y, CellState::Path);
            path.push((x, y));
        }

        if (y as u32) + 2 >= rows as u32 {
            break;
        }

        // vertical link where the direction reverses
        let link_x = if left_to_right { cols - 1 } else { 0 };
        grid.set(link_x, y + 1, CellState::Path);
        path.push((link_x, y + 1));

        y += 2;
        left_to_right = !left_to_right;
    }

    (grid, path)
}

/// Interpolate between two cells; `t` in 0..1.
pub fn lerp(from: (u16, u16), to: (u16, u16), t: f32) -> (f32, f32) {
    let fx = from.0 as f32;
    let fy = from.1 as f32;
    (
        fx + (to.0 as f32 - fx) * t,
        fy + (to.1 as f32 - fy) * t,
    )
}
