use super::board::Cell;
use super::player::Player;

/// Marks in a row needed to win, on every board size.
pub const LINE_LEN: usize = 3;

/// Directions scanned from each line start: horizontal, vertical,
/// diagonal down-right, diagonal down-left. Every undirected line is found
/// from exactly one of its endpoints.
pub const PLANAR_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A square, read-only view of cells.
///
/// Implemented by [`Board`](super::Board) and by the slices of a
/// [`Cube`](super::Cube), so both share one line scanner.
pub trait Grid {
    fn size(&self) -> usize;

    /// Cell at `(x, y)`. Callers only pass coordinates in `0..size()`.
    fn cell(&self, x: usize, y: usize) -> Cell;
}

/// Coordinate `steps` cells away from `origin` along `delta`, or `None` if it
/// falls outside `0..size`.
pub fn step(origin: usize, delta: isize, steps: usize, size: usize) -> Option<usize> {
    let offset = delta.checked_mul(isize::try_from(steps).ok()?)?;
    origin.checked_add_signed(offset).filter(|&c| c < size)
}

/// Scan every occupied cell once as a line start and return the owner of the
/// first three-in-a-row found.
pub fn check_lines<G: Grid + ?Sized>(grid: &G) -> Option<Player> {
    let size = grid.size();
    for x in 0..size {
        for y in 0..size {
            let Some(owner) = grid.cell(x, y).owner() else {
                continue;
            };
            let found = PLANAR_DIRECTIONS
                .iter()
                .any(|&(dx, dy)| line_from(grid, x, y, dx, dy, owner.to_cell()));
            if found {
                return Some(owner);
            }
        }
    }
    None
}

fn line_from<G: Grid + ?Sized>(grid: &G, x: usize, y: usize, dx: isize, dy: isize, cell: Cell) -> bool {
    let size = grid.size();
    (1..LINE_LEN).all(|k| match (step(x, dx, k, size), step(y, dy, k, size)) {
        (Some(cx), Some(cy)) => grid.cell(cx, cy) == cell,
        _ => false,
    })
}
