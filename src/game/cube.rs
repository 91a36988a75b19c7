use std::fmt;

use super::board::{Board, Cell, MoveError};
use super::lines::{self, step, Grid, LINE_LEN};
use super::player::Player;

pub const CUBE_SIZE: usize = 5;

/// Layer a piece lands on in an empty column.
pub const BOTTOM_LAYER: usize = CUBE_SIZE - 1;

/// Directions through the volume that no axis-aligned slice contains.
pub const SPACE_DIRECTIONS: [(isize, isize, isize); 4] =
    [(1, 1, 1), (1, 1, -1), (1, -1, 1), (1, -1, -1)];

/// Axis held fixed by a [`CubeSlice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// One horizontal layer; rows are `x`, columns are `y`.
    Z,
    /// Side face; rows are `z`, columns are `y`.
    X,
    /// Front face; rows are `z`, columns are `x`.
    Y,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Z, Axis::X, Axis::Y];
}

/// Board-shaped view of one plane of the cube.
#[derive(Clone, Copy)]
pub struct CubeSlice<'a> {
    cube: &'a Cube,
    axis: Axis,
    index: usize,
}

impl Grid for CubeSlice<'_> {
    fn size(&self) -> usize {
        CUBE_SIZE
    }

    fn cell(&self, u: usize, v: usize) -> Cell {
        match self.axis {
            Axis::Z => self.cube.cell(u, v, self.index),
            Axis::X => self.cube.cell(self.index, v, u),
            Axis::Y => self.cube.cell(v, self.index, u),
        }
    }
}

/// 5x5x5 qubic volume: a stack of boards indexed by layer `z`, where `z = 4`
/// is the bottom and pieces fall toward it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    layers: [Board; CUBE_SIZE],
}

impl Cube {
    pub fn new() -> Self {
        Cube {
            layers: std::array::from_fn(|_| Board::empty(CUBE_SIZE)),
        }
    }

    pub fn layer(&self, z: usize) -> Option<&Board> {
        self.layers.get(z)
    }

    /// Get the cell at a position, `None` when outside the cube
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<Cell> {
        self.layers.get(z)?.get(x, y)
    }

    fn cell(&self, x: usize, y: usize, z: usize) -> Cell {
        self.layers[z].cell(x, y)
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, x: usize, y: usize) -> usize {
        self.layers
            .iter()
            .filter(|layer| matches!(layer.get(x, y), Some(c) if c != Cell::Empty))
            .count()
    }

    /// A column is full once its top layer is taken. Off-board columns count
    /// as full.
    pub fn is_column_full(&self, x: usize, y: usize) -> bool {
        self.layers[0].get(x, y) != Some(Cell::Empty)
    }

    /// Drop a piece into column `(x, y)`; returns the layer where it landed.
    pub fn drop_piece(&mut self, player: Player, x: usize, y: usize) -> Result<usize, MoveError> {
        if !self.layers[0].in_bounds(x, y) {
            return Err(MoveError::IllegalMove { x, y });
        }

        // Find the lowest empty layer in this column
        for z in (0..CUBE_SIZE).rev() {
            if self.layers[z].place(player, x, y).is_ok() {
                return Ok(z);
            }
        }

        Err(MoveError::ColumnFull { x, y })
    }

    pub fn slice(&self, axis: Axis, index: usize) -> CubeSlice<'_> {
        CubeSlice {
            cube: self,
            axis,
            index,
        }
    }

    /// Owner of the first line anywhere in the volume: every axis-aligned
    /// slice goes through the planar scanner, then the space diagonals.
    pub fn check_win(&self) -> Option<Player> {
        Axis::ALL
            .iter()
            .flat_map(|&axis| (0..CUBE_SIZE).map(move |index| (axis, index)))
            .find_map(|(axis, index)| lines::check_lines(&self.slice(axis, index)))
            .or_else(|| self.check_space_diagonals())
    }

    /// Lines that advance on all three axes at once.
    pub fn check_space_diagonals(&self) -> Option<Player> {
        for x in 0..CUBE_SIZE {
            for y in 0..CUBE_SIZE {
                for z in 0..CUBE_SIZE {
                    let Some(owner) = self.cell(x, y, z).owner() else {
                        continue;
                    };
                    let found = SPACE_DIRECTIONS
                        .iter()
                        .any(|&dir| self.space_line_from(x, y, z, dir, owner.to_cell()));
                    if found {
                        return Some(owner);
                    }
                }
            }
        }
        None
    }

    fn space_line_from(
        &self,
        x: usize,
        y: usize,
        z: usize,
        (dx, dy, dz): (isize, isize, isize),
        cell: Cell,
    ) -> bool {
        (1..LINE_LEN).all(|k| {
            match (
                step(x, dx, k, CUBE_SIZE),
                step(y, dy, k, CUBE_SIZE),
                step(z, dz, k, CUBE_SIZE),
            ) {
                (Some(cx), Some(cy), Some(cz)) => self.cell(cx, cy, cz) == cell,
                _ => false,
            }
        })
    }

    /// True once no column can take another piece
    pub fn is_full(&self) -> bool {
        (0..CUBE_SIZE).all(|x| (0..CUBE_SIZE).all(|y| self.is_column_full(x, y)))
    }

    pub fn occupied(&self) -> usize {
        self.layers.iter().map(Board::occupied).sum()
    }

    /// Column the center-first scenario opens in
    pub fn center(&self) -> (usize, usize) {
        (CUBE_SIZE / 2, CUBE_SIZE / 2)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (z, layer) in self.layers.iter().enumerate() {
            writeln!(f, "z = {z}")?;
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}
