use smallvec::SmallVec;

use super::cell::{Cell, CellWall};
use crate::{array::Array2D, dims::Dims};

/// The maze board: a grid of wall masks with a fixed entrance in the top-left
/// corner and exit in the bottom-right one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Array2D<Cell>,
}

impl Maze {
    pub fn new(cells: Array2D<Cell>) -> Self {
        Maze { cells }
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    /// Entrance cell.
    pub fn start(&self) -> Dims {
        Dims::ZERO
    }

    /// Exit cell.
    pub fn end(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let Dims(width, height) = self.size();
        0 <= pos.0 && pos.0 < width && 0 <= pos.1 && pos.1 < height
    }

    pub fn is_valid_neighbor(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_in_bounds(cell) && self.is_in_bounds(cell + wall.to_coord())
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    /// Whether the cell at `pos` can be left through `wall`. Only the
    /// departing cell's mask is consulted; wall symmetry keeps the other side
    /// in agreement.
    pub fn is_open(&self, pos: Dims, wall: CellWall) -> bool {
        self.is_valid_neighbor(pos, wall)
            && self.get_cell(pos).is_some_and(|cell| cell.is_open(wall))
    }

    /// Carves the wall between `cell` and the neighbor behind `wall`,
    /// clearing the matching bit on both sides. A wall on the board edge is
    /// left alone.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) {
        if !self.is_valid_neighbor(cell, wall) {
            return;
        }

        self.cells[cell].remove_wall(wall);
        let neighbor = cell + wall.to_coord();
        self.cells[neighbor].remove_wall(wall.reverse_wall());
    }

    /// The wall `cell` would have to open toward `cell2`, if they are
    /// adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        CellWall::from_offset(cell2 - cell)
    }

    /// Neighbor cells reachable through open walls, in probe order.
    pub fn open_neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_open(pos, wall))
            .map(|wall| pos + wall.to_coord())
            .collect()
    }

    /// Number of carved wall pairs, counting each shared wall once. A perfect
    /// maze has exactly `width * height - 1` of them.
    pub fn open_edge_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter(|&wall| self.is_open(pos, wall))
                    .count()
            })
            .sum()
    }
}
