use rand::Rng as _;

use super::{MazeAlgorithm, Random};
use crate::{
    array::Array2D,
    dims::Dims,
    maze::{Cell, CellWall, Maze},
};

/// Randomized Prim's algorithm. Grows the maze from a random cell by carving
/// one uniformly chosen frontier wall at a time, so the passages of the
/// finished board form a spanning tree: every cell reachable, no cycles.
pub struct RndPrims;

impl MazeAlgorithm for RndPrims {
    fn generate_individual(size: Dims, rng: &mut Random) -> Maze {
        let Dims(width, height) = size;
        let (wu, hu) = (width as usize, height as usize);

        let mut maze = Maze::new(Array2D::new(Cell::new(), wu, hu));
        let mut visited = Array2D::new(false, wu, hu);
        let mut frontier: Vec<(Dims, CellWall)> = Vec::new();

        let start = Dims(rng.gen_range(0..width), rng.gen_range(0..height));
        visited[start] = true;
        push_frontier_walls(&maze, &visited, start, &mut frontier);

        while !frontier.is_empty() {
            let (pos, wall) = frontier.swap_remove(rng.gen_range(0..frontier.len()));
            let target = pos + wall.to_coord();

            // A candidate goes stale once another branch claims its target.
            if !maze.is_in_bounds(target) || visited[target] {
                continue;
            }

            visited[target] = true;
            maze.remove_wall(pos, wall);
            push_frontier_walls(&maze, &visited, target, &mut frontier);
        }

        log::debug!("generated {}x{} maze", width, height);

        maze
    }
}

fn push_frontier_walls(
    maze: &Maze,
    visited: &Array2D<bool>,
    pos: Dims,
    frontier: &mut Vec<(Dims, CellWall)>,
) {
    for wall in CellWall::get_in_order() {
        let target = pos + wall.to_coord();
        if maze.is_in_bounds(target) && !visited[target] {
            frontier.push((pos, wall));
        }
    }
}
