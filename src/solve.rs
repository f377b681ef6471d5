use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::{
    array::Array2D,
    dims::Dims,
    maze::{CellWall, Maze},
};

/// Cells walked from the entrance to the exit, both inclusive. Empty when the
/// exit cannot be reached.
pub type Path = Vec<Dims>;

/// Shortest path from the maze entrance to its exit, by breadth-first search
/// over the open walls.
///
/// Works on any board, connected or not; a board the generator produced
/// always yields its unique tree path. Neighbors are probed in the fixed
/// {right, left, down, up} order, which is the tie-break between equal-length
/// paths on boards with cycles. Cells are marked visited when enqueued, so no
/// cell is ever enqueued twice.
pub fn solve(maze: &Maze) -> Path {
    let (start, end) = (maze.start(), maze.end());
    if !maze.is_in_bounds(start) {
        return Path::new();
    }

    let Dims(width, height) = maze.size();
    let mut visited = Array2D::new(false, width as usize, height as usize);
    let mut parents: HashMap<Dims, Dims> = HashMap::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        if pos == end {
            return walk_back(&parents, start, end);
        }

        for wall in CellWall::get_in_order() {
            let target = pos + wall.to_coord();
            if maze.is_open(pos, wall) && !visited[target] {
                visited[target] = true;
                parents.insert(target, pos);
                queue.push_back(target);
            }
        }
    }

    log::trace!("no path between {:?} and {:?}", start, end);

    Path::new()
}

/// Rebuilds the path by following the predecessor of every cell from the exit
/// back to the entrance.
fn walk_back(parents: &HashMap<Dims, Dims>, start: Dims, end: Dims) -> Path {
    let mut path = vec![end];

    let mut pos = end;
    while pos != start {
        pos = parents[&pos];
        path.push(pos);
    }

    path.reverse();
    path
}
