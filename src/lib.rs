//! Perfect maze generation, navigation and shortest-path solving on a square
//! grid of 4-bit wall masks.

pub mod array;
pub mod dims;
pub mod game;
pub mod maze;
pub mod solve;

pub use dims::Dims;
pub use game::{GameError, RunningGame, RunningGameState};
pub use maze::{
    algorithms::{GenerationError, MazeAlgorithm, Random, RndPrims},
    Cell, CellWall, Maze,
};
pub use solve::{solve, Path};
