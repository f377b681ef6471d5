use std::time::Duration;

use pausable_clock::{PausableClock, PausableInstant};
use thiserror::Error;

use crate::{
    dims::Dims,
    maze::{CellWall, Maze},
    solve::{solve, Path},
};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game is already running")]
    AlreadyRunning,
    #[error("game is not running")]
    NotRunning,
    #[error("game is not paused")]
    NotPaused,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunningGameState {
    NotStarted,
    Running,
    Paused,
    Finished,
    Quitted,
}

/// One play-through of a maze: the board, the player and the bookkeeping
/// around them. Owns no presentation; callers feed it directions and read the
/// state back.
pub struct RunningGame {
    maze: Maze,
    state: RunningGameState,
    clock: Option<PausableClock>,
    start: Option<PausableInstant>,
    player_pos: Dims,
    moves: Vec<(Dims, CellWall)>,
    trail: Vec<Dims>,
}

impl RunningGame {
    pub fn new(maze: Maze) -> Self {
        Self {
            player_pos: maze.start(),
            maze,
            state: RunningGameState::NotStarted,
            clock: None,
            start: None,
            moves: vec![],
            trail: vec![],
        }
    }

    pub fn get_state(&self) -> RunningGameState {
        self.state
    }

    pub fn get_maze(&self) -> &Maze {
        &self.maze
    }

    pub fn get_player_pos(&self) -> Dims {
        self.player_pos
    }

    pub fn get_goal_pos(&self) -> Dims {
        self.maze.end()
    }

    pub fn get_moves(&self) -> &[(Dims, CellWall)] {
        &self.moves
    }

    pub fn get_move_count(&self) -> usize {
        self.moves.len()
    }

    /// Cells the player walked through to get where they are, oldest first,
    /// current position excluded.
    pub fn get_trail(&self) -> &[Dims] {
        &self.trail
    }

    /// Which of the four directions are open from the player's cell, in probe
    /// order: right, left, down, up.
    pub fn get_available_moves(&self) -> [bool; 4] {
        CellWall::get_in_order().map(|wall| self.maze.is_open(self.player_pos, wall))
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        if let RunningGameState::NotStarted = self.state {
            self.state = RunningGameState::Running;
            self.clock = Some(PausableClock::default());
            self.start = self.clock.as_mut().map(|clock| clock.now());

            Ok(())
        } else {
            Err(GameError::AlreadyRunning)
        }
    }

    pub fn quit(&mut self) {
        self.state = RunningGameState::Quitted;
        self.clock = None;
        self.start = None;
    }

    /// Moves the player one cell through `dir`. A wall (or the board edge) in
    /// the way leaves the player in place; the returned flag tells whether
    /// the move happened. Entering the exit cell finishes the game.
    pub fn move_player(&mut self, dir: CellWall) -> Result<(Dims, bool), GameError> {
        self.check_running()?;

        if !self.maze.is_open(self.player_pos, dir) {
            return Ok((self.player_pos, false));
        }

        let from = self.player_pos;
        self.player_pos = from + dir.to_coord();
        self.moves.push((from, dir));

        // Stepping back onto the last trail cell shortens the trail instead
        // of growing it.
        if self.trail.last() == Some(&self.player_pos) {
            self.trail.pop();
        } else {
            self.trail.push(from);
        }

        if self.player_pos == self.maze.end() {
            self.state = RunningGameState::Finished;
            if let Some(clock) = self.clock.as_mut() {
                clock.pause();
            }
        }

        Ok((self.player_pos, true))
    }

    /// Shortest path from the entrance to the exit on the owned board.
    /// Session state is left untouched.
    pub fn solution(&self) -> Path {
        solve(&self.maze)
    }

    pub fn check_running(&self) -> Result<(), GameError> {
        match self.state {
            RunningGameState::Running => Ok(()),
            _ => Err(GameError::NotRunning),
        }
    }

    pub fn check_paused(&self) -> Result<(), GameError> {
        match self.state {
            RunningGameState::Paused => Ok(()),
            _ => Err(GameError::NotPaused),
        }
    }

    pub fn get_elapsed(&self) -> Option<Duration> {
        match (&self.clock, self.start) {
            (Some(clock), Some(start)) => Some(start.elapsed(clock)),
            _ => None,
        }
    }

    pub fn pause(&mut self) -> Result<(), GameError> {
        self.check_running()?;

        self.state = RunningGameState::Paused;
        if let Some(clock) = self.clock.as_mut() {
            clock.pause();
        }

        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), GameError> {
        self.check_paused()?;

        self.state = RunningGameState::Running;
        if let Some(clock) = self.clock.as_mut() {
            clock.resume();
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = RunningGameState::NotStarted;
        self.player_pos = self.maze.start();
        self.moves.clear();
        self.trail.clear();

        self.clock = None;
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array::Array2D, maze::Cell};

    fn two_cell_game() -> RunningGame {
        let mut maze = Maze::new(Array2D::new(Cell::new(), 2, 1));
        maze.remove_wall(Dims(0, 0), CellWall::Right);
        RunningGame::new(maze)
    }

    #[test]
    fn moving_requires_a_running_game() {
        let mut game = two_cell_game();
        assert!(matches!(
            game.move_player(CellWall::Right),
            Err(GameError::NotRunning)
        ));
    }

    #[test]
    fn walls_block_movement() {
        let mut game = two_cell_game();
        game.start().unwrap();

        let (pos, moved) = game.move_player(CellWall::Bottom).unwrap();
        assert_eq!((pos, moved), (Dims(0, 0), false));
        assert_eq!(game.get_move_count(), 0);
    }

    #[test]
    fn reaching_the_exit_finishes_the_game() {
        let mut game = two_cell_game();
        game.start().unwrap();

        let (pos, moved) = game.move_player(CellWall::Right).unwrap();
        assert!(moved);
        assert_eq!(pos, Dims(1, 0));
        assert_eq!(game.get_state(), RunningGameState::Finished);
        assert!(game.get_elapsed().is_some());
    }

    #[test]
    fn backtracking_shortens_the_trail() {
        let mut maze = Maze::new(Array2D::new(Cell::new(), 2, 2));
        maze.remove_wall(Dims(0, 0), CellWall::Right);
        let mut game = RunningGame::new(maze);
        game.start().unwrap();

        game.move_player(CellWall::Right).unwrap();
        assert_eq!(game.get_trail(), &[Dims(0, 0)]);

        game.move_player(CellWall::Left).unwrap();
        assert!(game.get_trail().is_empty());
        assert_eq!(game.get_move_count(), 2);
    }

    #[test]
    fn pause_gates_movement() {
        let mut game = two_cell_game();
        game.start().unwrap();
        game.pause().unwrap();

        assert!(game.move_player(CellWall::Right).is_err());
        assert!(matches!(game.start(), Err(GameError::AlreadyRunning)));

        game.resume().unwrap();
        assert_eq!(game.get_state(), RunningGameState::Running);
    }

    #[test]
    fn reset_returns_to_the_entrance() {
        let mut game = two_cell_game();
        game.start().unwrap();
        game.move_player(CellWall::Right).unwrap();

        game.reset();
        assert_eq!(game.get_state(), RunningGameState::NotStarted);
        assert_eq!(game.get_player_pos(), Dims(0, 0));
        assert!(game.get_moves().is_empty());
        assert!(game.get_trail().is_empty());
        assert!(game.get_elapsed().is_none());
    }

    #[test]
    fn available_moves_mirror_open_walls() {
        let game = two_cell_game();
        // right open; left, down and up all closed
        assert_eq!(game.get_available_moves(), [true, false, false, false]);
    }

    #[test]
    fn solution_matches_the_solver() {
        let game = two_cell_game();
        assert_eq!(game.solution(), solve(game.get_maze()));
        assert_eq!(game.solution(), vec![Dims(0, 0), Dims(1, 0)]);
    }
}
