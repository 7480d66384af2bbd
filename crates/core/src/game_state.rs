//! Game state module - one play session
//!
//! `GameState` ties the board to its random source and tracks the
//! bookkeeping the terminal front end shows: move count, episode, game over.
//! It is an ordinary value owned by whoever runs the input loop; nothing here
//! is global.

use crate::board::{Board, MoveOutcome};
use crate::rng::SimpleRng;
use crate::scoring::score_for_values;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    /// Seed the current episode started from.
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Moves that changed the grid in this episode.
    moves: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let seed = rng.seed();
        let board = Board::new_game(&mut rng);
        let game_over = !board.playable();

        Self {
            board,
            rng,
            seed,
            episode_id: 0,
            moves: 0,
            game_over,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn reached_goal(&self) -> bool {
        self.board.reached_goal()
    }

    /// Score derived from the tiles currently on the board
    pub fn score(&self) -> u64 {
        score_for_values(&self.board.values())
    }

    /// Apply one move to the board
    ///
    /// Returns the outcome, or `None` when the game is already over.
    pub fn play(&mut self, direction: Direction) -> Option<MoveOutcome> {
        if self.game_over {
            return None;
        }

        let outcome = self.board.apply_move(direction, &mut self.rng);
        if outcome.changed {
            self.moves += 1;
        }
        self.game_over = !self.board.playable();
        Some(outcome)
    }

    /// Start a fresh board, continuing the RNG stream
    pub fn restart(&mut self) {
        let next_seed = self.rng.next_u32();
        let episode_id = self.episode_id.wrapping_add(1);
        *self = Self::new(next_seed);
        self.episode_id = episode_id;
    }

    /// Apply a game action
    ///
    /// Returns true if the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.play(direction).is_some_and(|o| o.changed),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.cells();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.moves = self.moves;
        out.score = self.score();
        out.highest_power = self.board.highest_power();
        out.goal_power = self.board.goal();
        out.reached_goal = self.board.reached_goal();
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
