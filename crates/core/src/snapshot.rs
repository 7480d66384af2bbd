use crate::types::{Grid, Power, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, GOAL_POWER};

/// Plain copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub episode_id: u32,
    pub seed: u32,
    pub moves: u32,
    pub score: u64,
    pub highest_power: Power,
    pub goal_power: Power,
    pub reached_goal: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY; BOARD_WIDTH]; BOARD_HEIGHT],
            episode_id: 0,
            seed: 0,
            moves: 0,
            score: 0,
            highest_power: EMPTY,
            goal_power: GOAL_POWER,
            reached_goal: false,
            game_over: false,
        }
    }
}
