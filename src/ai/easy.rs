//! Easy tier: uniform-random choice among the legal moves.

use std::time::Duration;

use crate::core::action::Action;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::legal_moves;

use super::MoveStrategy;

/// Picks any legal move with equal probability.
pub struct EasyStrategy {
    rng: GameRng,
}

impl EasyStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveStrategy for EasyStrategy {
    fn select_move(&mut self, state: &GameState) -> Option<Action> {
        let moves = legal_moves(state);
        self.rng.choose(&moves).copied()
    }

    fn thinking_delay(&mut self) -> Duration {
        self.rng.gen_millis(500, 1000)
    }
}
