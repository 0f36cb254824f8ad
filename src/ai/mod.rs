//! AI opponents: strategy tiers and the difficulty dispatcher.
//!
//! Each tier implements `MoveStrategy`. The dispatcher builds a strategy
//! from the current seat's configured difficulty (unknown tiers fall back
//! to Easy) and returns the chosen action together with a bounded
//! pseudo-random pacing delay. The delay is cosmetic: the presentation
//! layer awaits it; search correctness never depends on it.

pub mod easy;
pub mod hard;
pub mod heuristics;
pub mod medium;

use std::time::Duration;

use crate::core::action::Action;
use crate::core::player::Difficulty;
use crate::core::rng::GameRng;
use crate::core::state::GameState;

pub use easy::EasyStrategy;
pub use hard::{HardStrategy, SearchConfig, SearchStats};
pub use medium::MediumStrategy;

/// A move-selection strategy.
pub trait MoveStrategy {
    /// Choose a move for the current player; `None` when no legal move
    /// exists.
    fn select_move(&mut self, state: &GameState) -> Option<Action>;

    /// Bounded pseudo-random pacing duration for the presentation layer.
    fn thinking_delay(&mut self) -> Duration;
}

/// Build the strategy for a difficulty tier.
#[must_use]
pub fn strategy_for(difficulty: Difficulty, rng: GameRng) -> Box<dyn MoveStrategy> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyStrategy::new(rng)),
        Difficulty::Medium => Box::new(MediumStrategy::new(rng)),
        Difficulty::Hard => Box::new(HardStrategy::new(rng)),
    }
}

/// An AI decision plus its pacing delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiTurn {
    pub action: Action,
    /// How long the presentation layer should pretend to think.
    pub thinking_delay: Duration,
}

/// Run the current seat's strategy. `None` when the seat is human or no
/// legal move exists (the latter should not occur before game end).
#[must_use]
pub fn execute_ai_turn(state: &GameState, rng: &mut GameRng) -> Option<AiTurn> {
    let difficulty = state.current().controller.difficulty()?;
    let mut strategy = strategy_for(difficulty, rng.fork());

    let action = strategy.select_move(state)?;
    Some(AiTurn {
        action,
        thinking_delay: strategy.thinking_delay(),
    })
}
