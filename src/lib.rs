//! # azulejo
//!
//! A rules engine for a tile-drafting board game with two interchangeable
//! rule sets (Classic and Summer), plus search-based AI opponents.
//!
//! ## Design Principles
//!
//! 1. **Immutable state, pure reducer**: `apply_action(&state, &action)`
//!    returns a fresh successor state and an ordered event log. It is
//!    total — an illegal action returns the input state unchanged plus a
//!    single `InvalidMove` event, never a panic.
//!
//! 2. **Capability dispatch over tags**: the two rule sets implement the
//!    `GameVariant` trait; nothing branches on a variant string at call
//!    sites.
//!
//! 3. **Deterministic by injection**: every random choice — bag shuffles,
//!    AI tie breaks, thinking delays — flows through a seeded, forkable
//!    `GameRng`. The Hard search's wall-clock budget is the single
//!    real-time input, and it is configurable.
//!
//! 4. **Conservation as an invariant**: the tile multiset across supply,
//!    display, and every player structure is fixed at creation; debug
//!    builds recount it after every transition.
//!
//! ## Modules
//!
//! - `core`: tiles, configuration, players, state, actions, events, RNG
//! - `supply`: the bag and its recycling discard pile
//! - `factory`: factory offers and the shared center pool
//! - `board`: pattern lines, wall, floor line, star board
//! - `rules`: the two rule sets, move validation, the reducer
//! - `ai`: heuristic evaluator and the Easy/Medium/Hard strategies

pub mod ai;
pub mod board;
pub mod core;
pub mod factory;
pub mod rules;
pub mod supply;

// Re-export commonly used types
pub use crate::core::{
    Action, ClassicAction, Controller, Difficulty, Event, GameOptions, GameRng, GameRngState,
    GameState, Phase, Player, PlayerBoard, PlayerSpec, Star, SummerAction, Target, Tile,
    TileSource, TurnRecord, Variant, VariantConfig,
};

pub use crate::board::{FloorLine, PatternLine, StarBoard, Wall};
pub use crate::factory::FactoryDisplay;
pub use crate::supply::TileSupply;

pub use crate::rules::{
    apply_action, determine_winner, is_game_over, is_round_over, legal_moves, process_round_end,
    validate_move, GameVariant, MoveError, Ranking, RoundEnd, Transition, WinnerReport,
};

pub use crate::ai::{
    execute_ai_turn, strategy_for, AiTurn, EasyStrategy, HardStrategy, MediumStrategy,
    MoveStrategy, SearchConfig, SearchStats,
};
