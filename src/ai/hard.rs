//! Hard tier: depth-limited minimax with alpha-beta pruning under a
//! wall-clock budget.
//!
//! The deadline is checked cooperatively at every recursion entry and
//! before exploring each child; on expiry the search returns the best move
//! found so far instead of failing. Wide nodes are narrowed to the top
//! moves by the Medium tier's one-ply pre-score. The maximizing role at a
//! node follows from the *successor state's* current player — a seat can
//! act twice in a row across a round boundary, so ply parity proves
//! nothing.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase};
use crate::rules::{apply_action, legal_moves};

use super::{heuristics, medium, MoveStrategy};

/// Search knobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to look ahead.
    pub max_depth: u32,

    /// Wall-clock budget in milliseconds. The only real-time input in the
    /// engine; tests widen it to avoid flakiness.
    pub time_budget_ms: u64,

    /// Maximum children explored per interior node; wider nodes are
    /// pre-scored and truncated.
    pub branch_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            time_budget_ms: 2000,
            branch_limit: 10,
        }
    }
}

impl SearchConfig {
    /// Set the search depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the time budget.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = budget.as_millis() as u64;
        self
    }

    /// Set the branching cap.
    #[must_use]
    pub fn with_branch_limit(mut self, limit: usize) -> Self {
        self.branch_limit = limit;
        self
    }
}

/// Counters from the last search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered.
    pub nodes: u64,
    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,
    /// Whether the budget expired mid-search.
    pub timed_out: bool,
    /// Search duration in microseconds.
    pub time_us: u64,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Time-boxed minimax strategy.
pub struct HardStrategy {
    config: SearchConfig,
    rng: GameRng,
    /// Counters from the most recent `select_move`.
    pub stats: SearchStats,
}

impl HardStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_config(SearchConfig::default(), rng)
    }

    #[must_use]
    pub fn with_config(config: SearchConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Search value of `state` for its current player at `depth` plies.
    /// At depth 0 this is exactly the static evaluation.
    pub fn search_value(&mut self, state: &GameState, depth: u32) -> f64 {
        let deadline = Instant::now() + Duration::from_millis(self.config.time_budget_ms);
        self.minimax(
            state,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            state.current_player,
            deadline,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        searcher: usize,
        deadline: Instant,
    ) -> f64 {
        self.stats.nodes += 1;

        if Instant::now() >= deadline {
            self.stats.timed_out = true;
            return heuristics::evaluate(state, searcher);
        }
        // Terminal and scoring phases are evaluated, not expanded.
        if depth == 0 || state.phase == Phase::GameOver || state.phase == Phase::WallTiling {
            return heuristics::evaluate(state, searcher);
        }

        let mut moves = legal_moves(state);
        if moves.is_empty() {
            return heuristics::evaluate(state, searcher);
        }
        if moves.len() > self.config.branch_limit {
            let mut scored: Vec<(f64, Action)> = moves
                .into_iter()
                .map(|m| (medium::score_move(state, &m), m))
                .collect();
            scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
            scored.truncate(self.config.branch_limit);
            moves = scored.into_iter().map(|(_, m)| m).collect();
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for candidate in &moves {
            if Instant::now() >= deadline {
                self.stats.timed_out = true;
                break;
            }

            let transition = apply_action(state, candidate);
            let child_maximizing = transition.state.current_player == searcher;
            let value = self.minimax(
                &transition.state,
                depth - 1,
                alpha,
                beta,
                child_maximizing,
                searcher,
                deadline,
            );

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if best.is_finite() {
            best
        } else {
            // Budget expired before any child finished.
            heuristics::evaluate(state, searcher)
        }
    }
}

impl MoveStrategy for HardStrategy {
    fn select_move(&mut self, state: &GameState) -> Option<Action> {
        let moves = legal_moves(state);
        if moves.is_empty() {
            return None;
        }
        if moves.len() == 1 {
            return Some(moves[0]);
        }

        self.stats.reset();
        let start = Instant::now();
        let deadline = start + Duration::from_millis(self.config.time_budget_ms);
        let searcher = state.current_player;

        let mut best_move = moves[0];
        let mut best_score = f64::NEG_INFINITY;

        for &candidate in &moves {
            if Instant::now() >= deadline {
                self.stats.timed_out = true;
                break;
            }

            let transition = apply_action(state, &candidate);
            let maximizing = transition.state.current_player == searcher;
            let score = self.minimax(
                &transition.state,
                self.config.max_depth - 1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                maximizing,
                searcher,
                deadline,
            );

            if score > best_score {
                best_score = score;
                best_move = candidate;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Some(best_move)
    }

    fn thinking_delay(&mut self) -> Duration {
        self.rng.gen_millis(1000, 2000)
    }
}
