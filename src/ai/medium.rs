//! Medium tier: one-ply greedy over the immediate local effect of a move.
//!
//! Each legal move is scored without cloning the whole state: completing a
//! pattern line is worth the resulting wall-adjacency value doubled,
//! partial fills earn progress, overflow pays the marginal floor penalty,
//! voluntary floor dumps and marker pickups are taxed, and a denial term
//! rewards starving opponents of colors they have started staging.

use std::time::Duration;

use crate::board::FloorLine;
use crate::core::action::{Action, ClassicAction, SummerAction, Target, TileSource};
use crate::core::rng::GameRng;
use crate::core::state::{GameState, PlayerBoard};
use crate::core::tile::Tile;
use crate::rules::legal_moves;

use super::MoveStrategy;

/// Greedy one-ply strategy.
pub struct MediumStrategy {
    rng: GameRng,
}

impl MediumStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveStrategy for MediumStrategy {
    fn select_move(&mut self, state: &GameState) -> Option<Action> {
        let moves = legal_moves(state);
        let mut best: Option<Action> = None;
        let mut best_score = f64::NEG_INFINITY;

        for &candidate in &moves {
            let score = score_move(state, &candidate);
            let better = score > best_score
                || (score == best_score && self.rng.gen_bool(0.5));
            if better {
                best_score = score;
                best = Some(candidate);
            }
        }

        best.or_else(|| moves.first().copied())
    }

    fn thinking_delay(&mut self) -> Duration {
        self.rng.gen_millis(800, 1500)
    }
}

/// Tiles of `color` a pick from `source` would yield.
fn tiles_at(state: &GameState, source: TileSource, color: Tile) -> usize {
    match source {
        TileSource::Factory(index) => state
            .display
            .factories
            .get(index)
            .map_or(0, |f| f.iter().filter(|&&t| t == color).count()),
        TileSource::Center => state.display.center.iter().filter(|&&t| t == color).count(),
    }
}

/// One-ply score of a move. Also used by the Hard tier as its pruning
/// pre-score.
#[must_use]
pub fn score_move(state: &GameState, action: &Action) -> f64 {
    match action {
        Action::Classic(draft) => score_classic(state, draft),
        Action::Summer(request) => score_summer(state, request),
    }
}

fn score_classic(state: &GameState, draft: &ClassicAction) -> f64 {
    let Some(board) = state.current().board.as_classic() else {
        return 0.0;
    };
    let tile_count = tiles_at(state, draft.source, draft.color);
    let floor_len = board.floor.len();
    let mut score;

    match draft.target {
        Target::Floor => {
            // Flat tax on voluntary dumps, on top of the penalty itself.
            score = FloorLine::penalty_for_len(floor_len + tile_count) as f64 - 5.0;
            return score;
        }
        Target::Row(row) => {
            let capacity = row + 1;
            let current = board.pattern_lines[row].count as usize;
            let placeable = tile_count.min(capacity - current);
            let overflow = tile_count - placeable;

            if current + placeable == capacity {
                // Completing the line: worth the adjacency points, doubled.
                let mut wall = board.wall;
                score = match wall.place(row, draft.color) {
                    Some((_, points)) => points as f64 * 2.0,
                    None => 0.0,
                };
            } else {
                let progress = (current + placeable) as f64 / capacity as f64;
                score = placeable as f64 * 0.5 + progress * 1.5;
            }

            if overflow > 0 {
                let with = FloorLine::penalty_for_len(floor_len + overflow);
                let without = FloorLine::penalty_for_len(floor_len);
                score += (with - without) as f64;
            }
        }
    }

    if draft.source == TileSource::Center && state.display.center_has_first_player {
        score -= 1.5;
    }

    score += denial_value(state, draft.color, tile_count) * 0.3;
    score
}

/// Reward for taking tiles an opponent needs to finish a started line.
fn denial_value(state: &GameState, color: Tile, tile_count: usize) -> f64 {
    let mut value = 0.0;
    for (index, opponent) in state.players.iter().enumerate() {
        if index == state.current_player {
            continue;
        }
        let PlayerBoard::Classic(board) = &opponent.board else {
            continue;
        };
        for (row, line) in board.pattern_lines.iter().enumerate() {
            if line.color == Some(color) && line.count > 0 {
                let needed = (row + 1) - line.count as usize;
                value += tile_count.min(needed) as f64 * 0.5;
            }
        }
    }
    value
}

fn score_summer(state: &GameState, request: &SummerAction) -> f64 {
    match request {
        SummerAction::Draft { source, color } => {
            let mut count = tiles_at(state, *source, *color);
            if let Some(wild) = state.wild_color {
                // A pick carries at most one wild along.
                let has_wild = match source {
                    TileSource::Factory(index) => state
                        .display
                        .factories
                        .get(*index)
                        .is_some_and(|f| f.contains(&wild)),
                    TileSource::Center => state.display.center.contains(&wild),
                };
                if has_wild && *color != wild {
                    count += 1;
                }
            }
            let mut value = count as f64 * 0.5;
            if *source == TileSource::Center && state.display.center_has_first_player {
                // Marker penalty equals the tiles taken.
                value -= count as f64;
            }
            value
        }
        SummerAction::Place { star, position, .. } => {
            match state.current().board.as_summer() {
                // The contiguity walk of an empty position is exactly the
                // score the placement would earn.
                Some(board) => board.star_board.score_contiguous(*star, *position) as f64,
                None => 0.0,
            }
        }
        // Keep passing available but never preferred over a real move.
        SummerAction::Pass => -100.0,
    }
}
