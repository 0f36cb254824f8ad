//! Static positional evaluation.
//!
//! A weighted sum of five signals over a Classic board: realized score,
//! pattern-line completion potential, wall adjacency potential, floor-line
//! risk, and end-game bonus progress. Deterministic and side-effect free.
//!
//! Summer boards carry none of those structures, so their evaluation is
//! the realized score alone.

use crate::board::{PatternLine, Wall};
use crate::core::config::{VariantConfig, BOARD_SIZE};
use crate::core::state::{ClassicBoard, GameState, PlayerBoard};

/// Evaluate a position for `player_index`; higher is better.
#[must_use]
pub fn evaluate(state: &GameState, player_index: usize) -> f64 {
    let player = &state.players[player_index];
    match &player.board {
        PlayerBoard::Classic(board) => {
            let mut value = player.score as f64;
            value += pattern_line_value(board) * 0.8;
            value += wall_potential(&board.wall) * 0.6;
            value += board.floor.penalty() as f64 * 1.2;
            value += end_game_progress(&board.wall, state.config()) * 0.5;
            value
        }
        PlayerBoard::Summer(_) => player.score as f64,
    }
}

/// Value of tiles already staged: progress toward rows whose color still
/// has a free wall cell, with a flat bump once a row is ≥ 80% full.
fn pattern_line_value(board: &ClassicBoard) -> f64 {
    let mut value = 0.0;
    for (row, line) in board.pattern_lines.iter().enumerate() {
        let Some(color) = line.color else { continue };
        if !board.wall.can_place_color(row, color) {
            continue;
        }
        let progress = line.count as f64 / PatternLine::capacity(row) as f64;
        value += progress * 2.0;
        if progress >= 0.8 {
            value += 1.5;
        }
    }
    value
}

/// Rows and columns nearing completion are worth building toward.
fn wall_potential(wall: &Wall) -> f64 {
    let mut value = 0.0;

    for row in 0..BOARD_SIZE {
        let filled = wall.row_fill(row);
        if filled >= 3 {
            value += (filled - 2) as f64 * 1.5;
        }
        if filled == 4 {
            value += 3.0;
        }
    }

    for col in 0..BOARD_SIZE {
        let filled = wall.column_fill(col);
        if filled >= 3 {
            value += (filled - 2) as f64 * 1.0;
        }
    }

    value
}

/// Partial progress toward the +2/+7/+10 end-game bonuses.
fn end_game_progress(wall: &Wall, config: &VariantConfig) -> f64 {
    let mut value = 0.0;

    for row in 0..BOARD_SIZE {
        let filled = wall.row_fill(row);
        if filled >= 3 {
            value += filled as f64 * 0.4;
        }
    }

    for col in 0..BOARD_SIZE {
        let filled = wall.column_fill(col);
        if filled >= 3 {
            value += filled as f64 * 0.6;
        }
    }

    for &color in config.colors {
        let count = wall.color_count(color);
        if count >= 3 {
            value += count as f64 * 0.8;
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Variant;
    use crate::core::player::Controller;
    use crate::core::state::{GameOptions, GameState, PlayerSpec};
    use crate::core::tile::Tile;

    fn fresh(variant: Variant) -> GameState {
        GameState::create(GameOptions {
            variant,
            players: vec![
                PlayerSpec::new("A", Controller::Human),
                PlayerSpec::new("B", Controller::Human),
            ],
            seed: 42,
        })
    }

    #[test]
    fn test_empty_board_evaluates_to_score() {
        let state = fresh(Variant::Classic);
        assert_eq!(evaluate(&state, 0), 0.0);

        let summer = fresh(Variant::Summer);
        assert_eq!(evaluate(&summer, 0), 5.0);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let mut state = fresh(Variant::Classic);
        if let PlayerBoard::Classic(board) = &mut state.players[0].board {
            board.pattern_lines[3].place(3, Tile::Red, 3);
            board.wall.place(0, Tile::Blue);
        }

        assert_eq!(evaluate(&state, 0), evaluate(&state, 0));
        assert!(evaluate(&state, 0) > evaluate(&state, 1));
    }

    #[test]
    fn test_staged_progress_counts() {
        let mut state = fresh(Variant::Classic);
        if let PlayerBoard::Classic(board) = &mut state.players[0].board {
            // Row 4 (capacity 5) at 4/5: progress 0.8 earns the flat bump.
            board.pattern_lines[4].place(4, Tile::Red, 4);
        }
        let value = evaluate(&state, 0);
        let expected = (0.8 * 2.0 + 1.5) * 0.8;
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_blocked_line_is_worthless() {
        let mut state = fresh(Variant::Classic);
        if let PlayerBoard::Classic(board) = &mut state.players[0].board {
            // Stage blue on row 1, then fill its wall cell: the staged
            // tile can never reach the wall, so the signal ignores it.
            board.pattern_lines[1].place(1, Tile::Blue, 1);
            board.wall.place(1, Tile::Blue);
        }
        assert_eq!(evaluate(&state, 0), 0.0);
    }

    #[test]
    fn test_floor_risk_is_negative() {
        let mut state = fresh(Variant::Classic);
        if let PlayerBoard::Classic(board) = &mut state.players[0].board {
            board.floor.push_tiles([Tile::Red, Tile::Red]);
        }
        assert!((evaluate(&state, 0) - (-2.0 * 1.2)).abs() < 1e-9);
    }
}
