//! Move legality: enumeration and validation.
//!
//! `legal_moves` enumerates every action the current player may take;
//! `validate_move` re-derives the same constraints for one proposed action
//! and reports a typed, human-readable reason on failure. The two agree by
//! construction: everything enumerated validates, and any action differing
//! in source, color, or target from an enumerated move fails.

use serde::{Deserialize, Serialize};

use crate::board::star::payment_split;
use crate::board::PatternLine;
use crate::core::action::{Action, ClassicAction, SummerAction, Target, TileSource};
use crate::core::config::{BOARD_SIZE, STAR_POSITIONS};
use crate::core::state::{GameState, Phase};
use crate::core::tile::{Star, Tile, ALL_STARS};

/// Why a proposed action is illegal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// The action belongs to the other variant.
    VariantMismatch,
    /// The action is not legal in the current phase.
    WrongPhase { phase: Phase },
    /// No factory with that index.
    NoSuchFactory { index: usize },
    /// The factory holds no tile of the requested color.
    ColorNotInFactory { color: Tile, index: usize },
    /// The center holds no tile of the requested color.
    ColorNotInCenter { color: Tile },
    /// Pattern-line index out of range.
    InvalidRow { row: usize },
    /// The pattern line (or its wall cell) rejects the color.
    RowRejectsColor { color: Tile, row: usize },
    /// The wild color may not be requested from a factory.
    WildPickFromFactory,
    /// A wild center pick requires the center to hold only wild tiles.
    CenterNotAllWild,
    /// The player has already passed this round.
    AlreadyPassed,
    /// Star position out of the 1..=6 range.
    InvalidPosition { position: u8 },
    /// The star position is already filled.
    PositionFilled { star: Star, position: u8 },
    /// The color is not legal on that star.
    WrongColorForStar { star: Star, color: Tile },
    /// The center ring already shows that color.
    ColorUsedOnCenter { color: Tile },
    /// Payment does not add up to the position's cost.
    BadPayment { position: u8 },
    /// The hand lacks the tiles the payment names.
    NotEnoughTiles,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::VariantMismatch => write!(f, "action does not match the game variant"),
            MoveError::WrongPhase { phase } => write!(f, "not legal in phase {phase:?}"),
            MoveError::NoSuchFactory { index } => write!(f, "no factory {index}"),
            MoveError::ColorNotInFactory { color, index } => {
                write!(f, "factory {index} has no {color} tile")
            }
            MoveError::ColorNotInCenter { color } => write!(f, "center has no {color} tile"),
            MoveError::InvalidRow { row } => write!(f, "row {row} is not a pattern line"),
            MoveError::RowRejectsColor { color, row } => {
                write!(f, "cannot place {color} on row {row}")
            }
            MoveError::WildPickFromFactory => {
                write!(f, "the wild color cannot be taken from a factory")
            }
            MoveError::CenterNotAllWild => {
                write!(f, "wild tiles can only be taken alone from the center")
            }
            MoveError::AlreadyPassed => write!(f, "player has already passed"),
            MoveError::InvalidPosition { position } => {
                write!(f, "position {position} is not on a star")
            }
            MoveError::PositionFilled { star, position } => {
                write!(f, "{star} star position {position} is already filled")
            }
            MoveError::WrongColorForStar { star, color } => {
                write!(f, "{color} does not belong on the {star} star")
            }
            MoveError::ColorUsedOnCenter { color } => {
                write!(f, "{color} is already on the center star")
            }
            MoveError::BadPayment { position } => {
                write!(f, "payment does not cover position {position}")
            }
            MoveError::NotEnoughTiles => write!(f, "not enough tiles in hand"),
        }
    }
}

/// Enumerate every legal action for the current player.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Action> {
    match state.phase {
        Phase::FactoryOffer => match state.variant {
            crate::core::config::Variant::Classic => classic_moves(state),
            crate::core::config::Variant::Summer => summer_draft_moves(state),
        },
        Phase::Placement => summer_placement_moves(state),
        Phase::WallTiling | Phase::GameOver => Vec::new(),
    }
}

/// Validate one proposed action; `Err` carries the reason.
pub fn validate_move(state: &GameState, action: &Action) -> Result<(), MoveError> {
    match (state.variant, action) {
        (crate::core::config::Variant::Classic, Action::Classic(a)) => {
            validate_classic(state, a)
        }
        (crate::core::config::Variant::Summer, Action::Summer(a)) => validate_summer(state, a),
        _ => Err(MoveError::VariantMismatch),
    }
}

// === Classic ===

fn classic_moves(state: &GameState) -> Vec<Action> {
    let mut moves = Vec::new();
    let Some(board) = state.current().board.as_classic() else {
        return moves;
    };

    let mut push_moves = |source: TileSource, colors: Vec<Tile>| {
        for color in colors {
            for row in 0..BOARD_SIZE {
                if board.pattern_lines[row].can_place(color, row, &board.wall) {
                    moves.push(Action::classic(source, color, Target::Row(row)));
                }
            }
            // A voluntary floor dump is always available.
            moves.push(Action::classic(source, color, Target::Floor));
        }
    };

    for index in 0..state.display.factories.len() {
        push_moves(TileSource::Factory(index), state.display.factory_colors(index));
    }
    push_moves(TileSource::Center, state.display.center_colors());

    moves
}

fn validate_classic(state: &GameState, action: &ClassicAction) -> Result<(), MoveError> {
    if state.phase != Phase::FactoryOffer {
        return Err(MoveError::WrongPhase { phase: state.phase });
    }

    match action.source {
        TileSource::Factory(index) => {
            let factory = state
                .display
                .factories
                .get(index)
                .ok_or(MoveError::NoSuchFactory { index })?;
            if !factory.contains(&action.color) {
                return Err(MoveError::ColorNotInFactory {
                    color: action.color,
                    index,
                });
            }
        }
        TileSource::Center => {
            if !state.display.center.contains(&action.color) {
                return Err(MoveError::ColorNotInCenter {
                    color: action.color,
                });
            }
        }
    }

    if let Target::Row(row) = action.target {
        if row >= BOARD_SIZE {
            return Err(MoveError::InvalidRow { row });
        }
        let board = state
            .current()
            .board
            .as_classic()
            .ok_or(MoveError::VariantMismatch)?;
        if !board.pattern_lines[row].can_place(action.color, row, &board.wall) {
            return Err(MoveError::RowRejectsColor {
                color: action.color,
                row,
            });
        }
    }

    Ok(())
}

// === Summer ===

fn summer_draft_moves(state: &GameState) -> Vec<Action> {
    let mut moves = Vec::new();
    let Some(wild) = state.wild_color else {
        return moves;
    };

    for index in 0..state.display.factories.len() {
        let colors = state.display.factory_colors(index);
        // A factory holding only wild tiles yields exactly one of them.
        if colors == [wild] {
            moves.push(Action::Summer(SummerAction::Draft {
                source: TileSource::Factory(index),
                color: wild,
            }));
            continue;
        }
        for color in colors {
            if color != wild {
                moves.push(Action::Summer(SummerAction::Draft {
                    source: TileSource::Factory(index),
                    color,
                }));
            }
        }
    }

    let center_colors = state.display.center_colors();
    for &color in &center_colors {
        if color != wild {
            moves.push(Action::Summer(SummerAction::Draft {
                source: TileSource::Center,
                color,
            }));
        }
    }
    // A wild-only center may be drafted from, one wild at a time.
    if center_colors == [wild] {
        moves.push(Action::Summer(SummerAction::Draft {
            source: TileSource::Center,
            color: wild,
        }));
    }

    moves
}

fn summer_placement_moves(state: &GameState) -> Vec<Action> {
    let mut moves = Vec::new();
    let (Some(board), Some(wild)) = (state.current().board.as_summer(), state.wild_color) else {
        return moves;
    };
    if board.passed {
        return moves;
    }

    for star in ALL_STARS {
        for position in 1..=STAR_POSITIONS as u8 {
            if board.star_board.is_filled(star, position) {
                continue;
            }
            let cost = position as usize;
            let candidates: Vec<Tile> = match star.color() {
                Some(color) => vec![color],
                None => {
                    let used = board.star_board.center_colors();
                    let mut seen = Vec::new();
                    for &tile in &board.hand {
                        if tile != wild && !used.contains(&tile) && !seen.contains(&tile) {
                            seen.push(tile);
                        }
                    }
                    seen
                }
            };
            for color in candidates {
                if let Some((tiles_used, wild_tiles_used)) =
                    payment_split(&board.hand, color, wild, cost)
                {
                    moves.push(Action::Summer(SummerAction::Place {
                        star,
                        position,
                        color,
                        tiles_used,
                        wild_tiles_used,
                    }));
                }
            }
        }
    }

    moves.push(Action::Summer(SummerAction::Pass));
    moves
}

fn validate_summer(state: &GameState, action: &SummerAction) -> Result<(), MoveError> {
    let wild = state.wild_color.ok_or(MoveError::VariantMismatch)?;

    match action {
        SummerAction::Draft { source, color } => {
            if state.phase != Phase::FactoryOffer {
                return Err(MoveError::WrongPhase { phase: state.phase });
            }
            match source {
                TileSource::Factory(index) => {
                    let factory = state
                        .display
                        .factories
                        .get(*index)
                        .ok_or(MoveError::NoSuchFactory { index: *index })?;
                    if *color == wild {
                        // Only a factory of nothing but wilds yields one.
                        if factory.is_empty() || factory.iter().any(|&t| t != wild) {
                            return Err(MoveError::WildPickFromFactory);
                        }
                    } else if !factory.contains(color) {
                        return Err(MoveError::ColorNotInFactory {
                            color: *color,
                            index: *index,
                        });
                    }
                }
                TileSource::Center => {
                    if *color == wild {
                        let center = &state.display.center;
                        if center.is_empty() || center.iter().any(|&t| t != wild) {
                            return Err(MoveError::CenterNotAllWild);
                        }
                    } else if !state.display.center.contains(color) {
                        return Err(MoveError::ColorNotInCenter { color: *color });
                    }
                }
            }
            Ok(())
        }

        SummerAction::Place {
            star,
            position,
            color,
            tiles_used,
            wild_tiles_used,
        } => {
            if state.phase != Phase::Placement {
                return Err(MoveError::WrongPhase { phase: state.phase });
            }
            let board = state
                .current()
                .board
                .as_summer()
                .ok_or(MoveError::VariantMismatch)?;
            if board.passed {
                return Err(MoveError::AlreadyPassed);
            }
            if *position == 0 || *position as usize > STAR_POSITIONS {
                return Err(MoveError::InvalidPosition {
                    position: *position,
                });
            }
            if board.star_board.is_filled(*star, *position) {
                return Err(MoveError::PositionFilled {
                    star: *star,
                    position: *position,
                });
            }

            match star.color() {
                Some(expected) => {
                    if *color != expected {
                        return Err(MoveError::WrongColorForStar {
                            star: *star,
                            color: *color,
                        });
                    }
                }
                None => {
                    if *color == wild {
                        return Err(MoveError::WrongColorForStar {
                            star: *star,
                            color: *color,
                        });
                    }
                    if board.star_board.center_colors().contains(color) {
                        return Err(MoveError::ColorUsedOnCenter { color: *color });
                    }
                }
            }

            let cost = *position as usize;
            if *tiles_used == 0 || *tiles_used as usize + *wild_tiles_used as usize != cost {
                return Err(MoveError::BadPayment {
                    position: *position,
                });
            }
            if *color == wild && *wild_tiles_used != 0 {
                return Err(MoveError::BadPayment {
                    position: *position,
                });
            }

            let color_avail = board.hand.iter().filter(|&&t| t == *color).count();
            let wild_avail = board.hand.iter().filter(|&&t| t == wild).count();
            let enough = if *color == wild {
                color_avail >= *tiles_used as usize
            } else {
                color_avail >= *tiles_used as usize && wild_avail >= *wild_tiles_used as usize
            };
            if !enough {
                return Err(MoveError::NotEnoughTiles);
            }

            Ok(())
        }

        SummerAction::Pass => {
            if state.phase != Phase::Placement {
                return Err(MoveError::WrongPhase { phase: state.phase });
            }
            let board = state
                .current()
                .board
                .as_summer()
                .ok_or(MoveError::VariantMismatch)?;
            if board.passed {
                return Err(MoveError::AlreadyPassed);
            }
            Ok(())
        }
    }
}
