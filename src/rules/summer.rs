//! Summer rules: wild-tile drafting, star placement, pass-out rounds.

use crate::core::action::{Action, SummerAction, TileSource};
use crate::core::event::Event;
use crate::core::state::{GameState, Phase, PlayerBoard, SummerBoard};
use crate::core::tile::Tile;

use super::{next_player, rejected, validator, GameVariant, RoundEnd, Transition};

/// The Summer rule set.
pub struct SummerRules;

fn board_mut(state: &mut GameState, seat: usize) -> &mut SummerBoard {
    match &mut state.players[seat].board {
        PlayerBoard::Summer(board) => board,
        PlayerBoard::Classic(_) => unreachable!("summer rules on a classic board"),
    }
}

fn board(state: &GameState, seat: usize) -> &SummerBoard {
    match &state.players[seat].board {
        PlayerBoard::Summer(board) => board,
        PlayerBoard::Classic(_) => unreachable!("summer rules on a classic board"),
    }
}

impl GameVariant for SummerRules {
    fn apply_action(&self, state: &GameState, action: &Action) -> Transition {
        let Action::Summer(request) = action else {
            return rejected(state, &validator::MoveError::VariantMismatch);
        };
        if let Err(error) = validator::validate_move(state, action) {
            return rejected(state, &error);
        }

        match *request {
            SummerAction::Draft { source, color } => apply_draft(state, action, source, color),
            SummerAction::Place {
                star,
                position,
                color,
                tiles_used,
                wild_tiles_used,
            } => apply_place(
                state,
                action,
                star,
                position,
                color,
                tiles_used,
                wild_tiles_used,
            ),
            SummerAction::Pass => apply_pass(state, action),
        }
    }

    fn is_round_over(&self, state: &GameState) -> bool {
        match state.phase {
            Phase::FactoryOffer => state.display.all_empty(),
            Phase::Placement => all_passed(state),
            _ => false,
        }
    }

    fn is_game_over(&self, state: &GameState) -> bool {
        match state.config().rounds {
            Some(limit) => state.phase == Phase::GameOver || state.round > limit,
            None => state.phase == Phase::GameOver,
        }
    }

    /// Summer resolves its rollover inside the reducer when the final pass
    /// lands, so this is a pass-through reporting the terminal flag.
    fn run_scoring_phase(&self, state: &GameState) -> RoundEnd {
        RoundEnd {
            game_over: state.phase == Phase::GameOver,
            state: state.clone(),
            events: Vec::new(),
        }
    }
}

fn apply_draft(state: &GameState, action: &Action, source: TileSource, color: Tile) -> Transition {
    let mut next = state.clone();
    let mut events = Vec::new();
    let seat = next.current_player;
    let Some(wild) = next.wild_color else {
        unreachable!("summer state without a wild color")
    };

    let pick = match source {
        TileSource::Factory(index) => next.display.pick_from_factory_wild(index, color, wild),
        TileSource::Center => next.display.pick_from_center_wild(color, wild),
    };
    let Some(pick) = pick else {
        unreachable!("validated pick failed")
    };

    events.push(Event::TilesPicked {
        source,
        color,
        count: pick.taken.len(),
        spilled: pick.spilled,
    });

    if pick.took_first_player {
        next.players[seat].has_first_player = true;
        events.push(Event::FirstPlayerTaken { player: seat });

        // Taking the marker costs one point per tile taken.
        let penalty = pick.taken.len() as i32;
        next.players[seat].score = next.clamp_score(next.players[seat].score - penalty);
        events.push(Event::FirstPlayerPenalty {
            player: seat,
            penalty,
        });
    }

    let count = pick.taken.len();
    board_mut(&mut next, seat).hand.extend(pick.taken);
    events.push(Event::TilesDrafted { color, count });

    next.record_turn(seat, *action);

    if next.display.all_empty() {
        next.phase = Phase::Placement;
        // The marker holder opens placement; if nobody drafted from the
        // center this round, the last drafter keeps the turn.
        next.current_player = next.first_player_holder().unwrap_or(seat);
        events.push(Event::PlacementPhaseStart);
    } else {
        next.current_player = next_player(&next);
        events.push(Event::NextTurn {
            player: next.current_player,
        });
    }

    Transition {
        state: next,
        events,
    }
}

#[allow(clippy::too_many_arguments)]
fn apply_place(
    state: &GameState,
    action: &Action,
    star: crate::core::tile::Star,
    position: u8,
    color: Tile,
    tiles_used: u8,
    wild_tiles_used: u8,
) -> Transition {
    let mut next = state.clone();
    let mut events = Vec::new();
    let seat = next.current_player;
    let Some(wild) = next.wild_color else {
        unreachable!("summer state without a wild color")
    };

    // Pay: remove the named tiles from hand. One color tile lands on the
    // board; the rest of the payment goes to the discard pile.
    let placement = {
        let board = board_mut(&mut next, seat);
        remove_tiles(&mut board.hand, color, tiles_used as usize);
        remove_tiles(&mut board.hand, wild, wild_tiles_used as usize);
        board.star_board.place(star, position, color)
    };

    let mut payment = Vec::with_capacity(tiles_used as usize + wild_tiles_used as usize - 1);
    payment.extend(std::iter::repeat(color).take(tiles_used as usize - 1));
    payment.extend(std::iter::repeat(wild).take(wild_tiles_used as usize));
    next.supply.discard_tiles(payment);

    next.players[seat].score += placement.points;
    events.push(Event::TilePlacedOnStar {
        star,
        position,
        color,
        points: placement.points,
        decorations: placement.decorations,
    });

    next.record_turn(seat, *action);
    advance_placement(&mut next, &mut events);

    Transition {
        state: next,
        events,
    }
}

fn apply_pass(state: &GameState, action: &Action) -> Transition {
    let mut next = state.clone();
    let mut events = Vec::new();
    let seat = next.current_player;

    board_mut(&mut next, seat).passed = true;
    events.push(Event::PlayerPassed { player: seat });
    next.record_turn(seat, *action);

    if all_passed(&next) {
        finish_round(&mut next, &mut events);
    } else {
        advance_placement(&mut next, &mut events);
    }

    Transition {
        state: next,
        events,
    }
}

fn remove_tiles(hand: &mut Vec<Tile>, color: Tile, count: usize) {
    for _ in 0..count {
        let Some(pos) = hand.iter().position(|&t| t == color) else {
            unreachable!("validated payment missing from hand")
        };
        hand.swap_remove(pos);
    }
}

fn all_passed(state: &GameState) -> bool {
    (0..state.player_count()).all(|seat| board(state, seat).passed)
}

/// Rotate to the next seat that has not passed.
fn advance_placement(state: &mut GameState, events: &mut Vec<Event>) {
    let count = state.player_count();
    let mut candidate = (state.current_player + 1) % count;
    for _ in 0..count {
        if !board(state, candidate).passed {
            state.current_player = candidate;
            events.push(Event::NextTurn { player: candidate });
            return;
        }
        candidate = (candidate + 1) % count;
    }
    // Everyone passed while advancing; resolve the round.
    finish_round(state, events);
}

/// All players have passed: clip hands to corner storage, advance the wild
/// color, and either deal the next round or finish the game.
fn finish_round(state: &mut GameState, events: &mut Vec<Event>) {
    let config = state.config();

    for seat in 0..state.player_count() {
        let excess: Vec<Tile> = {
            let board = board_mut(state, seat);
            board.passed = false;
            if board.hand.len() > config.corner_storage {
                board.hand.split_off(config.corner_storage)
            } else {
                Vec::new()
            }
        };
        if !excess.is_empty() {
            let penalty = excess.len() as i32;
            state.players[seat].score = state.clamp_score(state.players[seat].score - penalty);
            events.push(Event::HandClipped {
                player: seat,
                discarded: excess.len(),
                penalty: -penalty,
            });
            state.supply.discard_tiles(excess);
        }
    }

    state.round += 1;

    let limit = config.rounds.unwrap_or(u32::MAX);
    if state.round > limit {
        for seat in 0..state.player_count() {
            let bonus = board(state, seat).star_board.end_game_bonuses().total;
            state.players[seat].score += bonus;
            events.push(Event::EndGameBonus {
                player: seat,
                bonus,
            });
        }
        state.phase = Phase::GameOver;
        events.push(Event::GameOver);
        return;
    }

    state.wild_color = Some(config.wild_sequence[(state.round - 1) as usize]);

    let first = state.first_player_holder().unwrap_or(0);
    for player in &mut state.players {
        player.has_first_player = false;
    }
    state.current_player = first;

    let mut supply = std::mem::take(&mut state.supply);
    let mut rng = state.rng.clone();
    state
        .display
        .reset_for_round(&mut supply, config.tiles_per_factory, &mut rng);
    state.supply = supply;
    state.rng = rng;

    state.phase = Phase::FactoryOffer;
    events.push(Event::RoundStart {
        round: state.round,
    });
}
