//! Classic rules: pattern-line drafting, wall tiling, floor penalties.

use crate::core::action::{Action, Target, TileSource};
use crate::core::event::Event;
use crate::core::state::{ClassicBoard, GameState, Phase, PlayerBoard};

use super::{next_player, rejected, validator, GameVariant, RoundEnd, Transition};

/// The Classic rule set.
pub struct ClassicRules;

fn board_mut(state: &mut GameState, seat: usize) -> &mut ClassicBoard {
    match &mut state.players[seat].board {
        PlayerBoard::Classic(board) => board,
        PlayerBoard::Summer(_) => unreachable!("classic rules on a summer board"),
    }
}

impl GameVariant for ClassicRules {
    fn apply_action(&self, state: &GameState, action: &Action) -> Transition {
        let Action::Classic(draft) = action else {
            return rejected(state, &validator::MoveError::VariantMismatch);
        };
        if let Err(error) = validator::validate_move(state, action) {
            return rejected(state, &error);
        }

        let mut next = state.clone();
        let mut events = Vec::new();
        let seat = next.current_player;

        // 1. Pick tiles from the declared source.
        let pick = match draft.source {
            TileSource::Factory(index) => next.display.pick_from_factory(index, draft.color),
            TileSource::Center => next.display.pick_from_center(draft.color),
        };
        let Some(pick) = pick else {
            unreachable!("validated pick failed")
        };

        events.push(Event::TilesPicked {
            source: draft.source,
            color: draft.color,
            count: pick.taken.len(),
            spilled: pick.spilled,
        });

        // The marker goes to the taker's floor line at most once per turn,
        // before any overflow tiles.
        if pick.took_first_player {
            next.players[seat].has_first_player = true;
            board_mut(&mut next, seat).floor.push_marker();
            events.push(Event::FirstPlayerTaken { player: seat });
        }

        // 2. Place tiles onto the target.
        let count = pick.taken.len();
        match draft.target {
            Target::Floor => {
                let excess = board_mut(&mut next, seat)
                    .floor
                    .push_tiles(pick.taken.iter().copied());
                next.supply.discard_tiles(excess);
                events.push(Event::TilesToFloor { count });
            }
            Target::Row(row) => {
                let board = board_mut(&mut next, seat);
                let placement = board.pattern_lines[row].place(count, draft.color, row);
                events.push(Event::TilesPlaced {
                    row,
                    placed: placement.placed,
                    overflow: placement.overflow,
                });

                if placement.overflow > 0 {
                    let excess = board.floor.push_tiles(
                        std::iter::repeat(draft.color).take(placement.overflow),
                    );
                    next.supply.discard_tiles(excess);
                    events.push(Event::TilesToFloor {
                        count: placement.overflow,
                    });
                }
            }
        }

        // 3. Record the turn.
        next.record_turn(seat, *action);

        // 4. Round over, or next player.
        if next.display.all_empty() {
            next.phase = Phase::WallTiling;
            events.push(Event::RoundOver);
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

    fn is_round_over(&self, state: &GameState) -> bool {
        state.display.all_empty()
    }

    fn is_game_over(&self, state: &GameState) -> bool {
        state.players.iter().any(|p| match &p.board {
            PlayerBoard::Classic(board) => board.wall.has_complete_row(),
            PlayerBoard::Summer(_) => false,
        })
    }

    fn run_scoring_phase(&self, state: &GameState) -> RoundEnd {
        let mut next = state.clone();
        let mut events = Vec::new();

        if next.phase != Phase::WallTiling {
            return RoundEnd {
                game_over: next.phase == Phase::GameOver,
                state: next,
                events,
            };
        }

        let config = next.config();

        // Wall tiling, player by player, rows top to bottom.
        for seat in 0..next.player_count() {
            let mut score_gained = 0;
            let mut discards = Vec::new();

            {
                let board = board_mut(&mut next, seat);
                for row in 0..board.pattern_lines.len() {
                    if !board.pattern_lines[row].is_complete(row) {
                        continue;
                    }
                    let Some((color, count)) = board.pattern_lines[row].clear() else {
                        continue;
                    };
                    let Some((col, points)) = board.wall.place(row, color) else {
                        unreachable!("staged color has no free wall cell")
                    };
                    score_gained += points;
                    discards.extend(std::iter::repeat(color).take(count - 1));
                    events.push(Event::TileScored {
                        player: seat,
                        row,
                        col,
                        color,
                        points,
                    });
                }

                let penalty = board.floor.penalty();
                if penalty < 0 {
                    score_gained += penalty;
                    events.push(Event::FloorPenalty {
                        player: seat,
                        penalty,
                    });
                }
                discards.extend(board.floor.clear());
            }

            next.supply.discard_tiles(discards);

            let new_score = next.clamp_score(next.players[seat].score + score_gained);
            next.players[seat].score = new_score;
            events.push(Event::WallTiled {
                player: seat,
                score_gained,
                new_score,
            });
        }

        // A complete wall row ends the game after this scoring pass.
        if self.is_game_over(&next) {
            for seat in 0..next.player_count() {
                let bonus = match &next.players[seat].board {
                    PlayerBoard::Classic(board) => board.wall.end_game_bonuses(config).total,
                    PlayerBoard::Summer(_) => 0,
                };
                next.players[seat].score += bonus;
                events.push(Event::EndGameBonus {
                    player: seat,
                    bonus,
                });
            }
            next.phase = Phase::GameOver;
            events.push(Event::GameOver);
            return RoundEnd {
                state: next,
                events,
                game_over: true,
            };
        }

        // Next round: marker holder leads, explicit default to seat 0.
        next.round += 1;
        let first = next.first_player_holder().unwrap_or(0);
        for player in &mut next.players {
            player.has_first_player = false;
        }
        next.current_player = first;

        let mut supply = std::mem::take(&mut next.supply);
        let mut rng = next.rng.clone();
        next.display
            .reset_for_round(&mut supply, config.tiles_per_factory, &mut rng);
        next.supply = supply;
        next.rng = rng;

        next.phase = Phase::FactoryOffer;
        events.push(Event::RoundStart { round: next.round });

        RoundEnd {
            state: next,
            events,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Variant;
    use crate::core::player::Controller;
    use crate::core::state::{GameOptions, PlayerSpec};
    use crate::core::tile::Tile;

    fn fresh() -> GameState {
        GameState::create(GameOptions {
            variant: Variant::Classic,
            players: vec![
                PlayerSpec::new("A", Controller::Human),
                PlayerSpec::new("B", Controller::Human),
            ],
            seed: 42,
        })
    }

    /// Pull `n` tiles of `color` out of the supply, discarding unrelated
    /// draws back, so hand-built scenarios stay conserved.
    fn take_from_supply(state: &mut GameState, color: Tile, n: usize) {
        let mut rng = crate::core::rng::GameRng::new(99);
        let mut found = 0;
        while found < n {
            let drawn = state.supply.draw(1, &mut rng);
            match drawn.first() {
                Some(&t) if t == color => found += 1,
                Some(&t) => state.supply.discard_tiles([t]),
                None => panic!("supply ran out of {color}"),
            }
        }
    }

    /// Return every undrafted display tile to the supply, as if drafting
    /// had actually run dry.
    fn clear_display(state: &mut GameState) {
        for index in 0..state.display.factories.len() {
            let old = std::mem::take(&mut state.display.factories[index]);
            state.supply.discard_tiles(old);
        }
        let center = std::mem::take(&mut state.display.center);
        state.supply.discard_tiles(center);
    }

    /// Replace a factory's contents, returning the old tiles to the supply.
    fn set_factory(state: &mut GameState, index: usize, tiles: Vec<Tile>) {
        let old = std::mem::take(&mut state.display.factories[index]);
        state.supply.discard_tiles(old);
        for &tile in &tiles {
            take_from_supply(state, tile, 1);
        }
        state.display.factories[index] = tiles;
    }

    #[test]
    fn test_factory_pick_into_row() {
        let mut state = fresh();
        set_factory(
            &mut state,
            0,
            vec![Tile::Blue, Tile::Blue, Tile::Blue, Tile::Red],
        );

        let action = Action::classic(TileSource::Factory(0), Tile::Blue, Target::Row(2));
        let transition = super::super::apply_action(&state, &action);
        let next = &transition.state;

        let board = next.players[0].board.as_classic().unwrap();
        assert_eq!(board.pattern_lines[2].color, Some(Tile::Blue));
        assert_eq!(board.pattern_lines[2].count, 3);
        assert!(board.floor.is_empty());
        assert!(next.display.center.contains(&Tile::Red));
        assert_eq!(next.current_player, 1);
        assert_eq!(next.turn_log.len(), 1);
    }

    #[test]
    fn test_center_pick_sends_marker_to_floor() {
        let mut state = fresh();
        take_from_supply(&mut state, Tile::Red, 1);
        state.display.center.push(Tile::Red);

        let action = Action::classic(TileSource::Center, Tile::Red, Target::Floor);
        let transition = super::super::apply_action(&state, &action);
        let next = &transition.state;

        assert!(next.players[0].has_first_player);
        assert!(!next.display.center_has_first_player);
        let board = next.players[0].board.as_classic().unwrap();
        // Marker first, then the tile.
        assert_eq!(board.floor.len(), 2);
        assert_eq!(board.floor.penalty(), -2);
        assert!(transition
            .events
            .iter()
            .any(|e| matches!(e, Event::FirstPlayerTaken { player: 0 })));
    }

    #[test]
    fn test_overflow_routes_to_floor() {
        let mut state = fresh();
        set_factory(&mut state, 0, vec![Tile::Blue; 4]);

        let action = Action::classic(TileSource::Factory(0), Tile::Blue, Target::Row(1));
        let transition = super::super::apply_action(&state, &action);
        let board = transition.state.players[0].board.as_classic().unwrap();

        assert_eq!(board.pattern_lines[1].count, 2);
        assert_eq!(board.floor.len(), 2);
    }

    #[test]
    fn test_wall_tiling_scores_and_discards() {
        let mut state = fresh();
        clear_display(&mut state);
        state.phase = Phase::WallTiling;
        take_from_supply(&mut state, Tile::Blue, 3);
        {
            let board = board_mut(&mut state, 0);
            board.pattern_lines[2].place(3, Tile::Blue, 2);
        }

        let round_end = super::super::process_round_end(&state);
        let next = &round_end.state;

        assert!(!round_end.game_over);
        assert_eq!(next.phase, Phase::FactoryOffer);
        assert_eq!(next.round, 2);
        let board = next.players[0].board.as_classic().unwrap();
        assert_eq!(board.pattern_lines[2].count, 0);
        assert_eq!(board.wall.cell(2, 2), Some(Tile::Blue));
        assert_eq!(next.players[0].score, 1);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let mut state = fresh();
        clear_display(&mut state);
        state.phase = Phase::WallTiling;
        // Seven floor tiles: -11 penalty against a score of 0.
        let taken = state.supply.draw(7, &mut crate::core::rng::GameRng::new(3));
        board_mut(&mut state, 0).floor.push_tiles(taken);

        let round_end = super::super::process_round_end(&state);
        assert_eq!(round_end.state.players[0].score, 0);
    }
}
