//! Classic rule-set scenarios: drafting, wall tiling, boundaries, bonuses.

use azulejo::{
    apply_action, determine_winner, is_game_over, is_round_over, legal_moves, process_round_end,
    validate_move, Action, Controller, Event, GameOptions, GameRng, GameState, Phase, PlayerBoard,
    PlayerSpec, Target, Tile, TileSource, Variant,
};

fn new_game(seed: u64) -> GameState {
    GameState::create(GameOptions {
        variant: Variant::Classic,
        players: vec![
            PlayerSpec::new("A", Controller::Human),
            PlayerSpec::new("B", Controller::Human),
        ],
        seed,
    })
}

/// Extract `n` tiles of `color` from the supply so hand-built scenarios
/// keep the tile multiset intact.
fn take_from_supply(state: &mut GameState, color: Tile, n: usize) {
    let mut rng = GameRng::new(99);
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

/// Return every undrafted display tile to the supply, as if drafting had
/// actually run dry.
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

fn classic_board(state: &GameState, seat: usize) -> &azulejo::core::state::ClassicBoard {
    match &state.players[seat].board {
        PlayerBoard::Classic(board) => board,
        PlayerBoard::Summer(_) => panic!("expected a classic board"),
    }
}

#[test]
fn three_blues_into_row_two() {
    // Player A picks all blue tiles (3) from factory 0 into row 2.
    let mut state = new_game(42);
    set_factory(
        &mut state,
        0,
        vec![Tile::Blue, Tile::Blue, Tile::Blue, Tile::Red],
    );

    let action = Action::classic(TileSource::Factory(0), Tile::Blue, Target::Row(2));
    let transition = apply_action(&state, &action);
    let next = &transition.state;

    let board = classic_board(next, 0);
    assert_eq!(board.pattern_lines[2].color, Some(Tile::Blue));
    assert_eq!(board.pattern_lines[2].count, 3);
    assert!(board.pattern_lines[2].is_complete(2));
    assert!(board.floor.is_empty(), "no overflow expected");
    assert!(next.display.factories[0].is_empty());
    assert!(next.display.center.contains(&Tile::Red));
    assert_eq!(next.current_player, 1, "turn passes to player B");

    assert!(transition.events.iter().any(|e| matches!(
        e,
        Event::TilesPlaced {
            row: 2,
            placed: 3,
            overflow: 0
        }
    )));
}

#[test]
fn round_boundary_with_five_factories() {
    // 2 players, 5 factories, 4 tiles each: drafting everything empties
    // the display and flags the round.
    let mut state = new_game(5);
    assert_eq!(state.display.factories.len(), 5);
    for factory in &state.display.factories {
        assert_eq!(factory.len(), 4);
    }

    let mut rng = GameRng::new(17);
    let mut guard = 0;
    while state.phase == Phase::FactoryOffer {
        let moves = legal_moves(&state);
        let &choice = rng.choose(&moves).unwrap();
        state = apply_action(&state, &choice).state;
        guard += 1;
        assert!(guard < 200, "drafting failed to terminate");
    }

    assert!(is_round_over(&state));
    assert_eq!(state.phase, Phase::WallTiling);
    assert!(state.display.all_empty());
}

#[test]
fn game_ends_exactly_on_complete_row() {
    let mut state = new_game(9);
    state.phase = Phase::WallTiling;

    // Four cells of row 0 filled, the fifth arriving from pattern line 0.
    take_from_supply(&mut state, Tile::Yellow, 1);
    take_from_supply(&mut state, Tile::Red, 1);
    take_from_supply(&mut state, Tile::Black, 1);
    take_from_supply(&mut state, Tile::White, 1);
    take_from_supply(&mut state, Tile::Blue, 1);
    if let PlayerBoard::Classic(board) = &mut state.players[0].board {
        board.wall.place(0, Tile::Yellow);
        board.wall.place(0, Tile::Red);
        board.wall.place(0, Tile::Black);
        board.wall.place(0, Tile::White);
        board.pattern_lines[0].place(1, Tile::Blue, 0);
    }
    assert!(!is_game_over(&state));

    let round_end = process_round_end(&state);
    assert!(round_end.game_over);
    assert_eq!(round_end.state.phase, Phase::GameOver);
    assert!(round_end
        .events
        .iter()
        .any(|e| matches!(e, Event::GameOver)));

    let winner = determine_winner(&round_end.state);
    assert_eq!(winner.winners, vec![0]);
    assert_eq!(winner.rankings[0].complete_rows, 1);
}

#[test]
fn marker_transfers_once_per_round() {
    let mut state = new_game(3);
    take_from_supply(&mut state, Tile::Red, 1);
    take_from_supply(&mut state, Tile::Blue, 1);
    state.display.center.push(Tile::Red);
    state.display.center.push(Tile::Blue);

    let first = apply_action(
        &state,
        &Action::classic(TileSource::Center, Tile::Red, Target::Floor),
    );
    assert!(first.state.players[0].has_first_player);
    assert!(first
        .events
        .iter()
        .any(|e| matches!(e, Event::FirstPlayerTaken { player: 0 })));

    // Second center pick the same round does not move the marker.
    let second = apply_action(
        &first.state,
        &Action::classic(TileSource::Center, Tile::Blue, Target::Floor),
    );
    assert!(!second.state.players[1].has_first_player);
    assert!(second.state.players[0].has_first_player);
    assert!(!second
        .events
        .iter()
        .any(|e| matches!(e, Event::FirstPlayerTaken { .. })));
}

#[test]
fn marker_holder_leads_next_round() {
    let mut state = new_game(31);
    take_from_supply(&mut state, Tile::Red, 1);
    state.display.center.push(Tile::Red);

    // Player 0 drafts from a factory; player 1 takes the center (and the
    // marker). Then drain the rest of the display.
    let mut rng = GameRng::new(23);
    let factory_move = legal_moves(&state)
        .into_iter()
        .find(|m| matches!(m, Action::Classic(a) if matches!(a.source, TileSource::Factory(_))))
        .unwrap();
    state = apply_action(&state, &factory_move).state;

    state = apply_action(
        &state,
        &Action::classic(TileSource::Center, Tile::Red, Target::Floor),
    )
    .state;
    assert!(state.players[1].has_first_player);

    let mut guard = 0;
    while state.phase == Phase::FactoryOffer {
        let moves = legal_moves(&state);
        let &choice = rng.choose(&moves).unwrap();
        state = apply_action(&state, &choice).state;
        guard += 1;
        assert!(guard < 300);
    }

    let round_end = process_round_end(&state);
    if !round_end.game_over {
        assert_eq!(round_end.state.current_player, 1);
        assert_eq!(round_end.state.round, 2);
        assert!(round_end.state.display.center_has_first_player);
        assert!(round_end.state.players.iter().all(|p| !p.has_first_player));
    }
}

#[test]
fn invalid_move_is_diagnosed_not_applied() {
    let state = new_game(42);

    // Row 9 does not exist.
    let bad = Action::classic(TileSource::Factory(0), Tile::Blue, Target::Row(9));
    let transition = apply_action(&state, &bad);

    assert_eq!(transition.state, state);
    match &transition.events[..] {
        [Event::InvalidMove { reason }] => assert!(!reason.is_empty()),
        other => panic!("expected a single InvalidMove event, got {other:?}"),
    }

    // The validator names a reason for the same action.
    assert!(validate_move(&state, &bad).is_err());
}

#[test]
fn wall_tiling_processes_rows_top_to_bottom() {
    let mut state = new_game(8);
    clear_display(&mut state);
    state.phase = Phase::WallTiling;
    take_from_supply(&mut state, Tile::Blue, 1);
    take_from_supply(&mut state, Tile::White, 2);
    if let PlayerBoard::Classic(board) = &mut state.players[0].board {
        // Row 0 blue lands at (0,0); row 1 white lands at (1,0) right
        // below it, so processing order determines the second score.
        board.pattern_lines[0].place(1, Tile::Blue, 0);
        board.pattern_lines[1].place(2, Tile::White, 1);
    }

    let round_end = process_round_end(&state);
    let scored: Vec<(usize, i32)> = round_end
        .events
        .iter()
        .filter_map(|e| match e {
            Event::TileScored { row, points, .. } => Some((*row, *points)),
            _ => None,
        })
        .collect();

    // Row 0 scores first as an isolated tile; row 1 then joins it
    // vertically for 2.
    assert_eq!(scored, vec![(0, 1), (1, 2)]);
}

#[test]
fn floor_penalty_applies_and_score_floors_at_zero() {
    let mut state = new_game(12);
    clear_display(&mut state);
    state.phase = Phase::WallTiling;
    take_from_supply(&mut state, Tile::Red, 3);
    if let PlayerBoard::Classic(board) = &mut state.players[0].board {
        board.floor.push_tiles([Tile::Red, Tile::Red, Tile::Red]);
    }
    let discard_before = state.supply.discard_len();

    let round_end = process_round_end(&state);
    assert!(round_end
        .events
        .iter()
        .any(|e| matches!(e, Event::FloorPenalty { player: 0, penalty: -4 })));
    // 0 - 4 floors at 0.
    assert_eq!(round_end.state.players[0].score, 0);
    // Floor tiles went to the discard pile.
    assert!(classic_board(&round_end.state, 0).floor.is_empty());
    assert_eq!(round_end.state.supply.discard_len(), discard_before + 3);
}
