//! Game state: the immutable value threaded through the reducer.
//!
//! ## GameState
//!
//! One value holds everything a match needs: variant, players and their
//! boards, the factory display, the tile supply, the turn log, and the
//! embedded deterministic RNG. Every transition clones the state and
//! mutates the clone — fixed-size boards make the clone cheap, and the
//! `im::Vector` turn log shares structure across generations.
//!
//! ## Conservation
//!
//! The tile multiset across supply + display + every player structure is
//! fixed at creation. `assert_conservation` recounts it in debug builds;
//! a mismatch is an engine defect, not a user-triggerable error.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, TurnRecord};
use super::config::{Variant, VariantConfig};
use super::player::Controller;
use super::rng::GameRng;
use super::tile::Tile;
use crate::board::{FloorLine, PatternLine, StarBoard, Wall};
use crate::factory::FactoryDisplay;
use crate::supply::TileSupply;

/// Round state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Players draft from factories and the center.
    FactoryOffer,
    /// Classic: drafting done, scoring pending (`process_round_end`).
    WallTiling,
    /// Summer: players place hand tiles or pass.
    Placement,
    /// Terminal; no more actions.
    GameOver,
}

/// Classic per-player board state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicBoard {
    pub pattern_lines: [PatternLine; 5],
    pub wall: Wall,
    pub floor: FloorLine,
}

/// Summer per-player board state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummerBoard {
    pub star_board: StarBoard,
    pub hand: Vec<Tile>,
    pub passed: bool,
}

/// Variant-specific board behind one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerBoard {
    Classic(ClassicBoard),
    Summer(SummerBoard),
}

impl PlayerBoard {
    #[must_use]
    pub fn as_classic(&self) -> Option<&ClassicBoard> {
        match self {
            PlayerBoard::Classic(board) => Some(board),
            PlayerBoard::Summer(_) => None,
        }
    }

    pub fn as_classic_mut(&mut self) -> Option<&mut ClassicBoard> {
        match self {
            PlayerBoard::Classic(board) => Some(board),
            PlayerBoard::Summer(_) => None,
        }
    }

    #[must_use]
    pub fn as_summer(&self) -> Option<&SummerBoard> {
        match self {
            PlayerBoard::Summer(board) => Some(board),
            PlayerBoard::Classic(_) => None,
        }
    }

    pub fn as_summer_mut(&mut self) -> Option<&mut SummerBoard> {
        match self {
            PlayerBoard::Summer(board) => Some(board),
            PlayerBoard::Classic(_) => None,
        }
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub controller: Controller,
    pub score: i32,
    /// Holds the first-player marker for next round's rotation.
    pub has_first_player: bool,
    pub board: PlayerBoard,
}

/// One seat requested at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub controller: Controller,
}

impl PlayerSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, controller: Controller) -> Self {
        Self {
            name: name.into(),
            controller,
        }
    }
}

/// Match creation options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOptions {
    pub variant: Variant,
    pub players: Vec<PlayerSpec>,
    /// Seed for the match RNG. Production callers supply entropy; tests a
    /// fixed value.
    pub seed: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            players: vec![
                PlayerSpec::new("Player 1", Controller::Human),
                PlayerSpec::new(
                    "Player 2",
                    Controller::Ai(crate::core::player::Difficulty::Easy),
                ),
            ],
            seed: 42,
        }
    }
}

/// Complete match state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub variant: Variant,
    pub players: Vec<Player>,
    pub current_player: usize,
    /// Round number, starting at 1.
    pub round: u32,
    pub phase: Phase,
    pub display: FactoryDisplay,
    pub supply: TileSupply,
    /// Append-only log of applied actions.
    pub turn_log: Vector<TurnRecord>,
    /// Summer: wild color of the current round.
    pub wild_color: Option<Tile>,
    /// Match RNG (supply shuffles, future refills).
    pub rng: GameRng,
}

impl GameState {
    /// Create a fresh match: full shuffled bag, factories dealt, marker in
    /// the center, player 0 to act.
    #[must_use]
    pub fn create(options: GameOptions) -> Self {
        assert!(
            (2..=4).contains(&options.players.len()),
            "Must have 2-4 players"
        );

        let config = options.variant.config();
        let mut rng = GameRng::new(options.seed);
        let mut supply = TileSupply::new(config, &mut rng);

        let mut display = FactoryDisplay::new(config.factory_count(options.players.len()));
        display.fill(&mut supply, config.tiles_per_factory, &mut rng);

        let players = options
            .players
            .into_iter()
            .map(|spec| Player {
                name: spec.name,
                controller: spec.controller,
                score: config.starting_score,
                has_first_player: false,
                board: match options.variant {
                    Variant::Classic => PlayerBoard::Classic(ClassicBoard::default()),
                    Variant::Summer => PlayerBoard::Summer(SummerBoard::default()),
                },
            })
            .collect();

        Self {
            variant: options.variant,
            players,
            current_player: 0,
            round: 1,
            phase: Phase::FactoryOffer,
            display,
            supply,
            turn_log: Vector::new(),
            wild_color: match options.variant {
                Variant::Classic => None,
                Variant::Summer => Some(config.wild_sequence[0]),
            },
            rng,
        }
    }

    /// The active variant's configuration.
    #[must_use]
    pub fn config(&self) -> &'static VariantConfig {
        self.variant.config()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Seat index holding the first-player marker, if taken this round.
    #[must_use]
    pub fn first_player_holder(&self) -> Option<usize> {
        self.players.iter().position(|p| p.has_first_player)
    }

    /// Append an applied action to the turn log.
    pub fn record_turn(&mut self, player: usize, action: Action) {
        let sequence = self.turn_log.len() as u32;
        self.turn_log.push_back(TurnRecord {
            player,
            action,
            round: self.round,
            sequence,
        });
    }

    /// Clamp a score delta to the variant's minimum.
    #[must_use]
    pub fn clamp_score(&self, score: i32) -> i32 {
        score.max(self.config().min_score)
    }

    /// Recount the tile multiset and the marker token across every holding
    /// structure. Engine-defect detector; compiled out of release builds.
    #[cfg(debug_assertions)]
    pub fn assert_conservation(&self) {
        let config = self.config();
        let mut counts = [0usize; crate::core::tile::TILE_KINDS];
        let mut tally = |tile: Tile| counts[tile.index()] += 1;

        self.supply.iter().for_each(&mut tally);
        self.display.iter().for_each(&mut tally);

        for player in &self.players {
            match &player.board {
                PlayerBoard::Classic(board) => {
                    for (row, line) in board.pattern_lines.iter().enumerate() {
                        if let Some(color) = line.color {
                            debug_assert!(
                                line.count as usize <= PatternLine::capacity(row),
                                "pattern line over capacity"
                            );
                            for _ in 0..line.count {
                                tally(color);
                            }
                        }
                    }
                    board.wall.iter_tiles().for_each(&mut tally);
                    board.floor.iter_tiles().for_each(&mut tally);
                }
                PlayerBoard::Summer(board) => {
                    board.hand.iter().copied().for_each(&mut tally);
                    board.star_board.iter_tiles().for_each(&mut tally);
                }
            }
        }

        for &color in config.colors {
            assert_eq!(
                counts[color.index()],
                config.tiles_per_color,
                "tile conservation violated for {color}"
            );
        }

        let holders = usize::from(self.display.center_has_first_player)
            + self.players.iter().filter(|p| p.has_first_player).count();
        assert_eq!(holders, 1, "first-player marker must exist exactly once");
    }
}
