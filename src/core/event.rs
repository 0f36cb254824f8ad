//! Transition events.
//!
//! Every reducer call returns an ordered list of events describing the
//! observable effects of the transition. Events are read-only notifications
//! for external collaborators (presentation, audio); they never feed back
//! into engine logic.

use serde::{Deserialize, Serialize};

use super::action::TileSource;
use super::tile::{Star, Tile};

/// Kind of bonus-granting adjacency pattern on the Summer board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Pillar,
    Statue,
    Window,
}

/// A decoration whose full surround was just completed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationAward {
    pub kind: DecorationKind,
    /// Bonus tiles the award grants.
    pub bonus_tiles: u8,
}

/// One observable effect of a state transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The proposed action failed validation; the state is unchanged.
    InvalidMove { reason: String },

    /// Tiles were taken from a factory or the center.
    TilesPicked {
        source: TileSource,
        color: Tile,
        count: usize,
        /// Tiles a factory pick spilled into the center.
        spilled: usize,
    },

    /// The first-player marker left the center.
    FirstPlayerTaken { player: usize },

    /// Summer: points lost for taking the marker (equals tiles taken).
    FirstPlayerPenalty { player: usize, penalty: i32 },

    /// Classic: tiles staged onto a pattern line.
    TilesPlaced {
        row: usize,
        placed: usize,
        overflow: usize,
    },

    /// Classic: tiles landed on the floor line.
    TilesToFloor { count: usize },

    /// Summer: tiles drafted into a hand.
    TilesDrafted { color: Tile, count: usize },

    /// Summer: a tile was placed on a star ring.
    TilePlacedOnStar {
        star: Star,
        position: u8,
        color: Tile,
        points: i32,
        decorations: Vec<DecorationAward>,
    },

    /// Summer: the player stopped placing for this round.
    PlayerPassed { player: usize },

    /// Summer: drafting exhausted; placement begins.
    PlacementPhaseStart,

    /// Play moved to the next seat.
    NextTurn { player: usize },

    /// Drafting exhausted; scoring is pending.
    RoundOver,

    /// Classic wall-tiling: one tile moved to the wall and scored.
    TileScored {
        player: usize,
        row: usize,
        col: usize,
        color: Tile,
        points: i32,
    },

    /// Classic wall-tiling: floor-line penalty applied.
    FloorPenalty { player: usize, penalty: i32 },

    /// Classic wall-tiling finished for one player.
    WallTiled {
        player: usize,
        score_gained: i32,
        new_score: i32,
    },

    /// Summer: excess hand tiles discarded at round end.
    HandClipped {
        player: usize,
        discarded: usize,
        penalty: i32,
    },

    /// End-game bonus applied to a player.
    EndGameBonus { player: usize, bonus: i32 },

    /// A new round began.
    RoundStart { round: u32 },

    /// The match is over.
    GameOver,
}
