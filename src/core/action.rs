//! Player actions and the turn log.
//!
//! An action is a variant-tagged request; the reducer validates it against
//! the current state before any mutation. Applied actions are appended to
//! the turn log as `TurnRecord`s carrying round and sequence metadata —
//! deliberately no wall-clock timestamp, so two structurally identical
//! states stay identical after identical actions.

use serde::{Deserialize, Serialize};

use super::tile::{Star, Tile};

/// Where tiles are drafted from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSource {
    /// A factory display, by index.
    Factory(usize),
    /// The shared center pool.
    Center,
}

/// Where drafted tiles land (Classic).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// A pattern line, 0..=4.
    Row(usize),
    /// Voluntary floor dump.
    Floor,
}

/// A Classic draft: take every tile of `color` from `source` into `target`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicAction {
    pub source: TileSource,
    pub color: Tile,
    pub target: Target,
}

/// A Summer request: draft to hand, pay tiles onto a star, or pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SummerAction {
    /// Draft every tile of `color` (plus at most one wild) from `source`.
    Draft { source: TileSource, color: Tile },
    /// Pay `tiles_used` color tiles + `wild_tiles_used` wild tiles to fill
    /// `position` (cost = position number) on `star`.
    Place {
        star: Star,
        position: u8,
        color: Tile,
        tiles_used: u8,
        wild_tiles_used: u8,
    },
    /// Stop placing for the rest of the round.
    Pass,
}

/// A complete, variant-tagged action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Classic(ClassicAction),
    Summer(SummerAction),
}

impl Action {
    /// Convenience constructor for a Classic draft.
    #[must_use]
    pub fn classic(source: TileSource, color: Tile, target: Target) -> Self {
        Action::Classic(ClassicAction {
            source,
            color,
            target,
        })
    }
}

/// One applied action, as recorded in the turn log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Seat that acted.
    pub player: usize,
    /// The action taken.
    pub action: Action,
    /// Round number when the action was taken.
    pub round: u32,
    /// Position in the game-wide action sequence.
    pub sequence: u32,
}
