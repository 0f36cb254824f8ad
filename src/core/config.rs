//! Variant configuration.
//!
//! The engine never branches on magic numbers at call sites: each variant
//! publishes its palette, tile counts, factory sizing, penalties, and
//! bonuses here, and the rest of the crate reads them through
//! `Variant::config()`.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, CLASSIC_COLORS, SUMMER_COLORS};

/// Rule-set tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Classic,
    Summer,
}

impl Variant {
    /// The static configuration for this variant.
    #[must_use]
    pub fn config(self) -> &'static VariantConfig {
        match self {
            Variant::Classic => &CLASSIC_CONFIG,
            Variant::Summer => &SUMMER_CONFIG,
        }
    }
}

/// Board size of the classic wall and pattern-line stack.
pub const BOARD_SIZE: usize = 5;

/// Floor line holds at most this many penalty-bearing slots.
pub const FLOOR_CAPACITY: usize = 7;

/// Penalty per occupied floor slot, in order.
pub const FLOOR_PENALTIES: [i32; FLOOR_CAPACITY] = [-1, -1, -2, -2, -2, -3, -3];

/// Positions per star ring in the Summer variant.
pub const STAR_POSITIONS: usize = 6;

/// Static per-variant rule data.
#[derive(Clone, Debug, Serialize)]
pub struct VariantConfig {
    pub variant: Variant,

    /// Active palette.
    pub colors: &'static [Tile],

    /// Tiles of each color at game start.
    pub tiles_per_color: usize,

    /// Tiles dealt to each factory.
    pub tiles_per_factory: usize,

    /// Score every player starts with.
    pub starting_score: i32,

    /// Scores never drop below this.
    pub min_score: i32,

    /// Fixed round count, or `None` when the end is board-triggered.
    pub rounds: Option<u32>,

    /// Wild color per round, in order. Empty for Classic.
    pub wild_sequence: &'static [Tile],

    /// Hand tiles a player may carry between Summer rounds.
    pub corner_storage: usize,

    /// End-game bonus per complete wall row.
    pub bonus_row: i32,
    /// End-game bonus per complete wall column.
    pub bonus_column: i32,
    /// End-game bonus per color fully represented on the wall.
    pub bonus_color_set: i32,
}

impl VariantConfig {
    /// Factory count for a player count: 2 → 5, 3 → 7, 4 → 9.
    #[must_use]
    pub fn factory_count(&self, player_count: usize) -> usize {
        match player_count {
            3 => 7,
            4 => 9,
            _ => 5,
        }
    }

    /// Total tiles in the game's multiset.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.colors.len() * self.tiles_per_color
    }
}

pub static CLASSIC_CONFIG: VariantConfig = VariantConfig {
    variant: Variant::Classic,
    colors: &CLASSIC_COLORS,
    tiles_per_color: 20,
    tiles_per_factory: 4,
    starting_score: 0,
    min_score: 0,
    rounds: None,
    wild_sequence: &[],
    corner_storage: 0,
    bonus_row: 2,
    bonus_column: 7,
    bonus_color_set: 10,
};

pub static SUMMER_CONFIG: VariantConfig = VariantConfig {
    variant: Variant::Summer,
    colors: &SUMMER_COLORS,
    tiles_per_color: 22,
    tiles_per_factory: 4,
    starting_score: 5,
    min_score: 1,
    rounds: Some(6),
    wild_sequence: &SUMMER_COLORS,
    corner_storage: 4,
    bonus_row: 0,
    bonus_column: 0,
    bonus_color_set: 0,
};
