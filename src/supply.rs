//! Tile supply: the face-down bag and its recycling discard pile.
//!
//! Draws reshuffle the discard back into the bag transparently. When both
//! are empty a draw returns fewer tiles than requested — never an error;
//! the display simply stays short for the round.

use serde::{Deserialize, Serialize};

use crate::core::config::VariantConfig;
use crate::core::rng::GameRng;
use crate::core::tile::Tile;

/// Bag + discard pair. Owns no other state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSupply {
    bag: Vec<Tile>,
    discard: Vec<Tile>,
}

impl TileSupply {
    /// Build the full starting multiset for a variant and shuffle it.
    #[must_use]
    pub fn new(config: &VariantConfig, rng: &mut GameRng) -> Self {
        let mut bag = Vec::with_capacity(config.total_tiles());
        for &color in config.colors {
            for _ in 0..config.tiles_per_color {
                bag.push(color);
            }
        }
        rng.shuffle(&mut bag);
        Self {
            bag,
            discard: Vec::new(),
        }
    }

    /// Draw up to `n` tiles, reshuffling the discard into the bag when the
    /// bag runs dry. Returns fewer than `n` only when both are exhausted.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Vec<Tile> {
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            if self.bag.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.refill_from_discard(rng);
            }
            if let Some(tile) = self.bag.pop() {
                drawn.push(tile);
            }
        }
        drawn
    }

    /// Move the discard pile into the bag and reshuffle.
    pub fn refill_from_discard(&mut self, rng: &mut GameRng) {
        self.bag.append(&mut self.discard);
        rng.shuffle(&mut self.bag);
    }

    /// Return tiles to the discard pile.
    pub fn discard_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.discard.extend(tiles);
    }

    /// Tiles left in the bag.
    #[must_use]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    /// Tiles in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Iterate every tile the supply holds (bag then discard).
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.bag.iter().chain(self.discard.iter()).copied()
    }
}
