//! Floor line: the penalty track.
//!
//! Holds at most seven penalty-bearing slots; tiles beyond the cap bypass
//! the penalty and go straight to discard. The first-player marker can
//! occupy a slot but is never discarded.

use serde::{Deserialize, Serialize};

use crate::core::config::{FLOOR_CAPACITY, FLOOR_PENALTIES};
use crate::core::tile::Tile;

/// One occupied floor slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorSlot {
    Tile(Tile),
    FirstPlayerMarker,
}

/// A player's floor line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorLine {
    slots: Vec<FloorSlot>,
}

impl FloorLine {
    /// Occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn slots(&self) -> &[FloorSlot] {
        &self.slots
    }

    /// Add the first-player marker if a slot is free. A full floor drops
    /// the marker silently; possession is tracked on the player either way.
    pub fn push_marker(&mut self) {
        if self.slots.len() < FLOOR_CAPACITY {
            self.slots.push(FloorSlot::FirstPlayerMarker);
        }
    }

    /// Add tiles, returning the overflow that must go to discard.
    pub fn push_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) -> Vec<Tile> {
        let mut excess = Vec::new();
        for tile in tiles {
            if self.slots.len() < FLOOR_CAPACITY {
                self.slots.push(FloorSlot::Tile(tile));
            } else {
                excess.push(tile);
            }
        }
        excess
    }

    /// Penalty over the occupied slots. Always ≤ 0.
    #[must_use]
    pub fn penalty(&self) -> i32 {
        FLOOR_PENALTIES[..self.slots.len().min(FLOOR_CAPACITY)]
            .iter()
            .sum()
    }

    /// Penalty a floor of `len` occupied slots would carry.
    #[must_use]
    pub fn penalty_for_len(len: usize) -> i32 {
        FLOOR_PENALTIES[..len.min(FLOOR_CAPACITY)].iter().sum()
    }

    /// Empty the floor, returning its tiles for discard (marker excluded).
    pub fn clear(&mut self) -> Vec<Tile> {
        self.slots
            .drain(..)
            .filter_map(|slot| match slot {
                FloorSlot::Tile(tile) => Some(tile),
                FloorSlot::FirstPlayerMarker => None,
            })
            .collect()
    }

    /// Iterate the tiles currently on the floor.
    pub fn iter_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            FloorSlot::Tile(tile) => Some(*tile),
            FloorSlot::FirstPlayerMarker => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_table() {
        let expected = [0, -1, -2, -4, -6, -8, -11, -11, -11];
        let mut floor = FloorLine::default();
        assert_eq!(floor.penalty(), expected[0]);

        for (i, &want) in expected.iter().enumerate().skip(1) {
            let excess = floor.push_tiles([Tile::Blue]);
            assert_eq!(floor.penalty(), want, "penalty after {i} tiles");
            if i <= FLOOR_CAPACITY {
                assert!(excess.is_empty());
            } else {
                assert_eq!(excess.len(), 1);
            }
        }
    }

    #[test]
    fn test_overflow_goes_to_discard() {
        let mut floor = FloorLine::default();
        let excess = floor.push_tiles(std::iter::repeat(Tile::Red).take(10));

        assert_eq!(floor.len(), FLOOR_CAPACITY);
        assert_eq!(excess.len(), 3);
        assert_eq!(floor.penalty(), -11);
    }

    #[test]
    fn test_marker_occupies_slot_but_is_not_discarded() {
        let mut floor = FloorLine::default();
        floor.push_marker();
        floor.push_tiles([Tile::Blue, Tile::Red]);

        assert_eq!(floor.len(), 3);
        assert_eq!(floor.penalty(), -4);

        let discarded = floor.clear();
        assert_eq!(discarded, vec![Tile::Blue, Tile::Red]);
        assert!(floor.is_empty());
    }

    #[test]
    fn test_marker_dropped_when_full() {
        let mut floor = FloorLine::default();
        floor.push_tiles(std::iter::repeat(Tile::Blue).take(FLOOR_CAPACITY));
        floor.push_marker();
        assert_eq!(floor.len(), FLOOR_CAPACITY);
    }
}
