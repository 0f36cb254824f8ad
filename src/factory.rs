//! Factory displays and the shared center pool.
//!
//! Picking is all-or-nothing per color: a factory pick takes every tile of
//! the requested color and spills the rest into the center; a center pick
//! takes every tile of the color and, the first time in a round, the
//! first-player marker. Summer picks additionally carve out at most one
//! wild tile and restrict how the wild color itself may be taken.
//!
//! Every pick returns `None` without mutating anything when the request
//! cannot be satisfied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::rng::GameRng;
use crate::core::tile::Tile;
use crate::supply::TileSupply;

/// Result of a successful pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pick {
    /// Tiles now in the picking player's possession.
    pub taken: SmallVec<[Tile; 8]>,
    /// Tiles a factory pick pushed into the center.
    pub spilled: usize,
    /// Whether the first-player marker came along (center picks only).
    pub took_first_player: bool,
}

/// The factory offers plus the shared center pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryDisplay {
    pub factories: Vec<Vec<Tile>>,
    pub center: Vec<Tile>,
    pub center_has_first_player: bool,
}

impl FactoryDisplay {
    /// Create `count` empty factories and an empty center holding the
    /// first-player marker.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            factories: vec![Vec::new(); count],
            center: Vec::new(),
            center_has_first_player: true,
        }
    }

    /// Deal `tiles_per_factory` tiles to every factory, draining the supply.
    pub fn fill(&mut self, supply: &mut TileSupply, tiles_per_factory: usize, rng: &mut GameRng) {
        for factory in &mut self.factories {
            *factory = supply.draw(tiles_per_factory, rng);
        }
    }

    /// Clear the center and return the marker for a fresh round, then deal.
    pub fn reset_for_round(
        &mut self,
        supply: &mut TileSupply,
        tiles_per_factory: usize,
        rng: &mut GameRng,
    ) {
        self.center.clear();
        self.center_has_first_player = true;
        self.fill(supply, tiles_per_factory, rng);
    }

    /// Take every tile of `color` from factory `index`; the rest spill to
    /// the center and the factory is emptied.
    pub fn pick_from_factory(&mut self, index: usize, color: Tile) -> Option<Pick> {
        let factory = self.factories.get(index)?;
        if !factory.contains(&color) {
            return None;
        }

        let factory = std::mem::take(&mut self.factories[index]);
        let mut taken = SmallVec::new();
        let mut spilled = 0;
        for tile in factory {
            if tile == color {
                taken.push(tile);
            } else {
                self.center.push(tile);
                spilled += 1;
            }
        }

        Some(Pick {
            taken,
            spilled,
            took_first_player: false,
        })
    }

    /// Take every tile of `color` from the center. The first center pick of
    /// the round also takes the first-player marker.
    pub fn pick_from_center(&mut self, color: Tile) -> Option<Pick> {
        if !self.center.contains(&color) {
            return None;
        }

        let mut taken = SmallVec::new();
        self.center.retain(|&tile| {
            if tile == color {
                taken.push(tile);
                false
            } else {
                true
            }
        });

        let took_first_player = self.center_has_first_player;
        self.center_has_first_player = false;

        Some(Pick {
            taken,
            spilled: 0,
            took_first_player,
        })
    }

    /// Summer factory pick: the wild color may not be requested directly
    /// — unless the factory holds nothing but wild tiles, in which case
    /// exactly one is taken and the rest spill to the center. Otherwise at
    /// most one wild tile rides along with the chosen color.
    pub fn pick_from_factory_wild(
        &mut self,
        index: usize,
        color: Tile,
        wild: Tile,
    ) -> Option<Pick> {
        if color == wild {
            let factory = self.factories.get(index)?;
            if factory.is_empty() || factory.iter().any(|&t| t != wild) {
                return None;
            }
            let mut factory = std::mem::take(&mut self.factories[index]);
            factory.pop();
            let spilled = factory.len();
            self.center.append(&mut factory);
            let mut taken = SmallVec::new();
            taken.push(wild);
            return Some(Pick {
                taken,
                spilled,
                took_first_player: false,
            });
        }
        let factory = self.factories.get(index)?;
        if !factory.contains(&color) {
            return None;
        }

        let factory = std::mem::take(&mut self.factories[index]);
        let mut taken = SmallVec::new();
        let mut wild_taken = false;
        let mut spilled = 0;
        for tile in factory {
            if tile == color {
                taken.push(tile);
            } else if tile == wild && !wild_taken {
                taken.push(tile);
                wild_taken = true;
            } else {
                self.center.push(tile);
                spilled += 1;
            }
        }

        Some(Pick {
            taken,
            spilled,
            took_first_player: false,
        })
    }

    /// Summer center pick. Requesting the wild color is legal only when the
    /// center holds nothing but wild tiles, and takes exactly one.
    pub fn pick_from_center_wild(&mut self, color: Tile, wild: Tile) -> Option<Pick> {
        if color == wild {
            if self.center.is_empty() || self.center.iter().any(|&t| t != wild) {
                return None;
            }
            self.center.pop();
            let took_first_player = self.center_has_first_player;
            self.center_has_first_player = false;
            let mut taken = SmallVec::new();
            taken.push(wild);
            return Some(Pick {
                taken,
                spilled: 0,
                took_first_player,
            });
        }

        if !self.center.contains(&color) {
            return None;
        }

        let mut taken = SmallVec::new();
        self.center.retain(|&tile| {
            if tile == color {
                taken.push(tile);
                false
            } else {
                true
            }
        });

        // At most one wild rides along.
        if let Some(pos) = self.center.iter().position(|&t| t == wild) {
            self.center.remove(pos);
            taken.push(wild);
        }

        let took_first_player = self.center_has_first_player;
        self.center_has_first_player = false;

        Some(Pick {
            taken,
            spilled: 0,
            took_first_player,
        })
    }

    /// True once every factory and the center pool are empty.
    #[must_use]
    pub fn all_empty(&self) -> bool {
        self.factories.iter().all(Vec::is_empty) && self.center.is_empty()
    }

    /// Distinct colors present in a factory.
    #[must_use]
    pub fn factory_colors(&self, index: usize) -> Vec<Tile> {
        let mut colors = Vec::new();
        if let Some(factory) = self.factories.get(index) {
            for &tile in factory {
                if !colors.contains(&tile) {
                    colors.push(tile);
                }
            }
        }
        colors
    }

    /// Distinct colors present in the center.
    #[must_use]
    pub fn center_colors(&self) -> Vec<Tile> {
        let mut colors = Vec::new();
        for &tile in &self.center {
            if !colors.contains(&tile) {
                colors.push(tile);
            }
        }
        colors
    }

    /// Iterate every tile on display (factories then center).
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.factories
            .iter()
            .flatten()
            .chain(self.center.iter())
            .copied()
    }
}
