//! Summer star board: seven six-position rings with decoration bonuses.
//!
//! Each ring has positions 1..=6; filling position N costs N tiles, of
//! which one stays on the board. Colored rings accept only their own color
//! (wild tiles fill in as payment); the center ring accepts one tile of
//! each color at most. Placements score 1 + the contiguous run of filled
//! neighbors, walked clockwise and counter-clockwise independently.

use serde::{Deserialize, Serialize};

use crate::core::config::STAR_POSITIONS;
use crate::core::event::{DecorationAward, DecorationKind};
use crate::core::tile::{Star, Tile, ALL_STARS};

/// A decoration printed between ring positions; completing its whole
/// surround awards bonus tiles.
#[derive(Copy, Clone, Debug)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub surround: &'static [(Star, u8)],
    pub bonus_tiles: u8,
}

/// The fixed decoration adjacency map: six pillars (1 bonus tile), six
/// statues (2), six windows (3).
pub const DECORATIONS: [Decoration; 18] = [
    // Pillars
    Decoration {
        kind: DecorationKind::Pillar,
        surround: &[(Star::Red, 1), (Star::Blue, 1), (Star::Center, 1), (Star::Center, 6)],
        bonus_tiles: 1,
    },
    Decoration {
        kind: DecorationKind::Pillar,
        surround: &[(Star::Blue, 1), (Star::Yellow, 1), (Star::Center, 1), (Star::Center, 2)],
        bonus_tiles: 1,
    },
    Decoration {
        kind: DecorationKind::Pillar,
        surround: &[(Star::Yellow, 1), (Star::Orange, 1), (Star::Center, 2), (Star::Center, 3)],
        bonus_tiles: 1,
    },
    Decoration {
        kind: DecorationKind::Pillar,
        surround: &[(Star::Orange, 1), (Star::Green, 1), (Star::Center, 3), (Star::Center, 4)],
        bonus_tiles: 1,
    },
    Decoration {
        kind: DecorationKind::Pillar,
        surround: &[(Star::Green, 1), (Star::Purple, 1), (Star::Center, 4), (Star::Center, 5)],
        bonus_tiles: 1,
    },
    Decoration {
        kind: DecorationKind::Pillar,
        surround: &[(Star::Purple, 1), (Star::Red, 1), (Star::Center, 5), (Star::Center, 6)],
        bonus_tiles: 1,
    },
    // Statues
    Decoration {
        kind: DecorationKind::Statue,
        surround: &[(Star::Red, 2), (Star::Red, 3), (Star::Blue, 5), (Star::Blue, 6)],
        bonus_tiles: 2,
    },
    Decoration {
        kind: DecorationKind::Statue,
        surround: &[(Star::Blue, 2), (Star::Blue, 3), (Star::Yellow, 5), (Star::Yellow, 6)],
        bonus_tiles: 2,
    },
    Decoration {
        kind: DecorationKind::Statue,
        surround: &[(Star::Yellow, 2), (Star::Yellow, 3), (Star::Orange, 5), (Star::Orange, 6)],
        bonus_tiles: 2,
    },
    Decoration {
        kind: DecorationKind::Statue,
        surround: &[(Star::Orange, 2), (Star::Orange, 3), (Star::Green, 5), (Star::Green, 6)],
        bonus_tiles: 2,
    },
    Decoration {
        kind: DecorationKind::Statue,
        surround: &[(Star::Green, 2), (Star::Green, 3), (Star::Purple, 5), (Star::Purple, 6)],
        bonus_tiles: 2,
    },
    Decoration {
        kind: DecorationKind::Statue,
        surround: &[(Star::Purple, 2), (Star::Purple, 3), (Star::Red, 5), (Star::Red, 6)],
        bonus_tiles: 2,
    },
    // Windows
    Decoration {
        kind: DecorationKind::Window,
        surround: &[(Star::Red, 5), (Star::Red, 6)],
        bonus_tiles: 3,
    },
    Decoration {
        kind: DecorationKind::Window,
        surround: &[(Star::Blue, 5), (Star::Blue, 6)],
        bonus_tiles: 3,
    },
    Decoration {
        kind: DecorationKind::Window,
        surround: &[(Star::Yellow, 5), (Star::Yellow, 6)],
        bonus_tiles: 3,
    },
    Decoration {
        kind: DecorationKind::Window,
        surround: &[(Star::Orange, 5), (Star::Orange, 6)],
        bonus_tiles: 3,
    },
    Decoration {
        kind: DecorationKind::Window,
        surround: &[(Star::Green, 5), (Star::Green, 6)],
        bonus_tiles: 3,
    },
    Decoration {
        kind: DecorationKind::Window,
        surround: &[(Star::Purple, 5), (Star::Purple, 6)],
        bonus_tiles: 3,
    },
];

/// End-game bonus for a fully filled ring.
#[must_use]
pub const fn star_bonus(star: Star) -> i32 {
    match star {
        Star::Center => 12,
        Star::Red => 14,
        Star::Blue => 15,
        Star::Yellow => 16,
        Star::Orange => 17,
        Star::Green => 18,
        Star::Purple => 20,
    }
}

/// End-game bonus when every ring has position `n` filled.
#[must_use]
pub const fn number_bonus(n: u8) -> i32 {
    match n {
        1 => 4,
        2 => 8,
        3 => 12,
        4 => 16,
        _ => 0,
    }
}

/// Outcome of a star placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarPlacement {
    /// Contiguity points scored.
    pub points: i32,
    /// Decorations whose surround this placement completed.
    pub decorations: Vec<DecorationAward>,
}

/// End-game bonus breakdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBonuses {
    /// (ring, bonus) per fully filled ring.
    pub stars: Vec<(Star, i32)>,
    /// (position, bonus) per number covered on all seven rings.
    pub numbers: Vec<(u8, i32)>,
    pub total: i32,
}

/// The canonical payment for filling a position: as many matching-color
/// tiles as possible, wilds only for the remainder. `None` when the hand
/// cannot cover the cost with at least one matching tile.
#[must_use]
pub fn payment_split(hand: &[Tile], color: Tile, wild: Tile, cost: usize) -> Option<(u8, u8)> {
    let color_avail = hand.iter().filter(|&&t| t == color).count();
    let wild_avail = if color == wild {
        0
    } else {
        hand.iter().filter(|&&t| t == wild).count()
    };
    if color_avail == 0 || color_avail + wild_avail < cost {
        return None;
    }
    let tiles_used = color_avail.min(cost);
    Some((tiles_used as u8, (cost - tiles_used) as u8))
}

/// A player's star board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBoard {
    /// `positions[star][n - 1]` holds the tile at position `n`, if filled.
    positions: [[Option<Tile>; STAR_POSITIONS]; 7],
}

impl StarBoard {
    #[must_use]
    pub fn get(&self, star: Star, position: u8) -> Option<Tile> {
        self.positions[star.index()][position as usize - 1]
    }

    #[must_use]
    pub fn is_filled(&self, star: Star, position: u8) -> bool {
        self.get(star, position).is_some()
    }

    /// Colors already used on the center ring.
    #[must_use]
    pub fn center_colors(&self) -> Vec<Tile> {
        self.positions[Star::Center.index()]
            .iter()
            .filter_map(|c| *c)
            .collect()
    }

    /// Whether the hand can fill `position` on `star` this round.
    ///
    /// The position must be empty and the hand must cover the cost
    /// (= position number) with at least one non-wild tile of the ring's
    /// color — or, on the center ring, of some color not yet used there.
    #[must_use]
    pub fn can_place(&self, star: Star, position: u8, hand: &[Tile], wild: Tile) -> bool {
        if position == 0 || position as usize > STAR_POSITIONS {
            return false;
        }
        if self.is_filled(star, position) {
            return false;
        }
        let cost = position as usize;

        match star.color() {
            Some(color) => payment_split(hand, color, wild, cost).is_some(),
            None => {
                let used = self.center_colors();
                hand.iter().any(|&c| {
                    c != wild
                        && !used.contains(&c)
                        && payment_split(hand, c, wild, cost).is_some()
                })
            }
        }
    }

    /// Fill `position` on `star` with `color`, scoring contiguity and
    /// reporting any decorations the placement completed.
    ///
    /// The caller owns payment arithmetic; this is pure board geometry.
    pub fn place(&mut self, star: Star, position: u8, color: Tile) -> StarPlacement {
        debug_assert!(!self.is_filled(star, position), "position filled twice");
        self.positions[star.index()][position as usize - 1] = Some(color);

        StarPlacement {
            points: self.score_contiguous(star, position),
            decorations: self.completed_decorations(star, position),
        }
    }

    /// 1 + contiguous filled neighbors, walked clockwise then
    /// counter-clockwise until an empty position (or the start) is hit.
    #[must_use]
    pub fn score_contiguous(&self, star: Star, position: u8) -> i32 {
        let n = STAR_POSITIONS as u8;
        let mut score = 1;

        let mut pos = position % n + 1;
        while pos != position && self.is_filled(star, pos) {
            score += 1;
            pos = pos % n + 1;
        }

        pos = (position + n - 2) % n + 1;
        while pos != position && self.is_filled(star, pos) {
            score += 1;
            pos = (pos + n - 2) % n + 1;
        }

        score
    }

    /// Decorations adjacent to (star, position) whose surround is now
    /// entirely filled.
    #[must_use]
    pub fn completed_decorations(&self, star: Star, position: u8) -> Vec<DecorationAward> {
        DECORATIONS
            .iter()
            .filter(|deco| deco.surround.contains(&(star, position)))
            .filter(|deco| deco.surround.iter().all(|&(s, p)| self.is_filled(s, p)))
            .map(|deco| DecorationAward {
                kind: deco.kind,
                bonus_tiles: deco.bonus_tiles,
            })
            .collect()
    }

    /// Whether every position of `star` is filled.
    #[must_use]
    pub fn ring_complete(&self, star: Star) -> bool {
        self.positions[star.index()].iter().all(Option::is_some)
    }

    /// Fixed ring and number bonuses at game end.
    #[must_use]
    pub fn end_game_bonuses(&self) -> StarBonuses {
        let mut bonuses = StarBonuses::default();

        for star in ALL_STARS {
            if self.ring_complete(star) {
                let bonus = star_bonus(star);
                bonuses.stars.push((star, bonus));
                bonuses.total += bonus;
            }
        }

        for n in 1..=STAR_POSITIONS as u8 {
            if ALL_STARS.iter().all(|&s| self.is_filled(s, n)) {
                let bonus = number_bonus(n);
                bonuses.numbers.push((n, bonus));
                bonuses.total += bonus;
            }
        }

        bonuses
    }

    /// Iterate every tile on the board.
    pub fn iter_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.positions.iter().flatten().filter_map(|c| *c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_placement_scores_one() {
        let mut board = StarBoard::default();
        let result = board.place(Star::Red, 3, Tile::Red);
        assert_eq!(result.points, 1);
    }

    #[test]
    fn test_contiguous_run_scores_neighbors() {
        let mut board = StarBoard::default();
        board.place(Star::Red, 2, Tile::Red);
        board.place(Star::Red, 3, Tile::Red);
        // 4 joins the run {2, 3}: 1 + 2 neighbors counter-clockwise.
        let result = board.place(Star::Red, 4, Tile::Red);
        assert_eq!(result.points, 3);
    }

    #[test]
    fn test_contiguity_wraps_around_the_ring() {
        let mut board = StarBoard::default();
        board.place(Star::Blue, 6, Tile::Blue);
        board.place(Star::Blue, 1, Tile::Blue);
        let result = board.place(Star::Blue, 2, Tile::Blue);
        assert_eq!(result.points, 3);
    }

    #[test]
    fn test_full_ring_scores_six() {
        let mut board = StarBoard::default();
        for pos in 1..=5 {
            board.place(Star::Green, pos, Tile::Green);
        }
        let result = board.place(Star::Green, 6, Tile::Green);
        assert_eq!(result.points, 6);
        assert!(board.ring_complete(Star::Green));
    }

    #[test]
    fn test_payment_split_prefers_color_tiles() {
        let wild = Tile::Purple;
        let hand = [Tile::Red, Tile::Red, wild, wild];

        assert_eq!(payment_split(&hand, Tile::Red, wild, 3), Some((2, 1)));
        assert_eq!(payment_split(&hand, Tile::Red, wild, 2), Some((2, 0)));
        // No red at all: illegal even with wilds available.
        assert_eq!(payment_split(&[wild, wild], Tile::Red, wild, 2), None);
        // Not enough total.
        assert_eq!(payment_split(&hand, Tile::Red, wild, 5), None);
    }

    #[test]
    fn test_payment_split_when_color_is_wild() {
        let wild = Tile::Purple;
        let hand = [wild, wild, Tile::Green];
        // The wild color pays for its own ring with plain tiles only.
        assert_eq!(payment_split(&hand, wild, wild, 2), Some((2, 0)));
        assert_eq!(payment_split(&hand, wild, wild, 3), None);
    }

    #[test]
    fn test_can_place_center_requires_unused_color() {
        let wild = Tile::Purple;
        let mut board = StarBoard::default();
        board.place(Star::Center, 1, Tile::Green);

        // Green already used on the center ring.
        assert!(!board.can_place(Star::Center, 2, &[Tile::Green, Tile::Green], wild));
        assert!(board.can_place(Star::Center, 2, &[Tile::Red, Tile::Red], wild));
    }

    #[test]
    fn test_window_decoration_completes() {
        let mut board = StarBoard::default();
        board.place(Star::Red, 5, Tile::Red);
        let result = board.place(Star::Red, 6, Tile::Red);

        assert_eq!(result.decorations.len(), 1);
        assert_eq!(result.decorations[0].kind, DecorationKind::Window);
        assert_eq!(result.decorations[0].bonus_tiles, 3);
    }

    #[test]
    fn test_statue_needs_all_four_positions() {
        let mut board = StarBoard::default();
        board.place(Star::Red, 2, Tile::Red);
        board.place(Star::Red, 3, Tile::Red);
        board.place(Star::Blue, 5, Tile::Blue);
        let result = board.place(Star::Blue, 6, Tile::Blue);

        // Completes both the blue window and the red/blue statue.
        let kinds: Vec<_> = result.decorations.iter().map(|d| d.kind).collect();
        assert!(kinds.contains(&DecorationKind::Statue));
        assert!(kinds.contains(&DecorationKind::Window));
    }

    #[test]
    fn test_end_game_bonuses() {
        let mut board = StarBoard::default();
        for pos in 1..=6 {
            board.place(Star::Purple, pos, Tile::Purple);
        }
        let bonuses = board.end_game_bonuses();

        assert_eq!(bonuses.stars, vec![(Star::Purple, 20)]);
        assert!(bonuses.numbers.is_empty());
        assert_eq!(bonuses.total, 20);
    }

    #[test]
    fn test_number_bonus_requires_all_rings() {
        let mut board = StarBoard::default();
        for star in ALL_STARS {
            let color = star.color().unwrap_or(Tile::Red);
            board.place(star, 1, color);
        }
        let bonuses = board.end_game_bonuses();

        assert_eq!(bonuses.numbers, vec![(1, 4)]);
        assert_eq!(bonuses.total, 4);
    }
}
