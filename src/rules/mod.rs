//! Rule sets and the reducer entry points.
//!
//! The two variants implement the `GameVariant` capability trait; the
//! reducer dispatches through it instead of branching on a variant tag at
//! every call site. `apply_action` is pure and total: it either returns a
//! fully consistent successor state, or the unchanged input state plus a
//! single `InvalidMove` event.

pub mod classic;
pub mod summer;
pub mod validator;

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::config::Variant;
use crate::core::event::Event;
use crate::core::state::{GameState, Phase, PlayerBoard};

pub use classic::ClassicRules;
pub use summer::SummerRules;
pub use validator::{legal_moves, validate_move, MoveError};

/// Result of one reducer call.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<Event>,
}

/// Result of end-of-round processing.
#[derive(Clone, Debug)]
pub struct RoundEnd {
    pub state: GameState,
    pub events: Vec<Event>,
    pub game_over: bool,
}

/// Capability interface of a rule set.
pub trait GameVariant {
    /// Apply a validated-or-rejected action, producing the successor state.
    fn apply_action(&self, state: &GameState, action: &Action) -> Transition;

    /// Whether the current drafting round has been exhausted.
    fn is_round_over(&self, state: &GameState) -> bool;

    /// Whether the match has ended.
    fn is_game_over(&self, state: &GameState) -> bool;

    /// Run the variant's scoring/rollover phase.
    fn run_scoring_phase(&self, state: &GameState) -> RoundEnd;
}

/// The rule set for a variant.
#[must_use]
pub fn rules_for(variant: Variant) -> &'static dyn GameVariant {
    match variant {
        Variant::Classic => &ClassicRules,
        Variant::Summer => &SummerRules,
    }
}

/// Top-level reducer: validate and apply one action.
#[must_use]
pub fn apply_action(state: &GameState, action: &Action) -> Transition {
    let transition = rules_for(state.variant).apply_action(state, action);
    #[cfg(debug_assertions)]
    transition.state.assert_conservation();
    transition
}

/// Orchestrator hook, called once the reducer reports a round-over phase.
#[must_use]
pub fn process_round_end(state: &GameState) -> RoundEnd {
    let round_end = rules_for(state.variant).run_scoring_phase(state);
    #[cfg(debug_assertions)]
    round_end.state.assert_conservation();
    round_end
}

/// One seat's standing in the final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub player: usize,
    pub name: String,
    pub score: i32,
    /// Classic tie-breaker; 0 on Summer boards.
    pub complete_rows: usize,
}

/// Outcome of `determine_winner`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerReport {
    /// Seats sharing first place.
    pub winners: Vec<usize>,
    /// All seats, best first.
    pub rankings: Vec<Ranking>,
    pub is_tie: bool,
}

/// Rank players by score, tie-broken by completed wall rows (Classic).
/// Seats still tied after the tie-break share the victory.
#[must_use]
pub fn determine_winner(state: &GameState) -> WinnerReport {
    let mut rankings: Vec<Ranking> = state
        .players
        .iter()
        .enumerate()
        .map(|(index, player)| Ranking {
            player: index,
            name: player.name.clone(),
            score: player.score,
            complete_rows: match &player.board {
                PlayerBoard::Classic(board) => board.wall.complete_rows(),
                PlayerBoard::Summer(_) => 0,
            },
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(b.complete_rows.cmp(&a.complete_rows))
    });

    let top = (rankings[0].score, rankings[0].complete_rows);
    let winners: Vec<usize> = rankings
        .iter()
        .filter(|r| (r.score, r.complete_rows) == top)
        .map(|r| r.player)
        .collect();

    WinnerReport {
        is_tie: winners.len() > 1,
        winners,
        rankings,
    }
}

/// Next seat in table order.
#[must_use]
pub(crate) fn next_player(state: &GameState) -> usize {
    (state.current_player + 1) % state.player_count()
}

/// The rejection transition: unchanged state plus one diagnostic event.
pub(crate) fn rejected(state: &GameState, error: &MoveError) -> Transition {
    Transition {
        state: state.clone(),
        events: vec![Event::InvalidMove {
            reason: error.to_string(),
        }],
    }
}

/// Round-over marker phases, used by orchestrators to decide whether to
/// call `process_round_end`.
#[must_use]
pub fn is_round_over(state: &GameState) -> bool {
    rules_for(state.variant).is_round_over(state)
}

/// Whether the match has ended.
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    state.phase == Phase::GameOver || rules_for(state.variant).is_game_over(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Variant;
    use crate::core::player::Controller;
    use crate::core::state::{GameOptions, PlayerSpec};

    fn state_with_scores(scores: &[i32]) -> GameState {
        let mut state = GameState::create(GameOptions {
            variant: Variant::Classic,
            players: scores
                .iter()
                .enumerate()
                .map(|(i, _)| PlayerSpec::new(format!("P{i}"), Controller::Human))
                .collect(),
            seed: 42,
        });
        for (player, &score) in state.players.iter_mut().zip(scores) {
            player.score = score;
        }
        state
    }

    #[test]
    fn test_winner_by_score() {
        let report = determine_winner(&state_with_scores(&[10, 25]));
        assert_eq!(report.winners, vec![1]);
        assert!(!report.is_tie);
        assert_eq!(report.rankings[0].player, 1);
    }

    #[test]
    fn test_tie_is_shared() {
        let report = determine_winner(&state_with_scores(&[15, 15]));
        assert_eq!(report.winners.len(), 2);
        assert!(report.is_tie);
    }

    #[test]
    fn test_tiebreak_by_complete_rows() {
        let mut state = state_with_scores(&[15, 15]);
        if let PlayerBoard::Classic(board) = &mut state.players[1].board {
            for &color in Variant::Classic.config().colors {
                board.wall.place(0, color);
            }
        }

        let report = determine_winner(&state);
        assert_eq!(report.winners, vec![1]);
        assert!(!report.is_tie);
    }

    #[test]
    fn test_invalid_action_leaves_state_unchanged() {
        let state = state_with_scores(&[0, 0]);
        let bad = Action::Summer(crate::core::action::SummerAction::Pass);

        let transition = apply_action(&state, &bad);
        assert_eq!(transition.state, state);
        assert!(matches!(
            transition.events.as_slice(),
            [Event::InvalidMove { .. }]
        ));
    }
}
