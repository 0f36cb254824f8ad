//! Player controllers and AI difficulty tiers.
//!
//! Players are stored as an ordered list and addressed by index; the only
//! typed identity a player carries is who controls the seat. Controller
//! strings follow the external contract: `"human"`, `"ai-easy"`,
//! `"ai-medium"`, `"ai-hard"`.

use serde::{Deserialize, Serialize};

/// AI difficulty tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Who controls a seat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Controller {
    Human,
    Ai(Difficulty),
}

impl Controller {
    /// Whether this seat is played by a strategy.
    #[must_use]
    pub fn is_ai(self) -> bool {
        matches!(self, Controller::Ai(_))
    }

    /// The difficulty of an AI seat.
    #[must_use]
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            Controller::Human => None,
            Controller::Ai(d) => Some(d),
        }
    }
}

/// Unknown `ai-*` suffixes fall back to the easiest tier by explicit
/// default; anything else is a human seat.
impl From<String> for Controller {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ai-easy" => Controller::Ai(Difficulty::Easy),
            "ai-medium" => Controller::Ai(Difficulty::Medium),
            "ai-hard" => Controller::Ai(Difficulty::Hard),
            other if other.starts_with("ai-") => Controller::Ai(Difficulty::Easy),
            _ => Controller::Human,
        }
    }
}

impl From<Controller> for String {
    fn from(c: Controller) -> Self {
        match c {
            Controller::Human => "human".to_string(),
            Controller::Ai(Difficulty::Easy) => "ai-easy".to_string(),
            Controller::Ai(Difficulty::Medium) => "ai-medium".to_string(),
            Controller::Ai(Difficulty::Hard) => "ai-hard".to_string(),
        }
    }
}

impl std::fmt::Display for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from(*self))
    }
}
