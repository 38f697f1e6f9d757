//! Difficulty tiers for the automated opponent.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

/// Strength of the automated opponent.
///
/// Each tier fixes a search depth cap and the probability of playing the
/// searched move rather than a random one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Mostly random, occasionally looks two plies ahead.
    Easy,
    /// Takes wins, blocks losses, otherwise searches four plies most of the time.
    #[default]
    Medium,
    /// Always searches six plies.
    Hard,
    /// Searches the whole game tree; cannot be beaten.
    Expert,
}

impl Difficulty {
    /// Maximum search depth in plies, or `None` for an exhaustive search.
    pub fn depth_cap(self) -> Option<u32> {
        match self {
            Difficulty::Easy => Some(2),
            Difficulty::Medium => Some(4),
            Difficulty::Hard => Some(6),
            Difficulty::Expert => None,
        }
    }

    /// Probability of playing the searched move instead of a random one.
    pub fn optimal_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.6,
            Difficulty::Hard | Difficulty::Expert => 1.0,
        }
    }

    /// Short human-readable description of the tier.
    #[instrument]
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Beginner friendly - makes some mistakes",
            Difficulty::Medium => "Balanced challenge - strategic play",
            Difficulty::Hard => "Tough opponent - advanced strategy",
            Difficulty::Expert => "Unbeatable - perfect play",
        }
    }
}
