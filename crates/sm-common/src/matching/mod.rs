pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod weights;

pub use pipeline::{CalculationError, calculate_from_provider};
pub use ranking::{RankingError, calculate_matches, rank_employees};
pub use scoring::{MatchScore, MatchScorer, ScoringError, calculate_match_score};
