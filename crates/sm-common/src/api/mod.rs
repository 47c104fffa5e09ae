pub mod match_response;

pub use match_response::{CalculateResponse, MatchResult, ProjectReport, SkillDetails};
