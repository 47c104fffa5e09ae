use super::weights::{MATCH_WEIGHTS, SKILL_WEIGHTS, SkillWeights, Weights};
use crate::{Employee, Project, RecordId};

/// Placeholder for a past-performance metric. No performance history is stored
/// yet, so every employee receives the same value.
pub const PERFORMANCE_SCORE: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("project {project} needs zero hours; availability ratio is undefined")]
    DivisionByZero { project: RecordId },
}

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub skill_weights: SkillWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: MATCH_WEIGHTS,
            skill_weights: SKILL_WEIGHTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Weighted total, rounded to one decimal.
    pub total: f64,
    pub react_match: f64,
    pub python_match: f64,
    pub skills: f64,
    pub availability: f64,
    pub performance: f64,
}

/// Total compatibility score in `[0, 100]`, rounded to one decimal.
pub fn calculate_match_score(employee: &Employee, project: &Project) -> Result<f64, ScoringError> {
    MatchScorer::default()
        .score(employee, project)
        .map(|score| score.total)
}

/// Per-skill closeness: 100 on an exact match, minus 10 per level of distance.
/// Not clamped here; the combined skill score is.
pub fn skill_match(level: u8, needed: u8) -> f64 {
    let distance = (i32::from(level) - i32::from(needed)).abs();
    f64::from(100 - distance * 10)
}

/// 100 once the employee covers the need, otherwise the covered share.
/// Zero needed hours is only an error when the ratio would be taken, which
/// parsed (non-negative) hours never reach.
pub fn availability_score(
    project: &RecordId,
    hours_available: f64,
    hours_needed: f64,
) -> Result<f64, ScoringError> {
    if hours_available >= hours_needed {
        return Ok(100.0);
    }
    if hours_needed == 0.0 {
        return Err(ScoringError::DivisionByZero {
            project: project.clone(),
        });
    }
    Ok((hours_available / hours_needed) * 100.0)
}

/// Stub until performance history exists; see [`PERFORMANCE_SCORE`].
pub fn performance_score(_employee: &Employee) -> f64 {
    PERFORMANCE_SCORE
}

/// Round to the nearest tenth the way the formatted decimal would read.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[derive(Debug, Default)]
pub struct MatchScorer {
    config: ScoringConfig,
}

impl MatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, employee: &Employee, project: &Project) -> Result<MatchScore, ScoringError> {
        let react_match = skill_match(employee.react_skill, project.react_needed);
        let python_match = skill_match(employee.python_skill, project.python_needed);
        let skills = self.skill_score(project, react_match, python_match);
        let availability = availability_score(
            &project.id,
            employee.hours_available.as_f64(),
            project.hours_needed.as_f64(),
        )?;
        let performance = performance_score(employee);

        let weights = self.config.weights;
        let total = skills * weights.skills
            + availability * weights.availability
            + performance * weights.performance;

        Ok(MatchScore {
            total: round_to_tenth(total),
            react_match,
            python_match,
            skills,
            availability,
            performance,
        })
    }

    /// React leads only when the project needs strictly more React than Python.
    /// Each per-skill match is at most 100, so only the lower bound needs a clamp.
    fn skill_score(&self, project: &Project, react_match: f64, python_match: f64) -> f64 {
        let SkillWeights {
            dominant,
            secondary,
        } = self.config.skill_weights;

        let score = if project.react_needed > project.python_needed {
            react_match * dominant + python_match * secondary
        } else {
            python_match * dominant + react_match * secondary
        };

        score.max(0.0)
    }
}
