use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Employee, Hours, Project, RecordId};

/// One employee's scored candidacy for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub employee_name: String,
    pub employee_id: RecordId,
    /// Compatibility score (0.0〜100.0, one decimal)
    pub score: f64,
    pub skill_details: SkillDetails,
}

impl MatchResult {
    pub fn new(employee: &Employee, score: f64) -> Self {
        Self {
            employee_name: employee.name.clone(),
            employee_id: employee.id.clone(),
            score,
            skill_details: SkillDetails::from(employee),
        }
    }
}

/// Display strings for the GUI ("8/10", "30h"). Hours render as stored, so a
/// row holding `30.0` reads "30.0h".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDetails {
    pub react: String,
    pub python: String,
    pub hours: String,
}

impl From<&Employee> for SkillDetails {
    fn from(employee: &Employee) -> Self {
        Self {
            react: format!("{}/10", employee.react_skill),
            python: format!("{}/10", employee.python_skill),
            hours: format!("{}h", employee.hours_available),
        }
    }
}

/// A project's ranked candidate list plus its top pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub project_name: String,
    pub project_id: RecordId,
    pub priority: Value,
    pub react_needed: u8,
    pub python_needed: u8,
    pub hours_needed: Hours,
    pub best_match: MatchResult,
    pub all_matches: Vec<MatchResult>,
}

impl ProjectReport {
    /// `all_matches` must already be ranked. Returns `None` when it is empty,
    /// since there is no best match to report.
    pub fn new(project: &Project, all_matches: Vec<MatchResult>) -> Option<Self> {
        let best_match = all_matches.first()?.clone();

        Some(Self {
            project_name: project.name.clone(),
            project_id: project.id.clone(),
            priority: project.priority.clone(),
            react_needed: project.react_needed,
            python_needed: project.python_needed,
            hours_needed: project.hours_needed.clone(),
            best_match,
            all_matches,
        })
    }
}

/// Success envelope of the calculate endpoint. Failures use the API error body,
/// which carries `success: false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub results: Vec<ProjectReport>,
}

impl CalculateResponse {
    pub fn ok(results: Vec<ProjectReport>) -> Self {
        Self {
            success: true,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn employee() -> Employee {
        Employee {
            id: RecordId::Int(4),
            name: "Aiko".into(),
            react_skill: 8,
            python_skill: 3,
            hours_available: Hours::from(30),
        }
    }

    #[test]
    fn skill_details_render_levels_and_hours() {
        let details = SkillDetails::from(&employee());
        assert_eq!(details.react, "8/10");
        assert_eq!(details.python, "3/10");
        assert_eq!(details.hours, "30h");

        let mut part_time = employee();
        part_time.hours_available = Hours::from_f64(12.5).unwrap();
        assert_eq!(SkillDetails::from(&part_time).hours, "12.5h");

        let mut stored_as_float = employee();
        stored_as_float.hours_available = serde_json::from_value(json!(30.0)).unwrap();
        assert_eq!(SkillDetails::from(&stored_as_float).hours, "30.0h");
    }

    #[test]
    fn match_result_serializes_expected_shape() {
        let value = serde_json::to_value(MatchResult::new(&employee(), 85.3)).unwrap();

        assert_eq!(
            value,
            json!({
                "employee_name": "Aiko",
                "employee_id": 4,
                "score": 85.3,
                "skill_details": { "react": "8/10", "python": "3/10", "hours": "30h" }
            })
        );
    }

    #[test]
    fn report_requires_at_least_one_match() {
        let project = Project {
            id: RecordId::Text("p-1".into()),
            name: "Portal".into(),
            priority: json!(1),
            react_needed: 8,
            python_needed: 2,
            hours_needed: Hours::from(40),
        };

        assert!(ProjectReport::new(&project, Vec::new()).is_none());

        let report = ProjectReport::new(&project, vec![MatchResult::new(&employee(), 85.3)]).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["project_id"], json!("p-1"));
        assert_eq!(value["best_match"], value["all_matches"][0]);
        assert_eq!(value["hours_needed"], json!(40));
    }
}
