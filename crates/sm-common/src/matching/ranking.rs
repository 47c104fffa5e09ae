use std::cmp::Ordering;

use tracing::debug;

use super::scoring::{MatchScorer, ScoringError};
use crate::api::match_response::{MatchResult, ProjectReport};
use crate::{Employee, Project};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("no employees available to match")]
    NoEmployeesAvailable,
    #[error("no projects available to match")]
    NoProjectsAvailable,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Score every employee against `project`, best first.
///
/// The sort is stable, so employees with equal scores keep their input order.
pub fn rank_employees(
    scorer: &MatchScorer,
    project: &Project,
    employees: &[Employee],
) -> Result<Vec<MatchResult>, ScoringError> {
    let mut ranked = employees
        .iter()
        .map(|employee| -> Result<MatchResult, ScoringError> {
            let score = scorer.score(employee, project)?;
            Ok(MatchResult::new(employee, score.total))
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    Ok(ranked)
}

/// Build one report per project, in input order. Fails as a whole on the first
/// scoring error.
pub fn calculate_matches(
    employees: &[Employee],
    projects: &[Project],
) -> Result<Vec<ProjectReport>, RankingError> {
    if projects.is_empty() {
        return Err(RankingError::NoProjectsAvailable);
    }
    if employees.is_empty() {
        return Err(RankingError::NoEmployeesAvailable);
    }

    let scorer = MatchScorer::default();

    projects
        .iter()
        .map(|project| -> Result<ProjectReport, RankingError> {
            let matches = rank_employees(&scorer, project, employees)?;
            let report =
                ProjectReport::new(project, matches).ok_or(RankingError::NoEmployeesAvailable)?;

            debug!(
                project_id = %project.id,
                best_employee_id = %report.best_match.employee_id,
                best_score = report.best_match.score,
                "project_ranked"
            );
            Ok(report)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hours, RecordId};
    use serde_json::{Value, json};

    fn employee(id: i64, react: u8, python: u8, hours: f64) -> Employee {
        Employee {
            id: RecordId::Int(id),
            name: format!("employee-{id}"),
            react_skill: react,
            python_skill: python,
            hours_available: Hours::from_f64(hours).unwrap(),
        }
    }

    fn project(id: i64, react: u8, python: u8, hours: f64) -> Project {
        Project {
            id: RecordId::Int(id),
            name: format!("project-{id}"),
            priority: json!(id),
            react_needed: react,
            python_needed: python,
            hours_needed: Hours::from_f64(hours).unwrap(),
        }
    }

    #[test]
    fn ranks_employees_by_descending_score() {
        let employees = vec![
            employee(1, 0, 0, 10.0),
            employee(2, 8, 3, 30.0),
            employee(3, 8, 2, 40.0),
        ];
        let reports = calculate_matches(&employees, &[project(10, 8, 2, 40.0)]).unwrap();

        let report = &reports[0];
        let ids: Vec<_> = report
            .all_matches
            .iter()
            .map(|m| m.employee_id.clone())
            .collect();
        assert_eq!(ids, vec![RecordId::Int(3), RecordId::Int(2), RecordId::Int(1)]);
        assert_eq!(report.all_matches[1].score, 85.3);
        assert!(
            report
                .all_matches
                .windows(2)
                .all(|pair| pair[0].score >= pair[1].score)
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let employees = vec![
            employee(5, 4, 4, 40.0),
            employee(1, 9, 9, 40.0),
            employee(3, 4, 4, 40.0),
            employee(2, 4, 4, 40.0),
        ];
        let reports = calculate_matches(&employees, &[project(10, 4, 4, 40.0)]).unwrap();

        let ids: Vec<_> = reports[0]
            .all_matches
            .iter()
            .map(|m| m.employee_id.clone())
            .collect();
        assert_eq!(
            ids,
            vec![
                RecordId::Int(5),
                RecordId::Int(3),
                RecordId::Int(2),
                RecordId::Int(1)
            ]
        );
    }

    #[test]
    fn best_match_is_first_of_all_matches() {
        let employees = vec![employee(1, 2, 9, 20.0), employee(2, 9, 2, 40.0)];
        let projects = vec![project(10, 9, 1, 40.0), project(11, 1, 9, 10.0)];

        let reports = calculate_matches(&employees, &projects).unwrap();

        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.all_matches.len(), employees.len());
            assert_eq!(report.best_match, report.all_matches[0]);
        }
        assert_eq!(reports[0].best_match.employee_id, RecordId::Int(2));
        assert_eq!(reports[1].best_match.employee_id, RecordId::Int(1));
    }

    #[test]
    fn reports_follow_project_input_order() {
        let employees = vec![employee(1, 5, 5, 40.0)];
        let projects = vec![
            project(30, 1, 1, 40.0),
            project(10, 5, 5, 40.0),
            project(20, 9, 9, 40.0),
        ];

        let reports = calculate_matches(&employees, &projects).unwrap();
        let ids: Vec<_> = reports.iter().map(|r| r.project_id.clone()).collect();
        assert_eq!(
            ids,
            vec![RecordId::Int(30), RecordId::Int(10), RecordId::Int(20)]
        );
        assert_eq!(reports[0].priority, json!(30));
    }

    #[test]
    fn empty_employees_is_an_explicit_error() {
        let result = calculate_matches(&[], &[project(10, 1, 1, 40.0)]);
        assert_eq!(result.unwrap_err(), RankingError::NoEmployeesAvailable);
    }

    #[test]
    fn empty_projects_is_an_explicit_error() {
        let result = calculate_matches(&[employee(1, 1, 1, 1.0)], &[]);
        assert_eq!(result.unwrap_err(), RankingError::NoProjectsAvailable);
    }

    #[test]
    fn zero_hour_project_gives_full_availability() {
        let employees = vec![employee(1, 5, 5, 10.0), employee(2, 5, 5, 0.0)];
        let projects = vec![project(10, 5, 5, 40.0), project(11, 5, 5, 0.0)];

        let reports = calculate_matches(&employees, &projects).unwrap();

        assert_eq!(reports.len(), 2);
        let scores: Vec<_> = reports[1].all_matches.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![94.0, 94.0]);
        assert_eq!(reports[1].hours_needed.to_string(), "0.0");
    }

    #[test]
    fn scoring_error_aborts_all_reports() {
        // Negative hours never survive parsing; built by hand to hit the ratio.
        let employees = vec![employee(1, 5, 5, 40.0), employee(2, 5, 5, -5.0)];
        let projects = vec![project(10, 5, 5, 40.0), project(11, 5, 5, 0.0)];

        let err = calculate_matches(&employees, &projects).unwrap_err();
        assert!(matches!(
            err,
            RankingError::Scoring(ScoringError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn report_keeps_project_fields() {
        let mut portal = project(10, 8, 2, 40.0);
        portal.priority = Value::String("high".into());

        let reports = calculate_matches(&[employee(1, 8, 3, 30.0)], &[portal]).unwrap();
        let report = &reports[0];

        assert_eq!(report.project_name, "project-10");
        assert_eq!(report.priority, json!("high"));
        assert_eq!(report.react_needed, 8);
        assert_eq!(report.python_needed, 2);
        assert_eq!(report.hours_needed.as_f64(), 40.0);
        assert_eq!(report.best_match.skill_details.hours, "30.0h");
    }
}
