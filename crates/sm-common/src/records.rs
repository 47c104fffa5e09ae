use serde::Deserialize;
use serde_json::Value;

use crate::provider::Table;
use crate::{Employee, Hours, Project, RecordId};

pub const MAX_SKILL_LEVEL: u8 = 10;
pub const DEFAULT_HOURS_NEEDED: u32 = 40;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid {table} row #{index}: {reason}")]
    InvalidInput {
        table: Table,
        index: usize,
        reason: String,
    },
}

impl RecordError {
    fn invalid(table: Table, index: usize, reason: impl Into<String>) -> Self {
        RecordError::InvalidInput {
            table,
            index,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    id: RecordId,
    name: String,
    react_skill: u8,
    python_skill: u8,
    hours_available: Hours,
}

#[derive(Debug, Deserialize)]
struct ProjectRow {
    id: RecordId,
    name: String,
    #[serde(default)]
    priority: Value,
    react_needed: u8,
    python_needed: u8,
    #[serde(default)]
    hours_needed: Option<Hours>,
}

fn check_skill(table: Table, index: usize, field: &str, level: u8) -> Result<u8, RecordError> {
    if level > MAX_SKILL_LEVEL {
        return Err(RecordError::invalid(
            table,
            index,
            format!("{field} must be within 0-{MAX_SKILL_LEVEL}, got {level}"),
        ));
    }
    Ok(level)
}

fn check_hours(table: Table, index: usize, field: &str, hours: Hours) -> Result<Hours, RecordError> {
    let value = hours.as_f64();
    if !value.is_finite() || value < 0.0 {
        return Err(RecordError::invalid(
            table,
            index,
            format!("{field} must be a non-negative number, got {hours}"),
        ));
    }
    Ok(hours)
}

impl Employee {
    /// Parse one `employees` row. `index` is only used for error reporting.
    pub fn from_row(index: usize, row: &Value) -> Result<Self, RecordError> {
        let table = Table::Employees;
        let parsed = EmployeeRow::deserialize(row)
            .map_err(|err| RecordError::invalid(table, index, err.to_string()))?;

        Ok(Self {
            id: parsed.id,
            name: parsed.name,
            react_skill: check_skill(table, index, "react_skill", parsed.react_skill)?,
            python_skill: check_skill(table, index, "python_skill", parsed.python_skill)?,
            hours_available: check_hours(table, index, "hours_available", parsed.hours_available)?,
        })
    }
}

impl Project {
    /// Parse one `projects` row. A missing or null `hours_needed` falls back to
    /// [`DEFAULT_HOURS_NEEDED`].
    pub fn from_row(index: usize, row: &Value) -> Result<Self, RecordError> {
        let table = Table::Projects;
        let parsed = ProjectRow::deserialize(row)
            .map_err(|err| RecordError::invalid(table, index, err.to_string()))?;

        let hours_needed = parsed
            .hours_needed
            .unwrap_or_else(|| Hours::from(DEFAULT_HOURS_NEEDED));

        Ok(Self {
            id: parsed.id,
            name: parsed.name,
            priority: parsed.priority,
            react_needed: check_skill(table, index, "react_needed", parsed.react_needed)?,
            python_needed: check_skill(table, index, "python_needed", parsed.python_needed)?,
            hours_needed: check_hours(table, index, "hours_needed", hours_needed)?,
        })
    }
}

pub fn parse_employees(rows: &[Value]) -> Result<Vec<Employee>, RecordError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| Employee::from_row(index, row))
        .collect()
}

pub fn parse_projects(rows: &[Value]) -> Result<Vec<Project>, RecordError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| Project::from_row(index, row))
        .collect()
}
