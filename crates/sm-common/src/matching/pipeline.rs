use tracing::{info, instrument};

use super::ranking::{RankingError, calculate_matches};
use crate::api::match_response::ProjectReport;
use crate::provider::{DataFetchError, DataProvider, Table};
use crate::records::{RecordError, parse_employees, parse_projects};

#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error("failed to fetch data: {0}")]
    DataFetch(#[from] DataFetchError),
    #[error(transparent)]
    InvalidInput(#[from] RecordError),
    #[error(transparent)]
    Ranking(#[from] RankingError),
}

/// Fetch both tables once, then rank every employee for every project.
///
/// Nothing is returned unless every step succeeds; a failed fetch or a single
/// bad row fails the whole calculation.
#[instrument(skip(provider))]
pub async fn calculate_from_provider(
    provider: &dyn DataProvider,
) -> Result<Vec<ProjectReport>, CalculationError> {
    let employee_rows = provider.fetch_all(Table::Employees).await?;
    let project_rows = provider.fetch_all(Table::Projects).await?;

    let employees = parse_employees(&employee_rows)?;
    let projects = parse_projects(&project_rows)?;

    let reports = calculate_matches(&employees, &projects)?;

    info!(
        employees = employees.len(),
        projects = projects.len(),
        "match_calculation_completed"
    );

    Ok(reports)
}
