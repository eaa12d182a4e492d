use crate::error::Result;
use crate::types::SolveResult;

/// Render the full `SolveResult` as pretty JSON.
pub fn generate_json_report(result: &SolveResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Compact summary, handy for `--quiet` runs that only want machine output.
#[derive(serde::Serialize)]
pub struct JsonSummary {
    pub classes: usize,
    pub warnings: usize,
    pub solve_time_ms: u64,
    pub evictions_performed: u32,
}

pub fn generate_json_summary(result: &SolveResult) -> Result<String> {
    let summary = JsonSummary {
        classes: result.classes.len(),
        warnings: result.warnings.len(),
        solve_time_ms: result.metadata.solve_time_ms,
        evictions_performed: result.metadata.evictions_performed,
    };

    Ok(serde_json::to_string_pretty(&summary)?)
}
