use crate::error::{Result, SolverError};
use crate::parser::validation::into_schedule_request;
use crate::types::{RawRequest, ScheduleRequest, SolverConfig};
use std::fs;
use std::path::Path;

/// Load a scheduling request from a JSON file shaped
/// `{ "className": { "subject": { "sessions": n, "teachers": n } } }`.
pub fn load_request_from_file(path: &Path) -> Result<ScheduleRequest> {
    let raw: RawRequest = load_json_file(path)?;
    Ok(into_schedule_request(raw)?)
}

/// Load solver tunables from a TOML file, or fall back to defaults if the
/// file is absent or unreadable.
pub fn load_config_or_default(path: &Path) -> SolverConfig {
    if !path.exists() {
        return SolverConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => SolverConfig::default(),
    }
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SolverError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| {
        SolverError::JsonParse {
            file: path_str,
            message: e.to_string(),
        }
        .into()
    })
}
