use serde::{Deserialize, Serialize};

/// Shape of the weekly grid. Parameterised (not compile-time constants) so
/// tests can exercise small grids without touching solver code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_days")]
    pub days: u8,
    #[serde(default = "default_periods")]
    pub periods: u8,
}

fn default_days() -> u8 {
    5
}

fn default_periods() -> u8 {
    7
}

impl GridConfig {
    pub fn capacity(&self) -> u32 {
        self.days as u32 * self.periods as u32
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            periods: default_periods(),
        }
    }
}

/// Tunable knobs for the solver's heuristics, exposed here instead of
/// hardcoded so callers can adjust search effort without a code change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub grid: GridConfig,

    /// Max slots tried per backtracking call in the first pass.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Max slots tried per backtracking call in retry mode.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,

    /// Distribution gate fires only while fewer sessions than this remain.
    #[serde(default = "default_gate_sessions_threshold")]
    pub distribution_gate_sessions_threshold: u32,

    /// Distribution gate fires only when D would fall below this.
    #[serde(default = "default_gate_score_threshold")]
    pub distribution_gate_score_threshold: f64,

    /// Upper bound on outer sweeps the distribution optimizer performs.
    #[serde(default = "default_optimizer_max_sweeps")]
    pub optimizer_max_sweeps: u32,

    /// Evictions performed by the conflict resolver are capped at
    /// `min(eviction_multiplier * failed_count, eviction_cap)`.
    #[serde(default = "default_eviction_multiplier")]
    pub eviction_multiplier: u32,
    #[serde(default = "default_eviction_cap")]
    pub eviction_cap: u32,
}

fn default_max_attempts() -> u32 {
    200
}

fn default_retry_max_attempts() -> u32 {
    300
}

fn default_gate_sessions_threshold() -> u32 {
    5
}

fn default_gate_score_threshold() -> f64 {
    1.0
}

fn default_optimizer_max_sweeps() -> u32 {
    3
}

fn default_eviction_multiplier() -> u32 {
    2
}

fn default_eviction_cap() -> u32 {
    10
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            max_attempts: default_max_attempts(),
            retry_max_attempts: default_retry_max_attempts(),
            distribution_gate_sessions_threshold: default_gate_sessions_threshold(),
            distribution_gate_score_threshold: default_gate_score_threshold(),
            optimizer_max_sweeps: default_optimizer_max_sweeps(),
            eviction_multiplier: default_eviction_multiplier(),
            eviction_cap: default_eviction_cap(),
        }
    }
}
