use serde::{Deserialize, Serialize};

/// A (day, period) coordinate in the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Day of week, 0-indexed.
    pub day: u8,
    /// Period within the day, 0-indexed.
    pub period: u8,
}

impl Slot {
    pub fn new(day: u8, period: u8) -> Self {
        Self { day, period }
    }

    /// Convert to a linear index within a grid of the given shape.
    pub fn to_linear(&self, config: &super::GridConfig) -> usize {
        (self.day as usize) * (config.periods as usize) + (self.period as usize)
    }

    /// Human-readable day name, falling back to a numeric label past Friday
    /// (larger `GridConfig::days` values are used in tests only).
    pub fn day_name(&self) -> String {
        match self.day {
            0 => "Monday".to_string(),
            1 => "Tuesday".to_string(),
            2 => "Wednesday".to_string(),
            3 => "Thursday".to_string(),
            4 => "Friday".to_string(),
            5 => "Saturday".to_string(),
            6 => "Sunday".to_string(),
            n => format!("Day {}", n + 1),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}P{}", self.day + 1, self.period + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridConfig;

    #[test]
    fn linear_index_is_row_major() {
        let config = GridConfig { days: 5, periods: 7 };
        assert_eq!(Slot::new(0, 0).to_linear(&config), 0);
        assert_eq!(Slot::new(1, 0).to_linear(&config), 7);
        assert_eq!(Slot::new(0, 6).to_linear(&config), 6);
    }
}
