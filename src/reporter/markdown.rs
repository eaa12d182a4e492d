use crate::types::{SolveResult, Slot};

/// Render every class's grid as a Markdown table, one table per class in
/// sorted class-name order for stable output.
pub fn generate_markdown_report(result: &SolveResult) -> String {
    let mut lines = vec![
        "# Timetable".to_string(),
        String::new(),
        format!("Generated: {}", result.metadata.generated_at),
        format!("Algorithm: v{}", result.metadata.algorithm_version),
        format!("Seed: {}", result.metadata.seed),
        format!("Solve time: {}ms", result.metadata.solve_time_ms),
        format!("Evictions performed: {}", result.metadata.evictions_performed),
        String::new(),
    ];

    if result.warnings.is_empty() {
        lines.push("## Warnings: none\n".to_string());
    } else {
        lines.push("## Warnings\n".to_string());
        for warning in &result.warnings {
            lines.push(format!("- {}", warning));
        }
        lines.push(String::new());
    }

    let mut classes: Vec<_> = result.classes.keys().collect();
    classes.sort();

    for class in classes {
        let timetable = &result.classes[class];
        lines.push(format!("## {}\n", class));

        let periods = timetable.grid.first().map(|row| row.len()).unwrap_or(0);
        let header: Vec<String> = (1..=periods).map(|p| format!("P{p}")).collect();
        lines.push(format!("| Day | {} |", header.join(" | ")));
        lines.push(format!("|-----|{}", "---|".repeat(periods)));

        for (d, row) in timetable.grid.iter().enumerate() {
            let day_name = Slot::new(d as u8, 0).day_name();
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.as_ref().map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()))
                .collect();
            lines.push(format!("| {} | {} |", day_name, cells.join(" | ")));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassName, ClassTimetable, GridConfig, SolveMetadata};
    use std::collections::HashMap;

    #[test]
    fn renders_one_table_per_class() {
        let config = GridConfig { days: 1, periods: 1 };
        let mut classes = HashMap::new();
        classes.insert(ClassName::from("A"), ClassTimetable::empty(&config));

        let result = SolveResult {
            classes,
            warnings: vec![],
            metadata: SolveMetadata {
                generated_at: "now".to_string(),
                algorithm_version: "0.1.0".to_string(),
                seed: 1,
                solve_time_ms: 0,
                evictions_performed: 0,
            },
        };

        let rendered = generate_markdown_report(&result);
        assert!(rendered.contains("## A"));
        assert!(rendered.contains("Warnings: none"));
    }
}
