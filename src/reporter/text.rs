use crate::types::{SolveResult, Slot};
use colored::Colorize;

/// Colorized terminal rendering: one grid per class, empty cells dimmed.
pub fn generate_text_report(result: &SolveResult) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(60));
    lines.push("               TIMETABLE REPORT".to_string());
    lines.push("=".repeat(60));
    lines.push(String::new());

    lines.push(format!("Generated: {}", result.metadata.generated_at));
    lines.push(format!("Seed: {}", result.metadata.seed));
    lines.push(format!("Solve time: {}ms", result.metadata.solve_time_ms));
    lines.push(format!("Evictions performed: {}", result.metadata.evictions_performed));
    lines.push(String::new());

    if result.warnings.is_empty() {
        lines.push("VALIDATION: no unplaced sessions".green().to_string());
    } else {
        lines.push("VALIDATION: sessions left unplaced".red().to_string());
        for warning in &result.warnings {
            lines.push(format!("  ! {}", warning));
        }
    }
    lines.push(String::new());

    let mut classes: Vec<_> = result.classes.keys().collect();
    classes.sort();

    for class in classes {
        let timetable = &result.classes[class];
        lines.push(format!("{}", class.to_string().bold()));
        lines.push("-".repeat(40));

        for (d, row) in timetable.grid.iter().enumerate() {
            let day_name = Slot::new(d as u8, 0).day_name();
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(subject) => subject.to_string().cyan().to_string(),
                    None => "-".dimmed().to_string(),
                })
                .collect();
            lines.push(format!("  {:<10} {}", day_name, cells.join(" | ")));
        }
        lines.push(String::new());
    }

    lines.push("=".repeat(60));
    lines.join("\n")
}

/// Print a quick summary to stdout.
pub fn print_summary(result: &SolveResult) {
    println!();
    if result.warnings.is_empty() {
        println!("{}", "✓ Timetable generated successfully".green().bold());
    } else {
        println!("{}", "✗ Some sessions were left unplaced".red().bold());
        for warning in &result.warnings {
            println!("  {} {}", "Warning:".yellow(), warning);
        }
    }
    println!();
    println!("  Classes:    {}", result.classes.len());
    println!("  Evictions:  {}", result.metadata.evictions_performed);
    println!("  Time:       {}ms", result.metadata.solve_time_ms);
    println!();
}
