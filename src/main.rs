use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use school_timetable_solver::parser::{load_config_or_default, load_request_from_file};
use school_timetable_solver::reporter::{generate_reports, print_summary, OutputFormat};
use school_timetable_solver::solver::solve;
use school_timetable_solver::types::{ClassName, ScheduleRequest, SolveResult, SolverConfig, SubjectName, SubjectRequirement};
use school_timetable_solver::validator::validate_result;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "school-timetable-solver")]
#[command(about = "Backtracking constraint solver for multi-class weekly school timetables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a request file and write rendered timetables
    Solve {
        /// Path to the request JSON file
        #[arg(short, long)]
        request: PathBuf,

        /// Optional solver.toml beside the request file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for rendered timetables
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all
        #[arg(short, long, default_value = "all")]
        format: String,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Suppress progress output, print a JSON summary only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Solve a small synthesized sample request and print it
    Demo {
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Re-check a previously produced result file against the testable properties
    Validate {
        /// Path to the original request JSON file
        #[arg(short, long)]
        request: PathBuf,

        /// Path to a timetable.json produced by `solve --format json`
        #[arg(long)]
        result: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { request, config, output, format, seed, quiet } => {
            run_solve(&request, config.as_deref(), &output, &format, seed, quiet)
        }
        Commands::Demo { seed } => run_demo(seed),
        Commands::Validate { request, result } => run_validate(&request, &result),
    }
}

fn teacher_label(class: &ClassName, subject: &SubjectName, _day: u8, _period: u8, teacher_idx: u32) -> String {
    format!("{}-{}-teacher-{}", class, subject, teacher_idx)
}

fn run_solve(request_path: &PathBuf, config_path: Option<&std::path::Path>, output: &PathBuf, format: &str, seed: u64, quiet: bool) -> Result<()> {
    let request = load_request_from_file(request_path).context("failed to load request")?;
    let config = match config_path {
        Some(path) => load_config_or_default(path),
        None => {
            let sibling = request_path.with_file_name("solver.toml");
            load_config_or_default(&sibling)
        }
    };

    if !quiet {
        println!("Loaded {} classes", request.class_names().count());
    }

    let result = solve(&request, teacher_label, seed, &config);

    if quiet {
        println!("{}", school_timetable_solver::reporter::generate_json_summary(&result)?);
    } else {
        print_summary(&result);
    }

    let formats = parse_formats(format);
    generate_reports(&result, output, &formats)?;

    if !quiet {
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(())
}

fn run_demo(seed: u64) -> Result<()> {
    println!("{}", "School Timetable Solver Demo".bold().cyan());
    println!("{}", "-".repeat(40));

    let request = demo_request();
    let config = SolverConfig::default();

    println!(
        "Solving {} classes with {} subjects each...\n",
        request.class_names().count(),
        request.classes.values().next().map(|s| s.len()).unwrap_or(0)
    );

    let result = solve(&request, teacher_label, seed, &config);
    print_summary(&result);
    println!("{}", school_timetable_solver::reporter::generate_text_report(&result));

    Ok(())
}

fn run_validate(request_path: &PathBuf, result_path: &PathBuf) -> Result<()> {
    let request = load_request_from_file(request_path).context("failed to load request")?;

    let result_json = std::fs::read_to_string(result_path).context("failed to read result file")?;
    let result: SolveResult = serde_json::from_str(&result_json).context("failed to parse result file")?;

    let report = validate_result(&request, &result);

    if report.is_valid() {
        println!("{}", "✓ Result satisfies all checkable properties".green().bold());
    } else {
        println!("{}", "✗ Result violates the following properties".red().bold());
        for violation in &report.violations {
            println!("  - {}", violation);
        }
    }

    Ok(())
}

fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format == "all" {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }

    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}

fn demo_request() -> ScheduleRequest {
    let mut classes = HashMap::new();

    for class_name in ["10A", "10B"] {
        let mut subjects = HashMap::new();
        subjects.insert("Math".to_string(), SubjectRequirement { sessions: 6, teachers: 1 });
        subjects.insert("English".to_string(), SubjectRequirement { sessions: 5, teachers: 2 });
        subjects.insert("Science".to_string(), SubjectRequirement { sessions: 4, teachers: 1 });
        subjects.insert("Art".to_string(), SubjectRequirement { sessions: 2, teachers: 1 });

        let typed: HashMap<_, _> = subjects
            .into_iter()
            .map(|(k, v)| (SubjectName::from(k.as_str()), v))
            .collect();
        classes.insert(ClassName::from(class_name), typed);
    }

    ScheduleRequest { classes }
}
