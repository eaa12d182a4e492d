//! School Timetable Solver - multi-class weekly timetable backtracking solver
//!
//! This library assigns each session of each subject, for every class in a
//! school, to a (day, period) slot, sharing a pool of teachers per subject
//! across classes.
//!
//! # Algorithm Overview
//!
//! `solve` runs in five phases:
//! 1. **Teacher Allocation**: assign one teacher index per (class, subject)
//! 2. **Priority Ordering**: sequence (class, subject) tasks, most-constrained first
//! 3. **Backtracking**: place sessions for each pair in scored slot order
//! 4. **Distribution Optimization**: relocate placed sessions to spread them evenly
//! 5. **Conflict Resolution**: evict low-priority sessions to make room for failed pairs, then retry
//!
//! # Example
//!
//! ```no_run
//! use school_timetable_solver::parser::load_request_from_file;
//! use school_timetable_solver::solver::solve;
//! use school_timetable_solver::types::SolverConfig;
//! use std::path::Path;
//!
//! let request = load_request_from_file(Path::new("./data/demo/request.json")).unwrap();
//! let config = SolverConfig::default();
//! let result = solve(&request, |class, subject, _day, _period, idx| {
//!     format!("{}-{}-teacher-{}", class, subject, idx)
//! }, 42, &config);
//! println!("Warnings: {}", result.warnings.len());
//! ```

pub mod allocator;
pub mod error;
pub mod orderer;
pub mod parser;
pub mod reporter;
pub mod rng;
pub mod scorer;
pub mod solver;
pub mod types;
pub mod validator;

pub use error::{Result, SolverError};
