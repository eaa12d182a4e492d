use thiserror::Error;

/// Domain-specific errors for the timetable solver.
#[derive(Error, Debug)]
pub enum SolverError {
    // Input/parse errors (CLI boundary)
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("Failed to parse config '{file}': {message}")]
    ConfigParse { file: String, message: String },

    // Request validation errors
    #[error("Class name must be non-empty")]
    EmptyClassName,

    #[error("Subject name must be non-empty for class '{class}'")]
    EmptySubjectName { class: String },

    #[error("Class '{class}' subject '{subject}' requests {sessions} sessions but the grid only has {capacity} slots")]
    SessionsExceedCapacity {
        class: String,
        subject: String,
        sessions: u32,
        capacity: u32,
    },

    #[error("Class '{class}' subject '{subject}' has sessions={sessions} but teachers=0")]
    NoTeachersForSessions { class: String, subject: String, sessions: u32 },

    #[error("Class '{class}' subject '{subject}' declares teachers={declared}, but needs at least {required} to satisfy its own assignment")]
    InsufficientTeacherPool {
        class: String,
        subject: String,
        declared: u32,
        required: u32,
    },

    // Solver-internal
    #[error("No feasible schedule for class '{class}' subject '{subject}': placed {placed}/{needed}")]
    Infeasible {
        class: String,
        subject: String,
        placed: u32,
        needed: u32,
    },

    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

/// Use anyhow::Result at application boundaries (CLI, parser); solver-internal
/// code that callers need to match on returns `Result<T, SolverError>` directly.
pub type Result<T> = anyhow::Result<T>;
