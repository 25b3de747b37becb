use thiserror::Error;

/// Failure conditions surfaced by constructor resolution.
///
/// Both conditions are unrecoverable for the failing call and propagate
/// synchronously to the caller: no retry, no default substitution, no
/// partially wired instance. A failure indicates a configuration or ordering
/// bug in the caller, not a transient condition.
#[derive(Debug, Error)]
pub enum InjectionError {
    /// A required declared type has no matching registered value.
    #[error("UNRESOLVED DEPENDENCY: {target}.{parameter} - no value registered for type {missing}")]
    UnresolvedDependency {
        target: String,
        parameter: String,
        missing: String,
    },

    /// The target's declared constructor shape is unusable: an untyped or
    /// non-concrete parameter, a duplicate parameter name, or a signature
    /// that does not match what the constructor actually consumes.
    #[error("MALFORMED CONSTRUCTOR: {target} - {message}")]
    MalformedConstructor { target: String, message: String },
}

/// **RESOLUTION ERROR CODES**
///
/// Stable machine-readable identifiers for each condition.
pub mod error_codes {
    pub const UNRESOLVED_DEPENDENCY: &str = "RUST_CORE_RESOLVE_UNRESOLVED_DEPENDENCY";
    pub const MALFORMED_CONSTRUCTOR: &str = "RUST_CORE_RESOLVE_MALFORMED_CONSTRUCTOR";
}

impl InjectionError {
    /// Stable code string for the condition.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnresolvedDependency { .. } => error_codes::UNRESOLVED_DEPENDENCY,
            Self::MalformedConstructor { .. } => error_codes::MALFORMED_CONSTRUCTOR,
        }
    }
}
