//! Unified error types for actionlog.
//!
//! Every validation failure is synchronous and fatal to the current call:
//! a malformed configuration or malformed call-time input aborts the single
//! invocation with a descriptive error, and construction never returns a
//! partially-built action.

use thiserror::Error;

/// The phase of a temporal action a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The opening half of a start/stop pair.
    Start,
    /// The closing half of a start/stop pair.
    Stop,
}

impl Phase {
    /// The type prefix this phase contributes to the action type.
    pub fn type_prefix(&self) -> &'static str {
        match self {
            Phase::Start => "START_",
            Phase::Stop => "STOP_",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Start => write!(f, "start"),
            Phase::Stop => write!(f, "stop"),
        }
    }
}

/// All actionlog errors.
///
/// This is the canonical error type for all actionlog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Action type is empty or contains a space
    #[error("type must be a string with no spaces, got {0:?}")]
    InvalidType(String),

    /// Argument name violates the naming rules
    #[error(
        "argument name {name:?} contains illegal characters: never start with '$', \
         do not include spaces, and '?' may only appear as the final character, \
         used to denote an optional argument"
    )]
    IllegalArgName {
        /// The offending argument name, as supplied
        name: String,
    },

    /// Temporal key also listed among the start or stop arguments
    #[error("temporal key {key:?} must not be listed in the {phase} arguments")]
    KeyCollision {
        /// The configured key field
        key: String,
        /// Which argument list contains the key
        phase: Phase,
    },

    /// Required detail fields absent at build time
    #[error("you must provide all required arguments; no values provided for: {}", .0.join("|"))]
    MissingArguments(Vec<String>),

    /// Temporal details absent although the argument list is non-empty
    #[error("{phase} details must be provided")]
    DetailsRequired {
        /// Which builder was called without details
        phase: Phase,
    },
}

/// Result type for actionlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a configuration-time error (bad type tag, bad
    /// argument name, key collision) as opposed to a build-time one.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidType(_) | Error::IllegalArgName { .. } | Error::KeyCollision { .. }
        )
    }

    /// Check if this error names missing required arguments.
    pub fn is_missing_arguments(&self) -> bool {
        matches!(self, Error::MissingArguments(_))
    }
}
