//! Error types for the to-do board.

use thiserror::Error;

/// Contract violations raised by [`TodoStore`](crate::todos::TodoStore).
///
/// These never come from user input: the view only hands out positions it has
/// just enumerated. Seeing one means the wiring between view and store is wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// A position-based operation named an item that does not exist
    #[error("position {position} is out of range for a list of {len} items")]
    PositionOutOfRange {
        /// Requested position
        position: usize,
        /// List length at the time of the request
        len: usize,
    },

    /// An edit operation was issued while no edit session is open
    #[error("no edit session is active")]
    NoActiveEdit,
}

/// Invalid configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A boolean variable held something other than a recognised boolean
    #[error("{key} must be a boolean (true/false/1/0/yes/no), got `{value}`")]
    InvalidBool {
        /// Environment variable name
        key: &'static str,
        /// Offending value
        value: String,
    },

    /// The timestamp format string contains an invalid specifier
    #[error("{key} is not a valid chrono format string: `{value}`")]
    InvalidTimeFormat {
        /// Environment variable name
        key: &'static str,
        /// Offending value
        value: String,
    },
}
