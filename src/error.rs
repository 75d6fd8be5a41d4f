//! Domain-specific error types for configuration resolution.
//!
//! Fatal conditions are collected under [`EmuError`] and propagate to the
//! binary, which logs them and exits non-zero.
//! Recoverable conditions ([`ResourceError`], [`ModelError`]) never propagate:
//! they are rendered into a warning on the diagnostic sink and a safe
//! fallback is used.
//!
//! # Error hierarchy
//!
//! ```text
//! EmuError (fatal)
//! ├── Usage(UsageError)     - positional grammar violations
//! ├── Toggle(ToggleError)   - -set/-clear with an unknown name
//! └── Session(SessionError) - session file could not be read
//!
//! ResourceError (warning)   - bad values, unknown names, missing values
//! ModelError (warning)      - malformed model identifier
//! ```

use thiserror::Error;

/// Fatal error that aborts configuration resolution.
#[derive(Error, Debug)]
pub enum EmuError {
    /// The command line does not follow `[options] [host [port]]`.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A `-set`/`-clear` named a toggle this build does not have.
    #[error(transparent)]
    Toggle(#[from] ToggleError),

    /// The session file named on the command line could not be loaded.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl EmuError {
    /// Whether the usage summary should be printed after the message.
    #[must_use]
    pub const fn wants_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Violations of the positional argument grammar.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    /// More than two positional arguments before `--`.
    #[error("Too many command-line arguments")]
    TooManyArguments,

    /// A positional argument that looks like an option.
    #[error("Unknown or incomplete option: {0}")]
    UnknownOption(String),
}

/// Errors from the toggle pass.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ToggleError {
    /// The name matched no supported toggle.
    #[error("Unknown toggle name '{name}'. Toggle names are:\n{}", list_names(.available))]
    Unknown {
        /// Name as given on the command line.
        name: String,
        /// Sorted, alias-free names this build supports.
        available: Vec<String>,
    },
}

fn list_names(names: &[String]) -> String {
    names.iter().map(|n| format!(" {n}")).collect()
}

/// Errors that arise while loading a session file.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The file could not be read.
    #[error("Cannot open {path}: {source}")]
    Io {
        /// Path of the session file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Recoverable problems with a single resource or option value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// No static resource, toggle or explicit family matches the name.
    #[error("Unknown resource name: {0}")]
    UnknownResource(String),

    /// A boolean resource value outside `true|t|1|false|f|0`.
    #[error("Invalid Boolean value: {0}")]
    InvalidBoolean(String),

    /// An integer resource value that is not a complete C-style integer.
    #[error("Invalid Integer value: {0}")]
    InvalidInteger(String),

    /// An integer option whose value has no leading digits.
    #[error("Invalid integer value for '{flag}': {value}")]
    InvalidOptionInteger {
        /// The option flag.
        flag: String,
        /// The rejected value.
        value: String,
    },

    /// A string/integer option at the end of the command line.
    #[error("Missing value for '{0}'")]
    MissingValue(String),

    /// An `-xrm` or file line that is not `<app>.<name>: <value>`.
    #[error("Invalid resource syntax '{text}': {reason}")]
    InvalidSyntax {
        /// The offending text.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// A model identifier outside the grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The identifier could not be parsed.
    #[error("Invalid model number: {0}")]
    Malformed(String),
}
