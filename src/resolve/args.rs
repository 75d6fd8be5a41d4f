//! Pure transforms over the argument list used by the resolver.
use crate::error::UsageError;

/// The flag that starts a local command.
pub const LOCAL_PROCESS_FLAG: &str = "-e";

/// Terminates option and positional processing.
pub const TERMINATOR: &str = "--";

/// The file name part of `argv0`, splitting on `/` and `\`.
#[must_use]
pub fn program_name(argv0: &str) -> &str {
    argv0.rsplit(['/', '\\']).next().unwrap_or(argv0)
}

/// The command line as one string for diagnostics: the program name
/// followed by every argument.
#[must_use]
pub fn command_line(program: &str, tokens: &[String]) -> String {
    std::iter::once(program)
        .chain(tokens.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split off the first `-e` and everything after it.
///
/// Returns the tokens before `-e` and, if it was present, the removed tokens
/// joined with single spaces (`"-e cmd arg..."`).
#[must_use]
pub fn split_local_command(mut tokens: Vec<String>) -> (Vec<String>, Option<String>) {
    match tokens.iter().position(|t| t == LOCAL_PROCESS_FLAG) {
        Some(at) => {
            let command = tokens.split_off(at).join(" ");
            (tokens, Some(command))
        }
        None => (tokens, None),
    }
}

/// Host given on the command line, and the tokens left for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positionals {
    /// `host`, or `host:port` when two positionals were given.
    pub host: Option<String>,
    /// Tokens after `--`.
    pub rest: Vec<String>,
}

/// Interpret the tokens before the first `--` as `[host [port]]`.
///
/// The positionals and the `--` are removed; tokens after `--` are kept.
///
/// # Errors
///
/// Returns [`UsageError::UnknownOption`] if a positional begins with `-`,
/// or [`UsageError::TooManyArguments`] for three or more positionals.
pub fn take_positionals(mut tokens: Vec<String>) -> Result<Positionals, UsageError> {
    let end = tokens
        .iter()
        .position(|t| t == TERMINATOR)
        .unwrap_or(tokens.len());
    let rest = tokens.split_off((end + 1).min(tokens.len()));
    tokens.truncate(end);

    let host = match tokens.as_slice() {
        [] => None,
        [host] => Some(no_minus(host)?.to_string()),
        [host, port] => Some(format!("{}:{}", no_minus(host)?, no_minus(port)?)),
        _ => return Err(UsageError::TooManyArguments),
    };
    Ok(Positionals { host, rest })
}

fn no_minus(token: &str) -> Result<&str, UsageError> {
    if token.starts_with('-') {
        Err(UsageError::UnknownOption(token.to_string()))
    } else {
        Ok(token)
    }
}
