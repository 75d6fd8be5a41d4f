//! Layered configuration resolution for a 3270 terminal emulator.
//!
//! Settings come from three layers, later layers winning:
//!
//! - **[`config::defaults`]** for the build variant ([`platform::Build`])
//! - a session file named on the command line, or the user's profile
//!   ([`config::session`], parsed by [`resources`])
//! - the command line ([`cli`] options, `-set`/`-clear` toggles, `-xrm`)
//!
//! [`resolve::Resolver`] runs the layers in order and replays the command line
//! after a file is read so it always has the final word.
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod resolve;
pub mod resources;

/// Version string reported by `-v` and written to the trace file header.
pub const VERSION: &str = match option_env!("EMU3270_VERSION") {
    Some(v) => v,
    None => concat!("dev-", env!("CARGO_PKG_VERSION")),
};
