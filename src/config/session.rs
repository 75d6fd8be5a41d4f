//! Session and profile resource files.
//!
//! A session file holds one resource assignment per line:
//!
//! ```text
//! ! comment
//! emu3270.hostname: mainframe.example.com
//! emu3270.model: 3279-4-E
//! emu3270.keymap.mine: <Key>F1: PF(1)\n\
//!     <Key>F2: PF(2)
//! ```
//!
//! Blank lines and lines starting with `!` or `#` are skipped; a trailing
//! backslash joins the next line.
use std::path::Path;

use crate::error::SessionError;
use crate::platform::Build;
use crate::resources::{Applied, ResourceStore};

use super::Configuration;

/// One logical line of a resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLine {
    /// 1-based number of the physical line the logical line starts on.
    pub line: usize,
    /// Text with continuations joined.
    pub text: String,
}

/// Split resource-file content into logical lines.
///
/// ```
/// use emu3270_config::config::session::parse_resource_lines;
///
/// let lines = parse_resource_lines("! c\n*model: 2\n*title: a\\\nb\n");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1].text, "*title: ab");
/// assert_eq!(lines[1].line, 3);
/// ```
#[must_use]
pub fn parse_resource_lines(content: &str) -> Vec<ResourceLine> {
    let mut lines = Vec::new();
    let mut pending: Option<ResourceLine> = None;

    for (idx, raw) in content.lines().enumerate() {
        let continued = ends_with_odd_backslashes(raw);
        let body = if continued {
            raw.strip_suffix('\\').unwrap_or(raw)
        } else {
            raw
        };

        let current = match pending.take() {
            Some(mut line) => {
                line.text.push_str(body);
                line
            }
            None => ResourceLine {
                line: idx + 1,
                text: body.trim_start().to_string(),
            },
        };

        if continued {
            pending = Some(current);
        } else {
            lines.push(current);
        }
    }
    lines.extend(pending);

    lines.retain(|l| !(l.text.is_empty() || l.text.starts_with('!') || l.text.starts_with('#')));
    lines
}

/// A trailing backslash continues the line only if it is not itself escaped.
fn ends_with_odd_backslashes(s: &str) -> bool {
    s.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Read the resource file at `path` and apply every line to `cfg`.
///
/// Returns the number of lines that were applied without a warning.
///
/// # Errors
///
/// Returns [`SessionError::Io`] if the file cannot be read.
pub fn read_resource_file(
    path: &Path,
    store: &ResourceStore<'_>,
    cfg: &mut Configuration,
) -> Result<usize, SessionError> {
    let content = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(apply_resource_str(&content, &path.display().to_string(), store, cfg))
}

/// Apply resource-file `content` to `cfg`, naming `origin` in warnings.
pub fn apply_resource_str(
    content: &str,
    origin: &str,
    store: &ResourceStore<'_>,
    cfg: &mut Configuration,
) -> usize {
    parse_resource_lines(content)
        .iter()
        .map(|l| store.apply_assignment(cfg, &l.text, &format!("{origin}:{}", l.line)))
        .filter(|a| *a != Applied::Rejected)
        .count()
}

/// Session file suffixes for a build: `.<app>`, plus `.<first 3 chars>` on
/// Windows.
#[must_use]
pub fn session_suffixes(build: &Build) -> Vec<String> {
    let mut suffixes = vec![format!(".{}", build.app)];
    if build.is_windows() {
        let short: String = build.app.chars().take(3).collect();
        let short = format!(".{short}");
        if !suffixes.contains(&short) {
            suffixes.push(short);
        }
    }
    suffixes
}

/// If `host` names a session file, return the length of the matched suffix.
///
/// The host must be longer than the suffix and end with it, ignoring ASCII
/// case.
#[must_use]
pub fn session_suffix_len(host: &str, build: &Build) -> Option<usize> {
    session_suffixes(build).into_iter().find_map(|suffix| {
        let split = host.len().checked_sub(suffix.len())?;
        (split > 0
            && host.is_char_boundary(split)
            && host.get(split..)?.eq_ignore_ascii_case(&suffix))
        .then_some(suffix.len())
    })
}

/// Derive the profile name from a session file path: the file name without
/// its directory and without the session suffix.
///
/// ```
/// use emu3270_config::config::session::profile_name;
///
/// assert_eq!(profile_name("/home/me/work.emu3270", 8), "work");
/// assert_eq!(profile_name(r"C:\s\work.emu3270", 8), "work");
/// ```
#[must_use]
pub fn profile_name(path: &str, suffix_len: usize) -> String {
    let stem = path.get(..path.len().saturating_sub(suffix_len)).unwrap_or(path);
    stem.rsplit(['/', '\\']).next().unwrap_or(stem).to_string()
}
