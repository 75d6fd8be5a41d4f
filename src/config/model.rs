//! The 3270 model identifier and the screen geometry derived from it.
use serde::Serialize;

use super::Configuration;
use crate::error::ModelError;
use crate::logging::Log;
use crate::platform::Build;

/// A parsed model identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec {
    /// Model number 2 to 5, or `None` for the build default.
    pub number: Option<u8>,
    /// `Some(true)` for a `3279` prefix, `Some(false)` for `3278`.
    pub color: Option<bool>,
}

/// Parse a model identifier.
///
/// Accepted forms: empty (default model); a single digit `2`–`5`; or a
/// `3278`/`3279` prefix followed by nothing, `-n`, or `-n-E` (the `-E` is
/// accepted in any case and ignored).
///
/// ```
/// use emu3270_config::config::model::parse_model_number;
///
/// let spec = parse_model_number("3279-3").unwrap();
/// assert_eq!(spec.number, Some(3));
/// assert_eq!(spec.color, Some(true));
/// assert!(parse_model_number("327").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ModelError::Malformed`] for anything else.
pub fn parse_model_number(m: &str) -> Result<ModelSpec, ModelError> {
    let malformed = || ModelError::Malformed(m.to_string());
    let digit = |c: u8| (b'2'..=b'5').contains(&c).then(|| c - b'0');

    match m.as_bytes() {
        [] => Ok(ModelSpec {
            number: None,
            color: None,
        }),
        [c] => digit(*c)
            .map(|n| ModelSpec {
                number: Some(n),
                color: None,
            })
            .ok_or_else(malformed),
        [b'3', b'2', b'7', family @ (b'8' | b'9'), rest @ ..] => {
            let color = Some(*family == b'9');
            let number = match rest {
                [] => None,
                [b'-', n] => Some(digit(*n).ok_or_else(malformed)?),
                [b'-', n, b'-', e] if e.eq_ignore_ascii_case(&b'e') => {
                    Some(digit(*n).ok_or_else(malformed)?)
                }
                _ => return Err(malformed()),
            };
            Ok(ModelSpec { number, color })
        }
        _ => Err(malformed()),
    }
}

/// Map a model identifier to its numeric code: the model number 2–5, `0`
/// for "use the default", or `-1` for a malformed identifier.
///
/// ```
/// use emu3270_config::config::model::model_code;
///
/// assert_eq!(model_code("4"), 4);
/// assert_eq!(model_code(""), 0);
/// assert_eq!(model_code("6"), -1);
/// ```
#[must_use]
pub fn model_code(m: &str) -> i32 {
    match parse_model_number(m) {
        Ok(ModelSpec {
            number: Some(n), ..
        }) => i32::from(n),
        Ok(_) => 0,
        Err(_) => -1,
    }
}

/// Extra rows/columns beyond the model's standard geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Oversize {
    /// Fill the terminal window.
    Auto,
    /// Exact dimensions.
    Fixed {
        /// Columns.
        cols: u16,
        /// Rows.
        rows: u16,
    },
}

/// The screen geometry and terminal type derived from a resolved
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenModel {
    /// Model number 2–5.
    pub number: u8,
    /// 3279 (color) display.
    pub color: bool,
    /// Extended data stream.
    pub extended: bool,
    /// Standard rows for the model.
    pub rows: u16,
    /// Standard columns for the model.
    pub cols: u16,
    /// Accepted oversize, if any.
    pub oversize: Option<Oversize>,
    /// Terminal type sent to the host.
    pub termtype: String,
}

/// Maximum buffer size addressable with 14-bit addresses.
const MAX_BUFFER: u32 = 0x4000;

impl ScreenModel {
    /// Derive the screen model from `cfg`.
    ///
    /// Writes back the model color (`m3279`) and clears `oversize` when
    /// extended mode is off, so later readers see the effective values.
    /// Problems are logged as warnings and the safe default is used.
    pub fn init(cfg: &mut Configuration, build: &Build, log: &dyn Log) -> Self {
        let model = cfg.model.as_deref().unwrap_or_default();
        let spec = parse_model_number(model).unwrap_or_else(|e| {
            log.warn(&e.to_string());
            ModelSpec {
                number: None,
                color: None,
            }
        });
        let number = spec.number.unwrap_or(4);
        if let Some(color) = spec.color {
            cfg.m3279 = color;
        }
        if build.is_interactive() && !build.is_windows() && cfg.interactive.mono {
            cfg.m3279 = false;
        }
        if !cfg.extended {
            cfg.oversize = None;
        }

        let (rows, cols) = match number {
            2 => (24, 80),
            3 => (32, 80),
            5 => (27, 132),
            _ => (43, 80),
        };

        let oversize = cfg
            .oversize
            .as_deref()
            .and_then(|o| parse_oversize(o, build, log))
            .filter(|o| check_oversize(*o, rows, cols, log));

        let termtype = cfg.termname.clone().unwrap_or_else(|| {
            format!(
                "IBM-327{}-{number}{}",
                if cfg.m3279 { '9' } else { '8' },
                if cfg.extended { "-E" } else { "" }
            )
        });

        Self {
            number,
            color: cfg.m3279,
            extended: cfg.extended,
            rows,
            cols,
            oversize,
            termtype,
        }
    }
}

/// Parse `<cols>x<rows>`, or `auto` on interactive builds.
fn parse_oversize(text: &str, build: &Build, log: &dyn Log) -> Option<Oversize> {
    if build.is_interactive() && text.eq_ignore_ascii_case("auto") {
        return Some(Oversize::Auto);
    }
    let parsed = text
        .split_once('x')
        .and_then(|(c, r)| Some((c.parse::<u16>().ok()?, r.parse::<u16>().ok()?)));
    if parsed.is_none() {
        log.warn(&format!("Invalid oversize syntax: {text}"));
    }
    parsed.map(|(cols, rows)| Oversize::Fixed { cols, rows })
}

fn check_oversize(oversize: Oversize, rows: u16, cols: u16, log: &dyn Log) -> bool {
    let Oversize::Fixed {
        cols: ov_cols,
        rows: ov_rows,
    } = oversize
    else {
        return true;
    };
    if ov_cols < cols || ov_rows < rows {
        log.warn(&format!(
            "Oversize {ov_cols}x{ov_rows} is smaller than the model ({cols}x{rows}), ignoring"
        ));
        return false;
    }
    if u32::from(ov_cols) * u32::from(ov_rows) >= MAX_BUFFER {
        log.warn(&format!("Oversize {ov_cols}x{ov_rows} is too large, ignoring"));
        return false;
    }
    true
}
