//! Named resources: lookup, typed assignment, and the `name: value` syntax.
//!
//! A resource assignment comes from a session file line or an `-xrm`
//! argument. Names resolve in three tiers:
//!
//! 1. the static table in [`registry`] (typed fields),
//! 2. the toggles supported by the build,
//! 3. on interactive builds, the [`explicit`] families.
//!
//! Bad values and unknown names are warnings, never errors.
pub mod escape;
pub mod explicit;
pub mod registry;

pub use registry::name_matches;

use crate::config::Configuration;
use crate::config::toggles::{Toggle, ToggleRegistry};
use crate::error::ResourceError;
use crate::logging::Log;
use crate::platform::Build;

use registry::Slot;

/// Outcome of a single assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A typed configuration field was written.
    Field,
    /// A toggle was written.
    Toggle(Toggle),
    /// A new named resource was recorded.
    Explicit,
    /// A warning was logged. An invalid boolean still sets the field false.
    Rejected,
}

/// Applies resource assignments to a [`Configuration`].
#[derive(Clone, Copy)]
pub struct ResourceStore<'a> {
    build: &'a Build,
    log: &'a dyn Log,
}

impl std::fmt::Debug for ResourceStore<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("build", self.build)
            .finish_non_exhaustive()
    }
}

impl<'a> ResourceStore<'a> {
    /// Create a store for `build` that reports rejected values to `log`.
    #[must_use]
    pub const fn new(build: &'a Build, log: &'a dyn Log) -> Self {
        Self { build, log }
    }

    /// Apply a full `<app>.<name>: <value>` assignment.
    ///
    /// `source` names where the text came from (`-xrm`, `file:line`) and
    /// prefixes any warning.
    pub fn apply_assignment(&self, cfg: &mut Configuration, text: &str, source: &str) -> Applied {
        match split_assignment(&self.build.app, text) {
            Ok((name, value)) => self.apply(cfg, name, value, source),
            Err(e) => {
                self.log.warn(&format!("{source}: {e}"));
                Applied::Rejected
            }
        }
    }

    /// Apply `value` to the resource `name`.
    pub fn apply(&self, cfg: &mut Configuration, name: &str, value: &str, source: &str) -> Applied {
        match self.assign(cfg, name, value) {
            Ok(applied) => {
                self.log
                    .debug(&format!("{source}: {name} = {}", escape::encode(value)));
                applied
            }
            Err(e) => {
                self.log.warn(&format!("{source}: {e}"));
                Applied::Rejected
            }
        }
    }

    /// Log a non-fatal resource problem.
    pub fn warn(&self, err: &ResourceError) {
        self.log.warn(&err.to_string());
    }

    fn assign(
        &self,
        cfg: &mut Configuration,
        name: &str,
        value: &str,
    ) -> Result<Applied, ResourceError> {
        if let Some(descriptor) = registry::lookup(name, self.build) {
            match descriptor.slot {
                Slot::Bool(field) => assign_bool(field(cfg), value)?,
                Slot::Int(field) => {
                    *field(cfg) = parse_c_integer(value)
                        .ok_or_else(|| ResourceError::InvalidInteger(value.to_string()))?;
                }
                Slot::Str(field) => {
                    *field(cfg) = Some(escape::decode_resource(name, value, self.build));
                }
            }
            return Ok(Applied::Field);
        }

        if let Some(toggle) = ToggleRegistry::new(self.build).lookup_resource(name) {
            assign_bool(&mut cfg.toggles[toggle], value)?;
            return Ok(Applied::Toggle(toggle));
        }

        if explicit::is_explicit(name, self.build) {
            let decoded = escape::decode_resource(name, value, self.build);
            cfg.set_resource(name, &decoded);
            return Ok(Applied::Explicit);
        }

        Err(ResourceError::UnknownResource(name.to_string()))
    }
}

/// Set `field` from a boolean spelling; an invalid spelling sets it false.
fn assign_bool(field: &mut bool, value: &str) -> Result<(), ResourceError> {
    match parse_boolean(value) {
        Some(b) => {
            *field = b;
            Ok(())
        }
        None => {
            *field = false;
            Err(ResourceError::InvalidBoolean(value.to_string()))
        }
    }
}

/// Parse a boolean resource value: `true`, `t` or `1` and `false`, `f` or
/// `0`, ignoring ASCII case.
#[must_use]
pub fn parse_boolean(value: &str) -> Option<bool> {
    if ["true", "t", "1"].iter().any(|s| value.eq_ignore_ascii_case(s)) {
        Some(true)
    } else if ["false", "f", "0"].iter().any(|s| value.eq_ignore_ascii_case(s)) {
        Some(false)
    } else {
        None
    }
}

/// Parse an integer the way C's `strtol` does with base 0, requiring the
/// whole string to be consumed: optional leading whitespace and sign, then
/// `0x` hex, `0` octal, or decimal digits.
///
/// The empty string is 0, since `strtol` consumes nothing and stops at the
/// terminator. Blank or sign-only text is still rejected.
///
/// ```
/// use emu3270_config::resources::parse_c_integer;
///
/// assert_eq!(parse_c_integer("350"), Some(350));
/// assert_eq!(parse_c_integer("0x10"), Some(16));
/// assert_eq!(parse_c_integer("010"), Some(8));
/// assert_eq!(parse_c_integer("12abc"), None);
/// assert_eq!(parse_c_integer(""), Some(0));
/// ```
#[must_use]
pub fn parse_c_integer(text: &str) -> Option<i32> {
    if text.is_empty() {
        return Some(0);
    }
    let s = text.trim_start();
    let (negative, s) = s
        .strip_prefix('-')
        .map_or_else(|| (false, s.strip_prefix('+').unwrap_or(s)), |r| (true, r));
    let (radix, digits) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, hex)
    } else if s.len() > 1
        && let Some(oct) = s.strip_prefix('0')
    {
        (8, oct)
    } else {
        (10, s)
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Split `<app>.<name>: <value>`, `<app>*<name>: <value>` or
/// `*<name>: <value>` into name and value.
///
/// Leading blanks of the value are skipped; the rest is kept verbatim.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidSyntax`] if the prefix, name or `:` is
/// missing.
pub fn split_assignment<'t>(app: &str, text: &'t str) -> Result<(&'t str, &'t str), ResourceError> {
    let invalid = |reason| ResourceError::InvalidSyntax {
        text: text.to_string(),
        reason,
    };
    let s = text.trim_start();
    let rest = s
        .strip_prefix(app)
        .and_then(|r| r.strip_prefix(['.', '*']))
        .or_else(|| s.strip_prefix('*'))
        .ok_or_else(|| invalid("name must begin with the application name or '*'"))?;
    let (name, value) = rest.split_once(':').ok_or_else(|| invalid("missing ':'"))?;
    let name = name.trim_end();
    if name.is_empty() {
        return Err(invalid("empty resource name"));
    }
    if name.contains(char::is_whitespace) {
        return Err(invalid("white space in resource name"));
    }
    Ok((name, value.trim_start_matches([' ', '\t'])))
}
