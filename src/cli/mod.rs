//! Command-line option dispatch.
//!
//! [`OptionTable::dispatch`] makes one pass over the tokens, applies every
//! option it recognises to the [`Configuration`], and returns the tokens it
//! did not consume in their original order.
pub mod options;

pub use options::{Info, OptionDescriptor, OptionKind, help_lines};

use crate::config::Configuration;
use crate::error::ResourceError;
use crate::logging::Log;
use crate::platform::Build;
use crate::resources::ResourceStore;

/// Applies command-line options for one build variant.
#[derive(Debug, Clone, Copy)]
pub struct OptionTable<'a> {
    build: &'a Build,
    store: ResourceStore<'a>,
}

impl<'a> OptionTable<'a> {
    /// Create the option table for `build`, reporting through `log`.
    #[must_use]
    pub const fn new(build: &'a Build, log: &'a dyn Log) -> Self {
        Self {
            build,
            store: ResourceStore::new(build, log),
        }
    }

    /// Apply the options in `tokens` to `cfg` and return the survivors.
    ///
    /// Missing or malformed option values are logged as warnings and the
    /// option is skipped. `on_info` is called for version and help requests;
    /// scanning continues afterwards.
    pub fn dispatch(
        &self,
        tokens: &[String],
        cfg: &mut Configuration,
        on_info: &mut dyn FnMut(Info),
    ) -> Vec<String> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut iter = tokens.iter();

        while let Some(token) = iter.next() {
            let Some(option) = options::lookup(token, self.build) else {
                out.push(token.clone());
                continue;
            };

            match option.kind {
                OptionKind::Boolean {
                    value,
                    resource,
                    target,
                } => {
                    *target(cfg) = value;
                    if let Some(name) = resource {
                        cfg.set_resource(name, if value { "True" } else { "False" });
                    }
                }
                OptionKind::String { resource, target } => {
                    let Some(value) = self.value_for(option.flag, iter.next()) else {
                        continue;
                    };
                    *target(cfg) = Some(value.clone());
                    cfg.set_resource(resource, value);
                }
                OptionKind::Integer { resource, target } => {
                    let Some(value) = self.value_for(option.flag, iter.next()) else {
                        continue;
                    };
                    match parse_decimal_prefix(value) {
                        Some(n) => {
                            *target(cfg) = n;
                            cfg.set_resource(resource, value);
                        }
                        None => self.store.warn(&ResourceError::InvalidOptionInteger {
                            flag: option.flag.to_string(),
                            value: value.clone(),
                        }),
                    }
                }
                OptionKind::Resource => {
                    if let Some(value) = self.value_for(option.flag, iter.next()) {
                        self.store.apply_assignment(cfg, value, option.flag);
                    }
                }
                OptionKind::Passthrough => {
                    out.push(token.clone());
                    out.extend(iter.next().cloned());
                }
                OptionKind::NoOp => {}
                OptionKind::ShowInfo(info) => on_info(info),
                OptionKind::Terminator => {
                    out.push(token.clone());
                    out.extend(iter.by_ref().cloned());
                }
            }
        }
        out
    }

    fn value_for<'t>(&self, flag: &str, next: Option<&'t String>) -> Option<&'t String> {
        if next.is_none() {
            self.store
                .warn(&ResourceError::MissingValue(flag.to_string()));
        }
        next
    }
}

/// Parse the leading decimal integer of `text` the way `atoi` does:
/// optional blanks and sign, then digits; anything after them is ignored.
/// Returns `None` if there are no digits or the value overflows.
fn parse_decimal_prefix(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ("-", s.get(1..)?),
        Some(b'+') => ("", s.get(1..)?),
        _ => ("", s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest.get(..end)?;
    if digits.is_empty() {
        return None;
    }
    format!("{sign}{digits}").parse().ok()
}
