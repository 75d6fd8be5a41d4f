//! Escape grammar for string resource values.
//!
//! Values in session files and `-xrm` arguments may carry C-style escapes:
//! `\b \f \n \r \t` become the control character, `\\` becomes a backslash,
//! and a backslash before any other character is dropped. A lone trailing
//! backslash is dropped as well. [`encode`] is the display inverse.

use crate::platform::Build;

use super::name_matches;

/// The one resource whose legacy unescaped UNC values are stored verbatim.
pub const LEGACY_UNC_RESOURCE: &str = "printer.name";

/// Decode the escape sequences in `raw`.
///
/// ```
/// use emu3270_config::resources::escape::decode;
///
/// assert_eq!(decode(r"a\tb"), "a\tb");
/// assert_eq!(decode(r"c:\\tmp"), r"c:\tmp");
/// assert_eq!(decode(r"\q"), "q");
/// ```
#[must_use]
pub fn decode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut quoted = false;
    for c in raw.chars() {
        if quoted {
            out.push(match c {
                'b' => '\u{8}',
                'f' => '\u{c}',
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                other => other,
            });
            quoted = false;
        } else if c == '\\' {
            quoted = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// Encode `s` for display so that [`decode`] gives it back unchanged.
///
/// ```
/// use emu3270_config::resources::escape::encode;
///
/// assert_eq!(encode("a\nb"), r"a\nb");
/// assert_eq!(encode(r"c:\tmp"), r"c:\\tmp");
/// ```
#[must_use]
pub fn encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out
}

/// Whether `value` is an old-style unescaped UNC path such as
/// `\\server\printer`: two leading backslashes, a third character that is
/// not a backslash, and a further backslash later on.
#[must_use]
pub fn is_legacy_unc_path(value: &str) -> bool {
    let bytes = value.as_bytes();
    matches!(bytes, [b'\\', b'\\', third, rest @ ..] if *third != b'\\' && rest.contains(&b'\\'))
}

/// Decode a string value for the resource `name`.
///
/// On Windows builds a `printer.name` value that
/// [looks like an unescaped UNC path](is_legacy_unc_path) is kept verbatim;
/// everything else goes through [`decode`].
#[must_use]
pub fn decode_resource(name: &str, raw: &str, build: &Build) -> String {
    if build.is_windows() && name_matches(LEGACY_UNC_RESOURCE, name) && is_legacy_unc_path(raw) {
        return raw.to_string();
    }
    decode(raw)
}
