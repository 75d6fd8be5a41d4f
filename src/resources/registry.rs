//! The static resource table.
use crate::config::{Configuration, accessor};
use crate::platform::{Build, Feature};

/// Where a resource value is stored and how it is typed.
#[derive(Clone, Copy)]
pub enum Slot {
    /// A boolean field.
    Bool(fn(&mut Configuration) -> &mut bool),
    /// A string field.
    Str(fn(&mut Configuration) -> &mut Option<String>),
    /// An integer field.
    Int(fn(&mut Configuration) -> &mut i32),
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Bool(_) => "Bool",
            Self::Str(_) => "Str",
            Self::Int(_) => "Int",
        })
    }
}

/// A named, typed resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceDescriptor {
    /// Resource name as written in session files.
    pub name: &'static str,
    /// Storage binding.
    pub slot: Slot,
    /// Build features the resource needs.
    pub requires: &'static [Feature],
}

/// Whether `name` selects the resource `candidate`: either the exact
/// spelling, or the spelling with the first character upper-cased.
///
/// ```
/// use emu3270_config::resources::name_matches;
///
/// assert!(name_matches("bindLimit", "bindLimit"));
/// assert!(name_matches("bindLimit", "BindLimit"));
/// assert!(!name_matches("bindLimit", "BINDLIMIT"));
/// assert!(!name_matches("bindLimit", "bindLimi"));
/// ```
#[must_use]
pub fn name_matches(candidate: &str, name: &str) -> bool {
    if candidate == name {
        return true;
    }
    let mut want = candidate.chars();
    let mut got = name.chars();
    match (want.next(), got.next()) {
        (Some(w), Some(g)) => {
            w.to_uppercase().eq(std::iter::once(g)) && want.as_str() == got.as_str()
        }
        _ => false,
    }
}

macro_rules! resource {
    ($name:literal, bool $($field:ident).+ $(, $feature:ident)*) => {
        ResourceDescriptor {
            name: $name,
            slot: Slot::Bool(accessor!(bool: $($field).+)),
            requires: &[$(Feature::$feature),*],
        }
    };
    ($name:literal, str $($field:ident).+ $(, $feature:ident)*) => {
        ResourceDescriptor {
            name: $name,
            slot: Slot::Str(accessor!(Option<String>: $($field).+)),
            requires: &[$(Feature::$feature),*],
        }
    };
    ($name:literal, int $($field:ident).+ $(, $feature:ident)*) => {
        ResourceDescriptor {
            name: $name,
            slot: Slot::Int(accessor!(i32: $($field).+)),
            requires: &[$(Feature::$feature),*],
        }
    };
}

/// Every static resource, in lookup order.
pub static RESOURCES: &[ResourceDescriptor] = &[
    resource!("acceptHostname", str tls.accept_hostname, Tls),
    resource!("caDir", str tls.ca_dir, Tls),
    resource!("caFile", str tls.ca_file, Tls),
    resource!("certFile", str tls.cert_file, Tls),
    resource!("certFileType", str tls.cert_file_type, Tls),
    resource!("chainFile", str tls.chain_file, Tls),
    resource!("keyFile", str tls.key_file, Tls),
    resource!("keyFileType", str tls.key_file_type, Tls),
    resource!("keyPasswd", str tls.key_passwd, Tls),
    resource!("selfSignedOk", bool tls.self_signed_ok, Tls),
    resource!("verifyHostCert", bool tls.verify_host_cert, Tls),
    resource!("tls", bool tls.tls, Tls),
    resource!("aplMode", bool apl_mode),
    resource!("bindLimit", bool bind_limit),
    resource!("bsdTm", bool bsd_tm),
    resource!("charset", str charset),
    resource!("color8", bool color8),
    resource!("confDir", str conf_dir),
    resource!("dbcsCgcsgid", str dbcs_cgcsgid),
    resource!("debugTracing", bool debug_tracing),
    resource!("devName", str devname),
    resource!("dftBufferSize", int dft_buffer_size),
    resource!("eof", str linemode.eof),
    resource!("erase", str linemode.erase),
    resource!("extended", bool extended),
    resource!("hostname", str hostname),
    resource!("hostsFile", str hostsfile),
    resource!("httpd", str httpd_port),
    resource!("icrnl", bool linemode.icrnl),
    resource!("idleCommand", str idle_command),
    resource!("idleCommandEnabled", bool idle_command_enabled),
    resource!("idleTimeout", str idle_timeout),
    resource!("inlcr", bool linemode.inlcr),
    resource!("intr", str linemode.intr),
    resource!("kill", str linemode.kill),
    resource!("lnext", str linemode.lnext),
    resource!("localCp", int local_cp, Windows),
    resource!("loginMacro", str login_macro),
    resource!("m3279", bool m3279),
    resource!("model", str model),
    resource!("modifiedSel", bool modified_sel),
    resource!("newEnviron", bool new_environ),
    resource!("numericLock", bool numeric_lock),
    resource!("oerrLock", bool oerr_lock),
    resource!("once", bool once),
    resource!("onlcr", bool linemode.onlcr),
    resource!("oversize", str oversize),
    resource!("port", str port),
    resource!("proxy", str proxy),
    resource!("qrBgColor", bool qr_bg_color),
    resource!("quit", str linemode.quit),
    resource!("rprnt", str linemode.rprnt),
    resource!("sbcsCgcsgid", str sbcs_cgcsgid),
    resource!("screenTraceFile", str screentrace_file),
    resource!("scriptPort", str script_port),
    resource!("secure", bool secure),
    resource!("socket", bool socket),
    resource!("termName", str termname),
    resource!("traceDir", str trace_dir),
    resource!("traceFile", str trace_file),
    resource!("traceFileSize", str trace_file_size),
    resource!("traceMonitor", bool trace_monitor),
    resource!("typeahead", bool typeahead),
    resource!("unlockDelay", bool unlock_delay),
    resource!("unlockDelayMs", int unlock_delay_ms),
    resource!("user", str user),
    resource!("utf8", bool utf8, Scripted),
    resource!("werase", str linemode.werase),
    resource!("allBold", bool interactive.all_bold, Interactive),
    resource!("asciiBoxDraw", bool interactive.ascii_box_draw, Interactive),
    resource!("autoShortcut", bool interactive.auto_shortcut, Interactive, Windows),
    resource!("cbreak", bool interactive.cbreak, Interactive, Unix),
    resource!("composeMap", str interactive.compose_map, Interactive),
    resource!("confirm", bool interactive.do_confirms, Interactive),
    resource!("cursesKeypad", bool interactive.curses_keypad, Interactive, Unix),
    resource!("defaultFgBg", bool interactive.default_fgbg, Interactive, Unix),
    resource!("keymap", str interactive.key_map, Interactive),
    resource!("menuBar", bool interactive.menubar, Interactive),
    resource!("mono", bool interactive.mono, Interactive, Unix),
    resource!("mouse", bool interactive.mouse, Interactive),
    resource!("noPrompt", bool secure, Interactive),
    resource!("printerLu", str interactive.printer_lu, Interactive),
    resource!("reconnect", bool interactive.reconnect, Interactive),
    resource!("reverseVideo", bool interactive.reverse_video, Interactive),
    resource!("saveLines", int interactive.save_lines, Interactive),
    resource!("title", str interactive.title, Interactive, Windows),
    resource!("visualBell", bool interactive.visual_bell, Interactive),
];

/// Find the static resource `name` selects in `build`.
#[must_use]
pub fn lookup(name: &str, build: &Build) -> Option<&'static ResourceDescriptor> {
    RESOURCES
        .iter()
        .filter(|r| build.supports_all(r.requires))
        .find(|r| name_matches(r.name, name))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::platform::{Flavor, Os};
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for r in RESOURCES {
            assert!(seen.insert(r.name), "duplicate resource {}", r.name);
        }
    }

    #[test]
    fn name_matches_rules() {
        assert!(name_matches("model", "model"));
        assert!(name_matches("model", "Model"));
        assert!(!name_matches("model", "MODEL"));
        assert!(!name_matches("model", "mode"));
        assert!(!name_matches("model", "models"));
        assert!(!name_matches("model", ""));
    }

    #[test]
    fn lookup_respects_build() {
        let unix = Build::new("emu3270", Os::Unix, Flavor::Interactive);
        let scripted = Build::new("emu3270", Os::Unix, Flavor::Scripted);
        assert!(lookup("mono", &unix).is_some());
        assert!(lookup("mono", &scripted).is_none());
        assert!(lookup("localCp", &unix).is_none());
        assert!(lookup("utf8", &scripted).is_some());
    }

    #[test]
    fn lookup_without_tls() {
        let b = Build::new("emu3270", Os::Unix, Flavor::Interactive).with_tls(false);
        assert!(lookup("caFile", &b).is_none());
        assert!(lookup("model", &b).is_some());
    }

    #[test]
    fn slot_writes_nested_field() {
        let b = Build::new("emu3270", Os::Unix, Flavor::Interactive);
        let mut cfg = Configuration::default();
        let slot = lookup("Icrnl", &b).unwrap().slot;
        assert!(matches!(slot, Slot::Bool(_)));
        if let Slot::Bool(f) = slot {
            *f(&mut cfg) = true;
        }
        assert!(cfg.linemode.icrnl);
    }
}
