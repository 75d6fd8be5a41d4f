//! The typed configuration record and the sources that fill it.
//!
//! A [`Configuration`] starts from the build's defaults ([`defaults`]), is
//! written by the command line ([`crate::cli`], [`toggles`]) and by session
//! or profile files ([`session`]), and is finally interpreted by the screen
//! model ([`model`]).
pub mod defaults;
pub mod model;
pub mod session;
pub mod toggles;

use std::collections::BTreeMap;

use serde::Serialize;

use toggles::Toggles;

/// Build a plain accessor function for a configuration field.
///
/// Option and resource tables bind to storage through these accessors:
///
/// ```ignore
/// let slot: fn(&mut Configuration) -> &mut bool = accessor!(bool: linemode.icrnl);
/// let trace: fn(&mut Configuration) -> &mut bool = accessor!(toggle Tracing);
/// ```
macro_rules! accessor {
    (toggle $toggle:ident) => {{
        fn access(c: &mut $crate::config::Configuration) -> &mut bool {
            &mut c.toggles[$crate::config::toggles::Toggle::$toggle]
        }
        access as fn(&mut $crate::config::Configuration) -> &mut bool
    }};
    ($ty:ty: $($field:ident).+) => {{
        fn access(c: &mut $crate::config::Configuration) -> &mut $ty {
            &mut c.$($field).+
        }
        access as fn(&mut $crate::config::Configuration) -> &mut $ty
    }};
}
pub(crate) use accessor;

/// Line-mode (NVT) terminal settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineMode {
    /// Map CR to NL on input.
    pub icrnl: bool,
    /// Map NL to CR on input.
    pub inlcr: bool,
    /// Map NL to CR/NL on output.
    pub onlcr: bool,
    /// Erase character.
    pub erase: Option<String>,
    /// Line-kill character.
    pub kill: Option<String>,
    /// Word-erase character.
    pub werase: Option<String>,
    /// Reprint character.
    pub rprnt: Option<String>,
    /// Literal-next character.
    pub lnext: Option<String>,
    /// Interrupt character.
    pub intr: Option<String>,
    /// Quit character.
    pub quit: Option<String>,
    /// End-of-file character.
    pub eof: Option<String>,
}

/// TLS settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TlsOptions {
    /// Host name to accept in the server certificate instead of the host.
    pub accept_hostname: Option<String>,
    /// Directory of CA certificates.
    pub ca_dir: Option<String>,
    /// File of CA certificates.
    pub ca_file: Option<String>,
    /// Client certificate file.
    pub cert_file: Option<String>,
    /// Client certificate file type (`pem` or `asn1`).
    pub cert_file_type: Option<String>,
    /// Client certificate chain file.
    pub chain_file: Option<String>,
    /// Client private key file.
    pub key_file: Option<String>,
    /// Client private key file type (`pem` or `asn1`).
    pub key_file_type: Option<String>,
    /// Private key password, as `file:<name>` or `string:<text>`.
    pub key_passwd: Option<String>,
    /// Accept self-signed server certificates.
    pub self_signed_ok: bool,
    /// Verify the server certificate.
    pub verify_host_cert: bool,
    /// Negotiate TLS when the host asks for it.
    pub tls: bool,
}

/// Settings that only exist on interactive front ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Interactive {
    /// Display everything in bold.
    pub all_bold: bool,
    /// Use ASCII characters for box drawing.
    pub ascii_box_draw: bool,
    /// Open a new console window (Windows).
    pub auto_shortcut: bool,
    /// Put the terminal in cbreak mode rather than raw mode.
    pub cbreak: bool,
    /// Compose map name.
    pub compose_map: Option<String>,
    /// Let curses interpret keypad keys.
    pub curses_keypad: bool,
    /// Use the terminal's default colors for the background.
    pub default_fgbg: bool,
    /// Ask before destructive actions.
    pub do_confirms: bool,
    /// Keyboard map names, comma-separated.
    pub key_map: Option<String>,
    /// Show the menu bar.
    pub menubar: bool,
    /// Force a monochrome display.
    pub mono: bool,
    /// Accept mouse input.
    pub mouse: bool,
    /// LU name of an associated printer session.
    pub printer_lu: Option<String>,
    /// Reconnect when the host disconnects.
    pub reconnect: bool,
    /// Black text on a white background.
    pub reverse_video: bool,
    /// Lines of scroll-back to keep.
    pub save_lines: i32,
    /// Console window title.
    pub title: Option<String>,
    /// Flash instead of beeping.
    pub visual_bell: bool,
}

/// The effective runtime configuration.
///
/// Every field is written by, at most, the defaults, the command line and a
/// session or profile file; the orchestrator decides the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Extended data stream support.
    pub extended: bool,
    /// 3279 (color) rather than 3278 (monochrome) terminal.
    pub m3279: bool,
    /// Keep modified-field selection across screens.
    pub modified_sel: bool,
    /// APL character set mode.
    pub apl_mode: bool,
    /// Driven by a script rather than a user.
    pub scripted: bool,
    /// Reject non-numeric input in numeric fields.
    pub numeric_lock: bool,
    /// Disallow the command prompt and other escapes.
    pub secure: bool,
    /// Lock the keyboard on operator errors instead of beeping.
    pub oerr_lock: bool,
    /// Queue keystrokes while the keyboard is locked.
    pub typeahead: bool,
    /// Whether tracing may be turned on at all.
    pub debug_tracing: bool,
    /// Exit when the host disconnects.
    pub once: bool,
    /// Accept script connections on a Unix-domain socket.
    pub socket: bool,
    /// Force UTF-8 script I/O.
    pub utf8: bool,
    /// Limit the screen size to the BIND image.
    pub bind_limit: bool,
    /// Use the NEW-ENVIRON telnet option.
    pub new_environ: bool,
    /// BSD-style telnet timing-mark handling.
    pub bsd_tm: bool,
    /// Report only eight colors to the host.
    pub color8: bool,
    /// Report background color support in query replies.
    pub qr_bg_color: bool,
    /// Show a trace monitor window while tracing.
    pub trace_monitor: bool,
    /// Delay keyboard unlock after host output.
    pub unlock_delay: bool,
    /// Run `idle_command` when the session is idle.
    pub idle_command_enabled: bool,

    /// Keyboard unlock delay in milliseconds.
    pub unlock_delay_ms: i32,
    /// File-transfer DFT buffer size in bytes.
    pub dft_buffer_size: i32,
    /// Windows code page override (0 means the system default).
    pub local_cp: i32,

    /// Terminal model, as given (`[327{8,9}-]<n>[-E]`).
    pub model: Option<String>,
    /// Hosts file with host aliases.
    pub hostsfile: Option<String>,
    /// Default telnet port.
    pub port: Option<String>,
    /// Host character set.
    pub charset: Option<String>,
    /// Terminal type sent to the host, overriding the model.
    pub termname: Option<String>,
    /// Directory for trace files.
    pub trace_dir: Option<String>,
    /// Data stream trace file.
    pub trace_file: Option<String>,
    /// Trace file size limit.
    pub trace_file_size: Option<String>,
    /// Screen trace file.
    pub screentrace_file: Option<String>,
    /// Oversize screen, as `<cols>x<rows>`.
    pub oversize: Option<String>,
    /// Host to connect to, usually from a session file.
    pub hostname: Option<String>,
    /// Configuration directory.
    pub conf_dir: Option<String>,
    /// DBCS CGCSGID override.
    pub dbcs_cgcsgid: Option<String>,
    /// SBCS CGCSGID override.
    pub sbcs_cgcsgid: Option<String>,
    /// Device name sent with `NEW-ENVIRON`.
    pub devname: Option<String>,
    /// User name sent with `NEW-ENVIRON`.
    pub user: Option<String>,
    /// Address and port of the embedded HTTP server.
    pub httpd_port: Option<String>,
    /// Address and port for script connections.
    pub script_port: Option<String>,
    /// Proxy, as `type:host[:port]`.
    pub proxy: Option<String>,
    /// Actions to run once connected.
    pub login_macro: Option<String>,
    /// Actions to run when idle.
    pub idle_command: Option<String>,
    /// Idle time before `idle_command` runs.
    pub idle_timeout: Option<String>,

    /// Line-mode settings.
    pub linemode: LineMode,
    /// TLS settings.
    pub tls: TlsOptions,
    /// Interactive front-end settings.
    pub interactive: Interactive,

    /// Toggle states.
    pub toggles: Toggles,

    /// Named resources with no typed field: explicit families (keymaps,
    /// color maps) and the resource equivalent of each command-line option.
    pub resources: BTreeMap<String, String>,
}

impl Configuration {
    /// Look up a named resource.
    #[must_use]
    pub fn resource(&self, name: &str) -> Option<&str> {
        self.resources.get(name).map(String::as_str)
    }

    /// Add or replace a named resource.
    pub fn set_resource(&mut self, name: &str, value: &str) {
        self.resources.insert(name.to_string(), value.to_string());
    }
}
