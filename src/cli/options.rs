//! The command-line option table.
use crate::config::{Configuration, accessor};
use crate::platform::{Build, Feature};

/// Informational output an option asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Info {
    /// Version and build options.
    Version,
    /// Option summary.
    Help,
}

/// What a matched option does.
#[derive(Clone, Copy)]
pub enum OptionKind {
    /// Write `value` into `target`; record `resource` if present.
    Boolean {
        /// Value written when the option is given.
        value: bool,
        /// Resource recorded as `True` or `False`.
        resource: Option<&'static str>,
        /// Field written.
        target: fn(&mut Configuration) -> &mut bool,
    },
    /// Take the next token as the value.
    String {
        /// Resource recorded with the value.
        resource: &'static str,
        /// Field written.
        target: fn(&mut Configuration) -> &mut Option<String>,
    },
    /// Take the next token as a decimal integer.
    Integer {
        /// Resource recorded with the value as given.
        resource: &'static str,
        /// Field written.
        target: fn(&mut Configuration) -> &mut i32,
    },
    /// Take the next token as a `<app>.<name>: <value>` assignment.
    Resource,
    /// Keep the flag and the next token for a later pass.
    Passthrough,
    /// Accepted and ignored.
    NoOp,
    /// Ask for informational output.
    ShowInfo(Info),
    /// Stop option processing; this token and the rest survive.
    Terminator,
}

impl std::fmt::Debug for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean {
                value, resource, ..
            } => f
                .debug_struct("Boolean")
                .field("value", value)
                .field("resource", resource)
                .finish_non_exhaustive(),
            Self::String { resource, .. } => f
                .debug_struct("String")
                .field("resource", resource)
                .finish_non_exhaustive(),
            Self::Integer { resource, .. } => f
                .debug_struct("Integer")
                .field("resource", resource)
                .finish_non_exhaustive(),
            Self::Resource => f.write_str("Resource"),
            Self::Passthrough => f.write_str("Passthrough"),
            Self::NoOp => f.write_str("NoOp"),
            Self::ShowInfo(info) => f.debug_tuple("ShowInfo").field(info).finish(),
            Self::Terminator => f.write_str("Terminator"),
        }
    }
}

/// One command-line option.
#[derive(Debug, Clone, Copy)]
pub struct OptionDescriptor {
    /// Exact flag text, including the leading `-`.
    pub flag: &'static str,
    /// What the option does.
    pub kind: OptionKind,
    /// Build features the option needs.
    pub requires: &'static [Feature],
    /// Shape of the argument, for help output.
    pub hint: Option<&'static str>,
    /// One-line description for help output.
    pub help: &'static str,
}

impl OptionDescriptor {
    /// Whether the option exists in `build`.
    #[must_use]
    pub fn is_supported(&self, build: &Build) -> bool {
        build.supports_all(self.requires)
    }
}

macro_rules! option {
    ($flag:literal, bool $value:literal, $res:literal, toggle $toggle:ident, [$($f:ident),*], $help:literal) => {
        OptionDescriptor {
            flag: $flag,
            kind: OptionKind::Boolean {
                value: $value,
                resource: Some($res),
                target: accessor!(toggle $toggle),
            },
            requires: &[$(Feature::$f),*],
            hint: None,
            help: $help,
        }
    };
    ($flag:literal, bool $value:literal, $res:literal, $($field:ident).+, [$($f:ident),*], $help:literal) => {
        OptionDescriptor {
            flag: $flag,
            kind: OptionKind::Boolean {
                value: $value,
                resource: Some($res),
                target: accessor!(bool: $($field).+),
            },
            requires: &[$(Feature::$f),*],
            hint: None,
            help: $help,
        }
    };
    ($flag:literal, str $res:literal, $($field:ident).+, [$($f:ident),*], $hint:literal, $help:literal) => {
        OptionDescriptor {
            flag: $flag,
            kind: OptionKind::String {
                resource: $res,
                target: accessor!(Option<String>: $($field).+),
            },
            requires: &[$(Feature::$f),*],
            hint: Some($hint),
            help: $help,
        }
    };
    ($flag:literal, int $res:literal, $($field:ident).+, [$($f:ident),*], $hint:literal, $help:literal) => {
        OptionDescriptor {
            flag: $flag,
            kind: OptionKind::Integer {
                resource: $res,
                target: accessor!(i32: $($field).+),
            },
            requires: &[$(Feature::$f),*],
            hint: Some($hint),
            help: $help,
        }
    };
}

const fn special(
    flag: &'static str,
    kind: OptionKind,
    requires: &'static [Feature],
    hint: Option<&'static str>,
    help: &'static str,
) -> OptionDescriptor {
    OptionDescriptor {
        flag,
        kind,
        requires,
        hint,
        help,
    }
}

/// Every option, in match order.
pub static OPTIONS: &[OptionDescriptor] = &[
    option!("-accepthostname", str "acceptHostname", tls.accept_hostname, [Tls],
        "any|DNS:<name>|IP:<addr>", "Host name to accept from server certificate"),
    option!("-allbold", bool true, "allBold", interactive.all_bold, [Interactive],
        "Display all text in bold"),
    option!("-S", bool true, "autoShortcut", interactive.auto_shortcut, [Interactive, Windows],
        "Run in auto-shortcut mode"),
    option!("-apl", bool true, "aplMode", apl_mode, [],
        "Turn on APL mode"),
    option!("-cadir", str "caDir", tls.ca_dir, [Tls],
        "<directory>", "Specify CA certificate database directory"),
    option!("-cafile", str "caFile", tls.ca_file, [Tls],
        "<filename>", "Specify CA certificate file"),
    option!("-cbreak", bool true, "cbreak", interactive.cbreak, [Interactive, Unix],
        "Force terminal CBREAK mode"),
    option!("-certfile", str "certFile", tls.cert_file, [Tls],
        "<filename>", "Specify certificate file"),
    option!("-certfiletype", str "certFileType", tls.cert_file_type, [Tls],
        "pem|asn1", "Specify certificate file type"),
    option!("-chainfile", str "chainFile", tls.chain_file, [Tls],
        "<filename>", "Specify certificate chain file"),
    option!("-charset", str "charset", charset, [],
        "<name>", "Use host EBCDIC character set (code page) <name>"),
    special("-clear", OptionKind::Passthrough, &[], Some("<toggle>"), "Turn off <toggle>"),
    option!("-defaultfgbg", bool true, "defaultFgBg", interactive.default_fgbg, [Interactive, Unix],
        "Use terminal's default foreground and background colors"),
    option!("-devname", str "devName", devname, [],
        "<name>", "Specify device name (workstation ID) for RFC 4777"),
    special("-e", OptionKind::Passthrough, &[Feature::LocalProcess], Some("<command> [<arg>...]"),
        "Run <command> instead of making TELNET connection"),
    option!("-hostsfile", str "hostsFile", hostsfile, [],
        "<filename>", "Use <filename> as the ibm_hosts file"),
    option!("-httpd", str "httpd", httpd_port, [],
        "[<addr>:]<port>", "TCP port to listen on for http requests"),
    option!("-keyfile", str "keyFile", tls.key_file, [Tls],
        "<filename>", "Get private key from <filename>"),
    option!("-keyfiletype", str "keyFileType", tls.key_file_type, [Tls],
        "pem|asn1", "Specify private key file type"),
    option!("-keypasswd", str "keyPasswd", tls.key_passwd, [Tls],
        "file:<filename>|string:<text>", "Specify private key password"),
    option!("-keymap", str "keymap", interactive.key_map, [Interactive],
        "<name>[,<name>...]", "Keyboard map name(s)"),
    option!("-localcp", int "localCp", local_cp, [Windows],
        "<codepage>", "Use <codepage> instead of ANSI codepage for local I/O"),
    option!("-loginmacro", str "loginMacro", login_macro, [],
        "Action([arg[,arg...]]) [...]", "Run actions when the host connection is ready"),
    option!("-model", str "model", model, [],
        "[327{8,9}-]<n>", "Emulate a 3278 or 3279 model <n>"),
    option!("-mono", bool true, "mono", interactive.mono, [Interactive, Unix],
        "Do not use terminal color capabilities"),
    option!("+S", bool false, "autoShortcut", interactive.auto_shortcut, [Interactive, Windows],
        "Do not run in auto-shortcut mode"),
    option!("-noprompt", bool true, "noPrompt", secure, [Interactive],
        "Alias for -secure"),
    option!("-oversize", str "oversize", oversize, [],
        "<cols>x<rows>", "Specify larger screen"),
    option!("-port", str "port", port, [],
        "<port>", "Specify default TELNET port"),
    option!("-printerlu", str "printerLu", interactive.printer_lu, [Interactive],
        "<luname>", "Automatically start a printer session to <luname>"),
    option!("-reconnect", bool true, "reconnect", interactive.reconnect, [Interactive],
        "Reconnect to host as soon as it disconnects"),
    option!("-rv", bool true, "reverseVideo", interactive.reverse_video, [Interactive, Unix],
        "Switch to black-on-white mode"),
    option!("-proxy", str "proxy", proxy, [],
        "<type>:<host>[:<port>]", "Specify proxy type and server"),
    option!("-savelines", int "saveLines", interactive.save_lines, [Interactive],
        "<lines>", "Specify the number of lines to save for scrolling"),
    special("-scripted", OptionKind::NoOp, &[Feature::Scripted], None, "Turn on scripting"),
    option!("-scriptport", str "scriptPort", script_port, [],
        "[<addr>:]<port>", "TCP port to listen on for script commands"),
    option!("-secure", bool true, "secure", secure, [],
        "Restrict potentially-destructive user actions"),
    option!("-selfsignedok", bool true, "selfSignedOk", tls.self_signed_ok, [Tls],
        "Allow self-signed host certificates"),
    special("-set", OptionKind::Passthrough, &[], Some("<toggle>"), "Turn on <toggle>"),
    option!("-socket", bool true, "socket", socket, [],
        "Create socket for script control"),
    option!("-tn", str "termName", termname, [],
        "<name>", "Send <name> as TELNET terminal name"),
    option!("-title", str "title", interactive.title, [Interactive, Windows],
        "<string>", "Set window title to <string>"),
    option!("-trace", bool true, "trace", toggle Tracing, [],
        "Enable tracing"),
    option!("-tracefile", str "traceFile", trace_file, [],
        "<file>", "Write traces to <file>"),
    option!("-tracefilesize", str "traceFileSize", trace_file_size, [],
        "<n>[KM]", "Limit trace file to <n> bytes"),
    option!("-user", str "user", user, [],
        "<name>", "Specify user name for RFC 4777"),
    option!("-utf8", bool true, "utf8", utf8, [Scripted],
        "Force local codeset to be UTF-8"),
    special("-v", OptionKind::ShowInfo(Info::Version), &[], None,
        "Display build options and character sets"),
    option!("-verifycert", bool true, "verifyHostCert", tls.verify_host_cert, [Tls],
        "Enable host certificate validation"),
    special("--version", OptionKind::ShowInfo(Info::Version), &[], None,
        "Display build options and character sets"),
    special("-help", OptionKind::ShowInfo(Info::Help), &[], None, "Display command-line help"),
    special("--help", OptionKind::ShowInfo(Info::Help), &[], None, "Display command-line help"),
    special("-xrm", OptionKind::Resource, &[], Some("'*.<resource>: <value>'"),
        "Set <resource> to <value>"),
    special("--", OptionKind::Terminator, &[], None, "Terminate argument list"),
];

/// Find the option `flag` names in `build`: exact, case-sensitive, first
/// match wins.
#[must_use]
pub fn lookup(flag: &str, build: &Build) -> Option<&'static OptionDescriptor> {
    OPTIONS
        .iter()
        .filter(|o| o.is_supported(build))
        .find(|o| o.flag == flag)
}

/// Help text for every option in `build`, two lines per option.
#[must_use]
pub fn help_lines(build: &Build) -> Vec<String> {
    OPTIONS
        .iter()
        .filter(|o| o.is_supported(build))
        .flat_map(|o| {
            let head = match o.hint {
                Some(hint) => format!("  {} {}", o.flag, hint.replace('*', &build.app)),
                None => format!("  {}", o.flag),
            };
            [head, format!("     {}", o.help)]
        })
        .collect()
}
