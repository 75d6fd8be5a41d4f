#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for layer precedence: defaults, then a session file or
//! profile, then the command line.

mod common;

use emu3270_config::config::toggles::Toggle;
use emu3270_config::error::EmuError;
use emu3270_config::logging::Severity;

const SESSION: &str = "\
! work session
emu3270.hostname: mainframe.example.com
emu3270.model: 3278-2
emu3270.port: 992
emu3270.monoCase: true
emu3270.keymap.mine: <Key>F1: PF(1)\\n\\
    <Key>F2: PF(2)
";

// ---------------------------------------------------------------------------
// Session files
// ---------------------------------------------------------------------------

/// A session file supplies the host and its resources.
#[test]
fn session_file_supplies_host_and_resources() {
    let ctx = common::TestContextBuilder::new()
        .with_file("work.emu3270", SESSION)
        .build();
    let r = ctx.resolve_ok(&[ctx.path("work.emu3270").as_str()]);

    assert_eq!(r.host.as_deref(), Some("mainframe.example.com"));
    assert_eq!(r.profile_name.as_deref(), Some("work"));
    assert_eq!(r.config.model.as_deref(), Some("3278-2"));
    assert_eq!(r.config.port.as_deref(), Some("992"));
    assert!(r.config.toggles[Toggle::MonoCase]);
    assert_eq!(
        r.config.resource("keymap.mine"),
        Some("<Key>F1: PF(1)\n    <Key>F2: PF(2)")
    );
    assert!(!ctx.log.any_error_output());
}

/// Command-line values win over the session file whether they come before
/// or after the session name.
#[test]
fn command_line_beats_session_in_any_order() {
    let ctx = common::TestContextBuilder::new()
        .with_file("work.emu3270", SESSION)
        .build();
    let session = ctx.path("work.emu3270");

    for args in [
        vec!["-model", "5", "-clear", "monoCase", session.as_str()],
        vec![session.as_str(), "-model", "5", "-clear", "monoCase"],
    ] {
        let r = ctx.resolve_ok(&args);
        assert_eq!(r.config.model.as_deref(), Some("5"), "{args:?}");
        assert!(!r.config.toggles[Toggle::MonoCase], "{args:?}");
        assert_eq!(r.config.port.as_deref(), Some("992"));
    }
}

/// `-xrm` on the command line also beats the session file.
#[test]
fn xrm_beats_session() {
    let ctx = common::TestContextBuilder::new()
        .with_file("work.emu3270", SESSION)
        .build();
    let r = ctx.resolve_ok(&["-xrm", "emu3270.port: 23", ctx.path("work.emu3270").as_str()]);
    assert_eq!(r.config.port.as_deref(), Some("23"));
}

/// Session suffixes match regardless of case.
#[test]
fn session_suffix_is_case_insensitive() {
    let ctx = common::TestContextBuilder::new()
        .with_file("Work.EMU3270", "emu3270.hostname: h\n")
        .build();
    let r = ctx.resolve_ok(&[ctx.path("Work.EMU3270").as_str()]);
    assert_eq!(r.host.as_deref(), Some("h"));
    assert_eq!(r.profile_name.as_deref(), Some("Work"));
}

/// A missing session file stops resolution.
#[test]
fn missing_session_file_is_fatal() {
    let ctx = common::IntegrationTestContext::new();
    let err = ctx.resolve(&[ctx.path("gone.emu3270").as_str()]).unwrap_err();
    assert!(matches!(err, EmuError::Session(_)));
    assert!(err.to_string().starts_with("Cannot open "));
}

/// Bad lines in a session file are warnings; the rest still applies.
#[test]
fn bad_session_lines_are_warnings() {
    let ctx = common::TestContextBuilder::new()
        .with_file(
            "s.emu3270",
            "emu3270.bogus: 1\nemu3270.extended: maybe\nemu3270.model: 3\n",
        )
        .build();
    let r = ctx.resolve_ok(&[ctx.path("s.emu3270").as_str()]);
    assert_eq!(r.config.model.as_deref(), Some("3"));
    assert!(!r.config.extended);
    let warnings = ctx.log.messages(Severity::Warn);
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].ends_with(":1: Unknown resource name: bogus"));
    assert!(warnings[1].ends_with(":2: Invalid Boolean value: maybe"));
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The profile's hostname becomes the host when none is given.
#[test]
fn profile_hostname_is_used() {
    let ctx = common::TestContextBuilder::new()
        .with_profile("emu3270.hostname: prof.example.com\nemu3270.model: 2\n")
        .build();
    let r = ctx.resolve_ok(&["-model", "3"]);
    assert_eq!(r.host.as_deref(), Some("prof.example.com"));
    assert_eq!(r.config.model.as_deref(), Some("3"));
    assert_eq!(r.profile_name, None);
}

/// A session file replaces the profile entirely.
#[test]
fn session_file_skips_profile() {
    let ctx = common::TestContextBuilder::new()
        .with_profile("emu3270.charset: german\n")
        .with_file("s.emu3270", "emu3270.hostname: h\n")
        .build();
    let r = ctx.resolve_ok(&[ctx.path("s.emu3270").as_str()]);
    assert_eq!(r.config.charset.as_deref(), Some("bracket"));
}

/// After a profile load the whole command line is replayed, including the
/// arguments that follow `-e`.
#[test]
fn replay_reaches_past_local_command() {
    let ctx = common::TestContextBuilder::new()
        .with_profile("emu3270.charset: cp037\n")
        .build();
    let r = ctx.resolve_ok(&["-e", "sh", "-model", "2"]);
    assert_eq!(r.host.as_deref(), Some("-e sh -model 2"));
    assert_eq!(r.config.model.as_deref(), Some("2"));
    assert_eq!(r.config.charset.as_deref(), Some("cp037"));
}

/// Scripted builds accept their own resources and options after a session.
#[test]
fn scripted_session() {
    let ctx = common::TestContextBuilder::new()
        .with_build(emu3270_config::platform::Build::new(
            "emu3270",
            emu3270_config::platform::Os::Unix,
            emu3270_config::platform::Flavor::Scripted,
        ))
        .with_file("s.emu3270", "emu3270.utf8: true\nemu3270.mono: true\n")
        .build();
    let r = ctx.resolve_ok(&["-scripted", ctx.path("s.emu3270").as_str()]);
    assert!(r.config.utf8);
    assert!(r.config.scripted);
    assert_eq!(
        ctx.log.messages(Severity::Warn).len(),
        1,
        "mono is an interactive resource"
    );
}
