//! Built-in defaults for each build variant.
use super::Configuration;
use super::toggles::Toggle;
use crate::platform::Build;

/// Compiled-in configuration directory, used when `confDir` is never set.
pub const DEFAULT_CONF_DIR: &str = match option_env!("EMU3270_CONF_DIR") {
    Some(dir) => dir,
    None => "/usr/local/etc/emu3270",
};

/// Default 3270 model.
pub const DEFAULT_MODEL: &str = "4";

/// Default telnet port.
pub const DEFAULT_PORT: &str = "23";

/// Default size of the file-transfer DFT buffer.
pub const DEFAULT_DFT_BUFFER_SIZE: i32 = 4096;

/// Build a configuration holding the defaults for `build`.
#[must_use]
pub fn for_build(build: &Build) -> Configuration {
    let mut cfg = Configuration::default();
    apply(&mut cfg, build);
    cfg
}

/// Write the defaults for `build` into `cfg`.
pub fn apply(cfg: &mut Configuration, build: &Build) {
    let interactive = build.is_interactive();

    cfg.extended = true;
    cfg.m3279 = true;
    cfg.modified_sel = false;
    cfg.apl_mode = false;
    cfg.scripted = !interactive;
    cfg.numeric_lock = false;
    cfg.secure = false;
    cfg.oerr_lock = interactive;
    cfg.typeahead = true;
    cfg.debug_tracing = true;
    cfg.bind_limit = true;
    cfg.new_environ = true;
    cfg.qr_bg_color = true;
    cfg.trace_monitor = interactive && build.is_windows();
    cfg.unlock_delay = true;
    cfg.unlock_delay_ms = 350;
    cfg.dft_buffer_size = DEFAULT_DFT_BUFFER_SIZE;

    cfg.model = Some(DEFAULT_MODEL.to_string());
    cfg.port = Some(DEFAULT_PORT.to_string());
    cfg.charset = Some("bracket".to_string());
    cfg.devname = Some(build.app.clone());
    if !build.is_windows() {
        cfg.trace_dir = Some("/tmp".to_string());
    }

    let lm = &mut cfg.linemode;
    lm.icrnl = true;
    lm.inlcr = false;
    lm.onlcr = true;
    lm.erase = Some("^H".to_string());
    lm.kill = Some("^U".to_string());
    lm.werase = Some("^W".to_string());
    lm.rprnt = Some("^R".to_string());
    lm.lnext = Some("^V".to_string());
    lm.intr = Some("^C".to_string());
    lm.quit = Some("^\\".to_string());
    lm.eof = Some("^D".to_string());

    cfg.tls.verify_host_cert = false;
    cfg.tls.tls = true;

    if interactive {
        let ui = &mut cfg.interactive;
        ui.menubar = true;
        ui.do_confirms = true;
        ui.mouse = true;
        ui.curses_keypad = true;
        ui.save_lines = 4096;
        ui.compose_map = Some("latin1".to_string());
    }

    cfg.toggles[Toggle::CursorPos] = true;
    cfg.toggles[Toggle::AidWait] = true;
    if interactive && build.is_windows() {
        cfg.toggles[Toggle::Underscore] = true;
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::platform::{Flavor, Os};

    #[test]
    fn interactive_unix_defaults() {
        let cfg = for_build(&Build::new("emu3270", Os::Unix, Flavor::Interactive));
        assert!(cfg.extended && cfg.m3279 && cfg.typeahead);
        assert!(!cfg.scripted);
        assert!(cfg.oerr_lock);
        assert_eq!(cfg.model.as_deref(), Some("4"));
        assert_eq!(cfg.port.as_deref(), Some("23"));
        assert_eq!(cfg.charset.as_deref(), Some("bracket"));
        assert_eq!(cfg.trace_dir.as_deref(), Some("/tmp"));
        assert_eq!(cfg.interactive.save_lines, 4096);
        assert!(cfg.toggles[Toggle::CursorPos]);
        assert!(cfg.toggles[Toggle::AidWait]);
        assert!(!cfg.toggles[Toggle::Underscore]);
        assert!(!cfg.trace_monitor);
    }

    #[test]
    fn scripted_defaults() {
        let cfg = for_build(&Build::new("emu3270", Os::Unix, Flavor::Scripted));
        assert!(cfg.scripted);
        assert!(!cfg.oerr_lock);
        assert!(!cfg.interactive.menubar);
        assert!(cfg.interactive.compose_map.is_none());
    }

    #[test]
    fn windows_interactive_defaults() {
        let cfg = for_build(&Build::new("emu3270", Os::Windows, Flavor::Interactive));
        assert!(cfg.trace_monitor);
        assert!(cfg.toggles[Toggle::Underscore]);
        assert!(cfg.trace_dir.is_none());
    }

    #[test]
    fn linemode_defaults() {
        let cfg = for_build(&Build::new("emu3270", Os::Unix, Flavor::Interactive));
        assert!(cfg.linemode.icrnl && cfg.linemode.onlcr && !cfg.linemode.inlcr);
        assert_eq!(cfg.linemode.quit.as_deref(), Some("^\\"));
        assert_eq!(cfg.linemode.eof.as_deref(), Some("^D"));
    }

    #[test]
    fn conf_dir_is_not_defaulted_here() {
        let cfg = for_build(&Build::new("emu3270", Os::Unix, Flavor::Interactive));
        assert!(cfg.conf_dir.is_none());
        assert!(!DEFAULT_CONF_DIR.is_empty());
    }
}
