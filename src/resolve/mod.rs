//! Layered configuration resolution.
//!
//! [`Resolver::resolve`] turns the process arguments into a
//! [`Configuration`] by applying, in order:
//!
//! 1. the build defaults,
//! 2. the command-line options and `-set`/`-clear` toggles,
//! 3. a session file named on the command line, or the user's profile,
//! 4. the whole command line again, `-e` and its arguments included, so it
//!    overrides the file.
//!
//! A few implied settings are reconciled at the end.
pub mod args;
pub mod collaborators;

pub use collaborators::{Collaborators, Standard, usage_line};

use std::path::PathBuf;

use crate::cli::OptionTable;
use crate::config::session::{profile_name, session_suffix_len};
use crate::config::toggles::{Toggle, ToggleRegistry};
use crate::config::{Configuration, defaults};
use crate::error::EmuError;
use crate::logging::Log;
use crate::platform::Build;

/// The outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved configuration.
    pub config: Configuration,
    /// Host to connect to at start-up, if any.
    pub host: Option<String>,
    /// Arguments left for the rest of the application, program name first.
    pub remaining: Vec<String>,
    /// Profile name derived from a session file.
    pub profile_name: Option<String>,
    /// Session file that was loaded.
    pub session_path: Option<PathBuf>,
    /// The full command line, for diagnostics.
    pub command_line: String,
    /// Local command captured from `-e`.
    pub local_command: Option<String>,
}

impl Resolution {
    /// Number of remaining arguments, program name included.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }
}

/// Resolves the configuration for one build variant.
pub struct Resolver<'a, C> {
    build: &'a Build,
    log: &'a dyn Log,
    collab: C,
}

impl<C: std::fmt::Debug> std::fmt::Debug for Resolver<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("build", self.build)
            .field("log", &"<dyn Log>")
            .field("collab", &self.collab)
            .finish()
    }
}

impl<'a, C: Collaborators> Resolver<'a, C> {
    /// Create a resolver for `build` that loads files through `collab`.
    #[must_use]
    pub const fn new(build: &'a Build, log: &'a dyn Log, collab: C) -> Self {
        Self { build, log, collab }
    }

    /// Resolve `argv` (program name first).
    ///
    /// # Errors
    ///
    /// Returns [`EmuError`] for too many positionals, a positional that
    /// looks like an option, an unknown toggle name, or an unreadable
    /// session file. Everything else is a warning.
    pub fn resolve(&mut self, argv: &[String]) -> Result<Resolution, EmuError> {
        let (argv0, tokens) = argv.split_first().map_or(("", &[][..]), |(p, t)| (p.as_str(), t));
        let program = args::program_name(argv0).to_string();
        let command_line = args::command_line(&program, tokens);
        self.log.debug(&format!("Command line: {command_line}"));

        let snapshot = tokens.to_vec();
        let (leading, local_command) = if self.build.local_process {
            args::split_local_command(snapshot.clone())
        } else {
            (snapshot.clone(), None)
        };

        let mut cfg = defaults::for_build(self.build);
        let survivors = self.dispatch(&leading, &mut cfg, true)?;
        let positionals = args::take_positionals(survivors)?;

        let mut host = positionals.host.or_else(|| local_command.clone());
        let mut session_path = None;
        let mut profile = None;

        let session = host
            .as_deref()
            .and_then(|h| Some((h.to_string(), session_suffix_len(h, self.build)?)));
        let loaded = if let Some((file, suffix_len)) = session {
            self.log.debug(&format!("Loading session {file}"));
            let path = PathBuf::from(&file);
            self.collab.load_session(&path, &mut cfg)?;
            profile = Some(profile_name(&file, suffix_len));
            session_path = Some(path);
            host.clone_from(&cfg.hostname);
            true
        } else {
            let loaded = self.collab.merge_profile(&mut cfg);
            if host.is_none() {
                host.clone_from(&cfg.hostname);
            }
            loaded
        };

        if loaded {
            self.log.debug("Reapplying command-line options");
            self.dispatch(&snapshot, &mut cfg, false)?;
        }

        self.reconcile(&mut cfg, host.is_some());

        let remaining = std::iter::once(argv0.to_string())
            .chain(positionals.rest)
            .collect();

        Ok(Resolution {
            config: cfg,
            host,
            remaining,
            profile_name: profile,
            session_path,
            command_line,
            local_command,
        })
    }

    /// One option pass followed by one toggle pass. Version and help
    /// requests are only honoured on the first pass.
    fn dispatch(
        &mut self,
        tokens: &[String],
        cfg: &mut Configuration,
        first: bool,
    ) -> Result<Vec<String>, EmuError> {
        let collab = &mut self.collab;
        let survivors = OptionTable::new(self.build, self.log).dispatch(tokens, cfg, &mut |info| {
            if first {
                collab.show_info(info);
            }
        });
        Ok(ToggleRegistry::new(self.build).dispatch(&survivors, &mut cfg.toggles)?)
    }

    fn reconcile(&self, cfg: &mut Configuration, have_host: bool) {
        if cfg.apl_mode {
            cfg.charset = Some("apl".to_string());
        }
        if !have_host {
            cfg.once = false;
        }
        if cfg.conf_dir.is_none() {
            cfg.conf_dir = Some(defaults::DEFAULT_CONF_DIR.to_string());
        }
        if !cfg.debug_tracing && cfg.toggles[Toggle::Tracing] {
            self.log.debug("Tracing disabled by debugTracing");
            cfg.toggles[Toggle::Tracing] = false;
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::collaborators::MockCollaborators;
    use super::*;
    use crate::cli::Info;
    use crate::error::{SessionError, ToggleError, UsageError};
    use crate::logging::{Logger, Severity};
    use crate::platform::{Flavor, Os};
    use std::path::Path;

    fn unix() -> Build {
        Build::new("emu3270", Os::Unix, Flavor::Interactive)
    }

    fn argv(list: &[&str]) -> Vec<String> {
        std::iter::once("/usr/bin/emu3270")
            .chain(list.iter().copied())
            .map(ToString::to_string)
            .collect()
    }

    fn no_profile() -> MockCollaborators {
        let mut mock = MockCollaborators::new();
        mock.expect_merge_profile().returning(|_| false);
        mock.expect_load_session().never();
        mock
    }

    fn session(contents: &'static str) -> MockCollaborators {
        let mut mock = MockCollaborators::new();
        mock.expect_merge_profile().never();
        mock.expect_load_session()
            .times(1)
            .returning(move |_, cfg: &mut Configuration| {
                let b = unix();
                let log = Logger::new();
                crate::config::session::apply_resource_str(
                    contents,
                    "session",
                    &crate::resources::ResourceStore::new(&b, &log),
                    cfg,
                );
                Ok(())
            });
        mock
    }

    // ---- positional grammar ----

    #[test]
    fn single_positional_is_host() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&["h1"]))
            .unwrap();
        assert_eq!(r.host.as_deref(), Some("h1"));
        assert_eq!(r.remaining, ["/usr/bin/emu3270"]);
        assert_eq!(r.remaining_count(), 1);
        assert_eq!(r.command_line, "emu3270 h1");
    }

    #[test]
    fn host_and_port() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&["-model", "2", "h1", "4"]))
            .unwrap();
        assert_eq!(r.host.as_deref(), Some("h1:4"));
        assert_eq!(r.config.model.as_deref(), Some("2"));
    }

    #[test]
    fn too_many_positionals() {
        let b = unix();
        let log = Logger::new();
        let err = Resolver::new(&b, &log, MockCollaborators::new())
            .resolve(&argv(&["a", "b", "c"]))
            .unwrap_err();
        assert!(matches!(err, EmuError::Usage(UsageError::TooManyArguments)));
        assert!(err.wants_usage());
    }

    #[test]
    fn unknown_option_as_host() {
        let b = unix();
        let log = Logger::new();
        let err = Resolver::new(&b, &log, MockCollaborators::new())
            .resolve(&argv(&["-bogus"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown or incomplete option: -bogus");
    }

    #[test]
    fn remaining_after_terminator() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&["h", "--", "extra", "-x"]))
            .unwrap();
        assert_eq!(r.remaining, ["/usr/bin/emu3270", "extra", "-x"]);
        assert_eq!(r.remaining_count(), 3);
    }

    // ---- toggles ----

    #[test]
    fn unknown_toggle_is_fatal() {
        let b = unix();
        let log = Logger::new();
        let err = Resolver::new(&b, &log, MockCollaborators::new())
            .resolve(&argv(&["-set", "bogus"]))
            .unwrap_err();
        assert!(matches!(err, EmuError::Toggle(ToggleError::Unknown { .. })));
        assert!(err.to_string().starts_with("Unknown toggle name 'bogus'."));
    }

    #[test]
    fn set_and_clear_toggles() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&["-set", "monocase", "-clear", "aidWait"]))
            .unwrap();
        assert!(r.config.toggles[Toggle::MonoCase]);
        assert!(!r.config.toggles[Toggle::AidWait]);
    }

    // ---- session files ----

    #[test]
    fn command_line_overrides_session_regardless_of_order() {
        let b = unix();
        for list in [
            &["-model", "3", "work.emu3270"][..],
            &["work.emu3270", "-model", "3"][..],
        ] {
            let log = Logger::new();
            let r = Resolver::new(&b, &log, session("emu3270.model: 2\nemu3270.hostname: mf\n"))
                .resolve(&argv(list))
                .unwrap();
            assert_eq!(r.config.model.as_deref(), Some("3"), "{list:?}");
            assert_eq!(r.host.as_deref(), Some("mf"));
            assert_eq!(r.profile_name.as_deref(), Some("work"));
            assert_eq!(r.session_path.as_deref(), Some(Path::new("work.emu3270")));
        }
    }

    #[test]
    fn session_toggles_are_overridden_by_command_line() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, session("emu3270.monoCase: true\n"))
            .resolve(&argv(&["-clear", "monoCase", "s.emu3270"]))
            .unwrap();
        assert!(!r.config.toggles[Toggle::MonoCase]);
    }

    #[test]
    fn session_without_hostname_has_no_host() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, session("emu3270.model: 2\n"))
            .resolve(&argv(&["dir/s.EMU3270"]))
            .unwrap();
        assert_eq!(r.host, None);
        assert_eq!(r.profile_name.as_deref(), Some("s"));
        assert!(!r.config.once);
    }

    #[test]
    fn session_load_failure_is_fatal() {
        let b = unix();
        let log = Logger::new();
        let mut mock = MockCollaborators::new();
        mock.expect_load_session().returning(|path, _| {
            Err(SessionError::Io {
                path: path.display().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        });
        let err = Resolver::new(&b, &log, mock)
            .resolve(&argv(&["gone.emu3270"]))
            .unwrap_err();
        assert!(matches!(err, EmuError::Session(_)));
        assert!(!err.wants_usage());
    }

    // ---- profile ----

    #[test]
    fn profile_hostname_becomes_host() {
        let b = unix();
        let log = Logger::new();
        let mut mock = MockCollaborators::new();
        mock.expect_merge_profile().times(1).returning(|cfg| {
            cfg.hostname = Some("from-profile".to_string());
            cfg.model = Some("5".to_string());
            true
        });
        let r = Resolver::new(&b, &log, mock)
            .resolve(&argv(&["-model", "2"]))
            .unwrap();
        assert_eq!(r.host.as_deref(), Some("from-profile"));
        assert_eq!(r.config.model.as_deref(), Some("2"));
        assert_eq!(r.profile_name, None);
    }

    #[test]
    fn positional_host_beats_profile_hostname() {
        let b = unix();
        let log = Logger::new();
        let mut mock = MockCollaborators::new();
        mock.expect_merge_profile().returning(|cfg| {
            cfg.hostname = Some("from-profile".to_string());
            true
        });
        let r = Resolver::new(&b, &log, mock)
            .resolve(&argv(&["h"]))
            .unwrap();
        assert_eq!(r.host.as_deref(), Some("h"));
    }

    // ---- -e ----

    #[test]
    fn local_command_is_the_host() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&["-apl", "-e", "sh", "-c", "x"]))
            .unwrap();
        assert_eq!(r.local_command.as_deref(), Some("-e sh -c x"));
        assert_eq!(r.host.as_deref(), Some("-e sh -c x"));
        assert!(r.config.apl_mode);
    }

    #[test]
    fn without_local_process_e_is_a_positional() {
        let b = unix().with_local_process(false);
        let log = Logger::new();
        let err = Resolver::new(&b, &log, MockCollaborators::new())
            .resolve(&argv(&["-e", "sh"]))
            .unwrap_err();
        assert!(matches!(err, EmuError::Usage(UsageError::UnknownOption(_))));
    }

    #[test]
    fn replay_after_profile_includes_local_command_arguments() {
        let b = unix();
        let log = Logger::new();
        let mut mock = MockCollaborators::new();
        mock.expect_merge_profile().times(1).returning(|cfg| {
            cfg.charset = Some("cp037".to_string());
            true
        });
        let r = Resolver::new(&b, &log, mock)
            .resolve(&argv(&["-e", "sh", "-model", "2"]))
            .unwrap();
        assert_eq!(r.local_command.as_deref(), Some("-e sh -model 2"));
        assert_eq!(r.config.model.as_deref(), Some("2"));
        assert_eq!(r.config.charset.as_deref(), Some("cp037"));
    }

    #[test]
    fn local_command_arguments_are_not_options_without_a_load() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&["-e", "sh", "-model", "2"]))
            .unwrap();
        assert_eq!(r.config.model.as_deref(), Some("4"));
    }

    // ---- info ----

    #[test]
    fn info_is_shown_once_even_after_replay() {
        let b = unix();
        let log = Logger::new();
        let mut mock = session("emu3270.model: 2\n");
        mock.expect_show_info()
            .withf(|i| *i == Info::Version)
            .times(1)
            .return_const(());
        Resolver::new(&b, &log, mock)
            .resolve(&argv(&["-v", "s.emu3270"]))
            .unwrap();
    }

    // ---- reconciliation ----

    #[test]
    fn apl_forces_charset() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&["-apl", "-charset", "cp037"]))
            .unwrap();
        assert_eq!(r.config.charset.as_deref(), Some("apl"));
    }

    #[test]
    fn once_needs_a_host() {
        let b = unix();
        let log = Logger::new();
        let xrm = ["-xrm", "emu3270.once: true"];
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&xrm))
            .unwrap();
        assert!(!r.config.once);

        let with_host: Vec<&str> = xrm.iter().copied().chain(["h"]).collect();
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&with_host))
            .unwrap();
        assert!(r.config.once);
    }

    #[test]
    fn conf_dir_defaults() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, no_profile()).resolve(&argv(&[])).unwrap();
        assert_eq!(r.config.conf_dir.as_deref(), Some(defaults::DEFAULT_CONF_DIR));
        assert_eq!(r.host, None);
    }

    #[test]
    fn debug_tracing_off_disables_trace() {
        let b = unix();
        let log = Logger::new();
        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&["-trace", "-xrm", "*debugTracing: false"]))
            .unwrap();
        assert!(!r.config.toggles[Toggle::Tracing]);

        let r = Resolver::new(&b, &log, no_profile())
            .resolve(&argv(&["-trace"]))
            .unwrap();
        assert!(r.config.toggles[Toggle::Tracing]);
        assert!(log.messages(Severity::Warn).is_empty());
    }
}
