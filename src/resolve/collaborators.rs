//! Services the resolver calls out to: session loading, the home profile,
//! and version/help output.
use std::path::{Path, PathBuf};

use crate::cli::{Info, help_lines};
use crate::config::Configuration;
use crate::config::session::read_resource_file;
use crate::error::SessionError;
use crate::logging::Log;
use crate::platform::Build;
use crate::resources::ResourceStore;

/// Hooks used by [`Resolver`](super::Resolver).
#[cfg_attr(test, mockall::automock)]
pub trait Collaborators {
    /// Load the session file at `path` into `cfg`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read; resolution stops.
    fn load_session(&mut self, path: &Path, cfg: &mut Configuration) -> Result<(), SessionError>;

    /// Merge the user's profile into `cfg`. Returns `true` if one was read.
    fn merge_profile(&mut self, cfg: &mut Configuration) -> bool;

    /// Print version or help output.
    fn show_info(&mut self, info: Info);
}

/// Collaborators backed by the filesystem and a [`Log`].
pub struct Standard<'a> {
    build: &'a Build,
    log: &'a dyn Log,
    profile: Option<PathBuf>,
}

impl std::fmt::Debug for Standard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Standard")
            .field("build", self.build)
            .field("log", &"<dyn Log>")
            .field("profile", &self.profile)
            .finish()
    }
}

impl<'a> Standard<'a> {
    /// Create collaborators for `build`.
    ///
    /// Interactive builds merge `~/.<app>pro`; scripted builds have no
    /// profile.
    #[must_use]
    pub fn new(build: &'a Build, log: &'a dyn Log) -> Self {
        let profile = build
            .is_interactive()
            .then(|| home_dir().map(|home| home.join(format!(".{}pro", build.app))))
            .flatten();
        Self {
            build,
            log,
            profile,
        }
    }

    /// Use `profile` instead of the default profile path.
    #[must_use]
    pub fn with_profile(mut self, profile: Option<PathBuf>) -> Self {
        self.profile = profile;
        self
    }

    const fn store(&self) -> ResourceStore<'a> {
        ResourceStore::new(self.build, self.log)
    }
}

impl Collaborators for Standard<'_> {
    fn load_session(&mut self, path: &Path, cfg: &mut Configuration) -> Result<(), SessionError> {
        let applied = read_resource_file(path, &self.store(), cfg)?;
        self.log
            .debug(&format!("Read {applied} resources from {}", path.display()));
        Ok(())
    }

    fn merge_profile(&mut self, cfg: &mut Configuration) -> bool {
        let Some(path) = self.profile.as_deref() else {
            return false;
        };
        if !path.is_file() {
            self.log
                .debug(&format!("No profile at {}", path.display()));
            return false;
        }
        match read_resource_file(path, &self.store(), cfg) {
            Ok(applied) => {
                self.log
                    .debug(&format!("Read {applied} resources from {}", path.display()));
                true
            }
            Err(e) => {
                self.log.warn(&e.to_string());
                false
            }
        }
    }

    fn show_info(&mut self, info: Info) {
        match info {
            Info::Version => {
                self.log.info(&format!("{} {}", self.build.app, crate::VERSION));
                self.log.info(&format!("Build options: {}", build_options(self.build)));
            }
            Info::Help => {
                self.log.info(&usage_line(&self.build.app));
                self.log.info("Options:");
                for line in help_lines(self.build) {
                    self.log.info(&line);
                }
            }
        }
    }
}

/// `Usage: <prog> [options] [ps:][LUname@]hostname[:port]`
#[must_use]
pub fn usage_line(program: &str) -> String {
    format!("Usage: {program} [options] [ps:][LUname@]hostname[:port]")
}

fn build_options(build: &Build) -> String {
    let mut opts = vec![
        build.os.to_string(),
        if build.is_interactive() {
            "interactive".to_string()
        } else {
            "scripted".to_string()
        },
    ];
    if build.tls {
        opts.push("+tls".to_string());
    }
    if build.local_process {
        opts.push("+local-process".to_string());
    }
    opts.join(" ")
}

fn home_dir() -> Option<PathBuf> {
    let var = if cfg!(target_os = "windows") {
        std::env::var("USERPROFILE").or_else(|_| std::env::var("HOME"))
    } else {
        std::env::var("HOME")
    };
    var.ok().map(PathBuf::from)
}
