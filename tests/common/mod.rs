// Shared helpers for integration tests.
//
// Provides a temporary directory for session and profile files and a fluent
// builder so each integration test can resolve a command line against an
// isolated environment without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::PathBuf;

use emu3270_config::error::EmuError;
use emu3270_config::logging::Logger;
use emu3270_config::platform::{Build, Flavor, Os};
use emu3270_config::resolve::{Resolution, Resolver, Standard};

/// A Unix interactive build named `emu3270`.
pub fn unix() -> Build {
    Build::new("emu3270", Os::Unix, Flavor::Interactive)
}

/// An isolated directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory holding session and profile files.
    pub root: tempfile::TempDir,
    /// Build variant used for resolution.
    pub build: Build,
    /// Profile merged when no session file is named, if any.
    pub profile: Option<PathBuf>,
    /// Logger shared by every resolution in this context.
    pub log: Logger,
}

impl IntegrationTestContext {
    /// Create a new context for a Unix interactive build with no profile.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            build: unix(),
            profile: None,
            log: Logger::new(),
        }
    }

    /// Absolute path of `name` inside the context directory, as a string.
    pub fn path(&self, name: &str) -> String {
        self.root.path().join(name).display().to_string()
    }

    /// Resolve `args` (without the program name).
    pub fn resolve(&self, args: &[&str]) -> Result<Resolution, EmuError> {
        let argv: Vec<String> = std::iter::once("emu3270")
            .chain(args.iter().copied())
            .map(ToString::to_string)
            .collect();
        let collab = Standard::new(&self.build, &self.log).with_profile(self.profile.clone());
        Resolver::new(&self.build, &self.log, collab).resolve(&argv)
    }

    /// Resolve `args`, panicking on a fatal error.
    pub fn resolve_ok(&self, args: &[&str]) -> Resolution {
        self.resolve(args).expect("resolution succeeds")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Resolve for `build` instead of the Unix interactive default.
    pub fn with_build(mut self, build: Build) -> Self {
        self.ctx.build = build;
        self
    }

    /// Write `content` to `name` in the context directory.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.ctx.root.path().join(name), content).expect("write file");
        self
    }

    /// Write `content` as the user's profile and merge it on resolution.
    pub fn with_profile(mut self, content: &str) -> Self {
        let path = self.ctx.root.path().join(".emu3270pro");
        std::fs::write(&path, content).expect("write profile");
        self.ctx.profile = Some(path);
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
