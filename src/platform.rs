//! Build variants: the operating system, the front end and optional
//! features that decide which options and resources exist.
use std::fmt;

/// Operating system the emulator was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// Any Unix-like system.
    Unix,
    /// Microsoft Windows.
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Front end flavor: a full-screen interactive terminal or a scripted
/// (headless) engine driven through stdin/stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Curses/console front end.
    Interactive,
    /// Headless front end whose diagnostics go to the script result.
    Scripted,
}

/// Build-variant capability that options, resources and toggles may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Interactive front end.
    Interactive,
    /// Scripted front end.
    Scripted,
    /// Windows build.
    Windows,
    /// Unix build.
    Unix,
    /// TLS support compiled in.
    Tls,
    /// `-e` local process support compiled in.
    LocalProcess,
}

/// The build variant: application name, OS, flavor and optional features.
///
/// Every table in the crate is filtered through [`Build::supports_all`], so a
/// test can exercise a Windows or scripted build on any host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    /// Short application name used for resource prefixes and file suffixes.
    pub app: String,
    /// Target OS.
    pub os: Os,
    /// Front end flavor.
    pub flavor: Flavor,
    /// Whether TLS options and resources are available.
    pub tls: bool,
    /// Whether `-e` starts a local process instead of connecting to a host.
    pub local_process: bool,
}

impl Build {
    /// Detect the build variant of the running binary.
    ///
    /// The flavor is interactive unless `EMU3270_FLAVOR=scripted` is set.
    #[must_use]
    pub fn detect(app: &str) -> Self {
        let os = Self::detect_os();
        let flavor = match std::env::var("EMU3270_FLAVOR") {
            Ok(v) if v.eq_ignore_ascii_case("scripted") => Flavor::Scripted,
            _ => Flavor::Interactive,
        };
        Self {
            app: app.to_string(),
            os,
            flavor,
            tls: true,
            local_process: os == Os::Unix,
        }
    }

    /// Create a build with explicit values.
    #[must_use]
    pub fn new(app: &str, os: Os, flavor: Flavor) -> Self {
        Self {
            app: app.to_string(),
            os,
            flavor,
            tls: true,
            local_process: os == Os::Unix,
        }
    }

    /// Return a copy with TLS support switched on or off.
    #[must_use]
    pub const fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    /// Return a copy with local process support switched on or off.
    #[must_use]
    pub const fn with_local_process(mut self, local_process: bool) -> Self {
        self.local_process = local_process;
        self
    }

    /// Whether this is a Windows build.
    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.os == Os::Windows
    }

    /// Whether this build has an interactive front end.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.flavor == Flavor::Interactive
    }

    /// Check whether this build provides `feature`.
    #[must_use]
    pub fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::Interactive => self.flavor == Flavor::Interactive,
            Feature::Scripted => self.flavor == Flavor::Scripted,
            Feature::Windows => self.os == Os::Windows,
            Feature::Unix => self.os == Os::Unix,
            Feature::Tls => self.tls,
            Feature::LocalProcess => self.local_process,
        }
    }

    /// Check whether this build provides every feature in `features`.
    #[must_use]
    pub fn supports_all(&self, features: &[Feature]) -> bool {
        features.iter().all(|&f| self.supports(f))
    }

    fn detect_os() -> Os {
        if cfg!(target_os = "windows") {
            Os::Windows
        } else {
            Os::Unix
        }
    }
}
