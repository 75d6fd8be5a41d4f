//! Toggles: named boolean switches, set from `-set`/`-clear` or resources.
use std::ops::{Index, IndexMut};

use serde::Serialize;
use serde::ser::SerializeMap as _;

use crate::error::ToggleError;
use crate::platform::Build;
use crate::resources::name_matches;

/// A named boolean switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// Fold input and display to upper case.
    MonoCase,
    /// Alternate (underline) cursor shape.
    AltCursor,
    /// Blinking cursor.
    CursorBlink,
    /// Show host response time in the status line.
    ShowTiming,
    /// Show the cursor position in the status line.
    CursorPos,
    /// Data stream and event tracing.
    Tracing,
    /// Show a scroll bar.
    ScrollBar,
    /// Wrap at the end of the line in NVT mode.
    LineWrap,
    /// Fill blank field positions on insert.
    BlankFill,
    /// Save screen images to a file.
    ScreenTrace,
    /// Paste with the left margin of the first line.
    MarginedPaste,
    /// Select rectangles rather than text runs.
    RectangleSelect,
    /// Crosshair cursor.
    Crosshair,
    /// Show control characters.
    VisibleControl,
    /// Wait for the keyboard to unlock after an AID key in scripts.
    AidWait,
    /// Underline fields on consoles without underscore support.
    Underscore,
    /// Paste over the existing field contents.
    OverlayPaste,
}

impl Toggle {
    /// Number of toggles.
    pub const COUNT: usize = 17;

    /// Every toggle, in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::MonoCase,
        Self::AltCursor,
        Self::CursorBlink,
        Self::ShowTiming,
        Self::CursorPos,
        Self::Tracing,
        Self::ScrollBar,
        Self::LineWrap,
        Self::BlankFill,
        Self::ScreenTrace,
        Self::MarginedPaste,
        Self::RectangleSelect,
        Self::Crosshair,
        Self::VisibleControl,
        Self::AidWait,
        Self::Underscore,
        Self::OverlayPaste,
    ];

    /// The canonical (non-alias) name.
    #[must_use]
    pub fn name(self) -> &'static str {
        TOGGLE_NAMES
            .iter()
            .find(|d| d.toggle == self && !d.alias)
            .map_or("", |d| d.name)
    }

    /// Whether this build variant has the toggle.
    ///
    /// Interactive front ends have no mouse-driven or GUI-only toggles;
    /// `underscore` is a Windows console feature. Scripted front ends only
    /// keep the toggles that affect the data stream or tracing.
    #[must_use]
    pub fn is_supported(self, build: &Build) -> bool {
        if build.is_interactive() {
            match self {
                Self::AltCursor
                | Self::CursorBlink
                | Self::ScrollBar
                | Self::MarginedPaste
                | Self::RectangleSelect
                | Self::Crosshair
                | Self::OverlayPaste => false,
                Self::Underscore => build.is_windows(),
                _ => true,
            }
        } else {
            matches!(
                self,
                Self::MonoCase
                    | Self::LineWrap
                    | Self::BlankFill
                    | Self::ScreenTrace
                    | Self::Tracing
                    | Self::AidWait
            )
        }
    }
}

/// The state of every toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggles([bool; Toggle::COUNT]);

// Discriminants run 0..COUNT, so indexing never goes out of bounds.
#[allow(clippy::indexing_slicing)]
impl Index<Toggle> for Toggles {
    type Output = bool;

    fn index(&self, toggle: Toggle) -> &bool {
        &self.0[toggle as usize]
    }
}

#[allow(clippy::indexing_slicing)]
impl IndexMut<Toggle> for Toggles {
    fn index_mut(&mut self, toggle: Toggle) -> &mut bool {
        &mut self.0[toggle as usize]
    }
}

impl Serialize for Toggles {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Toggle::COUNT))?;
        for toggle in Toggle::ALL {
            map.serialize_entry(toggle.name(), &self[toggle])?;
        }
        map.end()
    }
}

/// A name by which a toggle can be set.
#[derive(Debug, Clone, Copy)]
pub struct ToggleDescriptor {
    /// Name as typed by the user.
    pub name: &'static str,
    /// The toggle it controls.
    pub toggle: Toggle,
    /// Aliases are accepted but never listed.
    pub alias: bool,
}

impl ToggleDescriptor {
    const fn new(name: &'static str, toggle: Toggle) -> Self {
        Self {
            name,
            toggle,
            alias: false,
        }
    }

    const fn alias(name: &'static str, toggle: Toggle) -> Self {
        Self {
            name,
            toggle,
            alias: true,
        }
    }

    /// Whether the descriptor's toggle exists in `build`.
    #[must_use]
    pub fn is_supported(&self, build: &Build) -> bool {
        self.toggle.is_supported(build)
    }
}

/// Every toggle name, aliases included.
pub static TOGGLE_NAMES: &[ToggleDescriptor] = &[
    ToggleDescriptor::new("monoCase", Toggle::MonoCase),
    ToggleDescriptor::new("altCursor", Toggle::AltCursor),
    ToggleDescriptor::new("cursorBlink", Toggle::CursorBlink),
    ToggleDescriptor::new("showTiming", Toggle::ShowTiming),
    ToggleDescriptor::new("cursorPos", Toggle::CursorPos),
    ToggleDescriptor::alias("dsTrace", Toggle::Tracing),
    ToggleDescriptor::new("scrollBar", Toggle::ScrollBar),
    ToggleDescriptor::new("lineWrap", Toggle::LineWrap),
    ToggleDescriptor::new("blankFill", Toggle::BlankFill),
    ToggleDescriptor::new("screenTrace", Toggle::ScreenTrace),
    ToggleDescriptor::alias("eventTrace", Toggle::Tracing),
    ToggleDescriptor::new("marginedPaste", Toggle::MarginedPaste),
    ToggleDescriptor::new("rectangleSelect", Toggle::RectangleSelect),
    ToggleDescriptor::new("crosshair", Toggle::Crosshair),
    ToggleDescriptor::new("visibleControl", Toggle::VisibleControl),
    ToggleDescriptor::new("aidWait", Toggle::AidWait),
    ToggleDescriptor::new("underscore", Toggle::Underscore),
    ToggleDescriptor::new("overlayPaste", Toggle::OverlayPaste),
    ToggleDescriptor::new("trace", Toggle::Tracing),
];

/// Toggle lookup and the `-set`/`-clear` pass for one build variant.
#[derive(Debug, Clone, Copy)]
pub struct ToggleRegistry<'a> {
    build: &'a Build,
}

impl<'a> ToggleRegistry<'a> {
    /// Create a registry for `build`.
    #[must_use]
    pub const fn new(build: &'a Build) -> Self {
        Self { build }
    }

    fn supported(&self) -> impl Iterator<Item = &'static ToggleDescriptor> + '_ {
        TOGGLE_NAMES.iter().filter(|d| d.is_supported(self.build))
    }

    /// Find a supported toggle by name, ignoring ASCII case.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Toggle> {
        self.supported()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .map(|d| d.toggle)
    }

    /// Find a supported toggle by resource name: the exact name, or the
    /// name with its first character upper-cased.
    #[must_use]
    pub fn lookup_resource(&self, name: &str) -> Option<Toggle> {
        self.supported()
            .find(|d| name_matches(d.name, name))
            .map(|d| d.toggle)
    }

    /// Sorted, deduplicated, alias-free names of the supported toggles.
    #[must_use]
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .supported()
            .filter(|d| !d.alias)
            .map(|d| d.name.to_string())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Apply every `-set NAME` / `-clear NAME` pair in `tokens` and return
    /// the remaining tokens in order.
    ///
    /// A trailing `-set` or `-clear` with no name is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Unknown`] if a name matches no supported toggle.
    pub fn dispatch(
        &self,
        tokens: &[String],
        toggles: &mut Toggles,
    ) -> Result<Vec<String>, ToggleError> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            let value = match token.as_str() {
                "-set" => true,
                "-clear" => false,
                _ => {
                    out.push(token.clone());
                    continue;
                }
            };
            let Some(name) = iter.next() else {
                break;
            };
            let toggle = self.lookup(name).ok_or_else(|| ToggleError::Unknown {
                name: name.clone(),
                available: self.sorted_names(),
            })?;
            toggles[toggle] = value;
        }
        Ok(out)
    }
}
