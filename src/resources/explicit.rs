//! Resource families with no typed field.
//!
//! Keymaps, print commands and color maps are looked up by name at run time
//! rather than bound to a configuration field. A name is accepted if it
//! belongs to one of these families; its value is stored in
//! [`Configuration::resources`](crate::config::Configuration::resources).
use crate::platform::{Build, Feature};

/// How a family name is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyKind {
    /// The name must equal the family name.
    Flat,
    /// `family.<anything>`, with at least one character after the dot.
    Wild,
    /// The family name followed by a host color name or its index.
    Color,
}

/// A family of explicitly named resources.
#[derive(Debug, Clone, Copy)]
pub struct ExplicitFamily {
    /// Family name, or the base name for [`FamilyKind::Color`].
    pub name: &'static str,
    /// How resource names are matched against `name`.
    pub kind: FamilyKind,
    /// Build features the family needs.
    pub requires: &'static [Feature],
}

const fn family(
    name: &'static str,
    kind: FamilyKind,
    requires: &'static [Feature],
) -> ExplicitFamily {
    ExplicitFamily {
        name,
        kind,
        requires,
    }
}

const ANY: &[Feature] = &[Feature::Interactive];
const UNIX: &[Feature] = &[Feature::Interactive, Feature::Unix];
const WINDOWS: &[Feature] = &[Feature::Interactive, Feature::Windows];

/// Every explicit family.
pub static EXPLICIT_FAMILIES: &[ExplicitFamily] = &[
    family("keymap", FamilyKind::Wild, ANY),
    family("assocCommand", FamilyKind::Flat, ANY),
    family("luCommandLine", FamilyKind::Flat, ANY),
    family("printTextScreensPerPage", FamilyKind::Flat, ANY),
    family("printer.codepage", FamilyKind::Flat, WINDOWS),
    family("printer.command", FamilyKind::Flat, ANY),
    family("printer.name", FamilyKind::Flat, WINDOWS),
    family("printTextFont", FamilyKind::Flat, WINDOWS),
    family("printTextHorizontalMargin", FamilyKind::Flat, WINDOWS),
    family("printTextOrientation", FamilyKind::Flat, WINDOWS),
    family("printTextSize", FamilyKind::Flat, WINDOWS),
    family("printTextVerticalMargin", FamilyKind::Flat, WINDOWS),
    family("hostColorForDefault", FamilyKind::Flat, WINDOWS),
    family("hostColorForIntensified", FamilyKind::Flat, WINDOWS),
    family("hostColorForProtected", FamilyKind::Flat, WINDOWS),
    family("hostColorForProtectedIntensified", FamilyKind::Flat, WINDOWS),
    family("consoleColorForHostColor", FamilyKind::Color, WINDOWS),
    family("printTextCommand", FamilyKind::Flat, UNIX),
    family("cursesColorForDefault", FamilyKind::Flat, UNIX),
    family("cursesColorForIntensified", FamilyKind::Flat, UNIX),
    family("cursesColorForProtected", FamilyKind::Flat, UNIX),
    family("cursesColorForProtectedIntensified", FamilyKind::Flat, UNIX),
    family("cursesColorForHostColor", FamilyKind::Color, UNIX),
];

/// A 3270 host color and its attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostColor {
    /// Color name, as written in resource names.
    pub name: &'static str,
    /// 3270 color attribute value.
    pub index: u8,
}

/// Host colors accepted after a [`FamilyKind::Color`] family name.
pub static HOST_COLORS: &[HostColor] = &[
    HostColor { name: "NeutralBlack", index: 0xf0 },
    HostColor { name: "Blue", index: 0xf1 },
    HostColor { name: "Red", index: 0xf2 },
    HostColor { name: "Pink", index: 0xf3 },
    HostColor { name: "Green", index: 0xf4 },
    HostColor { name: "Turquoise", index: 0xf5 },
    HostColor { name: "Yellow", index: 0xf6 },
    HostColor { name: "NeutralWhite", index: 0xf7 },
    HostColor { name: "Black", index: 0xf8 },
    HostColor { name: "DeepBlue", index: 0xf9 },
    HostColor { name: "Orange", index: 0xfa },
    HostColor { name: "Purple", index: 0xfb },
    HostColor { name: "PaleGreen", index: 0xfc },
    HostColor { name: "PaleTurquoise", index: 0xfd },
    HostColor { name: "Grey", index: 0xfe },
    HostColor { name: "Gray", index: 0xfe },
    HostColor { name: "White", index: 0xff },
];

impl ExplicitFamily {
    /// Whether `name` belongs to this family. Matching is case-sensitive.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self.kind {
            FamilyKind::Flat => name == self.name,
            FamilyKind::Wild => name
                .strip_prefix(self.name)
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(|suffix| !suffix.is_empty()),
            FamilyKind::Color => name.strip_prefix(self.name).is_some_and(|color| {
                HOST_COLORS
                    .iter()
                    .any(|c| color == c.name || color == c.index.to_string())
            }),
        }
    }
}

/// Whether `name` belongs to an explicit family available in `build`.
#[must_use]
pub fn is_explicit(name: &str, build: &Build) -> bool {
    EXPLICIT_FAMILIES
        .iter()
        .filter(|f| build.supports_all(f.requires))
        .any(|f| f.matches(name))
}
