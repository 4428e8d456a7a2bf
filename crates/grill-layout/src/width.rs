#![forbid(unsafe_code)]

//! Tile width annotations.
//!
//! Tiles declare their span with a `gridN` class (for example
//! `"dtm-panel grid6"`). The numeric code is kept verbatim so a placeholder
//! can carry the same class as the tile it stands in for, and is resolved
//! to a [`WidthClass`] against the layout's full-row code.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

static GRID_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)grid(\d+)").expect("grid class regex"));

/// The raw `gridN` annotation of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridClass {
    code: u8,
}

impl GridClass {
    /// Wrap a width code.
    #[inline]
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self { code }
    }

    /// Find the first `gridN` token in a class list.
    ///
    /// The token may sit inside a longer class name (`mygrid6` yields 6),
    /// matching how host stylesheets have always been scanned.
    ///
    /// Returns `None` when there is no annotation, or when its code is zero
    /// or does not fit in a `u8`.
    #[must_use]
    pub fn parse(class_list: &str) -> Option<Self> {
        let caps = GRID_CLASS.captures(class_list)?;
        let code = caps[1].parse::<u8>().ok()?;
        (code > 0).then_some(Self { code })
    }

    /// The numeric width code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.code
    }

    /// The class name as it appears on tiles, e.g. `grid6`.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("grid{}", self.code)
    }

    /// Resolve the span against the code of a full-row tile.
    ///
    /// Only the exact full-row code spans both columns. Any other code,
    /// larger ones included, occupies a single column.
    #[must_use]
    pub const fn width(self, full_span: u8) -> WidthClass {
        if self.code == full_span {
            WidthClass::Full
        } else {
            WidthClass::Half
        }
    }
}

impl std::fmt::Display for GridClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "grid{}", self.code)
    }
}

/// How much of a row a tile spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthClass {
    /// One of the two columns.
    #[default]
    Half,
    /// Both columns.
    Full,
}

impl WidthClass {
    /// Number of columns covered.
    #[inline]
    #[must_use]
    pub const fn columns(self) -> u32 {
        match self {
            Self::Half => 1,
            Self::Full => 2,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }
}
