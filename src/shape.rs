//! Shape classification over raw fragment text.
//!
//! Classification is shallow on purpose: a fragment is a `text`, `circle` or
//! `rectangle` shape if the matching `type: '...'` marker appears anywhere in
//! it, and rectangle dimensions come from the first `width:` / `height:`
//! digit runs. Nested shapes and duplicate fields are not disambiguated.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{
    BACKDROP_MIN_SIDE, BACKDROP_Z, BACKGROUND_MIN_SIDE, BACKGROUND_Z, CIRCLE_Z, CONTAINER_MIN_SIDE, CONTAINER_Z,
    CONTENT_Z, TEXT_Z,
};

/// `width: N` or `height: N`. One alternation so both fields come from a
/// single left-to-right pass; the two shapes of match can never overlap.
/// `\d` is Unicode-aware, so any decimal digit script counts.
static DIMENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(width|height): (\d+)").expect("dimension pattern is a valid regex"));

/// A single Unicode decimal digit (general category Nd).
static DECIMAL_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is a valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Text,
    Circle,
    Rectangle,
}

impl ShapeKind {
    /// Precedence order when a fragment carries more than one marker.
    const PRECEDENCE: [ShapeKind; 3] = [ShapeKind::Text, ShapeKind::Circle, ShapeKind::Rectangle];

    /// Detect the kind of a shape fragment from its `type:` marker.
    ///
    /// Both quote styles are accepted. The first kind in precedence order
    /// (text, circle, rectangle) whose marker is present wins.
    #[must_use]
    pub fn classify(fragment: &str) -> Option<Self> {
        Self::PRECEDENCE.into_iter().find(|kind| kind.marked_in(fragment))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
        }
    }

    fn marked_in(self, fragment: &str) -> bool {
        let name = self.name();
        fragment.contains(&format!("type: '{name}'")) || fragment.contains(&format!("type: \"{name}\""))
    }

    /// Resolve the z-index this kind of shape gets.
    ///
    /// # Errors
    ///
    /// Returns [`Skip::MissingDimensions`] for a rectangle whose fragment has
    /// no `width:` or no `height:` digit run.
    pub fn z_index(self, fragment: &str) -> Result<u32, Skip> {
        match self {
            Self::Text => Ok(TEXT_Z),
            Self::Circle => Ok(CIRCLE_Z),
            Self::Rectangle => {
                let dims = Dimensions::scan(fragment).ok_or(Skip::MissingDimensions)?;
                Ok(RectBand::for_dimensions(dims).z_index())
            }
        }
    }
}

/// Why a recognized shape was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    MissingDimensions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u64,
    pub height: u64,
}

impl Dimensions {
    /// First `width:` and first `height:` values in the fragment, or `None`
    /// if either field is missing.
    ///
    /// Values may use any decimal digit script. Digit runs beyond `u64`
    /// saturate, so they still fall in the largest band.
    #[must_use]
    pub fn scan(fragment: &str) -> Option<Self> {
        let mut width = None;
        let mut height = None;
        for caps in DIMENSION_RE.captures_iter(fragment) {
            let value = decimal_value(&caps[2]);
            match &caps[1] {
                "width" if width.is_none() => width = Some(value),
                "height" if height.is_none() => height = Some(value),
                _ => {}
            }
            if width.is_some() && height.is_some() {
                break;
            }
        }
        Some(Self { width: width?, height: height? })
    }

    fn either_side_at_least(self, min: u64) -> bool {
        self.width >= min || self.height >= min
    }
}

/// Fold a run of decimal digits, in any script, into a saturating `u64`.
fn decimal_value(digits: &str) -> u64 {
    digits
        .chars()
        .fold(0u64, |acc, c| acc.saturating_mul(10).saturating_add(u64::from(digit_value(c))))
}

/// Value of one Unicode decimal digit.
///
/// Every Nd script is encoded as contiguous `0..=9` blocks, and adjacent
/// blocks (the mathematical digit styles) are whole sets of ten, so the
/// offset from the start of the contiguous Nd run, mod 10, is the value.
fn digit_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }
    let code = u32::from(c);
    let mut start = code;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    (code - start) % 10
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Rectangle size band, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectBand {
    /// Either side at least 10000.
    Backdrop,
    /// Either side at least 8000.
    Background,
    /// Either side at least 5000.
    Container,
    Content,
}

impl RectBand {
    #[must_use]
    pub fn for_dimensions(dims: Dimensions) -> Self {
        if dims.either_side_at_least(BACKDROP_MIN_SIDE) {
            Self::Backdrop
        } else if dims.either_side_at_least(BACKGROUND_MIN_SIDE) {
            Self::Background
        } else if dims.either_side_at_least(CONTAINER_MIN_SIDE) {
            Self::Container
        } else {
            Self::Content
        }
    }

    #[must_use]
    pub fn z_index(self) -> u32 {
        match self {
            Self::Backdrop => BACKDROP_Z,
            Self::Background => BACKGROUND_Z,
            Self::Container => CONTAINER_Z,
            Self::Content => CONTENT_Z,
        }
    }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod tests;
