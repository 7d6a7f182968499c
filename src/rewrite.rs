//! Pure text transform: placeholder z-indexes in, kind-specific values out.
//!
//! DESIGN
//! ======
//! The document is split on the shape delimiter. The header (everything
//! before the first delimiter) passes through untouched; every later fragment
//! is classified and has its first `zIndex: 0` replaced. Rejoining with the
//! same delimiter restores the document, so fragment count and order never
//! change and every byte outside the replaced literals is preserved.
//!
//! Only the exact placeholder is rewritten, so running the transform over
//! its own output is a no-op.

use tracing::debug;

use crate::consts::{FRAGMENT_DELIMITER, ZINDEX_PLACEHOLDER};
use crate::shape::{ShapeKind, Skip};

/// Console lines printed after a run. Fixed policy, not the applied outcome.
pub const POLICY_SUMMARY: [&str; 6] = [
    "Fixed zIndex values!",
    "Text shapes: zIndex 10",
    "Circle shapes: zIndex 5",
    "Rectangle backgrounds (>=8000): zIndex 1",
    "Rectangle containers (>=5000): zIndex 2",
    "Rectangle content: zIndex 3",
];

/// What happened to one shape fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentOutcome {
    Rewritten { kind: ShapeKind, z_index: u32 },
    /// Recognized, but the placeholder literal is not present.
    NoPlaceholder { kind: ShapeKind },
    /// Rectangle without a parsable `width:` or `height:`.
    MissingDimensions,
    Unclassified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Shape fragments, excluding the header.
    pub fragments: usize,
    pub text: usize,
    pub circle: usize,
    pub rectangle: usize,
    pub no_placeholder: usize,
    pub missing_dimensions: usize,
    pub unclassified: usize,
}

impl RewriteReport {
    fn record(&mut self, outcome: FragmentOutcome) {
        self.fragments += 1;
        match outcome {
            FragmentOutcome::Rewritten { kind: ShapeKind::Text, .. } => self.text += 1,
            FragmentOutcome::Rewritten { kind: ShapeKind::Circle, .. } => self.circle += 1,
            FragmentOutcome::Rewritten { kind: ShapeKind::Rectangle, .. } => self.rectangle += 1,
            FragmentOutcome::NoPlaceholder { .. } => self.no_placeholder += 1,
            FragmentOutcome::MissingDimensions => self.missing_dimensions += 1,
            FragmentOutcome::Unclassified => self.unclassified += 1,
        }
    }

    #[must_use]
    pub fn rewritten(&self) -> usize {
        self.text + self.circle + self.rectangle
    }

    /// Fragments with a recognized `type:` marker, rewritten or not.
    #[must_use]
    pub fn recognized(&self) -> usize {
        self.fragments - self.unclassified
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.rewritten() > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub report: RewriteReport,
}

/// Rewrite a single shape fragment (delimiter already stripped).
///
/// At most one substitution is made: the first occurrence of the exact
/// literal `zIndex: 0`.
#[must_use]
pub fn rewrite_fragment(fragment: &str) -> (String, FragmentOutcome) {
    let Some(kind) = ShapeKind::classify(fragment) else {
        return (fragment.to_string(), FragmentOutcome::Unclassified);
    };
    let z_index = match kind.z_index(fragment) {
        Ok(z) => z,
        Err(Skip::MissingDimensions) => return (fragment.to_string(), FragmentOutcome::MissingDimensions),
    };
    if !fragment.contains(ZINDEX_PLACEHOLDER) {
        return (fragment.to_string(), FragmentOutcome::NoPlaceholder { kind });
    }
    let replacement = format!("zIndex: {z_index}");
    (fragment.replacen(ZINDEX_PLACEHOLDER, &replacement, 1), FragmentOutcome::Rewritten { kind, z_index })
}

/// Rewrite every shape fragment in a document.
#[must_use]
pub fn rewrite_document(source: &str) -> Rewrite {
    let mut pieces = source.split(FRAGMENT_DELIMITER);
    let mut report = RewriteReport::default();
    let mut out = Vec::new();

    // `split` always yields at least one piece.
    if let Some(header) = pieces.next() {
        out.push(header.to_string());
    }

    for (index, fragment) in pieces.enumerate() {
        let (fixed, outcome) = rewrite_fragment(fragment);
        debug!(index, ?outcome, "shape fragment");
        report.record(outcome);
        out.push(fixed);
    }

    Rewrite { text: out.join(FRAGMENT_DELIMITER), report }
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod tests;
