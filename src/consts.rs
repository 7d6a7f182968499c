//! Literal constants shared by the classifier and the rewriter.

// ── Document layout ─────────────────────────────────────────────

/// Four spaces and an open brace: the start of every shape literal.
pub const FRAGMENT_DELIMITER: &str = "    {";

/// The placeholder the template generator emits for every shape.
pub const ZINDEX_PLACEHOLDER: &str = "zIndex: 0";

/// Target file when no path is configured.
pub const DEFAULT_TARGET_PATH: &str = "src/utils/templates.js";

// ── Rectangle size bands ────────────────────────────────────────

pub const BACKDROP_MIN_SIDE: u64 = 10_000;
pub const BACKGROUND_MIN_SIDE: u64 = 8_000;
pub const CONTAINER_MIN_SIDE: u64 = 5_000;

// ── Assigned z-index values ─────────────────────────────────────

pub const TEXT_Z: u32 = 10;
pub const CIRCLE_Z: u32 = 5;
pub const BACKDROP_Z: u32 = 1;
/// Same value as the backdrop band; the two bands are kept distinct anyway.
pub const BACKGROUND_Z: u32 = 1;
pub const CONTAINER_Z: u32 = 2;
pub const CONTENT_Z: u32 = 3;
