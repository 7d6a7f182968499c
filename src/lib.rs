//! Rewrites placeholder `zIndex: 0` values in a generated shape-template file.
//!
//! The template generator emits every shape with `zIndex: 0`. This crate
//! assigns real stacking values by shape kind: text above circles above
//! rectangles, with large rectangles pushed furthest back. Matching is purely
//! textual; the file is never parsed as JavaScript.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`fix`] | One run: read, rewrite, write |
//! | [`rewrite`] | Pure document transform and its [`rewrite::RewriteReport`] |
//! | [`shape`] | Kind detection, rectangle dimensions and size bands |
//! | [`target`] | Reading and writing the target file |
//! | [`config`] | Command-line flags and [`config::Config`] |
//! | [`error`] | [`error::FixError`] |
//! | [`consts`] | Delimiter, placeholder, thresholds and assigned values |

pub mod config;
pub mod consts;
pub mod error;
pub mod fix;
pub mod rewrite;
pub mod shape;
pub mod target;
