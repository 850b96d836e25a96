#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for databuilders.
//!
//! Two layers:
//! - **Shape layer** (`shape`): the closed `TypeShape` tree describing a
//!   declaration's fields, as resolved by a front end
//! - **Manifest layer** (`manifest`): the JSON document a front end hands over,
//!   one `Declaration` per generatable type
//!
//! Plus the naming helpers (`utils`) shared by the planner and the file layout.

pub mod manifest;
pub mod shape;
pub mod utils;

#[cfg(test)]
mod manifest_tests;
#[cfg(test)]
mod shape_tests;

pub use manifest::{Declaration, Manifest, parse_manifest};
pub use shape::{Primitive, ShapeKind, ShapeTag, TypeShape};
pub use utils::FileCase;
