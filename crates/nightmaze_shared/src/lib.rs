//! # NIGHTMAZE Shared
//!
//! Value types used across the workspace.
//!
//! ## RULE
//!
//! This crate must NEVER depend on rendering, audio, windowing or file I/O.
//! Layout and collision code both build on it, so it stays a leaf.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use math::{as_float_slice, Vec2, Vec3};
