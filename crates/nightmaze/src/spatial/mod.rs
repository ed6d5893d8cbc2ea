//! # Spatial Queries
//!
//! Per-step indices over axis-aligned boxes.
//!
//! Both indices own plain lists of value-typed boxes. A step clears them
//! and registers every live object again, so nothing registered survives
//! into the next step and no query ever observes a half-built set.
//!
//! - [`CollisionIndex`]: does the agent box overlap any obstacle?
//! - [`ReachabilityIndex`]: which interactable lies on the reach segment?
//!
//! Both are linear scans in registration order. Object counts are in the
//! hundreds, so there is no acceleration structure.

pub mod bounds;
pub mod collision;
pub mod reach;

pub use bounds::{Bounded, BoundedObject, Identified, IdentifiedObject, ObjectId, VerticalAnchor};
pub use collision::CollisionIndex;
pub use reach::{can_reach, segment_may_cross, ReachabilityIndex, RegionCode};
