//! # NIGHTMAZE
//!
//! The main game crate: spatial queries, the agent controller and the
//! fixed-step simulation that ties them to a generated maze.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │ nightmaze_procedural │     │   nightmaze_shared   │
//! │  • Grid / Generator  │     │  • Vec3 / Vec2       │
//! │  • Layout            │     │  • World constants   │
//! └──────────┬───────────┘     └──────────┬───────────┘
//!            │   World (positions)        │
//!            v                            v
//! ┌─────────────────────────────────────────────────────┐
//! │                     Simulation                      │
//! │  ┌────────────────┐  ┌───────────────────────────┐  │
//! │  │ AgentController│─>│ CollisionIndex            │  │
//! │  │  walk / crouch │  │ ReachabilityIndex         │  │
//! │  │  jump / gravity│  │ (rebuilt every step)      │  │
//! │  └────────────────┘  └───────────────────────────┘  │
//! └──────────────────────────┬──────────────────────────┘
//!                            v
//!                       StepEvent
//! ```
//!
//! ## Modules
//!
//! - `spatial`: Boxes, collision and reach indices
//! - `physics`: Agent controller
//! - `simulation`: World rebuild and step orchestration
//! - `config`: TOML game configuration

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod error;
pub mod events;
pub mod physics;
pub mod simulation;
pub mod spatial;

pub use nightmaze_procedural as procedural;
pub use nightmaze_shared as shared;

pub use config::{GameConfig, GenerationConfig, SimulationConfig};
pub use error::{GameError, GameResult};
pub use events::StepEvent;
pub use physics::{look_direction, AgentController, WalkOutcome};
pub use simulation::{ground_plane, RunStats, Simulation, StepInput, StepOutcome, World};
pub use spatial::{
    can_reach, segment_may_cross, Bounded, BoundedObject, CollisionIndex, Identified,
    IdentifiedObject, ObjectId, ReachabilityIndex, RegionCode, VerticalAnchor,
};
