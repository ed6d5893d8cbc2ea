//! # World Constants
//!
//! Default world-unit values. Every one of these can be overridden through
//! configuration; these are what a fresh game uses.

use crate::math::Vec3;

// =============================================================================
// GRID TO WORLD MAPPING
// =============================================================================

/// Horizontal world units per grid column (X axis).
pub const COLUMN_SPACING: f32 = 16.25;

/// Depth world units per grid row (negative Z axis).
pub const ROW_SPACING: f32 = 14.5;

/// Y placement of building centres.
pub const BUILDING_ELEVATION: f32 = 11.2;

/// Multiplier from grid extent to ground-plane extent.
pub const EXTENT_SCALE: f32 = 2.0;

// =============================================================================
// SCATTERED OBJECTS
// =============================================================================

/// Number of light positions scattered over the maze.
pub const LIGHT_COUNT: usize = 30;

/// Lowest light elevation.
pub const LIGHT_BASE_HEIGHT: f32 = 25.0;

/// Width of the band above `LIGHT_BASE_HEIGHT` lights are jittered in.
pub const LIGHT_JITTER: f32 = 5.0;

/// Probability that a passage cell holds a pickup.
pub const PICKUP_CHANCE: f64 = 1.0 / 3.0;

/// Exclusive upper bound of the whole-unit X offset of a pickup.
pub const PICKUP_OFFSET_X: u32 = 8;

/// Exclusive upper bound of the whole-unit Z offset of a pickup.
pub const PICKUP_OFFSET_Z: u32 = 6;

/// Y placement of pickups.
pub const PICKUP_ELEVATION: f32 = -0.78;

// =============================================================================
// SPAWN
// =============================================================================

/// First row and column considered when searching for a spawn cell.
pub const SPAWN_OFFSET: usize = 3;

/// Y placement of the agent at spawn (top of the agent box).
pub const SPAWN_ELEVATION: f32 = 7.0;

// =============================================================================
// BOXES AND MOTION
// =============================================================================

/// Collision extents of one building.
pub const BUILDING_SIZE: Vec3 = Vec3::new(20.0, 25.0, 15.0);

/// Collision and reach extents of one pickup.
pub const PICKUP_SIZE: Vec3 = Vec3::new(8.0, 14.0, 8.0);

/// Standing agent extents.
pub const AGENT_SIZE: Vec3 = Vec3::new(0.5, 2.0, 0.5);

/// Length of the agent's reach segment.
pub const REACH: f32 = 3.0;

/// Walking speed (world units per second).
pub const WALK_SPEED: f32 = 30.0;

/// Speed multiplier while crouched.
pub const CROUCH_SPEED_FACTOR: f32 = 0.5;

/// Upward speed at the start of a jump.
pub const JUMP_SPEED: f32 = 30.0;

/// Vertical acceleration (world units per second squared).
pub const GRAVITY: f32 = 8.0 * -9.81;

/// Longest simulated step; slower frames are clamped to this.
pub const MAX_STEP: f32 = 1.0 / 15.0;
