//! # Layout Configuration
//!
//! World-unit constants consumed by layout derivation. Every field defaults
//! to the value in [`nightmaze_shared::constants`], so a TOML file only needs
//! to name what it overrides.
//!
//! ```toml
//! column_spacing = 16.25
//! row_spacing = 14.5
//! pickup_chance = 0.25
//! ```

use nightmaze_shared::constants;
use serde::{Deserialize, Serialize};

use crate::error::{MazeError, MazeResult};

/// Grid-to-world mapping and scatter parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Horizontal world units per grid column.
    pub column_spacing: f32,
    /// Depth world units per grid row.
    pub row_spacing: f32,
    /// Fixed Y placement of buildings.
    pub building_elevation: f32,
    /// Number of scattered lights.
    pub light_count: usize,
    /// Lowest light elevation.
    pub light_base_height: f32,
    /// Height of the band lights are jittered in.
    pub light_jitter: f32,
    /// Probability that a passage cell holds a pickup.
    pub pickup_chance: f64,
    /// Exclusive bound of the whole-unit X offset of a pickup.
    pub pickup_offset_x: u32,
    /// Exclusive bound of the whole-unit Z offset of a pickup.
    pub pickup_offset_z: u32,
    /// Fixed Y placement of pickups.
    pub pickup_elevation: f32,
    /// First row and column the spawn search considers.
    pub spawn_offset: usize,
    /// Y placement of the spawn point.
    pub spawn_elevation: f32,
    /// Grid extent to ground-plane extent multiplier.
    pub extent_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_spacing: constants::COLUMN_SPACING,
            row_spacing: constants::ROW_SPACING,
            building_elevation: constants::BUILDING_ELEVATION,
            light_count: constants::LIGHT_COUNT,
            light_base_height: constants::LIGHT_BASE_HEIGHT,
            light_jitter: constants::LIGHT_JITTER,
            pickup_chance: constants::PICKUP_CHANCE,
            pickup_offset_x: constants::PICKUP_OFFSET_X,
            pickup_offset_z: constants::PICKUP_OFFSET_Z,
            pickup_elevation: constants::PICKUP_ELEVATION,
            spawn_offset: constants::SPAWN_OFFSET,
            spawn_elevation: constants::SPAWN_ELEVATION,
            extent_scale: constants::EXTENT_SCALE,
        }
    }
}

impl LayoutConfig {
    /// Checks the values a layout cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> MazeResult<()> {
        let non_negative = [
            ("column_spacing", self.column_spacing),
            ("row_spacing", self.row_spacing),
            ("light_jitter", self.light_jitter),
            ("extent_scale", self.extent_scale),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(MazeError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        let finite = [
            ("building_elevation", self.building_elevation),
            ("light_base_height", self.light_base_height),
            ("pickup_elevation", self.pickup_elevation),
            ("spawn_elevation", self.spawn_elevation),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(MazeError::InvalidConfig(format!("{name} must be finite")));
            }
        }

        if !(0.0..=1.0).contains(&self.pickup_chance) {
            return Err(MazeError::InvalidConfig(format!(
                "pickup_chance must lie in [0, 1], got {}",
                self.pickup_chance
            )));
        }

        Ok(())
    }
}
