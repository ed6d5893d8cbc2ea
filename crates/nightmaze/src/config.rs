//! # Game Configuration
//!
//! Everything a run needs, loaded once at startup from TOML. Every section
//! and every field may be omitted.
//!
//! ```toml
//! [generation]
//! width = 41
//! height = 41
//! seed = 12345
//!
//! [layout]
//! pickup_chance = 0.5
//!
//! [simulation]
//! reach = 4.0
//! vertical_anchor = "center"
//! ```

use std::fs;
use std::path::Path;

use nightmaze_procedural::{LayoutConfig, MazeSeed};
use nightmaze_shared::{constants, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GameError, GameResult};
use crate::spatial::VerticalAnchor;

/// Maze generation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Fixed seed. A fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 41,
            height: 41,
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// The configured seed, or a fresh one.
    #[must_use]
    pub fn resolve_seed(&self) -> MazeSeed {
        self.seed.map_or_else(MazeSeed::random, MazeSeed::new)
    }
}

/// Box sizes and motion constants for the fixed-step simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Collision extents of one building.
    pub building_size: Vec3,
    /// Collision and reach extents of one pickup.
    pub pickup_size: Vec3,
    /// Standing agent extents.
    pub agent_size: Vec3,
    /// Length of the reach segment.
    pub reach: f32,
    /// Walking speed.
    pub walk_speed: f32,
    /// Speed multiplier while crouched.
    pub crouch_speed_factor: f32,
    /// Upward speed at jump start.
    pub jump_speed: f32,
    /// Vertical acceleration.
    pub gravity: f32,
    /// Longest step the simulation integrates at once.
    pub max_step: f32,
    /// How the agent position maps onto its box vertically.
    pub vertical_anchor: VerticalAnchor,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            building_size: constants::BUILDING_SIZE,
            pickup_size: constants::PICKUP_SIZE,
            agent_size: constants::AGENT_SIZE,
            reach: constants::REACH,
            walk_speed: constants::WALK_SPEED,
            crouch_speed_factor: constants::CROUCH_SPEED_FACTOR,
            jump_speed: constants::JUMP_SPEED,
            gravity: constants::GRAVITY,
            max_step: constants::MAX_STEP,
            vertical_anchor: VerticalAnchor::default(),
        }
    }
}

impl SimulationConfig {
    /// Checks the values a simulation cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> GameResult<()> {
        let sizes = [
            ("building_size", self.building_size),
            ("pickup_size", self.pickup_size),
            ("agent_size", self.agent_size),
        ];
        for (name, size) in sizes {
            if !size.is_finite() || size.x < 0.0 || size.y < 0.0 || size.z < 0.0 {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {size:?}"
                )));
            }
        }

        let scalars = [
            ("reach", self.reach),
            ("walk_speed", self.walk_speed),
            ("crouch_speed_factor", self.crouch_speed_factor),
            ("jump_speed", self.jump_speed),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if !self.gravity.is_finite() {
            return Err(GameError::InvalidConfig("gravity must be finite".into()));
        }
        if !self.max_step.is_finite() || self.max_step <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "max_step must be positive, got {}",
                self.max_step
            )));
        }

        Ok(())
    }
}

/// A complete run configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Maze size and seed.
    pub generation: GenerationConfig,
    /// Grid-to-world mapping.
    pub layout: LayoutConfig,
    /// Boxes and motion.
    pub simulation: SimulationConfig,
}

impl GameConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ConfigParse`] for malformed TOML and a
    /// validation error for out-of-range values.
    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ConfigIo`] if the file cannot be read, otherwise
    /// as [`Self::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first section's validation error.
    pub fn validate(&self) -> GameResult<()> {
        if self.generation.width == 0 || self.generation.height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "maze dimensions must be at least 1, got {}x{}",
                self.generation.width, self.generation.height
            )));
        }
        self.layout.validate()?;
        self.simulation.validate()
    }
}
