//! # NIGHTMAZE Step Events
//!
//! Things that happened during one simulation step, in the order they
//! happened. The simulation produces them; whatever drives it (the CLI, a
//! renderer, a test) decides what to do with them.

use std::fmt;

use nightmaze_shared::Vec3;

use crate::spatial::ObjectId;

/// One notable occurrence within a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepEvent {
    // =========================================================================
    // Movement
    // =========================================================================
    /// A walk was refused because the destination collides.
    Bumped {
        /// Position the agent tried to reach from.
        position: Vec3,
    },

    /// The crouch toggle fired.
    CrouchToggled {
        /// State after the toggle.
        crouched: bool,
    },

    /// A jump started.
    Jumped,

    /// A fall or rise ended against an obstacle.
    Landed {
        /// Position the agent came to rest at.
        position: Vec3,
    },

    // =========================================================================
    // Interaction
    // =========================================================================
    /// A pickup was collected and will not be registered again.
    Collected(ObjectId),
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bumped { position } => write!(
                f,
                "bumped at ({:.2}, {:.2}, {:.2})",
                position.x, position.y, position.z
            ),
            Self::CrouchToggled { crouched: true } => f.write_str("crouched"),
            Self::CrouchToggled { crouched: false } => f.write_str("stood up"),
            Self::Jumped => f.write_str("jumped"),
            Self::Landed { position } => write!(f, "stopped at y = {:.2}", position.y),
            Self::Collected(id) => write!(f, "collected pickup {id}"),
        }
    }
}
