//! # NIGHTMAZE Physics
//!
//! Kinematic agent controller against a [`CollisionIndex`].
//!
//! Features:
//! - Walking along the flattened look direction, committed only when the
//!   destination is free
//! - Edge-triggered crouch toggle
//! - Jumping and gravity, integrated once the agent has first acted
//!
//! The controller holds no references to the world. Every method that can
//! move the agent takes the current step's index explicitly.

use nightmaze_shared::Vec3;

use crate::config::SimulationConfig;
use crate::spatial::CollisionIndex;

/// Pitch limit in degrees, short of straight up or down.
pub const PITCH_LIMIT: f32 = 89.0;

/// Look direction from yaw and pitch in degrees.
///
/// Yaw 0 looks along +X and yaw 90 along +Z; positive pitch looks up.
#[must_use]
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    let yaw_rad = yaw.to_radians();
    let pitch_rad = pitch.to_radians();
    Vec3::new(
        yaw_rad.cos() * pitch_rad.cos(),
        pitch_rad.sin(),
        yaw_rad.sin() * pitch_rad.cos(),
    )
}

/// What a walk attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// No movement was requested.
    Idle,
    /// The agent moved.
    Moved,
    /// The destination collides; the agent stayed put.
    Blocked,
}

/// Kinematic agent with crouch, jump and gravity.
#[derive(Clone, Debug)]
pub struct AgentController {
    /// Agent position (box top with the default anchor).
    pub position: Vec3,
    /// Vertical speed (units per second, positive is up).
    pub vertical_speed: f32,
    /// Heading in degrees.
    pub yaw: f32,
    /// Elevation in degrees, within [`PITCH_LIMIT`].
    pub pitch: f32,
    /// Is the agent crouched?
    pub crouched: bool,
    /// Has the agent acted yet? Gravity and looking start afterwards.
    pub active: bool,
    crouch_held: bool,
    airborne: bool,
    standing_size: Vec3,
    walk_speed: f32,
    crouch_speed_factor: f32,
    jump_speed: f32,
    gravity: f32,
}

impl AgentController {
    /// Creates an idle, standing agent at `position`.
    #[must_use]
    pub fn new(position: Vec3, config: &SimulationConfig) -> Self {
        Self {
            position,
            vertical_speed: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            crouched: false,
            active: false,
            crouch_held: false,
            airborne: false,
            standing_size: config.agent_size,
            walk_speed: config.walk_speed,
            crouch_speed_factor: config.crouch_speed_factor,
            jump_speed: config.jump_speed,
            gravity: config.gravity,
        }
    }

    /// Current box extents; crouching halves the height.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        if self.crouched {
            Vec3::new(
                self.standing_size.x,
                self.standing_size.y * 0.5,
                self.standing_size.z,
            )
        } else {
            self.standing_size
        }
    }

    /// Direction the agent is looking in.
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        look_direction(self.yaw, self.pitch)
    }

    /// Horizontal heading, ignoring pitch.
    #[must_use]
    pub fn heading(&self) -> Vec3 {
        let yaw_rad = self.yaw.to_radians();
        Vec3::new(yaw_rad.cos(), 0.0, yaw_rad.sin())
    }

    /// Unit vector to the agent's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.heading().cross(Vec3::Y).normalize_or_zero()
    }

    /// Turns the agent. Ignored until the agent has acted.
    pub fn turn(&mut self, yaw_delta: f32, pitch_delta: f32) {
        if !self.active {
            return;
        }
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Walks for `dt` seconds. `forward` and `strafe` are read by sign only;
    /// a diagonal moves at half speed along each axis.
    pub fn walk(
        &mut self,
        forward: f32,
        strafe: f32,
        dt: f32,
        collisions: &CollisionIndex,
    ) -> WalkOutcome {
        let forward = axis_sign(forward);
        let strafe = axis_sign(strafe);
        if forward == 0.0 && strafe == 0.0 {
            return WalkOutcome::Idle;
        }
        self.active = true;

        let mut speed = self.walk_speed * dt;
        if self.crouched {
            speed *= self.crouch_speed_factor;
        }
        if forward != 0.0 && strafe != 0.0 {
            speed *= 0.5;
        }

        let delta = (self.heading() * forward + self.right() * strafe) * speed;
        let target = self.position + delta;
        if target == self.position {
            return WalkOutcome::Idle;
        }
        if collisions.query_all(target, self.size()) {
            return WalkOutcome::Blocked;
        }

        self.position = target;
        WalkOutcome::Moved
    }

    /// Feeds the crouch button state. Toggles on press only; holding the
    /// button does nothing further. Returns true when the agent toggled.
    pub fn update_crouch(&mut self, held: bool) -> bool {
        let pressed = held && !self.crouch_held;
        self.crouch_held = held;
        if !pressed {
            return false;
        }

        self.active = true;
        let shift = self.standing_size.y * 0.5;
        if self.crouched {
            self.position.y += shift;
        } else {
            self.position.y -= shift;
        }
        self.crouched = !self.crouched;
        true
    }

    /// Starts a jump if standing and not already moving vertically, then
    /// integrates the first `dt` of it. Returns true when a jump started.
    pub fn jump(&mut self, dt: f32, collisions: &CollisionIndex) -> bool {
        if self.crouched || self.vertical_speed != 0.0 {
            return false;
        }
        self.active = true;
        self.vertical_speed = self.jump_speed;
        self.integrate_vertical(dt, collisions);
        true
    }

    /// True while the last vertical move succeeded.
    #[inline]
    #[must_use]
    pub const fn is_airborne(&self) -> bool {
        self.airborne
    }

    /// Applies gravity for `dt` seconds. Does nothing until the agent has
    /// acted. Returns true when a fall or rise ends against an obstacle;
    /// an agent already at rest keeps returning false.
    pub fn apply_gravity(&mut self, dt: f32, collisions: &CollisionIndex) -> bool {
        if !self.active {
            return false;
        }
        self.vertical_speed += self.gravity * dt;
        self.integrate_vertical(dt, collisions)
    }

    /// Moves vertically by `v * dt + a * dt^2 / 2`. A colliding destination
    /// stops the agent and zeroes the vertical speed. Returns true when that
    /// stop ends an airborne stretch.
    fn integrate_vertical(&mut self, dt: f32, collisions: &CollisionIndex) -> bool {
        let y = self.position.y + self.vertical_speed * dt + 0.5 * self.gravity * dt * dt;
        let target = self.position.with_y(y);

        if collisions.query_all(target, self.size()) {
            self.vertical_speed = 0.0;
            std::mem::replace(&mut self.airborne, false)
        } else {
            if target != self.position {
                self.airborne = true;
            }
            self.position = target;
            false
        }
    }
}

#[inline]
fn axis_sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
