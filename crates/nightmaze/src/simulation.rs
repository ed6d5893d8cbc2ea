//! # NIGHTMAZE Simulation
//!
//! Fixed-step orchestration of one agent in one maze:
//! ```text
//! Step N:
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. CLAMP DT                                                         │
//! │    └─ Never integrate more than `max_step` at once                  │
//! │                                                                     │
//! │ 2. REBUILD INDICES                                                  │
//! │    ├─ Clear collision and reach indices                             │
//! │    ├─ Register buildings                                            │
//! │    ├─ Register uncollected pickups in both (id = pickup index)      │
//! │    └─ Register the ground plane                                     │
//! │                                                                     │
//! │ 3. INPUT                                                            │
//! │    ├─ Look, walk, crouch, jump                                      │
//! │    └─ Reach query; collect on interact                              │
//! │                                                                     │
//! │ 4. GRAVITY                                                          │
//! │    └─ Only after the agent has first acted                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state the queries see is passed in explicitly. Nothing is global.

use nightmaze_procedural::{LayoutConfig, MazeGenerator, MazeLayout, MazeSeed};
use nightmaze_shared::{as_float_slice, Vec3};
use tracing::{debug, info};

use crate::config::{GameConfig, SimulationConfig};
use crate::error::GameResult;
use crate::events::StepEvent;
use crate::physics::{AgentController, WalkOutcome};
use crate::spatial::{BoundedObject, CollisionIndex, IdentifiedObject, ObjectId, ReachabilityIndex};

/// Vertical centre of the ground slab.
pub const GROUND_ELEVATION: f32 = -1.5;

/// Thickness of the ground slab.
pub const GROUND_THICKNESS: f32 = 10.0;

/// Ground slab sized from the maze's world extents.
#[must_use]
pub fn ground_plane(maze_width: f32, maze_height: f32) -> BoundedObject {
    BoundedObject::new(
        Vec3::new(maze_width / 1.4, GROUND_ELEVATION, -maze_height / 3.1),
        Vec3::new(maze_height * 100.0, GROUND_THICKNESS, maze_width * 100.0),
    )
}

/// Static placement data for one maze.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    /// Building centres.
    pub buildings: Vec<Vec3>,
    /// Pickup centres. A pickup's identifier is its index here.
    pub pickups: Vec<Vec3>,
    /// Light positions.
    pub lights: Vec<Vec3>,
    /// Agent start position.
    pub spawn: Vec3,
    /// Ground slab.
    pub ground: BoundedObject,
}

impl World {
    /// Derives a world from a layout, scattering with `seed`.
    ///
    /// # Errors
    ///
    /// Fails if the layout has no spawn cell.
    pub fn from_layout(layout: &MazeLayout, seed: MazeSeed) -> GameResult<Self> {
        let spawn = layout.spawn_location()?;
        Ok(Self {
            buildings: layout.building_positions(),
            pickups: layout.seeded_pickup_positions(seed),
            lights: layout.seeded_light_positions(seed),
            spawn,
            ground: ground_plane(layout.maze_width(), layout.maze_height()),
        })
    }

    /// Generates a maze and derives its world.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions, an invalid layout configuration, or a maze
    /// without a spawn cell.
    pub fn generate(
        width: usize,
        height: usize,
        seed: MazeSeed,
        layout: &LayoutConfig,
    ) -> GameResult<Self> {
        let maze = MazeGenerator::new(seed).generate(width, height)?;
        Self::from_layout(&MazeLayout::new(maze.grid, layout.clone())?, seed)
    }

    /// Building centres as a flat `[x, y, z, ...]` slice.
    #[must_use]
    pub fn building_coords(&self) -> &[f32] {
        as_float_slice(&self.buildings)
    }

    /// Pickup centres as a flat `[x, y, z, ...]` slice.
    #[must_use]
    pub fn pickup_coords(&self) -> &[f32] {
        as_float_slice(&self.pickups)
    }
}

/// Input for one step. Movement axes are read by sign.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepInput {
    /// Seconds since the previous step.
    pub dt: f32,
    /// Forward (+) or backward (-).
    pub forward: f32,
    /// Right (+) or left (-).
    pub strafe: f32,
    /// Heading change in degrees.
    pub yaw_delta: f32,
    /// Elevation change in degrees.
    pub pitch_delta: f32,
    /// Crouch button held.
    pub crouch: bool,
    /// Jump button held.
    pub jump: bool,
    /// Interact button held.
    pub interact: bool,
}

/// What one step produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepOutcome {
    /// Events in the order they happened.
    pub events: Vec<StepEvent>,
    /// Pickup the agent points at, if any.
    pub interactable: Option<ObjectId>,
    /// Agent position after the step.
    pub position: Vec3,
}

/// Counters over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Steps taken.
    pub steps: u64,
    /// Steps whose dt was clamped.
    pub clamped_steps: u64,
    /// Walks refused by a collision.
    pub bumps: u64,
    /// Jumps started.
    pub jumps: u64,
    /// Pickups collected.
    pub collected: u64,
}

impl RunStats {
    fn record(&mut self, outcome: &StepOutcome) {
        self.steps += 1;
        for event in &outcome.events {
            match event {
                StepEvent::Bumped { .. } => self.bumps += 1,
                StepEvent::Jumped => self.jumps += 1,
                StepEvent::Collected(_) => self.collected += 1,
                StepEvent::CrouchToggled { .. } | StepEvent::Landed { .. } => {}
            }
        }
    }
}

/// One agent walking one maze.
#[derive(Clone, Debug)]
pub struct Simulation {
    world: World,
    config: SimulationConfig,
    agent: AgentController,
    collisions: CollisionIndex,
    reachability: ReachabilityIndex,
    collected: Vec<bool>,
    stats: RunStats,
}

impl Simulation {
    /// Places an idle agent at the world's spawn point.
    #[must_use]
    pub fn new(world: World, config: SimulationConfig) -> Self {
        let agent = AgentController::new(world.spawn, &config);
        let collected = vec![false; world.pickups.len()];
        debug!(
            "Simulation: {} buildings, {} pickups, spawn at {:?}",
            world.buildings.len(),
            world.pickups.len(),
            world.spawn
        );

        Self {
            collisions: CollisionIndex::with_anchor(config.vertical_anchor),
            reachability: ReachabilityIndex::new(config.reach),
            world,
            config,
            agent,
            collected,
            stats: RunStats::default(),
        }
    }

    /// Generates the configured maze and places an agent in it.
    ///
    /// Returns the seed used, which is fresh when the config has none.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration or a maze without a spawn cell.
    pub fn from_config(config: &GameConfig) -> GameResult<(Self, MazeSeed)> {
        config.validate()?;
        let seed = config.generation.resolve_seed();
        info!(
            "Generating {}x{} maze with seed {}",
            config.generation.width,
            config.generation.height,
            seed.value()
        );

        let world = World::generate(
            config.generation.width,
            config.generation.height,
            seed,
            &config.layout,
        )?;
        Ok((Self::new(world, config.simulation.clone()), seed))
    }

    /// Static placement data.
    #[inline]
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// The agent.
    #[inline]
    #[must_use]
    pub const fn agent(&self) -> &AgentController {
        &self.agent
    }

    /// The agent, for scripted setups.
    #[inline]
    pub fn agent_mut(&mut self) -> &mut AgentController {
        &mut self.agent
    }

    /// Obstacles as of the last rebuild.
    #[inline]
    #[must_use]
    pub const fn collisions(&self) -> &CollisionIndex {
        &self.collisions
    }

    /// Interactables as of the last rebuild.
    #[inline]
    #[must_use]
    pub const fn reachability(&self) -> &ReachabilityIndex {
        &self.reachability
    }

    /// Run counters.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> RunStats {
        self.stats
    }

    /// True once the pickup has been collected.
    #[must_use]
    pub fn is_collected(&self, id: ObjectId) -> bool {
        self.collected.get(id.index()).copied().unwrap_or(false)
    }

    /// Pickups not yet collected.
    #[must_use]
    pub fn remaining_pickups(&self) -> usize {
        self.collected.iter().filter(|&&done| !done).count()
    }

    /// Clears both indices and registers every live object.
    pub fn rebuild(&mut self) {
        self.collisions.clear();
        self.reachability.clear();

        for &center in &self.world.buildings {
            self.collisions
                .register(&BoundedObject::new(center, self.config.building_size));
        }

        for ((id, &center), &done) in (0u32..).zip(&self.world.pickups).zip(&self.collected) {
            if done {
                continue;
            }
            let pickup = IdentifiedObject::new(
                BoundedObject::new(center, self.config.pickup_size),
                ObjectId(id),
            );
            self.collisions.register(&pickup);
            self.reachability.register(pickup);
        }

        self.collisions.register(&self.world.ground);
    }

    /// Advances one step.
    pub fn step(&mut self, input: &StepInput) -> StepOutcome {
        let dt = if input.dt.is_finite() {
            input.dt.clamp(0.0, self.config.max_step)
        } else {
            0.0
        };
        if dt < input.dt {
            self.stats.clamped_steps += 1;
        }

        self.rebuild();

        let mut events = Vec::new();
        let agent = &mut self.agent;

        agent.turn(input.yaw_delta, input.pitch_delta);

        if agent.walk(input.forward, input.strafe, dt, &self.collisions) == WalkOutcome::Blocked {
            events.push(StepEvent::Bumped {
                position: agent.position,
            });
        }

        if agent.update_crouch(input.crouch) {
            events.push(StepEvent::CrouchToggled {
                crouched: agent.crouched,
            });
        }

        if input.jump && agent.jump(dt, &self.collisions) {
            events.push(StepEvent::Jumped);
        }

        let interactable = self
            .reachability
            .query(agent.position, agent.look_direction());
        if let Some(id) = interactable.filter(|_| input.interact) {
            if let Some(done) = self.collected.get_mut(id.index()) {
                if !*done {
                    *done = true;
                    events.push(StepEvent::Collected(id));
                    info!(
                        "Collected pickup {} ({} remaining)",
                        id,
                        self.collected.iter().filter(|&&d| !d).count()
                    );
                }
            }
        }

        if agent.apply_gravity(dt, &self.collisions) {
            events.push(StepEvent::Landed {
                position: agent.position,
            });
        }

        let outcome = StepOutcome {
            events,
            interactable,
            position: agent.position,
        };
        self.stats.record(&outcome);
        outcome
    }
}
