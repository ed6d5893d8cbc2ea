//! # Collision Index
//!
//! Brute-force overlap queries against every box registered this step.
//!
//! An object collides with the agent only when the two overlap on all three
//! axes: one disjoint axis is enough to rule the pair out. Per axis the test
//! is the closed interval overlap `|ca - cb| <= (sa + sb) / 2`, so the answer
//! does not depend on which box is the agent.
//!
//! The agent is described by a position and extents rather than a box; the
//! index's [`VerticalAnchor`] decides how the position maps onto the box.

use nightmaze_shared::Vec3;
use tracing::trace;

use super::bounds::{Bounded, BoundedObject, VerticalAnchor};

/// The current step's obstacles.
#[derive(Clone, Debug, Default)]
pub struct CollisionIndex {
    objects: Vec<BoundedObject>,
    anchor: VerticalAnchor,
}

impl CollisionIndex {
    /// Creates an empty index using the default vertical anchor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index using `anchor` for agent boxes.
    #[must_use]
    pub fn with_anchor(anchor: VerticalAnchor) -> Self {
        Self {
            objects: Vec::new(),
            anchor,
        }
    }

    /// How agent positions map onto boxes.
    #[inline]
    #[must_use]
    pub const fn anchor(&self) -> VerticalAnchor {
        self.anchor
    }

    /// Adds an obstacle. The index keeps its own copy of the bounds.
    pub fn register<B: Bounded + ?Sized>(&mut self, object: &B) {
        self.objects.push(*object.bounds());
    }

    /// Drops every registered obstacle.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of registered obstacles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when nothing is registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Registered obstacles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BoundedObject> {
        self.objects.iter()
    }

    /// The box an agent at `position` with extents `size` occupies.
    #[inline]
    #[must_use]
    pub fn agent_box(&self, position: Vec3, size: Vec3) -> BoundedObject {
        self.anchor.agent_box(position, size)
    }

    /// True when `object` collides with the agent box.
    ///
    /// `object` need not be registered.
    #[must_use]
    pub fn query_one<B: Bounded + ?Sized>(&self, object: &B, position: Vec3, size: Vec3) -> bool {
        object.bounds().overlaps(&self.agent_box(position, size))
    }

    /// True when any registered obstacle collides with the agent box.
    ///
    /// Stops at the first hit; it does not say which obstacle or how many.
    #[must_use]
    pub fn query_all(&self, position: Vec3, size: Vec3) -> bool {
        let agent = self.agent_box(position, size);
        let hit = self.objects.iter().position(|object| object.overlaps(&agent));
        if let Some(index) = hit {
            trace!("Agent box at {:?} hits obstacle {}", position, index);
        }
        hit.is_some()
    }
}
