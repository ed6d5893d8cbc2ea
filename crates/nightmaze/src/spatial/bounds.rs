//! Axis-aligned boxes and the capabilities query indices rely on.

use std::fmt;

use nightmaze_shared::Vec3;
use serde::{Deserialize, Serialize};

/// Identifier of an interactable object within one registration batch.
///
/// Identifiers are reassigned every time the world is rebuilt; they are
/// not stable handles across steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Position in the list the identifier was assigned from.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Closed axis-aligned box `[center - size / 2, center + size / 2]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundedObject {
    center: Vec3,
    size: Vec3,
}

impl BoundedObject {
    /// Creates a box. Negative size components are clamped to zero.
    #[must_use]
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            size: Vec3::new(size.x.max(0.0), size.y.max(0.0), size.z.max(0.0)),
        }
    }

    /// Creates a box from its corners.
    #[must_use]
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new((min + max) * 0.5, max - min)
    }

    /// Centre position.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Full extents.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vec3 {
        self.size
    }

    /// Minimum corner.
    #[inline]
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    /// Maximum corner.
    #[inline]
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }

    /// True when the two boxes overlap on all three axes.
    ///
    /// Touching faces count as overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        a_min.x <= b_max.x
            && b_min.x <= a_max.x
            && a_min.y <= b_max.y
            && b_min.y <= a_max.y
            && a_min.z <= b_max.z
            && b_min.z <= a_max.z
    }

    /// True when `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        let (min, max) = (self.min(), self.max());
        (min.x..=max.x).contains(&point.x)
            && (min.y..=max.y).contains(&point.y)
            && (min.z..=max.z).contains(&point.z)
    }
}

/// An interactable box: bounds plus an identifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdentifiedObject {
    bounds: BoundedObject,
    id: ObjectId,
}

impl IdentifiedObject {
    /// Attaches an identifier to a box.
    #[must_use]
    pub const fn new(bounds: BoundedObject, id: ObjectId) -> Self {
        Self { bounds, id }
    }
}

/// Anything that occupies a box in world space.
pub trait Bounded {
    /// The occupied box.
    fn bounds(&self) -> &BoundedObject;
}

/// Anything that carries an interaction identifier.
pub trait Identified {
    /// The identifier assigned at registration.
    fn id(&self) -> ObjectId;
}

impl Bounded for BoundedObject {
    #[inline]
    fn bounds(&self) -> &BoundedObject {
        self
    }
}

impl Bounded for IdentifiedObject {
    #[inline]
    fn bounds(&self) -> &BoundedObject {
        &self.bounds
    }
}

impl Identified for IdentifiedObject {
    #[inline]
    fn id(&self) -> ObjectId {
        self.id
    }
}

/// Where an agent's position sits on its box's vertical axis.
///
/// The horizontal axes always treat the position as the centre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    /// Position is the top of the box; it extends `size.y` downward.
    #[default]
    Top,
    /// Position is the centre of the box.
    Center,
}

impl VerticalAnchor {
    /// The box an agent at `position` with extents `size` occupies.
    #[must_use]
    pub fn agent_box(self, position: Vec3, size: Vec3) -> BoundedObject {
        match self {
            Self::Top => BoundedObject::new(position.with_y(position.y - size.y * 0.5), size),
            Self::Center => BoundedObject::new(position, size),
        }
    }
}
