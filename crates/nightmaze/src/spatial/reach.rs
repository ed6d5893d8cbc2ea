//! # Reachability Index
//!
//! Answers "which interactable is the agent pointing at?".
//!
//! The reach segment runs from the agent's origin to
//! `origin + reach * direction`. Each registered box is projected onto the
//! XY, XZ and ZY planes, and the segment is tested against each projection
//! with Cohen-Sutherland outcodes:
//!
//! - both endpoints inside: accepted
//! - endpoints share an outside region: rejected (trivial reject)
//! - anything else: accepted
//!
//! The object is reachable only if all three planes accept. The last case
//! makes this an approximate test: a segment can pass near a corner without
//! touching the box and still be accepted.

use std::ops::BitAnd;

use nightmaze_shared::{Vec2, Vec3};
use tracing::trace;

use super::bounds::{Bounded, BoundedObject, Identified, IdentifiedObject, ObjectId};

/// Outcode of a point against a 2D rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionCode(u8);

impl RegionCode {
    /// Inside on both axes.
    pub const INSIDE: Self = Self(0);
    /// Below the minimum on the first axis.
    pub const LEFT: Self = Self(1);
    /// Above the maximum on the first axis.
    pub const RIGHT: Self = Self(2);
    /// Below the minimum on the second axis.
    pub const BELOW: Self = Self(4);
    /// Above the maximum on the second axis.
    pub const ABOVE: Self = Self(8);

    /// Classifies `point` against the rectangle `[min, max]`.
    #[must_use]
    pub fn of(point: Vec2, min: Vec2, max: Vec2) -> Self {
        let mut code = 0;
        if point.x < min.x {
            code |= Self::LEFT.0;
        } else if point.x > max.x {
            code |= Self::RIGHT.0;
        }
        if point.y < min.y {
            code |= Self::BELOW.0;
        } else if point.y > max.y {
            code |= Self::ABOVE.0;
        }
        Self(code)
    }

    /// Raw bit pattern.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when the point lies inside the rectangle.
    #[inline]
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is also set here.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitAnd for RegionCode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Projection onto one axis-aligned plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Plane {
    Xy,
    Xz,
    Zy,
}

impl Plane {
    const ALL: [Self; 3] = [Self::Xy, Self::Xz, Self::Zy];

    #[inline]
    fn project(self, v: Vec3) -> Vec2 {
        match self {
            Self::Xy => Vec2::new(v.x, v.y),
            Self::Xz => Vec2::new(v.x, v.z),
            Self::Zy => Vec2::new(v.z, v.y),
        }
    }
}

/// True unless the segment `start..end` is trivially outside the
/// rectangle `[min, max]`.
#[must_use]
pub fn segment_may_cross(min: Vec2, max: Vec2, start: Vec2, end: Vec2) -> bool {
    let a = RegionCode::of(start, min, max);
    let b = RegionCode::of(end, min, max);
    (a & b).is_inside()
}

/// True when the segment `start..end` is accepted on all three planes.
#[must_use]
pub fn can_reach(object: &BoundedObject, start: Vec3, end: Vec3) -> bool {
    let (min, max) = (object.min(), object.max());
    Plane::ALL.iter().all(|&plane| {
        segment_may_cross(
            plane.project(min),
            plane.project(max),
            plane.project(start),
            plane.project(end),
        )
    })
}

/// The current step's interactables and the reach they are tested with.
#[derive(Clone, Debug)]
pub struct ReachabilityIndex {
    reach: f32,
    objects: Vec<IdentifiedObject>,
}

impl ReachabilityIndex {
    /// Creates an empty index with a fixed reach distance.
    #[must_use]
    pub fn new(reach: f32) -> Self {
        Self {
            reach,
            objects: Vec::new(),
        }
    }

    /// Length of the reach segment for a unit direction.
    #[inline]
    #[must_use]
    pub const fn reach(&self) -> f32 {
        self.reach
    }

    /// Adds an interactable.
    pub fn register(&mut self, object: IdentifiedObject) {
        self.objects.push(object);
    }

    /// Drops every registered interactable.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of registered interactables.
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

    /// First registered object the reach segment from `origin` along
    /// `direction` may touch. Registration order decides ties; distance
    /// does not.
    #[must_use]
    pub fn query(&self, origin: Vec3, direction: Vec3) -> Option<ObjectId> {
        let end = origin + direction * self.reach;
        let found = self
            .objects
            .iter()
            .find(|object| can_reach(object.bounds(), origin, end))
            .map(Identified::id);
        if let Some(id) = found {
            trace!("Object {} within reach of {:?}", id, origin);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> (Vec2, Vec2) {
        (Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0))
    }

    #[test]
    fn test_region_codes() {
        let (min, max) = unit_square();
        assert_eq!(RegionCode::of(Vec2::new(0.5, 0.5), min, max), RegionCode::INSIDE);
        assert_eq!(RegionCode::of(Vec2::new(-1.0, 0.5), min, max), RegionCode::LEFT);
        assert_eq!(RegionCode::of(Vec2::new(2.0, 0.5), min, max), RegionCode::RIGHT);
        assert_eq!(RegionCode::of(Vec2::new(0.5, -1.0), min, max), RegionCode::BELOW);
        assert_eq!(RegionCode::of(Vec2::new(0.5, 2.0), min, max), RegionCode::ABOVE);

        let corner = RegionCode::of(Vec2::new(2.0, 2.0), min, max);
        assert_eq!(corner.bits(), 10);
        assert!(corner.contains(RegionCode::RIGHT));
        assert!(corner.contains(RegionCode::ABOVE));
        assert!(!corner.contains(RegionCode::LEFT));
    }

    #[test]
    fn test_edges_count_as_inside() {
        let (min, max) = unit_square();
        assert!(RegionCode::of(Vec2::new(1.0, 0.0), min, max).is_inside());
    }

    #[test]
    fn test_segment_trivial_reject() {
        let (min, max) = unit_square();
        // Both endpoints to the right.
        assert!(!segment_may_cross(min, max, Vec2::new(2.0, 0.0), Vec2::new(3.0, 5.0)));
        // Crossing straight through.
        assert!(segment_may_cross(min, max, Vec2::new(-1.0, 0.5), Vec2::new(2.0, 0.5)));
        // Passing a corner: not trivially rejectable, so accepted.
        assert!(segment_may_cross(min, max, Vec2::new(0.5, 2.0), Vec2::new(2.0, 0.5)));
    }

    #[test]
    fn test_first_registered_wins() {
        let mut index = ReachabilityIndex::new(10.0);
        let far = BoundedObject::new(Vec3::new(0.0, 0.0, 8.0), Vec3::splat(1.0));
        let near = BoundedObject::new(Vec3::new(0.0, 0.0, 2.0), Vec3::splat(1.0));
        index.register(IdentifiedObject::new(far, ObjectId(7)));
        index.register(IdentifiedObject::new(near, ObjectId(3)));

        assert_eq!(index.query(Vec3::ZERO, Vec3::Z), Some(ObjectId(7)));
    }

    #[test]
    fn test_out_of_reach() {
        let mut index = ReachabilityIndex::new(3.0);
        let object = BoundedObject::new(Vec3::new(0.0, 0.0, 10.0), Vec3::splat(2.0));
        index.register(IdentifiedObject::new(object, ObjectId(0)));
        assert_eq!(index.query(Vec3::ZERO, Vec3::Z), None);

        index.clear();
        assert!(index.is_empty());
    }
}
