//! # Spatial Query Tests
//!
//! Overlap and reach properties that must hold for any boxes, checked over
//! seeded random samples, plus the concrete cases gameplay relies on.

use nightmaze::{
    can_reach, BoundedObject, CollisionIndex, IdentifiedObject, ObjectId, ReachabilityIndex,
    VerticalAnchor,
};
use nightmaze_shared::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SAMPLES: usize = 2_000;

fn random_vec(rng: &mut ChaCha8Rng, range: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
    )
}

fn random_box(rng: &mut ChaCha8Rng) -> BoundedObject {
    let size = Vec3::new(
        rng.gen_range(0.0..8.0),
        rng.gen_range(0.0..8.0),
        rng.gen_range(0.0..8.0),
    );
    BoundedObject::new(random_vec(rng, 10.0), size)
}

/// Test: Overlap does not depend on argument order.
#[test]
fn test_overlap_is_symmetric() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut hits = 0;
    for _ in 0..SAMPLES {
        let a = random_box(&mut rng);
        let b = random_box(&mut rng);
        assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a:?} vs {b:?}");
        if a.overlaps(&b) {
            hits += 1;
        }
    }
    // The sample must exercise both answers.
    assert!(hits > 0 && hits < SAMPLES);
}

/// Test: Boxes separated along any one axis never overlap.
#[test]
fn test_separated_boxes_do_not_overlap() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let a = random_box(&mut rng);
        let b = random_box(&mut rng);
        let separated = a.max().x < b.min().x
            || b.max().x < a.min().x
            || a.max().y < b.min().y
            || b.max().y < a.min().y
            || a.max().z < b.min().z
            || b.max().z < a.min().z;
        if separated {
            assert!(!a.overlaps(&b), "{a:?} vs {b:?}");
        } else {
            assert!(a.overlaps(&b), "{a:?} vs {b:?}");
        }
    }
}

/// Test: A box contained in another overlaps it.
#[test]
fn test_containment_overlaps() {
    let outer = BoundedObject::new(Vec3::ZERO, Vec3::splat(10.0));
    let inner = BoundedObject::new(Vec3::new(1.0, -1.0, 0.5), Vec3::splat(1.0));
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

/// Test: Boxes sharing only a face still collide.
#[test]
fn test_touching_faces_collide() {
    let a = BoundedObject::new(Vec3::ZERO, Vec3::splat(2.0));
    let b = BoundedObject::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(2.0));
    assert!(a.overlaps(&b));
}

/// Test: A unit obstacle at the origin stops an agent one unit away under
/// either vertical anchor.
#[test]
fn test_agent_collides_under_both_anchors() {
    let obstacle = BoundedObject::new(Vec3::ZERO, Vec3::splat(2.0));
    for anchor in [VerticalAnchor::Top, VerticalAnchor::Center] {
        let mut index = CollisionIndex::with_anchor(anchor);
        index.register(&obstacle);
        assert!(index.query_one(&obstacle, Vec3::new(1.0, 0.0, 0.0), Vec3::splat(2.0)));
        assert!(index.query_all(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(2.0)));
        assert!(!index.query_all(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(2.0)));
    }
}

/// Test: The top anchor hangs the agent box below its position.
#[test]
fn test_top_anchor_hangs_below() {
    let mut index = CollisionIndex::with_anchor(VerticalAnchor::Top);
    // Floor whose top face is at y = 0.
    index.register(&BoundedObject::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(100.0, 2.0, 100.0),
    ));
    let size = Vec3::new(0.5, 2.0, 0.5);

    assert!(!index.query_all(Vec3::new(0.0, 2.5, 0.0), size));
    assert!(index.query_all(Vec3::new(0.0, 1.5, 0.0), size));

    let mut centered = CollisionIndex::with_anchor(VerticalAnchor::Center);
    centered.register(&BoundedObject::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(100.0, 2.0, 100.0),
    ));
    assert!(!centered.query_all(Vec3::new(0.0, 1.5, 0.0), size));
}

/// Test: An empty index never collides.
#[test]
fn test_empty_index_never_collides() {
    let index = CollisionIndex::new();
    assert!(!index.query_all(Vec3::ZERO, Vec3::splat(1e6)));
}

/// Test: Looking at an object from below finds it; looking away does not.
#[test]
fn test_reach_up_and_down() {
    let mut index = ReachabilityIndex::new(15.0);
    index.register(IdentifiedObject::new(
        BoundedObject::new(Vec3::new(0.0, 10.0, 0.0), Vec3::splat(4.0)),
        ObjectId(5),
    ));

    assert_eq!(index.query(Vec3::ZERO, Vec3::Y), Some(ObjectId(5)));
    assert_eq!(index.query(Vec3::ZERO, -Vec3::Y), None);
}

/// Test: Too short a reach misses.
#[test]
fn test_reach_too_short() {
    let mut index = ReachabilityIndex::new(5.0);
    index.register(IdentifiedObject::new(
        BoundedObject::new(Vec3::new(0.0, 10.0, 0.0), Vec3::splat(4.0)),
        ObjectId(0),
    ));
    assert_eq!(index.query(Vec3::ZERO, Vec3::Y), None);
}

/// Test: The first registered object wins, not the nearest.
#[test]
fn test_reach_prefers_registration_order() {
    let mut index = ReachabilityIndex::new(20.0);
    index.register(IdentifiedObject::new(
        BoundedObject::new(Vec3::new(15.0, 0.0, 0.0), Vec3::splat(2.0)),
        ObjectId(1),
    ));
    index.register(IdentifiedObject::new(
        BoundedObject::new(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(2.0)),
        ObjectId(2),
    ));
    assert_eq!(index.query(Vec3::ZERO, Vec3::X), Some(ObjectId(1)));
}

/// Test: Anything reachable stays reachable with a longer reach.
#[test]
fn test_reach_is_monotone() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let reaches = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];
    let mut reached = 0;

    for _ in 0..SAMPLES {
        let object = random_box(&mut rng);
        let origin = random_vec(&mut rng, 15.0);
        let direction = random_vec(&mut rng, 1.0).normalize_or_zero();

        let mut seen = false;
        for reach in reaches {
            let hit = can_reach(&object, origin, origin + direction * reach);
            assert!(!seen || hit, "lost {object:?} at reach {reach}");
            seen |= hit;
        }
        if seen {
            reached += 1;
        }
    }
    assert!(reached > 0);
}

/// Test: A segment starting inside a box always reaches it.
#[test]
fn test_reach_from_inside() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let object = random_box(&mut rng);
        let direction = random_vec(&mut rng, 1.0);
        assert!(can_reach(&object, object.center(), object.center() + direction));
    }
}

/// Test: Clearing the index forgets every object.
#[test]
fn test_reach_clear() {
    let mut index = ReachabilityIndex::new(15.0);
    index.register(IdentifiedObject::new(
        BoundedObject::new(Vec3::new(0.0, 10.0, 0.0), Vec3::splat(4.0)),
        ObjectId(0),
    ));
    index.clear();
    assert!(index.is_empty());
    assert_eq!(index.query(Vec3::ZERO, Vec3::Y), None);
}
