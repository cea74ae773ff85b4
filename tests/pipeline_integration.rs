//! Integration tests for the slice, sort and reverse operators.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test pipeline_integration
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use std::sync::{Arc, Mutex};

use collision_relay::components::collider::Collider;
use collision_relay::components::collisionevent::CollisionEvent;
use collision_relay::components::nearestsorter::NearestCollisionSorter;
use collision_relay::components::position::Position;
use collision_relay::components::reverser::CollisionOrderReverser;
use collision_relay::components::rigidbody::RigidBody;
use collision_relay::components::slicer::CollisionSlicer;
use collision_relay::events::pipeline::{
    CollisionsRemained, CollisionsReversed, CollisionsSliced, CollisionsSorted,
};
use collision_relay::systems::pipeline::{
    reverse_collisions, slice_collisions, sort_nearest_collisions,
};

fn record<E: Event + Clone>(world: &mut World) -> Arc<Mutex<Vec<E>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let log_clone = log.clone();
    world.add_observer(move |trigger: On<E>| {
        log_clone.lock().unwrap().push(trigger.event().clone());
    });
    world.flush();
    log
}

/// Bodies placed along the x axis at the given distances, one collider each.
fn bodies_at(world: &mut World, xs: &[f32]) -> Vec<CollisionEvent> {
    let events = xs
        .iter()
        .map(|&x| {
            let body = world.spawn((RigidBody, Position::new(x, 0.0, 0.0))).id();
            let collider = world.spawn((Collider, ChildOf(body))).id();
            CollisionEvent::trigger(collider, body)
        })
        .collect();
    world.flush();
    events
}

fn bodies(events: &[CollisionEvent]) -> Vec<Entity> {
    events.iter().map(|e| e.containing_transform).collect()
}

// =============================================================================
// Slicer
// =============================================================================

#[test]
fn slice_splits_and_emits_both_halves() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[1.0, 2.0, 3.0, 4.0, 5.0]);
    let slicer = world.spawn(CollisionSlicer::new(1, 2)).id();
    let sliced_log = record::<CollisionsSliced>(&mut world);
    let remained_log = record::<CollisionsRemained>(&mut world);

    let (sliced, remaining) = slice_collisions(&mut world, slicer, &input).unwrap();

    assert_eq!(bodies(&sliced), bodies(&input[1..3]));
    assert_eq!(
        bodies(&remaining),
        vec![
            input[0].containing_transform,
            input[3].containing_transform,
            input[4].containing_transform
        ]
    );
    assert_eq!(sliced_log.lock().unwrap()[0].collisions, sliced);
    assert_eq!(sliced_log.lock().unwrap()[0].slicer, slicer);
    assert_eq!(remained_log.lock().unwrap()[0].collisions, remaining);
}

#[test]
fn slice_from_end_takes_last_element() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[1.0, 2.0, 3.0]);
    let slicer = world.spawn(CollisionSlicer::new(-1, 4)).id();

    let (sliced, remaining) = slice_collisions(&mut world, slicer, &input).unwrap();

    assert_eq!(bodies(&sliced), vec![input[2].containing_transform]);
    assert_eq!(remaining.len(), 2);
}

#[test]
fn slice_past_end_is_empty() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[1.0, 2.0]);
    let slicer = world.spawn(CollisionSlicer::new(5, 3)).id();

    let (sliced, remaining) = slice_collisions(&mut world, slicer, &input).unwrap();

    assert!(sliced.is_empty());
    assert_eq!(remaining, input);
}

#[test]
fn disabled_slicer_emits_nothing() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[1.0, 2.0]);
    let mut component = CollisionSlicer::new(0, 1);
    component.enabled = false;
    let slicer = world.spawn(component).id();
    let sliced_log = record::<CollisionsSliced>(&mut world);

    assert!(slice_collisions(&mut world, slicer, &input).is_none());
    assert!(sliced_log.lock().unwrap().is_empty());
}

// =============================================================================
// Sorter
// =============================================================================

#[test]
fn sort_orders_nearest_first() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[5.0, 1.0, 3.0]);
    let hand = world.spawn(Position::new(0.0, 0.0, 0.0)).id();
    world
        .entity_mut(hand)
        .insert(NearestCollisionSorter::new(Some(hand)));
    let sorted_log = record::<CollisionsSorted>(&mut world);

    let sorted = sort_nearest_collisions(&mut world, hand, &input);

    assert_eq!(
        bodies(&sorted),
        vec![
            input[1].containing_transform,
            input[2].containing_transform,
            input[0].containing_transform
        ]
    );
    assert_eq!(sorted_log.lock().unwrap().len(), 1);
    assert_eq!(sorted_log.lock().unwrap()[0].collisions, sorted);
}

#[test]
fn sort_keeps_input_untouched() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[2.0, 1.0]);
    let original = input.clone();
    let hand = world.spawn(Position::new(0.0, 0.0, 0.0)).id();
    world
        .entity_mut(hand)
        .insert(NearestCollisionSorter::new(Some(hand)));

    let _ = sort_nearest_collisions(&mut world, hand, &input);

    assert_eq!(bodies(&input), bodies(&original));
}

#[test]
fn sort_without_source_position_passes_through() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[5.0, 1.0]);
    let sorter = world.spawn(NearestCollisionSorter::new(None)).id();
    let sorted_log = record::<CollisionsSorted>(&mut world);

    let out = sort_nearest_collisions(&mut world, sorter, &input);

    assert_eq!(bodies(&out), bodies(&input));
    assert!(sorted_log.lock().unwrap().is_empty());
}

// =============================================================================
// Reverser and chaining
// =============================================================================

#[test]
fn reverse_emits_reversed_copy() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[1.0, 2.0, 3.0]);
    let reverser = world.spawn(CollisionOrderReverser::new()).id();
    let reversed_log = record::<CollisionsReversed>(&mut world);

    let out = reverse_collisions(&mut world, reverser, &input);

    let mut expected = bodies(&input);
    expected.reverse();
    assert_eq!(bodies(&out), expected);
    assert_eq!(reversed_log.lock().unwrap()[0].reverser, reverser);
}

#[test]
fn disabled_reverser_passes_through_silently() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[1.0, 2.0, 3.0]);
    let mut component = CollisionOrderReverser::new();
    component.enabled = false;
    let reverser = world.spawn(component).id();
    let reversed_log = record::<CollisionsReversed>(&mut world);

    let out = reverse_collisions(&mut world, reverser, &input);

    assert_eq!(bodies(&out), bodies(&input));
    assert!(reversed_log.lock().unwrap().is_empty());
}

#[test]
fn farthest_two_via_sort_reverse_slice() {
    let mut world = World::new();
    let input = bodies_at(&mut world, &[4.0, 1.0, 9.0, 2.0]);
    let hand = world
        .spawn((
            Position::new(0.0, 0.0, 0.0),
            CollisionOrderReverser::new(),
            CollisionSlicer::new(0, 2),
        ))
        .id();
    world
        .entity_mut(hand)
        .insert(NearestCollisionSorter::new(Some(hand)));

    let sorted = sort_nearest_collisions(&mut world, hand, &input);
    let reversed = reverse_collisions(&mut world, hand, &sorted);
    let (farthest, _) = slice_collisions(&mut world, hand, &reversed).unwrap();

    assert_eq!(
        bodies(&farthest),
        vec![input[2].containing_transform, input[0].containing_transform]
    );
}
