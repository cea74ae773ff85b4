//! Integration tests for active collision containers.
//!
//! Covers the lifecycle events in order, the validity rule and the
//! enable/disable hooks.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test active_collisions_integration
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use std::sync::{Arc, Mutex};

use collision_relay::components::activecollisions::ActiveCollisionsContainer;
use collision_relay::components::collider::Collider;
use collision_relay::components::collisionevent::CollisionEvent;
use collision_relay::components::group::Group;
use collision_relay::components::rigidbody::RigidBody;
use collision_relay::components::rule::Rule;
use collision_relay::events::activecollisions::{
    AllCollisionsStopped, CollisionContentsChanged, CollisionCountChanged, FirstCollisionStarted,
};
use collision_relay::systems::activecollisions::{
    active_collisions_snapshot, add_active_collision, clear_active_collisions,
    process_contents_changed, remove_active_collision, set_active_collisions_enabled,
};

/// Every container event, in arrival order.
#[derive(Debug, Clone, PartialEq)]
enum Seen {
    First,
    Count(usize),
    Contents,
    AllStopped,
}

fn record_all(world: &mut World) -> Arc<Mutex<Vec<Seen>>> {
    let log = Arc::new(Mutex::new(Vec::new()));

    let l = log.clone();
    world.add_observer(move |_trigger: On<FirstCollisionStarted>| {
        l.lock().unwrap().push(Seen::First);
    });
    let l = log.clone();
    world.add_observer(move |trigger: On<CollisionCountChanged>| {
        l.lock().unwrap().push(Seen::Count(trigger.event().count));
    });
    let l = log.clone();
    world.add_observer(move |_trigger: On<CollisionContentsChanged>| {
        l.lock().unwrap().push(Seen::Contents);
    });
    let l = log.clone();
    world.add_observer(move |_trigger: On<AllCollisionsStopped>| {
        l.lock().unwrap().push(Seen::AllStopped);
    });
    world.flush();
    log
}

/// Spawn a body with one collider and return the resolved trigger event.
fn touch(world: &mut World) -> CollisionEvent {
    let body = world.spawn(RigidBody).id();
    let collider = world.spawn((Collider, ChildOf(body))).id();
    world.flush();
    CollisionEvent::resolve(world, collider, true, None).unwrap()
}

#[test]
fn lifecycle_events_arrive_in_order() {
    let mut world = World::new();
    let container = world.spawn(ActiveCollisionsContainer::new()).id();
    let a = touch(&mut world);
    let b = touch(&mut world);
    let seen = record_all(&mut world);

    assert!(add_active_collision(&mut world, container, a));
    assert!(add_active_collision(&mut world, container, b));
    assert!(remove_active_collision(&mut world, container, a));
    assert!(remove_active_collision(&mut world, container, b));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            Seen::First,
            Seen::Count(1),
            Seen::Contents,
            Seen::Count(2),
            Seen::Contents,
            Seen::Count(1),
            Seen::Contents,
            Seen::Count(0),
            Seen::Contents,
            Seen::AllStopped,
        ]
    );
}

#[test]
fn second_collider_of_same_body_is_not_added() {
    let mut world = World::new();
    let container = world.spawn(ActiveCollisionsContainer::new()).id();
    let body = world.spawn(RigidBody).id();
    let c1 = world.spawn((Collider, ChildOf(body))).id();
    let c2 = world.spawn((Collider, ChildOf(body))).id();
    world.flush();
    let seen = record_all(&mut world);

    let e1 = CollisionEvent::resolve(&world, c1, true, None).unwrap();
    let e2 = CollisionEvent::resolve(&world, c2, true, None).unwrap();
    assert!(add_active_collision(&mut world, container, e1));
    assert!(!add_active_collision(&mut world, container, e2));

    let snapshot = active_collisions_snapshot(&world, container);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].collider, c1);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![Seen::First, Seen::Count(1), Seen::Contents]
    );
}

#[test]
fn removing_absent_element_reports_count_but_not_all_stopped() {
    let mut world = World::new();
    let container = world.spawn(ActiveCollisionsContainer::new()).id();
    let a = touch(&mut world);
    let seen = record_all(&mut world);

    assert!(!remove_active_collision(&mut world, container, a));

    let seen = seen.lock().unwrap();
    assert!(seen.contains(&Seen::Count(0)));
    assert!(!seen.contains(&Seen::AllStopped));
}

#[test]
fn validity_rule_checks_the_collider() {
    let mut world = World::new();
    let container = world
        .spawn(ActiveCollisionsContainer::new().with_validity(Rule::in_group("friend")))
        .id();
    let body = world.spawn(RigidBody).id();
    let friend = world
        .spawn((Collider, Group::new("friend"), ChildOf(body)))
        .id();
    let stranger_body = world.spawn(RigidBody).id();
    let stranger = world.spawn((Collider, ChildOf(stranger_body))).id();
    world.flush();
    let seen = record_all(&mut world);

    let rejected = CollisionEvent::resolve(&world, stranger, true, None).unwrap();
    let accepted = CollisionEvent::resolve(&world, friend, true, None).unwrap();
    assert!(!add_active_collision(&mut world, container, rejected));
    assert!(seen.lock().unwrap().is_empty());
    assert!(add_active_collision(&mut world, container, accepted));
    assert_eq!(active_collisions_snapshot(&world, container).len(), 1);
}

#[test]
fn despawned_collider_is_not_added() {
    let mut world = World::new();
    let container = world.spawn(ActiveCollisionsContainer::new()).id();
    let event = touch(&mut world);
    world.despawn(event.collider);

    assert!(!add_active_collision(&mut world, container, event));
    assert!(active_collisions_snapshot(&world, container).is_empty());
}

#[test]
fn clear_only_reports_when_something_was_held() {
    let mut world = World::new();
    let container = world.spawn(ActiveCollisionsContainer::new()).id();
    let a = touch(&mut world);
    let seen = record_all(&mut world);

    clear_active_collisions(&mut world, container);
    assert!(seen.lock().unwrap().is_empty());

    add_active_collision(&mut world, container, a);
    seen.lock().unwrap().clear();
    clear_active_collisions(&mut world, container);

    assert!(seen.lock().unwrap().contains(&Seen::AllStopped));
    assert!(active_collisions_snapshot(&world, container).is_empty());
}

#[test]
fn contents_changed_request_keeps_membership() {
    let mut world = World::new();
    let container = world.spawn(ActiveCollisionsContainer::new()).id();
    let a = touch(&mut world);
    add_active_collision(&mut world, container, a);
    let seen = record_all(&mut world);

    process_contents_changed(&mut world, container);

    assert_eq!(*seen.lock().unwrap(), vec![Seen::Contents]);
    assert_eq!(active_collisions_snapshot(&world, container), vec![a]);
}

#[test]
fn disabling_stops_everything_and_ignores_later_adds() {
    let mut world = World::new();
    let container = world.spawn(ActiveCollisionsContainer::new()).id();
    let a = touch(&mut world);
    let b = touch(&mut world);
    add_active_collision(&mut world, container, a);
    let seen = record_all(&mut world);

    set_active_collisions_enabled(&mut world, container, false);
    assert_eq!(seen.lock().unwrap().last(), Some(&Seen::AllStopped));

    seen.lock().unwrap().clear();
    assert!(!add_active_collision(&mut world, container, b));
    process_contents_changed(&mut world, container);
    assert!(seen.lock().unwrap().is_empty());

    set_active_collisions_enabled(&mut world, container, true);
    assert!(add_active_collision(&mut world, container, b));
    assert_eq!(active_collisions_snapshot(&world, container), vec![b]);
}

#[test]
fn operations_on_missing_container_are_noops() {
    let mut world = World::new();
    let not_a_container = world.spawn_empty().id();
    let a = touch(&mut world);
    let seen = record_all(&mut world);

    assert!(!add_active_collision(&mut world, not_a_container, a));
    assert!(!remove_active_collision(&mut world, not_a_container, a));
    clear_active_collisions(&mut world, not_a_container);
    assert!(active_collisions_snapshot(&world, not_a_container).is_empty());
    assert!(seen.lock().unwrap().is_empty());
}
