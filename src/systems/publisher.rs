//! Publisher operations.
//!
//! A publish walks the publisher's own snapshot. For every collision whose
//! body is not the publisher itself or one of its ancestors, every
//! [`ActiveCollisionConsumer`] in that body's subtree is offered the
//! collision. Consumers that accept are registered on the publisher so
//! [`unpublish`] can clear them later.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::collisionevent::CollisionEvent;
use crate::components::consumer::ActiveCollisionConsumer;
use crate::components::publisher::ActiveCollisionPublisher;
use crate::hierarchy;
use crate::systems::consumer::{clear_consumer, consume_collision};

/// Copy `snapshot` into the publisher on `publisher`.
pub fn set_publisher_collisions(world: &mut World, publisher: Entity, snapshot: &[CollisionEvent]) {
    if let Some(mut component) = world.get_mut::<ActiveCollisionPublisher>(publisher) {
        component.set_active_collisions(snapshot);
    }
}

/// Push the publisher's snapshot to every reachable consumer.
///
/// Returns how many consume calls were accepted.
pub fn publish(world: &mut World, publisher: Entity) -> usize {
    let collisions = match world.get::<ActiveCollisionPublisher>(publisher) {
        Some(component) if component.enabled => component.active_collisions().to_vec(),
        _ => return 0,
    };

    let mut accepted = Vec::new();
    for collision in collisions {
        let body = collision.containing_transform;
        if !hierarchy::exists(world, body) || hierarchy::is_ancestor_or_self(world, body, publisher)
        {
            continue;
        }
        for consumer in hierarchy::find_in_subtree::<ActiveCollisionConsumer>(world, body) {
            if consume_collision(world, consumer, publisher, collision) {
                accepted.push(consumer);
            }
        }
    }

    if let Some(mut component) = world.get_mut::<ActiveCollisionPublisher>(publisher) {
        for &consumer in &accepted {
            component.register_consumer(consumer);
        }
    }
    debug!(
        "publisher {:?} reached {} consumer(s)",
        publisher,
        accepted.len()
    );
    accepted.len()
}

/// Clear every consumer that accepted one of this publisher's publishes and
/// forget them.
pub fn unpublish(world: &mut World, publisher: Entity) {
    let consumers = match world.get_mut::<ActiveCollisionPublisher>(publisher) {
        Some(mut component) if component.enabled => component.take_registered_consumers(),
        _ => return,
    };
    for consumer in consumers {
        clear_consumer(world, consumer);
    }
}
