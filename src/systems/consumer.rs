//! Consumer operations.
//!
//! [`consume_collision`] is what a publisher calls for each consumer it
//! reaches. The consumer checks its publisher validity rule against the
//! publisher's source container and, if accepted, holds the occurrence and
//! triggers [`CollisionConsumed`]. Rejections and disabled consumers change
//! nothing and emit nothing.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::collisionevent::CollisionEvent;
use crate::components::consumer::{ActiveCollisionConsumer, ConsumedCollision};
use crate::components::publisher::ActiveCollisionPublisher;
use crate::events::consumer::{CollisionConsumed, ConsumerCleared};

/// Offer `collision` from `publisher` to `consumer`. Returns true if accepted.
pub fn consume_collision(
    world: &mut World,
    consumer: Entity,
    publisher: Entity,
    collision: CollisionEvent,
) -> bool {
    let Some(source_container) = world
        .get::<ActiveCollisionPublisher>(publisher)
        .map(|p| p.source_or(publisher))
    else {
        trace!("consume from {:?} ignored: not a publisher", publisher);
        return false;
    };
    let accepted = match world.get::<ActiveCollisionConsumer>(consumer) {
        Some(component) => {
            component.enabled && component.publisher_validity.accepts(world, source_container)
        }
        None => false,
    };
    if !accepted {
        trace!(
            "consumer {:?} rejected publisher {:?} (source {:?})",
            consumer, publisher, source_container
        );
        return false;
    }

    let consumed = ConsumedCollision {
        publisher,
        source_container,
        collision,
    };
    if let Some(mut component) = world.get_mut::<ActiveCollisionConsumer>(consumer) {
        component.hold(consumed);
    }
    world.trigger(CollisionConsumed { consumer, consumed });
    true
}

/// Clear `consumer`, triggering [`ConsumerCleared`] with what it held.
///
/// The event fires before the state is reset, so observers reading the
/// component still see the previous occurrence.
pub fn clear_consumer(world: &mut World, consumer: Entity) {
    let previous = match world.get::<ActiveCollisionConsumer>(consumer) {
        Some(component) if component.enabled => component.current().copied(),
        _ => return,
    };
    world.trigger(ConsumerCleared { consumer, previous });
    if let Some(mut component) = world.get_mut::<ActiveCollisionConsumer>(consumer) {
        component.take();
    }
}
