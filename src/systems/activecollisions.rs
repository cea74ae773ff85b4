//! Operations on [`ActiveCollisionsContainer`] components.
//!
//! Each function takes the world and the container's entity, mutates the
//! container, then triggers the lifecycle events the mutation produced. All
//! of them are silent no-ops when the entity has no container or the
//! container is disabled.
//!
//! # Events
//!
//! - [`FirstCollisionStarted`] – empty to one element
//! - [`CollisionCountChanged`] – every add and every remove attempt
//! - [`CollisionContentsChanged`] – membership changed or re-evaluation requested
//! - [`AllCollisionsStopped`] – non-empty to empty, including clear and disable

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::activecollisions::{
    ActiveCollisionsContainer, SetTransition, Transitions,
};
use crate::components::collisionevent::CollisionEvent;
use crate::events::activecollisions::{
    AllCollisionsStopped, CollisionContentsChanged, CollisionCountChanged, FirstCollisionStarted,
};
use crate::hierarchy;

/// Add a copy of `event` to the container on `container`.
///
/// Rejected silently when the container is disabled, the collider no longer
/// exists, or the validity rule rejects the collider. Returns true if the
/// set grew.
pub fn add_active_collision(world: &mut World, container: Entity, event: CollisionEvent) -> bool {
    let Some(component) = world.get::<ActiveCollisionsContainer>(container) else {
        return false;
    };
    if !component.enabled {
        trace!("container {:?} disabled, ignoring add", container);
        return false;
    }
    if !hierarchy::exists(world, event.collider) {
        trace!("collider {:?} is gone, ignoring add", event.collider);
        return false;
    }
    if !component.validity.accepts(world, event.collider) {
        trace!(
            "container {:?} rejected collider {:?}",
            container, event.collider
        );
        return false;
    }
    let transitions = match world.get_mut::<ActiveCollisionsContainer>(container) {
        Some(mut component) => component.collisions.add(&event),
        None => return false,
    };
    let grew = !transitions.is_empty();
    emit_transitions(world, container, transitions);
    grew
}

/// Remove the collision with the same containing transform as `event`.
///
/// Returns true if an element was removed.
pub fn remove_active_collision(
    world: &mut World,
    container: Entity,
    event: CollisionEvent,
) -> bool {
    let (removed, transitions) = {
        let Some(mut component) = world.get_mut::<ActiveCollisionsContainer>(container) else {
            return false;
        };
        if !component.enabled {
            return false;
        }
        let removed = component.collisions.contains(&event);
        (removed, component.collisions.remove(&event))
    };
    emit_transitions(world, container, transitions);
    removed
}

/// Empty the container. [`AllCollisionsStopped`] fires if it held anything.
pub fn clear_active_collisions(world: &mut World, container: Entity) {
    let transitions = {
        let Some(mut component) = world.get_mut::<ActiveCollisionsContainer>(container) else {
            return;
        };
        if !component.enabled {
            return;
        }
        component.collisions.clear()
    };
    emit_transitions(world, container, transitions);
}

/// Re-emit [`CollisionContentsChanged`] without touching membership.
pub fn process_contents_changed(world: &mut World, container: Entity) {
    let transitions = match world.get::<ActiveCollisionsContainer>(container) {
        Some(component) if component.enabled => component.collisions.contents_changed(),
        _ => return,
    };
    emit_transitions(world, container, transitions);
}

/// Enable or disable the container.
///
/// Disabling clears first, so observers see [`AllCollisionsStopped`] even
/// when the container is switched off mid-collision.
pub fn set_active_collisions_enabled(world: &mut World, container: Entity, enabled: bool) {
    if !enabled {
        clear_active_collisions(world, container);
    }
    if let Some(mut component) = world.get_mut::<ActiveCollisionsContainer>(container) {
        component.enabled = enabled;
    }
}

/// Owned copy of the container's current contents.
pub fn active_collisions_snapshot(world: &World, container: Entity) -> Vec<CollisionEvent> {
    world
        .get::<ActiveCollisionsContainer>(container)
        .map(|c| c.collisions().snapshot())
        .unwrap_or_default()
}

fn emit_transitions(world: &mut World, container: Entity, transitions: Transitions) {
    for transition in transitions {
        match transition {
            SetTransition::FirstStarted => {
                world.trigger(FirstCollisionStarted { container });
            }
            SetTransition::CountChanged(count) => {
                world.trigger(CollisionCountChanged { container, count });
            }
            SetTransition::ContentsChanged => {
                world.trigger(CollisionContentsChanged { container });
            }
            SetTransition::AllStopped => {
                world.trigger(AllCollisionsStopped { container });
            }
        }
    }
}
