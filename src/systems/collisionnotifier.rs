//! Collision notifier processing and forwarding.
//!
//! [`notify_collision`] is the single entry point for one occurrence reaching
//! one notifier, whether it came from physics or was forwarded:
//!
//! 1. Return without emitting if the notifier is missing, disabled, filters
//!    out the phase or type, or its forwarding rule rejects the forwarder.
//! 2. Trigger [`CollisionStarted`], [`CollisionChanged`] or [`CollisionStopped`].
//! 3. Feed an [`ActiveCollisionsContainer`] on the same entity (started adds,
//!    stopped removes).
//! 4. Forward to every other notifier on the touched body's hierarchy, with
//!    this notifier as the forward source.
//!
//! Forwarding is depth-first: each forwarded call, including its own
//! forwarding, completes before the next sibling is visited.
//!
//! # Self-forwarding guard
//!
//! A notifier never forwards into its own body. If the touched body is the
//! notifier's transform or one of its ancestors, or lies inside the subtree of
//! the notifier's own body, no notifier receives the forward.

use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::components::activecollisions::ActiveCollisionsContainer;
use crate::components::collisionevent::{CollisionEvent, CollisionPhase};
use crate::components::collisionnotifier::CollisionNotifier;
use crate::events::collision::{
    CollisionChanged, CollisionStarted, CollisionStopped, RawCollision,
};
use crate::hierarchy;
use crate::systems::activecollisions::{add_active_collision, remove_active_collision};

/// Supplier of raw physics reports.
///
/// The relay is called, it never polls physics itself. Implemented for
/// [`Messages<RawCollision>`] so the engine layer can simply write messages.
pub trait RawCollisionSource {
    /// Take every pending report, oldest first.
    fn poll(&mut self) -> Vec<RawCollision>;
}

impl RawCollisionSource for Messages<RawCollision> {
    fn poll(&mut self) -> Vec<RawCollision> {
        self.drain().collect()
    }
}

/// Exclusive system routing pending [`RawCollision`] messages to their notifiers.
pub fn dispatch_raw_collisions(world: &mut World) {
    let pending = {
        let Some(mut messages) = world.get_resource_mut::<Messages<RawCollision>>() else {
            return;
        };
        messages.poll()
    };
    for raw in pending {
        dispatch_raw_collision(world, raw);
    }
}

/// Drain `source` and route every report.
pub fn dispatch_from_source(world: &mut World, source: &mut impl RawCollisionSource) {
    for raw in source.poll() {
        dispatch_raw_collision(world, raw);
    }
}

/// Resolve one raw report and hand it to its notifier.
///
/// Reports whose collider cannot be resolved are dropped.
pub fn dispatch_raw_collision(world: &mut World, raw: RawCollision) {
    let Some(event) = CollisionEvent::resolve(world, raw.collider, raw.is_trigger, raw.detail)
    else {
        trace!("dropping {:?}: collider {:?} unresolved", raw.phase, raw.collider);
        return;
    };
    notify_collision(world, raw.notifier, raw.phase, event);
}

pub fn notify_started(world: &mut World, notifier: Entity, event: CollisionEvent) {
    notify_collision(world, notifier, CollisionPhase::Started, event);
}

pub fn notify_changed(world: &mut World, notifier: Entity, event: CollisionEvent) {
    notify_collision(world, notifier, CollisionPhase::Changed, event);
}

pub fn notify_stopped(world: &mut World, notifier: Entity, event: CollisionEvent) {
    notify_collision(world, notifier, CollisionPhase::Stopped, event);
}

/// Process one occurrence on `notifier`. Returns true if it was emitted.
pub fn notify_collision(
    world: &mut World,
    notifier: Entity,
    phase: CollisionPhase,
    event: CollisionEvent,
) -> bool {
    let can_emit = match world.get::<CollisionNotifier>(notifier) {
        Some(component) => component.can_emit(world, &event, phase),
        None => false,
    };
    if !can_emit {
        trace!("notifier {:?} skipped {:?} {:?}", notifier, phase, event);
        return false;
    }

    match phase {
        CollisionPhase::Started => world.trigger(CollisionStarted {
            notifier,
            collision: event,
        }),
        CollisionPhase::Changed => world.trigger(CollisionChanged {
            notifier,
            collision: event,
        }),
        CollisionPhase::Stopped => world.trigger(CollisionStopped {
            notifier,
            collision: event,
        }),
    };

    if world.get::<ActiveCollisionsContainer>(notifier).is_some() {
        match phase {
            CollisionPhase::Started => {
                add_active_collision(world, notifier, event);
            }
            CollisionPhase::Stopped => {
                remove_active_collision(world, notifier, event);
            }
            CollisionPhase::Changed => {}
        }
    }

    let targets = forwarding_targets(world, notifier, &event);
    if !targets.is_empty() {
        debug!(
            "notifier {:?} forwarding {:?} to {} notifier(s)",
            notifier,
            phase,
            targets.len()
        );
    }
    let forwarded = event.forwarded_by(notifier);
    for target in targets {
        notify_collision(world, target, phase, forwarded);
    }
    true
}

/// Notifiers that `notifier` forwards `event` to.
///
/// Empty when the touched body is gone or when forwarding would reach back
/// into the notifier's own body.
pub fn forwarding_targets(world: &World, notifier: Entity, event: &CollisionEvent) -> Vec<Entity> {
    let body = event.containing_transform;
    if !hierarchy::exists(world, body) {
        return Vec::new();
    }
    if hierarchy::is_ancestor_or_self(world, body, notifier) {
        return Vec::new();
    }
    let own_body = hierarchy::body_root(world, notifier);
    if hierarchy::is_ancestor_or_self(world, own_body, body) {
        return Vec::new();
    }
    hierarchy::find_in_subtree::<CollisionNotifier>(world, body)
        .into_iter()
        .filter(|&n| n != notifier)
        .collect()
}
