//! Collision notifications and the raw physics report.
//!
//! The engine-integration layer writes one [`RawCollision`] message per
//! overlapping pair and physics step. The
//! [`dispatch_raw_collisions`](crate::systems::collisionnotifier::dispatch_raw_collisions)
//! system drains them and hands each to its notifier, which triggers
//! [`CollisionStarted`], [`CollisionChanged`] or [`CollisionStopped`] for
//! every occurrence it accepts, including forwarded ones.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<CollisionStarted>| {
//!     let ev = trigger.event();
//!     info!("{:?} touched body {:?}", ev.notifier, ev.collision.containing_transform);
//! });
//! ```

use bevy_ecs::prelude::*;

use crate::components::collisionevent::{CollisionEvent, CollisionPhase, ContactDetail};

/// Raw occurrence as reported by the physics layer.
#[derive(Message, Debug, Clone, Copy)]
pub struct RawCollision {
    pub phase: CollisionPhase,
    /// Entity carrying the notifier that received the callback.
    pub notifier: Entity,
    /// The other collision shape.
    pub collider: Entity,
    pub is_trigger: bool,
    pub detail: Option<ContactDetail>,
}

/// A notifier accepted the start of an occurrence.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionStarted {
    pub notifier: Entity,
    pub collision: CollisionEvent,
}

/// A notifier accepted an ongoing occurrence.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionChanged {
    pub notifier: Entity,
    pub collision: CollisionEvent,
}

/// A notifier accepted the end of an occurrence.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionStopped {
    pub notifier: Entity,
    pub collision: CollisionEvent,
}
