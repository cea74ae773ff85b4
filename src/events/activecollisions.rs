//! Lifecycle events of an
//! [`ActiveCollisionsContainer`](crate::components::activecollisions::ActiveCollisionsContainer).
//!
//! Triggered after the container has finished mutating, in this order:
//! [`FirstCollisionStarted`], [`CollisionCountChanged`],
//! [`CollisionContentsChanged`], [`AllCollisionsStopped`]. Observers reading
//! the container always see the post-mutation contents.

use bevy_ecs::prelude::*;

/// The container went from empty to one collision.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstCollisionStarted {
    pub container: Entity,
}

/// An add or remove ran. `count` is the size afterwards.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionCountChanged {
    pub container: Entity,
    pub count: usize,
}

/// The contents should be re-read.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionContentsChanged {
    pub container: Entity,
}

/// The container went from non-empty to empty.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllCollisionsStopped {
    pub container: Entity,
}
