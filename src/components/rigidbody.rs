//! Physics body root marker.
//!
//! The [`RigidBody`] component marks the root of a physics body. Every
//! [`Collider`](super::collider::Collider) below it (or on the same entity)
//! belongs to that body, so overlapping shapes of one body collapse to a
//! single active collision.
//!
//! # Example
//! ```ignore
//! let body = world.spawn(RigidBody).id();
//! world.spawn((Collider, ChildOf(body)));
//! world.spawn((Collider, ChildOf(body)));
//! // both colliders resolve to `body`
//! ```

use bevy_ecs::prelude::Component;

/// Tag component marking the root transform of a physics body.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody;
