//! Collision shape marker component.
//!
//! An entity tagged with [`Collider`] is a collision shape the external physics
//! layer reports contacts for. Its identity for deduplication is the
//! containing transform of its body, see
//! [`containing_transform`](crate::hierarchy::containing_transform).

use bevy_ecs::prelude::Component;

/// Tag component marking an entity as a collision shape.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Collider;
