//! Scene hierarchy queries used by forwarding and publish fan-out.
//!
//! The relay never walks a live scene graph directly. Everything it needs to
//! know about parenting goes through these helpers, which read the
//! [`ChildOf`]/[`Children`] relationship stored in the [`World`]:
//!
//! - [`containing_transform`] – resolve a collider to the root of its physics body
//! - [`is_ancestor_or_self`] – ancestry test used by the self-forwarding and self-publish guards
//! - [`find_in_subtree`] – collect every entity carrying a component under a root

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;

use crate::components::collider::Collider;
use crate::components::rigidbody::RigidBody;

/// Parent of `entity`, if it has one.
pub fn parent_of(world: &World, entity: Entity) -> Option<Entity> {
    world.get::<ChildOf>(entity).map(ChildOf::parent)
}

/// Returns true if the entity exists in the world.
pub fn exists(world: &World, entity: Entity) -> bool {
    world.get_entity(entity).is_ok()
}

/// Returns true when `ancestor` is `entity` itself or any of its parents.
pub fn is_ancestor_or_self(world: &World, ancestor: Entity, entity: Entity) -> bool {
    let mut current = Some(entity);
    while let Some(e) = current {
        if e == ancestor {
            return true;
        }
        current = parent_of(world, e);
    }
    false
}

/// Resolve the root transform of the physics body owning `collider`.
///
/// The nearest ancestor-or-self carrying a [`RigidBody`] wins. A collider with
/// no body above it is its own containing transform. Returns `None` when the
/// entity is gone or is not a [`Collider`].
pub fn containing_transform(world: &World, collider: Entity) -> Option<Entity> {
    if !exists(world, collider) || world.get::<Collider>(collider).is_none() {
        return None;
    }
    Some(body_root(world, collider))
}

/// Nearest ancestor-or-self with a [`RigidBody`], or `entity` itself.
///
/// Unlike [`containing_transform`] this accepts any entity, which is what the
/// notifier needs when it resolves its own body.
pub fn body_root(world: &World, entity: Entity) -> Entity {
    let mut current = Some(entity);
    while let Some(e) = current {
        if world.get::<RigidBody>(e).is_some() {
            return e;
        }
        current = parent_of(world, e);
    }
    entity
}

/// Every entity in the subtree rooted at `root` (root included) that carries `C`.
///
/// Order is depth-first pre-order following [`Children`] order.
pub fn find_in_subtree<C: Component>(world: &World, root: Entity) -> Vec<Entity> {
    let mut found = Vec::new();
    if !exists(world, root) {
        return found;
    }
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        if world.get::<C>(entity).is_some() {
            found.push(entity);
        }
        if let Some(children) = world.get::<Children>(entity) {
            let children: &[Entity] = children;
            // Reverse so the first child is visited first.
            stack.extend(children.iter().rev().copied());
        }
    }
    found
}
