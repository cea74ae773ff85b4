//! Collision occurrence record and its classification flags.
//!
//! A [`CollisionEvent`] describes one observed contact or trigger overlap for
//! a single physics step. It is a plain `Copy` value: containers, publishers
//! and pipeline operators store their own copies, never a reference to the
//! record handed out by the physics callback.
//!
//! Two records are equal when their colliders resolve to the same containing
//! transform (the root of the physics body), so several shapes on one body
//! compare equal and deduplicate to a single active collision.

use std::hash::{Hash, Hasher};

use bevy_ecs::prelude::*;
use bitflags::bitflags;
use glam::Vec3;

use crate::hierarchy::containing_transform;

bitflags! {
    /// Kinds of occurrence a notifier emits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionTypes: u8 {
        /// Solid contacts carrying a [`ContactDetail`].
        const COLLISION = 1 << 0;
        /// Trigger overlaps.
        const TRIGGER = 1 << 1;
    }
}

bitflags! {
    /// Lifecycle phases a notifier processes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionStates: u8 {
        const ENTER = 1 << 0;
        const STAY = 1 << 1;
        const EXIT = 1 << 2;
    }
}

impl Default for CollisionTypes {
    fn default() -> Self {
        CollisionTypes::all()
    }
}

impl Default for CollisionStates {
    fn default() -> Self {
        CollisionStates::all()
    }
}

/// Lifecycle phase of one occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollisionPhase {
    Started,
    Changed,
    Stopped,
}

impl CollisionPhase {
    /// The state flag gating this phase.
    pub fn state(self) -> CollisionStates {
        match self {
            CollisionPhase::Started => CollisionStates::ENTER,
            CollisionPhase::Changed => CollisionStates::STAY,
            CollisionPhase::Stopped => CollisionStates::EXIT,
        }
    }
}

/// Narrow-phase contact information for solid collisions.
///
/// Opaque to the relay; carried through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactDetail {
    pub point: Vec3,
    pub normal: Vec3,
    pub impulse: Vec3,
}

/// One collision or trigger occurrence.
#[derive(Clone, Copy, Debug)]
pub struct CollisionEvent {
    /// Notifier that forwarded this occurrence, `None` if it came from physics.
    pub forward_source: Option<Entity>,
    pub is_trigger: bool,
    /// Present only for solid collisions.
    pub detail: Option<ContactDetail>,
    /// The touched collision shape.
    pub collider: Entity,
    /// Root of the collider's physics body. Identity key.
    pub containing_transform: Entity,
}

impl CollisionEvent {
    /// Trigger overlap against `collider` whose body root is `containing_transform`.
    pub fn trigger(collider: Entity, containing_transform: Entity) -> Self {
        Self {
            forward_source: None,
            is_trigger: true,
            detail: None,
            collider,
            containing_transform,
        }
    }

    /// Solid contact against `collider` whose body root is `containing_transform`.
    pub fn contact(collider: Entity, containing_transform: Entity, detail: ContactDetail) -> Self {
        Self {
            forward_source: None,
            is_trigger: false,
            detail: Some(detail),
            collider,
            containing_transform,
        }
    }

    /// Build a record from a raw physics report, resolving the containing
    /// transform from the world.
    ///
    /// Returns `None` if `collider` is missing or not a collider. The contact
    /// detail is dropped for trigger overlaps.
    pub fn resolve(
        world: &World,
        collider: Entity,
        is_trigger: bool,
        detail: Option<ContactDetail>,
    ) -> Option<Self> {
        let containing_transform = containing_transform(world, collider)?;
        Some(Self {
            forward_source: None,
            is_trigger,
            detail: if is_trigger { None } else { detail },
            collider,
            containing_transform,
        })
    }

    /// Copy of this record marked as forwarded by `source`.
    pub fn forwarded_by(mut self, source: Entity) -> Self {
        self.forward_source = Some(source);
        self
    }

    /// The type flag this occurrence belongs to.
    pub fn collision_type(&self) -> CollisionTypes {
        if self.is_trigger {
            CollisionTypes::TRIGGER
        } else {
            CollisionTypes::COLLISION
        }
    }
}

impl PartialEq for CollisionEvent {
    fn eq(&self, other: &Self) -> bool {
        self.containing_transform == other.containing_transform
    }
}

impl Eq for CollisionEvent {}

impl Hash for CollisionEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.containing_transform.hash(state);
    }
}
