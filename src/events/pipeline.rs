//! Results of the collision pipeline operators.
//!
//! Each event carries an owned copy of the operator's output, so observers
//! may keep it past the next operator call.

use bevy_ecs::prelude::*;

use crate::components::collisionevent::CollisionEvent;

/// The sliced run produced by a
/// [`CollisionSlicer`](crate::components::slicer::CollisionSlicer).
#[derive(Event, Debug, Clone)]
pub struct CollisionsSliced {
    pub slicer: Entity,
    pub collisions: Vec<CollisionEvent>,
}

/// Everything the slicer left out, in original order.
#[derive(Event, Debug, Clone)]
pub struct CollisionsRemained {
    pub slicer: Entity,
    pub collisions: Vec<CollisionEvent>,
}

#[derive(Event, Debug, Clone)]
pub struct CollisionsSorted {
    pub sorter: Entity,
    pub collisions: Vec<CollisionEvent>,
}

#[derive(Event, Debug, Clone)]
pub struct CollisionsReversed {
    pub reverser: Entity,
    pub collisions: Vec<CollisionEvent>,
}
