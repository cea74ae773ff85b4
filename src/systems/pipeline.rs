//! World-level wrappers around the pipeline operators.
//!
//! Each wrapper runs the operator component on `entity` over `input`,
//! triggers the matching pipeline event with an owned copy of the output and
//! returns that copy so callers can chain operators. The input slice is only
//! read.
//!
//! A missing or disabled operator returns the input unchanged and emits
//! nothing (the slicer returns `None` instead, as it has two outputs).
//!
//! # Example
//! ```ignore
//! let active = active_collisions_snapshot(&world, hand);
//! let nearest = sort_nearest_collisions(&mut world, hand, &active);
//! if let Some((first, _rest)) = slice_collisions(&mut world, hand, &nearest) {
//!     set_publisher_collisions(&mut world, hand, &first);
//! }
//! ```

use bevy_ecs::prelude::*;
use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::components::collisionevent::CollisionEvent;
use crate::components::nearestsorter::NearestCollisionSorter;
use crate::components::position::Position;
use crate::components::reverser::CollisionOrderReverser;
use crate::components::slicer::CollisionSlicer;
use crate::events::pipeline::{
    CollisionsRemained, CollisionsReversed, CollisionsSliced, CollisionsSorted,
};

/// Split `input` with the slicer on `entity` into `(sliced, remaining)`.
pub fn slice_collisions(
    world: &mut World,
    entity: Entity,
    input: &[CollisionEvent],
) -> Option<(Vec<CollisionEvent>, Vec<CollisionEvent>)> {
    let (sliced, remaining) = {
        let mut slicer = world.get_mut::<CollisionSlicer>(entity)?;
        let (sliced, remaining) = slicer.slice(input)?;
        (sliced.to_vec(), remaining.to_vec())
    };
    world.trigger(CollisionsSliced {
        slicer: entity,
        collisions: sliced.clone(),
    });
    world.trigger(CollisionsRemained {
        slicer: entity,
        collisions: remaining.clone(),
    });
    Some((sliced, remaining))
}

/// Order `input` by distance to the sorter's source entity.
pub fn sort_nearest_collisions(
    world: &mut World,
    entity: Entity,
    input: &[CollisionEvent],
) -> Vec<CollisionEvent> {
    let Some(sorter) = world.get::<NearestCollisionSorter>(entity) else {
        return input.to_vec();
    };
    let source = if sorter.enabled {
        sorter
            .source
            .and_then(|s| world.get::<Position>(s))
            .map(|p| p.0)
    } else {
        None
    };
    let Some(source) = source else {
        return input.to_vec();
    };
    let positions: FxHashMap<Entity, Vec3> = input
        .iter()
        .filter_map(|c| {
            world
                .get::<Position>(c.containing_transform)
                .map(|p| (c.containing_transform, p.0))
        })
        .collect();

    let sorted = {
        let Some(mut sorter) = world.get_mut::<NearestCollisionSorter>(entity) else {
            return input.to_vec();
        };
        sorter
            .sort(input, Some(source), |c| {
                positions.get(&c.containing_transform).copied()
            })
            .to_vec()
    };
    world.trigger(CollisionsSorted {
        sorter: entity,
        collisions: sorted.clone(),
    });
    sorted
}

/// Reverse `input` with the reverser on `entity`.
pub fn reverse_collisions(
    world: &mut World,
    entity: Entity,
    input: &[CollisionEvent],
) -> Vec<CollisionEvent> {
    let reversed = {
        let Some(mut reverser) = world.get_mut::<CollisionOrderReverser>(entity) else {
            return input.to_vec();
        };
        if !reverser.enabled {
            return input.to_vec();
        }
        reverser.reverse(input).to_vec()
    };
    world.trigger(CollisionsReversed {
        reverser: entity,
        collisions: reversed.clone(),
    });
    reversed
}
