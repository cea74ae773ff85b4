//! Distance ordering of an active collision snapshot.
//!
//! [`NearestCollisionSorter`] orders collisions ascending by the distance from
//! each collision's containing transform to a source position. Collisions
//! whose position is unknown sort last. A disabled sorter or a missing source
//! hands the input back unchanged.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::collisionevent::CollisionEvent;

#[derive(Component, Clone, Debug)]
pub struct NearestCollisionSorter {
    pub enabled: bool,
    /// Entity whose [`Position`](super::position::Position) is measured from.
    pub source: Option<Entity>,
    sorted: Vec<CollisionEvent>,
}

impl NearestCollisionSorter {
    pub fn new(source: Option<Entity>) -> Self {
        Self {
            enabled: true,
            source,
            sorted: Vec::new(),
        }
    }

    /// Sort `input` by distance to `source`.
    ///
    /// `position_of` supplies the world position of a collision's containing
    /// transform.
    pub fn sort<'a, F>(
        &'a mut self,
        input: &'a [CollisionEvent],
        source: Option<Vec3>,
        position_of: F,
    ) -> &'a [CollisionEvent]
    where
        F: Fn(&CollisionEvent) -> Option<Vec3>,
    {
        let Some(source) = source.filter(|_| self.enabled) else {
            return input;
        };
        let mut keyed: Vec<(f32, CollisionEvent)> = input
            .iter()
            .map(|c| {
                let distance = position_of(c)
                    .map(|p| p.distance_squared(source))
                    .unwrap_or(f32::INFINITY);
                (distance, *c)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        self.sorted.clear();
        self.sorted.extend(keyed.into_iter().map(|(_, c)| c));
        &self.sorted
    }
}
