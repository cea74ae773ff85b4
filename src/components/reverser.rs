use bevy_ecs::prelude::Component;

use crate::components::collisionevent::CollisionEvent;

/// Reverses the order of an active collision snapshot.
///
/// Disabled reversers hand the input back unchanged.
#[derive(Component, Clone, Debug)]
pub struct CollisionOrderReverser {
    pub enabled: bool,
    reversed: Vec<CollisionEvent>,
}

impl Default for CollisionOrderReverser {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionOrderReverser {
    pub fn new() -> Self {
        Self {
            enabled: true,
            reversed: Vec::new(),
        }
    }

    pub fn reverse<'a>(&'a mut self, input: &'a [CollisionEvent]) -> &'a [CollisionEvent] {
        if !self.enabled {
            return input;
        }
        self.reversed.clear();
        self.reversed.extend(input.iter().rev().copied());
        &self.reversed
    }
}
