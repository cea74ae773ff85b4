//! Collision notifier component.
//!
//! A [`CollisionNotifier`] turns raw physics reports into
//! [`CollisionStarted`](crate::events::collision::CollisionStarted),
//! [`CollisionChanged`](crate::events::collision::CollisionChanged) and
//! [`CollisionStopped`](crate::events::collision::CollisionStopped) events and
//! forwards each accepted occurrence to the other notifiers on the touched
//! body. The processing itself lives in
//! [`crate::systems::collisionnotifier`]; this component only holds the
//! filters.
//!
//! # Filters
//!
//! - `emitted_types` – solid collisions, triggers or both
//! - `states` – which lifecycle phases are processed at all
//! - `forwarding_rule` – applied to the notifier that forwarded an occurrence;
//!   occurrences straight from physics skip it

use bevy_ecs::prelude::*;

use crate::components::collisionevent::{
    CollisionEvent, CollisionPhase, CollisionStates, CollisionTypes,
};
use crate::components::rule::Rule;

#[derive(Component, Clone, Debug)]
pub struct CollisionNotifier {
    pub enabled: bool,
    pub emitted_types: CollisionTypes,
    pub states: CollisionStates,
    pub forwarding_rule: Rule,
}

impl Default for CollisionNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionNotifier {
    /// Notifier emitting every type and phase, accepting every forwarder.
    pub fn new() -> Self {
        Self {
            enabled: true,
            emitted_types: CollisionTypes::all(),
            states: CollisionStates::all(),
            forwarding_rule: Rule::AcceptAll,
        }
    }

    pub fn with_types(mut self, types: CollisionTypes) -> Self {
        self.emitted_types = types;
        self
    }

    pub fn with_states(mut self, states: CollisionStates) -> Self {
        self.states = states;
        self
    }

    pub fn with_forwarding_rule(mut self, rule: Rule) -> Self {
        self.forwarding_rule = rule;
        self
    }

    /// Returns true if this notifier should emit `event` for `phase`.
    pub fn can_emit(&self, world: &World, event: &CollisionEvent, phase: CollisionPhase) -> bool {
        if !self.enabled {
            return false;
        }
        if !self.states.contains(phase.state()) {
            return false;
        }
        if !self.emitted_types.intersects(event.collision_type()) {
            return false;
        }
        match event.forward_source {
            Some(source) => self.forwarding_rule.accepts(world, source),
            None => true,
        }
    }
}
