//! Active collision consumer component.
//!
//! An [`ActiveCollisionConsumer`] sits somewhere in a body's hierarchy and
//! receives what publishers push to it. It is either empty or holding the
//! last accepted [`ConsumedCollision`]:
//!
//! - accepted consume: Empty/Holding -> Holding (overwrites)
//! - clear: Holding -> Empty
//! - rejected consume or disabled: no change

use bevy_ecs::prelude::*;

use crate::components::collisionevent::CollisionEvent;
use crate::components::rule::Rule;

/// Occurrence accepted by a consumer together with who published it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsumedCollision {
    pub publisher: Entity,
    /// The publisher's sender identity the validity rule was checked against.
    pub source_container: Entity,
    pub collision: CollisionEvent,
}

#[derive(Component, Clone, Debug)]
pub struct ActiveCollisionConsumer {
    pub enabled: bool,
    /// Applied to the publisher's source container.
    pub publisher_validity: Rule,
    current: Option<ConsumedCollision>,
}

impl Default for ActiveCollisionConsumer {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveCollisionConsumer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            publisher_validity: Rule::AcceptAll,
            current: None,
        }
    }

    pub fn with_publisher_validity(mut self, rule: Rule) -> Self {
        self.publisher_validity = rule;
        self
    }

    pub fn current(&self) -> Option<&ConsumedCollision> {
        self.current.as_ref()
    }

    pub fn is_holding(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn hold(&mut self, consumed: ConsumedCollision) {
        self.current = Some(consumed);
    }

    pub(crate) fn take(&mut self) -> Option<ConsumedCollision> {
        self.current.take()
    }
}
