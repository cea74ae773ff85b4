//! Consumer notifications.
//!
//! [`CollisionConsumed`] fires when a consumer accepts a publish.
//! [`ConsumerCleared`] fires on clear and carries what the consumer held
//! just before, which may be nothing.

use bevy_ecs::prelude::*;

use crate::components::consumer::ConsumedCollision;

#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionConsumed {
    pub consumer: Entity,
    pub consumed: ConsumedCollision,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ConsumerCleared {
    pub consumer: Entity,
    pub previous: Option<ConsumedCollision>,
}
