//! Active collision publisher component.
//!
//! An [`ActiveCollisionPublisher`] holds its own copy of an active collision
//! snapshot and, when published, pushes itself plus each collision to every
//! [`ActiveCollisionConsumer`](super::consumer::ActiveCollisionConsumer) found
//! on the touched body's hierarchy. See [`crate::systems::publisher`].
//!
//! The publisher also remembers the consumers that accepted one of its
//! publishes so [`unpublish`](crate::systems::publisher::unpublish) can clear
//! them later.

use bevy_ecs::prelude::*;

use crate::components::collisionevent::CollisionEvent;

#[derive(Component, Clone, Debug)]
pub struct ActiveCollisionPublisher {
    pub enabled: bool,
    /// Sender identity presented to consumers. Defaults to the publisher entity.
    pub source_container: Option<Entity>,
    active_collisions: Vec<CollisionEvent>,
    registered_consumers: Vec<Entity>,
}

impl Default for ActiveCollisionPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveCollisionPublisher {
    pub fn new() -> Self {
        Self {
            enabled: true,
            source_container: None,
            active_collisions: Vec::new(),
            registered_consumers: Vec::new(),
        }
    }

    pub fn with_source_container(mut self, source: Entity) -> Self {
        self.source_container = Some(source);
        self
    }

    /// Replace the held snapshot with a copy of `snapshot`.
    ///
    /// Ignored while disabled. An empty snapshot empties the publisher.
    pub fn set_active_collisions(&mut self, snapshot: &[CollisionEvent]) {
        if !self.enabled {
            return;
        }
        self.active_collisions.clear();
        self.active_collisions.extend_from_slice(snapshot);
    }

    pub fn active_collisions(&self) -> &[CollisionEvent] {
        &self.active_collisions
    }

    /// Sender identity, falling back to `own` (the publisher's entity).
    pub fn source_or(&self, own: Entity) -> Entity {
        self.source_container.unwrap_or(own)
    }

    pub fn registered_consumers(&self) -> &[Entity] {
        &self.registered_consumers
    }

    pub(crate) fn register_consumer(&mut self, consumer: Entity) {
        if !self.registered_consumers.contains(&consumer) {
            self.registered_consumers.push(consumer);
        }
    }

    pub(crate) fn take_registered_consumers(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.registered_consumers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_active_collisions_copies() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut source = vec![CollisionEvent::trigger(a, a)];
        let mut publisher = ActiveCollisionPublisher::new();

        publisher.set_active_collisions(&source);
        source.push(CollisionEvent::trigger(b, b));

        assert_eq!(publisher.active_collisions().len(), 1);
        assert_eq!(publisher.active_collisions()[0].collider, a);
    }

    #[test]
    fn test_set_active_collisions_ignored_when_disabled() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut publisher = ActiveCollisionPublisher::new();
        publisher.enabled = false;
        publisher.set_active_collisions(&[CollisionEvent::trigger(a, a)]);
        assert!(publisher.active_collisions().is_empty());
    }

    #[test]
    fn test_empty_snapshot_empties() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut publisher = ActiveCollisionPublisher::new();
        publisher.set_active_collisions(&[CollisionEvent::trigger(a, a)]);
        publisher.set_active_collisions(&[]);
        assert!(publisher.active_collisions().is_empty());
    }

    #[test]
    fn test_source_fallback_and_registration() {
        let mut world = World::new();
        let own = world.spawn_empty().id();
        let hand = world.spawn_empty().id();
        let consumer = world.spawn_empty().id();

        let mut publisher = ActiveCollisionPublisher::new();
        assert_eq!(publisher.source_or(own), own);
        publisher = publisher.with_source_container(hand);
        assert_eq!(publisher.source_or(own), hand);

        publisher.register_consumer(consumer);
        publisher.register_consumer(consumer);
        assert_eq!(publisher.registered_consumers(), &[consumer]);
        assert_eq!(publisher.take_registered_consumers(), vec![consumer]);
        assert!(publisher.registered_consumers().is_empty());
    }
}
