//! Collision relay library.
//!
//! Turns raw per-step physics collision reports into deduplicated,
//! event-driven notifications that gameplay systems (grabbing, climbing,
//! touching) can subscribe to without touching physics details.
//!
//! Data flows leaves first:
//!
//! 1. [`events::collision::RawCollision`] messages from the physics layer
//! 2. [`components::collisionnotifier::CollisionNotifier`] filters, emits and forwards
//! 3. [`components::activecollisions::ActiveCollisionsContainer`] accumulates by body
//! 4. slicer, nearest sorter and reverser reshape a snapshot
//! 5. [`components::publisher::ActiveCollisionPublisher`] fans out to consumers
//! 6. [`components::consumer::ActiveCollisionConsumer`] re-exposes what it accepted

pub mod components;
pub mod events;
pub mod hierarchy;
pub mod resources;
pub mod systems;
