//! ECS components and data records of the collision relay.
//!
//! Scene components describe the physics layout the relay reads, relay
//! components hold per-entity state and filters, and the collision records
//! are the values flowing between them.
//!
//! Submodules overview:
//! - [`activecollisions`] – ordered deduplicated collision set and its container component
//! - [`collider`] – marker for collision shapes
//! - [`collisionevent`] – the collision occurrence record, type and phase flags
//! - [`collisionnotifier`] – filters of a collision notifier
//! - [`consumer`] – receiving end of a publish, empty or holding one occurrence
//! - [`group`] – tag component for grouping entities by name
//! - [`nearestsorter`] – orders a snapshot by distance to a source
//! - [`position`] – world-space position
//! - [`publisher`] – snapshot holder fanning out to consumers
//! - [`reverser`] – reverses a snapshot
//! - [`rigidbody`] – marker for physics body roots
//! - [`rule`] – composable validity predicates
//! - [`slicer`] – splits a snapshot into a slice and its remainder

pub mod activecollisions;
pub mod collider;
pub mod collisionevent;
pub mod collisionnotifier;
pub mod consumer;
pub mod group;
pub mod nearestsorter;
pub mod position;
pub mod publisher;
pub mod reverser;
pub mod rigidbody;
pub mod rule;
pub mod slicer;
