//! Operations and systems of the collision relay.
//!
//! Functions here take `&mut World` and the entity of the component they act
//! on, and run to completion before returning: every event they trigger has
//! been observed, and every forward or publish they cause has finished.
//!
//! Submodules:
//! - [`activecollisions`] – add/remove/clear/disable for active collision containers
//! - [`collisionnotifier`] – raw report dispatch, emission and forwarding
//! - [`consumer`] – consume and clear
//! - [`pipeline`] – slicer, nearest sorter and reverser wrappers
//! - [`publisher`] – snapshot hand-over, publish and unpublish
pub mod activecollisions;
pub mod collisionnotifier;
pub mod consumer;
pub mod pipeline;
pub mod publisher;
