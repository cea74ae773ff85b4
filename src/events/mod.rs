//! Event types exchanged by the collision relay.
//!
//! Every event is a global bevy event triggered synchronously with
//! `World::trigger`, so observers run before the operation that raised it
//! returns. Each event names the component entity that raised it.
//!
//! Submodules:
//! - [`activecollisions`] – lifecycle of an active collision container
//! - [`collision`] – raw physics reports and notifier started/changed/stopped
//! - [`consumer`] – consumer consumed/cleared
//! - [`pipeline`] – slicer, sorter and reverser outputs
pub mod activecollisions;
pub mod collision;
pub mod consumer;
pub mod pipeline;
