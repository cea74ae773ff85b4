//! ECS resources made available to systems.
//!
//! Overview
//! - `relayconfig` – default notifier filters and pipeline operator parameters loaded from INI
pub mod relayconfig;
