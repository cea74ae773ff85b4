use bevy_ecs::prelude::Component;

/// Tag component for grouping entities by name.
///
/// Used by [`Rule::InGroup`](super::rule::Rule::InGroup) to accept or reject
/// collision sources and publishers.
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
