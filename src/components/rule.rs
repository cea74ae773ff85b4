//! Validity rules for collision sources, colliders and publishers.
//!
//! A [`Rule`] is a predicate over an entity. Notifiers use one to accept or
//! reject forwarded occurrences, active collision containers to gate which
//! colliders may be added, and consumers to gate which publishers they listen
//! to. Rules compose through [`Rule::Not`], [`Rule::All`] and [`Rule::Any`].
//!
//! The default rule, [`Rule::AcceptAll`], accepts every candidate.
//!
//! # Example
//! ```ignore
//! // Accept anything that is not an enemy.
//! let rule = Rule::InGroup(vec!["enemy".into()]).negate();
//! assert!(rule.accepts(&world, player));
//! ```

use bevy_ecs::prelude::*;

use crate::components::group::Group;

/// Predicate used to accept or reject a candidate entity.
#[derive(Clone, Debug, Default)]
pub enum Rule {
    /// Accepts every candidate.
    #[default]
    AcceptAll,
    /// Accepts candidates whose [`Group`] name is in the list.
    InGroup(Vec<String>),
    /// Accepts only the listed entities.
    Entities(Vec<Entity>),
    /// Delegates to a function.
    Custom(fn(&World, Entity) -> bool),
    /// Inverts the inner rule.
    Not(Box<Rule>),
    /// Accepts when every inner rule accepts. Empty accepts.
    All(Vec<Rule>),
    /// Accepts when at least one inner rule accepts. Empty rejects.
    Any(Vec<Rule>),
}

impl Rule {
    /// Rule accepting members of a single group.
    pub fn in_group(name: impl Into<String>) -> Self {
        Rule::InGroup(vec![name.into()])
    }

    /// Wrap this rule in [`Rule::Not`].
    pub fn negate(self) -> Self {
        Rule::Not(Box::new(self))
    }

    /// Returns true if `candidate` passes this rule.
    ///
    /// A candidate that no longer exists only passes [`Rule::AcceptAll`]
    /// (and rules composed to accept it, such as `Not(InGroup(..))`).
    pub fn accepts(&self, world: &World, candidate: Entity) -> bool {
        match self {
            Rule::AcceptAll => true,
            Rule::InGroup(names) => world
                .get::<Group>(candidate)
                .map(|g| names.iter().any(|n| n == g.name()))
                .unwrap_or(false),
            Rule::Entities(list) => list.contains(&candidate),
            Rule::Custom(f) => f(world, candidate),
            Rule::Not(inner) => !inner.accepts(world, candidate),
            Rule::All(rules) => rules.iter().all(|r| r.accepts(world, candidate)),
            Rule::Any(rules) => rules.iter().any(|r| r.accepts(world, candidate)),
        }
    }
}
