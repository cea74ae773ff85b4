//! Ordered, deduplicated set of ongoing collisions.
//!
//! [`ActiveCollisions`] keeps [`CollisionEvent`]s in insertion order with no
//! two elements sharing a containing transform. Mutations return the
//! [`SetTransition`]s they caused instead of notifying anyone directly; the
//! caller (see [`crate::systems::activecollisions`]) turns them into events
//! once the mutation has fully completed, so observers always see a stable
//! set and may safely queue further changes.
//!
//! [`ActiveCollisionsContainer`] is the component wrapper living on an entity,
//! adding the enabled gate and the validity rule applied on add.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

use crate::components::collisionevent::CollisionEvent;
use crate::components::rule::Rule;

/// Lifecycle notification produced by a set mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetTransition {
    /// The set went from empty to one element.
    FirstStarted,
    /// Membership was touched. Carries the count after the change.
    CountChanged(usize),
    /// Subscribers should re-read the contents.
    ContentsChanged,
    /// The set went from non-empty to empty.
    AllStopped,
}

/// Transitions produced by one mutation, in emission order.
pub type Transitions = SmallVec<[SetTransition; 4]>;

/// Insertion-ordered collision set keyed by containing transform.
#[derive(Clone, Debug, Default)]
pub struct ActiveCollisions {
    elements: Vec<CollisionEvent>,
}

impl ActiveCollisions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[CollisionEvent] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.elements.iter()
    }

    /// True if an element with the same containing transform is present.
    pub fn contains(&self, event: &CollisionEvent) -> bool {
        self.elements.contains(event)
    }

    /// Append a copy of `event`.
    ///
    /// A duplicate (same containing transform) leaves the set untouched and
    /// produces no transitions.
    pub fn add(&mut self, event: &CollisionEvent) -> Transitions {
        let mut transitions = Transitions::new();
        if self.contains(event) {
            return transitions;
        }
        let was_empty = self.elements.is_empty();
        self.elements.push(*event);
        if was_empty {
            transitions.push(SetTransition::FirstStarted);
        }
        transitions.push(SetTransition::CountChanged(self.elements.len()));
        transitions.push(SetTransition::ContentsChanged);
        transitions
    }

    /// Remove the element equal to `event`, preserving the order of the rest.
    ///
    /// Count and contents notifications are produced even when nothing was
    /// found so downstream state resynchronises. `AllStopped` is produced only
    /// when this call emptied the set.
    pub fn remove(&mut self, event: &CollisionEvent) -> Transitions {
        let removed = match self.elements.iter().position(|e| e == event) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        };
        let mut transitions = Transitions::new();
        transitions.push(SetTransition::CountChanged(self.elements.len()));
        transitions.push(SetTransition::ContentsChanged);
        if removed && self.elements.is_empty() {
            transitions.push(SetTransition::AllStopped);
        }
        transitions
    }

    /// Drop every element. Produces nothing if already empty.
    pub fn clear(&mut self) -> Transitions {
        let mut transitions = Transitions::new();
        if self.elements.is_empty() {
            return transitions;
        }
        self.elements.clear();
        transitions.push(SetTransition::CountChanged(0));
        transitions.push(SetTransition::ContentsChanged);
        transitions.push(SetTransition::AllStopped);
        transitions
    }

    /// Request subscribers to re-evaluate without changing membership.
    pub fn contents_changed(&self) -> Transitions {
        let mut transitions = Transitions::new();
        transitions.push(SetTransition::ContentsChanged);
        transitions
    }

    /// Owned copy of the current contents.
    pub fn snapshot(&self) -> Vec<CollisionEvent> {
        self.elements.clone()
    }
}

/// Component accumulating the active collisions of an entity.
///
/// When the entity also carries a
/// [`CollisionNotifier`](super::collisionnotifier::CollisionNotifier), started
/// occurrences are added and stopped occurrences removed automatically.
#[derive(Component, Clone, Debug)]
pub struct ActiveCollisionsContainer {
    pub enabled: bool,
    /// Applied to the collider of each candidate on add.
    pub validity: Rule,
    pub(crate) collisions: ActiveCollisions,
}

impl Default for ActiveCollisionsContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveCollisionsContainer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            validity: Rule::AcceptAll,
            collisions: ActiveCollisions::new(),
        }
    }

    pub fn with_validity(mut self, rule: Rule) -> Self {
        self.validity = rule;
        self
    }

    pub fn collisions(&self) -> &ActiveCollisions {
        &self.collisions
    }
}
