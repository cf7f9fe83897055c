//! Entity sets: the mutable in-memory view each expression capability owns.
//!
//! An [`EntitySet`] keeps insertion order so diffs are deterministic, never
//! holds duplicates, and remembers which members were added or removed since
//! the last synchronization with the ontology.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::ontology::Entity;

/// Ordered, duplicate-free set of axiom-relevant values.
#[derive(Debug, Clone)]
pub struct EntitySet<E> {
    items: IndexSet<E>,
    singleton: bool,
    added: IndexSet<E>,
    removed: IndexSet<E>,
}

impl<E> Default for EntitySet<E> {
    fn default() -> Self {
        Self {
            items: IndexSet::new(),
            singleton: false,
            added: IndexSet::new(),
            removed: IndexSet::new(),
        }
    }
}

/// Outcome of comparing an entity set with the values queried from the
/// ontology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncDiff<E> {
    /// In the set but not in the ontology, in set order.
    pub to_add: Vec<E>,
    /// In the ontology but not in the set, in query order.
    pub to_remove: Vec<E>,
    /// In both.
    pub unchanged: Vec<E>,
}

impl<E> SyncDiff<E> {
    /// True when writing would change nothing.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

impl<E: Clone + Eq + Hash> EntitySet<E> {
    /// Unbounded set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding at most one element.
    pub fn singleton() -> Self {
        Self {
            singleton: true,
            ..Self::default()
        }
    }

    pub fn is_singleton(&self) -> bool {
        self.singleton
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &E) -> bool {
        self.items.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.items.iter()
    }

    /// The only element of a singleton, or the first one otherwise.
    pub fn first(&self) -> Option<&E> {
        self.items.first()
    }

    /// Add `value`. Returns `false` if it was already present. In a singleton
    /// the new value replaces the current one.
    pub fn add(&mut self, value: E) -> bool {
        if self.items.contains(&value) {
            return false;
        }
        if self.singleton {
            let previous: Vec<E> = self.items.drain(..).collect();
            for old in previous {
                self.track_removed(old);
            }
        }
        self.track_added(value.clone());
        self.items.insert(value);
        true
    }

    /// Remove `value`. Returns `false` if it was absent.
    pub fn remove(&mut self, value: &E) -> bool {
        if !self.items.shift_remove(value) {
            return false;
        }
        self.track_removed(value.clone());
        true
    }

    /// Remove every element. Returns `false` if the set was already empty.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let previous: Vec<E> = self.items.drain(..).collect();
        for old in previous {
            self.track_removed(old);
        }
        true
    }

    /// Replace the contents with values read from the ontology and forget
    /// pending changes. A singleton keeps only the first value.
    pub fn reset(&mut self, values: impl IntoIterator<Item = E>) {
        self.items.clear();
        self.mark_synchronized();
        let mut values = values.into_iter();
        if self.singleton {
            if let Some(first) = values.next() {
                self.items.insert(first);
            }
            let dropped = values.count();
            if dropped > 0 {
                tracing::warn!(
                    dropped,
                    "singleton set read more than one value, keeping only the first"
                );
            }
        } else {
            self.items.extend(values);
        }
    }

    /// Values added since the last synchronization.
    pub fn added(&self) -> impl Iterator<Item = &E> {
        self.added.iter()
    }

    /// Values removed since the last synchronization.
    pub fn removed(&self) -> impl Iterator<Item = &E> {
        self.removed.iter()
    }

    /// Whether there are no pending local changes.
    pub fn is_synchronized(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn mark_synchronized(&mut self) {
        self.added.clear();
        self.removed.clear();
    }

    /// Compare against the values currently in the ontology.
    pub fn diff(&self, queried: &[E]) -> SyncDiff<E> {
        let mut seen = IndexSet::with_capacity(queried.len());
        let mut to_remove = Vec::new();
        let mut unchanged = Vec::new();
        for value in queried {
            if !seen.insert(value) {
                continue;
            }
            if self.items.contains(value) {
                unchanged.push(value.clone());
            } else {
                to_remove.push(value.clone());
            }
        }
        let to_add = self
            .items
            .iter()
            .filter(|value| !seen.contains(value))
            .cloned()
            .collect();
        SyncDiff {
            to_add,
            to_remove,
            unchanged,
        }
    }

    fn track_added(&mut self, value: E) {
        if !self.removed.shift_remove(&value) {
            self.added.insert(value);
        }
    }

    fn track_removed(&mut self, value: E) {
        if !self.added.shift_remove(&value) {
            self.removed.insert(value);
        }
    }
}

impl<E: Clone + Eq + Hash> FromIterator<E> for EntitySet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.add(value);
        }
        set
    }
}

impl<E: fmt::Display> fmt::Display for EntitySet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

// ---------------------------------------------------------------------------
// Property links
// ---------------------------------------------------------------------------

/// One property assertion seen from its subject: `property value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link<T> {
    pub property: Entity,
    pub value: T,
}

impl<T> Link<T> {
    pub fn new(property: Entity, value: T) -> Self {
        Self { property, value }
    }
}

impl<T: fmt::Display> fmt::Display for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.property, self.value)
    }
}

/// All values an individual has for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGroup<T> {
    pub property: Entity,
    pub values: Vec<T>,
}

impl<T: Clone> LinkGroup<T> {
    /// Group links by property, in order of first appearance.
    pub fn group<'a>(links: impl IntoIterator<Item = &'a Link<T>>) -> Vec<Self>
    where
        T: 'a,
    {
        let mut groups: Vec<Self> = Vec::new();
        for link in links {
            match groups.iter_mut().find(|g| g.property == link.property) {
                Some(group) => group.values.push(link.value.clone()),
                None => groups.push(Self {
                    property: link.property.clone(),
                    values: vec![link.value.clone()],
                }),
            }
        }
        groups
    }
}

impl<T: fmt::Display> fmt::Display for LinkGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {{", self.property)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}
