//! Individual capabilities: types, identity and property links.

use std::fmt;
use std::hash::Hash;

use super::{Batch, Expression, ExpressionKind, NamedValues};
use crate::entity_set::{EntitySet, Link, LinkGroup};
use crate::ontology::{Axiom, AxiomKind, Entity, EntityKind, Literal};

capability! {
    /// Classes the individual is asserted to belong to.
    Types<Entity>
}

capability! {
    SameIndividuals<Entity>
}

capability! {
    DifferentIndividuals<Entity>
}

capability! {
    /// Object property assertions with the ground as subject.
    multi ObjectLinks<Link<Entity>>
}

capability! {
    /// Data property assertions with the ground as subject.
    multi DataLinks<Link<Literal>>
}

impl Expression for Types {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::Type;
    const AXIOM_KIND: AxiomKind = AxiomKind::ClassAssertion;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        match axiom {
            Axiom::ClassAssertion { individual, class } if individual == subject => {
                Some(class.clone())
            }
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::ClassAssertion {
            individual: subject.clone(),
            class: value.clone(),
        }
    }
}

impl Expression for SameIndividuals {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::SameIndividual;
    const AXIOM_KIND: AxiomKind = AxiomKind::SameIndividual;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        axiom.partner(subject).cloned()
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::same_individual(subject.clone(), value.clone())
    }
}

impl Expression for DifferentIndividuals {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::DifferentIndividual;
    const AXIOM_KIND: AxiomKind = AxiomKind::DifferentIndividuals;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        axiom.partner(subject).cloned()
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::different_individuals(subject.clone(), value.clone())
    }
}

impl NamedValues for Types {
    const VALUE_KIND: EntityKind = EntityKind::Class;
}

impl NamedValues for SameIndividuals {
    const VALUE_KIND: EntityKind = EntityKind::Individual;
}

impl NamedValues for DifferentIndividuals {
    const VALUE_KIND: EntityKind = EntityKind::Individual;
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// One batch per property, labelled like `isLinkedTo: {Room1, Room2}`.
fn batch_by_property<T: Clone + fmt::Display>(links: Vec<Link<T>>) -> Vec<Batch<Link<T>>> {
    LinkGroup::group(&links)
        .into_iter()
        .map(|group| {
            let label = group.to_string();
            let property = group.property;
            Batch {
                label,
                values: group
                    .values
                    .into_iter()
                    .map(|value| Link::new(property.clone(), value))
                    .collect(),
            }
        })
        .collect()
}

fn values_through<'a, T>(set: &'a EntitySet<Link<T>>, property: &str) -> Vec<&'a T>
where
    T: Clone + Eq + Hash,
{
    set.iter()
        .filter(|link| link.property.name() == property)
        .map(|link| &link.value)
        .collect()
}

fn drop_property<T: Clone + Eq + Hash>(set: &mut EntitySet<Link<T>>, property: &str) -> bool {
    let doomed: Vec<Link<T>> = set
        .iter()
        .filter(|link| link.property.name() == property)
        .cloned()
        .collect();
    let mut changed = false;
    for link in &doomed {
        changed |= set.remove(link);
    }
    changed
}

/// Make `link` the only value of its property. Other properties are untouched.
fn replace_property<T: Clone + Eq + Hash>(set: &mut EntitySet<Link<T>>, link: Link<T>) -> bool {
    let stale: Vec<Link<T>> = set
        .iter()
        .filter(|old| old.property == link.property && **old != link)
        .cloned()
        .collect();
    let mut changed = false;
    for old in &stale {
        changed |= set.remove(old);
    }
    changed |= set.add(link);
    changed
}

impl Expression for ObjectLinks {
    type Value = Link<Entity>;
    const KIND: ExpressionKind = ExpressionKind::ObjectLink;
    const AXIOM_KIND: AxiomKind = AxiomKind::ObjectPropertyAssertion;

    set_accessors!(Link<Entity>);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Link<Entity>> {
        match axiom {
            Axiom::ObjectPropertyAssertion {
                subject: s,
                property,
                object,
            } if s == subject => Some(Link::new(property.clone(), object.clone())),
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Link<Entity>) -> Axiom {
        Axiom::ObjectPropertyAssertion {
            subject: subject.clone(),
            property: value.property.clone(),
            object: value.value.clone(),
        }
    }

    fn batches(values: Vec<Link<Entity>>) -> Vec<Batch<Link<Entity>>> {
        batch_by_property(values)
    }
}

impl ObjectLinks {
    /// Link the ground to `individual` through `property`.
    pub fn add_link(&mut self, property: &str, individual: &str) -> bool {
        self.add(Link::new(
            Entity::object_property(property),
            Entity::individual(individual),
        ))
    }

    pub fn remove_link(&mut self, property: &str, individual: &str) -> bool {
        self.remove(&Link::new(
            Entity::object_property(property),
            Entity::individual(individual),
        ))
    }

    /// Link through a functional `property`: `individual` replaces whatever
    /// the property held before.
    pub fn set_link(&mut self, property: &str, individual: &str) -> bool {
        replace_property(
            &mut self.set,
            Link::new(
                Entity::object_property(property),
                Entity::individual(individual),
            ),
        )
    }

    /// Individuals linked through `property`, in set order.
    pub fn values_of(&self, property: &str) -> Vec<&Entity> {
        values_through(&self.set, property)
    }

    /// The first individual linked through `property`.
    pub fn object_of(&self, property: &str) -> Option<&Entity> {
        self.values_of(property).into_iter().next()
    }

    /// Drop every link through `property`.
    pub fn remove_property(&mut self, property: &str) -> bool {
        drop_property(&mut self.set, property)
    }

    pub fn groups(&self) -> Vec<LinkGroup<Entity>> {
        LinkGroup::group(self.set.iter())
    }
}

impl Expression for DataLinks {
    type Value = Link<Literal>;
    const KIND: ExpressionKind = ExpressionKind::DataLink;
    const AXIOM_KIND: AxiomKind = AxiomKind::DataPropertyAssertion;

    set_accessors!(Link<Literal>);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Link<Literal>> {
        match axiom {
            Axiom::DataPropertyAssertion {
                subject: s,
                property,
                value,
            } if s == subject => Some(Link::new(property.clone(), value.clone())),
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Link<Literal>) -> Axiom {
        Axiom::DataPropertyAssertion {
            subject: subject.clone(),
            property: value.property.clone(),
            value: value.value.clone(),
        }
    }

    fn batches(values: Vec<Link<Literal>>) -> Vec<Batch<Link<Literal>>> {
        batch_by_property(values)
    }
}

impl DataLinks {
    pub fn add_link(&mut self, property: &str, value: impl Into<Literal>) -> bool {
        self.add(Link::new(Entity::data_property(property), value.into()))
    }

    pub fn remove_link(&mut self, property: &str, value: impl Into<Literal>) -> bool {
        self.remove(&Link::new(Entity::data_property(property), value.into()))
    }

    /// Value of a functional `property`, replacing any previous one.
    pub fn set_link(&mut self, property: &str, value: impl Into<Literal>) -> bool {
        replace_property(
            &mut self.set,
            Link::new(Entity::data_property(property), value.into()),
        )
    }

    pub fn values_of(&self, property: &str) -> Vec<&Literal> {
        values_through(&self.set, property)
    }

    /// The first literal of `property`.
    pub fn literal_of(&self, property: &str) -> Option<&Literal> {
        self.values_of(property).into_iter().next()
    }

    pub fn remove_property(&mut self, property: &str) -> bool {
        drop_property(&mut self.set, property)
    }

    pub fn groups(&self) -> Vec<LinkGroup<Literal>> {
        LinkGroup::group(self.set.iter())
    }
}
