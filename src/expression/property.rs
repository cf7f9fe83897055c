//! Property capabilities, shared by object and data properties.
//!
//! Every capability except [`InverseProperties`] is generic over the
//! [`PropertyKind`] of its ground, so `SubProperties<ObjectProperty>` only
//! names object properties and `SubProperties<DataProperty>` only data ones.

use std::marker::PhantomData;

use super::{Expression, ExpressionKind, NamedValues};
use crate::entity_set::EntitySet;
use crate::ground::PropertyKind;
use crate::ontology::{Axiom, AxiomKind, Entity, EntityKind, Restriction};

macro_rules! property_capability {
    ($(#[$meta:meta])* $name:ident<$value:ty>) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name<K: PropertyKind> {
            set: EntitySet<$value>,
            _kind: PhantomData<K>,
        }

        impl<K: PropertyKind> $name<K> {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn singleton() -> Self {
                Self {
                    set: EntitySet::singleton(),
                    _kind: PhantomData,
                }
            }
        }
    };
}

property_capability! {
    /// Direct sub properties.
    SubProperties<Entity>
}

property_capability! {
    /// Direct super properties.
    SuperProperties<Entity>
}

property_capability! {
    EquivalentProperties<Entity>
}

property_capability! {
    DisjointProperties<Entity>
}

property_capability! {
    /// Domain restrictions, usually plain classes.
    Domain<Restriction>
}

property_capability! {
    /// Range restrictions: classes for object properties, data ranges for
    /// data properties.
    Range<Restriction>
}

capability! {
    /// Inverses of an object property.
    InverseProperties<Entity>
}

impl<K: PropertyKind> Expression for SubProperties<K> {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::SubProperty;
    const AXIOM_KIND: AxiomKind = AxiomKind::SubPropertyOf;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        match axiom {
            Axiom::SubPropertyOf { sub, sup } if sup == subject => Some(sub.clone()),
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::SubPropertyOf {
            sub: value.clone(),
            sup: subject.clone(),
        }
    }
}

impl<K: PropertyKind> Expression for SuperProperties<K> {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::SuperProperty;
    const AXIOM_KIND: AxiomKind = AxiomKind::SubPropertyOf;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        match axiom {
            Axiom::SubPropertyOf { sub, sup } if sub == subject => Some(sup.clone()),
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::SubPropertyOf {
            sub: subject.clone(),
            sup: value.clone(),
        }
    }
}

impl<K: PropertyKind> Expression for EquivalentProperties<K> {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::EquivalentProperty;
    const AXIOM_KIND: AxiomKind = AxiomKind::EquivalentProperties;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        axiom.partner(subject).cloned()
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::equivalent_properties(subject.clone(), value.clone())
    }
}

impl<K: PropertyKind> Expression for DisjointProperties<K> {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::DisjointProperty;
    const AXIOM_KIND: AxiomKind = AxiomKind::DisjointProperties;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        axiom.partner(subject).cloned()
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::disjoint_properties(subject.clone(), value.clone())
    }
}

impl<K: PropertyKind> Expression for Domain<K> {
    type Value = Restriction;
    const KIND: ExpressionKind = ExpressionKind::Domain;
    const AXIOM_KIND: AxiomKind = AxiomKind::PropertyDomain;

    set_accessors!(Restriction);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Restriction> {
        match axiom {
            Axiom::PropertyDomain {
                property,
                restriction,
            } if property == subject => Some(restriction.clone()),
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Restriction) -> Axiom {
        Axiom::PropertyDomain {
            property: subject.clone(),
            restriction: value.clone(),
        }
    }
}

impl<K: PropertyKind> Expression for Range<K> {
    type Value = Restriction;
    const KIND: ExpressionKind = ExpressionKind::Range;
    const AXIOM_KIND: AxiomKind = AxiomKind::PropertyRange;

    set_accessors!(Restriction);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Restriction> {
        match axiom {
            Axiom::PropertyRange {
                property,
                restriction,
            } if property == subject => Some(restriction.clone()),
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Restriction) -> Axiom {
        Axiom::PropertyRange {
            property: subject.clone(),
            restriction: value.clone(),
        }
    }
}

impl Expression for InverseProperties {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::InverseProperty;
    const AXIOM_KIND: AxiomKind = AxiomKind::InverseProperties;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        axiom.partner(subject).cloned()
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::inverse_properties(subject.clone(), value.clone())
    }
}

impl<K: PropertyKind> NamedValues for SubProperties<K> {
    const VALUE_KIND: EntityKind = K::ENTITY_KIND;
}

impl<K: PropertyKind> NamedValues for SuperProperties<K> {
    const VALUE_KIND: EntityKind = K::ENTITY_KIND;
}

impl<K: PropertyKind> NamedValues for EquivalentProperties<K> {
    const VALUE_KIND: EntityKind = K::ENTITY_KIND;
}

impl<K: PropertyKind> NamedValues for DisjointProperties<K> {
    const VALUE_KIND: EntityKind = K::ENTITY_KIND;
}

impl NamedValues for InverseProperties {
    const VALUE_KIND: EntityKind = EntityKind::ObjectProperty;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::RestrictionValues;
    use crate::ground::{DataProperty, Ground, ObjectProperty};
    use crate::ontology::{DataType, MemOntology, OntologyRef};

    fn robots() -> OntologyRef {
        OntologyRef::new(MemOntology::new("robots", "http://example.org/robots").unwrap())
    }

    #[test]
    fn names_take_the_ground_kind() {
        let mut object = SubProperties::<ObjectProperty>::new();
        object.add_named("isLinkedTo");
        assert_eq!(
            object.entity_set().first().map(Entity::kind),
            Some(EntityKind::ObjectProperty)
        );
        let mut data = SuperProperties::<DataProperty>::new();
        data.add_named("hasName");
        assert_eq!(
            data.entity_set().first().map(Entity::kind),
            Some(EntityKind::DataProperty)
        );
    }

    #[test]
    fn domain_and_range_round_trip() {
        let onto = robots();
        let is_in = Ground::<ObjectProperty>::named("isIn", &onto).unwrap();
        let mut domain = Domain::<ObjectProperty>::new();
        let mut range = Range::<ObjectProperty>::new();
        domain.add_class("ROBOT");
        range.add_class("LOCATION");
        domain.write_expression_axioms(is_in.instance()).unwrap();
        range.write_expression_axioms(is_in.instance()).unwrap();

        let mut fresh = Range::<ObjectProperty>::new();
        fresh.read_expression_axioms(is_in.instance()).unwrap();
        assert!(fresh.entity_set().contains(&Restriction::class("LOCATION")));
        assert_eq!(fresh.entity_set().len(), 1);
    }

    #[test]
    fn data_range_holds_datatype() {
        let onto = robots();
        let has_name = Ground::<DataProperty>::named("hasName", &onto).unwrap();
        let mut range = Range::<DataProperty>::singleton();
        range.add_datatype(DataType::String);
        range.add_datatype(DataType::Integer);
        assert_eq!(range.entity_set().len(), 1);
        let intents = range.write_expression_axioms(has_name.instance()).unwrap();
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].value(), "xsd:integer");
    }

    #[test]
    fn inverse_is_symmetric() {
        let onto = robots();
        let contains = Ground::<ObjectProperty>::named("contains", &onto).unwrap();
        let mut inverse = InverseProperties::new();
        inverse.add_named("isIn");
        inverse.write_expression_axioms(contains.instance()).unwrap();

        let is_in = contains.new_ground("isIn").unwrap();
        let mut back = InverseProperties::new();
        back.read_expression_axioms(is_in.instance()).unwrap();
        assert_eq!(back.names(), vec!["contains"]);
        assert_eq!(onto.query_axioms(is_in.entity(), AxiomKind::InverseProperties).unwrap().len(), 1);
    }
}
