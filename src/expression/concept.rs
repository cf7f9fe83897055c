//! Class capabilities: definition, hierarchy, equivalence, disjointness and
//! instances.

use super::{Expression, ExpressionKind, NamedValues};
use crate::ontology::{Axiom, AxiomKind, Entity, EntityKind, Restriction};

capability! {
    /// Conjuncts of the class definition (`C ≡ R1 ⊓ R2 ⊓ …`).
    Definition<Restriction>
}

capability! {
    /// Direct sub classes.
    SubConcepts<Entity>
}

capability! {
    /// Direct super classes.
    SuperConcepts<Entity>
}

capability! {
    EquivalentConcepts<Entity>
}

capability! {
    DisjointConcepts<Entity>
}

capability! {
    /// Individuals asserted to belong to the class.
    Instances<Entity>
}

impl Expression for Definition {
    type Value = Restriction;
    const KIND: ExpressionKind = ExpressionKind::Definition;
    const AXIOM_KIND: AxiomKind = AxiomKind::ClassDefinition;

    set_accessors!(Restriction);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Restriction> {
        match axiom {
            Axiom::ClassDefinition { class, restriction } if class == subject => {
                Some(restriction.clone())
            }
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Restriction) -> Axiom {
        Axiom::ClassDefinition {
            class: subject.clone(),
            restriction: value.clone(),
        }
    }
}

impl Expression for SubConcepts {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::SubConcept;
    const AXIOM_KIND: AxiomKind = AxiomKind::SubClassOf;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        match axiom {
            Axiom::SubClassOf { sub, sup } if sup == subject => Some(sub.clone()),
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::SubClassOf {
            sub: value.clone(),
            sup: subject.clone(),
        }
    }
}

impl Expression for SuperConcepts {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::SuperConcept;
    const AXIOM_KIND: AxiomKind = AxiomKind::SubClassOf;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        match axiom {
            Axiom::SubClassOf { sub, sup } if sub == subject => Some(sup.clone()),
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::SubClassOf {
            sub: subject.clone(),
            sup: value.clone(),
        }
    }
}

impl Expression for EquivalentConcepts {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::EquivalentConcept;
    const AXIOM_KIND: AxiomKind = AxiomKind::EquivalentClasses;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        axiom.partner(subject).cloned()
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::equivalent_classes(subject.clone(), value.clone())
    }
}

impl Expression for DisjointConcepts {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::DisjointConcept;
    const AXIOM_KIND: AxiomKind = AxiomKind::DisjointClasses;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        axiom.partner(subject).cloned()
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::disjoint_classes(subject.clone(), value.clone())
    }
}

impl Expression for Instances {
    type Value = Entity;
    const KIND: ExpressionKind = ExpressionKind::Instance;
    const AXIOM_KIND: AxiomKind = AxiomKind::ClassAssertion;

    set_accessors!(Entity);

    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Entity> {
        match axiom {
            Axiom::ClassAssertion { individual, class } if class == subject => {
                Some(individual.clone())
            }
            _ => None,
        }
    }

    fn axiom_for(subject: &Entity, value: &Entity) -> Axiom {
        Axiom::ClassAssertion {
            individual: value.clone(),
            class: subject.clone(),
        }
    }
}

impl NamedValues for SubConcepts {
    const VALUE_KIND: EntityKind = EntityKind::Class;
}

impl NamedValues for SuperConcepts {
    const VALUE_KIND: EntityKind = EntityKind::Class;
}

impl NamedValues for EquivalentConcepts {
    const VALUE_KIND: EntityKind = EntityKind::Class;
}

impl NamedValues for DisjointConcepts {
    const VALUE_KIND: EntityKind = EntityKind::Class;
}

impl NamedValues for Instances {
    const VALUE_KIND: EntityKind = EntityKind::Individual;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::RestrictionValues;
    use crate::ground::{Concept, Ground};
    use crate::intent::IntentOperation;
    use crate::ontology::{MemOntology, OntologyRef};

    fn robots() -> OntologyRef {
        OntologyRef::new(MemOntology::new("robots", "http://example.org/robots").unwrap())
    }

    #[test]
    fn sub_and_super_share_subclass_axioms() {
        let onto = robots();
        let location = Ground::<Concept>::named("LOCATION", &onto).unwrap();
        let room = Ground::<Concept>::named("ROOM", &onto).unwrap();

        let mut subs = SubConcepts::new();
        subs.add_named("ROOM");
        subs.write_expression_axioms(location.instance()).unwrap();

        let mut supers = SuperConcepts::new();
        let read = supers.read_expression_axioms(room.instance()).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].operation(), IntentOperation::Read);
        assert_eq!(supers.names(), vec!["LOCATION"]);
    }

    #[test]
    fn disjoint_reads_from_either_side() {
        let onto = robots();
        onto.assert_axiom(&Axiom::disjoint_classes(
            Entity::class("ROBOT"),
            Entity::class("DOOR"),
        ))
        .unwrap();
        for (name, other) in [("ROBOT", "DOOR"), ("DOOR", "ROBOT")] {
            let ground = Ground::<Concept>::named(name, &onto).unwrap();
            let mut disjoint = DisjointConcepts::new();
            disjoint.read_expression_axioms(ground.instance()).unwrap();
            assert_eq!(disjoint.names(), vec![other]);
        }
    }

    #[test]
    fn definition_round_trip() {
        let onto = robots();
        let room = Ground::<Concept>::named("ROOM", &onto).unwrap();
        let mut def = Definition::new();
        def.add_class("LOCATION");
        def.add_min("hasDoor", 1, "DOOR");
        assert_eq!(def.write_expression_axioms(room.instance()).unwrap().len(), 2);

        let mut fresh = Definition::new();
        fresh.read_expression_axioms(room.instance()).unwrap();
        assert_eq!(fresh.entity_set().len(), 2);
        assert!(fresh.write_expression_axioms(room.instance()).unwrap().is_empty());
    }

    #[test]
    fn instances_classify_individuals() {
        let onto = robots();
        let robot = Ground::<Concept>::named("ROBOT", &onto).unwrap();
        let mut instances = Instances::new();
        instances.add_named("Robot1");
        instances.write_expression_axioms(robot.instance()).unwrap();
        assert!(
            onto.resolve(EntityKind::Individual, "Robot1").is_ok(),
            "individual declared on write"
        );
        assert!(instances.contains_named("Robot1"));
    }
}
