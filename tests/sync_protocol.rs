//! Synchronization protocol tests: idempotence, round-trip, diff order and
//! descriptor equality.

use owloop::intent::changes;
use owloop::prelude::*;

fn robots() -> OntologyRef {
    OntologyRef::new(MemOntology::new("robots", "http://example.org/robots").unwrap())
}

fn super_names(onto: &OntologyRef, class: &str) -> Vec<String> {
    onto.query_axioms(&Entity::class(class), AxiomKind::SubClassOf)
        .unwrap()
        .into_iter()
        .filter_map(|axiom| match axiom {
            Axiom::SubClassOf { sub, sup } if sub.name() == class => Some(sup.name().to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn second_write_is_empty() {
    let onto = robots();
    let mut robot = FullIndividualDesc::named("Robot1", &onto).unwrap();
    robot.types_mut().add_named("ROBOT");
    robot.same_mut().add_named("R1");
    robot.object_links_mut().add_link("isIn", "Room1");
    robot.data_links_mut().add_link("hasName", "robby");

    assert_eq!(robot.write_expression_axioms().unwrap().len(), 4);
    assert!(robot.write_expression_axioms().unwrap().is_empty());
}

#[test]
fn read_then_write_changes_nothing() {
    let onto = robots();
    let mut room = FullConceptDesc::named("ROOM", &onto).unwrap();
    room.super_concepts_mut().add_named("LOCATION");
    room.equivalent_mut().add_named("CHAMBER");
    room.definition_mut().add_some("hasDoor", "DOOR");
    room.write_expression_axioms().unwrap();

    let mut fresh = FullConceptDesc::named("ROOM", &onto).unwrap();
    let read = fresh.read_expression_axioms().unwrap();
    // ROOM ≡ CHAMBER also makes each a sub and super class of the other.
    assert_eq!(read.len(), 5);
    assert!(read.iter().all(|i| i.operation() == IntentOperation::Read));
    assert_eq!(fresh.super_concepts().names(), vec!["LOCATION", "CHAMBER"]);
    assert_eq!(fresh.sub_concepts().names(), vec!["CHAMBER"]);
    assert!(changes(&fresh.write_expression_axioms().unwrap()).is_empty());
}

#[test]
fn second_write_ignores_inherited_supers() {
    let onto = robots();
    onto.assert_axiom(&Axiom::SubClassOf {
        sub: Entity::class("LOCATION"),
        sup: Entity::class("PLACE"),
    })
    .unwrap();

    let mut room = HierarchicalConceptDesc::named("ROOM", &onto).unwrap();
    room.super_concepts_mut().add_named("LOCATION");
    assert_eq!(room.write_expression_axioms().unwrap().len(), 1);
    assert!(room.write_expression_axioms().unwrap().is_empty());
    assert_eq!(super_names(&onto, "ROOM"), vec!["LOCATION"]);
}

#[test]
fn removing_inferred_value_writes_nothing() {
    let onto = robots();
    onto.assert_axiom(&Axiom::SubClassOf {
        sub: Entity::class("ROOM"),
        sup: Entity::class("LOCATION"),
    })
    .unwrap();
    let mut room1 = TypeIndividualDesc::named("Room1", &onto).unwrap();
    room1.types_mut().add_named("ROOM");
    room1.write_reason_read().unwrap();
    assert_eq!(room1.types().names(), vec!["ROOM", "LOCATION"]);

    room1.types_mut().remove_named("LOCATION");
    assert!(room1.write_expression_axioms().unwrap().is_empty());
    room1.read_expression_axioms().unwrap();
    assert!(room1.types().contains_named("LOCATION"));
}

#[test]
fn diff_adds_then_removes() {
    let onto = robots();
    for sup in ["B", "C"] {
        onto.assert_axiom(&Axiom::SubClassOf {
            sub: Entity::class("ROOM"),
            sup: Entity::class(sup),
        })
        .unwrap();
    }

    let mut room = HierarchicalConceptDesc::named("ROOM", &onto).unwrap();
    room.super_concepts_mut().add_named("A");
    room.super_concepts_mut().add_named("B");
    let intents = room.write_expression_axioms().unwrap();

    let summary: Vec<(IntentOperation, &str)> =
        intents.iter().map(|i| (i.operation(), i.value())).collect();
    assert_eq!(
        summary,
        vec![(IntentOperation::Add, "A"), (IntentOperation::Remove, "C")]
    );
    assert!(intents.iter().all(MappingIntent::success));

    let mut names = super_names(&onto, "ROOM");
    names.sort();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn set_level_noops_report_unchanged() {
    let mut supers = owloop::expression::SuperConcepts::new();
    assert!(supers.add_named("LOCATION"));
    assert!(!supers.add_named("LOCATION"));
    assert!(supers.remove_named("LOCATION"));
    assert!(!supers.remove_named("LOCATION"));
}

#[test]
fn removal_already_applied_writes_nothing() {
    let onto = robots();
    let mut room = HierarchicalConceptDesc::named("ROOM", &onto).unwrap();
    room.super_concepts_mut().add_named("LOCATION");
    room.write_expression_axioms().unwrap();

    // Retract behind the descriptor's back, then write a removal.
    let mut other = HierarchicalConceptDesc::named("ROOM", &onto).unwrap();
    other.read_expression_axioms().unwrap();
    assert!(
        onto.retract_axiom(&Axiom::SubClassOf {
            sub: Entity::class("ROOM"),
            sup: Entity::class("LOCATION"),
        })
        .unwrap()
    );
    other.super_concepts_mut().remove_named("LOCATION");
    assert!(other.write_expression_axioms().unwrap().is_empty());
}

#[test]
fn equality_is_ground_only() {
    let onto = robots();
    let mut a = FullConceptDesc::named("ROOM", &onto).unwrap();
    let b = FullConceptDesc::named("ROOM", &onto).unwrap();
    a.super_concepts_mut().add_named("LOCATION");
    a.definition_mut().add_class("PLACE");
    assert_eq!(a, b);

    let elsewhere = FullConceptDesc::named("ROOM", &robots()).unwrap();
    assert_ne!(a, elsewhere);
    let other_class = FullConceptDesc::named("CORRIDOR", &onto).unwrap();
    assert_ne!(a, other_class);

    let mut set = std::collections::HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn declared_orders() {
    use ExpressionKind as K;
    assert_eq!(
        FullIndividualDesc::READ_ORDER,
        &[
            K::SameIndividual,
            K::DifferentIndividual,
            K::Type,
            K::ObjectLink,
            K::DataLink,
        ]
    );
    assert_eq!(
        FullObjectPropertyDesc::WRITE_ORDER,
        &[
            K::DisjointProperty,
            K::EquivalentProperty,
            K::Range,
            K::Domain,
            K::SubProperty,
            K::SuperProperty,
            K::InverseProperty,
        ]
    );
    assert_eq!(
        DefinitionConceptDesc::READ_ORDER,
        &[K::DisjointConcept, K::EquivalentConcept, K::Definition, K::Instance]
    );
    let definition = FullConceptDesc::WRITE_ORDER
        .iter()
        .position(|k| *k == K::Definition)
        .unwrap();
    let hierarchy = FullConceptDesc::WRITE_ORDER
        .iter()
        .position(|k| *k == K::SuperConcept)
        .unwrap();
    assert!(definition > hierarchy);
}

#[test]
fn pending_changes_tracked_until_written() {
    let onto = robots();
    let mut room = HierarchicalConceptDesc::named("ROOM", &onto).unwrap();
    assert!(room.is_synchronized());
    room.sub_concepts_mut().add_named("KITCHEN");
    assert!(!room.is_synchronized());
    room.write_expression_axioms().unwrap();
    assert!(room.is_synchronized());
}
