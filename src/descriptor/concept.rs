//! Class descriptors.
//!
//! Definitions are written after the hierarchy and read before it.

use super::Descriptor;
use crate::error::OntologyResult;
use crate::expression::{
    Definition, DisjointConcepts, EquivalentConcepts, Instances, NamedValues, SubConcepts,
    SuperConcepts,
};
use crate::ground::{Concept, Individual};

descriptor! {
    /// Every class capability.
    FullConceptDesc: Concept {
        disjoint, disjoint_mut: DisjointConcepts => DisjointConcept,
        equivalent, equivalent_mut: EquivalentConcepts => EquivalentConcept,
        definition, definition_mut: Definition => Definition,
        sub_concepts, sub_concepts_mut: SubConcepts => SubConcept,
        super_concepts, super_concepts_mut: SuperConcepts => SuperConcept,
        instances, instances_mut: Instances => Instance,
    }
    read: [DisjointConcept, EquivalentConcept, Definition, SubConcept, SuperConcept, Instance],
    write: [DisjointConcept, EquivalentConcept, SubConcept, SuperConcept, Definition, Instance],
}

descriptor! {
    /// Sub and super classes only.
    HierarchicalConceptDesc: Concept {
        sub_concepts, sub_concepts_mut: SubConcepts => SubConcept,
        super_concepts, super_concepts_mut: SuperConcepts => SuperConcept,
    }
    read: [SubConcept, SuperConcept],
    write: [SubConcept, SuperConcept],
}

descriptor! {
    DefinitionConceptDesc: Concept {
        disjoint, disjoint_mut: DisjointConcepts => DisjointConcept,
        equivalent, equivalent_mut: EquivalentConcepts => EquivalentConcept,
        definition, definition_mut: Definition => Definition,
        instances, instances_mut: Instances => Instance,
    }
    read: [DisjointConcept, EquivalentConcept, Definition, Instance],
    write: [DisjointConcept, EquivalentConcept, Definition, Instance],
}

descriptor! {
    /// Class membership seen from the class.
    InstanceConceptDesc: Concept {
        instances, instances_mut: Instances => Instance,
    }
    read: [Instance],
    write: [Instance],
}

descriptor! {
    RestrictionConceptDesc: Concept {
        definition, definition_mut: Definition => Definition,
    }
    read: [Definition],
    write: [Definition],
}

impl FullConceptDesc {
    pub fn build_disjoint<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.disjoint.build(self.ontology())
    }

    pub fn build_equivalent<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.equivalent.build(self.ontology())
    }

    pub fn build_sub_concepts<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.sub_concepts.build(self.ontology())
    }

    pub fn build_super_concepts<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.super_concepts.build(self.ontology())
    }

    pub fn build_instances<D: Descriptor<Kind = Individual>>(&self) -> OntologyResult<Vec<D>> {
        self.instances.build(self.ontology())
    }
}

impl HierarchicalConceptDesc {
    /// Freshly read descriptors of every direct sub class.
    pub fn build_sub_concepts<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.sub_concepts.build(self.ontology())
    }

    pub fn build_super_concepts<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.super_concepts.build(self.ontology())
    }
}

impl DefinitionConceptDesc {
    pub fn build_disjoint<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.disjoint.build(self.ontology())
    }

    pub fn build_equivalent<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.equivalent.build(self.ontology())
    }

    pub fn build_instances<D: Descriptor<Kind = Individual>>(&self) -> OntologyResult<Vec<D>> {
        self.instances.build(self.ontology())
    }
}

impl InstanceConceptDesc {
    pub fn build_instances<D: Descriptor<Kind = Individual>>(&self) -> OntologyResult<Vec<D>> {
        self.instances.build(self.ontology())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeIndividualDesc;
    use crate::expression::{ExpressionKind, RestrictionValues};
    use crate::intent::changes;
    use crate::ontology::{MemOntology, OntologyRef};

    fn robots() -> OntologyRef {
        OntologyRef::new(MemOntology::new("robots", "http://example.org/robots").unwrap())
    }

    #[test]
    fn full_concept_declared_orders() {
        use ExpressionKind as K;
        assert_eq!(
            FullConceptDesc::READ_ORDER,
            &[
                K::DisjointConcept,
                K::EquivalentConcept,
                K::Definition,
                K::SubConcept,
                K::SuperConcept,
                K::Instance,
            ]
        );
        assert_eq!(
            FullConceptDesc::WRITE_ORDER,
            &[
                K::DisjointConcept,
                K::EquivalentConcept,
                K::SubConcept,
                K::SuperConcept,
                K::Definition,
                K::Instance,
            ]
        );
    }

    #[test]
    fn full_concept_round_trip() {
        let onto = robots();
        let mut room = FullConceptDesc::named("ROOM", &onto).unwrap();
        room.super_concepts_mut().add_named("LOCATION");
        room.disjoint_mut().add_named("CORRIDOR");
        room.definition_mut().add_min("hasDoor", 1, "DOOR");
        room.instances_mut().add_named("Room1");
        assert_eq!(room.write_expression_axioms().unwrap().len(), 4);

        let mut fresh = FullConceptDesc::named("ROOM", &onto).unwrap();
        assert_eq!(fresh.read_expression_axioms().unwrap().len(), 4);
        assert!(changes(&fresh.write_expression_axioms().unwrap()).is_empty());
        assert!(fresh.disjoint().contains_named("CORRIDOR"));
    }

    #[test]
    fn build_sub_concepts_reads_each() {
        let onto = robots();
        let mut location = HierarchicalConceptDesc::named("LOCATION", &onto).unwrap();
        location.sub_concepts_mut().add_named("ROOM");
        location.sub_concepts_mut().add_named("CORRIDOR");
        location.write_expression_axioms().unwrap();

        let subs: Vec<HierarchicalConceptDesc> = location.build_sub_concepts().unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].ground().entity().name(), "ROOM");
        assert_eq!(subs[1].super_concepts().names(), vec!["LOCATION"]);
    }

    #[test]
    fn build_instances_gives_individual_descriptors() {
        let onto = robots();
        let mut robot = InstanceConceptDesc::named("ROBOT", &onto).unwrap();
        robot.instances_mut().add_named("Robot1");
        robot.write_expression_axioms().unwrap();

        let members: Vec<TypeIndividualDesc> = robot.build_instances().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].types().names(), vec!["ROBOT"]);
    }

    #[test]
    fn restriction_descriptor_only_touches_definition() {
        let onto = robots();
        let mut room = RestrictionConceptDesc::named("ROOM", &onto).unwrap();
        room.definition_mut().add_class("LOCATION");
        room.write_expression_axioms().unwrap();
        let hierarchy = {
            let mut desc = HierarchicalConceptDesc::named("ROOM", &onto).unwrap();
            desc.read_expression_axioms().unwrap()
        };
        assert!(hierarchy.is_empty());
    }
}
