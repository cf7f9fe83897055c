//! Object property descriptors.

use super::Descriptor;
use crate::error::OntologyResult;
use crate::expression::{
    DisjointProperties, Domain, EquivalentProperties, InverseProperties, NamedValues, Range,
    SubProperties, SuperProperties,
};
use crate::ground::ObjectProperty;

descriptor! {
    FullObjectPropertyDesc: ObjectProperty {
        disjoint, disjoint_mut: DisjointProperties<ObjectProperty> => DisjointProperty,
        equivalent, equivalent_mut: EquivalentProperties<ObjectProperty> => EquivalentProperty,
        range, range_mut: Range<ObjectProperty> => Range,
        domain, domain_mut: Domain<ObjectProperty> => Domain,
        sub_properties, sub_properties_mut: SubProperties<ObjectProperty> => SubProperty,
        super_properties, super_properties_mut: SuperProperties<ObjectProperty> => SuperProperty,
        inverse, inverse_mut: InverseProperties => InverseProperty,
    }
    read: [
        DisjointProperty,
        EquivalentProperty,
        Range,
        Domain,
        SubProperty,
        SuperProperty,
        InverseProperty,
    ],
    write: [
        DisjointProperty,
        EquivalentProperty,
        Range,
        Domain,
        SubProperty,
        SuperProperty,
        InverseProperty,
    ],
}

descriptor! {
    DomainRangeObjectPropertyDesc: ObjectProperty {
        domain, domain_mut: Domain<ObjectProperty> => Domain,
        range, range_mut: Range<ObjectProperty> => Range,
    }
    read: [Domain, Range],
    write: [Domain, Range],
}

descriptor! {
    HierarchicalObjectPropertyDesc: ObjectProperty {
        sub_properties, sub_properties_mut: SubProperties<ObjectProperty> => SubProperty,
        super_properties, super_properties_mut: SuperProperties<ObjectProperty> => SuperProperty,
    }
    read: [SubProperty, SuperProperty],
    write: [SubProperty, SuperProperty],
}

descriptor! {
    DefinitionObjectPropertyDesc: ObjectProperty {
        disjoint, disjoint_mut: DisjointProperties<ObjectProperty> => DisjointProperty,
        equivalent, equivalent_mut: EquivalentProperties<ObjectProperty> => EquivalentProperty,
        inverse, inverse_mut: InverseProperties => InverseProperty,
    }
    read: [DisjointProperty, EquivalentProperty, InverseProperty],
    write: [DisjointProperty, EquivalentProperty, InverseProperty],
}

type Built<D> = OntologyResult<Vec<D>>;

impl FullObjectPropertyDesc {
    pub fn build_disjoint<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.disjoint.build(self.ontology())
    }

    pub fn build_equivalent<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.equivalent.build(self.ontology())
    }

    pub fn build_sub_properties<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.sub_properties.build(self.ontology())
    }

    pub fn build_super_properties<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.super_properties.build(self.ontology())
    }

    pub fn build_inverse<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.inverse.build(self.ontology())
    }
}

impl HierarchicalObjectPropertyDesc {
    pub fn build_sub_properties<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.sub_properties.build(self.ontology())
    }

    pub fn build_super_properties<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.super_properties.build(self.ontology())
    }
}

impl DefinitionObjectPropertyDesc {
    pub fn build_disjoint<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.disjoint.build(self.ontology())
    }

    pub fn build_equivalent<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.equivalent.build(self.ontology())
    }

    pub fn build_inverse<D: Descriptor<Kind = ObjectProperty>>(&self) -> Built<D> {
        self.inverse.build(self.ontology())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{Expression, RestrictionValues};
    use crate::ontology::{MemOntology, OntologyRef, Restriction};

    fn robots() -> OntologyRef {
        OntologyRef::new(MemOntology::new("robots", "http://example.org/robots").unwrap())
    }

    #[test]
    fn domain_range_end_to_end() {
        let onto = robots();
        let mut is_in = DomainRangeObjectPropertyDesc::named("isIn", &onto).unwrap();
        is_in.domain_mut().add_class("ROBOT");
        is_in.range_mut().add_class("LOCATION");
        assert_eq!(is_in.write_expression_axioms().unwrap().len(), 2);

        let mut fresh = DomainRangeObjectPropertyDesc::named("isIn", &onto).unwrap();
        fresh.read_expression_axioms().unwrap();
        assert_eq!(fresh.domain().entity_set().first(), Some(&Restriction::class("ROBOT")));
        assert_eq!(fresh.range().entity_set().first(), Some(&Restriction::class("LOCATION")));
        assert_eq!(fresh, is_in);
    }

    #[test]
    fn inverse_descriptors_build_each_other() {
        let onto = robots();
        let mut contains = DefinitionObjectPropertyDesc::named("contains", &onto).unwrap();
        contains.inverse_mut().add_named("isIn");
        contains.write_expression_axioms().unwrap();

        let inverses: Vec<DefinitionObjectPropertyDesc> = contains.build_inverse().unwrap();
        assert_eq!(inverses.len(), 1);
        assert_eq!(inverses[0].inverse().names(), vec!["contains"]);
    }

    #[test]
    fn hierarchy_between_object_properties() {
        let onto = robots();
        let mut linked = HierarchicalObjectPropertyDesc::named("isLinkedTo", &onto).unwrap();
        linked.sub_properties_mut().add_named("isDoorTo");
        linked.write_expression_axioms().unwrap();

        let subs: Vec<FullObjectPropertyDesc> = linked.build_sub_properties().unwrap();
        assert_eq!(subs[0].super_properties().names(), vec!["isLinkedTo"]);
    }
}
