//! Data property descriptors.

use super::Descriptor;
use crate::error::OntologyResult;
use crate::expression::{
    DisjointProperties, Domain, EquivalentProperties, NamedValues, Range, SubProperties,
    SuperProperties,
};
use crate::ground::DataProperty;

descriptor! {
    FullDataPropertyDesc: DataProperty {
        disjoint, disjoint_mut: DisjointProperties<DataProperty> => DisjointProperty,
        equivalent, equivalent_mut: EquivalentProperties<DataProperty> => EquivalentProperty,
        range, range_mut: Range<DataProperty> => Range,
        domain, domain_mut: Domain<DataProperty> => Domain,
        sub_properties, sub_properties_mut: SubProperties<DataProperty> => SubProperty,
        super_properties, super_properties_mut: SuperProperties<DataProperty> => SuperProperty,
    }
    read: [DisjointProperty, EquivalentProperty, Range, Domain, SubProperty, SuperProperty],
    write: [DisjointProperty, EquivalentProperty, Range, Domain, SubProperty, SuperProperty],
}

descriptor! {
    /// Reads the domain first and writes the range first.
    DomainRangeDataPropertyDesc: DataProperty {
        domain, domain_mut: Domain<DataProperty> => Domain,
        range, range_mut: Range<DataProperty> => Range,
    }
    read: [Domain, Range],
    write: [Range, Domain],
}

descriptor! {
    HierarchicalDataPropertyDesc: DataProperty {
        sub_properties, sub_properties_mut: SubProperties<DataProperty> => SubProperty,
        super_properties, super_properties_mut: SuperProperties<DataProperty> => SuperProperty,
    }
    read: [SubProperty, SuperProperty],
    write: [SubProperty, SuperProperty],
}

descriptor! {
    DefinitionDataPropertyDesc: DataProperty {
        disjoint, disjoint_mut: DisjointProperties<DataProperty> => DisjointProperty,
        equivalent, equivalent_mut: EquivalentProperties<DataProperty> => EquivalentProperty,
    }
    read: [DisjointProperty, EquivalentProperty],
    write: [DisjointProperty, EquivalentProperty],
}

type Built<D> = OntologyResult<Vec<D>>;

impl FullDataPropertyDesc {
    pub fn build_disjoint<D: Descriptor<Kind = DataProperty>>(&self) -> Built<D> {
        self.disjoint.build(self.ontology())
    }

    pub fn build_equivalent<D: Descriptor<Kind = DataProperty>>(&self) -> Built<D> {
        self.equivalent.build(self.ontology())
    }

    pub fn build_sub_properties<D: Descriptor<Kind = DataProperty>>(&self) -> Built<D> {
        self.sub_properties.build(self.ontology())
    }

    pub fn build_super_properties<D: Descriptor<Kind = DataProperty>>(&self) -> Built<D> {
        self.super_properties.build(self.ontology())
    }
}

impl HierarchicalDataPropertyDesc {
    pub fn build_sub_properties<D: Descriptor<Kind = DataProperty>>(&self) -> Built<D> {
        self.sub_properties.build(self.ontology())
    }

    pub fn build_super_properties<D: Descriptor<Kind = DataProperty>>(&self) -> Built<D> {
        self.super_properties.build(self.ontology())
    }
}

impl DefinitionDataPropertyDesc {
    pub fn build_disjoint<D: Descriptor<Kind = DataProperty>>(&self) -> Built<D> {
        self.disjoint.build(self.ontology())
    }

    pub fn build_equivalent<D: Descriptor<Kind = DataProperty>>(&self) -> Built<D> {
        self.equivalent.build(self.ontology())
    }
}
