//! Individual descriptors.

use super::Descriptor;
use crate::error::OntologyResult;
use crate::expression::{
    DataLinks, DifferentIndividuals, NamedValues, ObjectLinks, SameIndividuals, Types,
};
use crate::ground::{Concept, Individual};

descriptor! {
    /// Types, identity and every outgoing link.
    FullIndividualDesc: Individual {
        same, same_mut: SameIndividuals => SameIndividual,
        different, different_mut: DifferentIndividuals => DifferentIndividual,
        types, types_mut: Types => Type,
        object_links, object_links_mut: ObjectLinks => ObjectLink,
        data_links, data_links_mut: DataLinks => DataLink,
    }
    read: [SameIndividual, DifferentIndividual, Type, ObjectLink, DataLink],
    write: [SameIndividual, DifferentIndividual, Type, ObjectLink, DataLink],
}

descriptor! {
    TypeIndividualDesc: Individual {
        types, types_mut: Types => Type,
    }
    read: [Type],
    write: [Type],
}

descriptor! {
    /// Outgoing object and data property assertions.
    LinkIndividualDesc: Individual {
        object_links, object_links_mut: ObjectLinks => ObjectLink,
        data_links, data_links_mut: DataLinks => DataLink,
    }
    read: [ObjectLink, DataLink],
    write: [ObjectLink, DataLink],
}

descriptor! {
    DefinitionIndividualDesc: Individual {
        same, same_mut: SameIndividuals => SameIndividual,
        different, different_mut: DifferentIndividuals => DifferentIndividual,
    }
    read: [SameIndividual, DifferentIndividual],
    write: [SameIndividual, DifferentIndividual],
}

impl FullIndividualDesc {
    pub fn build_same<D: Descriptor<Kind = Individual>>(&self) -> OntologyResult<Vec<D>> {
        self.same.build(self.ontology())
    }

    pub fn build_different<D: Descriptor<Kind = Individual>>(&self) -> OntologyResult<Vec<D>> {
        self.different.build(self.ontology())
    }

    pub fn build_types<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.types.build(self.ontology())
    }
}

impl TypeIndividualDesc {
    /// Freshly read descriptors of every asserted class.
    pub fn build_types<D: Descriptor<Kind = Concept>>(&self) -> OntologyResult<Vec<D>> {
        self.types.build(self.ontology())
    }
}

impl DefinitionIndividualDesc {
    pub fn build_same<D: Descriptor<Kind = Individual>>(&self) -> OntologyResult<Vec<D>> {
        self.same.build(self.ontology())
    }

    pub fn build_different<D: Descriptor<Kind = Individual>>(&self) -> OntologyResult<Vec<D>> {
        self.different.build(self.ontology())
    }
}
