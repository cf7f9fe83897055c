//! Expression capabilities: one composable read/write unit per axiom category.
//!
//! Each capability owns one [`EntitySet`] and implements [`Expression`],
//! whose default methods carry the whole synchronization protocol:
//!
//! - `read_expression_axioms` replaces the set with what the ontology holds,
//!   asserted values first and inferred ones after, and returns one READ
//!   intent per value;
//! - `write_expression_axioms` asserts the values the ontology does not hold
//!   yet (ADD intents first, in set order) and retracts asserted values
//!   missing from the set (REMOVE intents after, in query order). Inferred
//!   values cannot be retracted and are left in place.
//!
//! Capabilities only describe how their values map to axioms. Descriptors
//! compose them through the object-safe [`Synchronize`] view.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;
use crate::entity_set::EntitySet;
use crate::error::OntologyResult;
use crate::ground::{GroundConfig, GroundInstance};
use crate::intent::{IntentOperation, MappingIntent};
use crate::ontology::{
    Axiom, AxiomKind, DataType, Entity, EntityKind, Filler, OntologyRef, Restriction,
};

/// Declare a capability struct owning one entity set of `$value`.
///
/// `multi` capabilities have no set-wide singleton variant.
macro_rules! capability {
    (@define $(#[$meta:meta])* $name:ident<$value:ty>) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            set: $crate::entity_set::EntitySet<$value>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }
    };
    ($(#[$meta:meta])* multi $name:ident<$value:ty>) => {
        capability!(@define $(#[$meta])* $name<$value>);
    };
    ($(#[$meta:meta])* $name:ident<$value:ty>) => {
        capability!(@define $(#[$meta])* $name<$value>);

        impl $name {
            /// Variant holding at most one value.
            pub fn singleton() -> Self {
                Self {
                    set: $crate::entity_set::EntitySet::singleton(),
                }
            }
        }
    };
}

/// `entity_set` / `entity_set_mut` for capabilities storing their set in `set`.
macro_rules! set_accessors {
    ($value:ty) => {
        fn entity_set(&self) -> &$crate::entity_set::EntitySet<$value> {
            &self.set
        }

        fn entity_set_mut(&mut self) -> &mut $crate::entity_set::EntitySet<$value> {
            &mut self.set
        }
    };
}

pub mod concept;
pub mod individual;
pub mod property;

pub use concept::{
    Definition, DisjointConcepts, EquivalentConcepts, Instances, SubConcepts, SuperConcepts,
};
pub use individual::{DataLinks, DifferentIndividuals, ObjectLinks, SameIndividuals, Types};
pub use property::{
    DisjointProperties, Domain, EquivalentProperties, InverseProperties, Range, SubProperties,
    SuperProperties,
};

/// Which capability produced an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionKind {
    Definition,
    SubConcept,
    SuperConcept,
    EquivalentConcept,
    DisjointConcept,
    Instance,
    Type,
    SameIndividual,
    DifferentIndividual,
    ObjectLink,
    DataLink,
    SubProperty,
    SuperProperty,
    EquivalentProperty,
    DisjointProperty,
    InverseProperty,
    Domain,
    Range,
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Definition => "definition",
            Self::SubConcept => "sub_concept",
            Self::SuperConcept => "super_concept",
            Self::EquivalentConcept => "equivalent_concept",
            Self::DisjointConcept => "disjoint_concept",
            Self::Instance => "instance",
            Self::Type => "type",
            Self::SameIndividual => "same_individual",
            Self::DifferentIndividual => "different_individual",
            Self::ObjectLink => "object_link",
            Self::DataLink => "data_link",
            Self::SubProperty => "sub_property",
            Self::SuperProperty => "super_property",
            Self::EquivalentProperty => "equivalent_property",
            Self::DisjointProperty => "disjoint_property",
            Self::InverseProperty => "inverse_property",
            Self::Domain => "domain",
            Self::Range => "range",
        };
        f.write_str(name)
    }
}

/// Values written together under one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<V> {
    pub label: String,
    pub values: Vec<V>,
}

impl<V: fmt::Display> Batch<V> {
    pub fn single(value: V) -> Self {
        Self {
            label: value.to_string(),
            values: vec![value],
        }
    }
}

// ---------------------------------------------------------------------------
// Expression
// ---------------------------------------------------------------------------

/// One axiom category seen from the ground entity.
pub trait Expression {
    type Value: Clone + Eq + Hash + fmt::Display;

    const KIND: ExpressionKind;
    const AXIOM_KIND: AxiomKind;

    fn entity_set(&self) -> &EntitySet<Self::Value>;
    fn entity_set_mut(&mut self) -> &mut EntitySet<Self::Value>;

    /// The value `axiom` contributes for `subject`, if it belongs here.
    fn value_of(subject: &Entity, axiom: &Axiom) -> Option<Self::Value>;

    /// The axiom stating `value` about `subject`.
    fn axiom_for(subject: &Entity, value: &Self::Value) -> Axiom;

    /// How diffed values are grouped into intents. One intent per value by
    /// default.
    fn batches(values: Vec<Self::Value>) -> Vec<Batch<Self::Value>> {
        values.into_iter().map(Batch::single).collect()
    }

    fn add(&mut self, value: Self::Value) -> bool {
        self.entity_set_mut().add(value)
    }

    fn remove(&mut self, value: &Self::Value) -> bool {
        self.entity_set_mut().remove(value)
    }

    /// Values `axioms` contribute for `subject`, first occurrence wins.
    fn values_in(subject: &Entity, axioms: &[Axiom]) -> Vec<Self::Value> {
        let mut values: Vec<Self::Value> = Vec::with_capacity(axioms.len());
        for axiom in axioms {
            if let Some(value) = Self::value_of(subject, axiom) {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
        values
    }

    /// Values the ontology holds, asserted first and then inferred as of the
    /// last reasoner synchronization.
    fn query(ground: &GroundInstance) -> OntologyResult<Vec<Self::Value>> {
        let axioms = ground
            .ontology()
            .query_inferred(ground.entity(), Self::AXIOM_KIND)?;
        Ok(Self::values_in(ground.entity(), &axioms))
    }

    /// Values the ontology asserts explicitly, in assertion order.
    fn query_asserted(ground: &GroundInstance) -> OntologyResult<Vec<Self::Value>> {
        let axioms = ground
            .ontology()
            .query_axioms(ground.entity(), Self::AXIOM_KIND)?;
        Ok(Self::values_in(ground.entity(), &axioms))
    }

    fn read_expression_axioms(
        &mut self,
        ground: &GroundInstance,
    ) -> OntologyResult<Vec<MappingIntent>> {
        let subject = ground.entity();
        let values = Self::query(ground)?;
        let intents = values
            .iter()
            .map(|value| {
                MappingIntent::new(
                    IntentOperation::Read,
                    subject.clone(),
                    Self::KIND,
                    value.to_string(),
                    vec![Self::axiom_for(subject, value)],
                    true,
                )
            })
            .collect::<Vec<_>>();
        self.entity_set_mut().reset(values);
        tracing::debug!(ground = %subject, expression = %Self::KIND, values = intents.len(), "read axioms");
        Ok(intents)
    }

    fn write_expression_axioms(
        &mut self,
        ground: &GroundInstance,
    ) -> OntologyResult<Vec<MappingIntent>> {
        let subject = ground.entity();
        let ontology = ground.ontology();
        // Entailed values already hold; only asserted ones can be retracted.
        let entailed = self.entity_set().diff(&Self::query(ground)?);
        let asserted = self.entity_set().diff(&Self::query_asserted(ground)?);
        let kept = entailed.to_remove.len().saturating_sub(asserted.to_remove.len());
        if kept > 0 {
            tracing::debug!(ground = %subject, expression = %Self::KIND, kept, "inferred values left in place");
        }

        let mut intents = Vec::new();
        for (operation, values) in [
            (IntentOperation::Add, entailed.to_add),
            (IntentOperation::Remove, asserted.to_remove),
        ] {
            for batch in Self::batches(values) {
                let axioms: Vec<Axiom> = batch
                    .values
                    .iter()
                    .map(|value| Self::axiom_for(subject, value))
                    .collect();
                let mut success = true;
                for axiom in &axioms {
                    let changed = match operation {
                        IntentOperation::Remove => ontology.retract_axiom(axiom)?,
                        _ => ontology.assert_axiom(axiom)?,
                    };
                    success &= changed;
                }
                intents.push(MappingIntent::new(
                    operation,
                    subject.clone(),
                    Self::KIND,
                    batch.label,
                    axioms,
                    success,
                ));
            }
        }
        self.entity_set_mut().mark_synchronized();
        tracing::debug!(ground = %subject, expression = %Self::KIND, changes = intents.len(), "wrote axioms");
        Ok(intents)
    }
}

/// Object-safe view of an [`Expression`], used by descriptors to run their
/// capabilities in a declared order.
pub trait Synchronize {
    fn expression_kind(&self) -> ExpressionKind;
    fn read_axioms(&mut self, ground: &GroundInstance) -> OntologyResult<Vec<MappingIntent>>;
    fn write_axioms(&mut self, ground: &GroundInstance) -> OntologyResult<Vec<MappingIntent>>;
    /// Rendering of the entity set, e.g. `{ROOM, CORRIDOR}`.
    fn describe(&self) -> String;
    fn is_synchronized(&self) -> bool;
}

impl<T: Expression> Synchronize for T {
    fn expression_kind(&self) -> ExpressionKind {
        T::KIND
    }

    fn read_axioms(&mut self, ground: &GroundInstance) -> OntologyResult<Vec<MappingIntent>> {
        self.read_expression_axioms(ground)
    }

    fn write_axioms(&mut self, ground: &GroundInstance) -> OntologyResult<Vec<MappingIntent>> {
        self.write_expression_axioms(ground)
    }

    fn describe(&self) -> String {
        self.entity_set().to_string()
    }

    fn is_synchronized(&self) -> bool {
        self.entity_set().is_synchronized()
    }
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

/// Capabilities whose values are named entities of one kind.
pub trait NamedValues: Expression<Value = Entity> {
    const VALUE_KIND: EntityKind;

    /// Add the entity called `name`.
    fn add_named(&mut self, name: &str) -> bool {
        self.add(Entity::new(Self::VALUE_KIND, name))
    }

    fn remove_named(&mut self, name: &str) -> bool {
        self.remove(&Entity::new(Self::VALUE_KIND, name))
    }

    fn contains_named(&self, name: &str) -> bool {
        self.entity_set()
            .contains(&Entity::new(Self::VALUE_KIND, name))
    }

    /// Names in set order.
    fn names(&self) -> Vec<&str> {
        self.entity_set().iter().map(Entity::name).collect()
    }

    /// One freshly read descriptor of type `D` per entity in the set.
    fn build<D: Descriptor>(&self, ontology: &OntologyRef) -> OntologyResult<Vec<D>> {
        let mut out = Vec::with_capacity(self.entity_set().len());
        for entity in self.entity_set().iter() {
            let mut descriptor = D::new(GroundConfig::new(entity, ontology))?;
            descriptor.read_expression_axioms()?;
            out.push(descriptor);
        }
        Ok(out)
    }
}

/// Capabilities holding restrictions: class definitions, domains, ranges.
pub trait RestrictionValues: Expression<Value = Restriction> {
    fn add_class(&mut self, class: &str) -> bool {
        self.add(Restriction::class(class))
    }

    fn remove_class(&mut self, class: &str) -> bool {
        self.remove(&Restriction::class(class))
    }

    fn add_datatype(&mut self, datatype: DataType) -> bool {
        self.add(Restriction::DataRange(datatype))
    }

    fn add_some(&mut self, property: &str, class: &str) -> bool {
        self.add(Restriction::some(object(property), class_filler(class)))
    }

    fn add_only(&mut self, property: &str, class: &str) -> bool {
        self.add(Restriction::only(object(property), class_filler(class)))
    }

    fn add_min(&mut self, property: &str, cardinality: u32, class: &str) -> bool {
        self.add(Restriction::min(object(property), cardinality, class_filler(class)))
    }

    fn add_max(&mut self, property: &str, cardinality: u32, class: &str) -> bool {
        self.add(Restriction::max(object(property), cardinality, class_filler(class)))
    }

    fn add_exact(&mut self, property: &str, cardinality: u32, class: &str) -> bool {
        self.add(Restriction::exact(object(property), cardinality, class_filler(class)))
    }

    fn add_data_some(&mut self, property: &str, datatype: DataType) -> bool {
        self.add(Restriction::some(data(property), Filler::Data(datatype)))
    }

    fn add_data_only(&mut self, property: &str, datatype: DataType) -> bool {
        self.add(Restriction::only(data(property), Filler::Data(datatype)))
    }

    fn add_data_min(&mut self, property: &str, cardinality: u32, datatype: DataType) -> bool {
        self.add(Restriction::min(data(property), cardinality, Filler::Data(datatype)))
    }

    fn add_data_max(&mut self, property: &str, cardinality: u32, datatype: DataType) -> bool {
        self.add(Restriction::max(data(property), cardinality, Filler::Data(datatype)))
    }

    fn add_data_exact(&mut self, property: &str, cardinality: u32, datatype: DataType) -> bool {
        self.add(Restriction::exact(data(property), cardinality, Filler::Data(datatype)))
    }

    /// Drop every restriction over `property`. Returns whether any was removed.
    fn remove_restrictions_on(&mut self, property: &str) -> bool {
        let doomed: Vec<Restriction> = self
            .entity_set()
            .iter()
            .filter(|r| r.property().is_some_and(|p| p.name() == property))
            .cloned()
            .collect();
        let mut changed = false;
        for restriction in &doomed {
            changed |= self.remove(restriction);
        }
        changed
    }
}

impl<T: Expression<Value = Restriction>> RestrictionValues for T {}

fn object(name: &str) -> Entity {
    Entity::object_property(name)
}

fn data(name: &str) -> Entity {
    Entity::data_property(name)
}

fn class_filler(name: &str) -> Filler {
    Filler::Class(Entity::class(name))
}
