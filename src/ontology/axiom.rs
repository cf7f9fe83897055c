//! Axioms: the unit of ontology state that descriptors read and write.
//!
//! Symmetric axioms (equivalence, disjointness, same/different, inverse) are
//! stored in [`Axiom::normalized`] form so that `A ≡ B` and `B ≡ A` are the
//! same value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind, Literal, Restriction};

/// Axiom category, used to scope ontology queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxiomKind {
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    ClassDefinition,
    ClassAssertion,
    SameIndividual,
    DifferentIndividuals,
    ObjectPropertyAssertion,
    DataPropertyAssertion,
    SubPropertyOf,
    EquivalentProperties,
    DisjointProperties,
    InverseProperties,
    PropertyDomain,
    PropertyRange,
}

impl fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A logical assertion about named entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "axiom", rename_all = "snake_case")]
pub enum Axiom {
    SubClassOf {
        sub: Entity,
        sup: Entity,
    },
    EquivalentClasses {
        left: Entity,
        right: Entity,
    },
    DisjointClasses {
        left: Entity,
        right: Entity,
    },
    /// One conjunct of the class's definition (`class ≡ … ⊓ restriction ⊓ …`).
    ClassDefinition {
        class: Entity,
        restriction: Restriction,
    },
    ClassAssertion {
        individual: Entity,
        class: Entity,
    },
    SameIndividual {
        left: Entity,
        right: Entity,
    },
    DifferentIndividuals {
        left: Entity,
        right: Entity,
    },
    ObjectPropertyAssertion {
        subject: Entity,
        property: Entity,
        object: Entity,
    },
    DataPropertyAssertion {
        subject: Entity,
        property: Entity,
        value: Literal,
    },
    SubPropertyOf {
        sub: Entity,
        sup: Entity,
    },
    EquivalentProperties {
        left: Entity,
        right: Entity,
    },
    DisjointProperties {
        left: Entity,
        right: Entity,
    },
    InverseProperties {
        left: Entity,
        right: Entity,
    },
    PropertyDomain {
        property: Entity,
        restriction: Restriction,
    },
    PropertyRange {
        property: Entity,
        restriction: Restriction,
    },
}

/// Order a symmetric pair so equal sets compare equal.
fn ordered(a: Entity, b: Entity) -> (Entity, Entity) {
    if b < a { (b, a) } else { (a, b) }
}

impl Axiom {
    pub fn equivalent_classes(a: Entity, b: Entity) -> Self {
        let (left, right) = ordered(a, b);
        Self::EquivalentClasses { left, right }
    }

    pub fn disjoint_classes(a: Entity, b: Entity) -> Self {
        let (left, right) = ordered(a, b);
        Self::DisjointClasses { left, right }
    }

    pub fn same_individual(a: Entity, b: Entity) -> Self {
        let (left, right) = ordered(a, b);
        Self::SameIndividual { left, right }
    }

    pub fn different_individuals(a: Entity, b: Entity) -> Self {
        let (left, right) = ordered(a, b);
        Self::DifferentIndividuals { left, right }
    }

    pub fn equivalent_properties(a: Entity, b: Entity) -> Self {
        let (left, right) = ordered(a, b);
        Self::EquivalentProperties { left, right }
    }

    pub fn disjoint_properties(a: Entity, b: Entity) -> Self {
        let (left, right) = ordered(a, b);
        Self::DisjointProperties { left, right }
    }

    pub fn inverse_properties(a: Entity, b: Entity) -> Self {
        let (left, right) = ordered(a, b);
        Self::InverseProperties { left, right }
    }

    /// Canonical form: symmetric pairs ordered, everything else unchanged.
    pub fn normalized(self) -> Self {
        match self {
            Self::EquivalentClasses { left, right } => Self::equivalent_classes(left, right),
            Self::DisjointClasses { left, right } => Self::disjoint_classes(left, right),
            Self::SameIndividual { left, right } => Self::same_individual(left, right),
            Self::DifferentIndividuals { left, right } => {
                Self::different_individuals(left, right)
            }
            Self::EquivalentProperties { left, right } => {
                Self::equivalent_properties(left, right)
            }
            Self::DisjointProperties { left, right } => Self::disjoint_properties(left, right),
            Self::InverseProperties { left, right } => Self::inverse_properties(left, right),
            other => other,
        }
    }

    pub fn kind(&self) -> AxiomKind {
        match self {
            Self::SubClassOf { .. } => AxiomKind::SubClassOf,
            Self::EquivalentClasses { .. } => AxiomKind::EquivalentClasses,
            Self::DisjointClasses { .. } => AxiomKind::DisjointClasses,
            Self::ClassDefinition { .. } => AxiomKind::ClassDefinition,
            Self::ClassAssertion { .. } => AxiomKind::ClassAssertion,
            Self::SameIndividual { .. } => AxiomKind::SameIndividual,
            Self::DifferentIndividuals { .. } => AxiomKind::DifferentIndividuals,
            Self::ObjectPropertyAssertion { .. } => AxiomKind::ObjectPropertyAssertion,
            Self::DataPropertyAssertion { .. } => AxiomKind::DataPropertyAssertion,
            Self::SubPropertyOf { .. } => AxiomKind::SubPropertyOf,
            Self::EquivalentProperties { .. } => AxiomKind::EquivalentProperties,
            Self::DisjointProperties { .. } => AxiomKind::DisjointProperties,
            Self::InverseProperties { .. } => AxiomKind::InverseProperties,
            Self::PropertyDomain { .. } => AxiomKind::PropertyDomain,
            Self::PropertyRange { .. } => AxiomKind::PropertyRange,
        }
    }

    /// The other member of a symmetric pair that contains `subject`.
    pub fn partner(&self, subject: &Entity) -> Option<&Entity> {
        match self {
            Self::EquivalentClasses { left, right }
            | Self::DisjointClasses { left, right }
            | Self::SameIndividual { left, right }
            | Self::DifferentIndividuals { left, right }
            | Self::EquivalentProperties { left, right }
            | Self::DisjointProperties { left, right }
            | Self::InverseProperties { left, right } => {
                if left == subject {
                    Some(right)
                } else if right == subject {
                    Some(left)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Whether `entity` fills one of the axiom's top-level slots.
    ///
    /// Entities mentioned only inside a restriction do not count: the
    /// definition of `ROOM` is not an axiom "about" `DOOR`.
    pub fn involves(&self, entity: &Entity) -> bool {
        self.slots().iter().any(|(e, _)| *e == entity)
    }

    /// Top-level slots with the entity kind each slot requires.
    pub fn slots(&self) -> Vec<(&Entity, EntityKind)> {
        use EntityKind::*;
        match self {
            Self::SubClassOf { sub, sup } => vec![(sub, Class), (sup, Class)],
            Self::EquivalentClasses { left, right } | Self::DisjointClasses { left, right } => {
                vec![(left, Class), (right, Class)]
            }
            Self::ClassDefinition { class, .. } => vec![(class, Class)],
            Self::ClassAssertion { individual, class } => {
                vec![(individual, Individual), (class, Class)]
            }
            Self::SameIndividual { left, right } | Self::DifferentIndividuals { left, right } => {
                vec![(left, Individual), (right, Individual)]
            }
            Self::ObjectPropertyAssertion {
                subject,
                property,
                object,
            } => vec![
                (subject, Individual),
                (property, ObjectProperty),
                (object, Individual),
            ],
            Self::DataPropertyAssertion {
                subject, property, ..
            } => vec![(subject, Individual), (property, DataProperty)],
            Self::SubPropertyOf { sub, sup } => vec![(sub, sub.kind()), (sup, sub.kind())],
            Self::EquivalentProperties { left, right }
            | Self::DisjointProperties { left, right } => {
                vec![(left, left.kind()), (right, left.kind())]
            }
            Self::InverseProperties { left, right } => {
                vec![(left, ObjectProperty), (right, ObjectProperty)]
            }
            Self::PropertyDomain { property, .. } | Self::PropertyRange { property, .. } => {
                vec![(property, property.kind())]
            }
        }
    }

    /// Every named entity in the axiom with its required kind, restrictions
    /// included.
    pub fn signature(&self) -> Vec<(&Entity, EntityKind)> {
        let mut out = self.slots();
        if let Self::ClassDefinition { restriction, .. }
        | Self::PropertyDomain { restriction, .. }
        | Self::PropertyRange { restriction, .. } = self
        {
            out.extend(restriction.entities().into_iter().map(|e| (e, e.kind())));
        }
        out
    }

    /// Check slot kinds that the variant alone cannot enforce.
    ///
    /// Returns the first entity whose kind does not fit, with the kind it
    /// should have had.
    pub fn kind_mismatch(&self) -> Option<(&Entity, EntityKind)> {
        if let Some((entity, expected)) = self
            .slots()
            .into_iter()
            .find(|(entity, expected)| entity.kind() != *expected)
        {
            return Some((entity, expected));
        }
        let property_axiom = matches!(
            self,
            Self::SubPropertyOf { .. }
                | Self::EquivalentProperties { .. }
                | Self::DisjointProperties { .. }
                | Self::PropertyDomain { .. }
                | Self::PropertyRange { .. }
        );
        if property_axiom {
            if let Some((entity, _)) = self.slots().into_iter().find(|(e, _)| !e.kind().is_property())
            {
                return Some((entity, EntityKind::ObjectProperty));
            }
        }
        None
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubClassOf { sub, sup } => write!(f, "SubClassOf({sub} {sup})"),
            Self::EquivalentClasses { left, right } => {
                write!(f, "EquivalentClasses({left} {right})")
            }
            Self::DisjointClasses { left, right } => write!(f, "DisjointClasses({left} {right})"),
            Self::ClassDefinition { class, restriction } => {
                write!(f, "ClassDefinition({class} [{restriction}])")
            }
            Self::ClassAssertion { individual, class } => {
                write!(f, "ClassAssertion({class} {individual})")
            }
            Self::SameIndividual { left, right } => write!(f, "SameIndividual({left} {right})"),
            Self::DifferentIndividuals { left, right } => {
                write!(f, "DifferentIndividuals({left} {right})")
            }
            Self::ObjectPropertyAssertion {
                subject,
                property,
                object,
            } => write!(f, "ObjectPropertyAssertion({property} {subject} {object})"),
            Self::DataPropertyAssertion {
                subject,
                property,
                value,
            } => write!(f, "DataPropertyAssertion({property} {subject} {value})"),
            Self::SubPropertyOf { sub, sup } => write!(f, "SubPropertyOf({sub} {sup})"),
            Self::EquivalentProperties { left, right } => {
                write!(f, "EquivalentProperties({left} {right})")
            }
            Self::DisjointProperties { left, right } => {
                write!(f, "DisjointProperties({left} {right})")
            }
            Self::InverseProperties { left, right } => {
                write!(f, "InverseProperties({left} {right})")
            }
            Self::PropertyDomain {
                property,
                restriction,
            } => write!(f, "PropertyDomain({property} [{restriction}])"),
            Self::PropertyRange {
                property,
                restriction,
            } => write!(f, "PropertyRange({property} [{restriction}])"),
        }
    }
}
