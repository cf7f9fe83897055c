// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # owloop
//!
//! The descriptor pattern for OWL ontologies: keep an in-memory view of an
//! entity's axioms and synchronize it with an ontology in both directions.
//!
//! ## Architecture
//!
//! - **Ontology** (`ontology`): entities, axioms, the [`Ontology`](ontology::Ontology)
//!   trait, an in-memory implementation with a rule reasoner, and a named registry
//! - **Grounds** (`ground`): the binding of a descriptor to one entity and ontology
//! - **Entity sets** (`entity_set`): ordered sets with pending-change tracking and diffs
//! - **Expressions** (`expression`): one read/write capability per axiom category
//! - **Descriptors** (`descriptor`): capabilities composed in a declared order
//! - **Intents** (`intent`): the audit trail every read and write returns
//!
//! ## Library usage
//!
//! ```no_run
//! use owloop::prelude::*;
//!
//! let onto = OntologyRef::new(MemOntology::new("robots", "http://example.org/robots").unwrap());
//! let mut is_in = DomainRangeObjectPropertyDesc::named("isIn", &onto).unwrap();
//! is_in.domain_mut().add_class("ROBOT");
//! is_in.range_mut().add_class("LOCATION");
//! for intent in is_in.write_expression_axioms().unwrap() {
//!     println!("{intent}");
//! }
//! ```

pub mod config;
pub mod descriptor;
pub mod entity_set;
pub mod error;
pub mod expression;
pub mod ground;
pub mod intent;
pub mod ontology;

/// Traits and types needed to work with descriptors.
pub mod prelude {
    pub use crate::config::OntologyConfig;
    pub use crate::descriptor::*;
    pub use crate::entity_set::{EntitySet, Link, LinkGroup};
    pub use crate::error::{OntologyError, OntologyResult, OwlError, OwlResult};
    pub use crate::expression::{Expression, ExpressionKind, NamedValues, RestrictionValues};
    pub use crate::ground::{
        Concept, DataProperty, Ground, GroundConfig, Individual, ObjectProperty, OntologySource,
    };
    pub use crate::intent::{IntentOperation, MappingIntent};
    pub use crate::ontology::{
        Axiom, AxiomKind, DataType, Entity, EntityKind, Literal, MemOntology, Ontology,
        OntologyRef, OntologyRegistry, Restriction,
    };
}
