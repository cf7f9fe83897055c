//! The ontology contract descriptors synchronize against.
//!
//! [`Ontology`] is the collaborator interface: entity resolution, axiom
//! queries, assertion/retraction, reasoner synchronization and persistence.
//! [`MemOntology`](memory::MemOntology) is the in-process implementation and
//! [`OntologyRegistry`](registry::OntologyRegistry) keeps opened ontologies
//! by name.

pub mod axiom;
pub mod entity;
pub mod memory;
pub mod reasoner;
pub mod registry;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::OntologyResult;

pub use axiom::{Axiom, AxiomKind};
pub use entity::{DataType, Entity, EntityKind, Filler, Literal, Restriction};
pub use memory::MemOntology;
pub use registry::OntologyRegistry;

/// An ontology with a reasoner attached.
///
/// `query_axioms` reports asserted axioms only; `query_inferred` adds what the
/// reasoner derived as of the last [`synchronize_reasoner`](Self::synchronize_reasoner).
/// Descriptors read through `query_inferred`, so in buffering mode they see
/// new consequences only after an explicit synchronization.
pub trait Ontology: Send + Sync + fmt::Debug {
    /// Registry name.
    fn name(&self) -> &str;

    /// Base IRI.
    fn iri(&self) -> &str;

    /// Snapshot file the ontology was opened from or will be saved to.
    fn file_path(&self) -> Option<&Path>;

    fn is_buffering(&self) -> bool;

    /// When buffering is off every assert/retract re-synchronizes the reasoner.
    fn set_buffering(&self, buffering: bool);

    /// Look up a declared entity; fails with `EntityResolution` if the name is
    /// undeclared or declared with another kind.
    fn resolve(&self, kind: EntityKind, name: &str) -> OntologyResult<Entity>;

    /// Look up an entity, declaring it first when needed.
    fn resolve_or_create(&self, kind: EntityKind, name: &str) -> OntologyResult<Entity>;

    /// Asserted axioms of `kind` in which `entity` fills a top-level slot, in
    /// assertion order.
    fn query_axioms(&self, entity: &Entity, kind: AxiomKind) -> OntologyResult<Vec<Axiom>>;

    /// Asserted axioms of `kind` about `entity` followed by the ones the
    /// reasoner derived at its last synchronization.
    fn query_inferred(&self, entity: &Entity, kind: AxiomKind) -> OntologyResult<Vec<Axiom>>;

    /// Add an axiom. Returns `false` if it was already asserted.
    fn assert_axiom(&self, axiom: &Axiom) -> OntologyResult<bool>;

    /// Remove an axiom. Returns `false` if it was not asserted.
    fn retract_axiom(&self, axiom: &Axiom) -> OntologyResult<bool>;

    /// Recompute inferences and check consistency.
    fn synchronize_reasoner(&self) -> OntologyResult<()>;

    /// Write a snapshot to `path`.
    fn save(&self, path: &Path) -> OntologyResult<()>;
}

/// Shared handle to an ontology.
///
/// Equality and hashing are by identity: two handles are equal only when they
/// point at the same ontology instance.
#[derive(Clone)]
pub struct OntologyRef(Arc<dyn Ontology>);

impl OntologyRef {
    pub fn new(ontology: impl Ontology + 'static) -> Self {
        Self(Arc::new(ontology))
    }

    /// Save to the ontology's own snapshot path, if it has one.
    pub fn persist(&self) -> OntologyResult<Option<PathBuf>> {
        match self.0.file_path().map(Path::to_path_buf) {
            Some(path) => {
                self.0.save(&path)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl From<Arc<dyn Ontology>> for OntologyRef {
    fn from(ontology: Arc<dyn Ontology>) -> Self {
        Self(ontology)
    }
}

impl Deref for OntologyRef {
    type Target = dyn Ontology;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for OntologyRef {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for OntologyRef {}

impl Hash for OntologyRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for OntologyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OntologyRef").field(&self.0.name()).finish()
    }
}

impl fmt::Display for OntologyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}
