//! In-memory ontology with an attached rule reasoner and JSON snapshots.
//!
//! Asserted axioms live in an insertion-ordered set so queries return them
//! in assertion order. Entity declarations are indexed by name in a
//! `DashMap`; a name belongs to exactly one entity kind.

use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use indexmap::{IndexMap, IndexSet};
use oxigraph::model::NamedNode;
use serde::{Deserialize, Serialize};

use super::axiom::{Axiom, AxiomKind};
use super::entity::{Entity, EntityKind};
use super::{Ontology, reasoner};
use crate::config::OntologyConfig;
use crate::error::{OntologyError, OntologyResult};

/// On-disk form of a [`MemOntology`].
#[derive(Debug, Serialize, Deserialize)]
struct OntologySnapshot {
    name: String,
    iri: String,
    entities: Vec<Entity>,
    axioms: Vec<Axiom>,
}

/// In-memory [`Ontology`].
pub struct MemOntology {
    name: String,
    iri: String,
    file_path: Option<PathBuf>,
    buffering: AtomicBool,
    /// Entity name → declared kind.
    entities: DashMap<String, EntityKind>,
    asserted: RwLock<IndexSet<Axiom>>,
    /// Consequences beyond the asserted axioms, as of the last reasoner
    /// synchronization.
    derived: RwLock<IndexSet<Axiom>>,
}

impl MemOntology {
    /// Create an empty ontology. Fails if `iri` is not an absolute IRI.
    pub fn new(name: impl Into<String>, iri: impl Into<String>) -> OntologyResult<Self> {
        let iri = iri.into();
        NamedNode::new(iri.as_str()).map_err(|e| OntologyError::InvalidIri {
            iri: iri.clone(),
            message: e.to_string(),
        })?;
        Ok(Self {
            name: name.into(),
            iri,
            file_path: None,
            buffering: AtomicBool::new(false),
            entities: DashMap::new(),
            asserted: RwLock::new(IndexSet::new()),
            derived: RwLock::new(IndexSet::new()),
        })
    }

    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_buffering(self, buffering: bool) -> Self {
        self.buffering.store(buffering, Ordering::SeqCst);
        self
    }

    /// Open an ontology as described by `config`: load its snapshot when the
    /// file exists, otherwise start empty.
    pub fn open(config: &OntologyConfig) -> OntologyResult<Self> {
        let ontology = match &config.file_path {
            Some(path) if path.exists() => {
                let mut loaded = Self::load(path)?;
                if loaded.iri != config.iri {
                    tracing::warn!(
                        ontology = %config.name,
                        snapshot_iri = %loaded.iri,
                        config_iri = %config.iri,
                        "snapshot IRI differs from config, keeping snapshot IRI"
                    );
                }
                loaded.name = config.name.clone();
                loaded
            }
            Some(path) => Self::new(&config.name, &config.iri)?.with_file_path(path),
            None => Self::new(&config.name, &config.iri)?,
        };
        tracing::info!(
            ontology = %ontology.name,
            iri = %ontology.iri,
            axioms = ontology.axiom_count(),
            buffering = config.buffering,
            "opened ontology"
        );
        Ok(ontology.with_buffering(config.buffering))
    }

    /// Load a snapshot written by [`Ontology::save`]. The reasoner is
    /// synchronized once all axioms are in place.
    pub fn load(path: &Path) -> OntologyResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| OntologyError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let snapshot: OntologySnapshot =
            serde_json::from_str(&content).map_err(|e| OntologyError::Snapshot {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let ontology = Self::new(snapshot.name, snapshot.iri)?.with_file_path(path);
        for entity in &snapshot.entities {
            ontology.declare(entity)?;
        }
        {
            let mut asserted = ontology.asserted.write().expect("axiom lock poisoned");
            for axiom in snapshot.axioms {
                for (entity, _) in axiom.signature() {
                    ontology.declare(entity)?;
                }
                asserted.insert(axiom.normalized());
            }
        }
        ontology.synchronize_reasoner()?;
        tracing::info!(
            ontology = %ontology.name,
            path = %path.display(),
            axioms = ontology.axiom_count(),
            "loaded ontology snapshot"
        );
        Ok(ontology)
    }

    /// Full IRI of an entity in this ontology.
    pub fn entity_iri(&self, entity: &Entity) -> String {
        format!("{}#{}", self.iri, entity.name())
    }

    /// All declared entities, sorted by kind then name.
    pub fn entities(&self) -> Vec<Entity> {
        let mut out: Vec<Entity> = self
            .entities
            .iter()
            .map(|e| Entity::new(*e.value(), e.key().clone()))
            .collect();
        out.sort();
        out
    }

    /// Asserted axioms in assertion order.
    pub fn axioms(&self) -> Vec<Axiom> {
        let asserted = self.asserted.read().expect("axiom lock poisoned");
        asserted.iter().cloned().collect()
    }

    pub fn axiom_count(&self) -> usize {
        self.asserted.read().expect("axiom lock poisoned").len()
    }

    /// Number of axioms the reasoner derived beyond the asserted ones.
    pub fn inferred_count(&self) -> usize {
        self.derived.read().expect("axiom lock poisoned").len()
    }

    fn validate_name(&self, kind: EntityKind, name: &str) -> OntologyResult<()> {
        let fail = |reason: String| OntologyError::EntityResolution {
            name: name.to_string(),
            expected: kind.to_string(),
            reason,
        };
        if name.is_empty() {
            return Err(fail("empty name".into()));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(fail("name contains whitespace".into()));
        }
        NamedNode::new(format!("{}#{}", self.iri, name))
            .map_err(|e| fail(format!("invalid IRI: {e}")))?;
        Ok(())
    }

    fn declare(&self, entity: &Entity) -> OntologyResult<()> {
        self.resolve_or_create(entity.kind(), entity.name()).map(|_| ())
    }

    /// Declare every entity in the axiom's signature, all or nothing.
    /// Returns the names that were not declared before.
    fn declare_signature(&self, axiom: &Axiom) -> OntologyResult<Vec<String>> {
        let mut pending: IndexMap<&str, EntityKind> = IndexMap::new();
        for (entity, _) in axiom.signature() {
            self.validate_name(entity.kind(), entity.name())?;
            let declared = self
                .entities
                .get(entity.name())
                .map(|k| *k.value())
                .or_else(|| pending.get(entity.name()).copied());
            match declared {
                Some(declared) if declared != entity.kind() => {
                    return Err(kind_clash(entity.name(), entity.kind(), declared));
                }
                Some(_) => {}
                None => {
                    pending.insert(entity.name(), entity.kind());
                }
            }
        }

        let mut fresh = Vec::with_capacity(pending.len());
        for (name, kind) in pending {
            if let Entry::Vacant(slot) = self.entities.entry(name.to_string()) {
                slot.insert(kind);
                fresh.push(name.to_string());
            }
        }
        Ok(fresh)
    }

    fn query(
        set: &RwLock<IndexSet<Axiom>>,
        entity: &Entity,
        kind: AxiomKind,
    ) -> Vec<Axiom> {
        let axioms = set.read().expect("axiom lock poisoned");
        axioms
            .iter()
            .filter(|axiom| axiom.kind() == kind && axiom.involves(entity))
            .cloned()
            .collect()
    }
}

impl Ontology for MemOntology {
    fn name(&self) -> &str {
        &self.name
    }

    fn iri(&self) -> &str {
        &self.iri
    }

    fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn is_buffering(&self) -> bool {
        self.buffering.load(Ordering::SeqCst)
    }

    fn set_buffering(&self, buffering: bool) {
        self.buffering.store(buffering, Ordering::SeqCst);
    }

    fn resolve(&self, kind: EntityKind, name: &str) -> OntologyResult<Entity> {
        match self.entities.get(name).map(|k| *k.value()) {
            Some(declared) if declared == kind => Ok(Entity::new(kind, name)),
            Some(declared) => Err(kind_clash(name, kind, declared)),
            None => Err(OntologyError::EntityResolution {
                name: name.to_string(),
                expected: kind.to_string(),
                reason: "not declared".into(),
            }),
        }
    }

    fn resolve_or_create(&self, kind: EntityKind, name: &str) -> OntologyResult<Entity> {
        self.validate_name(kind, name)?;
        match self.entities.entry(name.to_string()) {
            Entry::Occupied(existing) => {
                let declared = *existing.get();
                if declared != kind {
                    return Err(kind_clash(name, kind, declared));
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(kind);
            }
        }
        Ok(Entity::new(kind, name))
    }

    fn query_axioms(&self, entity: &Entity, kind: AxiomKind) -> OntologyResult<Vec<Axiom>> {
        Ok(Self::query(&self.asserted, entity, kind))
    }

    fn query_inferred(&self, entity: &Entity, kind: AxiomKind) -> OntologyResult<Vec<Axiom>> {
        let mut axioms = Self::query(&self.asserted, entity, kind);
        for axiom in Self::query(&self.derived, entity, kind) {
            if !axioms.contains(&axiom) {
                axioms.push(axiom);
            }
        }
        Ok(axioms)
    }

    fn assert_axiom(&self, axiom: &Axiom) -> OntologyResult<bool> {
        let axiom = axiom.clone().normalized();
        if let Some((entity, expected)) = axiom.kind_mismatch() {
            return Err(OntologyError::EntityResolution {
                name: entity.name().to_string(),
                expected: expected.to_string(),
                reason: format!("{} cannot fill this slot of {axiom}", entity.kind()),
            });
        }
        let fresh = self.declare_signature(&axiom)?;

        let inserted = self
            .asserted
            .write()
            .expect("axiom lock poisoned")
            .insert(axiom.clone());
        if !inserted {
            return Ok(false);
        }

        if !self.is_buffering() {
            if let Err(err) = self.synchronize_reasoner() {
                if matches!(err, OntologyError::AxiomConflict { .. }) {
                    self.asserted
                        .write()
                        .expect("axiom lock poisoned")
                        .shift_remove(&axiom);
                    for name in &fresh {
                        self.entities.remove(name);
                    }
                    tracing::warn!(
                        ontology = %self.name,
                        axiom = %axiom,
                        error = %err,
                        "rolled back conflicting axiom"
                    );
                    if let Err(still) = self.synchronize_reasoner() {
                        tracing::warn!(ontology = %self.name, error = %still, "ontology still inconsistent");
                    }
                }
                return Err(err);
            }
        }
        Ok(true)
    }

    fn retract_axiom(&self, axiom: &Axiom) -> OntologyResult<bool> {
        let axiom = axiom.clone().normalized();
        let removed = self
            .asserted
            .write()
            .expect("axiom lock poisoned")
            .shift_remove(&axiom);
        if removed && !self.is_buffering() {
            self.synchronize_reasoner()?;
        }
        Ok(removed)
    }

    fn synchronize_reasoner(&self) -> OntologyResult<()> {
        let derived: IndexSet<Axiom> = {
            let asserted = self.asserted.read().expect("axiom lock poisoned");
            reasoner::infer(&asserted)?
                .into_iter()
                .filter(|axiom| !asserted.contains(axiom))
                .collect()
        };
        let inferred = derived.len();
        *self.derived.write().expect("axiom lock poisoned") = derived;
        tracing::debug!(
            ontology = %self.name,
            axioms = self.axiom_count(),
            inferred,
            "reasoner synchronized"
        );
        Ok(())
    }

    fn save(&self, path: &Path) -> OntologyResult<()> {
        let snapshot = OntologySnapshot {
            name: self.name.clone(),
            iri: self.iri.clone(),
            entities: self.entities(),
            axioms: self.axioms(),
        };
        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| OntologyError::Snapshot {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| OntologyError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, json).map_err(|e| OntologyError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::info!(
            ontology = %self.name,
            path = %path.display(),
            axioms = snapshot.axioms.len(),
            "saved ontology snapshot"
        );
        Ok(())
    }
}

fn kind_clash(name: &str, kind: EntityKind, declared: EntityKind) -> OntologyError {
    OntologyError::EntityResolution {
        name: name.to_string(),
        expected: kind.to_string(),
        reason: format!("already declared as {declared}"),
    }
}

impl std::fmt::Debug for MemOntology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemOntology")
            .field("name", &self.name)
            .field("iri", &self.iri)
            .field("entities", &self.entities.len())
            .field("axioms", &self.axiom_count())
            .field("buffering", &self.is_buffering())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::{Filler, Restriction};

    fn robots() -> MemOntology {
        MemOntology::new("robots", "http://example.org/robots").unwrap()
    }

    fn member(i: &str, c: &str) -> Axiom {
        Axiom::ClassAssertion {
            individual: Entity::individual(i),
            class: Entity::class(c),
        }
    }

    #[test]
    fn invalid_iri_rejected() {
        let err = MemOntology::new("bad", "not an iri").unwrap_err();
        assert!(matches!(err, OntologyError::InvalidIri { .. }));
    }

    #[test]
    fn resolve_or_create_declares_once() {
        let onto = robots();
        let a = onto.resolve_or_create(EntityKind::Class, "ROOM").unwrap();
        let b = onto.resolve(EntityKind::Class, "ROOM").unwrap();
        assert_eq!(a, b);
        assert_eq!(onto.entity_iri(&a), "http://example.org/robots#ROOM");
    }

    #[test]
    fn kind_clash_is_resolution_error() {
        let onto = robots();
        onto.resolve_or_create(EntityKind::Class, "ROOM").unwrap();
        let err = onto
            .resolve_or_create(EntityKind::Individual, "ROOM")
            .unwrap_err();
        assert!(matches!(err, OntologyError::EntityResolution { .. }));
        assert!(onto.resolve(EntityKind::Class, "NOPE").is_err());
    }

    #[test]
    fn bad_names_rejected() {
        let onto = robots();
        assert!(onto.resolve_or_create(EntityKind::Class, "").is_err());
        assert!(onto.resolve_or_create(EntityKind::Class, "two words").is_err());
    }

    #[test]
    fn assert_and_retract_report_change() {
        let onto = robots();
        let axiom = member("Robot1", "ROBOT");
        assert!(onto.assert_axiom(&axiom).unwrap());
        assert!(!onto.assert_axiom(&axiom).unwrap());
        assert_eq!(
            onto.query_axioms(&Entity::individual("Robot1"), AxiomKind::ClassAssertion)
                .unwrap(),
            vec![axiom.clone()]
        );
        assert!(onto.retract_axiom(&axiom).unwrap());
        assert!(!onto.retract_axiom(&axiom).unwrap());
        assert_eq!(onto.axiom_count(), 0);
    }

    #[test]
    fn assert_declares_signature() {
        let onto = robots();
        onto.assert_axiom(&member("Robot1", "ROBOT")).unwrap();
        assert!(onto.resolve(EntityKind::Individual, "Robot1").is_ok());
        assert!(onto.resolve(EntityKind::Class, "ROBOT").is_ok());
    }

    #[test]
    fn conflict_rolls_back_when_not_buffering() {
        let onto = robots();
        onto.assert_axiom(&Axiom::disjoint_classes(
            Entity::class("ROBOT"),
            Entity::class("LOCATION"),
        ))
        .unwrap();
        onto.assert_axiom(&member("Robot1", "ROBOT")).unwrap();
        let err = onto.assert_axiom(&member("Robot1", "LOCATION")).unwrap_err();
        assert!(matches!(err, OntologyError::AxiomConflict { .. }));
        assert_eq!(onto.axiom_count(), 2);
    }

    #[test]
    fn rejected_axiom_declares_nothing() {
        let onto = robots();
        onto.assert_axiom(&member("Robot1", "ROBOT")).unwrap();
        let before = onto.entities();

        let ghost = Entity::individual("Ghost");
        let err = onto
            .assert_axiom(&Axiom::different_individuals(ghost.clone(), ghost))
            .unwrap_err();
        assert!(matches!(err, OntologyError::AxiomConflict { .. }));
        assert_eq!(onto.entities(), before);
        assert!(onto.resolve(EntityKind::Individual, "Ghost").is_err());
    }

    #[test]
    fn kind_clash_inside_one_axiom_declares_nothing() {
        let onto = robots();
        let err = onto
            .assert_axiom(&Axiom::ClassDefinition {
                class: Entity::class("ROOM"),
                restriction: Restriction::some(
                    Entity::object_property("ROOM"),
                    Filler::Class(Entity::class("DOOR")),
                ),
            })
            .unwrap_err();
        assert!(matches!(err, OntologyError::EntityResolution { .. }));
        assert!(onto.entities().is_empty());
    }

    #[test]
    fn inferred_query_lists_asserted_first() {
        let onto = robots();
        onto.assert_axiom(&Axiom::SubClassOf {
            sub: Entity::class("ROOM"),
            sup: Entity::class("LOCATION"),
        })
        .unwrap();
        onto.assert_axiom(&member("Room1", "ROOM")).unwrap();
        let room1 = Entity::individual("Room1");
        assert_eq!(
            onto.query_inferred(&room1, AxiomKind::ClassAssertion)
                .unwrap(),
            vec![member("Room1", "ROOM"), member("Room1", "LOCATION")]
        );
        assert_eq!(
            onto.query_axioms(&room1, AxiomKind::ClassAssertion).unwrap(),
            vec![member("Room1", "ROOM")]
        );

        // Retracting the membership drops its consequences too.
        onto.retract_axiom(&member("Room1", "ROOM")).unwrap();
        assert!(
            onto.query_inferred(&room1, AxiomKind::ClassAssertion)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn buffering_defers_inference() {
        let onto = robots().with_buffering(true);
        onto.assert_axiom(&Axiom::SubClassOf {
            sub: Entity::class("ROOM"),
            sup: Entity::class("LOCATION"),
        })
        .unwrap();
        onto.assert_axiom(&member("Room1", "ROOM")).unwrap();
        let room1 = Entity::individual("Room1");
        assert_eq!(
            onto.query_inferred(&room1, AxiomKind::ClassAssertion)
                .unwrap(),
            vec![member("Room1", "ROOM")]
        );
        onto.synchronize_reasoner().unwrap();
        assert_eq!(
            onto.query_inferred(&room1, AxiomKind::ClassAssertion)
                .unwrap()
                .len(),
            2
        );
        assert_eq!(onto.inferred_count(), 1);
    }

    #[test]
    fn snapshot_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("robots.json");
        let onto = robots();
        onto.resolve_or_create(EntityKind::ObjectProperty, "isIn")
            .unwrap();
        onto.assert_axiom(&member("Robot1", "ROBOT")).unwrap();
        onto.assert_axiom(&Axiom::same_individual(
            Entity::individual("Robot1"),
            Entity::individual("R1"),
        ))
        .unwrap();
        onto.save(&path).unwrap();

        let loaded = MemOntology::load(&path).unwrap();
        assert_eq!(loaded.name(), "robots");
        assert_eq!(loaded.axioms(), onto.axioms());
        assert_eq!(loaded.entities(), onto.entities());
        assert_eq!(loaded.file_path(), Some(path.as_path()));
    }

    #[test]
    fn malformed_snapshot_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = MemOntology::load(&path).unwrap_err();
        assert!(matches!(err, OntologyError::Snapshot { .. }));
    }

    #[test]
    fn open_without_snapshot_starts_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = OntologyConfig::new("fresh", "http://example.org/fresh")
            .with_file(dir.path().join("fresh.json"))
            .with_buffering(true);
        let onto = MemOntology::open(&config).unwrap();
        assert_eq!(onto.axiom_count(), 0);
        assert!(onto.is_buffering());
        assert!(onto.file_path().is_some());
    }
}
