//! Ontology registry: opened ontologies keyed by name.
//!
//! Opening the same name twice yields the same [`OntologyRef`] as long as
//! the IRI and snapshot path agree, so every ground built from one config
//! shares one ontology instance.

use std::sync::OnceLock;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::{MemOntology, OntologyRef};
use crate::config::OntologyConfig;
use crate::error::{OntologyError, OntologyResult};

static GLOBAL: OnceLock<OntologyRegistry> = OnceLock::new();

/// Name → ontology map.
#[derive(Debug, Default)]
pub struct OntologyRegistry {
    ontologies: DashMap<String, OntologyRef>,
}

impl OntologyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry used when grounds are built from a config or a
    /// bare ontology name.
    pub fn global() -> &'static OntologyRegistry {
        GLOBAL.get_or_init(OntologyRegistry::new)
    }

    /// Return the ontology registered under `config.name`, opening it first
    /// if needed.
    pub fn open(&self, config: &OntologyConfig) -> OntologyResult<OntologyRef> {
        match self.ontologies.entry(config.name.clone()) {
            Entry::Occupied(existing) => {
                let ontology = existing.get();
                if ontology.iri() != config.iri {
                    return Err(OntologyError::OntologyMismatch {
                        name: config.name.clone(),
                        field: "IRI".into(),
                    });
                }
                if ontology.file_path() != config.file_path.as_deref() {
                    return Err(OntologyError::OntologyMismatch {
                        name: config.name.clone(),
                        field: "file path".into(),
                    });
                }
                Ok(ontology.clone())
            }
            Entry::Vacant(slot) => {
                let ontology = OntologyRef::new(MemOntology::open(config)?);
                slot.insert(ontology.clone());
                Ok(ontology)
            }
        }
    }

    /// Register an already constructed ontology under its own name, replacing
    /// any previous entry.
    pub fn insert(&self, ontology: OntologyRef) -> Option<OntologyRef> {
        self.ontologies.insert(ontology.name().to_string(), ontology)
    }

    pub fn get(&self, name: &str) -> OntologyResult<OntologyRef> {
        self.ontologies
            .get(name)
            .map(|r| r.value().clone())
            .ok_or_else(|| OntologyError::OntologyNotFound {
                name: name.to_string(),
            })
    }

    pub fn remove(&self, name: &str) -> Option<OntologyRef> {
        self.ontologies.remove(name).map(|(_, ontology)| ontology)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ontologies.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.ontologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ontologies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_twice_shares_instance() {
        let registry = OntologyRegistry::new();
        let config = OntologyConfig::new("robots", "http://example.org/robots");
        let a = registry.open(&config).unwrap();
        let b = registry.open(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["robots".to_string()]);
    }

    #[test]
    fn mismatched_iri_rejected() {
        let registry = OntologyRegistry::new();
        registry
            .open(&OntologyConfig::new("robots", "http://example.org/robots"))
            .unwrap();
        let err = registry
            .open(&OntologyConfig::new("robots", "http://example.org/other"))
            .unwrap_err();
        assert!(matches!(err, OntologyError::OntologyMismatch { .. }));
    }

    #[test]
    fn mismatched_path_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let registry = OntologyRegistry::new();
        registry
            .open(&OntologyConfig::new("robots", "http://example.org/robots"))
            .unwrap();
        let err = registry
            .open(
                &OntologyConfig::new("robots", "http://example.org/robots")
                    .with_file(dir.path().join("robots.json")),
            )
            .unwrap_err();
        assert!(matches!(err, OntologyError::OntologyMismatch { .. }));
    }

    #[test]
    fn unknown_name_not_found() {
        let registry = OntologyRegistry::new();
        assert!(matches!(
            registry.get("nope").unwrap_err(),
            OntologyError::OntologyNotFound { .. }
        ));
    }

    #[test]
    fn insert_and_remove() {
        let registry = OntologyRegistry::new();
        let onto = OntologyRef::new(MemOntology::new("m", "http://example.org/m").unwrap());
        assert!(registry.insert(onto.clone()).is_none());
        assert_eq!(registry.get("m").unwrap(), onto);
        assert_eq!(registry.remove("m"), Some(onto));
        assert!(registry.is_empty());
    }
}
