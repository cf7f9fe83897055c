//! Grounds: the binding of a descriptor to one ontology entity.
//!
//! A [`Ground<K>`] fixes the entity kind at the type level through the marker
//! types [`Concept`], [`Individual`], [`ObjectProperty`] and [`DataProperty`].
//! Grounds are built from a single [`GroundConfig`]; building from a name
//! declares the entity in the ontology if it does not exist yet.

use std::fmt;
use std::marker::PhantomData;

use crate::config::OntologyConfig;
use crate::error::{OntologyError, OntologyResult};
use crate::ontology::{Entity, EntityKind, OntologyRef, OntologyRegistry};

// ---------------------------------------------------------------------------
// Ground kinds
// ---------------------------------------------------------------------------

/// Type-level entity kind of a ground.
pub trait GroundKind:
    fmt::Debug + Clone + Copy + Default + PartialEq + Eq + std::hash::Hash + Send + Sync + 'static
{
    const ENTITY_KIND: EntityKind;
}

/// Ground kinds whose entities are properties.
pub trait PropertyKind: GroundKind {}

/// OWL class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Concept;

/// OWL named individual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Individual;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjectProperty;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DataProperty;

impl GroundKind for Concept {
    const ENTITY_KIND: EntityKind = EntityKind::Class;
}

impl GroundKind for Individual {
    const ENTITY_KIND: EntityKind = EntityKind::Individual;
}

impl GroundKind for ObjectProperty {
    const ENTITY_KIND: EntityKind = EntityKind::ObjectProperty;
}

impl GroundKind for DataProperty {
    const ENTITY_KIND: EntityKind = EntityKind::DataProperty;
}

impl PropertyKind for ObjectProperty {}
impl PropertyKind for DataProperty {}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which entity to ground on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundTarget {
    Entity(Entity),
    Name(String),
}

impl From<Entity> for GroundTarget {
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

impl From<&Entity> for GroundTarget {
    fn from(entity: &Entity) -> Self {
        Self::Entity(entity.clone())
    }
}

impl From<&str> for GroundTarget {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for GroundTarget {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Where the ground's ontology comes from.
#[derive(Debug, Clone)]
pub enum OntologySource {
    /// An ontology the caller already holds.
    Ref(OntologyRef),
    /// An ontology registered in [`OntologyRegistry::global`].
    Named(String),
    /// Opened (or reused) through [`OntologyRegistry::global`].
    Config(OntologyConfig),
}

impl OntologySource {
    pub fn open(self) -> OntologyResult<OntologyRef> {
        match self {
            Self::Ref(ontology) => Ok(ontology),
            Self::Named(name) => OntologyRegistry::global().get(&name),
            Self::Config(config) => OntologyRegistry::global().open(&config),
        }
    }
}

impl From<OntologyRef> for OntologySource {
    fn from(ontology: OntologyRef) -> Self {
        Self::Ref(ontology)
    }
}

impl From<&OntologyRef> for OntologySource {
    fn from(ontology: &OntologyRef) -> Self {
        Self::Ref(ontology.clone())
    }
}

impl From<OntologyConfig> for OntologySource {
    fn from(config: OntologyConfig) -> Self {
        Self::Config(config)
    }
}

/// Everything needed to build a ground.
#[derive(Debug, Clone)]
pub struct GroundConfig {
    pub target: GroundTarget,
    pub ontology: OntologySource,
}

impl GroundConfig {
    pub fn new(target: impl Into<GroundTarget>, ontology: impl Into<OntologySource>) -> Self {
        Self {
            target: target.into(),
            ontology: ontology.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Ground
// ---------------------------------------------------------------------------

/// An entity together with the ontology it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroundInstance {
    ontology: OntologyRef,
    entity: Entity,
}

impl GroundInstance {
    pub fn ontology(&self) -> &OntologyRef {
        &self.ontology
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }
}

impl fmt::Display for GroundInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) in {}",
            self.entity,
            self.entity.kind(),
            self.ontology
        )
    }
}

/// A ground of kind `K`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ground<K: GroundKind> {
    instance: GroundInstance,
    _kind: PhantomData<K>,
}

impl<K: GroundKind> Ground<K> {
    /// Resolve `config` into a ground. A name is declared in the ontology if
    /// needed; an entity of another kind is rejected.
    pub fn new(config: GroundConfig) -> OntologyResult<Self> {
        let ontology = config.ontology.open()?;
        let entity = match config.target {
            GroundTarget::Name(name) => ontology.resolve_or_create(K::ENTITY_KIND, &name)?,
            GroundTarget::Entity(entity) => {
                if entity.kind() != K::ENTITY_KIND {
                    return Err(OntologyError::EntityResolution {
                        name: entity.name().to_string(),
                        expected: K::ENTITY_KIND.to_string(),
                        reason: format!("entity is a {}", entity.kind()),
                    });
                }
                ontology.resolve_or_create(K::ENTITY_KIND, entity.name())?
            }
        };
        Ok(Self {
            instance: GroundInstance { ontology, entity },
            _kind: PhantomData,
        })
    }

    /// Shorthand for a named ground on an ontology the caller holds.
    pub fn named(name: &str, ontology: &OntologyRef) -> OntologyResult<Self> {
        Self::new(GroundConfig::new(name, ontology))
    }

    pub fn instance(&self) -> &GroundInstance {
        &self.instance
    }

    pub fn entity(&self) -> &Entity {
        &self.instance.entity
    }

    pub fn ontology(&self) -> &OntologyRef {
        &self.instance.ontology
    }

    /// A ground of the same kind on the same ontology.
    pub fn new_ground(&self, target: impl Into<GroundTarget>) -> OntologyResult<Self> {
        Self::new(GroundConfig::new(target, &self.instance.ontology))
    }

    /// Synchronize the ontology's reasoner.
    pub fn reason(&self) -> OntologyResult<()> {
        self.instance.ontology.synchronize_reasoner()
    }
}

impl<K: GroundKind> fmt::Display for Ground<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.instance, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::MemOntology;

    fn robots() -> OntologyRef {
        OntologyRef::new(MemOntology::new("robots", "http://example.org/robots").unwrap())
    }

    #[test]
    fn named_ground_declares_entity() {
        let onto = robots();
        let ground = Ground::<Concept>::named("ROOM", &onto).unwrap();
        assert_eq!(ground.entity(), &Entity::class("ROOM"));
        assert!(onto.resolve(EntityKind::Class, "ROOM").is_ok());
        assert_eq!(ground.to_string(), "ROOM (class) in robots");
    }

    #[test]
    fn wrong_entity_kind_rejected() {
        let onto = robots();
        let err = Ground::<Concept>::new(GroundConfig::new(Entity::individual("Robot1"), &onto))
            .unwrap_err();
        assert!(matches!(err, OntologyError::EntityResolution { .. }));
    }

    #[test]
    fn name_declared_with_other_kind_rejected() {
        let onto = robots();
        Ground::<Individual>::named("Robot1", &onto).unwrap();
        assert!(Ground::<Concept>::named("Robot1", &onto).is_err());
    }

    #[test]
    fn equality_is_entity_and_ontology() {
        let onto = robots();
        let a = Ground::<Concept>::named("ROOM", &onto).unwrap();
        let b = Ground::<Concept>::named("ROOM", &onto).unwrap();
        let other = Ground::<Concept>::named("ROOM", &robots()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, other);
    }

    #[test]
    fn new_ground_shares_ontology() {
        let onto = robots();
        let room = Ground::<Concept>::named("ROOM", &onto).unwrap();
        let corridor = room.new_ground("CORRIDOR").unwrap();
        assert_eq!(corridor.ontology(), room.ontology());
        assert_eq!(corridor.entity().name(), "CORRIDOR");
    }

    #[test]
    fn config_source_goes_through_global_registry() {
        let config = OntologyConfig::new("ground-test-config", "http://example.org/gtc");
        let a = Ground::<Individual>::new(GroundConfig::new("Robot1", config.clone())).unwrap();
        let b = Ground::<Individual>::new(GroundConfig::new(
            "Robot1",
            OntologySource::Named("ground-test-config".into()),
        ))
        .unwrap();
        assert_eq!(a, b);
        assert!(
            Ground::<Individual>::new(GroundConfig::new(
                "Robot1",
                OntologySource::Named("ground-test-missing".into()),
            ))
            .is_err()
        );
    }
}
