//! Ontology vocabulary: named entities, literals, datatypes and restrictions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four kinds of named OWL entity a descriptor can be grounded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    Individual,
    ObjectProperty,
    DataProperty,
}

impl EntityKind {
    pub fn is_property(self) -> bool {
        matches!(self, Self::ObjectProperty | Self::DataProperty)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Individual => write!(f, "individual"),
            Self::ObjectProperty => write!(f, "object property"),
            Self::DataProperty => write!(f, "data property"),
        }
    }
}

/// A named ontology entity. Identity is the (kind, name) pair; the full IRI is
/// derived from the ontology it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity {
    kind: EntityKind,
    name: String,
}

impl Entity {
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Class, name)
    }

    pub fn individual(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Individual, name)
    }

    pub fn object_property(name: impl Into<String>) -> Self {
        Self::new(EntityKind::ObjectProperty, name)
    }

    pub fn data_property(name: impl Into<String>) -> Self {
        Self::new(EntityKind::DataProperty, name)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ---------------------------------------------------------------------------
// Literals
// ---------------------------------------------------------------------------

/// XSD datatypes supported for data property values and data ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Boolean,
    Integer,
    Long,
    Float,
    Double,
    String,
}

impl DataType {
    /// Full XSD IRI of the datatype.
    pub fn iri(self) -> &'static str {
        match self {
            Self::Boolean => "http://www.w3.org/2001/XMLSchema#boolean",
            Self::Integer => "http://www.w3.org/2001/XMLSchema#integer",
            Self::Long => "http://www.w3.org/2001/XMLSchema#long",
            Self::Float => "http://www.w3.org/2001/XMLSchema#float",
            Self::Double => "http://www.w3.org/2001/XMLSchema#double",
            Self::String => "http://www.w3.org/2001/XMLSchema#string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
        };
        write!(f, "xsd:{name}")
    }
}

/// A typed literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    lexical: String,
    datatype: DataType,
}

impl Literal {
    pub fn new(lexical: impl Into<String>, datatype: DataType) -> Self {
        Self {
            lexical: lexical.into(),
            datatype,
        }
    }

    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> DataType {
        self.datatype
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"^^{}", self.lexical, self.datatype)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::new(value, DataType::String)
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::new(value, DataType::String)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::new(value.to_string(), DataType::Boolean)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::new(value.to_string(), DataType::Integer)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::new(value.to_string(), DataType::Long)
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Self::new(value.to_string(), DataType::Float)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::new(value.to_string(), DataType::Double)
    }
}

// ---------------------------------------------------------------------------
// Restrictions
// ---------------------------------------------------------------------------

/// What a quantified restriction ranges over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filler {
    /// A class, for object property restrictions.
    Class(Entity),
    /// A datatype, for data property restrictions.
    Data(DataType),
}

impl Filler {
    /// The filler class, if this is an object restriction.
    pub fn class(&self) -> Option<&Entity> {
        match self {
            Self::Class(class) => Some(class),
            Self::Data(_) => None,
        }
    }
}

impl fmt::Display for Filler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "{class}"),
            Self::Data(datatype) => write!(f, "{datatype}"),
        }
    }
}

/// One conjunct of a class definition, domain or range.
///
/// A class definition `ROOM ≡ LOCATION ⊓ hasDoor min 2 DOOR` is held as the
/// two restrictions `Class(LOCATION)` and `Min { hasDoor, 2, DOOR }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Restriction {
    Class(Entity),
    DataRange(DataType),
    Some {
        property: Entity,
        filler: Filler,
    },
    Only {
        property: Entity,
        filler: Filler,
    },
    Min {
        property: Entity,
        cardinality: u32,
        filler: Filler,
    },
    Max {
        property: Entity,
        cardinality: u32,
        filler: Filler,
    },
    Exact {
        property: Entity,
        cardinality: u32,
        filler: Filler,
    },
}

impl Restriction {
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(Entity::class(name))
    }

    pub fn some(property: Entity, filler: Filler) -> Self {
        Self::Some { property, filler }
    }

    pub fn only(property: Entity, filler: Filler) -> Self {
        Self::Only { property, filler }
    }

    pub fn min(property: Entity, cardinality: u32, filler: Filler) -> Self {
        Self::Min {
            property,
            cardinality,
            filler,
        }
    }

    pub fn max(property: Entity, cardinality: u32, filler: Filler) -> Self {
        Self::Max {
            property,
            cardinality,
            filler,
        }
    }

    pub fn exact(property: Entity, cardinality: u32, filler: Filler) -> Self {
        Self::Exact {
            property,
            cardinality,
            filler,
        }
    }

    /// The restricted property, if this is a quantified restriction.
    pub fn property(&self) -> Option<&Entity> {
        match self {
            Self::Class(_) | Self::DataRange(_) => None,
            Self::Some { property, .. }
            | Self::Only { property, .. }
            | Self::Min { property, .. }
            | Self::Max { property, .. }
            | Self::Exact { property, .. } => Some(property),
        }
    }

    /// Every named entity the restriction mentions.
    pub fn entities(&self) -> Vec<&Entity> {
        match self {
            Self::Class(class) => vec![class],
            Self::DataRange(_) => Vec::new(),
            Self::Some { property, filler: f }
            | Self::Only { property, filler: f }
            | Self::Min {
                property,
                filler: f,
                ..
            }
            | Self::Max {
                property,
                filler: f,
                ..
            }
            | Self::Exact {
                property,
                filler: f,
                ..
            } => std::iter::once(property).chain(f.class()).collect(),
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "{class}"),
            Self::DataRange(datatype) => write!(f, "{datatype}"),
            Self::Some { property, filler } => write!(f, "{property} some {filler}"),
            Self::Only { property, filler } => write!(f, "{property} only {filler}"),
            Self::Min {
                property,
                cardinality,
                filler,
            } => write!(f, "{property} min {cardinality} {filler}"),
            Self::Max {
                property,
                cardinality,
                filler,
            } => write!(f, "{property} max {cardinality} {filler}"),
            Self::Exact {
                property,
                cardinality,
                filler,
            } => write!(f, "{property} exactly {cardinality} {filler}"),
        }
    }
}
