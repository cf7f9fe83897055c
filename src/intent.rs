//! Mapping intents: the audit trail of a read or write.
//!
//! Every value a capability reads, and every addition or removal it applies,
//! yields one [`MappingIntent`]. Intents are plain data; callers inspect them
//! to see exactly what a synchronization did.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::expression::ExpressionKind;
use crate::ontology::{Axiom, Entity};

/// What a mapping step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IntentOperation {
    Read,
    Add,
    Remove,
}

impl fmt::Display for IntentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "READ"),
            Self::Add => write!(f, "ADD"),
            Self::Remove => write!(f, "REMOVE"),
        }
    }
}

/// One atomic decision of a read or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingIntent {
    operation: IntentOperation,
    ground: Entity,
    expression: ExpressionKind,
    value: String,
    axioms: Vec<Axiom>,
    success: bool,
    /// Milliseconds since UNIX epoch.
    timestamp: u64,
}

impl MappingIntent {
    pub(crate) fn new(
        operation: IntentOperation,
        ground: Entity,
        expression: ExpressionKind,
        value: String,
        axioms: Vec<Axiom>,
        success: bool,
    ) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            operation,
            ground,
            expression,
            value,
            axioms,
            success,
            timestamp,
        }
    }

    pub fn operation(&self) -> IntentOperation {
        self.operation
    }

    /// The entity the descriptor is grounded on.
    pub fn ground(&self) -> &Entity {
        &self.ground
    }

    pub fn expression(&self) -> ExpressionKind {
        self.expression
    }

    /// Rendering of the value read, added or removed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Axioms the step read, asserted or retracted.
    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// False when the ontology reported that an axiom was already in the
    /// requested state.
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// True for ADD and REMOVE.
    pub fn is_change(&self) -> bool {
        self.operation != IntentOperation::Read
    }
}

impl fmt::Display for MappingIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} on {}",
            self.operation, self.expression, self.value, self.ground
        )?;
        if !self.success {
            f.write_str(" (no-op)")?;
        }
        Ok(())
    }
}

/// Only the ADD and REMOVE intents of a batch.
pub fn changes(intents: &[MappingIntent]) -> Vec<&MappingIntent> {
    intents.iter().filter(|i| i.is_change()).collect()
}
