//! Compound descriptors: a ground plus an ordered set of capabilities.
//!
//! A descriptor mirrors a chosen slice of one entity's axioms. Reading and
//! writing run each composed capability in the order the descriptor declares
//! ([`Descriptor::READ_ORDER`], [`Descriptor::WRITE_ORDER`]) and concatenate
//! their intents. Descriptors compare and hash by ground only.

use crate::error::OntologyResult;
use crate::expression::{ExpressionKind, Synchronize};
use crate::ground::{Ground, GroundConfig, GroundKind};
use crate::intent::MappingIntent;
use crate::ontology::OntologyRef;

/// Declare a descriptor struct over a ground kind.
///
/// ```text
/// descriptor! {
///     Name: GroundKind {
///         field, field_mut: Capability => ExpressionKind,
///     }
///     read: [..],
///     write: [..],
/// }
/// ```
macro_rules! descriptor {
    (
        $(#[$meta:meta])*
        $name:ident: $kind:ty {
            $($field:ident, $field_mut:ident: $cap:ty => $expr:ident),+ $(,)?
        }
        read: [$($read:ident),+ $(,)?],
        write: [$($write:ident),+ $(,)?] $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            ground: $crate::ground::Ground<$kind>,
            $($field: $cap,)+
        }

        impl $name {
            $(
                pub fn $field(&self) -> &$cap {
                    &self.$field
                }

                pub fn $field_mut(&mut self) -> &mut $cap {
                    &mut self.$field
                }
            )+
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ground == other.ground
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.ground, state);
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::descriptor::Descriptor::render(self))
            }
        }

        impl $crate::descriptor::Descriptor for $name {
            type Kind = $kind;

            const NAME: &'static str = stringify!($name);
            const READ_ORDER: &'static [$crate::expression::ExpressionKind] =
                &[$($crate::expression::ExpressionKind::$read),+];
            const WRITE_ORDER: &'static [$crate::expression::ExpressionKind] =
                &[$($crate::expression::ExpressionKind::$write),+];

            fn from_ground(ground: $crate::ground::Ground<$kind>) -> Self {
                Self {
                    ground,
                    $($field: <$cap>::default(),)+
                }
            }

            fn ground(&self) -> &$crate::ground::Ground<$kind> {
                &self.ground
            }

            fn expression(
                &self,
                kind: $crate::expression::ExpressionKind,
            ) -> Option<&dyn $crate::expression::Synchronize> {
                match kind {
                    $($crate::expression::ExpressionKind::$expr => {
                        Some(&self.$field as &dyn $crate::expression::Synchronize)
                    })+
                    _ => None,
                }
            }

            fn expression_mut(
                &mut self,
                kind: $crate::expression::ExpressionKind,
            ) -> Option<&mut dyn $crate::expression::Synchronize> {
                match kind {
                    $($crate::expression::ExpressionKind::$expr => {
                        Some(&mut self.$field as &mut dyn $crate::expression::Synchronize)
                    })+
                    _ => None,
                }
            }
        }
    };
}

pub mod concept;
pub mod data_property;
pub mod individual;
pub mod object_property;

pub use concept::{
    DefinitionConceptDesc, FullConceptDesc, HierarchicalConceptDesc, InstanceConceptDesc,
    RestrictionConceptDesc,
};
pub use data_property::{
    DefinitionDataPropertyDesc, DomainRangeDataPropertyDesc, FullDataPropertyDesc,
    HierarchicalDataPropertyDesc,
};
pub use individual::{
    DefinitionIndividualDesc, FullIndividualDesc, LinkIndividualDesc, TypeIndividualDesc,
};
pub use object_property::{
    DefinitionObjectPropertyDesc, DomainRangeObjectPropertyDesc, FullObjectPropertyDesc,
    HierarchicalObjectPropertyDesc,
};

/// An in-memory mirror of part of one entity's axioms.
pub trait Descriptor: Sized {
    type Kind: GroundKind;

    /// Type name used when rendering.
    const NAME: &'static str;
    /// Capability order for reads.
    const READ_ORDER: &'static [ExpressionKind];
    /// Capability order for writes.
    const WRITE_ORDER: &'static [ExpressionKind];

    /// Wrap a ground with empty capabilities.
    fn from_ground(ground: Ground<Self::Kind>) -> Self;

    fn ground(&self) -> &Ground<Self::Kind>;

    /// The composed capability of `kind`, if this descriptor has one.
    fn expression(&self, kind: ExpressionKind) -> Option<&dyn Synchronize>;

    fn expression_mut(&mut self, kind: ExpressionKind) -> Option<&mut dyn Synchronize>;

    fn new(config: GroundConfig) -> OntologyResult<Self> {
        Ground::new(config).map(Self::from_ground)
    }

    fn named(name: &str, ontology: &OntologyRef) -> OntologyResult<Self> {
        Ground::named(name, ontology).map(Self::from_ground)
    }

    fn ontology(&self) -> &OntologyRef {
        self.ground().ontology()
    }

    /// Replace every capability's contents with what the ontology asserts.
    fn read_expression_axioms(&mut self) -> OntologyResult<Vec<MappingIntent>> {
        let instance = self.ground().instance().clone();
        let mut intents = Vec::new();
        for kind in Self::READ_ORDER {
            if let Some(expression) = self.expression_mut(*kind) {
                intents.extend(expression.read_axioms(&instance)?);
            }
        }
        Ok(intents)
    }

    /// Push every capability's pending differences to the ontology.
    fn write_expression_axioms(&mut self) -> OntologyResult<Vec<MappingIntent>> {
        let instance = self.ground().instance().clone();
        let mut intents = Vec::new();
        for kind in Self::WRITE_ORDER {
            if let Some(expression) = self.expression_mut(*kind) {
                intents.extend(expression.write_axioms(&instance)?);
            }
        }
        tracing::debug!(
            descriptor = Self::NAME,
            ground = %self.ground().entity(),
            changes = intents.len(),
            "descriptor written"
        );
        Ok(intents)
    }

    /// Synchronize the ontology's reasoner.
    fn reason(&self) -> OntologyResult<()> {
        self.ground().reason()
    }

    /// Write, synchronize the reasoner, then read back. The read includes
    /// everything the reasoner derived from the write.
    fn write_reason_read(&mut self) -> OntologyResult<Vec<MappingIntent>> {
        let mut intents = self.write_expression_axioms()?;
        self.reason()?;
        intents.extend(self.read_expression_axioms()?);
        Ok(intents)
    }

    /// Whether no capability holds unwritten changes.
    fn is_synchronized(&self) -> bool {
        Self::READ_ORDER
            .iter()
            .filter_map(|kind| self.expression(*kind))
            .all(|expression| expression.is_synchronized())
    }

    /// Type, ground and one line per capability in read order.
    fn render(&self) -> String {
        let mut out = format!("{} {}", Self::NAME, self.ground());
        for kind in Self::READ_ORDER {
            if let Some(expression) = self.expression(*kind) {
                out.push_str(&format!("\n  {kind}: {}", expression.describe()));
            }
        }
        out
    }
}
