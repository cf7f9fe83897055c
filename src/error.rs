//! Rich diagnostic error types for owloop.
//!
//! The ontology layer defines [`OntologyError`]; configuration has its own
//! [`ConfigError`](crate::config::ConfigError). Both carry miette diagnostics
//! with error codes and help text. Descriptors and expressions never recover
//! from these errors: whatever the ontology reports reaches the caller as-is.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type for owloop.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text, sources) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum OwlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Ontology(#[from] OntologyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Ontology errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum OntologyError {
    #[error("cannot resolve \"{name}\" as {expected}: {reason}")]
    #[diagnostic(
        code(owloop::ontology::entity_resolution),
        help(
            "Entity names must be non-empty, contain no whitespace and form a valid IRI \
             when appended to the ontology IRI. A name declared with one kind (class, \
             individual, object property, data property) cannot be reused as another."
        )
    )]
    EntityResolution {
        name: String,
        expected: String,
        reason: String,
    },

    #[error("axiom conflict on {axiom}: {reason}")]
    #[diagnostic(
        code(owloop::ontology::axiom_conflict),
        help(
            "The reasoner found the ontology inconsistent. In non-buffered mode the \
             offending axiom has been rolled back; in buffered mode remove one of the \
             conflicting axioms before synchronizing the reasoner again."
        )
    )]
    AxiomConflict { axiom: String, reason: String },

    #[error("I/O error on {path}: {source}")]
    #[diagnostic(
        code(owloop::ontology::io),
        help(
            "Loading or saving the ontology snapshot failed. Check that the path \
             exists, has correct permissions, and that the disk is not full."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ontology snapshot {path}: {message}")]
    #[diagnostic(
        code(owloop::ontology::snapshot),
        help(
            "The snapshot file is not a valid owloop JSON snapshot. \
             Regenerate it with `owloop` or restore it from a backup."
        )
    )]
    Snapshot { path: String, message: String },

    #[error("invalid ontology IRI \"{iri}\": {message}")]
    #[diagnostic(
        code(owloop::ontology::invalid_iri),
        help("Use an absolute IRI such as `http://example.org/robot-world`.")
    )]
    InvalidIri { iri: String, message: String },

    #[error("no ontology registered under \"{name}\"")]
    #[diagnostic(
        code(owloop::ontology::not_found),
        help(
            "Open the ontology first with `OntologyRegistry::open()` or pass an \
             `OntologyConfig` instead of a bare name."
        )
    )]
    OntologyNotFound { name: String },

    #[error("ontology \"{name}\" is already open with a different {field}")]
    #[diagnostic(
        code(owloop::ontology::mismatch),
        help(
            "An ontology name identifies one IRI and one snapshot file. \
             Use another name, or close the existing ontology with `OntologyRegistry::remove()`."
        )
    )]
    OntologyMismatch { name: String, field: String },
}

/// Convenience alias for ontology-layer operations.
pub type OntologyResult<T> = std::result::Result<T, OntologyError>;

/// Convenience alias for top-level operations.
pub type OwlResult<T> = std::result::Result<T, OwlError>;
