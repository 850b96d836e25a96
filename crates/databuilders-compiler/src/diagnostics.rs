//! Errors attributed to a single declaration.
//!
//! Shape errors come from the synthesizer, structural errors from the planner.
//! Both are wrapped into a `Diagnostic` carrying the declaration name, source
//! path, offending shape kind and raw type text. Any diagnostic fails the
//! whole session.

use std::fmt;
use std::path::PathBuf;

use databuilders_core::{ShapeTag, TypeShape};

/// A shape no default value can be synthesized for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("cannot generate a default value for `never`")]
    Never,

    #[error("union has no members to choose a default from")]
    EmptyUnion,

    #[error("intersection has no members to merge")]
    EmptyIntersection,

    #[error("no default value known for built-in type `{name}`")]
    MissingBuiltinDefault { name: String },
}

/// A shape error together with the shape it was raised for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{cause}")]
pub struct SynthesisError {
    #[source]
    pub cause: ShapeError,
    pub kind: ShapeTag,
    pub text: Option<String>,
}

impl SynthesisError {
    pub(crate) fn new(cause: ShapeError, shape: &TypeShape) -> Self {
        Self {
            cause,
            kind: shape.tag(),
            text: shape.text.clone(),
        }
    }
}

/// A declaration builders cannot be generated for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("builders are only generated for object types, found {kind}")]
    NonRecordRoot { kind: ShapeTag },

    #[error("declaration is not exported")]
    NotExported,

    #[error("fields `{first}` and `{second}` both produce the setter `{method}`")]
    SetterCollision {
        method: String,
        first: String,
        second: String,
    },

    #[error("references `{name}`, which is not generated in this session")]
    UnknownReference { name: String },

    /// Required fields instantiate builders that lead back to this one.
    #[error("required fields form a builder cycle: {}", .cycle.join(" -> "))]
    RequiredCycle { cycle: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticCause {
    Shape(ShapeError),
    Structural(StructuralError),
}

impl fmt::Display for DiagnosticCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "{e}"),
            Self::Structural(e) => write!(f, "{e}"),
        }
    }
}

/// Fatal error for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub declaration: String,
    pub path: PathBuf,
    /// Top-level field the error surfaced in, if any.
    pub field: Option<String>,
    pub kind: ShapeTag,
    pub text: Option<String>,
    pub cause: DiagnosticCause,
}

impl Diagnostic {
    pub(crate) fn shape(
        declaration: &str,
        path: impl Into<PathBuf>,
        field: Option<&str>,
        error: SynthesisError,
    ) -> Self {
        Self {
            declaration: declaration.to_string(),
            path: path.into(),
            field: field.map(str::to_string),
            kind: error.kind,
            text: error.text,
            cause: DiagnosticCause::Shape(error.cause),
        }
    }

    pub(crate) fn structural(
        declaration: &str,
        path: impl Into<PathBuf>,
        root: &TypeShape,
        error: StructuralError,
    ) -> Self {
        Self {
            declaration: declaration.to_string(),
            path: path.into(),
            field: None,
            kind: root.tag(),
            text: root.text.clone(),
            cause: DiagnosticCause::Structural(error),
        }
    }

    pub(crate) fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.declaration, self.path.display())?;
        if let Some(field) = &self.field {
            write!(f, ", field `{field}`")?;
        }
        write!(f, ": {} [{}", self.cause, self.kind)?;
        if let Some(text) = &self.text {
            write!(f, " `{text}`")?;
        }
        write!(f, "]")
    }
}

impl std::error::Error for Diagnostic {}
