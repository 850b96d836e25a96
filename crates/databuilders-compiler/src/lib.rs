//! databuilders compiler: default value synthesis and builder generation.
//!
//! This crate provides the generation pipeline for data builders:
//! - `synthesize` - one default value expression per shape
//! - `plan` - builder plan (default object, setters, nested builder imports)
//! - `emit` - TypeScript rendering of a plan and of the shared base builder
//! - `session` - duplicate detection, concurrent generation, file output
//! - `config` - generation settings and the JSON config file
//! - `diagnostics` - shape and structural errors attributed to a declaration

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod plan;
pub mod session;
pub mod synthesize;
pub mod writer;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
pub mod test_utils;

use std::path::PathBuf;

pub use config::{Config, ConfigFile, Defaults};
pub use diagnostics::{Diagnostic, DiagnosticCause, ShapeError, StructuralError, SynthesisError};
pub use emit::{emit, emit_base_builder};
pub use plan::{BuilderPlan, Planner, SetterBody, SetterDescriptor};
pub use session::{GeneratedFile, Session, SessionReport};
pub use synthesize::{Synthesis, Synthesizer};
pub use writer::{DiskWriter, FileWriter, MemoryWriter};

/// Errors that abort a generation session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two or more declarations share a name. Detected before any work starts.
    #[error("duplicated builders: {}", .0.join(", "))]
    DuplicateDeclarations(Vec<String>),

    #[error("builder generation failed with {} errors", .0.len())]
    Generation(Vec<Diagnostic>),

    #[error("failed to {action} `{}`: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest `{}`: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;
