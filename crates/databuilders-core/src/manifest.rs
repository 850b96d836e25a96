//! Shape manifest: the hand-off format between a front end and the generator.
//!
//! ```json
//! {
//!   "declarations": [
//!     {
//!       "name": "User",
//!       "path": "src/user.ts",
//!       "shape": {
//!         "kind": "typeLiteral",
//!         "fields": {
//!           "name": { "kind": "primitive", "type": "string" },
//!           "age": { "kind": "primitive", "type": "number", "optional": true }
//!         }
//!       }
//!     }
//!   ]
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shape::TypeShape;

/// A named type marked for builder generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    /// Source module declaring the type.
    pub path: PathBuf,
    #[serde(default = "default_exported")]
    pub exported: bool,
    /// Doc-comment tags attached to the declaration, without the `@`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub shape: TypeShape,
}

fn default_exported() -> bool {
    true
}

impl Declaration {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            exported: true,
            tags: Vec::new(),
            shape,
        }
    }

    pub fn exported(mut self, value: bool) -> Self {
        self.exported = value;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Whether the declaration carries `tag`; a leading `@` is ignored.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.strip_prefix('@').unwrap_or(tag);
        self.tags.iter().any(|t| t == tag)
    }
}

/// Every declaration discovered in one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

/// Parse manifest JSON.
pub fn parse_manifest(json: &str) -> Result<Manifest, serde_json::Error> {
    serde_json::from_str(json)
}
