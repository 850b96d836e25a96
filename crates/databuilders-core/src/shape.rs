//! The `TypeShape` model.
//!
//! A shape is the structural description of one type position, already
//! resolved by the front end: aliases and interfaces are inlined, utility types
//! are applied, and references to other generatable declarations are kept as
//! `Reference` nodes so the tree never contains a cycle.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Shape Tree
// ============================================================================

/// One node of a shape tree.
///
/// The metadata fields are shared by every variant: `optional` only matters
/// for object fields, `inline_default` overrides whatever the kind would
/// synthesize, `text` is the raw type text kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeShape {
    #[serde(flatten)]
    pub kind: ShapeKind,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Closed set of shape variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ShapeKind {
    Primitive {
        #[serde(rename = "type")]
        primitive: Primitive,
    },
    /// Raw literal text: `'admin'`, `42`, `true`.
    Literal { value: String },
    TypeLiteral { fields: IndexMap<String, TypeShape> },
    Tuple { elements: Vec<TypeShape> },
    Union { members: Vec<TypeShape> },
    Intersection { members: Vec<TypeShape> },
    Record {
        key: Box<TypeShape>,
        value: Box<TypeShape>,
    },
    /// Another generatable declaration, by name.
    Reference { name: String },
    /// A branded primitive: the base plus an opaque marker collapsed away.
    TypeCast { base: Box<TypeShape> },
    /// A well-known built-in the front end keeps opaque (`Map`, `Set`, ...).
    Opaque { name: String },
}

/// Keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Undefined,
    Null,
    Date,
    Array,
    Bigint,
    Symbol,
    Any,
    Unknown,
    Never,
}

// ============================================================================
// Tie-break Tags
// ============================================================================

/// Fieldless view of a shape's kind.
///
/// Variants are declared in tie-break order: when one member of a union has to
/// be picked, the member with the smallest tag wins. The first ten follow the
/// cheapest-default-first ranking; the rest are kinds that ranking does not
/// name, ordered so that anything synthesizable beats `Never`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeTag {
    Undefined,
    Boolean,
    Number,
    String,
    Date,
    Literal,
    TypeLiteral,
    Array,
    Tuple,
    Record,
    Null,
    Bigint,
    Symbol,
    Opaque,
    TypeCast,
    Union,
    Intersection,
    Unknown,
    Any,
    Reference,
    Never,
}

impl ShapeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::Boolean => "BOOLEAN",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Date => "DATE",
            Self::Literal => "LITERAL",
            Self::TypeLiteral => "TYPE_LITERAL",
            Self::Array => "ARRAY",
            Self::Tuple => "TUPLE",
            Self::Record => "RECORD",
            Self::Null => "NULL",
            Self::Bigint => "BIGINT",
            Self::Symbol => "SYMBOL",
            Self::Opaque => "OPAQUE",
            Self::TypeCast => "TYPE_CAST",
            Self::Union => "UNION",
            Self::Intersection => "INTERSECTION",
            Self::Unknown => "UNKNOWN",
            Self::Any => "ANY",
            Self::Reference => "REFERENCE",
            Self::Never => "NEVER",
        }
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Primitive {
    pub fn tag(self) -> ShapeTag {
        match self {
            Self::String => ShapeTag::String,
            Self::Number => ShapeTag::Number,
            Self::Boolean => ShapeTag::Boolean,
            Self::Undefined => ShapeTag::Undefined,
            Self::Null => ShapeTag::Null,
            Self::Date => ShapeTag::Date,
            Self::Array => ShapeTag::Array,
            Self::Bigint => ShapeTag::Bigint,
            Self::Symbol => ShapeTag::Symbol,
            Self::Any => ShapeTag::Any,
            Self::Unknown => ShapeTag::Unknown,
            Self::Never => ShapeTag::Never,
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

impl TypeShape {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            optional: false,
            inline_default: None,
            text: None,
        }
    }

    pub fn primitive(primitive: Primitive) -> Self {
        Self::new(ShapeKind::Primitive { primitive })
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::new(ShapeKind::Literal {
            value: value.into(),
        })
    }

    pub fn type_literal<K: Into<String>>(fields: impl IntoIterator<Item = (K, TypeShape)>) -> Self {
        Self::new(ShapeKind::TypeLiteral {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        })
    }

    pub fn tuple(elements: Vec<TypeShape>) -> Self {
        Self::new(ShapeKind::Tuple { elements })
    }

    pub fn union(members: Vec<TypeShape>) -> Self {
        Self::new(ShapeKind::Union { members })
    }

    pub fn intersection(members: Vec<TypeShape>) -> Self {
        Self::new(ShapeKind::Intersection { members })
    }

    pub fn record(key: TypeShape, value: TypeShape) -> Self {
        Self::new(ShapeKind::Record {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(ShapeKind::Reference { name: name.into() })
    }

    pub fn type_cast(base: TypeShape) -> Self {
        Self::new(ShapeKind::TypeCast {
            base: Box::new(base),
        })
    }

    pub fn opaque(name: impl Into<String>) -> Self {
        Self::new(ShapeKind::Opaque { name: name.into() })
    }

    /// Mark the shape as an optional object field.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_inline_default(mut self, value: impl Into<String>) -> Self {
        self.inline_default = Some(value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

// ============================================================================
// Queries
// ============================================================================

impl TypeShape {
    pub fn tag(&self) -> ShapeTag {
        match &self.kind {
            ShapeKind::Primitive { primitive } => primitive.tag(),
            ShapeKind::Literal { .. } => ShapeTag::Literal,
            ShapeKind::TypeLiteral { .. } => ShapeTag::TypeLiteral,
            ShapeKind::Tuple { .. } => ShapeTag::Tuple,
            ShapeKind::Union { .. } => ShapeTag::Union,
            ShapeKind::Intersection { .. } => ShapeTag::Intersection,
            ShapeKind::Record { .. } => ShapeTag::Record,
            ShapeKind::Reference { .. } => ShapeTag::Reference,
            ShapeKind::TypeCast { .. } => ShapeTag::TypeCast,
            // Same rank however the front end spelled it.
            ShapeKind::Opaque { name } if name == "Date" => ShapeTag::Date,
            ShapeKind::Opaque { .. } => ShapeTag::Opaque,
        }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::Reference { name } => Some(name),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&IndexMap<String, TypeShape>> {
        match &self.kind {
            ShapeKind::TypeLiteral { fields } => Some(fields),
            _ => None,
        }
    }

    /// Names of every `Reference` in the tree, first occurrence first.
    ///
    /// Walks all positions, including optional fields and union members the
    /// synthesizer would not pick.
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_references(&mut names);
        names
    }

    fn collect_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match &self.kind {
            ShapeKind::Reference { name } => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            ShapeKind::TypeLiteral { fields } => {
                for field in fields.values() {
                    field.collect_references(names);
                }
            }
            ShapeKind::Tuple { elements: members }
            | ShapeKind::Union { members }
            | ShapeKind::Intersection { members } => {
                for member in members {
                    member.collect_references(names);
                }
            }
            ShapeKind::Record { key, value } => {
                key.collect_references(names);
                value.collect_references(names);
            }
            ShapeKind::TypeCast { base } => base.collect_references(names),
            ShapeKind::Primitive { .. } | ShapeKind::Literal { .. } | ShapeKind::Opaque { .. } => {}
        }
    }
}
