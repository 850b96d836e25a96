//! Synthesized expressions and their TypeScript rendering.

use std::fmt;

/// A default value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Text emitted verbatim: keywords, literals, constructor calls.
    Raw(String),
    /// `new <builder>().build()`
    Build(String),
    Object(Vec<Entry>),
    Array(Vec<Expr>),
    /// `expr as Type`
    Cast(Box<Expr>, String),
}

/// One member of an object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// `key: value`, with the key already rendered (bare, quoted or computed).
    Field { key: String, value: Expr },
    /// `...expr`
    Spread(Expr),
}

impl Expr {
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    pub fn cast(self, ty: impl Into<String>) -> Self {
        Self::Cast(Box::new(self), ty.into())
    }

    /// Insert or overwrite a field, keeping the position of an overwritten key.
    ///
    /// Returns `true` if the key was already present.
    pub(crate) fn upsert(entries: &mut Vec<Entry>, key: String, value: Expr) -> bool {
        let existing = entries.iter_mut().find_map(|entry| match entry {
            Entry::Field { key: k, value: v } if *k == key => Some(v),
            _ => None,
        });
        match existing {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                entries.push(Entry::Field { key, value });
                false
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(text) => f.write_str(text),
            Self::Build(builder) => write!(f, "new {builder}().build()"),
            Self::Object(entries) if entries.is_empty() => f.write_str("{}"),
            Self::Object(entries) => {
                f.write_str("{ ")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{entry}")?;
                }
                f.write_str(" }")
            }
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Cast(inner, ty) => write!(f, "{inner} as {ty}"),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { key, value } => write!(f, "{key}: {value}"),
            Self::Spread(expr) => write!(f, "...{expr}"),
        }
    }
}
