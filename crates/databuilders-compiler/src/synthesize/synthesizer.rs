//! Recursive default value synthesis over the shape tree.

use databuilders_core::utils::{property_key, quote};
use databuilders_core::{Primitive, ShapeKind, ShapeTag, TypeShape};
use indexmap::IndexSet;

use super::builtins::builtin_default;
use super::expr::{Entry, Expr};
use crate::Config;
use crate::diagnostics::{ShapeError, SynthesisError};

type Result<T> = std::result::Result<T, SynthesisError>;

/// Suffix appended to values standing in for a branded type.
const ANY: &str = "any";

/// A synthesized default and the declarations it instantiates builders for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub expr: Expr,
    /// Names of referenced declarations, first occurrence first.
    pub references: IndexSet<String>,
}

impl Synthesis {
    /// Rendered TypeScript expression.
    pub fn literal(&self) -> String {
        self.expr.to_string()
    }
}

/// Default value synthesizer.
///
/// Pure: the same shape and configuration always produce the same text.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
    config: &'a Config,
}

impl<'a> Synthesizer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn synthesize(&self, shape: &TypeShape) -> Result<Synthesis> {
        let mut references = IndexSet::new();
        let expr = self.expr(shape, &mut references)?;
        Ok(Synthesis { expr, references })
    }

    fn expr(&self, shape: &TypeShape, refs: &mut IndexSet<String>) -> Result<Expr> {
        if let Some(value) = &shape.inline_default {
            return Ok(Expr::raw(value));
        }

        match &shape.kind {
            ShapeKind::Primitive { primitive } => self.primitive(*primitive, shape),
            ShapeKind::Literal { value } => Ok(Expr::raw(value)),
            ShapeKind::TypeLiteral { fields } => {
                let mut entries = Vec::with_capacity(fields.len());
                for (name, field) in fields {
                    if field.optional {
                        continue;
                    }
                    entries.push(Entry::Field {
                        key: property_key(name),
                        value: self.expr(field, refs)?,
                    });
                }
                Ok(Expr::Object(entries))
            }
            ShapeKind::Tuple { elements } => elements
                .iter()
                .map(|element| self.expr(element, refs))
                .collect::<Result<Vec<_>>>()
                .map(Expr::Array),
            ShapeKind::Union { members } => {
                let chosen = preferred(members.iter())
                    .ok_or_else(|| SynthesisError::new(ShapeError::EmptyUnion, shape))?;
                self.expr(chosen, refs)
            }
            ShapeKind::Intersection { members } => self.intersection(members, shape, refs),
            ShapeKind::Record { key, value } => {
                if matches!(key.tag(), ShapeTag::String | ShapeTag::Number) {
                    return Ok(Expr::Object(Vec::new()));
                }
                let key = self.expr(key, refs)?;
                let value = self.expr(value, refs)?;
                Ok(Expr::Object(vec![Entry::Field {
                    key: record_key(&key),
                    value,
                }]))
            }
            ShapeKind::Reference { name } => {
                refs.insert(name.clone());
                Ok(Expr::Build(self.config.builder_name(name)))
            }
            ShapeKind::TypeCast { base } => Ok(self.expr(base, refs)?.cast(ANY)),
            ShapeKind::Opaque { name } => builtin_default(name).map(Expr::raw).ok_or_else(|| {
                SynthesisError::new(
                    ShapeError::MissingBuiltinDefault { name: name.clone() },
                    shape,
                )
            }),
        }
    }

    fn primitive(&self, primitive: Primitive, shape: &TypeShape) -> Result<Expr> {
        let defaults = &self.config.defaults;
        let text = match primitive {
            Primitive::String => quote(&defaults.string),
            Primitive::Number => defaults.number.to_string(),
            Primitive::Boolean => defaults.boolean.to_string(),
            Primitive::Undefined | Primitive::Any | Primitive::Unknown => "undefined".to_string(),
            Primitive::Null => "null".to_string(),
            Primitive::Date => "new Date()".to_string(),
            Primitive::Array => "[]".to_string(),
            Primitive::Bigint => "0n".to_string(),
            Primitive::Symbol => "Symbol('')".to_string(),
            Primitive::Never => return Err(SynthesisError::new(ShapeError::Never, shape)),
        };
        Ok(Expr::Raw(text))
    }

    /// Members are classified by what they synthesize to. Object literals are
    /// merged and builder calls spread; any other value (`string`, `'a' | 'b'`,
    /// a cast) is the value side of a branded type, which wins outright:
    /// `('a' | 'b') & { __brand: 'Status' }` becomes `'a' as any`.
    fn intersection(
        &self,
        members: &[TypeShape],
        shape: &TypeShape,
        refs: &mut IndexSet<String>,
    ) -> Result<Expr> {
        if members.is_empty() {
            return Err(SynthesisError::new(ShapeError::EmptyIntersection, shape));
        }

        let mut synthesized = Vec::with_capacity(members.len());
        for member in members {
            let mut member_refs = IndexSet::new();
            let expr = self.expr(member, &mut member_refs)?;
            synthesized.push((member, expr, member_refs));
        }

        let branded = synthesized
            .iter()
            .enumerate()
            .filter(|(_, (_, expr, _))| !matches!(expr, Expr::Object(_) | Expr::Build(_)))
            .min_by_key(|(_, (member, _, _))| member.tag())
            .map(|(index, _)| index);
        if let Some(index) = branded {
            let (_, expr, member_refs) = synthesized.swap_remove(index);
            refs.extend(member_refs);
            return Ok(expr.cast(ANY));
        }

        let mut entries = Vec::new();
        for (_, expr, member_refs) in synthesized {
            refs.extend(member_refs);
            match expr {
                Expr::Object(member_entries) => {
                    for entry in member_entries {
                        match entry {
                            Entry::Field { key, value } => {
                                if Expr::upsert(&mut entries, key.clone(), value) {
                                    tracing::warn!(
                                        field = %key,
                                        text = shape.text.as_deref().unwrap_or_default(),
                                        "intersection members share a field, the last one wins"
                                    );
                                }
                            }
                            spread @ Entry::Spread(_) => entries.push(spread),
                        }
                    }
                }
                other => entries.push(Entry::Spread(other)),
            }
        }
        Ok(Expr::Object(entries))
    }
}

/// The member with the lowest tie-break tag; the first one among equals.
fn preferred<'s>(members: impl Iterator<Item = &'s TypeShape>) -> Option<&'s TypeShape> {
    members.min_by_key(|member| member.tag())
}

/// Render a synthesized record key: string and number literals are valid
/// property names as-is, anything else needs a computed key.
fn record_key(key: &Expr) -> String {
    if let Expr::Raw(text) = key
        && (is_string_literal(text) || is_number_literal(text))
    {
        return text.clone();
    }
    format!("[{key}]")
}

fn is_string_literal(text: &str) -> bool {
    ['"', '\'']
        .into_iter()
        .any(|q| text.len() >= 2 && text.starts_with(q) && text.ends_with(q))
}

fn is_number_literal(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit()) && text.parse::<f64>().is_ok()
}
