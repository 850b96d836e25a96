//! Declaration → `BuilderPlan`.

use databuilders_core::utils::{
    is_identifier, normalize_field_name, property_key, quote, to_camel_case, to_pascal_case,
};
use databuilders_core::{Declaration, ShapeKind, TypeShape};
use indexmap::IndexMap;

use super::paths::module_specifier;
use crate::Config;
use crate::config::BASE_BUILDER_NAME;
use crate::diagnostics::{Diagnostic, StructuralError, SynthesisError};
use crate::synthesize::{Synthesis, Synthesizer};

/// Words that cannot name a parameter in strict-mode TypeScript.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Everything needed to render one builder module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderPlan {
    pub type_name: String,
    pub builder_name: String,
    /// Output file name, relative to the output directory.
    pub file_name: String,
    /// Specifier of the declaration's source module.
    pub type_import: String,
    /// Specifier of the shared base builder module.
    pub base_import: String,
    /// Every referenced declaration except this one, for the import block.
    pub nested_builders: Vec<NestedBuilder>,
    /// Declarations whose builders the default object instantiates, each with
    /// the first required field doing so. May include this declaration.
    pub required_builders: IndexMap<String, String>,
    /// Required fields only, in declaration order.
    pub default_object: Vec<DefaultField>,
    /// One per declared field, in declaration order.
    pub setters: Vec<SetterDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedBuilder {
    pub builder_name: String,
    pub import: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultField {
    /// Rendered property key.
    pub key: String,
    /// Rendered default expression.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterDescriptor {
    /// Field name without surrounding quotes.
    pub field: String,
    /// Rendered property key.
    pub key: String,
    pub method: String,
    pub param: String,
    pub param_type: String,
    pub body: SetterBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterBody {
    /// `this.with({ key: param })`
    Assign,
    /// `this.with({ key: param.build() })`
    AssignBuilt,
    /// Remove the field on a falsy argument, assign otherwise.
    Optional { built: bool },
}

pub struct Planner<'a> {
    config: &'a Config,
    synthesizer: Synthesizer<'a>,
}

impl<'a> Planner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            synthesizer: Synthesizer::new(config),
        }
    }

    pub fn plan(&self, declaration: &Declaration) -> Result<BuilderPlan, Diagnostic> {
        let Declaration {
            name, path, shape, ..
        } = declaration;

        if !declaration.exported {
            return Err(Diagnostic::structural(name, path, shape, StructuralError::NotExported));
        }
        let Some(fields) = shape.fields() else {
            let kind = shape.tag();
            return Err(Diagnostic::structural(
                name,
                path,
                shape,
                StructuralError::NonRecordRoot { kind },
            ));
        };

        let mut default_object = Vec::new();
        let mut required_builders = IndexMap::new();
        let mut setters = Vec::with_capacity(fields.len());
        let mut methods: IndexMap<String, &str> = IndexMap::new();
        for (raw_name, field) in fields {
            let field_name = normalize_field_name(raw_name);
            let key = property_key(raw_name);
            let field_type = format!("{name}[{}]", quote(field_name));

            if !field.optional {
                let synthesis = self
                    .default_value(field, &field_type)
                    .map_err(|e| Diagnostic::shape(name, path, Some(field_name), e))?;
                for reference in synthesis.references {
                    required_builders
                        .entry(reference)
                        .or_insert_with(|| field_name.to_string());
                }
                default_object.push(DefaultField {
                    key: key.clone(),
                    value: synthesis.expr.to_string(),
                });
            }

            let setter = self.setter(field_name, key, field, field_type);
            if let Some(first) = methods.insert(setter.method.clone(), field_name) {
                let collision = StructuralError::SetterCollision {
                    method: setter.method,
                    first: first.to_string(),
                    second: field_name.to_string(),
                };
                return Err(
                    Diagnostic::structural(name, path, shape, collision).with_field(field_name),
                );
            }
            setters.push(setter);
        }

        let nested_builders = shape
            .references()
            .into_iter()
            .filter(|reference| *reference != name.as_str())
            .map(|reference| NestedBuilder {
                builder_name: self.config.builder_name(reference),
                import: format!("./{}", self.config.builder_stem(reference)),
            })
            .collect();

        tracing::debug!(
            declaration = %name,
            fields = fields.len(),
            required = default_object.len(),
            "planned builder"
        );

        Ok(BuilderPlan {
            type_name: name.clone(),
            builder_name: self.config.builder_name(name),
            file_name: format!("{}.ts", self.config.builder_stem(name)),
            type_import: module_specifier(&self.config.output_dir, path),
            base_import: format!("./{}", self.config.base_builder_stem()),
            nested_builders,
            required_builders,
            default_object,
            setters,
        })
    }

    /// Top-level casts assert the field's own type rather than `any`.
    fn default_value(
        &self,
        field: &TypeShape,
        field_type: &str,
    ) -> Result<Synthesis, SynthesisError> {
        if field.inline_default.is_none()
            && let ShapeKind::TypeCast { base } = &field.kind
        {
            let Synthesis { expr, references } = self.synthesizer.synthesize(base)?;
            return Ok(Synthesis {
                expr: expr.cast(field_type),
                references,
            });
        }
        self.synthesizer.synthesize(field)
    }

    fn setter(
        &self,
        field_name: &str,
        key: String,
        field: &TypeShape,
        field_type: String,
    ) -> SetterDescriptor {
        let is_reference = field.as_reference().is_some();
        let param_type = if is_reference {
            format!("{BASE_BUILDER_NAME}<{field_type}>")
        } else {
            field_type
        };
        let body = match (field.optional, is_reference) {
            (true, built) => SetterBody::Optional { built },
            (false, true) => SetterBody::AssignBuilt,
            (false, false) => SetterBody::Assign,
        };

        SetterDescriptor {
            field: field_name.to_string(),
            key,
            method: format!("with{}", to_pascal_case(field_name)),
            param: parameter_name(field_name),
            param_type,
            body,
        }
    }
}

fn parameter_name(field_name: &str) -> String {
    let param = to_camel_case(field_name);
    if is_identifier(&param) && !RESERVED_WORDS.contains(&param.as_str()) {
        param
    } else {
        "value".to_string()
    }
}
