//! Builder module emitter.

use databuilders_core::utils::quote;

use crate::config::BASE_BUILDER_NAME;
use crate::plan::{BuilderPlan, SetterBody, SetterDescriptor};

const INDENT: &str = "  ";

/// Render one builder module.
pub fn emit(plan: &BuilderPlan) -> String {
    Emitter::new(plan).emit()
}

/// TypeScript emitter for a single `BuilderPlan`.
pub struct Emitter<'a> {
    plan: &'a BuilderPlan,
    /// Output buffer
    output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(plan: &'a BuilderPlan) -> Self {
        Self {
            plan,
            output: String::new(),
        }
    }

    pub fn emit(mut self) -> String {
        self.emit_imports();
        self.output.push('\n');

        let plan = self.plan;
        self.line(
            0,
            &format!(
                "export class {} extends {BASE_BUILDER_NAME}<{}> {{",
                plan.builder_name, plan.type_name
            ),
        );
        self.emit_constructor();
        for setter in &plan.setters {
            self.output.push('\n');
            self.emit_setter(setter);
        }
        self.line(0, "}");

        self.output
    }

    fn emit_imports(&mut self) {
        let plan = self.plan;
        self.line(
            0,
            &format!(
                "import type {{ {} }} from {};",
                plan.type_name,
                quote(&plan.type_import)
            ),
        );
        self.line(
            0,
            &format!(
                "import {{ {BASE_BUILDER_NAME} }} from {};",
                quote(&plan.base_import)
            ),
        );
        for nested in &plan.nested_builders {
            self.line(
                0,
                &format!(
                    "import {{ {} }} from {};",
                    nested.builder_name,
                    quote(&nested.import)
                ),
            );
        }
    }

    fn emit_constructor(&mut self) {
        let plan = self.plan;
        self.line(1, "constructor() {");
        if plan.default_object.is_empty() {
            self.line(2, "super({});");
        } else {
            self.line(2, "super({");
            for field in &plan.default_object {
                self.line(3, &format!("{}: {},", field.key, field.value));
            }
            self.line(2, "});");
        }
        self.line(1, "}");
    }

    fn emit_setter(&mut self, setter: &SetterDescriptor) {
        let SetterDescriptor {
            field,
            key,
            method,
            param,
            param_type,
            body,
        } = setter;

        self.line(1, &format!("{method}({param}: {param_type}): this {{"));
        let value = match body {
            SetterBody::Assign | SetterBody::Optional { built: false } => param.clone(),
            SetterBody::AssignBuilt | SetterBody::Optional { built: true } => {
                format!("{param}.build()")
            }
        };
        if let SetterBody::Optional { .. } = body {
            self.line(2, &format!("if (!{param}) {{"));
            self.line(3, &format!("return this.without({});", quote(field)));
            self.line(2, "}");
        }
        self.line(2, &format!("return this.with({{ {key}: {value} }});"));
        self.line(1, "}");
    }

    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }
}
