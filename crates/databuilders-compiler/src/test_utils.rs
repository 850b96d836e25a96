//! Test utilities: declaration fixtures shared by the pipeline tests.

use databuilders_core::utils::to_kebab_case;
use databuilders_core::{Declaration, Primitive, TypeShape};

/// Declaration living in `src/<kebab-name>.ts`.
pub fn declaration(name: &str, shape: TypeShape) -> Declaration {
    Declaration::new(name, format!("src/{}.ts", to_kebab_case(name)), shape)
}

/// `{ name: string; age?: number }`
pub fn user_shape() -> TypeShape {
    TypeShape::type_literal([
        ("name", TypeShape::primitive(Primitive::String)),
        ("age", TypeShape::primitive(Primitive::Number).optional()),
    ])
}

/// `{ street: string; zip: number }`
pub fn address_shape() -> TypeShape {
    TypeShape::type_literal([
        ("street", TypeShape::primitive(Primitive::String)),
        ("zip", TypeShape::primitive(Primitive::Number)),
    ])
}
