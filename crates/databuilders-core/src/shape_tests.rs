use crate::{Primitive, ShapeKind, ShapeTag, TypeShape};

#[test]
fn tags_follow_tie_break_order() {
    let ranked = [
        ShapeTag::Undefined,
        ShapeTag::Boolean,
        ShapeTag::Number,
        ShapeTag::String,
        ShapeTag::Date,
        ShapeTag::Literal,
        ShapeTag::TypeLiteral,
        ShapeTag::Array,
        ShapeTag::Tuple,
        ShapeTag::Record,
    ];

    assert!(ranked.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(ShapeTag::Record < ShapeTag::Null);
    assert!(ShapeTag::Reference < ShapeTag::Never);
}

#[test]
fn tag_of_each_kind() {
    assert_eq!(TypeShape::primitive(Primitive::Date).tag(), ShapeTag::Date);
    assert_eq!(TypeShape::primitive(Primitive::Array).tag(), ShapeTag::Array);
    assert_eq!(TypeShape::literal("'a'").tag(), ShapeTag::Literal);
    assert_eq!(TypeShape::reference("User").tag(), ShapeTag::Reference);
    assert_eq!(
        TypeShape::type_cast(TypeShape::primitive(Primitive::Number)).tag(),
        ShapeTag::TypeCast
    );
    assert_eq!(TypeShape::opaque("Map").tag(), ShapeTag::Opaque);
}

#[test]
fn tag_display_uses_upper_snake_names() {
    assert_eq!(ShapeTag::TypeLiteral.to_string(), "TYPE_LITERAL");
    assert_eq!(ShapeTag::TypeCast.to_string(), "TYPE_CAST");
}

#[test]
fn type_literal_preserves_field_order() {
    let shape = TypeShape::type_literal([
        ("zeta", TypeShape::primitive(Primitive::String)),
        ("alpha", TypeShape::primitive(Primitive::Number)),
        ("mid", TypeShape::primitive(Primitive::Boolean)),
    ]);

    let names: Vec<&str> = shape
        .fields()
        .expect("type literal")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn opaque_date_ranks_as_date() {
    let opaque = TypeShape::opaque("Date");
    let keyword = TypeShape::primitive(Primitive::Date);

    assert_eq!(opaque.tag(), ShapeTag::Date);
    assert_eq!(opaque.tag(), keyword.tag());
    assert!(opaque.tag() < TypeShape::literal("'x'").tag());
    assert_eq!(TypeShape::opaque("Map").tag(), ShapeTag::Opaque);
}

#[test]
fn references_are_collected_everywhere_once() {
    let shape = TypeShape::type_literal([
        ("owner", TypeShape::reference("User")),
        (
            "tags",
            TypeShape::union(vec![
                TypeShape::primitive(Primitive::Undefined),
                TypeShape::reference("Tag"),
            ]),
        ),
        (
            "pair",
            TypeShape::tuple(vec![TypeShape::reference("User"), TypeShape::reference("Address")]),
        ),
        (
            "lookup",
            TypeShape::record(
                TypeShape::primitive(Primitive::String),
                TypeShape::reference("Entry"),
            )
            .optional(),
        ),
    ]);

    assert_eq!(shape.references(), ["User", "Tag", "Address", "Entry"]);
}

#[test]
fn builder_methods_set_metadata() {
    let shape = TypeShape::primitive(Primitive::String)
        .optional()
        .with_inline_default("'x'")
        .with_text("string");

    assert!(shape.optional);
    assert_eq!(shape.inline_default.as_deref(), Some("'x'"));
    assert_eq!(shape.text.as_deref(), Some("string"));
    assert!(matches!(
        shape.kind,
        ShapeKind::Primitive {
            primitive: Primitive::String
        }
    ));
}
