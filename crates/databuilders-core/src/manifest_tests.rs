use indoc::indoc;

use crate::{Primitive, ShapeKind, TypeShape, parse_manifest};

const SAMPLE_JSON: &str = indoc! {r#"
    {
        "declarations": [
            {
                "name": "User",
                "path": "src/user.ts",
                "tags": ["DataBuilder"],
                "shape": {
                    "kind": "typeLiteral",
                    "fields": {
                        "name": { "kind": "primitive", "type": "string" },
                        "age": { "kind": "primitive", "type": "number", "optional": true },
                        "role": {
                            "kind": "union",
                            "members": [
                                { "kind": "literal", "value": "'admin'" },
                                { "kind": "literal", "value": "'guest'" }
                            ],
                            "inlineDefault": "'guest'"
                        },
                        "address": { "kind": "reference", "name": "Address" },
                        "id": {
                            "kind": "typeCast",
                            "base": { "kind": "primitive", "type": "number" },
                            "text": "UserId"
                        },
                        "meta": {
                            "kind": "record",
                            "key": { "kind": "primitive", "type": "string" },
                            "value": { "kind": "opaque", "name": "Map" }
                        }
                    }
                }
            },
            {
                "name": "Address",
                "path": "src/address.ts",
                "exported": false,
                "shape": { "kind": "typeLiteral", "fields": {} }
            }
        ]
    }
"#};

#[test]
fn parse_declarations() {
    let manifest = parse_manifest(SAMPLE_JSON).unwrap();

    assert_eq!(manifest.declarations.len(), 2);
    let user = &manifest.declarations[0];
    assert_eq!(user.name, "User");
    assert_eq!(user.path.to_str(), Some("src/user.ts"));
    assert!(user.exported);
    assert_eq!(user.tags, ["DataBuilder"]);
    assert!(!manifest.declarations[1].exported);
}

#[test]
fn tag_lookup_ignores_at_sign() {
    let manifest = parse_manifest(SAMPLE_JSON).unwrap();
    let user = &manifest.declarations[0];

    assert!(user.has_tag("DataBuilder"));
    assert!(user.has_tag("@DataBuilder"));
    assert!(!user.has_tag("Fixture"));
    assert!(!manifest.declarations[1].has_tag("DataBuilder"));

    let tagged = manifest.declarations[1].clone().with_tag("Fixture");
    assert!(tagged.has_tag("@Fixture"));
}

#[test]
fn parse_shapes_in_declaration_order() {
    let manifest = parse_manifest(SAMPLE_JSON).unwrap();
    let fields = manifest.declarations[0].shape.fields().unwrap();

    let names: Vec<&str> = fields.keys().map(String::as_str).collect();
    assert_eq!(names, ["name", "age", "role", "address", "id", "meta"]);

    assert_eq!(fields["name"], TypeShape::primitive(Primitive::String));
    assert_eq!(
        fields["age"],
        TypeShape::primitive(Primitive::Number).optional()
    );
    assert_eq!(fields["role"].inline_default.as_deref(), Some("'guest'"));
    assert_eq!(fields["address"].as_reference(), Some("Address"));
    assert_eq!(fields["id"].text.as_deref(), Some("UserId"));
    assert!(matches!(fields["meta"].kind, ShapeKind::Record { .. }));
}

#[test]
fn serialize_round_trips_through_json() {
    let shape = TypeShape::type_literal([
        ("when", TypeShape::primitive(Primitive::Date)),
        ("note", TypeShape::primitive(Primitive::String).optional()),
    ]);

    let json = serde_json::to_string(&shape).unwrap();
    insta::assert_snapshot!(json, @r#"{"kind":"typeLiteral","fields":{"when":{"kind":"primitive","type":"date"},"note":{"kind":"primitive","type":"string","optional":true}}}"#);

    let back: TypeShape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shape);
}

#[test]
fn reject_unknown_kind() {
    let err = parse_manifest(
        r#"{"declarations":[{"name":"X","path":"x.ts","shape":{"kind":"mystery"}}]}"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("mystery"), "{err}");
}

#[test]
fn empty_document_has_no_declarations() {
    let manifest = parse_manifest("{}").unwrap();
    assert!(manifest.declarations.is_empty());
}
