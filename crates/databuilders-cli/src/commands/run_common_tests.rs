use std::path::PathBuf;

use databuilders_compiler::{Config, Error, Session};
use databuilders_core::{Declaration, Primitive, TypeShape};

use super::run_common::render_error;

#[test]
fn generation_error_lists_every_diagnostic() {
    let session = Session::new(Config::new().output_dir("out")).unwrap();
    let declarations = [
        Declaration::new(
            "Status",
            "src/status.ts",
            TypeShape::union(vec![TypeShape::literal("'on'"), TypeShape::literal("'off'")])
                .with_text("'on' | 'off'"),
        ),
        Declaration::new(
            "Order",
            "src/order.ts",
            TypeShape::type_literal([
                ("id", TypeShape::primitive(Primitive::Number)),
                ("buyer", TypeShape::reference("Ghost")),
            ]),
        ),
        Declaration::new(
            "Job",
            "src/job.ts",
            TypeShape::type_literal([("worker", TypeShape::opaque("Worker").with_text("Worker"))]),
        ),
    ];

    let err = session.check(&declarations).unwrap_err();

    insta::assert_snapshot!(render_error(&err), @r"
    error: builder generation failed with 3 errors
      Status (src/status.ts): builders are only generated for object types, found UNION [UNION `'on' | 'off'`]
      Order (src/order.ts): references `Ghost`, which is not generated in this session [TYPE_LITERAL]
      Job (src/job.ts), field `worker`: no default value known for built-in type `Worker` [OPAQUE `Worker`]
    ");
}

#[test]
fn single_errors_take_one_line() {
    let err = Error::DuplicateDeclarations(vec!["User".to_string(), "Address".to_string()]);
    insta::assert_snapshot!(render_error(&err), @"error: duplicated builders: User, Address");

    let err = Error::Io {
        action: "read",
        path: PathBuf::from("shapes.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    insta::assert_snapshot!(render_error(&err), @"error: failed to read `shapes.json`: no such file");
}
