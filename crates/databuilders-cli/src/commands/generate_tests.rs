use databuilders_compiler::{Config, Session};
use databuilders_core::{Declaration, Primitive, TypeShape};

use super::generate::render_dry_run;

#[test]
fn dry_run_prints_every_file_under_its_path() {
    let session = Session::new(Config::new().output_dir("out")).unwrap();
    let user = Declaration::new(
        "User",
        "src/user.ts",
        TypeShape::type_literal([("name", TypeShape::primitive(Primitive::String))]),
    );

    let report = session.check(&[user]).unwrap();

    insta::assert_snapshot!(render_dry_run(&report), @r#"
    // out/data-builder.ts
    export abstract class DataBuilder<T extends object> {
      private data: T;

      constructor(data: T) {
        this.data = data;
      }

      build(): Readonly<T> {
        return structuredClone(this.data);
      }

      protected with(partial: Partial<T>): this {
        this.data = { ...this.data, ...partial };
        return this;
      }

      protected without<K extends keyof T>(key: K): this {
        const { [key]: _omitted, ...rest } = this.data;
        this.data = rest as unknown as T;
        return this;
      }
    }

    // out/user.builder.ts
    import type { User } from "../src/user";
    import { DataBuilder } from "./data-builder";

    export class UserBuilder extends DataBuilder<User> {
      constructor() {
        super({
          name: "",
        });
      }

      withName(name: User["name"]): this {
        return this.with({ name: name });
      }
    }
    "#);
}
