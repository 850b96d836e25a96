//! The shared `DataBuilder<T>` base class, written once per session.

const BASE_BUILDER: &str = r#"export abstract class DataBuilder<T extends object> {
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
"#;

pub fn emit_base_builder() -> String {
    BASE_BUILDER.to_string()
}
