use std::path::PathBuf;

use databuilders_core::FileCase;
use indoc::indoc;

use crate::config::{ConfigFile, DefaultsFile};
use crate::{Config, Defaults, Error};

#[test]
fn defaults() {
    let config = Config::new();

    assert_eq!(config.output_dir, PathBuf::from("generated/builders"));
    assert_eq!(config.file_suffix, ".builder");
    assert_eq!(config.file_case, FileCase::Kebab);
    assert_eq!(config.builder_suffix, "Builder");
    assert_eq!(config.defaults, Defaults::default());
    assert!(config.validate().is_ok());
}

#[test]
fn file_overrides_only_present_keys() {
    let file = ConfigFile::parse(indoc! {r#"
        {
            "outputDir": "test/builders",
            "fileCase": "pascal",
            "defaults": { "number": 7 }
        }
    "#})
    .unwrap();

    let config = Config::new().merge_file(&file);

    assert_eq!(config.output_dir, PathBuf::from("test/builders"));
    assert_eq!(config.file_case, FileCase::Pascal);
    assert_eq!(config.file_suffix, ".builder");
    assert_eq!(config.defaults.number, 7.0);
    assert_eq!(config.defaults.string, "");
}

#[test]
fn explicit_setters_win_over_file() {
    let file = ConfigFile {
        builder_suffix: Some("Factory".to_string()),
        defaults: Some(DefaultsFile {
            boolean: Some(true),
            ..DefaultsFile::default()
        }),
        ..ConfigFile::default()
    };

    let config = Config::new()
        .merge_file(&file)
        .builder_suffix("Fixture")
        .default_boolean(false);

    assert_eq!(config.builder_suffix, "Fixture");
    assert!(!config.defaults.boolean);
}

#[test]
fn unknown_file_case_is_rejected() {
    let err = ConfigFile::parse(r#"{ "fileCase": "snake" }"#).unwrap_err();
    assert!(err.to_string().contains("snake"), "{err}");
}

#[test]
fn validate_rejects_unusable_values() {
    let cases = [
        Config::new().output_dir(""),
        Config::new().output_dir("."),
        Config::new().output_dir("/"),
        Config::new().file_suffix(""),
        Config::new().file_suffix("/x"),
        Config::new().builder_suffix(""),
        Config::new().builder_suffix("-x"),
        Config::new().default_number(f64::NAN),
        Config::new().jsdoc_tag(""),
        Config::new().jsdoc_tag("@"),
        Config::new().jsdoc_tag("Data Builder"),
    ];

    for config in cases {
        assert!(
            matches!(config.validate(), Err(Error::Config(_))),
            "{config:?}"
        );
    }
}

#[test]
fn init_file_contents() {
    let json = ConfigFile::from_config(&Config::new()).to_json();

    insta::assert_snapshot!(json, @r#"
    {
      "outputDir": "generated/builders",
      "fileSuffix": ".builder",
      "fileCase": "kebab",
      "builderSuffix": "Builder",
      "defaults": {
        "string": "",
        "number": 0.0,
        "boolean": false
      }
    }
    "#);
}

#[test]
fn jsdoc_tag_is_optional_and_stored_without_at_sign() {
    assert_eq!(Config::new().jsdoc_tag, None);
    assert_eq!(
        Config::new().jsdoc_tag("@DataBuilder").jsdoc_tag.as_deref(),
        Some("DataBuilder")
    );

    let file = ConfigFile::parse(r#"{ "jsdocTag": "@Fixture" }"#).unwrap();
    let config = Config::new().merge_file(&file);
    assert_eq!(config.jsdoc_tag.as_deref(), Some("Fixture"));
    assert!(config.validate().is_ok());

    insta::assert_snapshot!(ConfigFile::from_config(&config).to_json(), @r#"
    {
      "outputDir": "generated/builders",
      "fileSuffix": ".builder",
      "fileCase": "kebab",
      "builderSuffix": "Builder",
      "jsdocTag": "Fixture",
      "defaults": {
        "string": "",
        "number": 0.0,
        "boolean": false
      }
    }
    "#);
}

#[test]
fn read_missing_file_is_none() {
    let temp = tempfile::tempdir().unwrap();
    let file = ConfigFile::read(&temp.path().join("databuilders.json")).unwrap();
    assert!(file.is_none());
}

#[test]
fn read_reports_invalid_json_with_path() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("databuilders.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ConfigFile::read(&path).unwrap_err();

    let Error::Config(message) = err else {
        panic!("expected config error");
    };
    assert!(message.starts_with(&path.display().to_string()), "{message}");
}

#[test]
fn naming_helpers() {
    let config = Config::new();
    assert_eq!(config.builder_name("User"), "UserBuilder");
    assert_eq!(config.builder_stem("UserProfile"), "user-profile.builder");
    assert_eq!(config.base_builder_stem(), "data-builder");

    let camel = Config::new().file_case(FileCase::Camel);
    assert_eq!(camel.builder_stem("UserProfile"), "userProfile.builder");
    assert_eq!(camel.base_builder_stem(), "dataBuilder");
}
