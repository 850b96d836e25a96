use std::fs;
use std::path::{Path, PathBuf};

use databuilders_compiler::Error;

use super::manifest_loader::{anchor_paths, load_manifest};

#[test]
fn load_and_anchor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shapes.json");
    fs::write(
        &path,
        r#"{"declarations":[
            {"name":"User","path":"src/user.ts","shape":{"kind":"typeLiteral","fields":{}}},
            {"name":"Abs","path":"/abs/abs.ts","shape":{"kind":"typeLiteral","fields":{}}}
        ]}"#,
    )
    .unwrap();

    let mut manifest = load_manifest(&path).unwrap();
    anchor_paths(&mut manifest, Path::new("/work"));

    let paths: Vec<&Path> = manifest
        .declarations
        .iter()
        .map(|d| d.path.as_path())
        .collect();
    assert_eq!(paths, [Path::new("/work/src/user.ts"), Path::new("/abs/abs.ts")]);
}

#[test]
fn invalid_manifest_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"declarations": [{"name": 1}]}"#).unwrap();

    let err = load_manifest(&path).unwrap_err();

    assert!(matches!(&err, Error::Manifest { path: p, .. } if *p == path), "{err:?}");
    assert!(err.to_string().contains("broken.json"), "{err}");
}

#[test]
fn missing_manifest_is_an_io_error() {
    let err = load_manifest(&PathBuf::from("/nonexistent/shapes.json")).unwrap_err();
    assert!(matches!(err, Error::Io { action: "read", .. }), "{err:?}");
}
