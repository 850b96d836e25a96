use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use databuilders_compiler::Error;
use databuilders_core::{Manifest, parse_manifest};

/// Load a shape manifest from a file, or from stdin for `-`.
pub fn load_manifest(path: &Path) -> Result<Manifest, Error> {
    let content = if path.as_os_str() == "-" {
        load_stdin()?
    } else {
        fs::read_to_string(path).map_err(|source| Error::Io {
            action: "read",
            path: path.to_path_buf(),
            source,
        })?
    };

    parse_manifest(&content).map_err(|source| Error::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

fn load_stdin() -> Result<String, Error> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| Error::Io {
            action: "read",
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(buf)
}

/// Anchor every relative declaration path at `base`.
pub fn anchor_paths(manifest: &mut Manifest, base: &Path) {
    for declaration in &mut manifest.declarations {
        if declaration.path.is_relative() {
            declaration.path = base.join(&declaration.path);
        }
    }
}
