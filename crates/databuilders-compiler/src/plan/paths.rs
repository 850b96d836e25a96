//! Import specifiers between the output directory and declaration sources.

use std::path::{Component, Path};

const SOURCE_EXTENSIONS: &[&str] = &[".d.ts", ".tsx", ".ts"];

/// Relative ES module specifier that imports `target` from a module located in
/// `from_dir`: `../src/user` for `src/user.ts` seen from `out/`.
///
/// Both paths are compared lexically, so they must share a frame (both
/// absolute, or both relative to the same directory).
pub fn module_specifier(from_dir: &Path, target: &Path) -> String {
    let from = normalize(from_dir);
    let to = normalize(target);

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(to[common..].iter().cloned());

    if let Some(last) = parts.last_mut() {
        strip_extension(last);
    }

    let joined = parts.join("/");
    if joined.starts_with("../") {
        joined
    } else {
        format!("./{joined}")
    }
}

/// Path components with `.` dropped and `..` folded into their parent.
fn normalize(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|p| p != "..") {
                    parts.pop();
                } else {
                    parts.push("..".to_string());
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                parts.push(component.as_os_str().to_string_lossy().into_owned());
            }
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }
    parts
}

fn strip_extension(file_name: &mut String) {
    for ext in SOURCE_EXTENSIONS {
        if file_name.len() > ext.len() && file_name.ends_with(ext) {
            let len = file_name.len() - ext.len();
            file_name.truncate(len);
            return;
        }
    }
}
