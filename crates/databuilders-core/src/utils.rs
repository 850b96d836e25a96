//! Naming helpers: case conversion, file slugs and TypeScript literal quoting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | ' ')
}

/// Split an identifier into words.
///
/// Boundaries are separators (`_`, `-`, `.`, space), a lowercase letter or
/// digit followed by an uppercase one (`userV2` → `user`, `V2`), and the last
/// capital of an acronym run (`HTTPServer` → `HTTP`, `Server`).
fn words(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        if is_separator(c) {
            if let Some(begin) = start.take() {
                words.push(&s[begin..offset]);
            }
            continue;
        }

        if let Some(begin) = start
            && c.is_ascii_uppercase()
            && i > 0
        {
            let prev = chars[i - 1].1;
            let next_is_lower = chars.get(i + 1).is_some_and(|&(_, n)| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary {
                words.push(&s[begin..offset]);
                start = Some(offset);
            }
        }

        if start.is_none() {
            start = Some(offset);
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.push(first.to_ascii_uppercase());
            result.extend(chars.map(|c| c.to_ascii_lowercase()));
            result
        }
        None => String::new(),
    }
}

/// Convert snake_case, kebab-case or camelCase to PascalCase.
///
/// If the input is already PascalCase (starts uppercase, no separators), it is
/// returned unchanged.
///
/// # Examples
/// ```
/// use databuilders_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("foo_bar"), "FooBar");
/// assert_eq!(to_pascal_case("fooBar"), "FooBar");
/// assert_eq!(to_pascal_case("FooBar"), "FooBar");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let has_separator = s.chars().any(is_separator);
    let has_lowercase = s.chars().any(|c| c.is_ascii_lowercase());
    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    // Already PascalCase: starts uppercase, has lowercase, no separators
    if starts_uppercase && has_lowercase && !has_separator {
        return s.to_string();
    }

    words(s).into_iter().map(capitalize).collect()
}

/// Convert any supported casing to camelCase.
///
/// # Examples
/// ```
/// use databuilders_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("first-name"), "firstName");
/// assert_eq!(to_camel_case("HTTPServer"), "httpServer");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in words(s).into_iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_ascii_lowercase());
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}

/// Convert any supported casing to kebab-case.
///
/// # Examples
/// ```
/// use databuilders_core::utils::to_kebab_case;
/// assert_eq!(to_kebab_case("dataBuilder"), "data-builder");
/// assert_eq!(to_kebab_case("UserV2"), "user-v2");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    words(s)
        .into_iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Naming convention for generated file names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCase {
    #[default]
    Kebab,
    Camel,
    Pascal,
}

impl FileCase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kebab => "kebab",
            Self::Camel => "camel",
            Self::Pascal => "pascal",
        }
    }
}

impl fmt::Display for FileCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kebab" => Ok(Self::Kebab),
            "camel" => Ok(Self::Camel),
            "pascal" => Ok(Self::Pascal),
            other => Err(format!(
                "unknown file case '{other}' (expected kebab, camel or pascal)"
            )),
        }
    }
}

/// File name stem for a type name under the given convention.
pub fn to_file_slug(name: &str, case: FileCase) -> String {
    match case {
        FileCase::Kebab => to_kebab_case(name),
        FileCase::Camel => to_camel_case(name),
        FileCase::Pascal => to_pascal_case(name),
    }
}

/// Strip the quotes a front end may keep around a property name (`'first-name'`).
pub fn normalize_field_name(name: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = name
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    name
}

/// Whether `name` can be written as a bare identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Double-quoted TypeScript string literal.
pub fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Object-literal key for a field name: bare when possible, quoted otherwise.
pub fn property_key(name: &str) -> String {
    let name = normalize_field_name(name);
    if is_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}
