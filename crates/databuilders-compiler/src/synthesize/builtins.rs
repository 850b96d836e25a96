//! Defaults for built-in types kept opaque by the front end.

const BUILTIN_DEFAULTS: &[(&str, &str)] = &[
    ("Date", "new Date()"),
    ("Promise", "new Promise(() => {})"),
    ("Map", "new Map()"),
    ("Set", "new Set()"),
    ("WeakMap", "new WeakMap()"),
    ("WeakSet", "new WeakSet()"),
    ("RegExp", "new RegExp(\"\")"),
    ("Error", "new Error()"),
    ("BigInt", "BigInt(0)"),
    ("Array", "[]"),
];

/// Default expression for a built-in type name, if one is known.
pub fn builtin_default(name: &str) -> Option<&'static str> {
    BUILTIN_DEFAULTS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, default)| *default)
}
