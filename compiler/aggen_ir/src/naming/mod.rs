//! Identifier and namespace string transforms.
//!
//! All functions are pure and allocation-light; they operate on the
//! fully-qualified display strings handed over by the host.

/// Prefix the host uses for fully-qualified names.
pub const GLOBAL_PREFIX: &str = "global::";

/// C# keywords that cannot be used as bare parameter names.
const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Lower-case the first character, leaving the rest untouched.
///
/// `ServiceProvider` becomes `serviceProvider`; an empty string stays empty.
pub fn to_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(name.len());
            result.extend(first.to_lowercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Camel-case a member name for use as a parameter, escaping keywords.
///
/// A property named `Event` would otherwise become the keyword `event`.
pub fn to_parameter_name(name: &str) -> String {
    let camel = to_camel_case(name);
    if is_reserved_keyword(&camel) {
        format!("@{camel}")
    } else {
        camel
    }
}

/// Check whether an identifier collides with a reserved keyword.
pub fn is_reserved_keyword(ident: &str) -> bool {
    RESERVED_KEYWORDS.binary_search(&ident).is_ok()
}

/// Strip a leading `global::` qualifier, if present.
pub fn strip_global_prefix(name: &str) -> &str {
    name.strip_prefix(GLOBAL_PREFIX).unwrap_or(name)
}

/// Derive the implementation name from an interface name.
///
/// Drops the single leading marker character (`IDependencies` becomes
/// `Dependencies`). A name with nothing left after the marker is returned
/// unchanged so the generated type always has an identifier.
pub fn implementation_name(interface_name: &str) -> &str {
    let mut chars = interface_name.chars();
    match chars.next() {
        Some(_) if !chars.as_str().is_empty() => chars.as_str(),
        _ => interface_name,
    }
}

/// Append the generic arity suffix used in unit names (`Name`3`).
pub fn with_arity(name: &str, arity: usize) -> String {
    if arity == 0 {
        name.to_string()
    } else {
        format!("{name}`{arity}")
    }
}
