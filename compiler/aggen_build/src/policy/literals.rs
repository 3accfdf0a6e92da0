//! Rendering attribute constants as source literals for key expressions.

use std::fmt;
use std::fmt::Write as _;

use aggen_ir::naming::{strip_global_prefix, GLOBAL_PREFIX};

use crate::facts::ConstantValue;

/// Turns a key marker's constant argument into a ready-to-emit expression.
///
/// Implementors supply one method per constant kind; [`render`] dispatches
/// and handles arrays recursively. Returning `None` from `render` means the
/// value has no literal form, and the dependency is emitted without a key.
///
/// [`render`]: KeyLiteralRenderer::render
pub trait KeyLiteralRenderer: Send + Sync + fmt::Debug {
    fn null(&self) -> String;
    fn boolean(&self, value: bool) -> String;
    fn character(&self, value: char) -> String;
    fn signed(&self, value: i64) -> String;
    fn unsigned(&self, value: u64) -> String;
    fn floating(&self, value: f64) -> String;
    fn string(&self, value: &str) -> String;
    fn enum_member(&self, type_name: &str, member: &str) -> String;
    fn type_of(&self, type_name: &str) -> String;
    fn array(&self, element_type: &str, items: &[String]) -> String;

    fn render(&self, value: &ConstantValue) -> Option<String> {
        Some(match value {
            ConstantValue::Null => self.null(),
            ConstantValue::Bool(value) => self.boolean(*value),
            ConstantValue::Char(value) => self.character(*value),
            ConstantValue::Int(value) => self.signed(*value),
            ConstantValue::UInt(value) => self.unsigned(*value),
            ConstantValue::Float(bits) => self.floating(f64::from_bits(*bits)),
            ConstantValue::String(value) => self.string(value),
            ConstantValue::Enum { type_name, member } => self.enum_member(type_name, member),
            ConstantValue::Type(type_name) => self.type_of(type_name),
            ConstantValue::Array {
                element_type,
                items,
            } => {
                let rendered = items
                    .iter()
                    .map(|item| self.render(item))
                    .collect::<Option<Vec<_>>>()?;
                self.array(element_type, &rendered)
            }
            ConstantValue::Error => return None,
        })
    }
}

/// C# literal syntax.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CSharpLiterals;

impl KeyLiteralRenderer for CSharpLiterals {
    fn null(&self) -> String {
        "null".to_string()
    }

    fn boolean(&self, value: bool) -> String {
        value.to_string()
    }

    fn character(&self, value: char) -> String {
        let mut out = String::with_capacity(4);
        out.push('\'');
        escape_into(&mut out, value, '\'');
        out.push('\'');
        out
    }

    fn signed(&self, value: i64) -> String {
        value.to_string()
    }

    fn unsigned(&self, value: u64) -> String {
        value.to_string()
    }

    fn floating(&self, value: f64) -> String {
        if value.is_nan() {
            "double.NaN".to_string()
        } else if value.is_infinite() && value.is_sign_positive() {
            "double.PositiveInfinity".to_string()
        } else if value.is_infinite() {
            "double.NegativeInfinity".to_string()
        } else {
            // Debug keeps the decimal point (`1.0`) and is round-trip exact.
            format!("{value:?}")
        }
    }

    fn string(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            escape_into(&mut out, c, '"');
        }
        out.push('"');
        out
    }

    fn enum_member(&self, type_name: &str, member: &str) -> String {
        format!("{GLOBAL_PREFIX}{}.{member}", strip_global_prefix(type_name))
    }

    fn type_of(&self, type_name: &str) -> String {
        format!("typeof({type_name})")
    }

    fn array(&self, element_type: &str, items: &[String]) -> String {
        if items.is_empty() {
            format!("new {element_type}[] {{ }}")
        } else {
            format!("new {element_type}[] {{ {} }}", items.join(", "))
        }
    }
}

fn escape_into(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        // Includes C# line terminators outside the control category.
        c if c.is_control() || matches!(c, '\u{85}' | '\u{2028}' | '\u{2029}') => {
            // Writing to a String cannot fail.
            let _ = write!(out, "\\u{:04x}", u32::from(c));
        }
        c => out.push(c),
    }
}
