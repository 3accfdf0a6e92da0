use pretty_assertions::assert_eq;

use super::*;
use crate::facts::ConstantValue;

fn render(value: &ConstantValue) -> Option<String> {
    CSharpLiterals.render(value)
}

#[test]
fn primitive_literals() {
    assert_eq!(render(&ConstantValue::Null).as_deref(), Some("null"));
    assert_eq!(render(&ConstantValue::Bool(true)).as_deref(), Some("true"));
    assert_eq!(render(&ConstantValue::Bool(false)).as_deref(), Some("false"));
    assert_eq!(render(&ConstantValue::Int(-42)).as_deref(), Some("-42"));
    assert_eq!(
        render(&ConstantValue::UInt(u64::MAX)).as_deref(),
        Some("18446744073709551615")
    );
    assert_eq!(render(&ConstantValue::Char('x')).as_deref(), Some("'x'"));
    assert_eq!(render(&ConstantValue::Char('\'')).as_deref(), Some("'\\''"));
}

#[test]
fn float_literals_keep_decimal_point() {
    assert_eq!(render(&ConstantValue::float(1.0)).as_deref(), Some("1.0"));
    assert_eq!(render(&ConstantValue::float(2.5)).as_deref(), Some("2.5"));
    assert_eq!(
        render(&ConstantValue::float(f64::NAN)).as_deref(),
        Some("double.NaN")
    );
    assert_eq!(
        render(&ConstantValue::float(f64::INFINITY)).as_deref(),
        Some("double.PositiveInfinity")
    );
    assert_eq!(
        render(&ConstantValue::float(f64::NEG_INFINITY)).as_deref(),
        Some("double.NegativeInfinity")
    );
}

#[test]
fn string_literals_are_escaped() {
    assert_eq!(
        render(&ConstantValue::string("say \"hi\"\\\n")).as_deref(),
        Some(r#""say \"hi\"\\\n""#)
    );
    assert_eq!(
        render(&ConstantValue::string("\u{1}")).as_deref(),
        Some(r#""\u0001""#)
    );
    assert_eq!(render(&ConstantValue::string("it's")).as_deref(), Some("\"it's\""));
}

#[test]
fn line_separators_are_escaped() {
    assert_eq!(
        render(&ConstantValue::string("a\u{2028}b\u{2029}c\u{85}d")).as_deref(),
        Some(r#""a\u2028b\u2029c\u0085d""#)
    );
    assert_eq!(
        render(&ConstantValue::Char('\u{2028}')).as_deref(),
        Some(r"'\u2028'")
    );
}

#[test]
fn enum_members_are_globally_qualified_once() {
    assert_eq!(
        render(&ConstantValue::enum_member("App.Slot", "Main")).as_deref(),
        Some("global::App.Slot.Main")
    );
    assert_eq!(
        render(&ConstantValue::enum_member("global::App.Slot", "Main")).as_deref(),
        Some("global::App.Slot.Main")
    );
}

#[test]
fn type_and_array_literals() {
    assert_eq!(
        render(&ConstantValue::type_of("global::System.String")).as_deref(),
        Some("typeof(global::System.String)")
    );
    let array = ConstantValue::Array {
        element_type: "int".to_string(),
        items: vec![ConstantValue::Int(1), ConstantValue::Int(2)],
    };
    assert_eq!(render(&array).as_deref(), Some("new int[] { 1, 2 }"));
    let empty = ConstantValue::Array {
        element_type: "string".to_string(),
        items: vec![],
    };
    assert_eq!(render(&empty).as_deref(), Some("new string[] { }"));
}

#[test]
fn error_values_have_no_literal() {
    assert_eq!(render(&ConstantValue::Error), None);
    let array = ConstantValue::Array {
        element_type: "int".to_string(),
        items: vec![ConstantValue::Int(1), ConstantValue::Error],
    };
    assert_eq!(render(&array), None);
}

#[test]
fn key_markers_ignore_global_prefix() {
    let mut markers = KeyMarkers::default();
    assert!(markers.contains("Diogen.Generators.KeyedAttribute"));
    assert!(markers.contains(DEFAULT_KEY_MARKER));

    assert!(markers.insert("App.NamedAttribute"));
    assert!(!markers.insert("global::App.NamedAttribute"));
    assert_eq!(markers.len(), 2);
    assert_eq!(
        markers.iter().collect::<Vec<_>>(),
        vec!["App.NamedAttribute", "Diogen.Generators.KeyedAttribute"]
    );

    assert!(markers.remove(DEFAULT_KEY_MARKER));
    assert!(!markers.contains("Diogen.Generators.KeyedAttribute"));
}

#[test]
fn key_markers_collect() {
    let markers: KeyMarkers = ["global::A.KeyAttribute", "B.KeyAttribute"].into_iter().collect();
    assert!(markers.contains("A.KeyAttribute"));
    assert!(markers.contains("global::B.KeyAttribute"));
    assert!(!KeyMarkers::new().contains(DEFAULT_KEY_MARKER));
}

#[test]
fn default_policy() {
    let policy = BuildPolicy::default();
    assert!(policy.accepts_attribute("anything"));
    assert!(policy.is_optional_marker("Diogen.Generators.OptionalAttribute"));
    assert!(policy.is_key_marker(DEFAULT_KEY_MARKER));
    assert_eq!(
        policy.oblivious_optionality,
        ObliviousOptionality::OptionalMarker
    );
}

#[test]
fn aggregate_attribute_identity() {
    let policy = BuildPolicy::default().with_aggregate_attribute("global::App.AggregateAttribute");
    assert!(policy.accepts_attribute("App.AggregateAttribute"));
    assert!(policy.accepts_attribute("global::App.AggregateAttribute"));
    assert!(!policy.accepts_attribute("App.OtherAttribute"));
    assert!(!policy.accepts_attribute(""));
}

#[test]
fn oblivious_flag_spellings() {
    assert_eq!(
        ObliviousOptionality::from_flag("marker"),
        Some(ObliviousOptionality::OptionalMarker)
    );
    assert_eq!(
        ObliviousOptionality::from_flag("required"),
        Some(ObliviousOptionality::Required)
    );
    assert_eq!(
        ObliviousOptionality::from_flag("optional"),
        Some(ObliviousOptionality::Optional)
    );
    assert_eq!(ObliviousOptionality::from_flag("maybe"), None);
}
