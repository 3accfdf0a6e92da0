use pretty_assertions::assert_eq;

use aggen_ir::{
    Accessibility, AggregateInfo, ContainingType, ContainingTypeKind, GeneratedTypeKind,
    GeneratedTypeLocation, GenerationOptions, MemoSeq, TypeParameter,
};

use super::unit_name;

fn info(namespace: &str) -> AggregateInfo {
    AggregateInfo {
        namespace: namespace.to_string(),
        interface_name: "IDependencies".to_string(),
        containing_types: MemoSeq::empty(),
        type_parameters: MemoSeq::empty(),
        dependencies: MemoSeq::empty(),
        options: GenerationOptions::default(),
    }
}

fn located(location: GeneratedTypeLocation, custom_name: Option<&str>) -> GenerationOptions {
    GenerationOptions::new(
        custom_name,
        Accessibility::Public,
        false,
        GeneratedTypeKind::Record,
        location,
    )
}

#[test]
fn top_level_in_namespace() {
    assert_eq!(
        unit_name(&info("global::Test.Diogen.Generators.AggregatedServices")),
        "Test.Diogen.Generators.AggregatedServices.Dependencies.cs"
    );
}

#[test]
fn global_namespace() {
    assert_eq!(unit_name(&info("")), "Dependencies.cs");
}

#[test]
fn generic_arity_suffix() {
    let mut info = info("global::Test");
    info.type_parameters = ["T1", "T2", "T3"]
        .into_iter()
        .map(TypeParameter::unconstrained)
        .collect();
    assert_eq!(unit_name(&info), "Test.Dependencies`3.cs");
}

#[test]
fn containing_types_with_arity() {
    let mut info = info("global::Test.Services");
    info.containing_types = vec![
        ContainingType::new(ContainingTypeKind::Class, false, "Class", Vec::<TypeParameter>::new()),
        ContainingType::new(
            ContainingTypeKind::Struct,
            true,
            "RecordStruct",
            vec![TypeParameter::unconstrained("T")],
        ),
    ]
    .into();
    assert_eq!(
        unit_name(&info),
        "Test.Services.Class.RecordStruct`1.Dependencies.cs"
    );

    info.options = located(GeneratedTypeLocation::TopLevel, None);
    assert_eq!(
        unit_name(&info),
        "Test.Services.Class.RecordStruct`1.Dependencies.cs"
    );
}

#[test]
fn nested_includes_interface_and_drops_generated_arity() {
    let mut info = info("global::Test");
    info.type_parameters = vec![TypeParameter::unconstrained("T")].into();
    info.options = located(GeneratedTypeLocation::Nested, Some("Impl"));
    assert_eq!(unit_name(&info), "Test.IDependencies`1.Impl.cs");
}
