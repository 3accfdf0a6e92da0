//! The individual emission steps.

use aggen_ir::naming::{strip_global_prefix, to_parameter_name};
use aggen_ir::{AggregateInfo, DependencyInfo, GeneratedTypeLocation, TypeParameter};

use crate::key_attribute::KeyAttributeSyntax;
use crate::ScopedWriter;

const HEADER: [&str; 8] = [
    "// <auto-generated/>",
    "",
    "#nullable enable annotations",
    "#nullable disable warnings",
    "",
    "// Suppress warnings about [Obsolete] member usage in generated code.",
    "#pragma warning disable CS0612, CS0618",
    "",
];

pub(super) fn header(out: &mut ScopedWriter) {
    for line in HEADER {
        out.writeln(line);
    }
}

pub(super) fn namespace(out: &mut ScopedWriter, info: &AggregateInfo) {
    if let Some(ns) = info.declared_namespace() {
        out.writeln(&format!("namespace {ns};"));
        out.newline();
    }
}

/// `<T1, T2>`, or nothing for an empty list.
fn type_parameter_list(out: &mut ScopedWriter, params: &[TypeParameter]) {
    if params.is_empty() {
        return;
    }
    out.write("<");
    for (i, tp) in params.iter().enumerate() {
        if i > 0 {
            out.write(", ");
        }
        out.write(&tp.name);
    }
    out.write(">");
}

/// Re-open the containing types and, for nested output, the interface.
pub(super) fn enclosing_scopes(out: &mut ScopedWriter, info: &AggregateInfo) {
    if info.options.location == GeneratedTypeLocation::TopLevel {
        return;
    }

    for containing in info.containing_types.iter() {
        out.write_indent();
        out.write("partial ");
        if containing.renders_as_record() {
            out.write("record ");
        }
        out.write(containing.kind.keyword());
        out.write(" ");
        out.write(&containing.name);
        type_parameter_list(out, &containing.type_parameters);
        out.newline();
        out.open_scope();
    }

    if info.options.is_nested() {
        out.write_indent();
        out.write("partial interface ");
        out.write(&info.interface_name);
        type_parameter_list(out, &info.type_parameters);
        out.newline();
        out.open_scope();
    }
}

pub(super) fn generated_code_attribute(out: &mut ScopedWriter, tool_name: &str, tool_version: &str) {
    out.writeln(&format!(
        "[global::System.CodeDom.Compiler.GeneratedCodeAttribute(\"{tool_name}\", \"{tool_version}\")]"
    ));
}

pub(super) fn type_header(out: &mut ScopedWriter, info: &AggregateInfo) {
    let options = &info.options;
    out.write_indent();
    out.write(options.accessibility.modifier());
    if options.is_sealed {
        out.write("sealed ");
    }
    out.write("partial ");
    out.write(options.kind.keyword());
    out.write(" ");
    out.write(info.generated_name());
    // Nested output sees the interface's parameters from the enclosing scope.
    if !options.is_nested() {
        type_parameter_list(out, &info.type_parameters);
    }
    out.write("(");
    out.newline();
}

fn parameter_name(dependency: &DependencyInfo, camel_case: bool) -> String {
    if camel_case {
        to_parameter_name(&dependency.name)
    } else {
        dependency.name.clone()
    }
}

fn nullable_marker(dependency: &DependencyInfo) -> &'static str {
    if dependency.optional {
        "?"
    } else {
        ""
    }
}

pub(super) fn parameters(out: &mut ScopedWriter, info: &AggregateInfo, keys: &dyn KeyAttributeSyntax) {
    let camel_case = info.options.is_class();
    let count = info.dependencies.len();

    out.indent();
    for (i, dependency) in info.dependencies.iter().enumerate() {
        out.write_indent();
        if let Some(key) = &dependency.key {
            keys.write_key_attribute(out, key);
        }
        out.write(&dependency.type_name);
        out.write(nullable_marker(dependency));
        out.write(" ");
        out.write(&parameter_name(dependency, camel_case));
        if dependency.optional {
            out.write(" = null");
        }
        if i + 1 < count {
            out.write(",");
        }
        out.newline();
    }
    out.dedent();
}

/// `) : Ns.Outer<T>.IName<T>` plus one `where` line per constrained parameter.
pub(super) fn base_list(out: &mut ScopedWriter, info: &AggregateInfo) {
    out.write_indent();
    out.write(") : ");

    let ns = info.namespace.trim();
    if !strip_global_prefix(ns).is_empty() {
        out.write(ns);
        out.write(".");
    }
    for containing in info.containing_types.iter() {
        out.write(&containing.name);
        type_parameter_list(out, &containing.type_parameters);
        out.write(".");
    }
    out.write(&info.interface_name);
    type_parameter_list(out, &info.type_parameters);

    if info.options.is_nested() {
        return;
    }

    for tp in info.type_parameters.iter().filter(|tp| tp.is_constrained()) {
        out.newline();
        out.indent();
        out.write_indent();
        out.write("where ");
        out.write(&tp.name);
        out.write(" : ");
        out.write(&tp.constraints.join(", "));
        out.dedent();
    }
}

/// Record: terminate the declaration. Class: explicit get-only properties.
pub(super) fn body(out: &mut ScopedWriter, info: &AggregateInfo) {
    if !info.options.is_class() {
        out.write(";");
        out.newline();
        return;
    }

    out.newline();
    out.open_scope();
    for dependency in info.dependencies.iter() {
        out.writeln(&format!(
            "public {}{} {} {{ get; }} = {};",
            dependency.type_name,
            nullable_marker(dependency),
            dependency.name,
            parameter_name(dependency, true),
        ));
    }
    out.close_scope();
}
