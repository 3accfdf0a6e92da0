use pretty_assertions::assert_eq;

use super::ScopedWriter;

#[test]
fn indent_dedent() {
    let mut w = ScopedWriter::new();
    w.writeln("line1");
    w.indent();
    w.writeln("line2");
    w.indent();
    w.writeln("line3");
    w.dedent();
    w.writeln("line4");
    w.dedent();
    w.writeln("line5");

    assert_eq!(
        w.take_output(),
        "line1\n    line2\n        line3\n    line4\nline5\n"
    );
}

#[test]
fn write_and_newline_do_not_indent() {
    let mut w = ScopedWriter::new();
    w.indent();
    w.write_indent();
    w.write("a");
    w.write("b");
    w.newline();
    w.dedent();
    assert_eq!(w.as_str(), "    ab\n");
}

#[test]
fn nested_scopes_close_in_reverse() {
    let mut w = ScopedWriter::new();
    w.writeln("partial class Outer");
    w.open_scope();
    w.writeln("partial struct Inner");
    w.open_scope();
    w.writeln("x;");
    assert_eq!(w.scope_depth(), 2);

    assert_eq!(w.close_all_scopes(), 2);
    assert_eq!(w.scope_depth(), 0);
    assert_eq!(w.indent_level(), 0);
    assert_eq!(
        w.take_output(),
        "partial class Outer\n{\n    partial struct Inner\n    {\n        x;\n    }\n}\n"
    );
}

#[test]
fn close_scope_pops_one_level() {
    let mut w = ScopedWriter::new();
    w.open_scope();
    w.open_scope();
    w.close_scope();
    assert_eq!(w.scope_depth(), 1);
    assert_eq!(w.close_all_scopes(), 1);
    assert_eq!(w.take_output(), "{\n    {\n    }\n}\n");
}

#[test]
fn closing_nothing_is_a_no_op() {
    let mut w = ScopedWriter::with_capacity(16);
    w.writeln("x");
    assert_eq!(w.close_all_scopes(), 0);
    assert_eq!(w.take_output(), "x\n");
    assert_eq!(w.take_output(), "");
}
