//! Indentation-aware text buffer with scope tracking.
//!
//! Indentation is four spaces per level. Brace scopes opened with
//! [`ScopedWriter::open_scope`] are counted so that every opened scope is
//! closed exactly once by [`ScopedWriter::close_all_scopes`].

const INDENT: &str = "    ";

/// Text output with an indent level and an open-scope counter.
#[derive(Debug, Default)]
pub struct ScopedWriter {
    output: String,
    indent: usize,
    open_scopes: usize,
}

impl ScopedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// Write indentation for the current level.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
    }

    /// Write text as-is.
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write an indented line.
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Write `{` on its own line and enter the scope.
    pub fn open_scope(&mut self) {
        self.writeln("{");
        self.indent();
        self.open_scopes += 1;
    }

    /// Leave the innermost scope, writing its `}`.
    pub fn close_scope(&mut self) {
        debug_assert!(self.open_scopes > 0, "close_scope with no open scope");
        if self.open_scopes == 0 {
            return;
        }
        self.open_scopes -= 1;
        self.dedent();
        self.writeln("}");
    }

    /// Close every open scope, innermost first. Returns how many were closed.
    pub fn close_all_scopes(&mut self) -> usize {
        let closed = self.open_scopes;
        while self.open_scopes > 0 {
            self.close_scope();
        }
        debug_assert_eq!(self.indent, 0, "indentation left open after closing scopes");
        closed
    }

    /// Number of scopes currently open.
    pub fn scope_depth(&self) -> usize {
        self.open_scopes
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

#[cfg(test)]
mod tests;
