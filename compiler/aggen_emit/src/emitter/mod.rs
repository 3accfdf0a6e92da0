//! C# emission for one aggregate model.
//!
//! Emission is a fixed sequence of steps over a private [`ScopedWriter`]:
//!
//! ```text
//! header ─ namespace ─ containing scopes ─ [interface scope] ─ attribute
//!        ─ type header ─ parameters ─ base list / where ─ body ─ close
//! ```
//!
//! Output is a pure function of the model and the emitter configuration, so
//! structurally equal models produce byte-identical units.
//!
//! # Salsa Compatibility
//!
//! `GeneratedUnit` has all required traits: Clone, Eq, `PartialEq`, Hash, Debug

mod declaration;

use std::sync::Arc;

use aggen_ir::AggregateInfo;

use crate::key_attribute::{FromKeyedServices, KeyAttributeSyntax};
use crate::unit_name::unit_name;
use crate::ScopedWriter;

/// Tool name stamped into the generated-code attribute by default.
pub const DEFAULT_TOOL_NAME: &str = "Aggen";

/// Tool version stamped into the generated-code attribute by default.
pub const DEFAULT_TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One emitted output file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedUnit {
    /// Deterministic file name, e.g. `App.Services.Dependencies.cs`.
    pub unit_name: String,
    pub text: String,
}

/// Emits models as C# source.
#[derive(Clone, Debug)]
pub struct CodeEmitter {
    tool_name: String,
    tool_version: String,
    key_syntax: Arc<dyn KeyAttributeSyntax>,
}

impl Default for CodeEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL_NAME, DEFAULT_TOOL_VERSION)
    }
}

impl CodeEmitter {
    /// Emitter with the given tool identity and `FromKeyedServices` keys.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            key_syntax: Arc::new(FromKeyedServices),
        }
    }

    #[must_use]
    pub fn with_key_syntax(mut self, key_syntax: Arc<dyn KeyAttributeSyntax>) -> Self {
        self.key_syntax = key_syntax;
        self
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// Emit the companion type for `info`.
    #[tracing::instrument(level = "debug", skip_all, fields(interface = %info.interface_name))]
    pub fn emit(&self, info: &AggregateInfo) -> GeneratedUnit {
        let mut out = ScopedWriter::with_capacity(1024);

        declaration::header(&mut out);
        declaration::namespace(&mut out, info);
        declaration::enclosing_scopes(&mut out, info);
        declaration::generated_code_attribute(&mut out, &self.tool_name, &self.tool_version);
        declaration::type_header(&mut out, info);
        declaration::parameters(&mut out, info, self.key_syntax.as_ref());
        declaration::base_list(&mut out, info);
        declaration::body(&mut out, info);

        let closed = out.close_all_scopes();
        tracing::debug!(scopes = closed, "emitted aggregate");

        GeneratedUnit {
            unit_name: unit_name(info),
            text: out.take_output(),
        }
    }
}
