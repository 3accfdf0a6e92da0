//! Generator profiles: which attribute drives generation and how keys look.
//!
//! A profile pairs a build policy (aggregate attribute identity, key and
//! optional markers) with an emitter (tool identity, key-attribute syntax).
//! The dependency-injection profile is the default.

use std::sync::Arc;

use aggen_build::BuildPolicy;
use aggen_emit::{CodeEmitter, FromKeyedServices, DEFAULT_TOOL_NAME, DEFAULT_TOOL_VERSION};

/// Aggregate attribute of the dependency-injection profile.
pub const DEPENDENCY_INJECTION_ATTRIBUTE: &str =
    "global::Diogen.Extensions.DependencyInjection.Generators.AggregatedServicesAttribute";

/// Complete generator configuration.
#[derive(Clone, Debug)]
pub struct GeneratorProfile {
    /// Short name for logs and `aggen version`.
    pub name: String,
    pub policy: BuildPolicy,
    pub emitter: CodeEmitter,
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        Self::dependency_injection()
    }
}

impl GeneratorProfile {
    /// `Microsoft.Extensions.DependencyInjection` aggregates with
    /// `[FromKeyedServices]` parameters.
    pub fn dependency_injection() -> Self {
        Self {
            name: "dependency-injection".to_string(),
            policy: BuildPolicy::default().with_aggregate_attribute(DEPENDENCY_INJECTION_ATTRIBUTE),
            emitter: CodeEmitter::new(DEFAULT_TOOL_NAME, DEFAULT_TOOL_VERSION)
                .with_key_syntax(Arc::new(FromKeyedServices)),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: BuildPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_emitter(mut self, emitter: CodeEmitter) -> Self {
        self.emitter = emitter;
        self
    }

    /// The aggregate attribute this profile builds, if restricted.
    pub fn aggregate_attribute(&self) -> Option<&str> {
        self.policy.aggregate_attribute.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dependency_injection() {
        let profile = GeneratorProfile::default();
        assert_eq!(profile.name, "dependency-injection");
        assert_eq!(
            profile.aggregate_attribute(),
            Some(DEPENDENCY_INJECTION_ATTRIBUTE)
        );
        assert!(profile
            .policy
            .accepts_attribute("Diogen.Extensions.DependencyInjection.Generators.AggregatedServicesAttribute"));
        assert_eq!(profile.emitter.tool_name(), DEFAULT_TOOL_NAME);
    }
}
