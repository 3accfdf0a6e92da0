//! One-shot parallel generation without a database.
//!
//! For callers that hold a complete set of facts and want every unit once,
//! with no incremental state kept. Models are built and emitted on the rayon
//! pool; deduplication runs sequentially between the two so the result
//! depends only on input order.

use aggen_build::RawFacts;
use aggen_emit::GeneratedUnit;
use aggen_ir::AggregateInfo;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::profile::GeneratorProfile;

/// Generate one unit per distinct model, in first-seen input order.
///
/// Same rules as `Generator::run`: equal models emit once, and a distinct
/// model whose unit name is already taken is dropped with a warning.
#[tracing::instrument(level = "debug", skip_all, fields(declarations = facts.len()))]
pub fn generate_all(profile: &GeneratorProfile, facts: &[RawFacts]) -> Vec<GeneratedUnit> {
    let built: Vec<Option<AggregateInfo>> = facts
        .par_iter()
        .map(|raw| aggen_build::build(raw, &profile.policy))
        .collect();

    let mut seen: FxHashSet<&AggregateInfo> = FxHashSet::default();
    let distinct: Vec<&AggregateInfo> = built
        .iter()
        .flatten()
        .filter(|info| seen.insert(*info))
        .collect();

    let emitted: Vec<GeneratedUnit> = distinct
        .par_iter()
        .map(|info| profile.emitter.emit(info))
        .collect();

    let mut claimed: FxHashSet<String> = FxHashSet::default();
    let units: Vec<GeneratedUnit> = emitted
        .into_iter()
        .filter(|unit| {
            let fresh = claimed.insert(unit.unit_name.clone());
            if !fresh {
                tracing::warn!(
                    unit = %unit.unit_name,
                    "unit name collision between distinct models; keeping the first"
                );
            }
            fresh
        })
        .collect();

    tracing::debug!(emitted = units.len(), "batch generation finished");
    units
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use aggen_build::facts::{AttributeFacts, PropertyFacts, SymbolKind};

    use super::*;
    use crate::profile::DEPENDENCY_INJECTION_ATTRIBUTE;
    use crate::Generator;

    fn facts(namespace: &str, interface: &str) -> RawFacts {
        RawFacts::new(namespace, interface)
            .with_attribute(AttributeFacts::new(DEPENDENCY_INJECTION_ATTRIBUTE))
            .with_property(PropertyFacts::new("Clock", "global::App.IClock"))
    }

    fn names(units: &[GeneratedUnit]) -> Vec<&str> {
        units.iter().map(|u| u.unit_name.as_str()).collect()
    }

    #[test]
    fn keeps_input_order() {
        let input = vec![
            facts("global::Zeta", "IDependencies"),
            facts("global::Alpha", "IDependencies"),
            facts("global::Mid", "IServices"),
        ];
        let units = generate_all(&GeneratorProfile::default(), &input);
        assert_eq!(
            names(&units),
            vec!["Zeta.Dependencies.cs", "Alpha.Dependencies.cs", "Mid.Services.cs"]
        );
    }

    #[test]
    fn drops_duplicates_and_exclusions() {
        let mut broken = facts("global::App", "IBroken");
        broken.symbol = SymbolKind::Error;
        let input = vec![
            facts("global::App", "IDependencies"),
            broken,
            facts("global::App", "IDependencies"),
        ];
        let units = generate_all(&GeneratorProfile::default(), &input);
        assert_eq!(names(&units), vec!["App.Dependencies.cs"]);
    }

    #[test]
    fn collision_keeps_first() {
        let input = vec![
            facts("global::App", "IDependencies"),
            facts("global::App", "IDependencies")
                .with_property(PropertyFacts::new("Logger", "global::App.ILogger")),
        ];
        let units = generate_all(&GeneratorProfile::default(), &input);
        assert_eq!(units.len(), 1);
        assert!(!units[0].text.contains("Logger"));
    }

    #[test]
    fn agrees_with_incremental_generator() {
        let input = vec![
            facts("global::A", "IDependencies"),
            facts("global::B", "IDependencies"),
        ];
        let mut generator = Generator::default();
        for (i, raw) in input.iter().enumerate() {
            generator.upsert(format!("decl#{i}"), raw.clone());
        }
        assert_eq!(
            generate_all(&GeneratorProfile::default(), &input),
            generator.run().units
        );
    }

    #[test]
    fn empty_input() {
        assert!(generate_all(&GeneratorProfile::default(), &[]).is_empty());
    }
}
