//! The `model` command: dump the built models as JSON.

use aggen_ir::AggregateInfo;
use serde::Serialize;

use super::{declaration_key, load_facts, CliError, CliResult, GenerateOptions};
use crate::generator::Generator;

#[derive(Serialize)]
struct ModelEntry {
    declaration: String,
    /// `null` for declarations that do not build.
    model: Option<AggregateInfo>,
    fingerprint: Option<String>,
}

/// Models of every declaration in the inputs, pretty-printed.
pub fn model_json(options: &GenerateOptions) -> CliResult<String> {
    let mut generator = Generator::new(options.profile());
    let mut keys = Vec::new();
    for path in &options.inputs {
        for (index, facts) in load_facts(path)?.into_iter().enumerate() {
            let key = declaration_key(path, index);
            generator.upsert(key.clone(), facts);
            keys.push(key);
        }
    }

    let entries: Vec<ModelEntry> = keys
        .into_iter()
        .map(|declaration| {
            let model = generator.model(&declaration);
            let fingerprint = model.as_ref().map(|m| format!("{:016x}", m.fingerprint()));
            ModelEntry {
                declaration,
                model,
                fingerprint,
            }
        })
        .collect();

    serde_json::to_string_pretty(&entries).map_err(|source| CliError::Json {
        path: "<models>".into(),
        source,
    })
}
