//! Option parsing for `aggen generate` and `aggen model`.

use std::path::PathBuf;

use aggen_build::policy::ObliviousOptionality;

use super::{CliError, CliResult};
use crate::profile::GeneratorProfile;

/// Everything after the subcommand name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Facts files, in command-line order.
    pub inputs: Vec<PathBuf>,
    /// Output directory; units go to stdout when unset.
    pub output: Option<PathBuf>,
    /// Compare against existing files instead of writing.
    pub check: bool,
    /// Extra key-marker attributes.
    pub key_markers: Vec<String>,
    pub optional_marker: Option<String>,
    pub oblivious: Option<ObliviousOptionality>,
    /// Build every declaration regardless of its attribute type.
    pub any_attribute: bool,
}

impl GenerateOptions {
    /// The default profile with these options applied.
    pub fn profile(&self) -> GeneratorProfile {
        let profile = GeneratorProfile::default();
        let mut policy = profile.policy.clone();
        for marker in &self.key_markers {
            policy = policy.with_key_marker(marker);
        }
        if let Some(marker) = &self.optional_marker {
            policy = policy.with_optional_marker(marker.clone());
        }
        if let Some(mode) = self.oblivious {
            policy = policy.with_oblivious_optionality(mode);
        }
        if self.any_attribute {
            policy.aggregate_attribute = None;
        }
        profile.with_policy(policy)
    }
}

fn value<'a>(flag: &str, arg: Option<&'a String>) -> CliResult<&'a str> {
    match arg {
        Some(v) if !v.is_empty() => Ok(v.as_str()),
        _ => Err(CliError::Usage(format!("{flag} requires a value"))),
    }
}

/// Parse arguments, handling `-o` specially (needs lookahead).
pub fn parse_generate_options(args: &[String]) -> CliResult<GenerateOptions> {
    let mut options = GenerateOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-o" || arg == "--out" {
            options.output = Some(PathBuf::from(value(arg, args.get(i + 1))?));
            i += 2;
            continue;
        }
        if let Some(dir) = arg.strip_prefix("--out=") {
            options.output = Some(PathBuf::from(dir));
        } else if arg == "--check" {
            options.check = true;
        } else if arg == "--any-attribute" {
            options.any_attribute = true;
        } else if let Some(marker) = arg.strip_prefix("--key-marker=") {
            options.key_markers.push(marker.to_string());
        } else if let Some(marker) = arg.strip_prefix("--optional-marker=") {
            options.optional_marker = Some(marker.to_string());
        } else if let Some(flag) = arg.strip_prefix("--oblivious=") {
            let mode = ObliviousOptionality::from_flag(flag).ok_or_else(|| {
                CliError::Usage(format!(
                    "unknown --oblivious mode '{flag}' (expected marker, required or optional)"
                ))
            })?;
            options.oblivious = Some(mode);
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else {
            options.inputs.push(PathBuf::from(arg));
        }
        i += 1;
    }

    if options.inputs.is_empty() {
        return Err(CliError::Usage("no facts files given".to_string()));
    }
    if options.check && options.output.is_none() {
        return Err(CliError::Usage("--check needs an output directory (-o)".to_string()));
    }
    Ok(options)
}
