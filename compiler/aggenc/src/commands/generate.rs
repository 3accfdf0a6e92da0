//! The `generate` command: emit units for every declaration in the inputs.

use std::io::Write;
use std::path::Path;

use aggen_emit::GeneratedUnit;

use super::{declaration_key, load_facts, CliError, CliResult, GenerateOptions};
use crate::generator::{Generator, RunStats};

/// What a `generate` invocation did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub stats: RunStats,
    /// Units written (or, with `--check`, found up to date).
    pub units: Vec<String>,
    /// Units whose file already had the exact text; not rewritten.
    pub unchanged: usize,
}

/// Load every input and emit, writing to `options.output` or `out`.
pub fn generate_files(options: &GenerateOptions, out: &mut dyn Write) -> CliResult<GenerateReport> {
    let mut generator = Generator::new(options.profile());
    for path in &options.inputs {
        for (index, facts) in load_facts(path)?.into_iter().enumerate() {
            generator.upsert(declaration_key(path, index), facts);
        }
    }

    let run = generator.run();
    let mut report = GenerateReport {
        stats: run.stats,
        units: run.units.iter().map(|u| u.unit_name.clone()).collect(),
        unchanged: 0,
    };

    match &options.output {
        None => print_units(&run.units, out)?,
        Some(dir) if options.check => check_units(dir, &run.units)?,
        Some(dir) => report.unchanged = write_units(dir, &run.units)?,
    }
    Ok(report)
}

fn stdout_error(source: std::io::Error) -> CliError {
    CliError::Io {
        path: "<stdout>".into(),
        source,
    }
}

fn print_units(units: &[GeneratedUnit], out: &mut dyn Write) -> CliResult<()> {
    for unit in units {
        writeln!(out, "// {}", unit.unit_name).map_err(stdout_error)?;
        out.write_all(unit.text.as_bytes()).map_err(stdout_error)?;
    }
    Ok(())
}

/// Write units, skipping files whose content is already identical.
fn write_units(dir: &Path, units: &[GeneratedUnit]) -> CliResult<usize> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut unchanged = 0;
    for unit in units {
        let path = dir.join(&unit.unit_name);
        if std::fs::read_to_string(&path).is_ok_and(|existing| existing == unit.text) {
            unchanged += 1;
            continue;
        }
        std::fs::write(&path, &unit.text).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote unit");
    }
    Ok(unchanged)
}

/// Fail with every unit whose file is missing or differs.
fn check_units(dir: &Path, units: &[GeneratedUnit]) -> CliResult<()> {
    let stale: Vec<String> = units
        .iter()
        .filter(|unit| {
            std::fs::read_to_string(dir.join(&unit.unit_name))
                .map_or(true, |existing| existing != unit.text)
        })
        .map(|unit| unit.unit_name.clone())
        .collect();

    if stale.is_empty() {
        Ok(())
    } else {
        Err(CliError::Stale { units: stale })
    }
}
