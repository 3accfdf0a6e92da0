//! Aggen CLI
//!
//! Generates aggregate implementations from declaration facts files.

use aggenc::commands::{generate_files, model_json, parse_generate_options, CliError};
use aggenc::GeneratorProfile;

fn main() {
    aggenc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "generate" | "gen" => {
            if args.len() < 3 {
                eprintln!("Usage: aggen generate <facts.json>... [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -o, --out <dir>           Write units to <dir> (default: stdout)");
                eprintln!("  --check                   Fail if units in <dir> are out of date");
                eprintln!("  --key-marker=<attr>       Also treat <attr> as a key marker");
                eprintln!("  --optional-marker=<attr>  Optional marker attribute");
                eprintln!("  --oblivious=<mode>        Oblivious properties: marker, required, optional");
                eprintln!("  --any-attribute           Build regardless of the aggregate attribute");
                std::process::exit(1);
            }

            let options = parse_generate_options(&args[2..]).unwrap_or_else(|err| fail(&err));
            let mut stdout = std::io::stdout().lock();
            match generate_files(&options, &mut stdout) {
                Ok(report) => {
                    if options.output.is_some() {
                        let verb = if options.check { "checked" } else { "generated" };
                        eprintln!(
                            "{verb} {} unit(s) ({} unchanged, {} duplicate, {} excluded, {} collision)",
                            report.units.len(),
                            report.unchanged,
                            report.stats.duplicates,
                            report.stats.excluded,
                            report.stats.collisions,
                        );
                    }
                }
                Err(err) => fail(&err),
            }
        }
        "model" => {
            if args.len() < 3 {
                eprintln!("Usage: aggen model <facts.json>... [policy options]");
                std::process::exit(1);
            }

            let options = parse_generate_options(&args[2..]).unwrap_or_else(|err| fail(&err));
            match model_json(&options) {
                Ok(json) => println!("{json}"),
                Err(err) => fail(&err),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Aggen {}", env!("CARGO_PKG_VERSION"));
            println!("Profile: {}", GeneratorProfile::default().name);
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(err: &CliError) -> ! {
    eprintln!("error: {err}");
    if matches!(err, CliError::Usage(_)) {
        eprintln!("Run `aggen help` for usage.");
    }
    std::process::exit(1);
}

fn print_usage() {
    println!("Aggen (aggregate interface generator)");
    println!();
    println!("Usage: aggen <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <facts.json>...  Emit a partial type per aggregate interface");
    println!("  model <facts.json>...     Print the built models as JSON");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Generate options:");
    println!("  -o, --out <dir>           Write units to <dir> (default: stdout)");
    println!("  --check                   Fail if units in <dir> are out of date");
    println!();
    println!("Policy options (generate and model):");
    println!("  --key-marker=<attr>       Also treat <attr> as a key marker");
    println!("  --optional-marker=<attr>  Optional marker attribute");
    println!("  --oblivious=<mode>        Oblivious properties: marker, required, optional");
    println!("  --any-attribute           Build regardless of the aggregate attribute");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=aggen=debug      Enable tracing output on stderr");
    println!("  AGGEN_LOG_TREE=1          Render spans as a tree");
    println!();
    println!("Examples:");
    println!("  aggen generate facts.json                # Print units to stdout");
    println!("  aggen generate facts.json -o Generated   # Write Generated/*.cs");
    println!("  aggen generate facts.json -o Generated --check");
    println!("  aggen model facts.json --oblivious=required");
}
