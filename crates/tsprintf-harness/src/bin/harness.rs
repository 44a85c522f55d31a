//! CLI entrypoint for the contract analysis harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tsprintf_core::scanner::scan;

/// Static format/argument contract analysis for printf-family call sites.
#[derive(Debug, Parser)]
#[command(name = "tsprintf-harness")]
#[command(about = "Checks recorded printf call sites against their format strings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze call-site fixture files and report contract violations.
    Check {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixtures: PathBuf,
        /// Output report path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Emit the report as pretty JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Exit nonzero when any call site has findings.
        #[arg(long)]
        deny: bool,
    },
    /// Decode a format string into its argument requirements.
    Tokens {
        /// Format string to decode.
        format: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            fixtures,
            output,
            json,
            deny,
        } => {
            let mut fixture_paths: Vec<PathBuf> = if fixtures.is_dir() {
                std::fs::read_dir(&fixtures)?
                    .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                    .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
                    .collect()
            } else {
                vec![fixtures.clone()]
            };
            fixture_paths.sort();
            if fixture_paths.is_empty() {
                return Err(format!("no fixture JSON files found in {}", fixtures.display()).into());
            }

            let mut dirty = false;
            let mut body = String::new();
            for path in fixture_paths {
                let set = tsprintf_harness::FixtureSet::from_file(&path)
                    .map_err(|err| format!("failed loading {}: {err}", path.display()))?;
                let report = tsprintf_harness::analyze_set(&set);
                dirty |= !report.all_clean();
                if json {
                    body.push_str(&report.to_json()?);
                    body.push('\n');
                } else {
                    body.push_str(&report.to_text());
                }
            }

            if let Some(path) = output {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, &body)?;
                eprintln!("Wrote report to {}", path.display());
            } else {
                print!("{body}");
            }

            if deny && dirty {
                return Err("contract violations found".into());
            }
        }
        Command::Tokens { format } => {
            let stream = scan(&format);
            if stream.is_empty() {
                println!("(no arguments consumed)");
            } else {
                for (index, id) in stream.decode().into_iter().enumerate() {
                    println!("{index}: {id}");
                }
            }
        }
    }

    Ok(())
}
