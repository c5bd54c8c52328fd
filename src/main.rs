use anyhow::Result;
use clap::Parser;
use codemend::cli::{Cli, Commands, OutputFormat};
use codemend::commands::fix::{run_fix, FixConfig};
use codemend::io::output::write_json_report;
use std::fs::File;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fix {
            path,
            format,
            output,
            quality_only,
            security_only,
            skip_artifacts,
        } => {
            let config = FixConfig {
                root: path,
                quality_only,
                security_only,
                skip_artifacts,
                // The streaming console report and the JSON report are
                // alternatives, not layers.
                quiet: format == OutputFormat::Json,
            };

            let report = run_fix(&config)?;

            if format == OutputFormat::Json {
                match output {
                    Some(path) => {
                        let mut file = File::create(&path)?;
                        write_json_report(&mut file, &report)?;
                    }
                    None => {
                        let stdout = std::io::stdout();
                        write_json_report(&mut stdout.lock(), &report)?;
                    }
                }
            } else if let Some(path) = output {
                let mut file = File::create(&path)?;
                write_json_report(&mut file, &report)?;
            }

            // Per-file errors are reported, not escalated; only a
            // top-level fault (propagated above) fails the process.
            let _ = std::io::stdout().flush();
            Ok(())
        }
    }
}
