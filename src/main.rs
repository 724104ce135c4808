use anyhow::Context;
use clap::Parser;
use order_extract::utils::{logger, validation::Validate};
use order_extract::{CliConfig, EtlEngine, ExportPipeline, LocalStorage, RunOutcome};
use std::io::{BufRead, Write};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting order-extract");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if !Path::new(&config.input).exists() {
        eprintln!("❌ Input file does not exist: {}", config.input);
        std::process::exit(1);
    }

    if Path::new(&config.output).exists() && !config.force {
        let stdin = std::io::stdin();
        if !confirm_overwrite(stdin.lock(), &config.output)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let storage = LocalStorage::new();
    let filter_year = config.year.clone();
    let pipeline = ExportPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(RunOutcome::Written { path, rows }) => {
            tracing::info!("Extraction completed successfully");
            println!("✅ Extraction successful! CSV file created: {}", path);
            println!("📄 Entries written: {}", rows);
            if let Some(year) = filter_year {
                println!("🔎 Filter applied: year {}", year);
            }
        }
        Ok(RunOutcome::Empty) => match filter_year {
            Some(year) => println!("No transactions found for year {}.", year),
            None => println!("No transactions found."),
        },
        Err(e) => {
            tracing::error!("Extraction failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

/// Asks whether an existing output file may be overwritten. Only an
/// explicit `y` (any case) counts as consent.
fn confirm_overwrite<R: BufRead>(mut input: R, path: &str) -> anyhow::Result<bool> {
    print!("The file {} already exists. Overwrite it? (y/n) ", path);
    std::io::stdout()
        .flush()
        .context("failed to flush the overwrite prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("failed to read the overwrite confirmation")?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
