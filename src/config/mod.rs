pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::validation::{self, Validate};
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "order-extract")]
#[command(about = "Extracts donor fields from a JSON order export into a CSV table")]
pub struct CliConfig {
    /// Path to the input JSON order export
    pub input: String,

    /// Path to the output CSV file
    pub output: String,

    /// Only keep transactions from this year (format: YYYY)
    pub year: Option<String>,

    #[arg(long, help = "Overwrite the output file without asking")]
    pub force: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn filter_year(&self) -> Option<&str> {
        self.year.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output", &self.output)?;

        if let Some(year) = &self.year {
            validation::validate_year("year", year)?;
        }

        Ok(())
    }
}
