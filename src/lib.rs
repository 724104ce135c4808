pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::pipeline::{EtlEngine, ExportPipeline};
pub use domain::model::{FlatRecord, OrderRecord, RunOutcome};
pub use utils::error::{ExtractError, Result};
