use crate::core::{extract_records, parse_orders, writer, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{FlatRecord, OrderRecord, RunOutcome};
use crate::utils::error::Result;

pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    fn extract(&self) -> Result<Vec<OrderRecord>> {
        tracing::debug!("Reading order export from: {}", self.config.input_path());
        let text = self.storage.read_file(self.config.input_path())?;
        parse_orders(&text)
    }

    fn transform(&self, orders: Vec<OrderRecord>) -> Result<Vec<FlatRecord>> {
        if let Some(year) = self.config.filter_year() {
            tracing::debug!("Applying year filter: {}", year);
        }
        Ok(extract_records(&orders, self.config.filter_year()))
    }

    fn load(&self, records: Vec<FlatRecord>) -> Result<String> {
        let csv_content = writer::csv_to_string(&records)?;

        let output_path = self.config.output_path().to_string();
        tracing::debug!(
            "Writing CSV ({} bytes) to: {}",
            csv_content.len(),
            output_path
        );
        self.storage.write_file(&output_path, csv_content.as_bytes())?;

        Ok(output_path)
    }
}

/// Drives a pipeline end to end. Zero surviving rows short-circuits before
/// `load`: no header-only file is ever written, and the run still counts
/// as a success.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Extracting order records...");
        let orders = self.pipeline.extract()?;
        tracing::info!("Extracted {} order records", orders.len());

        tracing::info!("Flattening and filtering...");
        let records = self.pipeline.transform(orders)?;
        tracing::info!("Retained {} records", records.len());

        if records.is_empty() {
            return Ok(RunOutcome::Empty);
        }

        let rows = records.len();
        let path = self.pipeline.load(records)?;

        Ok(RunOutcome::Written { path, rows })
    }
}
