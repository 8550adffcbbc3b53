use crate::core::mapper::map_columns;
use crate::core::reader::read_csv;
use crate::core::transform::transform_rows;
use crate::core::writer::{output_file_name, write_csv};
use crate::core::{ConfigProvider, Dataset, Pipeline};
use crate::utils::error::{EtlError, Result};
use std::path::PathBuf;

/// Bank export in, YNAB import file out.
pub struct ConvertPipeline<C: ConfigProvider> {
    config: C,
    timestamp: i64,
}

impl<C: ConfigProvider> ConvertPipeline<C> {
    /// `timestamp` (unix seconds) names the output file.
    pub fn new(config: C, timestamp: i64) -> Self {
        Self { config, timestamp }
    }

    pub fn output_path(&self) -> PathBuf {
        self.config
            .output_dir()
            .join(output_file_name(self.config.file_prefix(), self.timestamp))
    }
}

impl<C: ConfigProvider> Pipeline for ConvertPipeline<C> {
    fn extract(&self) -> Result<Dataset> {
        tracing::debug!("Reading {}", self.config.input_path().display());
        read_csv(self.config.input_path())
    }

    fn transform(&self, data: Dataset) -> Result<Dataset> {
        let header = data.header().ok_or_else(|| EtlError::EmptyInput {
            path: self.config.input_path().display().to_string(),
        })?;

        let indices = map_columns(header.as_slice())?;
        for (field, index) in indices.iter() {
            tracing::debug!("{} <- column {} ({})", field, index, field.source_name());
        }

        transform_rows(&indices, data.records())
    }

    fn load(&self, data: Dataset) -> Result<PathBuf> {
        let output_path = self.output_path();
        write_csv(&output_path, &data)?;
        Ok(output_path)
    }
}
