pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{RunConfig, TomlConfig};

pub use self::core::{
    etl::EtlEngine, mapper::map_columns, pipeline::ConvertPipeline, reader::read_csv,
    transform::transform_rows, writer::output_file_name, writer::write_csv,
};
pub use domain::model::{CanonicalField, ColumnIndexMap, Dataset, Row};
pub use utils::error::{EtlError, Result};
