use crate::domain::model::Dataset;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_dir(&self) -> &Path;
    fn file_prefix(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Dataset>;
    fn transform(&self, data: Dataset) -> Result<Dataset>;
    fn load(&self, data: Dataset) -> Result<PathBuf>;
}
