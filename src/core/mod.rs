pub mod etl;
pub mod mapper;
pub mod pipeline;
pub mod reader;
pub mod transform;
pub mod writer;

pub use crate::domain::model::{CanonicalField, ColumnIndexMap, Dataset, Row};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
