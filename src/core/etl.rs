use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<PathBuf> {
        tracing::info!("Starting conversion");

        // Extract
        let raw_data = self.pipeline.extract()?;
        tracing::info!("Extracted {} data row(s)", raw_data.records().len());

        // Transform
        let transformed = self.pipeline.transform(raw_data)?;
        tracing::info!("Transformed {} data row(s)", transformed.records().len());

        // Load
        let output_path = self.pipeline.load(transformed)?;
        tracing::info!("Output saved to: {}", output_path.display());

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dataset;
    use crate::utils::error::EtlError;
    use std::cell::RefCell;

    struct MockPipeline {
        rows: Vec<Vec<String>>,
        fail_transform: bool,
        loaded: RefCell<Option<Dataset>>,
    }

    impl Pipeline for MockPipeline {
        fn extract(&self) -> Result<Dataset> {
            Ok(Dataset::new(self.rows.clone()))
        }

        fn transform(&self, data: Dataset) -> Result<Dataset> {
            if self.fail_transform {
                return Err(EtlError::MissingColumnError {
                    columns: vec!["Bedrag".to_string()],
                });
            }
            Ok(data)
        }

        fn load(&self, data: Dataset) -> Result<PathBuf> {
            *self.loaded.borrow_mut() = Some(data);
            Ok(PathBuf::from("ynab_0.csv"))
        }
    }

    fn mock(fail_transform: bool) -> MockPipeline {
        MockPipeline {
            rows: vec![vec!["h".to_string()], vec!["v".to_string()]],
            fail_transform,
            loaded: RefCell::new(None),
        }
    }

    #[test]
    fn test_run_loads_transformed_data() {
        let engine = EtlEngine::new(mock(false));
        assert_eq!(engine.run().unwrap(), PathBuf::from("ynab_0.csv"));
        assert_eq!(engine.pipeline.loaded.borrow().as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_run_skips_load_after_failure() {
        let engine = EtlEngine::new(mock(true));
        assert!(engine.run().is_err());
        assert!(engine.pipeline.loaded.borrow().is_none());
    }
}
