use crate::core::fitness::FitnessError;
use crate::core::models::error::ModelError;
use crate::core::sampling::SamplingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unsupported docking strategy '{strategy}': no placement procedure is implemented")]
    UnsupportedStrategy { strategy: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Point sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Structure model error: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Fitness setup failed: {source}")]
    Fitness {
        #[from]
        source: FitnessError,
    },
}
