//! Rate card loading and validation errors
use ongkir_core::ShippingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateCardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid rate card: {}", .problems.join("; "))]
    Invalid { problems: Vec<String> },
}

impl From<RateCardError> for ShippingError {
    fn from(err: RateCardError) -> Self {
        ShippingError::RateCard(err.to_string())
    }
}
