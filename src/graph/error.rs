use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("duplicate location code: {0}")]
    DuplicateLocation(String),

    #[error("connection references unknown location code: {0}")]
    UnknownLocation(String),

    #[error("connection {0} - {1} must carry a positive distance, got {2}")]
    NonPositiveDistance(String, String, f64),
}
