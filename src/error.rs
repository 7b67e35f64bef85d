use thiserror::Error;

pub type FunnelResult<T> = Result<T, FunnelError>;

#[derive(Debug, Error)]
pub enum FunnelError {
    #[error("invalid plotting size: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
