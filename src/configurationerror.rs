use thiserror::Error;

use crate::fourier::fourierserieserror::FourierSeriesError;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String
    },

    #[error(transparent)]
    Series(#[from] FourierSeriesError),
}

impl ConfigurationError {
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> ConfigurationError {
        ConfigurationError::InvalidArgument { field, reason: reason.into() }
    }
}
