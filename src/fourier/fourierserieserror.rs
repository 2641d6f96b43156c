use thiserror::Error;

use crate::math::integration::integrationerror::IntegrationError;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FourierSeriesError {
    /// 週期必須為有限正數，否則基頻 ω = 2π / T 無意義
    #[error("period must be finite and positive, got {0}")]
    InvalidPeriod(f64),

    #[error("highest harmonic {0} exceeds the supported limit")]
    HarmonicTooLarge(usize),

    #[error("coefficient integration failed: {0}")]
    Integration(#[from] IntegrationError),
}
