use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationError {
    /// 區間切割數為 0，無法計算步長 dt = (b - a) / n
    #[error("number of subintervals must be at least 1")]
    ZeroSubintervals,
}
