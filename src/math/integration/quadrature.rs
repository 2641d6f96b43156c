use crate::math::integration::integrationerror::IntegrationError;

/// 固定規則的一維數值積分。
///
/// 實作者自行決定取樣點與權重，呼叫端只提供被積函數與區間 [a, b]。
/// 允許 a > b，結果依區間方向取號：∫_a^b = -∫_b^a。
pub trait Quadrature {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, a: f64, b: f64) -> Result<f64, IntegrationError>;
}
