use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::quadrature::Quadrature;

// ─────────────────────────────────────────────────────────────────────────────
// Midpoint rule（mid-ordinate rule）
// ─────────────────────────────────────────────────────────────────────────────
//
// 將 [a, b] 等分為 n 段，每段以中點函數值乘以段寬近似：
//
//   ∫_a^b f(t) dt ≈ Σ_{i=1}^{n} f(a + (i - 0.5)·dt)·dt,   dt = (b - a) / n
//
// 二階精度：n 加倍時誤差約縮小為 1/4。
// 對常數與一次函數為精確解。
// 不提供誤差估計，也不做自適應細分。

/// 以 midpoint rule 計算 ∫_a^b f(t) dt，n 為等分數。
pub fn integrate<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError>
    where F: Fn(f64) -> f64 {
    if n == 0 {
        return Err(IntegrationError::ZeroSubintervals);
    }

    let dt = (b - a) / n as f64;
    let mut sum = 0.0;
    for i in 1..=n {
        sum += f(a + (i as f64 - 0.5) * dt) * dt;
    }
    Ok(sum)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidpointRule {
    subintervals: usize
}

impl MidpointRule {
    pub fn new(subintervals: usize) -> Result<MidpointRule, IntegrationError> {
        if subintervals == 0 {
            return Err(IntegrationError::ZeroSubintervals);
        }
        Ok(MidpointRule { subintervals })
    }

    pub fn subintervals(&self) -> usize {
        self.subintervals
    }
}

impl Quadrature for MidpointRule {
    fn integrate(&self, f: &dyn Fn(f64) -> f64, a: f64, b: f64) -> Result<f64, IntegrationError> {
        integrate(f, a, b, self.subintervals)
    }
}
