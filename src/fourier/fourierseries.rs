use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::fourier::fourierserieserror::FourierSeriesError;
use crate::fourier::tablesink::TableSink;
use crate::math::curve::curve::Curve;
use crate::math::integration::midpointrule::MidpointRule;
use crate::math::integration::quadrature::Quadrature;

// ─────────────────────────────────────────────────────────────────────────────
// FourierSeries - 截斷三角級數
// ─────────────────────────────────────────────────────────────────────────────
//
// 週期 T、基頻 ω = 2π/T，取到第 N 階諧波：
//
//   f(t) ≈ a_0/2 + Σ_{n=1}^{N} ( a_n·cos(nωt) + b_n·sin(nωt) )
//
// 係數以數值積分求得：
//
//   a_n = (2/T) ∫_0^T f(t)·cos(nωt) dt
//   b_n = (2/T) ∫_0^T f(t)·sin(nωt) dt
//
// 注意：
//   - 係數在建構時一次算完，之後不可變；換函數就重建物件
//   - b_0 恆為 0（sin(0) = 0），仍照常計算以保持兩組係數長度一致
//   - 不連續函數會在跳點附近出現 Gibbs 振盪，屬近似本身的性質而非錯誤

/// 預設積分解析度的下限
const MIN_SUBINTERVALS: usize = 100;

/// 每階諧波分配的積分區間數
const SUBINTERVALS_PER_HARMONIC: usize = 10;

/// 可接受的最高諧波階數
pub const MAX_HARMONIC_LIMIT: usize = 100_000;

#[derive(Debug, Clone, PartialEq)]
pub struct FourierSeries {
    period: f64,
    omega: f64,
    max_harmonic: usize,
    a: Vec<f64>,
    b: Vec<f64>
}

impl FourierSeries {
    /// 以預設解析度 `max(10·N, 100)` 建構。
    ///
    /// `f` 只在建構期間被借用，建構完成後不保留任何參考。
    pub fn new<F>(f: &F, period: f64, max_harmonic: usize) -> Result<FourierSeries, FourierSeriesError>
        where F: Fn(f64) -> f64 + ?Sized {
        Self::with_resolution(f, period, max_harmonic, Self::default_resolution(max_harmonic)?)
    }

    /// 指定每個係數積分所用的等分數。
    pub fn with_resolution<F>(f: &F,
                              period: f64,
                              max_harmonic: usize,
                              subintervals: usize) -> Result<FourierSeries, FourierSeriesError>
        where F: Fn(f64) -> f64 + ?Sized {
        if !period.is_finite() || period <= 0.0 {
            return Err(FourierSeriesError::InvalidPeriod(period));
        }
        if max_harmonic > MAX_HARMONIC_LIMIT {
            return Err(FourierSeriesError::HarmonicTooLarge(max_harmonic));
        }
        let rule = MidpointRule::new(subintervals)?;
        let omega = 2.0 * PI / period;
        let factor = 2.0 / period;

        let mut a = Vec::with_capacity(max_harmonic + 1);
        let mut b = Vec::with_capacity(max_harmonic + 1);
        for n in 0..=max_harmonic {
            let k = n as f64 * omega;
            let cosine = |t: f64| f(t) * (k * t).cos();
            let sine = |t: f64| f(t) * (k * t).sin();
            let a_n = factor * rule.integrate(&cosine, 0.0, period)?;
            let b_n = factor * rule.integrate(&sine, 0.0, period)?;
            trace!(harmonic = n, a = a_n, b = b_n, "fourier coefficient");
            a.push(a_n);
            b.push(b_n);
        }

        debug!(period, max_harmonic, subintervals, mean = 0.5 * a[0], "fourier series built");

        Ok(FourierSeries { period, omega, max_harmonic, a, b })
    }

    /// 高階諧波振盪較快，需要較多取樣點
    pub fn default_resolution(max_harmonic: usize) -> Result<usize, FourierSeriesError> {
        SUBINTERVALS_PER_HARMONIC
            .checked_mul(max_harmonic)
            .map(|n| n.max(MIN_SUBINTERVALS))
            .ok_or(FourierSeriesError::HarmonicTooLarge(max_harmonic))
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn angular_frequency(&self) -> f64 {
        self.omega
    }

    pub fn max_harmonic(&self) -> usize {
        self.max_harmonic
    }

    /// a_0..a_N
    pub fn cosine_coefficients(&self) -> &[f64] {
        &self.a
    }

    /// b_0..b_N
    pub fn sine_coefficients(&self) -> &[f64] {
        &self.b
    }

    /// 一個週期內的平均值 a_0/2
    pub fn mean(&self) -> f64 {
        0.5 * self.a[0]
    }

    /// 級數在 t 的值，任意實數 t 皆可（自動週期延拓）。
    pub fn evaluate(&self, t: f64) -> f64 {
        let mut sum = 0.5 * self.a[0];
        for n in 1..=self.max_harmonic {
            let phase = n as f64 * self.omega * t;
            sum += self.a[n] * phase.cos() + self.b[n] * phase.sin();
        }
        sum
    }

    /// 逐項微分：d/dt = Σ nω·( b_n·cos(nωt) - a_n·sin(nωt) )
    fn evaluate_derivative(&self, t: f64) -> f64 {
        let mut sum = 0.0;
        for n in 1..=self.max_harmonic {
            let k = n as f64 * self.omega;
            let phase = k * t;
            sum += k * (self.b[n] * phase.cos() - self.a[n] * phase.sin());
        }
        sum
    }

    /// t_i = t0 + i·dt，i = 0..=count，共 count + 1 筆 (t_i, evaluate(t_i))
    pub fn samples(&self, t0: f64, dt: f64, count: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..=count).map(move |i| {
            let t = t0 + i as f64 * dt;
            (t, self.evaluate(t))
        })
    }

    pub fn tabulate<S>(&self, sink: &mut S, t0: f64, dt: f64, count: usize) -> Result<(), S::Error>
        where S: TableSink + ?Sized {
        for (t, value) in self.samples(t0, dt, count) {
            sink.emit(t, value)?;
        }
        Ok(())
    }
}

impl Curve for FourierSeries {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.evaluate_derivative(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::integration::integrationerror::IntegrationError;

    fn square_wave(t: f64) -> f64 {
        if t - t.floor() < 0.5 { 1.0 } else { 0.0 }
    }

    fn saw_tooth(t: f64) -> f64 {
        t - t.floor()
    }

    #[test]
    fn coefficient_tables_have_n_plus_one_entries() {
        for n in [0, 1, 7, 20] {
            let series = FourierSeries::new(&saw_tooth, 1.0, n).unwrap();
            assert_eq!(series.cosine_coefficients().len(), n + 1);
            assert_eq!(series.sine_coefficients().len(), n + 1);
            assert_eq!(series.max_harmonic(), n);
        }
    }

    #[test]
    fn zeroth_order_series_is_the_mean() {
        let series = FourierSeries::new(&saw_tooth, 1.0, 0).unwrap();
        assert!((series.evaluate(0.1) - 0.5).abs() < 1e-12);
        assert!((series.evaluate(0.9) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn dc_coefficient_is_twice_the_mean() {
        let square = FourierSeries::new(&square_wave, 1.0, 20).unwrap();
        assert!((square.cosine_coefficients()[0] - 1.0).abs() < 1e-12);
        assert!((square.mean() - 0.5).abs() < 1e-12);

        // 3 + sin(t) 在 [0, 2π] 的平均值為 3
        let shifted = FourierSeries::new(&|t: f64| 3.0 + t.sin(), 2.0 * PI, 4).unwrap();
        assert!((shifted.cosine_coefficients()[0] - 6.0).abs() < 1e-9);
    }

    #[test]
    fn pure_harmonic_is_reconstructed() {
        let period = 2.0;
        let omega = 2.0 * PI / period;
        let k = 3;
        let f = move |t: f64| (k as f64 * omega * t).cos();
        let series = FourierSeries::new(&f, period, 5).unwrap();

        for n in 0..=5 {
            let expected = if n == k { 1.0 } else { 0.0 };
            let a_n = series.cosine_coefficients()[n];
            let b_n = series.sine_coefficients()[n];
            assert!((a_n - expected).abs() < 1e-9, "n={n}, a_n={a_n}");
            assert!(b_n.abs() < 1e-9, "n={n}, b_n={b_n}");
        }
        for i in 0..50 {
            let t = -1.0 + 0.07 * i as f64;
            assert!((series.evaluate(t) - f(t)).abs() < 1e-9, "t={t}");
        }
    }

    #[test]
    fn evaluation_is_periodic() {
        let series = FourierSeries::new(&saw_tooth, 1.5, 12).unwrap();
        for i in 0..40 {
            let t = -2.0 + 0.13 * i as f64;
            let lhs = series.evaluate(t);
            let rhs = series.evaluate(t + series.period());
            assert!((lhs - rhs).abs() < 1e-9, "t={t}, lhs={lhs}, rhs={rhs}");
        }
    }

    #[test]
    fn angular_frequency_uses_full_precision_pi() {
        let series = FourierSeries::new(&saw_tooth, 0.5, 1).unwrap();
        assert_eq!(series.angular_frequency(), 4.0 * PI);
    }

    #[test]
    fn derivative_of_pure_sine() {
        let period = 1.0;
        let omega = 2.0 * PI / period;
        let series = FourierSeries::new(&|t: f64| (2.0 * omega * t).sin(), period, 4).unwrap();
        for i in 0..20 {
            let t = 0.05 * i as f64;
            let expected = 2.0 * omega * (2.0 * omega * t).cos();
            assert!((series.derivative(t) - expected).abs() < 1e-7, "t={t}");
        }
    }

    #[test]
    fn default_resolution_has_a_floor() {
        assert_eq!(FourierSeries::default_resolution(0), Ok(100));
        assert_eq!(FourierSeries::default_resolution(10), Ok(100));
        assert_eq!(FourierSeries::default_resolution(20), Ok(200));
    }

    #[test]
    fn overflowing_resolution_is_an_error() {
        assert_eq!(
            FourierSeries::default_resolution(usize::MAX),
            Err(FourierSeriesError::HarmonicTooLarge(usize::MAX))
        );
    }

    #[test]
    fn harmonic_above_limit_is_rejected_before_allocation() {
        let n = MAX_HARMONIC_LIMIT + 1;
        assert_eq!(
            FourierSeries::with_resolution(&saw_tooth, 1.0, n, 100),
            Err(FourierSeriesError::HarmonicTooLarge(n))
        );
        assert_eq!(
            FourierSeries::new(&saw_tooth, 1.0, usize::MAX),
            Err(FourierSeriesError::HarmonicTooLarge(usize::MAX))
        );
    }

    #[test]
    fn invalid_period_is_rejected() {
        for period in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = FourierSeries::new(&saw_tooth, period, 3);
            assert!(matches!(result, Err(FourierSeriesError::InvalidPeriod(_))), "period={period}");
        }
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let result = FourierSeries::with_resolution(&saw_tooth, 1.0, 3, 0);
        assert_eq!(result, Err(FourierSeriesError::Integration(IntegrationError::ZeroSubintervals)));
    }

    #[test]
    fn tabulate_emits_count_plus_one_rows_in_order() {
        let series = FourierSeries::new(&square_wave, 1.0, 20).unwrap();
        let mut rows: Vec<(f64, f64)> = Vec::new();
        series.tabulate(&mut rows, 0.0, 0.01, 400).unwrap();

        assert_eq!(rows.len(), 401);
        for (i, (t, value)) in rows.iter().enumerate() {
            assert!((t - 0.01 * i as f64).abs() < 1e-12, "i={i}, t={t}");
            assert_eq!(*value, series.evaluate(*t));
        }
        assert!((rows[400].0 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn tabulate_runs_backwards_for_negative_step() {
        let series = FourierSeries::new(&saw_tooth, 1.0, 5).unwrap();
        let rows: Vec<(f64, f64)> = series.samples(1.0, -0.25, 4).collect();
        let times: Vec<f64> = rows.iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![1.0, 0.75, 0.5, 0.25, 0.0]);
    }
}
