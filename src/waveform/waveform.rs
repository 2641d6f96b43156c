use clap::ValueEnum;
use serde::Deserialize;

/// 範例用的週期函數。以 x = frac(t / T) 表示 t 在一個週期內的位置。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// 前半週期為 1，後半週期為 0
    #[default]
    SquareWave,
    /// frac(t / T)
    SawTooth
}

impl Waveform {
    pub fn value(&self, period: f64, t: f64) -> f64 {
        let x = fractional_part(t / period);
        match self {
            Waveform::SquareWave => if x < 0.5 { 1.0 } else { 0.0 },
            Waveform::SawTooth => x
        }
    }

    pub fn as_fn(self, period: f64) -> impl Fn(f64) -> f64 {
        move |t| self.value(period, t)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Waveform::SquareWave => "square_wave",
            Waveform::SawTooth => "saw_tooth"
        }
    }
}

/// x - floor(x)，負數也落在 [0, 1)
fn fractional_part(x: f64) -> f64 {
    x - x.floor()
}
