use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::configurationerror::ConfigurationError;
use crate::fourier::fourierseries::{FourierSeries, MAX_HARMONIC_LIMIT};
use crate::waveform::waveform::Waveform;

const DEFAULT_PERIOD: f64 = 1.0;
const DEFAULT_MAX_HARMONIC: usize = 20;
const DEFAULT_COUNT: usize = 400;
/// 未指定 dt 時，每個週期取樣的點數
const SAMPLES_PER_PERIOD: f64 = 100.0;

/// JSON 設定檔內容，所有欄位皆可省略。
///
/// 整數欄位以有號型別讀入，負值在 `Configuration::merge` 時以
/// `InvalidArgument` 拒絕，而不是交給 serde 回報型別錯誤。
///
/// ```json
/// {
///     "waveform": "saw_tooth",
///     "period": 2.0,
///     "max_harmonic": 40,
///     "t0": 0.0,
///     "dt": 0.01,
///     "count": 800
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationOverrides {
    pub waveform: Option<Waveform>,
    pub period: Option<f64>,
    pub max_harmonic: Option<i64>,
    pub subintervals: Option<i64>,
    pub t0: Option<f64>,
    pub dt: Option<f64>,
    pub count: Option<i64>
}

#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    waveform: Waveform,
    period: f64,
    max_harmonic: usize,
    subintervals: Option<usize>,
    t0: f64,
    dt: Option<f64>,
    count: usize
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            waveform: Waveform::default(),
            period: DEFAULT_PERIOD,
            max_harmonic: DEFAULT_MAX_HARMONIC,
            subintervals: None,
            t0: 0.0,
            dt: None,
            count: DEFAULT_COUNT
        }
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let overrides: ConfigurationOverrides = serde_json::from_reader(reader)?;
        debug!(path = %file_path.as_ref().display(), "configuration loaded");
        Configuration::new().merge(overrides)
    }

    /// 以 `overrides` 中有給值的欄位覆蓋目前設定，並重新檢查。
    pub fn merge(mut self, overrides: ConfigurationOverrides) -> Result<Configuration, ConfigurationError> {
        if let Some(waveform) = overrides.waveform {
            self.waveform = waveform;
        }
        if let Some(period) = overrides.period {
            self.period = period;
        }
        if let Some(max_harmonic) = overrides.max_harmonic {
            self.max_harmonic = non_negative("max_harmonic", max_harmonic)?;
        }
        if let Some(subintervals) = overrides.subintervals {
            self.subintervals = Some(non_negative("subintervals", subintervals)?);
        }
        if let Some(t0) = overrides.t0 {
            self.t0 = t0;
        }
        if let Some(dt) = overrides.dt {
            self.dt = Some(dt);
        }
        if let Some(count) = overrides.count {
            self.count = non_negative("count", count)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.period.is_finite() || self.period <= 0.0 {
            return Err(ConfigurationError::invalid_argument(
                "period",
                format!("must be finite and positive, got {}", self.period)
            ));
        }
        if self.max_harmonic > MAX_HARMONIC_LIMIT {
            return Err(ConfigurationError::invalid_argument(
                "max_harmonic",
                format!("must not exceed {}, got {}", MAX_HARMONIC_LIMIT, self.max_harmonic)
            ));
        }
        if self.subintervals == Some(0) {
            return Err(ConfigurationError::invalid_argument("subintervals", "must be at least 1"));
        }
        if !self.t0.is_finite() {
            return Err(ConfigurationError::invalid_argument("t0", "must be finite"));
        }
        if let Some(dt) = self.dt {
            if !dt.is_finite() {
                return Err(ConfigurationError::invalid_argument("dt", "must be finite"));
            }
        }
        Ok(())
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn max_harmonic(&self) -> usize {
        self.max_harmonic
    }

    pub fn subintervals(&self) -> Result<usize, ConfigurationError> {
        match self.subintervals {
            Some(subintervals) => Ok(subintervals),
            None => Ok(FourierSeries::default_resolution(self.max_harmonic)?)
        }
    }

    pub fn t0(&self) -> f64 {
        self.t0
    }

    pub fn dt(&self) -> f64 {
        self.dt.unwrap_or(self.period / SAMPLES_PER_PERIOD)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn build_series(&self) -> Result<FourierSeries, ConfigurationError> {
        let f = self.waveform.as_fn(self.period);
        let series = FourierSeries::with_resolution(&f, self.period, self.max_harmonic, self.subintervals()?)?;
        Ok(series)
    }
}

impl FromStr for Configuration {
    type Err = ConfigurationError;

    fn from_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let overrides: ConfigurationOverrides = serde_json::from_str(json)?;
        Configuration::new().merge(overrides)
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<usize, ConfigurationError> {
    usize::try_from(value).map_err(|_| {
        ConfigurationError::invalid_argument(field, format!("must not be negative, got {}", value))
    })
}
