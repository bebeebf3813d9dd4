/// Number of tick intervals an axis aims for.
pub const DEFAULT_INTERVALS: usize = 5;

/// Linear value axis starting at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub max: f64,
    pub step: f64,
}

impl AxisScale {
    /// Build a scale whose upper bound is a round multiple of a 1/2/2.5/5
    /// step and covers `data_max`.
    pub fn nice(data_max: f64, intervals: usize) -> Self {
        let intervals = intervals.max(1);
        if !data_max.is_finite() || data_max <= 0.0 {
            return Self {
                max: intervals as f64,
                step: 1.0,
            };
        }
        let step = nice_step(data_max / intervals as f64);
        let max = (data_max / step).ceil() * step;
        Self { max, step }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }

    /// Position of `value` along the axis in `0.0..=1.0`.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.max <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        (value / self.max).clamp(0.0, 1.0)
    }
}

pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let exp = raw.log10().floor() as i32;
    let magnitude = 10f64.powi(exp);
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
