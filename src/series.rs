// Series shaper: samples + extraction rules → ordered chart points and y domain.
// Input order is preserved as-is; callers that want time order sort upstream.

use std::str::FromStr;

use chrono::{DateTime, Timelike};

use crate::models::{ChartSeries, Point, Sample};

/// Shape `samples` into (x, y) points. A sample for which either extractor yields nothing,
/// or whose y is not finite, is skipped. Domain is `[0, max(y)]`, `[0, 0]` when empty.
pub fn to_series<X, E, XE>(samples: &[Sample], extract: E, x_extract: XE) -> ChartSeries<X>
where
    E: Fn(&Sample) -> Option<f64>,
    XE: Fn(&Sample) -> Option<X>,
{
    let points: Vec<Point<X>> = samples
        .iter()
        .filter_map(|s| {
            let y = extract(s).filter(|y| y.is_finite())?;
            let x = x_extract(s)?;
            Some(Point { x, y })
        })
        .collect();

    if points.is_empty() {
        return ChartSeries::empty();
    }
    let y_max = points
        .iter()
        .map(|p| p.y)
        .fold(f64::NEG_INFINITY, f64::max);

    ChartSeries {
        points,
        y_min: 0.0,
        y_max,
    }
}

/// Stock value extractors.
pub mod extract {
    use crate::models::Sample;

    const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

    /// used / total * 100; nothing when total is missing or zero.
    pub fn memory_percent(s: &Sample) -> Option<f64> {
        let m = s.memory.as_ref()?;
        let total = m.total.filter(|t| *t > 0.0)?;
        Some(m.used? / total * 100.0)
    }

    pub fn memory_used_mb(s: &Sample) -> Option<f64> {
        s.memory.as_ref()?.used.map(|b| b / BYTES_PER_MB)
    }

    /// Busy share of the accounted cpu time: (nice + sys + user) / (nice + sys + user + wait).
    pub fn cpu_busy_percent(s: &Sample) -> Option<f64> {
        let c = s.cpu.as_ref()?;
        let busy = c.nice.unwrap_or(0.0) + c.sys.unwrap_or(0.0) + c.user.unwrap_or(0.0);
        let all = busy + c.wait.unwrap_or(0.0);
        if all <= 0.0 {
            return None;
        }
        Some(busy / all * 100.0)
    }

    pub fn load1(s: &Sample) -> Option<f64> {
        s.load1
    }

    pub fn load5(s: &Sample) -> Option<f64> {
        s.load5
    }

    pub fn load15(s: &Sample) -> Option<f64> {
        s.load15
    }
}

/// Raw epoch-ms timestamp.
pub fn x_time(s: &Sample) -> Option<f64> {
    s.time
}

/// Minute of the hour (UTC) of the sample timestamp.
pub fn x_minute(s: &Sample) -> Option<u32> {
    let ms = s.time?;
    DateTime::from_timestamp_millis(ms as i64).map(|t| t.minute())
}

/// Named value extractor, selectable from a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    MemoryPercent,
    MemoryMb,
    CpuPercent,
    Load1,
    Load5,
    Load15,
}

impl Metric {
    pub fn extractor(self) -> fn(&Sample) -> Option<f64> {
        match self {
            Metric::MemoryPercent => extract::memory_percent,
            Metric::MemoryMb => extract::memory_used_mb,
            Metric::CpuPercent => extract::cpu_busy_percent,
            Metric::Load1 => extract::load1,
            Metric::Load5 => extract::load5,
            Metric::Load15 => extract::load15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric: {0}")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Metric::MemoryPercent),
            "memory_mb" => Ok(Metric::MemoryMb),
            "cpu" => Ok(Metric::CpuPercent),
            "load1" | "load_1" => Ok(Metric::Load1),
            "load5" | "load_5" => Ok(Metric::Load5),
            "load15" | "load_15" => Ok(Metric::Load15),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

/// X axis choice for host charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XAxis {
    #[default]
    Minute,
    Time,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown x axis: {0}")]
pub struct UnknownAxis(pub String);

impl FromStr for XAxis {
    type Err = UnknownAxis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minute" => Ok(XAxis::Minute),
            "time" => Ok(XAxis::Time),
            _ => Err(UnknownAxis(s.to_string())),
        }
    }
}
