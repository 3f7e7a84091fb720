// Host metric samples as served by the cluster metrics endpoint

use serde::{Deserialize, Serialize};

use super::lenient::{lenient_number, lenient_object};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    #[serde(default, deserialize_with = "lenient_number")]
    pub used: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuUsage {
    #[serde(default, deserialize_with = "lenient_number")]
    pub nice: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sys: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub user: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub wait: Option<f64>,
}

/// One time-stamped measurement for a host. `time` is epoch milliseconds.
/// Any measurement may be missing; extractors decide whether that makes the sample unusable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default, deserialize_with = "lenient_number")]
    pub time: Option<f64>,
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryUsage>,
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuUsage>,
    #[serde(rename = "load_1", default, deserialize_with = "lenient_number")]
    pub load1: Option<f64>,
    #[serde(rename = "load_5", default, deserialize_with = "lenient_number")]
    pub load5: Option<f64>,
    #[serde(rename = "load_15", default, deserialize_with = "lenient_number")]
    pub load15: Option<f64>,
}

impl Sample {
    pub fn at(time: f64) -> Self {
        Self {
            time: Some(time),
            ..Default::default()
        }
    }

    pub fn with_memory(mut self, used: f64, total: f64) -> Self {
        self.memory = Some(MemoryUsage {
            used: Some(used),
            total: Some(total),
        });
        self
    }

    pub fn with_load(mut self, load1: f64, load5: f64, load15: f64) -> Self {
        self.load1 = Some(load1);
        self.load5 = Some(load5);
        self.load15 = Some(load15);
        self
    }

    pub fn with_cpu(mut self, nice: f64, sys: f64, user: f64, wait: f64) -> Self {
        self.cpu = Some(CpuUsage {
            nice: Some(nice),
            sys: Some(sys),
            user: Some(user),
            wait: Some(wait),
        });
        self
    }
}
