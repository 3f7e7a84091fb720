// Status → severity tier, shared by hosts, containers and services

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity tier; serializes to the lowercase class name the UI styles rows with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Positive,
    Warning,
    Error,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Positive => "positive",
            SeverityTier::Warning => "warning",
            SeverityTier::Error => "error",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct UnknownSeverity(pub String);

impl FromStr for SeverityTier {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(SeverityTier::Positive),
            "warning" => Ok(SeverityTier::Warning),
            "error" => Ok(SeverityTier::Error),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// Classify a raw status string (case-insensitive). Unrecognized input is `Positive`.
pub fn classify(status: &str) -> SeverityTier {
    match status.trim().to_lowercase().as_str() {
        "sick" => SeverityTier::Error,
        "stale" => SeverityTier::Warning,
        _ => SeverityTier::Positive,
    }
}
