// Summary rows produced by the aggregation engine.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::Entity;

/// Numeric entity attribute that can be summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Cpu,
    Cpus,
    Memory,
    Instances,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Cpu, Field::Cpus, Field::Memory, Field::Instances];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Cpu => "cpu",
            Field::Cpus => "cpus",
            Field::Memory => "memory",
            Field::Instances => "instances",
        }
    }

    /// Contribution of `entity` to this field's total; absent counts as 0.
    pub fn value(&self, entity: &Entity) -> f64 {
        let v = match self {
            Field::Cpu => entity.cpu,
            Field::Cpus => entity.cpus,
            Field::Memory => entity.memory,
            Field::Instances => entity.instances,
        };
        v.unwrap_or(0.0)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpu" => Ok(Field::Cpu),
            "cpus" => Ok(Field::Cpus),
            "memory" => Ok(Field::Memory),
            "instances" => Ok(Field::Instances),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// Count plus one sum per requested field. Serializes flat: `{"count":2,"cpu":10.0}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Totals {
    pub count: usize,
    #[serde(flatten)]
    pub totals: BTreeMap<Field, f64>,
}

impl Totals {
    /// Sum for `field`; 0 when the field was not requested.
    pub fn total(&self, field: Field) -> f64 {
        self.totals.get(&field).copied().unwrap_or(0.0)
    }
}

/// Group identity. `Unknown` collects entities without a key and never equals a named group,
/// including one literally named "unknown".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Named(String),
    Unknown,
}

impl GroupKey {
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some(s) => GroupKey::Named(s.to_string()),
            None => GroupKey::Unknown,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            GroupKey::Named(s) => Some(s),
            GroupKey::Unknown => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Named(s) => f.write_str(s),
            GroupKey::Unknown => f.write_str("unknown"),
        }
    }
}

/// Named keys serialize as strings, `Unknown` as `null`.
impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GroupKey::Named(s) => serializer.serialize_str(s),
            GroupKey::Unknown => serializer.serialize_none(),
        }
    }
}

/// One row of a grouped reduction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateGroup {
    pub key: GroupKey,
    #[serde(flatten)]
    pub totals: Totals,
    /// Positions of the folded entities within the input collection.
    #[serde(skip)]
    pub members: Vec<usize>,
}

impl AggregateGroup {
    pub fn count(&self) -> usize {
        self.totals.count
    }

    pub fn total(&self, field: Field) -> f64 {
        self.totals.total(field)
    }
}
