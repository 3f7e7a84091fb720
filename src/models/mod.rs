// Domain models: inventory records, metric samples, and the derived rows/series built from them

mod aggregate;
mod entity;
mod lenient;
mod sample;
mod series;

pub use aggregate::{AggregateGroup, Field, GroupKey, Totals, UnknownField};
pub use entity::{Entity, EntityKind};
pub use sample::{CpuUsage, MemoryUsage, Sample};
pub use series::{ChartSeries, Point};
