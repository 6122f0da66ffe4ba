// Engine configuration and shared constants

/// Default step history ceiling (256 MB)
pub const DEFAULT_HISTORY_LIMIT: usize = 256 * 1024 * 1024;

/// Largest `max - min + 1` counting sort will allocate a table for
pub const DEFAULT_MAX_VALUE_RANGE: usize = 1_000_000;

/// Largest node count a graph run accepts
///
/// DFS, DFS topological sort and component search recurse once per node on a
/// path; this bound keeps that depth inside a default thread stack.
pub const MAX_GRAPH_NODES: usize = 2_000;

/// Stand-in for an unreachable distance
///
/// Half of `i64::MAX`, so two of them can be added without overflowing.
pub const UNREACHABLE: i64 = i64::MAX / 2;

/// Number of buckets used by bucket sort
pub const BUCKET_COUNT: usize = 5;

/// Radix sort base
pub const RADIX: i64 = 10;

/// Settings applied to every run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Memory ceiling for the recorded step history, in bytes
    pub history_limit: usize,

    /// Value range ceiling for counting sort
    pub max_value_range: usize,

    /// When false, steps are not stored; counters and results still are
    pub record_steps: bool,
}

impl EngineConfig {
    /// Configuration that only produces counters and results
    pub fn summary() -> Self {
        EngineConfig {
            record_steps: false,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            history_limit: DEFAULT_HISTORY_LIMIT,
            max_value_range: DEFAULT_MAX_VALUE_RANGE,
            record_steps: true,
        }
    }
}
