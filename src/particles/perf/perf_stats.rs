//! Per-tick performance counters reported to the host

use serde::Serialize;

/// Snapshot of simulation health, serialized to JSON for the JS overlay.
///
/// `*_total` counters are cumulative over the system's lifetime; the rest
/// describe the most recent update.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfStats {
    /// Wall time of the last update pass.
    pub update_ms: f64,
    /// Population after the last update.
    pub particle_count: u32,
    /// Particles ever inserted.
    pub spawned_total: u64,
    /// Particles that aged out.
    pub expired_total: u64,
    /// Particles removed by the population ceiling.
    pub evicted_total: u64,
}
