//! Benchmark metrics collected during a scene run.

use serde::{Deserialize, Serialize};

/// Metrics from one scene run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    pub scene: String,
    pub frames: u32,
    pub sub_steps: u32,
    pub particle_count: usize,
    pub spring_count: usize,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per frame (seconds).
    pub avg_frame_time: f64,
    pub min_frame_time: f64,
    pub max_frame_time: f64,
    /// Kinetic energy after the last frame.
    pub final_kinetic_energy: f64,
    /// Largest distance any particle moved from its start.
    pub max_displacement: f64,
    /// Particle contacts over the whole run.
    pub particle_contacts: u64,
    /// Edge contacts over the whole run.
    pub edge_contacts: u64,
    pub max_penetration: f64,
    pub degenerate_springs: u64,
}

impl BenchmarkMetrics {
    pub fn to_csv_header() -> String {
        "scene,particles,springs,frames,sub_steps,total_wall_time_s,avg_frame_ms,min_frame_ms,max_frame_ms,final_ke,max_displacement,particle_contacts,edge_contacts,max_penetration,degenerate_springs".to_string()
    }

    /// This run as one CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.4},{},{},{:.4},{}",
            self.scene,
            self.particle_count,
            self.spring_count,
            self.frames,
            self.sub_steps,
            self.total_wall_time,
            self.avg_frame_time * 1000.0,
            self.min_frame_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.particle_contacts,
            self.edge_contacts,
            self.max_penetration,
            self.degenerate_springs,
        )
    }

    /// Header plus one row per run.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
