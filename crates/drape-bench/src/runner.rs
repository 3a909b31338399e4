//! Benchmark runner: steps a scene headlessly and collects metrics.

use std::time::Instant;

use tracing::info;

use drape_math::Vec3;
use drape_scene::{SceneConfig, SceneLibrary};
use drape_solver::{Simulation, SimulationConfig};
use drape_telemetry::EventBus;
use drape_types::DrapeResult;

use crate::events::frame_events;
use crate::metrics::BenchmarkMetrics;

/// Runs scenes and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Runs `scene` for `frames` frames with its own forces.
    pub fn run(scene: &SceneConfig, frames: u32) -> DrapeResult<BenchmarkMetrics> {
        Self::run_with(scene, &SimulationConfig::from_scene(scene), frames, None)
    }

    /// Runs `scene` with an explicit step configuration, optionally
    /// reporting every frame to `bus`.
    pub fn run_with(
        scene: &SceneConfig,
        config: &SimulationConfig,
        frames: u32,
        mut bus: Option<&mut EventBus>,
    ) -> DrapeResult<BenchmarkMetrics> {
        config.validate()?;
        let mut sim = Simulation::from_scene(scene)?;
        let initial: Vec<Vec3> = sim.cloth().positions().collect();

        let mut frame_times = Vec::with_capacity(frames as usize);
        let mut particle_contacts = 0u64;
        let mut edge_contacts = 0u64;
        let mut max_penetration = 0.0f64;
        let mut degenerate_springs = 0u64;

        let total_start = Instant::now();
        for _ in 0..frames {
            let result = sim.step(config);
            frame_times.push(result.wall_time);
            particle_contacts += u64::from(result.particle_contacts.resolved_count);
            edge_contacts += u64::from(result.edge_contacts.resolved_count);
            max_penetration = max_penetration.max(result.max_penetration());
            degenerate_springs += u64::from(result.degenerate_springs);

            if let Some(bus) = bus.as_deref_mut() {
                bus.emit_all(frame_events(&result, sim.cloth().kinetic_energy()));
                bus.flush();
            }
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let cloth = sim.cloth();
        let max_displacement = cloth
            .positions()
            .zip(&initial)
            .map(|(p, p0)| p.distance(*p0))
            .fold(0.0, f64::max);

        let avg_frame_time = if frame_times.is_empty() {
            0.0
        } else {
            frame_times.iter().sum::<f64>() / frame_times.len() as f64
        };
        let min_frame_time = frame_times.iter().copied().fold(f64::INFINITY, f64::min);
        let max_frame_time = frame_times.iter().copied().fold(0.0, f64::max);

        let metrics = BenchmarkMetrics {
            scene: scene.name.clone(),
            frames,
            sub_steps: config.sub_steps,
            particle_count: cloth.particle_count(),
            spring_count: cloth.spring_count(),
            total_wall_time,
            avg_frame_time,
            min_frame_time: if frame_times.is_empty() { 0.0 } else { min_frame_time },
            max_frame_time,
            final_kinetic_energy: cloth.kinetic_energy(),
            max_displacement,
            particle_contacts,
            edge_contacts,
            max_penetration,
            degenerate_springs,
        };
        info!(
            scene = %metrics.scene,
            frames,
            avg_ms = metrics.avg_frame_time * 1000.0,
            "benchmark complete"
        );
        Ok(metrics)
    }

    /// Runs every scene of `library`, in name order.
    pub fn run_all(library: &SceneLibrary, frames: u32) -> DrapeResult<Vec<BenchmarkMetrics>> {
        library.iter().map(|scene| Self::run(scene, frames)).collect()
    }
}
