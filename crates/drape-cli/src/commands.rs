//! CLI command implementations.

use std::path::Path;

use drape_bench::events::frame_events;
use drape_bench::{analyze, analyze_dir, BenchmarkMetrics, BenchmarkRunner};
use drape_scene::{load_scene, validate_scene, SceneConfig, SceneLibrary};
use drape_solver::{ForceProvider, GustyWind, RunMode, Simulation, SimulationConfig};
use drape_telemetry::{EventBus, TracingSink};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub struct SimulateArgs<'a> {
    pub scene: &'a str,
    pub frames: u32,
    pub wind: f64,
    pub seed: u64,
    pub sub_steps: Option<u32>,
    pub paused: bool,
}

/// A scene file if `name` points at one, otherwise a library scene.
fn resolve_scene(name: &str) -> Result<SceneConfig, Box<dyn std::error::Error>> {
    let path = Path::new(name);
    if path.is_file() {
        return Ok(load_scene(path)?);
    }
    let lib = SceneLibrary::with_defaults();
    let scene = lib
        .get_or_default(name)
        .ok_or("default scene is missing from the library")?;
    Ok(scene.clone())
}

/// Run a scene headlessly.
pub fn simulate(args: &SimulateArgs) -> CommandResult {
    let scene = resolve_scene(args.scene)?;

    let mut config = SimulationConfig::from_scene(&scene);
    if let Some(n) = args.sub_steps {
        config = config.with_sub_steps(n);
    }
    if args.paused {
        config = config.with_run_mode(RunMode::Paused);
    }
    config.validate()?;

    let mut sim = Simulation::from_scene(&scene)?;
    let mut wind = GustyWind::new(args.wind, args.seed);
    let base_wind = scene.wind;
    let mut bus = EventBus::new()
        .with_filtered_sink(TracingSink::default(), &["frame_end", "contacts", "degenerate"]);

    println!("Drape Simulation");
    println!("────────────────");
    println!("Scene:      {} ({})", scene.name, scene.description);
    println!(
        "Cloth:      {} particles, {} springs, {} locked",
        sim.cloth().particle_count(),
        sim.cloth().spring_count(),
        sim.cloth().locked_count()
    );
    println!("Colliders:  {}", scene.colliders.len());
    println!();

    let mut contacts = 0u64;
    let mut wall_time = 0.0;
    for frame in 0..u64::from(args.frames) {
        config.wind = base_wind + wind.force(frame);
        let result = sim.step(&config);
        contacts += u64::from(result.contact_count());
        wall_time += result.wall_time;

        bus.emit_all(frame_events(&result, sim.cloth().kinetic_energy()));
        bus.flush();
    }
    bus.finish();

    if config.is_paused() {
        println!("Paused: no frames simulated.");
        return Ok(());
    }

    let frames = sim.frame().max(1) as f64;
    println!("Frames:     {}", sim.frame());
    println!("Wall time:  {:.3}s ({:.3}ms/frame)", wall_time, wall_time * 1000.0 / frames);
    println!("Contacts:   {contacts}");
    println!("Final KE:   {:.6e}", sim.cloth().kinetic_energy());
    println!("In contact: {}", sim.cloth().inside_count());
    Ok(())
}

/// Run the benchmark suite.
pub fn benchmark(scene_name: &str, frames: u32, output_path: Option<&str>) -> CommandResult {
    println!("Drape Benchmark Suite");
    println!("═════════════════════");
    println!();

    let lib = SceneLibrary::with_defaults();
    let scenes = lib.select(scene_name);
    if scenes.is_empty() {
        return Err(format!(
            "Unknown scene: '{scene_name}'. Available: {}, all",
            lib.names().join(", ")
        )
        .into());
    }

    let mut all_metrics = Vec::with_capacity(scenes.len());
    for scene in scenes {
        println!("Running: {} ({frames} frames)", scene.name);

        let metrics = BenchmarkRunner::run(scene, frames)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg frame:     {:.3}ms", metrics.avg_frame_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.2}", metrics.max_displacement);
        println!("  Contacts:      {}", metrics.particle_contacts + metrics.edge_contacts);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }
    Ok(())
}

/// List built-in scenes.
pub fn scenes() -> CommandResult {
    let lib = SceneLibrary::with_defaults();
    for scene in lib.iter() {
        let kinds: Vec<_> = scene.colliders.iter().map(|c| c.kind()).collect();
        println!(
            "{:<14} {:<50} [{}]{}{}",
            scene.name,
            scene.description,
            kinds.join(", "),
            if scene.soft { " soft" } else { "" },
            if scene.edge_collision { " edges" } else { "" },
        );
    }
    Ok(())
}

/// Validate a scene file.
pub fn validate(path: &str) -> CommandResult {
    let scene = load_scene(path)?;
    validate_scene(&scene)?;
    let cloth = scene.build_cloth()?;

    println!("Valid scene: {}", scene.name);
    println!("  Colliders: {}", scene.colliders.len());
    println!(
        "  Grid:      {}x{} ({} particles, {} springs)",
        scene.grid.cols,
        scene.grid.rows,
        cloth.particle_count(),
        cloth.spring_count()
    );
    Ok(())
}

/// Convert frame traces to CSV.
pub fn trace(input: &str, output: Option<&str>) -> CommandResult {
    let input = Path::new(input);

    if input.is_dir() {
        let output = Path::new(output.unwrap_or("out"));
        let written = analyze_dir(input, output)?;
        println!("Converted {} trace(s) into {}", written.len(), output.display());
        return Ok(());
    }

    let json = std::fs::read_to_string(input)?;
    let series = analyze(&json)?;
    println!(
        "{} frames | avg {:.2} fps",
        series.len(),
        series.average_fps()
    );

    match output {
        Some(dir) => {
            let dir = Path::new(dir);
            std::fs::create_dir_all(dir)?;
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "trace".to_string());
            let path = dir.join(format!("{stem}.csv"));
            std::fs::write(&path, series.to_csv())?;
            println!("Saved to {}", path.display());
        }
        None => println!("{}", series.to_csv()),
    }
    Ok(())
}
