//! Drape CLI: headless simulation, benchmarking and trace analysis.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "drape")]
#[command(version, about = "Drape: real-time mass-spring cloth simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scene headlessly and print a summary.
    Simulate {
        /// Built-in scene name, or a path to a .toml/.json scene file.
        #[arg(short, long, default_value = "mixed")]
        scene: String,

        /// Number of frames to step.
        #[arg(short, long, default_value_t = 300)]
        frames: u32,

        /// Gusty wind strength along +x (0 disables).
        #[arg(short, long, default_value_t = 0.0)]
        wind: f64,

        /// Seed for the wind gusts.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Substeps per frame.
        #[arg(long)]
        sub_steps: Option<u32>,

        /// Start paused: no physics is run.
        #[arg(long)]
        paused: bool,
    },

    /// Benchmark one or all built-in scenes.
    Benchmark {
        /// Scene to run (mixed, cylinder, cylinder_soft, sphere, cone, all).
        /// Unknown names fall back to mixed.
        #[arg(short, long, default_value = "all")]
        scene: String,

        /// Frames per scene.
        #[arg(short, long, default_value_t = 300)]
        frames: u32,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the built-in scenes.
    Scenes,

    /// Validate a scene file.
    Validate {
        /// Path to a .toml or .json scene.
        path: String,
    },

    /// Convert browser frame traces to CSV.
    Trace {
        /// A trace .json file or a directory of them.
        input: String,

        /// Output directory for the CSV files.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            scene,
            frames,
            wind,
            seed,
            sub_steps,
            paused,
        } => commands::simulate(&commands::SimulateArgs {
            scene: &scene,
            frames,
            wind,
            seed,
            sub_steps,
            paused,
        }),
        Commands::Benchmark { scene, frames, output } => {
            commands::benchmark(&scene, frames, output.as_deref())
        }
        Commands::Scenes => commands::scenes(),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Trace { input, output } => commands::trace(&input, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
