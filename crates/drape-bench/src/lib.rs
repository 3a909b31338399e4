//! # drape-bench
//!
//! Headless scene runs and frame-timing analysis.
//!
//! - [`BenchmarkRunner`] steps a scene for a number of frames and
//!   collects [`BenchmarkMetrics`], exportable as CSV.
//! - [`trace`] converts browser frame traces into CSV interval series.
//! - [`events::frame_events`] turns a frame's
//!   [`StepResult`](drape_solver::StepResult) into telemetry events.

pub mod events;
pub mod metrics;
pub mod runner;
pub mod trace;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use trace::{analyze, analyze_dir, analyze_file, FrameRow, FrameSeries};
