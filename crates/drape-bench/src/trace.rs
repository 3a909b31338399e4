//! Browser frame-trace analysis.
//!
//! Reads a DevTools performance trace (`{"traceEvents": [...]}`), keeps
//! the `DrawFrame` events of the frame timeline category and converts
//! consecutive timestamps into a CSV series.
//!
//! Trace timestamps are microseconds. Each row holds the frame time
//! relative to the first frame and the interval to the previous frame,
//! both rounded to two decimals and divided by 1000. The column names
//! `time(ms),fps` are kept for compatibility with existing plots even
//! though the second column is a frame interval in milliseconds.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use drape_types::{DrapeError, DrapeResult};

const FRAME_EVENT: &str = "DrawFrame";
const FRAME_CATEGORY: &str = "disabled-by-default-devtools.timeline.frame";
const CSV_HEADER: &str = "time(ms),fps";

#[derive(Deserialize)]
struct TraceFile {
    #[serde(rename = "traceEvents")]
    trace_events: Vec<Value>,
}

/// One interval between consecutive frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow {
    /// Frame time since the first frame (ms).
    pub time: f64,
    /// Interval to the previous frame (ms).
    pub fps: f64,
}

/// Frame interval series extracted from one trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSeries {
    pub rows: Vec<FrameRow>,
}

impl FrameSeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mean interval between frames (ms).
    pub fn mean_interval(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.rows.iter().map(|r| r.fps).sum::<f64>() / self.rows.len() as f64
    }

    /// Frames per second implied by the mean interval.
    pub fn average_fps(&self) -> f64 {
        let mean = self.mean_interval();
        if mean > 0.0 {
            1000.0 / mean
        } else {
            0.0
        }
    }

    /// CSV with header `time(ms),fps` and one row per interval.
    pub fn to_csv(&self) -> String {
        let mut csv = CSV_HEADER.to_string();
        for row in &self.rows {
            csv.push('\n');
            csv.push_str(&format!("{},{}", row.time, row.fps));
        }
        csv
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn frame_timestamp(event: &Value) -> Option<f64> {
    if event.get("name")?.as_str()? != FRAME_EVENT {
        return None;
    }
    if event.get("cat")?.as_str()? != FRAME_CATEGORY {
        return None;
    }
    event.get("ts")?.as_f64()
}

/// Converts trace JSON into a frame series.
///
/// Fewer than two matching frames is an error.
pub fn analyze(json: &str) -> DrapeResult<FrameSeries> {
    let trace: TraceFile =
        serde_json::from_str(json).map_err(|e| DrapeError::Serialization(e.to_string()))?;

    let stamps: Vec<f64> = trace.trace_events.iter().filter_map(frame_timestamp).collect();
    let Some(&t0) = stamps.first() else {
        return Err(DrapeError::Trace("no frames in trace".into()));
    };
    if stamps.len() < 2 {
        return Err(DrapeError::Trace(
            "not enough frames to compute intervals".into(),
        ));
    }

    let rows = stamps
        .windows(2)
        .map(|w| {
            let (prev, cur) = (w[0] - t0, w[1] - t0);
            FrameRow {
                time: round2(cur) / 1000.0,
                fps: round2(cur - prev) / 1000.0,
            }
        })
        .collect();
    Ok(FrameSeries { rows })
}

/// Analyzes `input` and writes the CSV to `output`.
pub fn analyze_file(input: &Path, output: &Path) -> DrapeResult<FrameSeries> {
    let json = fs::read_to_string(input)?;
    let series = analyze(&json)?;
    fs::write(output, series.to_csv())?;
    Ok(series)
}

/// Converts every `.json` trace in `input_dir` into a `.csv` of the same
/// stem in `output_dir`, creating it if needed.
///
/// Traces with too few frames are skipped with a warning. Returns the
/// paths written.
pub fn analyze_dir(input_dir: &Path, output_dir: &Path) -> DrapeResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        warn!(dir = %input_dir.display(), "no .json traces found");
    }

    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        let Some(stem) = input.file_stem() else {
            continue;
        };
        let output = output_dir.join(format!("{}.csv", stem.to_string_lossy()));

        match analyze_file(&input, &output) {
            Ok(series) => {
                info!(
                    input = %input.display(),
                    frames = series.len(),
                    avg_fps = series.average_fps(),
                    "trace converted"
                );
                written.push(output);
            }
            Err(DrapeError::Trace(msg)) => {
                warn!(input = %input.display(), "{msg}, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(written)
}
