//! Simulation event types.
//!
//! Events are small value types tagged with the frame that produced
//! them.

use serde::{Deserialize, Serialize};

/// A simulation event emitted once per frame per concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed).
    pub frame: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Frame started.
    FrameBegin,

    /// Frame completed.
    FrameEnd {
        /// Wall-clock time for all substeps of the frame (seconds).
        wall_time: f64,
    },

    /// Contacts resolved during the frame, summed over substeps.
    Contacts {
        particle_contacts: u32,
        edge_contacts: u32,
        /// Deepest penetration seen in the frame.
        max_penetration: f64,
    },

    /// Kinetic energy of the free particles after the frame.
    Energy { kinetic: f64 },

    /// Springs skipped because their endpoints coincided.
    Degenerate { springs: u32 },

    /// Custom event for extensibility.
    Custom {
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }

    /// Short name of the payload variant.
    pub fn label(&self) -> &str {
        match &self.kind {
            EventKind::FrameBegin => "frame_begin",
            EventKind::FrameEnd { .. } => "frame_end",
            EventKind::Contacts { .. } => "contacts",
            EventKind::Energy { .. } => "energy",
            EventKind::Degenerate { .. } => "degenerate",
            EventKind::Custom { label, .. } => label,
        }
    }
}
