//! Bridge from frame results to telemetry events.

use drape_solver::StepResult;
use drape_telemetry::{EventKind, SimulationEvent};

/// Events describing one stepped frame.
///
/// A paused frame yields nothing. Contact and degenerate-spring events
/// are only produced when there is something to report.
pub fn frame_events(result: &StepResult, kinetic: f64) -> Vec<SimulationEvent> {
    if result.paused {
        return Vec::new();
    }

    let frame = result.frame;
    let mut events = vec![SimulationEvent::new(frame, EventKind::FrameBegin)];

    if result.contact_count() > 0 {
        events.push(SimulationEvent::new(
            frame,
            EventKind::Contacts {
                particle_contacts: result.particle_contacts.resolved_count,
                edge_contacts: result.edge_contacts.resolved_count,
                max_penetration: result.max_penetration(),
            },
        ));
    }
    if result.degenerate_springs > 0 {
        events.push(SimulationEvent::new(
            frame,
            EventKind::Degenerate {
                springs: result.degenerate_springs,
            },
        ));
    }

    events.push(SimulationEvent::new(frame, EventKind::Energy { kinetic }));
    events.push(SimulationEvent::new(
        frame,
        EventKind::FrameEnd {
            wall_time: result.wall_time,
        },
    ));
    events
}
