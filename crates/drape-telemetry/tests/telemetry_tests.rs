//! Integration tests for drape-telemetry.

use drape_telemetry::{EventBus, EventKind, EventSink, SimulationEvent, TracingSink, VecSink};

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn emit_and_flush_reaches_sink() {
    let sink = VecSink::new();
    let events = sink.events();
    let mut bus = EventBus::new().with_sink(sink);

    bus.emit(SimulationEvent::new(0, EventKind::FrameBegin));
    bus.emit(SimulationEvent::new(0, EventKind::FrameEnd { wall_time: 0.001 }));
    assert!(events.lock().unwrap().is_empty());

    bus.flush();
    let got = events.lock().unwrap();
    assert_eq!(got.len(), 2);
    assert_eq!(got[0].kind, EventKind::FrameBegin);
}

#[test]
fn disabled_bus_drops_events() {
    let sink = VecSink::new();
    let mut bus = EventBus::new().with_sink(sink.clone());
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(SimulationEvent::new(0, EventKind::FrameBegin));
    bus.flush();
    assert!(sink.snapshot().is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let a = VecSink::new();
    let b = VecSink::new();
    let mut bus = EventBus::new().with_sink(a.clone()).with_sink(b.clone());
    assert_eq!(bus.sink_count(), 2);

    bus.emit_all((0..3).map(|f| SimulationEvent::new(f, EventKind::Energy { kinetic: 1.0 })));
    bus.finish();

    assert_eq!(a.snapshot().len(), 3);
    assert_eq!(b.snapshot().len(), 3);
}

#[test]
fn filtered_sink_sees_only_its_labels() {
    let all = VecSink::new();
    let contacts = VecSink::new();
    let mut bus = EventBus::new()
        .with_sink(all.clone())
        .with_filtered_sink(contacts.clone(), &["contacts"]);

    bus.emit(SimulationEvent::new(0, EventKind::FrameBegin));
    bus.emit(SimulationEvent::new(
        0,
        EventKind::Contacts {
            particle_contacts: 2,
            edge_contacts: 0,
            max_penetration: 0.1,
        },
    ));
    assert_eq!(bus.flush(), 2);

    assert_eq!(all.snapshot().len(), 2);
    let got = contacts.snapshot();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].label(), "contacts");
    assert_eq!(bus.dispatched(), 2);
}

#[test]
fn detached_sender_delivers_on_flush() {
    let sink = VecSink::new();
    let mut bus = EventBus::new().with_sink(sink.clone());
    let tx = bus.sender();

    std::thread::spawn(move || {
        tx.send(SimulationEvent::new(3, EventKind::Energy { kinetic: 0.5 })).unwrap();
    })
    .join()
    .unwrap();

    assert!(sink.snapshot().is_empty());
    bus.flush();
    assert_eq!(sink.snapshot()[0].frame, 3);
}

#[test]
fn disabling_discards_queued_events() {
    let sink = VecSink::new();
    let mut bus = EventBus::new().with_sink(sink.clone());
    bus.emit(SimulationEvent::new(0, EventKind::FrameBegin));
    bus.set_enabled(false);

    assert_eq!(bus.flush(), 1);
    assert!(sink.snapshot().is_empty());
    assert_eq!(bus.dispatched(), 0);
}

#[test]
fn tracing_sink_accepts_all_kinds() {
    let mut sink = TracingSink::default();
    for kind in [
        EventKind::FrameBegin,
        EventKind::FrameEnd { wall_time: 0.5 },
        EventKind::Contacts {
            particle_contacts: 3,
            edge_contacts: 1,
            max_penetration: 0.2,
        },
        EventKind::Degenerate { springs: 2 },
    ] {
        sink.handle(&SimulationEvent::new(7, kind));
    }
    assert_eq!(sink.name(), "tracing_sink");
}

// ─── Event Tests ──────────────────────────────────────────────

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::Contacts {
            particle_contacts: 12,
            edge_contacts: 0,
            max_penetration: 0.5,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("particle_contacts"));

    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn custom_event_label() {
    let event = SimulationEvent::new(
        1,
        EventKind::Custom {
            label: "wind_gust".into(),
            payload: "{}".into(),
        },
    );
    assert_eq!(event.label(), "wind_gust");
    assert_eq!(SimulationEvent::new(1, EventKind::FrameBegin).label(), "frame_begin");
}
