//! Frame-buffered event dispatch.
//!
//! Producers queue events with [`EventBus::emit`] or through a detached
//! [`EventBus::sender`]. Nothing reaches a sink until the owner calls
//! [`EventBus::flush`], normally once per frame, so sinks never run in
//! the middle of a step.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// A sink plus the event labels it subscribed to.
struct Subscription {
    sink: Box<dyn EventSink>,
    /// `None` receives everything.
    labels: Option<Vec<&'static str>>,
}

impl Subscription {
    fn wants(&self, event: &SimulationEvent) -> bool {
        match &self.labels {
            None => true,
            Some(labels) => labels.iter().any(|l| *l == event.label()),
        }
    }
}

/// Queue of pending simulation events and the sinks they go to.
pub struct EventBus {
    tx: Sender<SimulationEvent>,
    rx: Receiver<SimulationEvent>,
    subscriptions: Vec<Subscription>,
    enabled: bool,
    dispatched: u64,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            subscriptions: Vec::new(),
            enabled: true,
            dispatched: 0,
        }
    }

    /// Subscribes `sink` to every event.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.subscriptions.push(Subscription { sink, labels: None });
    }

    /// Subscribes `sink` to events whose [`SimulationEvent::label`] is
    /// one of `labels`.
    pub fn add_filtered_sink(&mut self, sink: Box<dyn EventSink>, labels: &[&'static str]) {
        self.subscriptions.push(Subscription {
            sink,
            labels: Some(labels.to_vec()),
        });
    }

    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.add_sink(Box::new(sink));
        self
    }

    pub fn with_filtered_sink(mut self, sink: impl EventSink + 'static, labels: &[&'static str]) -> Self {
        self.add_filtered_sink(Box::new(sink), labels);
        self
    }

    /// While disabled, `emit` drops events and anything already queued
    /// is discarded at the next flush.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Producer handle that can outlive a borrow of the bus.
    ///
    /// Events sent through it are delivered by the next flush.
    pub fn sender(&self) -> Sender<SimulationEvent> {
        self.tx.clone()
    }

    pub fn emit(&self, event: SimulationEvent) {
        if self.enabled {
            // `rx` is owned by `self`, so the channel is never closed here.
            let _ = self.tx.send(event);
        }
    }

    pub fn emit_all(&self, events: impl IntoIterator<Item = SimulationEvent>) {
        events.into_iter().for_each(|event| self.emit(event));
    }

    /// Delivers every queued event to its subscribers, in emission order.
    ///
    /// Returns the number of events drained from the queue.
    pub fn flush(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.rx.try_recv() {
            drained += 1;
            if !self.enabled {
                continue;
            }
            for sub in self.subscriptions.iter_mut().filter(|s| s.wants(&event)) {
                sub.sink.handle(&event);
            }
        }
        if self.enabled {
            self.dispatched += drained as u64;
        }
        drained
    }

    /// Final flush, then [`EventSink::finalize`] on every sink.
    pub fn finish(&mut self) {
        self.flush();
        for sub in &mut self.subscriptions {
            sub.sink.finalize();
        }
    }

    pub fn sink_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Events delivered by all flushes so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
