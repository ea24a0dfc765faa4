//! Completion delivery.

use super::event::{CompletionEvent, Scope};

/// Receiver for completion events.
///
/// The host implements this to forward events to its notification channel.
pub trait CompletionSink {
    /// Deliver one event to one scope.
    fn deliver(&mut self, scope: Scope, event: &CompletionEvent);
}

/// Sink that keeps every delivery in memory.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    deliveries: Vec<(Scope, CompletionEvent)>,
}

impl CollectingSink {
    /// Empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliveries received so far.
    #[must_use]
    pub fn deliveries(&self) -> &[(Scope, CompletionEvent)] {
        &self.deliveries
    }

    /// Distinct events received (one per scope pair).
    pub fn events(&self) -> impl Iterator<Item = &CompletionEvent> {
        self.deliveries
            .iter()
            .filter(|(scope, _)| *scope == Scope::Local)
            .map(|(_, event)| event)
    }
}

impl CompletionSink for CollectingSink {
    fn deliver(&mut self, scope: Scope, event: &CompletionEvent) {
        self.deliveries.push((scope, event.clone()));
    }
}

/// Sink that logs the serialized event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl CompletionSink for TracingSink {
    fn deliver(&mut self, scope: Scope, event: &CompletionEvent) {
        match event.to_json() {
            Ok(json) => tracing::info!(?scope, %json, "completion event"),
            Err(err) => tracing::warn!(?scope, %err, "failed to serialize completion event"),
        }
    }
}

impl<S: CompletionSink + ?Sized> CompletionSink for &mut S {
    fn deliver(&mut self, scope: Scope, event: &CompletionEvent) {
        (**self).deliver(scope, event);
    }
}

/// Fire-once guard around a sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionNotifier {
    fired: bool,
}

impl CompletionNotifier {
    /// Notifier that has not fired.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every scope, unless already fired this session.
    ///
    /// Returns true if the event was delivered.
    pub fn notify<S: CompletionSink + ?Sized>(&mut self, event: &CompletionEvent, sink: &mut S) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        for scope in Scope::ALL {
            sink.deliver(scope, event);
        }
        true
    }

    /// Has the event been sent?
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
