//! Completion notification.
//!
//! When a session is won, the game builds a `CompletionEvent` and hands it
//! to a `CompletionSink` through a `CompletionNotifier`, which guarantees a
//! single delivery per session (to both scopes).

mod event;
mod notifier;

pub use event::{CompletionData, CompletionEvent, Scope};
pub use notifier::{CollectingSink, CompletionNotifier, CompletionSink, TracingSink};
