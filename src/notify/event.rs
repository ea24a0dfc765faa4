//! Completion event payload.
//!
//! Field names follow the host's camelCase payload:
//!
//! ```json
//! {
//!   "contentId": "memory-match",
//!   "completed": true,
//!   "score": 970,
//!   "maxScore": 1000,
//!   "timeSpent": 12000,
//!   "data": { "moves": 2, "pairs": 2, "difficulty": "easy" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;
use crate::session::{SessionTracker, MAX_SCORE};

/// Where an event is delivered.
///
/// Hosts may listen at either scope, so every event goes to both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// The embedding frame itself.
    Local,
    /// The enclosing frame.
    Parent,
}

impl Scope {
    /// Delivery order for one event.
    pub const ALL: [Scope; 2] = [Scope::Local, Scope::Parent];
}

/// Session statistics attached to a completion event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionData {
    pub moves: u32,
    pub pairs: usize,
    pub difficulty: Difficulty,
}

/// The fire-once event sent when a session is won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEvent {
    pub content_id: String,
    pub completed: bool,
    pub score: u32,
    pub max_score: u32,
    /// Milliseconds from first click to win.
    pub time_spent: u64,
    pub data: CompletionData,
}

impl CompletionEvent {
    /// Build the event for a won session.
    ///
    /// Returns `None` if the session is not won.
    #[must_use]
    pub fn from_session(
        content_id: &str,
        tracker: &SessionTracker,
        difficulty: Difficulty,
    ) -> Option<Self> {
        let score = tracker.final_score()?;
        Some(Self {
            content_id: content_id.to_string(),
            completed: true,
            score,
            max_score: MAX_SCORE,
            time_spent: tracker.elapsed_ms(),
            data: CompletionData {
                moves: tracker.moves(),
                pairs: tracker.pair_count(),
                difficulty,
            },
        })
    }

    /// Render as JSON for the host channel.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won_tracker() -> SessionTracker {
        let mut t = SessionTracker::new(1);
        t.start(1_000);
        t.on_move();
        t.on_match(13_000);
        t
    }

    #[test]
    fn test_unwon_session_has_no_event() {
        let t = SessionTracker::new(2);
        assert!(CompletionEvent::from_session("x", &t, Difficulty::Easy).is_none());
    }

    #[test]
    fn test_from_session() {
        let event = CompletionEvent::from_session("deck-1", &won_tracker(), Difficulty::Hard).unwrap();

        assert_eq!(event.content_id, "deck-1");
        assert!(event.completed);
        assert_eq!(event.score, 1000 - 10 - 12);
        assert_eq!(event.max_score, 1000);
        assert_eq!(event.time_spent, 12_000);
        assert_eq!(event.data.moves, 1);
        assert_eq!(event.data.pairs, 1);
        assert_eq!(event.data.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_json_shape() {
        let event = CompletionEvent::from_session("deck-1", &won_tracker(), Difficulty::Easy).unwrap();
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();

        assert_eq!(value["contentId"], "deck-1");
        assert_eq!(value["completed"], true);
        assert_eq!(value["maxScore"], 1000);
        assert_eq!(value["timeSpent"], 12_000);
        assert_eq!(value["data"]["moves"], 1);
        assert_eq!(value["data"]["pairs"], 1);
        assert_eq!(value["data"]["difficulty"], "easy");
    }
}
