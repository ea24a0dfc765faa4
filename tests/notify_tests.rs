//! Completion notification tests.
//!
//! These tests verify the host-facing side of a win:
//! - Custom sinks receive the event at both scopes
//! - Payload fields match the session
//! - Borrowed sinks work through the `&mut S` impl

use memory_match::core::{CardId, Difficulty, GameConfig};
use memory_match::notify::{CompletionEvent, CompletionSink, Scope};
use memory_match::{MemoryGame, TokenType};

/// Host stand-in that records serialized payloads per scope.
#[derive(Default)]
struct HostChannel {
    local: Vec<String>,
    parent: Vec<String>,
}

impl CompletionSink for HostChannel {
    fn deliver(&mut self, scope: Scope, event: &CompletionEvent) {
        let json = event.to_json().expect("event serializes");
        match scope {
            Scope::Local => self.local.push(json),
            Scope::Parent => self.parent.push(json),
        }
    }
}

fn play_to_win<S: CompletionSink>(game: &mut MemoryGame<S>) {
    game.click(CardId(0), 0);
    game.click(CardId(1), 0);
    game.advance(500);
    game.click(CardId(2), 4_000);
    game.click(CardId(3), 4_000);
    game.advance(4_500);
}

#[test]
fn test_host_receives_both_scopes() {
    let config = GameConfig::new(Difficulty::Medium).with_content_id("unit-7-memory");
    let layout = [TokenType::Moon, TokenType::Moon, TokenType::Sun, TokenType::Sun];
    let mut game = MemoryGame::with_layout(config, &layout, HostChannel::default()).unwrap();

    play_to_win(&mut game);

    let host = game.into_sink();
    assert_eq!(host.local.len(), 1);
    assert_eq!(host.parent.len(), 1);
    assert_eq!(host.local[0], host.parent[0]);

    let value: serde_json::Value = serde_json::from_str(&host.local[0]).unwrap();
    assert_eq!(value["contentId"], "unit-7-memory");
    assert_eq!(value["completed"], true);
    assert_eq!(value["score"], 1000 - 20 - 4);
    assert_eq!(value["maxScore"], 1000);
    assert_eq!(value["timeSpent"], 4_500);
    assert_eq!(value["data"]["moves"], 2);
    assert_eq!(value["data"]["pairs"], 2);
    assert_eq!(value["data"]["difficulty"], "custom");
}

#[test]
fn test_borrowed_sink() {
    let mut host = HostChannel::default();
    {
        let layout = [TokenType::Leaf, TokenType::Leaf, TokenType::Drop, TokenType::Drop];
        let mut game = MemoryGame::with_layout(GameConfig::default(), &layout, &mut host).unwrap();
        play_to_win(&mut game);
        assert!(game.completion_sent());
    }
    assert_eq!(host.local.len(), 1);
}

#[test]
fn test_no_event_before_win() {
    let layout = [TokenType::Leaf, TokenType::Leaf, TokenType::Drop, TokenType::Drop];
    let mut game = MemoryGame::with_layout(GameConfig::default(), &layout, HostChannel::default()).unwrap();

    game.click(CardId(0), 0);
    game.click(CardId(1), 0);
    game.advance(500);

    assert!(!game.completion_sent());
    assert!(game.sink().local.is_empty());
}
