//! The owned session context.

use crate::cards::{Card, CardStore, DeckBuilder, TokenType};
use crate::core::{CardId, ConfigError, Difficulty, GameConfig, GameRng, Generation, Result};
use crate::notify::{CompletionEvent, CompletionNotifier, CompletionSink};
use crate::session::SessionTracker;
use crate::turn::{ClickOutcome, ResolveOutcome, ScheduledResolution, TurnPhase, TurnResolver};

use super::view::BoardSnapshot;

/// One active memory game and everything its session owns.
///
/// All transitions take `&mut self` and run to completion; the only deferred
/// mutations are the `ScheduledResolution`s returned from `click`, which the
/// host feeds back through `resolve` or `advance`.
pub struct MemoryGame<S: CompletionSink> {
    config: GameConfig,
    rng: GameRng,
    generation: Generation,
    store: CardStore,
    resolver: TurnResolver,
    tracker: SessionTracker,
    notifier: CompletionNotifier,
    /// Fixed board layout; when set, `new_game` reuses it instead of shuffling.
    layout: Option<Vec<TokenType>>,
    sink: S,
}

impl<S: CompletionSink> MemoryGame<S> {
    /// Start a game with a freshly shuffled deck.
    pub fn new(config: GameConfig, sink: S) -> Result<Self> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed);
        let deck = DeckBuilder::build(config.difficulty.pair_count, &mut rng)?;
        Ok(Self::assemble(config, rng, deck, None, sink))
    }

    /// Start a game on a fixed, unshuffled layout.
    ///
    /// The config's pair count is replaced by the layout's. A layout that
    /// does not fit the preset's pair count is reported as `Custom`.
    pub fn with_layout(mut config: GameConfig, layout: &[TokenType], sink: S) -> Result<Self> {
        let deck = DeckBuilder::from_tokens(layout)?;
        let pair_count = deck.len() / 2;
        if pair_count != config.difficulty.pair_count {
            config.difficulty.difficulty = Difficulty::Custom;
            config.difficulty.pair_count = pair_count;
        }
        if config.difficulty.grid_columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        let rng = GameRng::new(config.seed);
        Ok(Self::assemble(config, rng, deck, Some(layout.to_vec()), sink))
    }

    fn assemble(
        config: GameConfig,
        rng: GameRng,
        deck: Vec<Card>,
        layout: Option<Vec<TokenType>>,
        sink: S,
    ) -> Self {
        let generation = Generation::initial();
        tracing::info!(
            %generation,
            difficulty = %config.difficulty.difficulty,
            pairs = config.difficulty.pair_count,
            "new game"
        );
        Self {
            resolver: TurnResolver::new(generation, config.timing),
            tracker: SessionTracker::new(config.difficulty.pair_count),
            store: CardStore::new(deck),
            notifier: CompletionNotifier::new(),
            config,
            rng,
            generation,
            layout,
            sink,
        }
    }

    /// Handle a click intent on card `id`.
    pub fn click(&mut self, id: CardId, now_ms: u64) -> ClickOutcome {
        let outcome = self
            .resolver
            .select(&mut self.store, &mut self.tracker, id, now_ms);
        if let ClickOutcome::Ignored(reason) = outcome {
            tracing::trace!(card = %id, ?reason, "click ignored");
        }
        outcome
    }

    /// Apply a scheduled resolution whose delay has elapsed.
    ///
    /// Tasks this session did not schedule, including altered copies, are
    /// discarded as `Stale`. A task fired before `due_at_ms` reports
    /// `NotDue` and stays queued.
    pub fn resolve(&mut self, task: &ScheduledResolution, now_ms: u64) -> ResolveOutcome {
        let outcome = self
            .resolver
            .resolve(&mut self.store, &mut self.tracker, task, now_ms);
        self.after_resolve(outcome);
        outcome
    }

    /// Apply every queued resolution due at `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Vec<ResolveOutcome> {
        let outcomes = self
            .resolver
            .advance(&mut self.store, &mut self.tracker, now_ms);
        for &outcome in &outcomes {
            self.after_resolve(outcome);
        }
        outcomes
    }

    fn after_resolve(&mut self, outcome: ResolveOutcome) {
        if !matches!(outcome, ResolveOutcome::Matched { won: true, .. }) {
            return;
        }
        let difficulty = self.config.difficulty.difficulty;
        let Some(event) = CompletionEvent::from_session(&self.config.content_id, &self.tracker, difficulty) else {
            return;
        };
        tracing::info!(
            generation = %self.generation,
            moves = event.data.moves,
            score = event.score,
            time_spent = event.time_spent,
            "session won"
        );
        self.notifier.notify(&event, &mut self.sink);
    }

    /// Timer tick: refresh elapsed time while the session is active.
    pub fn tick(&mut self, now_ms: u64) {
        self.tracker.tick(now_ms);
    }

    /// Discard the session and deal a new one with the same difficulty.
    ///
    /// Bumps the generation, so resolutions scheduled before the call become
    /// stale. The RNG is not reseeded; each new game gets a fresh shuffle.
    pub fn new_game(&mut self) -> Result<()> {
        let deck = match &self.layout {
            Some(layout) => DeckBuilder::from_tokens(layout)?,
            None => DeckBuilder::build(self.config.difficulty.pair_count, &mut self.rng)?,
        };
        self.generation = self.generation.next();
        self.store = CardStore::new(deck);
        self.resolver = TurnResolver::new(self.generation, self.config.timing);
        self.tracker = SessionTracker::new(self.config.difficulty.pair_count);
        self.notifier = CompletionNotifier::new();
        tracing::info!(generation = %self.generation, "new game");
        Ok(())
    }

    /// Read model for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }

    /// Card state.
    #[must_use]
    pub fn cards(&self) -> &CardStore {
        &self.store
    }

    /// Session progress.
    #[must_use]
    pub fn session(&self) -> &SessionTracker {
        &self.tracker
    }

    /// Turn state and pending resolutions.
    #[must_use]
    pub fn turn(&self) -> &TurnResolver {
        &self.resolver
    }

    /// Current state machine phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.resolver.phase()
    }

    /// Current session identity.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Has the completion event been sent this session?
    #[must_use]
    pub fn completion_sent(&self) -> bool {
        self.notifier.has_fired()
    }

    /// The completion sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the game and return its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
