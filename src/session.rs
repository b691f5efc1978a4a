//! Game session controller.
//!
//! A `Session` owns the one current `GameState` and is the only thing that
//! commits new states. Human input arrives through [`Session::play`],
//! [`Session::draw`] and [`Session::pass`]; computer seats are driven by
//! [`Session::step_computer`] or chained with [`Session::run_computers`].
//!
//! ## Randomness
//!
//! The master seed from `SessionConfig` never drives anything directly. Each
//! game derives two independent streams from it: one for the shuffle, one
//! for computer decisions. A reset forks the master, so a sequence of games
//! is reproducible from one seed.

use tracing::{debug, info, warn};

use crate::ai::{ComputerPolicy, RiskHeuristic};
use crate::cards::CardId;
use crate::core::{
    Action, ConfigError, GameRng, GameState, PlayerId, SessionConfig, COMPUTER_CONTEXT,
    SHUFFLE_CONTEXT,
};
use crate::rules::{GameResult, NinetyNine, PlayRejection, RulesEngine};

/// Result of asking the session to run one computer turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The computer acted and the state moved on.
    Applied { player: PlayerId, action: Action },
    /// The current player is human; nothing happened.
    HumanTurn(PlayerId),
    /// The game is over; nothing happened.
    GameOver(GameResult),
    /// The computer chose an action the rules rejected. The state is
    /// unchanged and asking again would repeat the same choice.
    Stalled { player: PlayerId, rejection: PlayRejection },
}

impl TurnOutcome {
    /// Whether the state changed.
    #[must_use]
    pub fn applied(&self) -> bool {
        matches!(self, TurnOutcome::Applied { .. })
    }
}

/// Build and validate a session for `player_count` seats with default
/// settings and return its opening state.
pub fn initialize_session(player_count: usize) -> Result<GameState, ConfigError> {
    let config = SessionConfig::default().with_player_count(player_count);
    Ok(Session::new(config)?.state().clone())
}

/// Session controller.
pub struct Session<E: RulesEngine = NinetyNine, P: ComputerPolicy<E> = RiskHeuristic> {
    engine: E,
    policy: P,
    config: SessionConfig,
    state: GameState,
    /// Master stream; forked on every reset.
    master: GameRng,
    computer_rng: GameRng,
    games_started: u32,
}

impl Session {
    /// Session with the default engine and heuristic, configured from
    /// `config`.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let engine = NinetyNine::from_config(&config);
        let policy = RiskHeuristic::default().with_draw_probability(config.draw_probability);
        Self::with_parts(engine, policy, config)
    }
}

impl<E: RulesEngine, P: ComputerPolicy<E>> Session<E, P> {
    /// Session with a custom engine and computer policy.
    pub fn with_parts(engine: E, policy: P, config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let master = GameRng::new(config.seed);
        let (state, computer_rng) = Self::deal(&engine, &config, &master);
        info!(
            players = config.player_count,
            ruleset = ?engine.ruleset(),
            seed = config.seed,
            "session started"
        );
        Ok(Self {
            engine,
            policy,
            config,
            state,
            master,
            computer_rng,
            games_started: 1,
        })
    }

    fn deal(engine: &E, config: &SessionConfig, master: &GameRng) -> (GameState, GameRng) {
        let mut shuffle_rng = master.for_context(SHUFFLE_CONTEXT);
        let state = engine.new_game(config, &mut shuffle_rng);
        (state, master.for_context(COMPUTER_CONTEXT))
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Games dealt so far, counting the current one.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.engine.is_terminal(&self.state)
    }

    /// Whether the current player is computer-controlled.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.state.is_in_progress() && self.state.current_player().is_some_and(|p| p.is_computer)
    }

    // === Player input ===

    /// Play `card` for `player`, resolving the total by the active ruleset.
    ///
    /// On rejection the state is untouched.
    pub fn play(&mut self, player: PlayerId, card: CardId) -> Result<(), PlayRejection> {
        self.apply(player, Action::play(card))
    }

    /// Play `card` for `player` with an explicitly resolved total. Under a
    /// bust ruleset a total above 99 ends the game.
    pub fn play_with_total(&mut self, player: PlayerId, card: CardId, total: i32) -> Result<(), PlayRejection> {
        self.engine.check_play(&self.state, player, card)?;
        self.state = self.engine.apply_play(&self.state, player, card, total);
        Ok(())
    }

    pub fn draw(&mut self, player: PlayerId) -> Result<(), PlayRejection> {
        self.apply(player, Action::Draw)
    }

    pub fn pass(&mut self, player: PlayerId) -> Result<(), PlayRejection> {
        self.apply(player, Action::Pass)
    }

    /// Validate and apply any action.
    pub fn apply(&mut self, player: PlayerId, action: Action) -> Result<(), PlayRejection> {
        match action {
            Action::Play { card } => self.engine.check_play(&self.state, player, card)?,
            Action::Draw => self.engine.check_draw(&self.state, player)?,
            Action::Pass => self.engine.check_pass(&self.state, player)?,
        }
        self.state = self.engine.apply_action(&self.state, player, &action);
        Ok(())
    }

    // === Computer turns ===

    /// Let the policy act for the current player if it is a computer.
    pub fn step_computer(&mut self) -> TurnOutcome {
        if let Some(result) = self.result() {
            return TurnOutcome::GameOver(result);
        }
        let Some(current) = self.state.current_player() else {
            return TurnOutcome::HumanTurn(PlayerId::new(0));
        };
        if !current.is_computer {
            return TurnOutcome::HumanTurn(current.id);
        }

        let player = current.id;
        let action = self
            .policy
            .decide(&self.engine, current, &self.state, &mut self.computer_rng);
        debug!(%player, ?action, "computer decided");

        match self.apply(player, action) {
            Ok(()) => TurnOutcome::Applied { player, action },
            Err(rejection) => {
                warn!(%player, ?action, %rejection, "computer turn stalled");
                TurnOutcome::Stalled { player, rejection }
            }
        }
    }

    /// Run consecutive computer turns until a human is to act, the game
    /// ends, a turn stalls, or `max_steps` turns have been applied.
    ///
    /// Returns the number of applied turns and the last outcome. At least
    /// one turn is attempted.
    pub fn run_computers(&mut self, max_steps: usize) -> (usize, TurnOutcome) {
        let max_steps = max_steps.max(1);
        let mut steps = 0;
        loop {
            let outcome = self.step_computer();
            if !outcome.applied() {
                return (steps, outcome);
            }
            steps += 1;
            if steps >= max_steps {
                return (steps, outcome);
            }
        }
    }

    // === Reset ===

    /// Deal a new game from the same config, with streams forked from the
    /// master seed.
    pub fn reset(&mut self) {
        let forked = self.master.fork();
        self.restart(forked);
    }

    /// Deal a new game as if the session had been created with `seed`.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.master = GameRng::new(seed);
        let master = self.master.clone();
        self.restart(master);
    }

    fn restart(&mut self, source: GameRng) {
        let (state, computer_rng) = Self::deal(&self.engine, &self.config, &source);
        self.state = state;
        self.computer_rng = computer_rng;
        self.games_started += 1;
        info!(game = self.games_started, seed = source.seed(), "session reset");
    }
}
