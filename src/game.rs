use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Difficulty;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, GameInput};
use crate::overlay::{FramedClip, MediaPlayback, OverlayPlayer, OverlayProgress};
use crate::progression::ProgressionTracker;
use crate::round::{RoundOutcome, RoundState, TailRule};

/// Current high-level screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameMode {
    Intro,
    DifficultySelect,
    Playing,
    Paused,
    GameOver,
    GameWon,
    Overlay,
}

/// Informational signals for the audio and effects collaborators.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    Eat,
    Collision,
    Timeout,
    Win,
    OverlayStart { first_time: bool },
    OverlayLoopComplete,
}

/// Session parameters fixed at start-up.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub grid: Grid,
    pub tail_rule: TailRule,
    /// Seed for food placement; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            grid: Grid::STANDARD,
            tail_rule: TailRule::default(),
            seed: None,
        }
    }
}

/// All mutable state of one play session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub mode: GameMode,
    pub round: RoundState,
    pub progression: ProgressionTracker,
    pub overlay: Option<OverlayPlayer>,
    /// Set once the first-clear cutscene has been shown this session.
    pub first_clear_done: bool,
    pub terminated: bool,
    options: SessionOptions,
    rng: StdRng,
}

impl SessionContext {
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let progression = ProgressionTracker::new();
        let round = RoundState::new(
            &mut rng,
            options.grid,
            progression.difficulty(),
            options.tail_rule,
        );

        Self {
            mode: GameMode::Intro,
            round,
            progression,
            overlay: None,
            first_clear_done: false,
            terminated: false,
            options,
            rng,
        }
    }

    #[must_use]
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            debug!("mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    fn start_round(&mut self) {
        let difficulty = self.progression.difficulty();
        self.round = RoundState::new(
            &mut self.rng,
            self.options.grid,
            difficulty,
            self.options.tail_rule,
        );
        info!(
            "round started: {difficulty} +{} at {} ticks/s",
            self.progression.completed_cycles(),
            self.progression.effective_speed()
        );
        self.set_mode(GameMode::Playing);
    }

    fn routes_to_first_clear(&self) -> bool {
        self.round.difficulty == Difficulty::Hard
            && self.progression.completed_cycles() == 0
            && !self.first_clear_done
    }
}

/// Applies one control event to the session.
pub fn handle_input(ctx: &mut SessionContext, input: GameInput) {
    if ctx.terminated {
        return;
    }

    match (ctx.mode, input) {
        (_, GameInput::Quit) => {
            info!("quit requested from {:?}", ctx.mode);
            ctx.terminated = true;
        }
        (GameMode::Intro, GameInput::Confirm) => ctx.set_mode(GameMode::DifficultySelect),
        (GameMode::DifficultySelect, GameInput::Select(difficulty)) => {
            ctx.progression.select(difficulty);
            ctx.start_round();
        }
        (GameMode::Playing | GameMode::Paused, GameInput::Direction(direction)) => {
            ctx.round.steer(direction);
        }
        (GameMode::Playing, GameInput::PauseToggle) => ctx.set_mode(GameMode::Paused),
        (GameMode::Paused, GameInput::PauseToggle) => ctx.set_mode(GameMode::Playing),
        (GameMode::GameOver, GameInput::Confirm) => {
            ctx.progression.on_loss();
            ctx.start_round();
        }
        (GameMode::GameWon, GameInput::Confirm) => {
            ctx.progression.on_win();
            ctx.start_round();
        }
        (GameMode::Overlay, GameInput::Skip) => {
            if let Some(overlay) = ctx.overlay.as_mut() {
                overlay.skip();
                info!("overlay skipped after {} loops", overlay.loop_count());
            }
            ctx.overlay = None;
            ctx.set_mode(GameMode::DifficultySelect);
        }
        _ => {}
    }
}

/// Advances the active screen by one tick of `delta_ms` wall-clock time.
pub fn advance<M: MediaPlayback + ?Sized>(
    ctx: &mut SessionContext,
    delta_ms: u64,
    media: &mut M,
    events: &mut Vec<GameEvent>,
) {
    if ctx.terminated {
        return;
    }

    match ctx.mode {
        GameMode::Playing => advance_round(ctx, delta_ms, media, events),
        GameMode::Overlay => advance_overlay(ctx, media, events),
        _ => {}
    }
}

fn advance_round<M: MediaPlayback + ?Sized>(
    ctx: &mut SessionContext,
    delta_ms: u64,
    media: &mut M,
    events: &mut Vec<GameEvent>,
) {
    match ctx.round.step(&mut ctx.rng, delta_ms, events) {
        RoundOutcome::Running => {}
        outcome @ (RoundOutcome::Collision | RoundOutcome::Timeout) => {
            info!("round lost ({outcome:?}) with score {}", ctx.round.score);
            ctx.set_mode(GameMode::GameOver);
        }
        RoundOutcome::Won if ctx.routes_to_first_clear() => {
            info!("first full clear, starting overlay");
            ctx.first_clear_done = true;
            ctx.overlay = Some(OverlayPlayer::start(media, true));
            events.push(GameEvent::OverlayStart { first_time: true });
            ctx.set_mode(GameMode::Overlay);
        }
        RoundOutcome::Won => {
            info!("round won with score {}", ctx.round.score);
            ctx.set_mode(GameMode::GameWon);
        }
    }
}

fn advance_overlay<M: MediaPlayback + ?Sized>(
    ctx: &mut SessionContext,
    media: &mut M,
    events: &mut Vec<GameEvent>,
) {
    let Some(overlay) = ctx.overlay.as_mut() else {
        ctx.set_mode(GameMode::DifficultySelect);
        return;
    };

    match overlay.update(media) {
        OverlayProgress::Playing => {}
        OverlayProgress::Looped => events.push(GameEvent::OverlayLoopComplete),
        OverlayProgress::Exhausted => {
            events.push(GameEvent::OverlayLoopComplete);
            info!("overlay finished after {} loops", overlay.loop_count());
            ctx.overlay = None;
            ctx.set_mode(GameMode::DifficultySelect);
        }
    }
}

/// Read-only view of the session for the presentation layer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub mode: GameMode,
    /// Snake cells from tail to head.
    pub snake_cells: Vec<Cell>,
    pub heading: Direction,
    pub food_cell: Cell,
    pub score: u32,
    pub elapsed_ms: u64,
    pub time_limit_ms: u64,
    pub difficulty: Difficulty,
    pub difficulty_index: usize,
    pub completed_cycles: u32,
    pub overlay_loop_count: u32,
    pub grid: Grid,
}

impl Snapshot {
    /// Whole seconds remaining, never negative.
    #[must_use]
    pub fn time_left_secs(&self) -> u64 {
        self.time_limit_ms.saturating_sub(self.elapsed_ms) / 1000
    }
}

/// Owns the session and the cutscene collaborator.
#[derive(Debug)]
pub struct GameStateMachine<M: MediaPlayback = FramedClip> {
    ctx: SessionContext,
    media: M,
}

impl<M: MediaPlayback> GameStateMachine<M> {
    #[must_use]
    pub fn new(options: SessionOptions, media: M) -> Self {
        Self {
            ctx: SessionContext::new(options),
            media,
        }
    }

    /// Applies an input without advancing time.
    pub fn apply_input(&mut self, input: GameInput) {
        handle_input(&mut self.ctx, input);
    }

    /// Advances time without an input.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        advance(&mut self.ctx, delta_ms, &mut self.media, &mut events);
        events
    }

    /// One full tick: at most one input, then `delta_ms` of time.
    pub fn tick(&mut self, input: Option<GameInput>, delta_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if let Some(input) = input {
            handle_input(&mut self.ctx, input);
        }
        advance(&mut self.ctx, delta_ms, &mut self.media, &mut events);
        events
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.ctx.mode
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.ctx.terminated
    }

    #[must_use]
    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SessionContext {
        &mut self.ctx
    }

    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Milliseconds between movement steps at the current speed.
    #[must_use]
    pub fn movement_interval_ms(&self) -> u64 {
        1000 / u64::from(self.ctx.progression.effective_speed().max(1))
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let round = &self.ctx.round;
        Snapshot {
            mode: self.ctx.mode,
            snake_cells: round.snake.cells().copied().collect(),
            heading: round.steering.moving(),
            food_cell: round.food,
            score: round.score,
            elapsed_ms: round.elapsed_ms,
            time_limit_ms: round.time_limit_ms,
            difficulty: round.difficulty,
            difficulty_index: self.ctx.progression.difficulty_index(),
            completed_cycles: self.ctx.progression.completed_cycles(),
            overlay_loop_count: self.ctx.overlay.map_or(0, |overlay| overlay.loop_count()),
            grid: round.grid(),
        }
    }
}
