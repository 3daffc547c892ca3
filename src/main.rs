use std::path::PathBuf;
use std::time::{Duration, Instant};

use bogie_vs_chicken::config::MENU_TICK_INTERVAL_MS;
use bogie_vs_chicken::cues::EventSink;
use bogie_vs_chicken::error::{AppError, ConfigError};
use bogie_vs_chicken::game::{GameMode, GameStateMachine, SessionOptions};
use bogie_vs_chicken::grid::Grid;
use bogie_vs_chicken::input::map_key_event;
use bogie_vs_chicken::logging::init_file_logger;
use bogie_vs_chicken::overlay::FramedClip;
use bogie_vs_chicken::renderer::{self, ViewInfo};
use bogie_vs_chicken::round::TailRule;
use bogie_vs_chicken::settings::{Settings, default_log_path, load_settings, settings_path};
use bogie_vs_chicken::terminal_runtime::TerminalGuard;
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

/// How long to wait for a key press before redrawing.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(8);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file to read instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not ring the terminal bell on game events.
    #[arg(long = "no-bell")]
    no_bell: bool,

    /// Allow the head to move into the cell the tail is leaving.
    #[arg(long = "lenient-tail")]
    lenient_tail: bool,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace.
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    let level = settings.level_filter()?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = init_file_logger(&log_path, level) {
        eprintln!("Logging disabled: {error}");
    }
    info!("starting with {settings:?}");

    run(&settings)?;

    info!("exited cleanly");
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let path = cli.config.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path)?;

    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.no_bell {
        settings.terminal_bell = false;
    }
    if cli.lenient_tail {
        settings.tail_rule = TailRule::Lenient;
    }
    if let Some(level) = &cli.log_level {
        settings.log_level.clone_from(level);
    }

    Ok(settings)
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let mut session = TerminalGuard::enter()?;
    let mut machine = GameStateMachine::new(
        SessionOptions {
            grid: Grid::STANDARD,
            tail_rule: settings.tail_rule,
            seed: settings.seed,
        },
        FramedClip::default(),
    );
    let sink = EventSink::new(settings.terminal_bell);

    let started = Instant::now();
    let mut last_tick = Instant::now();

    while !machine.is_terminated() {
        let snapshot = machine.snapshot();
        let view = ViewInfo {
            now_ms: duration_ms(started.elapsed()),
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, view))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key_event(key, machine.mode()) {
                    let before = machine.mode();
                    machine.apply_input(input);
                    if machine.mode() != before {
                        last_tick = Instant::now();
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_interval(&machine) {
            let events = machine.advance(duration_ms(elapsed));
            sink.dispatch(&events, || session.ring_bell());
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn tick_interval(machine: &GameStateMachine) -> Duration {
    let millis = match machine.mode() {
        GameMode::Playing | GameMode::Paused => machine.movement_interval_ms(),
        GameMode::Overlay => machine.media().frame_ms(),
        _ => MENU_TICK_INTERVAL_MS,
    };
    Duration::from_millis(millis)
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
