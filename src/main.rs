// src/main.rs
use std::{io::Stdout, path::PathBuf, time::{Duration, Instant}};
use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::prelude::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use tracing::info;

use estrazione::app::App;
use estrazione::clock::TickSchedule;
use estrazione::config::Settings;
use estrazione::labels::{Labels, Lang};
use estrazione::roster::Roster;
use estrazione::selection::{RandomSource, RngSource};
use estrazione::theme::Theme;
use estrazione::{input, logging, ui};

/// How long to block on input when no animation is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw students from the class roster, no repeats")]
struct Cli {
    /// TOML file overriding animation timing and language
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed the draw for a reproducible order
    #[arg(long)]
    seed: Option<u64>,

    /// Interface language, overrides the config file
    #[arg(long, value_enum)]
    lang: Option<Lang>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init_tracing(cli.log_file.as_deref())?;

    let settings = Settings::new(cli.config.as_deref()).context("failed to load settings")?;
    let lang = cli.lang.unwrap_or(settings.lang);

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(RngSource(StdRng::seed_from_u64(seed))),
        None => Box::new(RngSource(rand::thread_rng())),
    };
    let mut app = App::new(Roster::default(), settings.timing(), rng, lang);
    info!(entries = app.selection.len(), ?lang, seeded = cli.seed.is_some(), "starting");

    install_panic_hook();
    let mut terminal = setup_terminal(Labels::for_lang(lang).title)?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    info!(drawn = app.selection.picked_count(), "exiting");
    result
}

fn setup_terminal(title: &str) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    rollback_on_err(enter_screen(title), reset_terminal)
}

fn enter_screen(title: &str) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(title))?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Best-effort restore for paths where the terminal handle is gone.
fn reset_terminal() {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show);
}

/// Puts the terminal back before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        reset_terminal();
        default_hook(info);
    }));
}

/// Runs `undo` when `result` is an error, then hands the result back.
fn rollback_on_err<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

/// Single-threaded loop: input and timer ticks are handled one at a time.
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let theme = Theme::default();
    let mut schedule = TickSchedule::new(app.sequencer.timing());

    loop {
        terminal.draw(|f| ui::render(f, app, &theme))?;

        let now = Instant::now();
        schedule.sync(app.sequencer.active_source(), now);

        if event::poll(schedule.timeout(now, IDLE_POLL))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && input::handle_key(key, app) {
                    break;
                }
            }
        }

        let now = Instant::now();
        schedule.sync(app.sequencer.active_source(), now);
        if let Some(source) = schedule.poll(now) {
            app.on_tick(source).context("extraction animation failed")?;
        }
    }

    Ok(())
}
