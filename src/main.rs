use std::io;
use std::panic;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};

use neon_snake::app::App;
use neon_snake::config::{SPEED_LEVEL_MAX, SPEED_LEVEL_MIN};
use neon_snake::feedback::{FeedbackClient, FeedbackSource, GeminiFeedback};
use neon_snake::game::GameSettings;
use neon_snake::input::map_key;
use neon_snake::obstacles::Difficulty;
use neon_snake::renderer;
use neon_snake::terminal_runtime::{TerminalGuard, restore_terminal};

#[derive(Debug, Parser)]
#[command(name = "neon-snake", version, about = "Neon Snake for the terminal")]
struct Cli {
    /// Obstacle layout preset.
    #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Initial speed level, 1 (slowest) to 5 (fastest).
    #[arg(long, default_value_t = 3,
          value_parser = clap::value_parser!(u8).range(i64::from(SPEED_LEVEL_MIN)..=i64::from(SPEED_LEVEL_MAX)))]
    speed: u8,

    /// Skip the menu and start playing immediately.
    #[arg(long)]
    no_menu: bool,

    /// Never call the remote feedback service; always show the canned remark.
    #[arg(long)]
    no_feedback: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let source: Option<Arc<dyn FeedbackSource>> = if cli.no_feedback {
        None
    } else {
        match GeminiFeedback::from_env() {
            Ok(gemini) => Some(Arc::new(gemini)),
            Err(error) => {
                eprintln!("Feedback disabled: {error}");
                None
            }
        }
    };

    let settings = GameSettings {
        difficulty: cli.difficulty,
        speed_level: cli.speed,
    };
    let mut app = App::new(settings, FeedbackClient::new(source));
    if cli.no_menu {
        app.start_game(Instant::now());
    }

    install_panic_hook();
    run(&mut app)
}

fn run(app: &mut App) -> io::Result<()> {
    let mut guard = TerminalGuard::acquire()?;

    while !app.should_quit {
        let now = Instant::now();
        guard
            .terminal_mut()
            .draw(|frame| renderer::render(frame, app, now))?;

        let timeout = app.poll_timeout(now);
        if event::poll(timeout)? {
            drain_key_events(app)?;
        }

        app.update(Instant::now());
        app.poll_feedback();
    }

    Ok(())
}

/// Handles every queued key event without blocking.
///
/// Rapid presses between two ticks all reach the app; the direction mailbox
/// keeps only the most recent of them.
fn drain_key_events(app: &mut App) -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if let Some(input) = map_key(key) {
                app.handle_input(input, Instant::now());
            }
        }

        if !event::poll(Duration::ZERO)? {
            return Ok(());
        }
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
