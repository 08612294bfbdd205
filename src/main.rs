use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use gridsnake::config::{GameConfig, GlyphSet, GLYPHS_ASCII, GLYPHS_UNICODE};
use gridsnake::game::{GameState, RunState};
use gridsnake::input::{GameInput, InputHandler};
use gridsnake::renderer;
use gridsnake::theme::{Theme, ThemeCatalog};

/// How long one input poll blocks; doubles as the frame pacing sleep.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(15);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Color theme id (see --list-themes).
    #[arg(long)]
    theme: Option<String>,

    /// Print available theme ids and exit.
    #[arg(long = "list-themes")]
    list_themes: bool,

    /// Use plain ASCII glyphs instead of block-drawing characters.
    #[arg(long)]
    ascii: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let catalog = ThemeCatalog::load();

    if cli.list_themes {
        for id in catalog.ids() {
            println!("{id}");
        }
        return Ok(());
    }

    let theme = match cli.theme.as_deref() {
        Some(id) => match catalog.get(id) {
            Some(theme) => *theme,
            None => {
                eprintln!("Unknown theme {id:?}; using the default.");
                catalog.default_theme()
            }
        },
        None => catalog.default_theme(),
    };
    let glyphs = if cli.ascii { GLYPHS_ASCII } else { GLYPHS_UNICODE };

    let config = GameConfig::default();
    config
        .validate()
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error.to_string()))?;

    install_panic_hook();

    let result = run(config, theme, glyphs);
    cleanup_terminal()?;
    result
}

fn run(config: GameConfig, theme: Theme, glyphs: GlyphSet) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut input = InputHandler::new();
    let mut state = GameState::new(config);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, &theme, &glyphs))?;

        if let Some(game_input) = input.poll_input(INPUT_POLL_INTERVAL)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Confirm if state.run_state == RunState::GameOver => state.reset(),
                GameInput::Confirm => {}
                GameInput::Direction(direction) => state.set_direction(direction),
            }
        }

        // Fixed cadence: the timer keeps firing after game over and tick()
        // no-ops on its own.
        if last_tick.elapsed() >= config.tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
