use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reversi_tui::config::{AppConfig, LogConfig};
use reversi_tui::ui::{App, SessionEnd};

/// Play Reversi in the terminal.
#[derive(Parser)]
#[command(name = "reversi", about = "Two-player Reversi in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "reversi.toml")]
    config: PathBuf,

    /// Override the board size (even, 4 to 26)
    #[arg(long)]
    size: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.game.size = size;
        config.validate().context("invalid --size")?;
    }

    init_logging(&config.log)?;

    let mut app = App::new(config.game.size).context("creating board")?;
    let end = run_terminal(&mut app).context("running terminal UI")?;

    let score = end.score();
    match end {
        SessionEnd::Interrupted(_) => println!("Final stats:"),
        SessionEnd::Completed(_) => println!("Game over"),
    }
    println!("Player 1: {} stones", score.player1);
    println!("Player 2: {} stones", score.player2);
    info!(?end, "session finished");

    Ok(())
}

/// Log to a file; the terminal belongs to the game screen.
fn init_logging(log: &LogConfig) -> Result<()> {
    let file = File::create(&log.file)
        .with_context(|| format!("creating log file {}", log.file.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .with_context(|| format!("parsing log filter '{}'", log.filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initialising logging: {e}"))?;
    Ok(())
}

fn run_terminal(app: &mut App) -> io::Result<SessionEnd> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
