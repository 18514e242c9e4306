mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod sound;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::TimerSettings;
use persistence::{
    clear_dark_mode, ensure_pomo_dir, init_local_pomo, log_file, prefs_file, resolve_dark_mode,
    save_dark_mode,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sound::{CommandPlayer, CuePlayer, Silent, TerminalBell};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A terminal Pomodoro timer with a simple task checklist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Work interval length in minutes
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..))]
    work: u32,

    /// Short break length in minutes
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    short_break: u32,

    /// Long break length in minutes
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    long_break: u32,

    /// Work sessions before a long break
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    sessions: u32,

    /// Play cues by running this command with the clip URL appended
    #[arg(long, conflicts_with = "no_sound")]
    sound_command: Option<String>,

    /// Disable all sound cues
    #[arg(long)]
    no_sound: bool,

    /// Disable desktop notifications when an interval finishes
    #[arg(long)]
    no_notify: bool,

    /// Use plain ASCII mode glyphs instead of emoji
    #[arg(long)]
    ascii: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pomo directory in the current directory
    Init,
    /// Set or clear the stored dark-mode preference
    Theme {
        #[arg(value_enum)]
        choice: ThemeChoice,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
    /// Forget the stored choice and follow the terminal
    System,
}

impl Cli {
    fn settings(&self) -> TimerSettings {
        TimerSettings {
            work_minutes: self.work,
            short_break_minutes: self.short_break,
            long_break_minutes: self.long_break,
            sessions_until_long_break: self.sessions,
        }
    }

    /// Controller configured from the command line
    fn app_state(&self, dark_mode: bool, prefs_path: Option<PathBuf>) -> AppState {
        let mut app = AppState::new(self.settings(), dark_mode, prefs_path);
        app.desktop_notifications = !self.no_notify;
        app.use_emoji = !self.ascii;
        app
    }

    fn cue_player(&self) -> Box<dyn CuePlayer> {
        if self.no_sound {
            return Box::new(Silent);
        }
        match self.sound_command.as_deref().and_then(CommandPlayer::from_command_line) {
            Some(player) => Box::new(player),
            None => Box::new(TerminalBell),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Init) => {
            let pomo_dir = init_local_pomo()?;
            println!("Initialized pomo directory: {}", pomo_dir.display());
            println!();
            println!("Pomo will now keep its preferences and log in this directory.");
            Ok(())
        }
        Some(Commands::Theme { choice }) => {
            let path = prefs_file()?;
            match choice {
                ThemeChoice::Dark => save_dark_mode(&path, true)?,
                ThemeChoice::Light => save_dark_mode(&path, false)?,
                ThemeChoice::System => clear_dark_mode(&path)?,
            }
            println!("Theme preference saved to {}", path.display());
            Ok(())
        }
        None => run_tui(&cli),
    }
}

fn run_tui(cli: &Cli) -> Result<()> {
    let pomo_dir = ensure_pomo_dir()?;
    logging::init_logging(&log_file()?)?;
    info!(dir = %pomo_dir.display(), "starting pomo");

    let prefs_path = prefs_file()?;
    let dark_mode = resolve_dark_mode(&prefs_path);

    let mut app = cli.app_state(dark_mode, Some(prefs_path));
    let mut player = cli.cue_player();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, player.as_mut());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.teardown();
    flush_cues(&mut app, player.as_mut());
    info!("pomo exited");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    player: &mut dyn CuePlayer,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let timeout = ticker::poll_timeout(&app.ticker, Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key, Instant::now()) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
        flush_cues(app, player);
    }
}

/// Hand queued cues to the player
fn flush_cues(app: &mut AppState, player: &mut dyn CuePlayer) {
    for cue in app.drain_cues() {
        player.play(cue);
    }
}
