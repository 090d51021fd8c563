//! txtplot - plot numeric text files in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use txtplot::app::App;
use txtplot::check;
use txtplot::plot::{ColorPalette, Figure, PlotKind};
use txtplot::ui;

#[derive(Parser, Debug)]
#[command(name = "txtplot")]
#[command(about = "Plot whitespace-delimited numeric text files in the terminal", long_about = None)]
struct Args {
    /// Text files to plot, one panel per file
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Kind of plot drawn in every panel
    #[arg(short, long, value_enum, default_value_t = PlotKind::Line)]
    kind: PlotKind,

    /// Heatmap color palette
    #[arg(short, long, value_enum, default_value_t = ColorPalette::Jet)]
    palette: ColorPalette,

    /// Print one rendered frame to stdout instead of opening the viewer
    #[arg(long)]
    headless: bool,

    /// Headless frame width
    #[arg(long, default_value_t = 100)]
    width: u16,

    /// Headless frame height
    #[arg(long, default_value_t = 40)]
    height: u16,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting txtplot");
    }

    // Every file must exist before anything is loaded
    {
        let mut stdout = io::stdout().lock();
        let all_found = check::check_all(&args.files, &mut stdout)?;
        stdout.flush()?;
        if !all_found {
            return Ok(());
        }
    }

    let figure = Figure::load(&args.files, args.kind).context("Failed to load input files")?;
    let mut app = App::new(figure, args.kind, args.palette);

    if args.headless {
        app.show_bars = false;
        app.layout.heatmap.shaded_cells = true;
        // A printed frame has no focus to scroll, so grow it to fit every panel
        let height = app.full_height(args.height);
        if height > args.height {
            tracing::info!(
                "Frame height raised from {} to {} to fit {} panels",
                args.height,
                height,
                app.figure.len()
            );
        }
        let lines = ui::render_lines(&app, args.width, height)?;
        let mut stdout = io::stdout().lock();
        for line in lines {
            writeln!(stdout, "{}", line)?;
        }
        return Ok(());
    }

    // Setup terminal; the guard restores it on every exit path from here on
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    drop(guard);
    terminal.show_cursor()?;

    if args.log.is_some() {
        tracing::info!("txtplot exited");
    }

    res
}

/// Raw mode and the alternate screen, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            tracing::warn!("Failed to leave alternate screen: {}", e);
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (_, KeyCode::Char('q'))
            | (_, KeyCode::Esc) => return Ok(()),

            // Views
            (_, KeyCode::Tab) => app.toggle_kind(),
            (KeyModifiers::NONE, KeyCode::Char('c')) => app.cycle_palette(),
            (_, KeyCode::Char('T')) => app.cycle_theme(),

            // Panel focus
            (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => app.focus_up(),
            (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => app.focus_down(),
            (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('z')) => app.toggle_zoom(),

            _ => {},
        }
        tracing::debug!("Key {:?} -> {}", key.code, app.status);
    }
}
