use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use yamlnav::app::AppState;
use yamlnav::config::Config;
use yamlnav::document::tree::YamlFile;
use yamlnav::file::loader::{load_yaml_file, load_yaml_from_stdin};
use yamlnav::input::InputHandler;
use yamlnav::render::{Printer, RenderOptions};
use yamlnav::theme::{get_builtin_theme, list_builtin_themes, Theme};
use yamlnav::ui::UI;

/// yamlnav - A terminal YAML navigator
#[derive(Parser)]
#[command(name = "yamlnav")]
#[command(version)]
#[command(about = "Navigate YAML by path and see the matches highlighted in place", long_about = None)]
struct Cli {
    /// YAML file to open (omit to read from stdin when it is piped)
    file: Option<PathBuf>,

    /// YAML file to open, as an alternative to the positional argument
    #[arg(short = 'f', long = "file", conflicts_with = "file")]
    file_flag: Option<PathBuf>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Show line numbers
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Initial query path
    #[arg(short, long)]
    query: Option<String>,

    /// Print the highlighted file to stdout and exit instead of starting the UI
    #[arg(short, long)]
    print: bool,

    /// Write logs to this file (level from YAMLNAV_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// This ensures that panics are visible even when the terminal is in raw mode with alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Sends tracing output to `path`. Without a path nothing is logged, since
/// the terminal belongs to the UI.
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("YAMLNAV_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn resolve_theme(name: &str) -> Theme {
    get_builtin_theme(name).unwrap_or_else(|| {
        warn!(theme = name, available = ?list_builtin_themes(), "unknown theme, using default");
        eprintln!("Warning: Theme '{}' not found, using default-dark", name);
        Theme::default()
    })
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = Config::load();
    let theme_name = cli.theme.clone().unwrap_or_else(|| config.theme.clone());
    let theme = resolve_theme(&theme_name);
    let line_numbers = cli.line_numbers || config.line_numbers;

    // Read the input BEFORE terminal setup, stdin may be the YAML data
    let (file, stdin_was_piped) = match cli.file.as_ref().or(cli.file_flag.as_ref()) {
        Some(path) => (load_yaml_file(path)?, false),
        None if !io::stdin().is_terminal() => (load_yaml_from_stdin()?, true),
        None => bail!("no input: pass a YAML file or pipe YAML into stdin"),
    };
    info!(theme = %theme.name, documents = file.documents().len(), "starting");

    if cli.print {
        return print_once(&file, &theme, cli.query.as_deref().unwrap_or(""), line_numbers);
    }

    let mut state = AppState::new(file, &theme);
    state.set_line_numbers(line_numbers);
    state.set_scroll_step(config.scroll_step);
    state.set_enable_mouse(config.enable_mouse);
    if let Some(path) = &cli.query {
        state.set_input(path);
        state.navigate();
    }

    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = MouseTerminal::from(stdout);
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let ui = UI::new(theme);
    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut state);

    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;
    // Leave raw mode and the alternate screen before printing the selection
    drop(terminal);

    result?;

    if let Some(output) = state.output() {
        print!("{output}");
        io::stdout().flush()?;
    }
    Ok(())
}

fn print_once(file: &YamlFile, theme: &Theme, path: &str, line_numbers: bool) -> Result<()> {
    let printer = Printer::from_theme(theme);
    let rendered = printer.print(file, path, RenderOptions { line_numbers });
    if !path.is_empty() && rendered.matches.is_empty() {
        warn!(path, "no match");
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.to_ansi())?;
    stdout.flush()?;
    Ok(())
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    state: &mut AppState,
) -> Result<()> {
    loop {
        ui.render(terminal, state)?;

        match input_handler.next_event()? {
            Some(event) => {
                if InputHandler::handle_event(event, state) {
                    break;
                }
            }
            None => break,
        }
    }

    Ok(())
}
