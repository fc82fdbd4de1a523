//! Gridplot - a terminal spreadsheet grid bound to a live plot.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gridplot::app::{parse_row_count, App};
use gridplot::grid::DEFAULT_ROWS;
use gridplot::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "gridplot")]
#[command(about = "A terminal spreadsheet grid bound to a live plot", long_about = None)]
struct Args {
    /// Array file (netCDF-4 / HDF5) to load at startup
    file: Option<PathBuf>,

    /// Initial number of rows when no file is given
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = parse_rows)]
    rows: usize,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_rows(input: &str) -> std::result::Result<usize, String> {
    parse_row_count(input).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        std::fs::File::create(log_path)?;
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Gridplot");
    }

    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    let app = match args.file.clone() {
        Some(path) => App::with_file(path),
        None => App::new(args.rows),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Gridplot exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Error popup - any key closes it
        if app.error_message.is_some() {
            app.dismiss_error();
            continue;
        }

        // Choice picker
        if app.choice.is_active() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.choice.up(),
                KeyCode::Down | KeyCode::Char('j') => app.choice.down(),
                KeyCode::Enter => app.confirm_choice(),
                KeyCode::Esc => app.choice.cancel(),
                _ => {}
            }
            continue;
        }

        // Text prompt
        if app.prompt.is_active() {
            match key.code {
                KeyCode::Enter => app.submit_prompt(),
                KeyCode::Esc => app.cancel_prompt(),
                KeyCode::Backspace => app.prompt.backspace(),
                KeyCode::Char(c) => app.prompt.input(c),
                _ => {}
            }
            continue;
        }

        // File picker
        if app.file_browser.visible {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                    app.cancel_load();
                }
                (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                    app.file_browser.cursor_up();
                }
                (KeyModifiers::NONE, KeyCode::Down)
                | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                    app.file_browser.cursor_down();
                }
                (KeyModifiers::NONE, KeyCode::Enter)
                | (KeyModifiers::NONE, KeyCode::Char('l'))
                | (KeyModifiers::NONE, KeyCode::Right) => {
                    app.browser_select();
                }
                (KeyModifiers::NONE, KeyCode::Char('h'))
                | (KeyModifiers::NONE, KeyCode::Left) => {
                    app.browser_parent();
                }
                _ => {}
            }
            continue;
        }

        // Normal mode
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.cursor_up();
            }
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.cursor_down();
            }
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                app.cursor_left();
            }
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                app.cursor_right();
            }

            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('e')) => {
                app.begin_edit();
            }
            (KeyModifiers::NONE, KeyCode::Char(' ')) => app.toggle_selection(),
            (KeyModifiers::NONE, KeyCode::Esc) => app.clear_selection(),

            (KeyModifiers::NONE, KeyCode::Char('s')) => app.begin_save(),
            (KeyModifiers::NONE, KeyCode::Char('o')) => app.begin_load(),
            (KeyModifiers::SHIFT, KeyCode::Char('R')) => app.begin_resize(),
            (KeyModifiers::NONE, KeyCode::Char('f')) => app.fill_random(),
            (KeyModifiers::NONE, KeyCode::Char('r')) => app.recalculate(),
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_grid(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                app.status = "Help: Enter=edit, Space=select for plot (x then y), s=save, o=load, R=resize, f=random, r=recalc".to_string();
            }

            _ => {}
        }
    }
}
