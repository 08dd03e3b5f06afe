use folio::adapters::HttpBridge;
use folio::app::{App, AppMessage, Screen, SharedBridge};
use folio::prefs::{self, Prefs};
use folio::state::filter_books;
use folio::ui;

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Route tracing to a file in the data dir; stdout belongs to the TUI.
fn init_tracing() {
    let Ok(dir) = prefs::data_dir() else {
        return;
    };
    let Ok(file) = std::fs::File::create(dir.join("folio.log")) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if std::env::args().any(|arg| arg == "--version" || arg == "-V") {
        println!("folio {}", VERSION);
        return Ok(());
    }

    init_tracing();

    let prefs = Prefs::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "could not load prefs, starting fresh");
        Prefs::in_memory()
    });
    tracing::info!(
        theme = prefs.get(prefs::KEY_THEME).unwrap_or("light"),
        "folio {} starting",
        VERSION
    );

    let base_url = std::env::var("FOLIO_BACKEND_URL")
        .unwrap_or_else(|_| folio::adapters::http_bridge::DEFAULT_BASE_URL.to_string());
    let bridge: SharedBridge = Arc::new(HttpBridge::with_base_url(base_url));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, bridge).await;

    // Terminal teardown, even on error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    bridge: SharedBridge,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();
    let mut app = App::new(bridge, tx);

    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_secs(1));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        tokio::select! {
            maybe_event = events.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    if key.kind == KeyEventKind::Press {
                        handle_key(&mut app, key.code);
                    }
                }
            }
            message = rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
            _ = tick.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    // Search entry captures printable keys first
    if app.search_mode {
        match code {
            KeyCode::Esc | KeyCode::Enter => app.search_mode = false,
            KeyCode::Backspace => app.pop_search(),
            KeyCode::Char(c) => app.push_search(c),
            _ => {}
        }
        return;
    }

    match (app.screen, code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('h')) => app.go_to(Screen::Home),

        (Screen::Home, KeyCode::Char('l')) => app.go_to(Screen::Library),
        (Screen::Home, KeyCode::Char('t')) => app.go_to(Screen::Session),
        (Screen::Home, KeyCode::Char('r')) => app.refresh_home(),

        (Screen::Library, KeyCode::Char('s')) => app.cycle_status_filter(),
        (Screen::Library, KeyCode::Char('y')) => app.cycle_type_filter(),
        (Screen::Library, KeyCode::Char('c')) => app.cycle_collection_filter(),
        (Screen::Library, KeyCode::Char('/')) => app.search_mode = true,
        (Screen::Library, KeyCode::Char('x')) => app.clear_filters(),
        (Screen::Library, KeyCode::Char('r')) => app.refresh_library(),
        (Screen::Library, KeyCode::Up) => {
            app.selected_book = app.selected_book.saturating_sub(1);
        }
        (Screen::Library, KeyCode::Down) => {
            let len = filter_books(app.books.items(), &app.filters, &app.membership).len();
            if app.selected_book + 1 < len {
                app.selected_book += 1;
            }
        }
        (Screen::Library, KeyCode::Enter) => {
            let visible = filter_books(app.books.items(), &app.filters, &app.membership);
            if let Some(book_id) = visible.get(app.selected_book).and_then(|b| b.id) {
                app.start_session(book_id);
            }
        }

        (Screen::Session, KeyCode::Char(' ')) => {
            if app.timer.is_running() {
                app.timer.pause();
            } else {
                app.timer.start();
            }
        }
        (Screen::Session, KeyCode::Enter) => app.finish_session(),
        (Screen::Session, KeyCode::Char('x')) => app.discard_session(),

        _ => {}
    }
}
