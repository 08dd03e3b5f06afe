//! Screen rendering.
//!
//! Deliberately plain: default styles, three screens, a status line. Each
//! screen renders from its own stores; a store's error renders as a single
//! inline line above the content it failed to load.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Screen};
use crate::state::{day_totals, filter_books, week_totals};

pub fn render(frame: &mut Frame, app: &App) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    match app.screen {
        Screen::Home => render_home(frame, app, body),
        Screen::Library => render_library(frame, app, body),
        Screen::Session => render_session(frame, app, body),
    }

    let hints = match app.screen {
        Screen::Home => "[l] library  [t] timer  [r] refresh  [q] quit",
        Screen::Library => {
            "[s] status  [y] type  [c] collection  [/] search  [x] clear  [r] refresh  [enter] read  [h] home  [q] quit"
        }
        Screen::Session => "[space] start/pause  [enter] finish  [x] discard  [h] home",
    };
    frame.render_widget(Paragraph::new(hints).style(Style::default().dim()), footer);
}

fn error_line(error: Option<&str>) -> Option<Line<'_>> {
    error.map(|e| Line::styled(format!("! {}", e), Style::default().fg(Color::Red)))
}

fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" folio ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if let Some(line) = error_line(app.statistics.error()) {
        lines.push(line);
    }
    if app.statistics.is_loading() {
        lines.push(Line::raw("Loading statistics..."));
    } else if let Some(stats) = app.statistics.data() {
        lines.push(Line::raw(format!(
            "This month: {} pages, {} sessions, {} books finished",
            stats.this_month.pages_read,
            stats.this_month.sessions_count,
            stats.this_month.books_completed,
        )));
        if let Some(current) = &stats.current_book {
            lines.push(Line::raw(format!(
                "Reading: {} ({:.0}%)",
                current.title, current.progress_percentage
            )));
        }
    }

    lines.push(Line::raw(""));
    if let Some(line) = error_line(app.today_sessions.error()) {
        lines.push(line);
    }
    let today = day_totals(app.today_sessions.items());
    lines.push(Line::raw(format!(
        "Today: {} pages / {} min across {} sessions",
        today.pages, today.minutes, today.sessions
    )));

    if let Some(line) = error_line(app.week_sessions.error()) {
        lines.push(line);
    }
    let week = week_totals(app.week_sessions.items());
    lines.push(Line::raw(format!(
        "This week: {} pages, active on {} days",
        week.pages, week.days_active
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_library(frame: &mut Frame, app: &App, area: Rect) {
    let [head, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    // Filter bar
    let filter_text = if app.filters.is_active() {
        let mut text = String::new();
        if let Some(status) = app.filters.status {
            text.push_str(&format!("status:{}  ", status.label()));
        }
        if let Some(book_type) = app.filters.book_type {
            text.push_str(&format!("type:{:?}  ", book_type));
        }
        if !app.filters.search.is_empty() {
            text.push_str(&format!("search:\"{}\"  ", app.filters.search));
        }
        if let Some(collection_id) = app.filters.collection {
            let name = app
                .collections
                .items()
                .iter()
                .find(|c| c.id == Some(collection_id))
                .map(|c| c.name.as_str())
                .unwrap_or("?");
            text.push_str(&format!("collection:{}  ", name));
        }
        text
    } else {
        "no filters".to_string()
    };
    frame.render_widget(
        Paragraph::new(filter_text).block(Block::default().borders(Borders::ALL).title(" library ")),
        head,
    );

    let mut items: Vec<ListItem> = Vec::new();
    if let Some(line) = error_line(app.books.error()) {
        items.push(ListItem::new(line));
    }
    if app.books.is_loading() && app.books.data().is_none() {
        items.push(ListItem::new("Loading books..."));
    }

    let leading = items.len();
    let visible = filter_books(app.books.items(), &app.filters, &app.membership);
    for book in &visible {
        let author = book.author.as_deref().unwrap_or("unknown");
        items.push(ListItem::new(format!(
            "{:<40} {:<20} {:>8} {:>5.0}%",
            book.title,
            author,
            book.status.label(),
            book.progress_percentage
        )));
    }

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(leading + app.selected_book.min(visible.len() - 1)));
    }
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().reversed());
    frame.render_stateful_widget(list, list_area, &mut state);
}

fn render_session(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" session ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(line) = error_line(app.session_error.as_deref()) {
        lines.push(line);
    }

    let title = app
        .timer_book_id
        .and_then(|id| app.books.items().iter().find(|b| b.id == Some(id)))
        .map(|b| b.title.clone());
    if let Some(title) = title {
        lines.push(Line::raw(title));
    }

    lines.push(Line::styled(
        app.timer.display(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::raw(if app.timer.is_running() {
        "recording"
    } else if app.session_saved {
        "session saved"
    } else {
        "paused"
    }));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
