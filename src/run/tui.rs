use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::catalog::SearchClient;
use crate::planner::{CartCommand, DragPayload};
use crate::ui::app::{App, EditTarget, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// How long the loop waits for terminal input before checking whether a
/// debounced search is due.
const TICK: Duration = Duration::from_millis(50);

pub(crate) fn as_tui(client: &SearchClient) -> Result<()> {
    let mut app = App::new();
    // Populate the results pane with the default (unfiltered) page up front.
    // A dead search service just shows its inline error.
    app.run_search(client);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, client);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &SearchClient,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 cmd + 2 borders + 1 header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if app.alert.take().is_some() {
                    continue;
                }
                if app.show_help {
                    app.show_help = false;
                    continue;
                }
                match app.input_mode {
                    InputMode::Normal => handle_normal_input(key, app, client)?,
                    InputMode::Command => handle_command_input(key, app, client)?,
                    InputMode::Search => handle_search_input(key, app, client)?,
                    InputMode::Editing => handle_editing_input(key, app),
                }
            }
        }

        // Fire the debounced search once its quiet period has elapsed.
        app.poll_search(client);
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, client: &SearchClient) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.switch_screen(Screen::Results);
            app.search_input.clear();
            app.schedule_search();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => app.switch_screen(Screen::Results),
        KeyCode::Char('2') => app.switch_screen(Screen::Planner),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            app.switch_screen(screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            app.switch_screen(screens[prev]);
        }
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => handle_escape(app),

        // Results: explicit add and drag pick-up
        KeyCode::Enter | KeyCode::Char('a') if app.screen == Screen::Results => {
            if let Some(item) = app.selected_result().cloned() {
                let name = item.name.clone();
                app.planner.apply(CartCommand::Add(item));
                app.set_status(format!("Added: {name}"));
            }
        }
        KeyCode::Char(' ') if app.screen == Screen::Results => {
            if let Some((id, name)) = app.selected_result().map(|i| (i.id, i.name.clone())) {
                app.grabbed = Some(id);
                app.set_status(format!("Picked up: {name} — open Planner and press p"));
            }
        }

        // Planner: drop, field edits, row actions, export
        KeyCode::Char('p') if app.screen == Screen::Planner => {
            if let Some(id) = app.grabbed.take() {
                // A stale id misses the index; the drop just fizzles.
                if app.planner.drop_payload(DragPayload::ItemId(id)) {
                    app.set_status("Dropped into the cart");
                } else {
                    app.status_message.clear();
                }
            }
        }
        KeyCode::Enter if app.screen == Screen::Planner => {
            if let Some(id) = app.selected_cart_id() {
                commands::start_edit(app, EditTarget::Quantity(id));
            }
        }
        KeyCode::Char('x') if app.screen == Screen::Planner => {
            if let Some(id) = app.selected_cart_id() {
                let name = app
                    .planner
                    .cart()
                    .get(id)
                    .map(|e| e.item.name.clone())
                    .unwrap_or_default();
                app.planner.apply(CartCommand::Remove(id));
                app.clamp_cart_cursor();
                app.set_status(format!("Removed: {name}"));
            }
        }
        KeyCode::Char('d') if app.screen == Screen::Planner => {
            commands::start_edit(app, EditTarget::Days);
        }
        KeyCode::Char('b') if app.screen == Screen::Planner => {
            commands::start_edit(app, EditTarget::Budget);
        }
        KeyCode::Char('e') if app.screen == Screen::Planner => {
            commands::handle_command("export", app, client)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, client: &SearchClient) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, client)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App, client: &SearchClient) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            // Skip the rest of the quiet period.
            app.run_search(client);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.schedule_search();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.schedule_search();
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.edit_target = None;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            commands::apply_edit(app);
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
            commands::apply_edit(app);
        }
        _ => {}
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn handle_escape(app: &mut App) {
    if app.grabbed.take().is_some() {
        app.planner.drag_leave();
        app.set_status("Put the item back");
    } else {
        app.status_message.clear();
    }
}

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Results => {
            let len = app.results.len();
            scroll_down(&mut app.result_index, &mut app.result_scroll, len, page);
        }
        Screen::Planner => {
            let len = app.planner.cart().len();
            scroll_down(&mut app.cart_index, &mut app.cart_scroll, len, page);
        }
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Results => scroll_up(&mut app.result_index, &mut app.result_scroll),
        Screen::Planner => scroll_up(&mut app.cart_index, &mut app.cart_scroll),
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Results => scroll_to_top(&mut app.result_index, &mut app.result_scroll),
        Screen::Planner => scroll_to_top(&mut app.cart_index, &mut app.cart_scroll),
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Results => {
            let len = app.results.len();
            scroll_to_bottom(&mut app.result_index, &mut app.result_scroll, len, page);
        }
        Screen::Planner => {
            let len = app.planner.cart().len();
            scroll_to_bottom(&mut app.cart_index, &mut app.cart_scroll, len, page);
        }
    }
}
