//! Picker rendering and event loop.

use std::io::{self, stdout, Stdout, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor, event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

use super::app::App;
use super::input::handle_event;

/// Global flag to track if the terminal is in raw mode.
static TERMINAL_RAW_MODE: AtomicBool = AtomicBool::new(false);

/// RAII guard for terminal state.
/// Ensures the terminal is properly restored even on panic.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Create a new terminal guard, setting up the terminal for the picker.
    pub fn new() -> Result<Self> {
        // Set up panic hook before entering raw mode
        setup_panic_hook();

        enable_raw_mode().context("Failed to enable raw mode")?;
        TERMINAL_RAW_MODE.store(true, Ordering::SeqCst);

        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self { terminal })
    }

    /// Get a mutable reference to the terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        TERMINAL_RAW_MODE.store(false, Ordering::SeqCst);
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
        let _ = io::stdout().flush();
    }
}

/// Set up a panic hook that restores the terminal.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if TERMINAL_RAW_MODE.load(Ordering::SeqCst) {
            let _ = disable_raw_mode();
            let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
        }

        original_hook(panic_info);
    }));
}

/// Run the interactive picker.
///
/// Blocks until the user selects a script or cancels. Returns the selected
/// script name, or `None` on cancellation.
pub fn run_picker(mut app: App) -> Result<Option<String>> {
    let mut guard = TerminalGuard::new()?;

    let result = run_loop(guard.terminal(), &mut app);

    // Guard restores the terminal on drop, before any script output starts.
    drop(guard);

    result?;

    Ok(app.chosen().map(String::from))
}

/// Picker event loop.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            if handle_event(app, event)? {
                break;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Render the picker: header, filter line, script list, preview, footer.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // filter
            Constraint::Min(1),    // list
            Constraint::Length(1), // preview
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_filter(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_preview(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", app.project_name()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({} scripts, {})", app.total_scripts(), app.manager()),
            Style::default().dim(),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_filter(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.query().is_empty() {
        Line::from(vec![
            Span::raw(" > "),
            Span::styled("type to filter", Style::default().dim().italic()),
        ])
    } else {
        Line::from(vec![
            Span::raw(" > "),
            Span::raw(app.query().to_string()),
            Span::styled("█", Style::default().dim()),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_scripts();

    if visible.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "  no matching scripts (Esc to clear the filter)",
            Style::default().dim(),
        )));
        frame.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|script| ListItem::new(format!("  {}", script.name())))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index()));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.selected_script() {
        Some(script) => Line::from(vec![
            Span::styled(" $ ", Style::default().dim()),
            Span::styled(
                app.manager().command_line(script.name()),
                Style::default().dim(),
            ),
        ]),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(Span::styled(
        " ↑/↓ move · Enter run · Esc cancel",
        Style::default().dim(),
    ));
    frame.render_widget(Paragraph::new(footer), area);
}
