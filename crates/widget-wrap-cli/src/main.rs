use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use std::{env, io::stdout, path::PathBuf, process};
use widget_wrap_config::Config;
use widget_wrap_engine::{
    CommandDispatch, DetectOptions, MenuItem, MenuPrompt, Notifier, byte_to_point, show_wrap_menu,
};
use widget_wrap_wrappers::{Catalog, dispatch_wrap};

mod editor;
mod format;

use editor::EditorState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

/// Status-line notification channel: the terminal stand-in for the host
/// editor's message popups.
#[derive(Default)]
struct StatusLine {
    message: Option<(Level, String)>,
}

impl Notifier for StatusLine {
    fn info(&mut self, message: &str) {
        self.message = Some((Level::Info, message.to_string()));
    }

    fn warn(&mut self, message: &str) {
        self.message = Some((Level::Warn, message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.message = Some((Level::Error, message.to_string()));
    }
}

struct App {
    editor: EditorState,
    status: StatusLine,
    config: Config,
}

impl App {
    fn new(path: PathBuf, config: Config) -> Result<Self> {
        Ok(Self {
            editor: EditorState::open(path)?,
            status: StatusLine::default(),
            config,
        })
    }

    fn save(&mut self) {
        match self.editor.save() {
            Ok(()) => {
                let message = format!("saved {}", self.editor.path().display());
                self.status.info(&message);
            }
            Err(e) => self.status.error(&format!("save failed: {e}")),
        }
    }

    fn open_wrap_menu<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        // Catalog and options are rebuilt per presentation so enablement
        // changes are always visible to the menu.
        let catalog = Catalog::new(self.config.disabled_wrappers.iter().cloned());
        let opts = DetectOptions {
            max_lookbehind: self.config.max_lookbehind,
        };

        let mut prompt = MenuScreen {
            terminal,
            background: self.editor.text().lines().map(str::to_string).collect(),
            title: display_title(&self.editor),
        };
        let mut host = WrapHost {
            catalog: &catalog,
            editor: &mut self.editor,
            status: &mut self.status,
            opts,
        };

        show_wrap_menu(&catalog, &mut prompt, &mut host);
        Ok(())
    }
}

/// Dispatch + notification target the menu hands a chosen command to.
struct WrapHost<'a> {
    catalog: &'a Catalog,
    editor: &'a mut EditorState,
    status: &'a mut StatusLine,
    opts: DetectOptions,
}

impl CommandDispatch for WrapHost<'_> {
    fn execute(&mut self, id: &str) {
        dispatch_wrap(
            self.catalog,
            id,
            Some(&mut *self.editor),
            &mut *self.status,
            &self.opts,
        );
    }
}

impl Notifier for WrapHost<'_> {
    fn info(&mut self, message: &str) {
        self.status.info(message);
    }

    fn warn(&mut self, message: &str) {
        self.status.warn(message);
    }

    fn error(&mut self, message: &str) {
        self.status.error(message);
    }
}

/// Modal wrapper picker drawn over a snapshot of the editor content. `pick`
/// runs its own little event loop until the user chooses or dismisses.
struct MenuScreen<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    background: Vec<String>,
    title: String,
}

impl<B: Backend> MenuPrompt for MenuScreen<'_, B> {
    fn pick(&mut self, items: &[MenuItem]) -> Option<usize> {
        let mut state = ListState::default();
        state.select(Some(0));

        loop {
            let background = &self.background;
            let title = &self.title;
            let draw = self
                .terminal
                .draw(|f| render_menu(f, background, title, items, &mut state));
            if draw.is_err() {
                return None;
            }

            match event::read() {
                Ok(Event::Key(key)) => match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return None,
                    KeyCode::Down | KeyCode::Char('j') => {
                        let next = match state.selected() {
                            Some(i) => (i + 1) % items.len(),
                            None => 0,
                        };
                        state.select(Some(next));
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        let previous = match state.selected() {
                            Some(0) | None => items.len() - 1,
                            Some(i) => i - 1,
                        };
                        state.select(Some(previous));
                    }
                    KeyCode::Enter => return state.selected(),
                    _ => {}
                },
                Ok(_) => {}
                Err(_) => return None,
            }
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <source-file>", args[0]);
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let mut app = match App::new(path, config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('s') => app.save(),
                KeyCode::Char('w') => app.open_wrap_menu(terminal)?,
                KeyCode::Char('v') => app.editor.toggle_selection(),
                KeyCode::Esc => app.editor.clear_selection(),
                KeyCode::Left | KeyCode::Char('h') => app.editor.move_left(),
                KeyCode::Right | KeyCode::Char('l') => app.editor.move_right(),
                KeyCode::Up | KeyCode::Char('k') => app.editor.move_vertical(-1),
                KeyCode::Down | KeyCode::Char('j') => app.editor.move_vertical(1),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let text = app.editor.text();
    let (cursor_line, cursor_col) = byte_to_point(&text, app.editor.cursor());

    // Content panel, scrolled to keep the cursor visible
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(inner_height.saturating_sub(1)) as u16;

    let content_lines: Vec<Line> = text.lines().map(|line| Line::from(line.to_string())).collect();
    let content = Paragraph::new(content_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(display_title(&app.editor)),
        )
        .scroll((scroll, 0));
    f.render_widget(content, chunks[0]);

    let cursor_x = chunks[0].x + 1 + cursor_col.min(u16::MAX as usize) as u16;
    let cursor_y = chunks[0].y + 1 + (cursor_line as u16).saturating_sub(scroll);
    f.set_cursor_position((
        cursor_x.min(chunks[0].right().saturating_sub(2)),
        cursor_y.min(chunks[0].bottom().saturating_sub(2)),
    ));

    // Status line: last notification, or the current position
    let status = match &app.status.message {
        Some((level, message)) => {
            let style = match level {
                Level::Info => Style::default().fg(Color::Green),
                Level::Warn => Style::default().fg(Color::Yellow),
                Level::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(message.clone(), style))
        }
        None => {
            let selection = app.editor.selection_span();
            let position = if selection.is_empty() {
                format!("{}:{}", cursor_line + 1, cursor_col + 1)
            } else {
                format!("selected {}..{}", selection.start, selection.end)
            };
            Line::from(Span::raw(position))
        }
    };
    f.render_widget(Paragraph::new(vec![status]), chunks[1]);

    // Key help
    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("w: Wrap widget | "),
        Span::raw("v: Select | "),
        Span::raw("s: Save | "),
        Span::raw("arrows/hjkl: Move"),
    ]);
    f.render_widget(Paragraph::new(vec![help]), chunks[2]);
}

fn render_menu(
    f: &mut Frame,
    background: &[String],
    title: &str,
    items: &[MenuItem],
    state: &mut ListState,
) {
    let content_lines: Vec<Line> = background
        .iter()
        .map(|line| Line::from(line.clone()))
        .collect();
    let content = Paragraph::new(content_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    );
    f.render_widget(content, f.area());

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(vec![Line::from(vec![
                Span::raw(item.title.clone()),
                Span::styled(
                    format!("  {}", item.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ])])
        })
        .collect();

    let area = centered_rect(44, items.len() as u16 + 2, f.area());
    f.render_widget(Clear, area);
    let list = List::new(list_items)
        .block(Block::default().borders(Borders::ALL).title("Wrap with"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, state);
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

fn display_title(editor: &EditorState) -> String {
    let dirty = if editor.is_dirty() { " [+]" } else { "" };
    format!("{}{dirty}", editor.path().display())
}
