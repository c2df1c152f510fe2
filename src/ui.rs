use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use tripwise::{Category, PlaceBrowser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

pub struct App {
    pub browser: PlaceBrowser,
    pub state: TableState,
    pub show_detail: bool,
    pub input_mode: InputMode,
}

impl App {
    pub fn new(browser: PlaceBrowser) -> Self {
        let mut app = Self {
            browser,
            state: TableState::default(),
            show_detail: false,
            input_mode: InputMode::Normal,
        };
        app.refresh();
        app
    }

    fn visible_len(&self) -> usize {
        self.browser.visible_places().len()
    }

    /// Keep the selection inside the (possibly shrunk) visible list
    fn refresh(&mut self) {
        let len = self.visible_len();
        let selected = match self.state.selected() {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            Some(i) => Some(i),
            None => Some(0),
        };
        self.state.select(selected);
    }

    pub fn selected_place_id(&self) -> Option<String> {
        let i = self.state.selected()?;
        self.browser.visible_places().get(i).map(|v| v.id.clone())
    }

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(id) = self.selected_place_id() {
            self.browser.toggle_favorite(&id);
        }
    }

    pub fn select_category(&mut self, category: Category) {
        self.browser.set_selected_category(category);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.browser.clear_filters();
        self.refresh();
    }

    fn push_search_char(&mut self, c: char) {
        let mut text = self.browser.filter().search_text.clone();
        text.push(c);
        self.browser.set_search_text(text);
        self.refresh();
    }

    fn pop_search_char(&mut self) {
        let mut text = self.browser.filter().search_text.clone();
        text.pop();
        self.browser.set_search_text(text);
        self.refresh();
    }

    pub fn next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// Apply one key press. Returns false when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.input_mode == InputMode::Search {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Backspace => self.pop_search_char(),
                KeyCode::Char(c) => self.push_search_char(c),
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Enter => self.show_detail = !self.show_detail,
            KeyCode::Char('f') | KeyCode::Char(' ') => self.toggle_selected_favorite(),
            KeyCode::Char('1') => self.select_category(Category::Attraction),
            KeyCode::Char('2') => self.select_category(Category::Restaurant),
            KeyCode::Char('3') => self.select_category(Category::Hotel),
            KeyCode::Char('c') => self.clear_filters(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Home => self.refresh_to(0),
            KeyCode::End => {
                let len = self.visible_len();
                if len > 0 {
                    self.refresh_to(len - 1);
                }
            }
            _ => {}
        }
        true
    }

    fn refresh_to(&mut self, i: usize) {
        self.state.select(Some(i));
        self.refresh();
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Terminal event loop failed")
}

fn run_app<B, E>(terminal: &mut Terminal<B>, app: &mut App, mut read_event: E) -> io::Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = read_event()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(3), // Category chips
            Constraint::Min(0),    // Place list
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_search_bar(f, chunks[0], app);
    render_category_chips(f, chunks[1], app);

    if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Place list
                Constraint::Percentage(40), // Detail panel
            ])
            .split(chunks[2]);

        render_table(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        render_table(f, chunks[2], app);
    }

    render_status_bar(f, chunks[3], app);
}

fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Search;
    let text = &app.browser.filter().search_text;

    let line = if text.is_empty() && !editing {
        Line::from(Span::styled(
            "Search attractions, restaurants, hotels…",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let mut spans = vec![Span::raw(text.as_str())];
        if editing {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    };

    let border = if editing { Color::Yellow } else { Color::Cyan };
    let search = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Find nearby gems "),
    );

    f.render_widget(search, area);
}

fn render_category_chips(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.browser.filter().selected_category;

    let mut spans = vec![];
    for (i, category) in Category::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }

        let style = if selected == Some(*category) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::styled(format!("{}", i + 1), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(category.label(), style));
    }

    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        format!("♥ {}", app.browser.favorite_count()),
        Style::default().fg(Color::Red),
    ));

    let chips = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(chips, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Attraction => Color::Cyan,
        Category::Restaurant => Color::Yellow,
        Category::Hotel => Color::Green,
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["", "Name", "Category", "Rating • Distance", "Address"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let visible = app.browser.visible_places();
    let rows = visible.iter().map(|v| {
        let heart = if v.is_favorite {
            Cell::from("♥").style(Style::default().fg(Color::Red))
        } else {
            Cell::from("♡").style(Style::default().fg(Color::DarkGray))
        };

        let cells = vec![
            heart,
            Cell::from(truncate(&v.name, 28)),
            Cell::from(v.category.as_str()).style(Style::default().fg(category_color(v.category))),
            Cell::from(v.summary_line()),
            Cell::from(truncate(&v.address, 30)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(30),
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Nearby "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.visible_len();

    let mut status_spans = vec![Span::styled(
        format!(" {}/{} of {} ", selected, total, app.browser.catalog().len()),
        Style::default().fg(Color::Cyan),
    )];

    if app.browser.filter().is_active() {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Clear filters"));
    }

    let hints: &[(&str, &str)] = if app.input_mode == InputMode::Search {
        &[("Enter/Esc", " Done"), ("Backspace", " Delete")]
    } else {
        &[
            ("/", " Search"),
            ("1-3", " Category"),
            ("f", " Favorite"),
            ("Enter", " Details"),
            ("↑/↓", " Nav"),
        ]
    };

    for (key, label) in hints {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(*label));
    }

    if app.input_mode == InputMode::Normal {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
        status_spans.push(Span::raw(" Quit"));
    }

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let visible = app.browser.visible_places();
    let place = match app.state.selected().and_then(|i| visible.get(i)) {
        Some(p) => p,
        None => {
            let no_selection = Paragraph::new("No place selected").block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Place Details "),
            );
            f.render_widget(no_selection, area);
            return;
        }
    };

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Name: ", label),
            Span::raw(place.name.as_str()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Category: ", label),
            Span::styled(place.category.as_str(), Style::default().fg(category_color(place.category))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Rating: ", label),
            Span::raw(format!("★ {}", place.rating_text())),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Distance: ", label),
            Span::raw(format!("{} km away", place.distance_text())),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Address: ", label),
            Span::raw(place.address.as_str()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Favorite: ", label),
            if place.is_favorite {
                Span::styled("♥ yes", Style::default().fg(Color::Red))
            } else {
                Span::styled("no", Style::default().fg(Color::DarkGray))
            },
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Press Enter to close",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]),
    ];

    let detail_panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Place Details "),
    );

    f.render_widget(detail_panel, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
