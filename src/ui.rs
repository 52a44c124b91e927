use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

use widget_calculators::{Banner, Form, LetterGrade, Outcome, WidgetKind};

pub struct App {
    pub current_page: WidgetKind,
    pub forms: Vec<Form>,
}

impl App {
    pub fn new() -> Self {
        Self {
            current_page: WidgetKind::Grade,
            forms: WidgetKind::ALL.iter().map(|kind| Form::new(*kind)).collect(),
        }
    }

    fn page_index(kind: WidgetKind) -> usize {
        match kind {
            WidgetKind::Grade => 0,
            WidgetKind::Ticket => 1,
            WidgetKind::Triangle => 2,
        }
    }

    pub fn form(&self) -> &Form {
        &self.forms[Self::page_index(self.current_page)]
    }

    pub fn form_mut(&mut self) -> &mut Form {
        let i = Self::page_index(self.current_page);
        &mut self.forms[i]
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    /// Apply one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('u') if ctrl => self.form_mut().clear_field(),
            KeyCode::Tab => self.next_page(),
            KeyCode::BackTab => self.previous_page(),
            KeyCode::Down => self.form_mut().focus_next(),
            KeyCode::Up => self.form_mut().focus_previous(),
            KeyCode::Enter => {
                self.form_mut().submit();
            }
            KeyCode::Backspace => self.form_mut().backspace(),
            KeyCode::Char(c) if !ctrl => self.form_mut().insert_char(c),
            _ => {}
        }

        false
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
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
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Form area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_form(f, chunks[1], app.form());
    render_status_bar(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, kind) in WidgetKind::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *kind == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(kind.title(), style));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, area: Rect, form: &Form) {
    let info = form.kind.info_panel();
    let info_height = info.as_ref().map(|(_, rows)| rows.len() as u16 + 3).unwrap_or(0);

    let mut constraints = vec![
        Constraint::Length(2),           // Instructions
        Constraint::Length(info_height), // Reference panel
    ];
    constraints.extend(form.fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(2)); // Submit hint
    constraints.push(Constraint::Min(0));    // Banner

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" {} ", form.kind.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let instructions = Paragraph::new(form.kind.instructions())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(instructions, rows[0]);

    if let Some((heading, lines)) = info {
        let mut content = vec![Line::from(Span::styled(
            heading,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))];
        content.extend(lines.into_iter().map(|row| Line::from(format!("  {}", row))));

        let panel = Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
        f.render_widget(panel, rows[1]);
    }

    for (i, (label, value)) in form.kind.field_labels().iter().zip(&form.fields).enumerate() {
        let focused = i == form.focused;
        let border = if focused { Color::Yellow } else { Color::DarkGray };
        let text = if focused { format!("{}_", value) } else { value.clone() };

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", label)),
        );
        f.render_widget(input, rows[2 + i]);
    }

    let hint_row = 2 + form.fields.len();
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", form.kind.submit_label())),
    ]));
    f.render_widget(hint, rows[hint_row]);

    render_banner(f, rows[hint_row + 1], form);
}

/// Error banner only on failure, result banner only on success
fn render_banner(f: &mut Frame, area: Rect, form: &Form) {
    let banner = match &form.banner {
        Some(banner) => banner,
        None => return,
    };

    let (title, color) = match banner {
        Banner::Error(_) => (" Error ", Color::Red),
        Banner::Result(outcome) => (" Result ", outcome_color(outcome)),
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        banner.message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(title),
    );

    f.render_widget(paragraph, area);
}

fn outcome_color(outcome: &Outcome) -> Color {
    match outcome {
        Outcome::Grade(out) => match out.letter {
            LetterGrade::A => Color::Green,
            LetterGrade::B => Color::Blue,
            LetterGrade::C => Color::Yellow,
            LetterGrade::D => Color::LightRed,
            LetterGrade::F => Color::Red,
        },
        Outcome::Ticket(_) => Color::Green,
        Outcome::Triangle(_) => Color::Magenta,
    }
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let status_spans = vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Submit | "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Widget | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Field | "),
        Span::styled("Ctrl-U", Style::default().fg(Color::Yellow)),
        Span::raw(" Clear | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_submit() {
        let mut app = App::new();
        type_text(&mut app, "89.9");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.form().banner.as_ref().unwrap().message(), "B - Good");
    }

    #[test]
    fn test_pages_keep_their_own_state() {
        let mut app = App::new();
        type_text(&mut app, "95");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page, WidgetKind::Ticket);
        assert_eq!(app.form().focused_field(), "");

        type_text(&mut app, "65");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::BackTab);

        assert_eq!(app.form().focused_field(), "95");
        assert!(app.form().banner.is_none());
        assert_eq!(
            app.forms[1].banner.as_ref().unwrap().message(),
            "GHC 7.00 (Senior Ticket)"
        );
    }

    #[test]
    fn test_triangle_fields_and_quit() {
        let mut app = App::new();
        app.current_page = WidgetKind::Triangle;
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "3");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.form().banner.as_ref().unwrap().message(),
            "These sides do not form a valid triangle."
        );

        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.form().banner.as_ref().unwrap().message(),
            "Equilateral Triangle - All three sides are equal"
        );

        assert!(press(&mut app, KeyCode::Esc));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_ctrl_u_clears_field() {
        let mut app = App::new();
        type_text(&mut app, "abc");
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.form().focused_field(), "");
    }

    #[test]
    fn test_render_shows_only_active_banner() {
        let mut app = App::new();
        let screen = render(&app);
        assert!(screen.contains("Grade Calculator"));
        assert!(!screen.contains("Error"));
        assert!(!screen.contains("Result"));

        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Invalid input. Please enter a valid number."));
        assert!(!screen.contains("Result"));

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "72");
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("C - Satisfactory"));
        assert!(!screen.contains("Invalid input"));
    }

    #[test]
    fn test_render_ticket_pricing_table() {
        let mut app = App::new();
        app.next_page();
        let screen = render(&app);
        assert!(screen.contains("Pricing Structure:"));
        assert!(screen.contains("Adults (13-64): GHC 10.00"));
    }
}
