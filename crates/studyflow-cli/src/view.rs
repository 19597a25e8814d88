//! Scrollable terminal view of a render tree.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};
use studyflow_format::{InlineSpan, RenderNode};

struct App {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
    /// Rows visible in the content pane at the last draw.
    page: u16,
}

impl App {
    fn new(title: &str, nodes: &[RenderNode]) -> Self {
        Self {
            title: title.to_string(),
            lines: to_lines(nodes),
            scroll: 0,
            page: 1,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(next).unwrap_or(0);
    }
}

pub fn run(title: &str, nodes: &[RenderNode]) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(title, nodes);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let page = i32::from(app.page.max(1));
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(page),
                KeyCode::PageUp => app.scroll_by(-page),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => app.scroll = app.max_scroll(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Borders take two rows
    app.page = chunks[0].height.saturating_sub(2);

    let content = Paragraph::new(app.lines.clone())
        .block(Block::default().borders(Borders::ALL).title(app.title.clone()))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

/// Converts a render tree into styled terminal lines.
pub fn to_lines(nodes: &[RenderNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for node in nodes {
        match node {
            RenderNode::Header { level, text } => {
                let color = match level {
                    1 => Color::Magenta,
                    2 => Color::Cyan,
                    _ => Color::Blue,
                };
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )));
            }
            RenderNode::List { ordered, items } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}. ", i + 1)
                    } else {
                        "• ".to_string()
                    };
                    let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Yellow))];
                    spans.extend(styled_spans(item));
                    lines.push(Line::from(spans));
                }
            }
            RenderNode::Blockquote { spans } => {
                let mut out = vec![Span::styled("▌ ", Style::default().fg(Color::DarkGray))];
                out.extend(
                    styled_spans(spans)
                        .into_iter()
                        .map(|s| s.patch_style(Style::default().add_modifier(Modifier::ITALIC))),
                );
                lines.push(Line::from(out));
            }
            RenderNode::HorizontalRule => lines.push(Line::from(Span::styled(
                "─".repeat(40),
                Style::default().fg(Color::DarkGray),
            ))),
            RenderNode::CodeBlock { language, lines: code } => {
                if let Some(lang) = language {
                    lines.push(Line::from(Span::styled(
                        lang.clone(),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                lines.extend(code.iter().map(|l| {
                    Line::from(Span::styled(l.clone(), Style::default().fg(Color::Green)))
                }));
            }
            RenderNode::TableRow {
                cells,
                is_header_row,
            } => {
                let mut out = Vec::new();
                for (i, cell) in cells.iter().enumerate() {
                    if i > 0 {
                        out.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
                    }
                    let cell_spans = styled_spans(cell);
                    if *is_header_row {
                        out.extend(
                            cell_spans
                                .into_iter()
                                .map(|s| s.patch_style(Style::default().add_modifier(Modifier::BOLD))),
                        );
                    } else {
                        out.extend(cell_spans);
                    }
                }
                lines.push(Line::from(out));
            }
            RenderNode::Paragraph { spans } => lines.push(Line::from(styled_spans(spans))),
            RenderNode::LineBreak => lines.push(Line::default()),
        }
    }
    lines
}

fn styled_spans(spans: &[InlineSpan]) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::PlainText(t) => Span::raw(t.clone()),
            InlineSpan::Bold(t) => {
                Span::styled(t.clone(), Style::default().add_modifier(Modifier::BOLD))
            }
            InlineSpan::Italic(t) => {
                Span::styled(t.clone(), Style::default().add_modifier(Modifier::ITALIC))
            }
            InlineSpan::BoldItalic(t) => Span::styled(
                t.clone(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            InlineSpan::Code(t) => Span::styled(t.clone(), Style::default().fg(Color::Green)),
            InlineSpan::Link { text, .. } => Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect()
}
