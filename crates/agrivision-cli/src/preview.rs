//! Interactive terminal preview: raw text on the left, the formatted block
//! tree on the right.

use std::io::{Stdout, stdout};

use agrivision_format::parsing::{
    ParsedDoc,
    blocks::{BlockKind, ListKind},
    inline::InlineNode,
    source::slice,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
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

struct App {
    raw: Vec<Line<'static>>,
    rendered: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(src: &str, doc: &ParsedDoc) -> Self {
        Self {
            raw: src.lines().map(|l| Line::from(l.to_string())).collect(),
            rendered: styled_lines(src, doc),
            scroll: 0,
        }
    }

    fn scroll_down(&mut self) {
        let max = self.raw.len().max(self.rendered.len()).saturating_sub(1);
        self.scroll = self.scroll.saturating_add(1).min(max as u16);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn inline_spans(src: &str, nodes: &[InlineNode], base: Style, out: &mut Vec<Span<'static>>) {
    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push(Span::styled(slice(src, *sp).to_string(), base)),
            InlineNode::Strong { children, .. } => {
                inline_spans(src, children, base.add_modifier(Modifier::BOLD), out)
            }
            InlineNode::Emphasis { children, .. } => {
                inline_spans(src, children, base.add_modifier(Modifier::ITALIC), out)
            }
        }
    }
}

/// Renders the block tree as styled terminal lines, with a blank line
/// between blocks.
pub fn styled_lines(src: &str, doc: &ParsedDoc) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, block) in doc.blocks.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        match block.kind {
            BlockKind::Header { level } => {
                let color = match level {
                    2 => Color::Green,
                    3 => Color::Cyan,
                    _ => Color::Blue,
                };
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                let mut spans = Vec::new();
                for line in &block.content {
                    inline_spans(src, &line.nodes, style, &mut spans);
                }
                lines.push(Line::from(spans));
            }
            BlockKind::Rule => lines.push(Line::styled(
                "─".repeat(40),
                Style::default().fg(Color::DarkGray),
            )),
            BlockKind::List { kind } => {
                for (n, item) in block.content.iter().enumerate() {
                    let marker = match kind {
                        ListKind::Bulleted => "  • ".to_string(),
                        ListKind::Numbered => format!("  {}. ", n + 1),
                    };
                    let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Yellow))];
                    inline_spans(src, &item.nodes, Style::default(), &mut spans);
                    lines.push(Line::from(spans));
                }
            }
            BlockKind::Paragraph => {
                for line in &block.content {
                    let mut spans = Vec::new();
                    inline_spans(src, &line.nodes, Style::default(), &mut spans);
                    lines.push(Line::from(spans));
                }
            }
        }
    }
    lines
}

/// Takes over the terminal until the user quits, restoring it afterwards
/// even when drawing fails.
pub fn run(src: &str, doc: &ParsedDoc) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(src, doc);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(rows[0]);

    let raw = Paragraph::new(app.raw.clone())
        .block(Block::default().borders(Borders::ALL).title("Raw text"))
        .scroll((app.scroll, 0));
    f.render_widget(raw, chunks[0]);

    let rendered = Paragraph::new(app.rendered.clone())
        .block(Block::default().borders(Borders::ALL).title("Formatted"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(rendered, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("g: Top"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrivision_format::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn blocks_become_lines() {
        let src = "# Plan\n3. one\n- two\n\ntext **bold**\nmore";
        let lines = styled_lines(src, &parse_document(src));
        assert_eq!(
            plain(&lines),
            vec!["Plan", "", "  1. one", "  2. two", "", "text bold", "more"]
        );
    }

    #[test]
    fn strong_and_emphasis_are_styled() {
        let src = "**a** *b*";
        let lines = styled_lines(src, &parse_document(src));
        let spans = &lines[0].spans;
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(spans[2].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn scrolling_is_clamped() {
        let src = "a\nb";
        let mut app = App::new(src, &parse_document(src));
        app.scroll_up();
        assert_eq!(app.scroll, 0);
        for _ in 0..5 {
            app.scroll_down();
        }
        assert_eq!(app.scroll, 1);
    }
}
