use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{
    app::App,
    game::{Outcome, MAX_ROWS},
    gating::Gates,
    keyboard::{Key, KeyboardHints, LetterHint, KEYBOARD_ROWS},
    snapshot::{CellState, RowView, Snapshot},
};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

const CORRECT: Color = Color::Rgb(106, 170, 100);
const PARTIAL: Color = Color::Rgb(201, 180, 88);
const WRONG: Color = Color::Rgb(120, 124, 126);
const INACTIVE: Color = Color::Rgb(211, 214, 218);
const PENDING: Color = Color::Rgb(58, 58, 60);

/// Rows are separated by a blank line
const GRID_HEIGHT: u16 = MAX_ROWS as u16 * 2 - 1;
const KEYBOARD_HEIGHT: u16 = KEYBOARD_ROWS.len() as u16 * 2 - 1;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.snapshot();
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let keyboard_height = if self.settings.show_keyboard {
            KEYBOARD_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1),
                Constraint::Length(GRID_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(keyboard_height),
                Constraint::Length(1),
                Constraint::Length(1), // banner
                Constraint::Min(0),
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Span::styled("W O R D L E", bold_style))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(grid_lines(&snap))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        if self.settings.show_keyboard {
            Paragraph::new(keyboard_lines(&snap.keyboard, &snap.gates))
                .alignment(Alignment::Center)
                .render(chunks[4], buf);
        }

        let banner = match snap.outcome {
            Some(Outcome::Win) => Span::styled(
                format!("You win! ({}/{})", snap.guesses_used(), MAX_ROWS),
                bold_style.fg(CORRECT),
            ),
            Some(Outcome::Loss) => Span::styled(
                format!(
                    "Better luck next time... the word was {}",
                    self.game().secret().to_string().to_uppercase()
                ),
                bold_style.fg(PARTIAL),
            ),
            None => Span::styled(
                format!("guess {} of {}", snap.active_row, MAX_ROWS),
                Style::default().add_modifier(Modifier::DIM),
            ),
        };
        Paragraph::new(banner)
            .alignment(Alignment::Center)
            .render(chunks[6], buf);

        let legend = if snap.outcome.is_some() {
            "(n)ew game / (esc)ape"
        } else {
            "(enter) submit / (backspace) delete / (ctrl+n) new / (esc)ape"
        };
        Paragraph::new(Span::styled(legend, italic_style))
            .alignment(Alignment::Center)
            .render(chunks[8], buf);
    }
}

fn cell_style(state: CellState) -> Style {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match state {
        CellState::Exact => bold.fg(Color::White).bg(CORRECT),
        CellState::Present => bold.fg(Color::White).bg(PARTIAL),
        CellState::Absent => bold.fg(Color::White).bg(WRONG),
        CellState::Pending => bold.fg(Color::White).bg(PENDING),
        CellState::Unset => Style::default().fg(WRONG),
    }
}

fn row_line(row: &RowView) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.cells.len() * 2);
    for (idx, cell) in row.cells.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let text = match cell.letter {
            Some(c) => format!(" {} ", c.to_ascii_uppercase()),
            None => " · ".to_string(),
        };
        spans.push(Span::styled(text, cell_style(cell.state)));
    }
    Line::from(spans)
}

fn grid_lines(snap: &Snapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(GRID_HEIGHT as usize);
    for (idx, row) in snap.rows.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(row_line(row));
    }
    lines
}

fn key_style(key: Key, hints: &KeyboardHints, gates: &Gates) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    let (style, enabled) = match key {
        Key::Letter(c) => {
            let style = match hints.hint(c) {
                LetterHint::Exact => base.fg(Color::White).bg(CORRECT),
                LetterHint::Present => base.fg(Color::White).bg(PARTIAL),
                LetterHint::Absent => base.fg(Color::White).bg(WRONG),
                LetterHint::Unused => base.fg(Color::Black).bg(INACTIVE),
            };
            (style, gates.letters)
        }
        Key::Enter => (base.fg(Color::Black).bg(INACTIVE), gates.submit),
        Key::Backspace => (base.fg(Color::Black).bg(INACTIVE), gates.delete),
    };
    if enabled {
        style
    } else {
        style.add_modifier(Modifier::DIM)
    }
}

fn keyboard_lines(hints: &KeyboardHints, gates: &Gates) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(KEYBOARD_HEIGHT as usize);
    for (idx, row) in KEYBOARD_ROWS.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::raw(""));
        }
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (k, key) in row.iter().enumerate() {
            if k > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", key.label()),
                key_style(*key, hints, gates),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}
