//! Drawing helpers shared by the screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::i18n::Strings;
use crate::model::Screen;
use crate::state::AppState;

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn normal() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn highlight() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Prices, confirmations and the active step.
pub fn accent() -> Style {
    Style::default().fg(Color::Green)
}

pub fn error() -> Style {
    Style::default().fg(Color::Red)
}

pub fn pointer(selected: bool) -> &'static str {
    if selected { "› " } else { "  " }
}

pub fn item_style(selected: bool) -> Style {
    if selected { highlight() } else { normal() }
}

/// Title, body and help line.
pub struct Frame3 {
    pub title: Rect,
    pub body: Rect,
    pub help: Rect,
}

pub fn frame3(area: Rect) -> Frame3 {
    let chunks = Layout::vertical([
        Constraint::Length(3), // title
        Constraint::Min(0),    // body
        Constraint::Length(1), // help
    ])
    .split(area);
    Frame3 {
        title: chunks[0],
        body: chunks[1],
        help: chunks[2],
    }
}

pub fn title(frame: &mut Frame, area: Rect, text: &str, detail: Option<&str>) {
    let mut spans = vec![Span::styled(text.to_string(), highlight())];
    if let Some(detail) = detail {
        spans.push(Span::styled(format!("  {detail}"), muted()));
    }
    let title = Paragraph::new(Line::from(spans))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
    frame.render_widget(title, area);
}

pub fn help(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {text}"), muted()))),
        area,
    );
}

/// Body area with the usual side padding.
pub fn padded() -> Block<'static> {
    Block::default().padding(Padding::new(2, 2, 0, 0))
}

/// `label: value` form row, with a cursor when focused.
pub fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = item_style(focused);
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(pointer(focused), style),
        Span::styled(format!("{label:<22}"), muted()),
        Span::styled(format!("{value}{cursor}"), style),
    ])
}

/// A `[ label ]` button row.
pub fn button_line(label: &str, focused: bool) -> Line<'static> {
    let style = item_style(focused);
    Line::from(vec![
        Span::styled(pointer(focused), style),
        Span::styled(format!("[ {label} ]"), style),
    ])
}

pub fn section(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::UNDERLINED),
    ))
}

/// Booking step indicator: search, seats, payment.
///
/// Draws nothing outside the booking screens.
pub fn stepper(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.screen().shows_stepper() {
        return;
    }
    let s = state.strings();
    let step = state.booking_step();
    let labels = [s.step_search, s.step_seats, s.step_payment];
    let mut spans = vec![Span::raw("  ")];
    for (index, label) in labels.iter().enumerate() {
        let number = index + 1;
        let style = match number.cmp(&step) {
            std::cmp::Ordering::Less => accent(),
            std::cmp::Ordering::Equal => highlight(),
            std::cmp::Ordering::Greater => muted(),
        };
        if index > 0 {
            spans.push(Span::styled(" ── ", muted()));
        }
        spans.push(Span::styled(format!("{number} {label}"), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Bottom tabs and the function key for each.
pub const TABS: [(Screen, &str); 5] = [
    (Screen::Home, "F1"),
    (Screen::Search, "F2"),
    (Screen::Tickets, "F3"),
    (Screen::Notifications, "F4"),
    (Screen::Profile, "F5"),
];

pub fn tab_label(screen: Screen, s: &Strings) -> &'static str {
    match screen {
        Screen::Home => s.home,
        Screen::Search => s.search,
        Screen::Tickets => s.my_tickets,
        Screen::Notifications => s.notifications,
        _ => s.profile,
    }
}

pub fn bottom_nav(frame: &mut Frame, area: Rect, current: Screen, s: &Strings) {
    let mut spans = Vec::new();
    for (screen, key) in TABS {
        let style = if screen == current {
            highlight().add_modifier(Modifier::REVERSED)
        } else {
            normal()
        };
        spans.push(Span::styled(format!(" {key} "), muted()));
        spans.push(Span::styled(format!("{} ", tab_label(screen, s)), style));
    }
    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(bar, area);
}

/// A rectangle of `width` × `height` centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Modal message box.
pub fn alert(frame: &mut Frame, message: &str, s: &Strings) {
    let area = centered(frame.area(), 50, 7);
    frame.render_widget(Clear, area);
    let body = Paragraph::new(vec![
        Line::from(Span::styled(message.to_string(), highlight())),
        Line::default(),
        Line::from(Span::styled(s.press_any_key, muted())),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(body, area);
}
