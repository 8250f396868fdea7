//! UI rendering helpers for the terminal user interface.
//!
//! Everything here draws a `View` snapshot with `ratatui`; no state is read
//! from anywhere else.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{Focus, View};
use crate::config::UiSettings;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space/p", "start/pause");
    map.insert("r", "reset");
    map.insert("tab", "focus sounds/work/break");
    map.insert("0-9/bksp/+/-", "edit duration");
    map.insert("j/k", "up/down");
    map.insert("enter/t", "toggle sound");
    map.insert("1-9", "toggle sound n");
    map.insert("q", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "space/p",
        "r",
        "tab",
        "0-9/bksp/+/-",
        "j/k",
        "enter/t",
        "1-9",
        "q",
    ];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Style for a duration field given whether it is focused/editable.
fn field_style(value: u32, focused: bool, enabled: bool) -> Style {
    let mut style = Style::default();
    if !enabled {
        style = style.add_modifier(Modifier::DIM);
    } else if value == 0 {
        style = style.fg(Color::Yellow);
    }
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn duration_field<'a>(label: &'a str, value: u32, focused: bool, enabled: bool) -> Vec<Span<'a>> {
    vec![
        Span::raw(label),
        Span::styled(
            format!(" {:>4} ", value),
            field_style(value, focused, enabled),
        ),
    ]
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, view: &View, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" pomotune ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Phase + clock
    let clock_style = if view.running {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD | Modifier::DIM)
    };
    let timer = Paragraph::new(vec![
        Line::from(view.phase_label).bold(),
        Line::from(""),
        Line::from(Span::styled(view.clock.as_str(), clock_style)),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().title(" timer "));
    frame.render_widget(timer, chunks[1]);

    // Buttons + duration inputs
    let mut settings_line: Vec<Span> = vec![
        Span::styled(format!("[{}]", view.start_label), Style::default().bold()),
        Span::raw(" "),
        Span::raw("[Reset]"),
        Span::raw("   "),
    ];
    settings_line.extend(duration_field(
        "Work (minutes):",
        view.work_minutes,
        view.focus == Focus::Work,
        view.inputs_enabled,
    ));
    settings_line.push(Span::raw("  "));
    settings_line.extend(duration_field(
        "Break (minutes):",
        view.break_minutes,
        view.focus == Focus::Break,
        view.inputs_enabled,
    ));
    let settings = Paragraph::new(Line::from(settings_line))
        .block(Block::bordered().padding(left_pad()).title(" settings "));
    frame.render_widget(settings, chunks[2]);

    // Soundscapes
    {
        let items: Vec<ListItem> = view
            .sounds
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let marker = if s.active { "[x]" } else { "[ ]" };
                let text = format!("{} {} {}", i + 1, marker, s.name);
                if s.active {
                    ListItem::new(text).style(Style::default().fg(Color::Green))
                } else {
                    ListItem::new(text)
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" soundscapes "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(view.sounds.iter().position(|s| s.selected));
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
