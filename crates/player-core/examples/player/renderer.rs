use player_core::{NotificationKind, PlaybackFrame};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::{App, EditState};

pub fn render(frame: &mut Frame, app: &App, snapshot: &PlaybackFrame) {
    let [header_area, body_area, timeline_area, toast_area, prompt_area, hint_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_header(frame, app, snapshot, header_area);
    render_transcript(frame, snapshot, body_area);
    render_timeline(frame, snapshot, timeline_area);
    render_toast(frame, app, toast_area);
    render_prompt(frame, app, prompt_area);
    render_hints(frame, hint_area);
}

fn render_header(frame: &mut Frame, app: &App, snapshot: &PlaybackFrame, area: Rect) {
    let status = if snapshot.running {
        "▶ PLAYING"
    } else {
        "■ STOPPED"
    };
    let end_ms = snapshot.entries.last().map(|e| e.end_ms()).unwrap_or(0);
    let text = format!(
        " {} | {} | {}ms / {}ms ",
        app.fixture_name, status, snapshot.elapsed_ms, end_ms
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_transcript(frame: &mut Frame, snapshot: &PlaybackFrame, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    for entry in &snapshot.entries {
        let highlighted = snapshot.active_id.as_deref() == Some(entry.id.as_str());
        let style = if highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(entry.word.clone(), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(spans)]).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_timeline(frame: &mut Frame, snapshot: &PlaybackFrame, area: Rect) {
    let end_ms = snapshot.entries.last().map(|e| e.end_ms()).unwrap_or(0);
    let ratio = if end_ms == 0 {
        0.0
    } else {
        (snapshot.elapsed_ms as f64 / end_ms as f64).clamp(0.0, 1.0)
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{}ms", snapshot.elapsed_ms));
    frame.render_widget(gauge, area);
}

fn render_toast(frame: &mut Frame, app: &App, area: Rect) {
    let Some((notification, _)) = &app.toast else {
        return;
    };
    let style = match notification.kind {
        NotificationKind::Success => Style::default().fg(Color::Green),
        NotificationKind::Error => Style::default().fg(Color::Red),
    };
    frame.render_widget(
        Paragraph::new(format!(" {} ", notification.message)).style(style),
        area,
    );
}

fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.edit {
        EditState::Idle => return,
        EditState::PickingWord { buf } => format!(" word to change: {buf}▏"),
        EditState::TypingReplacement { target, buf } => {
            format!(" replace {target:?} with: {buf}▏")
        }
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Cyan)),
        area,
    );
}

fn render_hints(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(" [Space] start/stop  [e] edit word  [Esc] cancel  [q] quit ")
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
