use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
};
use crate::animation::AnimationPhase;
use crate::app::App;
use crate::theme::Theme;

const BUTTON_WIDTH: u16 = 26;
const GAUGE_WIDTH: u16 = 40;

/// Renders the whole screen.
pub fn render(f: &mut Frame, app: &App, theme: &Theme) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let panel_area = centered_rect(80, 90, vertical_chunks[0]);
    let panel = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.panel));
    let inner = panel.inner(panel_area);
    f.render_widget(panel, panel_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // padding
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(1), // instructions
            Constraint::Length(1),
            Constraint::Length(3), // button
            Constraint::Length(1),
            Constraint::Length(1), // progress
            Constraint::Length(1), // loading label
            Constraint::Length(1),
            Constraint::Length(3), // result
            Constraint::Min(0),
            Constraint::Length(1), // counter
        ])
        .split(inner);

    let labels = app.labels;

    f.render_widget(
        Paragraph::new(labels.title).style(theme.title).alignment(Alignment::Center),
        rows[1],
    );
    f.render_widget(
        Paragraph::new(labels.instructions).style(theme.instructions).alignment(Alignment::Center),
        rows[3],
    );

    // Extract control, disabled while animating
    let button_style = if app.is_animating() { theme.button_disabled } else { theme.button };
    let button = Paragraph::new(Line::from(labels.button))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(button_style))
        .style(button_style);
    f.render_widget(button, centered_width(rows[5], BUTTON_WIDTH));

    if app.sequencer.phase() == AnimationPhase::Loading {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.accent).bg(theme.gauge_track))
            .ratio(app.sequencer.progress().clamp(0.0, 1.0))
            .label(Span::raw(""))
            .use_unicode(true);
        f.render_widget(gauge, centered_width(rows[7], GAUGE_WIDTH));
        f.render_widget(
            Paragraph::new(labels.loading).style(theme.loading).alignment(Alignment::Center),
            rows[8],
        );
    }

    if app.result_visible() {
        if let Some(pick) = &app.last_pick {
            let color = if app.sequencer.blink_visible() {
                theme.result_color(app.sequencer.opacity())
            } else {
                theme.accent
            };
            let style = Style::default().fg(color);
            let result = Paragraph::new(vec![
                Line::from(Span::styled(labels.result_heading, style)),
                Line::from(Span::styled(pick.name.clone(), style.add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(labels.number(pick.number), style)),
            ])
            .alignment(Alignment::Center);
            f.render_widget(result, rows[10]);
        }
    }

    let counter = labels.counter(app.selection.picked_count(), app.selection.len());
    f.render_widget(
        Paragraph::new(counter).style(theme.counter).alignment(Alignment::Right),
        rows[12],
    );

    let footer = Paragraph::new(labels.footer).style(theme.footer);
    f.render_widget(footer, vertical_chunks[1]);

    if app.notice.visible {
        let popup_area = centered_rect(50, 30, area);
        f.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(Span::styled(app.notice.title, theme.popup_title))
            .borders(Borders::ALL)
            .style(theme.popup_border);
        let para = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(app.notice.text, theme.popup_text)),
            Line::from(""),
            Line::from(Span::styled(labels.notice_hint, theme.footer)),
        ])
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
        f.render_widget(para, popup_area);
    }
}

/// Centers a rectangle within another rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default().direction(Direction::Vertical)
        .constraints([Constraint::Percentage((100-percent_y)/2), Constraint::Percentage(percent_y), Constraint::Percentage((100-percent_y)/2)]).split(r)[1];
    Layout::default().direction(Direction::Horizontal)
        .constraints([Constraint::Percentage((100-percent_x)/2), Constraint::Percentage(percent_x), Constraint::Percentage((100-percent_x)/2)]).split(vertical)[1]
}

/// Horizontally centers a fixed-width slice of `r`.
fn centered_width(r: Rect, width: u16) -> Rect {
    let width = width.min(r.width);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y,
        width,
        height: r.height,
    }
}
