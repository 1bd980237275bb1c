//! The shell around the explorer: title bar, splitters and the collaborator
//! panels. None of them own any state.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::theme::UiTheme;
use crate::kernel::Axis;

const APP_TITLE: &str = "ide-shell";
const KEY_HINTS: &str = "n file  N folder  F2 rename  Del delete  q quit";

pub fn render_title_bar(frame: &mut Frame, area: Rect, theme: &UiTheme) {
    let line = Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(KEY_HINTS, Style::default().fg(theme.muted_fg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_splitter(frame: &mut Frame, area: Rect, axis: Axis, active: bool, theme: &UiTheme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let color = if active {
        theme.splitter_active
    } else {
        theme.splitter
    };
    let lines: Vec<Line> = match axis {
        Axis::X => (0..area.height).map(|_| Line::raw("│")).collect(),
        Axis::Y => vec![Line::raw("─".repeat(area.width as usize))],
    };
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(color)),
        area,
    );
}

/// Bordered panel with a title and a dimmed one-line body.
pub fn render_placeholder(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    body: &str,
    focused: bool,
    theme: &UiTheme,
) {
    let block = panel_block(title, focused, theme);
    let text = Paragraph::new(Span::styled(
        body.to_string(),
        Style::default().fg(theme.muted_fg),
    ))
    .block(block);
    frame.render_widget(text, area);
}

/// Tail of the log stream, newest line at the bottom.
pub fn render_terminal(
    frame: &mut Frame,
    area: Rect,
    logs: &VecDeque<String>,
    focused: bool,
    theme: &UiTheme,
) {
    let block = panel_block("TERMINAL", focused, theme);
    let height = block.inner(area).height as usize;
    let skip = logs.len().saturating_sub(height);
    let lines: Vec<Line> = logs
        .iter()
        .skip(skip)
        .map(|line| Line::raw(line.as_str()))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn panel_block<'a>(title: &'a str, focused: bool, theme: &UiTheme) -> Block<'a> {
    let border = if focused {
        theme.focus_border
    } else {
        theme.inactive_border
    };
    Block::bordered()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.header_fg),
        ))
        .border_style(Style::default().fg(border))
}

#[cfg(test)]
#[path = "../../tests/unit/views/panels.rs"]
mod tests;
