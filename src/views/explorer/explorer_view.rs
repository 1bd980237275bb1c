//! File explorer panel: rendering and hit-testing only. Every change goes
//! through the store.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::theme::UiTheme;
use crate::core::{ClickListeners, Subscription};
use crate::kernel::{Action, ExplorerState, NodeInteraction, RenameState};
use crate::models::icon::caret;
use crate::models::{icon_kind_for, FileTreeRow, NodeKind};
use crate::views::layout::rect_contains;

const TITLE: &str = "EXPLORER";
const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderButton {
    NewFile,
    NewFolder,
    Refresh,
}

impl HeaderButton {
    pub const ALL: [HeaderButton; 3] = [
        HeaderButton::NewFile,
        HeaderButton::NewFolder,
        HeaderButton::Refresh,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeaderButton::NewFile => "+file",
            HeaderButton::NewFolder => "+dir",
            HeaderButton::Refresh => "↻",
        }
    }

    pub fn action(self) -> Action {
        match self {
            HeaderButton::NewFile => Action::ExplorerCreateAtSelection {
                kind: NodeKind::File,
            },
            HeaderButton::NewFolder => Action::ExplorerCreateAtSelection {
                kind: NodeKind::Folder,
            },
            HeaderButton::Refresh => Action::ExplorerRefresh,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerHit {
    Button(HeaderButton),
    /// Index into the flattened rows.
    Row(usize),
    RenameInput,
    /// Inside the panel but on nothing clickable.
    Blank,
}

#[derive(Debug, Default)]
pub struct ExplorerView {
    area: Option<Rect>,
    rows_area: Option<Rect>,
    buttons: Vec<(HeaderButton, Rect)>,
    /// Row being edited and the column its input starts at.
    input_origin: Option<(usize, u16)>,
    outside_click: Option<Subscription<Action>>,
}

impl ExplorerView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the "click anywhere closes the context menu" listener. The
    /// subscription lives as long as the view stays mounted.
    pub fn mount(&mut self, listeners: &ClickListeners<Action>) {
        self.outside_click = Some(listeners.subscribe(|_| Some(Action::ContextMenuClose)));
    }

    pub fn unmount(&mut self) {
        self.outside_click = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.outside_click.is_some()
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.is_some_and(|area| rect_contains(area, x, y))
    }

    pub fn view_height(&self) -> Option<usize> {
        self.rows_area.map(|area| area.height as usize)
    }

    /// Screen cell just below `row`, where a keyboard-opened menu anchors.
    pub fn row_anchor(&self, row: usize, scroll_offset: usize) -> Option<(u16, u16)> {
        let area = self.rows_area?;
        let offset = row.checked_sub(scroll_offset)?;
        if offset >= area.height as usize {
            return None;
        }
        Some((area.x + 2, area.y + offset as u16 + 1))
    }

    pub fn hit_test(&self, x: u16, y: u16, state: &ExplorerState) -> Option<ExplorerHit> {
        if !self.contains(x, y) {
            return None;
        }

        if let Some((button, _)) = self
            .buttons
            .iter()
            .find(|(_, area)| rect_contains(*area, x, y))
        {
            return Some(ExplorerHit::Button(*button));
        }

        let Some(rows_area) = self.rows_area.filter(|area| rect_contains(*area, x, y)) else {
            return Some(ExplorerHit::Blank);
        };

        let index = state.scroll_offset + (y - rows_area.y) as usize;
        if index >= state.rows.len() {
            return Some(ExplorerHit::Blank);
        }
        match self.input_origin {
            Some((row, input_x)) if row == index && x >= input_x => Some(ExplorerHit::RenameInput),
            _ => Some(ExplorerHit::Row(index)),
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &ExplorerState,
        focused: bool,
        theme: &UiTheme,
    ) {
        self.area = Some(area);
        self.buttons.clear();
        self.input_origin = None;

        let border = if focused {
            theme.focus_border
        } else {
            theme.inactive_border
        };
        let block = Block::bordered().border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            self.rows_area = None;
            return;
        }

        let header = Rect::new(inner.x, inner.y, inner.width, 1);
        self.render_header(frame, header, theme);

        let rows_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
        self.rows_area = Some(rows_area);

        let visible_end = (state.scroll_offset + rows_area.height as usize).min(state.rows.len());
        let start = state.scroll_offset.min(visible_end);
        let mut lines = Vec::with_capacity(visible_end - start);
        for (index, row) in state.rows[start..visible_end].iter().enumerate() {
            let interaction = state.interaction(&row.id);
            let rename = state.rename.as_ref().filter(|r| r.id == row.id);
            let (line, name_offset) = row_line(row, interaction, rename, rows_area.width, theme);
            if rename.is_some() {
                self.input_origin = Some((start + index, rows_area.x + name_offset));
            }
            lines.push(line);
        }

        frame.render_widget(Paragraph::new(lines), rows_area);
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        let title_end = area.x + TITLE.width() as u16;
        let mut right = area.x + area.width;
        let mut placed = Vec::with_capacity(HeaderButton::ALL.len());
        for button in HeaderButton::ALL.iter().rev() {
            let width = button.label().width() as u16;
            let Some(x) = right.checked_sub(width).filter(|x| *x > title_end) else {
                break;
            };
            placed.push((*button, Rect::new(x, area.y, width, 1)));
            right = x.saturating_sub(1);
        }
        placed.reverse();

        frame.render_widget(
            Paragraph::new(Span::styled(
                TITLE,
                Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            area,
        );
        for (button, rect) in &placed {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    button.label(),
                    Style::default().fg(theme.muted_fg),
                )),
                *rect,
            );
        }
        self.buttons = placed;
    }
}

/// One explorer row, plus the column offset where the name (or the rename
/// input) starts.
fn row_line(
    row: &FileTreeRow,
    interaction: NodeInteraction,
    rename: Option<&RenameState>,
    width: u16,
    theme: &UiTheme,
) -> (Line<'static>, u16) {
    let icon = icon_kind_for(row.kind, &row.name, row.is_open).icon();
    let prefix = format!("{}{}", INDENT.repeat(row.depth as usize), caret(row.kind, row.is_open));
    let icon_style = match icon.color {
        Some(rgb) => Style::default().fg(theme.icon_color(rgb)),
        None => Style::default(),
    };
    let glyph = format!("{} ", icon.glyph);
    let name_offset = (prefix.width() + glyph.width()).min(width as usize) as u16;

    let mut spans = vec![Span::raw(prefix), Span::styled(glyph, icon_style)];
    let base = match interaction {
        NodeInteraction::Selected => Style::default()
            .fg(theme.selected_fg)
            .bg(theme.selected_bg),
        NodeInteraction::Idle | NodeInteraction::Editing => Style::default().fg(theme.row_fg),
    };

    let used = match rename {
        Some(rename) => {
            let input_width = width.saturating_sub(name_offset) as usize;
            spans.extend(input_spans(rename, input_width, theme));
            width as usize
        }
        None => {
            let name = row.name.to_string();
            let used = name_offset as usize + name.width();
            spans.push(Span::raw(name));
            used
        }
    };
    if interaction == NodeInteraction::Selected {
        let pad = (width as usize).saturating_sub(used);
        spans.push(Span::raw(" ".repeat(pad)));
    }

    (Line::from(spans).style(base), name_offset)
}

/// The inline text input: draft, caret cell and background filling the rest
/// of the row.
fn input_spans(rename: &RenameState, width: usize, theme: &UiTheme) -> Vec<Span<'static>> {
    let input = Style::default().fg(theme.input_fg).bg(theme.input_bg);
    let mut spans = Vec::with_capacity(4);

    let used = if rename.select_all {
        spans.push(Span::styled(
            rename.draft.clone(),
            input.bg(theme.input_selection_bg),
        ));
        rename.draft.width()
    } else {
        let (before, rest) = rename.draft.split_at(rename.cursor.min(rename.draft.len()));
        let at = rest.graphemes(true).next().unwrap_or(" ");
        let after = &rest[at.len().min(rest.len())..];

        spans.push(Span::styled(before.to_string(), input));
        spans.push(Span::styled(
            at.to_string(),
            input.add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::styled(after.to_string(), input));
        before.width() + at.width() + after.width()
    };

    spans.push(Span::styled(" ".repeat(width.saturating_sub(used)), input));
    spans
}

#[cfg(test)]
#[path = "../../../tests/unit/views/explorer/explorer_view.rs"]
mod tests;
