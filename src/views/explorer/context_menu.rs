use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::theme::UiTheme;
use crate::kernel::ContextMenuState;
use crate::views::layout::rect_contains;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHit {
    Item(usize),
    /// Border, separator or padding.
    Frame,
}

/// Popup listing the actions for the node under the pointer.
#[derive(Debug, Default)]
pub struct ContextMenuView {
    area: Option<Rect>,
}

/// Places the popup at `anchor`, shifted back inside `bounds` when it would
/// overflow.
pub fn popup_rect(menu: &ContextMenuState, bounds: Rect) -> Rect {
    let label_width = menu
        .items
        .iter()
        .map(|item| item.label().width())
        .max()
        .unwrap_or(0) as u16;
    let width = (label_width + 4).min(bounds.width);
    let height = (menu.items.len() as u16 + 2).min(bounds.height);

    let (ax, ay) = menu.anchor;
    let max_x = bounds.x + bounds.width - width;
    let max_y = bounds.y + bounds.height - height;
    Rect::new(ax.clamp(bounds.x, max_x), ay.clamp(bounds.y, max_y), width, height)
}

impl ContextMenuView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn hide(&mut self) {
        self.area = None;
    }

    pub fn hit_test(&self, x: u16, y: u16, menu: &ContextMenuState) -> Option<MenuHit> {
        let area = self.area.filter(|area| rect_contains(*area, x, y))?;
        let inner = Block::bordered().inner(area);
        if !rect_contains(inner, x, y) {
            return Some(MenuHit::Frame);
        }
        let index = (y - inner.y) as usize;
        match menu.items.get(index) {
            Some(item) if item.is_selectable() => Some(MenuHit::Item(index)),
            _ => Some(MenuHit::Frame),
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        bounds: Rect,
        menu: &ContextMenuState,
        theme: &UiTheme,
    ) {
        let area = popup_rect(menu, bounds);
        self.area = Some(area);

        let block = Block::bordered()
            .border_style(Style::default().fg(theme.focus_border))
            .style(Style::default().bg(theme.menu_bg).fg(theme.menu_fg));
        let inner_width = block.inner(area).width as usize;

        let lines: Vec<Line> = menu
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if item.is_separator() {
                    return Line::styled("─".repeat(inner_width), Style::default().fg(theme.muted_fg));
                }
                let label = format!(" {:<width$}", item.label(), width = inner_width.saturating_sub(1));
                if index == menu.selected {
                    Line::styled(
                        label,
                        Style::default()
                            .bg(theme.menu_selected_bg)
                            .fg(theme.menu_selected_fg),
                    )
                } else {
                    Line::raw(label)
                }
            })
            .collect();

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/explorer/context_menu.rs"]
mod tests;
