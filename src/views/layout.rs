//! Screen regions of the shell, derived from the panel splits.

use ratatui::layout::Rect;

use crate::kernel::{LayoutState, Splitter};

pub const TITLE_HEIGHT: u16 = 1;
const SPLITTER_SIZE: u16 = 1;
/// The editor keeps at least this many columns when side panels are wide.
const MIN_EDITOR_WIDTH: u16 = 10;
const MIN_MAIN_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkbenchLayout {
    pub title: Rect,
    pub explorer: Rect,
    pub explorer_splitter: Rect,
    pub editor: Rect,
    pub steps_splitter: Rect,
    pub steps: Rect,
    pub terminal_splitter: Rect,
    pub terminal: Rect,
}

pub fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

impl WorkbenchLayout {
    pub fn compute(area: Rect, layout: &LayoutState) -> Self {
        let title = Rect::new(area.x, area.y, area.width, TITLE_HEIGHT.min(area.height));
        let body_y = area.y + title.height;
        let body_height = area.height - title.height;

        let max_terminal = body_height.saturating_sub(MIN_MAIN_HEIGHT + SPLITTER_SIZE);
        let terminal_height = layout.terminal.position().min(max_terminal);
        let splitter_height = SPLITTER_SIZE.min(body_height.saturating_sub(terminal_height));
        let main_height = body_height - terminal_height - splitter_height;

        let terminal_splitter = Rect::new(area.x, body_y + main_height, area.width, splitter_height);
        let terminal = Rect::new(
            area.x,
            terminal_splitter.y + splitter_height,
            area.width,
            terminal_height,
        );

        let side_budget = area
            .width
            .saturating_sub(MIN_EDITOR_WIDTH + 2 * SPLITTER_SIZE);
        let explorer_width = layout.explorer.position().min(side_budget);
        let steps_width = layout
            .steps
            .position()
            .min(side_budget.saturating_sub(explorer_width));

        let explorer = Rect::new(area.x, body_y, explorer_width, main_height);
        let explorer_splitter = Rect::new(
            explorer.x + explorer_width,
            body_y,
            SPLITTER_SIZE.min(area.width.saturating_sub(explorer_width)),
            main_height,
        );

        let right = area.x + area.width;
        let steps = Rect::new(right - steps_width, body_y, steps_width, main_height);
        let steps_splitter_x = steps.x.saturating_sub(SPLITTER_SIZE).max(
            explorer_splitter.x + explorer_splitter.width,
        );
        let steps_splitter = Rect::new(
            steps_splitter_x,
            body_y,
            steps.x - steps_splitter_x,
            main_height,
        );

        let editor_x = explorer_splitter.x + explorer_splitter.width;
        let editor = Rect::new(
            editor_x,
            body_y,
            steps_splitter.x.saturating_sub(editor_x),
            main_height,
        );

        Self {
            title,
            explorer,
            explorer_splitter,
            editor,
            steps_splitter,
            steps,
            terminal_splitter,
            terminal,
        }
    }

    pub fn splitter_at(&self, x: u16, y: u16) -> Option<Splitter> {
        if rect_contains(self.explorer_splitter, x, y) {
            Some(Splitter::Explorer)
        } else if rect_contains(self.steps_splitter, x, y) {
            Some(Splitter::Steps)
        } else if rect_contains(self.terminal_splitter, x, y) {
            Some(Splitter::Terminal)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/layout.rs"]
mod tests;
