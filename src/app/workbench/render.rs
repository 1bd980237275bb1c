use ratatui::layout::Rect;
use ratatui::Frame;

use super::Workbench;
use crate::kernel::{Axis, FocusTarget, Splitter};
use crate::views::panels::{render_placeholder, render_splitter, render_terminal, render_title_bar};
use crate::views::WorkbenchLayout;

const EDITOR_EMPTY: &str = "No test case open";
const STEPS_HINT: &str = "Select a test case to see its steps";

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let state = workbench.store.state();
    let layout = WorkbenchLayout::compute(area, &state.layout);
    workbench.layout = layout;

    let focus = state.ui.focus;
    let dragging = state.layout.dragging();
    let theme = &workbench.theme;

    render_title_bar(frame, layout.title, theme);

    workbench.explorer.render(
        frame,
        layout.explorer,
        &state.explorer,
        focus == FocusTarget::Explorer,
        theme,
    );

    for (splitter, rect, axis) in [
        (Splitter::Explorer, layout.explorer_splitter, Axis::X),
        (Splitter::Steps, layout.steps_splitter, Axis::X),
        (Splitter::Terminal, layout.terminal_splitter, Axis::Y),
    ] {
        if rect.width > 0 && rect.height > 0 {
            render_splitter(frame, rect, axis, dragging == Some(splitter), theme);
        }
    }

    render_placeholder(
        frame,
        layout.editor,
        "EDITOR",
        EDITOR_EMPTY,
        focus == FocusTarget::Editor,
        theme,
    );
    render_placeholder(
        frame,
        layout.steps,
        "STEPS",
        STEPS_HINT,
        focus == FocusTarget::Steps,
        theme,
    );
    render_terminal(
        frame,
        layout.terminal,
        &workbench.logs,
        focus == FocusTarget::Terminal,
        theme,
    );

    match state.explorer.context_menu.as_ref() {
        Some(menu) => workbench.context_menu.render(frame, area, menu, theme),
        None => workbench.context_menu.hide(),
    }
}
