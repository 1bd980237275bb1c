use super::*;
use crate::kernel::ExplorerState;
use crate::models::{FileTree, NodeId};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn draw(view: &mut ExplorerView, state: &ExplorerState) -> Buffer {
    let theme = UiTheme::default();
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), state, true, &theme))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn line_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer.content[buffer.index_of(x, y)].symbol())
        .collect()
}

#[test]
fn renders_header_and_visible_rows() {
    let state = ExplorerState::new(&FileTree::seed());
    let mut view = ExplorerView::new();
    let buffer = draw(&mut view, &state);

    let header = line_text(&buffer, 1);
    assert!(header.contains("EXPLORER"));
    assert!(header.contains("+file"));
    assert!(header.contains("+dir"));

    assert!(line_text(&buffer, 2).contains("▶"));
    assert!(line_text(&buffer, 2).contains("src"));
    assert!(line_text(&buffer, 5).contains("README.md"));
    assert_eq!(view.view_height(), Some(5));
}

#[test]
fn hit_test_maps_rows_buttons_and_blank_space() {
    let state = ExplorerState::new(&FileTree::seed());
    let mut view = ExplorerView::new();
    draw(&mut view, &state);

    assert_eq!(view.hit_test(5, 3, &state), Some(ExplorerHit::Row(1)));
    assert_eq!(view.hit_test(5, 6, &state), Some(ExplorerHit::Blank));
    assert_eq!(
        view.hit_test(17, 1, &state),
        Some(ExplorerHit::Button(HeaderButton::NewFile))
    );
    assert_eq!(
        view.hit_test(28, 1, &state),
        Some(ExplorerHit::Button(HeaderButton::Refresh))
    );
    assert_eq!(view.hit_test(40, 3, &state), None);
}

#[test]
fn hit_test_respects_scroll_offset() {
    let tree = FileTree::seed().toggle(&NodeId::from("1"));
    let mut state = ExplorerState::new(&tree);
    state.set_view_height(5);
    state.scroll(2);
    let mut view = ExplorerView::new();
    draw(&mut view, &state);

    assert_eq!(view.hit_test(5, 2, &state), Some(ExplorerHit::Row(2)));
    assert!(line_text(&draw(&mut view, &state), 2).contains("utils"));
}

#[test]
fn rename_input_is_hit_separately_from_row() {
    let mut state = ExplorerState::new(&FileTree::seed());
    state.rename = Some(RenameState::new(NodeId::from("9"), "package.json"));
    let mut view = ExplorerView::new();
    let buffer = draw(&mut view, &state);

    assert!(line_text(&buffer, 4).contains("package.json"));
    assert_eq!(view.hit_test(6, 4, &state), Some(ExplorerHit::RenameInput));
    assert_eq!(view.hit_test(3, 4, &state), Some(ExplorerHit::Row(2)));
    assert_eq!(view.hit_test(6, 5, &state), Some(ExplorerHit::Row(3)));
}

#[test]
fn selected_row_is_highlighted_full_width() {
    let mut state = ExplorerState::new(&FileTree::seed());
    state.set_selected(Some(NodeId::from("10")));
    let mut view = ExplorerView::new();
    let buffer = draw(&mut view, &state);

    let theme = UiTheme::default();
    let last_cell = &buffer.content[buffer.index_of(28, 5)];
    assert_eq!(last_cell.bg, theme.selected_bg);
    let unselected = &buffer.content[buffer.index_of(28, 4)];
    assert_ne!(unselected.bg, theme.selected_bg);
}

#[test]
fn header_buttons_dispatch_create_and_refresh() {
    assert_eq!(
        HeaderButton::NewFolder.action(),
        Action::ExplorerCreateAtSelection {
            kind: NodeKind::Folder
        }
    );
    assert_eq!(HeaderButton::Refresh.action(), Action::ExplorerRefresh);
}

#[test]
fn mounted_view_holds_outside_click_subscription() {
    let listeners = ClickListeners::new();
    let mut view = ExplorerView::new();
    view.mount(&listeners);
    assert!(view.is_mounted());
    assert_eq!(listeners.len(), 1);
    assert_eq!(
        listeners.emit(crate::core::ClickEvent { x: 0, y: 0 }),
        vec![Action::ContextMenuClose]
    );

    view.unmount();
    assert!(listeners.is_empty());

    view.mount(&listeners);
    drop(view);
    assert!(listeners.is_empty());
}
