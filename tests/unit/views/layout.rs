use super::*;
use crate::kernel::LayoutSettings;

fn default_layout(width: u16, height: u16) -> WorkbenchLayout {
    let state = LayoutState::new(&LayoutSettings::default());
    WorkbenchLayout::compute(Rect::new(0, 0, width, height), &state)
}

#[test]
fn panels_tile_the_screen() {
    let layout = default_layout(120, 40);

    assert_eq!(layout.title, Rect::new(0, 0, 120, 1));
    assert_eq!(layout.explorer, Rect::new(0, 1, 30, 30));
    assert_eq!(layout.explorer_splitter, Rect::new(30, 1, 1, 30));
    assert_eq!(layout.editor, Rect::new(31, 1, 62, 30));
    assert_eq!(layout.steps_splitter, Rect::new(93, 1, 1, 30));
    assert_eq!(layout.steps, Rect::new(94, 1, 26, 30));
    assert_eq!(layout.terminal_splitter, Rect::new(0, 31, 120, 1));
    assert_eq!(layout.terminal, Rect::new(0, 32, 120, 8));
}

#[test]
fn narrow_screen_shrinks_side_panels_first() {
    let layout = default_layout(50, 40);
    assert_eq!(layout.explorer.width, 30);
    assert_eq!(layout.steps.width, 8);
    assert_eq!(layout.editor.width, 10);
}

#[test]
fn short_screen_shrinks_terminal() {
    let layout = default_layout(80, 8);
    assert_eq!(layout.terminal.height, 3);
    assert_eq!(layout.explorer.height, 3);
}

#[test]
fn splitters_are_hit_tested() {
    let layout = default_layout(120, 40);
    assert_eq!(layout.splitter_at(30, 10), Some(Splitter::Explorer));
    assert_eq!(layout.splitter_at(93, 10), Some(Splitter::Steps));
    assert_eq!(layout.splitter_at(60, 31), Some(Splitter::Terminal));
    assert_eq!(layout.splitter_at(60, 10), None);
}

#[test]
fn zero_area_does_not_panic() {
    let layout = default_layout(0, 0);
    assert_eq!(layout.editor.width, 0);
    assert_eq!(layout.terminal.height, 0);
}
