use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::Workbench;
use crate::core::ClickEvent;
use crate::kernel::{Action, Axis, FocusTarget};
use crate::tui::keymap::{action_for_key, KeyMode};
use crate::tui::view::EventResult;
use crate::views::layout::rect_contains;
use crate::views::{ExplorerHit, MenuHit};

const SCROLL_STEP: isize = 3;

pub(super) fn handle_input(workbench: &mut Workbench, event: &Event) -> EventResult {
    let changed = match event {
        Event::Key(key) => handle_key(workbench, key),
        Event::Mouse(mouse) => handle_mouse(workbench, mouse),
        Event::Resize(_, _) => return EventResult::Consumed,
        _ => false,
    };

    if workbench.should_quit() {
        return EventResult::Quit;
    }
    EventResult::from_changed(changed)
}

fn key_mode(workbench: &Workbench) -> KeyMode {
    let explorer = &workbench.store.state().explorer;
    if explorer.editing().is_some() {
        KeyMode::Rename
    } else if explorer.context_menu.is_some() {
        KeyMode::ContextMenu
    } else {
        KeyMode::Tree
    }
}

fn handle_key(workbench: &mut Workbench, key: &KeyEvent) -> bool {
    let mode = key_mode(workbench);
    if mode == KeyMode::Tree && key.kind != KeyEventKind::Release && is_menu_key(key) {
        return open_menu_at_selection(workbench);
    }

    match action_for_key(key, mode) {
        Some(action) => workbench.dispatch(action),
        None => false,
    }
}

fn is_menu_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::F(10) => key.modifiers.contains(KeyModifiers::SHIFT),
        KeyCode::Char('m') => key.modifiers.is_empty(),
        _ => false,
    }
}

/// Keyboard route to the context menu: anchored just under the selected row.
fn open_menu_at_selection(workbench: &mut Workbench) -> bool {
    let explorer = &workbench.store.state().explorer;
    let Some(id) = explorer.selected().cloned() else {
        return false;
    };
    let Some(row) = explorer.row_index(&id) else {
        return false;
    };
    let Some((x, y)) = workbench.explorer.row_anchor(row, explorer.scroll_offset) else {
        return false;
    };
    workbench.dispatch(Action::ContextMenuOpen { id, x, y })
}

fn handle_mouse(workbench: &mut Workbench, mouse: &MouseEvent) -> bool {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => left_down(workbench, x, y),
        MouseEventKind::Down(MouseButton::Right) => right_down(workbench, x, y),
        MouseEventKind::Drag(MouseButton::Left) => drag(workbench, x, y),
        MouseEventKind::Up(MouseButton::Left) => workbench.dispatch(Action::LayoutEndDrag),
        MouseEventKind::ScrollUp => scroll(workbench, x, y, -1),
        MouseEventKind::ScrollDown => scroll(workbench, x, y, 1),
        MouseEventKind::Moved => hover(workbench, x, y),
        _ => false,
    }
}

fn menu_hit(workbench: &Workbench, x: u16, y: u16) -> Option<MenuHit> {
    let menu = workbench.store.state().explorer.context_menu.as_ref()?;
    workbench.context_menu.hit_test(x, y, menu)
}

/// Runs every global click listener and feeds their actions to the store.
fn emit_click(workbench: &mut Workbench, x: u16, y: u16) -> bool {
    let actions = workbench.click_listeners.emit(ClickEvent { x, y });
    let mut changed = false;
    for action in actions {
        changed |= workbench.dispatch(action);
    }
    changed
}

/// A click anywhere except the rename input takes focus away from it.
fn blur_rename(workbench: &mut Workbench, hit: Option<ExplorerHit>) -> bool {
    let editing = workbench.store.state().explorer.editing().is_some();
    if editing && hit != Some(ExplorerHit::RenameInput) {
        workbench.dispatch(Action::RenameCommit)
    } else {
        false
    }
}

fn explorer_hit(workbench: &Workbench, x: u16, y: u16) -> Option<ExplorerHit> {
    workbench
        .explorer
        .hit_test(x, y, &workbench.store.state().explorer)
}

fn left_down(workbench: &mut Workbench, x: u16, y: u16) -> bool {
    match menu_hit(workbench, x, y) {
        Some(MenuHit::Item(index)) => {
            let mut changed = workbench.dispatch(Action::ContextMenuSetSelected { index });
            changed |= workbench.dispatch(Action::ContextMenuConfirm);
            return changed;
        }
        Some(MenuHit::Frame) => return false,
        None => {}
    }

    let mut changed = emit_click(workbench, x, y);
    let hit = explorer_hit(workbench, x, y);
    changed |= blur_rename(workbench, hit);

    if let Some(splitter) = workbench.layout.splitter_at(x, y) {
        let at = match workbench.store.state().layout.split(splitter).axis() {
            Axis::X => x,
            Axis::Y => y,
        };
        return changed | workbench.dispatch(Action::LayoutBeginDrag { splitter, at });
    }

    // The hit was taken before the blur; rows may have moved since.
    let hit = explorer_hit(workbench, x, y);
    let action = match hit {
        Some(ExplorerHit::Button(button)) => Some(button.action()),
        Some(ExplorerHit::Row(row)) => Some(Action::ExplorerClickRow { row }),
        Some(ExplorerHit::RenameInput) => None,
        Some(ExplorerHit::Blank) => Some(Action::SetFocus(FocusTarget::Explorer)),
        None => panel_focus(workbench, x, y).map(Action::SetFocus),
    };
    if let Some(action) = action {
        changed |= workbench.dispatch(action);
    }
    changed
}

fn panel_focus(workbench: &Workbench, x: u16, y: u16) -> Option<FocusTarget> {
    let layout = &workbench.layout;
    if rect_contains(layout.editor, x, y) {
        Some(FocusTarget::Editor)
    } else if rect_contains(layout.steps, x, y) {
        Some(FocusTarget::Steps)
    } else if rect_contains(layout.terminal, x, y) {
        Some(FocusTarget::Terminal)
    } else {
        None
    }
}

fn right_down(workbench: &mut Workbench, x: u16, y: u16) -> bool {
    if menu_hit(workbench, x, y).is_some() {
        return false;
    }

    let mut changed = emit_click(workbench, x, y);
    let hit = explorer_hit(workbench, x, y);
    changed |= blur_rename(workbench, hit);

    if let Some(ExplorerHit::Row(row)) = explorer_hit(workbench, x, y) {
        if let Some(id) = workbench.store.state().explorer.row(row).map(|row| row.id.clone()) {
            changed |= workbench.dispatch(Action::ContextMenuOpen { id, x, y });
        }
    }
    changed
}

fn drag(workbench: &mut Workbench, x: u16, y: u16) -> bool {
    let Some(splitter) = workbench.store.state().layout.dragging() else {
        return false;
    };
    let at = match workbench.store.state().layout.split(splitter).axis() {
        Axis::X => x,
        Axis::Y => y,
    };
    workbench.dispatch(Action::LayoutDragTo { at })
}

fn scroll(workbench: &mut Workbench, x: u16, y: u16, direction: isize) -> bool {
    if menu_hit(workbench, x, y).is_some() {
        return workbench.dispatch(Action::ContextMenuMoveSelection { delta: direction });
    }
    if workbench.explorer.contains(x, y) {
        return workbench.dispatch(Action::ExplorerScroll {
            delta: direction * SCROLL_STEP,
        });
    }
    false
}

fn hover(workbench: &mut Workbench, x: u16, y: u16) -> bool {
    match menu_hit(workbench, x, y) {
        Some(MenuHit::Item(index)) => workbench.dispatch(Action::ContextMenuSetSelected { index }),
        _ => false,
    }
}
