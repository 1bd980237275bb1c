//! Keyboard bindings for the explorer, by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::kernel::Action;
use crate::models::NodeKind;

const PAGE_STEP: isize = 10;

/// Which widget currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Tree,
    Rename,
    ContextMenu,
}

pub fn action_for_key(key: &KeyEvent, mode: KeyMode) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match mode {
        KeyMode::Rename => rename_key(key),
        KeyMode::ContextMenu => context_menu_key(key),
        KeyMode::Tree => tree_key(key),
    }
}

fn rename_key(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Enter => Action::RenameCommit,
        KeyCode::Esc => Action::RenameCancel,
        KeyCode::Backspace => Action::RenameBackspace,
        KeyCode::Delete => Action::RenameDelete,
        KeyCode::Left => Action::RenameCursorLeft,
        KeyCode::Right => Action::RenameCursorRight,
        KeyCode::Home => Action::RenameCursorHome,
        KeyCode::End => Action::RenameCursorEnd,
        KeyCode::Char('a') if ctrl => Action::RenameSelectAll,
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Action::RenameAppend(ch)
        }
        _ => return None,
    };
    Some(action)
}

fn context_menu_key(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Up => Action::ContextMenuMoveSelection { delta: -1 },
        KeyCode::Down | KeyCode::Tab => Action::ContextMenuMoveSelection { delta: 1 },
        KeyCode::Enter => Action::ContextMenuConfirm,
        KeyCode::Esc => Action::ContextMenuClose,
        _ => return None,
    };
    Some(action)
}

fn tree_key(key: &KeyEvent) -> Option<Action> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let action = match key.code {
        KeyCode::Up => Action::ExplorerMoveSelection { delta: -1 },
        KeyCode::Down => Action::ExplorerMoveSelection { delta: 1 },
        KeyCode::PageUp => Action::ExplorerScroll { delta: -PAGE_STEP },
        KeyCode::PageDown => Action::ExplorerScroll { delta: PAGE_STEP },
        KeyCode::Enter => Action::ExplorerActivate,
        KeyCode::Char('n') => Action::ExplorerCreateAtSelection {
            kind: NodeKind::File,
        },
        KeyCode::Char('N') => Action::ExplorerCreateAtSelection {
            kind: NodeKind::Folder,
        },
        KeyCode::F(2) | KeyCode::Char('r') => Action::RenameStartSelected,
        KeyCode::Delete | KeyCode::Char('d') => Action::ExplorerDeleteSelected,
        KeyCode::F(5) => Action::ExplorerRefresh,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/keymap.rs"]
mod tests;
