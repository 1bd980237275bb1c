use tracing::debug;

use crate::models::FileTree;

use super::{Action, AppState, Effect, FocusTarget};

mod context_menu;
mod explorer;
mod rename;

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

/// Single entry point for every UI event. Refused edits (unknown ids,
/// inserting under a file, blank names) are silent no-ops here.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult::changed(true)
            }
            Action::SetFocus(focus) => {
                let prev = self.state.ui.focus;
                self.state.ui.focus = focus;
                DispatchResult::changed(prev != focus)
            }
            Action::LayoutBeginDrag { splitter, at } => {
                let mut state_changed = false;
                if let Some(active) = self.state.layout.dragging() {
                    state_changed |= self.state.layout.split_mut(active).end_drag();
                }
                state_changed |= self.state.layout.split_mut(splitter).begin_drag(at);
                DispatchResult::changed(state_changed)
            }
            Action::LayoutDragTo { at } => {
                let Some(active) = self.state.layout.dragging() else {
                    return DispatchResult::changed(false);
                };
                DispatchResult::changed(self.state.layout.split_mut(active).drag_to(at))
            }
            Action::LayoutEndDrag => {
                let Some(active) = self.state.layout.dragging() else {
                    return DispatchResult::changed(false);
                };
                debug!(
                    splitter = ?active,
                    position = self.state.layout.split(active).position(),
                    "panel resized"
                );
                DispatchResult::changed(self.state.layout.split_mut(active).end_drag())
            }
            action @ (Action::RenameStart { .. }
            | Action::RenameStartSelected
            | Action::RenameAppend(_)
            | Action::RenameBackspace
            | Action::RenameDelete
            | Action::RenameCursorLeft
            | Action::RenameCursorRight
            | Action::RenameCursorHome
            | Action::RenameCursorEnd
            | Action::RenameSelectAll
            | Action::RenameCommit
            | Action::RenameCancel) => self.reduce_rename_action(action),
            action @ (Action::ContextMenuOpen { .. }
            | Action::ContextMenuClose
            | Action::ContextMenuMoveSelection { .. }
            | Action::ContextMenuSetSelected { .. }
            | Action::ContextMenuConfirm
            | Action::ContextMenuChoose(_)) => self.reduce_context_menu_action(action),
            action => self.reduce_explorer_action(action),
        }
    }

    /// Publishes `tree` as the current snapshot and resyncs the visible rows.
    fn replace_tree(&mut self, tree: FileTree) {
        self.state.tree = tree;
        self.state.explorer.sync_rows(&self.state.tree);
    }

    fn focus_explorer(&mut self) -> bool {
        let changed = self.state.ui.focus != FocusTarget::Explorer;
        self.state.ui.focus = FocusTarget::Explorer;
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
