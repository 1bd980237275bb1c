use tracing::debug;

use crate::kernel::state::RenameState;
use crate::kernel::{Action, Effect};
use crate::models::NodeId;

impl super::Store {
    pub(super) fn reduce_rename_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::RenameStart { id } => self.start_rename(id),
            Action::RenameStartSelected => {
                let Some(id) = self.state.explorer.selected().cloned() else {
                    return super::DispatchResult::changed(false);
                };
                self.start_rename(id)
            }
            Action::RenameAppend(ch) => self.edit_rename(|rename| rename.insert_char(ch)),
            Action::RenameBackspace => self.edit_rename(RenameState::backspace),
            Action::RenameDelete => self.edit_rename(RenameState::delete_forward),
            Action::RenameCursorLeft => self.edit_rename(RenameState::cursor_left),
            Action::RenameCursorRight => self.edit_rename(RenameState::cursor_right),
            Action::RenameCursorHome => self.edit_rename(RenameState::cursor_home),
            Action::RenameCursorEnd => self.edit_rename(RenameState::cursor_end),
            Action::RenameSelectAll => self.edit_rename(RenameState::select_all),
            Action::RenameCommit => super::DispatchResult::changed(self.commit_rename()),
            Action::RenameCancel => {
                let Some(rename) = self.state.explorer.rename.take() else {
                    return super::DispatchResult::changed(false);
                };
                debug!(id = %rename.id, "rename cancelled");
                self.state.explorer.set_selected(Some(rename.id));
                super::DispatchResult::changed(true)
            }
            _ => unreachable!("non-rename action passed to reduce_rename_action"),
        }
    }

    fn edit_rename(&mut self, edit: impl FnOnce(&mut RenameState) -> bool) -> super::DispatchResult {
        let state_changed = self.state.explorer.rename.as_mut().is_some_and(edit);
        super::DispatchResult::changed(state_changed)
    }

    pub(super) fn start_rename(&mut self, id: NodeId) -> super::DispatchResult {
        if !self.state.tree.contains(&id) {
            debug!(id = %id, "rename ignored: unknown node");
            return super::DispatchResult::changed(false);
        }
        if self.state.explorer.editing() == Some(&id) {
            return super::DispatchResult::changed(false);
        }

        // Starting a second rename blurs the first one.
        self.commit_rename();
        self.focus_explorer();

        let Some(name) = self.state.tree.find(&id).map(|node| node.name().to_owned()) else {
            return super::DispatchResult::changed(true);
        };
        self.state.explorer.rename = Some(RenameState::new(id.clone(), name));
        self.state.explorer.reveal(&id);

        super::DispatchResult {
            effects: vec![Effect::FocusRenameInput { id }],
            state_changed: true,
        }
    }

    /// Leaves edit mode, applying the draft. A refused name (blank, or the
    /// node gone) leaves the tree unchanged. Returns whether a rename was
    /// in progress.
    pub(super) fn commit_rename(&mut self) -> bool {
        let Some(rename) = self.state.explorer.rename.take() else {
            return false;
        };

        match self.state.tree.rename(&rename.id, &rename.draft) {
            Ok(tree) => {
                debug!(id = %rename.id, name = %rename.draft, "node renamed");
                self.replace_tree(tree);
            }
            Err(err) => debug!(id = %rename.id, error = %err, "rename refused"),
        }

        if self.state.tree.contains(&rename.id) {
            self.state.explorer.set_selected(Some(rename.id));
        }
        true
    }
}
