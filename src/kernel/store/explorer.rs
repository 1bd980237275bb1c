use tracing::{debug, info};

use crate::kernel::state::RenameState;
use crate::kernel::{Action, Effect};
use crate::models::{InsertParent, NodeId, NodeKind};

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ExplorerSetViewHeight { height } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.set_view_height(height),
            },
            Action::ExplorerMoveSelection { delta } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.move_selection(delta),
            },
            Action::ExplorerScroll { delta } => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.explorer.scroll(delta),
            },
            Action::ExplorerClickRow { row } => {
                let Some(row) = self.state.explorer.row(row).cloned() else {
                    return super::DispatchResult::changed(false);
                };
                // Clicks land inside the rename input of the row being edited.
                if self.state.explorer.editing() == Some(&row.id) {
                    return super::DispatchResult::changed(false);
                }

                let mut state_changed = self.commit_rename();
                state_changed |= self.focus_explorer();
                if row.is_folder() {
                    state_changed |= self.toggle_folder(&row.id);
                }
                state_changed |= self.state.explorer.set_selected(Some(row.id));
                super::DispatchResult::changed(state_changed)
            }
            Action::ExplorerActivate => {
                let Some(id) = self.state.explorer.selected().cloned() else {
                    return super::DispatchResult::changed(false);
                };
                super::DispatchResult::changed(self.toggle_folder(&id))
            }
            Action::ExplorerToggle { id } => {
                super::DispatchResult::changed(self.toggle_folder(&id))
            }
            Action::ExplorerCreate { parent, kind } => self.create_node(parent, kind),
            Action::ExplorerCreateAtSelection { kind } => {
                let parent = self.state.explorer.create_parent(&self.state.tree);
                self.create_node(parent, kind)
            }
            Action::ExplorerDelete { id } => self.delete_node(id),
            Action::ExplorerDeleteSelected => {
                let Some(id) = self.state.explorer.selected().cloned() else {
                    return super::DispatchResult::changed(false);
                };
                self.delete_node(id)
            }
            Action::ExplorerRefresh => {
                debug!(nodes = self.state.tree.len(), "explorer refresh");
                self.replace_tree(self.state.tree.clone());
                super::DispatchResult::changed(true)
            }
            _ => unreachable!("non-explorer action passed to reduce_explorer_action"),
        }
    }

    fn toggle_folder(&mut self, id: &NodeId) -> bool {
        if !self.state.tree.find(id).is_some_and(|node| node.is_folder()) {
            debug!(id = %id, "toggle ignored: not a folder");
            return false;
        }
        self.replace_tree(self.state.tree.toggle(id));
        true
    }

    /// Inserts a default-named node and puts it straight into rename mode.
    pub(super) fn create_node(
        &mut self,
        parent: InsertParent,
        kind: NodeKind,
    ) -> super::DispatchResult {
        let mut state_changed = self.commit_rename();

        let (tree, id) = match self.state.tree.insert(&parent, kind) {
            Ok(inserted) => inserted,
            Err(err) => {
                debug!(?parent, ?kind, error = %err, "create refused");
                return super::DispatchResult::changed(state_changed);
            }
        };

        info!(id = %id, ?parent, ?kind, "node created");
        self.replace_tree(tree);
        state_changed |= self.focus_explorer();
        self.state.explorer.rename = Some(RenameState::new(id.clone(), kind.default_name()));
        self.state.explorer.reveal(&id);

        super::DispatchResult {
            effects: vec![Effect::FocusRenameInput { id }],
            state_changed: true,
        }
    }

    /// Removes `id` and its subtree, dropping any selection, rename or menu
    /// that pointed into the removed part.
    pub(super) fn delete_node(&mut self, id: NodeId) -> super::DispatchResult {
        let tree = match self.state.tree.delete(&id) {
            Ok(tree) => tree,
            Err(err) => {
                debug!(id = %id, error = %err, "delete refused");
                return super::DispatchResult::changed(false);
            }
        };

        let (clear_selection, clear_rename, close_menu) = {
            let old = &self.state.tree;
            let removed = |other: &NodeId| *other == id || old.is_descendant(&id, other);
            let explorer = &self.state.explorer;
            (
                explorer.selected().is_some_and(removed),
                explorer.editing().is_some_and(removed),
                explorer
                    .context_menu
                    .as_ref()
                    .is_some_and(|menu| removed(&menu.target)),
            )
        };

        info!(id = %id, "node deleted");
        self.replace_tree(tree);
        if clear_selection {
            self.state.explorer.set_selected(None);
        }
        if clear_rename {
            self.state.explorer.rename = None;
        }
        if close_menu {
            self.state.explorer.context_menu = None;
        }
        super::DispatchResult::changed(true)
    }
}
