use tracing::debug;

use crate::kernel::state::{ContextMenuEntry, ContextMenuState, ExplorerMenuAction};
use crate::kernel::Action;
use crate::models::{InsertParent, NodeKind};

impl super::Store {
    pub(super) fn reduce_context_menu_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ContextMenuOpen { id, x, y } => {
                let Some(kind) = self.state.tree.find(&id).map(|node| node.kind()) else {
                    debug!(id = %id, "context menu ignored: unknown node");
                    return super::DispatchResult::changed(false);
                };

                let mut state_changed = self.commit_rename();
                state_changed |= self.focus_explorer();
                let menu = ContextMenuState::new(id, kind, (x, y));
                if self.state.explorer.context_menu.as_ref() != Some(&menu) {
                    self.state.explorer.context_menu = Some(menu);
                    state_changed = true;
                }
                super::DispatchResult::changed(state_changed)
            }
            Action::ContextMenuClose => super::DispatchResult::changed(
                self.state.explorer.context_menu.take().is_some(),
            ),
            Action::ContextMenuMoveSelection { delta } => super::DispatchResult::changed(
                self.state
                    .explorer
                    .context_menu
                    .as_mut()
                    .is_some_and(|menu| menu.move_selection(delta)),
            ),
            Action::ContextMenuSetSelected { index } => super::DispatchResult::changed(
                self.state
                    .explorer
                    .context_menu
                    .as_mut()
                    .is_some_and(|menu| menu.set_selected(index)),
            ),
            Action::ContextMenuConfirm => {
                let Some(menu) = self.state.explorer.context_menu.take() else {
                    return super::DispatchResult::changed(false);
                };
                match menu.selected_action() {
                    Some(choice) => self.run_menu_action(&menu, choice),
                    None => super::DispatchResult::changed(true),
                }
            }
            Action::ContextMenuChoose(choice) => {
                let Some(menu) = self.state.explorer.context_menu.as_ref() else {
                    return super::DispatchResult::changed(false);
                };
                if !menu.items.contains(&ContextMenuEntry::Action(choice)) {
                    debug!(?choice, target = %menu.target, "menu action not offered");
                    return super::DispatchResult::changed(false);
                }
                let Some(menu) = self.state.explorer.context_menu.take() else {
                    return super::DispatchResult::changed(false);
                };
                self.run_menu_action(&menu, choice)
            }
            _ => unreachable!("non-context-menu action passed to reduce_context_menu_action"),
        }
    }

    /// Runs `choice` against the menu's target. The menu is already closed.
    fn run_menu_action(
        &mut self,
        menu: &ContextMenuState,
        choice: ExplorerMenuAction,
    ) -> super::DispatchResult {
        debug!(?choice, target = %menu.target, "context menu action");
        let mut result = match choice {
            ExplorerMenuAction::NewFile => {
                self.create_node(InsertParent::Node(menu.target.clone()), NodeKind::File)
            }
            ExplorerMenuAction::NewFolder => {
                self.create_node(InsertParent::Node(menu.target.clone()), NodeKind::Folder)
            }
            ExplorerMenuAction::Rename => self.start_rename(menu.target.clone()),
            ExplorerMenuAction::Delete => self.delete_node(menu.target.clone()),
        };
        result.state_changed = true;
        result
    }
}
