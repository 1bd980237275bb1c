use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::models::{FileTree, FileTreeRow, InsertParent, NodeId, NodeKind};

use super::layout::{LayoutSettings, LayoutState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Explorer,
    Editor,
    Steps,
    Terminal,
}

/// Interaction state of a single explorer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeInteraction {
    Idle,
    Selected,
    Editing,
}

/// Inline rename buffer. `cursor` is a byte offset on a grapheme boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameState {
    pub id: NodeId,
    pub draft: String,
    pub cursor: usize,
    /// The whole draft is selected: the next edit replaces it.
    pub select_all: bool,
}

impl RenameState {
    pub fn new(id: NodeId, draft: impl Into<String>) -> Self {
        let draft = draft.into();
        Self {
            id,
            cursor: draft.len(),
            draft,
            select_all: false,
        }
    }

    pub fn select_all(&mut self) -> bool {
        let changed = !self.select_all || self.cursor != self.draft.len();
        self.select_all = true;
        self.cursor = self.draft.len();
        changed
    }

    fn take_selection(&mut self) -> bool {
        if !self.select_all {
            return false;
        }
        self.select_all = false;
        self.draft.clear();
        self.cursor = 0;
        true
    }

    fn prev_boundary(&self) -> usize {
        self.draft[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.draft[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
            .unwrap_or(self.draft.len())
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        self.take_selection();
        self.cursor = self.cursor.min(self.draft.len());
        self.draft.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.take_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.draft.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.take_selection() {
            return true;
        }
        if self.cursor >= self.draft.len() {
            return false;
        }
        let next = self.next_boundary();
        self.draft.drain(self.cursor..next);
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.select_all {
            self.select_all = false;
            self.cursor = 0;
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.prev_boundary();
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.select_all {
            self.select_all = false;
            self.cursor = self.draft.len();
            return true;
        }
        if self.cursor >= self.draft.len() {
            return false;
        }
        self.cursor = self.next_boundary();
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        let changed = self.select_all || self.cursor != 0;
        self.select_all = false;
        self.cursor = 0;
        changed
    }

    pub fn cursor_end(&mut self) -> bool {
        let changed = self.select_all || self.cursor != self.draft.len();
        self.select_all = false;
        self.cursor = self.draft.len();
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerMenuAction {
    NewFile,
    NewFolder,
    Rename,
    Delete,
}

impl ExplorerMenuAction {
    pub fn label(self) -> &'static str {
        match self {
            ExplorerMenuAction::NewFile => "New File",
            ExplorerMenuAction::NewFolder => "New Folder",
            ExplorerMenuAction::Rename => "Rename",
            ExplorerMenuAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuEntry {
    Action(ExplorerMenuAction),
    Separator,
}

impl ContextMenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            ContextMenuEntry::Action(action) => action.label(),
            ContextMenuEntry::Separator => "",
        }
    }

    pub fn action(&self) -> Option<ExplorerMenuAction> {
        match self {
            ContextMenuEntry::Action(action) => Some(*action),
            ContextMenuEntry::Separator => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, ContextMenuEntry::Action(_))
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, ContextMenuEntry::Separator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuState {
    pub anchor: (u16, u16),
    pub target: NodeId,
    pub target_kind: NodeKind,
    pub items: Vec<ContextMenuEntry>,
    pub selected: usize,
}

impl ContextMenuState {
    pub fn items_for(kind: NodeKind) -> Vec<ContextMenuEntry> {
        let mut items = Vec::with_capacity(5);
        if kind == NodeKind::Folder {
            items.push(ContextMenuEntry::Action(ExplorerMenuAction::NewFile));
            items.push(ContextMenuEntry::Action(ExplorerMenuAction::NewFolder));
            items.push(ContextMenuEntry::Separator);
        }
        items.push(ContextMenuEntry::Action(ExplorerMenuAction::Rename));
        items.push(ContextMenuEntry::Action(ExplorerMenuAction::Delete));
        items
    }

    pub fn new(target: NodeId, target_kind: NodeKind, anchor: (u16, u16)) -> Self {
        let items = Self::items_for(target_kind);
        let selected = items
            .iter()
            .position(ContextMenuEntry::is_selectable)
            .unwrap_or(0);
        Self {
            anchor,
            target,
            target_kind,
            items,
            selected,
        }
    }

    pub fn selected_action(&self) -> Option<ExplorerMenuAction> {
        self.items.get(self.selected).and_then(ContextMenuEntry::action)
    }

    /// Moves `delta` selectable entries, wrapping and skipping separators.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.items.is_empty() || delta == 0 {
            return false;
        }
        if !self.items.iter().any(ContextMenuEntry::is_selectable) {
            return false;
        }

        let len = self.items.len() as isize;
        let mut next = self.selected.min(self.items.len() - 1) as isize;
        let step = if delta > 0 { 1 } else { -1 };

        for _ in 0..delta.unsigned_abs() {
            loop {
                next = (next + step).rem_euclid(len);
                if self.items[next as usize].is_selectable() {
                    break;
                }
            }
        }

        let next = next as usize;
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    pub fn set_selected(&mut self, index: usize) -> bool {
        if !self.items.get(index).is_some_and(ContextMenuEntry::is_selectable) {
            return false;
        }
        let changed = index != self.selected;
        self.selected = index;
        changed
    }
}

/// Transient explorer UI state, kept apart from the tree snapshot it
/// describes. `rows` is the visible projection of the current snapshot and is
/// resynced by the store after each tree change.
#[derive(Debug, Clone)]
pub struct ExplorerState {
    selected: Option<NodeId>,
    pub rename: Option<RenameState>,
    pub context_menu: Option<ContextMenuState>,
    pub view_height: usize,
    pub scroll_offset: usize,
    pub rows: Vec<FileTreeRow>,
    index_by_id: FxHashMap<NodeId, usize>,
}

impl ExplorerState {
    pub fn new(tree: &FileTree) -> Self {
        let mut state = Self {
            selected: None,
            rename: None,
            context_menu: None,
            view_height: 10,
            scroll_offset: 0,
            rows: Vec::new(),
            index_by_id: FxHashMap::default(),
        };
        state.sync_rows(tree);
        state
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn set_selected(&mut self, id: Option<NodeId>) -> bool {
        if self.selected == id {
            return false;
        }
        if let Some(index) = id.as_ref().and_then(|id| self.row_index(id)) {
            self.keep_row_visible(index);
        }
        self.selected = id;
        true
    }

    pub fn editing(&self) -> Option<&NodeId> {
        self.rename.as_ref().map(|rename| &rename.id)
    }

    pub fn interaction(&self, id: &NodeId) -> NodeInteraction {
        if self.editing() == Some(id) {
            NodeInteraction::Editing
        } else if self.selected.as_ref() == Some(id) {
            NodeInteraction::Selected
        } else {
            NodeInteraction::Idle
        }
    }

    /// Scrolls so that `id`'s row is on screen.
    pub fn reveal(&mut self, id: &NodeId) -> bool {
        let Some(index) = self.row_index(id) else {
            return false;
        };
        let prev = self.scroll_offset;
        self.keep_row_visible(index);
        self.scroll_offset != prev
    }

    pub fn row(&self, index: usize) -> Option<&FileTreeRow> {
        self.rows.get(index)
    }

    pub fn row_index(&self, id: &NodeId) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Parent for "new file/folder" without an explicit target: the selected
    /// folder, otherwise the top level.
    pub fn create_parent(&self, tree: &FileTree) -> InsertParent {
        match self.selected.as_ref().and_then(|id| tree.find(id)) {
            Some(node) if node.is_folder() => InsertParent::Node(node.id().clone()),
            _ => InsertParent::Root,
        }
    }

    pub fn sync_rows(&mut self, tree: &FileTree) {
        self.rows = tree.flatten_for_view();

        self.index_by_id.clear();
        self.index_by_id.reserve(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            self.index_by_id.insert(row.id.clone(), i);
        }

        self.clamp_scroll();
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;

        match self.selected.as_ref().and_then(|id| self.row_index(id)) {
            Some(index) => self.keep_row_visible(index),
            None => self.clamp_scroll(),
        }
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let Some(current_index) = self.selected.as_ref().and_then(|id| self.row_index(id)) else {
            let new_index = if delta < 0 { self.rows.len() - 1 } else { 0 };
            self.selected = Some(self.rows[new_index].id.clone());
            self.keep_row_visible(new_index);
            return true;
        };

        let new_index = if delta < 0 {
            current_index.saturating_sub(delta.unsigned_abs())
        } else {
            (current_index + delta as usize).min(self.rows.len() - 1)
        };

        if new_index == current_index {
            return false;
        }

        self.selected = Some(self.rows[new_index].id.clone());
        self.keep_row_visible(new_index);
        true
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        let prev = self.scroll_offset;

        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_scroll);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }

        self.scroll_offset != prev
    }

    fn clamp_scroll(&mut self) {
        let view_height = self.view_height.max(1);
        let max_scroll = self.rows.len().saturating_sub(view_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row_index: usize) {
        let view_height = self.view_height.max(1);

        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
            self.clamp_scroll();
            return;
        }

        if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = row_index.saturating_sub(view_height - 1);
        }

        self.clamp_scroll();
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Explorer,
            should_quit: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Current snapshot; replaced wholesale by every edit.
    pub tree: FileTree,
    pub explorer: ExplorerState,
    pub layout: LayoutState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(tree: FileTree, layout: &LayoutSettings) -> Self {
        let explorer = ExplorerState::new(&tree);
        Self {
            tree,
            explorer,
            layout: LayoutState::new(layout),
            ui: UiState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FileTree::seed(), &LayoutSettings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
