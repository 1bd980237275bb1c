use crate::kernel::layout::Splitter;
use crate::kernel::state::{ExplorerMenuAction, FocusTarget};
use crate::models::{InsertParent, NodeId, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SetFocus(FocusTarget),
    ExplorerSetViewHeight {
        height: usize,
    },
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerScroll {
        delta: isize,
    },
    /// Primary click on a visible row (index into the flattened rows).
    ExplorerClickRow {
        row: usize,
    },
    /// Enter on the selection: folders toggle.
    ExplorerActivate,
    ExplorerToggle {
        id: NodeId,
    },
    ExplorerCreate {
        parent: InsertParent,
        kind: NodeKind,
    },
    /// Create under the selected folder, or at the top level.
    ExplorerCreateAtSelection {
        kind: NodeKind,
    },
    ExplorerDelete {
        id: NodeId,
    },
    ExplorerDeleteSelected,
    ExplorerRefresh,
    RenameStart {
        id: NodeId,
    },
    RenameStartSelected,
    RenameAppend(char),
    RenameBackspace,
    RenameDelete,
    RenameCursorLeft,
    RenameCursorRight,
    RenameCursorHome,
    RenameCursorEnd,
    RenameSelectAll,
    /// Enter, or the input losing focus.
    RenameCommit,
    RenameCancel,
    ContextMenuOpen {
        id: NodeId,
        x: u16,
        y: u16,
    },
    ContextMenuClose,
    ContextMenuMoveSelection {
        delta: isize,
    },
    ContextMenuSetSelected {
        index: usize,
    },
    ContextMenuConfirm,
    ContextMenuChoose(ExplorerMenuAction),
    LayoutBeginDrag {
        splitter: Splitter,
        at: u16,
    },
    LayoutDragTo {
        at: u16,
    },
    LayoutEndDrag,
}
