//! 数据模型层

pub mod file_tree;
pub mod icon;

pub use file_tree::{
    FileTree, FileTreeError, FileTreeRow, InsertParent, Node, NodeBody, NodeId, NodeKind,
    NodeSpec, DEFAULT_FILE_NAME, DEFAULT_FOLDER_NAME,
};
pub use icon::{icon_for, icon_kind_for, Icon, IconKind, Rgb};
