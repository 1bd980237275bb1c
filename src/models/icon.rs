//! 文件图标映射（扩展名 -> 图标）

use super::file_tree::{Node, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const FOLDER_YELLOW: Rgb = Rgb(0xea, 0xb3, 0x08);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    FolderOpen,
    FolderClosed,
    Script,
    Json,
    Markdown,
    Html,
    Css,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub kind: IconKind,
    pub glyph: &'static str,
    /// `None` keeps the surrounding text colour.
    pub color: Option<Rgb>,
}

impl IconKind {
    pub fn icon(self) -> Icon {
        let (glyph, color) = match self {
            IconKind::FolderOpen => ("📂", Some(FOLDER_YELLOW)),
            IconKind::FolderClosed => ("📁", Some(FOLDER_YELLOW)),
            IconKind::Script => ("📜", Some(Rgb(0xf7, 0xdf, 0x1e))),
            IconKind::Json => ("📜", Some(Rgb(0x53, 0x82, 0xa1))),
            IconKind::Markdown => ("📜", Some(Rgb(0x09, 0x69, 0xda))),
            IconKind::Html => ("📜", Some(Rgb(0xe3, 0x4c, 0x26))),
            IconKind::Css => ("📜", Some(Rgb(0x26, 0x4d, 0xe4))),
            IconKind::File => ("📄", None),
        };
        Icon {
            kind: self,
            glyph,
            color,
        }
    }
}

/// Text after the last `.`; a name without a dot is its own extension.
pub fn extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

pub fn file_icon_kind(name: &str) -> IconKind {
    match extension(name) {
        "js" | "jsx" => IconKind::Script,
        "json" => IconKind::Json,
        "md" => IconKind::Markdown,
        "html" => IconKind::Html,
        "css" => IconKind::Css,
        _ => IconKind::File,
    }
}

pub fn folder_icon_kind(is_open: bool) -> IconKind {
    if is_open {
        IconKind::FolderOpen
    } else {
        IconKind::FolderClosed
    }
}

pub fn icon_kind_for(kind: NodeKind, name: &str, is_open: bool) -> IconKind {
    match kind {
        NodeKind::Folder => folder_icon_kind(is_open),
        NodeKind::File => file_icon_kind(name),
    }
}

pub fn icon_for(node: &Node) -> Icon {
    icon_kind_for(node.kind(), node.name(), node.is_open()).icon()
}

/// Expand/collapse caret; files get blank padding of the same width.
pub fn caret(kind: NodeKind, is_open: bool) -> &'static str {
    match (kind, is_open) {
        (NodeKind::Folder, true) => "▼ ",
        (NodeKind::Folder, false) => "▶ ",
        (NodeKind::File, _) => "  ",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/icon.rs"]
mod tests;
