//! 文件树数据模型（不可变快照 + 结构共享）

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::{fmt, rc::Rc};

pub const DEFAULT_FILE_NAME: &str = "newfile.txt";
pub const DEFAULT_FOLDER_NAME: &str = "New Folder";

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(CompactString);

impl NodeId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

impl NodeKind {
    pub fn default_name(self) -> &'static str {
        match self {
            NodeKind::File => DEFAULT_FILE_NAME,
            NodeKind::Folder => DEFAULT_FOLDER_NAME,
        }
    }
}

/// Where a new node is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertParent {
    Root,
    Node(NodeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTreeError {
    InvalidNodeId,
    NotFolder,
    EmptyName,
    DuplicateId(NodeId),
    ChildrenOnFile(NodeId),
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::InvalidNodeId => write!(f, "invalid node id"),
            FileTreeError::NotFolder => write!(f, "node is not a folder"),
            FileTreeError::EmptyName => write!(f, "name must not be empty"),
            FileTreeError::DuplicateId(id) => write!(f, "duplicate node id {id}"),
            FileTreeError::ChildrenOnFile(id) => {
                write!(f, "file node {id} cannot have children")
            }
        }
    }
}

impl std::error::Error for FileTreeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    File,
    Folder {
        is_open: bool,
        children: Vec<Rc<Node>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: CompactString,
    body: NodeBody,
}

impl Node {
    pub fn file(id: NodeId, name: impl Into<CompactString>) -> Self {
        Self {
            id,
            name: name.into(),
            body: NodeBody::File,
        }
    }

    pub fn folder(
        id: NodeId,
        name: impl Into<CompactString>,
        is_open: bool,
        children: Vec<Rc<Node>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            body: NodeBody::Folder { is_open, children },
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::File => NodeKind::File,
            NodeBody::Folder { .. } => NodeKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == NodeKind::Folder
    }

    /// Always `false` for files.
    pub fn is_open(&self) -> bool {
        matches!(self.body, NodeBody::Folder { is_open: true, .. })
    }

    /// Empty for files.
    pub fn children(&self) -> &[Rc<Node>] {
        match &self.body {
            NodeBody::File => &[],
            NodeBody::Folder { children, .. } => children,
        }
    }

    fn with_name(&self, name: CompactString) -> Self {
        Self {
            id: self.id.clone(),
            name,
            body: self.body.clone(),
        }
    }

    fn with_children(&self, is_open: bool, children: Vec<Rc<Node>>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            body: NodeBody::Folder { is_open, children },
        }
    }
}

/// Seed format: one JSON object per node, children nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSpec {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeSpec>>,
}

enum Edit {
    Replace(Node),
    Remove,
}

/// Rebuilds `nodes` with `edit` applied to the node whose id is `id`.
///
/// Only the nodes on the path from the match up to `nodes` are reallocated;
/// every other `Rc` is carried over as is. `Ok(None)` means `id` does not
/// occur in this forest.
fn rewrite(
    nodes: &[Rc<Node>],
    id: &NodeId,
    edit: &mut dyn FnMut(&Node) -> Result<Edit, FileTreeError>,
) -> Result<Option<Vec<Rc<Node>>>, FileTreeError> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == *id {
            let mut next = nodes.to_vec();
            match edit(node)? {
                Edit::Replace(replacement) => next[index] = Rc::new(replacement),
                Edit::Remove => {
                    next.remove(index);
                }
            }
            return Ok(Some(next));
        }

        if let NodeBody::Folder { is_open, children } = &node.body {
            if let Some(children) = rewrite(children, id, edit)? {
                let mut next = nodes.to_vec();
                next[index] = Rc::new(node.with_children(*is_open, children));
                return Ok(Some(next));
            }
        }
    }
    Ok(None)
}

fn find_in<'a>(nodes: &'a [Rc<Node>], id: &NodeId) -> Option<&'a Rc<Node>> {
    for node in nodes {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }
    None
}

fn node_from_spec(
    spec: NodeSpec,
    seen: &mut FxHashSet<NodeId>,
) -> Result<Rc<Node>, FileTreeError> {
    let id = NodeId::new(spec.id);
    if !seen.insert(id.clone()) {
        return Err(FileTreeError::DuplicateId(id));
    }

    let node = match spec.kind {
        NodeKind::File => {
            if spec.children.as_ref().is_some_and(|c| !c.is_empty()) {
                return Err(FileTreeError::ChildrenOnFile(id));
            }
            Node::file(id, spec.name)
        }
        NodeKind::Folder => {
            let children = spec
                .children
                .unwrap_or_default()
                .into_iter()
                .map(|child| node_from_spec(child, seen))
                .collect::<Result<Vec<_>, _>>()?;
            Node::folder(id, spec.name, spec.is_open.unwrap_or(false), children)
        }
    };
    Ok(Rc::new(node))
}

fn spec_from_node(node: &Node) -> NodeSpec {
    match &node.body {
        NodeBody::File => NodeSpec {
            id: node.id.to_string(),
            name: node.name.to_string(),
            kind: NodeKind::File,
            is_open: None,
            children: None,
        },
        NodeBody::Folder { is_open, children } => NodeSpec {
            id: node.id.to_string(),
            name: node.name.to_string(),
            kind: NodeKind::Folder,
            is_open: Some(*is_open),
            children: Some(children.iter().map(|c| spec_from_node(c)).collect()),
        },
    }
}

/// One snapshot of the explorer tree.
///
/// Every edit returns a new snapshot; the receiver is never modified. Cloning
/// a snapshot is cheap since nodes are shared through `Rc`.
#[derive(Debug, Clone)]
pub struct FileTree {
    roots: Vec<Rc<Node>>,
    next_id: u64,
}

impl FileTree {
    pub fn from_nodes(roots: Vec<Rc<Node>>) -> Result<Self, FileTreeError> {
        let mut seen = FxHashSet::default();
        let mut stack: Vec<&Rc<Node>> = roots.iter().collect();
        while let Some(node) = stack.pop() {
            if !seen.insert(node.id.clone()) {
                return Err(FileTreeError::DuplicateId(node.id.clone()));
            }
            stack.extend(node.children());
        }

        let next_id = seen
            .iter()
            .filter_map(NodeId::numeric)
            .max()
            .and_then(|max| max.checked_add(1))
            .unwrap_or(1);
        Ok(Self { roots, next_id })
    }

    pub fn from_specs(specs: Vec<NodeSpec>) -> Result<Self, FileTreeError> {
        let mut seen = FxHashSet::default();
        let roots = specs
            .into_iter()
            .map(|spec| node_from_spec(spec, &mut seen))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_nodes(roots)
    }

    pub fn to_specs(&self) -> Vec<NodeSpec> {
        self.roots.iter().map(|node| spec_from_node(node)).collect()
    }

    /// The snapshot the explorer starts with.
    pub fn seed() -> Self {
        fn file(id: &str, name: &str) -> Rc<Node> {
            Rc::new(Node::file(id.into(), name))
        }
        fn folder(id: &str, name: &str, children: Vec<Rc<Node>>) -> Rc<Node> {
            Rc::new(Node::folder(id.into(), name, false, children))
        }

        let roots = vec![
            folder(
                "1",
                "src",
                vec![
                    folder(
                        "2",
                        "components",
                        vec![file("3", "App.jsx"), file("4", "Header.jsx")],
                    ),
                    folder("5", "utils", Vec::new()),
                    file("6", "index.js"),
                ],
            ),
            folder("7", "public", vec![file("8", "index.html")]),
            file("9", "package.json"),
            file("10", "README.md"),
        ];

        Self { roots, next_id: 11 }
    }

    pub fn roots(&self) -> &[Rc<Node>] {
        &self.roots
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.ids().len()
    }

    /// All ids in depth-first pre-order.
    pub fn ids(&self) -> Vec<&NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<&Rc<Node>> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.id);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    pub fn find(&self, id: &NodeId) -> Option<&Rc<Node>> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Whether `id` lies strictly below `ancestor`.
    pub fn is_descendant(&self, ancestor: &NodeId, id: &NodeId) -> bool {
        self.find(ancestor)
            .is_some_and(|node| find_in(node.children(), id).is_some())
    }

    fn with_roots(&self, roots: Vec<Rc<Node>>) -> Self {
        Self {
            roots,
            next_id: self.next_id,
        }
    }

    /// Next free numeric id. Past `u64::MAX` the counter wraps to 1 and
    /// keeps skipping taken ids; a finite tree always leaves one free.
    fn allocate_id(&self) -> (NodeId, u64) {
        let mut counter = self.next_id;
        loop {
            let id = NodeId::new(counter.to_string());
            counter = counter.checked_add(1).unwrap_or(1);
            if !self.contains(&id) {
                return (id, counter);
            }
        }
    }

    /// Flips `is_open` on the folder `id`. Unknown ids and files leave the
    /// snapshot untouched.
    pub fn toggle(&self, id: &NodeId) -> Self {
        let result = rewrite(&self.roots, id, &mut |node: &Node| match &node.body {
            NodeBody::Folder { is_open, children } => {
                Ok(Edit::Replace(node.with_children(!is_open, children.clone())))
            }
            NodeBody::File => Err(FileTreeError::NotFolder),
        });

        match result {
            Ok(Some(roots)) => self.with_roots(roots),
            Ok(None) | Err(_) => self.clone(),
        }
    }

    /// Appends a fresh node named after `kind`'s default name and returns the
    /// new snapshot together with the generated id. Inserting under a folder
    /// also opens it.
    pub fn insert(
        &self,
        parent: &InsertParent,
        kind: NodeKind,
    ) -> Result<(Self, NodeId), FileTreeError> {
        let (id, next_id) = self.allocate_id();
        let node = Rc::new(match kind {
            NodeKind::File => Node::file(id.clone(), DEFAULT_FILE_NAME),
            NodeKind::Folder => Node::folder(id.clone(), DEFAULT_FOLDER_NAME, false, Vec::new()),
        });

        let roots = match parent {
            InsertParent::Root => {
                let mut roots = self.roots.clone();
                roots.push(node);
                roots
            }
            InsertParent::Node(parent_id) => {
                let mut node = Some(node);
                rewrite(&self.roots, parent_id, &mut |parent: &Node| match &parent.body {
                    NodeBody::Folder { children, .. } => {
                        let mut children = children.clone();
                        children.extend(node.take());
                        Ok(Edit::Replace(parent.with_children(true, children)))
                    }
                    NodeBody::File => Err(FileTreeError::NotFolder),
                })?
                .ok_or(FileTreeError::InvalidNodeId)?
            }
        };

        Ok((Self { roots, next_id }, id))
    }

    /// Removes `id` together with its whole subtree.
    pub fn delete(&self, id: &NodeId) -> Result<Self, FileTreeError> {
        let roots = rewrite(&self.roots, id, &mut |_: &Node| Ok(Edit::Remove))?
            .ok_or(FileTreeError::InvalidNodeId)?;
        Ok(self.with_roots(roots))
    }

    /// Renames `id`. The name is stored as given; one that is blank after
    /// trimming is refused.
    pub fn rename(&self, id: &NodeId, new_name: &str) -> Result<Self, FileTreeError> {
        if new_name.trim().is_empty() {
            return Err(FileTreeError::EmptyName);
        }

        let name = CompactString::from(new_name);
        let roots = rewrite(&self.roots, id, &mut |node: &Node| {
            Ok(Edit::Replace(node.with_name(name.clone())))
        })?
        .ok_or(FileTreeError::InvalidNodeId)?;
        Ok(self.with_roots(roots))
    }
}

impl Default for FileTree {
    fn default() -> Self {
        Self::seed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub kind: NodeKind,
    pub is_open: bool,
}

impl FileTreeRow {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

impl FileTree {
    /// Visible rows in display order: children of closed folders are skipped.
    pub fn flatten_for_view(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(&Rc<Node>, u16)> =
            self.roots.iter().rev().map(|node| (node, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            result.push(FileTreeRow {
                id: node.id.clone(),
                depth,
                name: node.name.clone(),
                kind: node.kind(),
                is_open: node.is_open(),
            });

            if node.is_open() {
                for child in node.children().iter().rev() {
                    stack.push((child, depth.saturating_add(1)));
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
