//! Seed snapshots: a JSON array of node specs, as produced by
//! [`FileTree::to_specs`].

use std::io;
use std::path::Path;

use tracing::info;

use crate::models::{FileTree, NodeSpec};

pub fn parse_seed(json: &str) -> io::Result<FileTree> {
    let specs: Vec<NodeSpec> = serde_json::from_str(json)?;
    FileTree::from_specs(specs).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

pub fn load_seed_file(path: &Path) -> io::Result<FileTree> {
    let data = std::fs::read_to_string(path)?;
    let tree = parse_seed(&data)?;
    info!(path = %path.display(), nodes = tree.len(), "seed loaded");
    Ok(tree)
}

#[cfg(test)]
#[path = "../../tests/unit/services/seed.rs"]
mod tests;
