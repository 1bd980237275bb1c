//! Application layer: the workbench that wires views to the store.

pub mod theme;
mod workbench;

pub use workbench::Workbench;
