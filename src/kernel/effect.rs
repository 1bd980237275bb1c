use crate::models::NodeId;

/// Work the store asks the front end to run after the next frame is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Focus the inline rename input of `id` and select its whole text.
    FocusRenameInput { id: NodeId },
}
