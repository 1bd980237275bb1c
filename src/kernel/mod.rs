//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod layout;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use layout::{Axis, LayoutSettings, LayoutState, PanelSplit, SplitConfig, Splitter};
pub use state::{
    AppState, ContextMenuEntry, ContextMenuState, ExplorerMenuAction, ExplorerState, FocusTarget,
    NodeInteraction, RenameState, UiState,
};
pub use store::{DispatchResult, Store};
