//! Terminal views: pure rendering plus hit-testing. State lives in the store.

pub mod explorer;
pub mod layout;
pub mod panels;

pub use explorer::{ContextMenuView, ExplorerHit, ExplorerView, HeaderButton, MenuHit};
pub use layout::WorkbenchLayout;
